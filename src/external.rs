//! Interface types for the two collaborator contracts: the marketplace
//! (direct listings, English auctions, offers) and the drop-style mint
//! surface of the NFT collection. The cw721 side of the collection comes
//! from the `cw721` crate; the messages here have no published crate.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Coin, Uint128};

/// Fixed-price sale of a token, as reported by the marketplace.
#[cw_serde]
pub struct DirectListing {
    pub listing_id: u64,
    pub seller: String,
    pub token_id: String,
    pub price: Coin,
}

/// Ascending-bid auction with a buyout price, as reported by the marketplace.
#[cw_serde]
pub struct EnglishAuction {
    pub auction_id: u64,
    pub seller: String,
    pub token_id: String,
    pub buyout_price: Coin,
    pub minimum_bid: Coin,
}

#[cw_serde]
pub enum MarketplaceQueryMsg {
    /// The currently active direct listing for the token, if any.
    ValidDirectListing {
        token_contract: String,
        token_id: String,
    },
    /// The currently active English auction for the token, if any.
    ValidEnglishAuction {
        token_contract: String,
        token_id: String,
    },
}

#[cw_serde]
pub struct DirectListingResponse {
    pub listing: Option<DirectListing>,
}

#[cw_serde]
pub struct EnglishAuctionResponse {
    pub auction: Option<EnglishAuction>,
}

/// Marketplace transactions paid with native funds attached to the call.
#[cw_serde]
pub enum MarketplaceExecuteMsg {
    BuyFromListing { listing_id: u64, quantity: u64 },
    BuyoutAuction { auction_id: u64 },
    MakeBid { auction_id: u64, amount: Uint128 },
    MakeOffer {
        token_contract: String,
        token_id: String,
        price: Uint128,
    },
}

/// The same transactions paid in a cw20 token; the amount rides the
/// `Cw20ExecuteMsg::Send` that carries this message.
#[cw_serde]
pub enum MarketplaceReceiveMsg {
    BuyFromListing { listing_id: u64, quantity: u64 },
    BuyoutAuction { auction_id: u64 },
    MakeBid { auction_id: u64 },
    MakeOffer {
        token_contract: String,
        token_id: String,
    },
}

/// Active minting phase of a drop-style collection.
#[cw_serde]
pub struct ClaimCondition {
    pub name: Option<String>,
    pub price: Coin,
    pub available_supply: Uint128,
    pub max_claimable_supply: Uint128,
    pub max_claimable_per_wallet: Option<u32>,
}

#[cw_serde]
pub struct ClaimConditionResponse {
    pub condition: Option<ClaimCondition>,
}

#[cw_serde]
pub enum CollectionQueryMsg {
    ActiveClaimCondition { token_id: String },
}

#[cw_serde]
pub enum CollectionExecuteMsg {
    Claim { token_id: String, quantity: u64 },
}

/// On-chain metadata extension carried by the collection's `NftInfo`.
#[cw_serde]
pub struct TokenMetadata {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub attributes: Option<Vec<Trait>>,
}

#[cw_serde]
pub struct Trait {
    pub trait_type: String,
    pub value: String,
}
