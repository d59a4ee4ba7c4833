use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Coin, Uint128};
use cw20::Cw20ReceiveMsg;
use cw721::ContractInfoResponse;

use crate::external::{ClaimConditionResponse, TokenMetadata};
use crate::sale::ActiveSale;
use crate::state::Config;

#[cw_serde]
pub struct InstantiateMsg {
    pub marketplace_address: String,
    pub collection_address: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Buy the token outright at its current sale price: buys out an active
    /// auction, otherwise buys from the direct listing.
    Buy {
        token_id: String,
    },
    /// Bid on an active auction, or place an offer on a direct listing.
    /// Without an amount the call does nothing.
    PlaceBid {
        token_id: String,
        amount: Option<Uint128>,
    },
    /// Mint the token through the collection's active claim phase.
    Claim {
        token_id: String,
    },
    UpdateConfig {
        marketplace_address: Option<String>,
        collection_address: Option<String>,
    },
    Receive(Cw20ReceiveMsg),
}

/// Actions embedded in a cw20 `Send`; the sent amount is the payment.
#[cw_serde]
pub enum ReceiveMsg {
    Buy { token_id: String },
    PlaceBid { token_id: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ActiveSale)]
    GetActiveSale { token_id: String },
    #[returns(DisplayPriceResponse)]
    GetDisplayPrice { token_id: String },
    #[returns(MinimumBidResponse)]
    GetMinimumBid { token_id: String },
    #[returns(ClaimConditionResponse)]
    GetActiveClaimCondition { token_id: String },
    #[returns(TokenInfoResponse)]
    GetTokenInfo { token_id: String },
    #[returns(CollectionInfoResponse)]
    GetCollectionInfo {},
    #[returns(Config)]
    GetConfig {},
}

#[cw_serde]
pub struct DisplayPriceResponse {
    /// `None` when the token is not for sale.
    pub price: Option<Coin>,
}

#[cw_serde]
pub struct MinimumBidResponse {
    /// `None` when there is no active auction.
    pub minimum_bid: Option<Coin>,
}

#[cw_serde]
pub struct TokenInfoResponse {
    pub owner: String,
    pub token_uri: Option<String>,
    pub metadata: Option<TokenMetadata>,
}

#[cw_serde]
pub struct CollectionInfoResponse {
    /// `None` when the collection does not expose metadata.
    pub info: Option<ContractInfoResponse>,
}

#[cw_serde]
pub struct MigrateMsg {}
