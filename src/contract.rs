#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    from_json, to_json_binary, Addr, Binary, CosmosMsg, Deps, DepsMut, Env, MessageInfo, Response,
    StdResult, Uint128, WasmMsg,
};
use cw2::{get_contract_version, set_contract_version};
use cw20::{Cw20Contract, Cw20ExecuteMsg, Cw20ReceiveMsg};
use cw721::{ContractInfoResponse, Cw721QueryMsg, NftInfoResponse, OwnerOfResponse};
use cw_utils::nonpayable;
use semver::Version;

use crate::error::ContractError;
use crate::external::{
    ClaimConditionResponse, CollectionExecuteMsg, CollectionQueryMsg, DirectListingResponse,
    EnglishAuctionResponse, MarketplaceExecuteMsg, MarketplaceQueryMsg, MarketplaceReceiveMsg,
    TokenMetadata,
};
use crate::msg::{
    CollectionInfoResponse, DisplayPriceResponse, ExecuteMsg, InstantiateMsg, MigrateMsg,
    MinimumBidResponse, QueryMsg, ReceiveMsg, TokenInfoResponse,
};
use crate::sale::ActiveSale;
use crate::state::{Config, CONFIG};

pub const CONTRACT_NAME: &str = "nft-storefront";
pub const CONTRACT_VERSION: &str = "0.1.0";

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config {
        owner: info.sender,
        marketplace_address: deps.api.addr_validate(&msg.marketplace_address)?,
        collection_address: deps.api.addr_validate(&msg.collection_address)?,
    };

    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("marketplace", config.marketplace_address)
        .add_attribute("collection", config.collection_address))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Buy { token_id } => execute_buy(deps, info, token_id),
        ExecuteMsg::PlaceBid { token_id, amount } => {
            execute_place_bid(deps, info, token_id, amount)
        }
        ExecuteMsg::Claim { token_id } => execute_claim(deps, info, token_id),
        ExecuteMsg::UpdateConfig {
            marketplace_address,
            collection_address,
        } => execute_update_config(deps, info, marketplace_address, collection_address),
        ExecuteMsg::Receive(msg) => execute_receive(deps, info, msg),
    }
}

/// Buys the token outright. An active auction is bought out in preference to
/// a direct listing; see [`ActiveSale::resolve`] for the priority rule.
pub fn execute_buy(
    deps: DepsMut,
    info: MessageInfo,
    token_id: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let market_msg = match query_active_sale(deps.as_ref(), &config, &token_id)? {
        ActiveSale::Auction(auction) => MarketplaceExecuteMsg::BuyoutAuction {
            auction_id: auction.auction_id,
        },
        ActiveSale::Direct(listing) => MarketplaceExecuteMsg::BuyFromListing {
            listing_id: listing.listing_id,
            quantity: 1,
        },
        ActiveSale::None => return Err(ContractError::NoListingFound {}),
    };

    // payment is validated by the marketplace, not here
    let buy = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.marketplace_address.to_string(),
        msg: to_json_binary(&market_msg)?,
        funds: info.funds,
    });

    Ok(Response::new()
        .add_attribute("action", "buy")
        .add_attribute("NFT", token_id)
        .add_attribute("buyer", info.sender.to_string())
        .add_message(buy))
}

/// Bids on an active auction, or places an offer the seller may accept later
/// when the token is only under direct listing.
pub fn execute_place_bid(
    deps: DepsMut,
    info: MessageInfo,
    token_id: String,
    amount: Option<Uint128>,
) -> Result<Response, ContractError> {
    let amount = match amount {
        Some(amount) => amount,
        // nothing entered in the bid box; not an error
        None => {
            return Ok(Response::new()
                .add_attribute("action", "place_bid")
                .add_attribute("NFT", token_id))
        }
    };

    let config = CONFIG.load(deps.storage)?;

    let market_msg = match query_active_sale(deps.as_ref(), &config, &token_id)? {
        ActiveSale::Auction(auction) => MarketplaceExecuteMsg::MakeBid {
            auction_id: auction.auction_id,
            amount,
        },
        ActiveSale::Direct(_) => MarketplaceExecuteMsg::MakeOffer {
            token_contract: config.collection_address.to_string(),
            token_id: token_id.clone(),
            price: amount,
        },
        ActiveSale::None => return Err(ContractError::NoListingFound {}),
    };

    let bid = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.marketplace_address.to_string(),
        msg: to_json_binary(&market_msg)?,
        funds: info.funds,
    });

    Ok(Response::new()
        .add_attribute("action", "place_bid")
        .add_attribute("NFT", token_id)
        .add_attribute("bidder", info.sender.to_string())
        .add_attribute("amount", amount.to_string())
        .add_message(bid))
}

/// Mints the token through the collection's active claim phase. The claim
/// conditions are enforced by the collection.
pub fn execute_claim(
    deps: DepsMut,
    info: MessageInfo,
    token_id: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let claim = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.collection_address.to_string(),
        msg: to_json_binary(&CollectionExecuteMsg::Claim {
            token_id: token_id.clone(),
            quantity: 1,
        })?,
        funds: info.funds,
    });

    Ok(Response::new()
        .add_attribute("action", "claim")
        .add_attribute("NFT", token_id)
        .add_attribute("claimer", info.sender.to_string())
        .add_message(claim))
}

pub fn execute_update_config(
    deps: DepsMut,
    info: MessageInfo,
    marketplace_address: Option<String>,
    collection_address: Option<String>,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;

    let mut config = CONFIG.load(deps.storage)?;

    if config.owner != info.sender {
        return Err(ContractError::Unauthorized {});
    }

    if let Some(marketplace) = marketplace_address {
        config.marketplace_address = deps.api.addr_validate(&marketplace)?;
    }
    if let Some(collection) = collection_address {
        config.collection_address = deps.api.addr_validate(&collection)?;
    }

    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "update_config")
        .add_attribute("marketplace", config.marketplace_address)
        .add_attribute("collection", config.collection_address))
}

pub fn execute_receive(
    deps: DepsMut,
    info: MessageInfo,
    cw20_receive_msg: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    // info.sender is the paying cw20 contract; the marketplace rejects
    // payment in a currency the listing does not accept
    let msg: ReceiveMsg = from_json(&cw20_receive_msg.msg)?;
    match msg {
        ReceiveMsg::Buy { token_id } => receive_buy(
            deps,
            info.sender,
            cw20_receive_msg.sender,
            cw20_receive_msg.amount,
            token_id,
        ),
        ReceiveMsg::PlaceBid { token_id } => receive_place_bid(
            deps,
            info.sender,
            cw20_receive_msg.sender,
            cw20_receive_msg.amount,
            token_id,
        ),
    }
}

pub fn receive_buy(
    deps: DepsMut,
    token_address: Addr,
    sender: String,
    amount: Uint128,
    token_id: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let market_msg = match query_active_sale(deps.as_ref(), &config, &token_id)? {
        ActiveSale::Auction(auction) => MarketplaceReceiveMsg::BuyoutAuction {
            auction_id: auction.auction_id,
        },
        ActiveSale::Direct(listing) => MarketplaceReceiveMsg::BuyFromListing {
            listing_id: listing.listing_id,
            quantity: 1,
        },
        ActiveSale::None => return Err(ContractError::NoListingFound {}),
    };

    let cw20 = Cw20Contract(token_address);

    // forward the payment to the marketplace with the purchase attached
    let payment = cw20.call(Cw20ExecuteMsg::Send {
        contract: config.marketplace_address.to_string(),
        amount,
        msg: to_json_binary(&market_msg)?,
    })?;

    Ok(Response::new()
        .add_attribute("action", "receive_buy")
        .add_attribute("NFT", token_id)
        .add_attribute("buyer", sender)
        .add_message(payment))
}

pub fn receive_place_bid(
    deps: DepsMut,
    token_address: Addr,
    sender: String,
    amount: Uint128,
    token_id: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let market_msg = match query_active_sale(deps.as_ref(), &config, &token_id)? {
        ActiveSale::Auction(auction) => MarketplaceReceiveMsg::MakeBid {
            auction_id: auction.auction_id,
        },
        ActiveSale::Direct(_) => MarketplaceReceiveMsg::MakeOffer {
            token_contract: config.collection_address.to_string(),
            token_id: token_id.clone(),
        },
        ActiveSale::None => return Err(ContractError::NoListingFound {}),
    };

    let cw20 = Cw20Contract(token_address);

    let payment = cw20.call(Cw20ExecuteMsg::Send {
        contract: config.marketplace_address.to_string(),
        amount,
        msg: to_json_binary(&market_msg)?,
    })?;

    Ok(Response::new()
        .add_attribute("action", "receive_place_bid")
        .add_attribute("NFT", token_id)
        .add_attribute("bidder", sender)
        .add_message(payment))
}

/// Fresh per-call snapshots of the token's listings, resolved to one state.
fn query_active_sale(deps: Deps, config: &Config, token_id: &str) -> StdResult<ActiveSale> {
    let direct: DirectListingResponse = deps.querier.query_wasm_smart(
        config.marketplace_address.to_string(),
        &MarketplaceQueryMsg::ValidDirectListing {
            token_contract: config.collection_address.to_string(),
            token_id: token_id.to_string(),
        },
    )?;

    let auction: EnglishAuctionResponse = deps.querier.query_wasm_smart(
        config.marketplace_address.to_string(),
        &MarketplaceQueryMsg::ValidEnglishAuction {
            token_contract: config.collection_address.to_string(),
            token_id: token_id.to_string(),
        },
    )?;

    Ok(ActiveSale::resolve(direct.listing, auction.auction))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let previous = get_contract_version(deps.storage)?;
    if previous.contract != CONTRACT_NAME {
        return Err(ContractError::CannotMigrate {
            previous_contract: previous.contract,
        });
    }

    let version = Version::parse(CONTRACT_VERSION)?;
    if Version::parse(&previous.version)? > version {
        return Err(ContractError::CannotMigrateVersion {
            previous_version: previous.version,
        });
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new().add_attribute("action", "migrate"))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::GetActiveSale { token_id } => to_json_binary(&get_active_sale(deps, token_id)?),
        QueryMsg::GetDisplayPrice { token_id } => {
            to_json_binary(&get_display_price(deps, token_id)?)
        }
        QueryMsg::GetMinimumBid { token_id } => to_json_binary(&get_minimum_bid(deps, token_id)?),
        QueryMsg::GetActiveClaimCondition { token_id } => {
            to_json_binary(&get_active_claim_condition(deps, token_id)?)
        }
        QueryMsg::GetTokenInfo { token_id } => to_json_binary(&get_token_info(deps, token_id)?),
        QueryMsg::GetCollectionInfo {} => to_json_binary(&get_collection_info(deps)?),
        QueryMsg::GetConfig {} => to_json_binary(&CONFIG.load(deps.storage)?),
    }
}

pub fn get_active_sale(deps: Deps, token_id: String) -> StdResult<ActiveSale> {
    let config = CONFIG.load(deps.storage)?;
    query_active_sale(deps, &config, &token_id)
}

pub fn get_display_price(deps: Deps, token_id: String) -> StdResult<DisplayPriceResponse> {
    let sale = get_active_sale(deps, token_id)?;
    Ok(DisplayPriceResponse {
        price: sale.display_price().cloned(),
    })
}

pub fn get_minimum_bid(deps: Deps, token_id: String) -> StdResult<MinimumBidResponse> {
    let sale = get_active_sale(deps, token_id)?;
    Ok(MinimumBidResponse {
        minimum_bid: sale.minimum_bid().cloned(),
    })
}

pub fn get_active_claim_condition(
    deps: Deps,
    token_id: String,
) -> StdResult<ClaimConditionResponse> {
    let config = CONFIG.load(deps.storage)?;

    // a collection without a claim interface is a valid target
    let condition = deps
        .querier
        .query_wasm_smart::<ClaimConditionResponse>(
            config.collection_address.to_string(),
            &CollectionQueryMsg::ActiveClaimCondition { token_id },
        )
        .ok()
        .and_then(|res| res.condition);

    Ok(ClaimConditionResponse { condition })
}

pub fn get_token_info(deps: Deps, token_id: String) -> StdResult<TokenInfoResponse> {
    let config = CONFIG.load(deps.storage)?;

    let owner: OwnerOfResponse = deps.querier.query_wasm_smart(
        config.collection_address.to_string(),
        &Cw721QueryMsg::OwnerOf {
            token_id: token_id.clone(),
            include_expired: Some(false),
        },
    )?;

    let info: NftInfoResponse<Option<TokenMetadata>> = deps.querier.query_wasm_smart(
        config.collection_address.to_string(),
        &Cw721QueryMsg::NftInfo { token_id },
    )?;

    Ok(TokenInfoResponse {
        owner: owner.owner,
        token_uri: info.token_uri,
        metadata: info.extension,
    })
}

pub fn get_collection_info(deps: Deps) -> StdResult<CollectionInfoResponse> {
    let config = CONFIG.load(deps.storage)?;

    // the collection may not expose metadata
    let info = deps
        .querier
        .query_wasm_smart::<ContractInfoResponse>(
            config.collection_address.to_string(),
            &Cw721QueryMsg::ContractInfo {},
        )
        .ok();

    Ok(CollectionInfoResponse { info })
}
