use cosmwasm_schema::cw_serde;
use cosmwasm_std::Coin;

use crate::external::{DirectListing, EnglishAuction};

/// The sale mechanism a token is currently under, resolved from the
/// marketplace's two per-token snapshots.
#[cw_serde]
pub enum ActiveSale {
    /// Neither listing kind is active. The token is not for sale, though it
    /// may still be mintable through the collection's claim path.
    None,
    Direct(DirectListing),
    Auction(EnglishAuction),
}

impl ActiveSale {
    /// Resolves the two optional snapshots into a single sale state.
    ///
    /// Priority rule: an English auction always wins over a direct listing,
    /// for price display and for buy/bid routing alike. Absence of both is
    /// a valid terminal state, not an error.
    pub fn resolve(direct: Option<DirectListing>, auction: Option<EnglishAuction>) -> Self {
        match (direct, auction) {
            (_, Some(auction)) => ActiveSale::Auction(auction),
            (Some(listing), None) => ActiveSale::Direct(listing),
            (None, None) => ActiveSale::None,
        }
    }

    /// The canonical price to display: the asking price of a direct listing,
    /// the buyout price of an auction, nothing when the token is not for sale.
    pub fn display_price(&self) -> Option<&Coin> {
        match self {
            ActiveSale::Direct(listing) => Some(&listing.price),
            ActiveSale::Auction(auction) => Some(&auction.buyout_price),
            ActiveSale::None => None,
        }
    }

    /// The lowest acceptable bid; only auctions take bids.
    pub fn minimum_bid(&self) -> Option<&Coin> {
        match self {
            ActiveSale::Auction(auction) => Some(&auction.minimum_bid),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::coin;

    use super::*;

    fn direct_listing() -> DirectListing {
        DirectListing {
            listing_id: 7,
            seller: "seller".to_string(),
            token_id: "42".to_string(),
            price: coin(1_500_000, "umatic"),
        }
    }

    fn english_auction() -> EnglishAuction {
        EnglishAuction {
            auction_id: 3,
            seller: "seller".to_string(),
            token_id: "42".to_string(),
            buyout_price: coin(2_000_000, "umatic"),
            minimum_bid: coin(1_000_000, "umatic"),
        }
    }

    #[test]
    fn neither_listing_is_not_for_sale() {
        let sale = ActiveSale::resolve(None, None);
        assert_eq!(sale, ActiveSale::None);
        assert_eq!(sale.display_price(), None);
        assert_eq!(sale.minimum_bid(), None);
    }

    #[test]
    fn direct_listing_only_displays_asking_price() {
        let sale = ActiveSale::resolve(Some(direct_listing()), None);
        assert_eq!(sale, ActiveSale::Direct(direct_listing()));
        assert_eq!(sale.display_price(), Some(&coin(1_500_000, "umatic")));
        // a direct listing takes offers, not bids
        assert_eq!(sale.minimum_bid(), None);
    }

    #[test]
    fn auction_only_displays_buyout_and_minimum_bid() {
        let sale = ActiveSale::resolve(None, Some(english_auction()));
        assert_eq!(sale, ActiveSale::Auction(english_auction()));
        assert_eq!(sale.display_price(), Some(&coin(2_000_000, "umatic")));
        assert_eq!(sale.minimum_bid(), Some(&coin(1_000_000, "umatic")));
    }

    #[test]
    fn auction_wins_over_direct_listing() {
        let sale = ActiveSale::resolve(Some(direct_listing()), Some(english_auction()));
        assert_eq!(sale, ActiveSale::Auction(english_auction()));
        assert_eq!(sale.display_price(), Some(&coin(2_000_000, "umatic")));
        assert_eq!(sale.minimum_bid(), Some(&coin(1_000_000, "umatic")));
    }
}
