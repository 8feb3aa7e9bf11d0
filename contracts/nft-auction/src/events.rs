use commons::{ContractTokenId, AUCTION_CREATED_TAG, AUCTION_ENDED_TAG, BID_PLACED_TAG};
use concordium_std::*;

/// Auction creation event data.
#[derive(Debug, Serialize, SchemaType, PartialEq, Eq)]
pub struct AuctionCreatedEvent {
    /// NFT token identifier.
    pub token_id: ContractTokenId,
    /// Bids must be above this amount.
    pub starting_price: Amount,
    /// Auction deadline.
    pub end_time: Timestamp,
}

/// Bid event data.
#[derive(Debug, Serialize, SchemaType, PartialEq, Eq)]
pub struct BidPlacedEvent {
    /// NFT token identifier.
    pub token_id: ContractTokenId,
    /// Bidder account address.
    pub bidder: AccountAddress,
    /// Bid amount.
    pub amount: Amount,
}

/// Auction end event data.
#[derive(Debug, Serialize, SchemaType, PartialEq, Eq)]
pub struct AuctionEndedEvent {
    /// NFT token identifier.
    pub token_id: ContractTokenId,
    /// New token owner. `None` if nobody bid and the seller keeps the token.
    pub winner: Option<AccountAddress>,
    /// Winning bid paid to the seller.
    pub amount: Amount,
}

/// Tagged Custom event to be serialized for the event log.
#[derive(Debug, PartialEq, Eq)]
pub enum AuctionEvent {
    Created(AuctionCreatedEvent),
    BidPlaced(BidPlacedEvent),
    Ended(AuctionEndedEvent),
}

impl AuctionEvent {
    pub fn created(token_id: ContractTokenId, starting_price: Amount, end_time: Timestamp) -> Self {
        Self::Created(AuctionCreatedEvent {
            token_id,
            starting_price,
            end_time,
        })
    }

    pub fn bid_placed(token_id: ContractTokenId, bidder: AccountAddress, amount: Amount) -> Self {
        Self::BidPlaced(BidPlacedEvent {
            token_id,
            bidder,
            amount,
        })
    }

    pub fn ended(
        token_id: ContractTokenId,
        winner: Option<AccountAddress>,
        amount: Amount,
    ) -> Self {
        Self::Ended(AuctionEndedEvent {
            token_id,
            winner,
            amount,
        })
    }
}

impl Serial for AuctionEvent {
    fn serial<W: Write>(&self, out: &mut W) -> Result<(), W::Err> {
        match self {
            AuctionEvent::Created(event) => {
                out.write_u8(AUCTION_CREATED_TAG)?;
                event.serial(out)
            }
            AuctionEvent::BidPlaced(event) => {
                out.write_u8(BID_PLACED_TAG)?;
                event.serial(out)
            }
            AuctionEvent::Ended(event) => {
                out.write_u8(AUCTION_ENDED_TAG)?;
                event.serial(out)
            }
        }
    }
}

impl Deserial for AuctionEvent {
    fn deserial<R: Read>(source: &mut R) -> ParseResult<Self> {
        let tag = source.read_u8()?;
        match tag {
            AUCTION_CREATED_TAG => AuctionCreatedEvent::deserial(source).map(AuctionEvent::Created),
            BID_PLACED_TAG => BidPlacedEvent::deserial(source).map(AuctionEvent::BidPlaced),
            AUCTION_ENDED_TAG => AuctionEndedEvent::deserial(source).map(AuctionEvent::Ended),
            _ => Err(ParseError::default()),
        }
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;

    #[concordium_test]
    fn test_event_tags_do_not_clash_with_cis2() {
        // CIS2 reserves tags 251 to 255
        for tag in [AUCTION_CREATED_TAG, BID_PLACED_TAG, AUCTION_ENDED_TAG] {
            claim!(tag < 251);
        }
    }

    #[concordium_test]
    fn test_ended_event_parses_back() {
        let event = AuctionEvent::ended(
            concordium_cis2::TokenIdU32(7),
            Some(AccountAddress([3; 32])),
            Amount::from_ccd(2),
        );
        let bytes = to_bytes(&event);
        claim_eq!(bytes[0], AUCTION_ENDED_TAG);
        claim_eq!(from_bytes::<AuctionEvent>(&bytes), Ok(event));
    }
}
