// Tags 255 to 251 are taken by the CIS-2 standard events.

/// Tag for the Custom Auction Created event.
pub const AUCTION_CREATED_TAG: u8 = u8::MAX - 8;

/// Tag for the Custom Bid Placed event.
pub const BID_PLACED_TAG: u8 = u8::MAX - 11;

/// Tag for the Custom Auction Ended event.
pub const AUCTION_ENDED_TAG: u8 = u8::MAX - 12;

