use super::*;

/// The custom errors the contract can produce.
#[derive(Serialize, Debug, PartialEq, Eq, Reject, SchemaType)]
pub enum CustomContractError {
    /// Failed parsing the parameter (Error code: -1).
    #[from(ParseError)]
    ParseParams,
    /// Failed logging: Log is full (Error code: -2).
    LogFull,
    /// Failed logging: Log is malformed (Error code: -3).
    LogMalformed,
    /// Failed to invoke a contract (Error code: -4).
    InvokeContractError,
    /// Failed to invoke a transfer (Error code: -5).
    InvokeTransferError,
    /// Unauthorized (Error code: -6)
    Unauthorized,
    /// Only account addresses can create auctions and bid (Error code: -7).
    OnlyAccountAddress,
    /// Only the owner of the token can create an auction (Error code: -8).
    NotTokenOwner,
    /// An auction is already active for this token (Error code: -9).
    AuctionAlreadyActive,
    /// No active auction exists for this token (Error code: -10).
    NoActiveAuction,
    /// No auction was ever created for this token (Error code: -11).
    AuctionNotFound,
    /// Bid must be higher than current highest bid (Error code: -12).
    BidTooLow,
    /// Auction deadline has passed, bids are closed (Error code: -13).
    AuctionFinished,
    /// Auction deadline has not been reached yet (Error code: -14).
    AuctionStillActive,
    /// Owner is not allowed to perform this action (Error code: -15).
    OwnerForbidden,
    /// Duration is zero, above the configured limit or overflows the clock
    /// (Error code: -16).
    InvalidDuration,
    /// Token is locked by an active auction (Error code: -17).
    TokenInAuction,
    /// All token ids have been minted (Error code: -18).
    TokenLimitReached,
}

/// Mapping the logging errors to CustomContractError.
impl From<LogError> for CustomContractError {
    fn from(le: LogError) -> Self {
        match le {
            LogError::Full => Self::LogFull,
            LogError::Malformed => Self::LogMalformed,
        }
    }
}

/// Mapping errors related to contract invocations to CustomContractError.
impl<T> From<CallContractError<T>> for CustomContractError {
    fn from(_cce: CallContractError<T>) -> Self {
        Self::InvokeContractError
    }
}

/// Mapping errors related to transfers to CustomContractError.
impl From<TransferError> for CustomContractError {
    fn from(_te: TransferError) -> Self {
        Self::InvokeTransferError
    }
}

/// Mapping CustomContractError to ContractError
impl From<CustomContractError> for ContractError {
    fn from(c: CustomContractError) -> Self {
        Cis2Error::Custom(c)
    }
}
