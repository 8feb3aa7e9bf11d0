use commons::ContractTokenId;
use concordium_cis2::StandardIdentifierOwned;
use concordium_std::*;

#[derive(Debug, Clone, Serialize, SchemaType)]
pub struct InitParams {
    /// Longest duration an auction may be created with.
    pub max_duration: Duration,
}

#[derive(Debug, Clone, Serialize, SchemaType)]
pub struct MintParams {
    /// URL of the token metadata.
    pub metadata_url: String,
}

#[derive(Debug, Clone, Serialize, SchemaType)]
pub struct CreateAuctionParams {
    /// Token to auction. The sender must own it.
    pub token_id: ContractTokenId,
    /// Every bid must be above this amount.
    pub starting_price: Amount,
    /// Auction deadline relative to the current slot time.
    pub duration: Duration,
}

/// Owner and metadata of a token.
#[derive(Debug, Clone, Serialize, SchemaType, PartialEq, Eq)]
pub struct TokenView {
    pub owner: Address,
    pub metadata_url: String,
}

#[derive(Debug, Clone, Copy, Serialize, SchemaType, PartialEq, Eq)]
pub enum InternalValue {
    MaxDuration(Duration),
}

#[derive(Debug, Clone, Copy, Serialize, SchemaType)]
pub enum ViewInternalValueParams {
    MaxDuration,
}

/// The parameter type for the contract function `setImplementors`.
/// Takes a standard identifier and list of contract addresses providing
/// implementations of this standard.
#[derive(Debug, Serialize, SchemaType)]
pub struct SetImplementorsParams {
    /// The identifier for the standard.
    pub id: StandardIdentifierOwned,
    /// The addresses of the implementors of the standard.
    pub implementors: Vec<ContractAddress>,
}
