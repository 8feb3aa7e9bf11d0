use commons::{
    Authority, ContractError, ContractResult, ContractTokenAmount, ContractTokenId,
    CustomContractError,
};
use concordium_cis2::{StandardIdentifierOwned, SupportResult, TokenIdU32};
use concordium_std::*;
use core::ops::DerefMut;

use crate::external::{InitParams, TokenView};

/// Token data.
#[derive(Debug, Clone, Serialize, SchemaType, PartialEq, Eq)]
pub struct TokenData {
    /// The only holder of the token.
    pub owner: Address,
    /// URL of the token metadata, set on mint.
    pub metadata_url: String,
}

/// Auction record of a token.
#[derive(Debug, Clone, Serialize, SchemaType, PartialEq, Eq)]
pub struct Auction {
    /// Seller account address. Receives the winning bid.
    pub seller: AccountAddress,
    /// Price the auction was opened with.
    pub starting_price: Amount,
    /// Bids are accepted up to and including this time.
    pub end_time: Timestamp,
    /// Current highest bid. Equals the starting price until the first bid.
    pub highest_bid: Amount,
    /// Current highest bidder.
    pub highest_bidder: Option<AccountAddress>,
    /// Cleared when the auction is ended.
    pub active: bool,
}

impl Auction {
    /// Whether bids are still accepted at `slot_time`.
    pub fn is_open(&self, slot_time: Timestamp) -> bool {
        self.active && slot_time <= self.end_time
    }
}

/// Highest bid replaced or won. On overbid it must be refunded, on auction end
/// it must be paid to the seller.
#[must_use]
#[derive(Debug, PartialEq, Eq)]
pub struct LastBid {
    pub account: AccountAddress,
    pub amount: Amount,
}

/// Outcome of ending an auction.
#[must_use]
#[derive(Debug, PartialEq, Eq)]
pub enum AuctionResult {
    /// Token was moved to the winner, winning bid goes to the seller.
    Winner {
        seller: AccountAddress,
        winning_bid: LastBid,
    },
    /// No bids were placed, seller keeps the token.
    Unsold,
}

/// The contract state.
#[derive(Serial, DeserialWithState, StateClone)]
#[concordium(state_parameter = "S")]
pub struct State<S: HasStateApi> {
    /// Addresses authorized to update and maintain the contract.
    pub authority: Authority<S>,
    /// Longest duration an auction may be created with.
    pub max_duration: Duration,
    /// Id assigned to the next minted token.
    pub next_token_id: u32,
    /// All minted tokens.
    pub tokens: StateMap<ContractTokenId, TokenData, S>,
    /// Latest auction of each token that was ever auctioned.
    pub auctions: StateMap<ContractTokenId, Auction, S>,
    /// Operators for each address.
    pub operators: StateMap<Address, StateSet<Address, S>, S>,
    /// Implementors of standards other than CIS-0 and CIS-2.
    pub implementors: StateMap<StandardIdentifierOwned, Vec<ContractAddress>, S>,
}

impl<S: HasStateApi> State<S> {
    /// Creates a new state with no tokens.
    pub fn new(
        state_builder: &mut StateBuilder<S>,
        params: InitParams,
        origin: AccountAddress,
    ) -> Self {
        Self {
            authority: Authority::new(state_builder, Address::Account(origin)),
            max_duration: params.max_duration,
            next_token_id: 1,
            tokens: state_builder.new_map(),
            auctions: state_builder.new_map(),
            operators: state_builder.new_map(),
            implementors: state_builder.new_map(),
        }
    }

    /// Mint the next token for `owner` and return its id.
    pub fn mint(
        &mut self,
        owner: Address,
        metadata_url: String,
    ) -> Result<ContractTokenId, CustomContractError> {
        let token_id = TokenIdU32(self.next_token_id);
        self.next_token_id = self
            .next_token_id
            .checked_add(1)
            .ok_or(CustomContractError::TokenLimitReached)?;
        self.tokens.insert(
            token_id,
            TokenData {
                owner,
                metadata_url,
            },
        );
        Ok(token_id)
    }

    #[inline(always)]
    pub fn contains_token(&self, token_id: &ContractTokenId) -> bool {
        self.tokens.get(token_id).is_some()
    }

    pub fn token(&self, token_id: &ContractTokenId) -> ContractResult<TokenView> {
        self.tokens
            .get(token_id)
            .map(|token| TokenView {
                owner: token.owner,
                metadata_url: token.metadata_url.clone(),
            })
            .ok_or(ContractError::InvalidTokenId)
    }

    /// Get the current balance of a given token ID for a given address.
    /// Results in an error if the token ID does not exist in the state.
    pub fn balance(
        &self,
        token_id: &ContractTokenId,
        address: &Address,
    ) -> ContractResult<ContractTokenAmount> {
        let token = self
            .tokens
            .get(token_id)
            .ok_or(ContractError::InvalidTokenId)?;
        let balance = if token.owner == *address { 1 } else { 0 };
        Ok(ContractTokenAmount::from(balance))
    }

    /// Check if `address` is an operator of `owner`.
    pub fn is_operator(&self, owner: &Address, address: &Address) -> bool {
        self.operators
            .get(owner)
            .map(|operators| operators.contains(address))
            .unwrap_or(false)
    }

    /// Add a new operator for the given address.
    ///
    /// Succeeds even if the `operator` is already an operator for the `owner`.
    pub fn add_operator(
        &mut self,
        owner: &Address,
        operator: &Address,
        state_builder: &mut StateBuilder<S>,
    ) {
        self.operators
            .entry(*owner)
            .or_insert_with(|| state_builder.new_set())
            .deref_mut()
            .insert(*operator);
    }

    /// Update the state removing an operator for a given address.
    /// Succeeds even if the `operator` is _not_ an operator for the `address`.
    pub fn remove_operator(&mut self, owner: &Address, operator: &Address) {
        self.operators
            .get_mut(owner)
            .map(|mut operators| operators.remove(operator));
    }

    /// Whether the token is locked by an active auction.
    pub fn is_in_auction(&self, token_id: &ContractTokenId) -> bool {
        self.auctions
            .get(token_id)
            .map(|auction| auction.active)
            .unwrap_or(false)
    }

    /// Move a token from `from` to `to`.
    /// Results in an error if the token does not exist, is not owned by
    /// `from` or is locked by an active auction.
    pub fn transfer(
        &mut self,
        token_id: &ContractTokenId,
        amount: ContractTokenAmount,
        from: &Address,
        to: &Address,
    ) -> ContractResult<()> {
        ensure!(self.contains_token(token_id), ContractError::InvalidTokenId);

        // A zero transfer does not modify the state.
        if amount == ContractTokenAmount::from(0) {
            return Ok(());
        }

        ensure!(
            !self.is_in_auction(token_id),
            CustomContractError::TokenInAuction.into()
        );

        let mut token = self
            .tokens
            .entry(token_id.clone())
            .occupied_or(ContractError::InvalidTokenId)?;
        ensure!(
            amount == ContractTokenAmount::from(1) && token.owner == *from,
            ContractError::InsufficientFunds
        );
        token.owner = *to;

        Ok(())
    }

    /// Open an auction for a token owned by `seller` and return its deadline.
    pub fn create_auction(
        &mut self,
        token_id: &ContractTokenId,
        seller: AccountAddress,
        starting_price: Amount,
        duration: Duration,
        slot_time: Timestamp,
    ) -> ContractResult<Timestamp> {
        let owner = self
            .tokens
            .get(token_id)
            .map(|token| token.owner)
            .ok_or(ContractError::InvalidTokenId)?;
        ensure!(
            owner.matches_account(&seller),
            CustomContractError::NotTokenOwner.into()
        );
        ensure!(
            !self.is_in_auction(token_id),
            CustomContractError::AuctionAlreadyActive.into()
        );
        ensure!(
            duration.millis() > 0 && duration <= self.max_duration,
            CustomContractError::InvalidDuration.into()
        );
        let end_time = slot_time
            .checked_add(duration)
            .ok_or(CustomContractError::InvalidDuration)?;

        // An ended auction of the same token gets replaced
        self.auctions.insert(
            token_id.clone(),
            Auction {
                seller,
                starting_price,
                end_time,
                highest_bid: starting_price,
                highest_bidder: None,
                active: true,
            },
        );

        Ok(end_time)
    }

    /// Record a new highest bid, returning the previous one that MUST be
    /// refunded.
    pub fn bid(
        &mut self,
        token_id: &ContractTokenId,
        bidder: AccountAddress,
        amount: Amount,
        slot_time: Timestamp,
    ) -> Result<Option<LastBid>, CustomContractError> {
        let mut auction = self
            .auctions
            .entry(token_id.clone())
            .occupied_or(CustomContractError::NoActiveAuction)?;

        ensure!(auction.active, CustomContractError::NoActiveAuction);
        ensure!(
            auction.is_open(slot_time),
            CustomContractError::AuctionFinished
        );
        // Seller is not allowed to raise bids
        ensure_ne!(bidder, auction.seller, CustomContractError::OwnerForbidden);
        ensure!(
            amount > auction.highest_bid,
            CustomContractError::BidTooLow
        );

        let previous_amount = auction.highest_bid;
        let previous_bidder = auction.highest_bidder.replace(bidder);
        auction.highest_bid = amount;

        Ok(previous_bidder.map(|account| LastBid {
            account,
            amount: previous_amount,
        }))
    }

    /// Close an auction whose deadline has passed and hand the token to the
    /// highest bidder.
    pub fn end_auction(
        &mut self,
        token_id: &ContractTokenId,
        slot_time: Timestamp,
    ) -> ContractResult<AuctionResult> {
        let result = {
            let mut auction = self
                .auctions
                .entry(token_id.clone())
                .occupied_or(CustomContractError::NoActiveAuction)?;

            ensure!(auction.active, CustomContractError::NoActiveAuction.into());
            // Ending an auction that still accepts bids is not allowed
            ensure!(
                slot_time > auction.end_time,
                CustomContractError::AuctionStillActive.into()
            );
            auction.active = false;

            match auction.highest_bidder {
                Some(winner) => AuctionResult::Winner {
                    seller: auction.seller,
                    winning_bid: LastBid {
                        account: winner,
                        amount: auction.highest_bid,
                    },
                },
                None => AuctionResult::Unsold,
            }
        };

        if let AuctionResult::Winner { winning_bid, .. } = &result {
            let mut token = self
                .tokens
                .entry(token_id.clone())
                .occupied_or(ContractError::InvalidTokenId)?;
            token.owner = Address::Account(winning_bid.account);
        }

        Ok(result)
    }

    pub fn auction(&self, token_id: &ContractTokenId) -> ContractResult<Auction> {
        ensure!(self.contains_token(token_id), ContractError::InvalidTokenId);
        self.auctions
            .get(token_id)
            .map(|auction| auction.clone())
            .ok_or_else(|| CustomContractError::AuctionNotFound.into())
    }

    /// Update the list of contracts implementing the specified standard.
    pub fn set_implementors(
        &mut self,
        id: StandardIdentifierOwned,
        contracts: Vec<ContractAddress>,
    ) {
        self.implementors.insert(id, contracts);
    }

    /// Get the list of contracts implementing the specified standard.
    pub fn get_implementors(&self, id: &StandardIdentifierOwned) -> SupportResult {
        if let Some(addresses) = self.implementors.get(id) {
            SupportResult::SupportBy(addresses.to_vec())
        } else {
            SupportResult::NoSupport
        }
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use test_infrastructure::*;

    const ADMIN: AccountAddress = AccountAddress([1; 32]);
    const SELLER: AccountAddress = AccountAddress([16; 32]);
    const BIDDER: AccountAddress = AccountAddress([17; 32]);

    fn slot_time(millis: u64) -> Timestamp {
        Timestamp::from_timestamp_millis(millis)
    }

    fn state_with_token(state_builder: &mut TestStateBuilder) -> State<TestStateApi> {
        let mut state = State::new(
            state_builder,
            InitParams {
                max_duration: Duration::from_hours(24),
            },
            ADMIN,
        );
        state
            .mint(Address::Account(SELLER), String::from("ipfs://token-1"))
            .expect_report("Failed to mint token 1");
        state
    }

    #[concordium_test]
    fn test_token_ids_are_sequential() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = state_with_token(&mut state_builder);

        let second = state
            .mint(Address::Account(BIDDER), String::from("ipfs://token-2"))
            .expect_report("Failed to mint token 2");
        claim_eq!(second, TokenIdU32(2));
        claim_eq!(state.next_token_id, 3);
    }

    #[concordium_test]
    fn test_mint_stops_at_id_limit() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = state_with_token(&mut state_builder);
        state.next_token_id = u32::MAX;

        let result = state.mint(Address::Account(SELLER), String::new());
        claim_eq!(result, Err(CustomContractError::TokenLimitReached));
        claim!(!state.contains_token(&TokenIdU32(u32::MAX)));
    }

    #[concordium_test]
    fn test_deadline_is_inclusive_for_bids() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = state_with_token(&mut state_builder);
        let token = TokenIdU32(1);

        let end_time = state
            .create_auction(
                &token,
                SELLER,
                Amount::from_ccd(1),
                Duration::from_millis(100),
                slot_time(1_000),
            )
            .expect_report("Failed to create auction");
        claim_eq!(end_time, slot_time(1_100));

        // A bid exactly at the deadline is accepted
        let previous = state.bid(&token, BIDDER, Amount::from_ccd(2), slot_time(1_100));
        claim_eq!(previous, Ok(None));

        // The auction can only be ended strictly after the deadline
        claim_eq!(
            state.end_auction(&token, slot_time(1_100)),
            Err(CustomContractError::AuctionStillActive.into())
        );
        claim_eq!(
            state.end_auction(&token, slot_time(1_101)),
            Ok(AuctionResult::Winner {
                seller: SELLER,
                winning_bid: LastBid {
                    account: BIDDER,
                    amount: Amount::from_ccd(2),
                },
            })
        );
        claim_eq!(
            state.balance(&token, &Address::Account(BIDDER)),
            Ok(ContractTokenAmount::from(1))
        );
    }

    #[concordium_test]
    fn test_deadline_overflow_is_rejected() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = state_with_token(&mut state_builder);
        state.max_duration = Duration::from_millis(u64::MAX);

        let result = state.create_auction(
            &TokenIdU32(1),
            SELLER,
            Amount::zero(),
            Duration::from_millis(u64::MAX),
            slot_time(1),
        );
        claim_eq!(result, Err(CustomContractError::InvalidDuration.into()));
        claim!(!state.is_in_auction(&TokenIdU32(1)));
    }
}
