use commons::{
    AuthorityUpdateParams, AuthorityViewParams, ContractBalanceOfQueryParams,
    ContractBalanceOfQueryResponse, ContractError, ContractResult, ContractTokenAmount,
    ContractTokenId, ContractTokenMetadataQueryParams, CustomContractError, TransferParameter,
};
use concordium_cis2::*;
use concordium_std::*;

use crate::events::AuctionEvent;
use crate::external::*;
use crate::state::{Auction, AuctionResult, State};

/// List of supported standards by this contract address.
const SUPPORTS_STANDARDS: [StandardIdentifier<'static>; 2] =
    [CIS0_STANDARD_IDENTIFIER, CIS2_STANDARD_IDENTIFIER];

/// Initialize contract instance with no tokens.
#[init(contract = "NftAuction", parameter = "InitParams")]
fn init<S: HasStateApi>(
    ctx: &impl HasInitContext,
    state_builder: &mut StateBuilder<S>,
) -> InitResult<State<S>> {
    let params = InitParams::deserial(&mut ctx.parameter_cursor())?;

    ensure!(
        params.max_duration.millis() > 0,
        CustomContractError::InvalidDuration.into()
    );

    // Construct the initial contract state.
    let state = State::new(state_builder, params, ctx.init_origin());
    Ok(state)
}

/// Mint a new token to the sender with the next free token id.
/// Logs a `Mint` and a `TokenMetadata` event.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - All token ids are already taken.
/// - Fails to log event.
#[receive(
    mutable,
    contract = "NftAuction",
    name = "mint",
    parameter = "MintParams",
    return_value = "ContractTokenId",
    enable_logger
)]
fn mint<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<ContractTokenId> {
    let params = MintParams::deserial(&mut ctx.parameter_cursor())?;
    let owner = ctx.sender();

    let token_id = host
        .state_mut()
        .mint(owner, params.metadata_url.clone())?;

    logger.log(&Cis2Event::Mint(MintEvent {
        token_id,
        amount: ContractTokenAmount::from(1),
        owner,
    }))?;

    logger.log(
        &Cis2Event::<ContractTokenId, ContractTokenAmount>::TokenMetadata(TokenMetadataEvent {
            token_id,
            metadata_url: MetadataUrl {
                url: params.metadata_url,
                hash: None,
            },
        }),
    )?;

    Ok(token_id)
}

/// Put a token owned by the sender up for auction.
/// Logs an `AuctionCreated` event.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - Sender is a contract.
/// - The token does not exist or is not owned by the sender.
/// - The token is already in an active auction.
/// - The duration is zero, above the configured maximum or overflows the
///   deadline.
/// - Fails to log event.
#[receive(
    mutable,
    contract = "NftAuction",
    name = "createAuction",
    parameter = "CreateAuctionParams",
    enable_logger
)]
fn create_auction<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let params = CreateAuctionParams::deserial(&mut ctx.parameter_cursor())?;

    let seller = if let Address::Account(seller) = ctx.sender() {
        seller
    } else {
        bail!(CustomContractError::OnlyAccountAddress.into());
    };

    let end_time = host.state_mut().create_auction(
        &params.token_id,
        seller,
        params.starting_price,
        params.duration,
        ctx.metadata().slot_time(),
    )?;

    logger.log(&AuctionEvent::created(
        params.token_id,
        params.starting_price,
        end_time,
    ))?;

    Ok(())
}

/// Bid on an active auction with the attached amount.
/// Logs a `BidPlaced` event and refunds the outbid account.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - Sender is a contract.
/// - There is no active auction for the token or its deadline has passed.
/// - Sender is the seller.
/// - Amount is not above the current highest bid.
/// - Fails to log event.
/// - Fails to refund the previous bid.
#[receive(
    mutable,
    payable,
    contract = "NftAuction",
    name = "placeBid",
    parameter = "ContractTokenId",
    enable_logger
)]
fn place_bid<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    amount: Amount,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let token_id = ContractTokenId::deserial(&mut ctx.parameter_cursor())?;

    let bidder = if let Address::Account(bidder) = ctx.sender() {
        bidder
    } else {
        bail!(CustomContractError::OnlyAccountAddress.into());
    };

    let previous_bid =
        host.state_mut()
            .bid(&token_id, bidder, amount, ctx.metadata().slot_time())?;

    logger.log(&AuctionEvent::bid_placed(token_id, bidder, amount))?;

    // Refund previous bid
    if let Some(bid) = previous_bid {
        host.invoke_transfer(&bid.account, bid.amount)
            .map_err(CustomContractError::from)?;
    }

    Ok(())
}

/// End an auction after its deadline. The token goes to the highest bidder and
/// the winning bid to the seller. Anyone can end an auction.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - There is no active auction for the token.
/// - The deadline has not passed yet.
/// - Fails to log event.
/// - Fails to pay the seller.
#[receive(
    mutable,
    contract = "NftAuction",
    name = "endAuction",
    parameter = "ContractTokenId",
    enable_logger
)]
fn end_auction<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let token_id = ContractTokenId::deserial(&mut ctx.parameter_cursor())?;

    let outcome = host
        .state_mut()
        .end_auction(&token_id, ctx.metadata().slot_time())?;

    match outcome {
        AuctionResult::Winner {
            seller,
            winning_bid,
        } => {
            logger.log(&Cis2Event::Transfer(TransferEvent {
                token_id,
                amount: ContractTokenAmount::from(1),
                from: Address::Account(seller),
                to: Address::Account(winning_bid.account),
            }))?;

            logger.log(&AuctionEvent::ended(
                token_id,
                Some(winning_bid.account),
                winning_bid.amount,
            ))?;

            host.invoke_transfer(&seller, winning_bid.amount)
                .map_err(CustomContractError::from)?;
        }
        AuctionResult::Unsold => {
            logger.log(&AuctionEvent::ended(token_id, None, Amount::zero()))?;
        }
    }

    Ok(())
}

/// View the latest auction of a token.
#[receive(
    contract = "NftAuction",
    name = "viewAuction",
    parameter = "ContractTokenId",
    return_value = "Auction"
)]
fn view_auction<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Auction> {
    let token_id = ContractTokenId::deserial(&mut ctx.parameter_cursor())?;
    host.state().auction(&token_id)
}

/// View owner and metadata url of a token.
#[receive(
    contract = "NftAuction",
    name = "viewToken",
    parameter = "ContractTokenId",
    return_value = "TokenView"
)]
fn view_token<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<TokenView> {
    let token_id = ContractTokenId::deserial(&mut ctx.parameter_cursor())?;
    host.state().token(&token_id)
}

/// Execute a list of token transfers, in the order of the list.
///
/// Logs a `Transfer` event for each transfer in the list.
/// Invokes the receive hook of each contract receiving a transfer.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - Any of the transfers fail to be executed, which could be if:
///     - The `token_id` does not exist.
///     - The sender is not the owner of the token, or an operator for this
///       specific `token_id` and `from` address.
///     - The token is not owned by the `from`.
///     - The token is locked by an active auction.
/// - Fails to log event.
/// - Any of the receive hooks rejects.
#[receive(
    mutable,
    contract = "NftAuction",
    name = "transfer",
    parameter = "TransferParameter",
    enable_logger
)]
fn transfer<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let TransferParams(transfers) = TransferParameter::deserial(&mut ctx.parameter_cursor())?;
    let sender = ctx.sender();

    for concordium_cis2::Transfer {
        token_id,
        amount,
        from,
        to,
        data,
    } in transfers
    {
        let state = host.state_mut();

        // Authenticate the sender for this transfer
        ensure!(
            from == sender || state.is_operator(&from, &sender),
            ContractError::Unauthorized
        );

        let to_address = to.address();
        state.transfer(&token_id, amount, &from, &to_address)?;

        logger.log(&Cis2Event::Transfer(TransferEvent {
            token_id,
            amount,
            from,
            to: to_address,
        }))?;

        if let Receiver::Contract(address, function) = to {
            let parameter = OnReceivingCis2Params {
                token_id,
                amount,
                from,
                data,
            };
            host.invoke_contract(
                &address,
                &parameter,
                function.as_entrypoint_name(),
                Amount::zero(),
            )
            .map_err(CustomContractError::from)?;
        }
    }

    Ok(())
}

/// Enable or disable addresses as operators of the sender address.
/// Logs an `UpdateOperator` event.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - Fails to log event.
#[receive(
    mutable,
    contract = "NftAuction",
    name = "updateOperator",
    parameter = "UpdateOperatorParams",
    enable_logger
)]
fn update_operator<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let UpdateOperatorParams(params) = UpdateOperatorParams::deserial(&mut ctx.parameter_cursor())?;
    let sender = ctx.sender();
    let (state, state_builder) = host.state_and_builder();

    for param in params {
        match param.update {
            OperatorUpdate::Add => state.add_operator(&sender, &param.operator, state_builder),
            OperatorUpdate::Remove => state.remove_operator(&sender, &param.operator),
        }

        logger.log(
            &Cis2Event::<ContractTokenId, ContractTokenAmount>::UpdateOperator(
                UpdateOperatorEvent {
                    owner: sender,
                    operator: param.operator,
                    update: param.update,
                },
            ),
        )?;
    }

    Ok(())
}

/// Takes a list of queries. Each query is an owner address and some address to
/// check as an operator of the owner address.
///
/// It rejects if:
/// - It fails to parse the parameter.
#[receive(
    contract = "NftAuction",
    name = "operatorOf",
    parameter = "OperatorOfQueryParams",
    return_value = "OperatorOfQueryResponse"
)]
fn operator_of<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<OperatorOfQueryResponse> {
    let params = OperatorOfQueryParams::deserial(&mut ctx.parameter_cursor())?;
    let state = host.state();

    let response: Vec<bool> = params
        .queries
        .iter()
        .map(|query| state.is_operator(&query.owner, &query.address))
        .collect();

    Ok(OperatorOfQueryResponse::from(response))
}

/// Get the balance of given token IDs and addresses.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - Any of the queried `token_id` does not exist.
#[receive(
    contract = "NftAuction",
    name = "balanceOf",
    parameter = "ContractBalanceOfQueryParams",
    return_value = "ContractBalanceOfQueryResponse"
)]
fn balance_of<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<ContractBalanceOfQueryResponse> {
    let params = ContractBalanceOfQueryParams::deserial(&mut ctx.parameter_cursor())?;
    let state = host.state();

    let mut response = Vec::with_capacity(params.queries.len());
    for query in params.queries {
        response.push(state.balance(&query.token_id, &query.address)?);
    }

    Ok(ContractBalanceOfQueryResponse::from(response))
}

/// Get the token metadata URLs of the given token IDs.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - Any of the queried `token_id` does not exist.
#[receive(
    contract = "NftAuction",
    name = "tokenMetadata",
    parameter = "ContractTokenMetadataQueryParams",
    return_value = "TokenMetadataQueryResponse"
)]
fn token_metadata<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<TokenMetadataQueryResponse> {
    let params = ContractTokenMetadataQueryParams::deserial(&mut ctx.parameter_cursor())?;
    let state = host.state();

    let mut response = Vec::with_capacity(params.queries.len());
    for token_id in params.queries {
        let token = state.token(&token_id)?;
        response.push(MetadataUrl {
            url: token.metadata_url,
            hash: None,
        });
    }

    Ok(TokenMetadataQueryResponse::from(response))
}

/// Get the supported standards or addresses for an implementation given a
/// list of standard identifiers.
///
/// It rejects if:
/// - It fails to parse the parameter.
#[receive(
    contract = "NftAuction",
    name = "supports",
    parameter = "SupportsQueryParams",
    return_value = "SupportsQueryResponse"
)]
fn supports<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<SupportsQueryResponse> {
    let params = SupportsQueryParams::deserial(&mut ctx.parameter_cursor())?;

    let mut response = Vec::with_capacity(params.queries.len());
    for std_id in params.queries {
        if SUPPORTS_STANDARDS.contains(&std_id.as_standard_identifier()) {
            response.push(SupportResult::Support);
        } else {
            response.push(host.state().get_implementors(&std_id));
        }
    }

    Ok(SupportsQueryResponse::from(response))
}

/// Set the addresses for an implementation given a standard identifier and a
/// list of contract addresses.
///
/// It rejects if:
/// - Sender is not one of the admins.
/// - It fails to parse the parameter.
#[receive(
    mutable,
    contract = "NftAuction",
    name = "setImplementors",
    parameter = "SetImplementorsParams"
)]
fn set_implementors<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<()> {
    let state = host.state_mut();

    ensure!(
        state.authority.has_admin_rights(&ctx.sender()),
        ContractError::Unauthorized
    );

    let params = SetImplementorsParams::deserial(&mut ctx.parameter_cursor())?;
    state.set_implementors(params.id, params.implementors);

    Ok(())
}

/// Function to manage addresses that are allowed to maintain and modify the state of the contract.
///
///  It rejects if:
///  - Fails to parse `AuthorityUpdateParams` parameters.
///  - If sender is neither one of the admins nor one of the maintainers.
#[receive(
    mutable,
    contract = "NftAuction",
    name = "updateAuthority",
    parameter = "AuthorityUpdateParams"
)]
fn update_authority<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<()> {
    let params = AuthorityUpdateParams::deserial(&mut ctx.parameter_cursor())?;
    let sender = ctx.sender();
    host.state_mut().authority.handle_update(sender, params)?;
    Ok(())
}

/// Function to view addresses that are allowed to maintain and modify the state of the contract.
#[receive(
    contract = "NftAuction",
    name = "viewAuthority",
    parameter = "AuthorityViewParams",
    return_value = "Vec<Address>"
)]
fn view_authority<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Vec<Address>> {
    let params = AuthorityViewParams::deserial(&mut ctx.parameter_cursor())?;
    Ok(host.state().authority.handle_view(params))
}

/// Function to update contract configuration.
///
/// It rejects if:
/// - Sender is not one of the maintainers.
/// - Fails to parse parameter.
/// - The new maximum auction duration is zero.
#[receive(
    mutable,
    contract = "NftAuction",
    name = "updateInternalValue",
    parameter = "InternalValue"
)]
fn update_internal_value<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<()> {
    let state = host.state_mut();
    state.authority.ensure_maintainer(&ctx.sender())?;

    match InternalValue::deserial(&mut ctx.parameter_cursor())? {
        InternalValue::MaxDuration(duration) => {
            ensure!(
                duration.millis() > 0,
                CustomContractError::InvalidDuration.into()
            );
            state.max_duration = duration;
        }
    }

    Ok(())
}

/// Function to view contract configuration.
#[receive(
    contract = "NftAuction",
    name = "viewInternalValue",
    parameter = "ViewInternalValueParams",
    return_value = "InternalValue"
)]
fn view_internal_value<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<InternalValue> {
    let state = host.state();

    let value = match ViewInternalValueParams::deserial(&mut ctx.parameter_cursor())? {
        ViewInternalValueParams::MaxDuration => InternalValue::MaxDuration(state.max_duration),
    };

    Ok(value)
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use commons::test::*;
    use commons::{AuthorityField, AuthorityUpdateKind};
    use concordium_std::test_infrastructure::*;

    const ADMIN: AccountAddress = AccountAddress([1; 32]);
    const MAINTAINER: AccountAddress = AccountAddress([2; 32]);

    const SELLER: AccountAddress = AccountAddress([16; 32]);
    const BIDDER_A: AccountAddress = AccountAddress([17; 32]);
    const BIDDER_B: AccountAddress = AccountAddress([18; 32]);

    const MARKETPLACE: ContractAddress = ContractAddress {
        index: 1,
        subindex: 0,
    };

    const TOKEN_1: ContractTokenId = TokenIdU32(1);
    const TOKEN_URL: &str = "ipfs://QmToken1";

    fn start_time() -> Timestamp {
        Timestamp::from_timestamp_millis(1_000_000)
    }

    /// One millisecond after an hour-long auction opened at `start_time`.
    fn after_deadline() -> Timestamp {
        Timestamp::from_timestamp_millis(1_000_000 + 3_600_000 + 1)
    }

    fn default_host() -> TestHost<State<TestStateApi>> {
        let mut ctx = TestInitContext::empty();
        // admin is initialized to `ctx.origin()`
        let params = InitParams {
            max_duration: Duration::from_hours(24 * 7),
        };
        let bytes = to_bytes(&params);
        ctx.set_init_origin(ADMIN).set_parameter(&bytes);
        let mut state_builder = TestStateBuilder::new();

        // Call the init method.
        let state = init(&ctx, &mut state_builder).expect_report("Failed during init_NftAuction");

        let mut host = TestHost::new(state, state_builder);

        let mut ctx = TestReceiveContext::empty();
        let params = AuthorityUpdateParams {
            field: AuthorityField::Maintainer,
            kind: AuthorityUpdateKind::Add,
            address: Address::Account(MAINTAINER),
        };
        let bytes = to_bytes(&params);
        ctx.set_sender(Address::Account(ADMIN)).set_parameter(&bytes);
        let result = update_authority(&ctx, &mut host);
        claim_eq!(result, Ok(()));

        host
    }

    fn mint_as(
        host: &mut TestHost<State<TestStateApi>>,
        sender: Address,
        url: &str,
    ) -> ContractResult<ContractTokenId> {
        let mut ctx = TestReceiveContext::empty();
        let mut logger = TestLogger::init();
        let params = MintParams {
            metadata_url: String::from(url),
        };
        let bytes = to_bytes(&params);
        ctx.set_sender(sender).set_parameter(&bytes);
        mint(&ctx, host, &mut logger)
    }

    fn create_auction_as(
        host: &mut TestHost<State<TestStateApi>>,
        sender: Address,
        token_id: ContractTokenId,
        starting_price: Amount,
        duration: Duration,
    ) -> ContractResult<()> {
        let mut ctx = TestReceiveContext::empty();
        let mut logger = TestLogger::init();
        let params = CreateAuctionParams {
            token_id,
            starting_price,
            duration,
        };
        let bytes = to_bytes(&params);
        ctx.set_sender(sender)
            .set_parameter(&bytes)
            .set_metadata_slot_time(start_time());
        create_auction(&ctx, host, &mut logger)
    }

    /// Host with token 1 owned by `SELLER` in an hour long auction starting at
    /// 1 CCD.
    fn host_with_auction() -> TestHost<State<TestStateApi>> {
        let mut host = default_host();
        let token_id = mint_as(&mut host, Address::Account(SELLER), TOKEN_URL)
            .expect_report("Failed to mint");
        let result = create_auction_as(
            &mut host,
            Address::Account(SELLER),
            token_id,
            Amount::from_ccd(1),
            Duration::from_seconds(3600),
        );
        claim_eq!(result, Ok(()));
        host
    }

    fn bid_as(
        host: &mut TestHost<State<TestStateApi>>,
        bidder: AccountAddress,
        amount: Amount,
        slot_time: Timestamp,
    ) -> ContractResult<()> {
        let mut ctx = TestReceiveContext::empty();
        let mut logger = TestLogger::init();
        let bytes = to_bytes(&TOKEN_1);
        ctx.set_sender(Address::Account(bidder))
            .set_parameter(&bytes)
            .set_metadata_slot_time(slot_time);
        // Incoming amount is not added to the test balance
        let balance = host.self_balance();
        host.set_self_balance(balance + amount);
        let result = place_bid(&ctx, host, amount, &mut logger);
        if result.is_err() {
            host.set_self_balance(balance);
        }
        result
    }

    fn token_owner(host: &TestHost<State<TestStateApi>>, token_id: ContractTokenId) -> Address {
        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&token_id);
        ctx.set_parameter(&bytes);
        view_token(&ctx, host)
            .expect_report("Failed to view token")
            .owner
    }

    fn view_auction_of(
        host: &TestHost<State<TestStateApi>>,
        token_id: ContractTokenId,
    ) -> ContractResult<Auction> {
        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&token_id);
        ctx.set_parameter(&bytes);
        view_auction(&ctx, host)
    }

    #[concordium_test]
    fn test_init_rejects_zero_max_duration() {
        let mut ctx = TestInitContext::empty();
        let params = InitParams {
            max_duration: Duration::from_millis(0),
        };
        let bytes = to_bytes(&params);
        ctx.set_init_origin(ADMIN).set_parameter(&bytes);
        let mut state_builder = TestStateBuilder::new();

        let result = init(&ctx, &mut state_builder);
        claim!(result.is_err());
    }

    #[concordium_test]
    fn test_mint() {
        let mut host = default_host();

        let mut ctx = TestReceiveContext::empty();
        let mut logger = TestLogger::init();
        let params = MintParams {
            metadata_url: String::from(TOKEN_URL),
        };
        let bytes = to_bytes(&params);
        ctx.set_sender(Address::Account(SELLER)).set_parameter(&bytes);

        let result = mint(&ctx, &mut host, &mut logger);
        claim_eq!(result, Ok(TOKEN_1));

        claim_eq!(
            logger.logs,
            vec![
                to_bytes(&Cis2Event::Mint(MintEvent {
                    token_id: TOKEN_1,
                    amount: ContractTokenAmount::from(1),
                    owner: Address::Account(SELLER),
                })),
                to_bytes(
                    &Cis2Event::<ContractTokenId, ContractTokenAmount>::TokenMetadata(
                        TokenMetadataEvent {
                            token_id: TOKEN_1,
                            metadata_url: MetadataUrl {
                                url: String::from(TOKEN_URL),
                                hash: None,
                            },
                        }
                    )
                ),
            ]
        );
        claim_eq!(token_owner(&host, TOKEN_1), Address::Account(SELLER));
    }

    #[concordium_test]
    fn test_mint_ids_are_sequential() {
        let mut host = default_host();

        for expected in 1..=3 {
            let token_id = mint_as(&mut host, Address::Account(BIDDER_A), TOKEN_URL);
            claim_eq!(token_id, Ok(TokenIdU32(expected)));
        }
        // Any address is allowed to mint
        let token_id = mint_as(&mut host, Address::Contract(MARKETPLACE), TOKEN_URL);
        claim_eq!(token_id, Ok(TokenIdU32(4)));
    }

    #[concordium_test]
    fn test_create_auction() {
        let mut host = default_host();
        mint_as(&mut host, Address::Account(SELLER), TOKEN_URL).expect_report("Failed to mint");

        let mut ctx = TestReceiveContext::empty();
        let mut logger = TestLogger::init();
        let params = CreateAuctionParams {
            token_id: TOKEN_1,
            starting_price: Amount::from_ccd(1),
            duration: Duration::from_seconds(3600),
        };
        let bytes = to_bytes(&params);
        ctx.set_sender(Address::Account(SELLER))
            .set_parameter(&bytes)
            .set_metadata_slot_time(start_time());

        let result = create_auction(&ctx, &mut host, &mut logger);
        claim_eq!(result, Ok(()));

        let end_time = Timestamp::from_timestamp_millis(1_000_000 + 3_600_000);
        claim_eq!(
            logger.logs,
            vec![to_bytes(&AuctionEvent::created(
                TOKEN_1,
                Amount::from_ccd(1),
                end_time
            ))]
        );
        claim_eq!(
            view_auction_of(&host, TOKEN_1),
            Ok(Auction {
                seller: SELLER,
                starting_price: Amount::from_ccd(1),
                end_time,
                highest_bid: Amount::from_ccd(1),
                highest_bidder: None,
                active: true,
            })
        );
    }

    #[concordium_test]
    fn test_create_auction_not_owner() {
        let mut host = default_host();
        mint_as(&mut host, Address::Account(SELLER), TOKEN_URL).expect_report("Failed to mint");

        let result = create_auction_as(
            &mut host,
            Address::Account(BIDDER_A),
            TOKEN_1,
            Amount::from_ccd(1),
            Duration::from_seconds(3600),
        );
        claim_eq!(result, Err(CustomContractError::NotTokenOwner.into()));

        let result = create_auction_as(
            &mut host,
            Address::Account(SELLER),
            TokenIdU32(2),
            Amount::from_ccd(1),
            Duration::from_seconds(3600),
        );
        claim_eq!(result, Err(ContractError::InvalidTokenId));
    }

    #[concordium_test]
    fn test_create_auction_only_account() {
        let mut host = default_host();
        mint_as(&mut host, Address::Contract(MARKETPLACE), TOKEN_URL)
            .expect_report("Failed to mint");

        let result = create_auction_as(
            &mut host,
            Address::Contract(MARKETPLACE),
            TOKEN_1,
            Amount::from_ccd(1),
            Duration::from_seconds(3600),
        );
        claim_eq!(result, Err(CustomContractError::OnlyAccountAddress.into()));
    }

    #[concordium_test]
    fn test_create_auction_twice() {
        let mut host = host_with_auction();

        let result = create_auction_as(
            &mut host,
            Address::Account(SELLER),
            TOKEN_1,
            Amount::from_ccd(5),
            Duration::from_seconds(60),
        );
        claim_eq!(result, Err(CustomContractError::AuctionAlreadyActive.into()));
    }

    #[concordium_test]
    fn test_create_auction_invalid_duration() {
        let mut host = default_host();
        mint_as(&mut host, Address::Account(SELLER), TOKEN_URL).expect_report("Failed to mint");

        for duration in [Duration::from_millis(0), Duration::from_hours(24 * 7 + 1)] {
            let result = create_auction_as(
                &mut host,
                Address::Account(SELLER),
                TOKEN_1,
                Amount::from_ccd(1),
                duration,
            );
            claim_eq!(result, Err(CustomContractError::InvalidDuration.into()));
        }
        claim_eq!(
            view_auction_of(&host, TOKEN_1),
            Err(CustomContractError::AuctionNotFound.into())
        );
    }

    #[concordium_test]
    fn test_bid() {
        let mut host = host_with_auction();

        let mut ctx = TestReceiveContext::empty();
        let mut logger = TestLogger::init();
        let bytes = to_bytes(&TOKEN_1);
        ctx.set_sender(Address::Account(BIDDER_A))
            .set_parameter(&bytes)
            .set_metadata_slot_time(start_time());

        let result = place_bid(&ctx, &mut host, Amount::from_ccd(2), &mut logger);
        claim_eq!(result, Ok(()));
        claim_eq!(
            logger.logs,
            vec![to_bytes(&AuctionEvent::bid_placed(
                TOKEN_1,
                BIDDER_A,
                Amount::from_ccd(2)
            ))]
        );

        let auction = view_auction_of(&host, TOKEN_1).expect_report("Failed to view auction");
        claim_eq!(auction.highest_bid, Amount::from_ccd(2));
        claim_eq!(auction.highest_bidder, Some(BIDDER_A));
    }

    #[concordium_test]
    fn test_bid_refunds_previous_bidder() {
        let mut host = host_with_auction();

        let result = bid_as(&mut host, BIDDER_A, Amount::from_ccd(2), start_time());
        claim_eq!(result, Ok(()));
        claim!(!host.transfer_occurred(&BIDDER_A, Amount::from_ccd(2)));

        let result = bid_as(&mut host, BIDDER_B, Amount::from_ccd(3), start_time());
        claim_eq!(result, Ok(()));
        claim!(host.transfer_occurred(&BIDDER_A, Amount::from_ccd(2)));
        claim_eq!(host.self_balance(), Amount::from_ccd(3));

        let auction = view_auction_of(&host, TOKEN_1).expect_report("Failed to view auction");
        claim_eq!(auction.highest_bid, Amount::from_ccd(3));
        claim_eq!(auction.highest_bidder, Some(BIDDER_B));
    }

    #[concordium_test]
    fn test_bid_too_low() {
        let mut host = host_with_auction();

        // Bids must be above the starting price
        let result = bid_as(&mut host, BIDDER_A, Amount::from_ccd(1), start_time());
        claim_eq!(result, Err(CustomContractError::BidTooLow.into()));

        let result = bid_as(&mut host, BIDDER_A, Amount::from_ccd(2), start_time());
        claim_eq!(result, Ok(()));

        // Equal bid does not outbid
        let result = bid_as(&mut host, BIDDER_B, Amount::from_ccd(2), start_time());
        claim_eq!(result, Err(CustomContractError::BidTooLow.into()));
    }

    #[concordium_test]
    fn test_bid_after_deadline() {
        let mut host = host_with_auction();

        let result = bid_as(&mut host, BIDDER_A, Amount::from_ccd(2), after_deadline());
        claim_eq!(result, Err(CustomContractError::AuctionFinished.into()));
    }

    #[concordium_test]
    fn test_bid_by_seller() {
        let mut host = host_with_auction();

        let result = bid_as(&mut host, SELLER, Amount::from_ccd(2), start_time());
        claim_eq!(result, Err(CustomContractError::OwnerForbidden.into()));
    }

    #[concordium_test]
    fn test_bid_without_auction() {
        let mut host = default_host();
        mint_as(&mut host, Address::Account(SELLER), TOKEN_URL).expect_report("Failed to mint");

        let result = bid_as(&mut host, BIDDER_A, Amount::from_ccd(2), start_time());
        claim_eq!(result, Err(CustomContractError::NoActiveAuction.into()));
    }

    #[concordium_test]
    fn test_bid_from_contract() {
        let mut host = host_with_auction();

        let mut ctx = TestReceiveContext::empty();
        let mut logger = TestLogger::init();
        let bytes = to_bytes(&TOKEN_1);
        ctx.set_sender(Address::Contract(MARKETPLACE))
            .set_parameter(&bytes)
            .set_metadata_slot_time(start_time());

        let result = place_bid(&ctx, &mut host, Amount::from_ccd(2), &mut logger);
        claim_eq!(result, Err(CustomContractError::OnlyAccountAddress.into()));
    }

    #[concordium_test]
    fn test_end_auction_before_deadline() {
        let mut host = host_with_auction();

        let mut ctx = TestReceiveContext::empty();
        let mut logger = TestLogger::init();
        let bytes = to_bytes(&TOKEN_1);
        ctx.set_sender(Address::Account(SELLER))
            .set_parameter(&bytes)
            .set_metadata_slot_time(start_time());

        let result = end_auction(&ctx, &mut host, &mut logger);
        claim_eq!(result, Err(CustomContractError::AuctionStillActive.into()));
        claim!(logger.logs.is_empty());
    }

    #[concordium_test]
    fn test_auction_scenario() {
        let mut host = host_with_auction();

        let result = bid_as(&mut host, BIDDER_A, Amount::from_ccd(2), start_time());
        claim_eq!(result, Ok(()));

        let result = bid_as(
            &mut host,
            BIDDER_B,
            Amount::from_micro_ccd(1_500_000),
            start_time(),
        );
        claim_eq!(result, Err(CustomContractError::BidTooLow.into()));

        // Anyone is allowed to end the auction
        let mut ctx = TestReceiveContext::empty();
        let mut logger = TestLogger::init();
        let bytes = to_bytes(&TOKEN_1);
        ctx.set_sender(Address::Account(BIDDER_B))
            .set_parameter(&bytes)
            .set_metadata_slot_time(after_deadline());

        let result = end_auction(&ctx, &mut host, &mut logger);
        claim_eq!(result, Ok(()));

        claim_eq!(token_owner(&host, TOKEN_1), Address::Account(BIDDER_A));
        claim!(host.transfer_occurred(&SELLER, Amount::from_ccd(2)));
        claim_eq!(
            logger.logs,
            vec![
                to_bytes(&Cis2Event::Transfer(TransferEvent {
                    token_id: TOKEN_1,
                    amount: ContractTokenAmount::from(1),
                    from: Address::Account(SELLER),
                    to: Address::Account(BIDDER_A),
                })),
                to_bytes(&AuctionEvent::ended(
                    TOKEN_1,
                    Some(BIDDER_A),
                    Amount::from_ccd(2)
                )),
            ]
        );

        let auction = view_auction_of(&host, TOKEN_1).expect_report("Failed to view auction");
        claim!(!auction.active);

        // Ending twice is not possible
        let result = end_auction(&ctx, &mut host, &mut logger);
        claim_eq!(result, Err(CustomContractError::NoActiveAuction.into()));
    }

    #[concordium_test]
    fn test_bid_rejected_when_refund_fails() {
        let mut host = host_with_auction();

        let result = bid_as(&mut host, BIDDER_A, Amount::from_ccd(2), start_time());
        claim_eq!(result, Ok(()));

        // Contract balance can not cover the refund of the previous bid
        host.set_self_balance(Amount::zero());

        let mut ctx = TestReceiveContext::empty();
        let mut logger = TestLogger::init();
        let bytes = to_bytes(&TOKEN_1);
        ctx.set_sender(Address::Account(BIDDER_B))
            .set_parameter(&bytes)
            .set_metadata_slot_time(start_time());

        let result = place_bid(&ctx, &mut host, Amount::from_ccd(3), &mut logger);
        claim_eq!(result, Err(CustomContractError::InvokeTransferError.into()));
        claim!(!host.transfer_occurred(&BIDDER_A, Amount::from_ccd(2)));
    }

    #[concordium_test]
    fn test_end_auction_rejected_when_payout_fails() {
        let mut host = host_with_auction();

        let result = bid_as(&mut host, BIDDER_A, Amount::from_ccd(2), start_time());
        claim_eq!(result, Ok(()));

        host.set_self_balance(Amount::zero());

        let mut ctx = TestReceiveContext::empty();
        let mut logger = TestLogger::init();
        let bytes = to_bytes(&TOKEN_1);
        ctx.set_sender(Address::Account(SELLER))
            .set_parameter(&bytes)
            .set_metadata_slot_time(after_deadline());

        let result = end_auction(&ctx, &mut host, &mut logger);
        claim_eq!(result, Err(CustomContractError::InvokeTransferError.into()));
        claim!(!host.transfer_occurred(&SELLER, Amount::from_ccd(2)));
    }

    #[concordium_test]
    fn test_view_unknown_token() {
        let mut host = default_host();
        mint_as(&mut host, Address::Account(SELLER), TOKEN_URL).expect_report("Failed to mint");

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&TokenIdU32(2));
        ctx.set_parameter(&bytes);

        claim_eq!(view_token(&ctx, &host), Err(ContractError::InvalidTokenId));
    }

    #[concordium_test]
    fn test_end_auction_without_bids() {
        let mut host = host_with_auction();

        let mut ctx = TestReceiveContext::empty();
        let mut logger = TestLogger::init();
        let bytes = to_bytes(&TOKEN_1);
        ctx.set_sender(Address::Account(SELLER))
            .set_parameter(&bytes)
            .set_metadata_slot_time(after_deadline());

        let result = end_auction(&ctx, &mut host, &mut logger);
        claim_eq!(result, Ok(()));
        claim_eq!(
            logger.logs,
            vec![to_bytes(&AuctionEvent::ended(TOKEN_1, None, Amount::zero()))]
        );
        claim_eq!(token_owner(&host, TOKEN_1), Address::Account(SELLER));

        // Seller can auction the token again
        let result = create_auction_as(
            &mut host,
            Address::Account(SELLER),
            TOKEN_1,
            Amount::from_ccd(3),
            Duration::from_seconds(60),
        );
        claim_eq!(result, Ok(()));
        let auction = view_auction_of(&host, TOKEN_1).expect_report("Failed to view auction");
        claim!(auction.active);
        claim_eq!(auction.starting_price, Amount::from_ccd(3));
    }

    #[concordium_test]
    fn test_transfer_locked_in_auction() {
        let mut host = host_with_auction();

        let mut ctx = TestReceiveContext::empty();
        let mut logger = TestLogger::init();
        let params = TransferParams::from(vec![concordium_cis2::Transfer {
            token_id: TOKEN_1,
            amount: ContractTokenAmount::from(1),
            from: Address::Account(SELLER),
            to: Receiver::Account(BIDDER_A),
            data: AdditionalData::empty(),
        }]);
        let bytes = to_bytes(&params);
        ctx.set_sender(Address::Account(SELLER)).set_parameter(&bytes);

        let result = transfer(&ctx, &mut host, &mut logger);
        claim_eq!(result, Err(CustomContractError::TokenInAuction.into()));
        claim_eq!(token_owner(&host, TOKEN_1), Address::Account(SELLER));
    }

    #[concordium_test]
    fn test_transfer_to_contract() {
        let mut host = default_host();
        mint_as(&mut host, Address::Account(SELLER), TOKEN_URL).expect_report("Failed to mint");

        let mut ctx = TestReceiveContext::empty();
        let mut logger = TestLogger::init();
        let params = TransferParams::from(vec![concordium_cis2::Transfer {
            token_id: TOKEN_1,
            amount: ContractTokenAmount::from(1),
            from: Address::Account(SELLER),
            to: Receiver::Contract(
                MARKETPLACE,
                OwnedEntrypointName::new_unchecked(String::from("onReceivingCIS2")),
            ),
            data: AdditionalData::empty(),
        }]);
        let bytes = to_bytes(&params);
        ctx.set_sender(Address::Account(SELLER)).set_parameter(&bytes);
        host.setup_mock_entrypoint(
            MARKETPLACE,
            OwnedEntrypointName::new_unchecked(String::from("onReceivingCIS2")),
            parse_and_check_mock::<OnReceivingCis2Params<ContractTokenId, ContractTokenAmount>, _>(
                |params| params.token_id == TOKEN_1 && params.from == Address::Account(SELLER),
            ),
        );

        let result = transfer(&ctx, &mut host, &mut logger);
        claim_eq!(result, Ok(()));
        claim_eq!(token_owner(&host, TOKEN_1), Address::Contract(MARKETPLACE));
        claim_eq!(
            logger.logs,
            vec![to_bytes(&Cis2Event::Transfer(TransferEvent {
                token_id: TOKEN_1,
                amount: ContractTokenAmount::from(1),
                from: Address::Account(SELLER),
                to: Address::Contract(MARKETPLACE),
            }))]
        );
    }

    #[concordium_test]
    fn test_transfer_rejected_by_receiver() {
        let mut host = default_host();
        mint_as(&mut host, Address::Account(SELLER), TOKEN_URL).expect_report("Failed to mint");

        let mut ctx = TestReceiveContext::empty();
        let mut logger = TestLogger::init();
        let params = TransferParams::from(vec![concordium_cis2::Transfer {
            token_id: TOKEN_1,
            amount: ContractTokenAmount::from(1),
            from: Address::Account(SELLER),
            to: Receiver::Contract(
                MARKETPLACE,
                OwnedEntrypointName::new_unchecked(String::from("onReceivingCIS2")),
            ),
            data: AdditionalData::empty(),
        }]);
        let bytes = to_bytes(&params);
        ctx.set_sender(Address::Account(SELLER)).set_parameter(&bytes);
        host.setup_mock_entrypoint(
            MARKETPLACE,
            OwnedEntrypointName::new_unchecked(String::from("onReceivingCIS2")),
            trap_mock(),
        );

        let result = transfer(&ctx, &mut host, &mut logger);
        claim_eq!(result, Err(CustomContractError::InvokeContractError.into()));
    }

    #[concordium_test]
    fn test_operator_transfer() {
        let mut host = default_host();
        mint_as(&mut host, Address::Account(SELLER), TOKEN_URL).expect_report("Failed to mint");

        let transfer_params = TransferParams::from(vec![concordium_cis2::Transfer {
            token_id: TOKEN_1,
            amount: ContractTokenAmount::from(1),
            from: Address::Account(SELLER),
            to: Receiver::Account(BIDDER_B),
            data: AdditionalData::empty(),
        }]);
        let transfer_bytes = to_bytes(&transfer_params);

        // Not an operator yet
        let mut ctx = TestReceiveContext::empty();
        let mut logger = TestLogger::init();
        ctx.set_sender(Address::Account(BIDDER_A))
            .set_parameter(&transfer_bytes);
        let result = transfer(&ctx, &mut host, &mut logger);
        claim_eq!(result, Err(ContractError::Unauthorized));

        let mut operator_ctx = TestReceiveContext::empty();
        let params = UpdateOperatorParams(vec![UpdateOperator {
            update: OperatorUpdate::Add,
            operator: Address::Account(BIDDER_A),
        }]);
        let bytes = to_bytes(&params);
        operator_ctx
            .set_sender(Address::Account(SELLER))
            .set_parameter(&bytes);
        let result = update_operator(&operator_ctx, &mut host, &mut logger);
        claim_eq!(result, Ok(()));

        let mut query_ctx = TestReceiveContext::empty();
        let query = OperatorOfQueryParams {
            queries: vec![OperatorOfQuery {
                owner: Address::Account(SELLER),
                address: Address::Account(BIDDER_A),
            }],
        };
        let bytes = to_bytes(&query);
        query_ctx.set_parameter(&bytes);
        let response = operator_of(&query_ctx, &host).expect_report("Failed to query operators");
        claim_eq!(response.0, vec![true]);

        let result = transfer(&ctx, &mut host, &mut logger);
        claim_eq!(result, Ok(()));
        claim_eq!(token_owner(&host, TOKEN_1), Address::Account(BIDDER_B));
    }

    #[concordium_test]
    fn test_balance_of() {
        let mut host = default_host();
        mint_as(&mut host, Address::Account(SELLER), TOKEN_URL).expect_report("Failed to mint");

        let mut ctx = TestReceiveContext::empty();
        let params = ContractBalanceOfQueryParams {
            queries: vec![
                BalanceOfQuery {
                    token_id: TOKEN_1,
                    address: Address::Account(SELLER),
                },
                BalanceOfQuery {
                    token_id: TOKEN_1,
                    address: Address::Account(BIDDER_A),
                },
            ],
        };
        let bytes = to_bytes(&params);
        ctx.set_parameter(&bytes);

        let response = balance_of(&ctx, &host).expect_report("Failed to query balances");
        claim_eq!(
            response.0,
            vec![ContractTokenAmount::from(1), ContractTokenAmount::from(0)]
        );

        let params = ContractBalanceOfQueryParams {
            queries: vec![BalanceOfQuery {
                token_id: TokenIdU32(2),
                address: Address::Account(SELLER),
            }],
        };
        let bytes = to_bytes(&params);
        ctx.set_parameter(&bytes);
        let result = balance_of(&ctx, &host);
        claim!(matches!(result, Err(ContractError::InvalidTokenId)));
    }

    #[concordium_test]
    fn test_token_metadata() {
        let mut host = default_host();
        mint_as(&mut host, Address::Account(SELLER), TOKEN_URL).expect_report("Failed to mint");

        let mut ctx = TestReceiveContext::empty();
        let params = ContractTokenMetadataQueryParams {
            queries: vec![TOKEN_1],
        };
        let bytes = to_bytes(&params);
        ctx.set_parameter(&bytes);

        let response = token_metadata(&ctx, &host).expect_report("Failed to query metadata");
        claim_eq!(response.0.len(), 1);
        claim_eq!(response.0[0].url, String::from(TOKEN_URL));
        claim!(response.0[0].hash.is_none());
    }

    #[concordium_test]
    fn test_supports() {
        let mut host = default_host();

        let mut ctx = TestReceiveContext::empty();
        let params = SetImplementorsParams {
            id: StandardIdentifierOwned::new_unchecked(String::from("CIS-99")),
            implementors: vec![MARKETPLACE],
        };
        let bytes = to_bytes(&params);
        ctx.set_sender(Address::Account(SELLER)).set_parameter(&bytes);
        let result = set_implementors(&ctx, &mut host);
        claim_eq!(result, Err(ContractError::Unauthorized));

        ctx.set_sender(Address::Account(ADMIN));
        let result = set_implementors(&ctx, &mut host);
        claim_eq!(result, Ok(()));

        let mut ctx = TestReceiveContext::empty();
        let params = SupportsQueryParams {
            queries: vec![
                StandardIdentifierOwned::new_unchecked(String::from("CIS-2")),
                StandardIdentifierOwned::new_unchecked(String::from("CIS-99")),
                StandardIdentifierOwned::new_unchecked(String::from("CIS-1")),
            ],
        };
        let bytes = to_bytes(&params);
        ctx.set_parameter(&bytes);

        let response = supports(&ctx, &host).expect_report("Failed to query standards");
        let expected = SupportsQueryResponse::from(vec![
            SupportResult::Support,
            SupportResult::SupportBy(vec![MARKETPLACE]),
            SupportResult::NoSupport,
        ]);
        claim_eq!(to_bytes(&response), to_bytes(&expected));
    }

    #[concordium_test]
    fn test_view_authority() {
        let host = default_host();

        let mut ctx = TestReceiveContext::empty();
        let params = AuthorityViewParams {
            field: AuthorityField::Maintainer,
            skip: 0,
            show: 10,
        };
        let bytes = to_bytes(&params);
        ctx.set_parameter(&bytes);

        let result = view_authority(&ctx, &host);
        claim_eq!(result, Ok(vec![Address::Account(MAINTAINER)]));
    }

    #[concordium_test]
    fn test_update_internal_value() {
        let mut host = default_host();

        let mut ctx = TestReceiveContext::empty();
        let params = InternalValue::MaxDuration(Duration::from_hours(1));
        let bytes = to_bytes(&params);
        ctx.set_sender(Address::Account(SELLER)).set_parameter(&bytes);
        let result = update_internal_value(&ctx, &mut host);
        claim_eq!(result, Err(CustomContractError::Unauthorized.into()));

        ctx.set_sender(Address::Account(MAINTAINER));
        let result = update_internal_value(&ctx, &mut host);
        claim_eq!(result, Ok(()));

        let mut view_ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&ViewInternalValueParams::MaxDuration);
        view_ctx.set_parameter(&bytes);
        let result = view_internal_value(&view_ctx, &host);
        claim_eq!(result, Ok(InternalValue::MaxDuration(Duration::from_hours(1))));

        // New limit applies to auctions created afterwards
        mint_as(&mut host, Address::Account(SELLER), TOKEN_URL).expect_report("Failed to mint");
        let result = create_auction_as(
            &mut host,
            Address::Account(SELLER),
            TOKEN_1,
            Amount::from_ccd(1),
            Duration::from_hours(2),
        );
        claim_eq!(result, Err(CustomContractError::InvalidDuration.into()));

        let params = InternalValue::MaxDuration(Duration::from_millis(0));
        let bytes = to_bytes(&params);
        ctx.set_parameter(&bytes);
        let result = update_internal_value(&ctx, &mut host);
        claim_eq!(result, Err(CustomContractError::InvalidDuration.into()));
    }
}
