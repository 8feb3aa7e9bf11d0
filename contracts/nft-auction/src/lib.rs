//! An NFT contract with built-in English auctions, following the Concordium
//! Token Standard CIS2.
//!
//! # Description
//! Any address can mint a token. Token ids are assigned sequentially starting
//! at 1, and every token carries the metadata URL given on mint.
//!
//! The owner of a token can put it up for auction with a starting price and a
//! duration. While the auction runs the token can not be transferred. Accounts
//! bid by sending CCD; each accepted bid must exceed the current highest bid,
//! and the previous highest bidder is refunded immediately. Once the deadline
//! has passed anyone can end the auction: the token goes to the highest bidder
//! and the winning bid goes to the seller.
//!
//! Note: The word 'address' refers to either an account address or a
//! contract address.
#![cfg_attr(not(feature = "std"), no_std)]

mod contract;
pub mod events;
pub mod external;
pub mod state;
