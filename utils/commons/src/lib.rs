//! It exposes the error type, type aliases, event tags and the authority
//! module shared by the auction contracts.
#![cfg_attr(not(feature = "std"), no_std)]
pub use crate::{authority::*, constants::*, errors::*, types::*};
use concordium_cis2::*;
use concordium_std::*;

pub mod test;

mod authority;
mod constants;
mod errors;
mod types;
