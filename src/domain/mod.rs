//! Records mirrored from the remote system of record, plus the value objects
//! and session state they rely on.

pub mod admin;
pub mod card;
pub mod card_application;
pub mod collection;
pub mod config_entry;
pub mod deposit;
pub mod kyc;
pub mod session;
pub mod types;
pub mod user;
pub mod wallet_log;
pub mod withdrawal;
