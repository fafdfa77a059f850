//! Safe transaction service tools
//!
//! One module per tool. Argument parsing is kept in pure functions separate
//! from the HTTP call.

pub mod decode_data;
pub mod multisig_transaction;
pub mod safe_transactions;

pub use decode_data::{DecodeDataArgs, DecodeDataTool};
pub use multisig_transaction::{MultisigTransactionArgs, MultisigTransactionTool};
pub use safe_transactions::{SafeTransactionsArgs, SafeTransactionsTool};
