//! Pure builders for transaction and script-context test fixtures.
//!
//! [txn] works on a bare [Transaction](plutus_ledger_api::Transaction), [context] on a
//! [ScriptContext](plutus_ledger_api::ScriptContext), [endpoint] assembles the inputs and
//! outputs pushed into either. Every builder takes its record by value and hands back the
//! updated one, nothing is mutated behind the caller's back.

pub mod compare;
pub mod context;
pub mod endpoint;
pub mod txn;
