//! Ledger records a Plutus V3 validator receives: transaction, its endpoints, the
//! multi-asset [Value] algebra and the [ScriptContext] wrapping them.

pub use algebra_core::pairs::Pairs;

pub use crate::address::{Address, Credential, PaymentCredential, StakeCredential};
pub use crate::certificate::{Certificate, Delegate, DelegateRepresentative};
pub use crate::governance::{
    Constitution, GovernanceAction, GovernanceActionId, Mandate, ProposalProcedure, ProtocolVersion,
    Rational, Vote, Voter,
};
pub use crate::hash::{
    AssetName, DataHash, PolicyId, ScriptHash, StakePoolId, TransactionId, VerificationKeyHash, VrfKeyHash,
};
pub use crate::interval::{Interval, IntervalBound, IntervalBoundType, ValidityRange};
pub use crate::plutus_data::{Data, Redeemer};
pub use crate::transaction::{Datum, Input, Output, OutputReference, ScriptContext, ScriptPurpose, Transaction};
pub use crate::value::{Quantity, Value};

pub mod address;
pub mod certificate;
pub mod constants;
pub mod display;
pub mod governance;
pub mod hash;
pub mod interval;
pub mod plutus_data;
pub mod transaction;
pub mod value;

pub type Lovelace = u64;

/// Position of an item within a transaction field.
pub type Index = u64;
