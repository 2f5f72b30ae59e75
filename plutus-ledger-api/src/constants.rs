use lazy_static::lazy_static;

use crate::hash::{AssetName, PolicyId, TransactionId};

lazy_static! {
    /// Lovelace lives under the empty policy id.
    pub static ref ADA_POLICY_ID: PolicyId = PolicyId::default();
    pub static ref ADA_ASSET_NAME: AssetName = AssetName::default();
    pub static ref ZERO_TRANSACTION_ID: TransactionId = TransactionId::zero();
}
