use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use algebra_core::pairs::Pairs;

use crate::address::{Address, Credential};
use crate::certificate::Certificate;
use crate::constants::ZERO_TRANSACTION_ID;
use crate::governance::{GovernanceActionId, ProposalProcedure, Vote, Voter};
use crate::hash::{DataHash, PolicyId, ScriptHash, TransactionId, VerificationKeyHash};
use crate::interval::ValidityRange;
use crate::plutus_data::{Data, Redeemer};
use crate::value::Value;
use crate::{Index, Lovelace};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutputReference {
    pub transaction_id: TransactionId,
    pub output_index: Index,
}

impl OutputReference {
    pub fn new(transaction_id: impl Into<TransactionId>, output_index: Index) -> Self {
        Self {
            transaction_id: transaction_id.into(),
            output_index,
        }
    }
}

impl Display for OutputReference {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.transaction_id, self.output_index)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Datum {
    #[default]
    NoDatum,
    DatumHash(DataHash),
    InlineDatum(Data),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Output {
    pub address: Address,
    pub value: Value,
    pub datum: Datum,
    pub reference_script: Option<ScriptHash>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Input {
    pub output_reference: OutputReference,
    pub output: Output,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub inputs: Vec<Input>,
    pub reference_inputs: Vec<Input>,
    pub outputs: Vec<Output>,
    pub fee: Lovelace,
    pub mint: Value,
    pub certificates: Vec<Certificate>,
    pub withdrawals: Pairs<Credential, Lovelace>,
    pub validity_range: ValidityRange,
    pub extra_signatories: Vec<VerificationKeyHash>,
    pub redeemers: Pairs<ScriptPurpose, Redeemer>,
    pub datums: BTreeMap<DataHash, Data>,
    pub id: TransactionId,
    pub votes: Pairs<Voter, Pairs<GovernanceActionId, Vote>>,
    pub proposal_procedures: Vec<ProposalProcedure>,
    pub current_treasury_amount: Option<Lovelace>,
    pub treasury_donation: Option<Lovelace>,
}

impl Transaction {
    /// Canonical empty transaction: no inputs/outputs, zero fee, all-zero id,
    /// unbounded validity range, optional fields absent.
    pub fn placeholder() -> Self {
        Self {
            inputs: vec![],
            reference_inputs: vec![],
            outputs: vec![],
            fee: 0,
            mint: Value::zero(),
            certificates: vec![],
            withdrawals: Pairs::new(),
            validity_range: ValidityRange::everything(),
            extra_signatories: vec![],
            redeemers: Pairs::new(),
            datums: BTreeMap::new(),
            id: ZERO_TRANSACTION_ID.clone(),
            votes: Pairs::new(),
            proposal_procedures: vec![],
            current_treasury_amount: None,
            treasury_donation: None,
        }
    }
}

impl Default for Transaction {
    fn default() -> Self {
        Self::placeholder()
    }
}

/// Why a script is being run, with the argument relevant to that reason.
/// Also keys [Transaction::redeemers].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScriptPurpose {
    Mint(PolicyId),
    Spend(OutputReference),
    Withdraw(Credential),
    Publish {
        at: Index,
        certificate: Certificate,
    },
    Vote(Voter),
    Propose {
        at: Index,
        proposal_procedure: ProposalProcedure,
    },
}

impl ScriptPurpose {
    pub fn tag(&self) -> &'static str {
        match self {
            ScriptPurpose::Mint(_) => "Mint",
            ScriptPurpose::Spend(_) => "Spend",
            ScriptPurpose::Withdraw(_) => "Withdraw",
            ScriptPurpose::Publish { .. } => "Publish",
            ScriptPurpose::Vote(_) => "Vote",
            ScriptPurpose::Propose { .. } => "Propose",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScriptContext {
    pub transaction: Transaction,
    /// `None` until one of the purpose setters is applied.
    pub purpose: Option<ScriptPurpose>,
}
