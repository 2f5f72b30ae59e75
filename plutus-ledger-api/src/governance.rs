use serde::{Deserialize, Serialize};

use algebra_core::pairs::Pairs;

use crate::address::Credential;
use crate::hash::{ScriptHash, StakePoolId, TransactionId};
use crate::plutus_data::Data;
use crate::{Index, Lovelace};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Voter {
    ConstitutionalCommitteeMember(Credential),
    DelegateRepresentative(Credential),
    StakePool(StakePoolId),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vote {
    No,
    Yes,
    Abstain,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GovernanceActionId {
    pub transaction: TransactionId,
    pub proposal_procedure: Index,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProtocolVersion {
    pub major: u64,
    pub minor: u64,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rational {
    pub numerator: i64,
    pub denominator: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Constitution {
    pub guardrails: Option<ScriptHash>,
}

/// Term limit of a committee member, in epochs.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mandate(pub u64);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GovernanceAction {
    ProtocolParameters {
        ancestor: Option<GovernanceActionId>,
        new_parameters: Data,
        guardrails: Option<ScriptHash>,
    },
    HardFork {
        ancestor: Option<GovernanceActionId>,
        new_version: ProtocolVersion,
    },
    TreasuryWithdrawal {
        beneficiaries: Pairs<Credential, Lovelace>,
        guardrails: Option<ScriptHash>,
    },
    NoConfidence {
        ancestor: Option<GovernanceActionId>,
    },
    ConstitutionalCommittee {
        ancestor: Option<GovernanceActionId>,
        evicted_members: Vec<Credential>,
        added_members: Pairs<Credential, Mandate>,
        quorum: Rational,
    },
    NewConstitution {
        ancestor: Option<GovernanceActionId>,
        constitution: Constitution,
    },
    NicePoll,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProposalProcedure {
    pub deposit: Lovelace,
    pub return_address: Credential,
    pub governance_action: GovernanceAction,
}
