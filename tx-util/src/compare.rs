//! Canonical total orders for the keyed transaction fields.
//!
//! These mirror the ledger's own ordering so that fixtures built with `add_*` list withdrawals,
//! redeemers and votes the way a real node would hand them to a validator. Any other order
//! can be used through the `insert_*` builders.

use std::cmp::Ordering;

use plutus_ledger_api::{Credential, GovernanceActionId, OutputReference, ScriptPurpose, Voter};

/// Script credentials sort before key credentials, then by hash bytes.
pub fn credential(a: &Credential, b: &Credential) -> Ordering {
    match (a, b) {
        (Credential::Script(x), Credential::Script(y)) => x.as_bytes().cmp(y.as_bytes()),
        (Credential::VerificationKey(x), Credential::VerificationKey(y)) => x.as_bytes().cmp(y.as_bytes()),
        (Credential::Script(_), Credential::VerificationKey(_)) => Ordering::Less,
        (Credential::VerificationKey(_), Credential::Script(_)) => Ordering::Greater,
    }
}

pub fn output_reference(a: &OutputReference, b: &OutputReference) -> Ordering {
    a.transaction_id
        .as_bytes()
        .cmp(b.transaction_id.as_bytes())
        .then(a.output_index.cmp(&b.output_index))
}

/// Redeemer order: by purpose tag (spend, mint, publish, withdraw, vote, propose), then by
/// the purpose's own key. Publish and Propose are keyed by their index only, so two purposes
/// at the same index are the same key.
pub fn script_purpose(a: &ScriptPurpose, b: &ScriptPurpose) -> Ordering {
    fn rank(purpose: &ScriptPurpose) -> u8 {
        match purpose {
            ScriptPurpose::Spend(_) => 0,
            ScriptPurpose::Mint(_) => 1,
            ScriptPurpose::Publish { .. } => 2,
            ScriptPurpose::Withdraw(_) => 3,
            ScriptPurpose::Vote(_) => 4,
            ScriptPurpose::Propose { .. } => 5,
        }
    }
    match (a, b) {
        (ScriptPurpose::Spend(x), ScriptPurpose::Spend(y)) => output_reference(x, y),
        (ScriptPurpose::Mint(x), ScriptPurpose::Mint(y)) => x.as_bytes().cmp(y.as_bytes()),
        (ScriptPurpose::Publish { at: x, .. }, ScriptPurpose::Publish { at: y, .. }) => x.cmp(y),
        (ScriptPurpose::Withdraw(x), ScriptPurpose::Withdraw(y)) => credential(x, y),
        (ScriptPurpose::Vote(x), ScriptPurpose::Vote(y)) => voter(x, y),
        (ScriptPurpose::Propose { at: x, .. }, ScriptPurpose::Propose { at: y, .. }) => x.cmp(y),
        _ => rank(a).cmp(&rank(b)),
    }
}

/// Committee members, then DReps, then stake pools.
pub fn voter(a: &Voter, b: &Voter) -> Ordering {
    match (a, b) {
        (Voter::ConstitutionalCommitteeMember(x), Voter::ConstitutionalCommitteeMember(y)) => credential(x, y),
        (Voter::DelegateRepresentative(x), Voter::DelegateRepresentative(y)) => credential(x, y),
        (Voter::StakePool(x), Voter::StakePool(y)) => x.as_bytes().cmp(y.as_bytes()),
        _ => rank_voter(a).cmp(&rank_voter(b)),
    }
}

fn rank_voter(voter: &Voter) -> u8 {
    match voter {
        Voter::ConstitutionalCommitteeMember(_) => 0,
        Voter::DelegateRepresentative(_) => 1,
        Voter::StakePool(_) => 2,
    }
}

pub fn governance_action_id(a: &GovernanceActionId, b: &GovernanceActionId) -> Ordering {
    a.transaction
        .as_bytes()
        .cmp(b.transaction.as_bytes())
        .then(a.proposal_procedure.cmp(&b.proposal_procedure))
}
