//! [ScriptContext] counterparts of the [txn](crate::txn) builders, plus setters for the
//! script purpose.
//!
//! ```ignore
//! let ctx = build_txn_context(Interval::after(now));
//! let ctx = add_tx_ref_input(ctx, tx_ref_in);
//! let ctx = add_tx_input(ctx, tx_in);
//! let ctx = add_tx_output(ctx, tx_out);
//! let ctx = add_signatory(ctx, VerificationKeyHash::from("PubKeyHash"));
//! let ctx = spend(ctx, tx_in_ref);
//! ```

use std::cmp::Ordering;
use std::collections::BTreeMap;

use log::trace;

use algebra_core::pairs::Pairs;
use plutus_ledger_api::{
    Certificate, Credential, Data, DataHash, Index, Input, Lovelace, Output, OutputReference, PolicyId,
    ProposalProcedure, Redeemer, ScriptContext, ScriptPurpose, Transaction, TransactionId, ValidityRange,
    Value, VerificationKeyHash, Voter,
};

use crate::txn;

/// Starting point of every context fixture: a placeholder transaction valid within
/// `validity_range`, with no purpose set.
pub fn build_txn_context(validity_range: ValidityRange) -> ScriptContext {
    ScriptContext {
        transaction: txn::set_validity_range(txn::placeholder(), validity_range),
        purpose: None,
    }
}

fn with_transaction<F>(ctx: ScriptContext, f: F) -> ScriptContext
where
    F: FnOnce(Transaction) -> Transaction,
{
    ScriptContext {
        transaction: f(ctx.transaction),
        ..ctx
    }
}

fn with_purpose(ctx: ScriptContext, purpose: ScriptPurpose) -> ScriptContext {
    trace!(target: "tx_util", "set purpose {}", purpose.tag());
    ScriptContext {
        purpose: Some(purpose),
        ..ctx
    }
}

pub fn set_id(ctx: ScriptContext, id: TransactionId) -> ScriptContext {
    with_transaction(ctx, |tx| txn::set_id(tx, id))
}

pub fn set_validity_range(ctx: ScriptContext, validity_range: ValidityRange) -> ScriptContext {
    with_transaction(ctx, |tx| txn::set_validity_range(tx, validity_range))
}

pub fn set_fee(ctx: ScriptContext, fee: Lovelace) -> ScriptContext {
    with_transaction(ctx, |tx| txn::set_fee(tx, fee))
}

/// Purpose: spending the output at `o_ref`.
pub fn spend(ctx: ScriptContext, o_ref: OutputReference) -> ScriptContext {
    with_purpose(ctx, ScriptPurpose::Spend(o_ref))
}

/// Purpose: minting under `policy_id`. `transaction.mint` is replaced with `assets`.
pub fn mint_assets(ctx: ScriptContext, policy_id: PolicyId, assets: Value) -> ScriptContext {
    let ctx = with_transaction(ctx, |tx| Transaction { mint: assets, ..tx });
    with_purpose(ctx, ScriptPurpose::Mint(policy_id))
}

/// Purpose: withdrawing rewards of `credential`.
pub fn withdraw_stake_rewards(ctx: ScriptContext, credential: Credential) -> ScriptContext {
    with_purpose(ctx, ScriptPurpose::Withdraw(credential))
}

/// Purpose: publishing `certificate`, found at position `at` of `transaction.certificates`.
pub fn publish_stake(ctx: ScriptContext, certificate: Certificate, at: Index) -> ScriptContext {
    with_purpose(ctx, ScriptPurpose::Publish { at, certificate })
}

pub fn vote_governance(ctx: ScriptContext, voter: Voter) -> ScriptContext {
    with_purpose(ctx, ScriptPurpose::Vote(voter))
}

pub fn propose_governance(ctx: ScriptContext, proposal_procedure: ProposalProcedure, at: Index) -> ScriptContext {
    with_purpose(
        ctx,
        ScriptPurpose::Propose {
            at,
            proposal_procedure,
        },
    )
}

pub fn add_signatory(ctx: ScriptContext, signatory: VerificationKeyHash) -> ScriptContext {
    with_transaction(ctx, |tx| txn::add_signatory(tx, signatory))
}

pub fn add_tx_ref_input(ctx: ScriptContext, tx_ref_in: Input) -> ScriptContext {
    with_transaction(ctx, |tx| txn::add_tx_ref_input(tx, tx_ref_in))
}

pub fn add_tx_input(ctx: ScriptContext, tx_in: Input) -> ScriptContext {
    with_transaction(ctx, |tx| txn::add_tx_input(tx, tx_in))
}

pub fn add_tx_output(ctx: ScriptContext, tx_out: Output) -> ScriptContext {
    with_transaction(ctx, |tx| txn::add_tx_output(tx, tx_out))
}

pub fn add_certificate(ctx: ScriptContext, certificate: Certificate) -> ScriptContext {
    with_transaction(ctx, |tx| txn::add_certificate(tx, certificate))
}

pub fn set_withdrawals(ctx: ScriptContext, withdrawals: Pairs<Credential, Lovelace>) -> ScriptContext {
    with_transaction(ctx, |tx| txn::set_withdrawals(tx, withdrawals))
}

pub fn insert_withdrawal<F>(
    ctx: ScriptContext,
    withdrawal_key: Credential,
    withdrawal_value: Lovelace,
    withdrawal_compare: F,
) -> ScriptContext
where
    F: Fn(&Credential, &Credential) -> Ordering,
{
    with_transaction(ctx, |tx| {
        txn::insert_withdrawal(tx, withdrawal_key, withdrawal_value, withdrawal_compare)
    })
}

pub fn set_redeemers(ctx: ScriptContext, redeemers: Pairs<ScriptPurpose, Redeemer>) -> ScriptContext {
    with_transaction(ctx, |tx| txn::set_redeemers(tx, redeemers))
}

pub fn insert_redeemer<F>(
    ctx: ScriptContext,
    redeemer_key: ScriptPurpose,
    redeemer_value: Redeemer,
    redeemer_compare: F,
) -> ScriptContext
where
    F: Fn(&ScriptPurpose, &ScriptPurpose) -> Ordering,
{
    with_transaction(ctx, |tx| {
        txn::insert_redeemer(tx, redeemer_key, redeemer_value, redeemer_compare)
    })
}

pub fn set_datums(ctx: ScriptContext, datums: BTreeMap<DataHash, Data>) -> ScriptContext {
    with_transaction(ctx, |tx| txn::set_datums(tx, datums))
}
