//! Field-by-field construction of a [Transaction], starting from [placeholder].
//!
//! Every function consumes the transaction and returns the updated one:
//!
//! ```ignore
//! let tx = placeholder();
//! let tx = add_tx_input(tx, tx_in);
//! let tx = add_tx_output(tx, tx_out);
//! let tx = add_signatory(tx, VerificationKeyHash::from("Alice"));
//! ```

use std::cmp::Ordering;
use std::collections::BTreeMap;

use log::trace;

use algebra_core::pairs::{MalformedSequence, Pairs};
use plutus_ledger_api::display::display_option;
use plutus_ledger_api::{
    Certificate, Credential, Data, DataHash, GovernanceAction, GovernanceActionId, Input, Lovelace, Output,
    ProposalProcedure, Redeemer, ScriptPurpose, Transaction, TransactionId, ValidityRange, Value,
    VerificationKeyHash, Vote, Voter,
};

use crate::compare;

pub fn placeholder() -> Transaction {
    Transaction::placeholder()
}

/// Set `Transaction.id`. Defaults to 32 zero bytes.
pub fn set_id(tx: Transaction, id: TransactionId) -> Transaction {
    trace!(target: "tx_util", "set_id({})", id);
    Transaction { id, ..tx }
}

pub fn set_validity_range(tx: Transaction, validity_range: ValidityRange) -> Transaction {
    trace!(target: "tx_util", "set_validity_range({:?})", validity_range);
    Transaction { validity_range, ..tx }
}

pub fn set_fee(tx: Transaction, fee: Lovelace) -> Transaction {
    trace!(target: "tx_util", "set_fee({})", fee);
    Transaction { fee, ..tx }
}

/// Push `tx_in` to the tail of `Transaction.inputs`.
pub fn add_tx_input(mut tx: Transaction, tx_in: Input) -> Transaction {
    trace!(target: "tx_util", "add_tx_input({})", tx_in.output_reference);
    tx.inputs.push(tx_in);
    tx
}

/// Push `tx_ref_in` to the tail of `Transaction.reference_inputs`.
pub fn add_tx_ref_input(mut tx: Transaction, tx_ref_in: Input) -> Transaction {
    trace!(target: "tx_util", "add_tx_ref_input({})", tx_ref_in.output_reference);
    tx.reference_inputs.push(tx_ref_in);
    tx
}

/// Push `tx_out` to the tail of `Transaction.outputs`.
pub fn add_tx_output(mut tx: Transaction, tx_out: Output) -> Transaction {
    trace!(target: "tx_util", "add_tx_output(value: {})", tx_out.value);
    tx.outputs.push(tx_out);
    tx
}

/// Merge `asset` into `Transaction.mint`. Minting and later burning the same amount
/// leaves no trace of the asset.
pub fn add_mint(tx: Transaction, asset: Value) -> Transaction {
    trace!(target: "tx_util", "add_mint({})", asset);
    Transaction {
        mint: tx.mint.merge(asset),
        ..tx
    }
}

pub fn add_certificate(mut tx: Transaction, certificate: Certificate) -> Transaction {
    trace!(target: "tx_util", "add_certificate({:?})", certificate);
    tx.certificates.push(certificate);
    tx
}

/// Upsert a withdrawal under the canonical credential order.
pub fn add_withdrawal(tx: Transaction, withdrawal_key: Credential, withdrawal_value: Lovelace) -> Transaction {
    insert_withdrawal(tx, withdrawal_key, withdrawal_value, compare::credential)
}

/// Upsert a withdrawal under a caller-supplied order.
pub fn insert_withdrawal<F>(
    tx: Transaction,
    withdrawal_key: Credential,
    withdrawal_value: Lovelace,
    withdrawal_compare: F,
) -> Transaction
where
    F: Fn(&Credential, &Credential) -> Ordering,
{
    trace!(target: "tx_util", "insert_withdrawal({:?}, {})", withdrawal_key, withdrawal_value);
    Transaction {
        withdrawals: tx
            .withdrawals
            .insert_or_replace(withdrawal_key, withdrawal_value, withdrawal_compare),
        ..tx
    }
}

/// Replace `Transaction.withdrawals` as is. Order and key uniqueness are the caller's concern.
pub fn set_withdrawals(tx: Transaction, withdrawals: Pairs<Credential, Lovelace>) -> Transaction {
    trace!(target: "tx_util", "set_withdrawals(len: {})", withdrawals.len());
    Transaction { withdrawals, ..tx }
}

/// Like [set_withdrawals], but rejects withdrawals that are not strictly ascending
/// under the canonical credential order.
pub fn try_set_withdrawals(
    tx: Transaction,
    withdrawals: Pairs<Credential, Lovelace>,
) -> Result<Transaction, MalformedSequence> {
    withdrawals.validate(compare::credential)?;
    Ok(set_withdrawals(tx, withdrawals))
}

pub fn add_signatory(mut tx: Transaction, signatory: VerificationKeyHash) -> Transaction {
    trace!(target: "tx_util", "add_signatory({})", signatory);
    tx.extra_signatories.push(signatory);
    tx
}

/// Insert a datum into `Transaction.datums`, overriding an existing entry with the same hash.
pub fn add_datum(mut tx: Transaction, datum_key: DataHash, datum_value: Data) -> Transaction {
    trace!(target: "tx_util", "add_datum({})", datum_key);
    tx.datums.insert(datum_key, datum_value);
    tx
}

pub fn set_datums(tx: Transaction, datums: BTreeMap<DataHash, Data>) -> Transaction {
    trace!(target: "tx_util", "set_datums(len: {})", datums.len());
    Transaction { datums, ..tx }
}

/// Upsert a redeemer under the canonical purpose order.
pub fn add_redeemer(tx: Transaction, redeemer_key: ScriptPurpose, redeemer_value: Redeemer) -> Transaction {
    insert_redeemer(tx, redeemer_key, redeemer_value, compare::script_purpose)
}

/// Upsert a redeemer under a caller-supplied order.
pub fn insert_redeemer<F>(
    tx: Transaction,
    redeemer_key: ScriptPurpose,
    redeemer_value: Redeemer,
    redeemer_compare: F,
) -> Transaction
where
    F: Fn(&ScriptPurpose, &ScriptPurpose) -> Ordering,
{
    trace!(target: "tx_util", "insert_redeemer({})", redeemer_key.tag());
    Transaction {
        redeemers: tx
            .redeemers
            .insert_or_replace(redeemer_key, redeemer_value, redeemer_compare),
        ..tx
    }
}

/// Replace `Transaction.redeemers` as is. Order and key uniqueness are the caller's concern.
pub fn set_redeemers(tx: Transaction, redeemers: Pairs<ScriptPurpose, Redeemer>) -> Transaction {
    trace!(target: "tx_util", "set_redeemers(len: {})", redeemers.len());
    Transaction { redeemers, ..tx }
}

/// Like [set_redeemers], but rejects redeemers that are not strictly ascending
/// under the canonical purpose order.
pub fn try_set_redeemers(
    tx: Transaction,
    redeemers: Pairs<ScriptPurpose, Redeemer>,
) -> Result<Transaction, MalformedSequence> {
    redeemers.validate(compare::script_purpose)?;
    Ok(set_redeemers(tx, redeemers))
}

/// Upsert the votes cast by `vote_key`. An earlier ballot of the same voter is replaced whole.
pub fn add_vote(
    tx: Transaction,
    vote_key: Voter,
    vote_value: Pairs<GovernanceActionId, Vote>,
) -> Transaction {
    trace!(target: "tx_util", "add_vote({:?}, ballots: {})", vote_key, vote_value.len());
    Transaction {
        votes: tx.votes.insert_or_replace(vote_key, vote_value, compare::voter),
        ..tx
    }
}

pub fn add_proposal_procedure(
    mut tx: Transaction,
    deposit: Lovelace,
    return_address: Credential,
    governance_action: GovernanceAction,
) -> Transaction {
    trace!(target: "tx_util", "add_proposal_procedure(deposit: {})", deposit);
    tx.proposal_procedures.push(ProposalProcedure {
        deposit,
        return_address,
        governance_action,
    });
    tx
}

pub fn set_current_treasury_amount(tx: Transaction, amount: Lovelace) -> Transaction {
    trace!(target: "tx_util", "set_current_treasury_amount({})", amount);
    Transaction {
        current_treasury_amount: Some(amount),
        ..tx
    }
}

/// Back to absent, which is not the same as an amount of zero.
pub fn unset_current_treasury_amount(tx: Transaction) -> Transaction {
    trace!(
        target: "tx_util",
        "unset_current_treasury_amount(previous: {})",
        display_option(tx.current_treasury_amount)
    );
    Transaction {
        current_treasury_amount: None,
        ..tx
    }
}

pub fn set_treasury_donation(tx: Transaction, donation: Lovelace) -> Transaction {
    trace!(target: "tx_util", "set_treasury_donation({})", donation);
    Transaction {
        treasury_donation: Some(donation),
        ..tx
    }
}

pub fn unset_treasury_donation(tx: Transaction) -> Transaction {
    trace!(
        target: "tx_util",
        "unset_treasury_donation(previous: {})",
        display_option(tx.treasury_donation)
    );
    Transaction {
        treasury_donation: None,
        ..tx
    }
}
