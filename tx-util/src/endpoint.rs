//! Standalone inputs and outputs, assembled before they are pushed to a transaction.
//!
//! ```ignore
//! let tx_in = new_tx_input(output_reference, address);
//! let tx_in = set_datum_of_tx_input(tx_in, Datum::InlineDatum(datum));
//! let tx_in = with_asset_of_tx_input(tx_in, Value::from_lovelace(2_000_000));
//! let tx_in = with_asset_of_tx_input(tx_in, Value::from_asset("PolicyId1", "Nft1", 1));
//! ```

use log::trace;

use plutus_ledger_api::display::display_option;
use plutus_ledger_api::{Address, Datum, Input, Output, OutputReference, ScriptHash, Value};

/// Input with zero value, no datum and no reference script.
pub fn new_tx_input(output_reference: OutputReference, address: Address) -> Input {
    trace!(target: "tx_util", "new_tx_input(output_reference: {})", output_reference);
    Input {
        output_reference,
        output: new_tx_output(address),
    }
}

/// Merge `asset` into the input's value. Repeated calls accumulate.
pub fn with_asset_of_tx_input(input: Input, asset: Value) -> Input {
    trace!(target: "tx_util", "with_asset_of_tx_input({}, asset: {})", input.output_reference, asset);
    Input {
        output: add_asset_to_tx_output(input.output, asset),
        ..input
    }
}

pub fn set_datum_of_tx_input(input: Input, datum: Datum) -> Input {
    Input {
        output: set_datum_of_tx_output(input.output, datum),
        ..input
    }
}

pub fn attach_ref_script_to_tx_input(input: Input, ref_script: ScriptHash) -> Input {
    Input {
        output: attach_ref_script_to_tx_output(input.output, ref_script),
        ..input
    }
}

pub fn remove_ref_script_from_tx_input(input: Input) -> Input {
    Input {
        output: remove_ref_script_from_tx_output(input.output),
        ..input
    }
}

/// Output with zero value, no datum and no reference script.
pub fn new_tx_output(address: Address) -> Output {
    Output {
        address,
        value: Value::zero(),
        datum: Datum::NoDatum,
        reference_script: None,
    }
}

/// Merge `asset` into the output's value. Repeated calls accumulate.
pub fn add_asset_to_tx_output(output: Output, asset: Value) -> Output {
    trace!(target: "tx_util", "add_asset_to_tx_output(asset: {})", asset);
    Output {
        value: output.value.merge(asset),
        ..output
    }
}

pub fn set_datum_of_tx_output(output: Output, datum: Datum) -> Output {
    trace!(target: "tx_util", "set_datum_of_tx_output(datum: {:?})", datum);
    Output { datum, ..output }
}

pub fn attach_ref_script_to_tx_output(output: Output, ref_script: ScriptHash) -> Output {
    trace!(target: "tx_util", "attach_ref_script_to_tx_output(ref_script: {})", ref_script);
    Output {
        reference_script: Some(ref_script),
        ..output
    }
}

pub fn remove_ref_script_from_tx_output(output: Output) -> Output {
    trace!(
        target: "tx_util",
        "remove_ref_script_from_tx_output(previous: {})",
        display_option(output.reference_script.as_ref())
    );
    Output {
        reference_script: None,
        ..output
    }
}
