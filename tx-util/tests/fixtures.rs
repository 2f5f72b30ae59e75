use plutus_ledger_api::constants::{ADA_ASSET_NAME, ADA_POLICY_ID};
use plutus_ledger_api::{
    Address, AssetName, Credential, Data, Datum, Input, Interval, OutputReference, PolicyId, ScriptHash,
    ScriptPurpose, Transaction, TransactionId, Value, VerificationKeyHash,
};
use rand::Rng;
use tx_util::endpoint::{
    add_asset_to_tx_output, attach_ref_script_to_tx_input, new_tx_input, new_tx_output,
    set_datum_of_tx_input, set_datum_of_tx_output, with_asset_of_tx_input,
};
use tx_util::{compare, context, txn};

fn hash_from_hex(raw: &str) -> Vec<u8> {
    hex::decode(raw).unwrap()
}

fn lovelace_input() -> Input {
    let output_reference = OutputReference::new(
        TransactionId::from(hash_from_hex(
            "0000000000000000000000000000000000000000000000000000000000000064",
        )),
        0,
    );
    let address = Address::from_verification_key(VerificationKeyHash::from(hash_from_hex(
        "00000000000000000000000000000000000000000000000000000056",
    )));
    with_asset_of_tx_input(
        new_tx_input(output_reference, address),
        Value::from_lovelace(2_000_000),
    )
}

#[test]
fn single_lovelace_input() {
    let tx = txn::add_tx_input(txn::placeholder(), lovelace_input());

    assert_eq!(tx.inputs.len(), 1);
    let tx_in = &tx.inputs[0];
    assert_eq!(tx_in.output_reference.output_index, 0);
    assert_eq!(
        tx_in.output.value.flatten(),
        vec![(ADA_POLICY_ID.clone(), ADA_ASSET_NAME.clone(), 2_000_000)]
    );
    assert_eq!(tx_in.output.datum, Datum::NoDatum);
    assert_eq!(tx_in.output.reference_script, None);
}

#[test]
fn mint_and_burn_cancel() {
    let tx = txn::add_mint(txn::placeholder(), Value::from_asset("P1", "A1", 10));
    let tx = txn::add_mint(tx, Value::from_asset("P1", "A1", -10));
    assert_eq!(tx.mint.tokens(&PolicyId::from("P1")), None);
    assert_eq!(tx.mint, Transaction::placeholder().mint);
}

#[test]
fn input_fixture_loads_from_json() {
    let loaded: Input = serde_json::from_str(include_str!("fixtures/lovelace_input.json")).unwrap();
    assert_eq!(loaded, lovelace_input());
}

#[test]
fn context_survives_json_round_trip() {
    let ctx = context::build_txn_context(Interval::after(1_700_000_000_000));
    let ctx = context::add_tx_input(ctx, lovelace_input());
    let ctx = context::mint_assets(ctx, PolicyId::from("Nft"), Value::from_asset("Nft", "Token", 1));
    let ctx = context::insert_redeemer(
        ctx,
        ScriptPurpose::Mint(PolicyId::from("Nft")),
        Data::void(),
        compare::script_purpose,
    );
    let json = serde_json::to_string(&ctx).unwrap();
    assert_eq!(serde_json::from_str::<plutus_ledger_api::ScriptContext>(&json).unwrap(), ctx);
}

/// A spending validator fixture: one reference input holding a token, one script input
/// with NFT and assets, one script output paying part of them back.
#[test]
fn spending_validator_fixture() {
    let nft = Value::from_asset("NftPolicy", "NftName", 1);
    let token = Value::from_asset("TokenPolicy", "TokenName", 10);
    let asset_1 = Value::from_asset("AssetPolicy1", "AssetName1", 1);
    let asset_2 = Value::from_asset("AssetPolicy2", "AssetName2", 1000);
    let asset_2_partial = Value::from_asset("AssetPolicy2", "AssetName2", 100);

    let tx_ref_in = new_tx_input(
        OutputReference::new("TxRefInHash", 0),
        Address::from_verification_key("PubKeyHash"),
    );
    let tx_ref_in = with_asset_of_tx_input(tx_ref_in, Value::from_lovelace(5_000_000));
    let tx_ref_in = with_asset_of_tx_input(tx_ref_in, token.clone());

    let in_ref = OutputReference::new("TxInHash", 1);
    let tx_in = new_tx_input(in_ref.clone(), Address::from_script("ValidatorHash"));
    let tx_in = set_datum_of_tx_input(tx_in, Datum::InlineDatum(Data::Int(0)));
    let tx_in = attach_ref_script_to_tx_input(tx_in, ScriptHash::from("ValidatorHash"));
    let tx_in = with_asset_of_tx_input(tx_in, Value::from_lovelace(2_000_000));
    let tx_in = with_asset_of_tx_input(tx_in, nft.clone());
    let tx_in = with_asset_of_tx_input(tx_in, asset_1.clone());
    let tx_in = with_asset_of_tx_input(tx_in, asset_2);

    let tx_out = new_tx_output(Address::from_script("ValidatorHash"));
    let tx_out = set_datum_of_tx_output(tx_out, Datum::InlineDatum(Data::Int(1)));
    let tx_out = add_asset_to_tx_output(tx_out, Value::from_lovelace(2_000_000));
    let tx_out = add_asset_to_tx_output(tx_out, nft);
    let tx_out = add_asset_to_tx_output(tx_out, asset_1);
    let tx_out = add_asset_to_tx_output(tx_out, asset_2_partial);

    let ctx = context::build_txn_context(Interval::after(0));
    let ctx = context::add_tx_ref_input(ctx, tx_ref_in);
    let ctx = context::add_tx_input(ctx, tx_in);
    let ctx = context::add_tx_output(ctx, tx_out);
    let ctx = context::add_signatory(ctx, VerificationKeyHash::from("PubKeyHash"));
    let ctx = context::spend(ctx, in_ref.clone());

    assert_eq!(ctx.purpose, Some(ScriptPurpose::Spend(in_ref)));
    let tx = ctx.transaction;
    assert_eq!(tx.reference_inputs[0].output.value.lovelace_of(), 5_000_000);
    assert_eq!(tx.reference_inputs[0].output.value.clone().without_lovelace(), token);

    let spent = tx.inputs[0].output.value.clone();
    let paid = tx.outputs[0].value.clone();
    let kept = spent + (-paid);
    assert_eq!(kept, Value::from_asset("AssetPolicy2", "AssetName2", 900));
    assert_eq!(tx.extra_signatories, vec![VerificationKeyHash::from("PubKeyHash")]);
}

#[test]
fn withdrawals_stay_canonical_under_random_upserts() {
    let mut rng = rand::thread_rng();
    let mut ctx = context::build_txn_context(Interval::everything());
    for _ in 0..300 {
        let hash = [rng.gen_range(0u8..16); 28];
        let cred = if rng.gen_bool(0.5) {
            Credential::Script(ScriptHash::from(hash))
        } else {
            Credential::VerificationKey(VerificationKeyHash::from(hash))
        };
        ctx = context::insert_withdrawal(ctx, cred, rng.gen_range(0..1_000_000), compare::credential);
    }
    let withdrawals = ctx.transaction.withdrawals;
    assert!(withdrawals.len() <= 32);
    assert_eq!(withdrawals.validate(compare::credential), Ok(()));
    assert!(txn::try_set_withdrawals(txn::placeholder(), withdrawals).is_ok());
}

#[test]
fn redeemer_reinsert_keeps_single_entry() {
    let purpose = ScriptPurpose::Withdraw(Credential::Script(ScriptHash::from("Staking")));
    let ctx = context::build_txn_context(Interval::everything());
    let ctx = context::insert_redeemer(ctx, purpose.clone(), Data::Int(1), compare::script_purpose);
    let ctx = context::insert_redeemer(ctx, purpose.clone(), Data::Int(2), compare::script_purpose);
    let redeemers = ctx.transaction.redeemers;
    assert_eq!(redeemers.len(), 1);
    assert_eq!(redeemers.get_first(&purpose, compare::script_purpose), Some(&Data::Int(2)));
}

#[test]
fn asset_names_are_distinct_keys() {
    let tx_out = new_tx_output(Address::from_script("ValidatorHash"));
    let tx_out = add_asset_to_tx_output(tx_out, Value::from_asset("P", "A", 1));
    let tx_out = add_asset_to_tx_output(tx_out, Value::from_asset("P", "B", 1));
    assert_eq!(
        tx_out
            .value
            .tokens(&PolicyId::from("P"))
            .map(|assets| assets.keys().cloned().collect::<Vec<_>>()),
        Some(vec![AssetName::from("A"), AssetName::from("B")])
    );
}
