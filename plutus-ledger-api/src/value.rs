use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::ops::{Add, Neg};

use algebra_core::monoid::Monoid;
use serde::{Deserialize, Serialize};

use crate::constants::{ADA_ASSET_NAME, ADA_POLICY_ID};
use crate::hash::{AssetName, PolicyId};

/// Signed so that the same type describes both minting and burning.
pub type Quantity = i128;

type AssetMap = BTreeMap<PolicyId, BTreeMap<AssetName, Quantity>>;

/// Multi-asset bundle: policy id -> asset name -> quantity.
///
/// Zero quantities are never stored, and a policy without assets is dropped, so two values
/// with the same economic content compare equal whatever order they were built in.
/// Quantities saturate at the bounds of [Quantity].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "AssetMap", into = "AssetMap")]
pub struct Value(AssetMap);

impl Value {
    pub fn zero() -> Self {
        Self(BTreeMap::new())
    }

    pub fn from_asset(policy: impl Into<PolicyId>, name: impl Into<AssetName>, quantity: Quantity) -> Self {
        Self::zero().add(policy, name, quantity)
    }

    pub fn from_lovelace(quantity: Quantity) -> Self {
        Self::from_asset(ADA_POLICY_ID.clone(), ADA_ASSET_NAME.clone(), quantity)
    }

    /// Add `quantity` of a single asset.
    pub fn add(mut self, policy: impl Into<PolicyId>, name: impl Into<AssetName>, quantity: Quantity) -> Self {
        self.add_quantity(policy.into(), name.into(), quantity);
        self
    }

    /// Sum two bundles asset-wise.
    pub fn merge(mut self, other: Value) -> Self {
        for (policy, assets) in other.0 {
            for (name, quantity) in assets {
                self.add_quantity(policy.clone(), name, quantity);
            }
        }
        self
    }

    pub fn negate(self) -> Self {
        Self(
            self.0
                .into_iter()
                .map(|(policy, assets)| {
                    (
                        policy,
                        assets.into_iter().map(|(n, q)| (n, q.saturating_neg())).collect(),
                    )
                })
                .collect(),
        )
    }

    pub fn quantity_of(&self, policy: &PolicyId, name: &AssetName) -> Quantity {
        self.0
            .get(policy)
            .and_then(|assets| assets.get(name))
            .copied()
            .unwrap_or(0)
    }

    pub fn lovelace_of(&self) -> Quantity {
        self.quantity_of(&ADA_POLICY_ID, &ADA_ASSET_NAME)
    }

    pub fn without_lovelace(mut self) -> Self {
        self.0.remove(&*ADA_POLICY_ID);
        self
    }

    pub fn policies(&self) -> impl Iterator<Item = &PolicyId> {
        self.0.keys()
    }

    pub fn tokens(&self, policy: &PolicyId) -> Option<&BTreeMap<AssetName, Quantity>> {
        self.0.get(policy)
    }

    pub fn flatten(&self) -> Vec<(PolicyId, AssetName, Quantity)> {
        self.0
            .iter()
            .flat_map(|(policy, assets)| {
                assets
                    .iter()
                    .map(move |(name, quantity)| (policy.clone(), name.clone(), *quantity))
            })
            .collect()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_empty()
    }

    fn add_quantity(&mut self, policy: PolicyId, name: AssetName, quantity: Quantity) {
        if quantity == 0 {
            return;
        }
        let assets = self.0.entry(policy.clone()).or_default();
        let total = assets.get(&name).copied().unwrap_or(0).saturating_add(quantity);
        if total == 0 {
            assets.remove(&name);
        } else {
            assets.insert(name, total);
        }
        if assets.is_empty() {
            self.0.remove(&policy);
        }
    }
}

impl From<AssetMap> for Value {
    fn from(raw: AssetMap) -> Self {
        raw.into_iter().fold(Value::zero(), |acc, (policy, assets)| {
            assets
                .into_iter()
                .fold(acc, |acc, (name, quantity)| acc.add(policy.clone(), name, quantity))
        })
    }
}

impl From<Value> for AssetMap {
    fn from(value: Value) -> Self {
        value.0
    }
}

impl Monoid for Value {
    fn identity() -> Self {
        Self::zero()
    }
    fn combine(self, other: Self) -> Self {
        self.merge(other)
    }
}

impl Add for Value {
    type Output = Value;
    fn add(self, rhs: Self) -> Self::Output {
        self.merge(rhs)
    }
}

impl Neg for Value {
    type Output = Value;
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("{")?;
        for (i, (policy, name, quantity)) in self.flatten().into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            if policy.is_empty() {
                write!(f, "lovelace: {}", quantity)?;
            } else {
                write!(f, "{}.{}: {}", policy, name, quantity)?;
            }
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use algebra_core::monoid::{combine_all, Monoid};
    use rand::Rng;

    use crate::hash::{AssetName, PolicyId};
    use crate::value::Value;

    fn gen_value() -> Value {
        let mut rng = rand::thread_rng();
        let policies = ["P1", "P2", "P3"];
        let names = ["A1", "A2"];
        (0..rng.gen_range(0..8)).fold(Value::zero(), |acc, _| {
            let policy = policies[rng.gen_range(0..policies.len())];
            let name = names[rng.gen_range(0..names.len())];
            acc.add(policy, name, rng.gen_range(-5..=5))
        })
    }

    #[test]
    fn merge_is_commutative() {
        for _ in 0..200 {
            let (a, b) = (gen_value(), gen_value());
            assert_eq!(a.clone().merge(b.clone()), b.merge(a));
        }
    }

    #[test]
    fn merge_is_associative() {
        for _ in 0..200 {
            let (a, b, c) = (gen_value(), gen_value(), gen_value());
            assert_eq!(
                a.clone().merge(b.clone()).merge(c.clone()),
                a.merge(b.merge(c))
            );
        }
    }

    #[test]
    fn zero_is_identity() {
        for _ in 0..50 {
            let a = gen_value();
            assert_eq!(a.clone().merge(Value::identity()), a);
        }
    }

    #[test]
    fn opposite_quantities_cancel_out() {
        let v = Value::from_asset("P", "N", 5).merge(Value::from_asset("P", "N", -5));
        assert_eq!(v.quantity_of(&PolicyId::from("P"), &AssetName::from("N")), 0);
        assert!(v.tokens(&PolicyId::from("P")).is_none());
        assert!(v.is_zero());
        assert_eq!(v, Value::zero());
    }

    #[test]
    fn cancelling_one_asset_keeps_its_siblings() {
        let v = Value::from_asset("P", "N1", 5)
            .add("P", "N2", 1)
            .merge(Value::from_asset("P", "N1", -5));
        assert_eq!(v, Value::from_asset("P", "N2", 1));
    }

    #[test]
    fn zero_quantity_singleton_is_zero() {
        assert!(Value::from_asset("P", "N", 0).is_zero());
    }

    #[test]
    fn value_minus_itself_is_zero() {
        for _ in 0..50 {
            let a = gen_value();
            assert!((a.clone() + -a).is_zero());
        }
    }

    #[test]
    fn lovelace_lives_under_empty_policy() {
        let v = Value::from_lovelace(2_000_000).add("P", "N", 1);
        assert_eq!(v.lovelace_of(), 2_000_000);
        assert_eq!(v.policies().count(), 2);
        assert_eq!(v.clone().without_lovelace(), Value::from_asset("P", "N", 1));
        assert_eq!(v.to_string(), "{lovelace: 2000000, 50.4e: 1}");
    }

    #[test]
    fn deserialized_zero_entries_are_pruned() {
        let loaded: Value = serde_json::from_str(r#"{"50":{"41":0,"42":3},"51":{}}"#).unwrap();
        assert_eq!(loaded, Value::from_asset("P", "B", 3));
        let only_zero: Value = serde_json::from_str(r#"{"50":{"41":0}}"#).unwrap();
        assert!(only_zero.is_zero());
        assert_eq!(only_zero.clone().merge(Value::zero()), Value::zero().merge(only_zero));
    }

    #[test]
    fn merge_saturates_instead_of_overflowing() {
        let v = Value::from_asset("P", "A", i128::MAX).merge(Value::from_asset("P", "A", 1));
        assert_eq!(v.quantity_of(&PolicyId::from("P"), &AssetName::from("A")), i128::MAX);
        let v = Value::from_asset("P", "A", i128::MIN).negate();
        assert_eq!(v.quantity_of(&PolicyId::from("P"), &AssetName::from("A")), i128::MAX);
    }

    #[test]
    fn combine_all_accumulates_mints() {
        let minted = combine_all(vec![
            Value::from_asset("P1", "A1", 10),
            Value::from_asset("P1", "A1", 3),
            Value::from_asset("P2", "A1", 1),
        ]);
        assert_eq!(
            minted.flatten(),
            vec![
                (PolicyId::from("P1"), AssetName::from("A1"), 13),
                (PolicyId::from("P2"), AssetName::from("A1"), 1),
            ]
        );
    }
}
