use serde::{Deserialize, Serialize};

use crate::hash::{ScriptHash, VerificationKeyHash};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Credential {
    VerificationKey(VerificationKeyHash),
    Script(ScriptHash),
}

impl Credential {
    pub fn script_hash(&self) -> Option<&ScriptHash> {
        match self {
            Credential::VerificationKey(_) => None,
            Credential::Script(hash) => Some(hash),
        }
    }

    pub fn hash_bytes(&self) -> &[u8] {
        match self {
            Credential::VerificationKey(hash) => hash.as_bytes(),
            Credential::Script(hash) => hash.as_bytes(),
        }
    }
}

pub type PaymentCredential = Credential;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StakeCredential {
    Inline(Credential),
    Pointer {
        slot_number: u64,
        transaction_index: u64,
        certificate_index: u64,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address {
    pub payment_credential: PaymentCredential,
    pub stake_credential: Option<StakeCredential>,
}

impl Address {
    /// Enterprise address locked by a verification key.
    pub fn from_verification_key(hash: impl Into<VerificationKeyHash>) -> Self {
        Self {
            payment_credential: Credential::VerificationKey(hash.into()),
            stake_credential: None,
        }
    }

    /// Enterprise address locked by a script.
    pub fn from_script(hash: impl Into<ScriptHash>) -> Self {
        Self {
            payment_credential: Credential::Script(hash.into()),
            stake_credential: None,
        }
    }

    pub fn with_delegation_key(self, hash: impl Into<VerificationKeyHash>) -> Self {
        Self {
            stake_credential: Some(StakeCredential::Inline(Credential::VerificationKey(hash.into()))),
            ..self
        }
    }

    pub fn with_delegation_script(self, hash: impl Into<ScriptHash>) -> Self {
        Self {
            stake_credential: Some(StakeCredential::Inline(Credential::Script(hash.into()))),
            ..self
        }
    }

    pub fn script_hash(&self) -> Option<&ScriptHash> {
        self.payment_credential.script_hash()
    }
}
