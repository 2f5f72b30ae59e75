use std::fmt::{Debug, Display, Formatter};

use derive_more::{From, Into};
use serde::{Deserialize, Serialize};

/// Declares a byte-string identifier.
///
/// Lengths are not enforced: ledger hashes are 28 or 32 bytes, but fixtures routinely use
/// short human-readable ids such as `"PolicyId1"`. `From<&str>` takes the UTF-8 bytes of the
/// string, use `from_hex` to decode hex.
macro_rules! bytes_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, From, Into, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(Vec<u8>);

        impl $name {
            pub fn from_hex(raw: &str) -> Result<Self, hex::FromHexError> {
                hex::decode(raw).map(Self)
            }

            pub fn as_bytes(&self) -> &[u8] {
                &self.0
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl From<&[u8]> for $name {
            fn from(bytes: &[u8]) -> Self {
                Self(bytes.to_vec())
            }
        }

        impl<const N: usize> From<[u8; N]> for $name {
            fn from(bytes: [u8; N]) -> Self {
                Self(bytes.to_vec())
            }
        }

        impl From<&str> for $name {
            fn from(utf8: &str) -> Self {
                Self(utf8.as_bytes().to_vec())
            }
        }

        impl TryFrom<String> for $name {
            type Error = hex::FromHexError;
            fn try_from(raw: String) -> Result<Self, Self::Error> {
                Self::from_hex(&raw)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                hex::encode(id.0)
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(&hex::encode(&self.0))
            }
        }

        impl Debug for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}({})", stringify!($name), hex::encode(&self.0))
            }
        }
    };
}

bytes_id!(
    /// Blake2b-256 hash of a transaction body.
    TransactionId
);
bytes_id!(PolicyId);
bytes_id!(AssetName);
bytes_id!(VerificationKeyHash);
bytes_id!(ScriptHash);
bytes_id!(
    /// Hash of a datum.
    DataHash
);
bytes_id!(StakePoolId);
bytes_id!(VrfKeyHash);

impl TransactionId {
    pub const LEN: usize = 32;

    /// The all-zero id every placeholder transaction starts with.
    pub fn zero() -> Self {
        Self(vec![0u8; Self::LEN])
    }
}
