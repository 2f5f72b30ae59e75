use serde::{Deserialize, Serialize};

/// Untyped on-chain data, as a validator sees it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Data {
    Constr { tag: u64, fields: Vec<Data> },
    Map(Vec<(Data, Data)>),
    List(Vec<Data>),
    Int(i128),
    Bytes(Vec<u8>),
}

pub type Redeemer = Data;

impl Data {
    pub fn constr(tag: u64, fields: Vec<Data>) -> Self {
        Data::Constr { tag, fields }
    }

    /// `Constr 0 []`, the encoding of `Void`/`()`.
    pub fn void() -> Self {
        Data::constr(0, vec![])
    }

    pub fn bytes(bytes: impl AsRef<[u8]>) -> Self {
        Data::Bytes(bytes.as_ref().to_vec())
    }

    pub fn into_constr(self) -> Option<(u64, Vec<Data>)> {
        match self {
            Data::Constr { tag, fields } => Some((tag, fields)),
            _ => None,
        }
    }

    pub fn into_int(self) -> Option<i128> {
        match self {
            Data::Int(i) => Some(i),
            _ => None,
        }
    }

    pub fn into_bytes(self) -> Option<Vec<u8>> {
        match self {
            Data::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }
}

impl From<i128> for Data {
    fn from(i: i128) -> Self {
        Data::Int(i)
    }
}
