use serde::{Deserialize, Serialize};

use crate::address::Credential;
use crate::hash::{StakePoolId, VrfKeyHash};
use crate::Lovelace;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DelegateRepresentative {
    Registered(Credential),
    AlwaysAbstain,
    AlwaysNoConfidence,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Delegate {
    DelegateBlockProduction {
        stake_pool: StakePoolId,
    },
    DelegateVote {
        delegate_representative: DelegateRepresentative,
    },
    DelegateBoth {
        stake_pool: StakePoolId,
        delegate_representative: DelegateRepresentative,
    },
}

/// Conway-era certificates. Deposits and refunds are optional because pre-Conway
/// certificates do not carry them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Certificate {
    RegisterCredential {
        credential: Credential,
        deposit: Option<Lovelace>,
    },
    UnregisterCredential {
        credential: Credential,
        refund: Option<Lovelace>,
    },
    DelegateCredential {
        credential: Credential,
        delegate: Delegate,
    },
    RegisterAndDelegateCredential {
        credential: Credential,
        delegate: Delegate,
        deposit: Lovelace,
    },
    RegisterDelegateRepresentative {
        delegate_representative: Credential,
        deposit: Lovelace,
    },
    UpdateDelegateRepresentative {
        delegate_representative: Credential,
    },
    UnregisterDelegateRepresentative {
        delegate_representative: Credential,
        refund: Lovelace,
    },
    RegisterStakePool {
        stake_pool: StakePoolId,
        vrf: VrfKeyHash,
    },
    RetireStakePool {
        stake_pool: StakePoolId,
        at_epoch: u64,
    },
    AuthorizeConstitutionalCommitteeProxy {
        constitutional_committee_member: Credential,
        proxy: Credential,
    },
    RetireFromConstitutionalCommittee {
        constitutional_committee_member: Credential,
    },
}
