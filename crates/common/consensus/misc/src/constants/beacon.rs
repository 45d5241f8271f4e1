use alloy_primitives::{aliases::B32, fixed_bytes};

pub const GENESIS_FORK_VERSION: B32 = fixed_bytes!("0x00000000");

pub const DOMAIN_BEACON_PROPOSER: B32 = fixed_bytes!("0x00000000");
pub const DOMAIN_BEACON_ATTESTER: B32 = fixed_bytes!("0x01000000");
pub const DOMAIN_RANDAO: B32 = fixed_bytes!("0x02000000");
