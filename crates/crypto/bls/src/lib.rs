pub mod errors;
pub mod pubkey;

pub use pubkey::PubKey;
