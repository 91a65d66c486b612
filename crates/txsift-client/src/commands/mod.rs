pub(crate) mod common;
pub mod preset;
pub mod transactions;
pub mod wallet;
