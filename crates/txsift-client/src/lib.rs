//! Transaction feed filtering: date-range presets, filter specifications,
//! and a stable filter engine with the summary a dashboard needs to render
//! the result.

pub mod commands;
pub mod config;
pub mod contracts;
pub mod display;
pub mod error;
pub mod feed;
pub mod filter;
pub mod logging;
pub mod wallet;

pub use contracts::envelope::{FailureEnvelope, SuccessEnvelope};
pub use error::{ClientError, ClientResult};

pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");
