pub mod date;
pub mod engine;
pub mod preset;
pub mod spec;
pub mod types;

pub use date::DateInterval;
pub use engine::{EmptyState, FilterOutcome, apply, apply_in, filter_transactions};
pub use preset::{DateRangePreset, resolve};
pub use spec::{FilterSpecification, StatusFlags, StatusSet, build_apply, build_clear};
pub use types::{Metadata, Status, Transaction, TransactionKind, TransactionStatus};
