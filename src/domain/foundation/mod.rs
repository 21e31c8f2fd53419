//! Foundation - Shared domain primitives (errors, bands, enums).

mod errors;
mod priority;
mod risk_level;
mod strictness;

pub use errors::{AnalysisError, ErrorCategory, ErrorCode, ValidationError};
pub use priority::Priority;
pub use risk_level::{RiskLevel, HIGH_THRESHOLD, MEDIUM_THRESHOLD, VERY_HIGH_THRESHOLD};
pub use strictness::{ResolvedStrictness, Strictness, FALLBACK_MULTIPLIER};
