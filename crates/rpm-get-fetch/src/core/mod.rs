//! Pure helpers: no I/O happens in this module.

mod filename;
mod rate;
mod validation;

pub use filename::{DEFAULT_EXTENSION_TOKEN, FALLBACK_FILENAME, canonical_filename, normalize_filename};
pub use rate::{ProgressMeter, average_rate, eta};
pub use validation::{is_redirect, is_success};
