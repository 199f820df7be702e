//! Validation engine for `.env` files.
//!
//! A pass takes parsed entries, a set of required key names and an ordered
//! [`PolicyRegistry`], and produces a [`Verdict`]:
//!
//! - every entry is offered to every policy in registry order, and the first
//!   rejection ends the pass with [`Verdict::ContentViolation`];
//! - once all entries pass, every required key that never appeared is
//!   reported together in [`Verdict::MissingKeys`].
//!
//! ```no_run
//! use std::path::Path;
//! use envgate_core::{Validator, ValidatorConfig};
//!
//! let validator = Validator::new(ValidatorConfig::new(), ["API_URL", "DB_HOST"]);
//! let verdict = validator.validate_file(Path::new(".env"))?;
//! if let Some(message) = verdict.message() {
//!     eprintln!("{message}");
//! }
//! # Ok::<(), envgate_core::EnvgateError>(())
//! ```

pub mod config;
pub mod envfile;
pub mod error;
pub mod ledger;
pub mod quoting;
pub mod registry;
pub mod sink;
pub mod validator;
pub mod verdict;

pub use config::{EnvgateConfig, PolicySpec, ValidatorConfig, CONFIG_FILE_NAME};
pub use envfile::{load_entries, parse_entries, Entries};
pub use error::{EnvgateError, EnvgateResult, ValidationError};
pub use ledger::RequiredKeyLedger;
pub use registry::PolicyRegistry;
pub use sink::{LogSink, MemorySink, NullSink, Severity, TracingSink};
pub use validator::{run, Validator};
pub use verdict::{Verdict, Violation};

pub use envgate_policy as policy;
