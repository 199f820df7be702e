//! Validation policies for env-file entries.
//!
//! A [`Policy`] looks at one `(key, value)` pair and answers with an
//! [`Outcome`]: it abstains on keys it does not own, and accepts or rejects
//! the value of the key it does. Policies carry their own parameters and no
//! per-run state, so one instance can serve any number of validation passes.
//!
//! | Policy | Accepts |
//! |--------|---------|
//! | [`BooleanPolicy`] | one of a list of boolean spellings (trimmed, case-insensitive) |
//! | [`EnumPolicy`] | one of a fixed list of values |
//! | [`IpAddressPolicy`] | an IP address, optionally by family and private-only |
//! | [`UrlPolicy`] | an absolute URL with a host, optionally by scheme |
//! | [`IntegerRangePolicy`] | an integer within inclusive bounds |
//! | [`PatternPolicy`] | a value matched by a regular expression |
//!
//! [`default_policies`] returns the four conventional rules (`API_URL`,
//! `ENVIRONMENT`, `ENABLE_DEBUG`, `TRUSTED_PROXY_IP`) that every registry
//! starts with.

pub mod boolean_policy;
pub mod defaults;
pub mod enum_policy;
pub mod error;
pub mod ip_policy;
pub mod pattern_policy;
pub mod policy;
pub mod range_policy;
pub mod url_policy;

pub use boolean_policy::{BooleanPolicy, DEFAULT_BOOLEAN_LITERALS};
pub use defaults::default_policies;
pub use enum_policy::EnumPolicy;
pub use error::PolicyBuildError;
pub use ip_policy::{is_private, IpAddressPolicy, IpFamily, PRIVATE_RANGES};
pub use pattern_policy::PatternPolicy;
pub use policy::{format_list, Outcome, Policy};
pub use range_policy::IntegerRangePolicy;
pub use url_policy::UrlPolicy;
