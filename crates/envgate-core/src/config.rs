//! Validator configuration: the in-process [`ValidatorConfig`] and the
//! declarative `envgate.yaml` file ([`EnvgateConfig`]) that builds one.
//!
//! ```yaml
//! required: [API_URL, DB_HOST]
//! enforce_quoting: true
//! policies:
//!   - { kind: integer_range, key: CACHE_SIZE, min: 128, max: 1024 }
//!   - { kind: url, key: SERVICE_ENDPOINT, schemes: [https] }
//! ```

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use envgate_policy::{
    BooleanPolicy, EnumPolicy, IntegerRangePolicy, IpAddressPolicy, IpFamily, PatternPolicy,
    Policy, UrlPolicy, DEFAULT_BOOLEAN_LITERALS,
};
use serde::{Deserialize, Serialize};

use crate::error::{EnvgateError, EnvgateResult};
use crate::sink::LogSink;

/// Default config file name looked up by the CLI.
pub const CONFIG_FILE_NAME: &str = "envgate.yaml";

/// Settings for one [`Validator`](crate::Validator).
#[derive(Default)]
pub struct ValidatorConfig {
    /// Require every assignment in the raw file to quote its value.
    pub enforce_quoting: bool,
    /// Send per-key trace lines to the sink.
    pub verbose: bool,
    /// Message consumer; `None` means [`TracingSink`](crate::sink::TracingSink).
    pub sink: Option<Arc<dyn LogSink>>,
    /// Policies appended after the built-ins, in this order.
    pub extra_policies: Vec<Box<dyn Policy>>,
}

impl ValidatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enforce_quoting(mut self, enforce: bool) -> Self {
        self.enforce_quoting = enforce;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn with_policy(mut self, policy: impl Policy + 'static) -> Self {
        self.extra_policies.push(Box::new(policy));
        self
    }

    pub fn with_policies(mut self, policies: impl IntoIterator<Item = Box<dyn Policy>>) -> Self {
        self.extra_policies.extend(policies);
        self
    }
}

impl fmt::Debug for ValidatorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorConfig")
            .field("enforce_quoting", &self.enforce_quoting)
            .field("verbose", &self.verbose)
            .field("custom_sink", &self.sink.is_some())
            .field(
                "extra_policies",
                &self
                    .extra_policies
                    .iter()
                    .map(|p| p.name())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// On-disk configuration (`envgate.yaml`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnvgateConfig {
    #[serde(default)]
    pub required: Vec<String>,

    #[serde(default)]
    pub enforce_quoting: bool,

    #[serde(default)]
    pub verbose: bool,

    #[serde(default)]
    pub policies: Vec<PolicySpec>,
}

/// Declarative form of one caller-supplied policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PolicySpec {
    Boolean {
        key: String,
        #[serde(default = "default_boolean_literals")]
        accepted: Vec<String>,
    },
    Enum {
        key: String,
        values: Vec<String>,
        #[serde(default = "default_true")]
        case_sensitive: bool,
    },
    IpAddress {
        key: String,
        #[serde(default)]
        families: Vec<IpFamily>,
        #[serde(default)]
        must_be_private: bool,
    },
    Url {
        key: String,
        #[serde(default)]
        schemes: Vec<String>,
    },
    IntegerRange {
        key: String,
        min: i64,
        max: i64,
    },
    Pattern {
        key: String,
        regex: String,
    },
}

fn default_boolean_literals() -> Vec<String> {
    DEFAULT_BOOLEAN_LITERALS
        .iter()
        .map(|s| (*s).to_string())
        .collect()
}

fn default_true() -> bool {
    true
}

impl PolicySpec {
    pub fn key(&self) -> &str {
        match self {
            PolicySpec::Boolean { key, .. }
            | PolicySpec::Enum { key, .. }
            | PolicySpec::IpAddress { key, .. }
            | PolicySpec::Url { key, .. }
            | PolicySpec::IntegerRange { key, .. }
            | PolicySpec::Pattern { key, .. } => key,
        }
    }

    pub fn build(&self) -> EnvgateResult<Box<dyn Policy>> {
        let policy: Box<dyn Policy> = match self {
            PolicySpec::Boolean { key, accepted } => {
                if accepted.is_empty() {
                    return Err(EnvgateError::Config {
                        message: format!("boolean policy for {key} accepts no values"),
                    });
                }
                Box::new(BooleanPolicy::new(key.clone(), accepted.iter().cloned()))
            }
            PolicySpec::Enum {
                key,
                values,
                case_sensitive,
            } => {
                if values.is_empty() {
                    return Err(EnvgateError::Config {
                        message: format!("enum policy for {key} allows no values"),
                    });
                }
                Box::new(EnumPolicy::new(
                    key.clone(),
                    values.iter().cloned(),
                    *case_sensitive,
                ))
            }
            PolicySpec::IpAddress {
                key,
                families,
                must_be_private,
            } => Box::new(IpAddressPolicy::new(
                key.clone(),
                families.clone(),
                *must_be_private,
            )),
            PolicySpec::Url { key, schemes } => {
                Box::new(UrlPolicy::new(key.clone(), schemes.iter().cloned()))
            }
            PolicySpec::IntegerRange { key, min, max } => {
                Box::new(IntegerRangePolicy::new(key.clone(), *min, *max)?)
            }
            PolicySpec::Pattern { key, regex } => Box::new(PatternPolicy::new(key.clone(), regex)?),
        };
        Ok(policy)
    }
}

impl EnvgateConfig {
    pub fn from_path(path: &Path) -> EnvgateResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| EnvgateError::read(path, e))?;
        serde_yaml::from_str(&content).map_err(|source| EnvgateError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_yaml_str(content: &str) -> EnvgateResult<Self> {
        serde_yaml::from_str(content).map_err(|e| EnvgateError::Config {
            message: e.to_string(),
        })
    }

    /// Build the declared policies, in file order.
    pub fn build_policies(&self) -> EnvgateResult<Vec<Box<dyn Policy>>> {
        self.policies.iter().map(PolicySpec::build).collect()
    }

    /// A [`ValidatorConfig`] carrying this file's flags and policies.
    pub fn validator_config(&self) -> EnvgateResult<ValidatorConfig> {
        Ok(ValidatorConfig::new()
            .enforce_quoting(self.enforce_quoting)
            .verbose(self.verbose)
            .with_policies(self.build_policies()?))
    }
}
