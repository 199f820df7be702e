use std::path::Path;
use std::sync::Arc;

use envgate_policy::Outcome;

use crate::config::ValidatorConfig;
use crate::envfile::{parse_entries, read_env_file, Entries};
use crate::error::EnvgateResult;
use crate::ledger::RequiredKeyLedger;
use crate::quoting::{find_unquoted, unquoted_reason, REQUIRE_QUOTES};
use crate::registry::PolicyRegistry;
use crate::sink::{LogSink, NullSink, Severity, TracingSink};
use crate::verdict::Verdict;

/// Validates env files against a policy registry and a set of required keys.
///
/// A `Validator` holds no per-run state, so it can be reused across files and
/// shared between threads.
pub struct Validator {
    registry: PolicyRegistry,
    required_keys: Vec<String>,
    enforce_quoting: bool,
    verbose: bool,
    sink: Arc<dyn LogSink>,
}

impl Validator {
    /// Registry is the default built-ins followed by `config.extra_policies`.
    pub fn new<I, S>(config: ValidatorConfig, required_keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ValidatorConfig {
            enforce_quoting,
            verbose,
            sink,
            extra_policies,
        } = config;

        Self {
            registry: PolicyRegistry::with_defaults(extra_policies),
            required_keys: required_keys.into_iter().map(Into::into).collect(),
            enforce_quoting,
            verbose,
            sink: sink.unwrap_or_else(|| Arc::new(TracingSink)),
        }
    }

    pub fn registry(&self) -> &PolicyRegistry {
        &self.registry
    }

    pub fn required_keys(&self) -> &[String] {
        &self.required_keys
    }

    /// One validation pass over already-parsed entries.
    pub fn run(&self, entries: &Entries) -> Verdict {
        let trace = Trace {
            sink: self.sink.as_ref(),
            verbose: self.verbose,
        };
        let verdict = run_pass(entries, &self.required_keys, &self.registry, &trace);
        if verdict.is_valid() {
            self.sink.log(Severity::Info, "env file is valid");
        }
        verdict
    }

    /// Read, check and validate the env file at `path`.
    ///
    /// `Err` means the file could not be read or parsed; a failing check is an
    /// `Ok` carrying a failing [`Verdict`].
    pub fn validate_file(&self, path: &Path) -> EnvgateResult<Verdict> {
        self.log_configuration();
        self.sink.log(
            Severity::Info,
            &format!("Starting validation for file: {}", path.display()),
        );
        let content = read_env_file(path)?;
        self.validate_content(&content)
    }

    /// Same as [`validate_file`](Self::validate_file) for in-memory content.
    pub fn validate_str(&self, content: &str) -> EnvgateResult<Verdict> {
        self.log_configuration();
        self.validate_content(content)
    }

    fn validate_content(&self, content: &str) -> EnvgateResult<Verdict> {
        if self.enforce_quoting {
            if let Some(unquoted) = find_unquoted(content).into_iter().next() {
                let reason = unquoted_reason(&unquoted);
                self.log_violation(&unquoted.key, REQUIRE_QUOTES, &reason);
                return Ok(Verdict::violation(unquoted.key, REQUIRE_QUOTES, reason));
            }
        }
        let entries = parse_entries(content)?;
        Ok(self.run(&entries))
    }

    fn log_configuration(&self) {
        if !self.verbose {
            return;
        }
        self.sink.log(Severity::Info, "Validator configuration:");
        self.sink.log(
            Severity::Info,
            &format!("  enforce_quoting: {}", self.enforce_quoting),
        );
        self.sink
            .log(Severity::Info, &format!("  verbose: {}", self.verbose));
        self.sink.log(
            Severity::Info,
            &format!("  policies: {}", self.registry.len()),
        );
    }

    fn log_violation(&self, key: &str, policy: &str, reason: &str) {
        Trace {
            sink: self.sink.as_ref(),
            verbose: self.verbose,
        }
        .violation(key, policy, reason);
    }
}

impl std::fmt::Debug for Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator")
            .field("registry", &self.registry)
            .field("required_keys", &self.required_keys)
            .field("enforce_quoting", &self.enforce_quoting)
            .field("verbose", &self.verbose)
            .finish_non_exhaustive()
    }
}

/// One pass with no diagnostics: the bare orchestrator.
pub fn run<I, S>(entries: &Entries, required_names: I, registry: &PolicyRegistry) -> Verdict
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let required: Vec<String> = required_names.into_iter().map(Into::into).collect();
    let trace = Trace {
        sink: &NullSink,
        verbose: false,
    };
    run_pass(entries, &required, registry, &trace)
}

struct Trace<'a> {
    sink: &'a dyn LogSink,
    verbose: bool,
}

impl Trace<'_> {
    fn verbose(&self, severity: Severity, message: impl FnOnce() -> String) {
        if self.verbose {
            self.sink.log(severity, &message());
        }
    }

    fn violation(&self, key: &str, policy: &str, reason: &str) {
        let message = if self.verbose {
            format!("Validation error for key {key} by {policy}: {reason}")
        } else {
            format!("Validation error for key {key}: {reason}")
        };
        self.sink.log(Severity::Error, &message);
    }
}

fn run_pass(
    entries: &Entries,
    required: &[String],
    registry: &PolicyRegistry,
    trace: &Trace<'_>,
) -> Verdict {
    let mut ledger = RequiredKeyLedger::new(required.iter().cloned());

    for (key, value) in entries {
        trace.verbose(Severity::Info, || format!("Processing key: {key}"));
        if ledger.mark_seen(key) {
            trace.verbose(Severity::Info, || format!("  {key} is a required variable."));
        } else {
            trace.verbose(Severity::Info, || format!("  {key} is an optional variable."));
        }

        for policy in registry.iter() {
            match policy.check(key, value) {
                Outcome::NotApplicable => {}
                Outcome::Accepted => {
                    trace.verbose(Severity::Debug, || {
                        format!("  [validated by: {}]", policy.name())
                    });
                }
                Outcome::Rejected(reason) => {
                    trace.violation(key, policy.name(), &reason);
                    return Verdict::violation(key.as_str(), policy.name(), reason);
                }
            }
        }
    }

    let missing = ledger.unsatisfied();
    if missing.is_empty() {
        return Verdict::Valid;
    }
    let verdict = Verdict::MissingKeys { keys: missing };
    if let Some(message) = verdict.message() {
        trace.sink.log(Severity::Error, &message);
    }
    verdict
}
