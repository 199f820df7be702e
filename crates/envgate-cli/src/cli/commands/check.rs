use envgate_core::{Validator, Verdict};
use serde_json::json;

use crate::cli::args::{CheckArgs, OutputFormat};
use crate::exit_codes;

pub fn run(args: CheckArgs, verbose: bool) -> anyhow::Result<i32> {
    // 1. Config, then logging at the level it asks for
    let loaded = super::load_config(args.config.as_deref());
    let verbose = verbose || loaded.as_ref().is_ok_and(|(c, _)| c.verbose);
    crate::init_logging(verbose);

    let (config, config_path) = match loaded {
        Ok(loaded) => loaded,
        Err(e) => {
            let exit_code = exit_codes::CONFIG_ERROR;
            print_report(&args, Outcome::Error(format!("{e:#}")), exit_code)?;
            return Ok(exit_code);
        }
    };

    let mut required = config.required.clone();
    required.extend(args.require.iter().cloned());

    let validator_config = match config.validator_config() {
        Ok(c) => c
            .enforce_quoting(config.enforce_quoting || args.enforce_quoting)
            .verbose(verbose),
        Err(e) => {
            let exit_code = exit_codes::CONFIG_ERROR;
            let message = match &config_path {
                Some(path) => format!("{}: {e}", path.display()),
                None => e.to_string(),
            };
            print_report(&args, Outcome::Error(message), exit_code)?;
            return Ok(exit_code);
        }
    };

    // 2. Validate
    let validator = Validator::new(validator_config, required);
    let (outcome, exit_code) = match validator.validate_file(&args.file) {
        Ok(verdict) => {
            let code = decide_exit(&verdict);
            (Outcome::Verdict(verdict), code)
        }
        Err(e) => (Outcome::Error(e.to_string()), exit_codes::CONFIG_ERROR),
    };

    // 3. Report
    print_report(&args, outcome, exit_code)?;
    Ok(exit_code)
}

enum Outcome {
    Verdict(Verdict),
    Error(String),
}

fn decide_exit(verdict: &Verdict) -> i32 {
    match verdict {
        Verdict::Valid => exit_codes::SUCCESS,
        Verdict::ContentViolation(_) => exit_codes::CONTENT_VIOLATION,
        Verdict::MissingKeys { .. } => exit_codes::MISSING_KEYS,
    }
}

fn print_report(args: &CheckArgs, outcome: Outcome, exit_code: i32) -> anyhow::Result<()> {
    match args.format {
        OutputFormat::Json => {
            let doc = build_check_json(args, &outcome, exit_code);
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
        OutputFormat::Text => {
            // Human-readable summary always goes to stderr
            let file = args.file.display();
            match &outcome {
                Outcome::Verdict(Verdict::Valid) => eprintln!("✔ {file} is valid"),
                Outcome::Verdict(verdict) => {
                    eprintln!("✖ {file} failed validation");
                    if let Some(message) = verdict.message() {
                        eprintln!("  {message}");
                    }
                }
                Outcome::Error(message) => eprintln!("✖ {message}"),
            }
        }
    }
    Ok(())
}

fn build_check_json(args: &CheckArgs, outcome: &Outcome, exit_code: i32) -> serde_json::Value {
    let (verdict, error) = match outcome {
        Outcome::Verdict(v) => (serde_json::to_value(v).unwrap_or_default(), None),
        Outcome::Error(message) => (serde_json::Value::Null, Some(message.as_str())),
    };

    json!({
        "schema_version": 1,
        "ok": exit_code == exit_codes::SUCCESS,
        "exit_code": exit_code,
        "tool": {
            "name": "envgate",
            "version": env!("CARGO_PKG_VERSION")
        },
        "file": args.file.display().to_string(),
        "verdict": verdict,
        "error": error
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args() -> CheckArgs {
        CheckArgs {
            file: PathBuf::from("app.env"),
            config: None,
            require: Vec::new(),
            enforce_quoting: false,
            format: OutputFormat::Json,
        }
    }

    #[test]
    fn test_exit_codes_by_verdict() {
        assert_eq!(decide_exit(&Verdict::Valid), exit_codes::SUCCESS);
        assert_eq!(
            decide_exit(&Verdict::violation("K", "P", "R")),
            exit_codes::CONTENT_VIOLATION
        );
        assert_eq!(
            decide_exit(&Verdict::MissingKeys {
                keys: vec!["K".into()]
            }),
            exit_codes::MISSING_KEYS
        );
    }

    #[test]
    fn test_json_for_violation() {
        let outcome = Outcome::Verdict(Verdict::violation("ENABLE_DEBUG", "BooleanPolicy", "bad"));
        let doc = build_check_json(&args(), &outcome, exit_codes::CONTENT_VIOLATION);

        assert_eq!(doc["schema_version"], 1);
        assert_eq!(doc["ok"], false);
        assert_eq!(doc["exit_code"], 1);
        assert_eq!(doc["file"], "app.env");
        assert_eq!(doc["verdict"]["status"], "content_violation");
        assert_eq!(doc["verdict"]["key"], "ENABLE_DEBUG");
        assert!(doc["error"].is_null());
    }

    #[test]
    fn test_json_for_error() {
        let outcome = Outcome::Error("failed to read app.env".into());
        let doc = build_check_json(&args(), &outcome, exit_codes::CONFIG_ERROR);

        assert_eq!(doc["ok"], false);
        assert_eq!(doc["exit_code"], 2);
        assert!(doc["verdict"].is_null());
        assert_eq!(doc["error"], "failed to read app.env");
    }
}
