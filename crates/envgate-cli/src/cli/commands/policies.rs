use envgate_core::PolicyRegistry;

use crate::cli::args::PoliciesArgs;
use crate::exit_codes;

pub fn run(args: PoliciesArgs, verbose: bool) -> anyhow::Result<i32> {
    let loaded = super::load_config(args.config.as_deref());
    crate::init_logging(verbose || loaded.as_ref().is_ok_and(|(c, _)| c.verbose));
    let (config, _) = loaded?;
    let registry = PolicyRegistry::with_defaults(config.build_policies()?);

    for line in render(&registry) {
        println!("{line}");
    }
    Ok(exit_codes::SUCCESS)
}

fn render(registry: &PolicyRegistry) -> Vec<String> {
    registry
        .iter()
        .enumerate()
        .map(|(idx, policy)| format!("{idx:>2}  {}", policy.describe()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use envgate_policy::{PatternPolicy, Policy};

    #[test]
    fn test_render_lists_builtins_first() {
        let extra: Vec<Box<dyn Policy>> =
            vec![Box::new(PatternPolicy::new("SERVICE_VERSION", "^v[0-9]+$").unwrap())];
        let lines = render(&PolicyRegistry::with_defaults(extra));

        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with(" 0  UrlPolicy"));
        assert!(lines[4].starts_with(" 4  PatternPolicy"));
        assert_eq!(lines[4], " 4  PatternPolicy SERVICE_VERSION ~ ^v[0-9]+$");
        assert_eq!(lines[0].matches("UrlPolicy").count(), 1);
    }
}
