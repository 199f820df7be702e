use url::Url;

use crate::policy::{format_list, Outcome, Policy};

/// Accepts an absolute URL with a host, optionally restricted to a set of schemes.
#[derive(Debug, Clone)]
pub struct UrlPolicy {
    key: String,
    schemes: Vec<String>,
}

impl UrlPolicy {
    /// An empty `schemes` list allows any scheme.
    pub fn new(key: impl Into<String>, schemes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            key: key.into(),
            schemes: schemes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn schemes(&self) -> &[String] {
        &self.schemes
    }
}

impl Policy for UrlPolicy {
    fn name(&self) -> &str {
        "UrlPolicy"
    }

    fn check(&self, key: &str, value: &str) -> Outcome {
        if key != self.key {
            return Outcome::NotApplicable;
        }

        // The parser repairs missing slashes and trims whitespace; the raw
        // text must already carry `scheme://`.
        let parsed = match Url::parse(value) {
            Ok(url) if url.host().is_some() && has_authority(value, url.scheme()) => url,
            _ => return Outcome::Rejected(format!("value for key {key:?} must be a valid URL")),
        };

        if !self.schemes.is_empty()
            && !self
                .schemes
                .iter()
                .any(|scheme| scheme.eq_ignore_ascii_case(parsed.scheme()))
        {
            return Outcome::Rejected(format!(
                "URL scheme for key {key:?} must be one of {}",
                format_list(&self.schemes)
            ));
        }

        Outcome::Accepted
    }

    fn describe(&self) -> String {
        if self.schemes.is_empty() {
            format!("{} {} any scheme", self.name(), self.key)
        } else {
            format!("{} {} scheme in {}", self.name(), self.key, format_list(&self.schemes))
        }
    }
}

fn has_authority(raw: &str, scheme: &str) -> bool {
    raw.trim_end() == raw
        && raw
            .get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
        && raw
            .get(scheme.len()..)
            .is_some_and(|rest| rest.starts_with("://"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_url() -> UrlPolicy {
        UrlPolicy::new("API_URL", ["https"])
    }

    #[test]
    fn test_https_accepted() {
        assert_eq!(api_url().check("API_URL", "https://api.example.com"), Outcome::Accepted);
        assert_eq!(
            api_url().check("API_URL", "https://api.myapp.com/v1/"),
            Outcome::Accepted
        );
    }

    #[test]
    fn test_disallowed_scheme_rejected() {
        let outcome = api_url().check("API_URL", "http://api.example.com");
        assert_eq!(
            outcome.reason(),
            Some("URL scheme for key \"API_URL\" must be one of [https]")
        );
        assert!(api_url().check("API_URL", "ftp://x").is_rejected());
    }

    #[test]
    fn test_scheme_comparison_ignores_case() {
        let p = UrlPolicy::new("API_URL", ["HTTPS"]);
        assert_eq!(p.check("API_URL", "https://api.example.com"), Outcome::Accepted);
        assert_eq!(p.check("API_URL", "HTTPS://api.example.com"), Outcome::Accepted);
    }

    #[test]
    fn test_relative_or_hostless_rejected() {
        let reason = Some("value for key \"API_URL\" must be a valid URL");
        assert_eq!(api_url().check("API_URL", "/v1/items").reason(), reason);
        assert_eq!(api_url().check("API_URL", "api.example.com").reason(), reason);
        assert_eq!(api_url().check("API_URL", "mailto:ops@example.com").reason(), reason);
        assert_eq!(api_url().check("API_URL", "").reason(), reason);
        assert_eq!(api_url().check("API_URL", "https:api.example.com").reason(), reason);
        assert_eq!(api_url().check("API_URL", "https:/api.example.com").reason(), reason);
        assert_eq!(api_url().check("API_URL", " https://api.example.com ").reason(), reason);
        assert_eq!(api_url().check("API_URL", "https://api.example.com\t").reason(), reason);
        assert_eq!(api_url().check("API_URL", "https:\\\\api.example.com").reason(), reason);
    }

    #[test]
    fn test_any_scheme_when_unrestricted() {
        let p = UrlPolicy::new("SERVICE_ENDPOINT", Vec::<String>::new());
        assert_eq!(p.check("SERVICE_ENDPOINT", "ftp://files.example.com"), Outcome::Accepted);
    }

    #[test]
    fn test_other_keys_not_applicable() {
        assert_eq!(api_url().check("SERVICE_ENDPOINT", "nope"), Outcome::NotApplicable);
    }
}
