//! Raw-line check that every assignment wraps its value in quotes.
//!
//! This has to look at the file text: by the time entries reach the
//! validator the loader has already removed the quotes.

/// An assignment whose value is not quoted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnquotedValue {
    /// 1-based line number.
    pub line: usize,
    pub key: String,
}

/// Name reported for quoting violations.
pub const REQUIRE_QUOTES: &str = "RequireQuotes";

/// Every unquoted assignment in `content`, in file order.
///
/// Blank lines, comments and lines without `=` or without a well-formed key
/// are skipped, matching what the loader drops. An optional `export ` prefix is allowed.
/// Lines that continue a multi-line quoted value are not assignments.
pub fn find_unquoted(content: &str) -> Vec<UnquotedValue> {
    let mut found = Vec::new();
    let mut open_quote: Option<char> = None;

    for (idx, raw) in content.lines().enumerate() {
        if let Some(quote) = open_quote {
            if closes(raw, quote) {
                open_quote = None;
            }
            continue;
        }

        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line = line
            .strip_prefix("export ")
            .map(str::trim_start)
            .unwrap_or(line);

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if !is_loader_key(key) {
            continue;
        }

        let value = value.trim_start();
        match value.chars().next() {
            Some(quote @ ('"' | '\'')) => {
                if !closes(&value[1..], quote) {
                    open_quote = Some(quote);
                }
            }
            _ => found.push(UnquotedValue {
                line: idx + 1,
                key: key.to_string(),
            }),
        }
    }

    found
}

/// Reason text for an unquoted assignment.
pub fn unquoted_reason(unquoted: &UnquotedValue) -> String {
    format!(
        "value for key {:?} must be quoted (line {})",
        unquoted.key, unquoted.line
    )
}

// Same key grammar as dotenvy: a letter or `_`, then ASCII alphanumerics,
// `_` or `.`.
fn is_loader_key(key: &str) -> bool {
    let mut chars = key.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
}

// Backslash escapes only apply inside double quotes.
fn closes(rest: &str, quote: char) -> bool {
    let mut escaped = false;
    for c in rest.chars() {
        if escaped {
            escaped = false;
            continue;
        }
        if c == '\\' && quote == '"' {
            escaped = true;
            continue;
        }
        if c == quote {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_quoted() {
        let content = r#"
# comment
API_KEY="12345abcdef" # trailing
DB_HOST='localhost'
export DB_PORT="5432"
"#;
        assert!(find_unquoted(content).is_empty());
    }

    #[test]
    fn test_reports_unquoted_in_file_order() {
        let content = "API_KEY=\"ok\"\nDB_HOST=localhost\nDB_PORT=5432\n";
        let found = find_unquoted(content);
        assert_eq!(
            found,
            vec![
                UnquotedValue {
                    line: 2,
                    key: "DB_HOST".into()
                },
                UnquotedValue {
                    line: 3,
                    key: "DB_PORT".into()
                },
            ]
        );
        assert_eq!(
            unquoted_reason(&found[0]),
            "value for key \"DB_HOST\" must be quoted (line 2)"
        );
    }

    #[test]
    fn test_empty_value_is_unquoted() {
        let found = find_unquoted("EMPTY=\n");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].key, "EMPTY");
    }

    #[test]
    fn test_malformed_lines_ignored() {
        assert!(find_unquoted("=invalidkey\nnot an assignment\n").is_empty());
    }

    #[test]
    fn test_keys_the_loader_rejects_are_skipped() {
        let content = "MY-KEY=bare\n1ST=bare\nAPI_KEY=\"ok\"\napp.name=bare\n";
        let found = find_unquoted(content);
        assert_eq!(
            found,
            vec![UnquotedValue {
                line: 4,
                key: "app.name".into()
            }]
        );
    }

    #[test]
    fn test_multiline_value_continuation_skipped() {
        let content = "CERT=\"-----BEGIN\nabc=def\n-----END\"\nNEXT=bare\n";
        let found = find_unquoted(content);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].key, "NEXT");
        assert_eq!(found[0].line, 4);
    }

    #[test]
    fn test_escaped_quote_does_not_close() {
        let content = "MSG=\"say \\\"hi\\\"\"\nOTHER=bare\n";
        let found = find_unquoted(content);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].key, "OTHER");
    }
}
