//! `{NAME}` placeholder substitution for argument templates.

use crate::domain::EnvValues;

/// Resolve every `{NAME}` placeholder in each token.
///
/// `NAME` is one or more ASCII alphanumerics or underscores. Known names are
/// replaced with their value, unknown names with the marker `<NAME>`. Tokens
/// without placeholders are copied unchanged. Substituted values are inserted
/// verbatim and never rescanned.
pub fn resolve(tokens: &[String], values: &EnvValues) -> Vec<String> {
    tokens.iter().map(|token| resolve_token(token, values)).collect()
}

fn resolve_token(token: &str, values: &EnvValues) -> String {
    let mut out = String::with_capacity(token.len());
    let mut rest = token;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let name_len = after.find(|c: char| !is_name_char(c)).unwrap_or(after.len());

        if name_len > 0 && after[name_len..].starts_with('}') {
            let name = &after[..name_len];
            match values.get(name) {
                Some(value) => out.push_str(value),
                None => {
                    out.push('<');
                    out.push_str(name);
                    out.push('>');
                }
            }
            rest = &after[name_len + 1..];
        } else {
            out.push('{');
            rest = after;
        }
    }

    out.push_str(rest);
    out
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
