/// String interpolation - rewrites `$NAME` / `${NAME}` tokens from the environment
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::language::scope::Environment;

/// Matches every candidate token in one left-to-right pass: an optional
/// `\` escape, `$`, an optional `{`, the variable name, an optional `}`.
static VAR_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\\)?\$(\{)?([a-zA-Z_0-9]+)(\})?").unwrap());

/// Rewrite `input`, substituting each unescaped variable token with the
/// rendering of its value in `env`.
///
/// The decision per matched token:
/// - `\$NAME` / `\${NAME}` drop the backslash and are emitted verbatim,
///   with no lookup.
/// - `${NAME` with no closing brace is emitted verbatim (fail-soft).
/// - `$NAME` / `${NAME}` substitute the variable's rendering, or the empty
///   string when the variable is undefined. Undefined and defined-but-empty
///   are indistinguishable in the output.
pub fn interpolate(input: &str, env: &Environment) -> String {
    VAR_TOKEN
        .replace_all(input, |caps: &Captures| {
            let matched = &caps[0];

            // \$VAR becomes $VAR, untouched otherwise
            if let Some(rest) = matched.strip_prefix('\\') {
                return rest.to_string();
            }

            // The decision is made on the whole matched text, so a token
            // like `$FOO}` looks up the name `FOO}` rather than `FOO`.
            let name = if matched.as_bytes()[1] == b'{' {
                if !matched.ends_with('}') {
                    // Forgot the closing bracket, eg "my ${variable" -
                    // hand the text back unchanged
                    return matched.to_string();
                }
                &matched[2..matched.len() - 1]
            } else {
                &matched[1..]
            };

            match env.get(name) {
                Some(value) => value.to_string(),
                None => String::new(),
            }
        })
        .into_owned()
}

/// Resolve `name` through the layered environment: the script's own store
/// first, the process environment second, the supplied default last.
///
/// A process-level variable that is set but empty falls through to the
/// default. No tier ever raises.
pub fn get_env_var(env: &Environment, name: &str, default: &str) -> String {
    if let Some(value) = env.get(name) {
        return value.to_string();
    }

    if let Ok(value) = std::env::var(name) {
        if !value.is_empty() {
            return value;
        }
    }

    default.to_string()
}

#[cfg(test)]
#[path = "test_interpolate.rs"]
mod tests;
