//! `$NAME` environment-variable expansion.
//!
//! Expansion runs on the raw line before tokenizing, so it also applies
//! inside quotes. Unset variables are left as written.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

static VAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$([A-Za-z_][A-Za-z0-9_]*)").expect("variable pattern is valid")
});

/// Replace every `$NAME` in `text` using `lookup`.
///
/// `NAME` must match `[A-Za-z_][A-Za-z0-9_]*`; names `lookup` does not know
/// stay verbatim. Returns the input unchanged (borrowed) when nothing matched.
///
/// ```
/// use vfsh_kernel::expand::expand_vars;
///
/// let lookup = |name: &str| (name == "DIR").then(|| "/docs".to_string());
/// assert_eq!(expand_vars("cd $DIR", lookup), "cd /docs");
/// assert_eq!(expand_vars("cd $NOPE", lookup), "cd $NOPE");
/// ```
pub fn expand_vars<F>(text: &str, lookup: F) -> Cow<'_, str>
where
    F: Fn(&str) -> Option<String>,
{
    VAR_PATTERN.replace_all(text, |caps: &Captures| {
        lookup(&caps[1]).unwrap_or_else(|| caps[0].to_string())
    })
}

/// Look a name up in the process environment. Non-UTF-8 values count as unset.
pub fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Expand against the process environment.
pub fn expand_env(text: &str) -> Cow<'_, str> {
    expand_vars(text, env_lookup)
}
