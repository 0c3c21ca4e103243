use regex::{Captures, Regex};
use std::sync::LazyLock;

/// `__NAME__` tokens: upper-case words joined by single underscores.
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"__([A-Z]+(?:_[A-Z]+)*)__").expect("placeholder regex compiles")
});

/// Fill `__NAME__` placeholders in `template` from `values`.
///
/// We avoid `format!()` because the script language uses `{...}` for
/// comments. Substitution is a single pass, so values are never rescanned;
/// placeholders with no value are left untouched.
pub fn render(template: &str, values: &[(&str, &str)]) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            let name = &caps[1];
            values
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| (*v).to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
