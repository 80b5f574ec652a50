use once_cell::sync::Lazy;
use regex::Regex;

// Everything outside lower-case alphanumerics, `+`, `#` and whitespace is
// noise. `+`/`#` survive so "c++" and "c#" stay matchable tokens.
static RE_NOISE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9+#\s]").unwrap());

/// Normalize free text for the lexical and statistical signals.
///
/// Contract:
/// 1. case-fold the input
/// 2. replace every char outside `[a-z0-9+#\s]` with a space
/// 3. collapse whitespace runs to single spaces, trim the ends
/// 4. empty input yields empty output
pub fn normalize_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let lowered = text.to_lowercase();
    let stripped = RE_NOISE.replace_all(&lowered, " ");

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
