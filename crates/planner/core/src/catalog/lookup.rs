//! Name normalization for best-effort item lookup.
//!
//! Item names typed by users (or copied from shops) are frequently decorated
//! with variant suffixes like `"Paladin Helmet (Black)"` or livery names like
//! `P4-AR Rifle "Whiteout"`. Tables are keyed by the plain lowercased name.

/// Canonical table key: trimmed and lowercased.
pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Strips one trailing parenthetical, e.g. `"paladin helmet (black)"` → `"paladin helmet"`.
///
/// Returns `None` if the key does not end in a parenthetical or nothing would remain.
pub fn strip_parenthetical_suffix(key: &str) -> Option<&str> {
    let trimmed = key.trim_end();
    let body = trimmed.strip_suffix(')')?;
    let open = body.rfind('(')?;
    if body[open + 1..].contains(')') {
        return None;
    }
    let base = body[..open].trim_end();
    (!base.is_empty()).then_some(base)
}

/// Removes every double-quoted substring (and whitespace following it), then
/// collapses runs of whitespace.
///
/// An unmatched quote is kept verbatim.
pub fn strip_quoted(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut rest = key;
    while let Some(open) = rest.find('"') {
        let after_open = &rest[open + 1..];
        let Some(close) = after_open.find('"') else {
            break;
        };
        out.push_str(&rest[..open]);
        rest = after_open[close + 1..].trim_start();
    }
    out.push_str(rest);
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_folds() {
        assert_eq!(normalize("  Paladin Helmet "), "paladin helmet");
    }

    #[test]
    fn parenthetical_suffix() {
        assert_eq!(
            strip_parenthetical_suffix("paladin helmet (black)"),
            Some("paladin helmet")
        );
        assert_eq!(strip_parenthetical_suffix("paladin helmet"), None);
        assert_eq!(strip_parenthetical_suffix("(only)"), None);
        assert_eq!(strip_parenthetical_suffix("a (b) c"), None);
    }

    #[test]
    fn quoted_substrings() {
        assert_eq!(strip_quoted("p4-ar rifle \"whiteout\""), "p4-ar rifle");
        assert_eq!(strip_quoted("p4-ar \"whiteout\" rifle"), "p4-ar rifle");
        assert_eq!(strip_quoted("odd \"quote"), "odd \"quote");
        assert_eq!(strip_quoted("plain  name"), "plain name");
    }
}
