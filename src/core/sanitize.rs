// src/core/sanitize.rs

/// Collapse every whitespace run (incl. NBSP, newlines) to one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_and_trims() {
        assert_eq!(normalize_ws("  Acme\n\t  Lda \u{a0}"), "Acme Lda");
        assert_eq!(normalize_ws(""), "");
        assert_eq!(normalize_ws(" \n "), "");
    }
}
