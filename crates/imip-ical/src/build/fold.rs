//! Content line folding (RFC 5545 §3.1).

/// Maximum octets per line, excluding the line break.
const FOLD_WIDTH: usize = 75;

/// Folds a content line at 75 octets, breaking only at UTF-8 character
/// boundaries. Continuation lines begin with a single space.
#[must_use]
pub fn fold_line(line: &str) -> String {
    if line.len() <= FOLD_WIDTH {
        return line.to_string();
    }

    let mut out = String::with_capacity(line.len() + line.len() / FOLD_WIDTH * 3);
    let mut budget = FOLD_WIDTH;
    let mut width = 0;

    for c in line.chars() {
        let c_len = c.len_utf8();
        if width + c_len > budget {
            out.push_str("\r\n ");
            // Continuation lines lose one octet to the leading space
            budget = FOLD_WIDTH - 1;
            width = 0;
        }
        out.push(c);
        width += c_len;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_line_untouched() {
        assert_eq!(fold_line("SUMMARY:Standup"), "SUMMARY:Standup");
    }

    #[test]
    fn long_line_folds_at_75_octets() {
        let line = format!("DESCRIPTION:{}", "A".repeat(100));
        let folded = fold_line(&line);

        let mut parts = folded.split("\r\n");
        let first = parts.next().unwrap();
        assert_eq!(first.len(), 75);
        for cont in parts {
            assert!(cont.starts_with(' '));
            assert!(cont.len() <= 75);
        }
        assert_eq!(folded.replace("\r\n ", ""), line);
    }

    #[test]
    fn folding_respects_utf8_boundaries() {
        let line = format!("SUMMARY:{}", "ü".repeat(60));
        let folded = fold_line(&line);
        assert_eq!(folded.replace("\r\n ", ""), line);
        for part in folded.split("\r\n") {
            assert!(part.len() <= 75);
        }
    }
}
