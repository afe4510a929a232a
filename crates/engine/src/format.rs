//! Markdown section normalisation and list rendering.

/// Normalise a block of Markdown into a section body.
///
/// Removes the common leading indentation, trims surrounding blank lines and
/// whitespace, and appends exactly one trailing newline.  Idempotent.
pub fn format_section(text: &str) -> String {
    let mut out = dedent(text).trim().to_string();
    out.push('\n');
    out
}

/// Remove the longest run of spaces/tabs shared by every non-blank line.
///
/// Lines made only of spaces and tabs are emptied first so they never limit
/// the shared margin.
pub fn dedent(text: &str) -> String {
    let lines: Vec<&str> = text
        .split('\n')
        .map(|line| {
            if line.chars().all(|ch| ch == ' ' || ch == '\t') {
                ""
            } else {
                line
            }
        })
        .collect();

    let mut margin: Option<&str> = None;
    for &line in lines.iter().filter(|line| !line.is_empty()) {
        let indent_len = line.len() - line.trim_start_matches([' ', '\t']).len();
        let indent = &line[..indent_len];
        margin = Some(match margin {
            None => indent,
            Some(current) => common_prefix(current, indent),
        });
        if margin == Some("") {
            break;
        }
    }

    let margin = margin.unwrap_or("");
    lines
        .iter()
        .map(|&line| line.strip_prefix(margin).unwrap_or(line))
        .collect::<Vec<_>>()
        .join("\n")
}

fn common_prefix<'a>(left: &'a str, right: &str) -> &'a str {
    let len = left
        .bytes()
        .zip(right.bytes())
        .take_while(|(l, r)| l == r)
        .count();
    &left[..len]
}

/// `- item` lines joined by newlines, no trailing newline.
pub fn bullet_list<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| format!("- {}", item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `- [ ] item` lines joined by newlines, no trailing newline.
pub fn checkbox_list<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| format!("- [ ] {}", item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `1. item` lines joined by newlines, numbered from one.
pub fn numbered_list<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(idx, item)| format!("{}. {}", idx + 1, item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedents_and_trims() {
        let raw = "\n\n    # Title\n\n    body line\n      nested\n\n";
        assert_eq!(format_section(raw), "# Title\n\nbody line\n  nested\n");
    }

    #[test]
    fn whitespace_only_lines_do_not_limit_the_margin() {
        let raw = "    a\n  \n    b";
        assert_eq!(dedent(raw), "a\n\nb");
    }

    #[test]
    fn mixed_tabs_and_spaces_share_only_the_exact_prefix() {
        assert_eq!(dedent("\t a\n\t b"), "a\nb");
        assert_eq!(dedent("\ta\n  b"), "\ta\n  b");
    }

    #[test]
    fn keeps_trailing_spaces_inside_lines() {
        // Markdown hard line breaks must survive.
        let raw = "**今日**:: x  \nnext";
        assert_eq!(format_section(raw), "**今日**:: x  \nnext\n");
    }

    #[test]
    fn empty_input_becomes_a_single_newline() {
        assert_eq!(format_section(""), "\n");
        assert_eq!(format_section(" \n\t\n"), "\n");
    }

    #[test]
    fn idempotent() {
        let samples = [
            "",
            "plain",
            "   indented\n     more\n",
            "\n\n# H\n\n- a\n- b\n\n\n",
            "    first deeper\n  second shallower\n",
            "a\n   \nb  \n",
            "\t\tx\n\t\ty\n",
            "  全角\u{3000}スペース\u{3000}\n",
        ];
        for sample in samples {
            let once = format_section(sample);
            assert_eq!(format_section(&once), once, "not idempotent for {sample:?}");
            assert!(once == "\n" || (once.ends_with('\n') && !once.ends_with("\n\n")));
        }
    }

    #[test]
    fn list_helpers() {
        let items = ["a", "b"];
        assert_eq!(bullet_list(&items), "- a\n- b");
        assert_eq!(checkbox_list(&items), "- [ ] a\n- [ ] b");
        assert_eq!(numbered_list(&items), "1. a\n2. b");
        assert_eq!(bullet_list::<&str>(&[]), "");
    }
}
