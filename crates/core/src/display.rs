use colored::Colorize;

use crate::summary::ArticleSummary;

/// Column width the extract is filled to.
pub const WRAP_WIDTH: usize = 70;

/// Reflow text into lines no wider than `width`
///
/// All runs of whitespace, newlines included, collapse to a single space
/// before filling. Words longer than `width` stay on a line of their own.
pub fn fill(text: &str, width: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return String::new();
    }

    let options = textwrap::Options::new(width.max(1)).break_words(false);
    textwrap::fill(&words.join(" "), options)
}

/// Build the terminal output for an article summary
pub fn format_summary_text(summary: &ArticleSummary, width: usize) -> String {
    let mut result = format!("{}\n", summary.title.green());

    let extract = fill(&summary.extract, width);
    if !extract.is_empty() {
        result.push('\n');
        result.push_str(&extract);
        result.push('\n');
    }

    result
}

/// Build the single-line message shown when a run fails
pub fn format_error_line(message: &str) -> String {
    let message = message.split_whitespace().collect::<Vec<_>>().join(" ");
    format!("{} {}", "Error:".red().bold(), message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(title: &str, extract: &str) -> ArticleSummary {
        ArticleSummary {
            title: title.to_string(),
            extract: extract.to_string(),
        }
    }

    #[test]
    fn test_fill_short_text_unchanged() {
        assert_eq!(fill("Extract of the article.", WRAP_WIDTH), "Extract of the article.");
    }

    #[test]
    fn test_fill_respects_width() {
        let text = "The quick brown fox jumps over the lazy dog. ".repeat(10);
        let filled = fill(&text, WRAP_WIDTH);

        assert!(filled.lines().count() > 1);
        for line in filled.lines() {
            assert!(line.chars().count() <= WRAP_WIDTH, "line too long: {line:?}");
            assert_eq!(line, line.trim());
        }
    }

    #[test]
    fn test_fill_preserves_words() {
        let text = "alpha beta gamma delta epsilon zeta eta theta iota kappa";
        let filled = fill(text, 12);
        let rejoined: Vec<&str> = filled.split_whitespace().collect();
        assert_eq!(rejoined.join(" "), text);
    }

    #[test]
    fn test_fill_collapses_newlines() {
        let filled = fill("First line.\n\nSecond   line.", WRAP_WIDTH);
        assert_eq!(filled, "First line. Second line.");
    }

    #[test]
    fn test_fill_keeps_long_words_whole() {
        let url = "https://example.org/a/very/long/path/that/does/not/fit";
        let filled = fill(&format!("see {url} here"), 20);
        assert!(filled.lines().any(|line| line == url));
    }

    #[test]
    fn test_fill_empty() {
        assert_eq!(fill("", WRAP_WIDTH), "");
        assert_eq!(fill(" \n\t ", WRAP_WIDTH), "");
    }

    #[test]
    fn test_format_summary_text_layout() {
        let text = format_summary_text(
            &summary("Title of the article", "Extract of the article."),
            WRAP_WIDTH,
        );
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Title of the article"));
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "Extract of the article.");
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_format_summary_text_empty_extract() {
        let text = format_summary_text(&summary("Stub", ""), WRAP_WIDTH);
        assert_eq!(text.lines().count(), 1);
        assert!(text.contains("Stub"));
    }

    #[test]
    fn test_format_error_line_single_line() {
        let line = format_error_line("Request failed:\nconnection refused\n");
        assert!(line.contains("Error"));
        assert!(line.ends_with("Request failed: connection refused"));
        assert!(!line.contains('\n'));
    }
}
