//! Title extraction from a document's first line

/// Separator between the heading marker and the title on a document's first line.
pub const TITLE_SEPARATOR: &str = " &nbsp; ";

/// Extract the display title from document text.
///
/// The title is the second `" &nbsp; "`-separated segment of the first line:
/// `# &nbsp; Alpha` gives `Alpha`, and `# &nbsp; Alpha &nbsp; draft` also gives
/// `Alpha`. Returns `None` if the first line has no separator.
pub fn extract_title(text: &str) -> Option<String> {
    let first_line = text.split('\n').next().unwrap_or_default();
    first_line
        .split(TITLE_SEPARATOR)
        .nth(1)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_title() {
        assert_eq!(extract_title("# &nbsp; Alpha\n\nbody"), Some("Alpha".to_string()));
        assert_eq!(extract_title("# &nbsp; Alpha"), Some("Alpha".to_string()));
    }

    #[test]
    fn test_extract_title_stops_at_second_separator() {
        assert_eq!(
            extract_title("# &nbsp; Alpha &nbsp; draft"),
            Some("Alpha".to_string())
        );
    }

    #[test]
    fn test_extract_title_missing_separator() {
        assert_eq!(extract_title("# Alpha\n"), None);
        assert_eq!(extract_title(""), None);
        // Only the first line counts
        assert_eq!(extract_title("# Alpha\n# &nbsp; Beta"), None);
    }

    #[test]
    fn test_extract_title_empty_after_separator() {
        assert_eq!(extract_title("# &nbsp; \nbody"), Some(String::new()));
    }

    #[test]
    fn test_extract_title_keeps_carriage_return() {
        assert_eq!(
            extract_title("# &nbsp; Alpha\r\nbody"),
            Some("Alpha\r".to_string())
        );
    }
}
