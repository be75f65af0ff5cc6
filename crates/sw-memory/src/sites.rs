/// Window title suffixes appended by common browsers.
const BROWSER_SUFFIXES: &[&str] = &[
    " - Google Chrome",
    " - Mozilla Firefox",
    " — Mozilla Firefox",
    " - Microsoft Edge",
    " - Microsoft\u{200b} Edge",
    " - Brave",
    " - Opera",
];

/// Extract the page label from a browser window title.
///
/// Returns `None` for titles that do not end in a known browser suffix or
/// whose page part is blank.
pub fn site_from_title(title: &str) -> Option<&str> {
    BROWSER_SUFFIXES.iter().find_map(|suffix| {
        title
            .strip_suffix(suffix)
            .map(str::trim)
            .filter(|page| !page.is_empty())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_browser_titles() {
        assert_eq!(
            site_from_title("Rust Playground - Google Chrome"),
            Some("Rust Playground")
        );
        assert_eq!(
            site_from_title("docs.rs — Mozilla Firefox"),
            Some("docs.rs")
        );
        assert_eq!(site_from_title("Inbox - Microsoft Edge"), Some("Inbox"));
    }

    #[test]
    fn ignores_other_windows() {
        assert_eq!(site_from_title("main.rs - Visual Studio Code"), None);
        assert_eq!(site_from_title("Google Chrome"), None);
        assert_eq!(site_from_title("<no title>"), None);
    }

    #[test]
    fn blank_page_part_is_ignored() {
        assert_eq!(site_from_title("   - Google Chrome"), None);
    }
}
