//! Active-link highlighting.

/// Selector of the links to highlight.
pub const NAV_LINK_SELECTOR: &str = ".nav-menu a";
/// Page assumed when the path has no file name.
pub const DEFAULT_PAGE: &str = "index.html";
/// Text color of the active link.
pub const ACTIVE_COLOR: &str = "#4CAF50";
/// Font weight of the active link.
pub const ACTIVE_WEIGHT: &str = "600";

/// The file name of the current page, from `location.pathname`.
pub fn current_page(pathname: &str) -> &str {
    match pathname.rsplit('/').next() {
        Some(name) if !name.is_empty() => name,
        _ => DEFAULT_PAGE,
    }
}

/// Returns true if a link's `href` points at the current page.
pub fn is_active(href: &str, current: &str) -> bool {
    href == current || (current.is_empty() && href == DEFAULT_PAGE)
}

/// Indices of the links to highlight.
pub fn active_links<'a, I>(hrefs: I, current: &str) -> Vec<usize>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    hrefs
        .into_iter()
        .enumerate()
        .filter(|(_, href)| href.is_some_and(|href| is_active(href, current)))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_page() {
        assert_eq!(current_page("/contact.html"), "contact.html");
        assert_eq!(current_page("/site/services.html"), "services.html");
        assert_eq!(current_page("/"), "index.html");
        assert_eq!(current_page(""), "index.html");
    }

    #[test]
    fn test_active_links() {
        // GIVEN
        let hrefs = [
            Some("index.html"),
            Some("services.html"),
            None,
            Some("contact.html"),
        ];

        // WHEN
        let active = active_links(hrefs, current_page("/services.html"));

        // THEN
        assert_eq!(active, vec![1]);
        assert_eq!(active_links(hrefs, current_page("/")), vec![0]);
    }
}
