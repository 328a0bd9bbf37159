use std::fmt;

/// Which pages of a document receive the rotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageSelection {
    All,
    /// 1-based page numbers in the order given. Duplicates and numbers past the
    /// end of the document are kept; they simply match nothing.
    Pages(Vec<u32>),
}

/// A page token that could not be read as a page number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidPage(pub String);

impl fmt::Display for InvalidPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Empty tokens come from "1,,2" or a blank list.
        if self.0.is_empty() {
            write!(f, "invalid page: \"\"")
        } else {
            write!(f, "invalid page: {}", self.0)
        }
    }
}

impl PageSelection {
    /// Parse the `--pages` value. An empty value selects every page.
    ///
    /// Returns the selection together with the tokens that were dropped so
    /// the caller can report them.
    pub fn parse(s: &str) -> (Self, Vec<InvalidPage>) {
        if s.is_empty() {
            return (PageSelection::All, Vec::new());
        }
        let (pages, invalid) = parse_pages(s);
        (PageSelection::Pages(pages), invalid)
    }

    /// Whether the 1-based `page` is selected.
    pub fn contains(&self, page: u32) -> bool {
        match self {
            PageSelection::All => true,
            PageSelection::Pages(pages) => pages.contains(&page),
        }
    }
}

/// Parse a comma-separated list like "1, 2,x,3", keeping the numbers and
/// collecting the tokens that are not page numbers.
pub fn parse_pages(s: &str) -> (Vec<u32>, Vec<InvalidPage>) {
    let mut pages = Vec::new();
    let mut invalid = Vec::new();
    for token in s.split(',').map(str::trim) {
        match token.parse::<u32>() {
            Ok(page) => pages.push(page),
            Err(_) => invalid.push(InvalidPage(token.to_string())),
        }
    }
    (pages, invalid)
}
