//! Fixed book categories
//!
//! The table is compiled in from `data/categories.txt` and is independent of
//! any `area` or `testament` values carried by corpus records.

include!(concat!(env!("OUT_DIR"), "/categories.rs"));

/// Canonical lookup key for a book name: ASCII lowercase with whitespace removed
///
/// ```
/// use bibirble::corpus::categories::normalize_book;
///
/// assert_eq!(normalize_book("Song of Solomon"), "songofsolomon");
/// assert_eq!(normalize_book("1 Samuel"), "1samuel");
/// ```
#[must_use]
pub fn normalize_book(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Category of a book, case-insensitively; `None` for books outside the table
#[must_use]
pub fn category_of(book: &str) -> Option<&'static str> {
    let key = normalize_book(book);
    CATEGORIES
        .iter()
        .find(|(_, books)| books.contains(&key.as_str()))
        .map(|&(name, _)| name)
}

/// True when both books resolve to the same category
#[must_use]
pub fn same_category(a: &str, b: &str) -> bool {
    matches!((category_of(a), category_of(b)), (Some(x), Some(y)) if x == y)
}
