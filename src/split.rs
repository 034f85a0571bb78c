//! Multi-delimiter string splitting.
//!
//! Delimiters are literal strings applied one after another: the second
//! delimiter splits every fragment produced by the first, and so on. Empty
//! fragments produced by a split are discarded at every pass.

/// Split `source` by each delimiter in turn, keeping fragments in source order.
///
/// With no delimiters the result is `[source]`, even when `source` is empty.
/// Only fragments produced by an actual split are filtered for emptiness.
///
/// ```
/// use sigparse::split_by_delimiters;
///
/// assert_eq!(split_by_delimiters("a,b;c", [",", ";"]), vec!["a", "b", "c"]);
/// assert_eq!(split_by_delimiters("a,,b", [","]), vec!["a", "b"]);
/// ```
pub fn split_by_delimiters<I, D>(source: &str, delimiters: I) -> Vec<&str>
where
    I: IntoIterator<Item = D>,
    D: AsRef<str>,
{
    delimiters
        .into_iter()
        .fold(vec![source], |fragments, delimiter| {
            let delimiter = delimiter.as_ref();
            fragments
                .into_iter()
                .flat_map(|fragment| fragment.split(delimiter))
                .filter(|part| !part.is_empty())
                .collect()
        })
}
