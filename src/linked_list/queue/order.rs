use core::cmp::Ordering;

/// Compares two strings lexicographically, folding ASCII letters to lower case.
///
/// Folding is byte-wise: only `A`-`Z` are affected, every other byte
/// (including each byte of a multi-byte UTF-8 sequence) compares by its raw
/// value. A string that is a prefix of the other orders first.
///
/// ```
/// use core::cmp::Ordering;
/// use mola_queue::linked_list::queue::order::cmp_ignore_ascii_case;
///
/// assert_eq!(cmp_ignore_ascii_case("Apple", "banana"), Ordering::Less);
/// assert_eq!(cmp_ignore_ascii_case("HELLO", "hello"), Ordering::Equal);
/// assert_eq!(cmp_ignore_ascii_case("abc", "ab"), Ordering::Greater);
/// ```
pub fn cmp_ignore_ascii_case(a: &str, b: &str) -> Ordering {
    let a = a.bytes().map(|c| c.to_ascii_lowercase());
    let b = b.bytes().map(|c| c.to_ascii_lowercase());
    a.cmp(b)
}
