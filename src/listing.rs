//! Grammatical list joining for prompts and hand displays.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::Display;

/// Joins `items` into an English list.
///
/// Two items are joined by the conjunction alone; three or more use
/// `separator` between items and before the conjunction.
///
/// ```
/// use parlor::listing::join_words;
///
/// assert_eq!(join_words(&[1, 2], ", ", "or"), "1 or 2");
/// assert_eq!(join_words(&[1, 2, 3], "; ", "or"), "1; 2; or 3");
/// ```
#[must_use]
pub fn join_words<T: Display>(items: &[T], separator: &str, conjunction: &str) -> String {
    match items {
        [] => String::new(),
        [only] => only.to_string(),
        [first, second] => format!("{first} {conjunction} {second}"),
        [head @ .., last] => {
            let head: Vec<String> = head.iter().map(ToString::to_string).collect();
            format!("{}{separator}{conjunction} {last}", head.join(separator))
        }
    }
}

/// Joins `items` as "a, b, and c".
#[must_use]
pub fn join_and<T: Display>(items: &[T]) -> String {
    join_words(items, ", ", "and")
}

/// Joins `items` as "a, b, or c".
#[must_use]
pub fn join_or<T: Display>(items: &[T]) -> String {
    join_words(items, ", ", "or")
}
