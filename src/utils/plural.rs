//! Count phrases for log lines ("1 file", "3 folders").

/// `count noun`, with an `s` unless the count is exactly one.
///
/// Regular nouns only.
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} {noun}{suffix}")
}
