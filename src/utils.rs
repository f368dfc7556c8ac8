//! Small text helpers shared by the command handlers.

/// Returns `true` when `token` is a deck code: exactly five word characters
/// (ASCII letters, digits or underscore).
pub fn is_deck_code(token: &str) -> bool {
    token.len() == 5
        && token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Joins items into prose: `a`, `a and b`, `a, b and c`.
///
/// No serial comma is used. An empty list gives an empty string.
pub fn list_to_prose<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [single] => single.as_ref().to_owned(),
        [init @ .., last] => format!(
            "{} and {}",
            init.iter().map(|i| i.as_ref()).collect::<Vec<_>>().join(", "),
            last.as_ref()
        ),
    }
}

/// Returns the leading `YYYY-MM-DD` part of `value`, if any.
pub fn leading_iso_date(value: &str) -> Option<&str> {
    let date = value.get(..10)?;
    let is_date = date.char_indices().all(|(i, c)| match i {
        4 | 7 => c == '-',
        _ => c.is_ascii_digit(),
    });

    is_date.then_some(date)
}

/// Cuts `value` to at most `max` characters.
pub fn truncate_chars(value: &str, max: usize) -> String {
    match value.char_indices().nth(max) {
        Some((index, _)) => value[..index].to_owned(),
        None => value.to_owned(),
    }
}
