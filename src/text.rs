use std::borrow::Cow;

/// Fold full-width digits (`０`-`９`) and the full-width comma to ASCII.
pub fn ascii_digits(text: &str) -> Cow<'_, str> {
    if !text.chars().any(is_full_width_numeric) {
        return Cow::Borrowed(text);
    }

    text.chars()
        .map(|c| match c {
            '０'..='９' => char::from(b'0' + (c as u32 - '０' as u32) as u8),
            '，' => ',',
            other => other,
        })
        .collect()
}

fn is_full_width_numeric(c: char) -> bool {
    matches!(c, '０'..='９' | '，')
}
