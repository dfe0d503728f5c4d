//! Text inputs and normalization.

use std::borrow::Cow;

/// Anything the matcher can read as text.
///
/// Absent values (`None`) read as the empty string, so callers holding
/// optional product titles or category names never need to unwrap first.
pub trait TextInput {
    /// Borrow the value as a string slice.
    fn as_text(&self) -> &str;
}

impl TextInput for str {
    #[inline]
    fn as_text(&self) -> &str {
        self
    }
}

impl TextInput for String {
    #[inline]
    fn as_text(&self) -> &str {
        self.as_str()
    }
}

impl TextInput for Cow<'_, str> {
    #[inline]
    fn as_text(&self) -> &str {
        self.as_ref()
    }
}

impl<T: TextInput + ?Sized> TextInput for &T {
    #[inline]
    fn as_text(&self) -> &str {
        (**self).as_text()
    }
}

impl<T: TextInput> TextInput for Option<T> {
    #[inline]
    fn as_text(&self) -> &str {
        self.as_ref().map_or("", TextInput::as_text)
    }
}

/// Lower-case and trim text for fuzzy comparison.
///
/// Lower-casing uses the full Unicode mapping, so the result may contain a
/// different number of characters than the input (e.g. `İ`).
pub fn normalize<T: TextInput + ?Sized>(text: &T) -> String {
    let lowered = text.as_text().to_lowercase();
    let trimmed = lowered.trim();
    if trimmed.len() == lowered.len() {
        lowered
    } else {
        trimmed.to_string()
    }
}
