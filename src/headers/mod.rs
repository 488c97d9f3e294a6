//! HTTP header fields.
//!
//! [`HeaderMap`] stores field names case-insensitively and folds repeated
//! fields into a single comma-separated value, the way a list-based header
//! such as `Accept` or `Via` may legally be combined. It also knows how to
//! parse itself incrementally from raw bytes, one field-line at a time.

mod error;
mod tests;

pub use error::Error;

const CRLF: &[u8] = b"\r\n";

/// A single `Name: Value` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Field {
    /// The name as first set; this is the spelling written to the wire.
    name: String,
    value: String,
}

/// Case-insensitive, multi-value-joining collection of header fields.
///
/// Entries keep their insertion order. Setting a name that is already
/// present appends `", "` and the new value to the existing one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    fields: Vec<Field>,
}

impl HeaderMap {
    /// Create an empty header map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse at most one field-line from the front of `data`.
    ///
    /// Returns the number of bytes consumed and whether the blank line that
    /// ends the header section was reached. `Ok((0, false))` means `data`
    /// does not yet hold a complete line and the caller must supply more.
    pub fn parse(&mut self, data: &[u8]) -> Result<(usize, bool), Error> {
        let idx = match find_crlf(data) {
            Some(idx) => idx,
            None => return Ok((0, false)),
        };
        if idx == 0 {
            return Ok((CRLF.len(), true));
        }

        let line = data[..idx].trim_ascii_start();

        let colon = line
            .iter()
            .position(|&b| b == b':')
            .ok_or_else(|| Error::MissingSeparator(String::from_utf8_lossy(line).into_owned()))?;
        let (name, value) = (&line[..colon], &line[colon + 1..]);

        if !is_valid_field_name(name) {
            return Err(Error::InvalidFieldName(String::from_utf8_lossy(name).into_owned()));
        }

        // Values may carry obs-text; anything that is not UTF-8 is stored lossily
        let name = String::from_utf8_lossy(name);
        let value = String::from_utf8_lossy(value.trim_ascii());
        self.set(name, value);
        Ok((idx + CRLF.len(), false))
    }

    /// Set a header, joining with any existing value using `", "`.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.position(&name) {
            Some(i) => {
                let existing = &mut self.fields[i].value;
                existing.push_str(", ");
                existing.push_str(&value);
            }
            None => self.fields.push(Field { name, value }),
        }
    }

    /// Set a header, discarding any existing value.
    pub fn replace(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.position(&name) {
            Some(i) => self.fields[i].value = value,
            None => self.fields.push(Field { name, value }),
        }
    }

    /// Remove a header, returning its value if it was present.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.position(name).map(|i| self.fields.remove(i).value)
    }

    /// Look up a header value by name, ignoring ASCII case.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.position(name).map(|i| self.fields[i].value.as_str())
    }

    /// Like [`HeaderMap::get`], but yields `""` for a missing header.
    pub fn get_or_empty(&self, name: &str) -> &str {
        self.get(name).unwrap_or("")
    }

    /// Check if a header exists.
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|f| (f.name.as_str(), f.value.as_str()))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.fields
            .iter()
            .position(|f| f.name.eq_ignore_ascii_case(name))
    }
}

impl<K, V> FromIterator<(K, V)> for HeaderMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = HeaderMap::new();
        for (name, value) in iter {
            headers.set(name, value);
        }
        headers
    }
}

/// Find the first CRLF in `data`.
pub(crate) fn find_crlf(data: &[u8]) -> Option<usize> {
    data.windows(CRLF.len()).position(|w| w == CRLF)
}

/// Check a field name against the RFC 7230 `token` grammar.
pub(crate) fn is_valid_field_name(name: &[u8]) -> bool {
    !name.is_empty() && name.iter().copied().all(is_tchar)
}

/// A value may be written as-is only if it cannot end the field-line early.
pub(crate) fn is_valid_field_value(value: &str) -> bool {
    !value.bytes().any(|b| matches!(b, b'\r' | b'\n' | b'\0'))
}

fn is_tchar(b: u8) -> bool {
    matches!(b,
        b'!' | b'#' | b'$' | b'%' | b'&' | b'\'' | b'*' | b'+' | b'-' | b'.' |
        b'^' | b'_' | b'`' | b'|' | b'~' | b'0'..=b'9' | b'A'..=b'Z' | b'a'..=b'z'
    )
}
