//! Form-urlencoded request bodies

use std::fmt::Display;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left alone when encoding a value, matching `encodeURIComponent`
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Ordered list of form fields
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct FormFields(Vec<(String, String)>);

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.push(key, value);
        self
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Display) {
        self.0.push((key.into(), value.to_string()));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Serialize as `key=value` pairs joined by `&`, in insertion order.
    ///
    /// Only values are percent-encoded.
    pub fn encode(&self) -> String {
        self.0
            .iter()
            .map(|(key, value)| format!("{}={}", key, utf8_percent_encode(value, COMPONENT)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl<K: Into<String>, V: Display> std::iter::FromIterator<(K, V)> for FormFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Self::new();
        for (key, value) in iter {
            fields.push(key, value);
        }
        fields
    }
}

/// Body of a form POST
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormData {
    /// Sent verbatim
    Raw(String),
    /// Encoded with [FormFields::encode]
    Fields(FormFields),
}

impl FormData {
    pub fn into_body(self) -> String {
        match self {
            FormData::Raw(body) => body,
            FormData::Fields(fields) => fields.encode(),
        }
    }
}

impl Default for FormData {
    fn default() -> Self {
        Self::Raw(String::new())
    }
}

impl From<String> for FormData {
    fn from(body: String) -> Self {
        Self::Raw(body)
    }
}

impl From<&str> for FormData {
    fn from(body: &str) -> Self {
        Self::Raw(body.to_owned())
    }
}

impl From<FormFields> for FormData {
    fn from(fields: FormFields) -> Self {
        Self::Fields(fields)
    }
}
