//! Search term validation and matching

use super::ValidationError;

/// Validated, non-empty search term
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Create a search term.
    ///
    /// Absent terms and empty terms fail differently so handlers can map
    /// them to different statuses.
    pub fn new(term: Option<String>) -> Result<Self, ValidationError> {
        match term {
            None => Err(ValidationError::Missing { field: "searchTerm" }),
            Some(t) if t.is_empty() => Err(ValidationError::Empty { field: "searchTerm" }),
            Some(t) => Ok(Self(t)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive containment.
    pub fn matches(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.0.to_lowercase())
    }

    /// `%term%` for `ILIKE`, with `\`, `%` and `_` escaped so they match literally.
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.0.len() + 2);
        pattern.push('%');
        for c in self.0.chars() {
            if matches!(c, '\\' | '%' | '_') {
                pattern.push('\\');
            }
            pattern.push(c);
        }
        pattern.push('%');
        pattern
    }
}
