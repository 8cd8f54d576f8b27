//! Search query over user name and e-mail.

use super::User;

/// A non-blank search query, case-folded once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    needle: String,
}

impl SearchTerm {
    /// Returns `None` for an absent, empty or whitespace-only query.
    ///
    /// The query is not trimmed: `" alice"` only matches text containing
    /// the leading space.
    pub fn parse(query: Option<&str>) -> Option<Self> {
        let query = query?;
        if query.trim().is_empty() {
            return None;
        }
        Some(Self {
            needle: fold_case(query),
        })
    }

    /// Case-insensitive match against a non-empty `name` or `email`.
    pub fn matches(&self, user: &User) -> bool {
        self.field_matches(user.name.as_deref()) || self.field_matches(user.email.as_deref())
    }

    fn field_matches(&self, field: Option<&str>) -> bool {
        match field {
            Some(value) if !value.is_empty() => fold_case(value).contains(&self.needle),
            _ => false,
        }
    }

    /// The folded query
    pub fn as_str(&self) -> &str {
        &self.needle
    }
}

/// Ordinal case folding: each char maps to its upper case on its own,
/// with no context rules. Chars whose upper case is not a single char
/// are kept as they are, so the folded text has the same char count.
fn fold_case(text: &str) -> String {
    text.chars()
        .map(|c| {
            let mut upper = c.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(single), None) => single,
                _ => c,
            }
        })
        .collect()
}
