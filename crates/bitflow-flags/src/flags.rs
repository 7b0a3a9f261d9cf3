//! Ordered flag-token list.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An ordered sequence of flag tokens.
///
/// Order is part of the contract: the backend toolchain resolves
/// conflicting flags by letting the last token win, so callers that want
/// their tokens to override earlier ones must append them last.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlagList(Vec<String>);

impl FlagList {
    /// An empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single token.
    pub fn push(&mut self, token: impl Into<String>) {
        self.0.push(token.into());
    }

    /// Append every token in order.
    pub fn extend<I, T>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.0.extend(tokens.into_iter().map(Into::into));
    }

    /// The tokens in composition order.
    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    /// The final token, if any.
    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// Whether `token` appears anywhere in the list.
    pub fn contains(&self, token: &str) -> bool {
        self.0.iter().any(|t| t == token)
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for FlagList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}

impl<'a> IntoIterator for &'a FlagList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<FlagList> for Vec<String> {
    fn from(list: FlagList) -> Self {
        list.0
    }
}
