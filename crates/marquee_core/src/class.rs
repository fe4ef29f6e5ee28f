//! Ordered CSS class bundles

use serde::{Serialize, Serializer};
use smallvec::SmallVec;
use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};

/// An ordered list of CSS class tokens.
///
/// Tokens keep insertion order and are never deduplicated, so two bundles
/// built from the same inputs always serialize to the same string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ClassList {
    tokens: SmallVec<[Cow<'static, str>; 8]>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append every whitespace-separated token of a static string.
    pub fn add(&mut self, classes: &'static str) -> &mut Self {
        self.tokens
            .extend(classes.split_whitespace().map(Cow::Borrowed));
        self
    }

    /// Append every whitespace-separated token of an owned string.
    pub fn add_owned(&mut self, classes: impl AsRef<str>) -> &mut Self {
        self.tokens.extend(
            classes
                .as_ref()
                .split_whitespace()
                .map(|token| Cow::Owned(token.to_string())),
        );
        self
    }

    /// Append another bundle's tokens.
    pub fn extend(&mut self, other: &ClassList) -> &mut Self {
        self.tokens.extend(other.tokens.iter().cloned());
        self
    }

    /// Builder form of [`ClassList::add`].
    pub fn with(mut self, classes: &'static str) -> Self {
        self.add(classes);
        self
    }

    /// Builder form of [`ClassList::extend`].
    pub fn with_list(mut self, other: &ClassList) -> Self {
        self.extend(other);
        self
    }

    /// Whether a single token is present.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(|t| t.as_ref())
    }
}

impl From<&'static str> for ClassList {
    fn from(classes: &'static str) -> Self {
        ClassList::new().with(classes)
    }
}

impl Display for ClassList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(token)?;
        }
        Ok(())
    }
}

impl Serialize for ClassList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
