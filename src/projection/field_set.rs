use std::collections::BTreeSet;
use std::fmt;

/// An allow-list of field names. Empty means "every field".
///
/// Names are kept sorted so that links built from a set are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSet {
    names: BTreeSet<String>,
}

impl FieldSet {
    /// The empty set, which selects every field.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a client-supplied, comma-separated list such as `"title, 'content'"`.
    ///
    /// Single quotes become spaces, the input is trimmed and split on commas,
    /// and blank entries are dropped.
    pub fn parse(raw: &str) -> Self {
        let cleaned = raw.replace('\'', " ");
        Self {
            names: cleaned
                .trim()
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// This set plus one more name.
    pub fn with(mut self, name: impl Into<String>) -> Self {
        self.names.insert(name.into());
        self
    }

    /// Every name in either set.
    pub fn union(&self, other: &FieldSet) -> FieldSet {
        Self {
            names: self.names.union(&other.names).cloned().collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Comma-joined form for the `includeFields` query parameter, or `None`
    /// when the set is empty.
    pub fn to_query(&self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self.iter().collect::<Vec<_>>().join(","))
        }
    }
}

impl fmt::Display for FieldSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.iter().collect::<Vec<_>>().join(","))
    }
}

impl<S: Into<String>> FromIterator<S> for FieldSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_names(iter)
    }
}
