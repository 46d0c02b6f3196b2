//! Core types for hera models

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// The three disjoint categories of boolean variables in a model.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableKind {
    Action,
    Background,
    Consequence,
}

impl VariableKind {
    pub const ALL: [VariableKind; 3] = [Self::Action, Self::Background, Self::Consequence];
}

impl std::fmt::Display for VariableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Action => write!(f, "action"),
            Self::Background => write!(f, "background condition"),
            Self::Consequence => write!(f, "consequence"),
        }
    }
}

/// Reject names that cannot be rendered as a quoted literal.
pub(crate) fn validate_name(kind: VariableKind, name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::invalid_name(kind, name, "name must not be empty"));
    }
    if name.contains('\'') {
        return Err(Error::invalid_name(
            kind,
            name,
            "name must not contain a single quote",
        ));
    }
    Ok(())
}

/// Insertion-ordered set of names. Membership checks are linear; model
/// variable sets are small.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderedSet(Vec<String>);

impl OrderedSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|n| n == name)
    }

    /// Append `name` unless present. Returns whether it was inserted.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.0.push(name);
        true
    }

    pub fn remove(&mut self, name: &str) -> bool {
        match self.position(name) {
            Some(idx) => {
                self.0.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Replace `old` with `new` at the same position.
    pub fn replace(&mut self, old: &str, new: &str) -> bool {
        match self.position(old) {
            Some(idx) => {
                self.0[idx] = new.to_string();
                true
            }
            None => false,
        }
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|n| n == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.0.clone()
    }
}

impl<S: Into<String>> FromIterator<S> for OrderedSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for name in iter {
            set.insert(name);
        }
        set
    }
}

impl<'a> IntoIterator for &'a OrderedSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Utilities of one consequence: the payoff of reaching it and the payoff
/// of not reaching it. Either may be unset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Utility {
    pub affirmed: Option<i64>,
    pub negated: Option<i64>,
}

impl Utility {
    pub fn get(&self, affirmed: bool) -> Option<i64> {
        if affirmed {
            self.affirmed
        } else {
            self.negated
        }
    }

    pub(crate) fn slot_mut(&mut self, affirmed: bool) -> &mut Option<i64> {
        if affirmed {
            &mut self.affirmed
        } else {
            &mut self.negated
        }
    }

    pub fn is_empty(&self) -> bool {
        self.affirmed.is_none() && self.negated.is_none()
    }
}
