//! Truth assignments for the exogenous variables of a model.

use crate::error::{Error, Result};
use hera_core::Model;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Maps every action and background condition to 0 or 1.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Assignment(BTreeMap<String, u8>);

impl Assignment {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn set(&mut self, name: impl Into<String>, value: u8) -> &mut Self {
        self.0.insert(name.into(), value);
        self
    }

    pub fn get(&self, name: &str) -> Option<u8> {
        self.0.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// The key set must be exactly the model's actions and background
    /// conditions, and every value must be 0 or 1.
    pub fn validate(&self, model: &Model) -> Result<()> {
        let missing: Vec<String> = model
            .actions()
            .iter()
            .chain(model.background().iter())
            .filter(|name| !self.0.contains_key(*name))
            .map(String::from)
            .collect();
        if !missing.is_empty() {
            return Err(Error::AssignmentMissing(missing));
        }

        let extraneous: Vec<String> = self
            .0
            .keys()
            .filter(|name| {
                !model.actions().contains(name) && !model.background().contains(name)
            })
            .cloned()
            .collect();
        if !extraneous.is_empty() {
            return Err(Error::AssignmentExtraneous(extraneous));
        }

        if let Some((name, value)) = self.iter().find(|(_, v)| *v > 1) {
            return Err(Error::AssignmentValue {
                name: name.to_string(),
                value,
            });
        }
        Ok(())
    }
}

impl<S: Into<String>> FromIterator<(S, u8)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (S, u8)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> Model {
        let mut m = Model::new("A");
        m.add_actions(&["A1", "A2"]).unwrap();
        m.add_background(&["B1"]).unwrap();
        m.add_consequences(&["C1"]).unwrap();
        m
    }

    #[test]
    fn complete_assignment_validates() {
        let a: Assignment = [("A1", 1), ("A2", 0), ("B1", 1)].into_iter().collect();
        assert!(a.validate(&model()).is_ok());
    }

    #[test]
    fn missing_keys_are_listed() {
        let a: Assignment = [("A1", 1)].into_iter().collect();
        match a.validate(&model()) {
            Err(Error::AssignmentMissing(names)) => assert_eq!(names, ["A2", "B1"]),
            other => panic!("expected missing keys, got {:?}", other),
        }
    }

    #[test]
    fn consequences_are_extraneous() {
        let a: Assignment = [("A1", 1), ("A2", 0), ("B1", 1), ("C1", 1), ("Z", 0)]
            .into_iter()
            .collect();
        match a.validate(&model()) {
            Err(Error::AssignmentExtraneous(names)) => assert_eq!(names, ["C1", "Z"]),
            other => panic!("expected extraneous keys, got {:?}", other),
        }
    }

    #[test]
    fn values_must_be_boolean() {
        let mut a = Assignment::new();
        a.set("A1", 1).set("A2", 2).set("B1", 0);
        assert!(matches!(
            a.validate(&model()),
            Err(Error::AssignmentValue { ref name, value: 2 }) if name == "A2"
        ));
    }

    #[test]
    fn serializes_as_plain_object() {
        let a: Assignment = [("B1", 0), ("A1", 1)].into_iter().collect();
        assert_eq!(serde_json::to_string(&a).unwrap(), r#"{"A1":1,"B1":0}"#);
    }
}
