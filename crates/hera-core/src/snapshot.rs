//! Canonical serialized form of a model.
//!
//! Fields are declared in alphabetical order and nested maps are
//! `BTreeMap`s, so the JSON output is deterministic. Lists keep insertion
//! order.

use crate::error::Result;
use crate::expr::{self, negated_key};
use crate::model::Model;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Write;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub actions: Vec<String>,
    pub background: Vec<String>,
    pub consequences: Vec<String>,
    pub description: String,
    pub intentions: BTreeMap<String, Vec<String>>,
    /// Consequence -> conjunction expression, `""` when nothing causes it.
    pub mechanisms: BTreeMap<String, String>,
    /// `C` and `Not('C')` -> payoff.
    pub utilities: BTreeMap<String, i64>,
}

impl Snapshot {
    /// Write as JSON with four-space indentation.
    pub fn to_writer_pretty<W: Write>(&self, writer: W) -> Result<()> {
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(writer, formatter);
        self.serialize(&mut ser)?;
        Ok(())
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.to_writer_pretty(&mut buf)?;
        // serde_json only ever emits UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Model {
    pub fn snapshot(&self) -> Snapshot {
        let mechanisms = self
            .mechanisms
            .iter()
            .map(|(consequence, vars)| {
                let conj = expr::Expr::conjunction(vars.iter());
                (consequence.clone(), expr::render(conj.as_ref()))
            })
            .collect();

        let mut utilities = BTreeMap::new();
        for (consequence, u) in &self.utilities {
            if let Some(value) = u.affirmed {
                utilities.insert(consequence.clone(), value);
            }
            if let Some(value) = u.negated {
                utilities.insert(negated_key(consequence), value);
            }
        }

        let intentions = self
            .intentions
            .iter()
            .map(|(action, intended)| (action.clone(), intended.to_vec()))
            .collect();

        Snapshot {
            actions: self.actions.to_vec(),
            background: self.background.to_vec(),
            consequences: self.consequences.to_vec(),
            description: self.description.clone(),
            intentions,
            mechanisms,
            utilities,
        }
    }

    /// Pretty JSON snapshot of the model.
    pub fn to_json(&self) -> Result<String> {
        self.snapshot().to_json_pretty()
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let json = self.to_json().map_err(|_| std::fmt::Error)?;
        f.write_str(&json)
    }
}
