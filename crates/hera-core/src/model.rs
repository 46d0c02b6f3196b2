//! The model aggregate and its variable registry.
//!
//! A [`Model`] owns the registry (three disjoint ordered name sets) and the
//! three tables that reference it: mechanisms, utilities and intentions.
//! Every structural edit goes through the registry operations here, which
//! validate all arguments first and then hand the change to
//! [`crate::cascade`] so the tables never reference a missing variable.

use crate::cascade;
use crate::error::{Error, Result};
use crate::types::{validate_name, OrderedSet, Utility, VariableKind};
use std::collections::BTreeMap;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Model {
    pub(crate) description: String,

    pub(crate) actions: OrderedSet,
    pub(crate) background: OrderedSet,
    pub(crate) consequences: OrderedSet,

    /// Consequence -> variables whose conjunction causes it.
    pub(crate) mechanisms: BTreeMap<String, OrderedSet>,
    /// Consequence -> payoffs of reaching / not reaching it.
    pub(crate) utilities: BTreeMap<String, Utility>,
    /// Action -> intended consequences, led by the action itself.
    pub(crate) intentions: BTreeMap<String, OrderedSet>,
}

impl Model {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Default::default()
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Drop every variable and table entry. The description is kept.
    pub fn reset(&mut self) {
        self.actions.clear();
        self.background.clear();
        self.consequences.clear();
        self.mechanisms.clear();
        self.utilities.clear();
        self.intentions.clear();
        tracing::debug!("model reset");
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn actions(&self) -> &OrderedSet {
        &self.actions
    }

    pub fn background(&self) -> &OrderedSet {
        &self.background
    }

    pub fn consequences(&self) -> &OrderedSet {
        &self.consequences
    }

    pub fn variables(&self, kind: VariableKind) -> &OrderedSet {
        match kind {
            VariableKind::Action => &self.actions,
            VariableKind::Background => &self.background,
            VariableKind::Consequence => &self.consequences,
        }
    }

    fn variables_mut(&mut self, kind: VariableKind) -> &mut OrderedSet {
        match kind {
            VariableKind::Action => &mut self.actions,
            VariableKind::Background => &mut self.background,
            VariableKind::Consequence => &mut self.consequences,
        }
    }

    /// The kind `name` is registered under, if any.
    pub fn kind_of(&self, name: &str) -> Option<VariableKind> {
        VariableKind::ALL
            .into_iter()
            .find(|kind| self.variables(*kind).contains(name))
    }

    pub fn contains(&self, kind: VariableKind, name: &str) -> bool {
        self.variables(kind).contains(name)
    }

    /// Fail with `Unknown` unless `name` is registered under `kind`.
    pub(crate) fn require(&self, kind: VariableKind, name: &str) -> Result<()> {
        validate_name(kind, name)?;
        if !self.contains(kind, name) {
            return Err(Error::unknown(kind, name));
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Registry operations (uniform over the three kinds)
    // ------------------------------------------------------------------

    /// Register `names` under `kind`. Names already registered under `kind`
    /// are skipped; a name registered under another kind is rejected.
    pub fn add(&mut self, kind: VariableKind, names: &[&str]) -> Result<()> {
        for name in names {
            validate_name(kind, name)?;
            match self.kind_of(name) {
                Some(existing) if existing != kind => {
                    return Err(Error::duplicate(existing, *name));
                }
                _ => {}
            }
        }

        for name in names {
            if self.variables_mut(kind).insert(*name) {
                cascade::variable_added(self, kind, name);
            }
        }
        Ok(())
    }

    /// Unregister `names` from `kind`, cascading into every table.
    /// Unknown names are ignored, including names that could never be
    /// registered.
    pub fn remove(&mut self, kind: VariableKind, names: &[&str]) -> Result<()> {
        for name in names {
            if self.variables_mut(kind).remove(name) {
                cascade::variable_removed(self, kind, name);
            }
        }
        Ok(())
    }

    /// Rename `old` to `new` within `kind`, rewriting every reference in
    /// place. Fails without touching the model if `old` is unknown or `new`
    /// is already taken.
    pub fn rename(&mut self, kind: VariableKind, old: &str, new: &str) -> Result<()> {
        validate_name(kind, old)?;
        validate_name(kind, new)?;
        if !self.contains(kind, old) {
            return Err(Error::unknown(kind, old));
        }
        if let Some(existing) = self.kind_of(new) {
            return Err(Error::duplicate(existing, new));
        }

        self.variables_mut(kind).replace(old, new);
        cascade::variable_renamed(self, kind, old, new);
        Ok(())
    }

    pub fn add_actions(&mut self, actions: &[&str]) -> Result<()> {
        self.add(VariableKind::Action, actions)
    }

    pub fn remove_actions(&mut self, actions: &[&str]) -> Result<()> {
        self.remove(VariableKind::Action, actions)
    }

    pub fn rename_action(&mut self, old: &str, new: &str) -> Result<()> {
        self.rename(VariableKind::Action, old, new)
    }

    pub fn add_background(&mut self, background: &[&str]) -> Result<()> {
        self.add(VariableKind::Background, background)
    }

    pub fn remove_background(&mut self, background: &[&str]) -> Result<()> {
        self.remove(VariableKind::Background, background)
    }

    pub fn rename_background(&mut self, old: &str, new: &str) -> Result<()> {
        self.rename(VariableKind::Background, old, new)
    }

    pub fn add_consequences(&mut self, consequences: &[&str]) -> Result<()> {
        self.add(VariableKind::Consequence, consequences)
    }

    pub fn remove_consequences(&mut self, consequences: &[&str]) -> Result<()> {
        self.remove(VariableKind::Consequence, consequences)
    }

    pub fn rename_consequence(&mut self, old: &str, new: &str) -> Result<()> {
        self.rename(VariableKind::Consequence, old, new)
    }
}
