//! Mechanism, utility and intention tables, plus model validation.

use crate::error::{Error, Result};
use crate::expr::Expr;
use crate::model::Model;
use crate::types::{OrderedSet, Utility, VariableKind};

impl Model {
    // ------------------------------------------------------------------
    // Mechanisms
    // ------------------------------------------------------------------

    /// Variables whose conjunction causes `consequence`.
    pub fn mechanism(&self, consequence: &str) -> Option<&OrderedSet> {
        self.mechanisms.get(consequence)
    }

    /// The mechanism of `consequence` as a conjunction expression.
    pub fn mechanism_expr(&self, consequence: &str) -> Option<Expr> {
        self.mechanisms
            .get(consequence)
            .and_then(|vars| Expr::conjunction(vars.iter()))
    }

    /// Add `variables` to the conjunction causing `consequence`. Any
    /// registered variable is accepted, including the consequence itself.
    pub fn add_mechanism(&mut self, consequence: &str, variables: &[&str]) -> Result<()> {
        self.require(VariableKind::Consequence, consequence)?;
        for var in variables {
            if self.kind_of(var).is_none() {
                return Err(Error::NotAVariable(var.to_string()));
            }
        }

        let vars = self.mechanisms.entry(consequence.to_string()).or_default();
        for var in variables {
            vars.insert(*var);
        }
        Ok(())
    }

    pub fn remove_mechanism(&mut self, consequence: &str, variables: &[&str]) -> Result<()> {
        self.require(VariableKind::Consequence, consequence)?;

        if let Some(vars) = self.mechanisms.get_mut(consequence) {
            for var in variables {
                vars.remove(var);
            }
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Utilities
    // ------------------------------------------------------------------

    /// Utility of reaching (`affirmed`) or not reaching `consequence`.
    pub fn utility(&self, consequence: &str, affirmed: bool) -> Option<i64> {
        self.utilities.get(consequence).and_then(|u| u.get(affirmed))
    }

    pub fn utilities(&self) -> impl Iterator<Item = (&str, &Utility)> {
        self.utilities.iter().map(|(name, u)| (name.as_str(), u))
    }

    pub fn set_utility(&mut self, consequence: &str, value: i64, affirmed: bool) -> Result<()> {
        self.require(VariableKind::Consequence, consequence)?;

        *self
            .utilities
            .entry(consequence.to_string())
            .or_default()
            .slot_mut(affirmed) = Some(value);
        Ok(())
    }

    /// Remove one utility of `consequence`. Missing entries are ignored.
    pub fn remove_utility(&mut self, consequence: &str, affirmed: bool) {
        if let Some(u) = self.utilities.get_mut(consequence) {
            *u.slot_mut(affirmed) = None;
            if u.is_empty() {
                self.utilities.remove(consequence);
            }
        }
    }

    // ------------------------------------------------------------------
    // Intentions
    // ------------------------------------------------------------------

    /// Consequences intended by `action`, starting with the action itself.
    pub fn intentions(&self, action: &str) -> Option<&OrderedSet> {
        self.intentions.get(action)
    }

    pub fn add_intention(&mut self, action: &str, consequences: &[&str]) -> Result<()> {
        self.require_intention_args(action, consequences)?;

        let intended = self.intentions.entry(action.to_string()).or_default();
        for consequence in consequences {
            intended.insert(*consequence);
        }
        Ok(())
    }

    /// Remove intended consequences of `action`. The action itself always
    /// stays: it is an action, never a consequence, so it cannot be named.
    pub fn remove_intention(&mut self, action: &str, consequences: &[&str]) -> Result<()> {
        self.require_intention_args(action, consequences)?;

        if let Some(intended) = self.intentions.get_mut(action) {
            for consequence in consequences {
                intended.remove(consequence);
            }
        }
        Ok(())
    }

    fn require_intention_args(&self, action: &str, consequences: &[&str]) -> Result<()> {
        self.require(VariableKind::Action, action)?;
        for consequence in consequences {
            self.require(VariableKind::Consequence, consequence)?;
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Validation
    // ------------------------------------------------------------------

    /// Every consequence must be caused by at least one variable.
    pub fn check(&self) -> Result<()> {
        for consequence in self.consequences.iter() {
            let reachable = self
                .mechanisms
                .get(consequence)
                .is_some_and(|vars| !vars.is_empty());
            if !reachable {
                return Err(Error::Unreachable(consequence.to_string()));
            }
        }
        Ok(())
    }
}
