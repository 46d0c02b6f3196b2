//! Consistency engine: propagates registry changes into the tables.
//!
//! Each function runs after the registry itself has been updated and
//! assumes its arguments were already validated by the caller.

use crate::model::Model;
use crate::types::{OrderedSet, VariableKind};
use std::collections::BTreeMap;
use tracing::debug;

pub(crate) fn variable_added(model: &mut Model, kind: VariableKind, name: &str) {
    match kind {
        VariableKind::Action => {
            model
                .intentions
                .insert(name.to_string(), std::iter::once(name).collect());
        }
        VariableKind::Background => {}
        VariableKind::Consequence => {
            model.mechanisms.insert(name.to_string(), OrderedSet::new());
        }
    }
    debug!(%kind, variable = name, "variable added");
}

pub(crate) fn variable_removed(model: &mut Model, kind: VariableKind, name: &str) {
    match kind {
        VariableKind::Action => {
            model.intentions.remove(name);
        }
        VariableKind::Background => {}
        VariableKind::Consequence => {
            model.mechanisms.remove(name);
            model.utilities.remove(name);
            for intended in model.intentions.values_mut() {
                intended.remove(name);
            }
        }
    }
    // Only the single occurrence goes; the rest of each mechanism stays.
    let touched = model
        .mechanisms
        .values_mut()
        .map(|vars| vars.remove(name))
        .filter(|removed| *removed)
        .count();
    debug!(%kind, variable = name, mechanisms = touched, "variable removed");
}

pub(crate) fn variable_renamed(model: &mut Model, kind: VariableKind, old: &str, new: &str) {
    for vars in model.mechanisms.values_mut() {
        vars.replace(old, new);
    }
    match kind {
        VariableKind::Action => {
            rename_key(&mut model.intentions, old, new);
            if let Some(intended) = model.intentions.get_mut(new) {
                intended.replace(old, new);
            }
        }
        VariableKind::Background => {}
        VariableKind::Consequence => {
            rename_key(&mut model.mechanisms, old, new);
            rename_key(&mut model.utilities, old, new);
            for intended in model.intentions.values_mut() {
                intended.replace(old, new);
            }
        }
    }
    debug!(%kind, old, new, "variable renamed");
}

fn rename_key<V>(map: &mut BTreeMap<String, V>, old: &str, new: &str) {
    if let Some(value) = map.remove(old) {
        map.insert(new.to_string(), value);
    }
}
