//! hera: utility-based causal agency models.
//!
//! Build a model with [`Model`], validate it with [`Model::check`], and hand
//! it to an external evaluator with [`export`].

pub use hera_core::{Expr, Model, OrderedSet, Snapshot, Utility, VariableKind};
pub use hera_export::{
    export, Assignment, CommandEvaluator, Evaluator, EvaluatorConfig, ExportConfig, Exporter,
    TransientSnapshot,
};

pub type ModelError = hera_core::Error;
pub type ExportError = hera_export::Error;
