//! Hera Core - Utility-based causal agency models: registry, tables, cascades and serialization

mod cascade;
pub mod error;
pub mod expr;
pub mod model;
pub mod snapshot;
mod tables;
pub mod types;

pub use error::{Error, Result};
pub use expr::Expr;
pub use model::Model;
pub use snapshot::Snapshot;
pub use types::{OrderedSet, Utility, VariableKind};
