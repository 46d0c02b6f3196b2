//! hera-export: hands models to an external evaluator.
//!
//! The model is serialized into a scoped temporary file, the evaluator is
//! invoked with that file and a truth assignment for the model's actions
//! and background conditions, and the file is removed on every exit path.

pub mod assignment;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod export;
pub mod transient;

pub use assignment::Assignment;
pub use config::{EvaluatorConfig, ExportConfig};
pub use error::{Error, Result};
pub use evaluator::{CommandEvaluator, Evaluator};
pub use export::{export, Exporter};
pub use transient::TransientSnapshot;
