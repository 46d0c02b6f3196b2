//! Export a model to an evaluator through a transient snapshot file.

use crate::assignment::Assignment;
use crate::config::ExportConfig;
use crate::error::Result;
use crate::evaluator::{CommandEvaluator, Evaluator};
use crate::transient::TransientSnapshot;
use hera_core::Model;
use tracing::info;

/// Validate `assignment`, write the model's snapshot to a transient file,
/// and hand both to `evaluator`. The file is gone when this returns.
pub fn export<E: Evaluator>(
    model: &Model,
    assignment: &Assignment,
    evaluator: &E,
    config: &ExportConfig,
) -> Result<E::Handle> {
    assignment.validate(model)?;
    if config.check_model {
        model.check()?;
    }

    let transient = TransientSnapshot::write(&model.snapshot(), config)?;
    info!(
        description = model.description(),
        variables = assignment.len(),
        path = %transient.path().display(),
        "exporting model"
    );
    let handle = evaluator.evaluate(transient.path(), assignment)?;
    info!(description = model.description(), "export complete");
    Ok(handle)
}

/// Export settings bundled with the export routine.
#[derive(Clone, Debug, Default)]
pub struct Exporter {
    config: ExportConfig,
}

impl Exporter {
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    pub fn export<E: Evaluator>(
        &self,
        model: &Model,
        assignment: &Assignment,
        evaluator: &E,
    ) -> Result<E::Handle> {
        export(model, assignment, evaluator, &self.config)
    }

    /// Export using the configured external evaluator command.
    pub fn export_with_command(
        &self,
        model: &Model,
        assignment: &Assignment,
    ) -> Result<serde_json::Value> {
        let evaluator = CommandEvaluator::from_config(&self.config.evaluator);
        self.export(model, assignment, &evaluator)
    }
}
