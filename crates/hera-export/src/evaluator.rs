//! Evaluator abstraction: the external consumer of exported models.
//!
//! The exporter only produces a snapshot file and an assignment. What
//! interprets them is pluggable: an in-process implementation, or a
//! subprocess via [`CommandEvaluator`].

use crate::assignment::Assignment;
use crate::config::EvaluatorConfig;
use crate::error::{Error, Result};
use std::path::Path;
use std::process::Command;

/// Consumes a serialized model and an assignment, producing a handle to
/// the evaluated model. The snapshot path is only valid during the call.
pub trait Evaluator {
    type Handle;

    fn evaluate(&self, snapshot: &Path, assignment: &Assignment) -> Result<Self::Handle>;
}

/// Runs an external program as `<program> <args..> <snapshot> <assignment-json>`
/// and parses its stdout as JSON.
#[derive(Clone, Debug)]
pub struct CommandEvaluator {
    program: String,
    args: Vec<String>,
}

impl CommandEvaluator {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn from_config(config: &EvaluatorConfig) -> Self {
        Self {
            program: config.program.clone(),
            args: config.args.clone(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Evaluator for CommandEvaluator {
    type Handle = serde_json::Value;

    fn evaluate(&self, snapshot: &Path, assignment: &Assignment) -> Result<Self::Handle> {
        let assignment_json = serde_json::to_string(assignment)?;
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(snapshot)
            .arg(&assignment_json)
            .output()
            .map_err(|e| Error::evaluator(&self.program, e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            tracing::warn!(program = %self.program, status = %output.status, "evaluator failed");
            return Err(Error::evaluator(
                &self.program,
                format!("{}: {}", output.status, stderr),
            ));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        if stdout.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }
        Ok(serde_json::from_str(stdout.trim())?)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn sh(script: &str) -> CommandEvaluator {
        CommandEvaluator::new("sh").arg("-c").arg(script).arg("evaluator")
    }

    #[test]
    fn passes_snapshot_path_and_assignment() {
        let tmp = tempfile::tempdir().unwrap();
        let snapshot = tmp.path().join("model.json");
        std::fs::write(&snapshot, "{}").unwrap();
        let assignment: Assignment = [("A1", 1)].into_iter().collect();

        let evaluator = sh(r#"printf '{"snapshot":"%s","assignment":%s}' "$1" "$2""#);
        let handle = evaluator.evaluate(&snapshot, &assignment).unwrap();
        assert_eq!(handle["snapshot"], snapshot.display().to_string());
        assert_eq!(handle["assignment"]["A1"], 1);
    }

    #[test]
    fn empty_stdout_is_null() {
        let handle = sh("true")
            .evaluate(Path::new("/nonexistent"), &Assignment::new())
            .unwrap();
        assert!(handle.is_null());
    }

    #[test]
    fn nonzero_exit_is_evaluator_error() {
        let err = sh("echo boom >&2; exit 3")
            .evaluate(Path::new("/nonexistent"), &Assignment::new())
            .unwrap_err();
        match err {
            Error::Evaluator { program, message } => {
                assert_eq!(program, "sh");
                assert!(message.contains("boom"));
            }
            other => panic!("expected evaluator error, got {:?}", other),
        }
    }

    #[test]
    fn missing_program_is_evaluator_error() {
        let err = CommandEvaluator::new("hera-no-such-evaluator")
            .evaluate(Path::new("/nonexistent"), &Assignment::new())
            .unwrap_err();
        assert!(matches!(err, Error::Evaluator { .. }));
    }
}
