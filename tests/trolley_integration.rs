//! End-to-end: the trolley dilemma built through the facade, edited,
//! validated and exported.

use hera::*;
use std::path::Path;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// Pulling the lever diverts the trolley: one dies instead of five.
fn trolley() -> Model {
    init_tracing();
    let mut m = Model::new("Trolley problem");
    m.add_actions(&["pull"]).unwrap();
    m.add_background(&["trolley_runs"]).unwrap();
    m.add_consequences(&["one_dies", "five_survive"]).unwrap();

    m.add_mechanism("one_dies", &["pull", "trolley_runs"]).unwrap();
    m.add_mechanism("five_survive", &["pull"]).unwrap();

    m.set_utility("one_dies", -1, true).unwrap();
    m.set_utility("five_survive", 5, true).unwrap();
    m.set_utility("five_survive", -5, false).unwrap();

    m.add_intention("pull", &["five_survive"]).unwrap();
    m
}

struct ReadBack;

impl Evaluator for ReadBack {
    type Handle = serde_json::Value;

    fn evaluate(&self, snapshot: &Path, _assignment: &Assignment) -> hera_export::Result<Self::Handle> {
        let content = std::fs::read_to_string(snapshot)?;
        Ok(serde_json::from_str(&content)?)
    }
}

// ===========================================================================
// Build and export
// ===========================================================================

#[test]
fn trolley_model_is_consistent() {
    let m = trolley();
    assert!(m.check().is_ok());
    assert_eq!(
        m.mechanism_expr("one_dies").unwrap().to_string(),
        "And('pull','trolley_runs')"
    );
    assert_eq!(m.kind_of("trolley_runs"), Some(VariableKind::Background));
}

#[test]
fn trolley_exports_canonical_snapshot() {
    let tmp = tempfile::tempdir().unwrap();
    let exporter = Exporter::new(ExportConfig {
        temp_dir: Some(tmp.path().to_path_buf()),
        ..Default::default()
    });
    let assignment: Assignment = [("pull", 1), ("trolley_runs", 1)].into_iter().collect();

    let json = exporter.export(&trolley(), &assignment, &ReadBack).unwrap();

    assert_eq!(json["description"], "Trolley problem");
    assert_eq!(json["consequences"], serde_json::json!(["one_dies", "five_survive"]));
    assert_eq!(json["mechanisms"]["five_survive"], "'pull'");
    assert_eq!(
        json["utilities"],
        serde_json::json!({"five_survive": 5, "Not('five_survive')": -5, "one_dies": -1})
    );
    assert_eq!(json["intentions"]["pull"], serde_json::json!(["pull", "five_survive"]));
    assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
}

// ===========================================================================
// Editing keeps the export valid
// ===========================================================================

#[test]
fn renaming_flows_into_export() {
    let tmp = tempfile::tempdir().unwrap();
    let mut m = trolley();
    m.rename_action("pull", "divert").unwrap();
    m.rename_consequence("five_survive", "five_saved").unwrap();

    let config = ExportConfig {
        temp_dir: Some(tmp.path().to_path_buf()),
        ..Default::default()
    };
    let assignment: Assignment = [("divert", 0), ("trolley_runs", 1)].into_iter().collect();
    let json = export(&m, &assignment, &ReadBack, &config).unwrap();

    assert_eq!(json["mechanisms"]["one_dies"], "And('divert','trolley_runs')");
    assert_eq!(json["utilities"]["Not('five_saved')"], -5);
    assert_eq!(json["intentions"]["divert"], serde_json::json!(["divert", "five_saved"]));

    // the old names are gone from the assignment contract too
    let stale: Assignment = [("pull", 0), ("trolley_runs", 1)].into_iter().collect();
    let err = export(&m, &stale, &ReadBack, &config).unwrap_err();
    assert!(matches!(err, ExportError::AssignmentMissing(ref names) if names == &["divert"]));
}

#[test]
fn removing_the_action_fails_checked_export() {
    let tmp = tempfile::tempdir().unwrap();
    let mut m = trolley();
    m.remove_actions(&["pull"]).unwrap();

    assert_eq!(m.mechanism("one_dies").unwrap().as_slice(), ["trolley_runs"]);
    assert!(m.mechanism("five_survive").unwrap().is_empty());
    assert!(matches!(m.check(), Err(ModelError::Unreachable(ref c)) if c == "five_survive"));

    let mut config = ExportConfig {
        temp_dir: Some(tmp.path().to_path_buf()),
        ..Default::default()
    };
    let assignment: Assignment = [("trolley_runs", 1)].into_iter().collect();
    let json = export(&m, &assignment, &ReadBack, &config).unwrap();
    assert_eq!(json["mechanisms"]["five_survive"], "");

    config.check_model = true;
    assert!(matches!(
        export(&m, &assignment, &ReadBack, &config),
        Err(ExportError::Model(ModelError::Unreachable(_)))
    ));
}
