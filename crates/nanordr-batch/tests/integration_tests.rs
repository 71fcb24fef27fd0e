//! Integration tests for nanordr-batch
//!
//! These tests run the standard rule base over JSONL files on disk and read
//! the prediction files back.

use nanordr_batch::{BatchConfig, BatchRunner, EvaluationMode, PredictionRecord, PredictionStats};
use nanordr_rules::{names, standard_tree};
use serde_json::{json, Value};
use std::fs;
use std::path::Path;

fn write_inputs(path: &Path, cases: &[Value]) {
    let lines: Vec<String> = cases.iter().map(|c| c.to_string()).collect();
    fs::write(path, lines.join("\n\n") + "\n").unwrap();
}

fn read_records(path: &Path) -> Vec<Value> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

fn cases() -> Vec<Value> {
    vec![
        json!({
            "nanoparticle": {"type": "unknown", "surface_charge": "positive"},
            "ligand": {"charge": "negative"},
            "context": {"source_code": "C1", "display_name": "Cationic complex"}
        }),
        json!({
            "nanoparticle": {"type": "unknown", "surface_charge": "unknown"},
            "ligand": {"type": "unknown"},
            "biomolecule": {"type": "unknown"},
            "surface": {"material": "unknown", "charge": "unknown"},
            "context": {"source_code": "C2"}
        }),
        json!({
            "nanoparticle": {"type": "metallic", "type_confidence": 0.8, "type_provenance": "keywords"},
            "context": {"source_code": "C3", "display_name": "SPIO contrast agent"}
        }),
    ]
}

#[test]
fn test_single_mode_file_run() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("inputs.jsonl");
    let output = dir.path().join("predictions.jsonl");
    write_inputs(&input, &cases());

    let tree = standard_tree().unwrap();
    let metrics = BatchRunner::new(&tree, BatchConfig::default())
        .run_files(&input, &output)
        .unwrap();

    assert_eq!(metrics.processed(), 3);
    assert_eq!(metrics.resolved, 2);
    assert_eq!(metrics.unresolved, 1);

    let records = read_records(&output);
    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["index"], json!(1));
    assert_eq!(records[0]["context"]["source_code"], json!("C1"));
    assert_eq!(records[0]["prediction"]["rule"], json!(names::ELECTROSTATIC_BINDING));
    assert_eq!(records[1]["prediction"]["rule"], json!("Root"));
    assert_eq!(records[1]["prediction"]["output"], json!({}));
    assert_eq!(records[2]["prediction"]["rule"], json!(names::SPIO_CORONA));
    assert_eq!(records[2]["prediction"]["input_confidence"], json!(0.8));
    assert!(records[2]["prediction"]["execution_time"].is_number());
}

#[test]
fn test_all_mode_file_run() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("inputs.jsonl");
    let output = dir.path().join("predictions.jsonl");
    write_inputs(&input, &cases());

    let tree = standard_tree().unwrap();
    let config = BatchConfig::default().with_mode(EvaluationMode::All);
    BatchRunner::new(&tree, config).run_files(&input, &output).unwrap();

    let records = read_records(&output);
    assert_eq!(records[0]["prediction"]["multi"], json!(true));
    assert_eq!(
        records[0]["prediction"]["results"][0]["rule"],
        json!(names::ELECTROSTATIC_BINDING)
    );
    assert_eq!(
        records[0]["prediction"]["results"][1]["rule"],
        json!(names::CHARGE_NODE)
    );
    assert_eq!(
        records[1]["prediction"],
        json!({
            "rule": null,
            "output": null,
            "prediction_confidence": 0.0,
            "input_confidence": 0.0,
            "provenance": [],
            "execution_time": null
        })
    );
}

#[test]
fn test_malformed_line_does_not_stop_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("inputs.jsonl");
    let output = dir.path().join("predictions.jsonl");
    fs::write(
        &input,
        "{\"nanoparticle\": {\"type\": \"polymeric\"}}\n{\"nanoparticle\": [\n{}\n",
    )
    .unwrap();

    let tree = standard_tree().unwrap();
    let metrics = BatchRunner::new(&tree, BatchConfig::default())
        .run_files(&input, &output)
        .unwrap();

    assert_eq!(metrics.malformed, 1);
    assert_eq!(metrics.written, 3);

    let records = read_records(&output);
    assert_eq!(records[0]["prediction"]["rule"], json!(names::POLYMERIC_ENCAPSULATION));
    assert!(records[1]["error"].is_string());
    assert_eq!(records[1]["prediction"]["rule"], json!(null));
    assert_eq!(records[2]["index"], json!(3));
}

#[test]
fn test_quick_preset_limits_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("inputs.jsonl");
    let output = dir.path().join("predictions.jsonl");
    let many: Vec<Value> = (0..130).map(|i| json!({"context": {"n": i}})).collect();
    write_inputs(&input, &many);

    let tree = standard_tree().unwrap();
    let metrics = BatchRunner::new(&tree, BatchConfig::quick())
        .run_files(&input, &output)
        .unwrap();

    assert_eq!(metrics.processed(), 128);
    assert_eq!(read_records(&output).len(), 128);
}

#[test]
fn test_missing_input_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let tree = standard_tree().unwrap();
    let result = BatchRunner::new(&tree, BatchConfig::default())
        .run_files(dir.path().join("absent.jsonl"), dir.path().join("out.jsonl"));
    assert!(result.is_err());
}

#[test]
fn test_stats_over_prediction_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("inputs.jsonl");
    let output = dir.path().join("predictions.jsonl");
    write_inputs(&input, &cases());

    let tree = standard_tree().unwrap();
    BatchRunner::new(&tree, BatchConfig::default())
        .run_files(&input, &output)
        .unwrap();

    let stats = PredictionStats::load(&output).unwrap();
    assert_eq!(stats.records, 3);
    assert_eq!(stats.rules.get(names::SPIO_CORONA), Some(&1));
    assert_eq!(stats.rules.get("Root"), Some(&1));
    assert_eq!(stats.affinities.get("high"), Some(&2));
    assert_eq!(stats.monolayer_orders.get("unknown"), Some(&1));

    let records: Vec<PredictionRecord> = fs::read_to_string(&output)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert!(records.iter().all(|r| !r.is_failed()));
}
