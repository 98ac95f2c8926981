//! Line-delimited JSON record shapes.
//!
//! Two inputs exist: the per-item records (question, full model output,
//! extracted answer, perturbed option) and, for the tag-based strategy, the
//! decompose batch results whose nested response body carries the tagged
//! trace. Unknown fields on item records round-trip untouched.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One evaluation item, as read from and written back to JSONL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub id: i64,
    pub full_text: String,
    pub extracted_answer: String,
    pub perturbed_option: String,
    /// The four original option texts in `A`-`D` order. Required by the
    /// restate-all template, unused by single-option.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<[String; 4]>,
    /// Filled in by this tool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counterfactual: Option<String>,
    /// Fields this tool does not interpret, preserved verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// A decomposed trace paired with its correlation key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecomposedTrace {
    pub custom_id: u64,
    pub text: String,
}

/// Read all item records from a JSONL file. Blank lines are ignored.
pub fn load_item_records(path: &Path) -> Result<Vec<ItemRecord>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read records file {}", path.display()))?;

    let mut records = Vec::new();
    for (line_number, line) in raw.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record: ItemRecord = serde_json::from_str(line).with_context(|| {
            format!("invalid record on line {} of {}", line_number + 1, path.display())
        })?;
        records.push(record);
    }
    Ok(records)
}

/// Read decompose batch results and order them by numeric `custom_id`.
///
/// Lines whose response body carries no message output are skipped with a
/// warning; the asynchronous batch collaborator reports those separately.
pub fn load_decomposed_traces(path: &Path) -> Result<Vec<DecomposedTrace>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read decompose results {}", path.display()))?;

    let mut traces = Vec::new();
    for (line_number, line) in raw.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_decompose_line(line).with_context(|| {
            format!(
                "invalid decompose result on line {} of {}",
                line_number + 1,
                path.display()
            )
        })? {
            Some(trace) => traces.push(trace),
            None => {
                tracing::warn!(line = line_number + 1, "decompose result has no message output");
            }
        }
    }

    traces.sort_by_key(|trace| trace.custom_id);
    Ok(traces)
}

/// Extract `(custom_id, decomposed trace)` from one batch result line.
///
/// Shape: `{ "custom_id": "...", "response": { "body": { "output":
/// [{ "type": "message", "content": [{ "text": "..." }] }] } } }`.
fn parse_decompose_line(line: &str) -> Result<Option<DecomposedTrace>> {
    let value: Value = serde_json::from_str(line)?;

    let custom_id = match value.get("custom_id") {
        Some(Value::String(raw)) => raw
            .parse::<u64>()
            .with_context(|| format!("custom_id {raw:?} is not numeric"))?,
        Some(Value::Number(number)) => number
            .as_u64()
            .ok_or_else(|| anyhow!("custom_id {number} is not a non-negative integer"))?,
        _ => return Err(anyhow!("missing custom_id")),
    };

    let output = value
        .pointer("/response/body/output")
        .and_then(Value::as_array)
        .ok_or_else(|| anyhow!("missing response body output"))?;

    for entry in output {
        if entry.get("type").and_then(Value::as_str) != Some("message") {
            continue;
        }
        let text = entry
            .pointer("/content/0/text")
            .and_then(Value::as_str)
            .ok_or_else(|| anyhow!("message output has no text content"))?;
        return Ok(Some(DecomposedTrace {
            custom_id,
            text: text.to_string(),
        }));
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::{ItemRecord, parse_decompose_line};

    #[test]
    fn item_record_round_trips_unknown_fields() {
        let line = r#"{"id":7,"full_text":"<think>\nx\n</think>","extracted_answer":"B","perturbed_option":"altered","context":"the question","label":2}"#;
        let record: ItemRecord = serde_json::from_str(line).unwrap();

        assert_eq!(record.id, 7);
        assert_eq!(record.extracted_answer, "B");
        assert_eq!(record.extra.get("label"), Some(&serde_json::json!(2)));

        let back = serde_json::to_string(&record).unwrap();
        let reparsed: ItemRecord = serde_json::from_str(&back).unwrap();
        assert_eq!(reparsed, record);
    }

    #[test]
    fn item_record_parses_options_array() {
        let line = r#"{"id":1,"full_text":"t","extracted_answer":"A","perturbed_option":"p","options":["w","x","y","z"]}"#;
        let record: ItemRecord = serde_json::from_str(line).unwrap();
        assert_eq!(
            record.options,
            Some(["w".into(), "x".into(), "y".into(), "z".into()])
        );
    }

    #[test]
    fn decompose_line_extracts_message_text() {
        let line = r#"{"custom_id":"12","response":{"body":{"output":[{"type":"reasoning"},{"type":"message","content":[{"text":"<continue_reasoning>\nstep"}]}]}}}"#;
        let trace = parse_decompose_line(line).unwrap().unwrap();

        assert_eq!(trace.custom_id, 12);
        assert_eq!(trace.text, "<continue_reasoning>\nstep");
    }

    #[test]
    fn decompose_line_accepts_numeric_custom_id() {
        let line = r#"{"custom_id":3,"response":{"body":{"output":[{"type":"message","content":[{"text":"t"}]}]}}}"#;
        assert_eq!(parse_decompose_line(line).unwrap().unwrap().custom_id, 3);
    }

    #[test]
    fn decompose_line_without_message_output_is_none() {
        let line = r#"{"custom_id":"1","response":{"body":{"output":[{"type":"reasoning"}]}}}"#;
        assert_eq!(parse_decompose_line(line).unwrap(), None);
    }

    #[test]
    fn decompose_line_with_bad_custom_id_fails() {
        let line = r#"{"custom_id":"abc","response":{"body":{"output":[]}}}"#;
        assert!(parse_decompose_line(line).is_err());
    }
}
