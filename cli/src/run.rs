//! Per-item pipeline: pair records with decompositions, build the
//! continuation, drive the engine, write output records.

use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::{Context, Result, anyhow};

use splice_config::SpliceConfig;
use splice_engine::{
    CounterfactualRequest, CorruptedContinuation, build_counterfactual, extract_think,
    prefix_through_think,
};
use splice_types::{ContinuationTemplate, OptionLetter, OptionSet, SpliceError, Strategy};

use crate::args::CliArgs;
use crate::records::{self, ItemRecord};

#[derive(Debug, Clone, Copy, Default)]
pub struct RunSummary {
    pub written: usize,
    pub skipped: usize,
}

/// A failure while processing one item.
enum ItemError {
    /// Aborts the whole run so the anomaly surfaces.
    Fatal(anyhow::Error),
    /// Item-scoped; the item is skipped and the run continues.
    Skipped(SpliceError),
}

pub fn run(args: &CliArgs) -> Result<RunSummary> {
    let file_config = SpliceConfig::load()?;
    let strategy = args
        .strategy
        .or(file_config.map(|config| config.strategy))
        .unwrap_or_default();
    let template = args
        .template
        .or(file_config.map(|config| config.template))
        .unwrap_or_default();
    tracing::info!(
        strategy = strategy.as_str(),
        template = template.as_str(),
        "starting run"
    );

    let records = records::load_item_records(&args.records)?;
    let decomposed = match &args.decomposed {
        Some(path) => Some(records::load_decomposed_traces(path)?),
        None => None,
    };
    if let Some(traces) = &decomposed
        && traces.len() != records.len()
    {
        tracing::warn!(
            records = records.len(),
            decomposed = traces.len(),
            "record and decomposition counts differ; pairing by position"
        );
    }

    let output = File::create(&args.output)
        .with_context(|| format!("failed to create output file {}", args.output.display()))?;
    let mut writer = BufWriter::new(output);
    let mut summary = RunSummary::default();

    for (index, mut record) in records.into_iter().enumerate() {
        let decomposed_trace = decomposed
            .as_ref()
            .and_then(|traces| traces.get(index))
            .map(|trace| trace.text.as_str());

        match build_item(&record, decomposed_trace, strategy, template) {
            Ok(counterfactual) => {
                record.counterfactual = Some(counterfactual);
                serde_json::to_writer(&mut writer, &record)?;
                writer.write_all(b"\n")?;
                summary.written += 1;
            }
            Err(ItemError::Fatal(err)) => return Err(err),
            Err(ItemError::Skipped(err)) => {
                tracing::error!(id = record.id, error = %err, "skipping item");
                summary.skipped += 1;
            }
        }
    }
    writer.flush()?;

    Ok(summary)
}

/// Build one counterfactual record body.
fn build_item(
    record: &ItemRecord,
    decomposed_trace: Option<&str>,
    strategy: Strategy,
    template: ContinuationTemplate,
) -> Result<String, ItemError> {
    let target = OptionLetter::parse(&record.extracted_answer)
        .map_err(|err| ItemError::Fatal(anyhow!("item {}: {err}", record.id)))?;

    let continuation = match template {
        ContinuationTemplate::RestateAll => {
            let options = record.options.clone().map(OptionSet::new).ok_or_else(|| {
                ItemError::Fatal(anyhow!(
                    "item {} has no options; the restate-all template needs all four",
                    record.id
                ))
            })?;
            CorruptedContinuation::RestateAll {
                options: &options,
                target,
                perturbed: &record.perturbed_option,
            }
            .render()
        }
        ContinuationTemplate::SingleOption => CorruptedContinuation::SingleOption {
            target,
            perturbed: &record.perturbed_option,
        }
        .render(),
    };

    let prefix = prefix_through_think(&record.full_text);
    let reasoning = extract_think(&record.full_text).unwrap_or_default();
    if reasoning.is_empty() {
        tracing::warn!(id = record.id, "no think region; reasoning text is empty");
    }

    let request = CounterfactualRequest {
        original_text: reasoning,
        decomposed_trace,
        continuation: &continuation,
    };
    let body = build_counterfactual(strategy, &request).map_err(ItemError::Skipped)?;

    Ok(format!("{prefix}{body}"))
}
