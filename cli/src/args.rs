//! Command-line argument handling.

use std::path::PathBuf;

use splice_types::{ContinuationTemplate, Strategy};

pub const USAGE: &str = "\
Usage: splice --records <records.jsonl> --output <out.jsonl> [options]

Options:
  --records <path>     Line-delimited JSON item records (required)
  --output <path>      Output file for counterfactual records (required)
  --decomposed <path>  Decompose batch results to pair with the records
  --strategy <name>    tag-midpoint (default) or sentence-ratio
  --template <name>    restate-all (default) or single-option
  -h, --help           Show this message";

/// A parsed invocation.
#[derive(Debug, Clone)]
pub enum CliCommand {
    Run(CliArgs),
    Help,
}

#[derive(Debug, Clone)]
pub struct CliArgs {
    pub records: PathBuf,
    pub output: PathBuf,
    pub decomposed: Option<PathBuf>,
    /// Overrides the config-file value when set.
    pub strategy: Option<Strategy>,
    /// Overrides the config-file value when set.
    pub template: Option<ContinuationTemplate>,
}

impl CliCommand {
    /// Parse argv (without the program name).
    pub fn parse(mut args: impl Iterator<Item = String>) -> Result<Self, String> {
        let mut records = None;
        let mut output = None;
        let mut decomposed = None;
        let mut strategy = None;
        let mut template = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => return Ok(CliCommand::Help),
                "--records" => records = Some(PathBuf::from(value(&arg, &mut args)?)),
                "--output" => output = Some(PathBuf::from(value(&arg, &mut args)?)),
                "--decomposed" => decomposed = Some(PathBuf::from(value(&arg, &mut args)?)),
                "--strategy" => {
                    let name = value(&arg, &mut args)?;
                    strategy = Some(
                        Strategy::parse(&name).ok_or_else(|| format!("unknown strategy {name:?}"))?,
                    );
                }
                "--template" => {
                    let name = value(&arg, &mut args)?;
                    template = Some(
                        ContinuationTemplate::parse(&name)
                            .ok_or_else(|| format!("unknown template {name:?}"))?,
                    );
                }
                other => return Err(format!("unrecognized argument {other:?}")),
            }
        }

        Ok(CliCommand::Run(CliArgs {
            records: records.ok_or("--records is required")?,
            output: output.ok_or("--output is required")?,
            decomposed,
            strategy,
            template,
        }))
    }
}

fn value(flag: &str, args: &mut impl Iterator<Item = String>) -> Result<String, String> {
    args.next().ok_or_else(|| format!("{flag} needs a value"))
}
