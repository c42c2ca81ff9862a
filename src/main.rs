// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::io::Read;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;

use listeq::{check_values, CheckError, Comparison, DiffEntry, Value};

mod cli;
mod logging;
use cli::{Cli, OutputFormat};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_format);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("❌ {:#}", e);
            ExitCode::from(2)
        }
    }
}

/// Returns whether the two documents hold equal lists.
fn run(cli: &Cli) -> Result<bool> {
    if cli.obtained == "-" && cli.expected == "-" {
        bail!("only one of OBTAINED and EXPECTED can read standard input");
    }

    let obtained = load(&cli.obtained)?;
    let expected = load(&cli.expected)?;

    let outcome = check_values(&obtained, &expected);
    match &outcome {
        Ok(Comparison::Equal) => tracing::info!("lists are equal"),
        Ok(Comparison::Different(report)) => {
            tracing::info!(entries = report.len(), "lists differ")
        }
        Err(e) => tracing::warn!(error = %e, "inputs can't be compared as lists"),
    }

    match cli.format {
        OutputFormat::Text => {
            let text = render_text(&outcome);
            if !text.is_empty() {
                println!("{}", text);
            }
        }
        OutputFormat::Json => {
            let record = OutcomeRecord::from_outcome(&outcome);
            println!(
                "{}",
                serde_json::to_string_pretty(&record).context("serializing report")?
            );
        }
    }

    Ok(matches!(outcome, Ok(Comparison::Equal)))
}

/// Read and parse one JSON document; `-` means standard input.
fn load(path: &str) -> Result<Value> {
    let text = if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading standard input")?;
        buf
    } else {
        fs::read_to_string(path).with_context(|| format!("reading {}", path))?
    };
    tracing::debug!(path, bytes = text.len(), "loaded document");

    Value::from_json_str(&text).with_context(|| format!("parsing {} as JSON", path))
}

fn render_text(outcome: &Result<Comparison<'_, Value>, CheckError>) -> String {
    match outcome {
        Ok(comparison) => comparison.diagnostic(),
        Err(e) => e.to_string(),
    }
}

/// JSON shape of `--format json` output.
#[derive(Debug, Serialize)]
struct OutcomeRecord {
    equal: bool,
    error: Option<String>,
    entries: Vec<EntryRecord>,
}

#[derive(Debug, Serialize)]
struct EntryRecord {
    kind: &'static str,
    index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    element: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    original: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    changed: Option<String>,
}

impl OutcomeRecord {
    fn from_outcome(outcome: &Result<Comparison<'_, Value>, CheckError>) -> Self {
        match outcome {
            Ok(Comparison::Equal) => OutcomeRecord {
                equal: true,
                error: None,
                entries: Vec::new(),
            },
            Ok(Comparison::Different(report)) => OutcomeRecord {
                equal: false,
                error: None,
                entries: report.entries().iter().map(EntryRecord::from).collect(),
            },
            Err(e) => OutcomeRecord {
                equal: false,
                error: Some(e.to_string()),
                entries: Vec::new(),
            },
        }
    }
}

impl From<&DiffEntry<'_, Value>> for EntryRecord {
    fn from(entry: &DiffEntry<'_, Value>) -> Self {
        let show = |v: &Value| Some(format!("{:?}", v));
        match *entry {
            DiffEntry::Added { index, element } => EntryRecord {
                kind: "added",
                index,
                element: show(element),
                original: None,
                changed: None,
            },
            DiffEntry::Removed { index, element } => EntryRecord {
                kind: "removed",
                index,
                element: show(element),
                original: None,
                changed: None,
            },
            DiffEntry::Changed {
                index,
                original,
                changed,
            } => EntryRecord {
                kind: "changed",
                index,
                element: None,
                original: show(original),
                changed: show(changed),
            },
        }
    }
}
