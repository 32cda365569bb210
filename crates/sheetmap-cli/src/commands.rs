//! Subcommand implementations.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Serialize;
use tracing::info;

use sheetmap_model::{Assignment, Schema};
use sheetmap_resolve::resolve;
use sheetmap_validate::{Issue, collect_issues};

use crate::cli::{CheckArgs, ResolveArgs};

/// Result of resolving one CSV file.
pub struct ResolveOutcome {
    /// Total records processed.
    pub records: usize,
    /// Records with at least one validation issue.
    pub failed: usize,
}

/// Per-record JSON output.
#[derive(Serialize)]
struct RecordOutput {
    record: usize,
    assignments: Vec<Assignment>,
    issues: Vec<Issue>,
    /// Input columns no field claimed.
    unclaimed: Vec<String>,
}

pub fn run_resolve(args: &ResolveArgs) -> anyhow::Result<ResolveOutcome> {
    let schema = load_schema(&args.schema)?;
    let records = sheetmap_ingest::read_records(&args.data)?;

    let mut outputs = Vec::with_capacity(records.len());
    let mut failed = 0;
    for (idx, mut record) in records.into_iter().enumerate() {
        let assignments = resolve(&schema, &mut record);
        let issues = collect_issues(&schema, &assignments);
        if !issues.is_empty() {
            failed += 1;
        }
        outputs.push(RecordOutput {
            record: idx + 1,
            assignments,
            issues,
            unclaimed: record.into_keys().collect(),
        });
    }

    let json = if args.pretty {
        serde_json::to_string_pretty(&outputs)?
    } else {
        serde_json::to_string(&outputs)?
    };
    match &args.output {
        Some(path) => fs::write(path, json)
            .with_context(|| format!("write output to {}", path.display()))?,
        None => println!("{json}"),
    }

    info!(records = outputs.len(), failed, "resolution finished");
    Ok(ResolveOutcome {
        records: outputs.len(),
        failed,
    })
}

pub fn run_check(args: &CheckArgs) -> anyhow::Result<()> {
    let schema = load_schema(&args.schema)?;
    print_schema(&schema, 0);
    Ok(())
}

fn load_schema(path: &Path) -> anyhow::Result<Schema> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read schema {}", path.display()))?;
    let schema: Schema = serde_json::from_str(&contents)
        .with_context(|| format!("parse schema {}", path.display()))?;
    Ok(schema)
}

fn print_schema(schema: &Schema, depth: usize) {
    let indent = "  ".repeat(depth);
    for field in &schema.fields {
        let mut notes = Vec::new();
        if field.optional {
            notes.push("optional".to_string());
        }
        if !field.alias_labels.is_empty() {
            notes.push(format!("aliases: {}", field.alias_labels.join(", ")));
        }
        let suffix = if notes.is_empty() {
            String::new()
        } else {
            format!(" ({})", notes.join("; "))
        };
        println!("{indent}{} \"{}\"{suffix}", field.name, field.label);

        if let Some(sub) = &field.schema {
            if sub.sequential_columns {
                println!("{indent}  [repeats across numbered columns]");
            }
            if let Some(delimiter) = &sub.multi_delimiter {
                println!("{indent}  [delimiter {delimiter:?}: not resolved]");
            }
            print_schema(sub, depth + 1);
        }
    }
}
