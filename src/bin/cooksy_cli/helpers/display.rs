// ABOUTME: Output formatting helpers for cooksy-cli
// ABOUTME: Pretty JSON on stdout, human-readable batch attempt report on stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cooksy Contributors

use anyhow::{Context, Result};
use cooksy::intelligence::recipes::{AttemptOutcome, BatchReport};
use cooksy::models::Ingredient;
use serde::Serialize;

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{rendered}");
    Ok(())
}

/// Print one ingredient per line: glyph, id, name, category
pub fn print_ingredients<'a>(ingredients: impl IntoIterator<Item = &'a Ingredient>) {
    for ingredient in ingredients {
        println!(
            "{} {:<14} {:<16} {}",
            ingredient.emoji, ingredient.id, ingredient.name, ingredient.category
        );
    }
}

/// Print what happened on each batch attempt to stderr
pub fn print_attempts(report: &BatchReport) {
    eprintln!("Batch attempts:");
    eprintln!("{}", "=".repeat(50));
    for (index, attempt) in report.attempts.iter().enumerate() {
        let line = match attempt {
            AttemptOutcome::Produced { title, template } => {
                format!("produced  {title} ({template})")
            }
            AttemptOutcome::DuplicateTitle { title } => format!("duplicate {title}"),
            AttemptOutcome::Failed { error } => format!("failed    {error}"),
        };
        eprintln!("{:>2}. {line}", index + 1);
    }
    eprintln!(
        "{} produced, {} duplicate, {} failed",
        report.produced_count(),
        report.duplicate_count(),
        report.failures().count()
    );
}
