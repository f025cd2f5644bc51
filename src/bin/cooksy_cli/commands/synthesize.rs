// ABOUTME: Synthesis commands for cooksy-cli
// ABOUTME: Single and batch recipe synthesis with optional reproducible seeding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cooksy Contributors

use crate::helpers::display::{print_attempts, print_json};
use anyhow::{Context, Result};
use cooksy::catalog::resolve_ingredients;
use cooksy::intelligence::{RecipeSynthesizer, RngSource};
use rand_chacha::ChaCha8Rng;
use tracing::info;

fn random_source(seed: Option<u64>) -> RngSource<ChaCha8Rng> {
    seed.map_or_else(RngSource::from_entropy, |seed| {
        info!(seed, "Using seeded random source");
        RngSource::seeded(seed)
    })
}

/// Synthesize and print one recipe
pub fn single(ids: &[String], seed: Option<u64>) -> Result<()> {
    let selected = resolve_ingredients(ids).context("Invalid ingredient selection")?;
    let mut rng = random_source(seed);
    let recipe = RecipeSynthesizer::new()
        .synthesize(&selected, &mut rng)
        .context("Recipe synthesis failed")?;
    print_json(&recipe)
}

/// Synthesize and print a batch; with `verbose`, report each attempt on stderr
pub fn batch(ids: &[String], count: Option<usize>, seed: Option<u64>, verbose: bool) -> Result<()> {
    let selected = resolve_ingredients(ids).context("Invalid ingredient selection")?;
    let mut rng = random_source(seed);
    let report = RecipeSynthesizer::new().synthesize_batch(&selected, count, &mut rng);
    if verbose {
        print_attempts(&report);
    }
    print_json(&report.recipes)
}
