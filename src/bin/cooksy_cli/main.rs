// ABOUTME: Cooksy CLI - command-line front end for recipe synthesis and meal planning
// ABOUTME: Lists ingredients, synthesizes recipes, suggests catalog recipes, and summarises the demo plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cooksy Contributors
//!
//! Usage:
//! ```bash
//! # List vegetables in the catalog
//! cooksy-cli ingredients --category Vegetables
//!
//! # Synthesize one recipe, reproducibly
//! cooksy-cli synthesize -i chicken-breast -i broccoli --seed 42
//!
//! # Synthesize a batch and show what happened on each attempt
//! cooksy-cli -v batch -i tomato -i onion -i spinach --count 5
//!
//! # Catalog recipes that fit the selection
//! cooksy-cli suggest -i salmon -i quinoa
//!
//! # Shopping list and nutrition for the demo week, skipping what you have
//! cooksy-cli plan --have garlic --have olive-oil
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cooksy::logging::LoggingConfig;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "cooksy-cli",
    about = "Cooksy recipe synthesis and meal planning CLI",
    long_about = "Turn a handful of ingredients into recipe ideas, then plan the week around them."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// List catalog ingredients
    Ingredients {
        /// Only ingredients in this category (e.g. "Vegetables")
        #[arg(long)]
        category: Option<String>,
    },

    /// Synthesize one recipe from the selected ingredients
    Synthesize {
        /// Ingredient id (repeatable)
        #[arg(long = "ingredient", short = 'i', required = true)]
        ingredients: Vec<String>,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Synthesize several recipes with varied templates
    Batch {
        /// Ingredient id (repeatable)
        #[arg(long = "ingredient", short = 'i', required = true)]
        ingredients: Vec<String>,

        /// Number of recipes to attempt (capped at 5)
        #[arg(long)]
        count: Option<usize>,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Suggest catalog recipes that use the selected ingredients
    Suggest {
        /// Ingredient id (repeatable)
        #[arg(long = "ingredient", short = 'i', required = true)]
        ingredients: Vec<String>,
    },

    /// Shopping list and nutrition summary for the demo weekly plan
    Plan {
        /// Ingredient id already in the pantry (repeatable)
        #[arg(long)]
        have: Vec<String>,

        /// Include pantry ingredients in the shopping list
        #[arg(long)]
        all: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::from_env().verbose(cli.verbose).init()?;
    debug!("Cooksy CLI");

    match cli.command {
        Command::Ingredients { category } => commands::catalog::ingredients(category.as_deref()),
        Command::Synthesize { ingredients, seed } => {
            commands::synthesize::single(&ingredients, seed)
        }
        Command::Batch {
            ingredients,
            count,
            seed,
        } => commands::synthesize::batch(&ingredients, count, seed, cli.verbose),
        Command::Suggest { ingredients } => commands::catalog::suggest(&ingredients),
        Command::Plan { have, all } => commands::plan::summary(&have, all),
    }
}
