// ABOUTME: Role buckets an ingredient can be sorted into before template selection
// ABOUTME: Maps each role to the instruction placeholder it substitutes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cooksy Contributors

use crate::constants::classification::{PROTEIN_TOKEN, VEGETABLES_TOKEN};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Culinary role of an ingredient
///
/// Roles are not exclusive: an ingredient may land in several buckets or none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleBucket {
    /// Meat, fish, eggs, tofu, beans
    Protein,
    /// Anything in a vegetable or produce category
    Vegetable,
    /// Rice, pasta, quinoa, bread
    Grain,
}

impl RoleBucket {
    /// All buckets in classification order
    pub const ALL: [Self; 3] = [Self::Protein, Self::Vegetable, Self::Grain];

    /// Instruction placeholder replaced by this bucket's ingredient names
    ///
    /// Grains have no placeholder.
    #[must_use]
    pub const fn placeholder(&self) -> Option<&'static str> {
        match self {
            Self::Protein => Some(PROTEIN_TOKEN),
            Self::Vegetable => Some(VEGETABLES_TOKEN),
            Self::Grain => None,
        }
    }

    /// Lowercase label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Protein => "protein",
            Self::Vegetable => "vegetable",
            Self::Grain => "grain",
        }
    }
}

impl fmt::Display for RoleBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
