// ABOUTME: Re-exports command modules for cooksy-cli
// ABOUTME: Provides catalog, synthesis and planning commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cooksy Contributors

pub mod catalog;
pub mod plan;
pub mod synthesize;
