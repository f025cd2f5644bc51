// ABOUTME: Intelligence module re-exports from cooksy-intelligence crate
// ABOUTME: Keeps synthesis types reachable under the main crate's namespace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cooksy Contributors

//! # Intelligence Module
//!
//! Recipe synthesis lives in the `cooksy-intelligence` crate; this module
//! re-exports it so binaries and tests can use `cooksy::intelligence::*`.

// Re-export all public items from cooksy-intelligence
pub use cooksy_intelligence::*;

// Re-export submodules for path-based access (e.g., crate::intelligence::recipes::RngSource)
pub use cooksy_intelligence::{config, recipes};
