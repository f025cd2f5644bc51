// ABOUTME: Error module root re-exporting synthesis error types
// ABOUTME: Keeps caller-facing and attempt-level failures in one place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cooksy Contributors

//! # Error Types
//!
//! - `SynthesisError` - failures raised while synthesizing a recipe
//! - `SynthesisResult` - convenience alias used across the workspace

mod synthesis;

pub use synthesis::{SynthesisError, SynthesisResult};
