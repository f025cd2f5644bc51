// ABOUTME: Re-exports helper modules for cooksy-cli
// ABOUTME: Provides JSON and plain-text output formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cooksy Contributors

pub mod display;
