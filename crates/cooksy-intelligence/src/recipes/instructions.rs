// ABOUTME: Renders template instructions with selected ingredient names
// ABOUTME: Replaces the first "vegetables" and "protein" placeholder when the bucket is non-empty
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cooksy Contributors

use super::classifier::RoleBuckets;
use cooksy_core::models::RoleBucket;

/// Substitute role placeholders in each step
///
/// Each placeholder is handled independently: its first occurrence is replaced
/// with the lowercased, comma-joined names of its bucket. Empty buckets leave
/// the step untouched. Matching is case-sensitive and only sees the template
/// text, never names inserted for another role.
#[must_use]
pub fn render_instructions(steps: &[String], buckets: &RoleBuckets<'_>) -> Vec<String> {
    let substitutions: Vec<(&'static str, String)> = RoleBucket::ALL
        .iter()
        .filter_map(|role| Some((role.placeholder()?, buckets.joined_names(*role)?)))
        .collect();

    steps
        .iter()
        .map(|step| render_step(step, &substitutions))
        .collect()
}

fn render_step(step: &str, substitutions: &[(&'static str, String)]) -> String {
    let mut hits: Vec<(usize, &str, &str)> = substitutions
        .iter()
        .filter_map(|(token, names)| step.find(token).map(|at| (at, *token, names.as_str())))
        .collect();
    hits.sort_unstable_by_key(|(at, _, _)| *at);

    let mut rendered = String::with_capacity(step.len());
    let mut cursor = 0;
    for (at, token, names) in hits {
        // overlapping tokens: the earlier one wins
        if at < cursor {
            continue;
        }
        rendered.push_str(&step[cursor..at]);
        rendered.push_str(names);
        cursor = at + token.len();
    }
    rendered.push_str(&step[cursor..]);
    rendered
}
