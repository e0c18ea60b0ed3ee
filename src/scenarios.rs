// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reference searches with known answers.
//!
//! Three fixed searches (two hits, one miss), plus the empty-input edge
//! case. The CLI `demo` command replays them and the integration tests pin
//! them.

use crate::types::SearchOutcome;

/// A search input with its expected outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scenario {
    pub name: &'static str,
    pub values: &'static [i64],
    pub target: i64,
    pub expected: SearchOutcome,
}

pub const SCENARIOS: &[Scenario] = &[
    Scenario {
        name: "present, right half",
        values: &[1, 2, 4, 5, 6, 8, 34, 56, 786, 8798],
        target: 56,
        expected: SearchOutcome::Found(7),
    },
    Scenario {
        name: "present, odd length",
        values: &[1, 2, 3, 5, 67, 143, 786, 6577, 89899],
        target: 786,
        expected: SearchOutcome::Found(6),
    },
    Scenario {
        name: "absent, falls between elements",
        values: &[1, 2, 3, 5, 67, 143, 786, 6577, 89899],
        target: 4,
        expected: SearchOutcome::NotFound,
    },
    Scenario {
        name: "empty sequence",
        values: &[],
        target: 1,
        expected: SearchOutcome::NotFound,
    },
];
