// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Knotwork-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Knotwork and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use knotwork::model::Knot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Small,
    Medium,
    Large,
}

impl Case {
    pub fn id(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    fn size(self) -> (usize, usize) {
        match self {
            Self::Small => (4, 4),
            Self::Medium => (24, 24),
            Self::Large => (96, 96),
        }
    }
}

/// A woven diagram: `columns` vertical strands crossed by `rows` horizontal
/// strands, every crossing an underpass for the horizontal one.
pub fn weave(columns: usize, rows: usize) -> String {
    let mut out = String::new();

    for _ in 0..columns {
        out.push(' ');
        out.push('V');
    }
    out.push('\n');

    for _ in 0..rows {
        out.push('>');
        for _ in 0..columns {
            out.push('|');
            out.push('-');
        }
        out.push('.');
        out.push('\n');
    }

    for _ in 0..columns {
        out.push(' ');
        out.push('.');
    }
    out.push('\n');

    out
}

pub fn fixture(case: Case) -> String {
    let (columns, rows) = case.size();
    weave(columns, rows)
}

/// Expected number of crossings for a [`weave`] fixture.
pub fn crossings(case: Case) -> u64 {
    let (columns, rows) = case.size();
    (columns * rows) as u64
}

/// Cheap deterministic digest so benchmark bodies cannot be optimized away.
pub fn checksum_knot(knot: &Knot) -> u64 {
    let mut sum = 0u64;
    for (index, lead) in knot.leads().iter().enumerate() {
        sum = sum.wrapping_mul(31).wrapping_add(index as u64);
        for step in lead.steps() {
            sum = sum
                .wrapping_mul(31)
                .wrapping_add(step.at().x() as u64)
                .wrapping_mul(31)
                .wrapping_add(step.at().y() as u64)
                .wrapping_add(step.layer().depth().unsigned_abs() as u64);
        }
    }
    sum
}
