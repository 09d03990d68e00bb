// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Knotwork-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Knotwork and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smallvec::SmallVec;

use super::{TraceError, TraceFault};
use crate::model::{Dir, Head, Point, StrandGrid};

const DIRECTED_MARKERS: [(char, Dir); 5] = [
    ('^', Dir::Up),
    ('V', Dir::Down),
    ('v', Dir::Down),
    ('>', Dir::Right),
    ('<', Dir::Left),
];

/// An endpoint marker: an undirected strand end (`O`) or a named one (digit).
pub(crate) fn is_endpoint(symbol: char) -> bool {
    symbol == 'O' || symbol.is_ascii_digit()
}

/// Picks the direction to continue in at `at`, given the current heading.
///
/// Considers the four occupied orthogonal neighbors, minus the one behind
/// (`heading.reverse()`; for `Dir::Still` nothing is behind, so all four
/// count). Exactly one candidate must remain.
pub(crate) fn pick_turn(grid: &StrandGrid, at: Point, heading: Dir) -> Result<Dir, TraceError> {
    let mut candidates: SmallVec<[Dir; 4]> = SmallVec::new();
    for dir in Dir::CARDINAL {
        if dir == heading.reverse() {
            continue;
        }
        if grid.contains(dir.step(at)) {
            candidates.push(dir);
        }
    }

    match candidates.len() {
        1 => Ok(candidates[0]),
        0 => Err(TraceError::new(grid, at, TraceFault::NoNeighbor)),
        n => Err(TraceError::new(grid, at, TraceFault::AmbiguousNeighbor { candidates: n })),
    }
}

/// Finds every strand start, sorted by line then column.
///
/// A directed marker (`^ V v > <`) is a head when the cell behind it (against
/// its direction) is absent; otherwise it is a continuation of a strand
/// arriving from that side. An endpoint marker starts undirected and takes
/// the direction of its single occupied neighbor; zero or several neighbors
/// are faults. Digit heads carry their digit as the name.
///
/// The sort fixes lead numbering for the whole trace: crossing-registry
/// indices refer to positions in this order.
pub fn find_heads(grid: &StrandGrid) -> Result<Vec<Head>, TraceError> {
    let mut heads = Vec::new();

    for (marker, dir) in DIRECTED_MARKERS {
        for &at in grid.occurrences(marker) {
            let behind = dir.reverse().step(at);
            if !grid.contains(behind) {
                heads.push(Head::new(at, dir, ""));
            }
        }
    }

    for &at in grid.occurrences('O') {
        let dir = pick_turn(grid, at, Dir::Still)?;
        heads.push(Head::new(at, dir, ""));
    }

    for digit in '0'..='9' {
        for &at in grid.occurrences(digit) {
            let dir = pick_turn(grid, at, Dir::Still)?;
            heads.push(Head::new(at, dir, digit.to_string()));
        }
    }

    heads.sort_by_key(|head| (head.at().y(), head.at().x()));
    Ok(heads)
}
