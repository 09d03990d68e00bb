// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Knotwork-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Knotwork and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{Point, StrandGrid};

const WINDOW_RADIUS: i32 = 6;
const MARKER_RADIUS: i32 = 3;

/// Renders the fixed 13×13 excerpt of the grid centered on `center`, with a
/// square `@` ring (corners open) at radius 3 highlighting the cell. Absent
/// cells render as spaces; every row is exactly 13 characters.
pub(crate) fn fault_window(grid: &StrandGrid, center: Point) -> String {
    let mut out = String::new();
    for row in -WINDOW_RADIUS..=WINDOW_RADIUS {
        if row > -WINDOW_RADIUS {
            out.push('\n');
        }
        for col in -WINDOW_RADIUS..=WINDOW_RADIUS {
            let on_ring = (col.abs() == MARKER_RADIUS && row.abs() < MARKER_RADIUS)
                || (col.abs() < MARKER_RADIUS && row.abs() == MARKER_RADIUS);
            let ch = if on_ring {
                '@'
            } else {
                grid.symbol(center.offset(col, row)).unwrap_or(' ')
            };
            out.push(ch);
        }
    }
    out
}
