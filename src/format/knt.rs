// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Knotwork-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Knotwork and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{LabelId, Point, StrandGrid};

/// Parses `.knt` diagram text into a sparse grid.
///
/// Per line (line index = y, column index = x):
/// - whitespace creates no cell;
/// - `[` opens label capture: the bracket cell and every following cell up
///   to and including a closing `]` become label cells sharing one label,
///   whose text is the interior characters (brackets excluded);
/// - capture left open runs to the end of the line and resets on the next
///   line; labels never span lines;
/// - every other character becomes an ordinary cell.
///
/// This stage never fails; malformed input surfaces later, when tracing.
pub fn parse_knt(input: &str) -> StrandGrid {
    let mut grid = StrandGrid::default();

    for (y, line) in input.lines().enumerate() {
        let mut capture: Option<LabelId> = None;
        for (x, ch) in line.chars().enumerate() {
            let at = Point::new(x as i32, y as i32);
            match capture {
                None => {
                    if ch == '[' {
                        let id = grid.start_label();
                        grid.mark_label_cell(at, id);
                        capture = Some(id);
                    } else if !ch.is_whitespace() {
                        grid.insert_cell(at, ch);
                    }
                }
                Some(id) => {
                    grid.mark_label_cell(at, id);
                    if ch == ']' {
                        capture = None;
                    } else {
                        grid.append_label(id, ch);
                    }
                }
            }
        }
    }

    grid
}
