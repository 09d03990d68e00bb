// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Knotwork-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Knotwork and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use crate::model::{Knot, Lead, Point, StrandGrid};

/// Renders sparse cells over their bounding box. Absent cells are spaces;
/// trailing spaces are trimmed per row. Empty input renders as "".
fn render_cells(cells: &BTreeMap<Point, char>) -> String {
    let mut points = cells.keys();
    let Some(&first) = points.next() else {
        return String::new();
    };

    let (mut min_x, mut max_x) = (first.x(), first.x());
    let (mut min_y, mut max_y) = (first.y(), first.y());
    for at in points {
        min_x = min_x.min(at.x());
        max_x = max_x.max(at.x());
        min_y = min_y.min(at.y());
        max_y = max_y.max(at.y());
    }

    let mut lines = Vec::with_capacity((max_y - min_y + 1) as usize);
    for y in min_y..=max_y {
        let mut line = String::new();
        for x in min_x..=max_x {
            line.push(cells.get(&Point::new(x, y)).copied().unwrap_or(' '));
        }
        lines.push(line.trim_end_matches(' ').to_owned());
    }

    lines.join("\n")
}

/// The grid in canonical form: every occupied cell at its coordinate.
/// Label spans show as their synthesized `L` cells.
pub fn render_grid(grid: &StrandGrid) -> String {
    render_cells(&grid.cells().collect())
}

/// One lead drawn as direction glyphs (`^ V > < O`), one per step.
pub fn render_lead_directed(lead: &Lead) -> String {
    let mut cells = BTreeMap::new();
    for step in lead.steps() {
        cells.insert(step.at(), step.dir().glyph());
    }
    render_cells(&cells)
}

/// All leads overlaid as direction glyphs; later leads overwrite earlier
/// ones where they share a cell.
pub fn render_leads_directed(knot: &Knot) -> String {
    let mut cells = BTreeMap::new();
    for lead in knot.leads() {
        for step in lead.steps() {
            cells.insert(step.at(), step.dir().glyph());
        }
    }
    render_cells(&cells)
}
