// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Knotwork-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Knotwork and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The strand-tracing engine.
//!
//! Tracing walks the immutable grid once per head, driven by the transition
//! table, and builds the ordered lead list plus the crossing registry. Any
//! fault aborts the whole trace; there is no partial result.

use std::collections::BTreeSet;
use std::fmt;

use smol_str::SmolStr;

use crate::model::{CrossingRegistry, Dir, Knot, Layer, Lead, Point, Step, StrandGrid, Visit};
use crate::render::fault_window;

mod heads;
mod table;

pub use heads::find_heads;

use heads::{is_endpoint, pick_turn};
use table::{action_for, Action};

/// Why a trace failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceFault {
    /// The (symbol, heading) pair is explicitly rejected by the table.
    InvalidTransition { symbol: char, heading: Dir },
    /// The symbol has no table row for any heading.
    UnrecognizedSymbol { symbol: char },
    /// A junction or endpoint had no occupied neighbor to turn to.
    NoNeighbor,
    /// A junction or endpoint had several candidate neighbors.
    AmbiguousNeighbor { candidates: usize },
}

impl TraceFault {
    fn message(&self) -> String {
        match self {
            Self::InvalidTransition { symbol, heading } => {
                format!("cannot enter '{symbol}' heading {heading}")
            }
            Self::UnrecognizedSymbol { symbol } => format!("unexpected character '{symbol}'"),
            Self::NoNeighbor => "no neighbor to turn to".to_owned(),
            Self::AmbiguousNeighbor { candidates } => {
                format!("ambiguous neighbor: {candidates} candidates")
            }
        }
    }
}

/// A fatal diagram fault, localized to a coordinate.
///
/// Carries a rendered excerpt of the grid around the faulting cell; the
/// `Display` output is the short message centered above that window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceError {
    fault: TraceFault,
    at: Point,
    window: String,
}

impl TraceError {
    pub(crate) fn new(grid: &StrandGrid, at: Point, fault: TraceFault) -> Self {
        Self { fault, at, window: fault_window(grid, at) }
    }

    pub fn fault(&self) -> TraceFault {
        self.fault
    }

    pub fn at(&self) -> Point {
        self.at
    }

    /// The rendered 13×13 grid excerpt around the faulting cell.
    pub fn window(&self) -> &str {
        &self.window
    }

    pub fn message(&self) -> String {
        self.fault.message()
    }
}

impl fmt::Display for TraceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.window.lines().next().map(str::len).unwrap_or(0);
        writeln!(f, "{:^width$}", self.fault.message())?;
        f.write_str(&self.window)
    }
}

impl std::error::Error for TraceError {}

/// Traces every lead of the grid.
///
/// Heads are processed in ascending (line, column) order; that order is the
/// lead numbering used by the crossing registry. A head on an endpoint
/// marker (`O` or digit) whose cell an earlier lead already stepped on is
/// skipped: that endpoint was consumed as the earlier lead's terminal.
///
/// Each walk advances one cell at a time. The transition table picks the
/// action; a stop ends the lead before the cell, a terminal endpoint ends
/// it on the cell (unregistered), and leaving the grid ends it after the
/// last appended step. Every other appended step is recorded in the
/// crossing registry under the lead's index.
pub fn trace_leads(grid: &StrandGrid) -> Result<Knot, TraceError> {
    let heads = find_heads(grid)?;

    let mut leads: Vec<Lead> = Vec::new();
    let mut crossings = CrossingRegistry::default();
    let mut underpasses: Vec<Point> = Vec::new();
    let mut visited: BTreeSet<Point> = BTreeSet::new();

    for head in heads {
        let consumed = grid.symbol(head.at()).is_some_and(is_endpoint)
            && visited.contains(&head.at());
        if consumed {
            continue;
        }

        let lead_index = leads.len();
        let mut dir = head.dir();
        let mut layer = Layer::Over;
        let mut name = SmolStr::new(head.name());

        let mut lead = Lead::default();
        lead.push(Step::new(head.at(), dir, layer, name.clone()));
        visited.insert(head.at());

        let mut at = dir.step(head.at());
        while let Some(symbol) = grid.symbol(at) {
            let action = match action_for(symbol, dir) {
                Some(action) => action,
                None => {
                    return Err(TraceError::new(
                        grid,
                        at,
                        TraceFault::UnrecognizedSymbol { symbol },
                    ))
                }
            };

            match action {
                Action::Invalid => {
                    return Err(TraceError::new(
                        grid,
                        at,
                        TraceFault::InvalidTransition { symbol, heading: dir },
                    ))
                }
                Action::Stop => break,
                Action::Terminate => {
                    lead.push(Step::new(at, dir, layer, name.clone()));
                    visited.insert(at);
                    break;
                }
                Action::Move(next) => {
                    dir = next;
                    layer = Layer::Over;
                }
                Action::Under => {
                    layer = Layer::Under;
                    underpasses.push(at);
                }
                Action::Check => {
                    dir = pick_turn(grid, at, dir)?;
                    layer = Layer::Over;
                }
                Action::Rename => match grid.label_text(at) {
                    Some(text) => name = SmolStr::new(text),
                    None => {
                        return Err(TraceError::new(
                            grid,
                            at,
                            TraceFault::UnrecognizedSymbol { symbol },
                        ))
                    }
                },
            }

            lead.push(Step::new(at, dir, layer, name.clone()));
            crossings.record(at, Visit::new(lead_index, dir, layer));
            visited.insert(at);
            at = dir.step(at);
        }

        leads.push(lead);
    }

    Ok(Knot::new(leads, crossings, underpasses))
}
