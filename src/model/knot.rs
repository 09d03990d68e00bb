// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Knotwork-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Knotwork and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use super::grid::Point;
use super::strand::{Dir, Layer, Lead};
use crate::format::parse_knt;
use crate::trace::{trace_leads, TraceError};

/// One recorded pass of a lead through a cell: which lead (by index in the
/// traced order), the direction it was moving, and its layer at that cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visit {
    lead: usize,
    dir: Dir,
    layer: Layer,
}

impl Visit {
    pub fn new(lead: usize, dir: Dir, layer: Layer) -> Self {
        Self { lead, dir, layer }
    }

    pub fn lead(&self) -> usize {
        self.lead
    }

    pub fn dir(&self) -> Dir {
        self.dir
    }

    pub fn layer(&self) -> Layer {
        self.layer
    }
}

/// Where strands pass through each cell, in trace order.
///
/// Head cells and terminal endpoint cells are not recorded; a coordinate is
/// a crossing exactly when more than one visit landed on it (two distinct
/// leads, or the same lead twice).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CrossingRegistry {
    visits: BTreeMap<Point, Vec<Visit>>,
}

impl CrossingRegistry {
    pub(crate) fn record(&mut self, at: Point, visit: Visit) {
        self.visits.entry(at).or_default().push(visit);
    }

    pub fn visits(&self, at: Point) -> &[Visit] {
        self.visits.get(&at).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_crossing(&self, at: Point) -> bool {
        self.visits(at).len() > 1
    }

    pub fn iter(&self) -> impl Iterator<Item = (Point, &[Visit])> + '_ {
        self.visits.iter().map(|(&at, visits)| (at, visits.as_slice()))
    }
}

/// A fully traced diagram: the ordered leads, the crossing registry, and
/// every underpass coordinate in the order the tracer passed beneath.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Knot {
    leads: Vec<Lead>,
    crossings: CrossingRegistry,
    underpasses: Vec<Point>,
}

impl Knot {
    pub(crate) fn new(
        leads: Vec<Lead>,
        crossings: CrossingRegistry,
        underpasses: Vec<Point>,
    ) -> Self {
        Self { leads, crossings, underpasses }
    }

    /// Parses diagram text and traces every strand in one call.
    ///
    /// An empty or all-background input yields a knot with zero leads, not
    /// an error; callers that require at least one strand must check.
    pub fn parse(text: &str) -> Result<Self, TraceError> {
        trace_leads(&parse_knt(text))
    }

    /// Leads in head order: ascending line, then column, of their heads.
    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    pub fn crossings(&self) -> &CrossingRegistry {
        &self.crossings
    }

    pub fn underpasses(&self) -> &[Point] {
        &self.underpasses
    }
}
