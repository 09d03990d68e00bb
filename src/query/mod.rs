// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Knotwork-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Knotwork and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only queries over a traced knot.
//!
//! The registry itself treats every multiply-visited cell uniformly; these
//! views split them by who did the visiting.

use std::collections::BTreeSet;

use crate::model::{Knot, Point, Visit};

/// Every coordinate visited more than once, in coordinate order.
pub fn crossing_points(knot: &Knot) -> Vec<Point> {
    knot.crossings()
        .iter()
        .filter(|(_, visits)| visits.len() > 1)
        .map(|(at, _)| at)
        .collect()
}

/// Crossings where at least two distinct leads meet.
pub fn shared_crossings(knot: &Knot) -> Vec<Point> {
    knot.crossings()
        .iter()
        .filter(|(_, visits)| visits.len() > 1 && distinct_leads(visits) > 1)
        .map(|(at, _)| at)
        .collect()
}

/// Crossings produced by a single lead passing over its own path.
pub fn self_crossings(knot: &Knot) -> Vec<Point> {
    knot.crossings()
        .iter()
        .filter(|(_, visits)| visits.len() > 1 && distinct_leads(visits) == 1)
        .map(|(at, _)| at)
        .collect()
}

/// The effective name of each lead, in lead order ("" for unnamed leads).
pub fn lead_names(knot: &Knot) -> Vec<&str> {
    knot.leads().iter().map(|lead| lead.name()).collect()
}

fn distinct_leads(visits: &[Visit]) -> usize {
    visits.iter().map(|visit| visit.lead()).collect::<BTreeSet<_>>().len()
}
