// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Knotwork-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Knotwork and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Strand geometry.
//!
//! Turns a traced knot into 3D polylines a host application can build a
//! mesh or curve object from: one vertex per step at `(x, -y, z)`, edges
//! between consecutive steps of each lead, and `z` biased above or below
//! the base plane where strands cross.

use crate::model::{Knot, Layer};

/// Tuning for crossing separation.
///
/// At a crossing the over strand is lifted to `z_scale * (bias + 1) / 2`
/// and the under strand lowered to the negative of that; everywhere else
/// `z` is 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    pub bias: f64,
    pub z_scale: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self { bias: 0.0, z_scale: 1.0 }
    }
}

/// A polyline vertex. Diagram rows grow downward, so `y` is negated to
/// keep the layout upright.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vertex {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// The laid-out strands: a shared vertex pool and index pairs connecting
/// consecutive steps within each lead (leads are never connected to each
/// other).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StrandLayout {
    vertices: Vec<Vertex>,
    edges: Vec<(usize, usize)>,
}

impl StrandLayout {
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }
}

pub fn layout_knot(knot: &Knot, options: &LayoutOptions) -> StrandLayout {
    let lift = options.z_scale * (options.bias + 1.0) / 2.0;

    let mut layout = StrandLayout::default();
    for lead in knot.leads() {
        let mut prev: Option<usize> = None;
        for step in lead.steps() {
            let z = if knot.crossings().is_crossing(step.at()) {
                match step.layer() {
                    Layer::Over => lift,
                    Layer::Under => -lift,
                }
            } else {
                0.0
            };

            let index = layout.vertices.len();
            layout
                .vertices
                .push(Vertex::new(step.at().x() as f64, -(step.at().y() as f64), z));
            if let Some(prev) = prev {
                layout.edges.push((prev, index));
            }
            prev = Some(index);
        }
    }

    layout
}

#[cfg(test)]
mod tests {
    use super::{layout_knot, LayoutOptions};
    use crate::model::Knot;

    const WEAVE: &str = " V V\n>|-|-.\n | |\n . .";

    #[test]
    fn flat_strand_stays_in_the_base_plane() {
        let knot = Knot::parse("O>>>O").unwrap();
        let layout = layout_knot(&knot, &LayoutOptions::default());
        assert_eq!(layout.vertices().len(), 5);
        assert!(layout.vertices().iter().all(|v| v.z == 0.0));
        assert_eq!(layout.edges(), &[(0, 1), (1, 2), (2, 3), (3, 4)]);
    }

    #[test]
    fn crossing_steps_split_above_and_below() {
        let knot = Knot::parse(WEAVE).unwrap();
        let layout = layout_knot(&knot, &LayoutOptions::default());

        // Lead 0 passes over at (1, -1); the horizontal lead passes under.
        let over = layout
            .vertices()
            .iter()
            .find(|v| v.x == 1.0 && v.y == -1.0 && v.z > 0.0);
        let under = layout
            .vertices()
            .iter()
            .find(|v| v.x == 1.0 && v.y == -1.0 && v.z < 0.0);
        assert!(over.is_some());
        assert!(under.is_some());
        assert_eq!(over.unwrap().z, 0.5);
        assert_eq!(under.unwrap().z, -0.5);
    }

    #[test]
    fn z_scale_and_bias_raise_the_split() {
        let knot = Knot::parse(WEAVE).unwrap();
        let options = LayoutOptions { bias: 1.0, z_scale: 2.0 };
        let layout = layout_knot(&knot, &options);
        let top = layout.vertices().iter().map(|v| v.z).fold(0.0, f64::max);
        assert_eq!(top, 2.0);
    }

    #[test]
    fn leads_are_not_chained_together() {
        let knot = Knot::parse(WEAVE).unwrap();
        let layout = layout_knot(&knot, &LayoutOptions::default());
        // Lead lengths: 3, 3, 5 steps. Edge count is steps-1 per lead.
        assert_eq!(layout.vertices().len(), 11);
        assert_eq!(layout.edges().len(), 8);
        // No edge spans the boundary between two leads' vertex ranges.
        assert!(!layout.edges().contains(&(2, 3)));
        assert!(!layout.edges().contains(&(5, 6)));
    }
}
