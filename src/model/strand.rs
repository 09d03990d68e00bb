// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Knotwork-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Knotwork and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use smol_str::SmolStr;

use super::grid::Point;

/// A step direction on the grid.
///
/// `Still` is the zero vector; it only ever appears on an undirected head
/// before its direction is resolved, never mid-walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Dir {
    Up,
    Down,
    Right,
    Left,
    Still,
}

impl Dir {
    /// The four nonzero directions, in resolver probe order.
    pub const CARDINAL: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Right, Dir::Left];

    pub fn offset(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Right => (1, 0),
            Self::Left => (-1, 0),
            Self::Still => (0, 0),
        }
    }

    pub fn reverse(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Right => Self::Left,
            Self::Left => Self::Right,
            Self::Still => Self::Still,
        }
    }

    /// The coordinate one step from `at` in this direction.
    pub fn step(self, at: Point) -> Point {
        let (dx, dy) = self.offset();
        at.offset(dx, dy)
    }

    /// The marker character for this direction (`^ V > < O`).
    pub fn glyph(self) -> char {
        match self {
            Self::Up => '^',
            Self::Down => 'V',
            Self::Right => '>',
            Self::Left => '<',
            Self::Still => 'O',
        }
    }

    /// Parses a direction marker; accepts both `V` and `v` for down.
    pub fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            '^' => Some(Self::Up),
            'V' | 'v' => Some(Self::Down),
            '>' => Some(Self::Right),
            '<' => Some(Self::Left),
            'O' => Some(Self::Still),
            _ => None,
        }
    }
}

impl fmt::Display for Dir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Right => "right",
            Self::Left => "left",
            Self::Still => "still",
        })
    }
}

/// Which layer a step occupies at its cell: `Under` means the strand is
/// currently passing beneath another strand there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Layer {
    Over,
    Under,
}

impl Layer {
    /// Numeric depth: 0 for `Over`, -1 for `Under`.
    pub fn depth(self) -> i32 {
        match self {
            Self::Over => 0,
            Self::Under => -1,
        }
    }
}

/// A detected strand start: where a traversal begins and in which direction.
///
/// `name` is empty unless the head sits on a digit cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Head {
    at: Point,
    dir: Dir,
    name: SmolStr,
}

impl Head {
    pub fn new(at: Point, dir: Dir, name: impl Into<SmolStr>) -> Self {
        Self { at, dir, name: name.into() }
    }

    pub fn at(&self) -> Point {
        self.at
    }

    pub fn dir(&self) -> Dir {
        self.dir
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// One visited cell of a lead: position, direction of travel when leaving
/// the cell, layer, and the lead name as of this step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    at: Point,
    dir: Dir,
    layer: Layer,
    name: SmolStr,
}

impl Step {
    pub fn new(at: Point, dir: Dir, layer: Layer, name: impl Into<SmolStr>) -> Self {
        Self { at, dir, layer, name: name.into() }
    }

    pub fn at(&self) -> Point {
        self.at
    }

    pub fn dir(&self) -> Dir {
        self.dir
    }

    pub fn layer(&self) -> Layer {
        self.layer
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// One traced strand: an ordered sequence of steps from a head to the
/// strand's end.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Lead {
    steps: Vec<Step>,
}

impl Lead {
    pub(crate) fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn first(&self) -> Option<&Step> {
        self.steps.first()
    }

    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The lead's effective name: renames apply from their step onward, so
    /// this is the final step's name (empty for an unnamed lead).
    pub fn name(&self) -> &str {
        self.steps.last().map(Step::name).unwrap_or("")
    }
}
