// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Knotwork-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Knotwork and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A parsed diagram is a sparse [`StrandGrid`]; tracing it yields a [`Knot`]:
//! ordered [`Lead`]s plus the [`CrossingRegistry`].

pub mod grid;
pub mod knot;
pub mod strand;

pub use grid::{LabelId, Point, StrandGrid, LABEL_SYMBOL};
pub use knot::{CrossingRegistry, Knot, Visit};
pub use strand::{Dir, Head, Layer, Lead, Step};
