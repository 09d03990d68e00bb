// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Knotwork-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Knotwork and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Knotwork: ASCII knotwork diagram parser and strand tracer.
//!
//! `.knt` text goes in; an ordered list of strand traversals (leads) with a
//! crossing registry comes out. See [`model::Knot::parse`] for the one-call
//! entry point, or [`format::parse_knt`] + [`trace::trace_leads`] for the
//! two stages separately.

pub mod format;
pub mod layout;
pub mod model;
pub mod query;
pub mod render;
pub mod trace;
