// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Knotwork-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Knotwork and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Text rendering.
//!
//! Renders the parsed grid and traced leads back to ASCII, and produces the
//! localized excerpt that fault errors carry.

mod map;
mod window;

pub use map::{render_grid, render_lead_directed, render_leads_directed};
pub(crate) use window::fault_window;
