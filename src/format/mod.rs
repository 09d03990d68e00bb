// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Knotwork-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Knotwork and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Diagram format parsing.
//!
//! `.knt` is a plain-text format: one character per grid cell, bracketed
//! label spans, whitespace as background.

pub mod knt;

pub use knt::parse_knt;
