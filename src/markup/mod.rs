// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Thetis-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Thetis and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Parsing of service graph markup.
//!
//! Only the subset the viewer correlates on is modelled: `node`/`edge` groups, their ids, node
//! titles, and edge path segments. Everything else in the markup is skipped, not rejected.

pub mod svg;

pub use svg::{parse_svg_graph, SvgParseError};
