// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Thetis-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Thetis and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Thetis — diagram viewer core for source-code browsers.
//!
//! Fetches dependency/AST diagrams for code entities, correlates nodes with their incident
//! edges, drives hover-driven edge emphasis, and maps node selections back to source ranges.
//! Hosts construct a [`panel::DiagramPanel`] with a [`service::DiagramService`] injected, or
//! reach it through the [`mcp::ThetisMcp`] tool server.

pub mod highlight;
pub mod markup;
pub mod mcp;
pub mod model;
pub mod nav;
pub mod panel;
pub mod render;
pub mod service;
pub mod store;
