// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Thetis-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Thetis and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model for rendered diagrams.
//!
//! A rendered graph is parsed from service markup once per fetch; typed ids correlate nodes with
//! their incident edges and with AST records on the language-service side.

pub mod diagram;
pub(crate) mod fixtures;
pub mod graph;
pub mod ids;
pub mod source;
pub mod style;

pub use diagram::{DiagramKind, GraphMarkup, ParseDiagramKindError};
pub use graph::{GraphEdge, GraphNode, PathSegment, RenderedGraph};
pub use ids::{EdgeId, EntityId, FileId, Id, IdError, NodeId};
pub use source::{AstNodeInfo, FileRange, NavTarget, Position, Range};
pub use style::Stroke;
