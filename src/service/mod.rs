// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Thetis-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Thetis and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The remote diagram-service seam.
//!
//! Transport and encoding are the collaborator's concern. Hosts construct the panel with an
//! implementation injected; [`FixtureService`] (in-memory) and [`crate::store::GraphFolder`]
//! (file-backed) are the in-tree ones.

use std::fmt;

use crate::model::{AstNodeInfo, DiagramKind, EntityId, GraphMarkup, NodeId};

pub mod fixture;

pub use fixture::FixtureService;

/// A diagram-generation and AST-lookup service, as seen by the viewer.
///
/// Calls are completion points: the caller blocks until the collaborator responds. Failures are
/// surfaced to callers unchanged; the viewer never retries or caches.
pub trait DiagramService: Send + Sync {
    /// Requests diagram markup for an entity.
    fn get_diagram(
        &self,
        entity_id: &EntityId,
        kind: DiagramKind,
    ) -> Result<GraphMarkup, ServiceError>;

    /// Fetches the AST record backing a rendered node.
    fn get_ast_node_info(&self, node_id: &NodeId) -> Result<AstNodeInfo, ServiceError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The service could not be reached or failed internally.
    Unavailable { message: String },
    /// The service knows no diagram for this entity/kind pair.
    UnknownEntity { entity_id: EntityId, kind: DiagramKind },
    /// The service knows no AST record for this node.
    UnknownNode { node_id: NodeId },
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable { message } => write!(f, "diagram service unavailable: {message}"),
            Self::UnknownEntity { entity_id, kind } => {
                write!(f, "no {kind} diagram for entity {entity_id}")
            }
            Self::UnknownNode { node_id } => write!(f, "no AST record for node {node_id}"),
        }
    }
}

impl std::error::Error for ServiceError {}
