// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Thetis-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Thetis and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Maps a selected diagram node back to its originating source range.

use std::fmt;

use crate::model::{NavTarget, NodeId};
use crate::service::{DiagramService, ServiceError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocateError {
    Service(ServiceError),
    /// The service knows the node but has no source range for it.
    MissingRange { node_id: NodeId },
}

impl fmt::Display for LocateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Service(err) => write!(f, "{err}"),
            Self::MissingRange { node_id } => {
                write!(f, "no source range for node {node_id}")
            }
        }
    }
}

impl std::error::Error for LocateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Service(err) => Some(err),
            Self::MissingRange { .. } => None,
        }
    }
}

impl From<ServiceError> for LocateError {
    fn from(value: ServiceError) -> Self {
        Self::Service(value)
    }
}

/// Fetches the AST record for `node_id` and projects its range into a navigation target.
///
/// No local fallback: a failed lookup or an absent range is the caller's problem to report.
pub fn locate(service: &dyn DiagramService, node_id: &NodeId) -> Result<NavTarget, LocateError> {
    let info = service.get_ast_node_info(node_id)?;
    let Some(file_range) = info.range else {
        return Err(LocateError::MissingRange {
            node_id: node_id.clone(),
        });
    };

    let range = file_range.range;
    Ok(NavTarget {
        file_id: file_range.file,
        selection: [
            range.startpos.line,
            range.startpos.column,
            range.endpos.line,
            range.endpos.column,
        ],
    })
}
