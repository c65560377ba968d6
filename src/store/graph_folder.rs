// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Thetis-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Thetis and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::model::{AstNodeInfo, DiagramKind, EntityId, GraphMarkup, NodeId};
use crate::service::{DiagramService, ServiceError};

/// Filename of the per-folder AST record map (node id → record, wire shape).
pub const AST_NODES_FILENAME: &str = "astnodes.json";

/// A folder of pre-generated diagrams: `<dir>/<entity_id>/<kind label>.svg` markup files plus
/// one [`AST_NODES_FILENAME`] at the root.
///
/// Every load goes to disk; the folder deliberately mirrors the provider's no-caching contract,
/// so edits to the files are visible on the next call.
#[derive(Debug, Clone)]
pub struct GraphFolder {
    dir: PathBuf,
}

impl GraphFolder {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn diagram_path(&self, entity_id: &EntityId, kind: DiagramKind) -> PathBuf {
        self.dir
            .join(entity_id.as_str())
            .join(format!("{}.svg", kind.label()))
    }

    pub fn ast_nodes_path(&self) -> PathBuf {
        self.dir.join(AST_NODES_FILENAME)
    }

    pub fn load_markup(
        &self,
        entity_id: &EntityId,
        kind: DiagramKind,
    ) -> Result<GraphMarkup, StoreError> {
        let path = self.diagram_path(entity_id, kind);
        match fs::read_to_string(&path) {
            Ok(markup) => Ok(GraphMarkup::new(markup)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Err(StoreError::MissingDiagram {
                entity_id: entity_id.clone(),
                kind,
            }),
            Err(err) => Err(StoreError::Io { path, source: err }),
        }
    }

    pub fn load_node_infos(&self) -> Result<BTreeMap<NodeId, AstNodeInfo>, StoreError> {
        let path = self.ast_nodes_path();
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::MissingAstNodes { path })
            }
            Err(err) => return Err(StoreError::Io { path, source: err }),
        };

        serde_json::from_str(&raw).map_err(|err| StoreError::Json { path, source: err })
    }

    pub fn save_markup(
        &self,
        entity_id: &EntityId,
        kind: DiagramKind,
        markup: &GraphMarkup,
    ) -> Result<(), StoreError> {
        let path = self.diagram_path(entity_id, kind);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|err| StoreError::Io {
                path: parent.to_path_buf(),
                source: err,
            })?;
        }
        fs::write(&path, markup.as_str()).map_err(|err| StoreError::Io { path, source: err })
    }

    pub fn save_node_infos(
        &self,
        infos: &BTreeMap<NodeId, AstNodeInfo>,
    ) -> Result<(), StoreError> {
        let path = self.ast_nodes_path();
        fs::create_dir_all(&self.dir).map_err(|err| StoreError::Io {
            path: self.dir.clone(),
            source: err,
        })?;
        let raw = serde_json::to_string_pretty(infos).map_err(|err| StoreError::Json {
            path: path.clone(),
            source: err,
        })?;
        fs::write(&path, raw).map_err(|err| StoreError::Io { path, source: err })
    }
}

impl DiagramService for GraphFolder {
    fn get_diagram(
        &self,
        entity_id: &EntityId,
        kind: DiagramKind,
    ) -> Result<GraphMarkup, ServiceError> {
        self.load_markup(entity_id, kind).map_err(|err| match err {
            StoreError::MissingDiagram { entity_id, kind } => {
                ServiceError::UnknownEntity { entity_id, kind }
            }
            other => ServiceError::Unavailable {
                message: other.to_string(),
            },
        })
    }

    fn get_ast_node_info(&self, node_id: &NodeId) -> Result<AstNodeInfo, ServiceError> {
        let infos = self.load_node_infos().map_err(|err| ServiceError::Unavailable {
            message: err.to_string(),
        })?;

        infos
            .get(node_id)
            .cloned()
            .ok_or_else(|| ServiceError::UnknownNode {
                node_id: node_id.clone(),
            })
    }
}

#[derive(Debug)]
pub enum StoreError {
    MissingDiagram {
        entity_id: EntityId,
        kind: DiagramKind,
    },
    MissingAstNodes {
        path: PathBuf,
    },
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDiagram { entity_id, kind } => {
                write!(f, "no {kind} markup stored for entity {entity_id}")
            }
            Self::MissingAstNodes { path } => {
                write!(f, "missing AST record file {}", path.display())
            }
            Self::Io { path, source } => write!(f, "io error on {}: {source}", path.display()),
            Self::Json { path, source } => {
                write!(f, "invalid JSON in {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::MissingDiagram { .. } | Self::MissingAstNodes { .. } => None,
        }
    }
}
