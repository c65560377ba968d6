// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Thetis-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Thetis and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use crate::model::fixtures;
use crate::model::{AstNodeInfo, DiagramKind, EntityId, GraphMarkup, NodeId};

use super::{DiagramService, ServiceError};

/// An in-memory diagram service, used by `--demo` mode and tests.
#[derive(Debug, Clone, Default)]
pub struct FixtureService {
    diagrams: BTreeMap<(EntityId, DiagramKind), GraphMarkup>,
    node_infos: BTreeMap<NodeId, AstNodeInfo>,
}

impl FixtureService {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in demo dataset: a small function-call graph around `main`.
    pub fn demo() -> Self {
        let mut service = Self::new();

        let entity_id = EntityId::new(fixtures::DEMO_ENTITY_ID).expect("demo entity id");
        service.insert_diagram(
            entity_id,
            DiagramKind::FunctionCall,
            GraphMarkup::new(fixtures::DEMO_FUNCTION_CALL_MARKUP),
        );

        for (node_id, info) in fixtures::demo_node_infos() {
            service.insert_node_info(NodeId::new(node_id).expect("demo node id"), info);
        }

        service
    }

    pub fn insert_diagram(&mut self, entity_id: EntityId, kind: DiagramKind, markup: GraphMarkup) {
        self.diagrams.insert((entity_id, kind), markup);
    }

    pub fn insert_node_info(&mut self, node_id: NodeId, info: AstNodeInfo) {
        self.node_infos.insert(node_id, info);
    }
}

impl DiagramService for FixtureService {
    fn get_diagram(
        &self,
        entity_id: &EntityId,
        kind: DiagramKind,
    ) -> Result<GraphMarkup, ServiceError> {
        self.diagrams
            .get(&(entity_id.clone(), kind))
            .cloned()
            .ok_or_else(|| ServiceError::UnknownEntity {
                entity_id: entity_id.clone(),
                kind,
            })
    }

    fn get_ast_node_info(&self, node_id: &NodeId) -> Result<AstNodeInfo, ServiceError> {
        self.node_infos
            .get(node_id)
            .cloned()
            .ok_or_else(|| ServiceError::UnknownNode {
                node_id: node_id.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::FixtureService;
    use crate::model::{DiagramKind, EntityId, NodeId};
    use crate::service::{DiagramService, ServiceError};

    #[test]
    fn demo_serves_the_function_call_diagram() {
        let service = FixtureService::demo();
        let entity_id = EntityId::new("c100").expect("entity id");

        let markup = service
            .get_diagram(&entity_id, DiagramKind::FunctionCall)
            .expect("markup");
        assert!(markup.as_str().contains("class=\"edge\""));

        let err = service
            .get_diagram(&entity_id, DiagramKind::DetailedClass)
            .unwrap_err();
        assert_eq!(
            err,
            ServiceError::UnknownEntity {
                entity_id,
                kind: DiagramKind::DetailedClass
            }
        );
    }

    #[test]
    fn demo_serves_ast_records_per_node() {
        let service = FixtureService::demo();

        let info = service
            .get_ast_node_info(&NodeId::new("c100").expect("node id"))
            .expect("info");
        assert_eq!(info.ast_type.as_deref(), Some("Function"));
        assert!(info.range.is_some());

        let node_id = NodeId::new("c999").expect("node id");
        let err = service.get_ast_node_info(&node_id).unwrap_err();
        assert_eq!(err, ServiceError::UnknownNode { node_id });
    }
}
