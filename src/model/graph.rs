// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Thetis-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Thetis and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use smallvec::SmallVec;
use smol_str::SmolStr;

use super::ids::{EdgeId, NodeId};

/// One drawable stroke segment of an edge connector.
///
/// An edge may render as several disjoint segments (curved or multi-part connectors); each
/// segment carries its own geometry and optional presentation attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSegment {
    data: String,
    stroke: Option<SmolStr>,
    stroke_width: Option<u32>,
}

impl PathSegment {
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            stroke: None,
            stroke_width: None,
        }
    }

    pub fn new_with(
        data: impl Into<String>,
        stroke: Option<SmolStr>,
        stroke_width: Option<u32>,
    ) -> Self {
        Self {
            data: data.into(),
            stroke,
            stroke_width,
        }
    }

    /// The segment's geometry (`d` attribute), kept verbatim.
    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn stroke(&self) -> Option<&str> {
        self.stroke.as_deref()
    }

    pub fn stroke_width(&self) -> Option<u32> {
        self.stroke_width
    }
}

/// A rendered graph vertex representing one source entity.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GraphNode {
    label: Option<String>,
}

impl GraphNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_with(label: Option<String>) -> Self {
        Self { label }
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn set_label<T: Into<String>>(&mut self, label: Option<T>) {
        self.label = label.map(Into::into);
    }
}

/// A rendered graph connector; owns the path segments it is drawn with.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GraphEdge {
    segments: SmallVec<[PathSegment; 2]>,
}

impl GraphEdge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_segment(&mut self, segment: PathSegment) {
        self.segments.push(segment);
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }
}

/// A diagram parsed from service markup.
///
/// Created per fetch and replaced wholesale by the next one; nothing here survives a re-render.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderedGraph {
    nodes: BTreeMap<NodeId, GraphNode>,
    edges: BTreeMap<EdgeId, GraphEdge>,
}

impl RenderedGraph {
    pub fn nodes(&self) -> &BTreeMap<NodeId, GraphNode> {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> &mut BTreeMap<NodeId, GraphNode> {
        &mut self.nodes
    }

    pub fn edges(&self) -> &BTreeMap<EdgeId, GraphEdge> {
        &self.edges
    }

    pub fn edges_mut(&mut self) -> &mut BTreeMap<EdgeId, GraphEdge> {
        &mut self.edges
    }

    pub fn node(&self, node_id: &NodeId) -> Option<&GraphNode> {
        self.nodes.get(node_id)
    }

    pub fn edge(&self, edge_id: &EdgeId) -> Option<&GraphEdge> {
        self.edges.get(edge_id)
    }
}

#[cfg(test)]
mod tests {
    use super::{GraphEdge, GraphNode, PathSegment, RenderedGraph};
    use crate::model::ids::{EdgeId, NodeId};

    #[test]
    fn graph_node_label_can_be_set_and_cleared() {
        let mut node = GraphNode::new();
        assert_eq!(node.label(), None);

        node.set_label(Some("main"));
        assert_eq!(node.label(), Some("main"));

        node.set_label::<&str>(None);
        assert_eq!(node.label(), None);
    }

    #[test]
    fn graph_edge_collects_segments_in_order() {
        let mut edge = GraphEdge::new();
        edge.push_segment(PathSegment::new("M0,0 L1,1"));
        edge.push_segment(PathSegment::new_with("M1,1 L2,2", Some("blue".into()), Some(3)));

        let segments = edge.segments();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].data(), "M0,0 L1,1");
        assert_eq!(segments[0].stroke(), None);
        assert_eq!(segments[0].stroke_width(), None);
        assert_eq!(segments[1].stroke(), Some("blue"));
        assert_eq!(segments[1].stroke_width(), Some(3));
    }

    #[test]
    fn rendered_graph_looks_up_nodes_and_edges_by_id() {
        let node_id = NodeId::new("c42").expect("node id");
        let edge_id = EdgeId::new("c42_c43").expect("edge id");

        let mut graph = RenderedGraph::default();
        graph.nodes_mut().insert(node_id.clone(), GraphNode::new());
        graph.edges_mut().insert(edge_id.clone(), GraphEdge::new());

        assert!(graph.node(&node_id).is_some());
        assert!(graph.edge(&edge_id).is_some());
        assert!(graph.node(&NodeId::new("c99").expect("node id")).is_none());
    }
}
