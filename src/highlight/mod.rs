// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Thetis-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Thetis and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Hover-driven edge emphasis over a rendered graph.
//!
//! The highlighter is wired once per render. It owns the drawn stroke of every edge path
//! segment; rendering is a pure projection over that state (`crate::render`). Hover-enter
//! snapshots the pre-hover strokes of a node's incident edges (keyed by edge id) and applies the
//! emphasis stroke; hover-leave restores from the snapshot. Both handlers run synchronously to
//! completion.

use std::collections::BTreeMap;

use smallvec::SmallVec;

use crate::model::{EdgeId, NodeId, RenderedGraph, Stroke};

/// Separator between the source node id and the remainder of an edge id.
///
/// Mandatory for disambiguation: node `A` owns `A_x` but never `A1_y`.
pub const EDGE_ID_SEPARATOR: char = '_';

/// Pre-hover strokes for one node, keyed by edge id.
///
/// One stroke per edge, not per path segment: all segments of an edge are restored to the same
/// recorded value, even if they originally differed.
pub type StyleSnapshot = BTreeMap<EdgeId, Stroke>;

/// Per-render mapping from a node to the edges whose ids it owns.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EdgeIndex {
    incident: BTreeMap<NodeId, Vec<EdgeId>>,
}

impl EdgeIndex {
    /// Builds the index from the `<nodeId>_<suffix>` edge-id encoding, once per render.
    ///
    /// Every edge belongs to at most one node: the node with the longest `<id>_` prefix of the
    /// edge id. Edges owned by no node in the graph stay unindexed.
    pub fn build(graph: &RenderedGraph) -> Self {
        let mut incident: BTreeMap<NodeId, Vec<EdgeId>> = BTreeMap::new();

        for edge_id in graph.edges().keys() {
            let Some(node_id) = owning_node(graph, edge_id) else {
                continue;
            };
            incident.entry(node_id).or_default().push(edge_id.clone());
        }

        Self { incident }
    }

    /// The edges incident to `node_id`, in edge-id order; empty when none match.
    pub fn incident_edges(&self, node_id: &NodeId) -> &[EdgeId] {
        self.incident
            .get(node_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn incident(&self) -> &BTreeMap<NodeId, Vec<EdgeId>> {
        &self.incident
    }
}

fn owning_node(graph: &RenderedGraph, edge_id: &EdgeId) -> Option<NodeId> {
    let raw = edge_id.as_str();
    let mut best: Option<&NodeId> = None;

    for node_id in graph.nodes().keys() {
        let prefix = node_id.as_str();
        if raw.len() <= prefix.len()
            || raw.as_bytes()[prefix.len()] != EDGE_ID_SEPARATOR as u8
            || !raw.starts_with(prefix)
        {
            continue;
        }
        match best {
            Some(current) if current.as_str().len() >= prefix.len() => {}
            _ => best = Some(node_id),
        }
    }

    best.cloned()
}

/// Hover behavior wired over one rendered graph.
///
/// Created by the post-render callback and replaced wholesale on the next render; snapshots
/// never survive a re-render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlighter {
    index: EdgeIndex,
    drawn: BTreeMap<EdgeId, SmallVec<[Stroke; 2]>>,
    snapshots: BTreeMap<NodeId, StyleSnapshot>,
}

impl Highlighter {
    /// Wires hover behavior for a freshly rendered graph: builds the edge index and resolves
    /// every segment's initial drawn stroke (absent attributes default to black/1).
    pub fn new(graph: &RenderedGraph) -> Self {
        let index = EdgeIndex::build(graph);

        let mut drawn = BTreeMap::new();
        for (edge_id, edge) in graph.edges() {
            let strokes = edge
                .segments()
                .iter()
                .map(|segment| Stroke::resolve(segment.stroke(), segment.stroke_width()))
                .collect::<SmallVec<[Stroke; 2]>>();
            drawn.insert(edge_id.clone(), strokes);
        }

        Self {
            index,
            drawn,
            snapshots: BTreeMap::new(),
        }
    }

    pub fn index(&self) -> &EdgeIndex {
        &self.index
    }

    /// The current drawn strokes of an edge, one per path segment.
    pub fn drawn_strokes(&self, edge_id: &EdgeId) -> Option<&[Stroke]> {
        self.drawn.get(edge_id).map(|strokes| strokes.as_slice())
    }

    /// The snapshot captured at the node's most recent hover-enter, if any.
    pub fn snapshot(&self, node_id: &NodeId) -> Option<&StyleSnapshot> {
        self.snapshots.get(node_id)
    }

    /// Hover-enter: captures the pre-hover stroke of every incident edge, then applies the
    /// emphasis stroke to every segment of those edges.
    ///
    /// The capture is keyed by edge id; with multiple segments, later reads overwrite earlier
    /// ones, so an edge's recorded stroke is its last segment's. A repeated enter without an
    /// intervening leave overwrites the previous snapshot — last enter wins. Zero incident
    /// edges: no-op.
    pub fn hover_enter(&mut self, node_id: &NodeId) {
        let mut snapshot = StyleSnapshot::new();

        for edge_id in self.index.incident_edges(node_id) {
            let Some(strokes) = self.drawn.get_mut(edge_id) else {
                continue;
            };
            for stroke in strokes.iter() {
                snapshot.insert(edge_id.clone(), stroke.clone());
            }
            for stroke in strokes.iter_mut() {
                *stroke = Stroke::emphasis();
            }
        }

        self.snapshots.insert(node_id.clone(), snapshot);
    }

    /// Hover-leave: restores every segment of every incident edge to the stroke recorded in the
    /// node's snapshot under that edge's id.
    ///
    /// A leave without a prior enter, or an edge missing from the snapshot, is a no-op.
    pub fn hover_leave(&mut self, node_id: &NodeId) {
        let Some(snapshot) = self.snapshots.get(node_id) else {
            return;
        };

        for edge_id in self.index.incident_edges(node_id) {
            let Some(recorded) = snapshot.get(edge_id) else {
                continue;
            };
            let Some(strokes) = self.drawn.get_mut(edge_id) else {
                continue;
            };
            for stroke in strokes.iter_mut() {
                *stroke = recorded.clone();
            }
        }
    }
}
