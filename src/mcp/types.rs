// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Thetis-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Thetis and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct StrokeRecord {
    pub color: String,
    pub width: u32,
}

/// Current styling of one edge, one stroke per path segment.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct EdgeStyle {
    pub edge_id: String,
    pub strokes: Vec<StrokeRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct NodeSummary {
    pub node_id: String,
    pub label: Option<String>,
    pub incident_edges: u64,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DiagramGetParams {
    pub entity_id: String,
    /// Diagram kind label, e.g. `function-call`.
    pub kind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DiagramGetResponse {
    /// The service markup, exactly as produced.
    pub markup: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DiagramShowParams {
    pub entity_id: String,
    pub kind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DiagramShowResponse {
    pub entity_id: String,
    pub kind: String,
    /// Projection of the interactive layer with current drawn styles.
    pub markup: String,
    pub nodes: Vec<NodeSummary>,
    pub edges: u64,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct NodeHoverParams {
    pub node_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct NodeHoverResponse {
    pub node_id: String,
    /// The incident edges after the event, with their current strokes.
    pub edges: Vec<EdgeStyle>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct NodeLocateParams {
    pub node_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct NodeLocateResponse {
    pub file_id: String,
    /// `[start_line, start_column, end_line, end_column]`.
    pub selection: [u32; 4],
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct NodeFindParams {
    pub query: String,
    /// `substring` (default), `regex`, or `fuzzy`.
    pub mode: Option<String>,
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct NodeMatch {
    pub node_id: String,
    pub label: Option<String>,
    /// Similarity ratio in fuzzy mode; absent otherwise.
    pub score: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct NodeFindResponse {
    pub matches: Vec<NodeMatch>,
}
