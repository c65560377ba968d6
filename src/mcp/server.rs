// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Thetis-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Thetis and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::cmp::Ordering;
use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::{Json, Parameters};
use rmcp::model::{ServerCapabilities, ServerInfo};
use rmcp::{tool, tool_handler, tool_router, ErrorData, ServerHandler, ServiceExt};
use tokio::sync::Mutex;

use crate::model::{DiagramKind, EntityId, NodeId};
use crate::nav::LocateError;
use crate::panel::{DiagramPanel, DiagramView, ShowError};
use crate::render::project_svg;
use crate::service::ServiceError;

use super::types::*;

const FIND_DEFAULT_LIMIT: usize = 20;
const FIND_MAX_LIMIT: usize = 200;
const FUZZY_MIN_RATIO: f64 = 55.0;

/// The diagram panel exposed as an MCP tool server.
///
/// One async mutex serializes access to the panel, which preserves the one-event-at-a-time
/// interaction model of the hover handlers.
#[derive(Clone)]
pub struct ThetisMcp {
    panel: Arc<Mutex<DiagramPanel>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl ThetisMcp {
    pub fn new(panel: DiagramPanel) -> Self {
        Self {
            panel: Arc::new(Mutex::new(panel)),
            tool_router: Self::tool_router(),
        }
    }

    pub async fn serve_stdio(self) -> Result<(), rmcp::RmcpError> {
        let service = self.serve((tokio::io::stdin(), tokio::io::stdout())).await?;
        service.waiting().await?;
        Ok(())
    }

    /// Fetch diagram markup for an entity; returned exactly as the diagram service produced it.
    /// Use `diagram.show` instead when you also want hover wiring.
    #[tool(name = "diagram.get")]
    async fn diagram_get(
        &self,
        params: Parameters<DiagramGetParams>,
    ) -> Result<Json<DiagramGetResponse>, ErrorData> {
        let DiagramGetParams { entity_id, kind } = params.0;
        let entity_id = parse_entity_id(&entity_id)?;
        let kind = parse_kind(&kind)?;

        let panel = self.panel.lock().await;
        let markup = panel.get_diagram(&entity_id, kind).map_err(service_error)?;

        Ok(Json(DiagramGetResponse {
            markup: markup.into_string(),
        }))
    }

    /// Fetch a diagram and wire hover behavior over it; returns the projected interactive layer
    /// and the node inventory. Subsequent `node.*` tools operate on this diagram.
    #[tool(name = "diagram.show")]
    async fn diagram_show(
        &self,
        params: Parameters<DiagramShowParams>,
    ) -> Result<Json<DiagramShowResponse>, ErrorData> {
        let DiagramShowParams { entity_id, kind } = params.0;
        let entity_id = parse_entity_id(&entity_id)?;
        let kind = parse_kind(&kind)?;

        let mut panel = self.panel.lock().await;
        let view = panel.show(&entity_id, kind).map_err(show_error)?;

        let nodes = view
            .graph()
            .nodes()
            .iter()
            .map(|(node_id, node)| NodeSummary {
                node_id: node_id.as_str().to_owned(),
                label: node.label().map(ToOwned::to_owned),
                incident_edges: view.highlighter().index().incident_edges(node_id).len() as u64,
            })
            .collect();

        Ok(Json(DiagramShowResponse {
            entity_id: entity_id.into_string(),
            kind: kind.label().to_owned(),
            markup: project_svg(view.graph(), view.highlighter()),
            nodes,
            edges: view.graph().edges().len() as u64,
        }))
    }

    /// Hover-enter on a node: snapshots and emphasizes its incident edges. Returns the edges
    /// with their new strokes; an empty list means the node has no incident edges.
    #[tool(name = "node.hover_enter")]
    async fn node_hover_enter(
        &self,
        params: Parameters<NodeHoverParams>,
    ) -> Result<Json<NodeHoverResponse>, ErrorData> {
        let node_id = parse_node_id(&params.0.node_id)?;

        let mut panel = self.panel.lock().await;
        if panel.view().is_none() {
            return Err(no_shown_diagram());
        }
        panel.hover_enter(&node_id);

        let view = panel.view().ok_or_else(no_shown_diagram)?;
        Ok(Json(NodeHoverResponse {
            edges: incident_styles(view, &node_id),
            node_id: node_id.into_string(),
        }))
    }

    /// Hover-leave on a node: restores its incident edges to the strokes recorded at the last
    /// hover-enter.
    #[tool(name = "node.hover_leave")]
    async fn node_hover_leave(
        &self,
        params: Parameters<NodeHoverParams>,
    ) -> Result<Json<NodeHoverResponse>, ErrorData> {
        let node_id = parse_node_id(&params.0.node_id)?;

        let mut panel = self.panel.lock().await;
        if panel.view().is_none() {
            return Err(no_shown_diagram());
        }
        panel.hover_leave(&node_id);

        let view = panel.view().ok_or_else(no_shown_diagram)?;
        Ok(Json(NodeHoverResponse {
            edges: incident_styles(view, &node_id),
            node_id: node_id.into_string(),
        }))
    }

    /// Where the source viewer should jump for a node: file id plus
    /// `[start_line, start_column, end_line, end_column]`.
    #[tool(name = "node.locate")]
    async fn node_locate(
        &self,
        params: Parameters<NodeLocateParams>,
    ) -> Result<Json<NodeLocateResponse>, ErrorData> {
        let node_id = parse_node_id(&params.0.node_id)?;

        let panel = self.panel.lock().await;
        let target = panel.mouse_over_info(&node_id).map_err(locate_error)?;

        Ok(Json(NodeLocateResponse {
            file_id: target.file_id.into_string(),
            selection: target.selection,
        }))
    }

    /// Search the shown diagram's nodes by id or label (mode: substring|regex|fuzzy).
    #[tool(name = "node.find")]
    async fn node_find(
        &self,
        params: Parameters<NodeFindParams>,
    ) -> Result<Json<NodeFindResponse>, ErrorData> {
        let NodeFindParams { query, mode, limit } = params.0;
        let mode = parse_find_mode(mode.as_deref(), &query)?;
        let limit = limit
            .map(|limit| limit as usize)
            .unwrap_or(FIND_DEFAULT_LIMIT)
            .min(FIND_MAX_LIMIT);

        let panel = self.panel.lock().await;
        let view = panel.view().ok_or_else(no_shown_diagram)?;

        let mut matches = Vec::new();
        for (node_id, node) in view.graph().nodes() {
            let Some(score) = mode.score(node_id.as_str(), node.label()) else {
                continue;
            };
            matches.push(NodeMatch {
                node_id: node_id.as_str().to_owned(),
                label: node.label().map(ToOwned::to_owned),
                score,
            });
        }

        // Fuzzy matches sort best-first; the other modes keep node-id order.
        matches.sort_by(|a, b| match (b.score, a.score) {
            (Some(lhs), Some(rhs)) => lhs.partial_cmp(&rhs).unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        });
        matches.truncate(limit);

        Ok(Json(NodeFindResponse { matches }))
    }
}

enum FindMode {
    Substring(String),
    Regex(regex::Regex),
    Fuzzy(String),
}

impl FindMode {
    /// `Some(score)` when the node matches; the score itself is only present in fuzzy mode.
    fn score(&self, node_id: &str, label: Option<&str>) -> Option<Option<f64>> {
        match self {
            Self::Substring(needle) => {
                let hit = node_id.to_lowercase().contains(needle)
                    || label.is_some_and(|label| label.to_lowercase().contains(needle));
                hit.then_some(None)
            }
            Self::Regex(pattern) => {
                let hit = pattern.is_match(node_id)
                    || label.is_some_and(|label| pattern.is_match(label));
                hit.then_some(None)
            }
            Self::Fuzzy(needle) => {
                let id_ratio = rapidfuzz::fuzz::ratio(needle.chars(), node_id.chars());
                let label_ratio = label
                    .map(|label| rapidfuzz::fuzz::ratio(needle.chars(), label.chars()))
                    .unwrap_or(0.0);
                let best = id_ratio.max(label_ratio);
                (best >= FUZZY_MIN_RATIO).then_some(Some(best))
            }
        }
    }
}

fn parse_find_mode(mode: Option<&str>, query: &str) -> Result<FindMode, ErrorData> {
    match mode.unwrap_or("substring") {
        "substring" => Ok(FindMode::Substring(query.to_lowercase())),
        "regex" => {
            let pattern = regex::Regex::new(query)
                .map_err(|err| ErrorData::invalid_params(format!("invalid regex: {err}"), None))?;
            Ok(FindMode::Regex(pattern))
        }
        "fuzzy" => Ok(FindMode::Fuzzy(query.to_owned())),
        _ => Err(ErrorData::invalid_params(
            "invalid mode (expected substring|regex|fuzzy)",
            None,
        )),
    }
}

fn incident_styles(view: &DiagramView, node_id: &NodeId) -> Vec<EdgeStyle> {
    view.highlighter()
        .index()
        .incident_edges(node_id)
        .iter()
        .map(|edge_id| EdgeStyle {
            edge_id: edge_id.as_str().to_owned(),
            strokes: view
                .highlighter()
                .drawn_strokes(edge_id)
                .unwrap_or(&[])
                .iter()
                .map(|stroke| StrokeRecord {
                    color: stroke.color().to_owned(),
                    width: stroke.width(),
                })
                .collect(),
        })
        .collect()
}

fn parse_entity_id(raw: &str) -> Result<EntityId, ErrorData> {
    EntityId::new(raw)
        .map_err(|err| ErrorData::invalid_params(format!("invalid entity_id '{raw}': {err}"), None))
}

fn parse_node_id(raw: &str) -> Result<NodeId, ErrorData> {
    NodeId::new(raw)
        .map_err(|err| ErrorData::invalid_params(format!("invalid node_id '{raw}': {err}"), None))
}

fn parse_kind(raw: &str) -> Result<DiagramKind, ErrorData> {
    raw.parse::<DiagramKind>()
        .map_err(|err| ErrorData::invalid_params(err.to_string(), None))
}

// Service failures keep their message verbatim: the panel propagates them unchanged and the
// host is responsible for user-visible reporting.
fn service_error(err: ServiceError) -> ErrorData {
    match &err {
        ServiceError::UnknownEntity { .. } | ServiceError::UnknownNode { .. } => {
            ErrorData::invalid_params(err.to_string(), None)
        }
        ServiceError::Unavailable { .. } => ErrorData::internal_error(err.to_string(), None),
    }
}

fn show_error(err: ShowError) -> ErrorData {
    match err {
        ShowError::Service(err) => service_error(err),
        ShowError::Markup(err) => {
            ErrorData::internal_error(format!("malformed diagram markup: {err}"), None)
        }
    }
}

fn locate_error(err: LocateError) -> ErrorData {
    match &err {
        LocateError::Service(inner) => service_error(inner.clone()),
        LocateError::MissingRange { .. } => ErrorData::invalid_params(err.to_string(), None),
    }
}

fn no_shown_diagram() -> ErrorData {
    ErrorData::invalid_params("no diagram is currently shown; call diagram.show first", None)
}

#[tool_handler]
impl ServerHandler for ThetisMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Thetis diagram viewer (tools: diagram.get, diagram.show, node.hover_enter, node.hover_leave, node.locate, node.find). Start with diagram.show, then drive hover/selection through the node.* tools."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
