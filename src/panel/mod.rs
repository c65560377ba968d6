// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Thetis-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Thetis and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Host-facing entry points of the diagram module.
//!
//! Hosts construct the panel with the remote service injected, call [`DiagramPanel::get_diagram`],
//! render the returned markup, and hand it back through the post-render callback
//! ([`DiagramPanel::after_render`]); hover and selection events are forwarded afterwards.

use std::fmt;
use std::sync::Arc;

use crate::highlight::Highlighter;
use crate::markup::{parse_svg_graph, SvgParseError};
use crate::model::{DiagramKind, EntityId, GraphMarkup, NavTarget, NodeId, RenderedGraph};
use crate::nav::{self, LocateError};
use crate::render::project_svg;
use crate::service::{DiagramService, ServiceError};

/// The wired state of the most recent render.
///
/// Replaced wholesale by the next [`DiagramPanel::after_render`]; nothing in here survives a
/// re-render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramView {
    entity_id: EntityId,
    kind: DiagramKind,
    graph: RenderedGraph,
    highlighter: Highlighter,
}

impl DiagramView {
    pub fn entity_id(&self) -> &EntityId {
        &self.entity_id
    }

    pub fn kind(&self) -> DiagramKind {
        self.kind
    }

    pub fn graph(&self) -> &RenderedGraph {
        &self.graph
    }

    pub fn highlighter(&self) -> &Highlighter {
        &self.highlighter
    }
}

/// The diagram module as hosts consume it: provider, hover highlighter wiring, and navigation
/// mapper behind one object.
pub struct DiagramPanel {
    service: Arc<dyn DiagramService>,
    view: Option<DiagramView>,
}

impl DiagramPanel {
    pub fn new(service: Arc<dyn DiagramService>) -> Self {
        Self { service, view: None }
    }

    /// Provider entry point: fetches markup and forwards result or failure unchanged.
    ///
    /// A failure leaves the current view untouched.
    pub fn get_diagram(
        &self,
        entity_id: &EntityId,
        kind: DiagramKind,
    ) -> Result<GraphMarkup, ServiceError> {
        self.service.get_diagram(entity_id, kind)
    }

    /// Navigation entry point: where the source viewer should jump for `node_id`.
    pub fn mouse_over_info(&self, node_id: &NodeId) -> Result<NavTarget, LocateError> {
        nav::locate(self.service.as_ref(), node_id)
    }

    /// Post-render callback: parses the markup the host just rendered and wires hover behavior
    /// over it, replacing any previous view.
    ///
    /// On a parse failure the previous view stays in place.
    pub fn after_render(
        &mut self,
        entity_id: &EntityId,
        kind: DiagramKind,
        markup: &GraphMarkup,
    ) -> Result<(), SvgParseError> {
        let view = wire_view(entity_id, kind, markup)?;
        self.view = Some(view);
        Ok(())
    }

    /// Fetch and wire in one step; what the MCP facade's `diagram.show` does.
    pub fn show(
        &mut self,
        entity_id: &EntityId,
        kind: DiagramKind,
    ) -> Result<&DiagramView, ShowError> {
        let markup = self.get_diagram(entity_id, kind)?;
        let view = wire_view(entity_id, kind, &markup)?;
        Ok(self.view.insert(view))
    }

    pub fn hover_enter(&mut self, node_id: &NodeId) {
        if let Some(view) = self.view.as_mut() {
            view.highlighter.hover_enter(node_id);
        }
    }

    pub fn hover_leave(&mut self, node_id: &NodeId) {
        if let Some(view) = self.view.as_mut() {
            view.highlighter.hover_leave(node_id);
        }
    }

    pub fn view(&self) -> Option<&DiagramView> {
        self.view.as_ref()
    }

    /// Projects the current drawn styles back into markup for the host to display.
    pub fn styled_markup(&self) -> Option<String> {
        self.view
            .as_ref()
            .map(|view| project_svg(&view.graph, &view.highlighter))
    }
}

fn wire_view(
    entity_id: &EntityId,
    kind: DiagramKind,
    markup: &GraphMarkup,
) -> Result<DiagramView, SvgParseError> {
    let graph = parse_svg_graph(markup.as_str())?;
    let highlighter = Highlighter::new(&graph);
    Ok(DiagramView {
        entity_id: entity_id.clone(),
        kind,
        graph,
        highlighter,
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShowError {
    Service(ServiceError),
    Markup(SvgParseError),
}

impl fmt::Display for ShowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Service(err) => write!(f, "{err}"),
            Self::Markup(err) => write!(f, "malformed diagram markup: {err}"),
        }
    }
}

impl std::error::Error for ShowError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Service(err) => Some(err),
            Self::Markup(err) => Some(err),
        }
    }
}

impl From<ServiceError> for ShowError {
    fn from(value: ServiceError) -> Self {
        Self::Service(value)
    }
}

impl From<SvgParseError> for ShowError {
    fn from(value: SvgParseError) -> Self {
        Self::Markup(value)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{DiagramPanel, ShowError};
    use crate::model::{DiagramKind, EntityId, GraphMarkup, NodeId, Stroke};
    use crate::service::{DiagramService, FixtureService, ServiceError};

    struct FailingService;

    impl DiagramService for FailingService {
        fn get_diagram(
            &self,
            _entity_id: &EntityId,
            _kind: DiagramKind,
        ) -> Result<GraphMarkup, ServiceError> {
            Err(ServiceError::Unavailable {
                message: "gateway timeout".to_owned(),
            })
        }

        fn get_ast_node_info(
            &self,
            node_id: &NodeId,
        ) -> Result<crate::model::AstNodeInfo, ServiceError> {
            Err(ServiceError::UnknownNode {
                node_id: node_id.clone(),
            })
        }
    }

    fn entity(value: &str) -> EntityId {
        EntityId::new(value).expect("entity id")
    }

    fn nid(value: &str) -> NodeId {
        NodeId::new(value).expect("node id")
    }

    fn demo_panel() -> DiagramPanel {
        DiagramPanel::new(Arc::new(FixtureService::demo()))
    }

    #[test]
    fn get_diagram_forwards_markup_unchanged() {
        let panel = demo_panel();
        let markup = panel
            .get_diagram(&entity("c100"), DiagramKind::FunctionCall)
            .expect("markup");

        assert_eq!(markup.as_str(), crate::model::fixtures::DEMO_FUNCTION_CALL_MARKUP);
        assert!(panel.view().is_none());
    }

    #[test]
    fn provider_failure_leaves_the_view_untouched() {
        let mut panel = demo_panel();
        panel.show(&entity("c100"), DiagramKind::FunctionCall).expect("show");

        let failing = DiagramPanel::new(Arc::new(FailingService));
        let err = failing
            .get_diagram(&entity("c100"), DiagramKind::FunctionCall)
            .unwrap_err();
        assert_eq!(
            err,
            ServiceError::Unavailable {
                message: "gateway timeout".to_owned()
            }
        );

        // The successfully shown panel still has its wired view.
        assert!(panel.view().is_some());

        let mut broken = demo_panel();
        broken.show(&entity("c100"), DiagramKind::FunctionCall).expect("show");
        let err = broken.show(&entity("c100"), DiagramKind::DetailedClass).unwrap_err();
        assert!(matches!(err, ShowError::Service(_)));
        assert_eq!(broken.view().expect("view").kind(), DiagramKind::FunctionCall);
    }

    #[test]
    fn after_render_replaces_the_previous_view_wholesale() {
        let mut panel = demo_panel();
        panel.show(&entity("c100"), DiagramKind::FunctionCall).expect("show");
        panel.hover_enter(&nid("c100"));
        assert!(panel
            .view()
            .expect("view")
            .highlighter()
            .snapshot(&nid("c100"))
            .is_some());

        let markup = panel
            .get_diagram(&entity("c100"), DiagramKind::FunctionCall)
            .expect("markup");
        panel
            .after_render(&entity("c100"), DiagramKind::FunctionCall, &markup)
            .expect("after_render");

        // Snapshots never survive a re-render.
        assert!(panel
            .view()
            .expect("view")
            .highlighter()
            .snapshot(&nid("c100"))
            .is_none());
    }

    #[test]
    fn hover_events_flow_into_the_wired_highlighter() {
        let mut panel = demo_panel();
        panel.show(&entity("c100"), DiagramKind::FunctionCall).expect("show");

        panel.hover_enter(&nid("c100"));
        let styled = panel.styled_markup().expect("styled");
        assert!(styled.contains("stroke=\"red\""));

        panel.hover_leave(&nid("c100"));
        let styled = panel.styled_markup().expect("styled");
        assert!(!styled.contains("stroke=\"red\""));
    }

    #[test]
    fn hover_without_a_view_is_a_no_op() {
        let mut panel = demo_panel();
        panel.hover_enter(&nid("c100"));
        panel.hover_leave(&nid("c100"));
        assert!(panel.view().is_none());
        assert!(panel.styled_markup().is_none());
    }

    #[test]
    fn mouse_over_info_projects_the_demo_range() {
        let panel = demo_panel();
        let target = panel.mouse_over_info(&nid("c101")).expect("target");
        assert_eq!(target.selection, [5, 1, 24, 2]);
        assert_eq!(target.file_id.as_str(), "f2");
    }

    #[test]
    fn malformed_markup_keeps_the_previous_view() {
        let mut panel = demo_panel();
        panel.show(&entity("c100"), DiagramKind::FunctionCall).expect("show");

        let bad = GraphMarkup::new("<svg><g class=\"node\">no id</g></svg>");
        panel
            .after_render(&entity("c100"), DiagramKind::FunctionCall, &bad)
            .unwrap_err();

        assert_eq!(
            panel
                .view()
                .expect("view")
                .highlighter()
                .drawn_strokes(&crate::model::EdgeId::new("c100_c101").expect("edge id"))
                .expect("drawn"),
            &[Stroke::new("#666666", 1)]
        );
    }
}
