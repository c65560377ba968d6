// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Thetis-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Thetis and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Pure projection of a rendered graph and its drawn styles back into markup.
//!
//! Projection never mutates anything: what an edge looks like is decided by the highlighter's
//! drawn state, and this module only writes it out.

use std::fmt::Write as _;

use crate::highlight::Highlighter;
use crate::model::{RenderedGraph, Stroke};

/// Re-emits the interactive layer of the graph — node groups and edge paths — with the
/// highlighter's current drawn strokes substituted into every path segment.
pub fn project_svg(graph: &RenderedGraph, highlighter: &Highlighter) -> String {
    let mut out = String::new();
    let mut width_buf = itoa::Buffer::new();

    out.push_str("<svg xmlns=\"http://www.w3.org/2000/svg\">\n");

    for (node_id, node) in graph.nodes() {
        let _ = write!(out, "<g class=\"node\" id=\"{}\">", escape(node_id.as_str()));
        if let Some(label) = node.label() {
            let _ = write!(out, "<title>{}</title>", escape(label));
        }
        out.push_str("</g>\n");
    }

    for (edge_id, edge) in graph.edges() {
        let _ = write!(out, "<g class=\"edge\" id=\"{}\">", escape(edge_id.as_str()));
        let drawn = highlighter.drawn_strokes(edge_id).unwrap_or(&[]);
        for (idx, segment) in edge.segments().iter().enumerate() {
            let fallback;
            let stroke = match drawn.get(idx) {
                Some(stroke) => stroke,
                None => {
                    fallback = Stroke::resolve(segment.stroke(), segment.stroke_width());
                    &fallback
                }
            };
            let _ = write!(
                out,
                "<path d=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
                escape(segment.data()),
                escape(stroke.color()),
                width_buf.format(stroke.width()),
            );
        }
        out.push_str("</g>\n");
    }

    out.push_str("</svg>\n");
    out
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
