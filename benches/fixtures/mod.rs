// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Thetis-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Thetis and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use std::fmt::Write as _;

use thetis::model::RenderedGraph;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Small,
    MediumDense,
    LargeSparse,
}

impl Case {
    pub fn id(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::MediumDense => "medium_dense",
            Self::LargeSparse => "large_sparse",
        }
    }

    fn shape(self) -> (usize, usize) {
        // (node count, outgoing edges per node)
        match self {
            Self::Small => (8, 2),
            Self::MediumDense => (64, 8),
            Self::LargeSparse => (512, 2),
        }
    }
}

/// Generates markup shaped like a service response: node groups with titles, edge groups with
/// one or two path segments, edge ids encoding their source node.
pub fn markup(case: Case) -> String {
    let (nodes, fan) = case.shape();
    let mut out = String::new();

    out.push_str("<svg xmlns=\"http://www.w3.org/2000/svg\">\n<g id=\"graph0\" class=\"graph\">\n");

    for idx in 0..nodes {
        let _ = writeln!(
            out,
            "<g id=\"n{idx}\" class=\"node\"><title>entity_{idx}</title><ellipse cx=\"{}\" cy=\"{}\" rx=\"30\" ry=\"14\" stroke=\"black\"/></g>",
            (idx % 16) * 80,
            (idx / 16) * 60,
        );
    }

    for idx in 0..nodes {
        for step in 1..=fan {
            let target = (idx + step) % nodes;
            let _ = write!(
                out,
                "<g id=\"n{idx}_n{target}\" class=\"edge\"><title>entity_{idx}-&gt;entity_{target}</title><path d=\"M{idx},0 L{target},1\" stroke=\"#666666\" stroke-width=\"1\"/>",
            );
            // Every third edge renders as two segments.
            if (idx + step) % 3 == 0 {
                let _ = write!(
                    out,
                    "<path d=\"M{target},1 L{target},2\" stroke=\"#999999\" stroke-width=\"2\"/>",
                );
            }
            out.push_str("</g>\n");
        }
    }

    out.push_str("</g>\n</svg>\n");
    out
}

pub fn edge_count(case: Case) -> u64 {
    let (nodes, fan) = case.shape();
    (nodes * fan) as u64
}

pub fn checksum_graph(graph: &RenderedGraph) -> u64 {
    let mut sum = 0u64;
    for (node_id, node) in graph.nodes() {
        sum = sum
            .wrapping_mul(31)
            .wrapping_add(node_id.as_str().len() as u64)
            .wrapping_add(node.label().map(str::len).unwrap_or(0) as u64);
    }
    for (edge_id, edge) in graph.edges() {
        sum = sum
            .wrapping_mul(31)
            .wrapping_add(edge_id.as_str().len() as u64)
            .wrapping_add(edge.segments().len() as u64);
    }
    sum
}
