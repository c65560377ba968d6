// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Thetis-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Thetis and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::FileId;
use super::source::{AstNodeInfo, FileRange, Position, Range};

/// Entity id of the built-in demo dataset (a small call graph around `main`).
pub(crate) const DEMO_ENTITY_ID: &str = "c100";

/// Function-call markup for [`DEMO_ENTITY_ID`].
///
/// `c100_c102` deliberately renders as two path segments with differing strokes, so the demo
/// exercises the uniform-restore behavior of multi-segment edges.
pub(crate) const DEMO_FUNCTION_CALL_MARKUP: &str = r##"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<svg xmlns="http://www.w3.org/2000/svg" width="540" height="320" viewBox="0 0 540 320">
<g id="graph0" class="graph">
<g id="c100" class="node"><title>main</title><ellipse cx="60" cy="40" rx="44" ry="18" stroke="black"/><text x="60" y="44">main</text></g>
<g id="c101" class="node"><title>parse_args</title><ellipse cx="220" cy="40" rx="58" ry="18" stroke="black"/><text x="220" y="44">parse_args</text></g>
<g id="c102" class="node"><title>run</title><ellipse cx="220" cy="120" rx="40" ry="18" stroke="black"/><text x="220" y="124">run</text></g>
<g id="c100_c101" class="edge"><title>main&#45;&gt;parse_args</title><path d="M104,40 C130,40 140,40 162,40" stroke="#666666"/><polygon points="162,36 172,40 162,44"/></g>
<g id="c100_c102" class="edge"><title>main&#45;&gt;run</title><path d="M92,55 C120,76 140,90 160,102" stroke="#666666" stroke-width="1"/><path d="M160,102 C168,106 172,109 180,112" stroke="#999999" stroke-width="2"/><polygon points="178,108 188,116 174,116"/></g>
<g id="c101_c102" class="edge"><title>parse_args&#45;&gt;run</title><path d="M220,58 C220,72 220,88 220,102"/><polygon points="216,102 220,112 224,102"/></g>
</g>
</svg>
"##;

fn fid(value: &str) -> FileId {
    FileId::new(value).expect("file id")
}

fn range(file: &str, start: (u32, u32), end: (u32, u32)) -> FileRange {
    FileRange {
        file: fid(file),
        range: Range {
            startpos: Position {
                line: start.0,
                column: start.1,
            },
            endpos: Position {
                line: end.0,
                column: end.1,
            },
        },
    }
}

/// AST records backing the demo nodes. `c103` has no range on purpose, to exercise the
/// missing-range navigation failure.
pub(crate) fn demo_node_infos() -> Vec<(&'static str, AstNodeInfo)> {
    vec![
        (
            "c100",
            AstNodeInfo {
                ast_type: Some("Function".to_owned()),
                value: Some("int main(int, char**)".to_owned()),
                range: Some(range("f1", (12, 1), (31, 2))),
            },
        ),
        (
            "c101",
            AstNodeInfo {
                ast_type: Some("Function".to_owned()),
                value: Some("Options parse_args(int, char**)".to_owned()),
                range: Some(range("f2", (5, 1), (24, 2))),
            },
        ),
        (
            "c102",
            AstNodeInfo {
                ast_type: Some("Function".to_owned()),
                value: Some("int run(const Options&)".to_owned()),
                range: Some(range("f2", (28, 1), (61, 2))),
            },
        ),
        (
            "c103",
            AstNodeInfo {
                ast_type: Some("Function".to_owned()),
                value: Some("void builtin()".to_owned()),
                range: None,
            },
        ),
    ]
}
