// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Thetis-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Thetis and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Source-range records exchanged with the language service.
//!
//! These types mirror the wire shape of `getAstNodeInfo` responses; field names are part of the
//! protocol, not a local convenience.

use serde::{Deserialize, Serialize};

use super::ids::FileId;

/// A line/column position within a source file, as reported by the language service (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

/// A start/end position pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub startpos: Position,
    pub endpos: Position,
}

/// A range anchored to a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRange {
    pub file: FileId,
    pub range: Range,
}

/// The per-node record fetched from the language service.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AstNodeInfo {
    #[serde(rename = "astType", default, skip_serializing_if = "Option::is_none")]
    pub ast_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<FileRange>,
}

/// Where the source viewer should jump for a selected node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavTarget {
    pub file_id: FileId,
    /// `[start_line, start_column, end_line, end_column]`.
    pub selection: [u32; 4],
}

#[cfg(test)]
mod tests {
    use super::{AstNodeInfo, FileRange, Position, Range};
    use crate::model::ids::FileId;

    #[test]
    fn ast_node_info_round_trips_the_wire_shape() {
        let json = r#"{
            "astType": "Function",
            "value": "main()",
            "range": {
                "file": "f7",
                "range": {
                    "startpos": { "line": 10, "column": 1 },
                    "endpos": { "line": 14, "column": 2 }
                }
            }
        }"#;

        let info: AstNodeInfo = serde_json::from_str(json).expect("deserialize");
        assert_eq!(info.ast_type.as_deref(), Some("Function"));
        assert_eq!(info.value.as_deref(), Some("main()"));
        assert_eq!(
            info.range,
            Some(FileRange {
                file: FileId::new("f7").expect("file id"),
                range: Range {
                    startpos: Position { line: 10, column: 1 },
                    endpos: Position { line: 14, column: 2 },
                },
            })
        );

        let encoded = serde_json::to_value(&info).expect("serialize");
        assert_eq!(encoded["astType"], "Function");
        assert_eq!(encoded["range"]["range"]["endpos"]["column"], 2);
    }

    #[test]
    fn ast_node_info_tolerates_a_missing_range() {
        let info: AstNodeInfo = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(info, AstNodeInfo::default());
    }
}
