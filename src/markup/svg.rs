// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Thetis-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Thetis and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use memchr::{memchr, memmem};
use smol_str::SmolStr;

use crate::model::ids::{EdgeId, IdError, NodeId};
use crate::model::{GraphEdge, GraphNode, PathSegment, RenderedGraph};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SvgParseError {
    UnterminatedTag {
        pos: usize,
    },
    UnterminatedComment {
        pos: usize,
    },
    UnterminatedTitle {
        pos: usize,
    },
    MalformedAttribute {
        pos: usize,
    },
    MissingGroupId {
        pos: usize,
        class: String,
    },
    InvalidGroupId {
        pos: usize,
        value: String,
        reason: IdError,
    },
    DuplicateNode {
        id: NodeId,
    },
    DuplicateEdge {
        id: EdgeId,
    },
    InvalidStrokeWidth {
        pos: usize,
        value: String,
    },
    UnbalancedGroup {
        pos: usize,
    },
    UnterminatedGroup {
        id: String,
    },
}

impl fmt::Display for SvgParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnterminatedTag { pos } => write!(f, "unterminated tag at byte {pos}"),
            Self::UnterminatedComment { pos } => write!(f, "unterminated comment at byte {pos}"),
            Self::UnterminatedTitle { pos } => write!(f, "unterminated <title> at byte {pos}"),
            Self::MalformedAttribute { pos } => write!(f, "malformed attribute at byte {pos}"),
            Self::MissingGroupId { pos, class } => {
                write!(f, "<g class=\"{class}\"> without an id at byte {pos}")
            }
            Self::InvalidGroupId { pos, value, reason } => {
                write!(f, "invalid group id '{value}' at byte {pos}: {reason}")
            }
            Self::DuplicateNode { id } => write!(f, "duplicate node id '{id}'"),
            Self::DuplicateEdge { id } => write!(f, "duplicate edge id '{id}'"),
            Self::InvalidStrokeWidth { pos, value } => {
                write!(f, "invalid stroke-width '{value}' at byte {pos}")
            }
            Self::UnbalancedGroup { pos } => write!(f, "unbalanced </g> at byte {pos}"),
            Self::UnterminatedGroup { id } => write!(f, "unterminated group '{id}'"),
        }
    }
}

impl std::error::Error for SvgParseError {}

enum Frame {
    Plain,
    Node { id: NodeId, node: GraphNode },
    Edge { id: EdgeId, edge: GraphEdge },
}

/// Parses service markup into a [`RenderedGraph`].
///
/// Recognized structure: `<g class="node" id=...>` with an optional `<title>` label, and
/// `<g class="edge" id=...>` with `<path>` children carrying `d`/`stroke`/`stroke-width`.
/// A `stroke-width` that is present but not an unsigned integer is rejected; an *absent*
/// attribute is resolved to a default later, at highlight-wiring time.
pub fn parse_svg_graph(input: &str) -> Result<RenderedGraph, SvgParseError> {
    let mut graph = RenderedGraph::default();
    let mut stack: Vec<Frame> = Vec::new();
    let bytes = input.as_bytes();
    let mut pos = 0usize;

    while let Some(offset) = memchr(b'<', &bytes[pos..]) {
        let tag_start = pos + offset;
        let rest = &input[tag_start..];

        if rest.starts_with("<!--") {
            let Some(end) = memmem::find(&bytes[tag_start + 4..], b"-->") else {
                return Err(SvgParseError::UnterminatedComment { pos: tag_start });
            };
            pos = tag_start + 4 + end + 3;
            continue;
        }

        if rest.starts_with("<?") || rest.starts_with("<!") {
            let Some(end) = memchr(b'>', &bytes[tag_start..]) else {
                return Err(SvgParseError::UnterminatedTag { pos: tag_start });
            };
            pos = tag_start + end + 1;
            continue;
        }

        let gt_idx = find_tag_end(input, tag_start)?;
        let body = &input[tag_start + 1..gt_idx];
        pos = gt_idx + 1;

        if let Some(name) = body.strip_prefix('/') {
            if name.trim() == "g" {
                match stack.pop() {
                    Some(Frame::Node { id, node }) => commit_node(&mut graph, id, node)?,
                    Some(Frame::Edge { id, edge }) => commit_edge(&mut graph, id, edge)?,
                    Some(Frame::Plain) => {}
                    None => return Err(SvgParseError::UnbalancedGroup { pos: tag_start }),
                }
            }
            continue;
        }

        let self_closing = body.trim_end().ends_with('/');
        let body = body.trim_end().trim_end_matches('/');
        let (name, attr_body) = split_tag_name(body);
        let attr_base = tag_start + 1 + (body.len() - attr_body.len());

        match name {
            "g" => {
                let attrs = parse_attributes(attr_body, attr_base)?;
                let frame = open_group(&attrs, tag_start)?;
                if self_closing {
                    match frame {
                        Frame::Node { id, node } => commit_node(&mut graph, id, node)?,
                        Frame::Edge { id, edge } => commit_edge(&mut graph, id, edge)?,
                        Frame::Plain => {}
                    }
                } else {
                    stack.push(frame);
                }
            }
            "title" if !self_closing => {
                let Some(end) = memmem::find(&bytes[pos..], b"</title>") else {
                    return Err(SvgParseError::UnterminatedTitle { pos: tag_start });
                };
                let text = decode_entities(&input[pos..pos + end]);
                if let Some(Frame::Node { node, .. }) = stack.last_mut() {
                    node.set_label(Some(text));
                }
                pos += end + "</title>".len();
            }
            "path" => {
                if let Some(Frame::Edge { edge, .. }) = stack.last_mut() {
                    let attrs = parse_attributes(attr_body, attr_base)?;
                    edge.push_segment(path_segment(&attrs, attr_base)?);
                }
            }
            _ => {}
        }
    }

    for frame in stack {
        match frame {
            Frame::Node { id, .. } => {
                return Err(SvgParseError::UnterminatedGroup {
                    id: id.into_string(),
                })
            }
            Frame::Edge { id, .. } => {
                return Err(SvgParseError::UnterminatedGroup {
                    id: id.into_string(),
                })
            }
            Frame::Plain => {}
        }
    }

    Ok(graph)
}

fn commit_node(graph: &mut RenderedGraph, id: NodeId, node: GraphNode) -> Result<(), SvgParseError> {
    if graph.nodes().contains_key(&id) {
        return Err(SvgParseError::DuplicateNode { id });
    }
    graph.nodes_mut().insert(id, node);
    Ok(())
}

fn commit_edge(graph: &mut RenderedGraph, id: EdgeId, edge: GraphEdge) -> Result<(), SvgParseError> {
    if graph.edges().contains_key(&id) {
        return Err(SvgParseError::DuplicateEdge { id });
    }
    graph.edges_mut().insert(id, edge);
    Ok(())
}

fn open_group(attrs: &[(String, String)], tag_start: usize) -> Result<Frame, SvgParseError> {
    let class = attr_value(attrs, "class");
    let id = attr_value(attrs, "id");

    match class {
        Some("node") => {
            let raw = id.ok_or_else(|| SvgParseError::MissingGroupId {
                pos: tag_start,
                class: "node".to_owned(),
            })?;
            let id = NodeId::new(raw).map_err(|reason| SvgParseError::InvalidGroupId {
                pos: tag_start,
                value: raw.to_owned(),
                reason,
            })?;
            Ok(Frame::Node {
                id,
                node: GraphNode::new(),
            })
        }
        Some("edge") => {
            let raw = id.ok_or_else(|| SvgParseError::MissingGroupId {
                pos: tag_start,
                class: "edge".to_owned(),
            })?;
            let id = EdgeId::new(raw).map_err(|reason| SvgParseError::InvalidGroupId {
                pos: tag_start,
                value: raw.to_owned(),
                reason,
            })?;
            Ok(Frame::Edge {
                id,
                edge: GraphEdge::new(),
            })
        }
        _ => Ok(Frame::Plain),
    }
}

fn path_segment(attrs: &[(String, String)], pos: usize) -> Result<PathSegment, SvgParseError> {
    let data = attr_value(attrs, "d").unwrap_or_default();
    let stroke = attr_value(attrs, "stroke").map(SmolStr::new);
    let stroke_width = match attr_value(attrs, "stroke-width") {
        Some(raw) => Some(
            raw.parse::<u32>()
                .map_err(|_| SvgParseError::InvalidStrokeWidth {
                    pos,
                    value: raw.to_owned(),
                })?,
        ),
        None => None,
    };
    Ok(PathSegment::new_with(data, stroke, stroke_width))
}

fn attr_value<'a>(attrs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    attrs
        .iter()
        .find(|(attr, _)| attr == name)
        .map(|(_, value)| value.as_str())
}

/// Finds the `>` that closes the tag opened at `tag_start`, respecting quoted attribute values.
fn find_tag_end(input: &str, tag_start: usize) -> Result<usize, SvgParseError> {
    let bytes = input.as_bytes();
    let mut quote: Option<u8> = None;

    for idx in tag_start + 1..bytes.len() {
        let byte = bytes[idx];
        match quote {
            Some(open) => {
                if byte == open {
                    quote = None;
                }
            }
            None => match byte {
                b'"' | b'\'' => quote = Some(byte),
                b'>' => return Ok(idx),
                _ => {}
            },
        }
    }

    Err(SvgParseError::UnterminatedTag { pos: tag_start })
}

fn split_tag_name(body: &str) -> (&str, &str) {
    match body.find(|ch: char| ch.is_ascii_whitespace()) {
        Some(idx) => (&body[..idx], &body[idx..]),
        None => (body, ""),
    }
}

fn parse_attributes(body: &str, base: usize) -> Result<Vec<(String, String)>, SvgParseError> {
    let bytes = body.as_bytes();
    let mut attrs = Vec::new();
    let mut idx = 0usize;

    loop {
        while idx < bytes.len() && bytes[idx].is_ascii_whitespace() {
            idx += 1;
        }
        if idx >= bytes.len() {
            return Ok(attrs);
        }

        let name_start = idx;
        while idx < bytes.len() && is_attr_name_byte(bytes[idx]) {
            idx += 1;
        }
        if idx == name_start {
            return Err(SvgParseError::MalformedAttribute { pos: base + idx });
        }
        let name = &body[name_start..idx];

        while idx < bytes.len() && bytes[idx].is_ascii_whitespace() {
            idx += 1;
        }
        if idx >= bytes.len() || bytes[idx] != b'=' {
            return Err(SvgParseError::MalformedAttribute { pos: base + idx });
        }
        idx += 1;
        while idx < bytes.len() && bytes[idx].is_ascii_whitespace() {
            idx += 1;
        }
        if idx >= bytes.len() || (bytes[idx] != b'"' && bytes[idx] != b'\'') {
            return Err(SvgParseError::MalformedAttribute { pos: base + idx });
        }
        let open = bytes[idx];
        idx += 1;
        let value_start = idx;
        let Some(len) = memchr(open, &bytes[idx..]) else {
            return Err(SvgParseError::MalformedAttribute { pos: base + value_start });
        };
        idx += len;
        let value = decode_entities(&body[value_start..idx]);
        idx += 1;

        attrs.push((name.to_owned(), value));
    }
}

fn is_attr_name_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b':' | b'.')
}

/// Decodes the named and numeric character references common in generated markup; anything
/// unrecognized is kept literally.
fn decode_entities(input: &str) -> String {
    if !input.contains('&') {
        return input.to_owned();
    }

    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(idx) = rest.find('&') {
        out.push_str(&rest[..idx]);
        rest = &rest[idx..];

        let Some(semi) = rest[..rest.len().min(12)].find(';') else {
            out.push('&');
            rest = &rest[1..];
            continue;
        };

        let entity = &rest[1..semi];
        let decoded = match entity {
            "amp" => Some('&'),
            "lt" => Some('<'),
            "gt" => Some('>'),
            "quot" => Some('"'),
            "apos" => Some('\''),
            _ => decode_numeric_entity(entity),
        };

        match decoded {
            Some(ch) => {
                out.push(ch);
                rest = &rest[semi + 1..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

fn decode_numeric_entity(entity: &str) -> Option<char> {
    let digits = entity.strip_prefix('#')?;
    let code = match digits.strip_prefix(['x', 'X']) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => digits.parse::<u32>().ok()?,
    };
    char::from_u32(code)
}
