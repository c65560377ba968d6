// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Thetis-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Thetis and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

/// The kind of diagram the service can produce for an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DiagramKind {
    FunctionCall,
    DetailedClass,
    ClassCollaboration,
    ComponentUsers,
    ComponentDependencies,
}

impl DiagramKind {
    pub const ALL: [DiagramKind; 5] = [
        DiagramKind::FunctionCall,
        DiagramKind::DetailedClass,
        DiagramKind::ClassCollaboration,
        DiagramKind::ComponentUsers,
        DiagramKind::ComponentDependencies,
    ];

    /// Stable wire label; also used as the markup filename stem in graph folders.
    pub fn label(self) -> &'static str {
        match self {
            Self::FunctionCall => "function-call",
            Self::DetailedClass => "detailed-class",
            Self::ClassCollaboration => "class-collaboration",
            Self::ComponentUsers => "component-users",
            Self::ComponentDependencies => "component-dependencies",
        }
    }
}

impl fmt::Display for DiagramKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DiagramKind {
    type Err = ParseDiagramKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.label() == s)
            .ok_or_else(|| ParseDiagramKindError {
                label: s.to_owned(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDiagramKindError {
    label: String,
}

impl ParseDiagramKindError {
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for ParseDiagramKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown diagram kind '{}'", self.label)
    }
}

impl std::error::Error for ParseDiagramKindError {}

/// Graph markup returned by the diagram service.
///
/// The provider forwards this to hosts unchanged; only the post-render wiring step parses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphMarkup(String);

impl GraphMarkup {
    pub fn new(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}
