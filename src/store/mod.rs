// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Thetis-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Thetis and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! File-backed diagram source.
//!
//! A graph folder holds pre-generated markup per entity and kind plus one AST-record file; it
//! implements the service seam for local browsing and integration tests.

pub mod graph_folder;

pub use graph_folder::{GraphFolder, StoreError, AST_NODES_FILENAME};
