pub mod manifest;
pub mod room;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use roxmltree::Node;
use tracing::{debug, info, warn};

use crate::config::ExtractConfig;
use crate::model::RawProject;

/// Load every room document and the manifest under `config.root`.
///
/// A room document that cannot be read or parsed is logged and skipped; a
/// broken or missing manifest yields an empty order. Only an unreadable
/// rooms directory is an error.
pub fn load_project(config: &ExtractConfig) -> Result<RawProject> {
    let manifest_path = match config.project_path() {
        Some(path) => Some(path),
        None => find_manifest(&config.root)?,
    };
    let room_order = match manifest_path {
        Some(path) => {
            debug!(manifest = %path.display(), "reading room order");
            manifest::load_manifest(&path)
        }
        None => {
            warn!(root = %config.root.display(), "no project manifest found");
            Vec::new()
        }
    };
    info!("Found {} rooms in project", room_order.len());

    let rooms_dir = config.rooms_path();
    let files = room_files(&rooms_dir)?;
    info!(dir = %rooms_dir.display(), "Found {} room documents", files.len());

    let mut rooms = Vec::with_capacity(files.len());
    for path in &files {
        match room::load_room(path) {
            Ok(room) => rooms.push(room),
            Err(e) => warn!(error = %e, "skipping room document"),
        }
    }

    Ok(RawProject { rooms, room_order })
}

/// `*.room.gmx` files of `dir`, sorted by file name.
pub fn room_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = files_with_suffix(dir, room::ROOM_SUFFIX)
        .with_context(|| format!("Listing rooms in {}", dir.display()))?;
    files.sort();
    Ok(files)
}

/// First `*.project.gmx` directly under `root`, by file name.
pub fn find_manifest(root: &Path) -> Result<Option<PathBuf>> {
    let mut candidates = files_with_suffix(root, manifest::MANIFEST_SUFFIX)
        .with_context(|| format!("Looking for a manifest in {}", root.display()))?;
    candidates.sort();
    if candidates.len() > 1 {
        warn!(count = candidates.len(), "several manifests found, using the first");
    }
    Ok(candidates.into_iter().next())
}

fn files_with_suffix(dir: &Path, suffix: &str) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let matches = entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.ends_with(suffix));
        if matches && entry.file_type()?.is_file() {
            files.push(entry.path());
        }
    }
    Ok(files)
}

// ─────────────────────────────────────────────────────
// Markup helpers shared by the document parsers.

pub(crate) fn child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| n.has_tag_name(tag))
}

/// Scalar dimension field: absent or empty is 0, fractional text truncates.
pub(crate) fn parse_dimension(text: Option<&str>, field: &str) -> i32 {
    let Some(text) = text.map(str::trim).filter(|t| !t.is_empty()) else {
        return 0;
    };
    text.parse::<i32>()
        .ok()
        .or_else(|| text.parse::<f64>().ok().map(|v| v as i32))
        .unwrap_or_else(|| {
            warn!(field = field, value = text, "dimension is not a number, using 0");
            0
        })
}

/// Position attribute, stored as possibly-fractional text.
pub(crate) fn parse_coordinate(attr: Option<&str>) -> i32 {
    attr.and_then(|v| v.trim().parse::<f64>().ok())
        .map(|v| v as i32)
        .unwrap_or(0)
}

pub(crate) fn parse_instance_id(attr: Option<&str>) -> i64 {
    attr.and_then(|v| v.trim().parse::<i64>().ok()).unwrap_or(0)
}
