//! Working-copy snapshot
//!
//! A `WorkTree` is a read-only, in-memory snapshot of a working copy:
//! one arena of entries addressed by `EntryId` indices, with parent links
//! and name-sorted children. All planning runs against the snapshot; the
//! filesystem is not consulted again once it is built.

use crate::utils::normalize_path;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

/// Index of an entry in a [`WorkTree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u32);

impl EntryId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Kind of a snapshot entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// One filesystem entry in the snapshot.
#[derive(Debug, Clone)]
pub struct Entry {
    name: String,
    /// Path relative to the working-copy root, forward slashes, empty for the root.
    path: String,
    kind: EntryKind,
    parent: Option<EntryId>,
    children: Vec<EntryId>,
}

/// In-memory snapshot of a working copy.
pub struct WorkTree {
    root_path: PathBuf,
    entries: Vec<Entry>,
    index: HashMap<String, EntryId>,
}

impl WorkTree {
    /// Snapshot the directory at `root`.
    ///
    /// Children are recorded in name order. An unreadable directory is
    /// recorded as a leaf: the walk warns and moves on, it never fails.
    pub fn load(root: &Path, follow_symlinks: bool) -> Result<Self> {
        let root_path = root
            .canonicalize()
            .with_context(|| format!("Failed to resolve working-copy root: {}", root.display()))?;
        anyhow::ensure!(root_path.is_dir(), "Not a directory: {}", root_path.display());

        let root_name = root_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let mut tree = Self {
            root_path: root_path.clone(),
            entries: vec![Entry {
                name: root_name,
                path: String::new(),
                kind: EntryKind::Directory,
                parent: None,
                children: Vec::new(),
            }],
            index: HashMap::new(),
        };
        tree.index.insert(String::new(), EntryId(0));

        let walker = WalkDir::new(&root_path)
            .min_depth(1)
            .follow_links(follow_symlinks)
            .sort_by(|a, b| a.file_name().cmp(b.file_name()));

        for item in walker {
            let item = match item {
                Ok(item) => item,
                Err(err) => {
                    warn!("Skipping unreadable entry: {}", err);
                    continue;
                }
            };

            let rel = match item.path().strip_prefix(&root_path) {
                Ok(rel) => rel,
                Err(_) => continue,
            };
            let Some(rel_str) = rel.to_str() else {
                warn!("Skipping non-UTF-8 path: {}", item.path().display());
                continue;
            };
            let rel_path = normalize_path(rel_str);

            let parent_path = match rel_path.rfind('/') {
                Some(pos) => &rel_path[..pos],
                None => "",
            };
            // A missing parent means the parent itself was skipped above.
            let Some(&parent_id) = tree.index.get(parent_path) else {
                continue;
            };

            let kind = if item.file_type().is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::File
            };
            let name = item.file_name().to_string_lossy().into_owned();

            let id = EntryId(tree.entries.len() as u32);
            tree.entries.push(Entry {
                name,
                path: rel_path.clone(),
                kind,
                parent: Some(parent_id),
                children: Vec::new(),
            });
            tree.entries[parent_id.index()].children.push(id);
            tree.index.insert(rel_path, id);
        }

        Ok(tree)
    }

    /// The synthetic root entry (the working copy itself).
    pub fn root(&self) -> EntryId {
        EntryId(0)
    }

    /// Absolute path of the working-copy root.
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    /// Look up an entry by its normalized relative path ("" for the root).
    pub fn find(&self, rel_path: &str) -> Option<EntryId> {
        let key = if rel_path == "." { "" } else { rel_path };
        self.index.get(key).copied()
    }

    pub fn parent(&self, id: EntryId) -> Option<EntryId> {
        self.entries[id.index()].parent
    }

    pub fn children(&self, id: EntryId) -> &[EntryId] {
        &self.entries[id.index()].children
    }

    pub fn is_dir(&self, id: EntryId) -> bool {
        self.entries[id.index()].kind == EntryKind::Directory
    }

    pub fn name(&self, id: EntryId) -> &str {
        &self.entries[id.index()].name
    }

    /// Relative path, forward slashes, empty for the root.
    pub fn path(&self, id: EntryId) -> &str {
        &self.entries[id.index()].path
    }

    /// Absolute on-disk path of an entry.
    pub fn abs_path(&self, id: EntryId) -> PathBuf {
        let entry = &self.entries[id.index()];
        if entry.path.is_empty() {
            self.root_path.clone()
        } else {
            self.root_path.join(&entry.path)
        }
    }

    /// Child of `id` with the given name, if any.
    pub fn child_named(&self, id: EntryId, name: &str) -> Option<EntryId> {
        self.children(id).iter().copied().find(|&c| self.name(c) == name)
    }

    /// Total number of entries, the root included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.len() <= 1
    }

    /// All entry ids in snapshot (depth-first) order, the root excluded.
    pub fn iter(&self) -> impl Iterator<Item = EntryId> + '_ {
        (1..self.entries.len() as u32).map(EntryId)
    }
}
