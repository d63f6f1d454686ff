//! Partitioning a catalog into groups of directories with equal signatures.

use std::collections::VecDeque;

use crate::catalog::catalog;
use crate::model::{DirSignature, DuplicateGroup, FileTreeNode};

/// Group catalog entries that share a signature.
///
/// Entries are taken head-first. A head with no equal-signature entry after
/// it is dropped. Otherwise the head and every later equal entry form a
/// group, and entries whose path starts with the head's path are removed
/// from what is left, so subdirectories of a matched head never seed groups
/// of their own. This relies on `entries` being ordered shortest path first.
pub fn group(entries: Vec<DirSignature>) -> Vec<DuplicateGroup> {
    let mut pending: VecDeque<DirSignature> = entries.into();
    let mut groups = Vec::new();

    while let Some(head) = pending.pop_front() {
        let (dups, rest): (Vec<_>, Vec<_>) = pending
            .into_iter()
            .partition(|e| e.signature == head.signature);

        if dups.is_empty() {
            pending = rest.into();
            continue;
        }

        pending = rest
            .into_iter()
            .filter(|e| !e.path.starts_with(head.path.as_str()))
            .collect();
        groups.push(DuplicateGroup::new(head, dups));
    }
    groups
}

/// Stable sort, smallest head size first.
pub fn sort_groups(groups: &mut [DuplicateGroup]) {
    groups.sort_by_key(|g| g.head().signature.total_size);
}

/// Catalog, group and order the duplicate directories of a scanned tree.
pub fn find_duplicates(root: &FileTreeNode) -> Vec<DuplicateGroup> {
    let mut groups = group(catalog(root));
    sort_groups(&mut groups);
    groups
}
