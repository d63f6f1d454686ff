//! Flattening a tree into the list of directories worth comparing.

use crate::model::{DirSignature, FileTreeNode, Signature};
use crate::signature::own_signature;

// A directory is compared only when it exceeds at least one of these.
pub const SIGNIFICANT_SIZE: u64 = 10240;
pub const SIGNIFICANT_FILES: u64 = 10;
pub const SIGNIFICANT_DIRS: u64 = 10;

pub fn is_significant(sig: &Signature) -> bool {
    sig.total_size > SIGNIFICANT_SIZE
        || sig.file_count > SIGNIFICANT_FILES
        || sig.dir_count > SIGNIFICANT_DIRS
}

/// Every directory of the tree with its aggregate signature, in pre-order
/// (a directory before its subdirectories).
pub fn all_dir_signatures(root: &FileTreeNode) -> Vec<DirSignature> {
    let mut out = Vec::new();
    collect(root, &mut out);
    out
}

/// Pushes a slot for each directory before descending so the list stays in
/// pre-order, then fills in the signature once the children are summed.
fn collect(node: &FileTreeNode, out: &mut Vec<DirSignature>) -> Signature {
    let FileTreeNode::Directory { path, children } = node else {
        return own_signature(node);
    };

    let slot = out.len();
    out.push(DirSignature::new(path.to_string_lossy(), Signature::ZERO));
    let sig = children
        .iter()
        .fold(own_signature(node), |acc, c| acc + collect(c, out));
    out[slot].signature = sig;
    sig
}

/// Significant directories ordered by path length, shortest first. Paths of
/// equal length keep their pre-order position.
pub fn catalog(root: &FileTreeNode) -> Vec<DirSignature> {
    let mut entries: Vec<DirSignature> = all_dir_signatures(root)
        .into_iter()
        .filter(|d| is_significant(&d.signature))
        .collect();
    sort_by_path_length(&mut entries);
    entries
}

pub fn sort_by_path_length(entries: &mut [DirSignature]) {
    entries.sort_by_cached_key(|d| d.path.chars().count());
}
