use serde::Serialize;
use std::path::PathBuf;

/// One entry of a scanned directory tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum FileTreeNode {
    File {
        name: String,
        size: u64,
    },
    Directory {
        /// Always absolute; set once when the node is built.
        path: PathBuf,
        /// Filesystem listing order.
        children: Vec<FileTreeNode>,
    },
    /// Entry that could not be classified (permission error, race, unsupported type).
    Inaccessible {
        name: String,
    },
}

impl FileTreeNode {
    pub fn empty_dir(path: impl Into<PathBuf>) -> Self {
        FileTreeNode::Directory {
            path: path.into(),
            children: Vec::new(),
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, FileTreeNode::Directory { .. })
    }
}

/// Coarse structural fingerprint of a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Signature {
    pub total_size: u64,
    pub file_count: u64,
    pub dir_count: u64,
}

impl Signature {
    pub const ZERO: Signature = Signature {
        total_size: 0,
        file_count: 0,
        dir_count: 0,
    };

    pub fn new(total_size: u64, file_count: u64, dir_count: u64) -> Self {
        Self {
            total_size,
            file_count,
            dir_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirSignature {
    pub path: String,
    pub signature: Signature,
}

impl DirSignature {
    pub fn new(path: impl Into<String>, signature: Signature) -> Self {
        Self {
            path: path.into(),
            signature,
        }
    }
}

/// Directories sharing one signature. The first member is the group head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateGroup {
    members: Vec<DirSignature>,
}

impl DuplicateGroup {
    pub fn new(head: DirSignature, dups: Vec<DirSignature>) -> Self {
        let mut members = Vec::with_capacity(dups.len() + 1);
        members.push(head);
        members.extend(dups);
        Self { members }
    }

    pub fn head(&self) -> &DirSignature {
        &self.members[0]
    }

    pub fn signature(&self) -> Signature {
        self.head().signature
    }

    pub fn members(&self) -> &[DirSignature] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
