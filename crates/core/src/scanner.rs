use crossbeam_channel::Sender;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};
use walkdir::WalkDir;

use crate::error::{walk_io_error, ScanError};
use crate::model::FileTreeNode;
use crate::progress::Progress;

#[derive(Debug)]
pub enum ScanMsg {
    Progress(Progress),
    Error(ScanError),
    Done(FileTreeNode),
}

/// Builds a [`FileTreeNode`] for a path, streaming diagnostics and progress
/// to an optional channel.
///
/// Traversal is single-threaded and depth-first. Symbolic links are never
/// followed, and every path is resolved from the root explicitly, so the
/// process working directory is left alone.
#[derive(Debug, Default)]
pub struct Scanner {
    tx: Option<Sender<ScanMsg>>,
}

/// Directory still receiving children while the walk is inside it.
struct OpenDir {
    path: PathBuf,
    children: Vec<FileTreeNode>,
}

impl OpenDir {
    fn new(path: PathBuf) -> Self {
        Self {
            path,
            children: Vec::new(),
        }
    }

    fn into_node(self) -> FileTreeNode {
        FileTreeNode::Directory {
            path: self.path,
            children: self.children,
        }
    }
}

impl Scanner {
    pub fn new(tx: Option<Sender<ScanMsg>>) -> Self {
        Self { tx }
    }

    /// Scan `root` and finish with a [`ScanMsg::Done`] carrying the tree.
    pub fn run(self, root: PathBuf) {
        let tree = self.scan(&root);
        self.send(ScanMsg::Done(tree));
    }

    pub fn scan(&self, root: &Path) -> FileTreeNode {
        let mut progress = Progress::default();

        let root = match resolve_root(root) {
            Ok(root) => root,
            Err((fallback, err)) => {
                self.report(&mut progress, err);
                return FileTreeNode::empty_dir(fallback);
            }
        };
        debug!(root = %root.display(), "scan started");

        let mut open = vec![OpenDir::new(root.clone())];
        progress.dirs = 1;

        for item in WalkDir::new(&root).follow_links(false).min_depth(1) {
            match item {
                Ok(entry) => {
                    if let Some(parent) = entry.path().parent() {
                        close_until(&mut open, parent);
                    }
                    let name = entry.file_name().to_string_lossy().into_owned();
                    let file_type = entry.file_type();

                    if file_type.is_dir() {
                        debug!(path = %entry.path().display(), "entering directory");
                        progress.dirs += 1;
                        self.send(ScanMsg::Progress(progress));
                        open.push(OpenDir::new(entry.into_path()));
                        continue;
                    }

                    let node = if file_type.is_file() {
                        match entry.metadata() {
                            Ok(md) => {
                                progress.files += 1;
                                progress.bytes = progress.bytes.saturating_add(md.len());
                                FileTreeNode::File {
                                    name,
                                    size: md.len(),
                                }
                            }
                            Err(err) => {
                                self.report(
                                    &mut progress,
                                    ScanError::EntryClassification {
                                        path: entry.path().to_path_buf(),
                                        source: walk_io_error(err),
                                    },
                                );
                                FileTreeNode::Inaccessible { name }
                            }
                        }
                    } else {
                        trace!(path = %entry.path().display(), "unsupported entry type");
                        FileTreeNode::Inaccessible { name }
                    };
                    push_child(&mut open, node);
                }
                Err(err) => {
                    let Some(path) = err.path().map(Path::to_path_buf) else {
                        self.report(
                            &mut progress,
                            ScanError::Listing {
                                source: walk_io_error(err),
                            },
                        );
                        continue;
                    };

                    if open.iter().any(|d| d.path == path) {
                        // The directory itself was listed but cannot be read;
                        // it stays in the tree with no children.
                        close_until(&mut open, &path);
                        self.report(
                            &mut progress,
                            ScanError::DirectoryEntry {
                                path,
                                source: walk_io_error(err),
                            },
                        );
                    } else {
                        if let Some(parent) = path.parent() {
                            close_until(&mut open, parent);
                        }
                        let name = path
                            .file_name()
                            .map(|n| n.to_string_lossy().into_owned())
                            .unwrap_or_default();
                        self.report(
                            &mut progress,
                            ScanError::EntryClassification {
                                path,
                                source: walk_io_error(err),
                            },
                        );
                        push_child(&mut open, FileTreeNode::Inaccessible { name });
                    }
                }
            }
        }

        close_until(&mut open, &root);
        self.send(ScanMsg::Progress(progress));
        debug!(%progress, "scan finished");
        open.pop()
            .map(OpenDir::into_node)
            .unwrap_or_else(|| FileTreeNode::empty_dir(root))
    }

    fn send(&self, msg: ScanMsg) {
        if let Some(tx) = &self.tx {
            let _ = tx.send(msg);
        }
    }

    fn report(&self, progress: &mut Progress, err: ScanError) {
        progress.errors += 1;
        match &self.tx {
            Some(tx) => {
                debug!(error = %err, "scan diagnostic");
                let _ = tx.send(ScanMsg::Error(err));
            }
            None => warn!("{err}"),
        }
    }
}

/// Build the tree under `path` without a message channel. Diagnostics go to
/// the log.
pub fn build_tree(path: impl AsRef<Path>) -> FileTreeNode {
    Scanner::default().scan(path.as_ref())
}

/// Resolve the scan root to an absolute directory path. On failure returns
/// the best-known location alongside the reason.
fn resolve_root(path: &Path) -> Result<PathBuf, (PathBuf, ScanError)> {
    let resolved = match std::fs::canonicalize(path) {
        Ok(p) => p,
        Err(source) => {
            let fallback = std::path::absolute(path)
                .or_else(|_| std::env::current_dir())
                .unwrap_or_else(|_| path.to_path_buf());
            return Err((
                fallback,
                ScanError::DirectoryEntry {
                    path: path.to_path_buf(),
                    source,
                },
            ));
        }
    };

    match std::fs::metadata(&resolved) {
        Ok(md) if md.is_dir() => Ok(resolved),
        Ok(_) => Err((
            resolved.clone(),
            ScanError::DirectoryEntry {
                path: resolved,
                source: io::Error::other("not a directory"),
            },
        )),
        Err(source) => Err((
            resolved.clone(),
            ScanError::DirectoryEntry {
                path: resolved,
                source,
            },
        )),
    }
}

/// Fold finished directories into their parents until `dir` is on top.
/// The root is never closed here.
fn close_until(open: &mut Vec<OpenDir>, dir: &Path) {
    while open.len() > 1 && open.last().is_some_and(|d| d.path != dir) {
        if let Some(done) = open.pop() {
            push_child(open, done.into_node());
        }
    }
}

fn push_child(open: &mut [OpenDir], node: FileTreeNode) {
    if let Some(top) = open.last_mut() {
        top.children.push(node);
    }
}
