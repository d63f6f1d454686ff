//! Folding a subtree into its [`Signature`].

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use crate::model::{FileTreeNode, Signature};

impl Add for Signature {
    type Output = Signature;

    fn add(self, rhs: Signature) -> Signature {
        Signature {
            total_size: self.total_size.saturating_add(rhs.total_size),
            file_count: self.file_count + rhs.file_count,
            dir_count: self.dir_count + rhs.dir_count,
        }
    }
}

impl AddAssign for Signature {
    fn add_assign(&mut self, rhs: Signature) {
        *self = *self + rhs;
    }
}

impl Sum for Signature {
    fn sum<I: Iterator<Item = Signature>>(iter: I) -> Signature {
        iter.fold(Signature::ZERO, Add::add)
    }
}

/// Signature contributed by a single node, before its children are folded in.
pub(crate) fn own_signature(node: &FileTreeNode) -> Signature {
    match node {
        FileTreeNode::File { size, .. } => Signature::new(*size, 1, 0),
        FileTreeNode::Directory { .. } => Signature::new(0, 0, 1),
        FileTreeNode::Inaccessible { .. } => Signature::ZERO,
    }
}

/// Aggregate signature of a subtree.
///
/// A directory counts itself once and then every transitive descendant;
/// inaccessible entries count as nothing.
pub fn aggregate(node: &FileTreeNode) -> Signature {
    match node {
        FileTreeNode::Directory { children, .. } => {
            children.iter().fold(own_signature(node), |acc, c| acc + aggregate(c))
        }
        _ => own_signature(node),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, size: u64) -> FileTreeNode {
        FileTreeNode::File {
            name: name.to_string(),
            size,
        }
    }

    fn dir(path: &str, children: Vec<FileTreeNode>) -> FileTreeNode {
        FileTreeNode::Directory {
            path: path.into(),
            children,
        }
    }

    #[test]
    fn leaves() {
        assert_eq!(aggregate(&file("a", 42)), Signature::new(42, 1, 0));
        assert_eq!(
            aggregate(&FileTreeNode::Inaccessible { name: "x".into() }),
            Signature::ZERO
        );
        assert_eq!(aggregate(&dir("/e", vec![])), Signature::new(0, 0, 1));
    }

    #[test]
    fn nested_directories_count_once_each() {
        let tree = dir(
            "/r",
            vec![
                file("a", 10),
                dir("/r/s", vec![file("b", 5), dir("/r/s/t", vec![file("c", 1)])]),
                FileTreeNode::Inaccessible { name: "locked".into() },
                dir("/r/u", vec![]),
            ],
        );
        assert_eq!(aggregate(&tree), Signature::new(16, 3, 4));
    }

    #[test]
    fn sum_of_signatures() {
        let total: Signature = [Signature::new(1, 1, 0), Signature::new(2, 0, 1)]
            .into_iter()
            .sum();
        assert_eq!(total, Signature::new(3, 1, 1));
    }
}
