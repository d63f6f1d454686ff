use dupdirs_core::catalog::{is_significant, sort_by_path_length};
use dupdirs_core::{aggregate, catalog, group, DirSignature, FileTreeNode, Signature};
use proptest::prelude::*;
use std::collections::HashSet;

fn arb_node() -> impl Strategy<Value = FileTreeNode> {
    let leaf = prop_oneof![
        4 => (0u64..5000).prop_map(|size| FileTreeNode::File { name: "f".into(), size }),
        1 => Just(FileTreeNode::Inaccessible { name: "x".into() }),
    ];
    leaf.prop_recursive(4, 96, 8, |inner| {
        (prop::collection::vec(inner, 0..8), "[a-c]{1,3}").prop_map(|(children, name)| {
            FileTreeNode::Directory {
                path: format!("/{name}").into(),
                children,
            }
        })
    })
}

fn arb_dir() -> impl Strategy<Value = FileTreeNode> {
    prop::collection::vec(arb_node(), 0..8).prop_map(|children| FileTreeNode::Directory {
        path: "/root".into(),
        children,
    })
}

fn count_files(node: &FileTreeNode) -> (u64, u64) {
    match node {
        FileTreeNode::File { size, .. } => (1, *size),
        FileTreeNode::Inaccessible { .. } => (0, 0),
        FileTreeNode::Directory { children, .. } => children
            .iter()
            .map(count_files)
            .fold((0, 0), |(n, s), (cn, cs)| (n + cn, s + cs)),
    }
}

fn arb_catalog() -> impl Strategy<Value = Vec<DirSignature>> {
    let sig = (0u64..3, 0u64..3, 0u64..3).prop_map(|(s, f, d)| Signature::new(s, f, d));
    prop::collection::vec(("/[ab](/[ab]){0,2}", sig), 0..24).prop_map(|items| {
        let mut entries: Vec<DirSignature> = items
            .into_iter()
            .map(|(path, sig)| DirSignature::new(path, sig))
            .collect();
        sort_by_path_length(&mut entries);
        entries
    })
}

/// Head-first grouping written as plainly as possible: match the head,
/// drop equal signatures and the head's descendants, recurse.
fn reference_groups(entries: &[DirSignature]) -> Vec<Vec<String>> {
    let Some((head, rest)) = entries.split_first() else {
        return Vec::new();
    };
    let dups: Vec<String> = rest
        .iter()
        .filter(|e| e.signature == head.signature)
        .map(|e| e.path.clone())
        .collect();
    if dups.is_empty() {
        return reference_groups(rest);
    }

    let remaining: Vec<DirSignature> = rest
        .iter()
        .filter(|e| e.signature != head.signature)
        .filter(|e| !e.path.starts_with(&head.path))
        .cloned()
        .collect();
    let mut members = vec![head.path.clone()];
    members.extend(dups);
    let mut out = vec![members];
    out.extend(reference_groups(&remaining));
    out
}

proptest! {
    #[test]
    fn dir_count_is_self_plus_subdirectories(tree in arb_dir()) {
        let FileTreeNode::Directory { children, .. } = &tree else { unreachable!() };
        let from_children: u64 = children
            .iter()
            .filter(|c| c.is_dir())
            .map(|c| aggregate(c).dir_count)
            .sum();
        prop_assert_eq!(aggregate(&tree).dir_count, 1 + from_children);
    }

    #[test]
    fn file_totals_count_every_file(tree in arb_dir()) {
        let (files, bytes) = count_files(&tree);
        let sig = aggregate(&tree);
        prop_assert_eq!(sig.file_count, files);
        prop_assert_eq!(sig.total_size, bytes);
    }

    #[test]
    fn catalog_is_significant_and_length_ordered(tree in arb_dir()) {
        let entries = catalog(&tree);
        for e in &entries {
            prop_assert!(is_significant(&e.signature));
        }
        for pair in entries.windows(2) {
            prop_assert!(pair[0].path.chars().count() <= pair[1].path.chars().count());
        }
    }

    #[test]
    fn groups_are_disjoint_and_uniform(entries in arb_catalog()) {
        let groups = group(entries.clone());
        let mut seen_sigs = HashSet::new();
        let mut seen_members = 0usize;

        for g in &groups {
            prop_assert!(g.len() >= 2);
            prop_assert!(seen_sigs.insert(g.signature()));
            for m in g.members() {
                prop_assert_eq!(m.signature, g.signature());
            }
            seen_members += g.len();
        }
        prop_assert!(seen_members <= entries.len());
    }

    #[test]
    fn grouping_matches_head_first_reference(entries in arb_catalog()) {
        let expected = reference_groups(&entries);
        let actual: Vec<Vec<String>> = group(entries)
            .iter()
            .map(|g| g.members().iter().map(|m| m.path.clone()).collect())
            .collect();
        prop_assert_eq!(actual, expected);
    }
}
