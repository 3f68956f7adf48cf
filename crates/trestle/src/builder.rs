//! Normalizing construction of diagram trees.
//!
//! Callers can nest these functions however they like; the output is always
//! the canonical minimal tree. Nested same-kind constructs are spliced in
//! place, duplicate leaf options are dropped, and a composite that ends up
//! with a single child collapses to that child. The layout engine relies on
//! the invariants established here (see [`Node`] variant docs).

use indexmap::IndexSet;
use log::trace;

use trestle_core::node::{Leaf, Node};

use crate::error::TrestleError;

/// Wraps text content as a leaf node.
pub fn leaf(text: impl Into<String>) -> Node {
    Node::Leaf(Leaf::new(text))
}

/// Ordered composition of the given items.
///
/// Any item that is itself a `Sequence` is spliced into the list in place,
/// recursively. A single surviving item is returned unchanged. Fails with
/// [`TrestleError::InvalidNode`] when called with no items.
pub fn sequence<I, T>(items: I) -> Result<Node, TrestleError>
where
    I: IntoIterator<Item = T>,
    T: Into<Node>,
{
    let mut children = Vec::new();
    for item in items {
        splice_sequence(item.into(), &mut children);
    }
    if children.is_empty() {
        return Err(TrestleError::InvalidNode(
            "sequence requires at least one item".into(),
        ));
    }
    Ok(collapse_sequence(children))
}

/// Alternation over the given options.
///
/// Any option that is itself a `Choice` is spliced into the list in place,
/// recursively. A leaf option whose text already appeared is dropped (first
/// occurrence wins, order otherwise preserved). A single surviving option
/// is returned unchanged. Fails with [`TrestleError::InvalidNode`] when
/// called with no options.
pub fn choice<I, T>(options: I) -> Result<Node, TrestleError>
where
    I: IntoIterator<Item = T>,
    T: Into<Node>,
{
    let mut flattened = Vec::new();
    for option in options {
        splice_choice(option.into(), &mut flattened);
    }
    if flattened.is_empty() {
        return Err(TrestleError::InvalidNode(
            "choice requires at least one option".into(),
        ));
    }
    Ok(collapse_choice(flattened))
}

/// Zero-or-one traversal: a choice between the bypass marker and `item`.
pub fn optional(item: impl Into<Node>) -> Node {
    let mut options = vec![Node::bypass_marker()];
    splice_choice(item.into(), &mut options);
    collapse_choice(options)
}

/// One-or-more traversal of `item`.
pub fn repeat_one_or_more(item: impl Into<Node>) -> Node {
    Node::Repeat(Box::new(item.into()))
}

/// Zero-or-more traversal: an optional one-or-more repetition.
pub fn repeat_zero_or_more(item: impl Into<Node>) -> Node {
    optional(repeat_one_or_more(item))
}

fn splice_sequence(node: Node, out: &mut Vec<Node>) {
    match node {
        Node::Sequence(children) => {
            for child in children {
                splice_sequence(child, out);
            }
        }
        other => out.push(other),
    }
}

fn splice_choice(node: Node, out: &mut Vec<Node>) {
    match node {
        Node::Choice(options) => {
            for option in options {
                splice_choice(option, out);
            }
        }
        other => out.push(other),
    }
}

fn collapse_sequence(mut children: Vec<Node>) -> Node {
    if children.len() == 1 {
        children.remove(0)
    } else {
        Node::Sequence(children)
    }
}

/// Dedup leaf options by text, then collapse a single survivor.
fn collapse_choice(flattened: Vec<Node>) -> Node {
    let mut seen: IndexSet<String> = IndexSet::new();
    let mut options = Vec::with_capacity(flattened.len());
    for node in flattened {
        match node {
            Node::Leaf(leaf) => {
                if seen.insert(leaf.text().to_owned()) {
                    options.push(Node::Leaf(leaf));
                } else {
                    trace!(text = leaf.text(); "dropping duplicate choice option");
                }
            }
            other => options.push(other),
        }
    }
    if options.len() == 1 {
        options.remove(0)
    } else {
        Node::Choice(options)
    }
}

#[cfg(test)]
mod tests {
    use indexmap::IndexSet;
    use proptest::prelude::*;

    use super::*;

    /// Checks the canonical-form invariants the builder guarantees.
    fn assert_canonical(node: &Node) {
        match node {
            Node::Leaf(_) => {}
            Node::Sequence(children) => {
                assert!(children.len() >= 2, "sequence with {} children", children.len());
                for child in children {
                    assert!(
                        !matches!(child, Node::Sequence(_)),
                        "nested sequence survived flattening"
                    );
                    assert_canonical(child);
                }
            }
            Node::Choice(options) => {
                assert!(options.len() >= 2, "choice with {} options", options.len());
                let mut texts = IndexSet::new();
                for option in options {
                    assert!(
                        !matches!(option, Node::Choice(_)),
                        "nested choice survived flattening"
                    );
                    if let Node::Leaf(leaf) = option {
                        assert!(
                            texts.insert(leaf.text().to_owned()),
                            "duplicate leaf option {:?}",
                            leaf.text()
                        );
                    }
                    assert_canonical(option);
                }
            }
            Node::Repeat(body) => assert_canonical(body),
        }
    }

    #[test]
    fn test_choice_single_option_returns_it_unchanged() {
        let node = choice(["x"]).unwrap();
        assert_eq!(node, leaf("x"));

        let composite = sequence(["a", "b"]).unwrap();
        let node = choice([composite.clone()]).unwrap();
        assert_eq!(node, composite);
    }

    #[test]
    fn test_choice_flattens_nested_choices() {
        let nested = choice([choice(["a", "b"]).unwrap(), leaf("c")]).unwrap();
        let flat = choice(["a", "b", "c"]).unwrap();
        assert_eq!(nested, flat);
        assert_eq!(
            nested,
            Node::Choice(vec![leaf("a"), leaf("b"), leaf("c")])
        );
    }

    #[test]
    fn test_choice_flattens_recursively() {
        let deep = choice([
            choice([choice(["a", "b"]).unwrap(), leaf("c")]).unwrap(),
            leaf("d"),
        ])
        .unwrap();
        assert_eq!(deep, choice(["a", "b", "c", "d"]).unwrap());
    }

    #[test]
    fn test_choice_dedups_leaves_by_text() {
        assert_eq!(choice(["x", "x"]).unwrap(), leaf("x"));

        let node = choice(["x", "y", "x", "z", "y"]).unwrap();
        assert_eq!(node, Node::Choice(vec![leaf("x"), leaf("y"), leaf("z")]));
    }

    #[test]
    fn test_choice_dedup_crosses_splice_boundaries() {
        let node = choice([choice(["x", "y"]).unwrap(), leaf("x")]).unwrap();
        assert_eq!(node, Node::Choice(vec![leaf("x"), leaf("y")]));
    }

    #[test]
    fn test_choice_keeps_equal_composites() {
        // Only leaf options are deduplicated; identical composites both stay.
        let a = sequence(["p", "q"]).unwrap();
        let node = choice([a.clone(), a.clone()]).unwrap();
        assert_eq!(node, Node::Choice(vec![a.clone(), a]));
    }

    #[test]
    fn test_choice_empty_is_invalid() {
        let err = choice(Vec::<Node>::new()).unwrap_err();
        assert!(matches!(err, TrestleError::InvalidNode(_)));
    }

    #[test]
    fn test_sequence_flattens_and_collapses() {
        let nested = sequence([sequence(["a", "b"]).unwrap(), leaf("c")]).unwrap();
        assert_eq!(nested, sequence(["a", "b", "c"]).unwrap());

        let single = sequence(["x"]).unwrap();
        assert_eq!(single, leaf("x"));
    }

    #[test]
    fn test_sequence_does_not_splice_choices() {
        let alt = choice(["a", "b"]).unwrap();
        let node = sequence([alt.clone(), leaf("c")]).unwrap();
        assert_eq!(node, Node::Sequence(vec![alt, leaf("c")]));
    }

    #[test]
    fn test_sequence_empty_is_invalid() {
        let err = sequence(Vec::<Node>::new()).unwrap_err();
        assert!(matches!(err, TrestleError::InvalidNode(_)));
    }

    #[test]
    fn test_optional_is_bypass_choice() {
        let node = optional("x");
        assert_eq!(node, Node::Choice(vec![Node::bypass_marker(), leaf("x")]));
        assert_eq!(node, choice([Node::bypass_marker(), leaf("x")]).unwrap());
    }

    #[test]
    fn test_optional_of_optional_collapses_markers() {
        // The inner choice splices open and the second marker deduplicates.
        let node = optional(optional("x"));
        assert_eq!(node, optional("x"));
    }

    #[test]
    fn test_repeat_one_or_more_wraps_single_body() {
        let node = repeat_one_or_more("x");
        assert_eq!(node, Node::Repeat(Box::new(leaf("x"))));
    }

    #[test]
    fn test_repeat_zero_or_more_desugars() {
        assert_eq!(
            repeat_zero_or_more("x"),
            optional(repeat_one_or_more("x"))
        );
        assert_eq!(
            repeat_zero_or_more("x"),
            Node::Choice(vec![
                Node::bypass_marker(),
                Node::Repeat(Box::new(leaf("x"))),
            ])
        );
    }

    /// Trees produced exclusively through the builder functions.
    fn arb_built() -> impl Strategy<Value = Node> {
        let leaves = "[a-d]{1,2}".prop_map(leaf);
        leaves.prop_recursive(4, 24, 3, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 1..4)
                    .prop_map(|items| sequence(items).unwrap()),
                prop::collection::vec(inner.clone(), 1..4)
                    .prop_map(|items| choice(items).unwrap()),
                inner.clone().prop_map(optional),
                inner.clone().prop_map(repeat_one_or_more),
                inner.prop_map(repeat_zero_or_more),
            ]
        })
    }

    proptest! {
        #[test]
        fn built_trees_are_canonical(node in arb_built()) {
            assert_canonical(&node);
        }

        #[test]
        fn wrapping_a_built_tree_is_identity(node in arb_built()) {
            prop_assert_eq!(&sequence([node.clone()]).unwrap(), &node);
            prop_assert_eq!(&choice([node.clone()]).unwrap(), &node);
        }

        #[test]
        fn splicing_matches_direct_construction(
            a in arb_built(),
            b in arb_built(),
            c in arb_built(),
        ) {
            prop_assert_eq!(
                sequence([sequence([a.clone(), b.clone()]).unwrap(), c.clone()]).unwrap(),
                sequence([a.clone(), b.clone(), c.clone()]).unwrap()
            );
            prop_assert_eq!(
                choice([choice([a.clone(), b.clone()]).unwrap(), c.clone()]).unwrap(),
                choice([a, b, c]).unwrap()
            );
        }
    }
}
