//! Walking of RDF-list-encoded sequences.
//!
//! RDF lists are chains of nodes linked by `rdf:first` and `rdf:rest`,
//! terminated by `rdf:nil`. Nothing guarantees a chain found in the wild is
//! well formed: the walker rejects missing elements, missing or improper
//! termination, cycles on the rest-chain, and elements that fail the
//! caller-supplied type predicate. Rejection is a routine negative answer,
//! never an error.

use crate::classify::NodeClassifier;
use crate::store::TripleStore;
use oxrdf::vocab::rdf;
use oxrdf::{Subject, Term};
use rustc_hash::FxHashSet;

/// The type predicate applied to every list element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListElementMatcher {
    ClassExpression,
    DataRange,
    /// No type constraint: any resource is an acceptable individual.
    Individual,
}

impl ListElementMatcher {
    fn matches(
        self,
        node: &Subject,
        store: &TripleStore,
        classifier: &NodeClassifier,
        strict: bool,
    ) -> bool {
        match self {
            Self::ClassExpression => {
                if strict {
                    classifier.is_class_expression_strict(node, store)
                } else {
                    classifier.is_class_expression_lax(node, store)
                }
            }
            Self::DataRange => {
                if strict {
                    classifier.is_data_range_strict(node, store)
                } else {
                    classifier.is_data_range_lax(node, store)
                }
            }
            Self::Individual => true,
        }
    }
}

/// Validates the list rooted at `root`.
///
/// Accepts iff the chain is `rdf:nil`-terminated and cycle-free, every
/// element exists and satisfies `matcher`, and the element count is at least
/// `min_len`. Any failure invalidates the whole list.
pub fn is_valid_list(
    store: &TripleStore,
    classifier: &NodeClassifier,
    root: &Subject,
    matcher: ListElementMatcher,
    strict: bool,
    min_len: usize,
) -> bool {
    let mut current = root.clone();
    let mut visited = FxHashSet::default();
    visited.insert(current.clone());
    let mut len = 0;
    loop {
        let Some(first) = store.peek_resource_object(&current, rdf::FIRST) else {
            // No element here: the list is malformed.
            return false;
        };
        if !matcher.matches(&first, store, classifier, strict) {
            // Something in the list that is not of the required type.
            return false;
        }
        len += 1;
        let Some(rest) = store.peek_resource_object(&current, rdf::REST) else {
            // Not terminated properly.
            return false;
        };
        if let Subject::NamedNode(n) = &rest {
            if n.as_ref() == rdf::NIL {
                return len >= min_len;
            }
        }
        if !visited.insert(rest.clone()) {
            // Cycle: non-terminating.
            return false;
        }
        current = rest;
    }
}

/// Enumerates the elements of the list rooted at `root` without consuming
/// anything, or returns `None` if the chain is structurally malformed.
///
/// Elements are raw terms: literal elements are legal here, since literal
/// enumerations (`DataOneOf`) use the same encoding.
pub fn elements(store: &TripleStore, root: &Subject) -> Option<Vec<Term>> {
    let mut current = root.clone();
    let mut visited = FxHashSet::default();
    visited.insert(current.clone());
    let mut items = Vec::new();
    loop {
        items.push(store.peek_object(&current, rdf::FIRST)?);
        let rest = store.peek_resource_object(&current, rdf::REST)?;
        if let Subject::NamedNode(n) = &rest {
            if n.as_ref() == rdf::NIL {
                return Some(items);
            }
        }
        if !visited.insert(rest.clone()) {
            return None;
        }
        current = rest;
    }
}

/// Marks the `rdf:first`/`rdf:rest` cells of a previously validated list
/// consumed.
pub fn consume_list_cells(store: &mut TripleStore, root: &Subject) {
    let mut current = root.clone();
    let mut visited = FxHashSet::default();
    visited.insert(current.clone());
    loop {
        let Some(first) = store.peek_object(&current, rdf::FIRST) else {
            return;
        };
        store.consume(&current, rdf::FIRST, &first);
        let Some(rest) = store.peek_resource_object(&current, rdf::REST) else {
            return;
        };
        store.consume(&current, rdf::REST, &rest.clone().into());
        if let Subject::NamedNode(n) = &rest {
            if n.as_ref() == rdf::NIL {
                return;
            }
        }
        if !visited.insert(rest.clone()) {
            return;
        }
        current = rest;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::owl;
    use oxrdf::{BlankNode, NamedNode, Triple};

    fn iri(suffix: &str) -> NamedNode {
        NamedNode::new_unchecked(format!("http://example.com/{suffix}"))
    }

    /// Builds `class_names` as declared classes chained into a list, and
    /// returns the list root.
    fn class_list(
        store: &mut TripleStore,
        classifier: &mut NodeClassifier,
        class_names: &[&str],
    ) -> Subject {
        let cells: Vec<BlankNode> = class_names.iter().map(|_| BlankNode::default()).collect();
        for (i, name) in class_names.iter().enumerate() {
            let typing = Triple::new(iri(name), rdf::TYPE.into_owned(), owl::CLASS.into_owned());
            classifier.observe(&typing);
            store.add(typing);
            store.add(Triple::new(
                cells[i].clone(),
                rdf::FIRST.into_owned(),
                iri(name),
            ));
            let rest: Term = if i + 1 < cells.len() {
                cells[i + 1].clone().into()
            } else {
                rdf::NIL.into_owned().into()
            };
            store.add(Triple::new(cells[i].clone(), rdf::REST.into_owned(), rest));
        }
        cells[0].clone().into()
    }

    #[test]
    fn well_formed_list_is_accepted() {
        let mut store = TripleStore::new();
        let mut classifier = NodeClassifier::new();
        let root = class_list(&mut store, &mut classifier, &["A", "B", "C"]);

        assert!(is_valid_list(
            &store,
            &classifier,
            &root,
            ListElementMatcher::ClassExpression,
            true,
            2
        ));
        // The minimum length is inclusive.
        assert!(is_valid_list(
            &store,
            &classifier,
            &root,
            ListElementMatcher::ClassExpression,
            true,
            3
        ));
        assert!(!is_valid_list(
            &store,
            &classifier,
            &root,
            ListElementMatcher::ClassExpression,
            true,
            4
        ));
        assert_eq!(elements(&store, &root).unwrap().len(), 3);
    }

    #[test]
    fn missing_termination_is_rejected() {
        let mut store = TripleStore::new();
        let mut classifier = NodeClassifier::new();
        let cell = BlankNode::default();
        let typing = Triple::new(iri("A"), rdf::TYPE.into_owned(), owl::CLASS.into_owned());
        classifier.observe(&typing);
        store.add(typing);
        store.add(Triple::new(cell.clone(), rdf::FIRST.into_owned(), iri("A")));
        // No rdf:rest at all.
        let root: Subject = cell.into();
        assert!(!is_valid_list(
            &store,
            &classifier,
            &root,
            ListElementMatcher::ClassExpression,
            true,
            1
        ));
        assert_eq!(elements(&store, &root), None);
    }

    #[test]
    fn cycle_is_rejected_regardless_of_length() {
        let mut store = TripleStore::new();
        let mut classifier = NodeClassifier::new();
        let a = BlankNode::default();
        let b = BlankNode::default();
        for (cell, name, rest) in [(&a, "A", &b), (&b, "B", &a)] {
            let typing = Triple::new(iri(name), rdf::TYPE.into_owned(), owl::CLASS.into_owned());
            classifier.observe(&typing);
            store.add(typing);
            store.add(Triple::new(cell.clone(), rdf::FIRST.into_owned(), iri(name)));
            store.add(Triple::new(
                cell.clone(),
                rdf::REST.into_owned(),
                rest.clone(),
            ));
        }
        let root: Subject = a.into();
        assert!(!is_valid_list(
            &store,
            &classifier,
            &root,
            ListElementMatcher::ClassExpression,
            true,
            1
        ));
        assert_eq!(elements(&store, &root), None);
    }

    #[test]
    fn one_non_matching_element_invalidates_the_whole_list() {
        let mut store = TripleStore::new();
        let mut classifier = NodeClassifier::new();
        let root = class_list(&mut store, &mut classifier, &["A", "B"]);
        // A second chain whose last element is untyped: A, untyped.
        let head = BlankNode::default();
        let tail = BlankNode::default();
        store.add(Triple::new(head.clone(), rdf::FIRST.into_owned(), iri("A")));
        store.add(Triple::new(
            head.clone(),
            rdf::REST.into_owned(),
            tail.clone(),
        ));
        store.add(Triple::new(
            tail.clone(),
            rdf::FIRST.into_owned(),
            iri("untyped"),
        ));
        store.add(Triple::new(
            tail,
            rdf::REST.into_owned(),
            rdf::NIL.into_owned(),
        ));
        let bad_root: Subject = head.into();

        // The original list still validates.
        assert!(is_valid_list(
            &store,
            &classifier,
            &root,
            ListElementMatcher::ClassExpression,
            true,
            2
        ));
        // The list with one untyped element does not, strictly.
        assert!(!is_valid_list(
            &store,
            &classifier,
            &bad_root,
            ListElementMatcher::ClassExpression,
            true,
            2
        ));
        // With no type constraint it is fine.
        assert!(is_valid_list(
            &store,
            &classifier,
            &bad_root,
            ListElementMatcher::Individual,
            true,
            2
        ));
    }

    #[test]
    fn consume_list_cells_marks_the_chain_used() {
        let mut store = TripleStore::new();
        let mut classifier = NodeClassifier::new();
        let root = class_list(&mut store, &mut classifier, &["A", "B"]);
        consume_list_cells(&mut store, &root);
        // Only the two rdf:type triples remain raw.
        assert_eq!(store.unconsumed_triples().len(), 2);
    }
}
