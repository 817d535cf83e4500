//! Triple store for one parse session.
//!
//! Holds the triples discovered by the syntax layer, answers structural
//! queries and tracks per-triple consumption. Triples are never deleted:
//! folding one into a model object only marks it consumed, so the final
//! sweep can tell raw triples from used ones.

use oxrdf::{Literal, NamedNodeRef, Subject, Term, Triple};
use rustc_hash::FxHashMap;

struct StoredTriple {
    triple: Triple,
    consumed: bool,
}

/// Session-scoped multimap from (subject, predicate) to objects.
#[derive(Default)]
pub struct TripleStore {
    triples: Vec<StoredTriple>,
    by_subject: FxHashMap<Subject, Vec<usize>>,
    all_triples_seen: bool,
}

impl TripleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a triple to the store. Duplicates of an already stored triple are ignored.
    pub fn add(&mut self, triple: Triple) {
        if let Some(indexes) = self.by_subject.get(&triple.subject) {
            if indexes.iter().any(|i| self.triples[*i].triple == triple) {
                return;
            }
        }
        let index = self.triples.len();
        self.by_subject
            .entry(triple.subject.clone())
            .or_default()
            .push(index);
        self.triples.push(StoredTriple {
            triple,
            consumed: false,
        });
    }

    /// Marks the end of the document: after this, lax classification may run.
    #[inline]
    pub fn end_of_document(&mut self) {
        self.all_triples_seen = true;
    }

    /// Returns `true` once the syntax layer has signalled end-of-document.
    #[inline]
    pub fn all_triples_seen(&self) -> bool {
        self.all_triples_seen
    }

    /// Returns the number of stored triples, consumed or not.
    #[inline]
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    fn matching_index(
        &self,
        subject: &Subject,
        predicate: NamedNodeRef<'_>,
        filter: impl Fn(&Term) -> bool,
    ) -> Option<usize> {
        self.by_subject.get(subject)?.iter().copied().find(|i| {
            let stored = &self.triples[*i];
            !stored.consumed && stored.triple.predicate == predicate && filter(&stored.triple.object)
        })
    }

    /// Returns a resource object for the given subject and predicate.
    ///
    /// With `consume`, the matched triple is marked used; consuming an
    /// already consumed triple is a no-op.
    pub fn resource_object(
        &mut self,
        subject: &Subject,
        predicate: NamedNodeRef<'_>,
        consume: bool,
    ) -> Option<Subject> {
        let index = self.matching_index(subject, predicate, |o| !matches!(o, Term::Literal(_)))?;
        if consume {
            self.triples[index].consumed = true;
        }
        term_to_subject(&self.triples[index].triple.object)
    }

    /// Returns a literal object for the given subject and predicate.
    pub fn literal_object(
        &mut self,
        subject: &Subject,
        predicate: NamedNodeRef<'_>,
        consume: bool,
    ) -> Option<Literal> {
        let index = self.matching_index(subject, predicate, |o| matches!(o, Term::Literal(_)))?;
        if consume {
            self.triples[index].consumed = true;
        }
        if let Term::Literal(literal) = &self.triples[index].triple.object {
            Some(literal.clone())
        } else {
            None
        }
    }

    /// Non-consuming variant of [`resource_object`](Self::resource_object).
    pub fn peek_resource_object(
        &self,
        subject: &Subject,
        predicate: NamedNodeRef<'_>,
    ) -> Option<Subject> {
        let index = self.matching_index(subject, predicate, |o| !matches!(o, Term::Literal(_)))?;
        term_to_subject(&self.triples[index].triple.object)
    }

    /// Non-consuming variant of [`literal_object`](Self::literal_object).
    pub fn peek_literal_object(
        &self,
        subject: &Subject,
        predicate: NamedNodeRef<'_>,
    ) -> Option<Literal> {
        let index = self.matching_index(subject, predicate, |o| matches!(o, Term::Literal(_)))?;
        if let Term::Literal(literal) = &self.triples[index].triple.object {
            Some(literal.clone())
        } else {
            None
        }
    }

    /// Returns any unconsumed object for the given subject and predicate,
    /// resource or literal, without consuming it.
    pub fn peek_object(&self, subject: &Subject, predicate: NamedNodeRef<'_>) -> Option<Term> {
        let index = self.matching_index(subject, predicate, |_| true)?;
        Some(self.triples[index].triple.object.clone())
    }

    /// Returns `true` if an unconsumed triple with a resource object exists.
    pub fn has_resource_object(&self, subject: &Subject, predicate: NamedNodeRef<'_>) -> bool {
        self.matching_index(subject, predicate, |o| !matches!(o, Term::Literal(_)))
            .is_some()
    }

    /// Returns `true` if an unconsumed triple with a literal object exists.
    pub fn has_literal_object(&self, subject: &Subject, predicate: NamedNodeRef<'_>) -> bool {
        self.matching_index(subject, predicate, |o| matches!(o, Term::Literal(_)))
            .is_some()
    }

    /// Marks the given triple consumed if it is present. Idempotent.
    pub fn consume(&mut self, subject: &Subject, predicate: NamedNodeRef<'_>, object: &Term) {
        if let Some(indexes) = self.by_subject.get(subject) {
            for i in indexes {
                let stored = &self.triples[*i];
                if stored.triple.predicate == predicate && stored.triple.object == *object {
                    self.triples[*i].consumed = true;
                    return;
                }
            }
        }
    }

    /// Returns `true` if the given triple is stored and not yet consumed.
    pub fn is_unconsumed(&self, triple: &Triple) -> bool {
        self.by_subject
            .get(&triple.subject)
            .is_some_and(|indexes| {
                indexes
                    .iter()
                    .any(|i| !self.triples[*i].consumed && self.triples[*i].triple == *triple)
            })
    }

    /// All unconsumed triples whose subject is `subject`, in insertion order.
    pub fn unconsumed_for_subject(&self, subject: &Subject) -> Vec<Triple> {
        self.by_subject
            .get(subject)
            .map(|indexes| {
                indexes
                    .iter()
                    .filter(|i| !self.triples[**i].consumed)
                    .map(|i| self.triples[*i].triple.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// All unconsumed triples with the given predicate, in insertion order.
    pub fn unconsumed_with_predicate(&self, predicate: NamedNodeRef<'_>) -> Vec<Triple> {
        self.triples
            .iter()
            .filter(|t| !t.consumed && t.triple.predicate == predicate)
            .map(|t| t.triple.clone())
            .collect()
    }

    /// All triples that were never folded into a model object, in insertion
    /// order. This is the end-of-parse diagnostic for malformed input.
    pub fn unconsumed_triples(&self) -> Vec<Triple> {
        self.triples
            .iter()
            .filter(|t| !t.consumed)
            .map(|t| t.triple.clone())
            .collect()
    }
}

/// Converts a term into a subject, returning `None` for literals.
pub(crate) fn term_to_subject(term: &Term) -> Option<Subject> {
    match term {
        Term::NamedNode(n) => Some(n.clone().into()),
        Term::BlankNode(b) => Some(b.clone().into()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxrdf::vocab::rdf;
    use oxrdf::NamedNode;

    fn iri(suffix: &str) -> NamedNode {
        NamedNode::new_unchecked(format!("http://example.com/{suffix}"))
    }

    #[test]
    fn consumption_is_idempotent_and_hides_triples() {
        let mut store = TripleStore::new();
        let s: Subject = iri("s").into();
        store.add(Triple::new(iri("s"), rdf::TYPE.into_owned(), iri("C")));

        assert!(store.has_resource_object(&s, rdf::TYPE));
        assert_eq!(
            store.resource_object(&s, rdf::TYPE, true),
            Some(iri("C").into())
        );
        // Consumed triples are no longer visible to queries.
        assert!(!store.has_resource_object(&s, rdf::TYPE));
        assert_eq!(store.resource_object(&s, rdf::TYPE, true), None);
        // But they are still stored.
        assert_eq!(store.len(), 1);
        assert!(store.unconsumed_triples().is_empty());

        // Consuming again is a no-op, not an error.
        store.consume(&s, rdf::TYPE, &iri("C").into());
    }

    #[test]
    fn duplicate_triples_are_ignored() {
        let mut store = TripleStore::new();
        store.add(Triple::new(iri("s"), iri("p"), iri("o")));
        store.add(Triple::new(iri("s"), iri("p"), iri("o")));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn literal_and_resource_objects_are_distinguished() {
        let mut store = TripleStore::new();
        let s: Subject = iri("s").into();
        store.add(Triple::new(
            iri("s"),
            iri("p"),
            Literal::new_simple_literal("v"),
        ));

        assert!(store.has_literal_object(&s, iri("p").as_ref()));
        assert!(!store.has_resource_object(&s, iri("p").as_ref()));
        assert_eq!(store.peek_resource_object(&s, iri("p").as_ref()), None);
        assert_eq!(
            store.literal_object(&s, iri("p").as_ref(), false),
            Some(Literal::new_simple_literal("v"))
        );
    }

    #[test]
    fn end_of_document_latches() {
        let mut store = TripleStore::new();
        assert!(!store.all_triples_seen());
        store.end_of_document();
        assert!(store.all_triples_seen());
    }
}
