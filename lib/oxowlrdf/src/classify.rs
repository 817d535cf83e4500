//! Syntactic categorization of graph nodes.
//!
//! The classifier accumulates typing evidence while triples stream in and
//! answers category queries in two modes. Strict answers require explicit,
//! conflict-free evidence; lax answers fall back to classification by
//! exclusion and are only meaningful once the whole graph is known. Evidence
//! is never overwritten: every answer is re-derived from the sets, so a node
//! with conflicting typing fails both strict checks instead of silently
//! landing in one category.

use crate::store::TripleStore;
use crate::vocab::owl;
use oxrdf::vocab::{rdf, rdfs, xsd};
use oxrdf::{NamedNode, NamedNodeRef, Subject, Term, Triple};
use rustc_hash::FxHashSet;

const OWL_NS: &str = "http://www.w3.org/2002/07/owl#";
const RDF_NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
const RDFS_NS: &str = "http://www.w3.org/2000/01/rdf-schema#";
const XSD_NS: &str = "http://www.w3.org/2001/XMLSchema#";

/// The syntactic category of a graph node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeCategory {
    ClassExpression,
    DataRange,
    ObjectProperty,
    DataProperty,
    AnnotationProperty,
    Individual,
    Unknown,
}

/// Session-scoped classification evidence.
#[derive(Default)]
pub struct NodeClassifier {
    class_expressions: FxHashSet<Subject>,
    data_ranges: FxHashSet<Subject>,
    object_properties: FxHashSet<Subject>,
    data_properties: FxHashSet<Subject>,
    annotation_properties: FxHashSet<Subject>,
    individuals: FxHashSet<Subject>,
    /// Subjects of owl:intersectionOf / owl:unionOf: class expressions or
    /// data ranges, resolved at query time.
    connectives: FxHashSet<Subject>,
    /// Subjects of owl:oneOf: enumerations of individuals or of literals,
    /// resolved at query time by probing the first list element.
    enumerations: FxHashSet<Subject>,
}

impl NodeClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the typing evidence carried by one triple.
    pub fn observe(&mut self, triple: &Triple) {
        let subject = &triple.subject;
        let predicate = triple.predicate.as_ref();

        if predicate == rdf::TYPE {
            if let Term::NamedNode(object) = &triple.object {
                self.observe_type(subject, object.as_ref());
            }
            return;
        }

        if predicate == owl::INTERSECTION_OF || predicate == owl::UNION_OF {
            self.connectives.insert(subject.clone());
        } else if predicate == owl::ONE_OF {
            self.enumerations.insert(subject.clone());
        } else if predicate == owl::COMPLEMENT_OF {
            self.class_expressions.insert(subject.clone());
            if let Some(object) = crate::store::term_to_subject(&triple.object) {
                self.class_expressions.insert(object);
            }
        } else if predicate == owl::DATATYPE_COMPLEMENT_OF {
            self.data_ranges.insert(subject.clone());
            if let Some(object) = crate::store::term_to_subject(&triple.object) {
                self.data_ranges.insert(object);
            }
        } else if predicate == owl::SOME_VALUES_FROM
            || predicate == owl::ALL_VALUES_FROM
            || predicate == owl::ON_PROPERTY
            || predicate == owl::HAS_VALUE
            || predicate == owl::HAS_SELF
        {
            // Restriction-shaped usage.
            self.class_expressions.insert(subject.clone());
        } else if predicate == owl::ON_CLASS {
            self.class_expressions.insert(subject.clone());
            if let Some(object) = crate::store::term_to_subject(&triple.object) {
                self.class_expressions.insert(object);
            }
        } else if predicate == owl::ON_DATA_RANGE {
            self.class_expressions.insert(subject.clone());
            if let Some(object) = crate::store::term_to_subject(&triple.object) {
                self.data_ranges.insert(object);
            }
        } else if predicate == owl::ON_DATATYPE || predicate == owl::WITH_RESTRICTIONS {
            self.data_ranges.insert(subject.clone());
        } else if predicate == owl::INVERSE_OF {
            self.object_properties.insert(subject.clone());
            if let Some(object) = crate::store::term_to_subject(&triple.object) {
                self.object_properties.insert(object);
            }
        } else if predicate == owl::SAME_AS || predicate == owl::DIFFERENT_FROM {
            self.individuals.insert(subject.clone());
            if let Some(object) = crate::store::term_to_subject(&triple.object) {
                self.individuals.insert(object);
            }
        }
    }

    fn observe_type(&mut self, subject: &Subject, object: NamedNodeRef<'_>) {
        if object == owl::CLASS || object == owl::RESTRICTION || object == rdfs::CLASS {
            self.class_expressions.insert(subject.clone());
        } else if object == rdfs::DATATYPE {
            self.data_ranges.insert(subject.clone());
        } else if object == owl::OBJECT_PROPERTY
            || object == owl::INVERSE_FUNCTIONAL_PROPERTY
            || object == owl::TRANSITIVE_PROPERTY
            || object == owl::SYMMETRIC_PROPERTY
            || object == owl::ASYMMETRIC_PROPERTY
            || object == owl::REFLEXIVE_PROPERTY
            || object == owl::IRREFLEXIVE_PROPERTY
        {
            // owl:FunctionalProperty is deliberately absent: it applies to
            // object and data properties alike and carries no evidence.
            self.object_properties.insert(subject.clone());
        } else if object == owl::DATATYPE_PROPERTY {
            self.data_properties.insert(subject.clone());
        } else if object == owl::ANNOTATION_PROPERTY {
            self.annotation_properties.insert(subject.clone());
        } else if object == owl::NAMED_INDIVIDUAL || object == owl::THING {
            self.individuals.insert(subject.clone());
        } else if !is_reserved_vocabulary(object) {
            // `s rdf:type C` with C outside the reserved vocabularies types
            // s as an individual and uses C as a class.
            self.individuals.insert(subject.clone());
            self.class_expressions.insert(object.into_owned().into());
        }
    }

    /// Positive class-expression evidence, independent of mode.
    pub fn positively_class_expression(&self, node: &Subject, store: &TripleStore) -> bool {
        if self.class_expressions.contains(node) {
            return true;
        }
        if let Subject::NamedNode(n) = node {
            if n.as_ref() == owl::THING || n.as_ref() == owl::NOTHING {
                return true;
            }
        }
        if self.connectives.contains(node) && !self.data_ranges.contains(node) {
            return true;
        }
        self.enumerations.contains(node) && !self.enumerates_literals(node, store)
    }

    /// Positive data-range evidence, independent of mode.
    pub fn positively_data_range(&self, node: &Subject, store: &TripleStore) -> bool {
        if self.data_ranges.contains(node) {
            return true;
        }
        if let Subject::NamedNode(n) = node {
            if is_builtin_datatype(n) {
                return true;
            }
        }
        self.enumerations.contains(node) && self.enumerates_literals(node, store)
    }

    fn enumerates_literals(&self, node: &Subject, store: &TripleStore) -> bool {
        store
            .peek_resource_object(node, owl::ONE_OF)
            .is_some_and(|list| store.has_literal_object(&list, rdf::FIRST))
    }

    /// A node is strictly a class expression if it is positively one and not
    /// simultaneously positively a data range.
    pub fn is_class_expression_strict(&self, node: &Subject, store: &TripleStore) -> bool {
        self.positively_class_expression(node, store) && !self.positively_data_range(node, store)
    }

    /// Lax mode treats everything not positively a data range as a class
    /// expression once the whole graph is known.
    pub fn is_class_expression_lax(&self, node: &Subject, store: &TripleStore) -> bool {
        self.positively_class_expression(node, store)
            || (store.all_triples_seen() && !self.positively_data_range(node, store))
    }

    pub fn is_data_range_strict(&self, node: &Subject, store: &TripleStore) -> bool {
        self.positively_data_range(node, store) && !self.positively_class_expression(node, store)
    }

    /// Lax mode treats everything not positively a class expression as a data
    /// range. Never defaults before end-of-document.
    pub fn is_data_range_lax(&self, node: &Subject, store: &TripleStore) -> bool {
        self.positively_data_range(node, store)
            || (store.all_triples_seen() && !self.positively_class_expression(node, store))
    }

    pub fn is_object_property_strict(&self, node: &Subject) -> bool {
        self.object_properties.contains(node)
            && !self.data_properties.contains(node)
            && !self.annotation_properties.contains(node)
    }

    pub fn is_object_property_lax(&self, node: &Subject) -> bool {
        self.object_properties.contains(node)
    }

    pub fn is_data_property_strict(&self, node: &Subject) -> bool {
        self.data_properties.contains(node)
            && !self.object_properties.contains(node)
            && !self.annotation_properties.contains(node)
    }

    pub fn is_data_property_lax(&self, node: &Subject) -> bool {
        self.data_properties.contains(node)
    }

    pub fn is_annotation_property_strict(&self, node: &Subject) -> bool {
        self.annotation_properties.contains(node)
            && !self.object_properties.contains(node)
            && !self.data_properties.contains(node)
    }

    pub fn is_annotation_property(&self, node: &Subject) -> bool {
        self.annotation_properties.contains(node)
    }

    pub fn is_individual(&self, node: &Subject) -> bool {
        self.individuals.contains(node)
    }

    /// The strict category of a node, or `Unknown` if no strict criteria hold.
    pub fn category(&self, node: &Subject, store: &TripleStore) -> NodeCategory {
        if self.is_class_expression_strict(node, store) {
            NodeCategory::ClassExpression
        } else if self.is_data_range_strict(node, store) {
            NodeCategory::DataRange
        } else if self.is_object_property_strict(node) {
            NodeCategory::ObjectProperty
        } else if self.is_data_property_strict(node) {
            NodeCategory::DataProperty
        } else if self.is_annotation_property_strict(node) {
            NodeCategory::AnnotationProperty
        } else if self.is_individual(node) {
            NodeCategory::Individual
        } else {
            NodeCategory::Unknown
        }
    }

    /// Strict non-negative-integer check: the literal must be explicitly
    /// typed `xsd:nonNegativeInteger` and lexically valid.
    pub fn is_non_negative_integer_strict(
        &self,
        store: &TripleStore,
        node: &Subject,
        predicate: NamedNodeRef<'_>,
    ) -> bool {
        store
            .peek_literal_object(node, predicate)
            .is_some_and(|literal| {
                literal.datatype() == xsd::NON_NEGATIVE_INTEGER
                    && literal.value().parse::<u64>().is_ok()
            })
    }

    /// Lax non-negative-integer check: any lexically valid integer literal
    /// passes, whatever its declared datatype.
    pub fn is_non_negative_integer_lax(
        &self,
        store: &TripleStore,
        node: &Subject,
        predicate: NamedNodeRef<'_>,
    ) -> bool {
        store
            .peek_literal_object(node, predicate)
            .is_some_and(|literal| literal.value().trim().parse::<i64>().is_ok())
    }

    /// Reads and consumes a cardinality value. Malformed integer literals
    /// degrade to 0 instead of failing the parse.
    pub fn translate_cardinality(
        &self,
        store: &mut TripleStore,
        node: &Subject,
        predicate: NamedNodeRef<'_>,
    ) -> u32 {
        store
            .literal_object(node, predicate, true)
            .and_then(|literal| literal.value().trim().parse::<u32>().ok())
            .unwrap_or(0)
    }
}

/// Returns `true` for IRIs of the RDF, RDFS, XSD and OWL namespaces.
pub(crate) fn is_reserved_vocabulary(iri: NamedNodeRef<'_>) -> bool {
    let iri = iri.as_str();
    iri.starts_with(OWL_NS)
        || iri.starts_with(RDF_NS)
        || iri.starts_with(RDFS_NS)
        || iri.starts_with(XSD_NS)
}

/// Returns `true` for datatype IRIs that are data ranges without declaration.
pub(crate) fn is_builtin_datatype(iri: &NamedNode) -> bool {
    iri.as_str().starts_with(XSD_NS)
        || iri.as_ref() == rdfs::LITERAL
        || iri.as_ref() == rdf::LANG_STRING
        || iri.as_ref() == rdf::XML_LITERAL
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxrdf::Literal;

    fn iri(suffix: &str) -> NamedNode {
        NamedNode::new_unchecked(format!("http://example.com/{suffix}"))
    }

    fn typed(store: &mut TripleStore, classifier: &mut NodeClassifier, s: &str, t: NamedNodeRef<'_>) {
        let triple = Triple::new(iri(s), rdf::TYPE.into_owned(), t.into_owned());
        classifier.observe(&triple);
        store.add(triple);
    }

    #[test]
    fn strict_classification_requires_conflict_free_evidence() {
        let mut store = TripleStore::new();
        let mut classifier = NodeClassifier::new();
        typed(&mut store, &mut classifier, "C", owl::CLASS);
        typed(&mut store, &mut classifier, "Both", owl::CLASS);
        typed(&mut store, &mut classifier, "Both", rdfs::DATATYPE);

        let c: Subject = iri("C").into();
        let both: Subject = iri("Both").into();
        assert!(classifier.is_class_expression_strict(&c, &store));
        assert!(!classifier.is_data_range_strict(&c, &store));
        // Conflicting evidence fails both strict checks: no node is ever
        // strictly in two mutually exclusive categories.
        assert!(!classifier.is_class_expression_strict(&both, &store));
        assert!(!classifier.is_data_range_strict(&both, &store));
    }

    #[test]
    fn lax_classification_waits_for_end_of_document() {
        let mut store = TripleStore::new();
        let classifier = NodeClassifier::new();
        let unknown: Subject = iri("unknown").into();

        assert!(!classifier.is_class_expression_lax(&unknown, &store));
        assert!(!classifier.is_data_range_lax(&unknown, &store));
        store.end_of_document();
        assert!(classifier.is_class_expression_lax(&unknown, &store));
        assert!(classifier.is_data_range_lax(&unknown, &store));
    }

    #[test]
    fn builtin_datatypes_are_data_ranges() {
        let store = TripleStore::new();
        let classifier = NodeClassifier::new();
        let int: Subject = xsd::INTEGER.into_owned().into();
        assert!(classifier.is_data_range_strict(&int, &store));
        assert!(!classifier.is_class_expression_strict(&int, &store));
    }

    #[test]
    fn literal_enumerations_classify_as_data_ranges() {
        let mut store = TripleStore::new();
        let mut classifier = NodeClassifier::new();
        let e = oxrdf::BlankNode::default();
        let list = oxrdf::BlankNode::default();
        let one_of = Triple::new(e.clone(), owl::ONE_OF.into_owned(), list.clone());
        classifier.observe(&one_of);
        store.add(one_of);
        store.add(Triple::new(
            list.clone(),
            rdf::FIRST.into_owned(),
            Literal::new_simple_literal("a"),
        ));
        store.add(Triple::new(list, rdf::REST.into_owned(), rdf::NIL.into_owned()));

        let e: Subject = e.into();
        assert!(classifier.is_data_range_strict(&e, &store));
        assert!(!classifier.is_class_expression_strict(&e, &store));
    }

    #[test]
    fn integer_literal_checks() {
        let mut store = TripleStore::new();
        let classifier = NodeClassifier::new();
        let r = iri("r");
        let s: Subject = r.clone().into();
        store.add(Triple::new(
            r.clone(),
            owl::CARDINALITY.into_owned(),
            Literal::new_typed_literal("2", xsd::INTEGER),
        ));

        // Strict requires the exact datatype.
        assert!(!classifier.is_non_negative_integer_strict(&store, &s, owl::CARDINALITY));
        assert!(classifier.is_non_negative_integer_lax(&store, &s, owl::CARDINALITY));
        assert_eq!(
            classifier.translate_cardinality(&mut store, &s, owl::CARDINALITY),
            2
        );

        // Malformed integers degrade to 0.
        store.add(Triple::new(
            r,
            owl::MIN_CARDINALITY.into_owned(),
            Literal::new_typed_literal("two", xsd::NON_NEGATIVE_INTEGER),
        ));
        assert!(!classifier.is_non_negative_integer_strict(&store, &s, owl::MIN_CARDINALITY));
        assert_eq!(
            classifier.translate_cardinality(&mut store, &s, owl::MIN_CARDINALITY),
            0
        );
    }
}
