//! Translation of classified graph nodes into structured model objects.
//!
//! Every node is translated at most once per session: the caches memoize the
//! produced [`Rc`] so all axioms referencing a node share one object. An
//! explicit in-progress marker breaks infinite recursion on cyclic anonymous
//! structures; re-entering a node mid-translation yields a named placeholder
//! and the resolved object replaces it in the cache for later references.

use crate::annotation::AnnotationValue;
use crate::classify::NodeClassifier;
use crate::entity::{DataProperty, Individual, ObjectProperty, OwlClass};
use crate::expression::{
    ClassExpression, DataRange, FacetRestriction, ObjectPropertyExpression,
};
use crate::list;
use crate::store::{term_to_subject, TripleStore};
use crate::vocab::{facet, owl};
use oxrdf::vocab::{rdf, rdfs};
use oxrdf::{NamedNodeRef, Subject, Term};
use rustc_hash::FxHashMap;
use std::rc::Rc;

enum CacheEntry<T> {
    /// Translation of this node is on the stack right now.
    InProgress,
    Done(Rc<T>),
}

/// Session-scoped memoization caches for the structural categories.
#[derive(Default)]
pub(crate) struct Translators {
    strict: bool,
    class_expressions: FxHashMap<Subject, CacheEntry<ClassExpression>>,
    data_ranges: FxHashMap<Subject, CacheEntry<DataRange>>,
    object_properties: FxHashMap<Subject, CacheEntry<ObjectPropertyExpression>>,
}

impl Translators {
    pub fn new(strict: bool) -> Self {
        Self {
            strict,
            ..Self::default()
        }
    }

    /// Translates a node already established to be a class expression.
    pub fn class_expression(
        &mut self,
        store: &mut TripleStore,
        classifier: &NodeClassifier,
        node: &Subject,
    ) -> Rc<ClassExpression> {
        match self.class_expressions.get(node) {
            Some(CacheEntry::Done(expression)) => return Rc::clone(expression),
            Some(CacheEntry::InProgress) => {
                return Rc::new(match node {
                    Subject::NamedNode(n) => ClassExpression::Class(OwlClass::new(n.clone())),
                    _ => ClassExpression::Class(OwlClass::new(owl::THING.into_owned())),
                });
            }
            None => {}
        }
        self.class_expressions
            .insert(node.clone(), CacheEntry::InProgress);
        let expression = Rc::new(self.build_class_expression(store, classifier, node));
        self.class_expressions
            .insert(node.clone(), CacheEntry::Done(Rc::clone(&expression)));
        expression
    }

    fn build_class_expression(
        &mut self,
        store: &mut TripleStore,
        classifier: &NodeClassifier,
        node: &Subject,
    ) -> ClassExpression {
        if let Subject::NamedNode(n) = node {
            return ClassExpression::Class(OwlClass::new(n.clone()));
        }

        // Fold the typing triple of the anonymous node, if any.
        store.consume(node, rdf::TYPE, &owl::CLASS.into_owned().into());
        store.consume(node, rdf::TYPE, &owl::RESTRICTION.into_owned().into());

        if let Some(property) = store.resource_object(node, owl::ON_PROPERTY, true) {
            return self.build_restriction(store, classifier, node, &property);
        }
        if let Some(operands) =
            self.class_expression_list(store, classifier, node, owl::INTERSECTION_OF)
        {
            return ClassExpression::ObjectIntersectionOf(operands);
        }
        if let Some(operands) = self.class_expression_list(store, classifier, node, owl::UNION_OF) {
            return ClassExpression::ObjectUnionOf(operands);
        }
        if let Some(operand) = store.resource_object(node, owl::COMPLEMENT_OF, true) {
            return ClassExpression::ObjectComplementOf(self.class_expression(
                store, classifier, &operand,
            ));
        }
        if let Some(root) = store.peek_resource_object(node, owl::ONE_OF) {
            if let Some(elements) = list::elements(store, &root) {
                store.consume(node, owl::ONE_OF, &root.clone().into());
                list::consume_list_cells(store, &root);
                let individuals = elements
                    .iter()
                    .filter_map(term_to_subject)
                    .map(|e| individual(&e))
                    .collect();
                return ClassExpression::ObjectOneOf(individuals);
            }
        }
        // Nothing structurally recognizable: the most permissive reading.
        ClassExpression::Class(OwlClass::new(owl::THING.into_owned()))
    }

    fn class_expression_list(
        &mut self,
        store: &mut TripleStore,
        classifier: &NodeClassifier,
        node: &Subject,
        predicate: NamedNodeRef<'_>,
    ) -> Option<Vec<Rc<ClassExpression>>> {
        let root = store.peek_resource_object(node, predicate)?;
        let elements = list::elements(store, &root)?;
        store.consume(node, predicate, &root.clone().into());
        list::consume_list_cells(store, &root);
        Some(
            elements
                .iter()
                .filter_map(term_to_subject)
                .map(|e| self.class_expression(store, classifier, &e))
                .collect(),
        )
    }

    fn build_restriction(
        &mut self,
        store: &mut TripleStore,
        classifier: &NodeClassifier,
        node: &Subject,
        property: &Subject,
    ) -> ClassExpression {
        if let Some(filler) = store.resource_object(node, owl::SOME_VALUES_FROM, true) {
            return if is_data_restriction(store, classifier, property, Some(&filler)) {
                ClassExpression::DataSomeValuesFrom {
                    property: data_property(property),
                    filler: self.data_range(store, classifier, &filler),
                }
            } else {
                ClassExpression::ObjectSomeValuesFrom {
                    property: self.object_property(store, property),
                    filler: self.class_expression(store, classifier, &filler),
                }
            };
        }
        if let Some(filler) = store.resource_object(node, owl::ALL_VALUES_FROM, true) {
            return if is_data_restriction(store, classifier, property, Some(&filler)) {
                ClassExpression::DataAllValuesFrom {
                    property: data_property(property),
                    filler: self.data_range(store, classifier, &filler),
                }
            } else {
                ClassExpression::ObjectAllValuesFrom {
                    property: self.object_property(store, property),
                    filler: self.class_expression(store, classifier, &filler),
                }
            };
        }
        if let Some(value) = store.literal_object(node, owl::HAS_VALUE, true) {
            return ClassExpression::DataHasValue {
                property: data_property(property),
                value,
            };
        }
        if let Some(value) = store.resource_object(node, owl::HAS_VALUE, true) {
            return ClassExpression::ObjectHasValue {
                property: self.object_property(store, property),
                individual: individual(&value),
            };
        }
        if store.literal_object(node, owl::HAS_SELF, true).is_some() {
            return ClassExpression::ObjectHasSelf(self.object_property(store, property));
        }

        for (exact, min, max) in [
            (owl::CARDINALITY, owl::MIN_CARDINALITY, owl::MAX_CARDINALITY),
            (
                owl::QUALIFIED_CARDINALITY,
                owl::MIN_QUALIFIED_CARDINALITY,
                owl::MAX_QUALIFIED_CARDINALITY,
            ),
        ] {
            for (predicate, kind) in [
                (exact, CardinalityKind::Exact),
                (min, CardinalityKind::Min),
                (max, CardinalityKind::Max),
            ] {
                if store.has_literal_object(node, predicate) {
                    // Strict mode requires an exactly typed, lexically valid
                    // cardinality value; lax mode lets any literal through
                    // and degrades malformed ones to 0.
                    if self.strict
                        && !classifier.is_non_negative_integer_strict(store, node, predicate)
                    {
                        continue;
                    }
                    return self.build_cardinality(store, classifier, node, property, predicate, kind);
                }
            }
        }

        // owl:onProperty with no recognizable restriction triple.
        ClassExpression::Class(OwlClass::new(owl::THING.into_owned()))
    }

    fn build_cardinality(
        &mut self,
        store: &mut TripleStore,
        classifier: &NodeClassifier,
        node: &Subject,
        property: &Subject,
        predicate: NamedNodeRef<'_>,
        kind: CardinalityKind,
    ) -> ClassExpression {
        let cardinality = classifier.translate_cardinality(store, node, predicate);
        let data_filler = store.resource_object(node, owl::ON_DATA_RANGE, true);
        let class_filler = if data_filler.is_none() {
            store.resource_object(node, owl::ON_CLASS, true)
        } else {
            None
        };

        if data_filler.is_some()
            || (class_filler.is_none() && is_data_restriction(store, classifier, property, None))
        {
            let property = data_property(property);
            let filler = data_filler.map(|f| self.data_range(store, classifier, &f));
            return match kind {
                CardinalityKind::Exact => ClassExpression::DataExactCardinality {
                    cardinality,
                    property,
                    filler,
                },
                CardinalityKind::Min => ClassExpression::DataMinCardinality {
                    cardinality,
                    property,
                    filler,
                },
                CardinalityKind::Max => ClassExpression::DataMaxCardinality {
                    cardinality,
                    property,
                    filler,
                },
            };
        }

        let property = self.object_property(store, property);
        let filler = class_filler.map(|f| self.class_expression(store, classifier, &f));
        match kind {
            CardinalityKind::Exact => ClassExpression::ObjectExactCardinality {
                cardinality,
                property,
                filler,
            },
            CardinalityKind::Min => ClassExpression::ObjectMinCardinality {
                cardinality,
                property,
                filler,
            },
            CardinalityKind::Max => ClassExpression::ObjectMaxCardinality {
                cardinality,
                property,
                filler,
            },
        }
    }

    /// Translates a node already established to be a data range.
    pub fn data_range(
        &mut self,
        store: &mut TripleStore,
        classifier: &NodeClassifier,
        node: &Subject,
    ) -> Rc<DataRange> {
        match self.data_ranges.get(node) {
            Some(CacheEntry::Done(range)) => return Rc::clone(range),
            Some(CacheEntry::InProgress) => {
                return Rc::new(match node {
                    Subject::NamedNode(n) => DataRange::Datatype(n.clone()),
                    _ => DataRange::Datatype(rdfs::LITERAL.into_owned()),
                });
            }
            None => {}
        }
        self.data_ranges.insert(node.clone(), CacheEntry::InProgress);
        let range = Rc::new(self.build_data_range(store, classifier, node));
        self.data_ranges
            .insert(node.clone(), CacheEntry::Done(Rc::clone(&range)));
        range
    }

    fn build_data_range(
        &mut self,
        store: &mut TripleStore,
        classifier: &NodeClassifier,
        node: &Subject,
    ) -> DataRange {
        if let Subject::NamedNode(n) = node {
            return DataRange::Datatype(n.clone());
        }

        store.consume(node, rdf::TYPE, &rdfs::DATATYPE.into_owned().into());

        if let Some(operand) = store.resource_object(node, owl::DATATYPE_COMPLEMENT_OF, true) {
            return DataRange::DataComplementOf(self.data_range(store, classifier, &operand));
        }
        if let Some(operands) = self.data_range_list(store, classifier, node, owl::INTERSECTION_OF)
        {
            return DataRange::DataIntersectionOf(operands);
        }
        if let Some(operands) = self.data_range_list(store, classifier, node, owl::UNION_OF) {
            return DataRange::DataUnionOf(operands);
        }
        if let Some(root) = store.peek_resource_object(node, owl::ONE_OF) {
            if let Some(elements) = list::elements(store, &root) {
                store.consume(node, owl::ONE_OF, &root.clone().into());
                list::consume_list_cells(store, &root);
                let literals = elements
                    .into_iter()
                    .filter_map(|e| {
                        if let Term::Literal(literal) = e {
                            Some(literal)
                        } else {
                            None
                        }
                    })
                    .collect();
                return DataRange::DataOneOf(literals);
            }
        }
        if let Some(datatype) = store.resource_object(node, owl::ON_DATATYPE, true) {
            let Subject::NamedNode(datatype) = datatype else {
                return DataRange::Datatype(rdfs::LITERAL.into_owned());
            };
            let mut restrictions = Vec::new();
            if let Some(root) = store.peek_resource_object(node, owl::WITH_RESTRICTIONS) {
                if let Some(elements) = list::elements(store, &root) {
                    store.consume(node, owl::WITH_RESTRICTIONS, &root.clone().into());
                    list::consume_list_cells(store, &root);
                    for element in elements.iter().filter_map(term_to_subject) {
                        for facet in facet::ALL {
                            if let Some(value) = store.literal_object(&element, facet, true) {
                                restrictions.push(FacetRestriction {
                                    facet: facet.into_owned(),
                                    value,
                                });
                            }
                        }
                    }
                }
            }
            return DataRange::DatatypeRestriction {
                datatype,
                restrictions,
            };
        }
        DataRange::Datatype(rdfs::LITERAL.into_owned())
    }

    fn data_range_list(
        &mut self,
        store: &mut TripleStore,
        classifier: &NodeClassifier,
        node: &Subject,
        predicate: NamedNodeRef<'_>,
    ) -> Option<Vec<Rc<DataRange>>> {
        let root = store.peek_resource_object(node, predicate)?;
        let elements = list::elements(store, &root)?;
        store.consume(node, predicate, &root.clone().into());
        list::consume_list_cells(store, &root);
        Some(
            elements
                .iter()
                .filter_map(term_to_subject)
                .map(|e| self.data_range(store, classifier, &e))
                .collect(),
        )
    }

    /// Translates a node already established to be an object property
    /// expression: a named property, or an `owl:inverseOf` blank node.
    pub fn object_property(
        &mut self,
        store: &mut TripleStore,
        node: &Subject,
    ) -> Rc<ObjectPropertyExpression> {
        match self.object_properties.get(node) {
            Some(CacheEntry::Done(property)) => return Rc::clone(property),
            Some(CacheEntry::InProgress) => {
                return Rc::new(ObjectPropertyExpression::ObjectProperty(
                    ObjectProperty::new(owl::TOP_OBJECT_PROPERTY.into_owned()),
                ));
            }
            None => {}
        }
        self.object_properties
            .insert(node.clone(), CacheEntry::InProgress);
        let property = Rc::new(self.build_object_property(store, node));
        self.object_properties
            .insert(node.clone(), CacheEntry::Done(Rc::clone(&property)));
        property
    }

    fn build_object_property(
        &mut self,
        store: &mut TripleStore,
        node: &Subject,
    ) -> ObjectPropertyExpression {
        if let Subject::NamedNode(n) = node {
            return ObjectPropertyExpression::ObjectProperty(ObjectProperty::new(n.clone()));
        }
        if let Some(inner) = store.resource_object(node, owl::INVERSE_OF, true) {
            let inner = self.object_property(store, &inner);
            return ObjectPropertyExpression::ObjectInverseOf(inner.base_property().clone());
        }
        ObjectPropertyExpression::ObjectProperty(ObjectProperty::new(
            owl::TOP_OBJECT_PROPERTY.into_owned(),
        ))
    }
}

/// A restriction is a data restriction when its filler is positively a
/// data range or its property has data-property evidence. Ambiguity
/// resolves to the object reading.
fn is_data_restriction(
    store: &TripleStore,
    classifier: &NodeClassifier,
    property: &Subject,
    filler: Option<&Subject>,
) -> bool {
    filler.is_some_and(|f| classifier.positively_data_range(f, store))
        || classifier.is_data_property_lax(property)
}

/// The kind of cardinality restriction under construction.
#[derive(Clone, Copy)]
enum CardinalityKind {
    Exact,
    Min,
    Max,
}

/// Translates a node into a data property. Data properties are always named
/// in OWL 2; anything else falls back to the top data property.
pub(crate) fn data_property(node: &Subject) -> DataProperty {
    match node {
        Subject::NamedNode(n) => DataProperty::new(n.clone()),
        _ => DataProperty::new(owl::TOP_DATA_PROPERTY.into_owned()),
    }
}

/// Translates a node into an individual.
pub(crate) fn individual(node: &Subject) -> Individual {
    match node {
        Subject::NamedNode(n) => Individual::Named(n.clone()),
        Subject::BlankNode(b) => Individual::Anonymous(b.clone()),
        #[allow(unreachable_patterns)]
        _ => Individual::Named(owl::THING.into_owned()),
    }
}

/// Translates a term into an annotation value.
pub(crate) fn annotation_value(term: Term) -> AnnotationValue {
    match term {
        Term::NamedNode(n) => AnnotationValue::Iri(n),
        Term::BlankNode(b) => AnnotationValue::Anonymous(b),
        Term::Literal(l) => AnnotationValue::Literal(l),
        #[allow(unreachable_patterns)]
        _ => AnnotationValue::Literal(oxrdf::Literal::new_simple_literal(String::new())),
    }
}
