//! The per-session consumer that turns a triple stream into axioms.
//!
//! Triples accumulate in the session's [`TripleStore`] as the syntax layer
//! delivers them. Ontology-header triples are folded immediately; everything
//! else waits for [`end_of_document`](GraphConsumer::end_of_document), when
//! forward references are settled and lax classification becomes sound. The
//! final sweep assembles axioms, attaches pending annotations and leaves
//! whatever it cannot interpret unconsumed for diagnostics.

use crate::annotation::Annotation;
use crate::axiom::{AnnotatedAxiom, Axiom};
use crate::classify::{is_reserved_vocabulary, NodeCategory, NodeClassifier};
use crate::entity::{AnnotationProperty, DataProperty, Individual, ObjectProperty, OwlClass};
use crate::expression::{ClassExpression, DataRange, ObjectPropertyExpression};
use crate::list::{self, ListElementMatcher};
use crate::ontology::Ontology;
use crate::store::{term_to_subject, TripleStore};
use crate::translate::{annotation_value, data_property, individual, Translators};
use crate::vocab::owl;
use oxrdf::vocab::{rdf, rdfs};
use oxrdf::{NamedNodeRef, Subject, Term, Triple};
use std::mem;
use std::rc::Rc;

/// Configuration of a parse session.
#[derive(Debug, Clone, Copy, Default)]
#[must_use]
pub struct ParserConfig {
    strict: bool,
}

impl ParserConfig {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects constructs without explicit, conflict-free typing instead of
    /// defaulting them through lax classification.
    #[inline]
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    #[inline]
    pub fn is_strict(&self) -> bool {
        self.strict
    }
}

/// One parse session: triple store, classification evidence, translation
/// caches, the pending-annotation buffer and the ontology under construction.
///
/// Sessions are fully isolated: nothing here is shared between consumers, so
/// independent parses may run in parallel. Dropping the consumer aborts the
/// session; no axiom reaches the ontology before the assembler adds it.
pub struct GraphConsumer {
    config: ParserConfig,
    store: TripleStore,
    classifier: NodeClassifier,
    translators: Translators,
    pending_annotations: Vec<Annotation>,
    ontology: Ontology,
}

impl GraphConsumer {
    pub fn new() -> Self {
        Self::with_config(ParserConfig::new())
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            config,
            store: TripleStore::new(),
            classifier: NodeClassifier::new(),
            translators: Translators::new(config.is_strict()),
            pending_annotations: Vec::new(),
            ontology: Ontology::new(None),
        }
    }

    /// Feeds one triple from the syntax layer.
    ///
    /// Ontology-header triples are consumed on the spot; all other triples
    /// are recorded as classification evidence and kept for the final sweep.
    pub fn add_triple(&mut self, triple: Triple) {
        self.classifier.observe(&triple);
        self.store.add(triple.clone());

        if triple.predicate == rdf::TYPE {
            if let Term::NamedNode(object) = &triple.object {
                if object.as_ref() == owl::ONTOLOGY {
                    if let Subject::NamedNode(subject) = &triple.subject {
                        if self.ontology.iri().is_none() {
                            self.ontology.set_iri(Some(subject.clone()));
                        }
                    }
                    self.consume_triple(&triple);
                }
            }
        } else if triple.predicate == owl::IMPORTS {
            if let Term::NamedNode(object) = &triple.object {
                self.ontology.add_import(object.clone());
                self.consume_triple(&triple);
            }
        } else if triple.predicate == owl::VERSION_IRI {
            if let Term::NamedNode(object) = &triple.object {
                self.ontology.set_version_iri(Some(object.clone()));
                self.consume_triple(&triple);
            }
        }
    }

    /// Signals that the syntax layer has delivered every triple, then runs
    /// the final sweep. Must be called exactly once, after which the
    /// assembled ontology and the diagnostics are available.
    pub fn end_of_document(&mut self) {
        self.store.end_of_document();
        self.process_reified_axioms();
        for triple in self.store.unconsumed_triples() {
            // An earlier dispatch may have folded this triple already.
            if self.store.is_unconsumed(&triple) {
                self.dispatch(&triple);
            }
        }
        // Orphaned annotations are silently dropped.
        self.pending_annotations.clear();
    }

    /// Returns `true` once the end-of-document signal was received.
    #[inline]
    pub fn all_triples_seen(&self) -> bool {
        self.store.all_triples_seen()
    }

    /// The ontology assembled so far.
    #[inline]
    pub fn ontology(&self) -> &Ontology {
        &self.ontology
    }

    /// Consumes the session, returning the assembled ontology.
    #[inline]
    pub fn into_ontology(self) -> Ontology {
        self.ontology
    }

    /// All triples that were never folded into a model object: the
    /// diagnostic record of what the parse could not interpret.
    #[inline]
    pub fn unconsumed_triples(&self) -> Vec<Triple> {
        self.store.unconsumed_triples()
    }

    /// The annotations buffered for the next assembled axiom.
    #[inline]
    pub fn pending_annotations(&self) -> &[Annotation] {
        &self.pending_annotations
    }

    /// The strict syntactic category of a node.
    pub fn node_category(&self, node: &Subject) -> NodeCategory {
        self.classifier.category(node, &self.store)
    }

    /// Translates a node as a class expression, memoized for the session.
    pub fn translate_class_expression(&mut self, node: &Subject) -> Rc<ClassExpression> {
        self.translators
            .class_expression(&mut self.store, &self.classifier, node)
    }

    /// Translates a node as a data range, memoized for the session.
    pub fn translate_data_range(&mut self, node: &Subject) -> Rc<DataRange> {
        self.translators
            .data_range(&mut self.store, &self.classifier, node)
    }

    /// Translates a node as an object property expression, memoized for the session.
    pub fn translate_object_property(&mut self, node: &Subject) -> Rc<ObjectPropertyExpression> {
        self.translators.object_property(&mut self.store, node)
    }

    /// Translates a node as a data property.
    pub fn translate_data_property(&self, node: &Subject) -> DataProperty {
        data_property(node)
    }

    /// Translates a node as an individual.
    pub fn translate_individual(&self, node: &Subject) -> Individual {
        individual(node)
    }

    fn consume_triple(&mut self, triple: &Triple) {
        self.store
            .consume(&triple.subject, triple.predicate.as_ref(), &triple.object);
    }

    /// Attaches the pending annotations to the new axiom and clears the
    /// buffer: attachment is a destructive read.
    fn add_axiom(&mut self, axiom: Axiom) {
        let annotations = mem::take(&mut self.pending_annotations);
        self.ontology
            .add_axiom(AnnotatedAxiom::new(axiom, annotations));
    }

    fn is_class_expression(&self, node: &Subject) -> bool {
        if self.config.strict {
            self.classifier.is_class_expression_strict(node, &self.store)
        } else {
            self.classifier.is_class_expression_lax(node, &self.store)
        }
    }

    fn is_data_range(&self, node: &Subject) -> bool {
        if self.config.strict {
            self.classifier.is_data_range_strict(node, &self.store)
        } else {
            self.classifier.is_data_range_lax(node, &self.store)
        }
    }

    fn is_object_property(&self, node: &Subject) -> bool {
        if self.config.strict {
            self.classifier.is_object_property_strict(node)
        } else {
            self.classifier.is_object_property_lax(node)
        }
    }

    fn is_data_property(&self, node: &Subject) -> bool {
        if self.config.strict {
            self.classifier.is_data_property_strict(node)
        } else {
            self.classifier.is_data_property_lax(node)
        }
    }

    // === Reified axioms and their annotations ===

    /// Translates every `owl:Axiom` reification node: its annotations go
    /// into the pending buffer, then the annotated main triple is
    /// re-dispatched so the assembled axiom picks the buffer up. Annotations
    /// whose main triple assembles nothing are dropped.
    fn process_reified_axioms(&mut self) {
        let nodes: Vec<Subject> = self
            .store
            .unconsumed_with_predicate(rdf::TYPE)
            .into_iter()
            .filter(|t| {
                matches!(&t.object, Term::NamedNode(n) if n.as_ref() == owl::AXIOM)
            })
            .map(|t| t.subject)
            .collect();
        for node in nodes {
            self.process_reified_axiom(&node);
            self.pending_annotations.clear();
        }
    }

    fn process_reified_axiom(&mut self, node: &Subject) {
        let source = self.store.peek_resource_object(node, owl::ANNOTATED_SOURCE);
        let property = self.store.peek_resource_object(node, owl::ANNOTATED_PROPERTY);
        let target = self.store.peek_object(node, owl::ANNOTATED_TARGET);
        let (Some(source), Some(property), Some(target)) = (source, property, target) else {
            return;
        };
        self.store.consume(node, rdf::TYPE, &owl::AXIOM.into_owned().into());
        self.store
            .consume(node, owl::ANNOTATED_SOURCE, &source.clone().into());
        self.store
            .consume(node, owl::ANNOTATED_PROPERTY, &property.clone().into());
        self.store.consume(node, owl::ANNOTATED_TARGET, &target);

        for triple in self.store.unconsumed_for_subject(node) {
            if triple.predicate == rdf::TYPE {
                continue;
            }
            self.consume_triple(&triple);
            self.pending_annotations.push(Annotation::new(
                AnnotationProperty::new(triple.predicate),
                annotation_value(triple.object),
            ));
        }

        let Subject::NamedNode(predicate) = property else {
            return;
        };
        self.dispatch(&Triple::new(source, predicate, target));
    }

    // === The axiom assembler ===

    fn dispatch(&mut self, triple: &Triple) {
        let predicate = triple.predicate.as_ref();
        if predicate == rdf::TYPE {
            self.handle_type(triple);
        } else if predicate == rdfs::SUB_CLASS_OF {
            self.handle_sub_class_of(triple);
        } else if predicate == owl::EQUIVALENT_CLASS {
            self.handle_equivalent_class(triple);
        } else if predicate == owl::DISJOINT_WITH {
            self.handle_disjoint_with(triple);
        } else if predicate == owl::DISJOINT_UNION_OF {
            self.handle_disjoint_union(triple);
        } else if predicate == rdfs::SUB_PROPERTY_OF {
            self.handle_sub_property_of(triple);
        } else if predicate == owl::EQUIVALENT_PROPERTY {
            self.handle_equivalent_property(triple);
        } else if predicate == owl::PROPERTY_DISJOINT_WITH {
            self.handle_property_disjoint_with(triple);
        } else if predicate == owl::INVERSE_OF {
            self.handle_inverse_of(triple);
        } else if predicate == rdfs::DOMAIN {
            self.handle_domain(triple);
        } else if predicate == rdfs::RANGE {
            self.handle_range(triple);
        } else if predicate == owl::SAME_AS {
            self.handle_same_as(triple);
        } else if predicate == owl::DIFFERENT_FROM {
            self.handle_different_from(triple);
        } else if predicate == rdfs::LABEL
            || predicate == rdfs::COMMENT
            || predicate == rdfs::SEE_ALSO
            || predicate == rdfs::IS_DEFINED_BY
        {
            self.handle_annotation_assertion(triple);
        } else if !is_reserved_vocabulary(predicate) {
            self.handle_assertion(triple);
        }
        // Reserved predicates with no handler (rdf:first, owl:members,
        // owl:onProperty, ...) belong to structures folded by their owners
        // and stay raw here.
    }

    fn handle_type(&mut self, triple: &Triple) {
        let subject = &triple.subject;
        let object = match &triple.object {
            Term::NamedNode(n) => n.clone(),
            Term::BlankNode(_) => {
                self.handle_class_assertion(triple);
                return;
            }
            _ => return,
        };
        let object_ref = object.as_ref();

        if object_ref == owl::ONTOLOGY {
            if let Subject::NamedNode(subject) = subject {
                if self.ontology.iri().is_none() {
                    self.ontology.set_iri(Some(subject.clone()));
                }
            }
            self.consume_triple(triple);
        } else if object_ref == owl::CLASS {
            if let Subject::NamedNode(subject) = subject {
                self.consume_triple(triple);
                self.add_axiom(Axiom::DeclareClass(OwlClass::new(subject.clone())));
            }
        } else if object_ref == rdfs::DATATYPE {
            if let Subject::NamedNode(subject) = subject {
                self.consume_triple(triple);
                self.add_axiom(Axiom::DeclareDatatype(subject.clone()));
            }
        } else if object_ref == owl::OBJECT_PROPERTY {
            if let Subject::NamedNode(subject) = subject {
                self.consume_triple(triple);
                self.add_axiom(Axiom::DeclareObjectProperty(ObjectProperty::new(
                    subject.clone(),
                )));
            }
        } else if object_ref == owl::DATATYPE_PROPERTY {
            if let Subject::NamedNode(subject) = subject {
                self.consume_triple(triple);
                self.add_axiom(Axiom::DeclareDataProperty(DataProperty::new(
                    subject.clone(),
                )));
            }
        } else if object_ref == owl::ANNOTATION_PROPERTY {
            if let Subject::NamedNode(subject) = subject {
                self.consume_triple(triple);
                self.add_axiom(Axiom::DeclareAnnotationProperty(AnnotationProperty::new(
                    subject.clone(),
                )));
            }
        } else if object_ref == owl::NAMED_INDIVIDUAL {
            if let Subject::NamedNode(subject) = subject {
                self.consume_triple(triple);
                self.add_axiom(Axiom::DeclareNamedIndividual(Individual::Named(
                    subject.clone(),
                )));
            }
        } else if object_ref == owl::FUNCTIONAL_PROPERTY {
            self.handle_functional_property(triple);
        } else if let Some(characteristic) = object_characteristic(object_ref) {
            if self.config.strict && !self.classifier.is_object_property_strict(subject) {
                return;
            }
            self.consume_triple(triple);
            let property = self.translators.object_property(&mut self.store, subject);
            self.add_axiom(characteristic(property));
        } else if object_ref == owl::ALL_DISJOINT_CLASSES {
            self.handle_nary_members(
                triple,
                ListElementMatcher::ClassExpression,
                NaryKind::DisjointClasses,
            );
        } else if object_ref == owl::ALL_DIFFERENT {
            self.handle_nary_members(triple, ListElementMatcher::Individual, NaryKind::DifferentIndividuals);
        } else if object_ref == owl::THING {
            self.handle_class_assertion(triple);
        } else if !is_reserved_vocabulary(object_ref) {
            self.handle_class_assertion(triple);
        }
        // Remaining vocabulary types (owl:Restriction, owl:Axiom, ...) are
        // folded by the structures that own them, or stay raw as diagnostics.
    }

    fn handle_functional_property(&mut self, triple: &Triple) {
        let subject = &triple.subject;
        if self.classifier.is_data_property_lax(subject) {
            if self.config.strict && !self.classifier.is_data_property_strict(subject) {
                return;
            }
            self.consume_triple(triple);
            let axiom = Axiom::FunctionalDataProperty(data_property(subject));
            self.add_axiom(axiom);
        } else {
            if self.config.strict && !self.classifier.is_object_property_strict(subject) {
                return;
            }
            self.consume_triple(triple);
            let property = self.translators.object_property(&mut self.store, subject);
            self.add_axiom(Axiom::FunctionalObjectProperty(property));
        }
    }

    fn handle_nary_members(&mut self, triple: &Triple, matcher: ListElementMatcher, kind: NaryKind) {
        let subject = &triple.subject;
        let root = self
            .store
            .peek_resource_object(subject, owl::MEMBERS)
            .or_else(|| {
                self.store
                    .peek_resource_object(subject, owl::DISTINCT_MEMBERS)
            });
        let Some(root) = root else {
            return;
        };
        if !list::is_valid_list(
            &self.store,
            &self.classifier,
            &root,
            matcher,
            self.config.strict,
            2,
        ) {
            return;
        }
        let Some(elements) = list::elements(&self.store, &root) else {
            return;
        };
        self.consume_triple(triple);
        self.store
            .consume(subject, owl::MEMBERS, &root.clone().into());
        self.store
            .consume(subject, owl::DISTINCT_MEMBERS, &root.clone().into());
        list::consume_list_cells(&mut self.store, &root);
        let members: Vec<Subject> = elements.iter().filter_map(term_to_subject).collect();
        let axiom = match kind {
            NaryKind::DisjointClasses => Axiom::DisjointClasses(
                members
                    .iter()
                    .map(|m| {
                        self.translators
                            .class_expression(&mut self.store, &self.classifier, m)
                    })
                    .collect(),
            ),
            NaryKind::DifferentIndividuals => {
                Axiom::DifferentIndividuals(members.iter().map(individual).collect())
            }
        };
        self.add_axiom(axiom);
    }

    fn handle_class_assertion(&mut self, triple: &Triple) {
        let Some(object) = term_to_subject(&triple.object) else {
            return;
        };
        if !self.is_class_expression(&object) {
            return;
        }
        self.consume_triple(triple);
        let class = self
            .translators
            .class_expression(&mut self.store, &self.classifier, &object);
        self.add_axiom(Axiom::ClassAssertion {
            class,
            individual: individual(&triple.subject),
        });
    }

    fn handle_sub_class_of(&mut self, triple: &Triple) {
        let Some(object) = term_to_subject(&triple.object) else {
            return;
        };
        if !self.is_class_expression(&triple.subject) || !self.is_class_expression(&object) {
            return;
        }
        self.consume_triple(triple);
        let sub_class = self
            .translators
            .class_expression(&mut self.store, &self.classifier, &triple.subject);
        let super_class = self
            .translators
            .class_expression(&mut self.store, &self.classifier, &object);
        self.add_axiom(Axiom::SubClassOf {
            sub_class,
            super_class,
        });
    }

    fn handle_equivalent_class(&mut self, triple: &Triple) {
        let Some(object) = term_to_subject(&triple.object) else {
            return;
        };
        // owl:equivalentClass on a datatype defines the datatype.
        if self
            .classifier
            .positively_data_range(&triple.subject, &self.store)
        {
            let Subject::NamedNode(datatype) = &triple.subject else {
                return;
            };
            if !self.is_data_range(&object) {
                return;
            }
            self.consume_triple(triple);
            let range = self
                .translators
                .data_range(&mut self.store, &self.classifier, &object);
            self.add_axiom(Axiom::DatatypeDefinition {
                datatype: datatype.clone(),
                range,
            });
            return;
        }
        if !self.is_class_expression(&triple.subject) || !self.is_class_expression(&object) {
            return;
        }
        self.consume_triple(triple);
        let first = self
            .translators
            .class_expression(&mut self.store, &self.classifier, &triple.subject);
        let second = self
            .translators
            .class_expression(&mut self.store, &self.classifier, &object);
        self.add_axiom(Axiom::EquivalentClasses(vec![first, second]));
    }

    fn handle_disjoint_with(&mut self, triple: &Triple) {
        let Some(object) = term_to_subject(&triple.object) else {
            return;
        };
        if !self.is_class_expression(&triple.subject) || !self.is_class_expression(&object) {
            return;
        }
        self.consume_triple(triple);
        let first = self
            .translators
            .class_expression(&mut self.store, &self.classifier, &triple.subject);
        let second = self
            .translators
            .class_expression(&mut self.store, &self.classifier, &object);
        self.add_axiom(Axiom::DisjointClasses(vec![first, second]));
    }

    /// `C owl:disjointUnionOf (C1 ... Cn)`: requires a named owner and a
    /// valid class-expression list of at least two operands. A malformed
    /// list (cycle, bad element, missing termination) produces no axiom and
    /// leaves every triple raw.
    fn handle_disjoint_union(&mut self, triple: &Triple) {
        let Subject::NamedNode(owner) = &triple.subject else {
            return;
        };
        let Some(root) = term_to_subject(&triple.object) else {
            return;
        };
        if !list::is_valid_list(
            &self.store,
            &self.classifier,
            &root,
            ListElementMatcher::ClassExpression,
            self.config.strict,
            2,
        ) {
            return;
        }
        let Some(elements) = list::elements(&self.store, &root) else {
            return;
        };
        self.consume_triple(triple);
        list::consume_list_cells(&mut self.store, &root);
        let class = OwlClass::new(owner.clone());
        let mut operands: Vec<Rc<ClassExpression>> = elements
            .iter()
            .filter_map(term_to_subject)
            .map(|e| {
                self.translators
                    .class_expression(&mut self.store, &self.classifier, &e)
            })
            .collect();
        // The operand set excludes the owner.
        operands.retain(|e| e.as_class() != Some(&class));
        self.add_axiom(Axiom::DisjointUnion { class, operands });
    }

    fn handle_sub_property_of(&mut self, triple: &Triple) {
        let Some(object) = term_to_subject(&triple.object) else {
            return;
        };
        let subject = &triple.subject;
        if self.is_data_property(subject) && self.is_data_property(&object) {
            self.consume_triple(triple);
            let axiom = Axiom::SubDataPropertyOf {
                sub_property: data_property(subject),
                super_property: data_property(&object),
            };
            self.add_axiom(axiom);
        } else if self.classifier.is_annotation_property(subject)
            || self.classifier.is_annotation_property(&object)
        {
            let (Subject::NamedNode(sub), Subject::NamedNode(sup)) = (subject, &object) else {
                return;
            };
            if self.config.strict
                && !(self.classifier.is_annotation_property_strict(subject)
                    && self.classifier.is_annotation_property_strict(&object))
            {
                return;
            }
            self.consume_triple(triple);
            self.add_axiom(Axiom::SubAnnotationPropertyOf {
                sub_property: AnnotationProperty::new(sub.clone()),
                super_property: AnnotationProperty::new(sup.clone()),
            });
        } else {
            if self.config.strict
                && !(self.classifier.is_object_property_strict(subject)
                    && self.classifier.is_object_property_strict(&object))
            {
                return;
            }
            self.consume_triple(triple);
            let sub_property = self.translators.object_property(&mut self.store, subject);
            let super_property = self.translators.object_property(&mut self.store, &object);
            self.add_axiom(Axiom::SubObjectPropertyOf {
                sub_property,
                super_property,
            });
        }
    }

    fn handle_equivalent_property(&mut self, triple: &Triple) {
        let Some(object) = term_to_subject(&triple.object) else {
            return;
        };
        let subject = &triple.subject;
        if self.is_data_property(subject) && self.is_data_property(&object) {
            self.consume_triple(triple);
            let axiom =
                Axiom::EquivalentDataProperties(vec![data_property(subject), data_property(&object)]);
            self.add_axiom(axiom);
        } else {
            if self.config.strict
                && !(self.classifier.is_object_property_strict(subject)
                    && self.classifier.is_object_property_strict(&object))
            {
                return;
            }
            self.consume_triple(triple);
            let first = self.translators.object_property(&mut self.store, subject);
            let second = self.translators.object_property(&mut self.store, &object);
            self.add_axiom(Axiom::EquivalentObjectProperties(vec![first, second]));
        }
    }

    fn handle_property_disjoint_with(&mut self, triple: &Triple) {
        let Some(object) = term_to_subject(&triple.object) else {
            return;
        };
        let subject = &triple.subject;
        if self.is_data_property(subject) && self.is_data_property(&object) {
            self.consume_triple(triple);
            let axiom =
                Axiom::DisjointDataProperties(vec![data_property(subject), data_property(&object)]);
            self.add_axiom(axiom);
        } else {
            if self.config.strict
                && !(self.classifier.is_object_property_strict(subject)
                    && self.classifier.is_object_property_strict(&object))
            {
                return;
            }
            self.consume_triple(triple);
            let first = self.translators.object_property(&mut self.store, subject);
            let second = self.translators.object_property(&mut self.store, &object);
            self.add_axiom(Axiom::DisjointObjectProperties(vec![first, second]));
        }
    }

    fn handle_inverse_of(&mut self, triple: &Triple) {
        // An anonymous subject is an inverse property *expression*, folded by
        // the translator where it is used; only named subjects assert axioms.
        if !matches!(triple.subject, Subject::NamedNode(_)) {
            return;
        }
        let Some(object) = term_to_subject(&triple.object) else {
            return;
        };
        if self.config.strict
            && !(self.classifier.is_object_property_strict(&triple.subject)
                && self.classifier.is_object_property_strict(&object))
        {
            return;
        }
        self.consume_triple(triple);
        let first = self
            .translators
            .object_property(&mut self.store, &triple.subject);
        let second = self.translators.object_property(&mut self.store, &object);
        self.add_axiom(Axiom::InverseObjectProperties(first, second));
    }

    fn handle_domain(&mut self, triple: &Triple) {
        let Some(object) = term_to_subject(&triple.object) else {
            return;
        };
        let subject = &triple.subject;
        if !self.is_class_expression(&object) {
            return;
        }
        if self.is_data_property(subject) {
            self.consume_triple(triple);
            let domain = self
                .translators
                .class_expression(&mut self.store, &self.classifier, &object);
            self.add_axiom(Axiom::DataPropertyDomain {
                property: data_property(subject),
                domain,
            });
        } else if self.classifier.is_annotation_property(subject) {
            // No annotation property domain axiom in this model.
        } else {
            if self.config.strict && !self.classifier.is_object_property_strict(subject) {
                return;
            }
            self.consume_triple(triple);
            let property = self.translators.object_property(&mut self.store, subject);
            let domain = self
                .translators
                .class_expression(&mut self.store, &self.classifier, &object);
            self.add_axiom(Axiom::ObjectPropertyDomain { property, domain });
        }
    }

    fn handle_range(&mut self, triple: &Triple) {
        let Some(object) = term_to_subject(&triple.object) else {
            return;
        };
        let subject = &triple.subject;
        let data = self.is_data_property(subject)
            || (!self.classifier.is_object_property_lax(subject)
                && self
                    .classifier
                    .positively_data_range(&object, &self.store));
        if data {
            if self.config.strict
                && !(self.classifier.is_data_property_strict(subject)
                    && self.classifier.is_data_range_strict(&object, &self.store))
            {
                return;
            }
            self.consume_triple(triple);
            let range = self
                .translators
                .data_range(&mut self.store, &self.classifier, &object);
            self.add_axiom(Axiom::DataPropertyRange {
                property: data_property(subject),
                range,
            });
        } else if self.classifier.is_annotation_property(subject) {
            // No annotation property range axiom in this model.
        } else {
            if !self.is_class_expression(&object) {
                return;
            }
            if self.config.strict && !self.classifier.is_object_property_strict(subject) {
                return;
            }
            self.consume_triple(triple);
            let property = self.translators.object_property(&mut self.store, subject);
            let range = self
                .translators
                .class_expression(&mut self.store, &self.classifier, &object);
            self.add_axiom(Axiom::ObjectPropertyRange { property, range });
        }
    }

    fn handle_same_as(&mut self, triple: &Triple) {
        let Some(object) = term_to_subject(&triple.object) else {
            return;
        };
        self.consume_triple(triple);
        let axiom = Axiom::SameIndividual(vec![individual(&triple.subject), individual(&object)]);
        self.add_axiom(axiom);
    }

    fn handle_different_from(&mut self, triple: &Triple) {
        let Some(object) = term_to_subject(&triple.object) else {
            return;
        };
        self.consume_triple(triple);
        let axiom =
            Axiom::DifferentIndividuals(vec![individual(&triple.subject), individual(&object)]);
        self.add_axiom(axiom);
    }

    fn handle_annotation_assertion(&mut self, triple: &Triple) {
        self.consume_triple(triple);
        let axiom = Axiom::AnnotationAssertion {
            subject: triple.subject.clone(),
            property: AnnotationProperty::new(triple.predicate.clone()),
            value: annotation_value(triple.object.clone()),
        };
        self.add_axiom(axiom);
    }

    /// Remaining triples with a non-reserved predicate: property assertions
    /// when the predicate has matching evidence; otherwise, in lax mode, an
    /// annotation assertion. In strict mode untyped predicates stay raw.
    fn handle_assertion(&mut self, triple: &Triple) {
        let predicate: Subject = triple.predicate.clone().into();
        match &triple.object {
            Term::Literal(value) => {
                if self.is_data_property(&predicate) {
                    self.consume_triple(triple);
                    let axiom = Axiom::DataPropertyAssertion {
                        property: data_property(&predicate),
                        source: individual(&triple.subject),
                        target: value.clone(),
                    };
                    self.add_axiom(axiom);
                } else if self.classifier.is_annotation_property(&predicate) || !self.config.strict
                {
                    self.handle_annotation_assertion(triple);
                }
            }
            _ => {
                let Some(object) = term_to_subject(&triple.object) else {
                    return;
                };
                if self.is_object_property(&predicate) {
                    self.consume_triple(triple);
                    let property = self
                        .translators
                        .object_property(&mut self.store, &predicate);
                    self.add_axiom(Axiom::ObjectPropertyAssertion {
                        property,
                        source: individual(&triple.subject),
                        target: individual(&object),
                    });
                } else if self.classifier.is_annotation_property(&predicate) || !self.config.strict
                {
                    self.handle_annotation_assertion(triple);
                }
            }
        }
    }
}

impl Default for GraphConsumer {
    fn default() -> Self {
        Self::new()
    }
}

enum NaryKind {
    DisjointClasses,
    DifferentIndividuals,
}

/// Maps a property-characteristic class to its axiom constructor.
fn object_characteristic(
    class: NamedNodeRef<'_>,
) -> Option<fn(Rc<ObjectPropertyExpression>) -> Axiom> {
    if class == owl::INVERSE_FUNCTIONAL_PROPERTY {
        Some(Axiom::InverseFunctionalObjectProperty)
    } else if class == owl::TRANSITIVE_PROPERTY {
        Some(Axiom::TransitiveObjectProperty)
    } else if class == owl::SYMMETRIC_PROPERTY {
        Some(Axiom::SymmetricObjectProperty)
    } else if class == owl::ASYMMETRIC_PROPERTY {
        Some(Axiom::AsymmetricObjectProperty)
    } else if class == owl::REFLEXIVE_PROPERTY {
        Some(Axiom::ReflexiveObjectProperty)
    } else if class == owl::IRREFLEXIVE_PROPERTY {
        Some(Axiom::IrreflexiveObjectProperty)
    } else {
        None
    }
}
