//! End-to-end tests of the triple consumer: Turtle documents go through the
//! oxttl syntax layer into a [`GraphConsumer`] session, and the assembled
//! ontology is checked axiom by axiom.

use oxowlrdf::{
    Annotation, AnnotationValue, Axiom, ClassExpression, GraphConsumer, Individual, OwlClass,
    ParserConfig,
};
use oxrdf::NamedNode;
use oxttl::TurtleParser;
use std::rc::Rc;

const PREFIXES: &str = r#"
@prefix rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix owl: <http://www.w3.org/2002/07/owl#> .
@prefix xsd: <http://www.w3.org/2001/XMLSchema#> .
@prefix : <http://example.com/> .
"#;

fn consume(turtle: &str) -> GraphConsumer {
    consume_with(GraphConsumer::new(), turtle)
}

fn consume_strict(turtle: &str) -> GraphConsumer {
    consume_with(GraphConsumer::with_config(ParserConfig::new().strict()), turtle)
}

fn consume_with(mut consumer: GraphConsumer, turtle: &str) -> GraphConsumer {
    let document = format!("{PREFIXES}{turtle}");
    for triple in TurtleParser::new().for_reader(document.as_bytes()) {
        consumer.add_triple(triple.unwrap());
    }
    consumer.end_of_document();
    consumer
}

fn iri(suffix: &str) -> NamedNode {
    NamedNode::new(format!("http://example.com/{suffix}")).unwrap()
}

fn class_names(operands: &[Rc<ClassExpression>]) -> Vec<&str> {
    let mut names: Vec<&str> = operands
        .iter()
        .filter_map(|o| o.as_class().map(|c| c.iri().as_str()))
        .collect();
    names.sort_unstable();
    names
}

#[test]
fn disjoint_union_is_assembled_from_a_valid_list() {
    let consumer = consume(
        r#"
        :C a owl:Class ; owl:disjointUnionOf ( :D :E ) .
        :D a owl:Class .
        :E a owl:Class .
        "#,
    );
    let ontology = consumer.ontology();

    let axiom = ontology
        .iter_axioms()
        .find(|a| matches!(a, Axiom::DisjointUnion { .. }))
        .expect("one DisjointUnion axiom");
    assert_eq!(axiom.disjoint_union_class(), Some(&OwlClass::new(iri("C"))));
    let operands = axiom.disjoint_union_operands().unwrap();
    assert_eq!(
        class_names(operands),
        ["http://example.com/D", "http://example.com/E"]
    );
    // Everything was folded: no diagnostic leftovers.
    assert!(consumer.unconsumed_triples().is_empty());
}

#[test]
fn disjoint_union_views_are_derived_from_the_operands() {
    let consumer = consume(
        r#"
        :C a owl:Class ; owl:disjointUnionOf ( :D :E ) .
        :D a owl:Class .
        :E a owl:Class .
        "#,
    );
    let ontology = consumer.ontology();
    let axiom = ontology
        .iter_axioms()
        .find(|a| matches!(a, Axiom::DisjointUnion { .. }))
        .unwrap();

    let Some(Axiom::EquivalentClasses(parts)) = axiom.equivalent_classes_view() else {
        panic!("expected an EquivalentClasses view");
    };
    assert_eq!(*parts[0], ClassExpression::Class(OwlClass::new(iri("C"))));
    let ClassExpression::ObjectUnionOf(union) = &*parts[1] else {
        panic!("expected a union of the operands");
    };
    assert_eq!(
        class_names(union),
        ["http://example.com/D", "http://example.com/E"]
    );

    let Some(Axiom::DisjointClasses(disjoint)) = axiom.disjoint_classes_view() else {
        panic!("expected a DisjointClasses view");
    };
    assert_eq!(
        class_names(&disjoint),
        ["http://example.com/D", "http://example.com/E"]
    );
}

#[test]
fn cyclic_disjoint_union_list_produces_no_axiom() {
    let consumer = consume(
        r#"
        :C a owl:Class ; owl:disjointUnionOf _:l1 .
        :D a owl:Class .
        :E a owl:Class .
        _:l1 rdf:first :D ; rdf:rest _:l2 .
        _:l2 rdf:first :E ; rdf:rest _:l1 .
        "#,
    );
    let ontology = consumer.ontology();

    assert!(!ontology
        .iter_axioms()
        .any(|a| matches!(a, Axiom::DisjointUnion { .. })));
    // The class declarations still parse.
    assert_eq!(ontology.classes().count(), 3);
    // The union triple and the four list cells stay raw.
    assert_eq!(consumer.unconsumed_triples().len(), 5);
}

#[test]
fn annotation_arriving_before_the_list_is_attached_to_the_axiom() {
    // The reification block precedes the triples it annotates: RDF gives no
    // ordering guarantee, so the annotation is buffered until the main
    // triple assembles.
    let consumer = consume(
        r#"
        _:ax a owl:Axiom ;
            rdfs:comment "the union axiom" ;
            owl:annotatedSource :C ;
            owl:annotatedProperty owl:disjointUnionOf ;
            owl:annotatedTarget _:l1 .
        :C a owl:Class ; owl:disjointUnionOf _:l1 .
        :D a owl:Class .
        :E a owl:Class .
        _:l1 rdf:first :D ; rdf:rest _:l2 .
        _:l2 rdf:first :E ; rdf:rest rdf:nil .
        "#,
    );
    let ontology = consumer.ontology();

    let annotated: Vec<_> = ontology
        .axioms()
        .iter()
        .filter(|a| matches!(a.axiom(), Axiom::DisjointUnion { .. }))
        .collect();
    assert_eq!(annotated.len(), 1, "exactly one DisjointUnion axiom");
    let axiom = annotated[0];
    assert!(axiom.is_annotated());
    assert_eq!(
        axiom.annotations(),
        [Annotation::new(
            oxowlrdf::AnnotationProperty::new(
                NamedNode::new("http://www.w3.org/2000/01/rdf-schema#comment").unwrap()
            ),
            AnnotationValue::Literal(oxrdf::Literal::new_simple_literal("the union axiom")),
        )]
    );
    // Attachment is a destructive read: nothing left in the buffer, and the
    // bare form strips the annotation but keeps the operands.
    assert!(consumer.pending_annotations().is_empty());
    let bare = axiom.without_annotations();
    assert!(!bare.is_annotated());
    assert_eq!(bare.axiom(), axiom.axiom());
    assert!(consumer.unconsumed_triples().is_empty());
}

#[test]
fn orphaned_annotations_are_dropped_silently() {
    // The reified main triple points at a cyclic list, so no axiom is ever
    // assembled for the buffered annotation.
    let consumer = consume(
        r#"
        _:ax a owl:Axiom ;
            rdfs:comment "orphan" ;
            owl:annotatedSource :C ;
            owl:annotatedProperty owl:disjointUnionOf ;
            owl:annotatedTarget _:l1 .
        :C a owl:Class .
        :D a owl:Class .
        _:l1 rdf:first :D ; rdf:rest _:l1 .
        "#,
    );
    assert!(consumer.pending_annotations().is_empty());
    assert!(consumer
        .ontology()
        .axioms()
        .iter()
        .all(|a| !a.is_annotated()));
}

#[test]
fn identity_sharing_across_axioms() {
    // Two subclass axioms reference the same anonymous restriction: both
    // must observe the same translated object, not an equal copy.
    let consumer = consume(
        r#"
        :A a owl:Class ; rdfs:subClassOf _:r .
        :B a owl:Class ; rdfs:subClassOf _:r .
        _:r a owl:Restriction ; owl:onProperty :p ; owl:someValuesFrom :D .
        :p a owl:ObjectProperty .
        :D a owl:Class .
        "#,
    );
    let supers: Vec<&Rc<ClassExpression>> = consumer
        .ontology()
        .iter_axioms()
        .filter_map(|a| match a {
            Axiom::SubClassOf { super_class, .. } => Some(super_class),
            _ => None,
        })
        .collect();
    assert_eq!(supers.len(), 2);
    assert!(
        Rc::ptr_eq(supers[0], supers[1]),
        "translation must be memoized per node"
    );
    assert!(matches!(
        &**supers[0],
        ClassExpression::ObjectSomeValuesFrom { .. }
    ));
    assert!(consumer.unconsumed_triples().is_empty());
}

#[test]
fn strict_mode_leaves_untyped_constructs_unconsumed() {
    let strict = consume_strict(":A rdfs:subClassOf :B .");
    assert_eq!(strict.ontology().axiom_count(), 0);
    assert_eq!(strict.unconsumed_triples().len(), 1);

    // The same document parses in lax mode.
    let lax = consume(":A rdfs:subClassOf :B .");
    assert_eq!(lax.ontology().axiom_count(), 1);
    assert!(lax.unconsumed_triples().is_empty());
}

#[test]
fn malformed_cardinality_degrades_to_zero() {
    let consumer = consume(
        r#"
        :A a owl:Class ;
            rdfs:subClassOf [ a owl:Restriction ; owl:onProperty :p ;
                              owl:minCardinality "abc"^^xsd:nonNegativeInteger ] .
        :p a owl:ObjectProperty .
        "#,
    );
    let min = consumer
        .ontology()
        .iter_axioms()
        .find_map(|a| match a {
            Axiom::SubClassOf { super_class, .. } => match &**super_class {
                ClassExpression::ObjectMinCardinality { cardinality, .. } => Some(*cardinality),
                _ => None,
            },
            _ => None,
        })
        .expect("a min cardinality restriction");
    assert_eq!(min, 0);
}

#[test]
fn data_restrictions_are_recognized_from_the_filler() {
    let consumer = consume(
        r#"
        :A a owl:Class ;
            rdfs:subClassOf [ a owl:Restriction ; owl:onProperty :age ;
                              owl:someValuesFrom xsd:integer ] .
        :age a owl:DatatypeProperty .
        "#,
    );
    assert!(consumer.ontology().iter_axioms().any(|a| matches!(
        a,
        Axiom::SubClassOf { super_class, .. }
            if matches!(&**super_class, ClassExpression::DataSomeValuesFrom { .. })
    )));
}

#[test]
fn datatype_definition_from_equivalent_class() {
    let consumer = consume(
        r#"
        :SSN a rdfs:Datatype ;
            owl:equivalentClass [ a rdfs:Datatype ; owl:onDatatype xsd:string ;
                                  owl:withRestrictions ( [ xsd:pattern "[0-9]{9}" ] ) ] .
        "#,
    );
    let definition = consumer
        .ontology()
        .iter_axioms()
        .find(|a| matches!(a, Axiom::DatatypeDefinition { .. }))
        .expect("a DatatypeDefinition axiom");
    let Axiom::DatatypeDefinition { datatype, range } = definition else {
        unreachable!()
    };
    assert_eq!(datatype, &iri("SSN"));
    assert!(matches!(
        &**range,
        oxowlrdf::DataRange::DatatypeRestriction { restrictions, .. } if restrictions.len() == 1
    ));
}

#[test]
fn property_assertions_follow_predicate_evidence() {
    let consumer = consume(
        r#"
        :p a owl:ObjectProperty .
        :age a owl:DatatypeProperty .
        :note a owl:AnnotationProperty .
        :a :p :b .
        :a :age "42"^^xsd:integer .
        :a :note "remember me" .
        "#,
    );
    let ontology = consumer.ontology();
    assert!(ontology.iter_axioms().any(|a| matches!(
        a,
        Axiom::ObjectPropertyAssertion { source, target, .. }
            if *source == Individual::Named(iri("a")) && *target == Individual::Named(iri("b"))
    )));
    assert!(ontology
        .iter_axioms()
        .any(|a| matches!(a, Axiom::DataPropertyAssertion { .. })));
    assert!(ontology
        .iter_axioms()
        .any(|a| matches!(a, Axiom::AnnotationAssertion { .. })));
    assert!(consumer.unconsumed_triples().is_empty());
}

#[test]
fn untyped_predicates_default_to_annotations_only_in_lax_mode() {
    let lax = consume(r#":x :unknown "v" ."#);
    assert!(lax
        .ontology()
        .iter_axioms()
        .any(|a| matches!(a, Axiom::AnnotationAssertion { .. })));

    let strict = consume_strict(r#":x :unknown "v" ."#);
    assert_eq!(strict.ontology().axiom_count(), 0);
    assert_eq!(strict.unconsumed_triples().len(), 1);
}

#[test]
fn all_disjoint_classes_uses_the_members_list() {
    let consumer = consume(
        r#"
        [] a owl:AllDisjointClasses ; owl:members ( :A :B :C ) .
        :A a owl:Class . :B a owl:Class . :C a owl:Class .
        "#,
    );
    let disjoint = consumer
        .ontology()
        .iter_axioms()
        .find(|a| matches!(a, Axiom::DisjointClasses(_)))
        .expect("a DisjointClasses axiom");
    let Axiom::DisjointClasses(operands) = disjoint else {
        unreachable!()
    };
    assert_eq!(operands.len(), 3);
    assert!(consumer.unconsumed_triples().is_empty());
}

#[test]
fn same_and_different_individuals() {
    let consumer = consume(
        r#"
        :a owl:sameAs :b .
        :c owl:differentFrom :d .
        "#,
    );
    let ontology = consumer.ontology();
    assert!(ontology
        .iter_axioms()
        .any(|a| matches!(a, Axiom::SameIndividual(i) if i.len() == 2)));
    assert!(ontology
        .iter_axioms()
        .any(|a| matches!(a, Axiom::DifferentIndividuals(i) if i.len() == 2)));
}

#[test]
fn property_characteristics_and_inverse() {
    let consumer = consume(
        r#"
        :p a owl:ObjectProperty , owl:TransitiveProperty .
        :q a owl:ObjectProperty ; owl:inverseOf :p .
        :age a owl:DatatypeProperty , owl:FunctionalProperty .
        "#,
    );
    let ontology = consumer.ontology();
    assert!(ontology
        .iter_axioms()
        .any(|a| matches!(a, Axiom::TransitiveObjectProperty(_))));
    assert!(ontology
        .iter_axioms()
        .any(|a| matches!(a, Axiom::InverseObjectProperties(..))));
    // owl:FunctionalProperty on a data property resolves to the data axiom.
    assert!(ontology
        .iter_axioms()
        .any(|a| matches!(a, Axiom::FunctionalDataProperty(_))));
    assert!(!ontology
        .iter_axioms()
        .any(|a| matches!(a, Axiom::FunctionalObjectProperty(_))));
}

#[test]
fn boolean_expressions_and_enumerations_translate() {
    let consumer = consume(
        r#"
        :A a owl:Class ; owl:equivalentClass [
            owl:intersectionOf ( :B [ owl:complementOf :C ] ) ] .
        :B a owl:Class . :C a owl:Class .
        :E a owl:Class ; owl:equivalentClass [ owl:oneOf ( :x :y ) ] .
        "#,
    );
    let equivalents: Vec<_> = consumer
        .ontology()
        .iter_axioms()
        .filter_map(|a| match a {
            Axiom::EquivalentClasses(parts) => Some(parts),
            _ => None,
        })
        .collect();
    assert_eq!(equivalents.len(), 2);
    assert!(equivalents.iter().any(|parts| matches!(
        &*parts[1],
        ClassExpression::ObjectIntersectionOf(ops) if ops.len() == 2
    )));
    assert!(equivalents.iter().any(|parts| matches!(
        &*parts[1],
        ClassExpression::ObjectOneOf(individuals) if individuals.len() == 2
    )));
    assert!(consumer.unconsumed_triples().is_empty());
}

#[test]
fn domain_and_range_split_on_property_kind() {
    let consumer = consume(
        r#"
        :p a owl:ObjectProperty ; rdfs:domain :A ; rdfs:range :B .
        :age a owl:DatatypeProperty ; rdfs:domain :A ; rdfs:range xsd:integer .
        :A a owl:Class . :B a owl:Class .
        "#,
    );
    let ontology = consumer.ontology();
    assert!(ontology
        .iter_axioms()
        .any(|a| matches!(a, Axiom::ObjectPropertyDomain { .. })));
    assert!(ontology
        .iter_axioms()
        .any(|a| matches!(a, Axiom::ObjectPropertyRange { .. })));
    assert!(ontology
        .iter_axioms()
        .any(|a| matches!(a, Axiom::DataPropertyDomain { .. })));
    assert!(ontology.iter_axioms().any(|a| matches!(
        a,
        Axiom::DataPropertyRange { range, .. }
            if matches!(&**range, oxowlrdf::DataRange::Datatype(d) if d.as_str().ends_with("integer"))
    )));
}

#[test]
fn class_assertions_for_typed_individuals() {
    let consumer = consume(
        r#"
        :Dog a owl:Class .
        :fido a owl:NamedIndividual , :Dog .
        "#,
    );
    let ontology = consumer.ontology();
    assert!(ontology
        .iter_axioms()
        .any(|a| matches!(a, Axiom::DeclareNamedIndividual(_))));
    assert!(ontology.iter_axioms().any(|a| matches!(
        a,
        Axiom::ClassAssertion { class, individual }
            if individual == &Individual::Named(iri("fido"))
                && class.as_class() == Some(&OwlClass::new(iri("Dog")))
    )));
}
