//! OWL 2 axiom types.
//!
//! Axioms are the basic statements in an OWL 2 ontology. The consumer wraps
//! every assembled axiom in an [`AnnotatedAxiom`] carrying the annotations
//! that were pending when the axiom was assembled.

use crate::annotation::{Annotation, AnnotationValue};
use crate::entity::{AnnotationProperty, DataProperty, Individual, ObjectProperty, OwlClass};
use crate::expression::{ClassExpression, DataRange, ObjectPropertyExpression};
use oxrdf::{Literal, NamedNode, Subject};
use std::rc::Rc;

/// An OWL 2 axiom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Axiom {
    // === Class Axioms ===

    /// SubClassOf(sub, super) - sub is a subclass of super
    SubClassOf {
        sub_class: Rc<ClassExpression>,
        super_class: Rc<ClassExpression>,
    },

    /// EquivalentClasses(C1, C2, ...) - all classes are equivalent
    EquivalentClasses(Vec<Rc<ClassExpression>>),

    /// DisjointClasses(C1, C2, ...) - classes have no common instances
    DisjointClasses(Vec<Rc<ClassExpression>>),

    /// DisjointUnion(C, C1, ..., Cn) - C is the disjoint union of C1...Cn
    ///
    /// The operands do not include the owning class.
    DisjointUnion {
        class: OwlClass,
        operands: Vec<Rc<ClassExpression>>,
    },

    /// DatatypeDefinition(D, DR) - the named datatype D is defined as DR
    DatatypeDefinition {
        datatype: NamedNode,
        range: Rc<DataRange>,
    },

    // === Object Property Axioms ===

    /// SubObjectPropertyOf(sub, super)
    SubObjectPropertyOf {
        sub_property: Rc<ObjectPropertyExpression>,
        super_property: Rc<ObjectPropertyExpression>,
    },

    /// EquivalentObjectProperties(P1, P2, ...)
    EquivalentObjectProperties(Vec<Rc<ObjectPropertyExpression>>),

    /// DisjointObjectProperties(P1, P2, ...)
    DisjointObjectProperties(Vec<Rc<ObjectPropertyExpression>>),

    /// ObjectPropertyDomain(P, C)
    ObjectPropertyDomain {
        property: Rc<ObjectPropertyExpression>,
        domain: Rc<ClassExpression>,
    },

    /// ObjectPropertyRange(P, C)
    ObjectPropertyRange {
        property: Rc<ObjectPropertyExpression>,
        range: Rc<ClassExpression>,
    },

    /// InverseObjectProperties(P1, P2)
    InverseObjectProperties(Rc<ObjectPropertyExpression>, Rc<ObjectPropertyExpression>),

    /// FunctionalObjectProperty(P)
    FunctionalObjectProperty(Rc<ObjectPropertyExpression>),

    /// InverseFunctionalObjectProperty(P)
    InverseFunctionalObjectProperty(Rc<ObjectPropertyExpression>),

    /// ReflexiveObjectProperty(P)
    ReflexiveObjectProperty(Rc<ObjectPropertyExpression>),

    /// IrreflexiveObjectProperty(P)
    IrreflexiveObjectProperty(Rc<ObjectPropertyExpression>),

    /// SymmetricObjectProperty(P)
    SymmetricObjectProperty(Rc<ObjectPropertyExpression>),

    /// AsymmetricObjectProperty(P)
    AsymmetricObjectProperty(Rc<ObjectPropertyExpression>),

    /// TransitiveObjectProperty(P)
    TransitiveObjectProperty(Rc<ObjectPropertyExpression>),

    // === Data Property Axioms ===

    /// SubDataPropertyOf(sub, super)
    SubDataPropertyOf {
        sub_property: DataProperty,
        super_property: DataProperty,
    },

    /// EquivalentDataProperties(P1, P2, ...)
    EquivalentDataProperties(Vec<DataProperty>),

    /// DisjointDataProperties(P1, P2, ...)
    DisjointDataProperties(Vec<DataProperty>),

    /// DataPropertyDomain(P, C)
    DataPropertyDomain {
        property: DataProperty,
        domain: Rc<ClassExpression>,
    },

    /// DataPropertyRange(P, D)
    DataPropertyRange {
        property: DataProperty,
        range: Rc<DataRange>,
    },

    /// FunctionalDataProperty(P)
    FunctionalDataProperty(DataProperty),

    // === Individual Axioms (Assertions) ===

    /// ClassAssertion(C, a) - a is an instance of C
    ClassAssertion {
        class: Rc<ClassExpression>,
        individual: Individual,
    },

    /// ObjectPropertyAssertion(P, a, b) - (a, b) is in P
    ObjectPropertyAssertion {
        property: Rc<ObjectPropertyExpression>,
        source: Individual,
        target: Individual,
    },

    /// DataPropertyAssertion(P, a, v) - (a, v) is in P
    DataPropertyAssertion {
        property: DataProperty,
        source: Individual,
        target: Literal,
    },

    /// SameIndividual(a1, a2, ...)
    SameIndividual(Vec<Individual>),

    /// DifferentIndividuals(a1, a2, ...)
    DifferentIndividuals(Vec<Individual>),

    // === Annotation Axioms ===

    /// AnnotationAssertion(P, s, v)
    AnnotationAssertion {
        subject: Subject,
        property: AnnotationProperty,
        value: AnnotationValue,
    },

    /// SubAnnotationPropertyOf(sub, super)
    SubAnnotationPropertyOf {
        sub_property: AnnotationProperty,
        super_property: AnnotationProperty,
    },

    // === Declaration Axioms ===

    /// Declaration(Class(C))
    DeclareClass(OwlClass),

    /// Declaration(Datatype(D))
    DeclareDatatype(NamedNode),

    /// Declaration(ObjectProperty(P))
    DeclareObjectProperty(ObjectProperty),

    /// Declaration(DataProperty(P))
    DeclareDataProperty(DataProperty),

    /// Declaration(AnnotationProperty(P))
    DeclareAnnotationProperty(AnnotationProperty),

    /// Declaration(NamedIndividual(a))
    DeclareNamedIndividual(Individual),
}

impl Axiom {
    /// Creates a SubClassOf axiom.
    #[inline]
    pub fn subclass_of(sub: Rc<ClassExpression>, sup: Rc<ClassExpression>) -> Self {
        Self::SubClassOf {
            sub_class: sub,
            super_class: sup,
        }
    }

    /// Creates a ClassAssertion axiom.
    #[inline]
    pub fn class_assertion(class: Rc<ClassExpression>, individual: impl Into<Individual>) -> Self {
        Self::ClassAssertion {
            class,
            individual: individual.into(),
        }
    }

    /// For a [`DisjointUnion`](Self::DisjointUnion) axiom, the class that owns the union.
    #[inline]
    pub fn disjoint_union_class(&self) -> Option<&OwlClass> {
        match self {
            Self::DisjointUnion { class, .. } => Some(class),
            _ => None,
        }
    }

    /// For a [`DisjointUnion`](Self::DisjointUnion) axiom, its operands, not including the owning class.
    #[inline]
    pub fn disjoint_union_operands(&self) -> Option<&[Rc<ClassExpression>]> {
        match self {
            Self::DisjointUnion { operands, .. } => Some(operands),
            _ => None,
        }
    }

    /// For a [`DisjointUnion`](Self::DisjointUnion) axiom, the EquivalentClasses view:
    /// `EquivalentClasses(C, ObjectUnionOf(C1, ..., Cn))`.
    ///
    /// Derived on each call from the stored operands.
    pub fn equivalent_classes_view(&self) -> Option<Axiom> {
        match self {
            Self::DisjointUnion { class, operands } => Some(Axiom::EquivalentClasses(vec![
                Rc::new(ClassExpression::Class(class.clone())),
                Rc::new(ClassExpression::ObjectUnionOf(operands.clone())),
            ])),
            _ => None,
        }
    }

    /// For a [`DisjointUnion`](Self::DisjointUnion) axiom, the DisjointClasses view:
    /// `DisjointClasses(C1, ..., Cn)` over the operands.
    ///
    /// Derived on each call from the stored operands.
    pub fn disjoint_classes_view(&self) -> Option<Axiom> {
        match self {
            Self::DisjointUnion { operands, .. } => {
                Some(Axiom::DisjointClasses(operands.clone()))
            }
            _ => None,
        }
    }
}

/// An [`Axiom`] together with the annotations attached to it.
///
/// Structural axiom equality ignores annotations: use
/// [`without_annotations`](Self::without_annotations) to get the bare
/// comparison form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedAxiom {
    axiom: Axiom,
    annotations: Vec<Annotation>,
}

impl AnnotatedAxiom {
    /// Creates a new annotated axiom.
    #[inline]
    pub fn new(axiom: Axiom, annotations: Vec<Annotation>) -> Self {
        Self { axiom, annotations }
    }

    /// Returns the underlying axiom.
    #[inline]
    pub fn axiom(&self) -> &Axiom {
        &self.axiom
    }

    /// Returns the annotations attached to this axiom.
    #[inline]
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Returns `true` if at least one annotation is attached.
    #[inline]
    pub fn is_annotated(&self) -> bool {
        !self.annotations.is_empty()
    }

    /// Returns a structurally identical axiom with an empty annotation set.
    ///
    /// Used for annotation-insensitive equality and lookup.
    #[inline]
    pub fn without_annotations(&self) -> AnnotatedAxiom {
        Self {
            axiom: self.axiom.clone(),
            annotations: Vec::new(),
        }
    }

    /// Consumes this wrapper, returning the bare axiom.
    #[inline]
    pub fn into_axiom(self) -> Axiom {
        self.axiom
    }
}

impl From<Axiom> for AnnotatedAxiom {
    #[inline]
    fn from(axiom: Axiom) -> Self {
        Self {
            axiom,
            annotations: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(iri: &str) -> OwlClass {
        OwlClass::new_from_iri(format!("http://example.com/{iri}")).unwrap()
    }

    fn expr(iri: &str) -> Rc<ClassExpression> {
        Rc::new(ClassExpression::Class(class(iri)))
    }

    #[test]
    fn disjoint_union_views() {
        let d = expr("D");
        let e = expr("E");
        let axiom = Axiom::DisjointUnion {
            class: class("C"),
            operands: vec![Rc::clone(&d), Rc::clone(&e)],
        };

        assert_eq!(axiom.disjoint_union_class(), Some(&class("C")));
        assert_eq!(axiom.disjoint_union_operands().unwrap().len(), 2);

        let equivalent = axiom.equivalent_classes_view().unwrap();
        let Axiom::EquivalentClasses(parts) = &equivalent else {
            panic!("expected EquivalentClasses");
        };
        assert_eq!(*parts[0], ClassExpression::Class(class("C")));
        assert_eq!(
            *parts[1],
            ClassExpression::ObjectUnionOf(vec![Rc::clone(&d), Rc::clone(&e)])
        );

        let disjoint = axiom.disjoint_classes_view().unwrap();
        assert_eq!(disjoint, Axiom::DisjointClasses(vec![d, e]));

        // The views are derived, not cached: two calls agree.
        assert_eq!(axiom.equivalent_classes_view(), Some(equivalent));
    }

    #[test]
    fn without_annotations_strips_only_annotations() {
        let axiom = Axiom::DisjointUnion {
            class: class("C"),
            operands: vec![expr("D"), expr("E")],
        };
        let annotated = AnnotatedAxiom::new(
            axiom.clone(),
            vec![Annotation::new(
                AnnotationProperty::new_from_iri("http://www.w3.org/2000/01/rdf-schema#comment")
                    .unwrap(),
                oxrdf::Literal::new_simple_literal("a comment"),
            )],
        );
        assert!(annotated.is_annotated());

        let bare = annotated.without_annotations();
        assert!(!bare.is_annotated());
        assert_eq!(bare.axiom(), &axiom);
        assert_ne!(annotated, bare);
        assert_eq!(annotated.without_annotations(), bare);
    }
}
