//! OWL 2 annotations.

use crate::entity::AnnotationProperty;
use oxrdf::{BlankNode, Literal, NamedNode, Term};
use std::fmt;

/// The value of an annotation: an IRI, an anonymous individual or a literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotationValue {
    Iri(NamedNode),
    Anonymous(BlankNode),
    Literal(Literal),
}

impl fmt::Display for AnnotationValue {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iri(n) => n.fmt(f),
            Self::Anonymous(b) => b.fmt(f),
            Self::Literal(l) => l.fmt(f),
        }
    }
}

impl From<NamedNode> for AnnotationValue {
    #[inline]
    fn from(node: NamedNode) -> Self {
        Self::Iri(node)
    }
}

impl From<BlankNode> for AnnotationValue {
    #[inline]
    fn from(node: BlankNode) -> Self {
        Self::Anonymous(node)
    }
}

impl From<Literal> for AnnotationValue {
    #[inline]
    fn from(literal: Literal) -> Self {
        Self::Literal(literal)
    }
}

impl From<AnnotationValue> for Term {
    #[inline]
    fn from(value: AnnotationValue) -> Self {
        match value {
            AnnotationValue::Iri(n) => n.into(),
            AnnotationValue::Anonymous(b) => b.into(),
            AnnotationValue::Literal(l) => l.into(),
        }
    }
}

/// An annotation: a property paired with a value.
///
/// Annotations either stand on their own as annotation assertions or decorate
/// an axiom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    property: AnnotationProperty,
    value: AnnotationValue,
}

impl Annotation {
    /// Creates a new annotation.
    #[inline]
    pub fn new(property: impl Into<AnnotationProperty>, value: impl Into<AnnotationValue>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }

    /// Returns the annotation property.
    #[inline]
    pub fn property(&self) -> &AnnotationProperty {
        &self.property
    }

    /// Returns the annotation value.
    #[inline]
    pub fn value(&self) -> &AnnotationValue {
        &self.value
    }
}

impl fmt::Display for Annotation {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Annotation({} {})", self.property, self.value)
    }
}
