//! OWL 2 entity types (classes, properties, individuals).

use oxrdf::{BlankNode, NamedNode, Subject, Term};
use std::fmt;

/// An OWL class (`owl:Class`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OwlClass(NamedNode);

impl OwlClass {
    /// Creates a new OWL class from a named node.
    #[inline]
    pub fn new(iri: impl Into<NamedNode>) -> Self {
        Self(iri.into())
    }

    /// Creates a new OWL class from an IRI string, validating it.
    #[inline]
    pub fn new_from_iri(iri: impl Into<String>) -> Result<Self, oxiri::IriParseError> {
        Ok(Self(NamedNode::new(iri)?))
    }

    /// Returns the IRI of this class.
    #[inline]
    pub fn iri(&self) -> &NamedNode {
        &self.0
    }

    /// Converts this class into its underlying named node.
    #[inline]
    pub fn into_inner(self) -> NamedNode {
        self.0
    }
}

impl fmt::Display for OwlClass {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<NamedNode> for OwlClass {
    #[inline]
    fn from(node: NamedNode) -> Self {
        Self(node)
    }
}

impl From<OwlClass> for NamedNode {
    #[inline]
    fn from(class: OwlClass) -> Self {
        class.0
    }
}

/// An OWL object property (`owl:ObjectProperty`).
///
/// Object properties relate individuals to individuals.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectProperty(NamedNode);

impl ObjectProperty {
    /// Creates a new object property from a named node.
    #[inline]
    pub fn new(iri: impl Into<NamedNode>) -> Self {
        Self(iri.into())
    }

    /// Creates a new object property from an IRI string, validating it.
    #[inline]
    pub fn new_from_iri(iri: impl Into<String>) -> Result<Self, oxiri::IriParseError> {
        Ok(Self(NamedNode::new(iri)?))
    }

    /// Returns the IRI of this property.
    #[inline]
    pub fn iri(&self) -> &NamedNode {
        &self.0
    }

    /// Converts this property into its underlying named node.
    #[inline]
    pub fn into_inner(self) -> NamedNode {
        self.0
    }
}

impl fmt::Display for ObjectProperty {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<NamedNode> for ObjectProperty {
    #[inline]
    fn from(node: NamedNode) -> Self {
        Self(node)
    }
}

impl From<ObjectProperty> for NamedNode {
    #[inline]
    fn from(property: ObjectProperty) -> Self {
        property.0
    }
}

/// An OWL data property (`owl:DatatypeProperty`).
///
/// Data properties relate individuals to literals.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DataProperty(NamedNode);

impl DataProperty {
    /// Creates a new data property from a named node.
    #[inline]
    pub fn new(iri: impl Into<NamedNode>) -> Self {
        Self(iri.into())
    }

    /// Creates a new data property from an IRI string, validating it.
    #[inline]
    pub fn new_from_iri(iri: impl Into<String>) -> Result<Self, oxiri::IriParseError> {
        Ok(Self(NamedNode::new(iri)?))
    }

    /// Returns the IRI of this property.
    #[inline]
    pub fn iri(&self) -> &NamedNode {
        &self.0
    }

    /// Converts this property into its underlying named node.
    #[inline]
    pub fn into_inner(self) -> NamedNode {
        self.0
    }
}

impl fmt::Display for DataProperty {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<NamedNode> for DataProperty {
    #[inline]
    fn from(node: NamedNode) -> Self {
        Self(node)
    }
}

impl From<DataProperty> for NamedNode {
    #[inline]
    fn from(property: DataProperty) -> Self {
        property.0
    }
}

/// An OWL annotation property (`owl:AnnotationProperty`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnnotationProperty(NamedNode);

impl AnnotationProperty {
    /// Creates a new annotation property from a named node.
    #[inline]
    pub fn new(iri: impl Into<NamedNode>) -> Self {
        Self(iri.into())
    }

    /// Creates a new annotation property from an IRI string, validating it.
    #[inline]
    pub fn new_from_iri(iri: impl Into<String>) -> Result<Self, oxiri::IriParseError> {
        Ok(Self(NamedNode::new(iri)?))
    }

    /// Returns the IRI of this property.
    #[inline]
    pub fn iri(&self) -> &NamedNode {
        &self.0
    }

    /// Converts this property into its underlying named node.
    #[inline]
    pub fn into_inner(self) -> NamedNode {
        self.0
    }
}

impl fmt::Display for AnnotationProperty {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<NamedNode> for AnnotationProperty {
    #[inline]
    fn from(node: NamedNode) -> Self {
        Self(node)
    }
}

/// An OWL individual, either named or anonymous.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Individual {
    /// A named individual, identified by an IRI.
    Named(NamedNode),
    /// An anonymous individual, scoped to one document.
    Anonymous(BlankNode),
}

impl Individual {
    /// Returns `true` if this individual is named.
    #[inline]
    pub fn is_named(&self) -> bool {
        matches!(self, Self::Named(_))
    }

    /// Returns the IRI if this individual is named.
    #[inline]
    pub fn as_named(&self) -> Option<&NamedNode> {
        match self {
            Self::Named(n) => Some(n),
            Self::Anonymous(_) => None,
        }
    }
}

impl fmt::Display for Individual {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(n) => n.fmt(f),
            Self::Anonymous(b) => b.fmt(f),
        }
    }
}

impl From<NamedNode> for Individual {
    #[inline]
    fn from(node: NamedNode) -> Self {
        Self::Named(node)
    }
}

impl From<BlankNode> for Individual {
    #[inline]
    fn from(node: BlankNode) -> Self {
        Self::Anonymous(node)
    }
}

impl From<Individual> for Subject {
    #[inline]
    fn from(individual: Individual) -> Self {
        match individual {
            Individual::Named(n) => n.into(),
            Individual::Anonymous(b) => b.into(),
        }
    }
}

impl From<Individual> for Term {
    #[inline]
    fn from(individual: Individual) -> Self {
        match individual {
            Individual::Named(n) => n.into(),
            Individual::Anonymous(b) => b.into(),
        }
    }
}
