//! OWL 2 class expressions, object property expressions, and data ranges.
//!
//! Compound expressions hold their operands behind [`Rc`] so that a node
//! translated once is shared by every axiom that references it.

use crate::entity::{DataProperty, Individual, ObjectProperty, OwlClass};
use oxrdf::{Literal, NamedNode};
use std::rc::Rc;

/// An OWL 2 class expression.
///
/// Class expressions describe sets of individuals through various constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassExpression {
    /// A named class (atomic class)
    Class(OwlClass),

    /// ObjectIntersectionOf(C1, ..., Cn) - intersection of classes
    ObjectIntersectionOf(Vec<Rc<ClassExpression>>),

    /// ObjectUnionOf(C1, ..., Cn) - union of classes
    ObjectUnionOf(Vec<Rc<ClassExpression>>),

    /// ObjectComplementOf(C) - complement of a class
    ObjectComplementOf(Rc<ClassExpression>),

    /// ObjectOneOf(a1, ..., an) - enumeration of individuals
    ObjectOneOf(Vec<Individual>),

    /// ObjectSomeValuesFrom(P, C) - existential restriction
    ObjectSomeValuesFrom {
        property: Rc<ObjectPropertyExpression>,
        filler: Rc<ClassExpression>,
    },

    /// ObjectAllValuesFrom(P, C) - universal restriction
    ObjectAllValuesFrom {
        property: Rc<ObjectPropertyExpression>,
        filler: Rc<ClassExpression>,
    },

    /// ObjectHasValue(P, a) - has-value restriction
    ObjectHasValue {
        property: Rc<ObjectPropertyExpression>,
        individual: Individual,
    },

    /// ObjectHasSelf(P) - self restriction
    ObjectHasSelf(Rc<ObjectPropertyExpression>),

    /// ObjectMinCardinality(n, P) or ObjectMinCardinality(n, P, C)
    ObjectMinCardinality {
        cardinality: u32,
        property: Rc<ObjectPropertyExpression>,
        filler: Option<Rc<ClassExpression>>,
    },

    /// ObjectMaxCardinality(n, P) or ObjectMaxCardinality(n, P, C)
    ObjectMaxCardinality {
        cardinality: u32,
        property: Rc<ObjectPropertyExpression>,
        filler: Option<Rc<ClassExpression>>,
    },

    /// ObjectExactCardinality(n, P) or ObjectExactCardinality(n, P, C)
    ObjectExactCardinality {
        cardinality: u32,
        property: Rc<ObjectPropertyExpression>,
        filler: Option<Rc<ClassExpression>>,
    },

    /// DataSomeValuesFrom(P, D) - existential data restriction
    DataSomeValuesFrom {
        property: DataProperty,
        filler: Rc<DataRange>,
    },

    /// DataAllValuesFrom(P, D) - universal data restriction
    DataAllValuesFrom {
        property: DataProperty,
        filler: Rc<DataRange>,
    },

    /// DataHasValue(P, v) - has-value data restriction
    DataHasValue {
        property: DataProperty,
        value: Literal,
    },

    /// DataMinCardinality(n, P) or DataMinCardinality(n, P, D)
    DataMinCardinality {
        cardinality: u32,
        property: DataProperty,
        filler: Option<Rc<DataRange>>,
    },

    /// DataMaxCardinality(n, P) or DataMaxCardinality(n, P, D)
    DataMaxCardinality {
        cardinality: u32,
        property: DataProperty,
        filler: Option<Rc<DataRange>>,
    },

    /// DataExactCardinality(n, P) or DataExactCardinality(n, P, D)
    DataExactCardinality {
        cardinality: u32,
        property: DataProperty,
        filler: Option<Rc<DataRange>>,
    },
}

impl ClassExpression {
    /// Creates a named class expression.
    #[inline]
    pub fn class(c: impl Into<OwlClass>) -> Self {
        Self::Class(c.into())
    }

    /// Creates an intersection of class expressions.
    #[inline]
    pub fn intersection(operands: Vec<Rc<ClassExpression>>) -> Self {
        Self::ObjectIntersectionOf(operands)
    }

    /// Creates a union of class expressions.
    #[inline]
    pub fn union(operands: Vec<Rc<ClassExpression>>) -> Self {
        Self::ObjectUnionOf(operands)
    }

    /// Creates the complement of a class expression.
    #[inline]
    pub fn complement(operand: Rc<ClassExpression>) -> Self {
        Self::ObjectComplementOf(operand)
    }

    /// Returns `true` if this is a named class.
    #[inline]
    pub fn is_named(&self) -> bool {
        matches!(self, Self::Class(_))
    }

    /// Returns the named class if this is one.
    #[inline]
    pub fn as_class(&self) -> Option<&OwlClass> {
        match self {
            Self::Class(c) => Some(c),
            _ => None,
        }
    }
}

impl From<OwlClass> for ClassExpression {
    #[inline]
    fn from(c: OwlClass) -> Self {
        Self::Class(c)
    }
}

/// An OWL 2 object property expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ObjectPropertyExpression {
    /// A named object property
    ObjectProperty(ObjectProperty),

    /// ObjectInverseOf(P) - inverse of a named property
    ObjectInverseOf(ObjectProperty),
}

impl ObjectPropertyExpression {
    /// Creates an inverse property expression.
    #[inline]
    pub fn inverse(property: ObjectProperty) -> Self {
        Self::ObjectInverseOf(property)
    }

    /// Returns `true` if this is a named property.
    #[inline]
    pub fn is_named(&self) -> bool {
        matches!(self, Self::ObjectProperty(_))
    }

    /// Returns the underlying named property, ignoring inversion.
    #[inline]
    pub fn base_property(&self) -> &ObjectProperty {
        match self {
            Self::ObjectProperty(p) | Self::ObjectInverseOf(p) => p,
        }
    }
}

impl From<ObjectProperty> for ObjectPropertyExpression {
    #[inline]
    fn from(p: ObjectProperty) -> Self {
        Self::ObjectProperty(p)
    }
}

/// A single constraining facet and its value inside a datatype restriction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetRestriction {
    /// The constraining facet, e.g. `xsd:minInclusive`.
    pub facet: NamedNode,
    /// The restriction value.
    pub value: Literal,
}

/// An OWL 2 data range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataRange {
    /// A named datatype (e.g., xsd:string)
    Datatype(NamedNode),

    /// DataIntersectionOf(D1, ..., Dn)
    DataIntersectionOf(Vec<Rc<DataRange>>),

    /// DataUnionOf(D1, ..., Dn)
    DataUnionOf(Vec<Rc<DataRange>>),

    /// DataComplementOf(D)
    DataComplementOf(Rc<DataRange>),

    /// DataOneOf(v1, ..., vn) - enumeration of literals
    DataOneOf(Vec<Literal>),

    /// DatatypeRestriction(D, facet1 value1, ...)
    DatatypeRestriction {
        datatype: NamedNode,
        restrictions: Vec<FacetRestriction>,
    },
}

impl DataRange {
    /// Creates a named datatype data range.
    #[inline]
    pub fn datatype(datatype: impl Into<NamedNode>) -> Self {
        Self::Datatype(datatype.into())
    }

    /// Returns the datatype if this is a simple datatype.
    #[inline]
    pub fn as_datatype(&self) -> Option<&NamedNode> {
        match self {
            Self::Datatype(datatype) => Some(datatype),
            _ => None,
        }
    }
}

impl From<NamedNode> for DataRange {
    #[inline]
    fn from(node: NamedNode) -> Self {
        Self::Datatype(node)
    }
}
