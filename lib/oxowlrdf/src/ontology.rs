//! OWL 2 ontology - the sink that receives assembled axioms and declared entities.

use crate::axiom::{AnnotatedAxiom, Axiom};
use crate::entity::{AnnotationProperty, DataProperty, Individual, ObjectProperty, OwlClass};
use oxrdf::NamedNode;
use rustc_hash::FxHashSet;

/// An OWL 2 ontology.
///
/// A collection of axioms describing classes, properties and individuals in a
/// domain. The consumer pushes axioms into it in the order they become
/// resolvable; that order carries no meaning beyond happens-before.
#[derive(Debug, Clone, Default)]
pub struct Ontology {
    /// The ontology IRI (optional)
    iri: Option<NamedNode>,

    /// The version IRI (optional)
    version_iri: Option<NamedNode>,

    /// Imported ontology IRIs
    imports: Vec<NamedNode>,

    /// All axioms, with their annotations
    axioms: Vec<AnnotatedAxiom>,

    /// Declared classes (for quick lookup)
    classes: FxHashSet<OwlClass>,

    /// Declared object properties
    object_properties: FxHashSet<ObjectProperty>,

    /// Declared data properties
    data_properties: FxHashSet<DataProperty>,

    /// Declared annotation properties
    annotation_properties: FxHashSet<AnnotationProperty>,

    /// Declared individuals
    individuals: FxHashSet<Individual>,
}

impl Ontology {
    /// Creates a new empty ontology.
    pub fn new(iri: Option<NamedNode>) -> Self {
        Self {
            iri,
            ..Self::default()
        }
    }

    /// Creates a new ontology with the given IRI string.
    pub fn with_iri(iri: impl Into<String>) -> Result<Self, oxiri::IriParseError> {
        Ok(Self::new(Some(NamedNode::new(iri)?)))
    }

    /// Returns the ontology IRI.
    #[inline]
    pub fn iri(&self) -> Option<&NamedNode> {
        self.iri.as_ref()
    }

    /// Sets the ontology IRI.
    #[inline]
    pub fn set_iri(&mut self, iri: Option<NamedNode>) {
        self.iri = iri;
    }

    /// Returns the version IRI.
    #[inline]
    pub fn version_iri(&self) -> Option<&NamedNode> {
        self.version_iri.as_ref()
    }

    /// Sets the version IRI.
    #[inline]
    pub fn set_version_iri(&mut self, iri: Option<NamedNode>) {
        self.version_iri = iri;
    }

    /// Returns the imported ontology IRIs.
    #[inline]
    pub fn imports(&self) -> &[NamedNode] {
        &self.imports
    }

    /// Adds an import declaration.
    pub fn add_import(&mut self, iri: NamedNode) {
        if !self.imports.contains(&iri) {
            self.imports.push(iri);
        }
    }

    /// Adds an axiom to the ontology, updating the declaration indexes.
    pub fn add_axiom(&mut self, axiom: impl Into<AnnotatedAxiom>) {
        let axiom = axiom.into();
        match axiom.axiom() {
            Axiom::DeclareClass(c) => {
                self.classes.insert(c.clone());
            }
            Axiom::DeclareObjectProperty(p) => {
                self.object_properties.insert(p.clone());
            }
            Axiom::DeclareDataProperty(p) => {
                self.data_properties.insert(p.clone());
            }
            Axiom::DeclareAnnotationProperty(p) => {
                self.annotation_properties.insert(p.clone());
            }
            Axiom::DeclareNamedIndividual(i) => {
                self.individuals.insert(i.clone());
            }
            Axiom::DisjointUnion { class, .. } => {
                self.classes.insert(class.clone());
            }
            Axiom::ClassAssertion { individual, .. } => {
                self.individuals.insert(individual.clone());
            }
            _ => {}
        }
        self.axioms.push(axiom);
    }

    /// Returns all axioms in the ontology.
    #[inline]
    pub fn axioms(&self) -> &[AnnotatedAxiom] {
        &self.axioms
    }

    /// Returns an iterator over the bare axioms, ignoring annotations.
    pub fn iter_axioms(&self) -> impl Iterator<Item = &Axiom> {
        self.axioms.iter().map(AnnotatedAxiom::axiom)
    }

    /// Returns the number of axioms.
    #[inline]
    pub fn axiom_count(&self) -> usize {
        self.axioms.len()
    }

    /// Returns `true` if the given bare axiom is present, ignoring annotations.
    pub fn contains_axiom_ignoring_annotations(&self, axiom: &Axiom) -> bool {
        self.iter_axioms().any(|a| a == axiom)
    }

    /// Returns all declared classes.
    pub fn classes(&self) -> impl Iterator<Item = &OwlClass> {
        self.classes.iter()
    }

    /// Returns all declared object properties.
    pub fn object_properties(&self) -> impl Iterator<Item = &ObjectProperty> {
        self.object_properties.iter()
    }

    /// Returns all declared data properties.
    pub fn data_properties(&self) -> impl Iterator<Item = &DataProperty> {
        self.data_properties.iter()
    }

    /// Returns all declared annotation properties.
    pub fn annotation_properties(&self) -> impl Iterator<Item = &AnnotationProperty> {
        self.annotation_properties.iter()
    }

    /// Returns all declared individuals.
    pub fn individuals(&self) -> impl Iterator<Item = &Individual> {
        self.individuals.iter()
    }

    /// Checks if a class is declared in this ontology.
    pub fn contains_class(&self, class: &OwlClass) -> bool {
        self.classes.contains(class)
    }

    /// Checks if an individual is declared.
    pub fn contains_individual(&self, individual: &Individual) -> bool {
        self.individuals.contains(individual)
    }
}

impl std::fmt::Display for Ontology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(iri) = &self.iri {
            write!(f, "Ontology({iri})")?;
        } else {
            write!(f, "Ontology(anonymous)")?;
        }
        write!(f, " [{} axioms]", self.axioms.len())
    }
}
