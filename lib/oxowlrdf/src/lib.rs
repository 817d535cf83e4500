//! Translation of RDF graphs into OWL 2 axioms.
//!
//! This crate turns an unordered stream of RDF triples encoding an OWL 2
//! ontology into a typed axiom model:
//! - a session-scoped triple store with per-triple consumption tracking
//! - strict/lax syntactic classification of every graph node
//! - safe walking of RDF-list encodings (cycle and termination checks)
//! - memoized translation with identity sharing of translated objects
//! - axiom assembly with pending-annotation attachment
//!
//! The syntax layer is external: feed triples from [`oxrdfio`] or [`oxttl`](https://docs.rs/oxttl)
//! through [`OwlRdfParser`], or drive a [`GraphConsumer`] directly.
//!
//! # Example
//! ```
//! use oxowlrdf::{Axiom, GraphConsumer};
//!
//! let file = r#"
//! @prefix owl: <http://www.w3.org/2002/07/owl#> .
//! @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
//! @prefix : <http://example.com/> .
//! :Dog a owl:Class ; rdfs:subClassOf :Animal .
//! :Animal a owl:Class .
//! "#;
//!
//! let mut consumer = GraphConsumer::new();
//! for triple in oxttl::TurtleParser::new().for_reader(file.as_bytes()) {
//!     consumer.add_triple(triple?);
//! }
//! consumer.end_of_document();
//!
//! let ontology = consumer.into_ontology();
//! assert_eq!(ontology.axiom_count(), 3);
//! assert!(ontology
//!     .iter_axioms()
//!     .any(|a| matches!(a, Axiom::SubClassOf { .. })));
//! # Result::<_, Box<dyn std::error::Error>>::Ok(())
//! ```

mod annotation;
mod axiom;
mod classify;
mod consumer;
mod entity;
mod error;
mod expression;
mod list;
mod ontology;
mod parser;
mod store;
mod translate;
pub mod vocab;

pub use annotation::{Annotation, AnnotationValue};
pub use axiom::{AnnotatedAxiom, Axiom};
pub use classify::NodeCategory;
pub use consumer::{GraphConsumer, ParserConfig};
pub use entity::{AnnotationProperty, DataProperty, Individual, ObjectProperty, OwlClass};
pub use error::OwlRdfParseError;
pub use expression::{ClassExpression, DataRange, FacetRestriction, ObjectPropertyExpression};
pub use ontology::Ontology;
pub use oxrdfio::RdfFormat;
pub use parser::OwlRdfParser;
