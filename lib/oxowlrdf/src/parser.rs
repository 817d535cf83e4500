//! Front end over the RDF syntax layer.

use crate::consumer::{GraphConsumer, ParserConfig};
use crate::error::OwlRdfParseError;
use crate::ontology::Ontology;
use oxiri::{Iri, IriParseError};
use oxrdf::{GraphName, Triple};
use oxrdfio::{RdfFormat, RdfParser};
use std::io::Read;

/// Reads an OWL 2 ontology from any RDF serialization [`oxrdfio`] understands.
///
/// The syntax layer tokenizes the document and this parser feeds every
/// default-graph triple into a [`GraphConsumer`] session, signalling
/// end-of-document when the stream is exhausted.
///
/// ```
/// use oxowlrdf::{OwlRdfParser, RdfFormat};
///
/// let file = r#"
/// @prefix owl: <http://www.w3.org/2002/07/owl#> .
/// @prefix : <http://example.com/> .
/// : a owl:Ontology .
/// :Cat a owl:Class .
/// "#;
///
/// let ontology = OwlRdfParser::new().parse_slice(RdfFormat::Turtle, file.as_bytes())?;
/// assert_eq!(ontology.iri().map(|i| i.as_str()), Some("http://example.com/"));
/// assert_eq!(ontology.axiom_count(), 1);
/// # Result::<_, oxowlrdf::OwlRdfParseError>::Ok(())
/// ```
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct OwlRdfParser {
    config: ParserConfig,
    base: Option<Iri<String>>,
}

impl OwlRdfParser {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects constructs without explicit typing instead of defaulting them
    /// through lax classification.
    #[inline]
    pub fn strict(mut self) -> Self {
        self.config = self.config.strict();
        self
    }

    /// Resolves relative IRIs in the document against the given base.
    #[inline]
    pub fn with_base_iri(mut self, base_iri: impl Into<String>) -> Result<Self, IriParseError> {
        self.base = Some(Iri::parse(base_iri.into())?);
        Ok(self)
    }

    /// Parses an ontology document from a [`Read`] implementation.
    pub fn parse_reader<R: Read>(
        &self,
        format: RdfFormat,
        reader: R,
    ) -> Result<Ontology, OwlRdfParseError> {
        Ok(self.consume_reader(format, reader)?.into_ontology())
    }

    /// Parses an ontology document from a byte slice.
    pub fn parse_slice(
        &self,
        format: RdfFormat,
        slice: &(impl AsRef<[u8]> + ?Sized),
    ) -> Result<Ontology, OwlRdfParseError> {
        self.parse_reader(format, slice.as_ref())
    }

    /// Like [`parse_reader`](Self::parse_reader) but returns the whole
    /// session, giving access to the unconsumed-triple diagnostics next to
    /// the ontology.
    pub fn consume_reader<R: Read>(
        &self,
        format: RdfFormat,
        reader: R,
    ) -> Result<GraphConsumer, OwlRdfParseError> {
        let mut parser = RdfParser::from_format(format);
        if let Some(base) = &self.base {
            parser = parser.with_base_iri(base.as_str())?;
        }
        let mut consumer = GraphConsumer::with_config(self.config);
        for quad in parser.for_reader(reader) {
            let quad = quad?;
            if quad.graph_name == GraphName::DefaultGraph {
                consumer.add_triple(Triple::new(quad.subject, quad.predicate, quad.object));
            }
        }
        consumer.end_of_document();
        Ok(consumer)
    }
}
