use oxrdfio::RdfParseError;
use std::io;
use thiserror::Error;

/// Error returned while reading an ontology document.
///
/// Only the syntax layer produces hard errors. A malformed ontology is not
/// one: it still parses to its best structurally supportable interpretation,
/// and whatever could not be interpreted is reported as unconsumed triples.
#[derive(Debug, Error)]
pub enum OwlRdfParseError {
    /// I/O error while reading the document.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// An error in the RDF serialization syntax.
    #[error(transparent)]
    Rdf(#[from] RdfParseError),
    /// An invalid base IRI.
    #[error("invalid base IRI: {0}")]
    BaseIri(#[from] oxiri::IriParseError),
}
