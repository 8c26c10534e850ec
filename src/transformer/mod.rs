//! Payload transformers.

mod request;
mod response;

pub use request::QuoteRequestTransformer;
pub use response::QuoteResponseTransformer;

use crate::context::TransformContext;
use async_trait::async_trait;
use xmltree::{Element, XMLNode};

/// Trait for rewriting one payload document into another.
#[async_trait]
pub trait Transformer: Send + Sync {
    /// Produce a new target document from the source document.
    ///
    /// The source is read-only. Implementations build the target fresh on
    /// every call and hold no state across invocations, so a single
    /// transformer is safe to invoke concurrently for independent messages.
    async fn transform(
        &self,
        ctx: &TransformContext,
        doc: &Element,
    ) -> Result<Element, TransformError>;

    /// Transformer name for logging.
    fn name(&self) -> &'static str;
}

/// Errors surfaced to the mediation host as a failed transform.
///
/// The transformer performs no retry or fault routing itself; on any error
/// the envelope payload is left unmodified and the host decides what to do.
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    /// An expected element is absent from the source document, or carries
    /// no text.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    /// The source document root is not the expected element.
    #[error("schema mismatch: expected <{expected}>, found <{found}>")]
    SchemaMismatch {
        expected: &'static str,
        found: String,
    },

    /// The payload is not well-formed XML.
    ///
    /// A refinement of the malformed-payload case that preserves the parse
    /// diagnostic; hosts classifying errors by the two-way taxonomy should
    /// use [`TransformError::is_malformed_payload`], which reports both.
    #[error("payload is not well-formed XML: {0}")]
    Parse(#[from] xmltree::ParseError),

    /// The target document could not be serialized.
    #[error("failed to serialize document: {0}")]
    Serialize(String),
}

impl TransformError {
    /// Whether the source payload was unusable, either not well-formed XML
    /// or missing the expected element or text. Distinguishes the
    /// malformed-payload cases from a schema mismatch.
    pub fn is_malformed_payload(&self) -> bool {
        matches!(
            self,
            TransformError::MalformedPayload(_) | TransformError::Parse(_)
        )
    }
}

/// Verify the document root against the expected element name.
pub(crate) fn check_root(doc: &Element, expected: &'static str) -> Result<(), TransformError> {
    if doc.name != expected {
        return Err(TransformError::SchemaMismatch {
            expected,
            found: doc.name.clone(),
        });
    }
    Ok(())
}

/// Find the first descendant element with the given local name, in document
/// order, ignoring namespaces. Clients prefix the quote elements
/// inconsistently, so matching is on local names only.
pub(crate) fn find_descendant<'a>(el: &'a Element, local_name: &str) -> Option<&'a Element> {
    for node in &el.children {
        if let XMLNode::Element(child) = node {
            if child.name == local_name {
                return Some(child);
            }
            if let Some(found) = find_descendant(child, local_name) {
                return Some(found);
            }
        }
    }
    None
}

/// Non-empty text content of an element.
pub(crate) fn text_of(el: &Element) -> Option<String> {
    el.get_text()
        .filter(|text| !text.is_empty())
        .map(|text| text.into_owned())
}

/// Extract the text of the first descendant with the given local name.
pub(crate) fn extract_scalar(doc: &Element, local_name: &str) -> Result<String, TransformError> {
    let el = find_descendant(doc, local_name).ok_or_else(|| {
        TransformError::MalformedPayload(format!("no <{local_name}> element in payload"))
    })?;
    text_of(el).ok_or_else(|| {
        TransformError::MalformedPayload(format!("<{local_name}> element has no text"))
    })
}
