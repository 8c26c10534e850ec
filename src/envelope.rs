//! Message envelope boundary.
//!
//! The mediation host owns the envelope and its lifecycle. The transformer
//! touches exactly two operations on it: get payload XML and set payload
//! XML. Hosts plug in by implementing [`PayloadEnvelope`] as an adapter over
//! their own message context; [`InMemoryEnvelope`] is the adapter used in
//! tests and embedded hosts.

use crate::transformer::TransformError;
use xmltree::{Element, EmitterConfig};

/// Host-side message envelope holding one XML payload document.
pub trait PayloadEnvelope {
    /// Current payload document, if any.
    fn payload_xml(&self) -> Option<&Element>;

    /// Replace the payload with a newly built document.
    fn set_payload_xml(&mut self, doc: Element);
}

/// In-memory envelope adapter.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEnvelope {
    payload: Option<Element>,
}

impl InMemoryEnvelope {
    /// Create an envelope around an already-parsed payload.
    pub fn new(payload: Element) -> Self {
        Self {
            payload: Some(payload),
        }
    }

    /// Parse an envelope payload from serialized XML.
    pub fn from_xml(xml: &str) -> Result<Self, TransformError> {
        Ok(Self::new(parse_document(xml)?))
    }

    /// Consume the envelope and take the payload out.
    pub fn into_payload(self) -> Option<Element> {
        self.payload
    }
}

impl PayloadEnvelope for InMemoryEnvelope {
    fn payload_xml(&self) -> Option<&Element> {
        self.payload.as_ref()
    }

    fn set_payload_xml(&mut self, doc: Element) {
        self.payload = Some(doc);
    }
}

/// Parse a payload document from text.
pub fn parse_document(xml: &str) -> Result<Element, TransformError> {
    Ok(Element::parse(xml.as_bytes())?)
}

/// Serialize a payload document without an XML declaration.
pub fn document_to_string(doc: &Element) -> Result<String, TransformError> {
    let mut buf = Vec::new();
    let config = EmitterConfig::new().write_document_declaration(false);
    doc.write_with_config(&mut buf, config)
        .map_err(|e| TransformError::Serialize(e.to_string()))?;
    String::from_utf8(buf).map_err(|e| TransformError::Serialize(e.to_string()))
}
