//! Inbound (request direction) payload transformer.

use super::{check_root, extract_scalar, TransformError, Transformer};
use crate::config::Settings;
use crate::context::TransformContext;
use crate::schema;
use async_trait::async_trait;
use xmltree::Element;

/// Rewrites a quote request into the delayed-quotes request schema.
///
/// Extracts the ticker symbol from the source document and rebuilds the
/// payload as `<getQuote><symbol xsi:type="xsd:string">..</symbol></getQuote>`
/// in the delayed-quotes namespace.
pub struct QuoteRequestTransformer {
    /// Require the `getQuote` root on the source document.
    strict_root: bool,
}

impl QuoteRequestTransformer {
    /// Create a new request transformer from settings.
    pub fn new(settings: &Settings) -> Self {
        Self {
            strict_root: settings.strict_root,
        }
    }
}

#[async_trait]
impl Transformer for QuoteRequestTransformer {
    async fn transform(
        &self,
        _ctx: &TransformContext,
        doc: &Element,
    ) -> Result<Element, TransformError> {
        if self.strict_root {
            check_root(doc, schema::REQUEST_ROOT)?;
        }

        let symbol = extract_scalar(doc, schema::SYMBOL_ELEMENT)?;
        Ok(schema::build_quote_request(&symbol))
    }

    fn name(&self) -> &'static str {
        "quote_request"
    }
}
