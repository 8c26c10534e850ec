//! Outbound (response direction) payload transformer.

use super::{check_root, find_descendant, text_of, TransformError, Transformer};
use crate::config::Settings;
use crate::context::TransformContext;
use crate::schema;
use async_trait::async_trait;
use xmltree::Element;

/// Rewrites a quote response into the sample response schema.
///
/// Extracts the scalar result from the source document and rebuilds the
/// payload as `<ns:getQuoteResponse><ns:return><ns:last>..</ns:last></ns:return></ns:getQuoteResponse>`.
pub struct QuoteResponseTransformer {
    /// Require the `getQuoteResponse` root on the source document.
    strict_root: bool,
}

impl QuoteResponseTransformer {
    /// Create a new response transformer from settings.
    pub fn new(settings: &Settings) -> Self {
        Self {
            strict_root: settings.strict_root,
        }
    }
}

#[async_trait]
impl Transformer for QuoteResponseTransformer {
    async fn transform(
        &self,
        _ctx: &TransformContext,
        doc: &Element,
    ) -> Result<Element, TransformError> {
        if self.strict_root {
            check_root(doc, schema::RESPONSE_ROOT)?;
        }

        // The upstream service reports the value in <Result>; our own output
        // carries it in <return>/<last>, so accept either location to keep
        // re-runs on schema-compatible documents stable.
        let el = find_descendant(doc, schema::RESULT_ELEMENT)
            .or_else(|| find_descendant(doc, schema::LAST_ELEMENT))
            .ok_or_else(|| {
                TransformError::MalformedPayload(format!(
                    "no <{}> or <{}> element in payload",
                    schema::RESULT_ELEMENT,
                    schema::LAST_ELEMENT
                ))
            })?;
        let value = text_of(el).ok_or_else(|| {
            TransformError::MalformedPayload(format!("<{}> element has no text", el.name))
        })?;

        Ok(schema::build_quote_response(&value))
    }

    fn name(&self) -> &'static str {
        "quote_response"
    }
}
