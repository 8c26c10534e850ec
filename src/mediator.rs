//! Transform mediator implementation.

use crate::config::MediatorConfig;
use crate::context::{MessageDirection, TransformContext};
use crate::envelope::{document_to_string, PayloadEnvelope};
use crate::transformer::{
    QuoteRequestTransformer, QuoteResponseTransformer, TransformError, Transformer,
};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info, warn};

/// Payload transformation mediator.
///
/// Invoked by the host once per message. Each call reads the envelope
/// payload, runs the transformer for the message direction, and writes the
/// new document back only on success; on failure the payload is left
/// unmodified and the error is surfaced for the host's fault handling.
///
/// The mediator is stateless across invocations, so a single instance is
/// safe to share between concurrently mediated messages.
pub struct TransformMediator {
    /// Configuration
    config: MediatorConfig,
    /// Inbound transformer
    request: QuoteRequestTransformer,
    /// Outbound transformer
    response: QuoteResponseTransformer,
    /// Metrics: total messages seen.
    messages_total: AtomicU64,
    /// Metrics: total messages transformed.
    messages_transformed: AtomicU64,
    /// Metrics: total transform errors.
    transform_errors: AtomicU64,
}

/// Snapshot of the mediator counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediatorCounters {
    /// Total messages seen.
    pub messages_total: u64,
    /// Total messages transformed.
    pub messages_transformed: u64,
    /// Total transform errors.
    pub transform_errors: u64,
}

impl TransformMediator {
    /// Create a new mediator from configuration.
    pub fn new(config: MediatorConfig) -> Self {
        let request = QuoteRequestTransformer::new(&config.settings);
        let response = QuoteResponseTransformer::new(&config.settings);

        info!(
            strict_root = config.settings.strict_root,
            log_payloads = config.settings.log_payloads,
            "Transform mediator initialized"
        );

        Self {
            config,
            request,
            response,
            messages_total: AtomicU64::new(0),
            messages_transformed: AtomicU64::new(0),
            transform_errors: AtomicU64::new(0),
        }
    }

    /// Create from a YAML configuration string.
    pub fn from_yaml(yaml: &str) -> Result<Self, MediatorError> {
        let config: MediatorConfig = serde_yaml::from_str(yaml)?;
        Ok(Self::new(config))
    }

    /// Create from a JSON configuration string.
    pub fn from_json(json: &str) -> Result<Self, MediatorError> {
        let config: MediatorConfig = serde_json::from_str(json)?;
        Ok(Self::new(config))
    }

    /// Rewrite the request payload in place within the envelope.
    pub async fn mediate_request<E>(
        &self,
        envelope: &mut E,
        correlation_id: &str,
    ) -> Result<(), MediatorError>
    where
        E: PayloadEnvelope + ?Sized,
    {
        let ctx = TransformContext::new(MessageDirection::Request, correlation_id);
        self.mediate(envelope, &ctx, &self.request).await
    }

    /// Rewrite the response payload in place within the envelope.
    pub async fn mediate_response<E>(
        &self,
        envelope: &mut E,
        correlation_id: &str,
    ) -> Result<(), MediatorError>
    where
        E: PayloadEnvelope + ?Sized,
    {
        let ctx = TransformContext::new(MessageDirection::Response, correlation_id);
        self.mediate(envelope, &ctx, &self.response).await
    }

    async fn mediate<E>(
        &self,
        envelope: &mut E,
        ctx: &TransformContext,
        transformer: &dyn Transformer,
    ) -> Result<(), MediatorError>
    where
        E: PayloadEnvelope + ?Sized,
    {
        self.messages_total.fetch_add(1, Ordering::Relaxed);

        let target = {
            let source = match envelope.payload_xml() {
                Some(doc) => doc,
                None => {
                    self.transform_errors.fetch_add(1, Ordering::Relaxed);
                    warn!(
                        correlation_id = %ctx.correlation_id,
                        direction = %ctx.direction,
                        "Envelope has no payload"
                    );
                    return Err(MediatorError::EmptyEnvelope);
                }
            };

            if self.config.settings.log_payloads {
                if let Ok(xml) = document_to_string(source) {
                    debug!(
                        correlation_id = %ctx.correlation_id,
                        direction = %ctx.direction,
                        payload = %xml,
                        "Source payload"
                    );
                }
            }

            match transformer.transform(ctx, source).await {
                Ok(doc) => doc,
                Err(e) => {
                    self.transform_errors.fetch_add(1, Ordering::Relaxed);
                    warn!(
                        correlation_id = %ctx.correlation_id,
                        direction = %ctx.direction,
                        transformer = transformer.name(),
                        error = %e,
                        "Transform failed; payload left unmodified"
                    );
                    return Err(MediatorError::Transform(e));
                }
            }
        };

        if self.config.settings.log_payloads {
            if let Ok(xml) = document_to_string(&target) {
                debug!(
                    correlation_id = %ctx.correlation_id,
                    direction = %ctx.direction,
                    payload = %xml,
                    "Target payload"
                );
            }
        }

        envelope.set_payload_xml(target);
        self.messages_transformed.fetch_add(1, Ordering::Relaxed);

        info!(
            correlation_id = %ctx.correlation_id,
            direction = %ctx.direction,
            transformer = transformer.name(),
            "Applied payload transform"
        );

        Ok(())
    }

    /// Snapshot the mediation counters.
    pub fn counters(&self) -> MediatorCounters {
        MediatorCounters {
            messages_total: self.messages_total.load(Ordering::Relaxed),
            messages_transformed: self.messages_transformed.load(Ordering::Relaxed),
            transform_errors: self.transform_errors.load(Ordering::Relaxed),
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &MediatorConfig {
        &self.config
    }
}

/// Transform mediator errors.
#[derive(Debug, thiserror::Error)]
pub enum MediatorError {
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("envelope has no payload")]
    EmptyEnvelope,

    #[error("transform error: {0}")]
    Transform(#[from] TransformError),
}
