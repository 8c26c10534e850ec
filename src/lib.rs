//! Stock-quote payload transformation mediator.
//!
//! Rewrites an XML message payload between the sample quote schemas, invoked
//! per message by an external mediation host:
//!
//! - Inbound: extracts the ticker symbol from a quote request and rebuilds
//!   the payload in the delayed-quotes request schema.
//! - Outbound: extracts the scalar result from a quote response and rebuilds
//!   the payload with the value under `return/last`.
//!
//! The host hands over a message envelope exposing exactly two operations,
//! get and set payload XML. On any failure the payload is left untouched and
//! the error is surfaced; retry and fault routing stay with the host.
//!
//! ## Configuration Example
//!
//! ```yaml
//! version: "1"
//! settings:
//!   strict_root: true
//!   log_payloads: false
//! ```

pub mod config;
pub mod context;
pub mod envelope;
pub mod mediator;
pub mod schema;
pub mod transformer;

pub use config::{MediatorConfig, Settings};
pub use context::{MessageDirection, TransformContext};
pub use envelope::{InMemoryEnvelope, PayloadEnvelope};
pub use mediator::{MediatorCounters, MediatorError, TransformMediator};
pub use transformer::{
    QuoteRequestTransformer, QuoteResponseTransformer, TransformError, Transformer,
};
