//! Per-invocation transform context.

use std::fmt;

/// Direction of the message being mediated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageDirection {
    /// Inbound request on its way to the upstream service.
    Request,
    /// Outbound response on its way back to the client.
    Response,
}

impl fmt::Display for MessageDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageDirection::Request => f.write_str("request"),
            MessageDirection::Response => f.write_str("response"),
        }
    }
}

/// Context for a single transform invocation.
///
/// Carries logging metadata only. Documents are passed separately and
/// nothing here outlives the invocation.
#[derive(Debug, Clone)]
pub struct TransformContext {
    /// Direction of the mediated message.
    pub direction: MessageDirection,
    /// Correlation ID assigned by the host.
    pub correlation_id: String,
}

impl TransformContext {
    /// Create a new transform context.
    pub fn new(direction: MessageDirection, correlation_id: impl Into<String>) -> Self {
        Self {
            direction,
            correlation_id: correlation_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_display() {
        assert_eq!(MessageDirection::Request.to_string(), "request");
        assert_eq!(MessageDirection::Response.to_string(), "response");
    }

    #[test]
    fn test_context_fields() {
        let ctx = TransformContext::new(MessageDirection::Request, "abc-1");
        assert_eq!(ctx.direction, MessageDirection::Request);
        assert_eq!(ctx.correlation_id, "abc-1");
    }
}
