use chrono::{DateTime, Utc};
use serde::Serialize;

/// Degraded-service payload served on the fallback routes.
///
/// Built fresh per invocation; only the timestamp varies between
/// calls.
#[derive(Debug, Serialize)]
pub struct FallbackPayload {
    pub timestamp: DateTime<Utc>,
    pub status: &'static str,
    pub message: &'static str,
    pub error: &'static str,
    pub path: &'static str,
}

/// Payload for `/fallback/backend`, targeted by the circuit breaker
/// guarding the app search route.
pub fn backend_fallback() -> FallbackPayload {
    FallbackPayload {
        timestamp: Utc::now(),
        status: "SERVICE_UNAVAILABLE",
        message: "Backend service is currently unavailable",
        error: "Circuit breaker is open",
        path: "/api/apps",
    }
}

/// Payload for `/fallback/health`, targeted by the circuit breaker
/// guarding the proxied health route.
pub fn health_fallback() -> FallbackPayload {
    FallbackPayload {
        timestamp: Utc::now(),
        status: "DOWN",
        message: "Health check service is currently unavailable",
        error: "Circuit breaker is open",
        path: "/health",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_fallback_fields_are_fixed() {
        for _ in 0..3 {
            let payload = backend_fallback();
            assert_eq!(payload.status, "SERVICE_UNAVAILABLE");
            assert_eq!(payload.message, "Backend service is currently unavailable");
            assert_eq!(payload.error, "Circuit breaker is open");
            assert_eq!(payload.path, "/api/apps");
        }
    }

    #[test]
    fn test_health_fallback_fields_are_fixed() {
        for _ in 0..3 {
            let payload = health_fallback();
            assert_eq!(payload.status, "DOWN");
            assert_eq!(
                payload.message,
                "Health check service is currently unavailable"
            );
            assert_eq!(payload.error, "Circuit breaker is open");
            assert_eq!(payload.path, "/health");
        }
    }

    #[test]
    fn test_payload_serializes_with_fixed_keys() {
        let value = serde_json::to_value(backend_fallback()).unwrap();
        let object = value.as_object().unwrap();

        for key in ["timestamp", "status", "message", "error", "path"] {
            assert!(object.contains_key(key), "missing key {key}");
        }
        assert_eq!(object["status"], "SERVICE_UNAVAILABLE");
        assert_eq!(object["path"], "/api/apps");
    }
}
