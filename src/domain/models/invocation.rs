use serde::{Deserialize, Serialize};

use crate::domain::models::status::ServiceStatus;

/// JSON body of a successful invocation result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvocationBody {
    /// Status extracted during this invocation
    pub current_status: ServiceStatus,
    /// Invocation timestamp (ISO-8601 UTC)
    pub current_time: String,
    /// Status that was stored before this invocation
    pub last_status: ServiceStatus,
}

/// Response headers attached to every invocation result
#[derive(Debug, Clone, Serialize)]
pub struct ResponseHeaders {
    #[serde(rename = "Content-Type")]
    pub content_type: String,
    #[serde(rename = "Access-Control-Allow-Origin")]
    pub access_control_allow_origin: String,
}

impl ResponseHeaders {
    /// Headers for a JSON response open to any origin
    fn json() -> Self {
        Self {
            content_type: "application/json".to_string(),
            access_control_allow_origin: "*".to_string(),
        }
    }
}

/// Structured result returned to the invoking scheduler
#[derive(Debug, Clone, Serialize)]
pub struct InvocationResult {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    /// JSON-encoded InvocationBody
    pub body: String,
    pub headers: ResponseHeaders,
}

impl InvocationResult {
    /// Build a success result with the JSON-encoded body
    pub fn ok(body: &InvocationBody) -> Result<Self, serde_json::Error> {
        Ok(Self {
            status_code: 200,
            body: serde_json::to_string(body)?,
            headers: ResponseHeaders::json(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_encodes_body_as_json_string() {
        let body = InvocationBody {
            current_status: ServiceStatus::Offline,
            current_time: "2023-01-01T00:00:00Z".to_string(),
            last_status: ServiceStatus::Online,
        };

        let result = InvocationResult::ok(&body).unwrap();
        assert_eq!(result.status_code, 200);
        assert_eq!(result.headers.content_type, "application/json");
        assert_eq!(result.headers.access_control_allow_origin, "*");

        let decoded: InvocationBody = serde_json::from_str(&result.body).unwrap();
        assert_eq!(decoded.current_status, ServiceStatus::Offline);
        assert_eq!(decoded.last_status, ServiceStatus::Online);
        assert_eq!(decoded.current_time, "2023-01-01T00:00:00Z");
    }
}
