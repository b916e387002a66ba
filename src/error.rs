use crate::dto::rpc::ApiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ZabbixError {
    /// JSON-RPC error object returned by the server.
    #[error("Zabbix API error {}: {}", .0.code, .0)]
    Api(ApiError),

    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("not logged in: call login() or set_session_token() first")]
    NotLoggedIn,

    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}

pub type Result<T> = std::result::Result<T, ZabbixError>;

impl ZabbixError {
    /// Whether this is the server telling us the session token is no longer
    /// valid. Zabbix has no dedicated error code for this; the detail lives
    /// in the error `data` (or `message` on old servers).
    pub fn is_unauthorized(&self) -> bool {
        match self {
            ZabbixError::Api(err) => {
                let detail = err.data.as_deref().unwrap_or(&err.message);
                detail.contains("re-login")
                    || detail.contains("Not authorised")
                    || detail.contains("Not authorized")
                    || detail.contains("Session terminated")
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(message: &str, data: Option<&str>) -> ZabbixError {
        ZabbixError::Api(ApiError {
            code: -32602,
            message: message.to_string(),
            data: data.map(str::to_string),
        })
    }

    #[test]
    fn session_expiry_is_unauthorized() {
        let err = api_error(
            "Invalid params.",
            Some("Session terminated, re-login, please."),
        );
        assert!(err.is_unauthorized());
    }

    #[test]
    fn missing_auth_is_unauthorized() {
        assert!(api_error("Invalid params.", Some("Not authorised.")).is_unauthorized());
        // Pre-3.0 servers put the detail straight into the message.
        assert!(api_error("Not authorised.", None).is_unauthorized());
    }

    #[test]
    fn other_api_errors_are_not_unauthorized() {
        let err = api_error(
            "Invalid params.",
            Some("Incorrect arguments passed to function."),
        );
        assert!(!err.is_unauthorized());
        assert!(!ZabbixError::NotLoggedIn.is_unauthorized());
    }

    #[test]
    fn api_error_display_includes_code_and_data() {
        let err = api_error("Invalid params.", Some("No permissions to call \"host.get\"."));
        let rendered = err.to_string();
        assert!(rendered.contains("-32602"));
        assert!(rendered.contains("No permissions"));
    }
}
