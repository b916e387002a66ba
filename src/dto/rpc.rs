use serde::{Deserialize, Serialize};

pub const JSONRPC_VERSION: &str = "2.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest<T> {
    pub jsonrpc: String,
    pub method: String,
    pub params: T,
    pub id: u64,
    /// Session token. Unauthenticated methods (`user.login`,
    /// `apiinfo.version`) must not carry the field at all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<String>,
}

impl<T> JsonRpcRequest<T> {
    pub fn new(method: &str, params: T, id: u64, auth: Option<String>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            method: method.to_string(),
            params,
            id,
            auth,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse<T> {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
    pub id: u64,
}

/// JSON-RPC error object. Zabbix puts the human-readable detail
/// ("Session terminated, re-login, please.", permission failures, ...)
/// into `data`, keeping `message` generic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: i64,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.data {
            Some(data) => write!(f, "{} {}", self.message, data),
            None => write!(f, "{}", self.message),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginParams {
    pub username: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_with_auth_serializes_token() {
        let request = JsonRpcRequest::new(
            "host.get",
            json!({"output": "extend"}),
            3,
            Some("0424bd59b807674191e7d77572075f33".to_string()),
        );
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["jsonrpc"], "2.0");
        assert_eq!(value["method"], "host.get");
        assert_eq!(value["id"], 3);
        assert_eq!(value["auth"], "0424bd59b807674191e7d77572075f33");
    }

    #[test]
    fn request_without_auth_omits_the_field() {
        let request = JsonRpcRequest::new("apiinfo.version", json!([]), 1, None);
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("auth").is_none());
    }

    #[test]
    fn response_with_error_deserializes() {
        let raw = r#"{
            "jsonrpc": "2.0",
            "error": {
                "code": -32602,
                "message": "Invalid params.",
                "data": "Session terminated, re-login, please."
            },
            "id": 1
        }"#;
        let response: JsonRpcResponse<serde_json::Value> = serde_json::from_str(raw).unwrap();
        assert!(response.result.is_none());
        let error = response.error.unwrap();
        assert_eq!(error.code, -32602);
        assert_eq!(
            error.to_string(),
            "Invalid params. Session terminated, re-login, please."
        );
    }

    #[test]
    fn login_params_use_username_field() {
        let params = LoginParams {
            username: "Admin".to_string(),
            password: "zabbix".to_string(),
        };
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value["username"], "Admin");
        assert!(value.get("user").is_none());
    }
}
