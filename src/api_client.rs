use crate::config::Config;
use crate::dto::rpc::{JsonRpcRequest, JsonRpcResponse, LoginParams};
use crate::error::{Result, ZabbixError};
use crate::retry::RetryPolicy;
use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{json, Map, Value};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Methods that must not carry the `auth` member.
const UNAUTHENTICATED_METHODS: &[&str] =
    &["user.login", "apiinfo.version", "user.checkAuthentication"];

/// RPC proxy for the Zabbix JSON-RPC API.
///
/// Holds the endpoint URL, the session token and optional HTTP basic-auth
/// credentials; every named API method forwards into the generic [`call`]
/// with its literal `"resource.action"` wire name.
///
/// [`call`]: ZabbixApiClient::call
pub struct ZabbixApiClient {
    client: Client,
    config: Arc<Config>,
    session_token: Option<String>,
    retry_policy: RetryPolicy,
    next_id: u64,
}

impl ZabbixApiClient {
    pub fn new(config: Config) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.zabbix.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self {
            client: builder.build()?,
            config: Arc::new(config),
            session_token: None,
            retry_policy: RetryPolicy::default(),
            next_id: 1,
        })
    }

    pub fn with_retry_policy(mut self, retry_policy: RetryPolicy) -> Self {
        self.retry_policy = retry_policy;
        self
    }

    /// Login with the configured credentials and store the session token.
    pub async fn login(&mut self) -> Result<String> {
        let token = self.relogin().await?;
        info!("Logged in to {}", self.config.zabbix.url);
        Ok(token)
    }

    /// Authenticate and store the token. Goes straight through [`execute`]
    /// so the re-login path inside [`call`] cannot recurse.
    ///
    /// [`execute`]: ZabbixApiClient::execute
    /// [`call`]: ZabbixApiClient::call
    async fn relogin(&mut self) -> Result<String> {
        let params = serde_json::to_value(LoginParams {
            username: self.config.zabbix.username.clone(),
            password: self.config.zabbix.password.clone(),
        })?;
        let result = self.execute("user.login", &params, false).await?;
        let token: String = serde_json::from_value(result)?;
        self.session_token = Some(token.clone());
        Ok(token)
    }

    /// End the current session. The token is cleared even though the server
    /// may already have expired it.
    pub async fn logout(&mut self) -> Result<bool> {
        let result: bool = self.call("user.logout", json!([])).await?;
        self.session_token = None;
        info!("Logged out from {}", self.config.zabbix.url);
        Ok(result)
    }

    /// Server API version. Works without a session.
    pub async fn api_version(&mut self) -> Result<String> {
        self.call("apiinfo.version", json!([])).await
    }

    /// Validate the current session token; returns the user object on
    /// success.
    pub async fn check_authentication(&mut self) -> Result<Value> {
        let token = self
            .session_token
            .clone()
            .ok_or(ZabbixError::NotLoggedIn)?;
        self.call("user.checkAuthentication", json!({ "sessionid": token }))
            .await
    }

    /// Current session token, if logged in.
    pub fn get_session_token(&self) -> Option<String> {
        self.session_token.clone()
    }

    /// Restore a previously obtained session token.
    pub fn set_session_token(&mut self, token: String) {
        self.session_token = Some(token);
    }

    /// Generic JSON-RPC invocation: serialize the envelope, POST it, decode
    /// the response, surface the `error` member as [`ZabbixError::Api`].
    ///
    /// If the server rejects the session token, the client re-authenticates
    /// with the configured credentials once and retries the call a single
    /// time; any further failure surfaces to the caller.
    pub async fn call<P, R>(&mut self, method: &str, params: P) -> Result<R>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        let params = serde_json::to_value(params)?;
        let requires_auth = !UNAUTHENTICATED_METHODS.contains(&method);
        if requires_auth && self.session_token.is_none() {
            return Err(ZabbixError::NotLoggedIn);
        }

        let result = match self.execute(method, &params, requires_auth).await {
            Err(err) if requires_auth && err.is_unauthorized() => {
                info!("Session rejected by {}, re-authenticating", method);
                self.relogin().await?;
                self.execute(method, &params, requires_auth).await
            }
            other => other,
        }?;

        Ok(serde_json::from_value(result)?)
    }

    /// Like [`call`], then re-keys the returned array by the string value of
    /// `key` in each element, preserving all original fields.
    ///
    /// [`call`]: ZabbixApiClient::call
    pub async fn call_re_keyed<P>(
        &mut self,
        method: &str,
        params: P,
        key: &str,
    ) -> Result<Map<String, Value>>
    where
        P: Serialize,
    {
        let result: Value = self.call(method, params).await?;
        re_key_by(result, key)
    }

    /// One envelope round trip. Transport failures go through the retry
    /// policy; a decoded `error` member never does.
    async fn execute(&mut self, method: &str, params: &Value, requires_auth: bool) -> Result<Value> {
        let auth = if requires_auth {
            self.session_token.clone()
        } else {
            None
        };
        let id = self.next_id;
        self.next_id += 1;

        let request = JsonRpcRequest::new(method, params.clone(), id, auth);
        debug!("API request {}: {}", id, request.method);

        let url = self.config.zabbix.url.clone();
        let basic_auth = self
            .config
            .zabbix
            .http_user
            .clone()
            .map(|user| (user, self.config.zabbix.http_password.clone()));

        let response_text = self
            .retry_policy
            .retry(|| {
                let client = self.client.clone();
                let url = url.clone();
                let request = request.clone();
                let basic_auth = basic_auth.clone();

                async move {
                    let mut builder = client
                        .post(&url)
                        .header("Content-Type", "application/json-rpc")
                        .json(&request);
                    if let Some((user, password)) = basic_auth {
                        builder = builder.basic_auth(user, password);
                    }

                    let response = builder.send().await?;
                    let status = response.status();
                    let text = response.text().await?;
                    if !status.is_success() {
                        return Err(ZabbixError::UnexpectedResponse(format!(
                            "HTTP {status}: {text}"
                        )));
                    }
                    Ok(text)
                }
            })
            .await?;

        debug!("API response {}: {}", id, response_text);

        let envelope: JsonRpcResponse<Value> = serde_json::from_str(&response_text)?;
        if let Some(error) = envelope.error {
            return Err(ZabbixError::Api(error));
        }
        envelope.result.ok_or_else(|| {
            ZabbixError::UnexpectedResponse("neither result nor error in response".to_string())
        })
    }
}

/// Turn an array result into a map keyed by the value of `key` in each
/// element. Zabbix returns entity ids as strings; numeric values are
/// stringified for convenience.
pub fn re_key_by(result: Value, key: &str) -> Result<Map<String, Value>> {
    let Value::Array(items) = result else {
        return Err(ZabbixError::UnexpectedResponse(format!(
            "cannot re-key by {key:?}: result is not an array"
        )));
    };

    let mut map = Map::with_capacity(items.len());
    for item in items {
        let field = item.get(key).ok_or_else(|| {
            ZabbixError::UnexpectedResponse(format!("cannot re-key: element has no field {key:?}"))
        })?;
        let map_key = match field {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            other => {
                return Err(ZabbixError::UnexpectedResponse(format!(
                    "cannot re-key by {key:?}: field is {other}"
                )))
            }
        };
        map.insert(map_key, item);
    }
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn re_key_preserves_all_fields() {
        let result = json!([
            {"hostid": "10084", "host": "Zabbix server", "status": "0"},
            {"hostid": "10105", "host": "Web node", "status": "1"}
        ]);

        let map = re_key_by(result, "hostid").unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["10084"]["host"], "Zabbix server");
        assert_eq!(map["10105"]["status"], "1");
    }

    #[test]
    fn re_key_stringifies_numeric_keys() {
        let map = re_key_by(json!([{"itemid": 23296}]), "itemid").unwrap();
        assert!(map.contains_key("23296"));
    }

    #[test]
    fn re_key_rejects_non_array_result() {
        let err = re_key_by(json!({"hostid": "1"}), "hostid").unwrap_err();
        assert!(matches!(err, ZabbixError::UnexpectedResponse(_)));
    }

    #[test]
    fn re_key_rejects_missing_field() {
        let err = re_key_by(json!([{"host": "no id here"}]), "hostid").unwrap_err();
        assert!(matches!(err, ZabbixError::UnexpectedResponse(_)));
    }
}
