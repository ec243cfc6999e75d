//! JSON messages exchanged with the page-side bridge script.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A callback invocation sent by the page.
///
/// ```json
/// {"callback": "increment", "args": []}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BridgeRequest {
    pub callback: String,
    #[serde(default)]
    pub args: Vec<Value>,
}

impl BridgeRequest {
    pub fn new(callback: impl Into<String>) -> Self {
        Self {
            callback: callback.into(),
            args: Vec::new(),
        }
    }

    pub fn with_arg(mut self, arg: impl Into<Value>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// The framework's answer to a [`BridgeRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeResponse {
    pub ok: bool,
    pub message: String,
}

impl BridgeResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn args_default_to_empty() {
        let request = BridgeRequest::parse(r#"{"callback": "increment"}"#).unwrap();
        assert_eq!(request, BridgeRequest::new("increment"));
    }

    #[test]
    fn parses_args() {
        let request = BridgeRequest::parse(r#"{"callback": "select", "args": [2, "x"]}"#).unwrap();
        assert_eq!(request.args, vec![json!(2), json!("x")]);
        assert_eq!(request, BridgeRequest::new("select").with_arg(2).with_arg("x"));
    }

    #[test]
    fn rejects_missing_callback() {
        assert!(BridgeRequest::parse(r#"{"args": []}"#).is_err());
    }

    #[test]
    fn response_json() {
        let json = BridgeResponse::failed("Callback 'x' not found.").to_json().unwrap();
        assert_eq!(json, r#"{"ok":false,"message":"Callback 'x' not found."}"#);
    }
}
