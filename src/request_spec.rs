use crate::{api_version::ApiVersion, http_method::HttpMethod, request_flags::RequestFlags};
use serde_json::Value;
use std::collections::HashMap;

/// Everything a caller can say about the request it wants created, in one
/// record. Fields the caller leaves out stay `None` (parameters default to an
/// empty map) and the factory decides what, if anything, to fill in.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    pub graph_path: String,
    pub parameters: HashMap<String, Value>,
    pub token_string: Option<String>,
    pub version: Option<ApiVersion>,
    pub method: Option<HttpMethod>,
    pub flags: Option<RequestFlags>,
}

impl RequestSpec {
    pub fn new<S: Into<String>>(graph_path: S) -> Self {
        Self {
            graph_path: graph_path.into(),
            parameters: HashMap::new(),
            token_string: None,
            version: None,
            method: None,
            flags: None,
        }
    }

    pub fn with_parameter<K: Into<String>, V: Into<Value>>(mut self, key: K, value: V) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    pub fn with_parameters(mut self, parameters: HashMap<String, Value>) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn with_token_string<S: Into<String>>(mut self, token_string: S) -> Self {
        self.token_string = Some(token_string.into());
        self
    }

    pub fn with_version(mut self, version: ApiVersion) -> Self {
        self.version = Some(version);
        self
    }

    pub fn with_method(mut self, method: HttpMethod) -> Self {
        self.method = Some(method);
        self
    }

    pub fn with_flags<F: Into<RequestFlags>>(mut self, flags: F) -> Self {
        self.flags = Some(flags.into());
        self
    }
}
