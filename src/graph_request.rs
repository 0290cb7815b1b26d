use crate::{
    api_version::ApiVersion, http_method::HttpMethod, request_flags::RequestFlags,
    request_spec::RequestSpec,
};
use serde_json::Value;
use std::collections::HashMap;
use url::form_urlencoded;

/// A fully resolved outbound graph request. This is a plain value describing
/// the call; handing it to a transport is a separate concern.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphRequest {
    graph_path: String,
    parameters: HashMap<String, Value>,
    token_string: Option<String>,
    version: ApiVersion,
    method: HttpMethod,
    flags: RequestFlags,
}

impl GraphRequest {
    pub fn new<S: Into<String>>(graph_path: S, method: HttpMethod) -> Self {
        Self {
            graph_path: graph_path.into(),
            parameters: HashMap::new(),
            token_string: None,
            version: ApiVersion::default(),
            method,
            flags: RequestFlags::default(),
        }
    }

    pub fn graph_path(&self) -> &str {
        &self.graph_path
    }

    pub fn parameters(&self) -> &HashMap<String, Value> {
        &self.parameters
    }

    pub fn token_string(&self) -> Option<&String> {
        self.token_string.as_ref()
    }

    pub fn version(&self) -> ApiVersion {
        self.version
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn flags(&self) -> RequestFlags {
        self.flags
    }

    /// The version-qualified path and query this request resolves to, e.g.
    /// `v23.0/me/friends?fields=id%2Cname`.
    pub fn relative_url(&self) -> String {
        let base = format!("{}/{}", self.version, self.graph_path);

        if self.parameters.is_empty() {
            return base;
        }

        // keys are sorted so the rendered query is stable across runs
        let mut keys = self.parameters.keys().collect::<Vec<_>>();
        keys.sort();

        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for key in keys {
            serializer.append_pair(key, &render_parameter(&self.parameters[key]));
        }

        format!("{}?{}", base, serializer.finish())
    }
}

impl From<RequestSpec> for GraphRequest {
    fn from(spec: RequestSpec) -> Self {
        Self {
            graph_path: spec.graph_path,
            parameters: spec.parameters,
            token_string: spec.token_string,
            version: spec.version.unwrap_or_default(),
            method: spec.method.unwrap_or_default(),
            flags: spec.flags.unwrap_or_default(),
        }
    }
}

fn render_parameter(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
