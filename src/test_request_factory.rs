use crate::{
    api_version::ApiVersion, graph_request::GraphRequest, http_method::HttpMethod,
    request_factory::RequestFactory, request_flags::RequestFlags, request_spec::RequestSpec,
};
use serde_json::Value;
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

#[derive(Debug)]
struct TestRequestFactoryState {
    stubbed_request: GraphRequest,
    captured_spec: Option<RequestSpec>,
}

/// A canned-result stand-in for [`GraphRequestFactory`]. Every call records
/// the whole descriptor it was given (last call wins) and returns the
/// pre-configured request, so a test can hand this to the code under test and
/// afterwards assert on what would have been requested.
///
/// Cloning yields another handle onto the same recorded state; keep one in
/// the test and give the other away. Meant for one test at a time.
///
/// [`GraphRequestFactory`]: crate::GraphRequestFactory
#[derive(Debug, Clone)]
pub struct TestRequestFactory {
    state: Arc<Mutex<TestRequestFactoryState>>,
}

impl TestRequestFactory {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(TestRequestFactoryState {
                stubbed_request: GraphRequest::new("me", HttpMethod::Get),
                captured_spec: None,
            })),
        }
    }

    /// Replace the canned request returned from every subsequent call.
    pub fn set_stubbed_request(&self, request: GraphRequest) {
        self.state.lock().unwrap().stubbed_request = request;
    }

    pub fn stubbed_request(&self) -> GraphRequest {
        self.state.lock().unwrap().stubbed_request.clone()
    }

    /// The descriptor of the most recent call, or `None` before any call.
    pub fn captured_spec(&self) -> Option<RequestSpec> {
        self.state.lock().unwrap().captured_spec.clone()
    }

    pub fn captured_path(&self) -> Option<String> {
        self.captured_spec().map(|spec| spec.graph_path)
    }

    pub fn captured_parameters(&self) -> HashMap<String, Value> {
        self.captured_spec()
            .map(|spec| spec.parameters)
            .unwrap_or_default()
    }

    pub fn captured_token_string(&self) -> Option<String> {
        self.captured_spec().and_then(|spec| spec.token_string)
    }

    pub fn captured_version(&self) -> Option<ApiVersion> {
        self.captured_spec().and_then(|spec| spec.version)
    }

    pub fn captured_method(&self) -> Option<HttpMethod> {
        self.captured_spec().and_then(|spec| spec.method)
    }

    pub fn captured_flags(&self) -> Option<RequestFlags> {
        self.captured_spec().and_then(|spec| spec.flags)
    }
}

impl RequestFactory for TestRequestFactory {
    fn create_request(&self, spec: RequestSpec) -> GraphRequest {
        let mut state = self.state.lock().unwrap();
        state.captured_spec = Some(spec);
        state.stubbed_request.clone()
    }
}

impl Default for TestRequestFactory {
    fn default() -> Self {
        Self::new()
    }
}
