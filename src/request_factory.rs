use crate::{graph_request::GraphRequest, request_spec::RequestSpec};
use log::debug;
use std::fmt::Debug;

/// The request-creation capability production code depends on. Implementers
/// turn a [`RequestSpec`] into a request object; the contract is infallible
/// because composing a request involves no I/O and no validation.
pub trait RequestFactory: Debug {
    fn create_request(&self, spec: RequestSpec) -> GraphRequest;
}

/// The production implementer. Omitted descriptor fields get the SDK
/// defaults: GET, the pinned API version, and an empty flag set.
#[derive(Debug)]
pub struct GraphRequestFactory {}

impl GraphRequestFactory {
    pub fn new() -> Self {
        Self {}
    }
}

impl RequestFactory for GraphRequestFactory {
    fn create_request(&self, spec: RequestSpec) -> GraphRequest {
        debug!(
            "creating {} request for \"{}\"",
            spec.method.unwrap_or_default(),
            spec.graph_path
        );

        spec.into()
    }
}

impl Default for GraphRequestFactory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{GraphRequestFactory, RequestFactory};
    use crate::{ApiVersion, HttpMethod, RequestFlag, RequestSpec};

    #[test]
    fn fills_sdk_defaults_for_omitted_fields() {
        let request = GraphRequestFactory::new().create_request(RequestSpec::new("me"));

        assert_eq!(request.graph_path(), "me");
        assert_eq!(request.method(), HttpMethod::Get);
        assert_eq!(request.version(), ApiVersion::default());
        assert!(request.flags().is_empty());
        assert_eq!(request.token_string(), None);
    }

    #[test]
    fn passes_supplied_fields_through() {
        let spec = RequestSpec::new("me/feed")
            .with_method(HttpMethod::Post)
            .with_version(ApiVersion::new(19, 0))
            .with_token_string("user-token")
            .with_flags(RequestFlag::DisableErrorRecovery);

        let request = GraphRequestFactory::new().create_request(spec);

        assert_eq!(request.method(), HttpMethod::Post);
        assert_eq!(request.version(), ApiVersion::new(19, 0));
        assert_eq!(request.token_string(), Some(&String::from("user-token")));
        assert!(request.flags().contains(RequestFlag::DisableErrorRecovery));
    }
}
