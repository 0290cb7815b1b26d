use graph_request::{
    GraphRequest, GraphRequestFactory, HttpMethod, RequestFactory, RequestFlag, RequestSpec,
};
use std::sync::Arc;

/// Builder used to build a ProfileApiClient instance.
#[derive(Debug, Default)]
pub struct ProfileApiClientBuilder {
    request_factory: Option<Arc<dyn RequestFactory + Send + Sync>>,
    access_token: Option<String>,
}

impl ProfileApiClientBuilder {
    /// Create a new ProfileApiClientBuilder instance.
    pub fn new() -> Self {
        Self {
            request_factory: None,
            access_token: None,
        }
    }

    /// Use the given request factory when building a ProfileApiClient instance.
    ///
    /// # Arguments
    /// `request_factory` - the request-creation implementation the client should go through.
    ///     Tests pass a `TestRequestFactory` here.
    ///
    /// # Returns
    /// This builder.
    pub fn with_request_factory(
        mut self,
        request_factory: Arc<dyn RequestFactory + Send + Sync>,
    ) -> Self {
        self.request_factory = Some(request_factory);
        self
    }

    /// Attach the given user access token to every request the client composes.
    ///
    /// # Arguments
    /// `access_token` - a bearer token string.
    ///
    /// # Returns
    /// This builder.
    pub fn with_access_token<T: Into<String>>(mut self, access_token: T) -> Self {
        self.access_token = Some(access_token.into());
        self
    }

    /// Consume the builder and create a ProfileApiClient instance using all of the previously
    /// configured values or their defaults.
    ///
    /// # Returns
    /// A ProfileApiClient instance.
    pub fn build(mut self) -> ProfileApiClient {
        ProfileApiClient {
            request_factory: self
                .request_factory
                .take()
                .unwrap_or_else(|| Arc::new(GraphRequestFactory::new())),
            access_token: self.access_token.take(),
        }
    }
}

/// Composes the graph requests the profile screens need. The client only
/// builds request values; sending them belongs to the transport layer.
#[derive(Debug)]
pub struct ProfileApiClient {
    request_factory: Arc<dyn RequestFactory + Send + Sync>,
    access_token: Option<String>,
}

impl ProfileApiClient {
    /// Create a ProfileApiClient backed by the production request factory.
    ///
    /// # Returns
    /// A ProfileApiClient.
    pub fn new() -> Self {
        ProfileApiClient {
            request_factory: Arc::new(GraphRequestFactory::new()),
            access_token: None,
        }
    }

    /// Build the request fetching the signed-in user's profile.
    ///
    /// # Arguments
    /// `fields` - the profile fields to ask for, e.g. `["id", "name"]`.
    ///
    /// # Returns
    /// The composed request.
    pub fn profile_request(&self, fields: &[&str]) -> GraphRequest {
        let spec = self
            .authorized(RequestSpec::new("me"))
            .with_parameter("fields", fields.join(","))
            .with_method(HttpMethod::Get);

        self.request_factory.create_request(spec)
    }

    /// Build the request fetching a page of a user's friends.
    ///
    /// # Arguments
    /// `user_id` - the graph node of the user whose friends to list.
    /// `limit` - page size.
    ///
    /// # Returns
    /// The composed request.
    pub fn friends_request<T: AsRef<str>>(&self, user_id: T, limit: u32) -> GraphRequest {
        let spec = self
            .authorized(RequestSpec::new(format!("{}/friends", user_id.as_ref())))
            .with_parameter("limit", limit)
            .with_method(HttpMethod::Get);

        self.request_factory.create_request(spec)
    }

    /// Build the request publishing a post to the signed-in user's feed.
    ///
    /// # Arguments
    /// `message` - the post body.
    ///
    /// # Returns
    /// The composed request.
    pub fn publish_post_request<T: Into<String>>(&self, message: T) -> GraphRequest {
        let spec = self
            .authorized(RequestSpec::new("me/feed"))
            .with_parameter("message", message.into())
            .with_method(HttpMethod::Post);

        self.request_factory.create_request(spec)
    }

    /// Build the request revoking every permission the user granted this app.
    /// Revocation invalidates the very token it is sent with, so the request
    /// opts out of the automatic error recovery flow.
    ///
    /// # Returns
    /// The composed request.
    pub fn revoke_permissions_request(&self) -> GraphRequest {
        let spec = self
            .authorized(RequestSpec::new("me/permissions"))
            .with_method(HttpMethod::Delete)
            .with_flags(RequestFlag::DisableErrorRecovery);

        self.request_factory.create_request(spec)
    }

    fn authorized(&self, spec: RequestSpec) -> RequestSpec {
        match &self.access_token {
            Some(token) => spec.with_token_string(token.clone()),
            None => spec,
        }
    }
}

impl Default for ProfileApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::{ProfileApiClient, ProfileApiClientBuilder};
    use graph_request::{GraphRequest, HttpMethod, RequestFlag, TestRequestFactory};
    use serde_json::json;
    use std::sync::Arc;

    fn client_with_factory(factory: &TestRequestFactory) -> ProfileApiClient {
        ProfileApiClientBuilder::new()
            .with_request_factory(Arc::new(factory.clone()))
            .with_access_token("test-token")
            .build()
    }

    #[test]
    fn profile_request_asks_for_the_requested_fields() {
        let factory = TestRequestFactory::new();
        let client = client_with_factory(&factory);

        client.profile_request(&["id", "name", "email"]);

        assert_eq!(factory.captured_path().as_deref(), Some("me"));
        assert_eq!(
            factory.captured_parameters().get("fields"),
            Some(&json!("id,name,email"))
        );
        assert_eq!(factory.captured_method(), Some(HttpMethod::Get));
        assert_eq!(factory.captured_token_string().as_deref(), Some("test-token"));
    }

    #[test]
    fn friends_request_targets_the_given_user() {
        let factory = TestRequestFactory::new();
        let client = client_with_factory(&factory);

        client.friends_request("12345", 25);

        assert_eq!(factory.captured_path().as_deref(), Some("12345/friends"));
        assert_eq!(factory.captured_parameters().get("limit"), Some(&json!(25)));
    }

    #[test]
    fn publish_post_request_posts_to_the_feed() {
        let factory = TestRequestFactory::new();
        let client = client_with_factory(&factory);

        client.publish_post_request("hello");

        assert_eq!(factory.captured_path().as_deref(), Some("me/feed"));
        assert_eq!(factory.captured_method(), Some(HttpMethod::Post));
        assert_eq!(
            factory.captured_parameters().get("message"),
            Some(&json!("hello"))
        );
    }

    #[test]
    fn revoke_permissions_request_opts_out_of_error_recovery() {
        let factory = TestRequestFactory::new();
        let client = client_with_factory(&factory);

        client.revoke_permissions_request();

        assert_eq!(factory.captured_path().as_deref(), Some("me/permissions"));
        assert_eq!(factory.captured_method(), Some(HttpMethod::Delete));
        assert_eq!(
            factory.captured_flags(),
            Some(RequestFlag::DisableErrorRecovery.into())
        );
    }

    #[test]
    fn the_client_returns_whatever_the_factory_produced() {
        let factory = TestRequestFactory::new();
        let canned = GraphRequest::new("canned", HttpMethod::Post);
        factory.set_stubbed_request(canned.clone());
        let client = client_with_factory(&factory);

        let returned = client.profile_request(&["id"]);

        assert_eq!(returned, canned);
    }

    #[test]
    fn a_token_free_client_composes_unauthorized_requests() {
        let factory = TestRequestFactory::new();
        let client = ProfileApiClientBuilder::new()
            .with_request_factory(Arc::new(factory.clone()))
            .build();

        client.profile_request(&["id"]);

        assert_eq!(factory.captured_token_string(), None);
    }
}
