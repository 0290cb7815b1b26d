mod api_version;
mod error;
mod graph_request;
mod http_method;
mod request_factory;
mod request_flags;
mod request_spec;
mod test_request_factory;

pub use api_version::{ApiVersion, DEFAULT_API_VERSION};
pub use error::Error;
pub use graph_request::GraphRequest;
pub use http_method::HttpMethod;
pub use request_factory::{GraphRequestFactory, RequestFactory};
pub use request_flags::{RequestFlag, RequestFlags};
pub use request_spec::RequestSpec;
pub use test_request_factory::TestRequestFactory;
