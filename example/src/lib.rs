mod profile_api_client;

pub use profile_api_client::{ProfileApiClient, ProfileApiClientBuilder};
