pub mod credentials;
pub mod error;
pub mod fetcher;

pub use credentials::Credentials;
pub use error::FetchError;
pub use fetcher::{DEFAULT_TIMEOUT_SECS, Fetcher};
