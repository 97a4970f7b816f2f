pub mod credentials;
pub mod error;
pub mod time;
pub mod traits;
pub mod types;

pub use credentials::CredentialPool;
pub use error::Error;
pub use time::{TimeFormat, TimeReport};
pub use traits::TavilyApi;
pub use types::{ExtractHit, SearchDepth, SearchHit, SearchOutcome, SearchRequest};
