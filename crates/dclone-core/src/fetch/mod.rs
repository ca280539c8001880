//! Fetching status snapshots from the dclone API.

mod decode;
mod errors;
mod http;
mod traits;

pub use decode::decode_batch;
pub use errors::FetchError;
pub use http::HttpStatusSource;
pub use traits::StatusSource;
