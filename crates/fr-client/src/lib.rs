mod client;
mod error;

pub use client::{UpstreamClient, UpstreamResponse};
pub use error::{ClientError, ClientResult};
