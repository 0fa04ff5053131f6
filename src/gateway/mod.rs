//! Network boundary for advice fetches.
//!
//! The gateway is the sole component permitted to perform network I/O for
//! this feature. It makes exactly one attempt per call; retry policy
//! belongs to the caller (here: none, the user re-triggers manually).

mod error;
mod http;

pub use error::GatewayError;
pub use http::HttpAdviceGateway;

use std::future::Future;
use std::pin::Pin;

use crate::record::AdviceRecord;

/// Boxed fetch future, so the store can hold `Arc<dyn AdviceGateway>`.
pub type FetchFuture<'a> =
    Pin<Box<dyn Future<Output = Result<AdviceRecord, GatewayError>> + Send + 'a>>;

pub trait AdviceGateway: Send + Sync {
    /// Fetch one random advice slip, suspending until the remote call
    /// completes.
    fn fetch_advice(&self) -> FetchFuture<'_>;
}
