//! Client core for the Advice Slip API.
//!
//! The crate is split along the boundary the feature actually has:
//!
//! - [`store`] owns the fetch state machine ([`AdviceStore`]): it tracks
//!   loading/error/success state, guards against out-of-order fetch
//!   completions, and notifies subscribers after every transition.
//! - [`gateway`] is the network boundary: one GET against the advice
//!   endpoint, parsed into an [`AdviceRecord`] or collapsed into a single
//!   [`GatewayError`] kind.
//! - [`mvi`] provides the unidirectional data-flow primitives the store is
//!   built on; transitions are pure reducer functions.
//!
//! A presentation layer renders whatever [`AdviceStore::snapshot`] holds
//! and calls [`AdviceStore::request_advice`] on mount and on each refresh
//! gesture. It never mutates state directly.

pub mod gateway;
pub mod mvi;
pub mod record;
pub mod store;

pub use gateway::{AdviceGateway, GatewayError, HttpAdviceGateway};
pub use record::AdviceRecord;
pub use store::{AdviceIntent, AdviceReducer, AdviceStore, FetchState, Subscription};
