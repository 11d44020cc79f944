//! Catalog source abstraction layer.
//!
//! This module defines the [`CatalogSource`] trait, the common [`Product`]
//! type, and the [`FetchError`] taxonomy.  Concrete sources live in
//! sub-modules (currently only [`http`]).
//!
//! ## For contributors — adding a new source
//!
//! 1. Create a new file in this directory (e.g. `fixture.rs`).
//! 2. Define a struct (e.g. `FixtureSource`) and implement [`CatalogSource`]
//!    for it.
//! 3. Add `mod fixture;` below and re-export your struct in the `pub use`
//!    block.
//! 4. Construct it in `main.rs` instead of (or next to) `HttpSource`.
//!
//! The fetch task, filtering and UI are all source-agnostic.

mod error;
mod http;
mod product;

// Re-export the public API of this module so callers can write
// `use crate::source::{CatalogSource, HttpSource, Product};`
pub use error::{FetchError, USER_ERROR_MESSAGE};
pub use http::{HttpSource, DEFAULT_ENDPOINT};
pub use product::Product;

use std::future::Future;

/// Trait that every catalog source must implement.
///
/// [`crate::fetch::spawn`] runs [`fetch()`](CatalogSource::fetch) exactly
/// once on a tokio task, so implementations must be `Send + Sync + 'static`
/// and return a `Send` future.
///
/// ## Implementing a new source
///
/// ```ignore
/// pub struct MySource { /* config fields */ }
///
/// impl CatalogSource for MySource {
///     fn name(&self) -> &str { "my-source" }
///
///     async fn fetch(&self) -> Result<Vec<Product>, FetchError> {
///         // Perform HTTP / IO, then decode into Product values.
///         todo!()
///     }
/// }
/// ```
pub trait CatalogSource: Send + Sync + 'static {
    /// Human-readable label used in log lines.
    fn name(&self) -> &str;

    /// Fetch the whole catalog.
    ///
    /// The returned order is the display order.  Any error discards the
    /// attempt; there is no partial result.
    fn fetch(&self) -> impl Future<Output = Result<Vec<Product>, FetchError>> + Send;
}
