pub mod client;
pub mod errors;
pub mod pipeline;
pub mod source;
pub mod types;

pub use client::fetch;
pub use errors::FetchError;
pub use source::{HttpPageSource, ProductPageSource};
pub use types::PageResponse;

#[cfg(test)]
pub use source::MockProductPageSource;
