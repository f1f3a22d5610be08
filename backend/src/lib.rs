//! Backend library modules.

pub mod doc;
pub mod domain;
pub mod inbound;

/// Public OpenAPI surface used by debug builds and tooling.
pub use doc::ApiDoc;
