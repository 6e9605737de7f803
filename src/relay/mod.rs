//! Relay pipeline module.
//!
//! Resolves a GoFile share link to a downloadable file, streams the bytes
//! to local disk and hands the resulting handle to the caller for
//! forwarding. Each invocation is independent and self-contained.

mod link;
mod metadata;
mod pipeline;

pub use link::ShareLink;
pub use metadata::FileMetadata;
pub use pipeline::{LocalFile, Relay, RelayError};

/// Path marker every valid share link must contain.
pub const PATH_MARKER: &str = "gofile.io/d/";
