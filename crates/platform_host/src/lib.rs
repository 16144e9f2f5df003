//! Host-service contracts shared by the portfolio runtime and its browser adapters.
//!
//! The runtime only ever sees the object-safe traits in this crate. Concrete browser adapters
//! live in `platform_host_web`; headless tests use the in-memory and no-op implementations here.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod external_url;
pub mod host;
pub mod prefs;

pub use error::HostError;
pub use external_url::{
    ExternalUrlFuture, ExternalUrlService, NoopExternalUrlService, RecordingExternalUrlService,
};
pub use host::{HostServices, HostStrategy};
pub use prefs::{MemoryPrefsStore, NoopPrefsStore, PrefsStore, PrefsStoreFuture};
