//! Model artifact adapters
//!
//! Provides [`JsonArtifactStore`], the file-system implementation of the
//! [`ArtifactStore`](risk_application::ArtifactStore) port.

mod json_store;

pub use json_store::JsonArtifactStore;
