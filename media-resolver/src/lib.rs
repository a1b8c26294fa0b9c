//! # Media Resolver
//!
//! Turns the storefront's media references into renderable URLs.
//!
//! Uploaded media has been stored under several folder conventions over the
//! years. References coming from the API may be absolute URLs, paths
//! relative to the bucket root, bare file names, or objects wrapping any
//! of those. This crate provides:
//! - Deterministic resolution against a CDN or direct-storage base
//! - An ordered list of legacy layouts probed when a load fails
//! - A bounded retry sequence ending in a placeholder
//! - Dioxus components doing the above per rendered element (`components` feature)
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use media_resolver::{MediaConfig, MediaKind, MediaResolver};
//!
//! let resolver = MediaResolver::new(MediaConfig {
//!     cdn_origin: "https://cdn.example.com".to_string(),
//!     ..Default::default()
//! });
//! let url = resolver.resolve(&"ring.jpg".into(), MediaKind::Image);
//! ```

pub mod models;
pub mod resolver;

#[cfg(feature = "components")]
pub mod components;

pub use models::{MediaConfig, MediaKind, MediaObject, MediaRef, Resolved, IMAGE_LAYOUTS, VIDEO_LAYOUTS};
pub use resolver::{MediaResolver, MAX_MEDIA_RETRIES};

#[cfg(feature = "components")]
pub use components::{ResolvedImage, ResolvedVideo};
