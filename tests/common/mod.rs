//! Common test utilities for co-occurrence property tests
//!
//! Generates seeded random feeds so property checks are reproducible.

pub mod feeds;

pub use feeds::{random_feed, triangle_feed, FeedShape};
