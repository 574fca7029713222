//! Testing infrastructure for edgeview integration tests.
//!
//! - `TestStore`: an on-disk edge store in a temp dir, laid out like edgecore's
//! - `fixtures`: payload builders for the resource kinds tests need

pub mod fixtures;
pub mod store;

pub use fixtures::{PodFixture, service_record};
pub use store::TestStore;
