//! # Catalog Testing
//!
//! Testing utilities and helpers for catalog reducers.
//!
//! This crate provides:
//! - [`ReducerTest`], a Given/When/Then harness for reducers
//! - Assertion helpers for effects
//! - [`init_test_tracing`] to see reducer logs while debugging a test
//!
//! ## Example
//!
//! ```ignore
//! use catalog_testing::{assertions, ReducerTest};
//!
//! ReducerTest::new(CatalogReducer::new())
//!     .with_env(())
//!     .given_state(CatalogState::new())
//!     .when_action(CatalogAction::Delete { id: ProductId::new(1) })
//!     .then_state(|state| assert!(state.products.is_empty()))
//!     .then_effects(assertions::assert_no_effects)
//!     .run();
//! ```

mod reducer_test;

pub use reducer_test::{assertions, ReducerTest};

/// Install a `fmt` subscriber filtered by `RUST_LOG` for the current test binary.
///
/// Safe to call from several tests; only the first call installs anything.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
