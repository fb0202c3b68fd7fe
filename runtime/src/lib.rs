//! # Catalog Runtime
//!
//! Runtime implementation of the catalog's state container.
//!
//! The [`Store`] owns the committed state, the reducer and its environment.
//! It is the single mutation entry point: every change goes through
//! [`Store::send`], which reduces a copy of the current state, commits the
//! copy as a fresh snapshot and then runs the returned effects.
//!
//! ## Example
//!
//! ```ignore
//! use catalog_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action
//! store.send(Action::DoSomething)?;
//!
//! // Read state
//! let value = store.state(|s| s.some_field);
//!
//! // Observe commits
//! let mut changes = store.subscribe();
//! ```
//!
//! Execution is synchronous: `send` returns once the action and every action
//! fed back through [`Effect::Send`] have been committed.

use catalog_core::{effect::Effect, reducer::transition, reducer::Reducer};
use std::sync::Arc;
use tokio::sync::watch;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum StoreError {
        /// Effects kept feeding actions back past the configured depth
        ///
        /// Everything committed before the limit was hit stays committed.
        #[error("Effect feedback exceeded the maximum depth of {max_depth}")]
        FeedbackLimitExceeded {
            /// The configured maximum depth
            max_depth: usize,
        },
    }
}

pub use error::StoreError;

/// Configuration for Store instances
///
/// # Example
///
/// ```
/// use catalog_runtime::StoreConfig;
///
/// let config = StoreConfig::default().with_max_feedback_depth(4);
/// assert_eq!(config.max_feedback_depth, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// How many nested `Effect::Send` hops a single `send` may trigger
    pub max_feedback_depth: usize,
}

impl StoreConfig {
    /// Create a new configuration with custom values
    #[must_use]
    pub const fn new(max_feedback_depth: usize) -> Self {
        Self { max_feedback_depth }
    }

    /// Set the maximum feedback depth
    #[must_use]
    pub const fn with_max_feedback_depth(mut self, depth: usize) -> Self {
        self.max_feedback_depth = depth;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_feedback_depth: 16,
        }
    }
}

/// Store module - The runtime for reducers
pub mod store {
    use super::{transition, watch, Arc, Effect, Reducer, StoreConfig, StoreError};

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (an immutable `Arc` snapshot held in a watch channel)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    /// 4. Effect execution (with feedback loop)
    ///
    /// Snapshots handed out by [`Store::snapshot`] or [`Store::subscribe`]
    /// are never mutated; each committed action replaces the snapshot.
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: watch::Sender<Arc<S>>,
        reducer: R,
        environment: E,
        config: StoreConfig,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
        S: Clone,
    {
        /// Create a new store with initial state, reducer, and environment
        ///
        /// Uses [`StoreConfig::default`].
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self::with_config(initial_state, reducer, environment, StoreConfig::default())
        }

        /// Create a new store with a custom configuration
        #[must_use]
        pub fn with_config(initial_state: S, reducer: R, environment: E, config: StoreConfig) -> Self {
            let (state, _) = watch::channel(Arc::new(initial_state));

            Self {
                state,
                reducer,
                environment,
                config,
            }
        }

        /// Send an action to the store
        ///
        /// The reducer runs against a copy of the committed state; the copy
        /// is committed as the new snapshot and subscribers are notified.
        /// Effects are then executed in order, depth first.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::FeedbackLimitExceeded`] when effects keep
        /// sending actions beyond `max_feedback_depth`.
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub fn send(&self, action: A) -> Result<(), StoreError> {
            self.send_at_depth(action, 0)
        }

        fn send_at_depth(&self, action: A, depth: usize) -> Result<(), StoreError> {
            if depth > self.config.max_feedback_depth {
                tracing::warn!(
                    max_depth = self.config.max_feedback_depth,
                    "Rejected action: effect feedback too deep"
                );
                return Err(StoreError::FeedbackLimitExceeded {
                    max_depth: self.config.max_feedback_depth,
                });
            }

            tracing::debug!(depth, "Processing action");
            metrics::counter!("store.actions.total").increment(1);

            let mut effects = smallvec::SmallVec::new();
            self.state.send_modify(|current| {
                let (next, produced) = transition(&self.reducer, &**current, action, &self.environment);
                *current = Arc::new(next);
                effects = produced;
            });

            tracing::trace!("Reducer completed, returned {} effects", effects.len());
            // Note: Precision loss acceptable for metrics (effect counts < 2^52)
            #[allow(clippy::cast_precision_loss)]
            metrics::histogram!("store.effects.count").record(effects.len() as f64);

            for effect in effects {
                match effect {
                    Effect::None => {},
                    Effect::Send(next) => self.send_at_depth(*next, depth + 1)?,
                }
            }

            Ok(())
        }

        /// Read current state via a closure
        ///
        /// The snapshot stays borrowed while `f` runs, so `f` must not call
        /// back into [`Store::send`].
        ///
        /// ```ignore
        /// let product_count = store.state(|s| s.products.len());
        /// ```
        pub fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let snapshot = self.state.borrow();
            f(&**snapshot)
        }

        /// The currently committed snapshot
        #[must_use]
        pub fn snapshot(&self) -> Arc<S> {
            Arc::clone(&self.state.borrow())
        }

        /// Subscribe to committed snapshots
        ///
        /// The receiver starts with the current snapshot marked as seen;
        /// `has_changed` turns true after the next commit.
        #[must_use]
        pub fn subscribe(&self) -> watch::Receiver<Arc<S>> {
            self.state.subscribe()
        }

        /// The store's configuration
        #[must_use]
        pub const fn config(&self) -> StoreConfig {
            self.config
        }
    }
}

pub use store::Store;

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::{smallvec, SmallVec};

    #[derive(Debug, Clone, Default, PartialEq)]
    struct TestState {
        value: i32,
        log: Vec<&'static str>,
    }

    #[derive(Debug, Clone)]
    enum TestAction {
        Increment,
        Mark(&'static str),
        IncrementThenMark,
        Forever,
    }

    struct TestReducer;

    impl Reducer for TestReducer {
        type State = TestState;
        type Action = TestAction;
        type Environment = ();

        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            _env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]> {
            match action {
                TestAction::Increment => {
                    state.value += 1;
                    smallvec![Effect::None]
                },
                TestAction::Mark(tag) => {
                    state.log.push(tag);
                    smallvec![Effect::None]
                },
                TestAction::IncrementThenMark => smallvec![
                    Effect::send(TestAction::Increment),
                    Effect::send(TestAction::Mark("after")),
                ],
                TestAction::Forever => {
                    state.value += 1;
                    smallvec![Effect::send(TestAction::Forever)]
                },
            }
        }
    }

    fn store() -> Store<TestState, TestAction, (), TestReducer> {
        Store::new(TestState::default(), TestReducer, ())
    }

    #[test]
    fn test_send_commits_new_state() {
        let store = store();
        assert!(store.send(TestAction::Increment).is_ok());
        assert_eq!(store.state(|s| s.value), 1);
    }

    #[test]
    fn test_old_snapshot_is_not_mutated() {
        let store = store();
        let before = store.snapshot();

        assert!(store.send(TestAction::Increment).is_ok());

        assert_eq!(before.value, 0);
        assert_eq!(store.snapshot().value, 1);
        assert!(!Arc::ptr_eq(&before, &store.snapshot()));
    }

    #[test]
    fn test_feedback_actions_run_in_order() {
        let store = store();
        assert!(store.send(TestAction::Mark("first")).is_ok());
        assert!(store.send(TestAction::IncrementThenMark).is_ok());

        let state = store.snapshot();
        assert_eq!(state.value, 1);
        assert_eq!(state.log, vec!["first", "after"]);
    }

    #[test]
    fn test_subscriber_sees_commit() {
        let store = store();
        let mut changes = store.subscribe();
        assert!(matches!(changes.has_changed(), Ok(false)));

        assert!(store.send(TestAction::Increment).is_ok());

        assert!(matches!(changes.has_changed(), Ok(true)));
        assert_eq!(changes.borrow_and_update().value, 1);
        assert!(matches!(changes.has_changed(), Ok(false)));
    }

    #[test]
    fn test_feedback_limit() {
        let store = Store::with_config(
            TestState::default(),
            TestReducer,
            (),
            StoreConfig::default().with_max_feedback_depth(3),
        );

        let result = store.send(TestAction::Forever);

        assert_eq!(result, Err(StoreError::FeedbackLimitExceeded { max_depth: 3 }));
        // Depths 0..=3 were committed before the limit tripped
        assert_eq!(store.state(|s| s.value), 4);
    }

    #[test]
    fn test_config_accessor() {
        let store = store();
        assert_eq!(store.config(), StoreConfig::new(16));
    }
}
