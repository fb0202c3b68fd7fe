//! Ergonomic testing utilities for reducers
//!
//! This module provides a fluent API for testing reducers with readable Given-When-Then syntax.

#![allow(clippy::module_name_repetitions)] // ReducerTest is the natural name

use catalog_core::{effect::Effect, reducer::Reducer};

/// Type alias for state assertion functions
type StateAssertion<S> = Box<dyn FnOnce(&S)>;

/// Type alias for effect assertion functions
type EffectAssertion<A> = Box<dyn FnOnce(&[Effect<A>])>;

/// Fluent API for testing reducers with Given-When-Then syntax
///
/// Several `when_action` calls apply their actions in order; effect
/// assertions see the effects of every action, concatenated. Effects are
/// not executed, so `Effect::Send` actions are only inspected.
///
/// # Example
///
/// ```ignore
/// use catalog_testing::ReducerTest;
///
/// ReducerTest::new(ListPageReducer::new())
///     .with_env(())
///     .given_state(ListPageState::new(6))
///     .when_action(ListPageAction::GoToPage(3))
///     .when_action(ListPageAction::SetSearch("áo".to_string()))
///     .then_state(|state| {
///         assert_eq!(state.page, 1);
///     })
///     .run();
/// ```
pub struct ReducerTest<R, S, A, E>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    reducer: R,
    environment: Option<E>,
    initial_state: Option<S>,
    actions: Vec<A>,
    state_assertions: Vec<StateAssertion<S>>,
    effect_assertions: Vec<EffectAssertion<A>>,
}

impl<R, S, A, E> ReducerTest<R, S, A, E>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    /// Create a new reducer test with the given reducer
    #[must_use]
    pub const fn new(reducer: R) -> Self {
        Self {
            reducer,
            environment: None,
            initial_state: None,
            actions: Vec::new(),
            state_assertions: Vec::new(),
            effect_assertions: Vec::new(),
        }
    }

    /// Set the environment for the test
    #[must_use]
    pub fn with_env(mut self, env: E) -> Self {
        self.environment = Some(env);
        self
    }

    /// Set the initial state (Given)
    #[must_use]
    pub fn given_state(mut self, state: S) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// Add an action to apply (When)
    #[must_use]
    pub fn when_action(mut self, action: A) -> Self {
        self.actions.push(action);
        self
    }

    /// Add several actions to apply in order (When)
    #[must_use]
    pub fn when_actions<I>(mut self, actions: I) -> Self
    where
        I: IntoIterator<Item = A>,
    {
        self.actions.extend(actions);
        self
    }

    /// Add an assertion about the resulting state (Then)
    #[must_use]
    pub fn then_state<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&S) + 'static,
    {
        self.state_assertions.push(Box::new(assertion));
        self
    }

    /// Add an assertion about the resulting effects (Then)
    #[must_use]
    pub fn then_effects<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&[Effect<A>]) + 'static,
    {
        self.effect_assertions.push(Box::new(assertion));
        self
    }

    /// Run the test and execute all assertions
    ///
    /// # Panics
    ///
    /// Panics if initial state, action, or environment is not set,
    /// or if any assertions fail.
    #[allow(clippy::panic)] // Test code can panic
    #[allow(clippy::expect_used)] // Test code can use expect
    pub fn run(self) {
        let mut state = self
            .initial_state
            .expect("Initial state must be set with given_state()");

        assert!(
            !self.actions.is_empty(),
            "At least one action must be set with when_action()"
        );

        let env = self
            .environment
            .expect("Environment must be set with with_env()");

        let mut effects = Vec::new();
        for action in self.actions {
            effects.extend(self.reducer.reduce(&mut state, action, &env));
        }

        for assertion in self.state_assertions {
            assertion(&state);
        }

        for assertion in self.effect_assertions {
            assertion(&effects);
        }
    }
}

/// Helper assertions for effects
pub mod assertions {
    use catalog_core::effect::Effect;

    /// Assert that there are no effects
    ///
    /// # Panics
    ///
    /// Panics if any effect other than `Effect::None` is present.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_no_effects<A: std::fmt::Debug>(effects: &[Effect<A>]) {
        assert!(
            effects.iter().all(Effect::is_none),
            "Expected no effects, but found {}: {:?}",
            effects.len(),
            effects
        );
    }

    /// Assert the number of effects
    ///
    /// # Panics
    ///
    /// Panics if the number of effects doesn't match expected.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_effects_count<A>(effects: &[Effect<A>], expected: usize) {
        assert_eq!(
            effects.len(),
            expected,
            "Expected {} effects, but found {}",
            expected,
            effects.len()
        );
    }

    /// Collect the actions carried by `Effect::Send`, in order
    #[must_use]
    pub fn sent_actions<A>(effects: &[Effect<A>]) -> Vec<&A> {
        effects
            .iter()
            .filter_map(|effect| match effect {
                Effect::Send(action) => Some(action.as_ref()),
                Effect::None => None,
            })
            .collect()
    }

    /// Assert that exactly `expected` was sent, and nothing else
    ///
    /// # Panics
    ///
    /// Panics if the sent actions differ from `expected`.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_sends<A: std::fmt::Debug + PartialEq>(effects: &[Effect<A>], expected: &[A]) {
        let sent = sent_actions(effects);
        let expected: Vec<&A> = expected.iter().collect();
        assert_eq!(sent, expected, "Unexpected sent actions");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::{smallvec, SmallVec};

    #[derive(Clone, Debug)]
    struct BinState {
        count: u32,
    }

    #[derive(Clone, Debug, PartialEq)]
    enum BinAction {
        Put,
        Take,
        Empty,
    }

    struct BinReducer;

    impl Reducer for BinReducer {
        type State = BinState;
        type Action = BinAction;
        type Environment = ();

        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            _env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]> {
            match action {
                BinAction::Put => {
                    state.count += 1;
                    smallvec![Effect::None]
                },
                BinAction::Take => {
                    state.count = state.count.saturating_sub(1);
                    if state.count == 0 {
                        smallvec![Effect::send(BinAction::Empty)]
                    } else {
                        smallvec![Effect::None]
                    }
                },
                BinAction::Empty => SmallVec::new(),
            }
        }
    }

    #[test]
    fn test_reducer_test_single_action() {
        ReducerTest::new(BinReducer)
            .with_env(())
            .given_state(BinState { count: 0 })
            .when_action(BinAction::Put)
            .then_state(|state| {
                assert_eq!(state.count, 1);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_reducer_test_action_sequence() {
        ReducerTest::new(BinReducer)
            .with_env(())
            .given_state(BinState { count: 0 })
            .when_actions([BinAction::Put, BinAction::Put, BinAction::Take])
            .then_state(|state| {
                assert_eq!(state.count, 1);
            })
            .then_effects(|effects| assertions::assert_effects_count(effects, 3))
            .run();
    }

    #[test]
    fn test_assert_sends() {
        ReducerTest::new(BinReducer)
            .with_env(())
            .given_state(BinState { count: 1 })
            .when_action(BinAction::Take)
            .then_effects(|effects| assertions::assert_sends(effects, &[BinAction::Empty]))
            .run();
    }

    #[test]
    fn test_assertions_no_effects() {
        assertions::assert_no_effects::<BinAction>(&[Effect::None]);
        assertions::assert_no_effects::<BinAction>(&[]);
    }

    #[test]
    #[should_panic(expected = "Expected no effects")]
    fn test_assertions_no_effects_rejects_send() {
        assertions::assert_no_effects(&[Effect::send(BinAction::Put)]);
    }
}
