//! # Catalog Core
//!
//! Core traits and types for the product catalog's state management.
//!
//! All mutation of catalog state flows through a reducer: a pure function
//! `(State, Action, Environment) → (State, Effects)`. Reducers never perform
//! I/O themselves; follow-up work is returned as [`Effect`] descriptions and
//! executed by the runtime `Store`.
//!
//! ## Core Concepts
//!
//! - **State**: owned, `Clone`-able domain state
//! - **Action**: closed enum of every input a reducer accepts
//! - **Reducer**: the business logic, see [`Reducer`]
//! - **Effect**: description of follow-up work, see [`Effect`]
//! - **Environment**: injected dependencies (often `()` for pure features)
//!
//! ## Example
//!
//! ```
//! use catalog_core::{smallvec, transition, Effect, Reducer, SmallVec};
//!
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct ShelfState {
//!     stock: u32,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum ShelfAction {
//!     Restock(u32),
//!     Sell,
//! }
//!
//! struct ShelfReducer;
//!
//! impl Reducer for ShelfReducer {
//!     type State = ShelfState;
//!     type Action = ShelfAction;
//!     type Environment = ();
//!
//!     fn reduce(
//!         &self,
//!         state: &mut ShelfState,
//!         action: ShelfAction,
//!         _env: &(),
//!     ) -> SmallVec<[Effect<ShelfAction>; 4]> {
//!         match action {
//!             ShelfAction::Restock(n) => state.stock += n,
//!             ShelfAction::Sell => state.stock = state.stock.saturating_sub(1),
//!         }
//!         smallvec![Effect::None]
//!     }
//! }
//!
//! let before = ShelfState::default();
//! let (after, _effects) = transition(&ShelfReducer, &before, ShelfAction::Restock(3), &());
//! assert_eq!(after.stock, 3);
//! assert_eq!(before.stock, 0);
//! ```

pub use smallvec::{smallvec, SmallVec};

/// Reducer composition utilities
pub mod composition;

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`.
/// They contain all business logic and are deterministic and testable.
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// Implementations update `state` in place and return the effects
        /// to run afterwards. They must not fail: an action that does not
        /// apply to the current state leaves it untouched.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }

    /// Apply one action to a copy of `state`, leaving the input untouched.
    ///
    /// This is the value-level view of a reducer: the caller keeps the old
    /// state and receives the new one alongside the produced effects.
    pub fn transition<R>(
        reducer: &R,
        state: &R::State,
        action: R::Action,
        env: &R::Environment,
    ) -> (R::State, SmallVec<[Effect<R::Action>; 4]>)
    where
        R: Reducer + ?Sized,
        R::State: Clone,
    {
        let mut next = state.clone();
        let effects = reducer.reduce(&mut next, action, env);
        (next, effects)
    }
}

/// Effect module - Side effect descriptions
///
/// Effects are values, not execution. The runtime `Store` interprets them
/// after the reducer has returned and the new state is committed.
pub mod effect {
    /// Effect type - describes follow-up work to perform after a reduce
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects can produce (feedback loop)
    #[derive(Clone, Debug, PartialEq)]
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Dispatch another action once the current one is committed
        Send(Box<Action>),
    }

    impl<Action> Effect<Action> {
        /// Effect that feeds `action` back into the store
        #[must_use]
        pub fn send(action: Action) -> Self {
            Self::Send(Box::new(action))
        }

        /// Returns `true` for [`Effect::None`]
        #[must_use]
        pub const fn is_none(&self) -> bool {
            matches!(self, Self::None)
        }

        /// Lift an effect into a wider action type
        ///
        /// Used when a child reducer is embedded in a parent whose action
        /// enum wraps the child's actions.
        #[must_use]
        pub fn map<B, F>(self, f: F) -> Effect<B>
        where
            F: FnOnce(Action) -> B,
        {
            match self {
                Self::None => Effect::None,
                Self::Send(action) => Effect::Send(Box::new(f(*action))),
            }
        }
    }
}

pub use effect::Effect;
pub use reducer::{transition, Reducer};
