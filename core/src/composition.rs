//! Reducer composition utilities
//!
//! This module provides utilities for composing reducers:
//! - **`combine_reducers`**: Run multiple reducers on the same state/action
//! - **`scope_reducer`**: Embed a child reducer in a parent state and action
//!
//! A feature is usually built as several small reducers, each owning one
//! slice of the application state, glued together here.

use crate::effect::Effect;
use crate::reducer::Reducer;
use smallvec::SmallVec;

/// Combines multiple reducers that operate on the same state and action types.
///
/// Each reducer is run in sequence, in the order given, and all effects are
/// collected and concatenated. Later reducers observe the state changes made
/// by earlier ones.
///
/// # Examples
///
/// ```
/// use catalog_core::composition::combine_reducers;
/// use catalog_core::{smallvec, Effect, Reducer, SmallVec};
///
/// #[derive(Clone, Default)]
/// struct Shelf {
///     stock: u32,
///     audited: bool,
/// }
///
/// #[derive(Clone)]
/// enum ShelfAction {
///     Restock(u32),
///     Audit,
/// }
///
/// struct StockReducer;
/// struct AuditReducer;
///
/// impl Reducer for StockReducer {
///     type State = Shelf;
///     type Action = ShelfAction;
///     type Environment = ();
///
///     fn reduce(&self, state: &mut Shelf, action: ShelfAction, _env: &()) -> SmallVec<[Effect<ShelfAction>; 4]> {
///         if let ShelfAction::Restock(n) = action {
///             state.stock += n;
///         }
///         smallvec![Effect::None]
///     }
/// }
///
/// impl Reducer for AuditReducer {
///     type State = Shelf;
///     type Action = ShelfAction;
///     type Environment = ();
///
///     fn reduce(&self, state: &mut Shelf, action: ShelfAction, _env: &()) -> SmallVec<[Effect<ShelfAction>; 4]> {
///         if matches!(action, ShelfAction::Audit) {
///             state.audited = true;
///         }
///         smallvec![Effect::None]
///     }
/// }
///
/// let combined = combine_reducers(vec![Box::new(StockReducer), Box::new(AuditReducer)]);
///
/// let mut shelf = Shelf::default();
/// let _ = combined.reduce(&mut shelf, ShelfAction::Restock(2), &());
/// let _ = combined.reduce(&mut shelf, ShelfAction::Audit, &());
/// assert_eq!(shelf.stock, 2);
/// assert!(shelf.audited);
/// ```
#[must_use]
pub fn combine_reducers<S, A, E>(
    reducers: Vec<Box<dyn Reducer<State = S, Action = A, Environment = E>>>,
) -> CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    CombinedReducer { reducers }
}

/// A combined reducer that runs multiple reducers in sequence.
///
/// Created by [`combine_reducers`].
pub struct CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    reducers: Vec<Box<dyn Reducer<State = S, Action = A, Environment = E>>>,
}

impl<S, A, E> Reducer for CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        let mut all_effects = SmallVec::new();

        for reducer in &self.reducers {
            let effects = reducer.reduce(state, action.clone(), env);
            all_effects.extend(effects);
        }

        all_effects
    }
}

/// Embeds a child reducer in a larger state and action type.
///
/// - `get_state` / `set_state` focus the parent state on the child's slice.
/// - `extract_action` picks the child's actions out of the parent enum;
///   every other parent action is ignored by the scoped reducer.
/// - `embed_action` wraps actions the child sends back through effects.
///
/// # Examples
///
/// ```
/// use catalog_core::composition::scope_reducer;
/// use catalog_core::{smallvec, Effect, Reducer, SmallVec};
///
/// #[derive(Clone, Default)]
/// struct Shelf {
///     stock: u32,
/// }
///
/// #[derive(Clone)]
/// enum ShelfAction {
///     Restock(u32),
/// }
///
/// struct ShelfReducer;
///
/// impl Reducer for ShelfReducer {
///     type State = Shelf;
///     type Action = ShelfAction;
///     type Environment = ();
///
///     fn reduce(&self, state: &mut Shelf, action: ShelfAction, _env: &()) -> SmallVec<[Effect<ShelfAction>; 4]> {
///         let ShelfAction::Restock(n) = action;
///         state.stock += n;
///         smallvec![Effect::None]
///     }
/// }
///
/// #[derive(Clone, Default)]
/// struct Store {
///     shelf: Shelf,
///     name: String,
/// }
///
/// #[derive(Clone)]
/// enum StoreAction {
///     Shelf(ShelfAction),
///     Rename(String),
/// }
///
/// let scoped = scope_reducer(
///     ShelfReducer,
///     |store: &Store| &store.shelf,
///     |store: &mut Store, shelf: Shelf| store.shelf = shelf,
///     |action: StoreAction| match action {
///         StoreAction::Shelf(a) => Some(a),
///         StoreAction::Rename(_) => None,
///     },
///     StoreAction::Shelf,
/// );
///
/// let mut store = Store::default();
/// let _ = scoped.reduce(&mut store, StoreAction::Shelf(ShelfAction::Restock(4)), &());
/// assert_eq!(store.shelf.stock, 4);
/// ```
pub fn scope_reducer<S, SubS, A, SubA, E, R>(
    reducer: R,
    get_state: fn(&S) -> &SubS,
    set_state: fn(&mut S, SubS),
    extract_action: fn(A) -> Option<SubA>,
    embed_action: fn(SubA) -> A,
) -> ScopedReducer<S, SubS, A, SubA, E, R>
where
    SubS: Clone,
    R: Reducer<State = SubS, Action = SubA, Environment = E>,
{
    ScopedReducer {
        reducer,
        get_state,
        set_state,
        extract_action,
        embed_action,
        _phantom: std::marker::PhantomData,
    }
}

/// A scoped reducer that operates on a subset of state and actions.
///
/// Created by [`scope_reducer`].
pub struct ScopedReducer<S, SubS, A, SubA, E, R>
where
    SubS: Clone,
    R: Reducer<State = SubS, Action = SubA, Environment = E>,
{
    reducer: R,
    get_state: fn(&S) -> &SubS,
    set_state: fn(&mut S, SubS),
    extract_action: fn(A) -> Option<SubA>,
    embed_action: fn(SubA) -> A,
    _phantom: std::marker::PhantomData<fn() -> E>,
}

impl<S, SubS, A, SubA, E, R> Reducer for ScopedReducer<S, SubS, A, SubA, E, R>
where
    SubS: Clone,
    R: Reducer<State = SubS, Action = SubA, Environment = E>,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        let Some(sub_action) = (self.extract_action)(action) else {
            return SmallVec::new();
        };

        // Reduce a copy of the slice, then write it back
        let mut sub_state = (self.get_state)(state).clone();
        let effects = self.reducer.reduce(&mut sub_state, sub_action, env);
        (self.set_state)(state, sub_state);

        effects
            .into_iter()
            .map(|effect| effect.map(self.embed_action))
            .collect()
    }
}
