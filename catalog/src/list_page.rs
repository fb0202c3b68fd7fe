//! UI state of the product list page.
//!
//! The search box, category selector, price inputs and current page are
//! kept in [`ListPageState`] and changed through [`ListPageAction`]. Any
//! filter change sends the page back to 1 so the user never lands on a page
//! that the narrower result set no longer has.

use crate::query::{compute_view, ProductView, ViewParams, DEFAULT_PAGE_SIZE};
use crate::types::{Category, Product};
use catalog_core::{effect::Effect, reducer::Reducer, SmallVec};

/// State of the list page controls
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListPageState {
    /// Search box contents
    pub search_text: String,
    /// Selected category, `None` for "all"
    pub category: Option<Category>,
    /// Minimum price input
    pub min_price: String,
    /// Maximum price input
    pub max_price: String,
    /// Requested page, 1-based; may be stale until the view clamps it
    pub page: usize,
    /// Products per page
    pub page_size: usize,
}

impl ListPageState {
    /// Fresh list page with the given page size
    #[must_use]
    pub const fn new(page_size: usize) -> Self {
        Self {
            search_text: String::new(),
            category: None,
            min_price: String::new(),
            max_price: String::new(),
            page: 1,
            page_size,
        }
    }

    /// View parameters for the current controls
    #[must_use]
    pub fn params(&self) -> ViewParams {
        ViewParams {
            search_text: self.search_text.clone(),
            category: self.category,
            min_price: self.min_price.clone(),
            max_price: self.max_price.clone(),
            page_size: self.page_size,
            page_number: self.page,
        }
    }

    /// The page of `products` these controls select
    #[must_use]
    pub fn view<'a>(&self, products: &'a [Product]) -> ProductView<'a> {
        compute_view(products, &self.params())
    }
}

impl Default for ListPageState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// Interactions on the list page
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListPageAction {
    /// Search box edited
    SetSearch(String),
    /// Category selector changed
    SelectCategory(Option<Category>),
    /// Minimum price input edited
    SetMinPrice(String),
    /// Maximum price input edited
    SetMaxPrice(String),
    /// Page button clicked
    GoToPage(usize),
    /// "Next" clicked
    NextPage,
    /// "Previous" clicked
    PreviousPage,
    /// Back to a fresh page: filters cleared, page 1
    Reset,
}

impl ListPageAction {
    /// Whether the action moves relative to the current page
    #[must_use]
    pub const fn is_relative_move(&self) -> bool {
        matches!(self, Self::NextPage | Self::PreviousPage)
    }
}

/// Reducer for the list page controls
#[derive(Clone, Copy, Debug, Default)]
pub struct ListPageReducer;

impl ListPageReducer {
    /// Creates a new `ListPageReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for ListPageReducer {
    type State = ListPageState;
    type Action = ListPageAction;
    type Environment = ();

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            ListPageAction::SetSearch(text) => {
                state.search_text = text;
                state.page = 1;
            },
            ListPageAction::SelectCategory(category) => {
                state.category = category;
                state.page = 1;
            },
            ListPageAction::SetMinPrice(text) => {
                state.min_price = text;
                state.page = 1;
            },
            ListPageAction::SetMaxPrice(text) => {
                state.max_price = text;
                state.page = 1;
            },
            ListPageAction::GoToPage(page) => state.page = page.max(1),
            ListPageAction::NextPage => state.page = state.page.saturating_add(1),
            ListPageAction::PreviousPage => state.page = state.page.saturating_sub(1).max(1),
            ListPageAction::Reset => *state = ListPageState::new(state.page_size),
        }

        SmallVec::new()
    }
}
