//! The list page's derived view: search, filter, paginate.
//!
//! [`compute_view`] is a pure function of the product list and the page's
//! parameters. It is cheap enough at catalog scale to run on every render.

use crate::numeric::parse_float;
use crate::types::{Category, Product};

/// Products per page on the list page
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Inputs of the list view
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewParams {
    /// Case-insensitive name filter; blank means no filter
    pub search_text: String,
    /// Exact category filter
    pub category: Option<Category>,
    /// Lower price bound as typed; unparseable means no bound
    pub min_price: String,
    /// Upper price bound as typed; unparseable means no bound
    pub max_price: String,
    /// Products per page; zero is treated as one
    pub page_size: usize,
    /// Requested page, 1-based
    pub page_number: usize,
}

impl Default for ViewParams {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            category: None,
            min_price: String::new(),
            max_price: String::new(),
            page_size: DEFAULT_PAGE_SIZE,
            page_number: 1,
        }
    }
}

/// Result of [`compute_view`]
#[derive(Clone, Debug, PartialEq)]
pub struct ProductView<'a> {
    /// Products on the effective page, in catalog order
    pub visible_products: Vec<&'a Product>,
    /// Number of products passing every filter
    pub total_count: usize,
    /// Page count, at least 1
    pub total_pages: usize,
    /// Requested page clamped to `1..=total_pages`
    pub effective_page: usize,
}

impl ProductView<'_> {
    /// Whether a "previous" control should be enabled
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.effective_page > 1
    }

    /// Whether a "next" control should be enabled
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.effective_page < self.total_pages
    }

    /// Page numbers for the pagination bar
    pub fn page_numbers(&self) -> impl Iterator<Item = usize> {
        1..=self.total_pages
    }
}

/// A [`ProductView`] that owns its products, for handing out of a store
#[derive(Clone, Debug, PartialEq)]
pub struct ProductPage {
    /// Products on the effective page, in catalog order
    pub products: Vec<Product>,
    /// Number of products passing every filter
    pub total_count: usize,
    /// Page count, at least 1
    pub total_pages: usize,
    /// Requested page clamped to `1..=total_pages`
    pub effective_page: usize,
}

impl From<ProductView<'_>> for ProductPage {
    fn from(view: ProductView<'_>) -> Self {
        Self {
            products: view.visible_products.into_iter().cloned().collect(),
            total_count: view.total_count,
            total_pages: view.total_pages,
            effective_page: view.effective_page,
        }
    }
}

/// Compute the visible page of `products` for `params`.
///
/// Filters apply in a fixed order: name search, category, minimum price,
/// maximum price. Pagination then slices the filtered list.
///
/// ```
/// use product_catalog::query::{compute_view, ViewParams};
/// use product_catalog::seed::sample_products;
///
/// let products = sample_products();
/// let view = compute_view(&products, &ViewParams {
///     min_price: "100000".to_string(),
///     max_price: "400000".to_string(),
///     ..ViewParams::default()
/// });
/// assert!(view.visible_products.iter().all(|p| (100_000.0..=400_000.0).contains(&p.price)));
/// ```
#[must_use]
pub fn compute_view<'a>(products: &'a [Product], params: &ViewParams) -> ProductView<'a> {
    let needle = params.search_text.trim().to_lowercase();
    let min_price = parse_float(&params.min_price);
    let max_price = parse_float(&params.max_price);

    let filtered: Vec<&Product> = products
        .iter()
        .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
        .filter(|p| params.category.is_none_or(|c| p.category == c))
        .filter(|p| min_price.is_none_or(|min| p.price >= min))
        .filter(|p| max_price.is_none_or(|max| p.price <= max))
        .collect();

    let page_size = params.page_size.max(1);
    let total_count = filtered.len();
    let total_pages = total_count.div_ceil(page_size).max(1);
    let effective_page = params.page_number.clamp(1, total_pages);

    let start = (effective_page - 1) * page_size;
    let visible_products = filtered
        .into_iter()
        .skip(start)
        .take(page_size)
        .collect();

    ProductView {
        visible_products,
        total_count,
        total_pages,
        effective_page,
    }
}
