//! Product catalog demo binary
//!
//! Seeds a catalog and walks through a short session on the list page.

use product_catalog::{
    CatalogConfig, CatalogError, Category, ListPageAction, ProductCatalog, ProductDraft, ProductId,
};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let config = CatalogConfig::from_env();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = config.validate() {
        error!(error = %e, "Invalid configuration");
        std::process::exit(2);
    }
    info!(
        page_size = config.page_size,
        seed = config.seed,
        max_feedback_depth = config.max_feedback_depth,
        "Configuration loaded"
    );

    if let Err(e) = run(&config) {
        error!(error = %e, "Session failed");
        std::process::exit(1);
    }
}

fn run(config: &CatalogConfig) -> Result<(), CatalogError> {
    println!("=== Product Catalog ===\n");

    let catalog = ProductCatalog::new(config);
    print_page(&catalog, "Initial list");

    catalog.list(ListPageAction::NextPage)?;
    print_page(&catalog, "Next page");

    catalog.list(ListPageAction::SetSearch("áo".to_string()))?;
    print_page(&catalog, "Search \"áo\"");

    catalog.list(ListPageAction::SetSearch(String::new()))?;
    catalog.list(ListPageAction::SetMinPrice("100000".to_string()))?;
    catalog.list(ListPageAction::SetMaxPrice("400000".to_string()))?;
    print_page(&catalog, "Price 100.000 ₫ to 400.000 ₫");

    println!(">>> Submitting an incomplete form");
    let rejected = ProductDraft {
        name: "ab".to_string(),
        ..ProductDraft::default()
    };
    if let Err(CatalogError::Validation(errors)) = catalog.create(&rejected) {
        for field in errors.fields() {
            println!("  {field}: {}", errors.get(field).unwrap_or_default());
        }
    }
    println!();

    let id = catalog.create(&ProductDraft {
        name: "Test".to_string(),
        category: Some(Category::Books),
        price: "50000".to_string(),
        quantity: "5".to_string(),
        description: String::new(),
    })?;
    print_page(&catalog, &format!("Added product {id}"));

    let mut form = catalog.draft(id)?;
    form.quantity = "12".to_string();
    catalog.edit(id, &form)?;
    println!("Edited {id}: {}\n", catalog.product(id)?.summary());

    catalog.remove(ProductId::new(1))?;
    catalog.list(ListPageAction::SelectCategory(Some(Category::Electronics)))?;
    print_page(&catalog, "Electronics after deleting product 1");

    match catalog.product(ProductId::new(1)) {
        Err(e) if e.is_not_found() => println!("{e}\n"),
        other => println!("Unexpected lookup result: {other:?}\n"),
    }

    println!("=== Session complete: {} products ===", catalog.count());
    Ok(())
}

fn print_page(catalog: &ProductCatalog, title: &str) {
    let page = catalog.view();
    println!(
        ">>> {title} (page {}/{}, {} matching)",
        page.effective_page, page.total_pages, page.total_count
    );
    for product in &page.products {
        println!("  #{:<3} {:<24} {}", product.id, product.name, product.summary());
    }
    println!();
}
