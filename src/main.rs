//! Storefront - catalog and checkout walkthrough against the demo catalog

use anyhow::Result;
use storefront::{
    Cart, FileDropNotifier, InMemoryProductRepository, NatsNotifier, Notifier, NotifierKind, OrderProcessor,
    ProductCatalog, ProductId, ProductRepository, ShippingDetails, StoreConfig,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())).with(tracing_subscriber::fmt::layer()).init();
    let config = StoreConfig::load()?;

    let repository = InMemoryProductRepository::seeded();
    let catalog = ProductCatalog::new(&repository).with_page_size(config.page_size);
    let categories = catalog.list_categories()?;
    tracing::info!(?categories, "Catalog loaded");

    for category in std::iter::once(None).chain(categories.iter().map(|c| Some(c.as_str()))) {
        let page = catalog.list_products(category, 1)?;
        let names: Vec<_> = page.products.iter().map(|p| p.name()).collect();
        tracing::info!(category = category.unwrap_or("All"), total = page.paging_info.total_items, pages = page.paging_info.total_pages(), ?names, "Page 1");
    }

    let mut cart = Cart::new();
    for (id, quantity) in [(1, 1), (3, 2), (3, 1)] {
        if let Some(product) = repository.find_product(ProductId::new(id))? {
            cart.add_item(&product, quantity);
        }
    }
    for event in cart.take_events() {
        tracing::debug!(?event, "Cart changed");
    }
    let total = cart.compute_total()?;
    tracing::info!(lines = cart.line_count(), %total, "Cart ready");

    let shipping = ShippingDetails {
        name: "Joe Bloggs".into(), line1: "1 Main Street".into(), city: "Springfield".into(),
        state: "IL".into(), zip: Some("62701".into()), country: "USA".into(), gift_wrap: true, ..Default::default()
    };

    match config.notifier.kind {
        NotifierKind::File => checkout(FileDropNotifier::new(&config.notifier), &mut cart, &shipping).await,
        NotifierKind::Nats => checkout(NatsNotifier::connect(&config.notifier).await?, &mut cart, &shipping).await,
    }
}

async fn checkout<N: Notifier>(notifier: N, cart: &mut Cart, shipping: &ShippingDetails) -> Result<()> {
    let receipt = OrderProcessor::new(notifier).process_order(cart, shipping).await?;
    tracing::info!(order_id = %receipt.order_id, total = %receipt.total, "🚀 Thanks! Your order has been placed");
    Ok(())
}
