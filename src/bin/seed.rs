use axum_shopping_cart::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    dto::items::NewItem,
    store::CatalogStore,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url).await?;
    // Ensure migrations are applied.
    run_migrations(&orm).await?;

    let store = CatalogStore::new(orm);
    let inserted = seed_items(&store).await?;

    println!("Seed completed. Inserted {inserted} items");
    Ok(())
}

fn item(id: i64, title: &str, price: f64, description: &str, category: &str) -> NewItem {
    NewItem {
        id,
        title: title.to_string(),
        price,
        description: Some(description.to_string()),
        category: Some(category.to_string()),
        image: Some(format!("https://example.com/images/{id}.jpg")),
    }
}

// Items whose id already exists are skipped, so the seed can be re-run.
async fn seed_items(store: &CatalogStore) -> anyhow::Result<usize> {
    let items = vec![
        item(1, "Axum Hoodie", 55.00, "Warm hoodie for Rustaceans", "apparel"),
        item(2, "Ferris Mug", 12.00, "Coffee tastes better with Ferris", "kitchen"),
        item(3, "Rust Sticker Pack", 5.00, "Decorate your laptop", "accessories"),
        item(4, "E-book: Async Rust", 25.00, "Learn async Rust patterns", "books"),
    ];

    let mut inserted = 0;
    for new_item in items {
        if store.get(new_item.id).await?.is_some() {
            println!("Skipping item {} (already present)", new_item.id);
            continue;
        }
        store.insert_many(vec![new_item]).await?;
        inserted += 1;
    }

    println!("Seeded items");
    Ok(inserted)
}
