//! Seed the catalog with a small sample data set.
//!
//! Intended for development environments: gives the storefront something to
//! render and the back office something to manage. Seeding is idempotent —
//! categories and products that already exist are left alone.
//!
//! # Environment Variables
//!
//! - `ADMIN_DATABASE_URL` - `PostgreSQL` connection string for the admin
//!   database (falls back to `DATABASE_URL`)

use rust_decimal::Decimal;
use secrecy::SecretString;
use sqlx::PgPool;
use tracing::info;

use magi_admin::db::{CategoryRepository, ProductRepository, RepositoryError, create_pool};
use magi_admin::models::{Category, NewCategory, NewProduct};
use magi_core::ProductStatus;

struct SeedProduct {
    name: &'static str,
    description: &'static str,
    price: &'static str,
    category_slug: &'static str,
    sku: &'static str,
    stock: i32,
    featured: bool,
    image: &'static str,
}

const CATEGORIES: &[(&str, &str, &str)] = &[
    ("Foundation", "foundation", "Base makeup for every skin tone"),
    ("Lips", "lips", "Lipsticks, stains and glosses"),
    ("Highlighter", "highlighter", "Glow and illuminating products"),
    ("Eyes", "eyes", "Mascara, liner and shadow"),
];

const PRODUCTS: &[SeedProduct] = &[
    SeedProduct {
        name: "Luminous Matte Foundation",
        description: "Weightless, buildable coverage with a natural matte finish.",
        price: "39.99",
        category_slug: "foundation",
        sku: "MAGI-FD-001",
        stock: 40,
        featured: true,
        image: "https://cdn.magi.example/luminous-matte-foundation.jpg",
    },
    SeedProduct {
        name: "Velvet Lip Stain",
        description: "Long-wear lip stain with a soft velvet finish.",
        price: "24.99",
        category_slug: "lips",
        sku: "MAGI-LS-001",
        stock: 60,
        featured: true,
        image: "https://cdn.magi.example/velvet-lip-stain.jpg",
    },
    SeedProduct {
        name: "Radiant Skin Illuminator",
        description: "Liquid highlighter for a lit-from-within glow.",
        price: "32.50",
        category_slug: "highlighter",
        sku: "MAGI-HL-001",
        stock: 25,
        featured: false,
        image: "https://cdn.magi.example/radiant-skin-illuminator.jpg",
    },
    SeedProduct {
        name: "Volumizing Mascara",
        description: "Buildable volume without clumps or flaking.",
        price: "19.99",
        category_slug: "eyes",
        sku: "MAGI-MA-001",
        stock: 80,
        featured: true,
        image: "https://cdn.magi.example/volumizing-mascara.jpg",
    },
];

/// Seed categories and products.
///
/// # Errors
///
/// Returns an error if environment variables are missing or database
/// operations fail.
pub async fn catalog() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("ADMIN_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .map_err(|_| "ADMIN_DATABASE_URL not set")?;

    info!("Connecting to admin database...");
    let pool = create_pool(&database_url).await?;

    let categories = seed_categories(&pool).await?;
    seed_products(&pool, &categories).await?;

    info!("Seed complete");
    Ok(())
}

async fn seed_categories(pool: &PgPool) -> Result<Vec<Category>, RepositoryError> {
    let repo = CategoryRepository::new(pool);

    for (name, slug, description) in CATEGORIES {
        match repo
            .create(&NewCategory {
                name: (*name).to_owned(),
                slug: (*slug).to_owned(),
                description: Some((*description).to_owned()),
            })
            .await
        {
            Ok(category) => info!(slug, id = %category.id, "category created"),
            Err(RepositoryError::Conflict(_)) => info!(slug, "category exists, skipping"),
            Err(e) => return Err(e),
        }
    }

    repo.list().await
}

async fn seed_products(
    pool: &PgPool,
    categories: &[Category],
) -> Result<(), Box<dyn std::error::Error>> {
    let repo = ProductRepository::new(pool);

    for seed in PRODUCTS {
        let Some(category) = categories.iter().find(|c| c.slug == seed.category_slug) else {
            return Err(format!("missing seed category: {}", seed.category_slug).into());
        };

        let price: Decimal = seed.price.parse()?;
        let new = NewProduct {
            name: seed.name.to_owned(),
            description: seed.description.to_owned(),
            price,
            sale_price: None,
            category_id: category.id,
            sku: seed.sku.to_owned(),
            stock: seed.stock,
            low_stock_threshold: 5,
            status: ProductStatus::Active,
            featured: seed.featured,
            images: vec![seed.image.to_owned()],
        };

        match repo.create(&new).await {
            Ok(product) => info!(sku = seed.sku, id = %product.id, "product created"),
            Err(RepositoryError::Conflict(_)) => info!(sku = seed.sku, "product exists, skipping"),
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}
