use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::time::Instant;

use catalog::{load_catalog, Catalog, User};
use engine::{merge_recommendations, recommend};
use store::{connect, SaveOutcome, SqlUserStore, UserStore};

/// ShopRecs - personalized product recommendations
#[derive(Parser)]
#[command(name = "shop-recs")]
#[command(about = "Tiered product recommendation engine", long_about = None)]
struct Cli {
    /// SQLite database URL holding the user documents
    #[arg(long, default_value = "sqlite://shop-recs.db?mode=rwc")]
    database_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recompute and persist recommendations for a user
    Refresh {
        /// Phone number identifying the user
        #[arg(long)]
        phone: String,

        /// Path to the nested product catalog JSON file
        #[arg(long, default_value = "data/products.json")]
        catalog: PathBuf,
    },

    /// Show a user's profile and stored recommendations
    Show {
        /// Phone number identifying the user
        #[arg(long)]
        phone: String,
    },

    /// Insert or replace a user document from a JSON file
    SeedUser {
        /// Phone number identifying the user
        #[arg(long)]
        phone: String,

        /// Path to a JSON user document
        #[arg(long)]
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let pool = connect(&cli.database_url)
        .await
        .with_context(|| format!("Failed to connect to user store at {}", cli.database_url))?;
    let store = SqlUserStore::new(pool);

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Refresh { phone, catalog } => handle_refresh(&store, &phone, &catalog).await?,
        Commands::Show { phone } => handle_show(&store, &phone).await?,
        Commands::SeedUser { phone, file } => handle_seed_user(&store, &phone, &file).await?,
    }

    Ok(())
}

/// Handle the 'refresh' command
async fn handle_refresh(store: &impl UserStore, phone: &str, catalog_path: &Path) -> Result<()> {
    let start = Instant::now();
    let products = load_catalog(catalog_path)
        .with_context(|| format!("Failed to load catalog from {}", catalog_path.display()))?;
    let catalog = Catalog::from_products(products);
    println!(
        "{} Loaded {} catalog products in {:?}",
        "✓".green(),
        catalog.len(),
        start.elapsed()
    );

    let Some(user) = store.find_by_phone(phone).await? else {
        println!("User with phone {} not found.", phone);
        return Ok(());
    };

    let fresh = recommend(&user, &catalog);
    let merged = merge_recommendations(&user, fresh);

    match store.save_recommendations(phone, &merged).await? {
        SaveOutcome::Updated => println!(
            "{} Updated recommendations for {}. Count: {}",
            "✓".green(),
            phone,
            merged.len()
        ),
        SaveOutcome::Unchanged => println!(
            "Recomputed recommendations for {}; stored list was already up to date.",
            phone
        ),
        SaveOutcome::Missing => println!(
            "{} User {} disappeared before the update could be written.",
            "✗".red(),
            phone
        ),
    }

    Ok(())
}

/// Handle the 'show' command
async fn handle_show(store: &impl UserStore, phone: &str) -> Result<()> {
    let Some(user) = store.find_by_phone(phone).await? else {
        println!("User with phone {} not found.", phone);
        return Ok(());
    };

    print!("{}", format!("User: {}\n", user.phone).bold().blue());
    print!("{}Viewed items: {}\n", "• ".green(), user.viewed_items.len());
    print!("{}Cart items: {}\n", "• ".green(), user.cart.len());
    print!("{}Wishlist items: {}\n", "• ".green(), user.wishlist.len());

    println!("Stored recommendations ({}):", user.recommendations.len());
    for (rank, product) in user.recommendations.iter().enumerate() {
        let category = product.category.as_deref().unwrap_or("-");
        println!(
            "{}. {} [{}]",
            (rank + 1).to_string().green(),
            product.name,
            category
        );
    }

    Ok(())
}

/// Handle the 'seed-user' command
async fn handle_seed_user(store: &impl UserStore, phone: &str, file: &Path) -> Result<()> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read user document {}", file.display()))?;
    let mut user: User = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a valid user document", file.display()))?;

    // The command-line phone is authoritative over whatever the file says.
    user.phone = phone.to_string();

    store.upsert_user(&user).await?;
    println!("{} Seeded user {}", "✓".green(), phone);

    Ok(())
}
