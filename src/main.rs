use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use incimatch_catalog::{
    analyze, CatalogStats, FallbackTable, IngredientCatalog, ProductCatalog,
};
use incimatch_core::normalize::parse_ingredient_list;
use incimatch_core::{query_set, rank, ProductFilter, Profile};
use incimatch_recommend::{RecommendStats, Recommender};

/// Skincare ingredient analysis and product recommendations
#[derive(Parser, Debug)]
#[command(name = "incimatch")]
#[command(about = "Analyze cosmetic ingredient lists and match catalog products", long_about = None)]
struct Args {
    /// Directory containing ingredients_dict.csv and products.csv
    #[arg(short, long, default_value = "./data")]
    data_dir: PathBuf,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Emit JSON instead of plain text
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a pasted ingredient list and rank similar products
    Analyze {
        /// Comma- or semicolon-separated INCI names, e.g.
        /// "Aqua, Glycerin, Niacinamide, Parfum"
        text: String,
        /// Number of product matches to return
        #[arg(long, default_value_t = 5)]
        top_k: usize,
    },
    /// Look up a single ingredient in the reference dictionary
    Lookup { name: String },
    /// Recommend products for a profile saved as JSON
    Recommend {
        /// Path to the profile JSON file
        profile: PathBuf,
        #[arg(long, default_value_t = 5)]
        top_k: usize,
    },
    /// Browse the product catalog
    Products {
        #[arg(long)]
        brand: Option<String>,
        #[arg(long = "type")]
        product_type: Option<String>,
        /// Case-insensitive product name search
        #[arg(long)]
        search: Option<String>,
    },
    /// Catalog statistics
    Stats {
        /// Number of top ingredients to list
        #[arg(long, default_value_t = 20)]
        top: usize,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("incimatch v{}", env!("CARGO_PKG_VERSION"));
    info!("Data directory: {:?}", args.data_dir);

    let ingredient_path = args.data_dir.join("ingredients_dict.csv");
    let product_path = args.data_dir.join("products.csv");

    match args.command {
        Command::Analyze { text, top_k } => {
            let ingredients =
                IngredientCatalog::load_or_empty(&ingredient_path, FallbackTable::common());
            let products = ProductCatalog::load_or_empty(&product_path);

            let report = analyze(&ingredients, &text);
            if report.total() == 0 {
                println!("No ingredients could be parsed from the input.");
                return Ok(());
            }

            let tokens = parse_ingredient_list(&text);
            let matches = rank(&query_set(&tokens), products.products(), top_k);

            if args.json {
                let coverage = report.coverage_percent();
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "analysis": report,
                        "coverage_percent": coverage,
                        "matches": matches,
                    }))?
                );
                return Ok(());
            }

            println!(
                "{} ingredients parsed, {} in database ({:.0}% coverage)",
                report.total(),
                report.found(),
                report.coverage_percent()
            );
            for entry in &report.entries {
                match &entry.info {
                    Some(info) => {
                        println!("  [ok] {} - {}", info.name, info.short_description);
                    }
                    None => println!("  [??] {}", entry.token),
                }
            }
            if matches.is_empty() {
                println!("\nNo similar products found.");
            } else {
                println!("\nSimilar products:");
                for m in &matches {
                    println!(
                        "  {:>5.1}%  {} ({}, {})",
                        m.score * 100.0,
                        m.product.name,
                        m.product.product_type,
                        m.product.price
                    );
                }
            }
        }
        Command::Lookup { name } => {
            let ingredients =
                IngredientCatalog::load_or_empty(&ingredient_path, FallbackTable::common());
            match ingredients.lookup(&name) {
                Some(info) => {
                    if args.json {
                        println!("{}", serde_json::to_string_pretty(&info)?);
                    } else {
                        println!("{}", info.name);
                        if !info.short_description.is_empty() {
                            println!("  {}", info.short_description);
                        }
                        if !info.what_is_it.is_empty() {
                            println!("  What is it: {}", info.what_is_it);
                        }
                        if !info.what_does_it_do.is_empty() {
                            println!("  What does it do: {}", info.what_does_it_do);
                        }
                        if !info.who_is_it_good_for.is_empty() {
                            println!("  Good for: {}", info.who_is_it_good_for);
                        }
                        if !info.who_should_avoid.is_empty() {
                            println!("  Avoid for: {}", info.who_should_avoid);
                        }
                        if !info.url.is_empty() {
                            println!("  More: {}", info.url);
                        }
                    }
                }
                None => println!("Ingredient not found: {name}"),
            }
        }
        Command::Recommend { profile, top_k } => {
            let raw = std::fs::read_to_string(&profile)?;
            let profile: Profile = serde_json::from_str(&raw)?;

            // Same rules as a hosting layer's save action (concern limit).
            profile.validate()?;

            let products = ProductCatalog::load_or_empty(&product_path);
            let candidates =
                Recommender::within_budget(products.products(), profile.budget).len();
            let results = Recommender::default().recommend(products.products(), &profile, top_k);
            let stats = RecommendStats::compute(&results, candidates);

            if args.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "results": results,
                        "stats": stats,
                    }))?
                );
                return Ok(());
            }

            if results.is_empty() {
                println!("No products match the profile. Try raising the budget.");
                return Ok(());
            }
            println!(
                "{} of {} in-budget products, best score {}",
                stats.results_count, stats.candidates_count, stats.best_score
            );
            for (position, r) in results.iter().enumerate() {
                println!(
                    "  #{} {} ({}, {}) - {} points",
                    position + 1,
                    r.product.name,
                    r.product.product_type,
                    r.product.price,
                    r.score.total
                );
            }
        }
        Command::Products {
            brand,
            product_type,
            search,
        } => {
            let products = ProductCatalog::load_or_empty(&product_path);
            let mut filter = ProductFilter::new();
            if let Some(brand) = brand {
                filter = filter.brand(brand);
            }
            if let Some(product_type) = product_type {
                filter = filter.product_type(product_type);
            }
            if let Some(search) = search {
                filter = filter.name_contains(search);
            }

            let listed = products.filter(&filter);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&listed)?);
                return Ok(());
            }
            println!("{} products", listed.len());
            for product in listed {
                println!(
                    "  {} | {} | {} | {}",
                    product.name, product.brand, product.product_type, product.price
                );
            }
        }
        Command::Stats { top } => {
            let products = ProductCatalog::load_or_empty(&product_path);
            let ingredients =
                IngredientCatalog::load_or_empty(&ingredient_path, FallbackTable::common());
            let stats = CatalogStats::compute(&products, top);

            if args.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
                return Ok(());
            }
            println!("Products:            {}", stats.total_products);
            println!("Ingredient records:  {}", ingredients.len());
            println!("Unique brands:       {}", stats.unique_brands);
            println!("Unique types:        {}", stats.unique_types);
            println!("Unique ingredients:  {}", stats.unique_ingredients);
            println!(
                "Avg per product:     {:.1}",
                stats.avg_ingredients_per_product
            );
            if !stats.top_ingredients.is_empty() {
                println!("Top ingredients:");
                for entry in &stats.top_ingredients {
                    println!("  {:>5}  {}", entry.count, entry.name);
                }
            }
        }
    }

    Ok(())
}
