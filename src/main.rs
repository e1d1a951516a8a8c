use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use chrono::{Duration, Utc};
use clap::{Args, Parser, Subcommand};
use metrics_exporter_prometheus::PrometheusHandle;
use petverse_core::config::AppConfig;
use petverse_core::error::AppError;
use petverse_core::marketplace::catalog::{
    apply, catalog_router, format_price, import_listings_from_path, CatalogItem, FilterCriteria,
    PriceRange, SortKey,
};
use petverse_core::marketplace::review::{
    review_router, ApplicantType, Application, ApplicationId, ApplicationStatus,
    InMemoryApplicationRepository, ReviewService,
};
use petverse_core::telemetry;
use serde_json::json;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "PetVerse Core",
    about = "Run the PetVerse marketplace core service or demo its catalog search",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Catalog utilities
    Catalog {
        #[command(subcommand)]
        command: CatalogCommand,
    },
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
    /// Listing sheet (CSV) to seed the catalog with
    #[arg(long)]
    listings: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum CatalogCommand {
    /// Filter and sort a listing sheet from the command line
    Search(CatalogSearchArgs),
}

#[derive(Args, Debug)]
struct CatalogSearchArgs {
    /// Listing sheet (CSV) to search
    #[arg(long)]
    listings: PathBuf,
    /// Category filter; repeat for several categories
    #[arg(long = "category")]
    categories: Vec<String>,
    /// Minimum price
    #[arg(long)]
    min_price: Option<f64>,
    /// Maximum price
    #[arg(long)]
    max_price: Option<f64>,
    /// Rating threshold checkbox; repeat for several
    #[arg(long = "rating")]
    ratings: Vec<f32>,
    /// Tag filter; repeat for several tags
    #[arg(long = "tag")]
    tags: Vec<String>,
    /// Breed filter; repeat for several
    #[arg(long = "breed")]
    breeds: Vec<String>,
    /// Age group filter (puppy, adult, senior); repeat for several
    #[arg(long = "age")]
    ages: Vec<String>,
    /// Sort order: default, price-ascending, price-descending, rating-descending
    #[arg(long, default_value = "default", value_parser = parse_sort)]
    sort: SortKey,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Catalog {
            command: CatalogCommand::Search(args),
        } => run_catalog_search(args),
    }
}

fn parse_sort(raw: &str) -> Result<SortKey, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "default" => Ok(SortKey::Default),
        "price-ascending" => Ok(SortKey::PriceAscending),
        "price-descending" => Ok(SortKey::PriceDescending),
        "rating-descending" => Ok(SortKey::RatingDescending),
        other => Err(format!("unknown sort order '{other}'")),
    }
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let catalog = match args.listings.take() {
        Some(path) => {
            let listings = import_listings_from_path(&path)?;
            info!(count = listings.len(), path = %path.display(), "catalog seeded from listing sheet");
            listings
        }
        None => Vec::new(),
    };

    let repository = Arc::new(InMemoryApplicationRepository::seeded(sample_applications()));
    let review_service = Arc::new(ReviewService::new(repository));

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
    };

    let app = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .with_state(state)
        .merge(catalog_router(Arc::new(catalog)))
        .merge(review_router(review_service, config.review.page_size))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "petverse marketplace core ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_catalog_search(args: CatalogSearchArgs) -> Result<(), AppError> {
    let CatalogSearchArgs {
        listings,
        categories,
        min_price,
        max_price,
        ratings,
        tags,
        breeds,
        ages,
        sort,
    } = args;

    let catalog = import_listings_from_path(&listings)?;

    let price_range = if min_price.is_some() || max_price.is_some() {
        Some(PriceRange {
            min: min_price.unwrap_or(0.0),
            max: max_price,
        })
    } else {
        None
    };

    let mut tag_groups = BTreeMap::new();
    if !tags.is_empty() {
        tag_groups.insert("tags".to_string(), tags.into_iter().collect());
    }

    let criteria = FilterCriteria {
        categories: categories.into_iter().collect(),
        price_range,
        rating_thresholds: ratings,
        tag_groups,
        breeds: breeds.into_iter().collect(),
        age_groups: ages.into_iter().collect(),
    };

    let results = apply(&catalog, &criteria, sort);
    render_search_results(&catalog, &results);
    Ok(())
}

fn render_search_results(catalog: &[CatalogItem], results: &[CatalogItem]) {
    println!("Catalog search");
    println!("Matched {} of {} listings", results.len(), catalog.len());

    if results.is_empty() {
        println!("\nNo matches");
        return;
    }

    println!();
    for item in results {
        let price = match item.price {
            Some(amount) => format!("₹{}", format_price(amount)),
            None => "price on consultation".to_string(),
        };
        let breed_note = item
            .breed
            .as_deref()
            .map(|breed| format!(" | {breed}"))
            .unwrap_or_default();
        println!(
            "- {} | {} | {} | {:.1}★{}",
            item.id, item.name, price, item.rating, breed_note
        );
    }
}

/// Demo applications matching the sample set the admin console ships with.
fn sample_applications() -> Vec<Application> {
    let base = Utc::now() - Duration::days(30);
    let mut applications = Vec::new();

    let entries: [(&str, &str, ApplicantType, Option<&str>, Option<&str>, i64); 4] = [
        (
            "app-001",
            "Asha Verma",
            ApplicantType::Seller,
            Some("Paws & Claws Supplies"),
            None,
            2,
        ),
        (
            "app-002",
            "Rohan Iyer",
            ApplicantType::Seller,
            Some("Happy Tails Kennel"),
            None,
            9,
        ),
        (
            "app-003",
            "Meera Nair",
            ApplicantType::ServiceProvider,
            None,
            Some("Veterinary Doctor"),
            14,
        ),
        (
            "app-004",
            "Kabir Shah",
            ApplicantType::ServiceProvider,
            None,
            Some("Dog Trainer"),
            21,
        ),
    ];

    for (id, full_name, applicant_type, business_name, service_type, day_offset) in entries {
        applications.push(Application {
            id: ApplicationId(id.to_string()),
            full_name: full_name.to_string(),
            email: format!("{id}@petverse.example"),
            phone: "+91 98765 43210".to_string(),
            applicant_type,
            business_name: business_name.map(str::to_string),
            service_type: service_type.map(str::to_string),
            license_url: format!("https://cdn.petverse.example/licenses/{id}.pdf"),
            date_applied: base + Duration::days(day_offset),
            status: ApplicationStatus::Pending,
            date_reviewed: None,
        });
    }

    applications
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
