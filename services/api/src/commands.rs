use crate::infra::parse_sort;
use chrono::Utc;
use clap::Args;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use woning_ai::config::AppConfig;
use woning_ai::error::AppError;
use woning_ai::workflows::dashboard::{
    normalize_cities, DashboardPage, DashboardService, FilterPatch, JsonFileSnapshot,
    PlaceholderAnalysisGenerator, PropertySummary, SortOption,
};
use woning_ai::workflows::funda::FundaListingImporter;

#[derive(Args, Debug)]
pub(crate) struct DashboardArgs {
    /// JSON snapshot with `properties` and `analyses` arrays
    #[arg(long)]
    pub(crate) snapshot: PathBuf,
    /// Dashboard query string, e.g. "city=Utrecht&minScore=70"
    #[arg(long, default_value = "")]
    pub(crate) query: String,
    /// Page to print (1-based); overrides the query's page
    #[arg(long)]
    pub(crate) page: Option<usize>,
    /// Sort order; overrides the query's sort
    #[arg(long, value_parser = parse_sort)]
    pub(crate) sort: Option<SortOption>,
    /// Restrict to these cities; overrides the query's cities
    #[arg(long = "city")]
    pub(crate) cities: Vec<String>,
    /// Only show starred properties
    #[arg(long)]
    pub(crate) starred: bool,
    /// Print the page as JSON instead of a table
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ImportArgs {
    /// Scraped listing export (one JSON object or an array of objects)
    #[arg(long)]
    pub(crate) listing: PathBuf,
}

pub(crate) fn run_dashboard(args: DashboardArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = DashboardService::new(
        Arc::new(JsonFileSnapshot::new(args.snapshot.clone())),
        Arc::new(PlaceholderAnalysisGenerator),
        config.scoring,
    );

    let mut query = service.codec().parse(&args.query);
    query.filters = query.filters.merge(patch_from_args(&args));
    if let Some(page) = args.page {
        query.page = page.max(1);
    }

    let page = service.dashboard(&query)?;
    if args.json {
        write_json(&page)
    } else {
        render_dashboard(&page);
        Ok(())
    }
}

pub(crate) fn run_import(args: ImportArgs) -> Result<(), AppError> {
    let listings = FundaListingImporter::from_path(&args.listing, Utc::now())?;
    write_json(&listings)
}

fn patch_from_args(args: &DashboardArgs) -> FilterPatch {
    FilterPatch {
        sort_by: args.sort,
        cities: Some(normalize_cities(&args.cities)).filter(|cities| !cities.is_empty()),
        starred_only: args.starred.then_some(true),
        ..FilterPatch::default()
    }
}

fn write_json<T: serde::Serialize>(value: &T) -> Result<(), AppError> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value).map_err(std::io::Error::from)?;
    writeln!(stdout)?;
    Ok(())
}

fn render_dashboard(page: &DashboardPage) {
    println!("{}", page.stats.headline());
    if !page.query.is_empty() {
        println!("Filters: {} ({} actief)", page.query, page.stats.active_filters);
    }
    println!(
        "Sortering: {} | pagina {} van {}",
        page.filters.sort_by.label(),
        page.page,
        page.total_pages
    );

    if page.items.is_empty() {
        println!("\nGeen woningen gevonden.");
        return;
    }

    let offset = (page.page - 1) * page.per_page;
    for (index, summary) in page.items.iter().enumerate() {
        println!("\n{}", summary_line(offset + index + 1, summary));
        if !summary.top_risk_flags.is_empty() {
            let flags: Vec<String> = summary
                .top_risk_flags
                .iter()
                .map(|flag| format!("{} ({})", flag.label, flag.severity.label()))
                .collect();
            println!("   Risico's: {}", flags.join(", "));
        }
        if !summary.dealbreakers.is_empty() {
            println!("   Dealbreakers: {}", summary.dealbreakers.join("; "));
        }
    }
}

fn summary_line(rank: usize, summary: &PropertySummary) -> String {
    let score = if summary.is_analyzed() {
        format!("{:.0} · {}", summary.match_score, summary.match_tier.label())
    } else {
        "nog niet geanalyseerd".to_string()
    };
    format!(
        "{rank:>3}. {}, {} | {} | vraagprijs €{:.0} | investering €{:.0}-€{:.0} | {} ({}%) | {}",
        summary.address,
        summary.city,
        score,
        summary.asking_price,
        summary.total_investment_low,
        summary.total_investment_high,
        summary.budget_status.label(),
        summary.budget_utilization,
        summary.recommendation.label(),
    )
}
