use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use agtech_carbon_tracker::dashboard::{CalculatorView, OverviewMetrics};
use agtech_carbon_tracker::format::{format_currency, format_number, format_percentage, AlertKind};
use agtech_carbon_tracker::market::PriceTicker;
use agtech_carbon_tracker::practice::{CoverCrop, Fertilizer, Livestock, Rotation, Tillage};
use agtech_carbon_tracker::revenue::{forecast, RevenueScenario};
use agtech_carbon_tracker::scoring::target_score;
use agtech_carbon_tracker::{fixtures, supply_chain, ModelConfig, PracticeSelection, TrackerError};

/// Carbon footprint, ROI and revenue estimates for a set of farm practices.
#[derive(Debug, Parser)]
#[command(name = "agtech-carbon", version)]
struct Cli {
    #[arg(long, default_value = "reduced-till")]
    tillage: Tillage,
    #[arg(long, default_value = "single-species")]
    cover: CoverCrop,
    #[arg(long, default_value = "precision")]
    fertilizer: Fertilizer,
    #[arg(long, default_value = "diverse")]
    rotation: Rotation,
    #[arg(long, default_value = "none")]
    livestock: Livestock,
    /// Share of recommended practices adopted, 0.0-1.0.
    #[arg(long, default_value_t = 0.6)]
    adoption: f64,
    /// JSON file overriding model constants.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Print the calculator result as JSON instead of text.
    #[arg(long)]
    json: bool,
    /// Write the supply-chain emissions CSV to this path.
    #[arg(long)]
    export_csv: Option<PathBuf>,
    /// Number of simulated market ticks to print.
    #[arg(long, default_value_t = 0)]
    ticks: u32,
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u64).range(1..))]
    tick_secs: u64,
}

impl Cli {
    /// Revenue scenario for `--adoption`, checked before any output is produced.
    fn revenue_scenario(&self) -> Result<RevenueScenario, TrackerError> {
        RevenueScenario::new(&fixtures::revenue_projection(), self.adoption)
    }
}

fn env_bool(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .map(|v| matches!(v.as_str(), "1" | "true" | "TRUE" | "yes"))
        .unwrap_or(default)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("AGCARBON_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);
    if env_bool("AGCARBON_LOG_JSON", false) {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let scenario = cli.revenue_scenario()?;

    let cfg = match &cli.config {
        Some(path) => ModelConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ModelConfig::default(),
    };

    let selection = PracticeSelection {
        tillage: cli.tillage,
        cover: cli.cover,
        fertilizer: cli.fertilizer,
        rotation: cli.rotation,
        livestock: cli.livestock,
    };
    info!(?selection, "running calculator");

    let view = CalculatorView::build(&cfg, selection, &fixtures::carbon_footprint());
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print_summary(&cfg, &view, &scenario);
    }

    if let Some(path) = &cli.export_csv {
        fs::write(path, supply_chain::to_csv(&fixtures::supply_chain_emissions()))
            .with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), "supply chain csv written");
    }

    if cli.ticks > 0 {
        let ticker = PriceTicker::spawn(
            fixtures::market().carbon_credits_price,
            Duration::from_secs(cli.tick_secs),
        );
        let mut rx = ticker.subscribe();
        for _ in 0..cli.ticks {
            rx.changed().await?;
            let price = *rx.borrow_and_update();
            println!("spot,{price:.2}");
        }
        ticker.stop();
    }

    Ok(())
}

fn print_summary(cfg: &ModelConfig, view: &CalculatorView, scenario: &RevenueScenario) {
    let farm = fixtures::farm();
    let overview =
        OverviewMetrics::from_credits(&fixtures::carbon_credits(), &fixtures::sustainable_practices());
    println!("{} ({}, {} acres)", farm.name, farm.location, farm.acres);
    println!(
        "credits: {} tons, revenue {}, practices {}/{}",
        format_number(overview.total_credits, 0),
        format_currency(overview.total_revenue),
        overview.active_practices,
        overview.tracked_practices
    );

    let fp = &view.footprint;
    println!(
        "footprint: emissions {} t, sequestration {} t, net {} t, reduction {}",
        format_number(fp.total_emissions, 2),
        format_number(fp.sequestration, 2),
        format_number(fp.net_footprint, 2),
        format_percentage(fp.reduction_percentage, 1)
    );
    println!(
        "carbon reduction vs current: {} t",
        format_number(view.comparison.carbon_reduction, 2)
    );
    println!(
        "roi: {}%, payback {} yrs, revenue increase {}",
        format_number(view.roi.roi * 100.0, 0),
        view.roi.payback_period,
        format_currency(view.roi.potential_increase)
    );
    for p in &view.recommendations {
        if let Some(r) = p.impact {
            println!(
                "recommend,{},{}%,{} t",
                p.name,
                format_number(r.roi * 100.0, 0),
                format_number(r.carbon_impact.abs(), 2)
            );
        }
    }

    println!(
        "revenue at {} adoption: {} (roi {}%, +{})",
        format_percentage(scenario.adoption * 100.0, 0),
        format_currency(scenario.projected_revenue),
        format_number(scenario.projected_roi * 100.0, 0),
        format_currency(scenario.delta)
    );
    let market = fixtures::market();
    for point in forecast(&fixtures::price_history(), market.carbon_credits_price, 4)
        .iter()
        .filter(|p| p.date.starts_with('+'))
    {
        println!("forecast,{},{:.2}", point.date, point.price);
    }

    let score = fixtures::regenerative_score();
    let target = target_score(&score, &cfg.scoring);
    println!(
        "regenerative target: soil {}, biodiversity {}, water {}, sequestration {}",
        target.soil_health, target.biodiversity, target.water_conservation, target.carbon_sequestration
    );

    for alert in fixtures::weather().alerts {
        println!("alert,{:?},{}", AlertKind::classify(&alert), alert);
    }
}
