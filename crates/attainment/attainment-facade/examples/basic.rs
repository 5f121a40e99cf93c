//! Basic example of the attainment workflow
//!
//! Run with: cargo run --example basic -p attainment-facade [path/to/table.csv]
//!
//! Without an argument the bundled test fixture is used. Set `RUST_LOG=debug`
//! to see per-partition and optimizer logs.

use attainment_facade::prelude::*;
use attainment_facade::sex_gap_series;
use std::path::PathBuf;
use tracing_subscriber::prelude::*;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "attainment_core=info".into()),
        )
        .init();

    let path = std::env::args().nth(1).map(PathBuf::from).unwrap_or_else(|| {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/attainment.csv")
    });

    println!("=== Attainment Example ===\n");

    let raw = AttainmentLoader::default().load_path(&path)?;
    let store = AttainmentStore::new(raw);
    let data = store.imputed();
    let years = data.years();
    let (Some(&first), Some(&last)) = (years.first(), years.last()) else {
        println!("{} has no rows", path.display());
        return Ok(());
    };

    println!("Loaded {} records, {}-{}", data.len(), first, last);
    println!(
        "Missing cells: {} raw, {} after forward fill\n",
        store.raw().missing_count(),
        data.missing_count()
    );

    println!("--- Total attainment by sex, {} ---", last);
    for degree in MinDegree::ALL {
        match compare_by_sex(data, last, degree) {
            Ok(cmp) => {
                let [(_, male), (_, female)] = cmp.to_pairs();
                println!(
                    "{:12} male {:>6} female {:>6} gap {:>6}",
                    degree.label(),
                    fmt_percent(male),
                    fmt_percent(female),
                    fmt_percent(cmp.gap())
                );
            }
            Err(e) => println!("{:12} {}", degree.label(), e),
        }
    }

    println!("\n--- Mean Total, {}-{} ---", first, last);
    for (degree, mean) in mean_by_degree(data, None, None, Category::Total) {
        println!("{:12} {:>8}", degree.label(), fmt_percent(mean));
    }

    println!("\n--- Bachelor's gap (male - female) ---");
    for (year, gap) in sex_gap_series(data, MinDegree::Bachelors, ..) {
        println!("{} {:>6}", year, fmt_percent(gap));
    }

    println!("\n--- Forecasts ---");
    let engine = ForecastEngine::new(ForecastConfig::default());
    for outcome in engine.run_all(data) {
        println!("{}", outcome.diagnostic());
        for (year, value) in outcome.to_pairs() {
            println!("  {} {:.2}", year, value);
        }
        if let Some(forecast) = outcome.forecast() {
            for point in forecast.out_of_range() {
                println!("  note: {} leaves [0, 100] ({:.2})", point.year, point.value);
            }
        }
    }

    println!("\n=== Example Complete ===");
    Ok(())
}

fn fmt_percent(value: Option<f64>) -> String {
    value.map_or_else(|| "---".to_string(), |v| format!("{:.1}", v))
}
