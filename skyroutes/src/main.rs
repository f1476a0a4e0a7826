use clap::Parser;
use skyroutes::app::{RouteApp, RouteAppError};
use skyroutes_core::model::airport::AirportId;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "skyroutes")]
#[command(about = "great-circle shortest paths between selected airports")]
struct Cli {
    /// path to the airports CSV file (id,name,city,iata,icao,lat,lng)
    #[arg(long)]
    airports: PathBuf,
    /// airport names to select, in order; repeatable. case-insensitive
    /// exact match on the full name
    #[arg(long = "select")]
    selections: Vec<String>,
    /// route source airport id; defaults to the first selection
    #[arg(long)]
    from: Option<u64>,
    /// route destination airport id; defaults to the second distinct
    /// selection
    #[arg(long)]
    to: Option<u64>,
    /// print only the direct point-to-point distance between the
    /// endpoints, skipping the path search
    #[arg(long)]
    distance_only: bool,
}

fn main() -> Result<(), RouteAppError> {
    env_logger::init();
    let cli = Cli::parse();

    let mut app = RouteApp::from_csv(&cli.airports)?;
    for name in cli.selections.iter() {
        app.select_by_name(name)?;
    }

    let (source, destination) = match (cli.from, cli.to) {
        (Some(from), Some(to)) => (AirportId(from), AirportId(to)),
        _ => app.default_endpoints()?,
    };

    if cli.distance_only {
        let distance = app.distance_between(&source, &destination)?;
        let output = serde_json::json!({
            "source": source,
            "destination": destination,
            "distance_km": distance,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let result = app.shortest_path(&source, &destination)?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
