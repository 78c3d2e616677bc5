use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use placemap::config::FileConfig;
use placemap::{
    Category, FeatureCollection, FocusTarget, GeoError, MapController, OrientedRectangle, Place,
    PlaceCatalog,
};

/// Query the nearby-places catalog and compute map geometry for the property
///
/// Examples:
///   # List all nearby schools
///   placemap places --category school
///
///   # Panning limits over places and site features, as JSON
///   placemap --json bounds --geojson data/yume-riverpark.geojson
///
///   # Image corners for the property polygon
///   placemap overlay --geojson data/yume-riverpark.geojson
#[derive(Parser, Debug)]
#[command(name = "placemap")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches placemap.toml if not provided)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List nearby places grouped by category
    Places {
        /// hospital, school, church or mall
        #[arg(short = 'c', long)]
        category: Option<Category>,
    },
    /// Compute the region the map may pan within
    Bounds {
        #[arg(short = 'g', long)]
        geojson: Option<PathBuf>,

        /// Padding in degrees around the bounded region
        #[arg(short = 'p', long)]
        padding: Option<f64>,
    },
    /// Compute image corners aligned to a polygon feature
    Overlay {
        #[arg(short = 'g', long)]
        geojson: Option<PathBuf>,

        /// Polygon feature name (defaults to the property)
        #[arg(short = 'f', long)]
        feature: Option<String>,
    },
    /// Show where the map would move when a place or feature is selected
    Focus {
        name: String,

        #[arg(short = 'g', long)]
        geojson: Option<PathBuf>,
    },
}

#[derive(Serialize)]
struct GroupOutput<'a> {
    category: Category,
    label: &'static str,
    places: Vec<&'a Place>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let file_config = match args.config {
        Some(ref path) => {
            if !path.exists() {
                bail!("Config file not found: {:?}", path);
            }
            Some(FileConfig::from_path(path)?)
        }
        None => FileConfig::load(),
    }
    .unwrap_or_default();

    match args.command {
        Command::Places { category } => {
            let mut controller = MapController::new(PlaceCatalog::builtin(), Default::default());
            controller.select_category(category);
            print_places(&controller, args.json)
        }
        Command::Bounds { geojson, padding } => {
            let features = load_features(geojson.or(file_config.geojson), false)?;
            let controller = MapController::new(PlaceCatalog::builtin(), features);
            let padding = padding.unwrap_or(file_config.padding);

            let region = controller
                .clamp_region(padding)
                .context("Failed to compute clamp region")?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&region)?);
            } else {
                println!(
                    "South-west: ({:.7}, {:.7})",
                    region.south_west.x, region.south_west.y
                );
                println!(
                    "North-east: ({:.7}, {:.7})",
                    region.north_east.x, region.north_east.y
                );
            }
            Ok(())
        }
        Command::Overlay { geojson, feature } => {
            let features = load_features(geojson.or(file_config.geojson), true)?;
            let controller = MapController::new(PlaceCatalog::builtin(), features);
            let name = feature.unwrap_or(file_config.overlay);

            match controller.overlay_for(&name) {
                Ok(rect) => print_overlay(&name, &rect, args.json),
                Err(e @ GeoError::DegenerateGeometry { .. }) => {
                    tracing::warn!(feature = %name, error = %e, "skipping overlay");
                    Ok(())
                }
                Err(e) => Err(e).with_context(|| format!("Failed to align overlay to {:?}", name)),
            }
        }
        Command::Focus { name, geojson } => {
            let features = load_features(geojson.or(file_config.geojson), false)?;
            let controller = MapController::new(PlaceCatalog::builtin(), features);

            let target = controller
                .focus_for(&name)
                .with_context(|| format!("Failed to focus {:?}", name))?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&target)?);
            } else {
                match target {
                    FocusTarget::Center { center } => {
                        println!("Fly to ({:.7}, {:.7})", center.x, center.y)
                    }
                    FocusTarget::Fit { bounds } => println!(
                        "Fit ({:.7}, {:.7}) - ({:.7}, {:.7})",
                        bounds.min().x,
                        bounds.min().y,
                        bounds.max().x,
                        bounds.max().y
                    ),
                }
            }
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_features(path: Option<PathBuf>, required: bool) -> Result<FeatureCollection> {
    match path {
        Some(path) => FeatureCollection::from_path(&path)
            .with_context(|| format!("Failed to load features from {:?}", path)),
        None if required => bail!("No GeoJSON given: pass --geojson or set `geojson` in the config"),
        None => {
            tracing::debug!("no GeoJSON given, using places only");
            Ok(FeatureCollection::default())
        }
    }
}

fn print_places(controller: &MapController, json: bool) -> Result<()> {
    let groups = controller.grouped_places();

    if json {
        let output: Vec<GroupOutput> = groups
            .into_iter()
            .map(|(category, places)| GroupOutput {
                category,
                label: category.label(),
                places,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for (category, places) in groups {
        println!("{} ({})", category.label(), places.len());
        for place in places {
            println!(
                "  {:<50} walk {:>7}  car {:>7}",
                place.name, place.walk_distance, place.car_distance
            );
        }
        println!();
    }
    Ok(())
}

fn print_overlay(name: &str, rect: &OrientedRectangle, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(rect)?);
        return Ok(());
    }

    println!("Overlay for {}", name);
    println!("  Center:   ({:.7}, {:.7})", rect.center.x, rect.center.y);
    println!(
        "  Rotation: {:.4} deg ({:.6} rad)",
        rect.rotation_degrees(),
        rect.rotation
    );
    let labels = ["Top-left", "Top-right", "Bottom-right", "Bottom-left"];
    for (label, corner) in labels.iter().zip(rect.corners.iter()) {
        println!("  {:<13} ({:.7}, {:.7})", format!("{}:", label), corner.x, corner.y);
    }
    Ok(())
}
