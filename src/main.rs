use anyhow::Context;
use clap::Parser;
use proxhash::{Config, Point, ProximityCover};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Latitude of the circle center, in [-90, 90]
    #[arg(long, allow_negative_numbers = true)]
    lat: f64,

    /// Longitude of the circle center, in [-180, 180]
    #[arg(long, allow_negative_numbers = true)]
    lon: f64,

    /// Radius in meters
    #[arg(long, default_value_t = 1000.0)]
    radius: f64,

    /// Geohash precision to sample at [default: 7]
    #[arg(long)]
    chars: Option<usize>,

    /// Compress the sampled codes into coarser cells
    #[arg(long)]
    georaptor: bool,

    /// Minimum precision compression may produce [default: 3]
    #[arg(long)]
    min: Option<usize>,

    /// Cutoff precision for compressed output [default: 7]
    #[arg(long)]
    max: Option<usize>,

    /// Base configuration file (JSON, or TOML with the `toml` feature)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the result as a JSON object
    #[arg(long)]
    json: bool,
}

impl Args {
    /// Configuration file settings with command-line flags applied on top.
    fn resolve_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => {
                info!("Loading configuration from {}", path.display());
                Config::from_file(path)?
            }
            None => Config::default(),
        };

        if let Some(chars) = self.chars {
            config.precision = chars;
        }
        if self.georaptor {
            config.compression.enabled = true;
        }
        if let Some(min) = self.min {
            config.compression.min_precision = min;
        }
        if let Some(max) = self.max {
            config.compression.cutoff_precision = max;
        }

        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "proxhash=info,warn".into()),
        )
        .init();

    let args = Args::parse();
    let config = args.resolve_config()?;
    debug!(?config, "Resolved configuration");

    let cover = ProximityCover::from_config(config.clone()).context("invalid configuration")?;
    let center = Point::new(args.lon, args.lat);
    let result = cover
        .query(&center, args.radius)
        .context("failed to cover query circle")?;

    if args.json {
        let mut output = serde_json::json!({
            "lat": args.lat,
            "lon": args.lon,
            "radius": args.radius,
            "precision": config.precision,
            "codes": result.codes,
            "count": result.len(),
        });
        if result.compressed {
            output["reduced"] = result.reduced().into();
        }
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!(
        "{} {} {} {} {} {} {}",
        args.lat,
        args.lon,
        args.radius,
        config.precision,
        config.compression.enabled,
        config.compression.min_precision,
        config.compression.cutoff_precision
    );
    println!("{}", result.codes.join(","));
    println!("total geohash code count: {}", result.len());
    if result.compressed {
        println!("compression reduce codes: {}", result.reduced());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["proxhash", "--lat", "40.0274", "--lon", "116.334255"]);
        assert_eq!(args.radius, 1000.0);

        let config = args.resolve_config().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_flags_override() {
        let args = Args::parse_from([
            "proxhash",
            "--lat",
            "-33.86",
            "--lon",
            "151.2",
            "--chars",
            "8",
            "--georaptor",
            "--min",
            "4",
            "--max",
            "6",
        ]);
        assert_eq!(args.lat, -33.86);

        let config = args.resolve_config().unwrap();
        assert_eq!(config.precision, 8);
        assert!(config.compression.enabled);
        assert_eq!(config.compression.min_precision, 4);
        assert_eq!(config.compression.cutoff_precision, 6);
    }

    #[test]
    fn test_missing_center_rejected() {
        assert!(Args::try_parse_from(["proxhash", "--lat", "40.0"]).is_err());
    }
}
