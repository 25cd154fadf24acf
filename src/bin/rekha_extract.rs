//! Extract line segments from a recorded scan.
//!
//! Usage:
//!   rekha-extract --scan scan.yaml
//!   rekha-extract --scan scan.yaml --config configs/default.yaml --format yaml
//!   rekha-extract --scan scan.yaml --angles cw-degrees --sector-width 10 --half-fov 50
//!
//! The scan file is a serialized `PolarScan`:
//!
//! ```yaml
//! samples:
//!   - { angle: 0.0, distance: 1.25 }
//!   - { angle: 0.0175, distance: 1.26 }
//! ```
//!
//! Enable per-scan diagnostics with `RUST_LOG=debug`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use serde::Serialize;

use rekha::core::{
    AngleConvention, Point2D, PolarScan, RangeFilterConfig, ScanConverter, Sector, SectorConfig,
    nearest_per_sector,
};
use rekha::extraction::{LineExtractor, SeededRegionGrowingExtractor};
use rekha::{ExtractionParameters, LineSegment};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Yaml,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Angles {
    /// Radians from forward (X), counter-clockwise
    CcwRadians,
    /// Degrees from forward (Y), clockwise
    CwDegrees,
}

impl From<Angles> for AngleConvention {
    fn from(angles: Angles) -> Self {
        match angles {
            Angles::CcwRadians => AngleConvention::CounterClockwiseRadians,
            Angles::CwDegrees => AngleConvention::ClockwiseDegrees,
        }
    }
}

/// Seeded-region-growing line extraction
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Scan file (YAML)
    #[arg(short, long)]
    scan: PathBuf,

    /// Extraction parameters (YAML); defaults are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Minimum valid range
    #[arg(long, default_value = "0.0")]
    min_range: f32,

    /// Maximum valid range
    #[arg(long, default_value = "12.0")]
    max_range: f32,

    /// Angle convention of the scan samples
    #[arg(long, value_enum, default_value = "ccw-radians")]
    angles: Angles,

    /// Also report the nearest obstacle per sector of this width (degrees)
    #[arg(long)]
    sector_width: Option<f32>,

    /// Limit the sector report to this many degrees either side of forward
    #[arg(long, requires = "sector_width")]
    half_fov: Option<f32>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Serialize)]
struct SegmentReport {
    start: Point2D,
    end: Point2D,
    length: f32,
    heading: f32,
    point_count: usize,
    source_indices: Vec<usize>,
}

#[derive(Serialize)]
struct Report {
    segments: Vec<SegmentReport>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    sectors: Vec<Sector>,
}

impl From<&LineSegment> for SegmentReport {
    fn from(segment: &LineSegment) -> Self {
        Self {
            start: segment.start(),
            end: segment.end(),
            length: segment.length(),
            heading: segment.model().angle(),
            point_count: segment.len(),
            source_indices: segment.source_indices().to_vec(),
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> rekha::Result<()> {
    let params = match &args.config {
        Some(path) => ExtractionParameters::from_yaml_file(path)?,
        None => ExtractionParameters::default(),
    };

    let scan: PolarScan = serde_yaml::from_str(&std::fs::read_to_string(&args.scan)?)?;
    let filter = RangeFilterConfig {
        min_range: args.min_range,
        max_range: args.max_range,
    };
    let convention = AngleConvention::from(args.angles);
    let points = ScanConverter::to_points_with(&scan, &filter, convention);
    log::info!(
        "Loaded {} samples, {} valid points from {}",
        scan.len(),
        points.len(),
        args.scan.display()
    );

    let extractor = SeededRegionGrowingExtractor::new(params);
    let segments = extractor.extract(&points);
    let reports: Vec<SegmentReport> = segments.iter().map(SegmentReport::from).collect();

    let sectors: Vec<Sector> = match args.sector_width {
        Some(width) => {
            let mut config = SectorConfig::new(width.to_radians());
            if let Some(half) = args.half_fov {
                config = config.with_half_field_of_view(half.to_radians());
            }
            nearest_per_sector(&scan, &filter, convention, &config)
        }
        None => Vec::new(),
    };

    match args.format {
        OutputFormat::Text => {
            println!("{} segments", reports.len());
            for (i, r) in reports.iter().enumerate() {
                println!(
                    "  [{}] ({:.3}, {:.3}) -> ({:.3}, {:.3})  length={:.3}  heading={:.1}°  points={}",
                    i,
                    r.start.x,
                    r.start.y,
                    r.end.x,
                    r.end.y,
                    r.length,
                    r.heading.to_degrees(),
                    r.point_count
                );
            }
            for sector in &sectors {
                if let Some(obstacle) = sector.nearest {
                    println!(
                        "  sector {:>5.1}°: {:.3} at ({:.3}, {:.3})",
                        sector.center.to_degrees(),
                        obstacle.distance,
                        obstacle.point.x,
                        obstacle.point.y
                    );
                }
            }
        }
        OutputFormat::Yaml => {
            let report = Report {
                segments: reports,
                sectors,
            };
            print!("{}", serde_yaml::to_string(&report)?);
        }
    }

    Ok(())
}
