use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use facemesh_regions_core::regions::domain::feature_mask::FeatureMask;
use facemesh_regions_core::regions::domain::landmark_region::LandmarkRegion;
use facemesh_regions_core::regions::domain::point_selector;
use facemesh_regions_core::regions::domain::region_registry;
use facemesh_regions_core::regions::domain::region_shape::RegionShape;
use facemesh_regions_core::shared::topology::FaceMeshTopology;

/// Inspect the face-mesh landmark region tables.
#[derive(Parser)]
#[command(name = "facemesh-regions")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every region with its shape and point count.
    List {
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Print the ordered landmark indices of one region.
    Show {
        /// Region name, e.g. face_oval or LeftEye.
        region: String,

        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Report which regions a landmark array of the given size can address.
    Check {
        /// Number of points the detector produces.
        #[arg(long)]
        points: usize,
    },
    /// Print the eye/eyebrow/mouth mask used to exclude features from smoothing.
    Mask {
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct RegionSummary {
    region: LandmarkRegion,
    shape: RegionShape,
    points: usize,
    min_topology: FaceMeshTopology,
}

#[derive(Serialize)]
struct RegionDetail {
    region: LandmarkRegion,
    shape: RegionShape,
    indices: &'static [usize],
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let output = match cli.command {
        Command::List { format } => render_list(format)?,
        Command::Show { region, format } => render_show(&region, format)?,
        Command::Check { points } => render_check(points),
        Command::Mask { format } => render_mask(format)?,
    };
    println!("{output}");
    Ok(())
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if let Command::Check { points } = &cli.command {
        if *points == 0 {
            return Err("Point count must be positive".into());
        }
    }
    Ok(())
}

fn render_list(format: OutputFormat) -> Result<String, Box<dyn std::error::Error>> {
    let summaries: Vec<RegionSummary> = region_registry::regions()
        .map(|(region, indices)| RegionSummary {
            region,
            shape: region.shape(),
            points: indices.len(),
            min_topology: region.min_topology(),
        })
        .collect();

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&summaries)?),
        OutputFormat::Text => Ok(summaries
            .iter()
            .map(|s| {
                format!(
                    "{:<14} {:<15} {:>3} points  ({})",
                    s.region.name(),
                    s.shape,
                    s.points,
                    s.min_topology
                )
            })
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

fn render_show(name: &str, format: OutputFormat) -> Result<String, Box<dyn std::error::Error>> {
    let region: LandmarkRegion = name.parse()?;
    let detail = RegionDetail {
        region,
        shape: region.shape(),
        indices: region_registry::indices(region),
    };

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&detail)?),
        OutputFormat::Text => Ok(format!(
            "{} ({}): {}",
            detail.region,
            detail.shape,
            join_indices(detail.indices)
        )),
    }
}

fn render_check(points: usize) -> String {
    let mut lines = Vec::new();
    match FaceMeshTopology::from_point_count(points) {
        Some(topology) => lines.push(format!("{points} points: {topology}")),
        None => {
            log::info!("{points} points does not match a known face-mesh topology");
            lines.push(format!("{points} points: unrecognized topology"));
        }
    }

    let mut missing = 0;
    for region in LandmarkRegion::ALL {
        if point_selector::covers(region, points) {
            lines.push(format!("  ok       {region}"));
        } else {
            missing += 1;
            let pct = point_selector::coverage(region, points) * 100.0;
            lines.push(format!("  missing  {region} ({pct:.0}% addressable)"));
        }
    }

    let required = region_registry::required_landmark_count();
    if missing > 0 {
        lines.push(format!(
            "{missing} region(s) unavailable; all regions need at least {required} points"
        ));
    }
    lines.join("\n")
}

fn render_mask(format: OutputFormat) -> Result<String, Box<dyn std::error::Error>> {
    let mask = FeatureMask::smoothing_exclusion();
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&mask)?),
        OutputFormat::Text => {
            let mut lines: Vec<String> = mask
                .segments()
                .iter()
                .map(|s| format!("{}: {}", s.name, join_indices(s.indices)))
                .collect();
            lines.push(format!("total: {} points", mask.point_count()));
            Ok(lines.join("\n"))
        }
    }
}

fn join_indices(indices: &[usize]) -> String {
    indices
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_show() {
        let cli = Cli::try_parse_from(["facemesh-regions", "show", "left-eye", "--format", "json"])
            .unwrap();
        match cli.command {
            Command::Show { region, format } => {
                assert_eq!(region, "left-eye");
                assert_eq!(format, OutputFormat::Json);
            }
            _ => panic!("expected show"),
        }
    }

    #[test]
    fn test_validate_rejects_zero_points() {
        let cli = Cli::try_parse_from(["facemesh-regions", "check", "--points", "0"]).unwrap();
        assert!(validate(&cli).is_err());
    }

    #[test]
    fn test_render_show_text() {
        let out = render_show("MouthCorners", OutputFormat::Text).unwrap();
        assert_eq!(out, "mouth_corners (point_cluster): 61, 291");
    }

    #[test]
    fn test_render_show_json() {
        let out = render_show("forehead", OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["region"], "forehead");
        assert_eq!(value["shape"], "open_polyline");
        assert_eq!(value["indices"], serde_json::json!([10, 338, 297, 332, 284]));
    }

    #[test]
    fn test_render_show_unknown_region() {
        let err = render_show("chin", OutputFormat::Text).unwrap_err();
        assert_eq!(err.to_string(), "unknown landmark region: chin");
    }

    #[test]
    fn test_render_list_has_every_region() {
        let out = render_list(OutputFormat::Text).unwrap();
        assert_eq!(out.lines().count(), LandmarkRegion::ALL.len());
        assert!(out.contains("face_oval"));
    }

    #[test]
    fn test_render_check_base_mesh_flags_irises() {
        let out = render_check(468);
        assert!(out.starts_with("468 points: 468-point face mesh"));
        assert!(out.contains("missing  left_iris (0% addressable)"));
        assert!(out.contains("missing  right_iris (0% addressable)"));
        assert!(out.contains("at least 478 points"));
    }

    #[test]
    fn test_render_check_full_mesh() {
        let out = render_check(478);
        assert!(!out.contains("missing"));
    }

    #[test]
    fn test_render_mask_total() {
        let out = render_mask(OutputFormat::Text).unwrap();
        assert!(out.ends_with("total: 92 points"));
    }
}
