//! Command line interface of geodense.

use clap::{Parser, Subcommand};
use geodense::error::GeodenseError;
use geodense::io::formats::{format_table, unsupported_formats, SUPPORTED_FILE_FORMATS};
use geodense::io::{check_density_file, densify_file, FileOptions};
use geodense::{result_message, DenseOptions, DEFAULT_MAX_SEGMENT_LENGTH};
use geodense_types::geo::CrsIdentifier;
use std::path::PathBuf;
use std::process::ExitCode;

/// Check density of, and densify geometries using the geodesic (ellipsoidal great-circle)
/// calculation for accurate CRS transformations.
#[derive(Parser)]
#[command(name = "geodense", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Densify (multi)polygon and (multi)linestring geometries along the geodesic
    Densify {
        input_file: PathBuf,
        output_file: PathBuf,
        /// Max allowed segment length in meters
        #[arg(
            short,
            long,
            default_value_t = DEFAULT_MAX_SEGMENT_LENGTH,
            allow_negative_numbers = true
        )]
        max_segment_length: f64,
        /// Layer to use in multi-layer geospatial input files
        #[arg(short, long)]
        layer: Option<String>,
        /// Densify using linear interpolation in the source projection, not applicable when the
        /// source crs is geographic
        #[arg(short = 'p', long)]
        in_projection: bool,
        /// Override the source CRS of the input file, e.g. EPSG:25831
        #[arg(short, long)]
        src_crs: Option<CrsIdentifier>,
        /// Replace the output file if it exists
        #[arg(long)]
        overwrite: bool,
    },
    /// Check density of (multi)polygon and (multi)linestring geometries
    CheckDensity {
        input_file: PathBuf,
        /// Max allowed segment length in meters
        #[arg(
            short,
            long,
            default_value_t = DEFAULT_MAX_SEGMENT_LENGTH,
            allow_negative_numbers = true
        )]
        max_segment_length: f64,
        /// Layer to use in multi-layer geospatial input files
        #[arg(short, long)]
        layer: Option<String>,
        /// Override the source CRS of the input file, e.g. EPSG:25831
        #[arg(short, long)]
        src_crs: Option<CrsIdentifier>,
    },
    /// List supported file formats
    ListFormats,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    exit_code(run(cli.command))
}

fn exit_code(result: Result<ExitCode, GeodenseError>) -> ExitCode {
    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("ERROR: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<ExitCode, GeodenseError> {
    match command {
        Command::Densify {
            input_file,
            output_file,
            max_segment_length,
            layer,
            in_projection,
            src_crs,
            overwrite,
        } => {
            let options = FileOptions {
                layer,
                src_crs,
                overwrite,
                dense: DenseOptions::default()
                    .with_max_segment_length(max_segment_length)
                    .with_in_projection(in_projection),
            };
            densify_file(&input_file, &output_file, &options)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::CheckDensity {
            input_file,
            max_segment_length,
            layer,
            src_crs,
        } => {
            let options = FileOptions {
                layer,
                src_crs,
                dense: DenseOptions::default().with_max_segment_length(max_segment_length),
                ..Default::default()
            };
            let violations = check_density_file(&input_file, &options)?;
            println!(
                "{}",
                result_message(&input_file, &violations, max_segment_length.abs())
            );

            Ok(if violations.is_empty() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::ListFormats => {
            let unsupported = unsupported_formats(SUPPORTED_FILE_FORMATS);
            if !unsupported.is_empty() {
                eprintln!(
                    "ERROR: The following format(s) are not supported by your installation: {}",
                    unsupported.join(", ")
                );
                return Ok(ExitCode::FAILURE);
            }

            println!("{}", format_table(SUPPORTED_FILE_FORMATS));
            Ok(ExitCode::SUCCESS)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use clap::CommandFactory;
    use std::fs;
    use std::path::Path;

    struct TempDir(PathBuf);

    impl TempDir {
        fn new(name: &str) -> Self {
            let path = std::env::temp_dir()
                .join(format!("geodense-cli-{}-{name}", std::process::id()));
            let _ = fs::remove_dir_all(&path);
            fs::create_dir_all(&path).expect("temp dir is writable");
            Self(path)
        }

        fn path(&self) -> &Path {
            &self.0
        }

        fn write(&self, name: &str, content: &str) -> PathBuf {
            let path = self.0.join(name);
            fs::write(&path, content).expect("temp dir is writable");
            path
        }
    }

    impl Drop for TempDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    const LINE: &str = r#"{
        "type": "FeatureCollection",
        "crs": {"type": "name", "properties": {"name": "urn:ogc:def:crs:EPSG::4258"}},
        "features": [
            {"type": "Feature", "properties": {}, "geometry": {"type": "LineString", "coordinates": [[5.0, 52.0], [5.0, 52.01]]}}
        ]
    }"#;

    fn run_args(args: &[&str]) -> Result<ExitCode, GeodenseError> {
        let cli = Cli::try_parse_from(args.iter().copied()).expect("valid args");
        run(cli.command)
    }

    #[test]
    fn cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_densify_args() {
        let cli = Cli::try_parse_from([
            "geodense",
            "densify",
            "in.json",
            "out.json",
            "-m",
            "-500",
            "-p",
            "-s",
            "EPSG:25831",
            "--overwrite",
        ])
        .expect("valid args");

        let Command::Densify {
            max_segment_length,
            in_projection,
            src_crs,
            overwrite,
            layer,
            ..
        } = cli.command
        else {
            panic!("expected densify command");
        };
        assert_eq!(max_segment_length, -500.0);
        assert!(in_projection);
        assert_eq!(src_crs, Some(CrsIdentifier::epsg(25831)));
        assert!(overwrite);
        assert_eq!(layer, None);
    }

    #[test]
    fn rejects_invalid_crs() {
        let args = ["geodense", "check-density", "in.json", "-s", "28992"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn check_density_exit_codes() {
        let dir = TempDir::new("check_density_exit_codes");
        let input = dir.write("line.geojson", LINE);
        let input = input.to_str().expect("utf-8 path");

        assert_eq!(
            run_args(&["geodense", "check-density", input, "-m", "2000"]).expect("checkable"),
            ExitCode::SUCCESS
        );
        assert_eq!(
            run_args(&["geodense", "check-density", input]).expect("checkable"),
            ExitCode::FAILURE
        );
    }

    #[test]
    fn densify_then_check() {
        let dir = TempDir::new("densify_then_check");
        let input = dir.write("line.geojson", LINE);
        let output = dir.path().join("dense.geojson");
        let (input, output) = (
            input.to_str().expect("utf-8 path"),
            output.to_str().expect("utf-8 path"),
        );

        assert_eq!(
            run_args(&["geodense", "densify", input, output]).expect("densifiable"),
            ExitCode::SUCCESS
        );
        assert_eq!(
            run_args(&["geodense", "check-density", output]).expect("checkable"),
            ExitCode::SUCCESS
        );
    }

    #[test]
    fn errors_exit_with_failure() {
        let dir = TempDir::new("errors_exit_with_failure");
        let input = dir.write("line.geojson", LINE);
        let output = dir.path().join("dense.geojson");
        let (input, output) = (
            input.to_str().expect("utf-8 path"),
            output.to_str().expect("utf-8 path"),
        );

        let result = run_args(&["geodense", "densify", input, output, "--in-projection"]);
        assert_matches!(result, Err(GeodenseError::InProjectionGeographic { .. }));
        assert_eq!(exit_code(result), ExitCode::FAILURE);
        assert!(!Path::new(output).exists());
    }

    #[test]
    fn list_formats() {
        assert_eq!(
            run_args(&["geodense", "list-formats"]).expect("listable"),
            ExitCode::SUCCESS
        );
    }
}
