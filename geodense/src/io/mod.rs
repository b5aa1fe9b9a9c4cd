//! Reading, processing and writing of geospatial files.

use geodense_types::geo::{Crs, CrsIdentifier, CrsRegistry};
use geojson::GeoJson;
use std::fs;
use std::path::Path;

use crate::check::SegmentViolation;
use crate::config::{DenseConfig, DenseOptions};
use crate::error::GeodenseError;

mod crs_sniff;
pub use crs_sniff::sniff_crs;

mod document;
pub use document::{check_geojson, crs_member, densify_geojson, layer_name, set_crs_member};

pub mod formats;

/// Options of the file level operations.
#[derive(Debug, Clone, Default)]
pub struct FileOptions {
    /// Layer to process. May be omitted for single layer files.
    pub layer: Option<String>,
    /// Source CRS, overriding the one declared in the file.
    pub src_crs: Option<CrsIdentifier>,
    /// Replace the output file if it exists.
    pub overwrite: bool,
    /// Densification options.
    pub dense: DenseOptions,
}

/// Densifies `input` and writes the result to `output`.
///
/// The output is written only after all features were processed successfully. Its `crs` member is
/// set to the source CRS.
pub fn densify_file(
    input: &Path,
    output: &Path,
    options: &FileOptions,
) -> Result<(), GeodenseError> {
    formats::validate_densify_args(input, output, options.overwrite)?;

    let mut document = read_document(input, options.layer.as_deref())?;
    let src_crs = resolve_src_crs(input, &document, options.src_crs.as_ref())?;
    let config = DenseConfig::new(&src_crs, options.dense)?;

    densify_geojson(&mut document, &config)?;
    set_crs_member(&mut document, src_crs.id());

    fs::write(output, serde_json::to_string(&document)?)?;
    log::info!("Densified {} into {}", input.display(), output.display());

    Ok(())
}

/// Checks the density of all features of `input`.
pub fn check_density_file(
    input: &Path,
    options: &FileOptions,
) -> Result<Vec<SegmentViolation>, GeodenseError> {
    formats::validate_input(input)?;

    let document = read_document(input, options.layer.as_deref())?;
    let src_crs = resolve_src_crs(input, &document, options.src_crs.as_ref())?;
    let config = DenseConfig::new(&src_crs, options.dense)?;

    let violations = check_geojson(&document, &config)?;
    log::info!(
        "Checked density of {}: {} segment(s) exceed {} m",
        input.display(),
        violations.len(),
        config.max_segment_length()
    );

    Ok(violations)
}

fn read_document(input: &Path, layer: Option<&str>) -> Result<GeoJson, GeodenseError> {
    let document: GeoJson = fs::read_to_string(input)?.parse()?;

    let layers = vec![layer_name(&document).unwrap_or_else(|| file_stem(input))];
    let layer = formats::select_layer(input, &layers, layer)?;
    log::debug!("Reading layer {layer} of {}", input.display());

    Ok(document)
}

/// Source CRS of `input`: the override if given, otherwise the `crs` member of the document,
/// otherwise `OGC:CRS84`.
fn resolve_src_crs(
    input: &Path,
    document: &GeoJson,
    src_crs: Option<&CrsIdentifier>,
) -> Result<Crs, GeodenseError> {
    let id = match src_crs {
        Some(id) => id.clone(),
        None => match crs_member(document) {
            Some(id) => id,
            None => {
                log::warn!(
                    "unable to determine source CRS for file {}, assumed CRS is OGC:CRS84",
                    input.display()
                );
                CrsIdentifier::crs84()
            }
        },
    };

    Ok(CrsRegistry::builtin().lookup(&id)?)
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;
    use geodense_types::error::GeodenseTypesError;
    use std::path::PathBuf;

    /// Directory under the system temp dir, removed on drop.
    pub(crate) struct TempDir(PathBuf);

    impl TempDir {
        pub(crate) fn new(name: &str) -> Self {
            let path = std::env::temp_dir().join(format!("geodense-{}-{name}", std::process::id()));
            let _ = fs::remove_dir_all(&path);
            fs::create_dir_all(&path).expect("temp dir is writable");
            Self(path)
        }

        pub(crate) fn path(&self) -> &Path {
            &self.0
        }

        pub(crate) fn write(&self, name: &str, content: &str) -> PathBuf {
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

    const PROJECTED: &str = r#"{
        "type": "FeatureCollection",
        "name": "lines",
        "crs": {"type": "name", "properties": {"name": "urn:ogc:def:crs:EPSG::25831"}},
        "features": [
            {"type": "Feature", "properties": {"id": 1}, "geometry": {"type": "LineString", "coordinates": [[600000.0, 5800000.0], [610000.0, 5800000.0]]}}
        ]
    }"#;

    const GEOGRAPHIC: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {"type": "Feature", "properties": {}, "geometry": {"type": "LineString", "coordinates": [[5.0, 52.0], [5.0, 52.1]]}}
        ]
    }"#;

    fn read(path: &Path) -> GeoJson {
        fs::read_to_string(path)
            .expect("readable output")
            .parse()
            .expect("valid output")
    }

    #[test]
    fn densify_projected_file() {
        let dir = TempDir::new("densify_projected_file");
        let input = dir.write("input.geojson", PROJECTED);
        let output = dir.path().join("output.geojson");

        let options = FileOptions {
            dense: DenseOptions::default().with_max_segment_length(1000.0),
            ..Default::default()
        };
        densify_file(&input, &output, &options).expect("densifiable");

        let document = read(&output);
        let GeoJson::FeatureCollection(collection) = &document else {
            panic!("expected a feature collection");
        };
        let members = collection.foreign_members.as_ref().expect("foreign members");
        assert_eq!(
            members["crs"]["properties"]["name"],
            serde_json::json!("urn:ogc:def:crs:EPSG::25831")
        );
        assert_eq!(members["name"], serde_json::json!("lines"));
        assert_matches!(
            &collection.features[0].geometry.as_ref().map(|g| &g.value),
            Some(geojson::Value::LineString(line)) if line.len() == 12
        );

        assert!(check_density_file(&output, &options).expect("checkable").is_empty());
        assert_eq!(check_density_file(&input, &options).expect("checkable").len(), 1);

        assert_matches!(
            densify_file(&input, &output, &options),
            Err(GeodenseError::FileArgument(_))
        );
        let overwrite = FileOptions {
            overwrite: true,
            ..options
        };
        assert!(densify_file(&input, &output, &overwrite).is_ok());
    }

    #[test]
    fn default_crs_is_crs84() {
        let dir = TempDir::new("default_crs_is_crs84");
        let input = dir.write("input.json", GEOGRAPHIC);
        let output = dir.path().join("output.json");

        densify_file(&input, &output, &FileOptions::default()).expect("densifiable");

        let GeoJson::FeatureCollection(collection) = read(&output) else {
            panic!("expected a feature collection");
        };
        assert!(collection.foreign_members.is_none());
    }

    #[test]
    fn crs_member_after_features() {
        let dir = TempDir::new("crs_member_after_features");
        let input = dir.write(
            "input.geojson",
            r#"{
                "type": "FeatureCollection",
                "features": [
                    {"type": "Feature", "properties": {"crs": "urn:ogc:def:crs:EPSG::4258"}, "geometry": {"type": "LineString", "coordinates": [[600000.0, 5800000.0], [610000.0, 5800000.0]]}}
                ],
                "crs": {"type": "name", "properties": {"name": "urn:ogc:def:crs:EPSG::25831"}}
            }"#,
        );

        let options = FileOptions {
            dense: DenseOptions::default().with_max_segment_length(1000.0),
            ..Default::default()
        };
        let violations = check_density_file(&input, &options).expect("checkable");
        assert_eq!(violations.len(), 1);
        assert_abs_diff_eq!(violations[0].distance, 10000.0, epsilon = 10.0);
    }

    #[test]
    fn src_crs_override() {
        let dir = TempDir::new("src_crs_override");
        let input = dir.write("input.json", GEOGRAPHIC);
        let output = dir.path().join("output.json");

        let options = FileOptions {
            src_crs: Some(CrsIdentifier::epsg(4258)),
            ..Default::default()
        };
        densify_file(&input, &output, &options).expect("densifiable");

        let GeoJson::FeatureCollection(collection) = read(&output) else {
            panic!("expected a feature collection");
        };
        let members = collection.foreign_members.expect("crs member");
        assert_eq!(
            members["crs"]["properties"]["name"],
            serde_json::json!("urn:ogc:def:crs:EPSG::4258")
        );

        let unknown = FileOptions {
            src_crs: Some(CrsIdentifier::epsg(1)),
            ..Default::default()
        };
        assert_matches!(
            check_density_file(&input, &unknown),
            Err(GeodenseError::Types(GeodenseTypesError::UnknownCrs(_)))
        );
    }

    #[test]
    fn in_projection_on_geographic_file() {
        let dir = TempDir::new("in_projection_on_geographic_file");
        let input = dir.write("input.json", GEOGRAPHIC);
        let output = dir.path().join("output.json");

        let options = FileOptions {
            dense: DenseOptions::default().with_in_projection(true),
            ..Default::default()
        };
        assert_matches!(
            densify_file(&input, &output, &options),
            Err(GeodenseError::InProjectionGeographic { .. })
        );
        assert!(!output.exists());
    }

    #[test]
    fn layers() {
        let dir = TempDir::new("layers");
        let input = dir.write("input.json", GEOGRAPHIC);

        let options = FileOptions {
            layer: Some("input".to_string()),
            ..Default::default()
        };
        assert!(check_density_file(&input, &options).is_ok());

        let options = FileOptions {
            layer: Some("roads".to_string()),
            ..Default::default()
        };
        assert_matches!(
            check_density_file(&input, &options),
            Err(GeodenseError::LayerNotFound { layer, .. }) if layer == "roads"
        );
    }
}
