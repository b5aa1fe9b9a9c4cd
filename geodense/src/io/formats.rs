//! Supported file formats and validation of file arguments.

use std::path::Path;

use crate::error::GeodenseError;

/// File format known to the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileFormat {
    /// Driver name.
    pub name: &'static str,
    /// File extensions, including the leading dot.
    pub extensions: &'static [&'static str],
}

/// Formats the tool can read and write.
pub const SUPPORTED_FILE_FORMATS: &[FileFormat] = &[FileFormat {
    name: "GeoJSON",
    extensions: &[".geojson", ".json"],
}];

/// Drivers compiled into the binary.
const DRIVERS: &[&str] = &["GeoJSON"];

/// Names of the formats in `formats` there is no driver for.
pub fn unsupported_formats(formats: &[FileFormat]) -> Vec<&'static str> {
    formats
        .iter()
        .filter(|format| !DRIVERS.contains(&format.name))
        .map(|format| format.name)
        .collect()
}

/// Renders `formats` as a `Name | Extension` table.
pub fn format_table(formats: &[FileFormat]) -> String {
    let mut lines = vec!["Name | Extension".to_string(), "---- | ---------".to_string()];
    lines.extend(
        formats
            .iter()
            .map(|format| format!("{} | {}", format.name, format.extensions.join(", "))),
    );
    lines.join("\n")
}

/// Extension of `path` with the leading dot, or an empty string.
pub fn extension(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}

/// Format a file is read with, based on its extension.
pub fn format_of(path: &Path) -> Option<&'static FileFormat> {
    let ext = extension(path).to_lowercase();
    SUPPORTED_FILE_FORMATS
        .iter()
        .find(|format| format.extensions.contains(&ext.as_str()))
}

/// Checks the arguments of a densify run. `output` may only exist when `overwrite` is set.
pub fn validate_densify_args(
    input: &Path,
    output: &Path,
    overwrite: bool,
) -> Result<(), GeodenseError> {
    if input == output {
        return Err(GeodenseError::FileArgument(format!(
            "input_file and output_file arguments must be different, \
             input_file: {}, output_file: {}",
            input.display(),
            output.display()
        )));
    }

    let (input_ext, output_ext) = (extension(input), extension(output));
    if input_ext != output_ext {
        return Err(GeodenseError::FileArgument(format!(
            "Extension of input_file and output_file need to match, \
             was input_file: {input_ext}, output_file: {output_ext}"
        )));
    }

    validate_input(input)?;

    let output_dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if !output_dir.is_dir() {
        return Err(GeodenseError::FileArgument(format!(
            "target directory of output_file {} does not exist",
            output.display()
        )));
    }

    if output.exists() && !overwrite {
        return Err(GeodenseError::FileArgument(format!(
            "output_file {} already exists",
            output.display()
        )));
    }

    Ok(())
}

/// Checks that `input` is of a supported format and exists.
pub fn validate_input(input: &Path) -> Result<(), GeodenseError> {
    if format_of(input).is_none() {
        return Err(GeodenseError::UnsupportedFileFormat {
            arg_name: "input_file",
            path: input.to_path_buf(),
        });
    }

    if !input.exists() {
        return Err(GeodenseError::FileArgument(format!(
            "input_file {} does not exist",
            input.display()
        )));
    }

    Ok(())
}

/// Picks the layer to process out of `layers` of the file at `path`.
///
/// Without a requested layer the file must have exactly one.
pub fn select_layer<'a>(
    path: &Path,
    layers: &'a [String],
    requested: Option<&str>,
) -> Result<&'a str, GeodenseError> {
    let list = || layers.join(", ");

    match requested {
        Some(requested) => layers
            .iter()
            .find(|layer| layer.as_str() == requested)
            .map(String::as_str)
            .ok_or_else(|| GeodenseError::LayerNotFound {
                layer: requested.to_string(),
                path: path.to_path_buf(),
                layers: list(),
            }),
        None => match layers {
            [layer] => Ok(layer.as_str()),
            _ => Err(GeodenseError::AmbiguousLayer {
                path: path.to_path_buf(),
                layers: list(),
            }),
        },
    }
}
