//! Densification and density check of whole GeoJSON documents.

use geodense_types::geo::CrsIdentifier;
use geodense_types::Geom;
use geojson::{GeoJson, Geometry, JsonObject, Value};
use serde_json::json;

use crate::check::{check_geometry, SegmentViolation};
use crate::config::DenseConfig;
use crate::densify::densify_geometry;
use crate::error::GeodenseError;

/// Densifies the geometries of all features of `document` in place.
///
/// Everything apart from the geometry coordinates is kept as is. (Multi)point features are not
/// changed.
pub fn densify_geojson(document: &mut GeoJson, config: &DenseConfig) -> Result<(), GeodenseError> {
    let mut geometries = geometries_mut(document);

    let geoms = geometries
        .iter()
        .map(|(index, geometry)| {
            Geom::try_from(&**geometry)
                .map_err(|err| GeodenseError::from(err).in_feature(*index))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if !geoms.is_empty() && geoms.iter().all(Geom::is_point_only) {
        return Err(GeodenseError::OnlyPoints);
    }
    if geoms.iter().any(Geom::contains_points) {
        log::warn!(
            "GeoJSON contains (Multi)Point geometries, \
             cannot run densify on (Multi)Point geometries"
        );
    }

    for ((index, geometry), geom) in geometries.iter_mut().zip(geoms) {
        if geom.is_point_only() {
            continue;
        }

        let densified = densify_geometry(geom, config).map_err(|err| err.in_feature(*index))?;
        geometry.value = Value::from(&densified);
    }

    Ok(())
}

/// Checks the geometries of all features of `document`. The first element of every violation path
/// is the index of the feature.
///
/// A (multi)point feature fails the check. Points inside a geometry collection are skipped.
pub fn check_geojson(
    document: &GeoJson,
    config: &DenseConfig,
) -> Result<Vec<SegmentViolation>, GeodenseError> {
    let mut violations = vec![];

    for (index, geometry) in geometries(document) {
        let feature_violations = Geom::try_from(geometry)
            .map_err(GeodenseError::from)
            .and_then(|geom| check_geometry(&geom, config))
            .map_err(|err| err.in_feature(index))?;
        violations.extend(feature_violations.into_iter().map(|mut violation| {
            violation.path.insert(0, index);
            violation
        }));
    }

    Ok(violations)
}

/// Sets the `crs` member of `document` to the URN of `crs`. The member is removed for `OGC:CRS84`,
/// which is the default CRS of GeoJSON.
pub fn set_crs_member(document: &mut GeoJson, crs: &CrsIdentifier) {
    let members = foreign_members_mut(document);

    if crs.is_crs84() {
        if let Some(object) = members {
            object.remove("crs");
        }
        if members.as_ref().is_some_and(JsonObject::is_empty) {
            *members = None;
        }
        return;
    }

    members
        .get_or_insert_with(JsonObject::new)
        .insert(
            "crs".to_string(),
            json!({"type": "name", "properties": {"name": crs.to_urn()}}),
        );
}

/// CRS named by the top level `crs` member of the document, if any.
///
/// Members with the same key nested in features or properties are not considered.
pub fn crs_member(document: &GeoJson) -> Option<CrsIdentifier> {
    let name = foreign_members(document)?
        .get("crs")?
        .pointer("/properties/name")?
        .as_str()?;

    match name.parse() {
        Ok(id) => Some(id),
        Err(err) => {
            log::warn!("Ignoring crs member of the document: {err}");
            None
        }
    }
}

/// Value of the `name` member of the document, if any.
pub fn layer_name(document: &GeoJson) -> Option<String> {
    foreign_members(document)?
        .get("name")?
        .as_str()
        .map(str::to_string)
}

fn geometries(document: &GeoJson) -> Vec<(usize, &Geometry)> {
    match document {
        GeoJson::FeatureCollection(collection) => collection
            .features
            .iter()
            .enumerate()
            .filter_map(|(index, feature)| feature.geometry.as_ref().map(|g| (index, g)))
            .collect(),
        GeoJson::Feature(feature) => feature.geometry.iter().map(|g| (0, g)).collect(),
        GeoJson::Geometry(geometry) => vec![(0, geometry)],
    }
}

fn geometries_mut(document: &mut GeoJson) -> Vec<(usize, &mut Geometry)> {
    match document {
        GeoJson::FeatureCollection(collection) => collection
            .features
            .iter_mut()
            .enumerate()
            .filter_map(|(index, feature)| feature.geometry.as_mut().map(|g| (index, g)))
            .collect(),
        GeoJson::Feature(feature) => feature.geometry.iter_mut().map(|g| (0, g)).collect(),
        GeoJson::Geometry(geometry) => vec![(0, geometry)],
    }
}

fn foreign_members(document: &GeoJson) -> Option<&JsonObject> {
    match document {
        GeoJson::FeatureCollection(collection) => collection.foreign_members.as_ref(),
        GeoJson::Feature(feature) => feature.foreign_members.as_ref(),
        GeoJson::Geometry(geometry) => geometry.foreign_members.as_ref(),
    }
}

fn foreign_members_mut(document: &mut GeoJson) -> &mut Option<JsonObject> {
    match document {
        GeoJson::FeatureCollection(collection) => &mut collection.foreign_members,
        GeoJson::Feature(feature) => &mut feature.foreign_members,
        GeoJson::Geometry(geometry) => &mut geometry.foreign_members,
    }
}
