use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::OnceLock;

use crate::error::GeodenseTypesError;
use crate::geo::datum::Datum;

/// Authority and code of a CRS, e.g. `EPSG:4258` or `OGC:CRS84`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct CrsIdentifier {
    authority: String,
    code: String,
}

impl CrsIdentifier {
    /// Creates a new identifier. Authority and code are normalized to upper case.
    pub fn new(authority: impl AsRef<str>, code: impl AsRef<str>) -> Self {
        Self {
            authority: authority.as_ref().trim().to_uppercase(),
            code: code.as_ref().trim().to_uppercase(),
        }
    }

    /// Shortcut for an `EPSG` identifier.
    pub fn epsg(code: u32) -> Self {
        Self::new("EPSG", code.to_string())
    }

    /// `OGC:CRS84`, longitude/latitude on WGS 84.
    pub fn crs84() -> Self {
        Self::new("OGC", "CRS84")
    }

    /// Authority name.
    pub fn authority(&self) -> &str {
        &self.authority
    }

    /// Code within the authority.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Parses an OGC URN of the form `urn:ogc:def:crs:{authority}:{version}:{code}`, where the
    /// version may be empty.
    pub fn from_urn(urn: &str) -> Result<Self, GeodenseTypesError> {
        let captures = urn_regex()
            .captures(urn.trim())
            .ok_or_else(|| GeodenseTypesError::InvalidCrsIdentifier(urn.to_string()))?;

        Ok(Self::new(&captures["authority"], &captures["code"]))
    }

    /// Renders the identifier as an OGC URN without version: `urn:ogc:def:crs:{authority}::{code}`.
    pub fn to_urn(&self) -> String {
        format!("urn:ogc:def:crs:{}::{}", self.authority, self.code)
    }

    /// True for `OGC:CRS84`.
    pub fn is_crs84(&self) -> bool {
        self.authority == "OGC" && self.code == "CRS84"
    }
}

fn urn_regex() -> &'static Regex {
    static URN: OnceLock<Regex> = OnceLock::new();
    URN.get_or_init(|| {
        Regex::new(
            r"^(?i:urn:ogc:def:crs):(?P<authority>[^:]+):(?P<version>[^:]*):(?P<code>[^:]+)$",
        )
        .expect("invalid urn regex")
    })
}

impl FromStr for CrsIdentifier {
    type Err = GeodenseTypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.to_lowercase().starts_with("urn:") {
            return Self::from_urn(s);
        }

        match s.split_once(':') {
            Some((authority, code))
                if !authority.is_empty() && !code.is_empty() && !code.contains(':') =>
            {
                Ok(Self::new(authority, code))
            }
            _ => Err(GeodenseTypesError::InvalidCrsIdentifier(s.to_string())),
        }
    }
}

impl Display for CrsIdentifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.authority, self.code)
    }
}

/// Coordinate reference system.
///
/// Only the properties needed for geodesic measurements are modelled: the reference ellipsoid, the
/// kind of the system and, for projected systems, the base geographic CRS together with the
/// projection from it.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Crs {
    id: CrsIdentifier,
    name: String,
    datum: Option<Datum>,
    kind: CrsKind,
}

/// Kind of a coordinate reference system.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[non_exhaustive]
pub enum CrsKind {
    /// Longitude and latitude on an ellipsoid.
    Geographic,
    /// Planar coordinates derived from a geographic CRS.
    Projected {
        /// Geographic CRS the projection is defined on.
        base: Box<Crs>,
        /// Operator definition of the projection from `base` to this CRS, in `geodesy` syntax.
        definition: String,
    },
    /// Combination of a horizontal and a vertical CRS.
    Compound {
        /// Component systems, horizontal first.
        components: Vec<Crs>,
    },
    /// Heights only.
    Vertical,
    /// Earth centered cartesian coordinates.
    Geocentric,
}

impl Crs {
    /// Creates a geographic CRS.
    pub fn geographic(id: CrsIdentifier, name: impl Into<String>, datum: Datum) -> Self {
        Self {
            id,
            name: name.into(),
            datum: Some(datum),
            kind: CrsKind::Geographic,
        }
    }

    /// Creates a projected CRS on top of a geographic `base`.
    pub fn projected(
        id: CrsIdentifier,
        name: impl Into<String>,
        base: Crs,
        definition: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            datum: base.datum,
            kind: CrsKind::Projected {
                base: Box::new(base),
                definition: definition.into(),
            },
        }
    }

    /// Creates a compound CRS. The datum is taken from the first component that has one.
    pub fn compound(id: CrsIdentifier, name: impl Into<String>, components: Vec<Crs>) -> Self {
        Self {
            id,
            name: name.into(),
            datum: components.iter().find_map(|c| c.datum),
            kind: CrsKind::Compound { components },
        }
    }

    /// Creates a vertical CRS.
    pub fn vertical(id: CrsIdentifier, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            datum: None,
            kind: CrsKind::Vertical,
        }
    }

    /// Creates a geocentric CRS.
    pub fn geocentric(id: CrsIdentifier, name: impl Into<String>, datum: Datum) -> Self {
        Self {
            id,
            name: name.into(),
            datum: Some(datum),
            kind: CrsKind::Geocentric,
        }
    }

    /// Identifier of the CRS.
    pub fn id(&self) -> &CrsIdentifier {
        &self.id
    }

    /// Human readable name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reference ellipsoid, if the CRS has one.
    pub fn datum(&self) -> Option<Datum> {
        self.datum
    }

    /// Kind of the CRS.
    pub fn kind(&self) -> &CrsKind {
        &self.kind
    }

    /// Horizontal part of the CRS: the CRS itself for geographic and projected systems, the first
    /// geographic or projected component for compound systems.
    pub fn horizontal(&self) -> Option<&Crs> {
        match &self.kind {
            CrsKind::Geographic | CrsKind::Projected { .. } => Some(self),
            CrsKind::Compound { components } => components.iter().find_map(|c| c.horizontal()),
            CrsKind::Vertical | CrsKind::Geocentric => None,
        }
    }

    /// True if the horizontal part of the CRS is geographic.
    pub fn is_geographic(&self) -> bool {
        matches!(self.horizontal().map(|h| &h.kind), Some(CrsKind::Geographic))
    }

    /// True if the horizontal part of the CRS is projected.
    pub fn is_projected(&self) -> bool {
        matches!(self.horizontal().map(|h| &h.kind), Some(CrsKind::Projected { .. }))
    }

    /// Geographic CRS the horizontal coordinates are based on. For a compound CRS the projected
    /// component is located first.
    pub fn base_crs(&self) -> Option<&Crs> {
        let horizontal = self.horizontal()?;
        match &horizontal.kind {
            CrsKind::Geographic => Some(horizontal),
            CrsKind::Projected { base, .. } => Some(base),
            _ => None,
        }
    }

    /// Projection definition from the base geographic CRS, for projected CRSs.
    pub fn projection_definition(&self) -> Option<&str> {
        match &self.horizontal()?.kind {
            CrsKind::Projected { definition, .. } => Some(definition),
            _ => None,
        }
    }
}

impl Display for Crs {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.id, self.name)
    }
}
