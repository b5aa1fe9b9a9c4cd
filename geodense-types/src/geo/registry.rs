use std::collections::HashMap;

use crate::error::GeodenseTypesError;
use crate::geo::crs::{Crs, CrsIdentifier};
use crate::geo::datum::Datum;

/// Lookup table of known coordinate reference systems.
///
/// [`CrsRegistry::builtin`] knows a handful of European and global systems whose projections the
/// `geodesy` crate can evaluate. Other systems can be added with [`CrsRegistry::register`].
#[derive(Debug, Clone, Default)]
pub struct CrsRegistry {
    entries: HashMap<CrsIdentifier, Crs>,
}

impl CrsRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with the built-in definitions.
    pub fn builtin() -> Self {
        let mut registry = Self::new();

        let crs84 = Crs::geographic(CrsIdentifier::crs84(), "WGS 84 (CRS84)", Datum::WGS84);
        let wgs84 = Crs::geographic(CrsIdentifier::epsg(4326), "WGS 84", Datum::WGS84);
        let etrs89 = Crs::geographic(CrsIdentifier::epsg(4258), "ETRS89", Datum::GRS80);

        let utm32n = Crs::projected(
            CrsIdentifier::epsg(25832),
            "ETRS89 / UTM zone 32N",
            etrs89.clone(),
            "utm zone=32",
        );
        let dhhn92 = Crs::vertical(CrsIdentifier::epsg(5783), "DHHN92 height");

        registry.register(Crs::projected(
            CrsIdentifier::epsg(3857),
            "WGS 84 / Pseudo-Mercator",
            wgs84.clone(),
            "webmerc",
        ));
        registry.register(Crs::projected(
            CrsIdentifier::epsg(3035),
            "ETRS89-extended / LAEA Europe",
            etrs89.clone(),
            "laea lat_0=52 lon_0=10 x_0=4321000 y_0=3210000",
        ));
        registry.register(Crs::projected(
            CrsIdentifier::epsg(25831),
            "ETRS89 / UTM zone 31N",
            etrs89.clone(),
            "utm zone=31",
        ));
        registry.register(Crs::projected(
            CrsIdentifier::epsg(32631),
            "WGS 84 / UTM zone 31N",
            wgs84.clone(),
            "utm zone=31 ellps=WGS84",
        ));
        registry.register(Crs::projected(
            CrsIdentifier::epsg(32632),
            "WGS 84 / UTM zone 32N",
            wgs84.clone(),
            "utm zone=32 ellps=WGS84",
        ));
        registry.register(Crs::compound(
            CrsIdentifier::epsg(5555),
            "ETRS89 / UTM zone 32N + DHHN92 height",
            vec![utm32n.clone(), dhhn92.clone()],
        ));
        registry.register(Crs::geocentric(
            CrsIdentifier::epsg(4936),
            "ETRS89 (geocentric)",
            Datum::GRS80,
        ));
        registry.register(utm32n);
        registry.register(dhhn92);
        registry.register(crs84);
        registry.register(wgs84);
        registry.register(etrs89);

        registry
    }

    /// Adds or replaces a definition.
    pub fn register(&mut self, crs: Crs) {
        self.entries.insert(crs.id().clone(), crs);
    }

    /// Finds the CRS with the given identifier.
    pub fn lookup(&self, id: &CrsIdentifier) -> Result<Crs, GeodenseTypesError> {
        self.entries
            .get(id)
            .cloned()
            .ok_or_else(|| GeodenseTypesError::UnknownCrs(id.to_string()))
    }

    /// Parses the identifier and finds the CRS.
    pub fn lookup_str(&self, id: &str) -> Result<Crs, GeodenseTypesError> {
        self.lookup(&id.parse()?)
    }

    /// Iterates over the identifiers of all known systems.
    pub fn identifiers(&self) -> impl Iterator<Item = &CrsIdentifier> {
        self.entries.keys()
    }
}
