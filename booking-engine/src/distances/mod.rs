//! Distances between locations.
//!
//! Fares are priced per distance unit, so every booking starts with a
//! lookup here. The table is built once and read-only afterwards; a pair
//! with no entry simply means no route is known.

use std::collections::HashMap;

use tracing::warn;

use crate::domain::Location;

/// A read-only table of distances between ordered pairs of locations.
///
/// Nothing forces the table to be symmetric: the builder's `add_directed`
/// stores a single direction and `add` stores both. There are no mutation
/// methods once the table is built.
#[derive(Debug, Clone, Default)]
pub struct DistanceTable {
    distances: HashMap<(Location, Location), f64>,
}

impl DistanceTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a distance for one direction only.
    ///
    /// Distances that are not finite and positive are dropped.
    fn insert(&mut self, from: Location, to: Location, distance: f64) {
        if !(distance.is_finite() && distance > 0.0) {
            warn!(
                from = from.code(),
                to = to.code(),
                distance,
                "dropping invalid distance"
            );
            return;
        }
        self.distances.insert((from, to), distance);
    }

    /// Get the distance from `from` to `to`, if a route is known.
    pub fn lookup(&self, from: Location, to: Location) -> Option<f64> {
        self.distances.get(&(from, to)).copied()
    }

    /// Check if a route is known.
    pub fn contains(&self, from: Location, to: Location) -> bool {
        self.distances.contains_key(&(from, to))
    }

    /// All destinations reachable from a location, nearest first.
    pub fn destinations_from(&self, from: Location) -> Vec<(Location, f64)> {
        let mut out: Vec<_> = self
            .distances
            .iter()
            .filter(|((f, _), _)| *f == from)
            .map(|((_, t), d)| (*t, *d))
            .collect();
        out.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));
        out
    }

    /// Iterate over every stored (from, to, distance) entry.
    pub fn iter(&self) -> impl Iterator<Item = (Location, Location, f64)> + '_ {
        self.distances.iter().map(|(&(f, t), &d)| (f, t, d))
    }

    /// Returns the number of directed entries.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Returns true if no routes are known.
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}

/// Builder for distance tables.
///
/// Provides a fluent API where each pair is stored in both directions.
#[derive(Debug, Default)]
pub struct DistanceTableBuilder {
    inner: DistanceTable,
}

impl DistanceTableBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a route in both directions.
    pub fn add(mut self, a: Location, b: Location, distance: f64) -> Self {
        self.inner.insert(a, b, distance);
        self.inner.insert(b, a, distance);
        self
    }

    /// Add a route in one direction only.
    pub fn add_directed(mut self, from: Location, to: Location, distance: f64) -> Self {
        self.inner.insert(from, to, distance);
        self
    }

    /// Build the table.
    pub fn build(self) -> DistanceTable {
        self.inner
    }
}

/// The compiled-in road distances between Brazilian states.
pub fn brazil_distances() -> DistanceTable {
    use crate::domain::Location::*;

    DistanceTableBuilder::new()
        .add(Alagoas, Bahia, 875.0)
        .add(Alagoas, Ceara, 1037.0)
        .add(Alagoas, EspiritoSanto, 1630.0)
        .add(Alagoas, Maranhao, 1648.0)
        .add(Alagoas, Paraiba, 266.0)
        .add(Alagoas, Pernambuco, 256.0)
        .add(Alagoas, Piaui, 1004.0)
        .add(Alagoas, RioDeJaneiro, 1950.0)
        .add(Alagoas, RioGrandeDoNorte, 494.0)
        .add(Alagoas, SaoPaulo, 2140.0)
        .add(Alagoas, Sergipe, 285.0)
        .add(Alagoas, MinasGerais, 1620.0)
        .add(Bahia, Ceara, 1213.0)
        .add(Bahia, EspiritoSanto, 1202.0)
        .add(Bahia, Maranhao, 1067.0)
        .add(Bahia, Paraiba, 1237.0)
        .add(Bahia, Pernambuco, 969.0)
        .add(Bahia, Piaui, 1135.0)
        .add(Bahia, RioDeJaneiro, 1530.0)
        .add(Bahia, RioGrandeDoNorte, 1347.0)
        .add(Bahia, SaoPaulo, 1942.0)
        .add(Bahia, Sergipe, 324.0)
        .add(Bahia, MinasGerais, 1370.0)
        .add(Ceara, EspiritoSanto, 1992.0)
        .add(Ceara, Maranhao, 690.0)
        .add(Ceara, Paraiba, 702.0)
        .add(Ceara, Pernambuco, 800.0)
        .add(Ceara, Piaui, 579.0)
        .add(Ceara, RioDeJaneiro, 2688.0)
        .add(Ceara, RioGrandeDoNorte, 553.0)
        .add(Ceara, SaoPaulo, 2760.0)
        .add(Ceara, Sergipe, 1070.0)
        .add(Ceara, MinasGerais, 2230.0)
        .add(EspiritoSanto, Maranhao, 1868.0)
        .add(EspiritoSanto, Paraiba, 1876.0)
        .add(EspiritoSanto, Pernambuco, 1792.0)
        .add(EspiritoSanto, Piaui, 1941.0)
        .add(EspiritoSanto, RioDeJaneiro, 521.0)
        .add(EspiritoSanto, RioGrandeDoNorte, 2162.0)
        .add(EspiritoSanto, SaoPaulo, 883.0)
        .add(EspiritoSanto, Sergipe, 1407.0)
        .add(EspiritoSanto, MinasGerais, 524.0)
        .add(Maranhao, Paraiba, 1327.0)
        .add(Maranhao, Pernambuco, 1455.0)
        .add(Maranhao, Piaui, 510.0)
        .add(Maranhao, RioDeJaneiro, 2262.0)
        .add(Maranhao, RioGrandeDoNorte, 1574.0)
        .add(Maranhao, SaoPaulo, 2832.0)
        .add(Maranhao, Sergipe, 1410.0)
        .add(Maranhao, MinasGerais, 2180.0)
        .add(Paraiba, Pernambuco, 120.0)
        .add(Paraiba, Piaui, 837.0)
        .add(Paraiba, RioDeJaneiro, 2394.0)
        .add(Paraiba, RioGrandeDoNorte, 188.0)
        .add(Paraiba, SaoPaulo, 2786.0)
        .add(Paraiba, Sergipe, 769.0)
        .add(Paraiba, MinasGerais, 2000.0)
        .add(Pernambuco, Piaui, 1131.0)
        .add(Pernambuco, RioDeJaneiro, 2408.0)
        .add(Pernambuco, RioGrandeDoNorte, 296.0)
        .add(Pernambuco, SaoPaulo, 2786.0)
        .add(Pernambuco, Sergipe, 510.0)
        .add(Pernambuco, MinasGerais, 1940.0)
        .add(Piaui, RioDeJaneiro, 2404.0)
        .add(Piaui, RioGrandeDoNorte, 1114.0)
        .add(Piaui, SaoPaulo, 2818.0)
        .add(Piaui, Sergipe, 1218.0)
        .add(Piaui, MinasGerais, 2060.0)
        .add(RioDeJaneiro, RioGrandeDoNorte, 2582.0)
        .add(RioDeJaneiro, SaoPaulo, 429.0)
        .add(RioDeJaneiro, Sergipe, 1736.0)
        .add(RioDeJaneiro, MinasGerais, 339.0)
        .add(RioGrandeDoNorte, SaoPaulo, 2792.0)
        .add(RioGrandeDoNorte, Sergipe, 995.0)
        .add(RioGrandeDoNorte, MinasGerais, 2190.0)
        .add(SaoPaulo, Sergipe, 2134.0)
        .add(SaoPaulo, MinasGerais, 586.0)
        .add(Sergipe, MinasGerais, 1190.0)
        .build()
}
