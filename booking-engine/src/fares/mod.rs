//! Fare strategies.
//!
//! Each transport mode prices a trip as `distance * rate + surcharge`. The
//! modes form a closed set, so a strategy is just the mode tag plus a lookup
//! into [`FareSchedule::for_mode`]; there is no per-mode type to dispatch on.

use tracing::warn;

use crate::distances::DistanceTable;
use crate::domain::{BookingRequest, Location, Ticket, TransportMode};

/// Per-mode pricing parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FareSchedule {
    /// Price per distance unit (always > 0).
    pub rate: f64,

    /// Fixed amount added to every fare (always >= 0).
    pub surcharge: f64,
}

impl FareSchedule {
    const AIRPLANE: FareSchedule = FareSchedule {
        rate: 0.3,
        surcharge: 100.0,
    };
    const TRAIN: FareSchedule = FareSchedule {
        rate: 0.2,
        surcharge: 50.0,
    };
    const BUS: FareSchedule = FareSchedule {
        rate: 0.1,
        surcharge: 30.0,
    };

    /// The schedule for a transport mode.
    pub const fn for_mode(mode: TransportMode) -> FareSchedule {
        match mode {
            TransportMode::Airplane => Self::AIRPLANE,
            TransportMode::Train => Self::TRAIN,
            TransportMode::Bus => Self::BUS,
        }
    }
}

/// Price a trip of `distance` units under `mode`.
pub fn price_for(mode: TransportMode, distance: f64) -> f64 {
    let schedule = FareSchedule::for_mode(mode);
    distance * schedule.rate + schedule.surcharge
}

/// The pricing and booking rules for one transport mode.
///
/// # Examples
///
/// ```
/// use booking_engine::distances::brazil_distances;
/// use booking_engine::domain::{Location, TransportMode};
/// use booking_engine::fares::FareStrategy;
///
/// let table = brazil_distances();
/// let airplane = FareStrategy::new(TransportMode::Airplane);
///
/// let price = airplane.compute_price(&table, Location::Alagoas, Location::SaoPaulo);
/// assert!((price - 742.0).abs() < 1e-9);
///
/// // Unknown routes are priced at zero
/// assert_eq!(airplane.compute_price(&table, Location::Bahia, Location::Bahia), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FareStrategy {
    mode: TransportMode,
}

impl FareStrategy {
    /// The strategy for a transport mode.
    pub const fn new(mode: TransportMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> TransportMode {
        self.mode
    }

    pub fn schedule(&self) -> FareSchedule {
        FareSchedule::for_mode(self.mode)
    }

    /// Price a trip between two locations.
    ///
    /// Returns 0 when the table has no distance for the pair.
    pub fn compute_price(
        &self,
        table: &DistanceTable,
        origin: Location,
        destination: Location,
    ) -> f64 {
        match table.lookup(origin, destination) {
            Some(distance) => price_for(self.mode, distance),
            None => {
                warn!(
                    origin = origin.code(),
                    destination = destination.code(),
                    mode = self.mode.as_str(),
                    "route unknown, pricing at zero"
                );
                0.0
            }
        }
    }

    /// Book a ticket for `request` under this strategy's mode.
    ///
    /// Does not check ticket id uniqueness; that belongs to whoever stores
    /// the ticket.
    pub fn book(&self, table: &DistanceTable, request: BookingRequest) -> Ticket {
        let price = self.compute_price(table, request.origin(), request.destination());
        Ticket::issue(request, self.mode, price)
    }
}

impl From<TransportMode> for FareStrategy {
    fn from(mode: TransportMode) -> Self {
        Self::new(mode)
    }
}

/// Book a ticket with the mode passed explicitly.
///
/// Holds no state between calls, so it can be used from anywhere without a
/// booking context.
pub fn book(mode: TransportMode, request: BookingRequest, table: &DistanceTable) -> Ticket {
    FareStrategy::new(mode).book(table, request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distances::{DistanceTableBuilder, brazil_distances};

    const TOLERANCE: f64 = 1e-9;

    fn request(id: &str, origin: Location, destination: Location) -> BookingRequest {
        BookingRequest::new(id, "Test Passenger", origin, destination).unwrap()
    }

    #[test]
    fn schedules() {
        assert_eq!(
            FareSchedule::for_mode(TransportMode::Airplane),
            FareSchedule {
                rate: 0.3,
                surcharge: 100.0
            }
        );
        assert_eq!(
            FareSchedule::for_mode(TransportMode::Train),
            FareSchedule {
                rate: 0.2,
                surcharge: 50.0
            }
        );
        assert_eq!(
            FareSchedule::for_mode(TransportMode::Bus),
            FareSchedule {
                rate: 0.1,
                surcharge: 30.0
            }
        );
    }

    #[test]
    fn schedule_parameters_in_range() {
        for mode in TransportMode::ALL {
            let s = FareSchedule::for_mode(mode);
            assert!(s.rate > 0.0);
            assert!(s.surcharge >= 0.0);
        }
    }

    #[test]
    fn airplane_alagoas_sao_paulo() {
        let table = brazil_distances();
        let price = FareStrategy::new(TransportMode::Airplane).compute_price(
            &table,
            Location::Alagoas,
            Location::SaoPaulo,
        );
        assert!((price - 742.0).abs() < TOLERANCE);
    }

    #[test]
    fn every_known_route_follows_formula() {
        let table = brazil_distances();
        for (origin, destination, distance) in table.iter() {
            for mode in TransportMode::ALL {
                let s = FareSchedule::for_mode(mode);
                let expected = distance * s.rate + s.surcharge;
                let price = FareStrategy::new(mode).compute_price(&table, origin, destination);
                assert!(
                    (price - expected).abs() < TOLERANCE,
                    "{mode} {origin}->{destination}: {price} != {expected}"
                );
            }
        }
    }

    #[test]
    fn every_unknown_route_is_free() {
        let table = DistanceTableBuilder::new()
            .add(Location::Alagoas, Location::Bahia, 875.0)
            .build();
        for origin in Location::ALL {
            for destination in Location::ALL {
                if table.contains(origin, destination) {
                    continue;
                }
                for mode in TransportMode::ALL {
                    let price = FareStrategy::new(mode).compute_price(&table, origin, destination);
                    assert_eq!(price, 0.0);
                }
            }
        }
    }

    #[test]
    fn book_tags_ticket_with_mode() {
        let table = brazil_distances();
        let ticket = FareStrategy::new(TransportMode::Train).book(
            &table,
            request("T456", Location::Sergipe, Location::RioDeJaneiro),
        );

        assert_eq!(ticket.mode(), TransportMode::Train);
        assert_eq!(ticket.id().as_str(), "T456");
        assert!((ticket.price() - (1736.0 * 0.2 + 50.0)).abs() < TOLERANCE);
    }

    #[test]
    fn book_unknown_route_yields_free_ticket() {
        let table = DistanceTable::new();
        let ticket = book(
            TransportMode::Bus,
            request("B1", Location::Bahia, Location::Ceara),
            &table,
        );
        assert_eq!(ticket.price(), 0.0);
        assert_eq!(ticket.mode(), TransportMode::Bus);
    }

    #[test]
    fn stateless_book_matches_strategy() {
        let table = brazil_distances();
        for mode in TransportMode::ALL {
            let a = book(mode, request("X1", Location::Bahia, Location::Piaui), &table);
            let b = FareStrategy::from(mode).book(
                &table,
                request("X1", Location::Bahia, Location::Piaui),
            );
            assert_eq!(a, b);
        }
    }
}
