//! Search flow: validate, compute radius, geocode, record history

use tracing::{info, warn};

use super::radius::radius;
use crate::error::IsochroneError;
use crate::geocode::GeocodeClient;
use crate::history_store::HistoryRepository;
use crate::models::{Isochrone, NewHistoryEntry, RawQuery};
use crate::validation::validate;

/// Turns raw user input into an [`Isochrone`]
///
/// Validation always runs before the geocoder is called. A successful search
/// is recorded in history when a repository is attached; failing to record it
/// is logged and does not fail the search.
pub struct Planner<'a> {
    geocoder: &'a dyn GeocodeClient,
    history: Option<&'a dyn HistoryRepository>,
}

impl<'a> Planner<'a> {
    pub fn new(geocoder: &'a dyn GeocodeClient) -> Self {
        Self { geocoder, history: None }
    }

    pub fn with_history(mut self, history: &'a dyn HistoryRepository) -> Self {
        self.history = Some(history);
        self
    }

    pub fn plan(&self, raw: &RawQuery) -> Result<Isochrone, IsochroneError> {
        let query = validate(raw)?;
        let radius_meters = radius(query.transport(), query.seconds());

        let place = self.geocoder.geocode(query.location())?;
        info!(
            location = query.location(),
            lat = place.lat,
            lon = place.lon,
            radius_meters,
            "Resolved isochrone"
        );

        if let Some(history) = self.history
            && let Err(e) = history.save(NewHistoryEntry::from(&query))
        {
            warn!("Failed to save search history: {:#}", e);
        }

        Ok(Isochrone {
            place,
            transport: query.transport(),
            time: query.time().to_string(),
            seconds: query.seconds(),
            radius_meters,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use anyhow::anyhow;

    use super::*;
    use crate::geocode::GeocodeError;
    use crate::history_store::{FixedClock, HistoryStore, MemoryBackend};
    use crate::models::{HistoryEntry, Place, TransportMode};

    struct FakeGeocoder {
        result: Result<Place, GeocodeError>,
        calls: Cell<usize>,
    }

    impl FakeGeocoder {
        fn found() -> Self {
            Self { result: Ok(Place::new("Paris, France", 48.8566, 2.3522).unwrap()), calls: Cell::new(0) }
        }

        fn failing(err: GeocodeError) -> Self {
            Self { result: Err(err), calls: Cell::new(0) }
        }
    }

    impl GeocodeClient for FakeGeocoder {
        fn geocode(&self, _query: &str) -> Result<Place, GeocodeError> {
            self.calls.set(self.calls.get() + 1);
            self.result.clone()
        }
    }

    struct BrokenHistory;

    impl HistoryRepository for BrokenHistory {
        fn save(&self, _entry: NewHistoryEntry) -> anyhow::Result<HistoryEntry> {
            Err(anyhow!("disk full"))
        }
        fn list(&self) -> anyhow::Result<Vec<HistoryEntry>> {
            Ok(Vec::new())
        }
        fn delete_one(&self, _timestamp: i64) -> anyhow::Result<()> {
            Ok(())
        }
        fn clear_all(&self) -> anyhow::Result<()> {
            Ok(())
        }
    }

    fn store() -> HistoryStore<MemoryBackend, FixedClock> {
        HistoryStore::with_clock(MemoryBackend::new(), FixedClock::new(1_762_076_480_016))
    }

    #[test]
    fn test_plan_computes_radius_and_records_history() {
        let geocoder = FakeGeocoder::found();
        let history = store();
        let planner = Planner::new(&geocoder).with_history(&history);

        let result = planner.plan(&RawQuery::new(" Paris ", "walking", "10m")).unwrap();
        assert_eq!(result.place.display_name, "Paris, France");
        assert_eq!(result.transport, TransportMode::Walking);
        assert_eq!(result.seconds, 600.0);
        assert!((result.radius_meters - 840.0).abs() < 1e-9);

        let entries = history.list().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].location, "Paris");
        assert_eq!(entries[0].transport, "walking");
        assert_eq!(entries[0].time, "10m");
    }

    #[test]
    fn test_invalid_input_never_reaches_geocoder() {
        let geocoder = FakeGeocoder::found();
        let history = store();
        let planner = Planner::new(&geocoder).with_history(&history);

        let err = planner.plan(&RawQuery::new("Paris", "plane", "10m")).unwrap_err();
        assert_eq!(err.field(), Some("transport"));
        assert_eq!(geocoder.calls.get(), 0);
        assert!(history.list().unwrap().is_empty());
    }

    #[test]
    fn test_not_found_is_not_recorded() {
        let geocoder = FakeGeocoder::failing(GeocodeError::NotFound("Atlantis".to_string()));
        let history = store();
        let planner = Planner::new(&geocoder).with_history(&history);

        let err = planner.plan(&RawQuery::new("Atlantis", "bus", "1h")).unwrap_err();
        assert_eq!(err, IsochroneError::NotFound("Atlantis".to_string()));
        assert!(history.list().unwrap().is_empty());
    }

    #[test]
    fn test_network_failure_maps_to_network_error() {
        let geocoder = FakeGeocoder::failing(GeocodeError::Timeout);
        let planner = Planner::new(&geocoder);

        let err = planner.plan(&RawQuery::new("Paris", "bus", "1h")).unwrap_err();
        assert!(matches!(err, IsochroneError::Network(_)));
        assert!(err.is_retryable());
    }

    #[test]
    fn test_history_failure_does_not_fail_search() {
        let geocoder = FakeGeocoder::found();
        let history = BrokenHistory;
        let planner = Planner::new(&geocoder).with_history(&history);

        assert!(planner.plan(&RawQuery::new("Paris", "cycling", "30s")).is_ok());
    }

    #[test]
    fn test_plan_without_history() {
        let geocoder = FakeGeocoder::found();
        let result = Planner::new(&geocoder).plan(&RawQuery::new("Paris", "driving", "1h")).unwrap();
        assert!((result.radius_meters - 50040.0).abs() < 1e-9);
    }
}
