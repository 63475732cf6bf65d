use super::{AnalysisRecord, AnalysisStore, PersistenceError};
use std::sync::RwLock;

/// history held in process memory.
#[derive(Debug, Default)]
pub struct InMemoryAnalysisStore {
    records: RwLock<Vec<AnalysisRecord>>,
}

impl InMemoryAnalysisStore {
    pub fn new() -> InMemoryAnalysisStore {
        InMemoryAnalysisStore::default()
    }

    pub fn len(&self) -> Result<usize, PersistenceError> {
        let records = self
            .records
            .read()
            .map_err(|e| PersistenceError::LockError(e.to_string()))?;
        Ok(records.len())
    }

    pub fn is_empty(&self) -> Result<bool, PersistenceError> {
        Ok(self.len()? == 0)
    }
}

impl From<Vec<AnalysisRecord>> for InMemoryAnalysisStore {
    fn from(records: Vec<AnalysisRecord>) -> Self {
        InMemoryAnalysisStore {
            records: RwLock::new(records),
        }
    }
}

impl AnalysisStore for InMemoryAnalysisStore {
    fn save(&self, records: &[AnalysisRecord]) -> Result<(), PersistenceError> {
        let mut stored = self
            .records
            .write()
            .map_err(|e| PersistenceError::LockError(e.to_string()))?;
        stored.extend_from_slice(records);
        Ok(())
    }

    fn find_by_route_id(&self, route_id: &str) -> Result<Vec<AnalysisRecord>, PersistenceError> {
        let stored = self
            .records
            .read()
            .map_err(|e| PersistenceError::LockError(e.to_string()))?;
        Ok(stored
            .iter()
            .filter(|r| r.matches_route(route_id))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod test {
    use super::InMemoryAnalysisStore;
    use crate::model::persistence::{AnalysisRecord, AnalysisStore};
    use chrono::{TimeZone, Utc};

    fn record(route_id: &str, travel_time_s: f64) -> AnalysisRecord {
        AnalysisRecord {
            timestamp: Utc.with_ymd_and_hms(2024, 5, 6, 8, 30, 0).unwrap(),
            route_id: String::from(route_id),
            origin: String::from("a"),
            destination: String::from("b"),
            travel_time_s,
            no_traffic_s: 1000.0,
            delay_s: (travel_time_s - 1000.0).max(0.0),
            length_m: 5000.0,
            calculated_cost: travel_time_s,
            ml_predicted: None,
            hour_of_day: 8,
            day_of_week: 0,
            month: 5,
        }
    }

    #[test]
    fn test_route_lookup() {
        let store = InMemoryAnalysisStore::new();
        store
            .save(&[
                record("a→b_route0", 1100.0),
                record("a→b_route1", 1200.0),
                record("a→c_route0", 1300.0),
            ])
            .expect("save should succeed");
        let found = store.find_by_route_id("a→b").expect("lookup should succeed");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].travel_time_s, 1100.0);
        let one = store
            .find_by_route_id("a→c_route0")
            .expect("lookup should succeed");
        assert_eq!(one.len(), 1);
        assert_eq!(store.len().expect("len should succeed"), 3);
    }

    #[test]
    fn test_lookup_does_not_mix_pairs_sharing_a_prefix() {
        let store = InMemoryAnalysisStore::from(vec![
            record("Saket→Noida Sector 18_route0", 1100.0),
            record("Saket→Noida Sector 1_route0", 1200.0),
            record("Saket→Noida Sector 1_route1", 1300.0),
        ]);
        let sector_1 = store
            .find_by_route_id("Saket→Noida Sector 1")
            .expect("lookup should succeed");
        let ids = sector_1.iter().map(|r| r.route_id.as_str()).collect::<Vec<_>>();
        assert_eq!(
            ids,
            vec!["Saket→Noida Sector 1_route0", "Saket→Noida Sector 1_route1"]
        );
        let sector_18 = store
            .find_by_route_id("Saket→Noida Sector 18")
            .expect("lookup should succeed");
        assert_eq!(sector_18.len(), 1);
        assert_eq!(sector_18[0].travel_time_s, 1100.0);
    }

    #[test]
    fn test_concurrent_saves() {
        let store = InMemoryAnalysisStore::new();
        std::thread::scope(|s| {
            for i in 0..4 {
                let store = &store;
                s.spawn(move || {
                    let id = format!("a→b_route{i}");
                    store
                        .save(&[record(&id, 1000.0)])
                        .expect("save should succeed");
                });
            }
        });
        assert_eq!(store.len().expect("len should succeed"), 4);
    }
}
