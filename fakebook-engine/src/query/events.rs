use std::collections::{BTreeMap, HashMap};

use fakebook_types::{CityId, EventStateInfo};

use super::QueryEngine;
use crate::error::QueryResult;
use crate::store::DatasetStore;

impl<S: DatasetStore + ?Sized> QueryEngine<'_, S> {
    /// The state(s) hosting the most events, with that event count
    pub fn event_heavy_states(&self) -> QueryResult<EventStateInfo> {
        let cities = self.store.cities()?;
        let events = self.store.events()?;

        let state_of: HashMap<CityId, &str> = cities
            .iter()
            .map(|city| (city.id, city.state_name.as_str()))
            .collect();

        let mut per_state: BTreeMap<&str, u64> = BTreeMap::new();
        for state in events.iter().filter_map(|event| state_of.get(&event.city_id).copied()) {
            *per_state.entry(state).or_default() += 1;
        }

        let Some(event_count) = per_state.values().copied().max() else {
            return Ok(EventStateInfo::default());
        };

        let states = per_state
            .into_iter()
            .filter(|(_, count)| *count == event_count)
            .map(|(state, _)| state.to_string())
            .collect();

        Ok(EventStateInfo {
            event_count,
            states,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::fixtures::{city, event, sample_snapshot, FailingStore};
    use crate::store::Snapshot;

    #[test]
    fn test_event_heavy_states_keeps_ties() {
        let snapshot = sample_snapshot();
        let info = QueryEngine::new(&snapshot).event_heavy_states().unwrap();
        assert_eq!(info.event_count, 2);
        assert_eq!(info.states, vec!["Illinois", "Michigan"]);
    }

    #[test]
    fn test_event_heavy_states_single_winner() {
        let snapshot = Snapshot {
            cities: vec![city(1, "Austin", "Texas"), city(2, "Reno", "Nevada")],
            events: vec![event(1, 1), event(2, 1), event(3, 2)],
            ..Default::default()
        };
        let info = QueryEngine::new(&snapshot).event_heavy_states().unwrap();
        assert_eq!(info.event_count, 2);
        assert_eq!(info.states, vec!["Texas"]);
    }

    #[test]
    fn test_event_heavy_states_without_events() {
        let snapshot = Snapshot {
            cities: vec![city(1, "Austin", "Texas")],
            ..Default::default()
        };
        let info = QueryEngine::new(&snapshot).event_heavy_states().unwrap();
        assert_eq!(info, EventStateInfo::default());
    }

    #[test]
    fn test_event_heavy_states_data_access() {
        let err = QueryEngine::new(&FailingStore)
            .event_heavy_states()
            .unwrap_err();
        assert!(err.is_data_access());
    }
}
