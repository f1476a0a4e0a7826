use super::AirportRecord;

/// the ordered sequence of airports a user has picked in a session.
/// append-only; the first entry is the implicit route source. duplicates
/// are allowed, so re-selecting an airport inserts a second entry.
#[derive(Debug, Clone, Default)]
pub struct SelectionLog {
    entries: Vec<AirportRecord>,
}

impl SelectionLog {
    pub fn new() -> SelectionLog {
        SelectionLog::default()
    }

    pub fn append(&mut self, record: AirportRecord) {
        log::debug!("appending airport {} to selection log", record.id);
        self.entries.push(record);
    }

    pub fn iter(&self) -> impl Iterator<Item = &AirportRecord> {
        self.entries.iter()
    }

    pub fn first(&self) -> Option<&AirportRecord> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// copies the current contents so a path computation in flight is
    /// unaffected by selections appended after it started.
    pub fn snapshot(&self) -> Vec<AirportRecord> {
        self.entries.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::airport::AirportId;

    #[test]
    fn test_append_preserves_order() {
        let mut log = SelectionLog::new();
        log.append(AirportRecord::new(AirportId(3), "Chicago O'Hare Intl", 41.9742, -87.9073));
        log.append(AirportRecord::new(AirportId(1), "John F Kennedy Intl", 40.6413, -73.7781));
        let ids: Vec<AirportId> = log.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![AirportId(3), AirportId(1)]);
        assert_eq!(log.first().map(|r| r.id), Some(AirportId(3)));
    }

    #[test]
    fn test_duplicate_selection_appends_second_entry() {
        let mut log = SelectionLog::new();
        let jfk = AirportRecord::new(AirportId(1), "John F Kennedy Intl", 40.6413, -73.7781);
        log.append(jfk.clone());
        log.append(jfk);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_snapshot_is_isolated_from_later_appends() {
        let mut log = SelectionLog::new();
        log.append(AirportRecord::new(AirportId(1), "John F Kennedy Intl", 40.6413, -73.7781));
        let snapshot = log.snapshot();
        log.append(AirportRecord::new(AirportId(2), "Los Angeles Intl", 33.9416, -118.4085));
        assert_eq!(snapshot.len(), 1);
        assert_eq!(log.len(), 2);
    }
}
