use crate::config::NOTES_KEY;
use crate::model::{Note, NoteId};
use crate::storage::{NoteStorage, StoreError};
use crate::util::cwarn;

/// Ordered note list, most recent first, mirrored to one storage slot after every mutation.
#[derive(Debug)]
pub struct NoteStore<S: NoteStorage> {
    notes: Vec<Note>,
    storage: S,
}

impl<S: NoteStorage> NoteStore<S> {
    /// Never fails: a missing, unreadable or malformed slot loads as an empty list.
    pub fn load(storage: S) -> Self {
        let notes = match Self::read_notes(&storage) {
            Ok(notes) => notes,
            Err(e) => {
                cwarn(&format!("starting with no notes: {}", e));
                Vec::new()
            }
        };
        Self { notes, storage }
    }

    fn read_notes(storage: &S) -> Result<Vec<Note>, StoreError> {
        match storage.read(NOTES_KEY)? {
            Some(raw) => serde_json::from_str::<Option<Vec<Note>>>(&raw)
                .map(Option::unwrap_or_default)
                .map_err(StoreError::Decode),
            None => Ok(Vec::new()),
        }
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        let raw = serde_json::to_string(&self.notes).map_err(StoreError::Encode)?;
        self.storage.write(NOTES_KEY, &raw)
    }

    /// Id for a note created at `now_ms`, kept strictly above every existing id.
    /// A stored id of `i64::MAX` leaves no room above it; the first free id from `now_ms` is used then.
    pub fn next_id(&self, now_ms: i64) -> NoteId {
        match self.notes.iter().map(|n| n.id.0).max() {
            Some(newest) if newest >= now_ms => match newest.checked_add(1) {
                Some(id) => NoteId(id),
                None => {
                    cwarn("note ids exhausted above the newest note, reusing a free slot");
                    let free = (now_ms..=i64::MAX)
                        .chain((i64::MIN..now_ms).rev())
                        .find(|c| self.find_by_id(NoteId(*c)).is_none());
                    NoteId(free.unwrap_or(now_ms))
                }
            },
            _ => NoteId(now_ms),
        }
    }

    pub fn add(&mut self, note: Note) -> Result<(), StoreError> {
        self.notes.insert(0, note);
        self.persist()
    }

    /// Returns whether a note was removed. The list is written back either way.
    pub fn remove(&mut self, id: NoteId) -> Result<bool, StoreError> {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);
        let removed = self.notes.len() != before;
        self.persist()?;
        Ok(removed)
    }

    pub fn all(&self) -> &[Note] {
        &self.notes
    }

    pub fn find_by_id(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Coords;
    use crate::storage::{FailingStorage, MemoryStorage};

    fn note(id: i64, title: &str) -> Note {
        Note {
            id: NoteId(id),
            title: title.into(),
            date: "2024-05-01".into(),
            status: "pending".into(),
            coords: Coords::new(39.9, 32.8),
        }
    }

    fn persisted(mem: &MemoryStorage) -> Vec<Note> {
        serde_json::from_str(&mem.get(NOTES_KEY).unwrap()).unwrap()
    }

    #[test]
    fn add_into_empty_store_persists_one_note() {
        let mem = MemoryStorage::new();
        let mut store = NoteStore::load(mem.clone());
        let now = 1714521600123;
        let id = store.next_id(now);
        assert_eq!(id, NoteId(now));
        store.add(note(id.0, "Trip")).unwrap();

        assert_eq!(store.all().len(), 1);
        assert_eq!(store.all()[0].id, NoteId(now));
        let saved = persisted(&mem);
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0], store.all()[0]);
    }

    #[test]
    fn notes_come_back_most_recent_first() {
        let mut store = NoteStore::load(MemoryStorage::new());
        for t in [100, 150, 150, 90, 400] {
            let id = store.next_id(t);
            store.add(note(id.0, "n")).unwrap();
        }
        let ids: Vec<i64> = store.all().iter().map(|n| n.id.0).collect();
        assert!(ids.windows(2).all(|w| w[0] > w[1]), "{:?}", ids);
        assert_eq!(ids, vec![400, 152, 151, 150, 100]);
    }

    #[test]
    fn remove_keeps_order_of_the_rest() {
        let mem = MemoryStorage::new();
        let mut store = NoteStore::load(mem.clone());
        for id in [100, 200, 300] {
            store.add(note(id, "n")).unwrap();
        }
        assert!(store.remove(NoteId(200)).unwrap());

        let ids: Vec<i64> = store.all().iter().map(|n| n.id.0).collect();
        assert_eq!(ids, vec![300, 100]);
        assert!(store.find_by_id(NoteId(200)).is_none());
        assert!(persisted(&mem).iter().all(|n| n.id != NoteId(200)));
    }

    #[test]
    fn remove_accepts_ids_parsed_from_strings() {
        let mut store = NoteStore::load(MemoryStorage::new());
        store.add(note(200, "n")).unwrap();
        let id: NoteId = "200".parse().unwrap();
        assert!(store.remove(id).unwrap());
        assert!(store.is_empty());
    }

    #[test]
    fn removing_an_unknown_id_still_writes_the_list() {
        let mem = MemoryStorage::new();
        let mut store = NoteStore::load(mem.clone());
        store.add(note(100, "n")).unwrap();
        let mut other = mem.clone();
        other.write(NOTES_KEY, "stale").unwrap();

        assert!(!store.remove(NoteId(999)).unwrap());
        assert_eq!(store.len(), 1);
        assert_eq!(persisted(&mem), store.all());
    }

    #[test]
    fn reload_yields_identical_sequence() {
        let mem = MemoryStorage::new();
        let mut store = NoteStore::load(mem.clone());
        store.add(note(1, "a")).unwrap();
        store.add(note(2, "b")).unwrap();
        store.add(note(3, "c")).unwrap();

        let reloaded = NoteStore::load(mem);
        assert_eq!(reloaded.all(), store.all());
    }

    #[test]
    fn malformed_or_null_slot_loads_empty() {
        let store = NoteStore::load(MemoryStorage::with_item(NOTES_KEY, "{not json"));
        assert!(store.is_empty());
        let store = NoteStore::load(MemoryStorage::with_item(NOTES_KEY, "null"));
        assert!(store.is_empty());
        let store = NoteStore::load(MemoryStorage::with_item(NOTES_KEY, r#"[{"id":"x"}]"#));
        assert!(store.is_empty());
    }

    #[test]
    fn loads_notes_written_by_an_earlier_session() {
        let raw = r#"[{"id":300,"title":"Trip","date":"2024-05-01","status":"done","coords":[39.9,32.8]}]"#;
        let store = NoteStore::load(MemoryStorage::with_item(NOTES_KEY, raw));
        let found = store.find_by_id(NoteId(300)).unwrap();
        assert_eq!(found.title, "Trip");
        assert_eq!(found.coords, Coords::new(39.9, 32.8));
    }

    #[test]
    fn newest_id_at_i64_max_does_not_overflow() {
        let raw = format!(
            r#"[{{"id":{},"title":"Uç","date":"2024-05-01","status":"done","coords":[1.0,2.0]}}]"#,
            i64::MAX
        );
        let mut store = NoteStore::load(MemoryStorage::with_item(NOTES_KEY, &raw));
        assert_eq!(store.len(), 1);

        let id = store.next_id(5);
        assert_eq!(id, NoteId(5));
        store.add(note(id.0, "n")).unwrap();
        assert_eq!(store.next_id(5), NoteId(6));
        assert_eq!(store.next_id(i64::MAX), NoteId(i64::MAX - 1));
    }

    #[test]
    fn unreadable_backend_loads_empty() {
        let store = NoteStore::load(FailingStorage);
        assert!(store.is_empty());
        assert_eq!(store.next_id(7), NoteId(7));
    }

    #[test]
    fn failed_write_keeps_the_change_in_memory() {
        let mut store = NoteStore::load(FailingStorage);
        let err = store.add(note(1, "a")).unwrap_err();
        assert!(matches!(err, StoreError::Write(_)));
        assert_eq!(store.len(), 1);
        assert!(store.find_by_id(NoteId(1)).is_some());

        assert!(store.remove(NoteId(1)).is_err());
        assert!(store.is_empty());
    }
}
