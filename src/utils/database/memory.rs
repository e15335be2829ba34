use super::{Collection, Record, StoreError};
use async_trait::async_trait;
use tokio::sync::RwLock;

/// In-memory collection. `None` once the collection has been closed.
pub struct MemoryCollection<T> {
    records: RwLock<Option<Vec<T>>>,
}

impl<T> MemoryCollection<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Some(vec![])),
        }
    }
}

impl<T> Default for MemoryCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> Collection<T> for MemoryCollection<T> {
    async fn all(&self) -> Result<Vec<T>, StoreError> {
        let records = self.records.read().await;
        records.as_ref().cloned().ok_or(StoreError::Closed)
    }

    async fn find(&self, id: &str) -> Result<Option<T>, StoreError> {
        let records = self.records.read().await;
        let records = records.as_ref().ok_or(StoreError::Closed)?;

        Ok(records.iter().find(|record| record.id() == id).cloned())
    }

    async fn append(&self, record: T) -> Result<T, StoreError> {
        let mut records = self.records.write().await;
        let records = records.as_mut().ok_or(StoreError::Closed)?;

        if records.iter().any(|existing| existing.id() == record.id()) {
            return Err(StoreError::Duplicate(record.id().to_string()));
        }

        records.push(record.clone());
        Ok(record)
    }

    async fn replace(&self, record: T) -> Result<Option<T>, StoreError> {
        let mut records = self.records.write().await;
        let records = records.as_mut().ok_or(StoreError::Closed)?;

        Ok(records
            .iter_mut()
            .find(|existing| existing.id() == record.id())
            .map(|existing| {
                *existing = record.clone();
                record
            }))
    }

    async fn remove(&self, id: &str) -> Result<Option<T>, StoreError> {
        let mut records = self.records.write().await;
        let records = records.as_mut().ok_or(StoreError::Closed)?;

        Ok(records
            .iter()
            .position(|record| record.id() == id)
            .map(|index| records.remove(index)))
    }

    async fn len(&self) -> Result<usize, StoreError> {
        let records = self.records.read().await;
        records.as_ref().map(Vec::len).ok_or(StoreError::Closed)
    }

    async fn close(&self) {
        self.records.write().await.take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        id: String,
        body: &'static str,
    }

    impl Record for Note {
        fn id(&self) -> &str {
            &self.id
        }
    }

    fn note(id: &str, body: &'static str) -> Note {
        Note {
            id: id.to_string(),
            body,
        }
    }

    #[tokio::test]
    async fn keeps_insertion_order_across_replace_and_remove() {
        let notes = MemoryCollection::new();
        notes.append(note("a", "first")).await.unwrap();
        notes.append(note("b", "second")).await.unwrap();
        notes.append(note("c", "third")).await.unwrap();

        let replaced = notes.replace(note("b", "changed")).await.unwrap();
        assert_eq!(replaced, Some(note("b", "changed")));

        let removed = notes.remove("a").await.unwrap();
        assert_eq!(removed, Some(note("a", "first")));

        assert_eq!(
            notes.all().await.unwrap(),
            vec![note("b", "changed"), note("c", "third")]
        );
    }

    #[tokio::test]
    async fn rejects_duplicate_ids() {
        let notes = MemoryCollection::new();
        notes.append(note("a", "first")).await.unwrap();

        let result = notes.append(note("a", "again")).await;
        assert!(matches!(result, Err(StoreError::Duplicate(id)) if id == "a"));
        assert_eq!(notes.len().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn missing_ids_are_not_errors() {
        let notes: MemoryCollection<Note> = MemoryCollection::new();

        assert_eq!(notes.find("nope").await.unwrap(), None);
        assert_eq!(notes.replace(note("nope", "x")).await.unwrap(), None);
        assert_eq!(notes.remove("nope").await.unwrap(), None);
    }

    #[tokio::test]
    async fn closed_collection_fails_every_call() {
        let notes = MemoryCollection::new();
        notes.append(note("a", "first")).await.unwrap();
        notes.close().await;

        assert!(matches!(notes.all().await, Err(StoreError::Closed)));
        assert!(matches!(notes.find("a").await, Err(StoreError::Closed)));
        assert!(matches!(
            notes.append(note("b", "second")).await,
            Err(StoreError::Closed)
        ));
        assert!(matches!(notes.len().await, Err(StoreError::Closed)));
    }
}
