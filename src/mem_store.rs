//! An in-process stand-in for the document table, so the handlers can be
//! exercised without a database. Like the real table, it can hold documents
//! of other types and dates in formats we never write.

use super::{
    dates,
    db_ops::{into_sorted_memos, MemoStore},
    errors::StoreError,
    models::{Document, Memo, MEMO_TYPE},
};
use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::Mutex;
use uuid::Uuid;

#[derive(Default)]
pub struct MemStore {
    docs: Mutex<Vec<Document>>,
}

impl MemStore {
    /// Put a document in exactly as given, bypassing all normalization.
    pub async fn insert_raw(&self, doc: Document) {
        self.docs.lock().await.push(doc);
    }

    pub async fn documents(&self) -> Vec<Document> {
        self.docs.lock().await.clone()
    }
}

#[async_trait]
impl MemoStore for MemStore {
    async fn insert(
        &self,
        date: NaiveDate,
        text: &str,
    ) -> Result<Uuid, StoreError> {
        let id = Uuid::new_v4();
        self.insert_raw(Document {
            id,
            r#type: MEMO_TYPE.to_string(),
            date: dates::to_storage(date),
            text: text.to_string(),
        })
        .await;

        Ok(id)
    }

    async fn update(
        &self,
        id: Uuid,
        date: NaiveDate,
        text: &str,
    ) -> Result<bool, StoreError> {
        let mut docs = self.docs.lock().await;
        match docs
            .iter_mut()
            .find(|d| d.id == id && d.r#type == MEMO_TYPE)
        {
            Some(doc) => {
                doc.date = dates::to_storage(date);
                doc.text = text.to_string();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), StoreError> {
        self.docs
            .lock()
            .await
            .retain(|d| !(d.id == id && d.r#type == MEMO_TYPE));

        Ok(())
    }

    async fn delete_all(&self) -> Result<u64, StoreError> {
        let mut docs = self.docs.lock().await;
        let before = docs.len();
        docs.retain(|d| d.r#type != MEMO_TYPE);

        Ok((before - docs.len()) as u64)
    }

    async fn find_all_sorted(&self) -> Result<Vec<Memo>, StoreError> {
        let docs = self.docs.lock().await.clone();

        into_sorted_memos(docs)
    }

    async fn close(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use std::collections::HashSet;

    fn day(offset: i64) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap() + Duration::days(offset)
    }

    fn foreign_doc() -> Document {
        Document {
            id: Uuid::new_v4(),
            r#type: "grocery_list".to_string(),
            date: "whenever".to_string(),
            text: "eggs".to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_then_find() {
        let store = MemStore::default();
        let id = store.insert(day(0), "dentist").await.unwrap();

        let memos = store.find_all_sorted().await.unwrap();
        let matching: Vec<&Memo> =
            memos.iter().filter(|m| m.text == "dentist").collect();
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].id, id);
        assert_eq!(matching[0].date, day(0));
    }

    #[tokio::test]
    async fn test_ids_are_unique() {
        let store = MemStore::default();
        let mut ids = HashSet::new();
        for i in 0..50 {
            ids.insert(store.insert(day(i), "same text").await.unwrap());
        }
        assert_eq!(ids.len(), 50);
    }

    #[tokio::test]
    async fn test_find_all_sorted_orders_past_and_future() {
        let store = MemStore::default();
        for offset in [3, -10, 0, 1, -1, 40, -2] {
            store.insert(day(offset), "x").await.unwrap();
        }
        let memos = store.find_all_sorted().await.unwrap();
        assert_eq!(memos.len(), 7);
        assert!(memos.windows(2).all(|w| w[0].date <= w[1].date));
    }

    #[tokio::test]
    async fn test_find_ignores_other_document_types() {
        let store = MemStore::default();
        store.insert_raw(foreign_doc()).await;
        store.insert(day(0), "mine").await.unwrap();

        let memos = store.find_all_sorted().await.unwrap();
        assert_eq!(memos.len(), 1);
        assert_eq!(memos[0].text, "mine");
    }

    #[tokio::test]
    async fn test_malformed_date_fails_the_listing() {
        let store = MemStore::default();
        store.insert(day(0), "fine").await.unwrap();
        store
            .insert_raw(Document {
                id: Uuid::new_v4(),
                r#type: MEMO_TYPE.to_string(),
                date: "10/16/2026".to_string(),
                text: "legacy".to_string(),
            })
            .await;

        let err = store.find_all_sorted().await.unwrap_err();
        assert!(matches!(err, StoreError::MalformedDate { .. }));
    }

    #[tokio::test]
    async fn test_delete_missing_id_is_a_noop() {
        let store = MemStore::default();
        store.insert(day(0), "keep me").await.unwrap();
        let before = store.find_all_sorted().await.unwrap();

        store.delete_by_id(Uuid::new_v4()).await.unwrap();

        assert_eq!(store.find_all_sorted().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_delete_by_id() {
        let store = MemStore::default();
        let gone = store.insert(day(0), "gone").await.unwrap();
        let kept = store.insert(day(1), "kept").await.unwrap();

        store.delete_by_id(gone).await.unwrap();

        let memos = store.find_all_sorted().await.unwrap();
        assert_eq!(memos.len(), 1);
        assert_eq!(memos[0].id, kept);
    }

    #[tokio::test]
    async fn test_delete_by_id_leaves_foreign_documents() {
        let store = MemStore::default();
        let foreign = foreign_doc();
        let foreign_id = foreign.id;
        store.insert_raw(foreign).await;

        store.delete_by_id(foreign_id).await.unwrap();

        assert_eq!(store.documents().await.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_all() {
        let store = MemStore::default();
        store.insert_raw(foreign_doc()).await;
        for i in 0..3 {
            store.insert(day(i), "x").await.unwrap();
        }

        assert_eq!(store.delete_all().await.unwrap(), 3);
        assert!(store.find_all_sorted().await.unwrap().is_empty());
        // only memos go; the unrelated document survives
        let docs = store.documents().await;
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].r#type, "grocery_list");
    }

    #[tokio::test]
    async fn test_update_replaces_in_place() {
        let store = MemStore::default();
        let id = store.insert(day(0), "old").await.unwrap();

        assert!(store.update(id, day(5), "new").await.unwrap());

        let memos = store.find_all_sorted().await.unwrap();
        assert_eq!(
            memos,
            vec![Memo {
                id,
                date: day(5),
                text: "new".to_string()
            }]
        );
    }

    #[tokio::test]
    async fn test_update_missing_memo() {
        let store = MemStore::default();
        assert!(!store.update(Uuid::new_v4(), day(0), "x").await.unwrap());
        assert!(store.find_all_sorted().await.unwrap().is_empty());
    }
}
