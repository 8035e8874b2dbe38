use super::{
    config, dates,
    errors::StoreError,
    models::{Document, Memo, MEMO_TYPE},
};
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{postgres::PgPoolOptions, query, query_as, PgPool};
use uuid::Uuid;

type Result<T> = std::result::Result<T, StoreError>;

/// Everything the handlers need from the memo collection. Implementations
/// only ever touch documents tagged with [`MEMO_TYPE`].
#[async_trait]
pub trait MemoStore: Send + Sync {
    async fn insert(&self, date: NaiveDate, text: &str) -> Result<Uuid>;
    /// Replace the date and text of an existing memo in one step. Returns
    /// `false` if there was no such memo.
    async fn update(&self, id: Uuid, date: NaiveDate, text: &str)
        -> Result<bool>;
    /// Deleting an id that does not exist is fine.
    async fn delete_by_id(&self, id: Uuid) -> Result<()>;
    /// Returns how many memos were removed.
    async fn delete_all(&self) -> Result<u64>;
    async fn find_all_sorted(&self) -> Result<Vec<Memo>>;
    async fn close(&self);
}

/// Pick the memos out of a batch of documents, parse their stored dates, and
/// sort by date. One bad date spoils the whole batch; there are no partial
/// listings.
pub fn into_sorted_memos(docs: Vec<Document>) -> Result<Vec<Memo>> {
    let mut memos = docs
        .into_iter()
        .filter(|doc| doc.r#type == MEMO_TYPE)
        .map(|doc| match dates::parse_stored(&doc.date) {
            Ok(date) => Ok(Memo {
                id: doc.id,
                date,
                text: doc.text,
            }),
            Err(source) => Err(StoreError::MalformedDate {
                id: doc.id,
                value: doc.date,
                source,
            }),
        })
        .collect::<Result<Vec<Memo>>>()?;
    memos.sort_by_key(|m| m.date);

    Ok(memos)
}

pub struct PgMemoStore {
    db: PgPool,
}

impl PgMemoStore {
    /// Connect and bring the schema up to date. Any failure here means we
    /// have no database to talk to.
    pub async fn connect(db_url: &str) -> Result<Self> {
        let db = PgPoolOptions::new()
            .max_connections(config::DB_MAX_CONNECTIONS)
            .connect(db_url)
            .await
            .map_err(StoreError::StorageUnavailable)?;
        sqlx::migrate!().run(&db).await?;

        Ok(Self { db })
    }
}

#[async_trait]
impl MemoStore for PgMemoStore {
    async fn insert(&self, date: NaiveDate, text: &str) -> Result<Uuid> {
        let id = Uuid::new_v4();
        query(
            "insert into document (id, type, date, text)
            values ($1, $2, $3, $4)",
        )
        .bind(id)
        .bind(MEMO_TYPE)
        .bind(dates::to_storage(date))
        .bind(text)
        .execute(&self.db)
        .await?;

        Ok(id)
    }

    async fn update(
        &self,
        id: Uuid,
        date: NaiveDate,
        text: &str,
    ) -> Result<bool> {
        let res = query(
            "
            update document
            set
                date = $1,
                text = $2
            where id = $3 and type = $4
            ",
        )
        .bind(dates::to_storage(date))
        .bind(text)
        .bind(id)
        .bind(MEMO_TYPE)
        .execute(&self.db)
        .await?;

        Ok(res.rows_affected() > 0)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<()> {
        query("delete from document where id = $1 and type = $2")
            .bind(id)
            .bind(MEMO_TYPE)
            .execute(&self.db)
            .await?;

        Ok(())
    }

    async fn delete_all(&self) -> Result<u64> {
        let res = query("delete from document where type = $1")
            .bind(MEMO_TYPE)
            .execute(&self.db)
            .await?;

        Ok(res.rows_affected())
    }

    async fn find_all_sorted(&self) -> Result<Vec<Memo>> {
        let docs = query_as::<_, Document>(
            "select id, type, date, text from document
            where type = $1
            order by date, id",
        )
        .bind(MEMO_TYPE)
        .fetch_all(&self.db)
        .await?;

        into_sorted_memos(docs)
    }

    async fn close(&self) {
        self.db.close().await;
    }
}
