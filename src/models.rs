use super::db_ops::MemoStore;
use chrono::NaiveDate;
use std::sync::Arc;
use uuid::Uuid;

/// Type tag on every document this app owns. The collection may hold other
/// shapes of document, so every query filters on it.
pub const MEMO_TYPE: &str = "dated_memo";

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MemoStore>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memo {
    pub id: Uuid,
    pub date: NaiveDate,
    pub text: String,
}

/// A row of the collection as it is actually stored, before the date has
/// been parsed.
#[derive(Clone, Debug, sqlx::FromRow)]
pub struct Document {
    pub id: Uuid,
    #[sqlx(rename = "type")]
    pub r#type: String,
    pub date: String,
    pub text: String,
}
