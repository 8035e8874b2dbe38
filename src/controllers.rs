use super::{
    components,
    components::Component,
    dates,
    errors::ServerError,
    humanize,
    models::AppState,
};
use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue, StatusCode, Uri},
    response::IntoResponse,
    Form,
};
use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

fn redirect_home() -> (StatusCode, HeaderMap) {
    let mut headers = HeaderMap::new();
    headers.insert(header::LOCATION, HeaderValue::from_static("/"));

    (StatusCode::FOUND, headers)
}

fn parse_memo_date(raw: &str) -> Result<NaiveDate, ServerError> {
    dates::parse_user_date(raw).ok_or_else(|| {
        ServerError::BadRequest(format!("{raw:?} is not a date we understand"))
    })
}

pub async fn root(
    State(AppState { store }): State<AppState>,
) -> Result<impl IntoResponse, ServerError> {
    log::debug!("main page entry");
    let memos = store.find_all_sorted().await?;
    for memo in &memos {
        log::debug!("memo: {:?}", memo);
    }

    Ok(components::Page {
        title: "Memos".to_string(),
        children: Box::new(components::Home {
            memos,
            today: humanize::today(),
        }),
    }
    .render())
}

pub async fn create() -> impl IntoResponse {
    log::debug!("create");
    components::Page {
        title: "New memo".to_string(),
        children: Box::new(components::CreateForm {}),
    }
    .render()
}

#[derive(Deserialize)]
pub struct SaveForm {
    #[serde(rename = "memoDate")]
    memo_date: String,
    #[serde(rename = "memoText")]
    memo_text: String,
}
pub async fn save(
    State(AppState { store }): State<AppState>,
    Form(SaveForm {
        memo_date,
        memo_text,
    }): Form<SaveForm>,
) -> Result<impl IntoResponse, ServerError> {
    let date = parse_memo_date(&memo_date)?;
    let id = store.insert(date, &memo_text).await?;
    log::debug!("saved memo {id}");

    Ok(redirect_home())
}

#[derive(Deserialize)]
pub struct UpdateForm {
    #[serde(rename = "ObjectID")]
    id: Uuid,
    #[serde(rename = "memoDate")]
    memo_date: String,
    #[serde(rename = "memoText")]
    memo_text: String,
}
pub async fn update(
    State(AppState { store }): State<AppState>,
    Form(UpdateForm {
        id,
        memo_date,
        memo_text,
    }): Form<UpdateForm>,
) -> Result<impl IntoResponse, ServerError> {
    let date = parse_memo_date(&memo_date)?;
    if store.update(id, date, &memo_text).await? {
        log::debug!("updated memo {id}");
    } else {
        log::warn!("memo {id} was not there to update");
    }

    Ok(redirect_home())
}

#[derive(Deserialize)]
pub struct IdForm {
    #[serde(rename = "ObjectID")]
    id: Uuid,
}
pub async fn delete(
    State(AppState { store }): State<AppState>,
    Form(IdForm { id }): Form<IdForm>,
) -> Result<impl IntoResponse, ServerError> {
    store.delete_by_id(id).await?;
    log::debug!("deleted memo {id}");

    Ok(redirect_home())
}

pub async fn clear(
    State(AppState { store }): State<AppState>,
) -> Result<impl IntoResponse, ServerError> {
    let count = store.delete_all().await?;
    log::debug!("cleared {count} memos");

    Ok(redirect_home())
}

#[derive(Deserialize)]
pub struct EditForm {
    #[serde(rename = "ObjectID")]
    id: Uuid,
    date: String,
    text: String,
}
/// Doesn't touch the store; the list page hands us everything we need to
/// pre-populate the form.
pub async fn edit(
    Form(EditForm { id, date, text }): Form<EditForm>,
) -> Result<impl IntoResponse, ServerError> {
    let display_date = dates::edit_display(&date).map_err(|e| {
        ServerError::BadRequest(format!("cannot edit date {date:?}: {e}"))
    })?;
    log::debug!("edit {id}");

    Ok(components::Page {
        title: "Edit memo".to_string(),
        children: Box::new(components::EditForm {
            id,
            label: humanize::humanize_raw(&date, humanize::today()),
            date: display_date,
            text,
        }),
    }
    .render())
}

pub async fn not_found(uri: Uri) -> impl IntoResponse {
    log::debug!("page not found: {uri}");
    (
        StatusCode::NOT_FOUND,
        components::Page {
            title: "Page not found".to_string(),
            children: Box::new(components::PageNotFound {
                bad_url: uri.path().to_string(),
                link_back: "/",
            }),
        }
        .render(),
    )
}
