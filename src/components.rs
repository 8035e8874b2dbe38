// In many cases, we need to do a let binding to satisfy the borrow checker
// and for some reason, clippy identifies those as unnecessary. Maybe there
// are and clippy knows more than me, maybe not.
#![allow(clippy::let_and_return)]

use super::{dates, humanize, models};
use ammonia::clean_text;
use chrono::NaiveDate;
use uuid::Uuid;

const STYLE: &str = r#"
    body { font-family: sans-serif; max-width: 40rem; margin: 2rem auto; }
    .memo { display: flex; gap: 1rem; align-items: baseline; padding: 0.5rem 0; border-bottom: 1px solid #ddd; }
    .memo-date { min-width: 9rem; }
    .memo-date small { display: block; color: #666; }
    .memo-text { flex: 1; white-space: pre-wrap; }
    form.inline { display: inline; }
"#;

pub trait Component {
    /// Render the component to a HTML string. By convention, the
    /// implementation should sanitize all string properties at render-time
    fn render(&self) -> String;
}

pub struct Page<'a> {
    pub title: String,
    pub children: Box<dyn Component + 'a>,
}

impl Component for Page<'_> {
    fn render(&self) -> String {
        format!(
            r#"<!DOCTYPE html>
            <html>
                <head>
                    <meta name="viewport" content="width=device-width, initial-scale=1.0"></meta>
                    <title>{title}</title>
                    <style>{STYLE}</style>
                </head>
                <body>
                    {body_html}
                </body>
            </html>
            "#,
            title = clean_text(&self.title),
            body_html = self.children.render()
        )
    }
}

/// The list of every memo, soonest first.
pub struct Home {
    pub memos: Vec<models::Memo>,
    pub today: NaiveDate,
}
impl Component for Home {
    fn render(&self) -> String {
        let memos = if self.memos.is_empty() {
            r#"<p class="empty">No memos yet.</p>"#.to_string()
        } else {
            self.memos
                .iter()
                .map(|memo| {
                    MemoItem {
                        memo,
                        today: self.today,
                    }
                    .render()
                })
                .collect::<Vec<String>>()
                .join("")
        };
        format!(
            r#"
            <main>
                <h1>Memos</h1>
                <p><a href="/create">New memo</a></p>
                <div id="memos">{memos}</div>
                <form method="POST" action="/_clear">
                    <button>Clear all</button>
                </form>
            </main>
            "#
        )
    }
}

pub struct MemoItem<'a> {
    pub memo: &'a models::Memo,
    pub today: NaiveDate,
}
impl Component for MemoItem<'_> {
    fn render(&self) -> String {
        let text = clean_text(&self.memo.text);
        format!(
            r#"
            <div class="memo">
                <div class="memo-date">
                    {label}
                    <small>{long_date}</small>
                </div>
                <div class="memo-text">{text}</div>
                <form class="inline" method="POST" action="/_edit">
                    <input type="hidden" name="ObjectID" value="{id}" />
                    <input type="hidden" name="date" value="{edit_date}" />
                    <input type="hidden" name="text" value="{text}" />
                    <button>Edit</button>
                </form>
                <form class="inline" method="POST" action="/_delete">
                    <input type="hidden" name="ObjectID" value="{id}" />
                    <button>Delete</button>
                </form>
            </div>
            "#,
            label = humanize::humanize(self.memo.date, self.today),
            long_date = dates::long_display(self.memo.date),
            edit_date = dates::to_edit_input(self.memo.date),
            id = self.memo.id,
        )
    }
}

pub struct CreateForm {}
impl Component for CreateForm {
    fn render(&self) -> String {
        r#"
        <main>
            <h1>New memo</h1>
            <form method="POST" action="/_save">
                <p>
                    <label for="memoDate">Date</label>
                    <input type="date" name="memoDate" id="memoDate" required />
                </p>
                <p>
                    <label for="memoText">Memo</label>
                    <textarea name="memoText" id="memoText" rows="4" cols="40"></textarea>
                </p>
                <button>Save</button>
                <a href="/">Cancel</a>
            </form>
        </main>
        "#
        .to_string()
    }
}

/// Edit form, pre-populated with the memo the user clicked on.
pub struct EditForm {
    pub id: Uuid,
    /// Already in `MM-DD-YYYY` form.
    pub date: String,
    pub label: String,
    pub text: String,
}
impl Component for EditForm {
    fn render(&self) -> String {
        format!(
            r#"
            <main>
                <h1>Edit memo</h1>
                <form method="POST" action="/_update">
                    <input type="hidden" name="ObjectID" value="{id}" />
                    <p>
                        <label for="memoDate">Date ({label})</label>
                        <input type="text" name="memoDate" id="memoDate" value="{date}" required />
                    </p>
                    <p>
                        <label for="memoText">Memo</label>
                        <textarea name="memoText" id="memoText" rows="4" cols="40">{text}</textarea>
                    </p>
                    <button>Update</button>
                    <a href="/">Cancel</a>
                </form>
            </main>
            "#,
            id = self.id,
            label = clean_text(&self.label),
            date = clean_text(&self.date),
            text = clean_text(&self.text),
        )
    }
}

pub struct PageNotFound {
    pub bad_url: String,
    pub link_back: &'static str,
}
impl Component for PageNotFound {
    fn render(&self) -> String {
        format!(
            r#"
            <main>
                <h1>Page not found</h1>
                <p>There is nothing at <code>{bad_url}</code>.</p>
                <p><a href="{link_back}">Back to the memos</a></p>
            </main>
            "#,
            bad_url = clean_text(&self.bad_url),
            link_back = self.link_back
        )
    }
}

pub struct BadRequest {
    pub message: String,
}
impl Component for BadRequest {
    fn render(&self) -> String {
        format!(
            r#"
            <main>
                <h1>Bad request</h1>
                <p>{message}</p>
                <p><a href="/">Back to the memos</a></p>
            </main>
            "#,
            message = clean_text(&self.message)
        )
    }
}
