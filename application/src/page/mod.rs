//! Server-rendered HTML pages.

pub mod format;
pub mod list;
pub mod ui;

use std::{borrow::Cow, convert::Infallible, fmt::Write as _};

use axum::{
    extract::{rejection::QueryRejection, Query},
    response::Html,
    Extension,
};
use service::{
    command::LogEvent,
    domain::MetaTag,
    query,
    read::{
        self,
        case::{
            list::{Mode, Paginator},
            Stats,
        },
    },
    Command as _, Query as _,
};
use tracing as log;

use crate::{params::ListParams, AsError, Error, Service};

use self::ui::Section;

/// Title of every page.
const TITLE: &str = "Casos";

/// Home page handler.
pub async fn home(
    Extension(service): Extension<Service>,
) -> Result<Html<String>, Error> {
    let home = service
        .execute(query::HomePage)
        .await
        .map_err(AsError::into_error)?;

    Ok(Html(render_home(&home)))
}

/// Interactive [`Case`] list handler.
///
/// [`Case`]: service::domain::Case
pub async fn cases(
    Extension(service): Extension<Service>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Html<String>, Error> {
    let Query(params) = params.map_err(AsError::into_error)?;
    let cases = service
        .execute(query::cases::All)
        .await
        .map_err(AsError::into_error)?;

    let (state, action) = params.resolve();
    let mut list = Paginator::new(&cases, Mode::Filtered(state));
    if let Some(action) = action {
        let (applied, event) = list.apply(action);
        list = applied;
        if let Some(event) = event {
            service
                .execute(LogEvent(event))
                .await
                .unwrap_or_else(|e: Infallible| match e {});
        }
    }
    log::debug!(state = ?list.state(), "rendering cases list");

    Ok(Html(layout(
        &[],
        &Section {
            title: "Casos",
            content: &list::render(&list, "/cases"),
        }
        .to_string(),
    )))
}

/// Renders the [`read::Home`] page.
#[must_use]
pub fn render_home(home: &read::Home) -> String {
    let stats = Section {
        title: "Estadísticas generales",
        content: &render_stats(home.stats()),
    };
    let recent = Section {
        title: "Casos recientes",
        content: &list::render(
            &Paginator::new(&home.recent_cases, Mode::DisplayOnly),
            "/",
        ),
    };

    layout(
        &home.meta,
        &format!("{stats}{recent}<a class=\"more\" href=\"/cases\">Todos los casos</a>"),
    )
}

/// Renders the error page of the provided [`Error`].
#[must_use]
pub fn error(err: &Error) -> String {
    layout(
        &[],
        &format!(
            "<section class=\"error\"><h2>{}</h2><p>{}</p></section>",
            err.status_code,
            escape(&err.message),
        ),
    )
}

/// Renders the provided [`Stats`].
fn render_stats(stats: Stats) -> String {
    let Stats {
        total,
        active,
        recovered,
        dead,
    } = stats;

    [
        ("total", "Total", total),
        ("active", "Activos", active),
        ("recovered", "Recuperados", recovered),
        ("dead", "Fallecidos", dead),
    ]
    .into_iter()
    .fold(
        String::from("<dl class=\"stats\">"),
        |mut out, (key, title, count)| {
            _ = write!(
                out,
                "<div class=\"stat stat-{key}\"><dt>{title}</dt>\
                 <dd>{count}</dd></div>",
            );
            out
        },
    ) + "</dl>"
}

/// Wraps the provided `body` into a complete HTML document having the
/// provided [`MetaTag`]s in its `<head>`.
fn layout(meta: &[MetaTag], body: &str) -> String {
    let mut head = String::new();
    for tag in meta {
        let attr = if tag.name.starts_with("og:") {
            "property"
        } else {
            "name"
        };
        _ = write!(
            head,
            "<meta {attr}=\"{}\" content=\"{}\">",
            escape(&tag.name),
            escape(&tag.content),
        );
    }

    format!(
        "<!DOCTYPE html><html lang=\"es\"><head><meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, \
         initial-scale=1\"><title>{TITLE}</title>{head}</head>\
         <body><main>{body}</main></body></html>",
    )
}

/// Escapes the provided text to be safely inserted into HTML.
#[must_use]
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}
