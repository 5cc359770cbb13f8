//! [`Case`] list widget.

use std::fmt::Write as _;

use common::RowsPerPage;
use service::{
    domain::{case, Case},
    read::case::list::{Mode, Paginator, State, StatusFilter},
};

use super::{
    format,
    ui::{Button, Column, Indicator, Select, Table},
};
use crate::params::Trigger;

/// Renders the provided [`Paginator`] as an HTML list of [`Case`]s.
///
/// [`Mode::Filtered`] lists are wrapped into a `GET` form submitting to the
/// provided `action` URL, with a [`Trigger`] set by every control.
#[must_use]
pub fn render(list: &Paginator<'_>, action: &str) -> String {
    let rows = list.rows();
    let rows = rows.into_iter().cloned().collect::<Vec<_>>();

    let mut out = String::new();
    if let Mode::Filtered(state) = list.mode() {
        _ = write!(
            out,
            "<form class=\"cases-list\" method=\"get\" action=\"{}\">",
            super::escape(action),
        );
        out.push_str(&toolbar(Some(state)));
        out.push_str(&table(&rows));
        out.push_str(&footer(list, state));
        out.push_str("</form>");
    } else {
        out.push_str("<div class=\"cases-list\">");
        out.push_str(&toolbar(None));
        out.push_str(&table(&rows));
        out.push_str("</div>");
    }
    out
}

/// Renders the legend of all the [`case::Status`]es along with the
/// [`StatusFilter`] select, if the `state` is provided.
fn toolbar(state: Option<State>) -> String {
    let mut out = String::from("<div class=\"toolbar\"><ul class=\"legend\">");
    for status in case::Status::ALL {
        _ = write!(
            out,
            "<li>{}{}</li>",
            Indicator(*status),
            format::status(*status),
        );
    }
    out.push_str("</ul>");

    if let Some(state) = state {
        let select = Select {
            name: "status",
            value: state.filter.to_string(),
            options: StatusFilter::ALL
                .into_iter()
                .map(|f| (f.to_string(), format::status_filter(f).to_owned()))
                .collect(),
        };
        _ = write!(
            out,
            "{select}{}",
            Button {
                name: "action",
                value: Trigger::Filter.as_str(),
                label: "Filtrar",
                disabled: false,
            },
        );
    }

    out.push_str("</div>");
    out
}

/// Renders the [`Case`]s [`Table`].
fn table(cases: &[Case]) -> String {
    Table {
        data: cases,
        row_key: |c: &Case| c.id.to_string(),
        columns: vec![
            Column::new("casestatus", "", |c: &Case| {
                Indicator(c.status).to_string()
            }),
            Column::new("detected", "Detectado", |c: &Case| {
                format::date(&c.detected_at)
            }),
            Column::new("age", "Edad", |c: &Case| format::age(c.age)),
            Column::new("gender", "Género", |c: &Case| {
                format::gender_icon(c.gender).to_owned()
            }),
        ],
    }
    .to_string()
}

/// Renders the [`RowsPerPage`] select and the page controls.
fn footer(list: &Paginator<'_>, state: State) -> String {
    let rows = Select {
        name: "rows",
        value: state.rows_per_page.to_string(),
        options: RowsPerPage::ALL
            .into_iter()
            .map(|n| (n.to_string(), format::rows_per_page(n)))
            .collect(),
    };
    let pages = Select {
        name: "page",
        value: state.page.to_string(),
        options: list
            .pages()
            .map(|p| (p.to_string(), p.to_string()))
            .collect(),
    };

    format!(
        "<div class=\"footer\">{rows}{}<div class=\"buttons\">{}{pages}{}{}\
         </div></div>",
        Button {
            name: "action",
            value: Trigger::Rows.as_str(),
            label: "Aplicar",
            disabled: false,
        },
        Button {
            name: "action",
            value: Trigger::Prev.as_str(),
            label: "&laquo;",
            disabled: !list.has_previous_page(),
        },
        Button {
            name: "action",
            value: Trigger::Page.as_str(),
            label: "Ir",
            disabled: false,
        },
        Button {
            name: "action",
            value: Trigger::Next.as_str(),
            label: "&raquo;",
            disabled: !list.has_next_page(),
        },
    )
}

#[cfg(test)]
mod spec {
    use axum::extract::Query;
    use common::{DateTime, PageNumber, RowsPerPage};
    use service::{
        domain::{case, Case},
        read::case::list::{Mode, Paginator, State, StatusFilter},
    };

    use crate::params::ListParams;

    fn cases() -> Vec<Case> {
        use case::Status::{Active, Dead, Recovered};

        [Active, Active, Recovered, Dead, Active, Recovered, Active]
            .into_iter()
            .enumerate()
            .map(|(i, status)| Case {
                id: format!("case-{i}").into(),
                status,
                detected_at: DateTime::from_unix_timestamp(
                    1_584_316_800 + i64::try_from(i).unwrap() * 86_400,
                )
                .unwrap()
                .coerce(),
                age: (i % 2 == 0).then(|| case::Age::from(30)),
                gender: case::Gender::Female,
            })
            .collect()
    }

    fn count_rows(html: &str) -> usize {
        html.matches("<tr data-key=").count()
    }

    /// Returns the value of the selected `<option>` of the named `<select>`.
    fn selected(html: &str, name: &str) -> String {
        let start = html
            .find(&format!("<select class=\"select\" name=\"{name}\">"))
            .unwrap();
        let select = &html[start..];
        let select = &select[..select.find("</select>").unwrap()];
        let option = select
            .split("<option ")
            .find(|o| o.contains(" selected>"))
            .unwrap();

        option
            .trim_start_matches("value=\"")
            .split('"')
            .next()
            .unwrap()
            .to_owned()
    }

    /// Builds the query string a browser submits when the `action` button
    /// of the rendered form is clicked.
    fn submit(html: &str, action: &str) -> ListParams {
        assert!(
            html.contains(&format!("name=\"action\" value=\"{action}\">")),
            "`{action}` button is missing or disabled",
        );
        let uri = format!(
            "/cases?status={}&rows={}&page={}&action={action}",
            selected(html, "status"),
            selected(html, "rows"),
            selected(html, "page"),
        )
        .parse::<http::Uri>()
        .unwrap();

        Query::<ListParams>::try_from_uri(&uri).unwrap().0
    }

    #[test]
    fn display_only_list_has_no_controls() {
        let cases = cases();
        let html = super::render(&Paginator::new(&cases, Mode::DisplayOnly), "/");

        assert_eq!(count_rows(&html), cases.len());
        assert!(!html.contains("<form"));
        assert!(!html.contains("<select"));
        assert!(!html.contains("casos por página"));
        assert!(html.contains("indicator-dead"));
        assert!(html.contains("16/03/2020"));
        assert!(html.contains("N/D"));
    }

    #[test]
    fn filtered_list_renders_current_page() {
        let cases = cases();
        let state = State {
            filter: StatusFilter::Only(case::Status::Active),
            rows_per_page: RowsPerPage::Five,
            page: PageNumber::FIRST,
        };

        let html =
            super::render(&Paginator::new(&cases, Mode::Filtered(state)), "/cases");

        assert_eq!(count_rows(&html), 4);
        assert!(html.contains("<form class=\"cases-list\" method=\"get\" action=\"/cases\">"));
        assert!(html.contains("<option value=\"active\" selected>"));
        assert!(html.contains("<option value=\"all\">Todos</option>"));
        assert!(html.contains("5 casos por página"));
        assert!(html.contains("value=\"prev\" disabled>"));
        assert!(html.contains("value=\"next\" disabled>"));
    }

    #[test]
    fn enables_next_button_before_last_page() {
        let cases = cases();
        let state = State::default();

        let html =
            super::render(&Paginator::new(&cases, Mode::Filtered(state)), "/cases");

        assert_eq!(count_rows(&html), 5);
        assert!(html.contains("value=\"prev\" disabled>"));
        assert!(html.contains("value=\"next\">&raquo;"));
        assert!(html.contains("<option value=\"2\">2</option>"));
    }

    #[test]
    fn form_carries_each_field_once() {
        let cases = cases();
        let html = super::render(
            &Paginator::new(&cases, Mode::Filtered(State::default())),
            "/cases",
        );

        for name in ["status", "rows", "page"] {
            assert_eq!(html.matches(&format!("name=\"{name}\"")).count(), 1);
        }
        assert!(!html.contains("type=\"hidden\""));
    }

    #[test]
    fn submitted_form_is_applied() {
        let cases = cases();
        let state = State {
            filter: StatusFilter::Only(case::Status::Active),
            ..State::default()
        };
        let html =
            super::render(&Paginator::new(&cases, Mode::Filtered(state)), "/cases");

        for action in ["filter", "rows", "page"] {
            let (resolved, _) = submit(&html, action).resolve();

            assert_eq!(resolved, state, "`{action}` submits another state");
        }

        let html = super::render(
            &Paginator::new(&cases, Mode::Filtered(State::default())),
            "/cases",
        );
        let (resolved, action) = submit(&html, "next").resolve();
        let (list, _) = Paginator::new(&cases, Mode::Filtered(resolved))
            .apply(action.unwrap());

        assert_eq!(list.state().unwrap().page.get(), 2);
        assert_eq!(list.rows().len(), 2);
    }
}
