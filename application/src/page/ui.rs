//! Reusable HTML widgets.

use std::fmt;

use derive_more::Debug;
use service::domain::case;

use super::escape;

/// Column of a [`Table`].
#[derive(Debug)]
pub struct Column<'a, T> {
    /// Key identifying this [`Column`].
    pub key: &'static str,

    /// Title shown in the table header.
    pub title: &'static str,

    /// Renders the cell content of this [`Column`] for a row.
    ///
    /// Returned content is inserted as is, so must be already escaped.
    #[debug(skip)]
    pub content: Box<dyn Fn(&T) -> String + 'a>,
}

impl<'a, T> Column<'a, T> {
    /// Creates a new [`Column`].
    pub fn new(
        key: &'static str,
        title: &'static str,
        content: impl Fn(&T) -> String + 'a,
    ) -> Self {
        Self {
            key,
            title,
            content: Box::new(content),
        }
    }
}

/// Generic table rendering a list of `T`s row by row.
#[derive(Debug)]
pub struct Table<'a, T> {
    /// Rows of this [`Table`].
    pub data: &'a [T],

    /// Returns a unique key of a row.
    #[debug(skip)]
    pub row_key: fn(&T) -> String,

    /// [`Column`]s of this [`Table`].
    pub columns: Vec<Column<'a, T>>,
}

impl<T> fmt::Display for Table<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<table class=\"table\"><thead><tr>")?;
        for col in &self.columns {
            write!(
                f,
                "<th data-key=\"{}\">{}</th>",
                col.key,
                escape(col.title),
            )?;
        }
        f.write_str("</tr></thead><tbody>")?;
        for row in self.data {
            write!(f, "<tr data-key=\"{}\">", escape(&(self.row_key)(row)))?;
            for col in &self.columns {
                write!(f, "<td>{}</td>", (col.content)(row))?;
            }
            f.write_str("</tr>")?;
        }
        f.write_str("</tbody></table>")
    }
}

/// `<select>` element submitting its value under the provided `name`.
#[derive(Clone, Debug)]
pub struct Select {
    /// Name of the submitted value.
    pub name: &'static str,

    /// Currently selected value.
    pub value: String,

    /// Available `(value, label)` options.
    pub options: Vec<(String, String)>,
}

impl fmt::Display for Select {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<select class=\"select\" name=\"{}\">", self.name)?;
        for (value, label) in &self.options {
            let selected = if *value == self.value { " selected" } else { "" };
            write!(
                f,
                "<option value=\"{}\"{selected}>{}</option>",
                escape(value),
                escape(label),
            )?;
        }
        f.write_str("</select>")
    }
}

/// Submit `<button>` element.
#[derive(Clone, Copy, Debug)]
pub struct Button<'a> {
    /// Name of the submitted value.
    pub name: &'static str,

    /// Submitted value.
    pub value: &'static str,

    /// Label of this [`Button`], inserted as is.
    pub label: &'a str,

    /// Indicator whether this [`Button`] is disabled.
    pub disabled: bool,
}

impl fmt::Display for Button<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<button class=\"button\" type=\"submit\" name=\"{}\" \
             value=\"{}\"{}>{}</button>",
            self.name,
            self.value,
            if self.disabled { " disabled" } else { "" },
            self.label,
        )
    }
}

/// Colored dot indicating a [`case::Status`].
#[derive(Clone, Copy, Debug)]
pub struct Indicator(pub case::Status);

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<span class=\"indicator indicator-{}\" title=\"{}\"></span>",
            self.0.as_str(),
            super::format::status(self.0),
        )
    }
}

/// Titled section of a page.
#[derive(Clone, Copy, Debug)]
pub struct Section<'a> {
    /// Title of this [`Section`].
    pub title: &'a str,

    /// Content of this [`Section`], inserted as is.
    pub content: &'a str,
}

impl fmt::Display for Section<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<section class=\"section\"><h2>{}</h2>{}</section>",
            escape(self.title),
            self.content,
        )
    }
}

#[cfg(test)]
mod spec {
    use service::domain::case::Status;

    use super::{Button, Column, Indicator, Select, Table};

    #[test]
    fn renders_table_rows_by_columns() {
        let data: [(u8, &str); 2] = [(1, "uno"), (2, "<dos>")];
        let table = Table {
            data: &data,
            row_key: |row: &(u8, &str)| row.0.to_string(),
            columns: vec![
                Column::new("n", "Número", |row: &(u8, &str)| row.0.to_string()),
                Column::new("name", "Nombre", |row: &(u8, &str)| {
                    super::escape(row.1).into_owned()
                }),
            ],
        };

        let html = table.to_string();

        assert!(html.contains("<th data-key=\"n\">Número</th>"));
        assert!(html.contains("<tr data-key=\"1\"><td>1</td><td>uno</td></tr>"));
        assert!(html.contains("<td>&lt;dos&gt;</td>"));
    }

    #[test]
    fn marks_selected_option() {
        let select = Select {
            name: "rows",
            value: "10".into(),
            options: vec![
                ("5".into(), "5".into()),
                ("10".into(), "10".into()),
            ],
        };

        let html = select.to_string();

        assert!(html.contains("<option value=\"5\">5</option>"));
        assert!(html.contains("<option value=\"10\" selected>10</option>"));
    }

    #[test]
    fn renders_disabled_button() {
        let enabled = Button {
            name: "action",
            value: "next",
            label: "&raquo;",
            disabled: false,
        };
        let disabled = Button {
            disabled: true,
            ..enabled
        };

        assert!(!enabled.to_string().contains("disabled"));
        assert!(disabled.to_string().contains(" disabled>&raquo;</button>"));
    }

    #[test]
    fn indicates_status() {
        assert!(Indicator(Status::Dead)
            .to_string()
            .contains("indicator-dead"));
    }
}
