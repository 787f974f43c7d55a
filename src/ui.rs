//! Table editor page: column configuration per editor and the askama template that renders it.
//! Row fetching and the edit modal live in `static/editor.js`, which reads the configuration
//! from each section's data attributes.

use askama::Template;
use serde::Serialize;

pub const EDITOR_SCRIPT: &str = include_str!("../static/editor.js");

/// Input type used by the edit form. Number columns are coerced with `Number(...)` on input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Text,
    Email,
    Number,
}

#[derive(Clone, Debug, Serialize)]
pub struct EditorColumn {
    pub key: &'static str,
    pub label: &'static str,
    #[serde(rename = "type")]
    pub kind: ColumnKind,
}

impl EditorColumn {
    pub fn new(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: ColumnKind::Text,
        }
    }

    pub fn kind(mut self, kind: ColumnKind) -> Self {
        self.kind = kind;
        self
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct EditorConfig {
    pub title: &'static str,
    pub endpoint: &'static str,
    pub columns: Vec<EditorColumn>,
    /// Row click opens the form and saves with PUT `{endpoint}/{id}`.
    pub allow_edit: bool,
    /// Rows get a delete button issuing DELETE `{endpoint}/{id}`.
    pub allow_delete: bool,
}

impl EditorConfig {
    pub fn columns_json(&self) -> String {
        serde_json::to_string(&self.columns).unwrap_or_else(|_| "[]".into())
    }

    /// ID column, configured columns and the action cell.
    pub fn colspan(&self) -> usize {
        self.columns.len() + 2
    }
}

/// Customers support the full edit surface; orders are create-only on the server.
pub fn default_editors() -> Vec<EditorConfig> {
    vec![
        EditorConfig {
            title: "Customers",
            endpoint: "/api/customers",
            columns: vec![
                EditorColumn::new("name", "Name"),
                EditorColumn::new("email", "Email").kind(ColumnKind::Email),
            ],
            allow_edit: true,
            allow_delete: true,
        },
        EditorConfig {
            title: "Orders",
            endpoint: "/api/orders",
            columns: vec![
                EditorColumn::new("customer_name", "Customer Name"),
                EditorColumn::new("total", "Total").kind(ColumnKind::Number),
            ],
            allow_edit: false,
            allow_delete: false,
        },
    ]
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub title: &'a str,
    pub editors: &'a [EditorConfig],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_editors_match_api_surface() {
        let editors = default_editors();
        assert_eq!(editors.len(), 2);

        let customers = &editors[0];
        assert_eq!(customers.endpoint, "/api/customers");
        assert!(customers.allow_edit && customers.allow_delete);
        assert_eq!(customers.columns[1].kind, ColumnKind::Email);

        let orders = &editors[1];
        assert_eq!(orders.endpoint, "/api/orders");
        assert!(!orders.allow_edit && !orders.allow_delete);
        assert_eq!(orders.columns[1].kind, ColumnKind::Number);
        assert_eq!(orders.colspan(), 4);
    }

    #[test]
    fn columns_serialize_for_the_script() {
        let editors = default_editors();
        assert_eq!(
            editors[1].columns_json(),
            r#"[{"key":"customer_name","label":"Customer Name","type":"text"},{"key":"total","label":"Total","type":"number"}]"#
        );
    }

    #[test]
    fn page_renders_one_section_per_editor() {
        let editors = default_editors();
        let html = IndexTemplate {
            title: "Two editable tables",
            editors: &editors,
        }
        .render()
        .unwrap();
        assert_eq!(html.matches("class=\"editor\"").count(), 2);
        assert_eq!(html.matches("data-endpoint=").count(), 2);
        assert!(html.contains("api/customers"));
        assert!(html.contains("data-allow-delete=\"false\""));
        assert!(html.contains("<th>Customer Name</th>"));
        assert!(html.contains("/static/editor.js"));
        assert!(!html.contains("{\"key\""));
    }
}
