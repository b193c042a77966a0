//! Askama templates and their view structs.

use askama::Template;
use askama_web::WebTemplate;

use crate::client::ClientState;

/// One table row.
#[derive(Debug, Clone)]
pub struct RowView {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// The edit-overlay card.
#[derive(Debug, Clone)]
pub struct EditorView {
    pub title: &'static str,
    pub name: String,
    pub email: String,
}

/// The whole directory page: table, overlay, notice banner.
#[derive(Template, WebTemplate)]
#[template(path = "directory.html")]
pub struct DirectoryPage {
    pub users: Vec<RowView>,
    pub editor: Option<EditorView>,
    pub notice: Option<String>,
    pub loading: bool,
}

impl From<&ClientState> for DirectoryPage {
    fn from(state: &ClientState) -> Self {
        let users = state
            .users()
            .iter()
            .map(|u| RowView {
                id: u.id.to_string(),
                name: u.name.clone(),
                email: u.email.clone(),
            })
            .collect();

        let editor = state.editor().map(|editor| EditorView {
            title: if editor.editing.is_some() {
                "Edit User"
            } else {
                "Create User"
            },
            name: editor.draft.name.clone(),
            email: editor.draft.email.clone(),
        });

        Self {
            users,
            editor,
            notice: state.notice().map(ToString::to_string),
            loading: state.loading(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_page_renders_rows_and_overlay() {
        let page = DirectoryPage {
            users: vec![RowView {
                id: "00000000-0000-0000-0000-000000000000".to_owned(),
                name: "Ada".to_owned(),
                email: "ada@x.com".to_owned(),
            }],
            editor: Some(EditorView {
                title: "Edit User",
                name: "Ada".to_owned(),
                email: "ada@x.com".to_owned(),
            }),
            notice: Some("Request failed: boom".to_owned()),
            loading: false,
        };

        let html = page.render().unwrap();
        assert!(html.contains("Ada"));
        assert!(html.contains("ada@x.com"));
        assert!(html.contains("Edit User"));
        assert!(html.contains("Request failed: boom"));
    }

    #[test]
    fn test_page_escapes_user_content() {
        let page = DirectoryPage {
            users: vec![RowView {
                id: "id".to_owned(),
                name: "<script>alert(1)</script>".to_owned(),
                email: "x@x.com".to_owned(),
            }],
            editor: None,
            notice: None,
            loading: false,
        };

        let html = page.render().unwrap();
        assert!(!html.contains("<script>alert(1)</script>"));
    }
}
