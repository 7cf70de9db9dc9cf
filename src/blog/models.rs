//! Blog Models
//! Mission: Article wire and storage types

use serde::{Deserialize, Serialize};

/// A stored blog post.
///
/// The wire field names stay Indonesian (`judul`/`konten`/`penulis`) for
/// compatibility with the existing frontend; internal names are English.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: i64,
    #[serde(rename = "judul")]
    pub title: String,
    #[serde(rename = "konten")]
    pub content: String,
    #[serde(rename = "penulis")]
    pub author: String,
}

/// Form body for POST /api/blog.
#[derive(Debug, Deserialize)]
pub struct CreateArticleForm {
    #[serde(rename = "judul", default)]
    pub title: String,
    #[serde(rename = "konten", default)]
    pub content: String,
    #[serde(rename = "penulis", default)]
    pub author: String,
    /// Clients also post the token in the form body and expect it echoed
    /// back in the response. It is independent of the query-parameter token
    /// the gate verified; when absent the echo is null.
    pub datatoken: Option<String>,
}

/// Form body for PUT /api/blog/{id}. No author field: the author is
/// overwritten with the editing user's name from the verified token.
#[derive(Debug, Deserialize)]
pub struct UpdateArticleForm {
    #[serde(rename = "judul", default)]
    pub title: String,
    #[serde(rename = "konten", default)]
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_serializes_with_wire_names() {
        let article = Article {
            id: 1,
            title: "Hello".to_string(),
            content: "World".to_string(),
            author: "bob".to_string(),
        };

        let json = serde_json::to_value(&article).unwrap();
        assert_eq!(json["judul"], "Hello");
        assert_eq!(json["konten"], "World");
        assert_eq!(json["penulis"], "bob");
        assert!(json.get("title").is_none());
    }

    #[test]
    fn test_create_form_accepts_missing_datatoken() {
        let form: CreateArticleForm =
            serde_json::from_str(r#"{"judul":"a","konten":"b","penulis":"c"}"#).unwrap();
        assert_eq!(form.title, "a");
        assert!(form.datatoken.is_none());
    }
}
