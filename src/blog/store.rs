//! Article Storage
//! Mission: Persist blog articles with SQLite

use crate::blog::models::Article;
use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use tracing::info;

/// Article storage with SQLite backend.
pub struct ArticleStore {
    db_path: String,
}

impl ArticleStore {
    /// Create a new article store and initialize the schema.
    pub fn new(db_path: &str) -> Result<Self> {
        let store = Self {
            db_path: db_path.to_string(),
        };
        store.init_db()?;
        Ok(store)
    }

    fn init_db(&self) -> Result<()> {
        let conn = Connection::open(&self.db_path)?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS articles (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                judul TEXT NOT NULL,
                konten TEXT NOT NULL,
                penulis TEXT NOT NULL
            )",
            [],
        )?;

        Ok(())
    }

    /// Insert a new article and return its id.
    pub fn insert(&self, title: &str, content: &str, author: &str) -> Result<i64> {
        let conn = Connection::open(&self.db_path)?;

        conn.execute(
            "INSERT INTO articles (judul, konten, penulis) VALUES (?1, ?2, ?3)",
            params![title, content, author],
        )
        .context("Failed to insert article")?;

        let id = conn.last_insert_rowid();
        info!("Created article #{} by {}", id, author);
        Ok(id)
    }

    /// All articles in storage order. The API exposes no defined sort.
    pub fn list(&self) -> Result<Vec<Article>> {
        let conn = Connection::open(&self.db_path)?;

        let mut stmt = conn.prepare("SELECT id, judul, konten, penulis FROM articles")?;

        let articles = stmt
            .query_map([], |row| {
                Ok(Article {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    content: row.get(2)?,
                    author: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(articles)
    }

    /// Unconditional filtered update. A missing `id` affects zero rows and
    /// is not an error; callers report success either way.
    pub fn update(&self, id: i64, title: &str, content: &str, author: &str) -> Result<()> {
        let conn = Connection::open(&self.db_path)?;

        conn.execute(
            "UPDATE articles SET judul = ?1, konten = ?2, penulis = ?3 WHERE id = ?4",
            params![title, content, author, id],
        )
        .context("Failed to update article")?;

        Ok(())
    }

    /// Delete by id. Absence is tolerated.
    pub fn delete(&self, id: i64) -> Result<()> {
        let conn = Connection::open(&self.db_path)?;

        conn.execute("DELETE FROM articles WHERE id = ?1", params![id])
            .context("Failed to delete article")?;

        info!("Deleted article #{}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn create_test_store() -> (ArticleStore, NamedTempFile) {
        let temp_file = NamedTempFile::new().unwrap();
        let db_path = temp_file.path().to_str().unwrap();
        let store = ArticleStore::new(db_path).unwrap();
        (store, temp_file)
    }

    #[test]
    fn test_insert_and_list_roundtrip() {
        let (store, _temp) = create_test_store();

        let id = store.insert("Hello", "World", "bob").unwrap();

        let articles = store.list().unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].id, id);
        assert_eq!(articles[0].title, "Hello");
        assert_eq!(articles[0].content, "World");
        assert_eq!(articles[0].author, "bob");
    }

    #[test]
    fn test_ids_are_fresh() {
        let (store, _temp) = create_test_store();

        let first = store.insert("a", "b", "c").unwrap();
        let second = store.insert("d", "e", "f").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_update_overwrites_all_fields() {
        let (store, _temp) = create_test_store();

        let id = store.insert("Hello", "World", "bob").unwrap();
        store.update(id, "Hi", "Earth", "carol").unwrap();

        let articles = store.list().unwrap();
        assert_eq!(articles[0].title, "Hi");
        assert_eq!(articles[0].content, "Earth");
        assert_eq!(articles[0].author, "carol");
    }

    #[test]
    fn test_update_missing_id_is_silent_noop() {
        let (store, _temp) = create_test_store();

        let id = store.insert("Hello", "World", "bob").unwrap();

        // Does not error and leaves existing rows untouched.
        store.update(id + 100, "Hi", "Earth", "carol").unwrap();

        let articles = store.list().unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "Hello");
    }

    #[test]
    fn test_delete_missing_id_is_tolerated() {
        let (store, _temp) = create_test_store();

        let id = store.insert("Hello", "World", "bob").unwrap();
        store.delete(id + 100).unwrap();
        assert_eq!(store.list().unwrap().len(), 1);

        store.delete(id).unwrap();
        assert!(store.list().unwrap().is_empty());
    }
}
