//! Blog Module
//! Mission: Article records and their token-gated CRUD endpoints

pub mod api;
pub mod models;
pub mod store;

pub use api::BlogState;
pub use store::ArticleStore;
