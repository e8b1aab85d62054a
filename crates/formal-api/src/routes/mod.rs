pub mod categories;
pub mod chat;
pub mod docs;
pub mod documents;
pub mod health;
pub mod templates;
