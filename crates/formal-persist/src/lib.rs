pub mod client;
pub mod error;
pub mod models;
pub mod repositories;
pub mod seed;

pub use client::PersistClient;
pub use error::PersistError;
pub use models::{ChatMessage, ChatRequest, Document, DocumentCreate, DocumentUpdate, Template};
pub use repositories::{ChatRepository, DocumentRepository, TemplateRepository};
pub use seed::seed_builtin_templates;
