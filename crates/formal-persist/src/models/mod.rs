mod chat;
mod document;
mod template;

pub use chat::{ChatMessage, ChatRequest};
pub use document::{Document, DocumentCreate, DocumentUpdate};
pub use template::Template;
