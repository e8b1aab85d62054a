mod chat;
mod document;
mod template;

pub use chat::ChatRepository;
pub use document::DocumentRepository;
pub use template::TemplateRepository;
