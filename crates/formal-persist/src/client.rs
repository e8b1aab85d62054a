use mongodb::{bson::doc, options::IndexOptions, Client, Database, IndexModel};

use crate::error::{PersistError, Result};
use crate::repositories::{ChatRepository, DocumentRepository, TemplateRepository};

pub struct PersistClient {
    client: Client,
    db: Database,
    document_repo: DocumentRepository,
    template_repo: TemplateRepository,
    chat_repo: ChatRepository,
}

impl PersistClient {
    /// Connect to MongoDB and verify liveness with a ping. A failed ping is
    /// fatal: startup must not proceed against an unreachable store.
    pub async fn connect(mongodb_uri: &str, db_name: &str) -> Result<Self> {
        let client = Client::with_uri_str(mongodb_uri)
            .await
            .map_err(|e| PersistError::Connection(e.to_string()))?;

        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| PersistError::Connection(e.to_string()))?;

        let db = client.database(db_name);
        let document_repo = DocumentRepository::new(&client, db_name);
        let template_repo = TemplateRepository::new(&client, db_name);
        let chat_repo = ChatRepository::new(&client, db_name);

        Ok(Self {
            client,
            db,
            document_repo,
            template_repo,
            chat_repo,
        })
    }

    /// Create collection indexes. Best-effort: each statement is
    /// independent, and a failure is logged as a warning, never raised.
    pub async fn create_indexes(&self) {
        let indexes: [(&str, bson::Document, bool); 8] = [
            ("documents", doc! { "id": 1 }, true),
            ("documents", doc! { "created_at": 1 }, false),
            ("documents", doc! { "tags": 1 }, false),
            ("templates", doc! { "id": 1 }, true),
            ("templates", doc! { "category": 1 }, false),
            ("templates", doc! { "is_builtin": 1 }, false),
            ("chat_messages", doc! { "document_id": 1 }, false),
            ("chat_messages", doc! { "timestamp": 1 }, false),
        ];

        for (collection, keys, unique) in indexes {
            let options = IndexOptions::builder().unique(unique).build();
            let model = IndexModel::builder()
                .keys(keys.clone())
                .options(options)
                .build();

            let result = self
                .db
                .collection::<bson::Document>(collection)
                .create_index(model)
                .await;
            if let Err(e) = result {
                tracing::warn!("Failed to create index {} on {}: {}", keys, collection, e);
            }
        }
    }

    pub fn documents(&self) -> &DocumentRepository {
        &self.document_repo
    }

    pub fn templates(&self) -> &TemplateRepository {
        &self.template_repo
    }

    pub fn chat(&self) -> &ChatRepository {
        &self.chat_repo
    }

    /// Shut the connection down. Called once at process shutdown.
    pub async fn close(&self) {
        self.client.clone().shutdown().await;
        tracing::info!("Disconnected from MongoDB");
    }
}
