use mongodb::{Client, Collection};

use crate::error::Result;
use crate::models::ChatMessage;

#[derive(Clone)]
pub struct ChatRepository {
    collection: Collection<ChatMessage>,
}

impl ChatRepository {
    pub fn new(client: &Client, db_name: &str) -> Self {
        let collection = client.database(db_name).collection("chat_messages");
        Self { collection }
    }

    /// Persist one request/response pair
    pub async fn save_message(&self, message: &ChatMessage) -> Result<()> {
        self.collection.insert_one(message).await?;
        Ok(())
    }
}
