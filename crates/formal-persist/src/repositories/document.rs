use chrono::Utc;
use futures::TryStreamExt;
use mongodb::{bson::doc, Client, Collection};

use crate::error::Result;
use crate::models::{Document, DocumentCreate, DocumentUpdate};

#[derive(Clone)]
pub struct DocumentRepository {
    collection: Collection<Document>,
}

impl DocumentRepository {
    pub fn new(client: &Client, db_name: &str) -> Self {
        let collection = client.database(db_name).collection("documents");
        Self { collection }
    }

    /// Insert a new document built from the create request
    pub async fn create_document(&self, req: DocumentCreate) -> Result<Document> {
        let document = Document::from(req);
        self.collection.insert_one(&document).await?;
        Ok(document)
    }

    /// List documents, newest first
    pub async fn list_documents(&self, skip: u64, limit: i64) -> Result<Vec<Document>> {
        let documents = self
            .collection
            .find(doc! {})
            .sort(doc! { "created_at": -1 })
            .skip(skip)
            .limit(limit)
            .await?
            .try_collect()
            .await?;
        Ok(documents)
    }

    /// Get document by id
    pub async fn get_document(&self, id: &str) -> Result<Option<Document>> {
        let filter = doc! { "id": id };
        Ok(self.collection.find_one(filter).await?)
    }

    /// Apply the fields present in the update; `updated_at` is always
    /// refreshed. Returns `None` when no document matched the id, otherwise
    /// re-reads and returns the post-update record (not atomic with the
    /// update itself).
    pub async fn update_document(
        &self,
        id: &str,
        update: DocumentUpdate,
    ) -> Result<Option<Document>> {
        let set = build_update(&update)?;
        let result = self
            .collection
            .update_one(doc! { "id": id }, doc! { "$set": set })
            .await?;

        if result.matched_count == 0 {
            return Ok(None);
        }

        self.get_document(id).await
    }

    /// Delete document by id. Returns whether a document was removed.
    pub async fn delete_document(&self, id: &str) -> Result<bool> {
        let result = self.collection.delete_one(doc! { "id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}

fn build_update(update: &DocumentUpdate) -> Result<bson::Document> {
    let mut set = bson::Document::new();

    if let Some(title) = &update.title {
        set.insert("title", title.as_str());
    }
    if let Some(content) = &update.content {
        set.insert("content", content.as_str());
    }
    if let Some(tags) = &update.tags {
        set.insert("tags", bson::to_bson(tags)?);
    }
    if let Some(metadata) = &update.metadata {
        set.insert("metadata", bson::to_bson(metadata)?);
    }
    set.insert("updated_at", bson::to_bson(&Utc::now())?);

    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn update_sets_only_present_fields() {
        let update = DocumentUpdate {
            title: Some("New".to_string()),
            ..Default::default()
        };
        let set = build_update(&update).unwrap();

        assert_eq!(set.get_str("title").unwrap(), "New");
        assert!(!set.contains_key("content"));
        assert!(!set.contains_key("tags"));
        assert!(!set.contains_key("metadata"));
        assert!(set.contains_key("updated_at"));
    }

    #[test]
    fn update_always_refreshes_updated_at() {
        let set = build_update(&DocumentUpdate::default()).unwrap();
        assert_eq!(set.len(), 1);
        assert!(set.contains_key("updated_at"));
    }

    #[test]
    fn update_serializes_tags_and_metadata() {
        let mut metadata = HashMap::new();
        metadata.insert("compiler".to_string(), serde_json::json!("pdflatex"));

        let update = DocumentUpdate {
            tags: Some(vec!["draft".to_string(), "math".to_string()]),
            metadata: Some(metadata),
            ..Default::default()
        };
        let set = build_update(&update).unwrap();

        let tags = set.get_array("tags").unwrap();
        assert_eq!(tags.len(), 2);
        let metadata = set.get_document("metadata").unwrap();
        assert_eq!(metadata.get_str("compiler").unwrap(), "pdflatex");
    }
}
