use futures::TryStreamExt;
use mongodb::{bson::doc, Client, Collection};

use crate::error::Result;
use crate::models::Template;

#[derive(Clone)]
pub struct TemplateRepository {
    collection: Collection<Template>,
}

impl TemplateRepository {
    pub fn new(client: &Client, db_name: &str) -> Self {
        let collection = client.database(db_name).collection("templates");
        Self { collection }
    }

    /// List templates sorted by name, optionally filtered by exact category
    pub async fn list_templates(&self, category: Option<&str>) -> Result<Vec<Template>> {
        let mut filter = doc! {};
        if let Some(category) = category {
            filter.insert("category", category);
        }

        let templates = self
            .collection
            .find(filter)
            .sort(doc! { "name": 1 })
            .await?
            .try_collect()
            .await?;
        Ok(templates)
    }

    /// Get template by id
    pub async fn get_template(&self, id: &str) -> Result<Option<Template>> {
        let filter = doc! { "id": id };
        Ok(self.collection.find_one(filter).await?)
    }

    /// Count templates seeded by the system
    pub async fn count_builtin(&self) -> Result<u64> {
        let count = self
            .collection
            .count_documents(doc! { "is_builtin": true })
            .await?;
        Ok(count)
    }

    pub async fn insert_template(&self, template: &Template) -> Result<()> {
        self.collection.insert_one(template).await?;
        Ok(())
    }
}
