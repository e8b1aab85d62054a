use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    pub description: String,
    /// LaTeX template content
    pub content: String,
    /// Open string set: academic, business, presentation, ...
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub is_builtin: bool,
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl Template {
    /// Built-in template with a fixed id, seeded by the system
    pub fn builtin(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            content: content.into(),
            category: category.into(),
            preview_image: None,
            created_at: Utc::now(),
            is_builtin: true,
            metadata: HashMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_storage_shape() {
        let template = Template::builtin("template_x", "X", "desc", "academic", "content");
        let stored = bson::to_document(&template).unwrap();

        // count_builtin filters on this flag
        assert_eq!(stored.get_bool("is_builtin").unwrap(), true);
        // absent options are not stored
        assert!(!stored.contains_key("preview_image"));
        assert_eq!(stored.get_str("id").unwrap(), "template_x");
    }
}
