use axum::Json;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CategoryDescriptor {
    pub id: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<CategoryDescriptor>,
}

fn descriptor(id: &str, name: &str, description: &str) -> CategoryDescriptor {
    CategoryDescriptor {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
    }
}

/// The fixed category list; not derived from the store
pub(crate) fn template_categories() -> Vec<CategoryDescriptor> {
    vec![
        descriptor(
            "academic",
            "Academic",
            "Academic papers, theses, and research documents",
        ),
        descriptor(
            "business",
            "Business",
            "Reports, letters, and business documents",
        ),
        descriptor(
            "presentation",
            "Presentation",
            "Slides and presentation materials",
        ),
        descriptor("personal", "Personal", "Personal documents and notes"),
    ]
}

/// Get all available template categories
#[utoipa::path(
    get,
    path = "/api/categories",
    responses((status = 200, description = "Fixed category descriptors")),
    tag = "templates"
)]
pub async fn get_template_categories() -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        categories: template_categories(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_fixed_categories() {
        let categories = template_categories();
        let ids: Vec<_> = categories.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["academic", "business", "presentation", "personal"]);
    }
}
