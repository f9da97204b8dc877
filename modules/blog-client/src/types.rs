use serde::{Deserialize, Serialize};

/// A blog post in the shape the blog service's create endpoint expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub name: String,
    pub content: String,
    pub posted_by: String,
    /// Image URL shown with the post. May be empty.
    pub img: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blog_post_uses_camel_case_field_names() {
        let post = BlogPost {
            name: "New Product: Lamp".to_string(),
            content: "Discover our latest product".to_string(),
            posted_by: "catalog-service".to_string(),
            img: "https://img.example/lamp.png".to_string(),
        };

        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["postedBy"], "catalog-service");
        assert_eq!(json["img"], "https://img.example/lamp.png");
        assert!(json.get("posted_by").is_none());
    }
}
