//! Resource Endpoints
//!
//! URL layout of a paginated resource on the board server.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use crate::item_id::ItemId;

/// Paths (and the JSON key prefix) of one paginated resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    /// Prefix of the keys in the parameters payload (`posts` -> `posts_count`)
    pub prefix: String,
    pub parameters: String,
    pub items: String,
    /// Base of `DELETE {delete}/{id}`; `None` when items cannot be removed
    #[serde(default)]
    pub delete: Option<String>,
    /// Like toggle endpoint; `None` when items carry no like control
    #[serde(default)]
    pub like: Option<String>,
    /// Restrict the listing to the signed-in user's items
    #[serde(default)]
    pub for_user: Option<bool>,
}

impl Endpoints {
    /// Posts on the "leave a message" board
    pub fn posts() -> Self {
        Self {
            prefix: "posts".to_string(),
            parameters: "/leave_message/posts/parameters".to_string(),
            items: "/leave_message/posts/load_posts".to_string(),
            delete: Some("/leave_message/posts/delete".to_string()),
            like: Some("/leave_message/like".to_string()),
            for_user: None,
        }
    }

    /// Public files, optionally only those owned by the current user
    pub fn public_files(for_user: bool) -> Self {
        Self {
            prefix: "public_files".to_string(),
            parameters: "/public_files/parameters".to_string(),
            items: "/public_files/load_files".to_string(),
            delete: None,
            like: None,
            for_user: Some(for_user),
        }
    }

    pub fn parameters_url(&self) -> String {
        let mut query = Query::default();
        query.for_user(self.for_user);
        query.append_to(&self.parameters)
    }

    pub fn page_url(&self, page: u32) -> String {
        let mut query = Query::default();
        query.push("page", page);
        query.for_user(self.for_user);
        query.append_to(&self.items)
    }

    /// The item that slid into the tail of `page` after a removal.
    pub fn refill_url(&self, page: u32) -> String {
        let mut query = Query::default();
        query.push("page", page);
        query.push("index", -1);
        query.for_user(self.for_user);
        query.append_to(&self.items)
    }

    pub fn delete_url(&self, id: ItemId) -> Option<String> {
        self.delete
            .as_ref()
            .map(|base| format!("{}/{}", base.trim_end_matches('/'), id))
    }

    pub fn like_url(&self, post_id: &str, page: Option<u32>) -> Option<String> {
        let base = self.like.as_ref()?;
        let mut query = Query::default();
        query.push("post_id", utf8_percent_encode(post_id, NON_ALPHANUMERIC));
        if let Some(page) = page {
            query.push("page", page);
        }
        Some(query.append_to(base))
    }
}

#[derive(Default)]
struct Query(Vec<String>);

impl Query {
    fn push(&mut self, key: &str, value: impl std::fmt::Display) {
        self.0.push(format!("{}={}", key, value));
    }

    fn for_user(&mut self, for_user: Option<bool>) {
        if let Some(flag) = for_user {
            self.push("for_user", u8::from(flag));
        }
    }

    fn append_to(self, path: &str) -> String {
        if self.0.is_empty() {
            path.to_string()
        } else {
            format!("{}?{}", path, self.0.join("&"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posts_urls() {
        let ep = Endpoints::posts();
        assert_eq!(ep.parameters_url(), "/leave_message/posts/parameters");
        assert_eq!(ep.page_url(2), "/leave_message/posts/load_posts?page=2");
        assert_eq!(ep.refill_url(3), "/leave_message/posts/load_posts?page=3&index=-1");
        assert_eq!(
            ep.delete_url(ItemId(42)).as_deref(),
            Some("/leave_message/posts/delete/42")
        );
        assert_eq!(
            ep.like_url("7", Some(2)).as_deref(),
            Some("/leave_message/like?post_id=7&page=2")
        );
    }

    #[test]
    fn test_public_files_carry_for_user() {
        let ep = Endpoints::public_files(true);
        assert_eq!(ep.parameters_url(), "/public_files/parameters?for_user=1");
        assert_eq!(ep.page_url(1), "/public_files/load_files?page=1&for_user=1");
        assert_eq!(ep.delete_url(ItemId(1)), None);
        assert_eq!(ep.like_url("1", None), None);

        let ep = Endpoints::public_files(false);
        assert_eq!(ep.page_url(4), "/public_files/load_files?page=4&for_user=0");
    }

    #[test]
    fn test_like_post_id_is_encoded() {
        let ep = Endpoints::posts();
        assert_eq!(
            ep.like_url("1&x=2", None).as_deref(),
            Some("/leave_message/like?post_id=1%26x%3D2")
        );
    }

    #[test]
    fn test_deserialize_override() {
        let ep: Endpoints = serde_json::from_str(
            r#"{"prefix":"posts","parameters":"/leave_message/posts_parameters","items":"/leave_message/posts"}"#,
        )
        .unwrap();
        assert_eq!(ep.page_url(1), "/leave_message/posts?page=1");
        assert_eq!(ep.delete, None);
    }
}
