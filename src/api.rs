//! ==============================================================================
//! api.rs - post index client
//! ==============================================================================
//!
//! purpose:
//!     fetches the static post index produced by the content build and
//!     served beside the app bundle. the frontend never processes post
//!     bodies; it only lists what the build published.
//!
//! ==============================================================================

use gloo_net::http::Request;
use serde::Deserialize;

/// static asset emitted by the content build
pub const POST_INDEX_URL: &str = "/posts.json";

// ==============================================================================
// post index types
// ==============================================================================

/// one published post, as listed in the index
#[derive(Debug, Clone, Deserialize)]
pub struct PostSummary {
    pub title: String,
    /// site-relative path to the rendered post
    pub path: String,
    /// publication date, preformatted by the build
    pub date: String,
    #[serde(default)]
    pub summary: String,
}

// ==============================================================================
// api functions
// ==============================================================================

/// Fetch the post index
pub async fn fetch_post_index() -> Result<Vec<PostSummary>, String> {
    Request::get(POST_INDEX_URL)
        .send()
        .await
        .map_err(|e| e.to_string())?
        .json::<Vec<PostSummary>>()
        .await
        .map_err(|e| e.to_string())
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_summary_deserialization() {
        let json = r#"{
            "title": "Sharding the gig queue",
            "path": "/posts/sharding-the-gig-queue/",
            "date": "2018-03-14",
            "summary": "What we learned moving the queue off a single node."
        }"#;
        let post: PostSummary = serde_json::from_str(json).unwrap();
        assert_eq!(post.title, "Sharding the gig queue");
        assert_eq!(post.path, "/posts/sharding-the-gig-queue/");
        assert_eq!(post.summary, "What we learned moving the queue off a single node.");
    }

    #[test]
    fn test_post_summary_missing_summary_defaults_empty() {
        let json = r#"{"title": "Hello", "path": "/posts/hello/", "date": "2018-01-02"}"#;
        let post: PostSummary = serde_json::from_str(json).unwrap();
        assert!(post.summary.is_empty());
    }

    #[test]
    fn test_post_summary_ignores_unknown_fields() {
        // older index builds carried extra metadata
        let json = r#"{"title": "Hello", "path": "/p/", "date": "2018-01-02", "author": "sam"}"#;
        let post: PostSummary = serde_json::from_str(json).unwrap();
        assert_eq!(post.title, "Hello");
    }

    #[test]
    fn test_post_index_is_a_json_array() {
        let json = r#"[
            {"title": "A", "path": "/posts/a/", "date": "2018-01-02"},
            {"title": "B", "path": "/posts/b/", "date": "2018-02-03"}
        ]"#;
        let posts: Vec<PostSummary> = serde_json::from_str(json).unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[1].title, "B");
    }
}
