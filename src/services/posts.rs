use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::services::api::{ApiClient, ApiError, HttpMethod, MultipartField, RequestBody};
use crate::utils::image::SelectedImage;

/// Max post length in characters
pub const POST_MAX_CHARS: usize = 280;

/// Kind of post, drives filtering and the colored badge
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PostType {
    #[default]
    Recommend,
    Help,
    Update,
    Event,
}

impl PostType {
    pub const ALL: [PostType; 4] = [
        PostType::Recommend,
        PostType::Help,
        PostType::Update,
        PostType::Event,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PostType::Recommend => "recommend",
            PostType::Help => "help",
            PostType::Update => "update",
            PostType::Event => "event",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }

    /// Label shown in the compose form's type picker
    pub fn label(&self) -> &'static str {
        match self {
            PostType::Recommend => "📍 Recommend a place",
            PostType::Help => "🆘 Ask for help",
            PostType::Update => "📢 Share update",
            PostType::Event => "🎉 Event announcement",
        }
    }

    /// Label without the leading emoji, used by the filter tabs
    pub fn tab_label(&self) -> &'static str {
        let label = self.label();
        label.split_once(' ').map(|(_, rest)| rest).unwrap_or(label)
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            PostType::Recommend => "bg-green-100 text-green-800",
            PostType::Help => "bg-orange-100 text-orange-800",
            PostType::Update => "bg-blue-100 text-blue-800",
            PostType::Event => "bg-purple-100 text-purple-800",
        }
    }
}

/// Feed filter: everything, or a single post type
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FilterType {
    #[default]
    All,
    Only(PostType),
}

/// Denormalized author snapshot embedded in posts and replies
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub is_verified: bool,
}

impl Author {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    #[serde(rename = "_id")]
    pub id: String,
    pub content: String,
    pub author: Author,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: String,
    pub content: String,
    pub post_type: PostType,
    pub author: Author,
    pub city: String,
    #[serde(default)]
    pub likes: Vec<String>,
    #[serde(default)]
    pub dislikes: Vec<String>,
    #[serde(default)]
    pub replies: Vec<Reply>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl Post {
    pub fn is_liked_by(&self, user_id: Option<&str>) -> bool {
        user_id.is_some_and(|id| self.likes.iter().any(|l| l == id))
    }

    pub fn is_disliked_by(&self, user_id: Option<&str>) -> bool {
        user_id.is_some_and(|id| self.dislikes.iter().any(|d| d == id))
    }
}

#[derive(Deserialize)]
struct PostsFeedResponse {
    posts: Vec<Post>,
}

#[derive(Deserialize)]
struct PostResponse {
    post: Post,
}

/// Filters for one feed request
#[derive(Clone, Debug, PartialEq)]
pub struct FeedQuery {
    pub filter: FilterType,
    /// Selected city; empty means "my city"
    pub city: String,
    pub home_city: String,
}

impl FeedQuery {
    /// Query parameters in request order.
    ///
    /// `postType` is omitted for "all", `city` when empty or equal to the
    /// home city; `sortBy=newest` is always present.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        if let FilterType::Only(post_type) = self.filter {
            params.push(("postType", post_type.as_str().to_string()));
        }
        if !self.city.is_empty() && self.city != self.home_city {
            params.push(("city", self.city.clone()));
        }
        params.push(("sortBy", "newest".to_string()));

        params
    }

    pub fn path(&self) -> String {
        let query_string = self
            .params()
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        format!("/api/posts/feed?{}", query_string)
    }
}

/// Payload for `POST /api/posts`
#[derive(Clone, Debug, PartialEq)]
pub struct NewPost {
    pub content: String,
    pub post_type: PostType,
    pub city: String,
    pub image: Option<SelectedImage>,
}

impl NewPost {
    fn into_fields(self) -> Vec<MultipartField> {
        let mut fields = vec![
            MultipartField::Text {
                name: "content".to_string(),
                value: self.content,
            },
            MultipartField::Text {
                name: "postType".to_string(),
                value: self.post_type.as_str().to_string(),
            },
            MultipartField::Text {
                name: "city".to_string(),
                value: self.city,
            },
        ];

        if let Some(image) = self.image {
            fields.push(MultipartField::File {
                name: "image".to_string(),
                filename: image.name,
                mime_type: image.mime_type,
                data: image.data,
            });
        }

        fields
    }
}

impl ApiClient {
    /// Fetch the filtered feed, newest first
    pub async fn fetch_feed(&self, query: &FeedQuery) -> Result<Vec<Post>, ApiError> {
        let response: PostsFeedResponse = self
            .send(HttpMethod::Get, &query.path(), RequestBody::Empty)
            .await?;
        Ok(response.posts)
    }

    pub async fn create_post(&self, post: NewPost) -> Result<Post, ApiError> {
        let response: PostResponse = self
            .send(
                HttpMethod::Post,
                "/api/posts",
                RequestBody::Multipart(post.into_fields()),
            )
            .await?;
        Ok(response.post)
    }

    /// Toggle the current user's like; returns the updated post
    pub async fn toggle_like(&self, post_id: &str) -> Result<Post, ApiError> {
        self.toggle_reaction(post_id, "like").await
    }

    /// Toggle the current user's dislike; returns the updated post
    pub async fn toggle_dislike(&self, post_id: &str) -> Result<Post, ApiError> {
        self.toggle_reaction(post_id, "dislike").await
    }

    async fn toggle_reaction(&self, post_id: &str, action: &str) -> Result<Post, ApiError> {
        let path = format!("/api/posts/{}/{}", urlencoding::encode(post_id), action);
        let response: PostResponse = self.send(HttpMethod::Post, &path, RequestBody::Empty).await?;
        Ok(response.post)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use serde_json::{json, Value};

    pub fn post_json(id: &str, likes: &[&str]) -> Value {
        json!({
            "_id": id,
            "content": format!("post {}", id),
            "postType": "recommend",
            "author": { "firstName": "Asha", "lastName": "Patel", "isVerified": true },
            "city": "Surat",
            "likes": likes,
            "dislikes": [],
            "replies": [],
            "createdAt": "2024-05-01T10:00:00.000Z"
        })
    }

    pub fn post(id: &str) -> Post {
        serde_json::from_value(post_json(id, &[])).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use crate::services::api::testing::{client, MockTransport};
    use futures::executor::block_on;
    use serde_json::json;

    fn query(filter: FilterType, city: &str) -> FeedQuery {
        FeedQuery {
            filter,
            city: city.to_string(),
            home_city: "Surat".to_string(),
        }
    }

    #[test]
    fn test_feed_query_all_in_home_city() {
        let q = query(FilterType::All, "Surat");
        assert_eq!(q.params(), vec![("sortBy", "newest".to_string())]);
        assert_eq!(q.path(), "/api/posts/feed?sortBy=newest");

        // Empty selection means home city too
        assert_eq!(query(FilterType::All, "").path(), "/api/posts/feed?sortBy=newest");
    }

    #[test]
    fn test_feed_query_type_and_other_city() {
        let q = query(FilterType::Only(PostType::Event), "Mumbai");
        assert_eq!(q.path(), "/api/posts/feed?postType=event&city=Mumbai&sortBy=newest");
    }

    #[test]
    fn test_feed_query_encodes_city() {
        let q = query(FilterType::All, "New Delhi");
        assert_eq!(q.path(), "/api/posts/feed?city=New%20Delhi&sortBy=newest");
    }

    #[test]
    fn test_post_type_labels() {
        assert_eq!(PostType::Help.tab_label(), "Ask for help");
        assert_eq!(PostType::Event.tab_label(), "Event announcement");
        assert_eq!(PostType::from_str("update"), Some(PostType::Update));
        assert_eq!(PostType::from_str("rant"), None);
    }

    #[test]
    fn test_post_deserializes_wire_format() {
        let post: Post = serde_json::from_value(json!({
            "_id": "p1",
            "content": "Best vada pav near the station",
            "postType": "recommend",
            "author": { "_id": "u1", "firstName": "Ravi", "lastName": "Shah", "isVerified": false },
            "city": "Mumbai",
            "likes": ["u2"],
            "dislikes": ["u3"],
            "replies": [{
                "_id": "r1",
                "content": "Agreed!",
                "author": { "firstName": "Meera", "lastName": "Iyer", "isVerified": true },
                "createdAt": "2024-05-01T11:00:00.000Z"
            }],
            "createdAt": "2024-05-01T10:00:00.000Z",
            "image": "https://res.cloudinary.com/demo/p1.jpg",
            "isActive": true
        }))
        .unwrap();

        assert_eq!(post.post_type, PostType::Recommend);
        assert_eq!(post.author.display_name(), "Ravi Shah");
        assert_eq!(post.replies.len(), 1);
        assert!(post.is_liked_by(Some("u2")));
        assert!(post.is_disliked_by(Some("u3")));
        assert!(!post.is_liked_by(None));
    }

    #[test]
    fn test_fetch_feed() {
        let transport = MockTransport::new();
        transport.respond(
            200,
            json!({ "success": true, "message": "", "data": { "posts": [post_json("a", &[]), post_json("b", &[])] } }),
        );

        let posts = block_on(client(&transport).fetch_feed(&query(FilterType::All, "Pune"))).unwrap();

        assert_eq!(posts.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(), vec!["a", "b"]);
        let request = transport.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.url, "http://api.test/api/posts/feed?city=Pune&sortBy=newest");
    }

    #[test]
    fn test_toggle_like_endpoint() {
        let transport = MockTransport::new();
        transport.respond(
            200,
            json!({ "success": true, "message": "", "data": { "post": post_json("p9", &["me"]) } }),
        );

        let post = block_on(client(&transport).toggle_like("p9")).unwrap();

        assert_eq!(post.likes, vec!["me".to_string()]);
        let request = transport.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url, "http://api.test/api/posts/p9/like");
        assert_eq!(request.body, RequestBody::Empty);
    }

    #[test]
    fn test_create_post_multipart_fields() {
        let transport = MockTransport::new();
        transport.respond(
            201,
            json!({ "success": true, "message": "Created", "data": { "post": post_json("new", &[]) } }),
        );

        let new_post = NewPost {
            content: "Lost cat near the lake".to_string(),
            post_type: PostType::Help,
            city: "Pune".to_string(),
            image: Some(SelectedImage {
                name: "cat.png".to_string(),
                mime_type: "image/png".to_string(),
                data: vec![1, 2, 3],
            }),
        };
        block_on(client(&transport).create_post(new_post)).unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.url, "http://api.test/api/posts");
        let RequestBody::Multipart(fields) = request.body else {
            panic!("expected multipart body");
        };
        assert_eq!(fields.len(), 4);
        assert_eq!(
            fields[1],
            MultipartField::Text { name: "postType".to_string(), value: "help".to_string() }
        );
        assert!(matches!(&fields[3], MultipartField::File { filename, .. } if filename == "cat.png"));
    }
}
