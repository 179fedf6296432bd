//! Users API Demo
//!
//! Demonstrates restbind resources against a JSONPlaceholder-style API.

// Demo-specific lint allowances
#![allow(missing_docs)]
#![allow(clippy::unused_async)]
#![allow(clippy::print_stdout)]
#![allow(dead_code)]

use std::sync::LazyLock;

use restbind::interceptors::BearerAuthInterceptor;
use restbind::prelude::*;
use serde_json::json;

// ============================================================================
// Data Types
// ============================================================================

/// A user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
}

/// A blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    pub user_id: u64,
    pub title: String,
}

/// Filter for post listings.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    #[serde(rename = "_limit", skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

// ============================================================================
// Resources
// ============================================================================

/// Users collection, CRUD defaults plus a nested listing.
pub struct Users {
    base_url: String,
    defaults: Headers,
}

static USER_BINDINGS: LazyLock<MethodBindingSet> = LazyLock::new(|| {
    MethodBindingSet::builder()
        .with_crud()
        .bind(
            "posts",
            MethodBinding::get("/{id}/posts").path("id", 0).query(1),
        )
        .bind(
            "avatar",
            MethodBinding::get("/{id}/avatar")
                .path("id", 0)
                .static_header("Accept", "image/png")
                .produces(MediaType::Raw),
        )
        .build()
        .unwrap_or_default()
});

impl Users {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            defaults: [("Accept", "application/json")].into_iter().collect(),
        }
    }
}

impl Resource for Users {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn default_headers(&self) -> &Headers {
        &self.defaults
    }

    fn bindings(&self) -> &MethodBindingSet {
        &USER_BINDINGS
    }
}

/// Typed facade over the users resource.
pub struct UsersApi<T> {
    client: ResourceClient<Users, T>,
}

impl<T: Transport> UsersApi<T> {
    pub const fn new(client: ResourceClient<Users, T>) -> Self {
        Self { client }
    }

    pub async fn user(&self, id: u64) -> restbind::Result<User> {
        self.client.find_one(&id).await?.deserialize()
    }

    pub async fn create(&self, name: &str, email: &str) -> restbind::Result<User> {
        self.client
            .save(&json!({"name": name, "email": email}))
            .await?
            .deserialize()
    }

    pub async fn posts(&self, id: u64, filter: &PostFilter) -> restbind::Result<Vec<Post>> {
        self.client
            .invoke("posts", &args![id, filter]?)
            .await?
            .deserialize()
    }
}

// ============================================================================
// Main: Demonstrate usage
// ============================================================================

/// Service authenticating every call with `token`.
fn authenticated(token: &str) -> HttpService<HyperTransport> {
    HttpService::new(
        HyperTransport::new(),
        InterceptorPipeline::builder()
            .interceptor(BearerAuthInterceptor::new(token))
            .build(),
    )
}

#[tokio::main]
async fn main() -> restbind::Result<()> {
    let users = ResourceClient::new(
        Users::new("https://jsonplaceholder.typicode.com/users"),
        authenticated("demo-token"),
    );

    println!("Users resource created!");
    println!("Base URL: {}", users.resource().base_url());

    // Requests are synthesized without touching the network
    println!("\n=== Synthesized requests ===");
    let filter = PostFilter {
        user_id: None,
        limit: Some(5),
    };
    for (method, args) in [
        ("find_one", args![1]?),
        ("save", args![json!({"name": "Ada", "email": "ada@example.com"})]?),
        ("posts", args![1, filter]?),
        ("avatar", args![1]?),
    ] {
        let request = users.request(method, &args)?;
        let query = request.query().to_query_string()?;
        println!(
            "{method:>8}: {} {}{}{}",
            request.method(),
            request.url(),
            if query.is_empty() { "" } else { "?" },
            query
        );
    }

    Ok(())
}

// ============================================================================
// Tests using wiremock
// ============================================================================
