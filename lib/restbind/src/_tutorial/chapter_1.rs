//! # Chapter 1: Method Bindings
//!
//! How to declare methods beyond the CRUD defaults.
//!
//! A method binding is an HTTP verb, a path template and the role of each
//! positional argument. Bindings are built once per resource type, usually in
//! a `static`, and shared by every call.
//!
//! ## Declaring Bindings
//!
//! ```ignore
//! use std::sync::LazyLock;
//!
//! use restbind::prelude::*;
//!
//! static REPOS: LazyLock<MethodBindingSet> = LazyLock::new(|| {
//!     MethodBindingSet::builder()
//!         .with_crud()
//!         .bind(
//!             "issues",
//!             MethodBinding::get("/{owner}/{repo}/issues")
//!                 .path("owner", 0)
//!                 .path("repo", 1)
//!                 .query(2),
//!         )
//!         .build()
//!         .expect("valid bindings")
//! });
//!
//! struct Repos;
//!
//! impl Resource for Repos {
//!     fn base_url(&self) -> &str {
//!         "https://api.example.com/repos"
//!     }
//!
//!     fn bindings(&self) -> &MethodBindingSet {
//!         &REPOS
//!     }
//! }
//! ```
//!
//! ## Calling a Bound Method
//!
//! ```ignore
//! let repos = ResourceClient::new(Repos, HttpService::bare(HyperTransport::new()));
//!
//! // GET https://api.example.com/repos/rust-lang/rust/issues?state=open&labels=A&labels=B
//! let issues = repos
//!     .invoke(
//!         "issues",
//!         &args!["rust-lang", "rust", json!({"state": "open", "labels": ["A", "B"]})]?,
//!     )
//!     .await?;
//! ```
//!
//! ## Parameter Roles
//!
//! | Builder | Role | Effect |
//! |---------|------|--------|
//! | `.path("id", i)` | Path | replaces every `{id}` of the template |
//! | `.query(i)` | Query | spreads an object into query parameters |
//! | `.body(i)` | Body | request body, strings verbatim, otherwise JSON |
//! | `.header("X-Name", i)` | Header | appends a header |
//! | `.url(i)` | Url | replaces the resource base URL |
//!
//! Query objects skip `null` values, repeat array values under the same key,
//! and JSON-encode nested objects. A falsy query argument is ignored, so
//! optional filters can be passed as `None`.
//!
//! Static headers and the response media type complete the binding:
//!
//! ```ignore
//! MethodBinding::get("/{id}/archive")
//!     .path("id", 0)
//!     .static_header("Accept", "application/zip")
//!     .produces(MediaType::Raw);
//! ```
//!
//! ## Inspecting Requests
//!
//! [`ResourceClient::request`](crate::ResourceClient::request) builds the
//! request without sending it, handy in tests:
//!
//! ```ignore
//! let request = repos.request("find_one", &args![7]?)?;
//! assert_eq!(request.url(), "https://api.example.com/repos/7");
//! ```
//!
//! ## Next Steps
//!
//! - [Chapter 2: Interceptors][super::chapter_2] - Auth, logging, errors
