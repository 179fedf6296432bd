//! # Chapter 0: Getting Started
//!
//! Your first restbind resource in 5 minutes.
//!
//! ## What You'll Learn
//!
//! - Implement the [`Resource`](crate::Resource) trait
//! - Call the CRUD defaults through a [`ResourceClient`](crate::ResourceClient)
//! - Turn a decoded response into your own type
//!
//! ## Prerequisites
//!
//! Add to `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! restbind = "0.1"
//! serde = { version = "1.0", features = ["derive"] }
//! serde_json = "1.0"
//! tokio = { version = "1", features = ["full"] }
//! ```
//!
//! ## Your First Resource
//!
//! ```ignore
//! use restbind::prelude::*;
//!
//! #[derive(Debug, Deserialize)]
//! pub struct User {
//!     pub id: u64,
//!     pub name: String,
//! }
//!
//! // A resource only needs a base URL
//! struct Users;
//!
//! impl Resource for Users {
//!     fn base_url(&self) -> &str {
//!         "https://api.example.com/users"
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> restbind::Result<()> {
//!     let users = ResourceClient::new(Users, HttpService::bare(HyperTransport::new()));
//!
//!     // GET https://api.example.com/users/42
//!     let user: User = users.find_one(&42).await?.deserialize()?;
//!     println!("User: {user:?}");
//!     Ok(())
//! }
//! ```
//!
//! ## The CRUD Defaults
//!
//! Without explicit bindings a resource exposes five methods:
//!
//! ```text
//! find_one(id)      GET    {base}/{id}
//! save(body)        POST   {base}
//! update(id, body)  PUT    {base}/{id}
//! delete(id)        DELETE {base}/{id}
//! find(query?)      GET    {base}?{query}
//! ```
//!
//! Bodies that are already strings are sent verbatim, anything else is
//! encoded as JSON. Responses are parsed as JSON; a body that is not JSON
//! comes back as [`Decoded::Raw`](crate::Decoded::Raw) instead of failing.
//!
//! ## Next Steps
//!
//! - [Chapter 1: Method Bindings][super::chapter_1] - Declare your own methods
