//! # Tutorial: Building REST resources with restbind
//!
//! Learn to describe and call remote resources step by step.
//!
//! ## Chapters
//!
//! 1. [Getting Started][chapter_0] - Your first resource and its CRUD defaults
//! 2. [Method Bindings][chapter_1] - Path, query, body, header and URL parameters
//! 3. [Interceptors][chapter_2] - Auth, logging and error handling
//!
//! Ready? Start with [Chapter 0: Getting Started][chapter_0].

pub mod chapter_0;
pub mod chapter_1;
pub mod chapter_2;
