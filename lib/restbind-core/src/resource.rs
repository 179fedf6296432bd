//! The capability every concrete resource supplies.

use crate::{Headers, MethodBindingSet};

static NO_HEADERS: Headers = Headers::new();

/// A remote collection or entity.
///
/// A resource is configured with a base URL, optional default headers and the
/// bindings of its methods. Without explicit bindings it exposes the CRUD
/// defaults of [`MethodBindingSet::crud`].
///
/// # Example
///
/// ```
/// use std::sync::LazyLock;
///
/// use restbind_core::{MethodBinding, MethodBindingSet, Resource};
///
/// struct Users;
///
/// static USERS: LazyLock<MethodBindingSet> = LazyLock::new(|| {
///     MethodBindingSet::builder()
///         .with_crud()
///         .bind("me", MethodBinding::get("/me"))
///         .build()
///         .unwrap_or_default()
/// });
///
/// impl Resource for Users {
///     fn base_url(&self) -> &str {
///         "https://api.example.com/users"
///     }
///
///     fn bindings(&self) -> &MethodBindingSet {
///         &USERS
///     }
/// }
///
/// assert!(Users.bindings().binding("me").is_some());
/// assert!(Users.bindings().binding("find_one").is_some());
/// ```
pub trait Resource: Send + Sync {
    /// Base URL every resolved path is appended to.
    fn base_url(&self) -> &str;

    /// Headers sent with every call, before method headers.
    fn default_headers(&self) -> &Headers {
        &NO_HEADERS
    }

    /// Bindings of the resource methods.
    fn bindings(&self) -> &MethodBindingSet {
        MethodBindingSet::crud()
    }
}

impl<R: Resource + ?Sized> Resource for &R {
    fn base_url(&self) -> &str {
        (**self).base_url()
    }

    fn default_headers(&self) -> &Headers {
        (**self).default_headers()
    }

    fn bindings(&self) -> &MethodBindingSet {
        (**self).bindings()
    }
}

impl<R: Resource + ?Sized> Resource for std::sync::Arc<R> {
    fn base_url(&self) -> &str {
        (**self).base_url()
    }

    fn default_headers(&self) -> &Headers {
        (**self).default_headers()
    }

    fn bindings(&self) -> &MethodBindingSet {
        (**self).bindings()
    }
}
