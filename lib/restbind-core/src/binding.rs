//! Method and parameter bindings.
//!
//! A resource declares, for each of its methods, an HTTP verb, a path template
//! and the role each positional argument plays in the request. The bindings
//! are registered once, when the resource type is defined, and only read
//! afterwards: a [`MethodBindingSet`] can be shared by every in-flight call.
//!
//! # Example
//!
//! ```
//! use restbind_core::{MediaType, Method, MethodBinding, MethodBindingSet};
//!
//! let bindings = MethodBindingSet::builder()
//!     .with_crud()
//!     .bind(
//!         "search",
//!         MethodBinding::get("/search")
//!             .query(0)
//!             .header("X-Request-Id", 1),
//!     )
//!     .bind(
//!         "avatar",
//!         MethodBinding::get("/{id}/avatar")
//!             .path("id", 0)
//!             .produces(MediaType::Raw),
//!     )
//!     .build()
//!     .expect("valid bindings");
//!
//! assert_eq!(bindings.binding("search").map(MethodBinding::verb), Some(Method::Get));
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use crate::{Error, Headers, MediaType, Method, Result};

/// Names of the methods every resource gets out of the box.
pub mod crud {
    /// `GET /{id}`
    pub const FIND_ONE: &str = "find_one";
    /// `POST` with the body as argument 0.
    pub const SAVE: &str = "save";
    /// `PUT /{id}` with the body as argument 1.
    pub const UPDATE: &str = "update";
    /// `DELETE /{id}`
    pub const DELETE: &str = "delete";
    /// `GET` with an optional query object as argument 0.
    pub const FIND: &str = "find";
}

/// Role of a positional argument in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamRole {
    /// Replaces the resource base URL for this call.
    Url,
    /// Substitutes a `{key}` placeholder of the path template.
    Path,
    /// An object whose entries become query parameters.
    Query,
    /// The request body.
    Body,
    /// A header value.
    Header,
}

impl ParamRole {
    /// Url and Body can be bound at most once per method.
    #[must_use]
    pub const fn is_singular(&self) -> bool {
        matches!(self, Self::Url | Self::Body)
    }

    const fn slot(self) -> usize {
        match self {
            Self::Url => 0,
            Self::Path => 1,
            Self::Query => 2,
            Self::Body => 3,
            Self::Header => 4,
        }
    }
}

impl fmt::Display for ParamRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url => write!(f, "url"),
            Self::Path => write!(f, "path"),
            Self::Query => write!(f, "query"),
            Self::Body => write!(f, "body"),
            Self::Header => write!(f, "header"),
        }
    }
}

/// One argument bound to one role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterBinding {
    /// Role of the argument.
    pub role: ParamRole,
    /// Placeholder or header name; empty for Url, Query and Body.
    pub key: String,
    /// Position of the argument in the call.
    pub index: usize,
}

impl ParameterBinding {
    /// Create a binding.
    #[must_use]
    pub fn new(role: ParamRole, key: impl Into<String>, index: usize) -> Self {
        Self {
            role,
            key: key.into(),
            index,
        }
    }
}

/// Everything declared for one method of a resource.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MethodBinding {
    verb: Method,
    template: String,
    headers: Headers,
    produces: MediaType,
    params: [Vec<ParameterBinding>; 5],
}

impl MethodBinding {
    /// Create a binding for `verb` with a path template (may be empty).
    #[must_use]
    pub fn new(verb: Method, template: impl Into<String>) -> Self {
        Self {
            verb,
            template: template.into(),
            ..Self::default()
        }
    }

    /// `GET` binding.
    #[must_use]
    pub fn get(template: impl Into<String>) -> Self {
        Self::new(Method::Get, template)
    }

    /// `POST` binding.
    #[must_use]
    pub fn post(template: impl Into<String>) -> Self {
        Self::new(Method::Post, template)
    }

    /// `PUT` binding.
    #[must_use]
    pub fn put(template: impl Into<String>) -> Self {
        Self::new(Method::Put, template)
    }

    /// `DELETE` binding.
    #[must_use]
    pub fn delete(template: impl Into<String>) -> Self {
        Self::new(Method::Delete, template)
    }

    /// `PATCH` binding.
    #[must_use]
    pub fn patch(template: impl Into<String>) -> Self {
        Self::new(Method::Patch, template)
    }

    /// `HEAD` binding.
    #[must_use]
    pub fn head(template: impl Into<String>) -> Self {
        Self::new(Method::Head, template)
    }

    /// Bind argument `index` to the `{key}` placeholder.
    #[must_use]
    pub fn path(mut self, key: impl Into<String>, index: usize) -> Self {
        self.push(ParameterBinding::new(ParamRole::Path, key, index));
        self
    }

    /// Bind argument `index` as a query object.
    #[must_use]
    pub fn query(mut self, index: usize) -> Self {
        self.push(ParameterBinding::new(ParamRole::Query, "", index));
        self
    }

    /// Bind argument `index` as the body.
    #[must_use]
    pub fn body(mut self, index: usize) -> Self {
        self.push(ParameterBinding::new(ParamRole::Body, "", index));
        self
    }

    /// Bind argument `index` as the value of header `name`.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, index: usize) -> Self {
        self.push(ParameterBinding::new(ParamRole::Header, name, index));
        self
    }

    /// Bind argument `index` as the base URL override.
    #[must_use]
    pub fn url(mut self, index: usize) -> Self {
        self.push(ParameterBinding::new(ParamRole::Url, "", index));
        self
    }

    /// Add a static header sent on every call of this method.
    #[must_use]
    pub fn static_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.append(name, value);
        self
    }

    /// Declare the media type of the response.
    #[must_use]
    pub fn produces(mut self, media_type: MediaType) -> Self {
        self.produces = media_type;
        self
    }

    /// HTTP verb.
    #[must_use]
    pub const fn verb(&self) -> Method {
        self.verb
    }

    /// Path template, e.g. `/{id}`.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Static headers declared on the method.
    #[must_use]
    pub const fn static_headers(&self) -> &Headers {
        &self.headers
    }

    /// Declared response media type.
    #[must_use]
    pub const fn media_type(&self) -> MediaType {
        self.produces
    }

    /// Bindings of `role`, in registration order.
    #[must_use]
    pub fn params(&self, role: ParamRole) -> &[ParameterBinding] {
        self.params
            .get(role.slot())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// The Url or Body binding, if declared.
    #[must_use]
    pub fn single(&self, role: ParamRole) -> Option<&ParameterBinding> {
        self.params(role).first()
    }

    fn push(&mut self, binding: ParameterBinding) {
        if let Some(slot) = self.params.get_mut(binding.role.slot()) {
            slot.push(binding);
        }
    }

    fn validate(&self, method: &str) -> Result<()> {
        for role in [ParamRole::Url, ParamRole::Body] {
            if self.params(role).len() > 1 {
                return Err(Error::binding(format!(
                    "method `{method}` declares more than one {role} parameter"
                )));
            }
        }
        Ok(())
    }
}

/// Bindings of every method of a resource type, keyed by method name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MethodBindingSet {
    methods: HashMap<String, MethodBinding>,
}

static CRUD: LazyLock<MethodBindingSet> = LazyLock::new(MethodBindingSet::crud_set);

impl MethodBindingSet {
    /// Empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fluent builder.
    #[must_use]
    pub fn builder() -> MethodBindingSetBuilder {
        MethodBindingSetBuilder::default()
    }

    /// The default CRUD bindings shared by every resource.
    #[must_use]
    pub fn crud() -> &'static Self {
        &CRUD
    }

    fn crud_set() -> Self {
        let methods = [
            (crud::FIND_ONE, MethodBinding::get("/{id}").path("id", 0)),
            (crud::SAVE, MethodBinding::post("").body(0)),
            (
                crud::UPDATE,
                MethodBinding::put("/{id}").path("id", 0).body(1),
            ),
            (crud::DELETE, MethodBinding::delete("/{id}").path("id", 0)),
            (crud::FIND, MethodBinding::get("").query(0)),
        ];

        Self {
            methods: methods
                .into_iter()
                .map(|(name, binding)| (name.to_string(), binding))
                .collect(),
        }
    }

    /// Declare the verb and path template of `method`, keeping its parameters.
    pub fn define(&mut self, method: &str, verb: Method, template: impl Into<String>) {
        let binding = self.methods.entry(method.to_string()).or_default();
        binding.verb = verb;
        binding.template = template.into();
    }

    /// Record one parameter binding of `method`.
    ///
    /// A method that was not defined yet is created as a `GET` with an empty
    /// template. A second Url or Body binding for the same method is rejected.
    pub fn register(
        &mut self,
        method: &str,
        role: ParamRole,
        key: impl Into<String>,
        index: usize,
    ) -> Result<()> {
        let binding = self.methods.entry(method.to_string()).or_default();
        if role.is_singular() && !binding.params(role).is_empty() {
            return Err(Error::binding(format!(
                "method `{method}` already has a {role} parameter"
            )));
        }
        binding.push(ParameterBinding::new(role, key, index));
        Ok(())
    }

    /// Insert (or replace) a whole method binding.
    pub fn insert(&mut self, method: impl Into<String>, binding: MethodBinding) -> Result<()> {
        let method = method.into();
        binding.validate(&method)?;
        self.methods.insert(method, binding);
        Ok(())
    }

    /// Bindings of `role` for `method`, empty if the method is unknown.
    #[must_use]
    pub fn get(&self, method: &str, role: ParamRole) -> &[ParameterBinding] {
        self.methods
            .get(method)
            .map(|binding| binding.params(role))
            .unwrap_or_default()
    }

    /// The whole binding of `method`.
    #[must_use]
    pub fn binding(&self, method: &str) -> Option<&MethodBinding> {
        self.methods.get(method)
    }

    /// Declared method names, in no particular order.
    pub fn method_names(&self) -> impl Iterator<Item = &str> {
        self.methods.keys().map(String::as_str)
    }

    /// Number of declared methods.
    #[must_use]
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// No method declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

/// Builder for [`MethodBindingSet`].
///
/// The first invalid declaration is kept and reported by [`Self::build`].
#[derive(Debug, Default)]
pub struct MethodBindingSetBuilder {
    set: MethodBindingSet,
    error: Option<Error>,
}

impl MethodBindingSetBuilder {
    /// Start from the default CRUD bindings.
    #[must_use]
    pub fn with_crud(mut self) -> Self {
        for (name, binding) in &MethodBindingSet::crud().methods {
            self.set.methods.insert(name.clone(), binding.clone());
        }
        self
    }

    /// Declare `method`, replacing any earlier declaration with the same name.
    #[must_use]
    pub fn bind(mut self, method: impl Into<String>, binding: MethodBinding) -> Self {
        if self.error.is_none()
            && let Err(err) = self.set.insert(method, binding)
        {
            self.error = Some(err);
        }
        self
    }

    /// Finish the set.
    pub fn build(self) -> Result<MethodBindingSet> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.set),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn param_role_display() {
        assert_eq!(ParamRole::Url.to_string(), "url");
        assert_eq!(ParamRole::Path.to_string(), "path");
        assert_eq!(ParamRole::Query.to_string(), "query");
        assert_eq!(ParamRole::Body.to_string(), "body");
        assert_eq!(ParamRole::Header.to_string(), "header");
    }

    #[test]
    fn register_and_get_in_order() {
        let mut set = MethodBindingSet::new();
        set.define("search", Method::Get, "/search");
        set.register("search", ParamRole::Query, "", 0)
            .expect("query");
        set.register("search", ParamRole::Query, "", 1)
            .expect("second query");
        set.register("search", ParamRole::Header, "X-Trace", 2)
            .expect("header");

        let queries = set.get("search", ParamRole::Query);
        assert_eq!(queries.len(), 2);
        assert_eq!(queries.first().map(|b| b.index), Some(0));
        assert_eq!(queries.get(1).map(|b| b.index), Some(1));
        assert_eq!(
            set.get("search", ParamRole::Header),
            &[ParameterBinding::new(ParamRole::Header, "X-Trace", 2)]
        );
        assert!(set.get("search", ParamRole::Body).is_empty());
        assert!(set.get("unknown", ParamRole::Query).is_empty());
    }

    #[test]
    fn register_before_define_keeps_params() {
        let mut set = MethodBindingSet::new();
        set.register("remove", ParamRole::Path, "id", 0)
            .expect("path");
        assert_eq!(
            set.binding("remove").map(MethodBinding::verb),
            Some(Method::Get)
        );

        set.define("remove", Method::Delete, "/{id}");
        let binding = set.binding("remove").expect("defined");
        assert_eq!(binding.verb(), Method::Delete);
        assert_eq!(binding.template(), "/{id}");
        assert_eq!(binding.params(ParamRole::Path).len(), 1);
    }

    #[test]
    fn duplicate_body_is_rejected() {
        let mut set = MethodBindingSet::new();
        set.register("save", ParamRole::Body, "", 0).expect("body");

        let err = set
            .register("save", ParamRole::Body, "", 1)
            .expect_err("second body");
        assert!(err.is_binding());
    }

    #[test]
    fn duplicate_url_is_rejected_by_builder() {
        let result = MethodBindingSet::builder()
            .bind("mirror", MethodBinding::get("/").url(0).url(1))
            .build();

        let err = result.expect_err("two url bindings");
        assert!(err.to_string().contains("more than one url parameter"));
    }

    #[test]
    fn crud_defaults() {
        let crud = MethodBindingSet::crud();
        assert_eq!(crud.len(), 5);

        let find_one = crud.binding(crud::FIND_ONE).expect("find_one");
        assert_eq!(find_one.verb(), Method::Get);
        assert_eq!(find_one.template(), "/{id}");

        let update = crud.binding(crud::UPDATE).expect("update");
        assert_eq!(update.verb(), Method::Put);
        assert_eq!(update.single(ParamRole::Body).map(|b| b.index), Some(1));

        let find = crud.binding(crud::FIND).expect("find");
        assert_eq!(find.params(ParamRole::Query).len(), 1);
        assert_eq!(find.media_type(), MediaType::Json);
    }

    #[test]
    fn builder_overrides_crud_method() {
        let set = MethodBindingSet::builder()
            .with_crud()
            .bind(
                crud::FIND_ONE,
                MethodBinding::get("/by-slug/{slug}").path("slug", 0),
            )
            .build()
            .expect("valid");

        assert_eq!(set.len(), 5);
        assert_eq!(
            set.binding(crud::FIND_ONE).map(MethodBinding::template),
            Some("/by-slug/{slug}")
        );
    }
}
