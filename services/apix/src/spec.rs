use std::collections::BTreeMap;

use http::Method;

/// RequestSpec describes one logical API-X operation.
///
/// The path is made of an optional `entity` segment followed by the `method`
/// segment, for example `/users/create`. The body is passed separately to
/// [`crate::RequestBuilder::assemble`] so it can be any [`serde::Serialize`].
///
/// ```
/// use apisign_apix::RequestSpec;
/// use http::Method;
///
/// let spec = RequestSpec::new(Method::POST, "/method")
///     .with_entity("/entity")
///     .with_query("param1", "value1");
/// assert_eq!(spec.entity(), Some("/entity"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    http_method: Method,
    entity: Option<String>,
    method: String,
    query: BTreeMap<String, String>,
}

impl RequestSpec {
    /// Create a spec for `http_method` against the `method` path segment.
    ///
    /// `method` may be empty.
    pub fn new(http_method: Method, method: impl Into<String>) -> Self {
        Self {
            http_method,
            entity: None,
            method: method.into(),
            query: BTreeMap::new(),
        }
    }

    /// Create a `GET` spec.
    pub fn get(method: impl Into<String>) -> Self {
        Self::new(Method::GET, method)
    }

    /// Create a `POST` spec.
    pub fn post(method: impl Into<String>) -> Self {
        Self::new(Method::POST, method)
    }

    /// Create a `PUT` spec.
    pub fn put(method: impl Into<String>) -> Self {
        Self::new(Method::PUT, method)
    }

    /// Create a `DELETE` spec.
    pub fn delete(method: impl Into<String>) -> Self {
        Self::new(Method::DELETE, method)
    }

    /// Create a `PATCH` spec.
    pub fn patch(method: impl Into<String>) -> Self {
        Self::new(Method::PATCH, method)
    }

    /// Set the entity path segment.
    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    /// Set or unset the entity path segment.
    pub fn with_entity_opt(mut self, entity: Option<&str>) -> Self {
        self.entity = entity.map(str::to_string);
        self
    }

    /// Add a query parameter. A later value for the same key wins.
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Add query parameters. Later values for the same key win.
    pub fn with_queries<K, V>(mut self, query: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.query
            .extend(query.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// HTTP method of this operation.
    pub fn http_method(&self) -> &Method {
        &self.http_method
    }

    /// Entity path segment, if any.
    pub fn entity(&self) -> Option<&str> {
        self.entity.as_deref()
    }

    /// Method path segment.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Caller supplied query parameters, ordered by key.
    pub fn query(&self) -> &BTreeMap<String, String> {
        &self.query
    }

    /// Whether API-X accepts this HTTP method.
    pub fn is_supported_method(&self) -> bool {
        matches!(
            self.http_method,
            Method::GET | Method::POST | Method::PUT | Method::DELETE | Method::PATCH
        )
    }
}
