//! Request construction: endpoint + arguments → percent-encoded URL.

use crate::endpoint::{Endpoint, placeholder};
use crate::error::ValidationError;
use crate::params::{BlockRange, Paging};
use url::Url;

/// A single API call, not yet bound to a network.
///
/// Arguments are validated as they are added; the first violation is kept and
/// reported by [`Request::build`], so a chain of builder calls never panics and
/// an invalid request never reaches the transport.
///
/// ```
/// use kaiascan_client::{Endpoint, Paging, Request};
/// use url::Url;
///
/// let base = Url::parse("https://kairos-oapi.kaiascan.io/").unwrap();
/// let url = Request::new(Endpoint::AccountKeyHistories)
///     .path_arg("accountAddress", "0xabc")
///     .paging(Paging::new(1, 20))
///     .build(&base)
///     .unwrap();
/// assert_eq!(
///     url.as_str(),
///     "https://kairos-oapi.kaiascan.io/api/v1/accounts/0xabc/key-histories?page=1&size=20"
/// );
/// ```
#[derive(Clone, Debug)]
pub struct Request {
    endpoint: Endpoint,
    path_args: Vec<(&'static str, String)>,
    query: Vec<(&'static str, Option<String>)>,
    error: Option<ValidationError>,
}

impl Request {
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            path_args: Vec::new(),
            query: Vec::new(),
            error: None,
        }
    }

    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    /// Fills the `{name}` segment of the path template.
    ///
    /// Must not be empty, `.` or `..`: those would collapse into a different
    /// path once the URL is normalized.
    pub fn path_arg(mut self, name: &'static str, value: impl ToString) -> Self {
        let value = value.to_string();
        if value.is_empty() {
            return self.reject(ValidationError::EmptyArgument(name));
        }
        if value == "." || value == ".." {
            return self.reject(ValidationError::DotSegment(name));
        }
        self.path_args.push((name, value));
        self
    }

    /// Adds a required query parameter. Must not be empty.
    pub fn query(mut self, key: &'static str, value: impl ToString) -> Self {
        let value = value.to_string();
        if value.is_empty() {
            return self.reject(ValidationError::EmptyArgument(key));
        }
        self.query.push((key, Some(value)));
        self
    }

    /// Adds an optional query parameter; `None` is left out of the URL entirely.
    pub fn query_opt<V: ToString>(mut self, key: &'static str, value: Option<V>) -> Self {
        self.query.push((key, value.map(|v| v.to_string())));
        self
    }

    /// Adds `page` and `size`, rejecting out-of-range values.
    pub fn paging(self, paging: Paging) -> Self {
        if let Err(err) = paging.validate() {
            return self.reject(err);
        }
        self.query("page", paging.page).query("size", paging.size)
    }

    /// Adds `blockNumberStart` / `blockNumberEnd` for whichever bound is set.
    pub fn block_range(self, range: BlockRange) -> Self {
        self.query_opt("blockNumberStart", range.start)
            .query_opt("blockNumberEnd", range.end)
    }

    /// Adds a required comma-joined list parameter.
    pub fn query_list<S: AsRef<str>>(self, key: &'static str, values: &[S]) -> Self {
        if values.is_empty() {
            return self.reject(ValidationError::EmptyList(key));
        }
        self.query(key, join(values))
    }

    /// Adds a comma-joined list parameter, omitted when `values` is empty.
    pub fn query_list_opt<S: AsRef<str>>(self, key: &'static str, values: &[S]) -> Self {
        let joined = (!values.is_empty()).then(|| join(values));
        self.query_opt(key, joined)
    }

    /// Query parameters that will be sent, in declaration order.
    pub fn query_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.query
            .iter()
            .filter_map(|(key, value)| Some((*key, value.as_deref()?)))
    }

    /// Resolves the request against `base`.
    ///
    /// `base` may end with or without a slash and may carry a path prefix;
    /// any query or fragment on it is dropped.
    pub fn build(&self, base: &Url) -> Result<Url, ValidationError> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }

        let template = self.endpoint.path_template();
        if let Some((name, _)) = self
            .path_args
            .iter()
            .find(|(name, _)| !self.endpoint.path_params().any(|p| p == *name))
        {
            return Err(ValidationError::UnexpectedPathArgument {
                template,
                name: *name,
            });
        }

        let mut url = base.clone();
        url.set_query(None);
        url.set_fragment(None);
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| ValidationError::UnusableBaseUrl(base.to_string()))?;
            segments.pop_if_empty();
            for segment in template.split('/') {
                match placeholder(segment) {
                    Some(name) => {
                        let value = self
                            .path_args
                            .iter()
                            .find(|(arg, _)| *arg == name)
                            .map(|(_, value)| value.as_str())
                            .ok_or(ValidationError::MissingPathArgument { template, name })?;
                        segments.push(value);
                    }
                    None => {
                        segments.push(segment);
                    }
                }
            }
        }

        let pairs: Vec<_> = self.query_pairs().collect();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        Ok(url)
    }

    fn reject(mut self, err: ValidationError) -> Self {
        self.error.get_or_insert(err);
        self
    }
}

fn join<S: AsRef<str>>(values: &[S]) -> String {
    values
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(",")
}
