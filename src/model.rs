use std::fmt::{self, Display, Formatter};
use std::time::Duration;

use serde::Serialize;
use url::Url;

use crate::{Error, Result};

pub const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Options,
    Head,
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let method = match *self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Patch => "PATCH",
            Method::Options => "OPTIONS",
            Method::Head => "HEAD",
        };
        f.write_str(method)
    }
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Version {
    Http09,
    Http10,
    Http11,
    Http2,
    Http3,
}

impl Display for Version {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let version = match *self {
            Version::Http09 => "HTTP/0.9",
            Version::Http10 => "HTTP/1.0",
            Version::Http11 => "HTTP/1.1",
            Version::Http2 => "HTTP/2.0",
            Version::Http3 => "HTTP/3.0",
        };
        f.write_str(version)
    }
}

/// Where a request goes: an already parsed URL, or text that is parsed (and
/// resolved against the base address) when the request is built.
#[derive(Debug, Clone, PartialEq)]
pub enum Target {
    Url(Url),
    Text(String),
}

impl Target {
    /// `Ok(None)` means there is nothing to resolve (empty text).
    pub(crate) fn resolve(&self, base: Option<&Url>) -> Result<Option<Url>> {
        let text = match self {
            Target::Url(url) => return Ok(Some(url.clone())),
            Target::Text(text) if text.is_empty() => return Ok(None),
            Target::Text(text) => text,
        };

        let parsed = match (Url::parse(text), base) {
            (Err(url::ParseError::RelativeUrlWithoutBase), Some(base)) => base.join(text),
            (parsed, _) => parsed,
        };

        parsed.map(Some).map_err(|source| Error::MalformedTarget {
            target: text.clone(),
            source,
        })
    }
}

impl From<Url> for Target {
    fn from(url: Url) -> Self {
        Target::Url(url)
    }
}

impl From<&Url> for Target {
    fn from(url: &Url) -> Self {
        Target::Url(url.clone())
    }
}

impl From<&str> for Target {
    fn from(text: &str) -> Self {
        Target::Text(text.to_string())
    }
}

impl From<String> for Target {
    fn from(text: String) -> Self {
        Target::Text(text)
    }
}

impl From<&String> for Target {
    fn from(text: &String) -> Self {
        Target::Text(text.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Body {
    pub content: Vec<u8>,
    pub content_type: Option<String>,
}

impl Body {
    pub fn bytes(content: impl Into<Vec<u8>>) -> Self {
        Body {
            content: content.into(),
            content_type: None,
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Body {
            content: content.into().into_bytes(),
            content_type: Some("text/plain; charset=utf-8".to_string()),
        }
    }

    /// Pre-serialized JSON, sent exactly as given.
    pub fn json(content: impl Into<String>) -> Self {
        Body {
            content: content.into().into_bytes(),
            content_type: Some(JSON_CONTENT_TYPE.to_string()),
        }
    }

    /// Serializes `value` with serde_json. Values without a `Serialize`
    /// impl have to be turned into JSON text by the caller first.
    pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Ok(Body::json(serde_json::to_string(value)?))
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: Method,
    pub target: Url,
    pub headers: Vec<(String, String)>,
    pub body: Option<Body>,
    pub timeout: Option<Duration>,
}

impl Request {
    pub fn new(method: Method, target: Url) -> Self {
        Request {
            method,
            target,
            headers: vec![],
            body: None,
            timeout: None,
        }
    }

    /// First value of the header `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn has_header(&self, name: &str) -> bool {
        self.header(name).is_some()
    }

    /// Adds the header unless one with the same name is already present.
    pub(crate) fn add_default_header(&mut self, name: &str, value: &str) -> bool {
        if self.has_header(name) {
            return false;
        }
        self.headers.push((name.to_string(), value.to_string()));
        true
    }
}

#[derive(Debug, Clone)]
pub struct Response {
    pub version: Version,
    pub status_code: u16,
    pub reason: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Everything a convenience call needs to build a [`Request`]. Missing
/// pieces are not an error here; they are reported when the request is sent.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub(crate) method: Option<Method>,
    pub(crate) target: Option<Target>,
    pub(crate) body: Option<Body>,
    pub(crate) body_required: bool,
    pub(crate) headers: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn new(method: Method, target: impl Into<Target>) -> Self {
        RequestOptions::default().method(method).target(target)
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn target(mut self, target: impl Into<Target>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn body(mut self, body: Body) -> Self {
        self.body = Some(body);
        self
    }

    /// Refuse to send without a non-empty body.
    pub fn require_body(mut self) -> Self {
        self.body_required = true;
        self
    }

    /// Duplicate names are kept; nothing already on the request is replaced.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.headers
            .extend(headers.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decode {
    Raw,
    Text,
    Bool,
}

#[derive(Debug, Clone)]
pub enum Decoded {
    Raw(Response),
    Text(String),
    Bool(bool),
}
