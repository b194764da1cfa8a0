use crate::http_client::{AsyncHttpClient, HttpClient};
use crate::{ClientConfig, Method, Request, Response, Version};
use anyhow::Result;
use reqwest::header::HeaderMap;
use std::convert::{TryFrom, TryInto};

/// Turns a crate [`Request`] into a reqwest builder. Works for both the
/// blocking and the async client since their builders share method names.
macro_rules! prepare {
    ($client:expr, $request:expr) => {{
        let Request {
            method,
            target,
            headers,
            body,
            timeout,
        } = $request;
        let mut request_builder = $client.request(method.into(), target.clone());
        for (key, value) in headers {
            request_builder = request_builder.header(key.as_str(), value.as_str());
        }
        if let Some(body) = body {
            request_builder = request_builder.body(body.content.clone());
        }
        if let Some(timeout) = timeout {
            request_builder = request_builder.timeout(*timeout);
        }
        request_builder
    }};
}

pub struct ReqwestHttpClient {
    client: reqwest::blocking::Client,
}

impl HttpClient for ReqwestHttpClient {
    fn create(config: &ClientConfig) -> Result<ReqwestHttpClient>
    where
        Self: Sized,
    {
        let mut builder = reqwest::blocking::Client::builder().timeout(config.timeout());
        if !config.proxy_enabled() {
            builder = builder.no_proxy();
        }

        Ok(ReqwestHttpClient {
            client: builder.build()?,
        })
    }

    fn execute(&self, request: &Request) -> Result<Response> {
        let response = prepare!(self.client, request).send()?;

        response.try_into()
    }
}

pub struct ReqwestAsyncHttpClient {
    client: reqwest::Client,
}

impl AsyncHttpClient for ReqwestAsyncHttpClient {
    fn create(config: &ClientConfig) -> Result<ReqwestAsyncHttpClient>
    where
        Self: Sized,
    {
        let mut builder = reqwest::Client::builder().timeout(config.timeout());
        if !config.proxy_enabled() {
            builder = builder.no_proxy();
        }

        Ok(ReqwestAsyncHttpClient {
            client: builder.build()?,
        })
    }

    async fn execute(&self, request: &Request) -> Result<Response> {
        let response = prepare!(self.client, request).send().await?;

        let Headers(headers) = response.headers().into();
        Ok(Response {
            version: response.version().into(),
            status_code: response.status().as_u16(),
            reason: reason(response.status()),
            headers,
            body: response.bytes().await?.to_vec(),
        })
    }
}

impl From<&Method> for reqwest::Method {
    fn from(method: &Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
            Method::Patch => reqwest::Method::PATCH,
            Method::Options => reqwest::Method::OPTIONS,
            Method::Head => reqwest::Method::HEAD,
        }
    }
}

impl From<reqwest::Version> for Version {
    fn from(version: reqwest::Version) -> Self {
        match version {
            reqwest::Version::HTTP_09 => Version::Http09,
            reqwest::Version::HTTP_10 => Version::Http10,
            reqwest::Version::HTTP_2 => Version::Http2,
            reqwest::Version::HTTP_3 => Version::Http3,
            _ => Version::Http11,
        }
    }
}

fn reason(status: reqwest::StatusCode) -> String {
    status.canonical_reason().unwrap_or_default().to_string()
}

struct Headers(Vec<(String, String)>);
impl TryFrom<reqwest::blocking::Response> for Response {
    type Error = anyhow::Error;

    fn try_from(response: reqwest::blocking::Response) -> Result<Self> {
        let Headers(headers) = response.headers().into();
        Ok(Response {
            version: response.version().into(),
            status_code: response.status().as_u16(),
            reason: reason(response.status()),
            headers,
            body: response.bytes()?.to_vec(),
        })
    }
}

// Header values need not be UTF-8 (a raw filename in Content-Disposition, say).
impl From<&HeaderMap> for Headers {
    fn from(value: &HeaderMap) -> Self {
        let headers = value
            .iter()
            .map(|(header_name, header_value)| {
                (
                    header_name.to_string(),
                    String::from_utf8_lossy(header_value.as_bytes()).into_owned(),
                )
            })
            .collect();
        Headers(headers)
    }
}
