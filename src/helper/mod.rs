use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::http_client::reqwest::ReqwestHttpClient;
use crate::http_client::HttpClient;
use crate::pipeline;
use crate::{
    Body, ClientConfig, Decode, Decoded, Error, Method, Request, RequestOptions, Response,
    Result, Target,
};

pub use suspending::AsyncRequestHelper;

mod suspending;


/// Blocking front end over one [`HttpClient`]. Each call runs on the
/// calling thread and returns when the exchange is complete or the
/// configured timeout fires.
pub struct RequestHelper<C: HttpClient = ReqwestHttpClient> {
    config: ClientConfig,
    client: Option<C>,
}

impl RequestHelper<ReqwestHttpClient> {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = ReqwestHttpClient::create(&config).map_err(Error::Client)?;
        Ok(Self::with_client(config, client))
    }
}

impl<C: HttpClient> RequestHelper<C> {
    pub fn with_client(config: ClientConfig, client: C) -> Self {
        RequestHelper {
            config,
            client: Some(client),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut ClientConfig {
        &mut self.config
    }

    /// Releases the client. Only the first call does anything; later sends
    /// return their failure sentinel.
    pub fn close(&mut self) -> bool {
        self.client.take().is_some()
    }

    pub fn is_closed(&self) -> bool {
        self.client.is_none()
    }

    /// Sends a fully formed request. `None` means the exchange failed; a
    /// non-2xx response is still returned.
    pub fn send(&self, mut request: Request) -> Option<Response> {
        self.exchange(&mut request)
    }

    pub fn send_with(&self, options: RequestOptions) -> Result<Option<Response>> {
        Ok(match pipeline::build(&self.config, options)? {
            Some(mut request) => self.exchange(&mut request),
            None => None,
        })
    }

    pub fn send_for_text(&self, options: RequestOptions) -> Result<Option<String>> {
        let Some(mut request) = pipeline::build(&self.config, options)? else {
            return Ok(None);
        };
        let response = self.exchange(&mut request);
        Ok(pipeline::read_text(&request, response))
    }

    /// `Some(true)` only for a 2xx body equal to `true`, ignoring case.
    pub fn send_for_bool(&self, options: RequestOptions) -> Result<Option<bool>> {
        let Some(mut request) = pipeline::build(&self.config, options)? else {
            return Ok(None);
        };
        let response = self.exchange(&mut request);
        let text = pipeline::read_text(&request, response);
        Ok(pipeline::read_bool(&request, text))
    }

    pub fn send_json(
        &self,
        options: RequestOptions,
        json: Option<&str>,
    ) -> Result<Option<Response>> {
        self.send_with(with_json(options, json))
    }

    pub fn send_json_for_text(
        &self,
        options: RequestOptions,
        json: Option<&str>,
    ) -> Result<Option<String>> {
        self.send_for_text(with_json(options, json))
    }

    pub fn send_json_for_bool(
        &self,
        options: RequestOptions,
        json: Option<&str>,
    ) -> Result<Option<bool>> {
        self.send_for_bool(with_json(options, json))
    }

    pub fn dispatch(&self, options: RequestOptions, decode: Decode) -> Result<Option<Decoded>> {
        Ok(match decode {
            Decode::Raw => self.send_with(options)?.map(Decoded::Raw),
            Decode::Text => self.send_for_text(options)?.map(Decoded::Text),
            Decode::Bool => self.send_for_bool(options)?.map(Decoded::Bool),
        })
    }

    /// GETs `target` and writes the body to `path`. Succeeds when the file
    /// exists afterwards; an empty body counts as a failure.
    pub fn download_file(&self, target: impl Into<Target>, path: impl AsRef<Path>) -> Result<bool> {
        let path = path.as_ref();
        let options = RequestOptions::new(Method::Get, target);
        let Some(mut request) = pipeline::build(&self.config, options)? else {
            return Ok(false);
        };

        if path.as_os_str().is_empty() {
            warn!("null/empty filepath");
            return Ok(false);
        }

        let response = self.exchange(&mut request);
        let Some(bytes) = download_body(&request, response) else {
            return Ok(false);
        };

        if let Err(err) = fs::write(path, bytes) {
            warn!(path = %path.display(), error = %err, "failed writing download");
            return Ok(false);
        }

        Ok(path.exists())
    }

    fn exchange(&self, request: &mut Request) -> Option<Response> {
        let Some(client) = self.client.as_ref() else {
            warn!(method = %request.method, target = %request.target, "client closed");
            return None;
        };

        pipeline::apply_defaults(&self.config, request);
        debug!(method = %request.method, target = %request.target, "sending request");

        let response = match client.execute(request) {
            Ok(response) => response,
            Err(err) => {
                warn!(method = %request.method, target = %request.target, error = %err, "request failed");
                return None;
            }
        };
        log_unsuccessful(request, &response);
        Some(response)
    }
}

pub(crate) fn with_json(options: RequestOptions, json: Option<&str>) -> RequestOptions {
    let options = options.require_body();
    match json {
        Some(json) => options.body(Body::json(json)),
        None => options,
    }
}

pub(crate) fn log_unsuccessful(request: &Request, response: &Response) {
    if !response.is_success() {
        warn!(
            method = %request.method,
            target = %request.target,
            status = response.status_code,
            reason = %response.reason,
            "returned unsuccessfully"
        );
    }
}

pub(crate) fn download_body(request: &Request, response: Option<Response>) -> Option<Vec<u8>> {
    let response = response?;
    if !response.is_success() {
        return None;
    }

    if response.body.is_empty() {
        warn!(method = %request.method, target = %request.target, "empty download body");
        return None;
    }

    Some(response.body)
}
