use std::path::Path;

use tracing::{debug, warn};

use crate::helper::{download_body, log_unsuccessful, with_json};
use crate::http_client::reqwest::ReqwestAsyncHttpClient;
use crate::http_client::AsyncHttpClient;
use crate::pipeline;
use crate::{
    ClientConfig, Decode, Decoded, Error, Method, Request, RequestOptions, Response, Result,
    Target,
};

/// Suspending counterpart of [`RequestHelper`](crate::RequestHelper). The
/// operations and failure sentinels are the same; the futures yield at the
/// network and file system boundaries.
pub struct AsyncRequestHelper<C: AsyncHttpClient = ReqwestAsyncHttpClient> {
    config: ClientConfig,
    client: Option<C>,
}

impl AsyncRequestHelper<ReqwestAsyncHttpClient> {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = ReqwestAsyncHttpClient::create(&config).map_err(Error::Client)?;
        Ok(Self::with_client(config, client))
    }
}

impl<C: AsyncHttpClient> AsyncRequestHelper<C> {
    pub fn with_client(config: ClientConfig, client: C) -> Self {
        AsyncRequestHelper {
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

    pub fn close(&mut self) -> bool {
        self.client.take().is_some()
    }

    pub fn is_closed(&self) -> bool {
        self.client.is_none()
    }

    #[cfg(test)]
    pub(super) fn client(&self) -> Option<&C> {
        self.client.as_ref()
    }

    pub async fn send(&self, mut request: Request) -> Option<Response> {
        self.exchange(&mut request).await
    }

    pub async fn send_with(&self, options: RequestOptions) -> Result<Option<Response>> {
        Ok(match pipeline::build(&self.config, options)? {
            Some(mut request) => self.exchange(&mut request).await,
            None => None,
        })
    }

    pub async fn send_for_text(&self, options: RequestOptions) -> Result<Option<String>> {
        let Some(mut request) = pipeline::build(&self.config, options)? else {
            return Ok(None);
        };
        let response = self.exchange(&mut request).await;
        Ok(pipeline::read_text(&request, response))
    }

    pub async fn send_for_bool(&self, options: RequestOptions) -> Result<Option<bool>> {
        let Some(mut request) = pipeline::build(&self.config, options)? else {
            return Ok(None);
        };
        let response = self.exchange(&mut request).await;
        let text = pipeline::read_text(&request, response);
        Ok(pipeline::read_bool(&request, text))
    }

    pub async fn send_json(
        &self,
        options: RequestOptions,
        json: Option<&str>,
    ) -> Result<Option<Response>> {
        self.send_with(with_json(options, json)).await
    }

    pub async fn send_json_for_text(
        &self,
        options: RequestOptions,
        json: Option<&str>,
    ) -> Result<Option<String>> {
        self.send_for_text(with_json(options, json)).await
    }

    pub async fn send_json_for_bool(
        &self,
        options: RequestOptions,
        json: Option<&str>,
    ) -> Result<Option<bool>> {
        self.send_for_bool(with_json(options, json)).await
    }

    pub async fn dispatch(
        &self,
        options: RequestOptions,
        decode: Decode,
    ) -> Result<Option<Decoded>> {
        Ok(match decode {
            Decode::Raw => self.send_with(options).await?.map(Decoded::Raw),
            Decode::Text => self.send_for_text(options).await?.map(Decoded::Text),
            Decode::Bool => self.send_for_bool(options).await?.map(Decoded::Bool),
        })
    }

    pub async fn download_file(
        &self,
        target: impl Into<Target>,
        path: impl AsRef<Path>,
    ) -> Result<bool> {
        let path = path.as_ref();
        let options = RequestOptions::new(Method::Get, target);
        let Some(mut request) = pipeline::build(&self.config, options)? else {
            return Ok(false);
        };

        if path.as_os_str().is_empty() {
            warn!("null/empty filepath");
            return Ok(false);
        }

        let response = self.exchange(&mut request).await;
        let Some(bytes) = download_body(&request, response) else {
            return Ok(false);
        };

        if let Err(err) = tokio::fs::write(path, bytes).await {
            warn!(path = %path.display(), error = %err, "failed writing download");
            return Ok(false);
        }

        Ok(tokio::fs::try_exists(path).await.unwrap_or(false))
    }

    async fn exchange(&self, request: &mut Request) -> Option<Response> {
        let Some(client) = self.client.as_ref() else {
            warn!(method = %request.method, target = %request.target, "client closed");
            return None;
        };

        pipeline::apply_defaults(&self.config, request);
        debug!(method = %request.method, target = %request.target, "sending request");

        let response = match client.execute(request).await {
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
