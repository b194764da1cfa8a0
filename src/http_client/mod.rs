use anyhow::Result;

use crate::{ClientConfig, Request, Response};


pub mod reqwest;

/// Blocking transport. A failed exchange is an `Err`; a non-2xx status is
/// still an `Ok` response.
pub trait HttpClient {
    fn create(config: &ClientConfig) -> Result<Self>
    where
        Self: Sized;

    fn execute(&self, request: &Request) -> Result<Response>;
}

#[allow(async_fn_in_trait)]
pub trait AsyncHttpClient {
    fn create(config: &ClientConfig) -> Result<Self>
    where
        Self: Sized;

    async fn execute(&self, request: &Request) -> Result<Response>;
}
