//! Request assembly and response decoding shared by the blocking and the
//! suspending helper.

use tracing::{debug, warn};

use crate::{ClientConfig, Request, RequestOptions, Response, Result};


pub(crate) const CACHE_CONTROL: &str = "Cache-Control";
pub(crate) const CONTENT_TYPE: &str = "Content-Type";
const NO_CACHE: &str = "no-cache";

/// Checks method, target and body in that order. The first missing one is
/// logged and the result is `Ok(None)`.
pub(crate) fn build(config: &ClientConfig, options: RequestOptions) -> Result<Option<Request>> {
    let RequestOptions {
        method,
        target,
        body,
        body_required,
        headers,
    } = options;

    let Some(method) = method else {
        warn!("null method");
        return Ok(None);
    };

    let Some(target) = target else {
        warn!("null target");
        return Ok(None);
    };

    let Some(target) = target.resolve(config.base_address())? else {
        warn!("null/empty target");
        return Ok(None);
    };

    if body_required && body.as_ref().map_or(true, |body| body.content.is_empty()) {
        warn!(%method, %target, "null/empty body");
        return Ok(None);
    }

    let mut request = Request::new(method, target);
    request.headers = headers;
    request.body = body;
    Ok(Some(request))
}

/// Client-level defaults only fill gaps: a header the request already names
/// is left alone.
pub(crate) fn apply_defaults(config: &ClientConfig, request: &mut Request) {
    if let Some(content_type) = request
        .body
        .as_ref()
        .and_then(|body| body.content_type.clone())
    {
        request.add_default_header(CONTENT_TYPE, &content_type);
    }

    if !config.cache_enabled() {
        request.add_default_header(CACHE_CONTROL, NO_CACHE);
    }

    if request.timeout.is_none() {
        request.timeout = Some(config.timeout());
    }
}

pub(crate) fn read_text(request: &Request, response: Option<Response>) -> Option<String> {
    let Some(response) = response else {
        debug!(method = %request.method, target = %request.target, "returned unsuccessfully");
        return None;
    };

    if !response.is_success() {
        debug!(
            method = %request.method,
            target = %request.target,
            status = response.status_code,
            reason = %response.reason,
            "returned unsuccessfully"
        );
        return None;
    }

    Some(response.text())
}

pub(crate) fn read_bool(request: &Request, text: Option<String>) -> Option<bool> {
    match text {
        Some(text) if !text.is_empty() => Some(text.eq_ignore_ascii_case("true")),
        Some(_) => {
            debug!(method = %request.method, target = %request.target, "returned empty body");
            None
        }
        None => None,
    }
}
