//! Cookfarm API Bindings
//!
//! Frontend bindings to the REST backend, organized by resource.

mod ingredient;
mod user;

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::config;
use crate::error::{rejection_message, ApiError};

// Re-export all public items
pub use ingredient::*;
pub use user::*;

/// Send a request and turn non-2xx responses into `ApiError::Rejected`
async fn dispatch(request: Request) -> Result<Response, ApiError> {
    let method = request.method();
    let url = request.url();
    log::debug!("[API] {:?} {}", method, url);

    let response = request.send().await.map_err(|e| {
        log::error!("[API] {:?} {} failed: {}", method, url, e);
        ApiError::Network(e.to_string())
    })?;

    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = rejection_message(status, &body);
    log::warn!("[API] {:?} {} rejected with {}: {}", method, url, status, message);
    Err(ApiError::Rejected { status, message })
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response.json::<T>().await.map_err(ApiError::from)
}

async fn read_text(response: Response) -> Result<String, ApiError> {
    response.text().await.map_err(ApiError::from)
}

fn url(path: &str) -> String {
    config::api_url(path)
}
