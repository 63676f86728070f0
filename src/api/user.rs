//! User Endpoints
//!
//! Login and registration.

use gloo_net::http::Request;

use super::{dispatch, read_json, read_text, url};
use crate::error::ApiError;
use crate::models::{LoginRequest, LoginResponse, RegisterRequest, User};

/// `POST /api/users/login`
pub async fn login(args: &LoginRequest) -> Result<User, ApiError> {
    let request = Request::post(&url("/api/users/login")).json(args)?;
    let response = dispatch(request).await?;
    let body: LoginResponse = read_json(response).await?;
    accept_login(body)
}

const MISSING_USER: &str = "Login response had no user";

/// A 2xx login response still carries a `status` that must say success
fn accept_login(body: LoginResponse) -> Result<User, ApiError> {
    let LoginResponse { status, user, message } = body;
    let message = match user {
        Some(user) if status == "success" => return Ok(user),
        None if status == "success" => message.unwrap_or_else(|| MISSING_USER.to_string()),
        _ => message.unwrap_or(status),
    };
    Err(ApiError::Rejected { status: 200, message })
}

/// `POST /api/users/register`, returns the server's confirmation text
pub async fn register(args: &RegisterRequest) -> Result<String, ApiError> {
    let request = Request::post(&url("/api/users/register")).json(args)?;
    let response = dispatch(request).await?;
    read_text(response).await
}
