//! Ingredient Endpoints
//!
//! Item CRUD scoped to a user.

use gloo_net::http::Request;

use super::{dispatch, read_json, read_text, url};
use crate::error::ApiError;
use crate::models::{Item, ItemForm};

/// `GET /api/ingredients/user/{user_id}`, normalized
pub async fn list_items(user_id: i64) -> Result<Vec<Item>, ApiError> {
    let request = Request::get(&url(&format!("/api/ingredients/user/{}", user_id))).build()?;
    let response = dispatch(request).await?;
    read_json(response).await
}

/// `POST /api/ingredients/add/{user_id}`
pub async fn create_item(user_id: i64, form: &ItemForm) -> Result<String, ApiError> {
    let request = Request::post(&url(&format!("/api/ingredients/add/{}", user_id))).json(form)?;
    let response = dispatch(request).await?;
    read_text(response).await
}

/// `PUT /api/ingredients/{id}`, full replace
pub async fn update_item(id: i64, form: &ItemForm) -> Result<String, ApiError> {
    let request = Request::put(&url(&format!("/api/ingredients/{}", id))).json(form)?;
    let response = dispatch(request).await?;
    read_text(response).await
}

/// `DELETE /api/ingredients/{id}`
pub async fn delete_item(id: i64) -> Result<(), ApiError> {
    let request = Request::delete(&url(&format!("/api/ingredients/{}", id))).build()?;
    dispatch(request).await?;
    Ok(())
}
