use super::error::*;
use crate::application_port::UserService;
use crate::domain_model::User;
use serde::Deserialize;
use std::sync::Arc;
use warp::{self, reject};

fn rejection<E: Into<ApiRejection>>(error: E) -> warp::Rejection {
    reject::custom(error.into())
}

pub async fn list_users(
    user_service: Arc<dyn UserService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let users = user_service.list().await;
    Ok(warp::reply::json(&users))
}

pub async fn create_user(
    body: User,
    user_service: Arc<dyn UserService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    user_service.create(body).await.map_err(rejection)?;
    Ok(warp::reply())
}

pub async fn get_user(
    id: String,
    user_service: Arc<dyn UserService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let user = user_service.get_by_id(&id).await.map_err(rejection)?;
    Ok(warp::reply::json(&user))
}

pub async fn update_user(
    id: String,
    body: User,
    user_service: Arc<dyn UserService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let user = user_service.update(&id, body).await.map_err(rejection)?;
    Ok(warp::reply::json(&user))
}

pub async fn delete_user(
    id: String,
    user_service: Arc<dyn UserService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    user_service.delete(&id).await.map_err(rejection)?;
    Ok(warp::reply())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoSuggestQuery {
    pub login_substring: String,
    pub limit: usize,
}

pub async fn auto_suggest_users(
    query: AutoSuggestQuery,
    user_service: Arc<dyn UserService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let users = user_service
        .autosuggest(&query.login_substring, query.limit)
        .await;
    Ok(warp::reply::json(&users))
}
