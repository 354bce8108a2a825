use super::error::{ApiErrorCode, ApiRejection};
use super::handler;
use super::handler::AutoSuggestQuery;
use crate::server::Server;
use std::borrow::Cow;
use std::convert::Infallible;
use std::sync::Arc;
use warp::{Filter, reject};

// Paths are matched before methods so unknown paths reject with 404, not 405.
pub fn routes(
    server: Arc<Server>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let list = warp::path("users")
        .and(warp::path::end())
        .and(warp::get())
        .and(with(server.user_service.clone()))
        .and_then(handler::list_users);

    let create = warp::path("users")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and(with(server.user_service.clone()))
        .and_then(handler::create_user);

    let get = user_by_id()
        .and(warp::get())
        .and(with(server.user_service.clone()))
        .and_then(handler::get_user);

    let update = user_by_id()
        .and(warp::put())
        .and(warp::body::json())
        .and(with(server.user_service.clone()))
        .and_then(handler::update_user);

    let delete = user_by_id()
        .and(warp::delete())
        .and(with(server.user_service.clone()))
        .and_then(handler::delete_user);

    let auto_suggest = warp::path("getAutoSuggestUsers")
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::query::<AutoSuggestQuery>())
        .and(with(server.user_service.clone()))
        .and_then(handler::auto_suggest_users);

    list.or(create)
        .or(get)
        .or(update)
        .or(delete)
        .or(auto_suggest)
}

/// Routes with rejections turned into responses and a tracing span per request.
pub fn app(
    server: Arc<Server>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = Infallible> + Clone {
    routes(server)
        .recover(super::recover_error)
        .with(warp::trace::request())
}

fn user_by_id() -> impl Filter<Extract = (String,), Error = warp::Rejection> + Clone {
    warp::path("users")
        .and(warp::path::param::<String>())
        .and(warp::path::end())
        .and_then(decode_segment)
}

/// warp hands path segments over still percent-encoded.
async fn decode_segment(raw: String) -> Result<String, warp::Rejection> {
    urlencoding::decode(&raw).map(Cow::into_owned).map_err(|e| {
        reject::custom(ApiRejection {
            code: ApiErrorCode::ValidationFailed,
            message: format!("user id is not valid UTF-8: {}", e),
        })
    })
}

fn with<ServiceType>(
    service: Arc<ServiceType>,
) -> impl Filter<Extract = (Arc<ServiceType>,), Error = Infallible> + Clone
where
    ServiceType: Send + Sync + ?Sized,
{
    warp::any().map(move || service.clone())
}
