use serde_json::{Value, json};
use std::sync::Arc;
use userdir::api;
use userdir::server::Server;
use userdir::settings::{Http, Log, Settings, User};
use warp::http::StatusCode;

fn app() -> impl warp::Filter<Extract = (impl warp::Reply,), Error = std::convert::Infallible> + Clone
{
    let settings = Settings {
        http: Http { host: "127.0.0.1".to_string(), port: 3000 },
        log: Log { filter: "info".to_string() },
        user: User { backend: "memory".to_string() },
    };
    api::app(Arc::new(Server::try_new(&settings).unwrap()))
}

fn alice() -> Value {
    json!({ "id": "1", "login": "alice", "password": "abc123", "age": 30, "isDeleted": false })
}

fn bob() -> Value {
    json!({ "id": "2", "login": "bob", "password": "bob42", "age": 25, "isDeleted": false })
}

fn body_json(response: &warp::http::Response<impl AsRef<[u8]>>) -> Value {
    serde_json::from_slice(response.body().as_ref()).unwrap()
}

#[tokio::test]
async fn test_user_lifecycle() {
    let app = app();

    let created = warp::test::request()
        .method("POST")
        .path("/users")
        .json(&alice())
        .reply(&app)
        .await;
    assert_eq!(created.status(), StatusCode::OK);
    assert!(created.body().is_empty());

    let fetched = warp::test::request().path("/users/1").reply(&app).await;
    assert_eq!(fetched.status(), StatusCode::OK);
    assert_eq!(body_json(&fetched), alice());

    let mut changed = alice();
    changed["age"] = json!(31);
    let updated = warp::test::request()
        .method("PUT")
        .path("/users/1")
        .json(&changed)
        .reply(&app)
        .await;
    assert_eq!(updated.status(), StatusCode::OK);
    assert_eq!(body_json(&updated), changed);

    let deleted = warp::test::request()
        .method("DELETE")
        .path("/users/1")
        .reply(&app)
        .await;
    assert_eq!(deleted.status(), StatusCode::OK);
    assert!(deleted.body().is_empty());

    let gone = warp::test::request().path("/users/1").reply(&app).await;
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(&gone)["code"], "NotFound");

    let listed = warp::test::request().path("/users").reply(&app).await;
    assert_eq!(listed.status(), StatusCode::OK);
    let all = body_json(&listed);
    assert_eq!(all.as_array().unwrap().len(), 1);
    assert_eq!(all[0]["isDeleted"], true);
}

#[tokio::test]
async fn test_duplicates_are_bad_requests() {
    let app = app();
    for user in [alice(), bob()] {
        let response = warp::test::request()
            .method("POST")
            .path("/users")
            .json(&user)
            .reply(&app)
            .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let mut same_login = alice();
    same_login["id"] = json!("3");
    let response = warp::test::request()
        .method("POST")
        .path("/users")
        .json(&same_login)
        .reply(&app)
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(&response)["code"], "DuplicateLogin");

    let mut same_id = alice();
    same_id["login"] = json!("carol");
    let response = warp::test::request()
        .method("POST")
        .path("/users")
        .json(&same_id)
        .reply(&app)
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(&response)["code"], "DuplicateId");

    let mut take_bobs_login = alice();
    take_bobs_login["login"] = json!("bob");
    let response = warp::test::request()
        .method("PUT")
        .path("/users/1")
        .json(&take_bobs_login)
        .reply(&app)
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(&response)["code"], "DuplicateLogin");

    let listed = warp::test::request().path("/users").reply(&app).await;
    assert_eq!(body_json(&listed), json!([alice(), bob()]));
}

#[tokio::test]
async fn test_schema_violations_are_bad_requests() {
    let app = app();

    let mut no_digit = alice();
    no_digit["password"] = json!("abcdefg");
    let mut too_young = alice();
    too_young["age"] = json!(3);
    let mut missing_field = alice();
    missing_field.as_object_mut().unwrap().remove("isDeleted");
    let mut wrong_type = alice();
    wrong_type["age"] = json!("thirty");
    let mut unknown_field = alice();
    unknown_field["role"] = json!("admin");

    for body in [no_digit, too_young, missing_field, wrong_type, unknown_field] {
        let response = warp::test::request()
            .method("POST")
            .path("/users")
            .json(&body)
            .reply(&app)
            .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(body_json(&response)["code"], "ValidationFailed");
    }

    let listed = warp::test::request().path("/users").reply(&app).await;
    assert_eq!(body_json(&listed), json!([]));
}

#[tokio::test]
async fn test_update_and_delete_missing_user() {
    let app = app();

    let updated = warp::test::request()
        .method("PUT")
        .path("/users/1")
        .json(&alice())
        .reply(&app)
        .await;
    assert_eq!(updated.status(), StatusCode::NOT_FOUND);

    let deleted = warp::test::request()
        .method("DELETE")
        .path("/users/1")
        .reply(&app)
        .await;
    assert_eq!(deleted.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_auto_suggest() {
    let app = app();
    let mut malice = alice();
    malice["id"] = json!("3");
    malice["login"] = json!("malice");
    for user in [alice(), bob(), malice] {
        warp::test::request()
            .method("POST")
            .path("/users")
            .json(&user)
            .reply(&app)
            .await;
    }

    let response = warp::test::request()
        .path("/getAutoSuggestUsers?loginSubstring=lic&limit=10")
        .reply(&app)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let logins: Vec<Value> = body_json(&response)
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["login"].clone())
        .collect();
    assert_eq!(logins, vec![json!("alice"), json!("malice")]);

    let response = warp::test::request()
        .path("/getAutoSuggestUsers?loginSubstring=&limit=2")
        .reply(&app)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(&response), json!([alice(), bob()]));
}

#[tokio::test]
async fn test_auto_suggest_query_violations() {
    let app = app();

    for path in [
        "/getAutoSuggestUsers",
        "/getAutoSuggestUsers?loginSubstring=a",
        "/getAutoSuggestUsers?limit=3",
        "/getAutoSuggestUsers?loginSubstring=a&limit=many",
        "/getAutoSuggestUsers?loginSubstring=a&limit=-1",
    ] {
        let response = warp::test::request().path(path).reply(&app).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{path}");
        assert_eq!(body_json(&response)["code"], "ValidationFailed");
    }
}

#[tokio::test]
async fn test_unknown_route_and_method() {
    let app = app();

    let response = warp::test::request().path("/nowhere").reply(&app).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = warp::test::request()
        .method("PATCH")
        .path("/users/1")
        .reply(&app)
        .await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_ids_needing_percent_encoding() {
    let app = app();

    for id in ["a b", "ид-1", "50%/off"] {
        let mut user = alice();
        user["id"] = json!(id);
        user["login"] = json!(format!("login {id}"));
        let created = warp::test::request()
            .method("POST")
            .path("/users")
            .json(&user)
            .reply(&app)
            .await;
        assert_eq!(created.status(), StatusCode::OK, "{id}");

        let path = format!("/users/{}", urlencoding::encode(id));

        let fetched = warp::test::request().path(&path).reply(&app).await;
        assert_eq!(fetched.status(), StatusCode::OK, "{id}");
        assert_eq!(body_json(&fetched), user);

        let mut changed = user.clone();
        changed["age"] = json!(50);
        let updated = warp::test::request()
            .method("PUT")
            .path(&path)
            .json(&changed)
            .reply(&app)
            .await;
        assert_eq!(updated.status(), StatusCode::OK, "{id}");
        assert_eq!(body_json(&updated), changed);

        let deleted = warp::test::request()
            .method("DELETE")
            .path(&path)
            .reply(&app)
            .await;
        assert_eq!(deleted.status(), StatusCode::OK, "{id}");
    }

    let response = warp::test::request().path("/users/%FF").reply(&app).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(&response)["code"], "ValidationFailed");
}

#[tokio::test]
async fn test_non_json_content_type_is_bad_request() {
    let app = app();

    let response = warp::test::request()
        .method("POST")
        .path("/users")
        .header("content-type", "text/plain")
        .body(alice().to_string())
        .reply(&app)
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(&response)["code"], "ValidationFailed");

    let listed = warp::test::request().path("/users").reply(&app).await;
    assert_eq!(body_json(&listed), json!([]));
}
