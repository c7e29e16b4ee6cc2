mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use common::{create_meal, register_user, session_cookie, setup_api_app};
use serde_json::{json, Value};

fn salad() -> Value {
    json!({
        "name": "Salad",
        "description": "Fresh vegetable salad",
        "is_on_diet": true,
        "created_at": "2024-01-01T12:00:00.000Z"
    })
}

#[actix_rt::test]
async fn created_meal_is_listed_for_its_owner() {
    let (app, _db_url) = setup_api_app().await;

    let user = register_user(&app, "meal_user", "meals_list@example.com").await;
    let session = user["session_id"].as_str().expect("session");

    create_meal(&app, session, salad()).await;

    let req = test::TestRequest::get()
        .uri("/meals")
        .cookie(session_cookie(session))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let list = body.as_array().expect("meal list");
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["name"], "Salad");
    assert_eq!(list[0]["description"], "Fresh vegetable salad");
    assert_eq!(list[0]["is_on_diet"], true);
    assert_eq!(list[0]["created_at"], "2024-01-01");
    assert_eq!(list[0]["user_id"], user["id"]);
}

#[actix_rt::test]
async fn listing_without_any_registered_meal_is_empty() {
    let (app, _db_url) = setup_api_app().await;

    let user = register_user(&app, "meal_user", "meals_list_empty@example.com").await;
    let session = user["session_id"].as_str().expect("session");

    let req = test::TestRequest::get()
        .uri("/meals")
        .cookie(session_cookie(session))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body.as_array().expect("meal list").len(), 0);
}

#[actix_rt::test]
async fn users_never_see_each_others_meals() {
    let (app, _db_url) = setup_api_app().await;

    let owner = register_user(&app, "meal_user", "meals_isolated_owner@example.com").await;
    let other = register_user(&app, "meal_user", "meals_isolated_other@example.com").await;
    create_meal(&app, owner["session_id"].as_str().expect("session"), salad()).await;

    let req = test::TestRequest::get()
        .uri("/meals")
        .cookie(session_cookie(other["session_id"].as_str().expect("session")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body.as_array().expect("meal list").len(), 0);
}

#[actix_rt::test]
async fn create_meal_returns_created_record() {
    let (app, _db_url) = setup_api_app().await;

    let user = register_user(&app, "meal_user", "meals_create@example.com").await;
    let body = create_meal(&app, user["session_id"].as_str().expect("session"), salad()).await;

    assert_eq!(body["name"], "Salad");
    assert_eq!(body["description"], "Fresh vegetable salad");
    assert_eq!(body["is_on_diet"], true);
    assert_eq!(body["user_id"], user["id"]);
    assert!(body["id"].is_string());
}

#[actix_rt::test]
async fn create_meal_without_name() {
    let (app, _db_url) = setup_api_app().await;

    let user = register_user(&app, "meal_user", "meals_create_no_name@example.com").await;
    let req = test::TestRequest::post()
        .uri("/meals")
        .cookie(session_cookie(user["session_id"].as_str().expect("session")))
        .set_json(json!({
            "description": "Fresh vegetable salad",
            "is_on_diet": true,
            "created_at": "2024-01-01T12:00:00.000Z"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Bad Request");
    assert_eq!(body["message"], "body must have required properties: name");
    assert_eq!(body["statusCode"], 400);
}

#[actix_rt::test]
async fn create_meal_without_description() {
    let (app, _db_url) = setup_api_app().await;

    let user = register_user(&app, "meal_user", "meals_create_no_desc@example.com").await;
    let req = test::TestRequest::post()
        .uri("/meals")
        .cookie(session_cookie(user["session_id"].as_str().expect("session")))
        .set_json(json!({
            "name": "Salad",
            "is_on_diet": true,
            "created_at": "2024-01-01T12:00:00.000Z"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["message"],
        "body must have required properties: description"
    );
}

#[actix_rt::test]
async fn create_meal_without_any_required_field_lists_all_of_them() {
    let (app, _db_url) = setup_api_app().await;

    let user = register_user(&app, "meal_user", "meals_create_empty@example.com").await;
    let req = test::TestRequest::post()
        .uri("/meals")
        .cookie(session_cookie(user["session_id"].as_str().expect("session")))
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["message"],
        "body must have required properties: name, description, is_on_diet, created_at"
    );
}

#[actix_rt::test]
async fn update_meal_name_only() {
    let (app, _db_url) = setup_api_app().await;

    let user = register_user(&app, "meal_user", "meals_update_name@example.com").await;
    let session = user["session_id"].as_str().expect("session");
    let meal = create_meal(&app, session, salad()).await;

    let req = test::TestRequest::put()
        .uri(&format!("/meals/{}", meal["id"].as_str().expect("id")))
        .cookie(session_cookie(session))
        .set_json(json!({ "name": "Updated Salad" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["name"], "Updated Salad");
    assert_eq!(body["description"], "Fresh vegetable salad");
    assert_eq!(body["is_on_diet"], true);
    assert_eq!(body["user_id"], user["id"]);
    assert!(!body["updated_at"].is_null(), "update stamps updated_at");
}

#[actix_rt::test]
async fn update_meal_all_fields() {
    let (app, _db_url) = setup_api_app().await;

    let user = register_user(&app, "meal_user", "meals_update_all@example.com").await;
    let session = user["session_id"].as_str().expect("session");
    let meal = create_meal(&app, session, salad()).await;

    let req = test::TestRequest::put()
        .uri(&format!("/meals/{}", meal["id"].as_str().expect("id")))
        .cookie(session_cookie(session))
        .set_json(json!({
            "name": "Updated Salad",
            "description": "Updated fresh vegetable salad",
            "is_on_diet": false,
            "created_at": "2024-02-02"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["name"], "Updated Salad");
    assert_eq!(body["description"], "Updated fresh vegetable salad");
    assert_eq!(body["is_on_diet"], false);
    assert_eq!(body["created_at"], "2024-02-02");
}

#[actix_rt::test]
async fn update_meal_with_empty_name_fails_despite_valid_description() {
    let (app, _db_url) = setup_api_app().await;

    let user = register_user(&app, "meal_user", "meals_update_empty_name@example.com").await;
    let session = user["session_id"].as_str().expect("session");
    let meal = create_meal(&app, session, salad()).await;

    let req = test::TestRequest::put()
        .uri(&format!("/meals/{}", meal["id"].as_str().expect("id")))
        .cookie(session_cookie(session))
        .set_json(json!({ "name": "", "description": "Fresh vegetable salad" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Bad Request");
    assert_eq!(body["message"], "name cannot be empty");
    assert_eq!(body["statusCode"], 400);
}

#[actix_rt::test]
async fn update_meal_with_empty_description_fails() {
    let (app, _db_url) = setup_api_app().await;

    let user = register_user(&app, "meal_user", "meals_update_empty_desc@example.com").await;
    let session = user["session_id"].as_str().expect("session");
    let meal = create_meal(&app, session, salad()).await;

    let req = test::TestRequest::put()
        .uri(&format!("/meals/{}", meal["id"].as_str().expect("id")))
        .cookie(session_cookie(session))
        .set_json(json!({ "name": "Salad", "description": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "description cannot be empty");
}

#[actix_rt::test]
async fn update_meal_with_nothing_to_update_fails() {
    let (app, _db_url) = setup_api_app().await;

    let user = register_user(&app, "meal_user", "meals_update_nothing@example.com").await;
    let session = user["session_id"].as_str().expect("session");
    let meal = create_meal(&app, session, salad()).await;

    let req = test::TestRequest::put()
        .uri(&format!("/meals/{}", meal["id"].as_str().expect("id")))
        .cookie(session_cookie(session))
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["message"],
        "body must have at least one property to update"
    );
}

#[actix_rt::test]
async fn update_meal_that_does_not_exist() {
    let (app, _db_url) = setup_api_app().await;

    let user = register_user(&app, "meal_user", "meals_update_missing@example.com").await;
    let session = user["session_id"].as_str().expect("session");

    let req = test::TestRequest::put()
        .uri("/meals/1f2dc158-ef86-4abc-b57c-855fba613a41")
        .cookie(session_cookie(session))
        .set_json(json!({ "name": "Updated Salad" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Not Found");
    assert_eq!(body["message"], "meal not found");
    assert_eq!(body["statusCode"], 404);
}

#[actix_rt::test]
async fn update_meal_with_invalid_id_shape() {
    let (app, _db_url) = setup_api_app().await;

    let user = register_user(&app, "meal_user", "meals_update_bad_id@example.com").await;
    let session = user["session_id"].as_str().expect("session");

    let req = test::TestRequest::put()
        .uri("/meals/invalid-meal-id")
        .cookie(session_cookie(session))
        .set_json(json!({ "name": "Updated Salad" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "params id must be a valid uuid");
}

#[actix_rt::test]
async fn update_meal_owned_by_someone_else_reads_as_missing() {
    let (app, _db_url) = setup_api_app().await;

    let owner = register_user(&app, "meal_user", "meals_update_owner@example.com").await;
    let intruder = register_user(&app, "meal_user", "meals_update_intruder@example.com").await;
    let meal = create_meal(&app, owner["session_id"].as_str().expect("session"), salad()).await;

    let req = test::TestRequest::put()
        .uri(&format!("/meals/{}", meal["id"].as_str().expect("id")))
        .cookie(session_cookie(
            intruder["session_id"].as_str().expect("session"),
        ))
        .set_json(json!({ "name": "Hijacked" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "meal not found");
}

#[actix_rt::test]
async fn delete_meal_then_delete_again() {
    let (app, _db_url) = setup_api_app().await;

    let user = register_user(&app, "meal_user", "meals_delete_twice@example.com").await;
    let session = user["session_id"].as_str().expect("session");
    let meal = create_meal(&app, session, salad()).await;
    let meal_id = meal["id"].as_str().expect("id").to_string();

    let req = test::TestRequest::delete()
        .uri(&format!("/meals/{meal_id}"))
        .cookie(session_cookie(session))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::delete()
        .uri(&format!("/meals/{meal_id}"))
        .cookie(session_cookie(session))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "meal not found");
}

#[actix_rt::test]
async fn delete_meal_with_invalid_id_shape() {
    let (app, _db_url) = setup_api_app().await;

    let user = register_user(&app, "meal_user", "meals_delete_bad_id@example.com").await;
    let session = user["session_id"].as_str().expect("session");

    let req = test::TestRequest::delete()
        .uri("/meals/invalid-meal-id")
        .cookie(session_cookie(session))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "params id must be a valid uuid");
}

#[actix_rt::test]
async fn delete_meal_owned_by_someone_else_reads_as_missing() {
    let (app, _db_url) = setup_api_app().await;

    let owner = register_user(&app, "meal_user", "meals_delete_owner@example.com").await;
    let intruder = register_user(&app, "meal_user", "meals_delete_intruder@example.com").await;
    let meal = create_meal(&app, owner["session_id"].as_str().expect("session"), salad()).await;

    let req = test::TestRequest::delete()
        .uri(&format!("/meals/{}", meal["id"].as_str().expect("id")))
        .cookie(session_cookie(
            intruder["session_id"].as_str().expect("session"),
        ))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "meal not found");

    // Still there for its owner.
    let req = test::TestRequest::get()
        .uri("/meals")
        .cookie(session_cookie(owner["session_id"].as_str().expect("session")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body.as_array().expect("meal list").len(), 1);
}
