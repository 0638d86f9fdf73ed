//! REST surface tests through the axum router

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use solution_directory::api::rest::routes::register_routes;
use tower::ServiceExt;

mod common;
use common::*;

fn router(dir: &TestDirectory) -> Router {
    register_routes(Router::new(), dir.service.clone())
}

async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app.clone().oneshot(request.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&bytes).into_owned(),
        ))
    };
    (status, value)
}

async fn create_acme(app: &Router) -> String {
    let (status, body) = call(
        app,
        Method::POST,
        "/v2/solution/companies",
        Some(json!({
            "companyId": "",
            "ko": {"name": "Acme", "ceo": "김대표"},
            "en": {"name": "Acme Inc", "ceo": "CEO Kim"}
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["companyId"].as_str().unwrap().to_string()
}

async fn create_item(app: &Router, company_id: &str, main: i32, sub: i32, title: &str) -> Value {
    let (status, body) = call(
        app,
        Method::POST,
        "/v2/solution/items",
        Some(json!({
            "companyId": company_id,
            "mainCategoryId": main,
            "subCategoryId": sub,
            "ko": {"title": format!("{title} 한국어")},
            "en": {"title": title, "abstract": "An abstract"}
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body
}

#[tokio::test]
async fn test_company_lifecycle_over_http() {
    print_test_header(
        "test_company_lifecycle_over_http",
        &["Create, read, patch and delete a company through the REST routes."],
    );
    let dir = create_test_directory();
    let app = router(&dir);

    println!("\n📝 Stage 1: POST /companies");
    let id = create_acme(&app).await;
    assert_eq!(id.len(), 8);

    println!("\n📝 Stage 2: GET /companies/{{id}}");
    let (status, body) = call(&app, Method::GET, &format!("/v2/solution/companies/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["companyId"], id.as_str());
    assert_eq!(body["ko"]["name"], "Acme");
    assert_eq!(body["en"]["ceo"], "CEO Kim");
    assert_eq!(body["en"]["fax"], "");
    assert!(body["createdAt"].is_string());

    println!("\n📝 Stage 3: PATCH only the Korean block");
    let (status, body) = call(
        &app,
        Method::PATCH,
        &format!("/v2/solution/companies/{id}"),
        Some(json!({"companyId": id, "ko": {"name": "에이씨엠이"}})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ko"]["name"], "에이씨엠이");
    assert_eq!(body["en"]["name"], "Acme Inc");

    println!("\n📝 Stage 4: DELETE twice");
    let uri = format!("/v2/solution/companies/{id}");
    let (status, body) = call(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true}));
    let (_, body) = call(&app, Method::DELETE, &uri, None).await;
    assert_eq!(body, json!({"success": false}));
    println!("✅ Company lifecycle complete");
}

#[tokio::test]
async fn test_missing_entities_are_404_with_empty_body() {
    let dir = create_test_directory();
    let app = router(&dir);

    for (method, uri, body) in [
        (Method::GET, "/v2/solution/companies/nope", None),
        (Method::GET, "/v2/solution/items/nope", None),
        (Method::PATCH, "/v2/solution/companies/nope", Some(json!({"en": {"name": "x"}}))),
        (Method::PATCH, "/v2/solution/items/nope", Some(json!({"mainCategoryId": 1}))),
        (Method::GET, "/v2/solution/categories/main/42", None),
    ] {
        let (status, body) = call(&app, method.clone(), uri, body).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{method} {uri}");
        assert_eq!(body, Value::Null, "{method} {uri}");
    }
}

#[tokio::test]
async fn test_validation_errors_are_problem_details() {
    let dir = create_test_directory();
    let app = router(&dir);

    let (status, body) = call(
        &app,
        Method::POST,
        "/v2/solution/items",
        Some(json!({"companyId": "ghost", "mainCategoryId": 0, "subCategoryId": 0})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
    assert_eq!(body["title"], "Validation Error");
    assert!(body["detail"].as_str().unwrap().contains("ghost"));

    let (status, _) = call(
        &app,
        Method::POST,
        "/v2/solution/companies",
        Some(json!({"companyId": "x", "en": "Acme Inc"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, body) = call(&app, Method::GET, "/v2/solution/search?query=giga(", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("invalid search pattern"));
}

#[tokio::test]
async fn test_extra_request_fields_are_ignored() {
    let dir = create_test_directory();
    let app = router(&dir);

    let (status, body) = call(
        &app,
        Method::POST,
        "/v2/solution/companies",
        Some(json!({
            "companyId": "acme",
            "extra": true,
            "fr": {"name": "Acme SA"},
            "en": {"name": "Acme Inc"}
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body["en"]["name"], "Acme Inc");
    assert!(body.get("fr").is_none());
    assert!(body.get("extra").is_none());

    let (status, body) = call(
        &app,
        Method::PATCH,
        "/v2/solution/companies/acme",
        Some(json!({"ko": {"name": "에이씨엠이"}, "updatedBy": "admin"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["ko"]["name"], "에이씨엠이");
    assert_eq!(body["en"]["name"], "Acme Inc");
}

#[tokio::test]
async fn test_explicit_duplicate_id_is_409() {
    let dir = create_test_directory();
    let app = router(&dir);
    let payload = json!({"companyId": "acme", "en": {"name": "Acme"}});

    let (status, _) = call(&app, Method::POST, "/v2/solution/companies", Some(payload.clone())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = call(&app, Method::POST, "/v2/solution/companies", Some(payload)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["title"], "Conflict");
}

#[tokio::test]
async fn test_category_browsing_and_search() {
    print_test_header(
        "test_category_browsing_and_search",
        &["Localized listings by category and search results with company names."],
    );
    let dir = create_test_directory();
    let app = router(&dir);

    let id = create_acme(&app).await;
    let giga = create_item(&app, &id, 0, 1, "Giga Sensing").await;
    create_item(&app, &id, 0, 2, "Smart Parking Hub").await;

    let (status, body) = call(
        &app,
        Method::GET,
        "/v2/solution/companies?mainCategoryId=0&subCategoryId=&lang=en",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["name"], "Acme Inc");

    let (_, body) = call(
        &app,
        Method::GET,
        "/v2/solution/companies?mainCategoryId=0&subCategoryId=0",
        None,
    )
    .await;
    assert_eq!(body, json!([]));

    let (status, body) = call(
        &app,
        Method::GET,
        &format!("/v2/solution/items?companyId={id}&mainCategoryId=0&subCategoryId=1&lang=en"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["solutionId"], giga["solutionId"]);
    assert_eq!(body[0]["title"], "Giga Sensing");
    assert_eq!(body[0]["abstract"], "An abstract");
    assert!(body[0].get("companyName").is_none());

    let (_, body) = call(&app, Method::GET, "/v2/solution/search?query=GIGA&lang=en", None).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["companyName"], "Acme Inc");

    let (_, body) = call(&app, Method::GET, "/v2/solution/search?query=%20%20", None).await;
    assert_eq!(body, json!([]));
    assert_eq!(dir.solutions.search_calls(), 1);

    let (_, body) = call(
        &app,
        Method::GET,
        &format!("/v2/solution/companies/{id}/solutions"),
        None,
    )
    .await;
    assert_eq!(body.as_array().unwrap().len(), 2);
    assert!(body[0]["ko"]["title"].is_string());
}

#[tokio::test]
async fn test_company_listing_pages() {
    let dir = create_test_directory();
    let app = router(&dir);
    for i in 0..12 {
        call(
            &app,
            Method::POST,
            "/v2/solution/companies",
            Some(json!({"companyId": format!("c{i:02}"), "en": {"name": "Co"}})),
        )
        .await;
    }

    let (status, body) = call(&app, Method::GET, "/v2/solution/companies/all", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 12);
    assert_eq!(body["page"], 1);
    assert_eq!(body["perPage"], 10);
    assert_eq!(body["items"].as_array().unwrap().len(), 10);

    let (_, body) = call(
        &app,
        Method::GET,
        "/v2/solution/companies/all?page=2&perPage=10",
        None,
    )
    .await;
    assert_eq!(body["items"].as_array().unwrap().len(), 2);
    assert_eq!(body["items"][0]["companyId"], "c10");
}

#[tokio::test]
async fn test_solution_patch_and_delete() {
    let dir = create_test_directory();
    let app = router(&dir);
    let id = create_acme(&app).await;
    let item = create_item(&app, &id, 0, 1, "Giga Sensing").await;
    let uri = format!("/v2/solution/items/{}", item["solutionId"].as_str().unwrap());

    let (status, body) = call(
        &app,
        Method::PATCH,
        &uri,
        Some(json!({"subCategoryId": 2, "en": {"title": "Giga Sensing 2"}})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["subCategoryId"], 2);
    assert_eq!(body["mainCategoryId"], 0);
    assert_eq!(body["en"]["title"], "Giga Sensing 2");
    assert_eq!(body["en"]["abstract"], "");
    assert_eq!(body["ko"]["title"], "Giga Sensing 한국어");

    let (_, body) = call(&app, Method::DELETE, &uri, None).await;
    assert_eq!(body, json!({"success": true}));
    let (status, _) = call(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_category_endpoints() {
    let dir = create_test_directory();
    let app = router(&dir);

    let (status, body) = call(&app, Method::GET, "/v2/solution/categories?lang=en", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 4);
    assert_eq!(body[0]["mainCategories"][0]["name"], "Transportation");
    assert_eq!(body[0]["mainCategories"][0]["subCategories"][1]["position"]["x"], 1);

    let (status, body) = call(&app, Method::GET, "/v2/solution/categories/main/13", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["superCategoryId"], 2);
    assert_eq!(body["mainCategory"]["id"], 13);
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let dir = create_test_directory();
    let app = router(&dir);

    let (status, body) = call(&app, Method::GET, "/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["components"]["schemas"]["CompanyDto"].is_object());
}
