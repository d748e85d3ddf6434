mod common;

use axum::http::{Method, StatusCode};
use serde_json::{Value, json};
use uuid::Uuid;

// ─── CREATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_author_success() {
    let server = common::make_server();

    let response = server
        .post("/api/authors")
        .json(&json!({
            "firstName": "Jane",
            "lastName": "Austen",
            "dateOfBirth": "1775-12-16",
            "mainCategory": "Romance"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<Value>();
    assert_eq!(json["name"], "JaneAusten");
    assert_eq!(json["mainCategory"], "Romance");
    assert!(json["age"].as_i64().unwrap() >= 249);
    assert!(Uuid::parse_str(json["id"].as_str().unwrap()).is_ok());
}

#[tokio::test]
async fn test_create_author_location_resolves() {
    let server = common::make_server();

    let response = server
        .post("/api/authors")
        .json(&common::author_payload("Ada", "Lovelace", "Mathematics"))
        .await;

    response.assert_status(StatusCode::CREATED);

    let id = response.json::<Value>()["id"].as_str().unwrap().to_string();
    let location = response.header("location");
    let location = location.to_str().unwrap();
    assert_eq!(location, format!("/api/authors/{id}"));

    let fetched = server.get(location).await;
    fetched.assert_status_ok();
    assert_eq!(fetched.json::<Value>()["id"], id);
}

#[tokio::test]
async fn test_create_author_location_uses_public_base_url() {
    let server = common::make_server_with_base_url("https://api.example.com");

    let response = server
        .post("/api/authors")
        .json(&common::author_payload("Ada", "Lovelace", "Mathematics"))
        .await;

    response.assert_status(StatusCode::CREATED);

    let id = response.json::<Value>()["id"].as_str().unwrap().to_string();
    assert_eq!(
        response.header("location").to_str().unwrap(),
        format!("https://api.example.com/api/authors/{id}")
    );
}

#[tokio::test]
async fn test_create_author_persists_exactly_one() {
    let server = common::make_server();

    common::create_test_author(&server, "Jane", "Austen", "Romance").await;

    let response = server.get("/api/authors").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>().as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_author_with_courses() {
    let server = common::make_server();

    let response = server
        .post("/api/authors")
        .json(&json!({
            "firstName": "Jane",
            "lastName": "Austen",
            "dateOfBirth": "1775-12-16",
            "mainCategory": "Romance",
            "courses": [
                { "title": "Irony", "description": "A close reading" },
                { "title": "Letters" }
            ]
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let id = response.json::<Value>()["id"].as_str().unwrap().to_string();

    let courses = server.get(&format!("/api/authors/{id}/courses")).await;
    courses.assert_status_ok();

    let json = courses.json::<Value>();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["title"], "Irony");
    assert_eq!(items[1]["title"], "Letters");
    assert_eq!(items[0]["authorId"], id);
}

#[tokio::test]
async fn test_create_author_missing_fields() {
    let server = common::make_server();

    let response = server
        .post("/api/authors")
        .json(&json!({ "firstName": "Jane" }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.header("content-type").to_str().unwrap(),
        "application/problem+json"
    );

    let json = response.json::<Value>();
    assert_eq!(
        json["type"],
        "https://courselibrary.com/modelvalidationproblem"
    );
    assert_eq!(json["title"], "One or more validation errors occurred.");
    assert_eq!(json["status"], 422);
    assert_eq!(json["detail"], "See the errors field for details.");
    assert_eq!(json["instance"], "/api/authors");
    assert!(json["errors"].get("lastName").is_some());
    assert!(json["errors"].get("dateOfBirth").is_some());
    assert!(json["errors"].get("mainCategory").is_some());
    assert!(json["errors"].get("firstName").is_none());
}

#[tokio::test]
async fn test_create_author_rejects_nested_course_with_same_description() {
    let server = common::make_server();

    let response = server
        .post("/api/authors")
        .json(&json!({
            "firstName": "Jane",
            "lastName": "Austen",
            "dateOfBirth": "1775-12-16",
            "mainCategory": "Romance",
            "courses": [{ "title": "Irony", "description": "Irony" }]
        }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let json = response.json::<Value>();
    assert!(
        json["errors"]
            .get("courses[0].CourseForCreationDto")
            .is_some()
    );

    let list = server.get("/api/authors").await;
    assert!(list.json::<Value>().as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_author_malformed_json() {
    let server = common::make_server();

    let response = server
        .post("/api/authors")
        .bytes("{ \"firstName\": ".into())
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();

    let json = response.json::<Value>();
    assert_eq!(json["title"], "One or more errors on input occurred.");
    assert_eq!(json["status"], 400);
    assert!(json["errors"].get("$").is_some());
}

#[tokio::test]
async fn test_create_author_wrong_json_type() {
    let server = common::make_server();

    let response = server
        .post("/api/authors")
        .json(&json!({
            "firstName": 42,
            "lastName": "Austen",
            "dateOfBirth": "1775-12-16",
            "mainCategory": "Romance"
        }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_create_author_invalid_date() {
    let server = common::make_server();

    let response = server
        .post("/api/authors")
        .json(&json!({
            "firstName": "Jane",
            "lastName": "Austen",
            "dateOfBirth": "sometime in December",
            "mainCategory": "Romance"
        }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_create_author_without_json_content_type() {
    let server = common::make_server();

    let response = server
        .post("/api/authors")
        .text(r#"{"firstName":"Jane"}"#)
        .await;

    response.assert_status(StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

// ─── GET ONE ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_author_not_found() {
    let server = common::make_server();

    let response = server
        .get(&format!("/api/authors/{}", Uuid::new_v4()))
        .await;

    response.assert_status_not_found();
    assert!(response.as_bytes().is_empty());
}

#[tokio::test]
async fn test_get_author_invalid_id() {
    let server = common::make_server();

    let response = server.get("/api/authors/not-a-guid").await;

    response.assert_status_bad_request();
    let json = response.json::<Value>();
    assert_eq!(
        json["errors"]["authorId"][0],
        "The value 'not-a-guid' is not valid."
    );
    assert_eq!(json["instance"], "/api/authors/not-a-guid");
}

#[tokio::test]
async fn test_get_author_as_xml() {
    let server = common::make_server();
    let id = common::create_test_author(&server, "Jane", "Austen", "Romance").await;

    let response = server
        .get(&format!("/api/authors/{id}"))
        .add_header("Accept", "application/xml")
        .await;

    response.assert_status_ok();
    assert!(
        response
            .header("content-type")
            .to_str()
            .unwrap()
            .starts_with("application/xml")
    );

    let body = response.text();
    assert!(body.starts_with("<AuthorDto>"));
    assert!(body.contains(&format!("<id>{id}</id>")));
    assert!(body.contains("<name>JaneAusten</name>"));
}

#[tokio::test]
async fn test_get_author_not_acceptable() {
    let server = common::make_server();
    let id = common::create_test_author(&server, "Jane", "Austen", "Romance").await;

    let response = server
        .get(&format!("/api/authors/{id}"))
        .add_header("Accept", "text/csv")
        .await;

    response.assert_status(StatusCode::NOT_ACCEPTABLE);
    assert!(response.as_bytes().is_empty());
}

// ─── LIST ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_authors_empty() {
    let server = common::make_server();

    let response = server.get("/api/authors").await;

    response.assert_status_ok();
    assert!(response.json::<Value>().as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_list_authors_filter_by_category() {
    let server = common::make_server();

    common::create_test_author(&server, "Eli", "Ivory", "History").await;
    common::create_test_author(&server, "Nancy", "Rye", "Rum").await;
    common::create_test_author(&server, "Arnold", "Bones", "history").await;
    common::create_test_author(&server, "Tom", "Grace", "Historical fiction").await;

    let response = server
        .get("/api/authors")
        .add_query_param("mainCategory", "History")
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["name"].as_str().unwrap())
        .collect();

    assert_eq!(names, vec!["EliIvory", "ArnoldBones"]);
}

#[tokio::test]
async fn test_list_authors_search() {
    let server = common::make_server();

    common::create_test_author(&server, "Eli", "Ivory", "History").await;
    common::create_test_author(&server, "Nancy", "Rye", "Rum").await;
    common::create_test_author(&server, "Ryan", "Smith", "Rum").await;

    let response = server
        .get("/api/authors")
        .add_query_param("searchQuery", "RY")
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["name"].as_str().unwrap())
        .collect();

    assert_eq!(names, vec!["EliIvory", "NancyRye", "RyanSmith"]);
}

#[tokio::test]
async fn test_list_authors_paging_header() {
    let server = common::make_server();

    for i in 0..5 {
        common::create_test_author(&server, &format!("Author{i}"), "Test", "History").await;
    }

    let response = server
        .get("/api/authors")
        .add_query_param("pageNumber", "2")
        .add_query_param("pageSize", "2")
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["name"], "Author2Test");
    assert_eq!(items[1]["name"], "Author3Test");

    let pagination: Value =
        serde_json::from_str(response.header("x-pagination").to_str().unwrap()).unwrap();
    assert_eq!(pagination["totalCount"], 5);
    assert_eq!(pagination["pageSize"], 2);
    assert_eq!(pagination["currentPage"], 2);
    assert_eq!(pagination["totalPages"], 3);
    assert_eq!(
        pagination["previousPageLink"],
        "/api/authors?pageNumber=1&pageSize=2"
    );
    assert_eq!(
        pagination["nextPageLink"],
        "/api/authors?pageNumber=3&pageSize=2"
    );
}

#[tokio::test]
async fn test_list_authors_page_links_keep_filters() {
    let server = common::make_server();

    for i in 0..3 {
        common::create_test_author(&server, &format!("Author{i}"), "Test", "Rum").await;
    }

    let response = server
        .get("/api/authors")
        .add_query_param("mainCategory", "Rum")
        .add_query_param("pageSize", "2")
        .await;

    response.assert_status_ok();

    let pagination: Value =
        serde_json::from_str(response.header("x-pagination").to_str().unwrap()).unwrap();
    assert!(pagination["previousPageLink"].is_null());
    assert_eq!(
        pagination["nextPageLink"],
        "/api/authors?mainCategory=Rum&pageNumber=2&pageSize=2"
    );

    let next = server
        .get(pagination["nextPageLink"].as_str().unwrap())
        .await;
    next.assert_status_ok();
    assert_eq!(next.json::<Value>().as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_list_authors_page_size_is_capped() {
    let server = common::make_server();

    for i in 0..22 {
        common::create_test_author(&server, &format!("Author{i}"), "Test", "History").await;
    }

    let response = server
        .get("/api/authors")
        .add_query_param("pageSize", "100")
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>().as_array().unwrap().len(), 20);
}

#[tokio::test]
async fn test_list_authors_invalid_query() {
    let server = common::make_server();

    let response = server
        .get("/api/authors")
        .add_query_param("pageNumber", "two")
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["status"], 400);
}

#[tokio::test]
async fn test_list_authors_as_xml() {
    let server = common::make_server();
    common::create_test_author(&server, "Jane", "Austen", "Romance").await;

    let response = server
        .get("/api/authors")
        .add_header("Accept", "application/xml")
        .await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.starts_with("<ArrayOfAuthorDto>"));
    assert!(body.ends_with("</ArrayOfAuthorDto>"));
}

#[tokio::test]
async fn test_head_authors_has_no_body() {
    let server = common::make_server();
    common::create_test_author(&server, "Jane", "Austen", "Romance").await;

    let response = server.method(Method::HEAD, "/api/authors").await;

    response.assert_status_ok();
    assert!(response.as_bytes().is_empty());
    assert!(response.headers().contains_key("x-pagination"));
}

#[tokio::test]
async fn test_options_authors() {
    let server = common::make_server();

    let response = server.method(Method::OPTIONS, "/api/authors").await;

    response.assert_status_ok();
    assert_eq!(
        response.header("allow").to_str().unwrap(),
        "GET,HEAD,OPTIONS,POST"
    );
}

#[tokio::test]
async fn test_unknown_route_not_found() {
    let server = common::make_server();

    let response = server.get("/api/unknown").await;

    response.assert_status_not_found();
}
