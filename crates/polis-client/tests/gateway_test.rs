// HTTP-level contract tests against a wiremock backend

use polis_client::{ApiClient, HttpGateway};
use polis_contracts::{
    Course, EntityFilter, ErrorCode, Pagination, Student, StudentCourseLink, Teacher,
};
use polis_core::{EntityGateway, Error};
use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(&server.uri()).unwrap()
}

#[tokio::test]
async fn filter_posts_the_filter_and_decodes_the_slice() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/student/filter"))
        .and(body_partial_json(json!({
            "filter": "ada",
            "pagination": { "pageNumber": 0, "pageSize": 20 }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "slice": {
                "content": [
                    { "id": 1, "firstName": "Ada", "lastName": "Lovelace", "email": "ada@polis.edu" },
                    { "id": 2, "firstName": "Ada", "lastName": "Byron", "email": "byron@polis.edu" }
                ],
                "hasNext": true,
                "pageable": { "pageNumber": 0, "pageSize": 20 }
            },
            "status": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = HttpGateway::<Student>::new(client_for(&server));
    let filter = EntityFilter {
        filter: Some("ada".to_string()),
        pagination: Pagination::new(0, 20),
        sorting: None,
    };
    let slice = gateway.filter(&filter).await.unwrap();

    assert_eq!(slice.content.len(), 2);
    assert_eq!(slice.content[0].full_name(), "Ada Lovelace");
    assert!(slice.has_next);
    assert_eq!(slice.pageable, Pagination::new(0, 20));
}

#[tokio::test]
async fn get_surfaces_the_not_found_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/student/get"))
        .and(body_json(json!({ "id": 99 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": [],
            "error": { "code": "STUDENT_NOT_FOUND", "message": "no student 99", "severity": "ERROR" }
        })))
        .mount(&server)
        .await;

    let gateway = HttpGateway::<Student>::new(client_for(&server));
    let err = gateway.get(99).await.unwrap_err();
    assert_eq!(err.code(), Some(ErrorCode::StudentNotFound));
    assert_eq!(err.user_message(), "Student not found.");
}

#[tokio::test]
async fn upsert_returns_the_persisted_entity() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/course/upsert"))
        .and(body_partial_json(json!({ "title": "Physics I", "code": "PHY-101" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "id": 42, "title": "Physics I", "code": "PHY-101" },
            "status": [{ "code": 0, "message": "created", "severity": "INFO" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = HttpGateway::<Course>::new(client_for(&server));
    let course = Course {
        title: "Physics I".to_string(),
        code: "PHY-101".to_string(),
        ..Course::default()
    };
    let saved = gateway.upsert(&course).await.unwrap();
    assert_eq!(saved.id, Some(42));
}

#[tokio::test]
async fn upsert_validation_rejection_on_200() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/student/upsert"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": [],
            "error": { "code": "VALIDATION_ERROR", "message": "email is required", "severity": "ERROR" }
        })))
        .mount(&server)
        .await;

    let gateway = HttpGateway::<Student>::new(client_for(&server));
    let err = gateway.upsert(&Student::default()).await.unwrap_err();
    assert_eq!(err.code(), Some(ErrorCode::ValidationError));
    assert_eq!(
        err.user_message(),
        "Validation error. Please check your input."
    );
}

#[tokio::test]
async fn delete_posts_the_id_to_the_delete_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/teacher/delete"))
        .and(body_json(json!({ "id": 7 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = HttpGateway::<Teacher>::new(client_for(&server));
    gateway.delete(7).await.unwrap();
}

#[tokio::test]
async fn refused_delete_carries_the_specific_code() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/course/delete"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": [],
            "error": {
                "code": "DELETE_COURSE_NOT_ALLOWED",
                "message": "course 3 has enrolled students",
                "severity": "ERROR"
            }
        })))
        .mount(&server)
        .await;

    let gateway = HttpGateway::<Course>::new(client_for(&server));
    let err = gateway.delete(3).await.unwrap_err();
    assert_eq!(err.code(), Some(ErrorCode::DeleteCourseNotAllowed));
    assert_eq!(
        err.user_message(),
        "Cannot delete course. It has enrolled students."
    );
}

#[tokio::test]
async fn association_endpoints_post_the_link_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/associateStudentToCourse"))
        .and(body_json(json!({ "idStudent": 1, "idCourse": 2 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .associate_student_to_course(StudentCourseLink {
            id_student: 1,
            id_course: 2,
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn non_2xx_maps_to_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/teacher/filter"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let gateway = HttpGateway::<Teacher>::new(client_for(&server));
    let err = gateway.filter(&EntityFilter::page(0, 20)).await.unwrap_err();
    assert_eq!(err, Error::Http { status: 500 });
    assert_eq!(err.user_message(), "Server error: 500");
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    // Discard port: connections are refused, no HTTP exchange happens.
    let client = ApiClient::new("http://127.0.0.1:9").unwrap();
    let gateway = HttpGateway::<Student>::new(client);
    let err = gateway.filter(&EntityFilter::page(0, 20)).await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
    assert_eq!(err.user_message(), "An error occurred");
}
