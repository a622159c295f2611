use catalog_sync::AppError;
use catalog_sync::nuapi::{NuApiClient, NuApiConfig, NuApiHttpClient, dto::BuildingsQuery};
use chrono::NaiveDate;
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param, query_param_is_missing},
};

fn client_for(server: &MockServer) -> NuApiHttpClient {
    NuApiHttpClient::new(NuApiConfig {
        key: "test-key".to_string(),
        base_url: server.uri(),
        timeout_secs: 5,
    })
    .expect("Failed to build client")
}

#[tokio::test]
async fn test_terms_sends_key_and_parses_records() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/terms"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 4760, "name": "2019 Fall", "start_date": "2019-09-24", "end_date": "2019-12-14"},
            {"id": 4770, "name": "2020 Winter", "start_date": null, "end_date": null}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let terms = client_for(&server).terms().await.expect("Failed to fetch terms");

    assert_eq!(terms.len(), 2);
    assert_eq!(terms[0].id, 4760);
    assert_eq!(terms[0].start_date, NaiveDate::from_ymd_opt(2019, 9, 24));
    assert_eq!(terms[1].end_date, None);
}

#[tokio::test]
async fn test_subjects_scoped_by_term_and_school() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/subjects"))
        .and(query_param("key", "test-key"))
        .and(query_param("term", "4760"))
        .and(query_param("school", "MEAS"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"symbol": "COMP_SCI", "name": "Computer Science"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let subjects = client_for(&server)
        .subjects(4760, "MEAS")
        .await
        .expect("Failed to fetch subjects");

    assert_eq!(subjects.len(), 1);
    assert_eq!(subjects[0].symbol, "COMP_SCI");
}

#[tokio::test]
async fn test_courses_tolerate_missing_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/courses"))
        .and(query_param("term", "4760"))
        .and(query_param("subject", "COMP_SCI"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 101,
                "title": "Fundamentals of Computer Programming",
                "term": "2019 Fall",
                "instructor": "Sara Sood",
                "subject": "COMP_SCI",
                "catalog_num": "111-0",
                "section": "20",
                "room": "Tech Institute LG62",
                "meeting_days": "MoWeFr",
                "start_time": "10:00",
                "end_time": "10:50",
                "seats": 150,
                "component": "LEC",
                "class_num": 12345,
                "course_id": 1001
            },
            {"id": 102, "title": "Independent Study"}
        ])))
        .mount(&server)
        .await;

    let courses = client_for(&server)
        .courses(4760, "COMP_SCI")
        .await
        .expect("Failed to fetch courses");

    assert_eq!(courses.len(), 2);
    assert_eq!(courses[0].seats, Some(150));
    assert_eq!(courses[0].topic, None);
    assert_eq!(courses[1].instructor, None);
}

#[tokio::test]
async fn test_instructors_carry_subject_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/instructors"))
        .and(query_param("subject", "MATH"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 7, "name": "Ada", "phone": "847-555-0100", "subjects": ["MATH", "COMP_SCI"]}
        ])))
        .mount(&server)
        .await;

    let instructors = client_for(&server)
        .instructors("MATH")
        .await
        .expect("Failed to fetch instructors");

    assert_eq!(instructors[0].subjects, vec!["MATH", "COMP_SCI"]);
    assert_eq!(instructors[0].bio, None);
}

#[tokio::test]
async fn test_buildings_unscoped_and_rooms_scoped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/buildings"))
        .and(query_param_is_missing("name"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "Tech", "lat": 42.0577, "lon": -87.6754, "nu_maps_link": "https://maps.northwestern.edu/txt/facility/1"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rooms"))
        .and(query_param("building", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 10, "building_id": 1, "name": "LG62"}
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let buildings = client
        .buildings(&BuildingsQuery::default())
        .await
        .expect("Failed to fetch buildings");
    let rooms = client.rooms(1).await.expect("Failed to fetch rooms");

    assert_eq!(buildings[0].lat, Some(42.0577));
    assert_eq!(rooms[0].name, "LG62");
}

#[tokio::test]
async fn test_error_status_is_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/schools"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({"error": "rate limit exceeded"})))
        .mount(&server)
        .await;

    let result = client_for(&server).schools().await;

    match result {
        Err(AppError::Api { status, message }) => {
            assert_eq!(status, 429);
            assert_eq!(message, "rate limit exceeded");
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_error_body_with_success_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/terms"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"error": "invalid key"})))
        .mount(&server)
        .await;

    let result = client_for(&server).terms().await;

    assert!(matches!(result, Err(AppError::Api { status: 200, message }) if message == "invalid key"));
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/terms"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let result = client_for(&server).terms().await;

    assert!(matches!(result, Err(AppError::Parse(_))));
}
