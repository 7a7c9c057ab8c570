//! End-to-end tests driving the real router over an in-memory SQLite
//! database. Requests go through Tower's oneshot service, so the full
//! extractor/handler/repository path is exercised without a socket.

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use serde_json::{Value, json};
use server::state::AppState;
use tower::ServiceExt;

async fn test_app() -> Router {
    // A single connection keeps every request on the same in-memory
    // database.
    let mut options = ConnectOptions::new("sqlite::memory:".to_owned());
    options.max_connections(1);
    let db = Database::connect(options).await.expect("connect sqlite");
    Migrator::up(&db, None).await.expect("run migrations");
    server::app(AppState::new(db))
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = match body {
        Some(value) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, value)
}

fn suite(room_number: i32, seats: i32) -> Value {
    json!({
        "roomNumber": room_number,
        "description": "Suite",
        "numberOfSeats": seats,
    })
}

fn guest(name: &str, room_number: i32) -> Value {
    json!({
        "FIO": name,
        "birthday": "1990-04-01",
        "hotelRoomNumber": room_number,
    })
}

#[tokio::test]
async fn health_endpoints_answer_ok() {
    let app = test_app().await;
    let (status, _) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn room_create_then_get_round_trips() {
    let app = test_app().await;

    let (status, created) =
        send(&app, Method::POST, "/hotelroom/1", Some(suite(101, 2))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        created,
        json!({
            "room_id": 1,
            "roomNumber": 101,
            "description": "Suite",
            "numberOfSeats": 2,
        })
    );

    let (status, fetched) = send(&app, Method::GET, "/hotelroom/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        fetched,
        json!({
            "room_id": 1,
            "roomNumber": 101,
            "description": "Suite",
            "numberOfSeats": 2,
            "Guests": [],
        })
    );
}

#[tokio::test]
async fn missing_room_is_not_found() {
    let app = test_app().await;
    let (status, body) = send(&app, Method::GET, "/hotelroom/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["message"].as_str().unwrap().contains("42"));
}

#[tokio::test]
async fn duplicate_room_id_conflicts() {
    let app = test_app().await;
    send(&app, Method::POST, "/hotelroom/1", Some(suite(101, 2))).await;

    let (status, body) =
        send(&app, Method::POST, "/hotelroom/1", Some(suite(202, 4))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["message"].as_str().unwrap().contains("already exists"));
}

#[tokio::test]
async fn duplicate_room_number_conflicts() {
    let app = test_app().await;
    send(&app, Method::POST, "/hotelroom/1", Some(suite(101, 2))).await;

    let (status, body) =
        send(&app, Method::POST, "/hotelroom/2", Some(suite(101, 4))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["message"].as_str().unwrap().contains("already in use"));
}

#[tokio::test]
async fn negative_seat_count_is_rejected() {
    let app = test_app().await;
    let (status, _) = send(&app, Method::POST, "/hotelroom/1", Some(suite(101, -1))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_with_missing_fields_is_a_client_error() {
    let app = test_app().await;
    let (status, _) = send(
        &app,
        Method::POST,
        "/hotelroom/1",
        Some(json!({"roomNumber": 101})),
    )
    .await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn capacity_gate_admits_exactly_seat_count_guests() {
    let app = test_app().await;
    send(&app, Method::POST, "/hotelroom/1", Some(suite(101, 2))).await;

    let (status, body) = send(&app, Method::POST, "/guest/1", Some(guest("Alice", 101))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["FIO"], "Alice");
    assert_eq!(body["Room"]["roomNumber"], 101);

    let (status, _) = send(&app, Method::POST, "/guest/2", Some(guest("Bob", 101))).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, Method::POST, "/guest/3", Some(guest("Carl", 101))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["message"].as_str().unwrap().contains("seats"));
}

#[tokio::test]
async fn zero_seat_room_admits_nobody() {
    let app = test_app().await;
    send(&app, Method::POST, "/hotelroom/1", Some(suite(101, 0))).await;

    let (status, _) = send(&app, Method::POST, "/guest/1", Some(guest("Alice", 101))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn guest_against_absent_room_is_not_found_not_capacity() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::POST, "/guest/1", Some(guest("Alice", 777))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["message"].as_str().unwrap().contains("777"));
}

#[tokio::test]
async fn missing_guest_is_not_found() {
    let app = test_app().await;
    let (status, _) = send(&app, Method::GET, "/guest/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn duplicate_guest_id_conflicts() {
    let app = test_app().await;
    send(&app, Method::POST, "/hotelroom/1", Some(suite(101, 2))).await;
    send(&app, Method::POST, "/guest/1", Some(guest("Alice", 101))).await;

    let (status, _) = send(&app, Method::POST, "/guest/1", Some(guest("Bob", 101))).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn room_update_applies_only_present_fields_and_is_idempotent() {
    let app = test_app().await;
    send(&app, Method::POST, "/hotelroom/1", Some(suite(101, 2))).await;

    let patch = json!({"description": "Penthouse", "numberOfSeats": 4});
    let (status, first) = send(&app, Method::PUT, "/hotelroom/1", Some(patch.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["roomNumber"], 101);
    assert_eq!(first["description"], "Penthouse");
    assert_eq!(first["numberOfSeats"], 4);

    // Re-applying the same patch yields the same final state.
    let (status, second) = send(&app, Method::PUT, "/hotelroom/1", Some(patch)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second, first);
}

#[tokio::test]
async fn room_update_can_change_the_identifier() {
    let app = test_app().await;
    send(&app, Method::POST, "/hotelroom/1", Some(suite(101, 2))).await;

    let (status, body) =
        send(&app, Method::PUT, "/hotelroom/1", Some(json!({"room_id": 5}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["room_id"], 5);

    let (status, _) = send(&app, Method::GET, "/hotelroom/5", None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, Method::GET, "/hotelroom/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_of_missing_room_is_not_found() {
    let app = test_app().await;
    let (status, _) = send(
        &app,
        Method::PUT,
        "/hotelroom/1",
        Some(json!({"description": "x"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn shrinking_seat_count_below_occupancy_is_rejected() {
    let app = test_app().await;
    send(&app, Method::POST, "/hotelroom/1", Some(suite(101, 2))).await;
    send(&app, Method::POST, "/guest/1", Some(guest("Alice", 101))).await;
    send(&app, Method::POST, "/guest/2", Some(guest("Bob", 101))).await;

    let (status, _) = send(
        &app,
        Method::PUT,
        "/hotelroom/1",
        Some(json!({"numberOfSeats": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    // Shrinking down to exactly the occupancy is allowed.
    let (status, body) = send(
        &app,
        Method::PUT,
        "/hotelroom/1",
        Some(json!({"numberOfSeats": 2})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Guests"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn guest_update_revalidates_a_changed_room_number() {
    let app = test_app().await;
    send(&app, Method::POST, "/hotelroom/1", Some(suite(101, 1))).await;
    send(&app, Method::POST, "/hotelroom/2", Some(suite(202, 1))).await;
    send(&app, Method::POST, "/guest/1", Some(guest("Alice", 101))).await;
    send(&app, Method::POST, "/guest/2", Some(guest("Bob", 202))).await;

    // Moving onto a full room fails.
    let (status, _) = send(
        &app,
        Method::PUT,
        "/guest/1",
        Some(json!({"hotelRoomNumber": 202})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    // Moving onto an absent room is NotFound, not Capacity.
    let (status, _) = send(
        &app,
        Method::PUT,
        "/guest/1",
        Some(json!({"hotelRoomNumber": 777})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Freeing room 202 makes the move legal.
    send(&app, Method::DELETE, "/guest/2", None).await;
    let (status, body) = send(
        &app,
        Method::PUT,
        "/guest/1",
        Some(json!({"hotelRoomNumber": 202})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Room"]["roomNumber"], 202);
}

#[tokio::test]
async fn guest_update_without_room_change_keeps_other_fields() {
    let app = test_app().await;
    send(&app, Method::POST, "/hotelroom/1", Some(suite(101, 2))).await;
    send(&app, Method::POST, "/guest/1", Some(guest("Alice", 101))).await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/guest/1",
        Some(json!({"birthday": "1991-05-02"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["FIO"], "Alice");
    assert_eq!(body["birthday"], "1991-05-02");
    assert_eq!(body["Room"]["roomNumber"], 101);
}

#[tokio::test]
async fn deletes_are_idempotent() {
    let app = test_app().await;
    send(&app, Method::POST, "/hotelroom/1", Some(suite(101, 2))).await;

    let (status, _) = send(&app, Method::DELETE, "/hotelroom/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, Method::DELETE, "/hotelroom/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, Method::DELETE, "/guest/9", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn deleting_a_room_leaves_its_guests_dangling() {
    let app = test_app().await;
    send(&app, Method::POST, "/hotelroom/1", Some(suite(101, 2))).await;
    send(&app, Method::POST, "/guest/1", Some(guest("Alice", 101))).await;

    send(&app, Method::DELETE, "/hotelroom/1", None).await;

    // The guest record survives, but its room reference no longer
    // resolves.
    let (status, body) = send(&app, Method::GET, "/guest/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["message"].as_str().unwrap().contains("room number 101"));
}

#[tokio::test]
async fn room_list_reflects_creates_and_deletes() {
    let app = test_app().await;
    send(&app, Method::POST, "/hotelroom/1", Some(suite(101, 2))).await;
    send(&app, Method::POST, "/hotelroom/2", Some(suite(202, 3))).await;
    send(&app, Method::POST, "/hotelroom/3", Some(suite(303, 1))).await;
    send(&app, Method::DELETE, "/hotelroom/2", None).await;

    let (status, body) = send(&app, Method::GET, "/hotelroomlist", None).await;
    assert_eq!(status, StatusCode::OK);
    let rooms = body.as_array().unwrap();
    assert_eq!(rooms.len(), 2);
    assert_eq!(rooms[0]["room_id"], 1);
    assert_eq!(rooms[1]["room_id"], 3);
}

#[tokio::test]
async fn guest_list_embeds_each_room() {
    let app = test_app().await;
    send(&app, Method::POST, "/hotelroom/1", Some(suite(101, 2))).await;
    send(&app, Method::POST, "/hotelroom/2", Some(suite(202, 2))).await;
    send(&app, Method::POST, "/guest/1", Some(guest("Alice", 101))).await;
    send(&app, Method::POST, "/guest/2", Some(guest("Bob", 202))).await;

    let (status, body) = send(&app, Method::GET, "/guestlist", None).await;
    assert_eq!(status, StatusCode::OK);
    let guests = body.as_array().unwrap();
    assert_eq!(guests.len(), 2);
    assert_eq!(guests[0]["FIO"], "Alice");
    assert_eq!(guests[0]["Room"]["room_id"], 1);
    assert_eq!(guests[1]["Room"]["roomNumber"], 202);
}

#[tokio::test]
async fn room_get_lists_occupants_in_guest_id_order() {
    let app = test_app().await;
    send(&app, Method::POST, "/hotelroom/1", Some(suite(101, 3))).await;
    send(&app, Method::POST, "/guest/7", Some(guest("Carl", 101))).await;
    send(&app, Method::POST, "/guest/2", Some(guest("Alice", 101))).await;

    let (status, body) = send(&app, Method::GET, "/hotelroom/1", None).await;
    assert_eq!(status, StatusCode::OK);
    let occupants = body["Guests"].as_array().unwrap();
    assert_eq!(occupants.len(), 2);
    assert_eq!(occupants[0]["guest_id"], 2);
    assert_eq!(occupants[1]["guest_id"], 7);
    // The occupant projection carries no room number.
    assert!(occupants[0].get("hotelRoomNumber").is_none());
}
