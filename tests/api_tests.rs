//! API integration tests
//!
//! These run against a live server with a migrated database:
//! `cargo test -- --ignored`

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Helper to open a staff session
async fn get_token(client: &Client, password: &str) -> String {
    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({ "password": password }))
        .send()
        .await
        .expect("Failed to send login request");

    let body: Value = response.json().await.expect("Failed to parse login response");
    body["token"].as_str().expect("No token in response").to_string()
}

/// Helper to create a room with a unique number, returning its id
async fn create_room(client: &Client, token: &str, number: &str) -> i64 {
    let response = client
        .post(format!("{}/rooms", BASE_URL))
        .bearer_auth(token)
        .json(&json!({ "number": number }))
        .send()
        .await
        .expect("Failed to create room");
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse room");
    body["id"].as_i64().expect("No room id")
}

fn unique(prefix: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{}-{}", prefix, nanos)
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_login_roles() {
    let client = Client::new();

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({ "password": "reception" }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["role"], "staff");
    assert_eq!(body["token_type"], "Bearer");

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({ "password": "manager" }))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["role"], "admin");
}

#[tokio::test]
#[ignore]
async fn test_login_invalid_password() {
    let client = Client::new();

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({ "password": "wrong" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_requests_without_token_rejected() {
    let client = Client::new();

    let response = client
        .get(format!("{}/rooms", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_room_conflict_and_terminal_status() {
    let client = Client::new();
    let token = get_token(&client, "reception").await;
    let room_id = create_room(&client, &token, &unique("101")).await;

    // First stay
    let response = client
        .post(format!("{}/reservations", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({
            "room_id": room_id,
            "guest_name": "Ana Ruiz",
            "status": "reserved",
            "check_in": "2030-06-10",
            "check_out": "2030-06-13",
            "occupants": 2
        }))
        .send()
        .await
        .expect("Failed to create reservation");
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.unwrap();
    let first_id = body["id"].as_i64().unwrap();

    // Overlapping stay on the same room is rejected
    let second = json!({
        "room_id": room_id,
        "guest_name": "Bela Costa",
        "status": "reserved",
        "check_in": "2030-06-12",
        "check_out": "2030-06-14",
        "occupants": 1
    });
    let response = client
        .post(format!("{}/reservations", BASE_URL))
        .bearer_auth(&token)
        .json(&second)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 409);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "RoomConflict");

    // Checking the first stay out frees the room
    let response = client
        .put(format!("{}/reservations/{}", BASE_URL, first_id))
        .bearer_auth(&token)
        .json(&json!({
            "room_id": room_id,
            "guest_name": "Ana Ruiz",
            "status": "checkedout",
            "check_in": "2030-06-10",
            "check_out": "2030-06-13",
            "occupants": 2
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let response = client
        .post(format!("{}/reservations", BASE_URL))
        .bearer_auth(&token)
        .json(&second)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);
}

#[tokio::test]
#[ignore]
async fn test_touching_stays_do_not_conflict() {
    let client = Client::new();
    let token = get_token(&client, "reception").await;
    let room_id = create_room(&client, &token, &unique("102")).await;

    let response = client
        .post(format!("{}/reservations", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({
            "room_id": room_id,
            "guest_name": "Ana Ruiz",
            "status": "reserved",
            "check_in": "2030-07-01",
            "check_out": "2030-07-05",
            "occupants": 1
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);

    // Back-to-back: next guest checks in on the check-out day
    let response = client
        .post(format!("{}/reservations", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({
            "room_id": room_id,
            "guest_name": "Bela Costa",
            "status": "reserved",
            "check_in": "2030-07-05",
            "check_out": "2030-07-08",
            "occupants": 1
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);
}

#[tokio::test]
#[ignore]
async fn test_blackout_blocks_all_rooms() {
    let client = Client::new();
    let token = get_token(&client, "reception").await;
    let room_id = create_room(&client, &token, &unique("103")).await;

    let response = client
        .post(format!("{}/blackouts", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({
            "title": "Christmas",
            "start_date": "2031-12-24",
            "end_date": "2031-12-26"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);
    let blackout: Value = response.json().await.unwrap();

    // Any overlap with the blackout is rejected
    let response = client
        .post(format!("{}/reservations", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({
            "room_id": room_id,
            "guest_name": "Ana Ruiz",
            "status": "reserved",
            "check_in": "2031-12-23",
            "check_out": "2031-12-25",
            "occupants": 1
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 409);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "BlackoutConflict");

    // Starting exactly on the exclusive end date succeeds
    let response = client
        .post(format!("{}/reservations", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({
            "room_id": room_id,
            "guest_name": "Ana Ruiz",
            "status": "reserved",
            "check_in": "2031-12-26",
            "check_out": "2031-12-28",
            "occupants": 1
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);

    // Cleanup so other runs are not blocked
    let response = client
        .delete(format!("{}/blackouts/{}", BASE_URL, blackout["id"]))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 204);
}

#[tokio::test]
#[ignore]
async fn test_invalid_dates_and_missing_guest_rejected() {
    let client = Client::new();
    let token = get_token(&client, "reception").await;
    let room_id = create_room(&client, &token, &unique("104")).await;

    // check_out before check_in
    let response = client
        .post(format!("{}/reservations", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({
            "room_id": room_id,
            "guest_name": "Ana Ruiz",
            "status": "reserved",
            "check_in": "2030-08-10",
            "check_out": "2030-08-10",
            "occupants": 1
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "BadDateRange");

    // whitespace-only guest name
    let response = client
        .post(format!("{}/reservations", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({
            "room_id": room_id,
            "guest_name": "   ",
            "status": "reserved",
            "check_in": "2030-08-10",
            "check_out": "2030-08-12",
            "occupants": 1
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "BadValue");
}

#[tokio::test]
#[ignore]
async fn test_occupancy_day_boundaries() {
    let client = Client::new();
    let token = get_token(&client, "reception").await;
    let number = unique("105");
    let room_id = create_room(&client, &token, &number).await;

    let response = client
        .post(format!("{}/reservations", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({
            "room_id": room_id,
            "guest_name": "Carl Otto",
            "status": "reserved",
            "check_in": "2030-09-10",
            "check_out": "2030-09-13",
            "occupants": 1
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.unwrap();
    let id = body["id"].as_i64().unwrap();

    // A day inside the stay includes it
    let response = client
        .get(format!("{}/occupancy?day=2030-09-12", BASE_URL))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    let rows: Vec<Value> = response.json().await.unwrap();
    assert!(rows.iter().any(|r| r["id"].as_i64() == Some(id)));

    // The check-out day does not
    let response = client
        .get(format!("{}/occupancy?day=2030-09-13", BASE_URL))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    let rows: Vec<Value> = response.json().await.unwrap();
    assert!(!rows.iter().any(|r| r["id"].as_i64() == Some(id)));
}

#[tokio::test]
#[ignore]
async fn test_payment_fields_admin_gated() {
    let client = Client::new();
    let staff = get_token(&client, "reception").await;
    let admin = get_token(&client, "manager").await;
    let room_id = create_room(&client, &staff, &unique("106")).await;

    let response = client
        .post(format!("{}/reservations", BASE_URL))
        .bearer_auth(&staff)
        .json(&json!({
            "room_id": room_id,
            "guest_name": "Dora Ibanez",
            "status": "reserved",
            "check_in": "2030-10-01",
            "check_out": "2030-10-04",
            "occupants": 1
        }))
        .send()
        .await
        .unwrap();
    let body: Value = response.json().await.unwrap();
    let id = body["id"].as_i64().unwrap();

    // Staff can write card data
    let response = client
        .put(format!("{}/reservations/{}/details", BASE_URL, id))
        .bearer_auth(&staff)
        .json(&json!({
            "room_type": "Suite",
            "card_holder": "Dora Ibanez",
            "card_number": "4111111111111111"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let saved: Value = response.json().await.unwrap();
    // ...but does not read it back
    assert!(saved["card_number"].is_null());

    let response = client
        .get(format!("{}/reservations/{}", BASE_URL, id))
        .bearer_auth(&staff)
        .send()
        .await
        .unwrap();
    let view: Value = response.json().await.unwrap();
    assert!(view["details"]["card_number"].is_null());

    // Admin sees the stored value
    let response = client
        .get(format!("{}/reservations/{}", BASE_URL, id))
        .bearer_auth(&admin)
        .send()
        .await
        .unwrap();
    let view: Value = response.json().await.unwrap();
    assert_eq!(view["details"]["card_number"], "4111111111111111");
}

#[tokio::test]
#[ignore]
async fn test_details_merge_preserves_card_data() {
    let client = Client::new();
    let admin = get_token(&client, "manager").await;
    let room_id = create_room(&client, &admin, &unique("107")).await;

    let response = client
        .post(format!("{}/reservations", BASE_URL))
        .bearer_auth(&admin)
        .json(&json!({
            "room_id": room_id,
            "guest_name": "Emil Faber",
            "status": "reserved",
            "check_in": "2030-11-01",
            "check_out": "2030-11-03",
            "occupants": 1
        }))
        .send()
        .await
        .unwrap();
    let body: Value = response.json().await.unwrap();
    let id = body["id"].as_i64().unwrap();

    client
        .put(format!("{}/reservations/{}/details", BASE_URL, id))
        .bearer_auth(&admin)
        .json(&json!({
            "card_number": "4111111111111111",
            "tariff": "75"
        }))
        .send()
        .await
        .unwrap();

    // Re-saving an unrelated field with blanks keeps the card number and
    // the stored tariff (0 means "no override supplied")
    let response = client
        .put(format!("{}/reservations/{}/details", BASE_URL, id))
        .bearer_auth(&admin)
        .json(&json!({
            "passport": "P-9921",
            "card_number": "",
            "tariff": "0"
        }))
        .send()
        .await
        .unwrap();
    let saved: Value = response.json().await.unwrap();
    assert_eq!(saved["passport"], "P-9921");
    assert_eq!(saved["card_number"], "4111111111111111");
    // NUMERIC(10,2) round-trips with two decimal places
    assert_eq!(saved["tariff"], "75.00");
}

#[tokio::test]
#[ignore]
async fn test_tariff_resolution_in_view() {
    let client = Client::new();
    let token = get_token(&client, "reception").await;
    let room_id = create_room(&client, &token, &unique("108")).await;

    // Set the Standard rate
    let response = client
        .put(format!("{}/tariffs", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({ "tariffs": [{ "room_type": "Standard", "nightly_rate": "120" }] }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let response = client
        .post(format!("{}/reservations", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({
            "room_id": room_id,
            "guest_name": "Frida Gil",
            "status": "reserved",
            "check_in": "2030-12-01",
            "check_out": "2030-12-04",
            "occupants": 2
        }))
        .send()
        .await
        .unwrap();
    let body: Value = response.json().await.unwrap();
    let id = body["id"].as_i64().unwrap();

    client
        .put(format!("{}/reservations/{}/details", BASE_URL, id))
        .bearer_auth(&token)
        .json(&json!({ "room_type": "Standard" }))
        .send()
        .await
        .unwrap();

    // No override: the room-type default applies, 3 nights at 120
    let response = client
        .get(format!("{}/reservations/{}", BASE_URL, id))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    let view: Value = response.json().await.unwrap();
    assert_eq!(view["nights"], 3);
    assert_eq!(view["nightly_rate"], "120.00");
    assert_eq!(view["total"], "360.00");
}

#[tokio::test]
#[ignore]
async fn test_guest_upsert_idempotent() {
    let client = Client::new();
    let token = get_token(&client, "reception").await;
    let name = unique("GretaHolm");

    let payload = json!({ "email": "greta@example.com", "phone": "555-0101" });
    for _ in 0..2 {
        let response = client
            .put(format!("{}/guests/{}", BASE_URL, name))
            .bearer_auth(&token)
            .json(&payload)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
    }

    let response = client
        .get(format!("{}/guests?query={}", BASE_URL, name))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    let names: Vec<String> = response.json().await.unwrap();
    assert_eq!(names.iter().filter(|n| *n == &name).count(), 1);
}

#[tokio::test]
#[ignore]
async fn test_daily_report_clipping() {
    let client = Client::new();
    let token = get_token(&client, "reception").await;
    let number = unique("109");
    let room_id = create_room(&client, &token, &number).await;

    let response = client
        .post(format!("{}/reservations", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({
            "room_id": room_id,
            "guest_name": "Hugo Iversen",
            "status": "reserved",
            "check_in": "2032-01-02",
            "check_out": "2032-01-05",
            "occupants": 1
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);

    let response = client
        .get(format!(
            "{}/reports/daily?start=2032-01-01&end=2032-01-04&room={}",
            BASE_URL, number
        ))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    let rows: Vec<Value> = response.json().await.unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["day"], "2032-01-02");
    assert_eq!(rows[0]["position"], "Day 1 of 3");
    assert_eq!(rows[1]["day"], "2032-01-03");
    assert_eq!(rows[1]["position"], "Day 2 of 3");
}

#[tokio::test]
#[ignore]
async fn test_calendar_grid_shape() {
    let client = Client::new();
    let token = get_token(&client, "reception").await;

    let response = client
        .get(format!("{}/calendar/2030/6", BASE_URL))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let cells: Vec<Value> = response.json().await.unwrap();

    assert_eq!(cells.len(), 42);
    // June 2030 starts on a Saturday; the grid opens the previous Monday
    assert_eq!(cells[0]["date"], "2030-05-27");
    assert_eq!(cells[0]["in_month"], false);
    assert_eq!(cells[5]["date"], "2030-06-01");
    assert_eq!(cells[5]["in_month"], true);
}

#[tokio::test]
#[ignore]
async fn test_settings_update_requires_admin() {
    let client = Client::new();
    let staff = get_token(&client, "reception").await;
    let admin = get_token(&client, "manager").await;

    let payload = json!({ "entries": { "language": "en" } });
    let response = client
        .put(format!("{}/settings", BASE_URL))
        .bearer_auth(&staff)
        .json(&payload)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 403);

    let response = client
        .put(format!("{}/settings", BASE_URL))
        .bearer_auth(&admin)
        .json(&payload)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let settings: Value = response.json().await.unwrap();
    assert_eq!(settings["language"], "en");

    // Staff can still read
    let response = client
        .get(format!("{}/settings", BASE_URL))
        .bearer_auth(&staff)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
#[ignore]
async fn test_room_cascade_delete() {
    let client = Client::new();
    let token = get_token(&client, "reception").await;
    let room_id = create_room(&client, &token, &unique("110")).await;

    let response = client
        .post(format!("{}/reservations", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({
            "room_id": room_id,
            "guest_name": "Ines Juhl",
            "status": "reserved",
            "check_in": "2032-02-01",
            "check_out": "2032-02-03",
            "occupants": 1
        }))
        .send()
        .await
        .unwrap();
    let body: Value = response.json().await.unwrap();
    let reservation_id = body["id"].as_i64().unwrap();

    let response = client
        .delete(format!("{}/rooms/{}", BASE_URL, room_id))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 204);

    let response = client
        .get(format!("{}/reservations/{}", BASE_URL, reservation_id))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}
