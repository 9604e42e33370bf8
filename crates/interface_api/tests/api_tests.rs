//! HTTP API tests against the seeded in-memory adapters

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use core_kernel::AdapterSource;
use interface_api::{config::ApiConfig, create_router, AppState};
use test_utils::NameAddressBuilder;

async fn app() -> Router {
    let config = ApiConfig {
        store: AdapterSource::Mock,
        ..ApiConfig::default()
    };
    create_router(AppState::in_memory(config).await)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn ottawa_contact() -> Value {
    serde_json::to_value(NameAddressBuilder::new().build()).unwrap()
}

mod health_tests {
    use super::*;

    #[tokio::test]
    async fn test_health_check() {
        let app = app().await;
        let (status, body) = send(&app, Method::GET, "/health", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_readiness_reports_every_adapter() {
        let app = app().await;
        let (status, body) = send(&app, Method::GET, "/health/ready", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["overall_status"], "healthy");
    }
}

mod reference_tests {
    use super::*;

    #[tokio::test]
    async fn test_list_countries_sorted_by_name() {
        let app = app().await;
        let (status, body) = send(&app, Method::GET, "/api/v1/countries", None).await;

        assert_eq!(status, StatusCode::OK);
        let names: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Canada", "United States"]);
    }

    #[tokio::test]
    async fn test_unknown_country_is_not_found() {
        let app = app().await;
        let (status, body) = send(&app, Method::GET, "/api/v1/countries/ZZ", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");
    }

    #[tokio::test]
    async fn test_list_provinces_of_country() {
        let app = app().await;
        let (status, body) = send(&app, Method::GET, "/api/v1/countries/ca/provinces", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["country"]["code"], "CA");
        let codes: Vec<&str> = body["provinces"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["code"].as_str().unwrap())
            .collect();
        assert_eq!(codes, vec!["BC", "ON", "QC"]);
    }

    #[tokio::test]
    async fn test_provinces_of_unknown_country_asks_for_selection() {
        let app = app().await;
        let (status, body) = send(&app, Method::GET, "/api/v1/countries/ZZ/provinces", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Please select a country to retrieve its provinces");
    }

    #[tokio::test]
    async fn test_duplicate_province_reports_code_and_name() {
        let app = app().await;
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/provinces",
            Some(json!({ "code": "ON", "name": "Ontario", "country_code": "CA" })),
        )
        .await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["details"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_create_and_delete_country() {
        let app = app().await;
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/countries",
            Some(json!({ "code": "mx", "name": "Mexico", "postal_pattern": "^\\d{5}$" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["code"], "MX");

        let (status, _) = send(&app, Method::DELETE, "/api/v1/countries/MX", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(&app, Method::GET, "/api/v1/countries/MX", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_country_with_provinces_cannot_be_deleted() {
        let app = app().await;
        let (status, _) = send(&app, Method::DELETE, "/api/v1/countries/CA", None).await;

        assert_eq!(status, StatusCode::CONFLICT);
    }
}

mod name_address_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_normalizes_record() {
        let app = app().await;
        let (status, body) = send(&app, Method::POST, "/api/v1/name-addresses", Some(ottawa_contact())).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["full_name"], "Smith, John");
        assert_eq!(body["street_address"], "24 Sussex Drive");
        assert_eq!(body["postal_code"], "K1A 0B1");
        assert_eq!(body["province_code"], "ON");
        assert_eq!(body["phone"], "613-555-0100");
        assert!(body["id"].is_string());
    }

    #[tokio::test]
    async fn test_invalid_record_returns_details_and_normalized_record() {
        let app = app().await;
        let mut contact = ottawa_contact();
        contact["postal_code"] = json!("z1a0b1");

        let (status, body) = send(&app, Method::POST, "/api/v1/name-addresses", Some(contact)).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "validation_error");
        let details = body["details"].as_array().unwrap();
        assert_eq!(details.len(), 1);
        assert_eq!(details[0]["fields"], json!(["postalCode"]));
        assert_eq!(
            details[0]["message"],
            "Province Code does not match the Province First Postal Letter. Possible values: KLMNP"
        );
        assert_eq!(body["record"]["first_name"], "John");
        assert_eq!(body["record"]["postal_code"], "Z1A0B1");
    }

    #[tokio::test]
    async fn test_record_lifecycle() {
        let app = app().await;
        let (_, created) = send(&app, Method::POST, "/api/v1/name-addresses", Some(ottawa_contact())).await;
        let id = created["id"].as_str().unwrap().to_string();
        let uri = format!("/api/v1/name-addresses/{}", id);

        let (status, fetched) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched["city"], "Ottawa");

        let mut changed = ottawa_contact();
        changed["city"] = json!("nepean");
        let (status, updated) = send(&app, Method::PUT, &uri, Some(changed)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["city"], "Nepean");
        assert_eq!(updated["id"], created["id"]);

        let (status, listed) = send(&app, Method::GET, "/api/v1/name-addresses", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listed.as_array().unwrap().len(), 1);

        let (status, _) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_malformed_id_is_bad_request() {
        let app = app().await;
        let (status, _) = send(&app, Method::GET, "/api/v1/name-addresses/not-an-id", None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_of_missing_record_is_not_found() {
        let app = app().await;
        let uri = format!("/api/v1/name-addresses/{}", core_kernel::NameAddressId::new());
        let (status, _) = send(&app, Method::PUT, &uri, Some(ottawa_contact())).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

mod catalog_tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_instruments_sorted_by_name() {
        let app = app().await;
        let (status, body) = send(&app, Method::GET, "/api/v1/instruments", None).await;

        assert_eq!(status, StatusCode::OK);
        let names: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|i| i["name"].as_str().unwrap())
            .collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert!(names.contains(&"Drums"));
    }

    #[tokio::test]
    async fn test_instrument_lifecycle() {
        let app = app().await;
        let (status, created) = send(
            &app,
            Method::POST,
            "/api/v1/instruments",
            Some(json!({ "name": " Cello " })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["name"], "Cello");

        let uri = format!("/api/v1/instruments/{}", created["id"].as_str().unwrap());
        let (status, renamed) = send(&app, Method::PUT, &uri, Some(json!({ "name": "Violoncello" }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(renamed["id"], created["id"]);

        let (status, _) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_duplicate_style_is_conflict() {
        let app = app().await;
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/styles",
            Some(json!({ "name": "Jazz", "description": "again" })),
        )
        .await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["message"], "'Jazz' is already taken - Style Name must be unique.");
    }

    #[tokio::test]
    async fn test_style_update_under_other_name_is_not_found() {
        let app = app().await;
        let (status, _) = send(
            &app,
            Method::PUT,
            "/api/v1/styles/Jazz",
            Some(json!({ "name": "Blues", "description": "changed" })),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

mod artist_tests {
    use super::*;

    async fn contact(app: &Router, first: &str, last: &str) -> Value {
        let mut record = ottawa_contact();
        record["first_name"] = json!(first);
        record["last_name"] = json!(last);
        let (status, body) = send(app, Method::POST, "/api/v1/name-addresses", Some(record)).await;
        assert_eq!(status, StatusCode::CREATED);
        body["id"].clone()
    }

    async fn artist(app: &Router, first: &str, last: &str) -> String {
        let name_address_id = contact(app, first, last).await;
        let (status, body) = send(
            app,
            Method::POST,
            "/api/v1/artists",
            Some(json!({ "name_address_id": name_address_id, "minimum_hourly_rate": "250.00" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        body["id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_artists_listed_by_full_name() {
        let app = app().await;
        artist(&app, "Zoe", "Young").await;
        artist(&app, "Amy", "Adams").await;

        let (status, body) = send(&app, Method::GET, "/api/v1/artists", None).await;
        assert_eq!(status, StatusCode::OK);
        let names: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|a| a["full_name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Adams, Amy", "Young, Zoe"]);
    }

    #[tokio::test]
    async fn test_artist_needs_a_name_address_on_file() {
        let app = app().await;
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/artists",
            Some(json!({ "name_address_id": core_kernel::NameAddressId::new(), "minimum_hourly_rate": "10" })),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["details"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_group_member_classification() {
        let app = app().await;
        let band = artist(&app, "The", "Band").await;
        let amy = artist(&app, "Amy", "Adams").await;
        let solo = artist(&app, "Sol", "Oist").await;

        let (status, body) = send(&app, Method::GET, &format!("/api/v1/artists/{}/group-members", solo), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["role"], "unaffiliated");
        assert_eq!(
            body["message"],
            "The artist is neither a group nor a group member. Please make them a new group."
        );

        let (status, _) = send(
            &app,
            Method::POST,
            &format!("/api/v1/artists/{}/group-members", band),
            Some(json!({ "member_id": amy, "date_joined": "1995-04-01" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (_, body) = send(&app, Method::GET, &format!("/api/v1/artists/{}/group-members", band), None).await;
        assert_eq!(body["role"], "group");
        assert!(body.get("message").is_none());
        assert_eq!(body["memberships"][0]["member_id"], json!(amy));

        let (_, body) = send(&app, Method::GET, &format!("/api/v1/artists/{}/group-members", amy), None).await;
        assert_eq!(body["role"], "individual");
        assert_eq!(
            body["message"],
            "The artist is an individual, not a group. These are their historic group memberships."
        );
    }

    #[tokio::test]
    async fn test_candidates_and_membership_updates() {
        let app = app().await;
        let band = artist(&app, "The", "Band").await;
        let amy = artist(&app, "Amy", "Adams").await;
        let bob = artist(&app, "Bob", "Marley").await;
        let members = format!("/api/v1/artists/{}/group-members", band);

        send(&app, Method::POST, &members, Some(json!({ "member_id": amy }))).await;

        let (status, body) = send(&app, Method::GET, &format!("{}/candidates", members), None).await;
        assert_eq!(status, StatusCode::OK);
        let ids: Vec<&str> = body.as_array().unwrap().iter().map(|a| a["id"].as_str().unwrap()).collect();
        assert_eq!(ids, vec![bob.as_str()]);

        let membership = format!("{}/{}", members, amy);
        let (status, body) = send(
            &app,
            Method::PUT,
            &membership,
            Some(json!({ "member_id": amy, "date_joined": "1990-01-01", "date_left": "1989-01-01" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["message"], "Date Left cannot be before Date Joined.");

        let (status, body) = send(
            &app,
            Method::PUT,
            &membership,
            Some(json!({ "member_id": amy, "date_left": "2001-12-31" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["date_left"], "2001-12-31");

        let (status, _) = send(&app, Method::DELETE, &membership, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = send(&app, Method::GET, &membership, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_membership_of_other_group_is_not_found() {
        let app = app().await;
        let band = artist(&app, "The", "Band").await;
        let other = artist(&app, "Other", "Band").await;
        let amy = artist(&app, "Amy", "Adams").await;
        send(
            &app,
            Method::POST,
            &format!("/api/v1/artists/{}/group-members", band),
            Some(json!({ "member_id": amy })),
        )
        .await;

        let (status, _) = send(
            &app,
            Method::GET,
            &format!("/api/v1/artists/{}/group-members/{}", other, amy),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, Method::DELETE, &format!("/api/v1/artists/{}", band), None).await;
        assert_eq!(status, StatusCode::CONFLICT);
    }
}
