//! HTTP tests for receipts, uploads, templates and calendar events.

mod common;

use axum::http::StatusCode;
use common::{company_body, field_of, receipt_body, TestApp, UserSpec};
use serde_json::{json, Value};

const RECEIPTS: &str = "/api/document-management/receipts";

fn receipt_uri(receipt: &Value) -> String { format!("{RECEIPTS}/{}", receipt["id"].as_str().unwrap()) }

#[tokio::test]
async fn test_receipt_create_sets_owner_and_defaults() {
    let app = TestApp::new().await;
    let (clerk, token) = app.clerk_with(&["edit_receipts"]).await;

    let (status, receipt) = app.post(RECEIPTS, &token, receipt_body("Fuel")).await;
    assert_eq!(status, StatusCode::CREATED, "{receipt}");
    assert_eq!(receipt["created_by"], json!(clerk.id));
    assert_eq!(receipt["level"], "branch");
    assert_eq!(receipt["level_object_id"], Value::Null);
    assert_eq!(receipt["tags"], json!([]));
    assert_eq!(receipt["metadata"], json!({}));
    assert_eq!(receipt["attachments"], json!([]));
    assert_eq!(receipt["date"], "2024-03-01");
}

#[tokio::test]
async fn test_receipt_write_requires_permission() {
    let app = TestApp::new().await;
    let (_, without) = app.clerk_with(&["edit_templates"]).await;

    let (status, body) = app.post(RECEIPTS, &without, receipt_body("Fuel")).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Permission 'edit_receipts' is required");

    let (status, _) = app.get(RECEIPTS, &without).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_receipt_owner_or_staff_may_modify() {
    let app = TestApp::new().await;
    let (owner, owner_token) = app.clerk_with(&["edit_receipts"]).await;
    let (_, colleague) = app.clerk_with(&["edit_receipts"]).await;
    let role = app.role(&["edit_receipts"]).await;
    let (_, staff) = app
        .user(UserSpec {
            is_staff: true,
            role_id: Some(role.id),
            ..UserSpec::default()
        })
        .await;

    let (_, receipt) = app.post(RECEIPTS, &owner_token, receipt_body("Fuel")).await;
    let uri = receipt_uri(&receipt);

    // Listing stays open; a single receipt is only shown to its owner and staff.
    let (status, list) = app.get(RECEIPTS, &colleague).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(field_of(&list, "title"), vec!["Fuel"]);

    let (status, body) = app.get(&uri, &colleague).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Only the owner or a staff member may view this object");

    let (status, fetched) = app.get(&uri, &staff).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["title"], "Fuel");

    let (status, body) = app.put(&uri, &colleague, receipt_body("Fuel (edited)")).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Only the owner or a staff member may modify this object");

    let (status, updated) = app.put(&uri, &owner_token, receipt_body("Fuel, March")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["title"], "Fuel, March");

    let (status, updated) = app.put(&uri, &staff, receipt_body("Fuel, audited")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["title"], "Fuel, audited");
    assert_eq!(updated["created_by"], json!(owner.id));

    let (status, _) = app.delete(&uri, &colleague).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app.delete(&uri, &owner_token).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app.get(&uri, &owner_token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_receipt_amount_must_fit_money_column() {
    let app = TestApp::new().await;
    let (_, token) = app.clerk_with(&["edit_receipts"]).await;

    for amount in ["1.239", "1000000000000000.00"] {
        let mut body = receipt_body("Fuel");
        body["amount"] = json!(amount);
        let (status, error) = app.post(RECEIPTS, &token, body).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{amount}: {error}");
        assert_eq!(error["code"], "VALIDATION_ERROR");
        assert!(error["message"].as_str().unwrap().starts_with("amount:"));
    }

    let mut body = receipt_body("Fuel");
    body["amount"] = json!("1250.50");
    let (status, receipt) = app.post(RECEIPTS, &token, body).await;
    assert_eq!(status, StatusCode::CREATED, "{receipt}");

    let (_, list) = app.get(RECEIPTS, &token).await;
    assert_eq!(list["pagination"]["total_items"], 1);
}

#[tokio::test]
async fn test_document_records_read_back_as_written() {
    let app = TestApp::new().await;
    let (_, token) = app
        .clerk_with(&["edit_receipts", "edit_templates"])
        .await;

    let mut body = receipt_body("Fuel");
    body["tags"] = json!(["travel", "q1"]);
    body["metadata"] = json!({ "vendor": "Shell", "liters": 40 });
    body["level"] = json!("company");
    body["level_object_id"] = json!("c-17");
    let (_, created) = app.post(RECEIPTS, &token, body).await;
    let (status, fetched) = app.get(&receipt_uri(&created), &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (_, created) = app
        .post(
            "/api/document-management/templates",
            &token,
            json!({
                "title": "Lease",
                "template_type": "promissory_note",
                "content_html": "<p>{{debtor}}</p>",
                "placeholders": ["debtor"],
                "versioning": { "v": 2 }
            }),
        )
        .await;
    let uri = format!(
        "/api/document-management/templates/{}",
        created["id"].as_str().unwrap()
    );
    let (status, fetched) = app.get(&uri, &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (_, created) = app
        .post(
            "/api/document-management/calendar-events",
            &token,
            json!({
                "title": "Rent due",
                "start": "2024-05-01T10:00:00Z",
                "end": "2024-05-01T11:00:00Z",
                "category": "upcoming_payment",
                "related_document_type": "receipt",
                "related_document_id": "r-1"
            }),
        )
        .await;
    let uri = format!(
        "/api/document-management/calendar-events/{}",
        created["id"].as_str().unwrap()
    );
    let (status, fetched) = app.get(&uri, &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_receipts_ordered_by_date_desc_and_filtered() {
    let app = TestApp::new().await;
    let (_, token) = app.clerk_with(&["edit_receipts"]).await;

    for (title, date, level) in [
        ("January", "2024-01-10", "company"),
        ("March", "2024-03-01", "branch"),
        ("February", "2024-02-15", "company"),
    ] {
        let mut body = receipt_body(title);
        body["date"] = json!(date);
        body["level"] = json!(level);
        body["level_object_id"] = json!("c-1");
        let (status, _) = app.post(RECEIPTS, &token, body).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, list) = app.get(RECEIPTS, &token).await;
    assert_eq!(field_of(&list, "title"), vec!["March", "February", "January"]);

    let (_, list) = app.get(&format!("{RECEIPTS}?level=company"), &token).await;
    assert_eq!(field_of(&list, "title"), vec!["February", "January"]);

    let (_, list) = app
        .get(&format!("{RECEIPTS}?level=branch&level_object_id=c-1"), &token)
        .await;
    assert_eq!(field_of(&list, "title"), vec!["March"]);
}

#[tokio::test]
async fn test_level_reference_unchecked_by_default() {
    let app = TestApp::new().await;
    let (_, token) = app.clerk_with(&["edit_receipts"]).await;

    let mut body = receipt_body("Dangling");
    body["level"] = json!("company");
    body["level_object_id"] = json!("does-not-exist");

    let (status, receipt) = app.post(RECEIPTS, &token, body).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(receipt["level_object_id"], "does-not-exist");
}

#[tokio::test]
async fn test_level_reference_enforced() {
    let app = TestApp::with_settings(|settings| settings.enforce_level_references = true).await;
    let role = app.role(&["edit_receipts"]).await;
    let (_, token) = app
        .user(UserSpec {
            is_staff: true,
            role_id: Some(role.id),
            ..UserSpec::default()
        })
        .await;

    let mut body = receipt_body("Dangling");
    body["level"] = json!("company");
    body["level_object_id"] = json!("does-not-exist");
    let (status, response) = app.post(RECEIPTS, &token, body.clone()).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response["code"], "VALIDATION_ERROR");

    body["level_object_id"] = json!(uuid::Uuid::new_v4());
    let (status, _) = app.post(RECEIPTS, &token, body.clone()).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, company) = app.post("/api/companies", &token, company_body("Acme")).await;
    body["level_object_id"] = company["id"].clone();
    let (status, receipt) = app.post(RECEIPTS, &token, body.clone()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(receipt["level_object_id"], company["id"]);

    // The id must exist in the table the level names.
    body["level"] = json!("person");
    let (status, _) = app.post(RECEIPTS, &token, body).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    // Receipts without an object id are not checked.
    let (status, _) = app.post(RECEIPTS, &token, receipt_body("Unfiled")).await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_upload_stores_file() {
    let app = TestApp::new().await;
    let (clerk, token) = app.clerk_with(&[]).await;

    let (status, file) = app.upload(&token, "scan 01.pdf", b"%PDF-1.4 test").await;
    assert_eq!(status, StatusCode::CREATED, "{file}");
    assert_eq!(file["uploaded_by"], json!(clerk.id));

    let path = file["file"].as_str().unwrap();
    assert!(path.starts_with("uploads/"));
    assert!(path.ends_with("-scan_01.pdf"));

    let stored = app.media.path().join(path);
    assert_eq!(std::fs::read(&stored).unwrap(), b"%PDF-1.4 test");

    let uri = format!("/api/document-management/files/{}", file["id"].as_str().unwrap());
    let (status, fetched) = app.get(&uri, &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["file"], file["file"]);

    let (status, list) = app.get("/api/document-management/files", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list["pagination"]["total_items"], 1);
}

#[tokio::test]
async fn test_upload_limits() {
    let app = TestApp::with_settings(|settings| settings.max_upload_bytes = 16).await;
    let (_, token) = app.clerk_with(&[]).await;

    let (status, body) = app.upload(&token, "big.bin", &[7u8; 64]).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["code"], "PAYLOAD_TOO_LARGE");

    let (status, body) = app.upload(&token, "empty.bin", b"").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let (status, _) = app.upload(&token, "ok.bin", b"0123456789").await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_only_uploader_or_staff_deletes_file() {
    let app = TestApp::new().await;
    let (_, uploader) = app.clerk_with(&[]).await;
    let (_, other) = app.clerk_with(&[]).await;

    let (_, file) = app.upload(&uploader, "note.txt", b"hello").await;
    let uri = format!("/api/document-management/files/{}", file["id"].as_str().unwrap());
    let stored = app.media.path().join(file["file"].as_str().unwrap());

    let (status, _) = app.get(&uri, &other).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app.delete(&uri, &other).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(stored.exists());

    let (status, _) = app.delete(&uri, &uploader).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(!stored.exists());

    let (status, _) = app.get(&uri, &uploader).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_receipt_attachments() {
    let app = TestApp::new().await;
    let (_, token) = app.clerk_with(&["edit_receipts"]).await;

    let (_, first) = app.upload(&token, "a.png", b"first").await;
    let (_, second) = app.upload(&token, "b.png", b"second").await;

    let mut body = receipt_body("Taxi");
    body["attachments"] = json!([first["id"], second["id"], first["id"]]);
    let (status, receipt) = app.post(RECEIPTS, &token, body).await;
    assert_eq!(status, StatusCode::CREATED, "{receipt}");

    let mut expected = vec![
        first["id"].as_str().unwrap().to_string(),
        second["id"].as_str().unwrap().to_string(),
    ];
    expected.sort();
    assert_eq!(receipt["attachments"], json!(expected));

    let uri = receipt_uri(&receipt);
    let (_, fetched) = app.get(&uri, &token).await;
    assert_eq!(fetched["attachments"], json!(expected));

    let (_, list) = app.get(RECEIPTS, &token).await;
    assert_eq!(list["results"][0]["attachments"], json!(expected));

    // Replacing drops attachments left out of the payload.
    let mut body = receipt_body("Taxi");
    body["attachments"] = json!([second["id"]]);
    let (status, updated) = app.put(&uri, &token, body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["attachments"], json!([second["id"]]));

    // Deleting a file unlinks it from receipts.
    let file_uri = format!("/api/document-management/files/{}", second["id"].as_str().unwrap());
    let (status, _) = app.delete(&file_uri, &token).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, fetched) = app.get(&uri, &token).await;
    assert_eq!(fetched["attachments"], json!([]));
}

#[tokio::test]
async fn test_receipt_with_unknown_attachment_is_rejected() {
    let app = TestApp::new().await;
    let (_, token) = app.clerk_with(&["edit_receipts"]).await;

    let mut body = receipt_body("Taxi");
    body["attachments"] = json!([uuid::Uuid::new_v4()]);
    let (status, response) = app.post(RECEIPTS, &token, body).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response["message"]
        .as_str()
        .unwrap()
        .starts_with("attachments:"));

    let (_, list) = app.get(RECEIPTS, &token).await;
    assert_eq!(list["pagination"]["total_items"], 0);
}

#[tokio::test]
async fn test_templates() {
    let app = TestApp::new().await;
    let (author, token) = app.clerk_with(&["edit_templates"]).await;
    let (_, reader) = app.clerk_with(&[]).await;

    let contract = json!({
        "title": "Lease",
        "template_type": "contract",
        "content_html": "<p>{{tenant}}</p>",
        "placeholders": ["tenant"]
    });

    let (status, _) = app
        .post("/api/document-management/templates", &reader, contract.clone())
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, template) = app
        .post("/api/document-management/templates", &token, contract)
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(template["created_by"], json!(author.id));
    assert_eq!(template["usage_count"], 0);
    assert_eq!(template["versioning"], json!({}));

    let (status, _) = app
        .post(
            "/api/document-management/templates",
            &token,
            json!({
                "title": "Monthly",
                "template_type": "report",
                "content_html": "<h1>{{month}}</h1>"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, list) = app
        .get("/api/document-management/templates?template_type=contract", &reader)
        .await;
    assert_eq!(field_of(&list, "title"), vec!["Lease"]);
}

#[tokio::test]
async fn test_calendar_events_ordered_by_start() {
    let app = TestApp::new().await;
    let (owner, token) = app.clerk_with(&[]).await;
    let (_, other) = app.clerk_with(&[]).await;

    for (title, start, category) in [
        ("Later", "2024-06-01T10:00:00Z", "report_reminder"),
        ("Sooner", "2024-05-01T10:00:00Z", "upcoming_payment"),
    ] {
        let (status, event) = app
            .post(
                "/api/document-management/calendar-events",
                &token,
                json!({ "title": title, "start": start, "category": category }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(event["created_by"], json!(owner.id));
    }

    let (_, list) = app.get("/api/document-management/calendar-events", &other).await;
    assert_eq!(field_of(&list, "title"), vec!["Sooner", "Later"]);

    let (_, list) = app
        .get(
            "/api/document-management/calendar-events?category=report_reminder",
            &other,
        )
        .await;
    assert_eq!(field_of(&list, "title"), vec!["Later"]);

    let uri = format!(
        "/api/document-management/calendar-events/{}",
        list["results"][0]["id"].as_str().unwrap()
    );
    let (status, _) = app.get(&uri, &other).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, _) = app.delete(&uri, &other).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, _) = app.delete(&uri, &token).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}
