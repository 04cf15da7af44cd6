//! HTTP API through the full router (auth middleware included)

use std::io::Cursor;
use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use http::{Request, StatusCode, header};
use image::{ImageFormat, Rgb, RgbImage};
use menu_server::auth::hash_password;
use menu_server::db::DbService;
use menu_server::storage::MemoryStore;
use menu_server::{Config, ServerState, build_router};
use serde_json::{Value, json};
use shared::models::AdminRole;
use tower::ServiceExt;

const OWNER_EMAIL: &str = "owner@fakhm.cafe";
const OWNER_PASSWORD: &str = "correct-horse-battery";
const BOUNDARY: &str = "menu-test-boundary";

struct TestApp {
    router: Router,
    store: Arc<MemoryStore>,
    state: ServerState,
}

async fn app() -> TestApp {
    let config = Config::for_tests();
    let db = DbService::memory().await.unwrap();
    let store = Arc::new(MemoryStore::new("http://localhost/blobs"));
    let state = ServerState::new(config, db, store.clone());

    state
        .admins()
        .create(
            OWNER_EMAIL,
            hash_password(OWNER_PASSWORD).unwrap(),
            AdminRole::SuperAdmin,
        )
        .await
        .unwrap();

    TestApp {
        router: build_router(state.clone()),
        store,
        state,
    }
}

impl TestApp {
    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    async fn json(&self, method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.send(request).await
    }

    async fn login(&self, email: &str, password: &str) -> String {
        let (status, body) = self
            .json(
                "POST",
                "/api/auth/login",
                None,
                Some(json!({ "email": email, "password": password })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "{body}");
        body["token"].as_str().unwrap().to_string()
    }
}

fn png(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_pixel(width, height, Rgb([120, 80, 40]));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png).unwrap();
    out.into_inner()
}

fn multipart(file_name: &str, content_type: &str, bytes: &[u8], extra: &[(&str, &str)]) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in extra {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn upload_request(token: &str, body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/admin/images")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn health_is_public() {
    let app = app().await;
    let (status, body) = app.json("GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["blob_store"]["backend"], "memory");
}

#[tokio::test]
async fn admin_routes_require_a_token() {
    let app = app().await;

    let (status, body) = app.json("GET", "/api/admin/categories", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], 1001);

    let (status, body) = app
        .json("GET", "/api/admin/categories", Some("not-a-jwt"), None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], 1004);
}

#[tokio::test]
async fn login_errors_do_not_reveal_which_part_was_wrong() {
    let app = app().await;

    let (status_a, body_a) = app
        .json(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({ "email": OWNER_EMAIL, "password": "wrong-password" })),
        )
        .await;
    let (status_b, body_b) = app
        .json(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({ "email": "nobody@fakhm.cafe", "password": OWNER_PASSWORD })),
        )
        .await;

    assert_eq!(status_a, StatusCode::UNAUTHORIZED);
    assert_eq!(status_a, status_b);
    assert_eq!(body_a["code"], 1002);
    assert_eq!(body_a, body_b);
}

#[tokio::test]
async fn me_returns_the_logged_in_admin() {
    let app = app().await;
    let token = app.login(OWNER_EMAIL, OWNER_PASSWORD).await;

    let (status, body) = app.json("GET", "/api/auth/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], OWNER_EMAIL);
    assert_eq!(body["role"], "super_admin");
}

#[tokio::test]
async fn category_and_product_crud_feeds_the_public_menu() {
    let app = app().await;
    let token = app.login(OWNER_EMAIL, OWNER_PASSWORD).await;

    let (status, category) = app
        .json(
            "POST",
            "/api/admin/categories",
            Some(&token),
            Some(json!({ "nameAr": "المشروبات الساخنة", "icon": "☕", "order": 1 })),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{category}");
    let category_id = category["id"].as_str().unwrap().to_string();

    let (status, product) = app
        .json(
            "POST",
            "/api/admin/products",
            Some(&token),
            Some(json!({
                "nameAr": "لاتيه",
                "categoryId": category_id,
                "options": { "sizes": [
                    { "name": "صغير", "price": 35 },
                    { "name": "كبير", "price": 45 }
                ]}
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{product}");
    let product_id = product["id"].as_str().unwrap().to_string();

    let (status, menu) = app
        .json("GET", &format!("/api/menu/categories/{}", category_id), None, None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(menu["category"]["nameAr"], "المشروبات الساخنة");
    assert_eq!(menu["products"][0]["nameAr"], "لاتيه");
    assert_eq!(menu["products"][0]["priceLabel"], "35 - 45 جنيه");

    // hide the product: it leaves the public menu but stays in admin
    let (status, _) = app
        .json(
            "PUT",
            &format!("/api/admin/products/{}", product_id),
            Some(&token),
            Some(json!({ "isActive": false })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, public) = app.json("GET", "/api/menu/products", None, None).await;
    assert_eq!(public.as_array().unwrap().len(), 0);
    let (_, admin) = app.json("GET", "/api/admin/products", Some(&token), None).await;
    assert_eq!(admin.as_array().unwrap().len(), 1);

    // deleting the category leaves the product with an unspecified category
    let (status, _) = app
        .json("DELETE", &format!("/api/admin/categories/{}", category_id), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    let (_, admin) = app.json("GET", "/api/admin/products", Some(&token), None).await;
    assert_eq!(admin[0]["categoryName"], "غير محدد");

    let (status, body) = app
        .json("DELETE", &format!("/api/admin/categories/{}", category_id), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 3001);
}

#[tokio::test]
async fn invalid_payload_names_the_field() {
    let app = app().await;
    let token = app.login(OWNER_EMAIL, OWNER_PASSWORD).await;

    let (status, body) = app
        .json(
            "POST",
            "/api/admin/categories",
            Some(&token),
            Some(json!({ "nameAr": "   " })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "nameAr");
    assert!(body["localized"].is_string());
}

#[tokio::test]
async fn product_needs_an_existing_category() {
    let app = app().await;
    let token = app.login(OWNER_EMAIL, OWNER_PASSWORD).await;

    let (status, body) = app
        .json(
            "POST",
            "/api/admin/products",
            Some(&token),
            Some(json!({ "nameAr": "موكا", "categoryId": "missing", "basePrice": 40 })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 3001);
}

async fn category(app: &TestApp, token: &str, name: &str) -> String {
    let (status, category) = app
        .json(
            "POST",
            "/api/admin/categories",
            Some(token),
            Some(json!({ "nameAr": name })),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{category}");
    category["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn flat_base_price_is_saved_and_labelled() {
    let app = app().await;
    let token = app.login(OWNER_EMAIL, OWNER_PASSWORD).await;
    let category_id = category(&app, &token, "المشروبات الباردة").await;

    let (status, product) = app
        .json(
            "POST",
            "/api/admin/products",
            Some(&token),
            Some(json!({ "nameAr": "موكا", "categoryId": category_id, "basePrice": 40 })),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{product}");
    assert_eq!(product["basePrice"], json!(40.0));
    let product_id = product["id"].as_str().unwrap().to_string();

    let (_, menu) = app.json("GET", "/api/menu/products", None, None).await;
    assert_eq!(menu[0]["priceLabel"], "40 جنيه");

    let (status, updated) = app
        .json(
            "PUT",
            &format!("/api/admin/products/{}", product_id),
            Some(&token),
            Some(json!({ "basePrice": 40.5 })),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{updated}");
    assert_eq!(updated["basePrice"], json!(40.5));

    let (_, menu) = app.json("GET", "/api/menu/products", None, None).await;
    assert_eq!(menu[0]["basePrice"], json!(40.5));
    assert_eq!(menu[0]["priceLabel"], "40.5 جنيه");

    // null clears the price and the label with it
    let (status, _) = app
        .json(
            "PUT",
            &format!("/api/admin/products/{}", product_id),
            Some(&token),
            Some(json!({ "basePrice": null })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let (_, menu) = app.json("GET", "/api/menu/products", None, None).await;
    assert!(menu[0]["basePrice"].is_null());
    assert_eq!(menu[0]["priceLabel"], "");
}

#[tokio::test]
async fn unavailable_sizes_are_left_out_of_the_menu_price() {
    let app = app().await;
    let token = app.login(OWNER_EMAIL, OWNER_PASSWORD).await;
    let category_id = category(&app, &token, "المشروبات الساخنة").await;

    let (status, product) = app
        .json(
            "POST",
            "/api/admin/products",
            Some(&token),
            Some(json!({
                "nameAr": "كابتشينو",
                "categoryId": category_id,
                "basePrice": 8,
                "options": { "sizes": [
                    { "name": "small", "price": 10, "isAvailable": true },
                    { "name": "large", "price": 15, "isAvailable": false }
                ]}
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{product}");

    let (status, menu) = app
        .json("GET", &format!("/api/menu/products?categoryId={}", category_id), None, None)
        .await;
    assert_eq!(status, StatusCode::OK);
    let item = &menu[0];
    assert_eq!(item["priceLabel"], "10 جنيه");
    assert_eq!(item["options"]["sizes"][1]["isAvailable"], false);
    assert_eq!(item["categoryName"], "المشروبات الساخنة");

    // once every size is off the base price shows
    let (status, _) = app
        .json(
            "PUT",
            &format!("/api/admin/products/{}", product["id"].as_str().unwrap()),
            Some(&token),
            Some(json!({ "options": { "sizes": [
                { "name": "small", "price": 10, "isAvailable": false }
            ]}})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let (_, menu) = app.json("GET", "/api/menu/products", None, None).await;
    assert_eq!(menu[0]["priceLabel"], "8 جنيه");
}

#[tokio::test]
async fn settings_default_then_saved() {
    let app = app().await;
    let token = app.login(OWNER_EMAIL, OWNER_PASSWORD).await;

    let (_, settings) = app.json("GET", "/api/menu/settings", None, None).await;
    assert_eq!(settings["siteNameAr"], "فخم البن");

    let (status, saved) = app
        .json(
            "PUT",
            "/api/admin/settings",
            Some(&token),
            Some(json!({ "socialMedia": { "whatsapp": "201001234567" } })),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{saved}");

    let (_, settings) = app.json("GET", "/api/menu/settings", None, None).await;
    assert_eq!(settings["socialMedia"]["whatsapp"], "201001234567");
    assert_eq!(settings["siteNameAr"], "فخم البن");
}

#[tokio::test]
async fn stats_count_records() {
    let app = app().await;
    let token = app.login(OWNER_EMAIL, OWNER_PASSWORD).await;

    app.json(
        "POST",
        "/api/admin/announcements",
        Some(&token),
        Some(json!({ "titleAr": "خصم ٢٠٪", "priority": 2 })),
    )
    .await;

    let (status, stats) = app.json("GET", "/api/admin/stats", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["announcements"], 1);
    assert_eq!(stats["activeProducts"], 0);
}

#[tokio::test]
async fn image_upload_and_delete() {
    let app = app().await;
    let token = app.login(OWNER_EMAIL, OWNER_PASSWORD).await;

    let body = multipart("latte.png", "image/png", &png(2400, 1200), &[("folder", "products")]);
    let (status, outcome) = app.send(upload_request(&token, body)).await;
    assert_eq!(status, StatusCode::OK, "{outcome}");
    assert_eq!(outcome["width"], 1200);
    assert_eq!(outcome["height"], 600);
    assert_eq!(outcome["state"], "done");

    let uploaded = outcome["url"].as_str().unwrap().to_string();
    assert!(uploaded.starts_with("http://localhost/blobs/products/"));
    assert!(uploaded.ends_with(".jpg"));
    let stored = app.store.get(&uploaded).await.unwrap();
    assert_eq!(stored.content_type, "image/jpeg");

    // the form saves the URL on the record, later edits read it back from there
    let (status, category) = app
        .json(
            "POST",
            "/api/admin/categories",
            Some(&token),
            Some(json!({ "nameAr": "الحلويات", "image": uploaded })),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{category}");
    let category_id = category["id"].as_str().unwrap().to_string();

    let (status, category) = app
        .json("GET", &format!("/api/admin/categories/{}", category_id), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    let url = category["image"].as_str().unwrap().to_string();
    assert_eq!(url, uploaded);

    let (status, _) = app
        .json("DELETE", "/api/admin/images", Some(&token), Some(json!({ "url": url })))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(app.store.is_empty().await);

    let (status, body) = app
        .json("DELETE", "/api/admin/images", Some(&token), Some(json!({ "url": url })))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 4008);
}

#[tokio::test]
async fn failed_upload_reports_the_image_to_restore() {
    let app = app().await;
    let token = app.login(OWNER_EMAIL, OWNER_PASSWORD).await;

    let previous = "http://localhost/blobs/products/old.jpg";
    let body = multipart(
        "notes.txt",
        "text/plain",
        b"not an image",
        &[("previousUrl", previous)],
    );
    let (status, body) = app.send(upload_request(&token, body)).await;

    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(body["code"], 4002);
    assert_eq!(body["details"]["restoreUrl"], previous);
    assert!(app.store.is_empty().await);
}

#[tokio::test]
async fn admin_management_is_super_admin_only() {
    let app = app().await;
    let owner = app.login(OWNER_EMAIL, OWNER_PASSWORD).await;

    let (status, staff) = app
        .json(
            "POST",
            "/api/admin/admins",
            Some(&owner),
            Some(json!({ "email": "staff@fakhm.cafe", "password": "staff-password", "role": "admin" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{staff}");
    let staff_id = staff["id"].as_str().unwrap().to_string();

    let (status, body) = app
        .json(
            "POST",
            "/api/admin/admins",
            Some(&owner),
            Some(json!({ "email": "STAFF@fakhm.cafe", "password": "another-password" })),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 3005);

    let staff_token = app.login("staff@fakhm.cafe", "staff-password").await;
    let (status, body) = app.json("GET", "/api/admin/admins", Some(&staff_token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], 2002);

    // a plain admin still manages content
    let (status, _) = app.json("GET", "/api/admin/categories", Some(&staff_token), None).await;
    assert_eq!(status, StatusCode::OK);

    let owner_id = app.state.admins().find_credentials(OWNER_EMAIL).await.unwrap().unwrap().0.id;
    let (status, body) = app
        .json("DELETE", &format!("/api/admin/admins/{}", owner_id), Some(&owner), None)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], 2005);

    // deleting the record revokes the token immediately
    let (status, _) = app
        .json("DELETE", &format!("/api/admin/admins/{}", staff_id), Some(&owner), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = app.json("GET", "/api/admin/categories", Some(&staff_token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
