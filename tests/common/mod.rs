#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use bakery_api::{AppState, router};
use bakery_service::{
    Mutation,
    sea_orm::{DatabaseConnection, DbErr},
};
use entity::bakery;
use migration::{Migrator, MigratorTrait};
use serde::de::DeserializeOwned;
use tower::ServiceExt;

/// Router over a freshly migrated in-memory store
pub struct TestContext {
    pub db: DatabaseConnection,
    app: Router,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json<T: DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).unwrap_or_else(|err| {
            panic!(
                "body is not the expected JSON ({err}): {}",
                String::from_utf8_lossy(&self.body)
            )
        })
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

impl TestContext {
    pub async fn new() -> Self {
        let db = bakery_service::connect("sqlite::memory:").await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        let app = router(AppState::new(db.clone()));
        Self { db, app }
    }

    pub async fn create_bakery(&self, name: &str) -> Result<bakery::Model, DbErr> {
        Mutation::create_bakery(&self.db, name).await
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.send(Method::DELETE, uri, None).await
    }

    pub async fn post_form(&self, uri: &str, form: &str) -> TestResponse {
        self.send(Method::POST, uri, Some(form)).await
    }

    pub async fn patch_form(&self, uri: &str, form: &str) -> TestResponse {
        self.send(Method::PATCH, uri, Some(form)).await
    }

    pub async fn send(&self, method: Method, uri: &str, form: Option<&str>) -> TestResponse {
        let request = Request::builder().method(method).uri(uri);
        let request = match form {
            Some(form) => request
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form.to_owned())),
            None => request.body(Body::empty()),
        }
        .unwrap();

        self.dispatch(request).await
    }

    /// Sends `fields` as a `multipart/form-data` body
    pub async fn send_multipart(
        &self,
        method: Method,
        uri: &str,
        fields: &[(&str, &str)],
    ) -> TestResponse {
        const BOUNDARY: &str = "bakery-form-boundary";

        let mut body = String::new();
        for (name, value) in fields {
            body.push_str(&format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            ));
        }
        body.push_str(&format!("--{BOUNDARY}--\r\n"));

        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap();

        self.dispatch(request).await
    }

    async fn dispatch(&self, request: Request<Body>) -> TestResponse {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec();

        TestResponse {
            status,
            content_type,
            body,
        }
    }
}
