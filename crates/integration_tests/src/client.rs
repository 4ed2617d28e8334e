//! Thin typed client over `reqwest` for the users endpoints.

use reqwest::{Client, Response};
use users_api::request::UserRequest;

use crate::server::TestServer;

/// Sends requests to one [`TestServer`].
#[derive(Clone)]
pub struct UsersClient {
    http: Client,
    base_url: String,
}

impl UsersClient {
    pub fn new(server: &TestServer) -> Self {
        Self {
            http: Client::new(),
            base_url: server.base_url(),
        }
    }

    fn users_url(&self) -> String {
        format!("{}/api/users", self.base_url)
    }

    fn user_url(&self, id: impl std::fmt::Display) -> String {
        format!("{}/api/users/{}", self.base_url, id)
    }

    pub async fn list(&self) -> reqwest::Result<Response> {
        self.http.get(self.users_url()).send().await
    }

    pub async fn list_page(&self, page: usize, size: usize) -> reqwest::Result<Response> {
        self.http
            .get(self.users_url())
            .query(&[("page", page), ("size", size)])
            .send()
            .await
    }

    pub async fn get(&self, id: impl std::fmt::Display) -> reqwest::Result<Response> {
        self.http.get(self.user_url(id)).send().await
    }

    pub async fn create(&self, body: &UserRequest) -> reqwest::Result<Response> {
        self.http.post(self.users_url()).json(body).send().await
    }

    pub async fn put(&self, id: impl std::fmt::Display, body: &UserRequest) -> reqwest::Result<Response> {
        self.http.put(self.user_url(id)).json(body).send().await
    }

    pub async fn delete(&self, id: impl std::fmt::Display) -> reqwest::Result<Response> {
        self.http.delete(self.user_url(id)).send().await
    }

    /// POST a raw body with the JSON content type, bypassing serialization.
    pub async fn create_raw(&self, body: &str) -> reqwest::Result<Response> {
        self.http
            .post(self.users_url())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body.to_string())
            .send()
            .await
    }
}
