use error_stack::{Report, ResultExt};
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::DashboardError;
use crate::model::{Author, Book, BookPayload};

pub static API_KEY_HEADER: &str = "api-key";
const HTTP_USER_AGENT: &str = "catalog-dashboard/0.1";
const UNKNOWN_ERROR: &str = "Unknown error";

#[derive(Debug, Serialize)]
struct AuthorPayload<'a> {
    name: &'a str,
}

pub struct CatalogClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
}

impl CatalogClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
    ) -> error_stack::Result<Self, DashboardError> {
        let http = Client::builder()
            .user_agent(HTTP_USER_AGENT)
            .build()
            .change_context(DashboardError::Transport)?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => request.header(API_KEY_HEADER, key),
            None => request,
        }
    }

    pub fn list_authors(&self) -> error_stack::Result<Vec<Author>, DashboardError> {
        send(self.http.get(self.url("authors/")))
    }

    pub fn create_author(&self, name: &str) -> error_stack::Result<Author, DashboardError> {
        let request = self.authorized(self.http.post(self.url("authors/")));
        send(request.json(&AuthorPayload { name }))
    }

    pub fn update_author(
        &self,
        id: i64,
        name: &str,
    ) -> error_stack::Result<Author, DashboardError> {
        let request = self.authorized(self.http.put(self.url(&format!("authors/{id}"))));
        send(request.json(&AuthorPayload { name }))
    }

    pub fn delete_author(&self, id: i64) -> error_stack::Result<Author, DashboardError> {
        send(self.authorized(self.http.delete(self.url(&format!("authors/{id}")))))
    }

    pub fn list_books(&self) -> error_stack::Result<Vec<Book>, DashboardError> {
        send(self.http.get(self.url("books/")))
    }

    pub fn create_book(&self, book: &BookPayload) -> error_stack::Result<Book, DashboardError> {
        let request = self.authorized(self.http.post(self.url("books/")));
        send(request.json(book))
    }

    pub fn update_book(
        &self,
        id: i64,
        book: &BookPayload,
    ) -> error_stack::Result<Book, DashboardError> {
        let request = self.authorized(self.http.put(self.url(&format!("books/{id}"))));
        send(request.json(book))
    }

    pub fn delete_book(&self, id: i64) -> error_stack::Result<Book, DashboardError> {
        send(self.authorized(self.http.delete(self.url(&format!("books/{id}")))))
    }

    pub fn validate_key(&self) -> error_stack::Result<bool, DashboardError> {
        let request = self.authorized(self.http.get(self.url("validate_key/")));
        tracing::debug!("validating api key");
        let response = request.send().change_context(DashboardError::Transport)?;
        match response.status() {
            status if status.is_success() => Ok(true),
            StatusCode::UNAUTHORIZED => Ok(false),
            status => Err(rejected(status, response.text().unwrap_or_default())),
        }
    }
}

fn send<T: DeserializeOwned>(request: RequestBuilder) -> error_stack::Result<T, DashboardError> {
    let response = request.send().change_context(DashboardError::Transport)?;
    let status = response.status();
    tracing::debug!(url = %response.url(), %status, "catalog api answered");
    if !status.is_success() {
        return Err(rejected(status, response.text().unwrap_or_default()));
    }
    response.json::<T>().change_context(DashboardError::Decode)
}

fn rejected(status: StatusCode, body: String) -> Report<DashboardError> {
    Report::new(DashboardError::Rejected {
        status: status.as_u16(),
        detail: rejection_detail(&body),
    })
}

pub fn rejection_detail(body: &str) -> String {
    let Ok(body) = serde_json::from_str::<Value>(body) else {
        return UNKNOWN_ERROR.to_string();
    };
    match body.get("detail") {
        Some(Value::String(detail)) => detail.clone(),
        Some(Value::Null) | None => UNKNOWN_ERROR.to_string(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod test {
    use super::{rejection_detail, CatalogClient};

    #[test]
    fn detail_is_taken_verbatim() {
        assert_eq!(
            rejection_detail(r#"{"detail":"Author name cannot be empty."}"#),
            "Author name cannot be empty."
        );
    }

    #[test]
    fn malformed_body_falls_back() {
        assert_eq!(rejection_detail("<html>502 Bad Gateway</html>"), "Unknown error");
        assert_eq!(rejection_detail(""), "Unknown error");
        assert_eq!(rejection_detail(r#"{"message":"nope"}"#), "Unknown error");
    }

    #[test]
    fn structured_detail_is_printed_as_json() {
        assert_eq!(
            rejection_detail(r#"{"detail":[{"loc":["body","name"]}]}"#),
            r#"[{"loc":["body","name"]}]"#
        );
    }

    #[test]
    fn base_url_is_normalised() {
        let client = CatalogClient::new("http://127.0.0.1:8080/", None).unwrap();
        assert_eq!(client.url("authors/"), "http://127.0.0.1:8080/authors/");
    }
}
