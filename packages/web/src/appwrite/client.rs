//! Appwrite client for making requests to the backend

use reqwest::{Method, RequestBuilder, StatusCode, Url};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::types::{Account, DocumentList, SessionToken};

/// Error body returned by Appwrite for failed requests
#[derive(Debug, Deserialize)]
pub struct AppwriteErrorBody {
    pub message: String,
    #[serde(default)]
    pub code: u16,
    #[serde(default, rename = "type")]
    pub kind: String,
}

/// Error type for Appwrite operations
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Appwrite error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

impl ClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Api { status: 404, .. })
    }
}

#[derive(Serialize)]
struct UpdateDocument<'a, D: Serialize> {
    data: &'a D,
}

#[derive(Serialize)]
struct EmailSession<'a> {
    email: &'a str,
    password: &'a str,
}

/// Appwrite client scoped to one project
#[derive(Clone)]
pub struct AppwriteClient {
    client: reqwest::Client,
    endpoint: String,
    project_id: String,
    api_key: Option<String>,
    session: Option<String>,
}

impl AppwriteClient {
    /// Create a new client for a project
    pub fn new(endpoint: impl Into<String>, project_id: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            project_id: project_id.into(),
            api_key: None,
            session: None,
        }
    }

    /// Authenticate requests with a server API key
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Act on behalf of a user session
    pub fn with_session(mut self, secret: impl Into<String>) -> Self {
        self.session = Some(secret.into());
        self
    }

    /// Endpoint URL with `segments` appended, each one percent-encoded
    fn url(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = Url::parse(&self.endpoint)
            .map_err(|e| ClientError::InvalidEndpoint(format!("{}: {}", self.endpoint, e)))?;
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidEndpoint(self.endpoint.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder, ClientError> {
        let mut req = self
            .client
            .request(method, self.url(segments)?)
            .header("X-Appwrite-Project", &self.project_id)
            .header("X-Appwrite-Response-Format", "1.5.0");

        if let Some(key) = &self.api_key {
            req = req.header("X-Appwrite-Key", key);
        }
        if let Some(session) = &self.session {
            req = req.header("X-Appwrite-Session", session);
        }
        Ok(req)
    }

    async fn send(&self, req: RequestBuilder) -> Result<reqwest::Response, ClientError> {
        let response = req.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<AppwriteErrorBody>(&body)
            .map(|err| err.message)
            .unwrap_or_else(|_| status.canonical_reason().unwrap_or("request failed").to_string());

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn send_json<R: DeserializeOwned>(&self, req: RequestBuilder) -> Result<R, ClientError> {
        let response = self.send(req).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn documents<'a>(database_id: &'a str, collection_id: &'a str) -> [&'a str; 5] {
        ["databases", database_id, "collections", collection_id, "documents"]
    }

    fn document<'a>(database_id: &'a str, collection_id: &'a str, document_id: &'a str) -> [&'a str; 6] {
        ["databases", database_id, "collections", collection_id, "documents", document_id]
    }

    /// Fetch one document, `None` when it does not exist
    pub async fn get_document<T: DeserializeOwned>(
        &self,
        database_id: &str,
        collection_id: &str,
        document_id: &str,
    ) -> Result<Option<T>, ClientError> {
        let req = self.request(Method::GET, &Self::document(database_id, collection_id, document_id))?;
        match self.send_json(req).await {
            Ok(doc) => Ok(Some(doc)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// List documents matching the given encoded queries
    pub async fn list_documents<T: DeserializeOwned>(
        &self,
        database_id: &str,
        collection_id: &str,
        queries: &[String],
    ) -> Result<DocumentList<T>, ClientError> {
        let params: Vec<(&str, &str)> = queries.iter().map(|q| ("queries[]", q.as_str())).collect();
        let req = self
            .request(Method::GET, &Self::documents(database_id, collection_id))?
            .query(&params);

        self.send_json(req).await
    }

    /// Patch attributes of a document and return the updated document
    pub async fn update_document<D, T>(
        &self,
        database_id: &str,
        collection_id: &str,
        document_id: &str,
        data: &D,
    ) -> Result<T, ClientError>
    where
        D: Serialize,
        T: DeserializeOwned,
    {
        let req = self
            .request(Method::PATCH, &Self::document(database_id, collection_id, document_id))?
            .json(&UpdateDocument { data });

        self.send_json(req).await
    }

    pub async fn delete_document(
        &self,
        database_id: &str,
        collection_id: &str,
        document_id: &str,
    ) -> Result<(), ClientError> {
        let req = self.request(Method::DELETE, &Self::document(database_id, collection_id, document_id))?;
        self.send(req).await?;
        Ok(())
    }

    /// Remove a file from a storage bucket
    pub async fn delete_file(&self, bucket_id: &str, file_id: &str) -> Result<(), ClientError> {
        let req = self.request(Method::DELETE, &["storage", "buckets", bucket_id, "files", file_id])?;
        self.send(req).await?;
        Ok(())
    }

    /// Create an email/password session. With an API key the secret is returned.
    pub async fn create_email_session(
        &self,
        email: &str,
        password: &str,
    ) -> Result<SessionToken, ClientError> {
        let req = self
            .request(Method::POST, &["account", "sessions", "email"])?
            .json(&EmailSession { email, password });

        self.send_json(req).await
    }

    /// Account of the session this client acts for
    pub async fn get_account(&self) -> Result<Account, ClientError> {
        self.send_json(self.request(Method::GET, &["account"])?).await
    }

    pub async fn delete_current_session(&self) -> Result<(), ClientError> {
        let req = self.request(Method::DELETE, &["account", "sessions", "current"])?;
        match self.send(req).await {
            Ok(_) => Ok(()),
            // Already expired on the Appwrite side
            Err(ClientError::Api { status, .. }) if status == StatusCode::UNAUTHORIZED.as_u16() => Ok(()),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_detected_by_status() {
        let err = ClientError::Api {
            status: 404,
            message: "Document with the requested ID could not be found.".to_string(),
        };
        assert!(err.is_not_found());

        let err = ClientError::Api {
            status: 401,
            message: "Unauthorized".to_string(),
        };
        assert!(!err.is_not_found());
    }

    #[test]
    fn error_body_parses() {
        let body = r#"{"message":"Invalid document structure","code":400,"type":"document_invalid_structure","version":"1.5.7"}"#;
        let err: AppwriteErrorBody = serde_json::from_str(body).unwrap();
        assert_eq!(err.code, 400);
        assert_eq!(err.kind, "document_invalid_structure");
    }

    #[test]
    fn update_payload_is_wrapped_in_data() {
        #[derive(Serialize)]
        struct Patch {
            caption: &'static str,
        }

        let body = serde_json::to_value(UpdateDocument { data: &Patch { caption: "hi" } }).unwrap();
        assert_eq!(body, serde_json::json!({ "data": { "caption": "hi" } }));
    }

    #[test]
    fn ids_are_escaped_as_single_segments() {
        let client = AppwriteClient::new("https://cloud.appwrite.io/v1", "proj");
        let url = client
            .url(&AppwriteClient::document("db", "posts", "a/b?c#d"))
            .unwrap();

        assert_eq!(
            url.as_str(),
            "https://cloud.appwrite.io/v1/databases/db/collections/posts/documents/a%2Fb%3Fc%23d"
        );
        assert!(url.query().is_none());
    }

    #[test]
    fn trailing_slash_on_endpoint_is_ignored() {
        let client = AppwriteClient::new("http://localhost/v1/", "proj");
        let url = client.url(&["account"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost/v1/account");
    }

    #[test]
    fn unusable_endpoint_is_an_error() {
        let client = AppwriteClient::new("not a url", "proj");
        assert!(matches!(
            client.url(&["account"]),
            Err(ClientError::InvalidEndpoint(_))
        ));
    }
}
