use std::time::Duration;

use anyhow::Context;
use reqwest::{StatusCode, Url};
use thiserror::Error;

use crate::model::file_record::{DeleteResponse, FileId, FileRecord, ListResponse};

/// Why a file store call did not produce a usable result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server responded with HTTP {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
    /// The store answered but refused the operation (`success: false`).
    #[error("rejected by server: {}", .0.as_deref().unwrap_or("no reason given"))]
    Rejected(Option<String>),
}

impl From<reqwest::Error> for StoreError {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            StoreError::Status(status.as_u16())
        } else if e.is_decode() {
            StoreError::Decode(e.to_string())
        } else {
            StoreError::Transport(e.to_string())
        }
    }
}

/// The remote collaborator that owns every stored file.
pub trait FileStore: Send + Sync {
    /// `GET <base>`
    fn list(&self) -> Result<Vec<FileRecord>, StoreError>;
    /// `GET <base>/<id>` as raw text.
    fn fetch_text(&self, id: &FileId) -> Result<String, StoreError>;
    /// `DELETE <base>/<id>`. `Ok` only when the store reports success.
    fn delete(&self, id: &FileId) -> Result<(), StoreError>;
    /// URL of the raw resource, used for download navigation.
    fn content_url(&self, id: &FileId) -> String;
}

/// Blocking HTTP client for the file store REST API.
pub struct HttpFileStore {
    base_url: Url,
    client: reqwest::blocking::Client,
}

impl HttpFileStore {
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .with_context(|| format!("invalid base URL {:?}", base_url))?;
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("txtview/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }
}

impl FileStore for HttpFileStore {
    fn list(&self) -> Result<Vec<FileRecord>, StoreError> {
        tracing::debug!(url = %self.base_url, "listing files");
        let body = self
            .client
            .get(self.base_url.clone())
            .send()?
            .error_for_status()?
            .bytes()?;
        parse_list(&body)
    }

    fn fetch_text(&self, id: &FileId) -> Result<String, StoreError> {
        let url = self.content_url(id);
        tracing::debug!(%url, "fetching file content");
        let text = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "text/plain, */*")
            .send()?
            .error_for_status()?
            .text()?;
        Ok(text)
    }

    fn delete(&self, id: &FileId) -> Result<(), StoreError> {
        let url = self.content_url(id);
        tracing::debug!(%url, "deleting file");
        let resp = self.client.delete(&url).send()?;
        let status = resp.status();
        let body = resp.bytes()?;
        delete_outcome(status, &body)
    }

    fn content_url(&self, id: &FileId) -> String {
        resource_url(&self.base_url, id)
    }
}

/// `<base>/<id>`, with the id percent-encoded as a single path segment.
pub fn resource_url(base: &Url, id: &FileId) -> String {
    let mut url = base.clone();
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push(id.as_str());
    }
    url.into()
}

/// Parse the list body. A missing or null `data` field is an empty list.
pub fn parse_list(body: &[u8]) -> Result<Vec<FileRecord>, StoreError> {
    let resp: ListResponse =
        serde_json::from_slice(body).map_err(|e| StoreError::Decode(e.to_string()))?;
    Ok(resp.data.unwrap_or_default())
}

/// Outcome of a delete reply. Error statuses that still carry an
/// acknowledgement body keep the server's message.
pub fn delete_outcome(status: StatusCode, body: &[u8]) -> Result<(), StoreError> {
    if status.is_success() {
        return parse_delete(body);
    }
    match serde_json::from_slice::<DeleteResponse>(body) {
        Ok(resp) if !resp.success => Err(StoreError::Rejected(resp.message)),
        _ => Err(StoreError::Status(status.as_u16())),
    }
}

/// Parse the delete acknowledgement.
pub fn parse_delete(body: &[u8]) -> Result<(), StoreError> {
    let resp: DeleteResponse =
        serde_json::from_slice(body).map_err(|e| StoreError::Decode(e.to_string()))?;
    if resp.success {
        Ok(())
    } else {
        Err(StoreError::Rejected(resp.message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_keeps_server_order() {
        let body = br#"{"data":[{"_id":"a","filename":"notes.txt"},{"_id":"b","filename":"todo.txt"}]}"#;
        let files = parse_list(body).unwrap();
        let ids: Vec<&str> = files.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn list_without_data_is_empty() {
        assert!(parse_list(br#"{"success":true}"#).unwrap().is_empty());
    }

    #[test]
    fn list_garbage_is_decode_error() {
        assert!(matches!(parse_list(b"<html>"), Err(StoreError::Decode(_))));
    }

    #[test]
    fn delete_success() {
        assert_eq!(parse_delete(br#"{"success":true,"message":"ok"}"#), Ok(()));
    }

    #[test]
    fn delete_rejected_carries_message() {
        let err = parse_delete(br#"{"success":false,"message":"File not found"}"#).unwrap_err();
        assert_eq!(err, StoreError::Rejected(Some("File not found".to_string())));
        assert_eq!(err.to_string(), "rejected by server: File not found");
    }

    #[test]
    fn delete_without_flag_is_rejected() {
        assert_eq!(parse_delete(b"{}"), Err(StoreError::Rejected(None)));
    }

    #[test]
    fn list_tolerates_duplicate_and_numeric_ids() {
        let body = br#"{"data":[{"_id":"a","id":"a","filename":"notes.txt"},{"id":7,"filename":"todo.txt"}]}"#;
        let files = parse_list(body).unwrap();
        let ids: Vec<&str> = files.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, ["a", "7"]);
    }

    #[test]
    fn delete_error_status_keeps_server_message() {
        let err = delete_outcome(
            StatusCode::NOT_FOUND,
            br#"{"success":false,"message":"File not found"}"#,
        )
        .unwrap_err();
        assert_eq!(err, StoreError::Rejected(Some("File not found".to_string())));
    }

    #[test]
    fn delete_error_status_without_body_is_status() {
        assert_eq!(
            delete_outcome(StatusCode::INTERNAL_SERVER_ERROR, b"<html>oops</html>"),
            Err(StoreError::Status(500))
        );
        assert_eq!(
            delete_outcome(StatusCode::OK, br#"{"success":true}"#),
            Ok(())
        );
    }

    #[test]
    fn resource_url_joins_and_encodes() {
        let base = Url::parse("http://h/api/v1/file").unwrap();
        assert_eq!(resource_url(&base, &FileId::new("65f0c1")), "http://h/api/v1/file/65f0c1");
        assert_eq!(
            resource_url(&Url::parse("http://h/file").unwrap(), &FileId::new("a b/c")),
            "http://h/file/a%20b%2Fc"
        );
        assert_eq!(
            resource_url(&Url::parse("http://h").unwrap(), &FileId::new("x")),
            "http://h/x"
        );
    }

    #[test]
    fn store_rejects_unparseable_base_url() {
        assert!(HttpFileStore::new("not a url", Duration::from_secs(1)).is_err());
        let store = HttpFileStore::new("http://h/api/v1/file/", Duration::from_secs(1)).unwrap();
        assert_eq!(store.content_url(&FileId::new("a")), "http://h/api/v1/file/a");
    }
}
