use std::fmt;

use serde::{Deserialize, Deserializer};

/// Opaque identifier assigned by the file store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct FileId(pub String);

impl FileId {
    #[cfg(test)]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Metadata for one remotely stored text file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawRecord")]
pub struct FileRecord {
    pub id: FileId,
    pub filename: String,
    pub size: Option<String>,
}

/// Record as it comes off the wire. Mongo-style stores send `_id`, some
/// also add an `id` virtual, and either may be a number.
#[derive(Deserialize)]
struct RawRecord {
    #[serde(default, rename = "_id", deserialize_with = "scalar_as_text")]
    mongo_id: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_text")]
    id: Option<String>,
    #[serde(default)]
    filename: String,
    #[serde(default, deserialize_with = "scalar_as_text")]
    size: Option<String>,
}

impl TryFrom<RawRecord> for FileRecord {
    type Error = String;

    fn try_from(raw: RawRecord) -> Result<Self, Self::Error> {
        let id = raw
            .mongo_id
            .or(raw.id)
            .ok_or_else(|| format!("file record {:?} has no id", raw.filename))?;
        Ok(Self {
            id: FileId(id),
            filename: raw.filename,
            size: raw.size,
        })
    }
}

impl FileRecord {
    #[cfg(test)]
    pub fn new(id: &str, filename: &str) -> Self {
        Self {
            id: FileId::new(id),
            filename: filename.to_string(),
            size: None,
        }
    }

    #[cfg(test)]
    pub fn with_size(mut self, size: &str) -> Self {
        self.size = Some(size.to_string());
        self
    }

    /// Size column text; blank sizes render as a dash.
    pub fn size_label(&self) -> &str {
        match self.size.as_deref() {
            Some(s) if !s.is_empty() => s,
            _ => "—",
        }
    }

    /// Name used when the file is written to disk.
    pub fn download_name(&self) -> String {
        let cleaned: String = self
            .filename
            .chars()
            .map(|c| match c {
                '/' | '\\' | ':' | '\0' => '_',
                c => c,
            })
            .collect();
        let cleaned = cleaned.trim().trim_start_matches('.').to_string();
        if cleaned.is_empty() {
            format!("{}.txt", self.id)
        } else {
            cleaned
        }
    }
}

/// Strings pass through and numbers are rendered, so ids and sizes can be
/// either. Anything else reads as absent.
fn scalar_as_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Body of `GET <base>`.
#[derive(Debug, Default, Deserialize)]
pub struct ListResponse {
    #[serde(default)]
    pub data: Option<Vec<FileRecord>>,
}

/// Body of `DELETE <base>/<id>`.
#[derive(Debug, Deserialize)]
pub struct DeleteResponse {
    #[serde(default)]
    pub success: bool,
    pub message: Option<String>,
}
