use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::InputError;

use super::file_type::FileType;

/// File attachment parameter for inventory write mutations.
///
/// Carries the metadata of one file whose bytes were already placed in the
/// blob store under `store_key`. Serializes to the camelCase wire keys the
/// API expects; absent optional fields are omitted from the mapping rather
/// than sent as null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileInput {
    pub file_name: String,
    pub store_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_in_bytes: Option<u64>,
    /// Epoch units (seconds vs milliseconds) are defined by the API schema.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modification_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_type: Option<FileType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

impl FileInput {
    /// Create an input with the two required fields; optional fields start
    /// empty and can be set directly or through [`FileInput::builder`].
    pub fn new(file_name: impl Into<String>, store_key: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            store_key: store_key.into(),
            id: None,
            size_in_bytes: None,
            modification_time: None,
            upload_time: None,
            file_type: None,
            mime_type: None,
        }
    }

    /// Create a new empty builder
    pub fn builder() -> FileInputBuilder {
        FileInputBuilder::new()
    }

    /// Serialize to the plain mapping embedded as the mutation's `input`
    /// variable. Absent optional fields are omitted.
    pub fn to_variables(&self) -> Map<String, Value> {
        match serde_json::to_value(self).unwrap_or_default() {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }

    /// Decode from a plain mapping. Fails if a required key is missing or a
    /// value's type does not match the schema; optional keys may be absent
    /// or explicitly null.
    pub fn from_variables(variables: Map<String, Value>) -> Result<Self, InputError> {
        serde_json::from_value(Value::Object(variables)).map_err(|err| {
            tracing::debug!(error = %err, "failed to decode file input mapping");
            InputError::Decode(err)
        })
    }
}

/// Builder for [`FileInput`] with every slot optional.
///
/// Unlike [`FileInput::new`], the required fields are checked at `build`
/// time, for callers assembling an input from data that may turn out to be
/// incomplete.
#[derive(Debug, Default)]
pub struct FileInputBuilder {
    file_name: Option<String>,
    store_key: Option<String>,
    id: Option<String>,
    size_in_bytes: Option<u64>,
    modification_time: Option<i64>,
    upload_time: Option<i64>,
    file_type: Option<FileType>,
    mime_type: Option<String>,
}

impl FileInputBuilder {
    /// Create a new empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the logical file name (required)
    pub fn file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    /// Set the blob store key (required)
    pub fn store_key(mut self, store_key: impl Into<String>) -> Self {
        self.store_key = Some(store_key.into());
        self
    }

    /// Set the identifier of an already-registered file record
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the file size in bytes
    pub fn size_in_bytes(mut self, size_in_bytes: u64) -> Self {
        self.size_in_bytes = Some(size_in_bytes);
        self
    }

    /// Set the last-modification timestamp (numeric epoch units)
    pub fn modification_time(mut self, modification_time: i64) -> Self {
        self.modification_time = Some(modification_time);
        self
    }

    /// Set the upload timestamp (numeric epoch units)
    pub fn upload_time(mut self, upload_time: i64) -> Self {
        self.upload_time = Some(upload_time);
        self
    }

    /// Set the file category tag
    pub fn file_type(mut self, file_type: FileType) -> Self {
        self.file_type = Some(file_type);
        self
    }

    /// Set the MIME type
    pub fn mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Build the input, failing with the wire name of the first required
    /// field that was never set.
    pub fn build(self) -> Result<FileInput, InputError> {
        let file_name = self.file_name.ok_or(InputError::MissingField("fileName"))?;
        let store_key = self.store_key.ok_or(InputError::MissingField("storeKey"))?;

        Ok(FileInput {
            file_name,
            store_key,
            id: self.id,
            size_in_bytes: self.size_in_bytes,
            modification_time: self.modification_time,
            upload_time: self.upload_time,
            file_type: self.file_type,
            mime_type: self.mime_type,
        })
    }
}
