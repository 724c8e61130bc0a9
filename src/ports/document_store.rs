//! Blob + metadata store port for the document-analysis action.
//!
//! The store is an external collaborator treated as an opaque record
//! store: fetch a record by id, download its blob by path, update the
//! record by id.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::GatewayError;

/// Port for the document blob + metadata store.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetches a document record by id.
    async fn fetch(&self, document_id: &str) -> Result<DocumentRecord, GatewayError>;

    /// Downloads the stored blob by its storage path.
    async fn download(&self, file_path: &str) -> Result<Vec<u8>, GatewayError>;

    /// Persists analysis results onto the record.
    async fn update(&self, document_id: &str, update: DocumentUpdate) -> Result<(), GatewayError>;
}

/// A stored document's metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub id: String,
    pub file_name: String,
    pub file_path: String,
    pub mime_type: String,
    pub file_size: u64,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub processed: bool,
}

/// Fields written back after analysis.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentUpdate {
    pub summary: String,
    pub processed: bool,
}
