//! In-memory document store for tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::GatewayError;
use crate::ports::{DocumentRecord, DocumentStore, DocumentUpdate};

/// In-memory implementation of the document store port.
///
/// Records and blobs are seeded up front; updates mutate the stored
/// record so tests can assert on the persisted summary.
#[derive(Clone, Default)]
pub struct InMemoryDocumentStore {
    records: Arc<Mutex<HashMap<String, DocumentRecord>>>,
    blobs: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    fail_with: Arc<Mutex<Option<GatewayError>>>,
}

impl InMemoryDocumentStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a record.
    pub fn with_record(self, record: DocumentRecord) -> Self {
        self.records
            .lock()
            .unwrap()
            .insert(record.id.clone(), record);
        self
    }

    /// Seeds a blob at a storage path.
    pub fn with_blob(self, file_path: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.blobs
            .lock()
            .unwrap()
            .insert(file_path.into(), bytes.into());
        self
    }

    /// Makes every operation fail with the given error.
    pub fn with_error(self, error: GatewayError) -> Self {
        *self.fail_with.lock().unwrap() = Some(error);
        self
    }

    /// Reads back a stored record.
    pub fn record(&self, document_id: &str) -> Option<DocumentRecord> {
        self.records.lock().unwrap().get(document_id).cloned()
    }

    fn check(&self) -> Result<(), GatewayError> {
        match self.fail_with.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn fetch(&self, document_id: &str) -> Result<DocumentRecord, GatewayError> {
        self.check()?;
        self.records
            .lock()
            .unwrap()
            .get(document_id)
            .cloned()
            .ok_or_else(|| {
                GatewayError::unexpected(format!("Document not found: {}", document_id))
            })
    }

    async fn download(&self, file_path: &str) -> Result<Vec<u8>, GatewayError> {
        self.check()?;
        self.blobs
            .lock()
            .unwrap()
            .get(file_path)
            .cloned()
            .ok_or_else(|| GatewayError::unexpected(format!("Blob not found: {}", file_path)))
    }

    async fn update(
        &self,
        document_id: &str,
        update: DocumentUpdate,
    ) -> Result<(), GatewayError> {
        self.check()?;
        let mut records = self.records.lock().unwrap();
        let record = records.get_mut(document_id).ok_or_else(|| {
            GatewayError::unexpected(format!("Document not found: {}", document_id))
        })?;
        record.summary = Some(update.summary);
        record.processed = update.processed;
        Ok(())
    }
}
