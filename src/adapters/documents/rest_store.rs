//! REST adapter for the document blob + metadata store.
//!
//! The store exposes a record table under `/rest/v1/<table>` (filterable
//! with `id=eq.<id>`, PATCH to update) and blob downloads under
//! `/storage/v1/object/<bucket>/<path>`.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;

use crate::config::DocumentsConfig;
use crate::domain::GatewayError;
use crate::ports::{DocumentRecord, DocumentStore, DocumentUpdate};

const VENDOR: &str = "Document store";

/// REST adapter for the document store.
pub struct RestDocumentStore {
    credentials: Option<StoreCredentials>,
    table: String,
    bucket: String,
    client: Client,
}

#[derive(Debug)]
struct StoreCredentials {
    base_url: String,
    service_key: SecretString,
}

impl RestDocumentStore {
    /// Creates a new document store client from configuration.
    pub fn new(config: DocumentsConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        let credentials = match (config.base_url, config.service_key) {
            (Some(url), Some(key)) if !url.is_empty() && !key.is_empty() => {
                Some(StoreCredentials {
                    base_url: url,
                    service_key: SecretString::new(key),
                })
            }
            _ => None,
        };

        Self {
            credentials,
            table: config.table,
            bucket: config.bucket,
            client,
        }
    }

    fn credentials(&self) -> Result<&StoreCredentials, GatewayError> {
        self.credentials
            .as_ref()
            .ok_or_else(|| GatewayError::credentials_missing(VENDOR))
    }

    async fn read_error(response: reqwest::Response) -> GatewayError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(status, error = %body, "Document store call failed");
        GatewayError::transport_status(status, VENDOR, body)
    }
}

#[async_trait]
impl DocumentStore for RestDocumentStore {
    async fn fetch(&self, document_id: &str) -> Result<DocumentRecord, GatewayError> {
        let credentials = self.credentials()?;
        let url = format!(
            "{}/rest/v1/{}?id=eq.{}&select=*",
            credentials.base_url, self.table, document_id
        );

        let response = self
            .client
            .get(&url)
            .header("apikey", credentials.service_key.expose_secret())
            .bearer_auth(credentials.service_key.expose_secret())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::read_error(response).await);
        }

        let mut records: Vec<DocumentRecord> = response
            .json()
            .await
            .map_err(|e| GatewayError::unexpected(format!("Invalid record response: {}", e)))?;

        if records.is_empty() {
            return Err(GatewayError::unexpected(format!(
                "Document not found: {}",
                document_id
            )));
        }
        Ok(records.remove(0))
    }

    async fn download(&self, file_path: &str) -> Result<Vec<u8>, GatewayError> {
        let credentials = self.credentials()?;
        let url = format!(
            "{}/storage/v1/object/{}/{}",
            credentials.base_url, self.bucket, file_path
        );

        let response = self
            .client
            .get(&url)
            .bearer_auth(credentials.service_key.expose_secret())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::read_error(response).await);
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| GatewayError::transport(format!("Blob download failed: {}", e)))?;
        Ok(bytes.to_vec())
    }

    async fn update(
        &self,
        document_id: &str,
        update: DocumentUpdate,
    ) -> Result<(), GatewayError> {
        let credentials = self.credentials()?;
        let url = format!(
            "{}/rest/v1/{}?id=eq.{}",
            credentials.base_url, self.table, document_id
        );

        let response = self
            .client
            .patch(&url)
            .header("apikey", credentials.service_key.expose_secret())
            .bearer_auth(credentials.service_key.expose_secret())
            .json(&update)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::read_error(response).await);
        }
        Ok(())
    }
}
