//! Document analysis handler - fetch the record, derive a summary keyed
//! by MIME class, persist it back with the processed flag.

use serde_json::{json, Value};

use crate::domain::{correlation_id, GatewayError, Payload};
use crate::ports::{DocumentStore, DocumentUpdate};

/// Word-processor MIME types summarized like PDFs.
const WORD_PROCESSOR_MIME_TYPES: [&str; 2] = [
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

/// Analyzes one stored document: one read (plus a blob download for
/// plain text), one write.
pub async fn analyze_document(
    store: &dyn DocumentStore,
    agent_id: &str,
    payload: &Payload,
) -> Result<Value, GatewayError> {
    let document_id = payload.str_field("documentId").unwrap_or_default();

    let record = store.fetch(document_id).await?;
    let summary = match record.mime_type.as_str() {
        "text/plain" => {
            let bytes = store.download(&record.file_path).await?;
            let text = String::from_utf8_lossy(&bytes);
            summarize_text(&text)
        }
        mime if mime.starts_with("image/") => {
            format!(
                "Image file {} ({})",
                record.file_name,
                format_size(record.file_size)
            )
        }
        mime if mime == "application/pdf" || WORD_PROCESSOR_MIME_TYPES.contains(&mime) => {
            format!(
                "Document file {} ({})",
                record.file_name,
                format_size(record.file_size)
            )
        }
        mime => format!("File stored without automated analysis ({})", mime),
    };

    store
        .update(
            document_id,
            DocumentUpdate {
                summary: summary.clone(),
                processed: true,
            },
        )
        .await?;

    Ok(json!({
        "agentId": agent_id,
        "documentId": document_id,
        "fileName": record.file_name,
        "mimeType": record.mime_type,
        "summary": summary,
        "processed": true,
        "analysisId": correlation_id("doc"),
    }))
}

fn summarize_text(text: &str) -> String {
    let words = text.split_whitespace().count();
    let characters = text.chars().count();
    format!(
        "Text document with {} words and {} characters",
        words, characters
    )
}

fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{} KB", (bytes as f64 / 1024.0).round() as u64)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
