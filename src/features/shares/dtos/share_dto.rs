use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Upload request DTO for OpenAPI documentation
/// Note: This struct is for Swagger UI documentation only.
/// The actual handler uses axum's Multipart extractor directly.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct UploadShareDto {
    /// The file to share
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub file: String,
}

/// Response DTO returned after a successful upload
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadShareResponseDto {
    /// The share code used to retrieve the file
    #[schema(example = "k3mxw2p9qa")]
    pub id: String,
    /// Original filename as uploaded
    pub name: String,
    /// Direct (presigned) download URL for the stored blob
    pub url: String,
    /// Link to the metadata endpoint, suitable for QR encoding
    pub shareable_link: String,
}

/// Response DTO for share metadata lookups
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShareMetadataDto {
    /// The share code
    #[schema(example = "k3mxw2p9qa")]
    pub id: String,
    /// Original filename as uploaded
    pub name: String,
    /// Size of the file in bytes
    pub size: i64,
    /// MIME type of the file (advisory)
    #[serde(rename = "type")]
    pub content_type: String,
    /// Direct (presigned) download URL for the stored blob
    pub url: String,
    /// Timestamp when the file was uploaded
    pub created_at: DateTime<Utc>,
    /// Timestamp after which the share is gone
    pub expires_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_response_wire_field_names() {
        let dto = UploadShareResponseDto {
            id: "k3mxw2p9qa".to_string(),
            name: "report.pdf".to_string(),
            url: "http://localhost:9000/qrdrop-shares/shares/k3mxw2p9qa/report.pdf".to_string(),
            shareable_link: "http://localhost:3000/api/file/k3mxw2p9qa".to_string(),
        };

        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["id"], "k3mxw2p9qa");
        assert_eq!(value["name"], "report.pdf");
        assert!(value.get("shareableLink").is_some());
        assert!(value.get("shareable_link").is_none());
    }

    #[test]
    fn test_metadata_wire_field_names() {
        let now = Utc::now();
        let dto = ShareMetadataDto {
            id: "k3mxw2p9qa".to_string(),
            name: "report.pdf".to_string(),
            size: 12345,
            content_type: "application/pdf".to_string(),
            url: "http://localhost:9000/qrdrop-shares/shares/k3mxw2p9qa/report.pdf".to_string(),
            created_at: now,
            expires_at: now + chrono::Duration::hours(24),
        };

        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["size"], 12345);
        assert_eq!(value["type"], "application/pdf");
        assert!(value.get("createdAt").is_some());
        assert!(value.get("expiresAt").is_some());
        assert!(value.get("content_type").is_none());
    }
}
