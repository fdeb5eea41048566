use std::sync::Arc;

use tracing::{error, info, warn};

use crate::core::config::ShareConfig;
use crate::core::error::{AppError, Result};
use crate::features::shares::dtos::{ShareMetadataDto, UploadShareResponseDto};
use crate::features::shares::models::{NewShare, Share};
use crate::features::shares::services::ShareStore;
use crate::modules::storage::MinIOClient;
use crate::shared::codes::generate_share_code;
use crate::shared::constants::OBJECT_KEY_PREFIX;
use crate::shared::validation::SHARE_CODE_REGEX;

/// Attempts at allocating a unique code before giving up.
/// With 32^10 possible codes a single collision is already unexpected.
const MAX_CODE_ATTEMPTS: usize = 3;

/// Service for the upload/resolve/download lifecycle of shared files.
///
/// Bytes go to the object store, metadata to the [`ShareStore`]; the metadata
/// record is only written once the blob is confirmed stored.
pub struct ShareService {
    store: Arc<ShareStore>,
    storage: Arc<MinIOClient>,
    code_length: usize,
    max_file_size: usize,
    public_base_url: String,
}

impl ShareService {
    pub fn new(
        store: Arc<ShareStore>,
        storage: Arc<MinIOClient>,
        config: &ShareConfig,
        public_base_url: String,
    ) -> Self {
        Self {
            store,
            storage,
            code_length: config.code_length,
            max_file_size: config.max_file_size,
            public_base_url,
        }
    }

    /// Store an uploaded file and create its share record.
    pub async fn upload(
        &self,
        data: Vec<u8>,
        file_name: &str,
        content_type: &str,
    ) -> Result<UploadShareResponseDto> {
        if data.len() > self.max_file_size {
            return Err(AppError::PayloadTooLarge(format!(
                "File exceeds the maximum size of {} bytes ({} MB)",
                self.max_file_size,
                self.max_file_size / 1024 / 1024
            )));
        }

        let size_bytes = data.len() as i64;

        for attempt in 1..=MAX_CODE_ATTEMPTS {
            let code = generate_share_code(self.code_length);
            let object_key = object_key(&code, file_name);

            // Blob first; a failed write must not leave a metadata record.
            self.storage
                .upload(&object_key, &data, content_type)
                .await?;

            let new_share = NewShare {
                code,
                file_name: file_name.to_string(),
                content_type: content_type.to_string(),
                size_bytes,
                object_key: object_key.clone(),
            };

            match self.store.put(new_share).await {
                Ok(share) => {
                    info!(
                        "Share created: code={}, name={}, size={}",
                        share.code, share.file_name, share.size_bytes
                    );

                    let url = self.storage.get_presigned_url(&share.object_key).await?;
                    let shareable_link = shareable_link(&self.public_base_url, &share.code);

                    return Ok(UploadShareResponseDto {
                        id: share.code,
                        name: share.file_name,
                        url,
                        shareable_link,
                    });
                }
                Err(AppError::Conflict(_)) => {
                    warn!(
                        "Share code collision on attempt {}/{}, retrying with a fresh code",
                        attempt, MAX_CODE_ATTEMPTS
                    );
                    if let Err(e) = self.storage.delete(&object_key).await {
                        warn!(
                            "Could not clean up blob '{}' after code collision: {}",
                            object_key, e
                        );
                    }
                }
                Err(e) => {
                    // Orphaned blob: acceptable, logged, not retried.
                    error!(
                        "Metadata write failed after storing blob '{}': {}",
                        object_key, e
                    );
                    return Err(e);
                }
            }
        }

        Err(AppError::Internal(
            "could not allocate a unique share code".to_string(),
        ))
    }

    /// Resolve a code to its live share record.
    ///
    /// Single lookup path for both the metadata and download endpoints.
    pub async fn resolve(&self, code: &str) -> Result<Share> {
        if !SHARE_CODE_REGEX.is_match(code) {
            return Err(AppError::Validation("invalid share code".to_string()));
        }

        self.store
            .get(code)
            .await?
            .ok_or_else(|| AppError::NotFound("File not found or link expired".to_string()))
    }

    /// Resolve a code and build the metadata response with a fresh
    /// presigned URL.
    pub async fn metadata(&self, code: &str) -> Result<ShareMetadataDto> {
        let share = self.resolve(code).await?;
        let url = self.storage.get_presigned_url(&share.object_key).await?;
        let expires_at = share.expires_at(self.store.ttl());

        Ok(ShareMetadataDto {
            id: share.code,
            name: share.file_name,
            size: share.size_bytes,
            content_type: share.content_type,
            url,
            created_at: share.created_at,
            expires_at,
        })
    }

    /// Resolve a code and fetch the stored bytes for proxying.
    pub async fn download(&self, code: &str) -> Result<(Share, Vec<u8>)> {
        let share = self.resolve(code).await?;

        match self.storage.download(&share.object_key).await {
            Ok(data) => Ok((share, data)),
            Err(err) => {
                // A live record whose blob is gone is a consistency gap,
                // distinct from the object store being unreachable.
                if let Ok(false) = self.storage.exists(&share.object_key).await {
                    error!(
                        "Share '{}' has live metadata but no stored blob '{}'",
                        share.code, share.object_key
                    );
                    return Err(AppError::Internal(
                        "share data is no longer available".to_string(),
                    ));
                }
                Err(err)
            }
        }
    }
}

/// Build the object key for a share, namespaced by code so distinct uploads
/// of the same filename never collide.
fn object_key(code: &str, file_name: &str) -> String {
    format!(
        "{}/{}/{}",
        OBJECT_KEY_PREFIX,
        code,
        sanitize_file_name(file_name)
    )
}

/// Reduce a client-supplied filename to a safe object-key segment.
fn sanitize_file_name(name: &str) -> String {
    // Browsers may send a full path; keep only the last segment.
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    let trimmed = cleaned.trim_matches('.');
    if trimmed.is_empty() {
        "file".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Link to the metadata endpoint for a code, as encoded into QR codes by the
/// frontend.
fn shareable_link(base_url: &str, code: &str) -> String {
    format!("{}/api/file/{}", base_url.trim_end_matches('/'), code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_key_combines_prefix_code_and_name() {
        assert_eq!(
            object_key("k3mxw2p9qa", "report.pdf"),
            "shares/k3mxw2p9qa/report.pdf"
        );
    }

    #[test]
    fn test_sanitize_keeps_simple_names() {
        assert_eq!(sanitize_file_name("report.pdf"), "report.pdf");
        assert_eq!(sanitize_file_name("photo-2024_01.jpg"), "photo-2024_01.jpg");
    }

    #[test]
    fn test_sanitize_strips_path_components() {
        assert_eq!(sanitize_file_name("/etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name("C:\\Users\\me\\doc.txt"), "doc.txt");
    }

    #[test]
    fn test_sanitize_replaces_unsafe_characters() {
        assert_eq!(sanitize_file_name("my report (1).pdf"), "my_report__1_.pdf");
        assert_eq!(sanitize_file_name("änderung.txt"), "_nderung.txt");
    }

    #[test]
    fn test_sanitize_never_returns_empty() {
        assert_eq!(sanitize_file_name(""), "file");
        assert_eq!(sanitize_file_name("..."), "file");
        assert_eq!(sanitize_file_name("/"), "file");
    }

    #[test]
    fn test_shareable_link_format() {
        assert_eq!(
            shareable_link("http://localhost:3000", "k3mxw2p9qa"),
            "http://localhost:3000/api/file/k3mxw2p9qa"
        );
        // Trailing slash on the base URL must not double up.
        assert_eq!(
            shareable_link("https://qrdrop.example.com/", "k3mxw2p9qa"),
            "https://qrdrop.example.com/api/file/k3mxw2p9qa"
        );
    }
}
