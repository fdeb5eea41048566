use axum::{
    extract::{Multipart, Path, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tracing::debug;

use crate::core::error::{AppError, Result};
use crate::features::shares::dtos::{ShareMetadataDto, UploadShareDto, UploadShareResponseDto};
use crate::features::shares::services::ShareService;
use crate::shared::types::ApiResponse;

/// Upload a file and create a share
///
/// Accepts multipart/form-data with:
/// - `file`: The file to share (required)
#[utoipa::path(
    post,
    path = "/api/upload",
    tag = "shares",
    request_body(
        content = UploadShareDto,
        content_type = "multipart/form-data",
        description = "File upload form",
    ),
    responses(
        (status = 200, description = "File uploaded, share created", body = ApiResponse<UploadShareResponseDto>),
        (status = 400, description = "No file in the request"),
        (status = 413, description = "File too large"),
        (status = 502, description = "Object store unavailable")
    )
)]
pub async fn upload_share(
    State(service): State<Arc<ShareService>>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<UploadShareResponseDto>>> {
    let mut file_data: Option<Vec<u8>> = None;
    let mut file_name: Option<String> = None;
    let mut content_type: Option<String> = None;

    // Process multipart fields
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read multipart data: {}", e))
    })? {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "file" => {
                let ct = field
                    .content_type()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());

                let fname = field
                    .file_name()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "unnamed".to_string());

                let data = field.bytes().await.map_err(|e| {
                    debug!("Failed to read file bytes: {}", e);
                    AppError::BadRequest(format!("Failed to read file data: {}", e))
                })?;

                file_data = Some(data.to_vec());
                file_name = Some(fname);
                content_type = Some(ct);
            }
            _ => {
                // Ignore unknown fields
                debug!("Ignoring unknown field: {}", field_name);
            }
        }
    }

    let file_data =
        file_data.ok_or_else(|| AppError::BadRequest("No file uploaded".to_string()))?;
    let file_name =
        file_name.ok_or_else(|| AppError::BadRequest("Filename is required".to_string()))?;
    let content_type =
        content_type.ok_or_else(|| AppError::BadRequest("Content type is required".to_string()))?;

    let response = service.upload(file_data, &file_name, &content_type).await?;

    Ok(Json(ApiResponse::success(response)))
}

/// Get share metadata by code
#[utoipa::path(
    get,
    path = "/api/file/{id}",
    tag = "shares",
    params(
        ("id" = String, Path, description = "Share code")
    ),
    responses(
        (status = 200, description = "Share metadata", body = ApiResponse<ShareMetadataDto>),
        (status = 400, description = "Malformed share code"),
        (status = 404, description = "Unknown or expired share code")
    )
)]
pub async fn get_share(
    State(service): State<Arc<ShareService>>,
    Path(code): Path<String>,
) -> Result<Json<ApiResponse<ShareMetadataDto>>> {
    let metadata = service.metadata(&code).await?;
    Ok(Json(ApiResponse::success(metadata)))
}

/// Download the shared file by code
///
/// Proxies the stored bytes with `Content-Disposition: attachment` so the
/// browser saves the file under its original name.
#[utoipa::path(
    get,
    path = "/api/download/{id}",
    tag = "shares",
    params(
        ("id" = String, Path, description = "Share code")
    ),
    responses(
        (status = 200, description = "File content", content_type = "application/octet-stream"),
        (status = 400, description = "Malformed share code"),
        (status = 404, description = "Unknown or expired share code"),
        (status = 502, description = "Object store unavailable")
    )
)]
pub async fn download_share(
    State(service): State<Arc<ShareService>>,
    Path(code): Path<String>,
) -> Result<Response> {
    let (share, data) = service.download(&code).await?;

    let headers = [
        (header::CONTENT_TYPE, share.content_type.clone()),
        (
            header::CONTENT_DISPOSITION,
            content_disposition(&share.file_name),
        ),
    ];

    Ok((headers, data).into_response())
}

/// Build an attachment Content-Disposition with an ASCII fallback and an
/// RFC 5987 encoded UTF-8 variant.
fn content_disposition(file_name: &str) -> String {
    let fallback: String = file_name
        .chars()
        .map(|c| {
            if (c.is_ascii_graphic() && c != '"' && c != '\\') || c == ' ' {
                c
            } else {
                '_'
            }
        })
        .collect();

    format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        fallback,
        urlencoding::encode(file_name)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_disposition_plain_ascii() {
        assert_eq!(
            content_disposition("report.pdf"),
            "attachment; filename=\"report.pdf\"; filename*=UTF-8''report.pdf"
        );
    }

    #[test]
    fn test_content_disposition_escapes_quotes_in_fallback() {
        let header = content_disposition("my\"file.txt");
        assert!(header.starts_with("attachment; filename=\"my_file.txt\""));
    }

    #[test]
    fn test_content_disposition_encodes_unicode() {
        let header = content_disposition("änderung.txt");
        assert!(header.contains("filename*=UTF-8''%C3%A4nderung.txt"));
        assert!(header.contains("filename=\"_nderung.txt\""));
    }

    #[test]
    fn test_content_disposition_keeps_spaces_in_fallback() {
        let header = content_disposition("my report.pdf");
        assert!(header.starts_with("attachment; filename=\"my report.pdf\""));
        assert!(header.contains("filename*=UTF-8''my%20report.pdf"));
    }
}
