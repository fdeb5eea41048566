use utoipa::{Modify, OpenApi};

use crate::features::shares::{dtos as shares_dtos, handlers as shares_handlers};
use crate::shared::types::ApiResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Shares
        shares_handlers::upload_share,
        shares_handlers::get_share,
        shares_handlers::download_share,
    ),
    components(
        schemas(
            shares_dtos::UploadShareDto,
            shares_dtos::UploadShareResponseDto,
            shares_dtos::ShareMetadataDto,
            ApiResponse<shares_dtos::UploadShareResponseDto>,
            ApiResponse<shares_dtos::ShareMetadataDto>,
        )
    ),
    tags(
        (name = "shares", description = "Upload files and resolve share codes"),
    ),
    info(
        title = "QRDrop API",
        version = "0.1.0",
        description = "File sharing API for QRDrop",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
