//! OpenAPI documentation configuration

use axum_helpers::API_KEY_HEADER;
use utoipa::{
    Modify, OpenApi,
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
};

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "API Flexxus Articulos",
        version = "1.0.8",
        description = "API REST para la gestión de artículos en MongoDB"
    ),
    servers(
        (url = "/", description = "Este servidor")
    ),
    nest(
        (path = "/api/articulos", api = domain_articulos::ApiDoc)
    ),
    modifiers(&ApiKeyAuth),
    tags(
        (name = "Artículos", description = "Gestión de artículos")
    )
)]
pub struct ApiDoc;

/// Registers the `x-api-key` header scheme referenced by the articulo paths
struct ApiKeyAuth;

impl Modify for ApiKeyAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "ApiKeyAuth",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                API_KEY_HEADER,
                "Clave compartida de acceso a la API",
            ))),
        );
    }
}
