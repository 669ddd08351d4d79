use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    ValidatedJson, ValidatedQuery,
    errors::responses::{
        BadRequestInvalidIdResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse, UnauthorizedResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ArticuloResult;
use crate::models::{
    Articulo, ArticuloFilter, CreateArticulo, DesactivacionResponse, UpdateArticulo,
};
use crate::repository::ArticuloRepository;
use crate::service::ArticuloService;

/// OpenAPI documentation for the Articulos API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_articulos,
        create_articulo,
        get_articulo,
        update_articulo,
        deactivate_articulo,
    ),
    components(
        schemas(Articulo, CreateArticulo, UpdateArticulo, DesactivacionResponse),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestInvalidIdResponse,
            UnauthorizedResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Artículos", description = "Gestión de artículos")
    ),
    security(
        ("ApiKeyAuth" = [])
    )
)]
pub struct ApiDoc;

/// Create the articulos router with all HTTP endpoints
///
/// The router carries no access control of its own; the app layers the API
/// key check on top.
pub fn router<R: ArticuloRepository + 'static>(service: ArticuloService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_articulos).post(create_articulo))
        .route(
            "/{id}",
            get(get_articulo)
                .put(update_articulo)
                .delete(deactivate_articulo),
        )
        .with_state(shared_service)
}

/// List articulos
///
/// Most recently modified first. Both filters are optional.
#[utoipa::path(
    get,
    path = "",
    tag = "Artículos",
    params(ArticuloFilter),
    responses(
        (status = 200, description = "Lista de artículos", body = Vec<Articulo>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_articulos<R: ArticuloRepository>(
    State(service): State<Arc<ArticuloService<R>>>,
    ValidatedQuery(filter): ValidatedQuery<ArticuloFilter>,
) -> ArticuloResult<Json<Vec<Articulo>>> {
    let articulos = service.list_articulos(filter).await?;
    Ok(Json(articulos))
}

/// Create a new articulo
#[utoipa::path(
    post,
    path = "",
    tag = "Artículos",
    request_body = CreateArticulo,
    responses(
        (status = 201, description = "Artículo creado", body = Articulo),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_articulo<R: ArticuloRepository>(
    State(service): State<Arc<ArticuloService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateArticulo>,
) -> ArticuloResult<impl IntoResponse> {
    let articulo = service.create_articulo(input).await?;
    Ok((StatusCode::CREATED, Json(articulo)))
}

/// Get an articulo by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Artículos",
    params(
        ("id" = String, Path, description = "ID del artículo (24 caracteres hexadecimales)")
    ),
    responses(
        (status = 200, description = "Artículo encontrado", body = Articulo),
        (status = 400, response = BadRequestInvalidIdResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_articulo<R: ArticuloRepository>(
    State(service): State<Arc<ArticuloService<R>>>,
    Path(id): Path<String>,
) -> ArticuloResult<Json<Articulo>> {
    let articulo = service.get_articulo(&id).await?;
    Ok(Json(articulo))
}

/// Update an articulo
///
/// Only the supplied fields change. `estadoActivacion: true` reactivates a
/// deactivated articulo.
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Artículos",
    params(
        ("id" = String, Path, description = "ID del artículo (24 caracteres hexadecimales)")
    ),
    request_body = UpdateArticulo,
    responses(
        (status = 200, description = "Artículo actualizado", body = Articulo),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_articulo<R: ArticuloRepository>(
    State(service): State<Arc<ArticuloService<R>>>,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<UpdateArticulo>,
) -> ArticuloResult<Json<Articulo>> {
    let articulo = service.update_articulo(&id, input).await?;
    Ok(Json(articulo))
}

/// Deactivate an articulo
///
/// Soft delete: the record stays, with `estadoActivacion` set to false.
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Artículos",
    params(
        ("id" = String, Path, description = "ID del artículo (24 caracteres hexadecimales)")
    ),
    responses(
        (status = 200, description = "Artículo desactivado", body = DesactivacionResponse),
        (status = 400, response = BadRequestInvalidIdResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn deactivate_articulo<R: ArticuloRepository>(
    State(service): State<Arc<ArticuloService<R>>>,
    Path(id): Path<String>,
) -> ArticuloResult<Json<DesactivacionResponse>> {
    let articulo = service.deactivate_articulo(&id).await?;
    Ok(Json(DesactivacionResponse::new(articulo)))
}
