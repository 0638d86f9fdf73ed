//! Route registration for the `/v2/solution` surface

use super::{dto::*, error::Problem, handlers, openapi::ApiDoc};
use crate::domain::Service;
use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::Response,
    routing::get,
    Extension, Json, Router,
};
use std::sync::Arc;
use utoipa::OpenApi;

/// Prefix of every directory endpoint
pub const BASE_PATH: &str = "/v2/solution";

/// Mount the directory endpoints under [`BASE_PATH`] and the OpenAPI document
pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    let directory = Router::new()
        // Public (localized) endpoints
        .route("/companies", get(companies_by_category_handler).post(create_company_handler))
        .route("/companies/all", get(all_companies_handler))
        .route(
            "/companies/{company_id}",
            get(get_company_handler)
                .patch(update_company_handler)
                .delete(delete_company_handler),
        )
        .route("/companies/{company_id}/solutions", get(company_solutions_handler))
        .route("/items", get(solutions_by_company_handler).post(create_solution_handler))
        .route(
            "/items/{solution_id}",
            get(get_solution_handler)
                .patch(update_solution_handler)
                .delete(delete_solution_handler),
        )
        .route("/search", get(search_handler))
        // Category hierarchy
        .route("/categories", get(category_tree_handler))
        .route("/categories/main/{main_category_id}", get(main_category_handler))
        // Add service as extension for handlers
        .layer(Extension(service));

    router
        .nest(BASE_PATH, directory)
        .route("/openapi.json", get(openapi_handler))
}

// ===== Handler wrappers that extract service from Extension =====

async fn companies_by_category_handler(
    Extension(service): Extension<Arc<Service>>,
    query: Query<handlers::CompaniesQuery>,
) -> Result<Json<Vec<CompanyViewDto>>, Problem> {
    handlers::companies_by_category(service, query).await
}

async fn all_companies_handler(
    Extension(service): Extension<Arc<Service>>,
    query: Query<handlers::PageQuery>,
) -> Result<Json<CompanyPageDto>, Problem> {
    handlers::all_companies(service, query).await
}

async fn get_company_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Path<String>,
) -> Result<Response, Problem> {
    handlers::get_company(service, path).await
}

async fn company_solutions_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Path<String>,
) -> Result<Json<Vec<SolutionItemDto>>, Problem> {
    handlers::company_solutions(service, path).await
}

async fn create_company_handler(
    Extension(service): Extension<Arc<Service>>,
    json: Json<CreateCompanyRequest>,
) -> Result<(StatusCode, Json<CompanyDto>), Problem> {
    handlers::create_company(service, json).await
}

async fn update_company_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Path<String>,
    json: Json<UpdateCompanyRequest>,
) -> Result<Response, Problem> {
    handlers::update_company(service, path, json).await
}

async fn delete_company_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Path<String>,
) -> Result<Json<DeleteResponse>, Problem> {
    handlers::delete_company(service, path).await
}

async fn solutions_by_company_handler(
    Extension(service): Extension<Arc<Service>>,
    query: Query<handlers::ItemsQuery>,
) -> Result<Json<Vec<SolutionItemViewDto>>, Problem> {
    handlers::solutions_by_company(service, query).await
}

async fn get_solution_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Path<String>,
) -> Result<Response, Problem> {
    handlers::get_solution(service, path).await
}

async fn create_solution_handler(
    Extension(service): Extension<Arc<Service>>,
    json: Json<CreateSolutionRequest>,
) -> Result<(StatusCode, Json<SolutionItemDto>), Problem> {
    handlers::create_solution(service, json).await
}

async fn update_solution_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Path<String>,
    json: Json<UpdateSolutionRequest>,
) -> Result<Response, Problem> {
    handlers::update_solution(service, path, json).await
}

async fn delete_solution_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Path<String>,
) -> Result<Json<DeleteResponse>, Problem> {
    handlers::delete_solution(service, path).await
}

async fn search_handler(
    Extension(service): Extension<Arc<Service>>,
    query: Query<handlers::SearchQuery>,
) -> Result<Json<Vec<SolutionItemViewDto>>, Problem> {
    handlers::search(service, query).await
}

async fn category_tree_handler(
    Extension(service): Extension<Arc<Service>>,
    query: Query<handlers::LangQuery>,
) -> Json<Vec<SuperCategoryDto>> {
    handlers::category_tree(service, query).await
}

async fn main_category_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Path<i32>,
    query: Query<handlers::LangQuery>,
) -> Response {
    handlers::main_category(service, path, query).await
}

async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
