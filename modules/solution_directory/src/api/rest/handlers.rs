//! HTTP request handlers - thin layer that delegates to domain service

use super::{
    dto::*,
    error::{map_domain_error, Problem},
};
use crate::contract::{
    CategoryFilter, CompanyPatch, Language, NewCompany, NewSolutionItem, PageRequest,
    SolutionItemPatch,
};
use crate::domain::Service;
use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Deserializer};
use std::sync::Arc;

// ===== Query parameters =====

/// Treat `?subCategoryId=` like an absent parameter
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompaniesQuery {
    pub main_category_id: i32,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub sub_category_id: Option<i32>,
    pub lang: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemsQuery {
    pub company_id: String,
    pub main_category_id: i32,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub sub_category_id: Option<i32>,
    pub lang: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub query: String,
    pub lang: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LangQuery {
    pub lang: Option<String>,
}

fn category_filter(main_category_id: i32, sub_category_id: Option<i32>) -> CategoryFilter {
    CategoryFilter {
        main_category_id,
        sub_category_id,
    }
}

/// 200 with the body, or 404 with an empty body
fn found_or_404<T: serde::Serialize>(value: Option<T>) -> Response {
    match value {
        Some(value) => Json(value).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

// ===== Public (localized) handlers =====

/// Companies owning at least one solution in the category
pub async fn companies_by_category(
    service: Arc<Service>,
    Query(query): Query<CompaniesQuery>,
) -> Result<Json<Vec<CompanyViewDto>>, Problem> {
    let lang = Language::resolve(query.lang.as_deref());
    let companies = service
        .companies_by_category(
            category_filter(query.main_category_id, query.sub_category_id),
            lang,
        )
        .await
        .map_err(map_domain_error)?;

    Ok(Json(companies.into_iter().map(Into::into).collect()))
}

/// Solutions of a company within a category
pub async fn solutions_by_company(
    service: Arc<Service>,
    Query(query): Query<ItemsQuery>,
) -> Result<Json<Vec<SolutionItemViewDto>>, Problem> {
    let lang = Language::resolve(query.lang.as_deref());
    let items = service
        .solutions_by_company(
            &query.company_id,
            category_filter(query.main_category_id, query.sub_category_id),
            lang,
        )
        .await
        .map_err(map_domain_error)?;

    Ok(Json(items.into_iter().map(Into::into).collect()))
}

/// Search solutions and their companies
pub async fn search(
    service: Arc<Service>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<SolutionItemViewDto>>, Problem> {
    let lang = Language::resolve(query.lang.as_deref());
    let items = service
        .search(&query.query, lang)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(items.into_iter().map(Into::into).collect()))
}

pub async fn category_tree(
    service: Arc<Service>,
    Query(query): Query<LangQuery>,
) -> Json<Vec<SuperCategoryDto>> {
    let lang = Language::resolve(query.lang.as_deref());
    Json(service.category_tree(lang).into_iter().map(Into::into).collect())
}

pub async fn main_category(
    service: Arc<Service>,
    Path(main_category_id): Path<i32>,
    Query(query): Query<LangQuery>,
) -> Response {
    let lang = Language::resolve(query.lang.as_deref());
    found_or_404(
        service
            .main_category(main_category_id, lang)
            .map(MainCategoryPlacementDto::from),
    )
}

// ===== Company handlers =====

/// Offset-paginated company listing
pub async fn all_companies(
    service: Arc<Service>,
    Query(query): Query<PageQuery>,
) -> Result<Json<CompanyPageDto>, Problem> {
    let page = service
        .all_companies(PageRequest {
            page: query.page,
            per_page: query.per_page,
        })
        .await
        .map_err(map_domain_error)?;

    Ok(Json(page.into()))
}

pub async fn get_company(
    service: Arc<Service>,
    Path(company_id): Path<String>,
) -> Result<Response, Problem> {
    let company = service
        .company(&company_id)
        .await
        .map_err(map_domain_error)?;

    Ok(found_or_404(company.map(CompanyDto::from)))
}

/// All solutions of a company regardless of category
pub async fn company_solutions(
    service: Arc<Service>,
    Path(company_id): Path<String>,
) -> Result<Json<Vec<SolutionItemDto>>, Problem> {
    let items = service
        .solutions_by_company_id(&company_id)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(items.into_iter().map(Into::into).collect()))
}

pub async fn create_company(
    service: Arc<Service>,
    Json(req): Json<CreateCompanyRequest>,
) -> Result<(StatusCode, Json<CompanyDto>), Problem> {
    let new = NewCompany::try_from(req).map_err(map_domain_error)?;
    let company = service
        .create_company(new)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(company.into())))
}

pub async fn update_company(
    service: Arc<Service>,
    Path(company_id): Path<String>,
    Json(req): Json<UpdateCompanyRequest>,
) -> Result<Response, Problem> {
    let patch = CompanyPatch::try_from(req).map_err(map_domain_error)?;
    let company = service
        .update_company(&company_id, patch)
        .await
        .map_err(map_domain_error)?;

    Ok(found_or_404(company.map(CompanyDto::from)))
}

pub async fn delete_company(
    service: Arc<Service>,
    Path(company_id): Path<String>,
) -> Result<Json<DeleteResponse>, Problem> {
    let success = service
        .delete_company(&company_id)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(DeleteResponse { success }))
}

// ===== Solution handlers =====

pub async fn get_solution(
    service: Arc<Service>,
    Path(solution_id): Path<String>,
) -> Result<Response, Problem> {
    let item = service
        .solution(&solution_id)
        .await
        .map_err(map_domain_error)?;

    Ok(found_or_404(item.map(SolutionItemDto::from)))
}

pub async fn create_solution(
    service: Arc<Service>,
    Json(req): Json<CreateSolutionRequest>,
) -> Result<(StatusCode, Json<SolutionItemDto>), Problem> {
    let new = NewSolutionItem::try_from(req).map_err(map_domain_error)?;
    let item = service
        .create_solution(new)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(item.into())))
}

pub async fn update_solution(
    service: Arc<Service>,
    Path(solution_id): Path<String>,
    Json(req): Json<UpdateSolutionRequest>,
) -> Result<Response, Problem> {
    let patch = SolutionItemPatch::try_from(req).map_err(map_domain_error)?;
    let item = service
        .update_solution(&solution_id, patch)
        .await
        .map_err(map_domain_error)?;

    Ok(found_or_404(item.map(SolutionItemDto::from)))
}

pub async fn delete_solution(
    service: Arc<Service>,
    Path(solution_id): Path<String>,
) -> Result<Json<DeleteResponse>, Problem> {
    let success = service
        .delete_solution(&solution_id)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(DeleteResponse { success }))
}
