//! HTTP client implementation - calls a remote directory over its REST surface
//!
//! Mirrors [`NativeClient`](crate::api::native::NativeClient) for processes that
//! do not host the directory themselves.

use crate::api::rest::dto::*;
use crate::api::rest::error::Problem;
use crate::api::rest::routes::BASE_PATH;
use crate::contract::{
    CategoryFilter, Company, CompanyPatch, CompanyView, DirectoryError, Language,
    MainCategoryPlacement, NewCompany, NewSolutionItem, Page, PageRequest, SolutionDirectoryApi,
    SolutionItem, SolutionItemPatch, SolutionItemView, SuperCategoryView,
};
use async_trait::async_trait;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

/// `SolutionDirectoryApi` over HTTP
#[derive(Clone)]
pub struct HttpClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpClient {
    /// Client for the directory served at `base_url` (scheme, host and port)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Reuse an existing reqwest client (timeouts, proxies, pools)
    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, BASE_PATH, path)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, DirectoryError> {
        request.send().await.map_err(|error| {
            tracing::error!(error = %error, "solution directory request failed");
            DirectoryError::Internal
        })
    }

    /// Decode a successful body, or turn an error response into a domain error
    async fn read<T: DeserializeOwned>(response: Response) -> Result<T, DirectoryError> {
        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        response.json::<T>().await.map_err(|error| {
            tracing::error!(error = %error, "undecodable solution directory response");
            DirectoryError::Internal
        })
    }

    /// Like [`Self::read`], with 404 meaning "no such entity"
    async fn read_optional<T: DeserializeOwned>(
        response: Response,
    ) -> Result<Option<T>, DirectoryError> {
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Self::read(response).await.map(Some)
    }

    async fn error_from_response(response: Response) -> DirectoryError {
        let status = response.status();
        let url = response.url().to_string();
        let body = response.text().await.unwrap_or_default();

        if let Ok(problem) = serde_json::from_str::<Problem>(&body) {
            return problem.into_domain_error();
        }

        match status {
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                DirectoryError::validation(body)
            }
            StatusCode::CONFLICT => DirectoryError::conflict(body),
            StatusCode::NOT_FOUND => DirectoryError::NotFound {
                resource: "endpoint".to_string(),
                id: url,
            },
            _ => {
                tracing::error!(%status, %url, "solution directory returned an error");
                DirectoryError::Internal
            }
        }
    }
}

fn category_query(filter: CategoryFilter, lang: Language) -> Vec<(&'static str, String)> {
    let mut query = vec![("mainCategoryId", filter.main_category_id.to_string())];
    if let Some(sub) = filter.sub_category_id {
        query.push(("subCategoryId", sub.to_string()));
    }
    query.push(("lang", lang.code().to_string()));
    query
}

fn decode_all<D, T>(items: Vec<D>) -> Result<Vec<T>, DirectoryError>
where
    T: TryFrom<D, Error = DirectoryError>,
{
    items.into_iter().map(T::try_from).collect()
}

#[async_trait]
impl SolutionDirectoryApi for HttpClient {
    async fn companies_by_category(
        &self,
        filter: CategoryFilter,
        lang: Language,
    ) -> Result<Vec<CompanyView>, DirectoryError> {
        let request = self
            .http
            .get(self.url("/companies"))
            .query(&category_query(filter, lang));
        let views: Vec<CompanyViewDto> = Self::read(self.send(request).await?).await?;

        Ok(views.into_iter().map(Into::into).collect())
    }

    async fn solutions_by_company(
        &self,
        company_id: &str,
        filter: CategoryFilter,
        lang: Language,
    ) -> Result<Vec<SolutionItemView>, DirectoryError> {
        let mut query = vec![("companyId", company_id.to_string())];
        query.extend(category_query(filter, lang));

        let request = self.http.get(self.url("/items")).query(&query);
        let views: Vec<SolutionItemViewDto> = Self::read(self.send(request).await?).await?;

        Ok(views.into_iter().map(Into::into).collect())
    }

    async fn search(
        &self,
        query: &str,
        lang: Language,
    ) -> Result<Vec<SolutionItemView>, DirectoryError> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }

        let request = self
            .http
            .get(self.url("/search"))
            .query(&[("query", query), ("lang", lang.code())]);
        let views: Vec<SolutionItemViewDto> = Self::read(self.send(request).await?).await?;

        Ok(views.into_iter().map(Into::into).collect())
    }

    async fn category_tree(&self, lang: Language) -> Result<Vec<SuperCategoryView>, DirectoryError> {
        let request = self
            .http
            .get(self.url("/categories"))
            .query(&[("lang", lang.code())]);
        let tree: Vec<SuperCategoryDto> = Self::read(self.send(request).await?).await?;

        Ok(tree.into_iter().map(Into::into).collect())
    }

    async fn main_category(
        &self,
        main_category_id: i32,
        lang: Language,
    ) -> Result<Option<MainCategoryPlacement>, DirectoryError> {
        let request = self
            .http
            .get(self.url(&format!("/categories/main/{main_category_id}")))
            .query(&[("lang", lang.code())]);
        let placement: Option<MainCategoryPlacementDto> =
            Self::read_optional(self.send(request).await?).await?;

        Ok(placement.map(Into::into))
    }

    async fn all_companies(&self, page: PageRequest) -> Result<Page<Company>, DirectoryError> {
        let mut query = Vec::new();
        if let Some(number) = page.page {
            query.push(("page", number));
        }
        if let Some(per_page) = page.per_page {
            query.push(("perPage", per_page));
        }

        let request = self.http.get(self.url("/companies/all")).query(&query);
        let page: CompanyPageDto = Self::read(self.send(request).await?).await?;

        page.try_into()
    }

    async fn company(&self, company_id: &str) -> Result<Option<Company>, DirectoryError> {
        let request = self.http.get(self.url(&format!(
            "/companies/{}",
            urlencoding::encode(company_id)
        )));
        let company: Option<CompanyDto> = Self::read_optional(self.send(request).await?).await?;

        company.map(Company::try_from).transpose()
    }

    async fn solutions_by_company_id(
        &self,
        company_id: &str,
    ) -> Result<Vec<SolutionItem>, DirectoryError> {
        let request = self.http.get(self.url(&format!(
            "/companies/{}/solutions",
            urlencoding::encode(company_id)
        )));
        let items: Vec<SolutionItemDto> = Self::read(self.send(request).await?).await?;

        decode_all(items)
    }

    async fn solution(&self, solution_id: &str) -> Result<Option<SolutionItem>, DirectoryError> {
        let request = self.http.get(self.url(&format!(
            "/items/{}",
            urlencoding::encode(solution_id)
        )));
        let item: Option<SolutionItemDto> = Self::read_optional(self.send(request).await?).await?;

        item.map(SolutionItem::try_from).transpose()
    }

    async fn create_company(&self, company: NewCompany) -> Result<Company, DirectoryError> {
        let request = self
            .http
            .post(self.url("/companies"))
            .json(&CreateCompanyRequest::from(company));
        let created: CompanyDto = Self::read(self.send(request).await?).await?;

        created.try_into()
    }

    async fn update_company(
        &self,
        company_id: &str,
        patch: CompanyPatch,
    ) -> Result<Option<Company>, DirectoryError> {
        let request = self
            .http
            .patch(self.url(&format!("/companies/{}", urlencoding::encode(company_id))))
            .json(&UpdateCompanyRequest::from(patch));
        let updated: Option<CompanyDto> = Self::read_optional(self.send(request).await?).await?;

        updated.map(Company::try_from).transpose()
    }

    async fn delete_company(&self, company_id: &str) -> Result<bool, DirectoryError> {
        let request = self
            .http
            .delete(self.url(&format!("/companies/{}", urlencoding::encode(company_id))));
        let response: DeleteResponse = Self::read(self.send(request).await?).await?;

        Ok(response.success)
    }

    async fn create_solution(
        &self,
        solution: NewSolutionItem,
    ) -> Result<SolutionItem, DirectoryError> {
        let request = self
            .http
            .post(self.url("/items"))
            .json(&CreateSolutionRequest::from(solution));
        let created: SolutionItemDto = Self::read(self.send(request).await?).await?;

        created.try_into()
    }

    async fn update_solution(
        &self,
        solution_id: &str,
        patch: SolutionItemPatch,
    ) -> Result<Option<SolutionItem>, DirectoryError> {
        let request = self
            .http
            .patch(self.url(&format!("/items/{}", urlencoding::encode(solution_id))))
            .json(&UpdateSolutionRequest::from(patch));
        let updated: Option<SolutionItemDto> =
            Self::read_optional(self.send(request).await?).await?;

        updated.map(SolutionItem::try_from).transpose()
    }

    async fn delete_solution(&self, solution_id: &str) -> Result<bool, DirectoryError> {
        let request = self
            .http
            .delete(self.url(&format!("/items/{}", urlencoding::encode(solution_id))));
        let response: DeleteResponse = Self::read(self.send(request).await?).await?;

        Ok(response.success)
    }
}
