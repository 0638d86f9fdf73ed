//! OpenAPI document for the directory REST surface

use super::dto::*;
use super::error::Problem;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Solution Directory API",
        description = "Bilingual company and solution catalogue"
    ),
    components(schemas(
        CompanyDetailsDto,
        SolutionDetailsDto,
        CompanyDto,
        CreateCompanyRequest,
        UpdateCompanyRequest,
        CompanyViewDto,
        CompanyPageDto,
        SolutionItemDto,
        CreateSolutionRequest,
        UpdateSolutionRequest,
        SolutionItemViewDto,
        ButtonPositionDto,
        SubCategoryDto,
        MainCategoryDto,
        SuperCategoryDto,
        MainCategoryPlacementDto,
        DeleteResponse,
        Problem,
    ))
)]
pub struct ApiDoc;
