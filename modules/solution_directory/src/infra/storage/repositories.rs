//! SeaORM repository implementations

use crate::contract::{
    CategoryFilter, Company, CompanyPatch, Language, SolutionItem, SolutionItemPatch,
};
use crate::domain::repository::{CompanyRepository, InsertOutcome, SearchHit, SolutionRepository};
use crate::domain::search::SearchMatcher;
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, SqlErr, TransactionTrait,
};
use std::sync::Arc;

use super::entity;

/// Whether an insert failed on the primary-key constraint
fn is_duplicate_key(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

// ===== Company Repository =====

pub struct SeaOrmCompanyRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmCompanyRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CompanyRepository for SeaOrmCompanyRepository {
    async fn insert(&self, company: &Company) -> Result<InsertOutcome<Company>> {
        let active: entity::company::ActiveModel = company.try_into()?;

        match entity::company::Entity::insert(active)
            .exec_without_returning(&*self.db)
            .await
        {
            Ok(_) => Ok(InsertOutcome::Inserted(company.clone())),
            Err(err) if is_duplicate_key(&err) => Ok(InsertOutcome::DuplicateId),
            Err(err) => Err(err.into()),
        }
    }

    async fn find_by_id(&self, company_id: &str) -> Result<Option<Company>> {
        let result = entity::company::Entity::find_by_id(company_id)
            .one(&*self.db)
            .await?;

        result.map(Company::try_from).transpose()
    }

    async fn find_by_ids(&self, company_ids: &[String]) -> Result<Vec<Company>> {
        if company_ids.is_empty() {
            return Ok(Vec::new());
        }

        let results = entity::company::Entity::find()
            .filter(entity::company::Column::CompanyId.is_in(company_ids.iter().cloned()))
            .order_by_asc(entity::company::Column::CompanyId)
            .all(&*self.db)
            .await?;

        results.into_iter().map(Company::try_from).collect()
    }

    async fn list(&self, limit: u64, offset: u64) -> Result<Vec<Company>> {
        let results = entity::company::Entity::find()
            .order_by_asc(entity::company::Column::CompanyId)
            .limit(limit)
            .offset(offset)
            .all(&*self.db)
            .await?;

        results.into_iter().map(Company::try_from).collect()
    }

    async fn count(&self) -> Result<u64> {
        Ok(entity::company::Entity::find().count(&*self.db).await?)
    }

    async fn update(
        &self,
        company_id: &str,
        patch: &CompanyPatch,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Company>> {
        // Row lock on Postgres; SQLite serializes writers itself
        let txn = self.db.begin().await?;

        let Some(row) = entity::company::Entity::find_by_id(company_id)
            .lock_exclusive()
            .one(&txn)
            .await?
        else {
            txn.rollback().await?;
            return Ok(None);
        };

        let mut company = Company::try_from(row)?;
        patch.apply_to(&mut company);
        company.updated_at = updated_at;

        let active: entity::company::ActiveModel = (&company).try_into()?;
        entity::company::Entity::update_many()
            .set(active)
            .filter(entity::company::Column::CompanyId.eq(company_id))
            .exec(&txn)
            .await?;

        txn.commit().await?;
        Ok(Some(company))
    }

    async fn delete(&self, company_id: &str) -> Result<bool> {
        let result = entity::company::Entity::delete_by_id(company_id)
            .exec(&*self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

// ===== Solution Repository =====

pub struct SeaOrmSolutionRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmSolutionRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SolutionRepository for SeaOrmSolutionRepository {
    async fn insert(&self, item: &SolutionItem) -> Result<InsertOutcome<SolutionItem>> {
        let active: entity::ActiveModel = item.try_into()?;

        match entity::Entity::insert(active)
            .exec_without_returning(&*self.db)
            .await
        {
            Ok(_) => Ok(InsertOutcome::Inserted(item.clone())),
            Err(err) if is_duplicate_key(&err) => Ok(InsertOutcome::DuplicateId),
            Err(err) => Err(err.into()),
        }
    }

    async fn find_by_id(&self, solution_id: &str) -> Result<Option<SolutionItem>> {
        let result = entity::Entity::find_by_id(solution_id).one(&*self.db).await?;

        result.map(SolutionItem::try_from).transpose()
    }

    async fn find_by_company(
        &self,
        company_id: &str,
        filter: Option<CategoryFilter>,
    ) -> Result<Vec<SolutionItem>> {
        let mut query = entity::Entity::find().filter(entity::Column::CompanyId.eq(company_id));

        if let Some(filter) = filter {
            query = query.filter(entity::Column::MainCategoryId.eq(filter.main_category_id));
            if let Some(sub) = filter.sub_category_id {
                query = query.filter(entity::Column::SubCategoryId.eq(sub));
            }
        }

        let results = query
            .order_by_asc(entity::Column::SolutionId)
            .all(&*self.db)
            .await?;

        results.into_iter().map(SolutionItem::try_from).collect()
    }

    async fn distinct_company_ids(&self, filter: CategoryFilter) -> Result<Vec<String>> {
        let mut query = entity::Entity::find()
            .select_only()
            .column(entity::Column::CompanyId)
            .distinct()
            .filter(entity::Column::MainCategoryId.eq(filter.main_category_id));

        if let Some(sub) = filter.sub_category_id {
            query = query.filter(entity::Column::SubCategoryId.eq(sub));
        }

        let ids: Vec<String> = query
            .order_by_asc(entity::Column::CompanyId)
            .into_tuple()
            .all(&*self.db)
            .await?;

        Ok(ids)
    }

    async fn update(
        &self,
        solution_id: &str,
        patch: &SolutionItemPatch,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<SolutionItem>> {
        let txn = self.db.begin().await?;

        let Some(row) = entity::Entity::find_by_id(solution_id)
            .lock_exclusive()
            .one(&txn)
            .await?
        else {
            txn.rollback().await?;
            return Ok(None);
        };

        let mut item = SolutionItem::try_from(row)?;
        patch.apply_to(&mut item);
        item.updated_at = updated_at;

        let active: entity::ActiveModel = (&item).try_into()?;
        entity::Entity::update_many()
            .set(active)
            .filter(entity::Column::SolutionId.eq(solution_id))
            .exec(&txn)
            .await?;

        txn.commit().await?;
        Ok(Some(item))
    }

    async fn delete(&self, solution_id: &str) -> Result<bool> {
        let result = entity::Entity::delete_by_id(solution_id)
            .exec(&*self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn search(&self, matcher: &SearchMatcher, lang: Language) -> Result<Vec<SearchHit>> {
        // Rows are streamed; only matches are kept in memory
        let rows = entity::Entity::find()
            .find_also_related(entity::company::Entity)
            .order_by_asc(entity::Column::SolutionId)
            .stream(&*self.db)
            .await?;
        futures::pin_mut!(rows);

        let mut hits = Vec::new();
        while let Some((item, company)) = rows.try_next().await? {
            // Solutions whose company is gone never match
            let Some(company) = company else {
                continue;
            };
            let hit = SearchHit {
                item: item.try_into()?,
                company: company.try_into()?,
            };
            if matcher.matches(&hit.item.details, &hit.company.details, lang) {
                hits.push(hit);
            }
        }

        Ok(hits)
    }
}
