use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SolutionItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SolutionItems::SolutionId)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SolutionItems::CompanyId).string().not_null())
                    .col(
                        ColumnDef::new(SolutionItems::MainCategoryId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SolutionItems::SubCategoryId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SolutionItems::Details).json().not_null())
                    .col(
                        ColumnDef::new(SolutionItems::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(SolutionItems::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Category listing and per-company lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_solution_items_category")
                    .table(SolutionItems::Table)
                    .col(SolutionItems::MainCategoryId)
                    .col(SolutionItems::SubCategoryId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_solution_items_company_id")
                    .table(SolutionItems::Table)
                    .col(SolutionItems::CompanyId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SolutionItems::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SolutionItems {
    Table,
    SolutionId,
    CompanyId,
    MainCategoryId,
    SubCategoryId,
    Details,
    CreatedAt,
    UpdatedAt,
}
