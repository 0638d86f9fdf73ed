use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SolutionCompanies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SolutionCompanies::CompanyId)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SolutionCompanies::Details).json().not_null())
                    .col(
                        ColumnDef::new(SolutionCompanies::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(SolutionCompanies::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SolutionCompanies::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SolutionCompanies {
    Table,
    CompanyId,
    Details,
    CreatedAt,
    UpdatedAt,
}
