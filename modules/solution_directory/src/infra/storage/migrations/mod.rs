//! Database migrations for the solution directory

use sea_orm_migration::prelude::*;

mod m20250601_000001_create_solution_companies;
mod m20250601_000002_create_solution_items;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_solution_companies::Migration),
            Box::new(m20250601_000002_create_solution_items::Migration),
        ]
    }
}
