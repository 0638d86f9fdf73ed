//! SeaORM entities for database tables

use sea_orm::entity::prelude::*;

/// Solution items table entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "solution_items")]
pub struct Model {
    /// Short solution id (primary key)
    #[sea_orm(primary_key, auto_increment = false)]
    pub solution_id: String,

    /// Owning company, joined on `solution_companies.company_id`
    pub company_id: String,

    pub main_category_id: i32,

    pub sub_category_id: i32,

    /// Per-language details, e.g. `{"ko": {...}, "en": {...}}`
    pub details: Json,

    /// Creation timestamp
    pub created_at: DateTimeUtc,

    /// Last update timestamp
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Join to the owning company (not enforced by a foreign key)
    #[sea_orm(
        belongs_to = "company::Entity",
        from = "Column::CompanyId",
        to = "company::Column::CompanyId"
    )]
    Company,
}

impl Related<company::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Company.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Companies table module
pub mod company {
    use sea_orm::entity::prelude::*;

    /// Companies table entity
    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "solution_companies")]
    pub struct Model {
        /// Short company id (primary key)
        #[sea_orm(primary_key, auto_increment = false)]
        pub company_id: String,

        /// Per-language details, e.g. `{"ko": {...}, "en": {...}}`
        pub details: Json,

        /// Creation timestamp
        pub created_at: DateTimeUtc,

        /// Last update timestamp
        pub updated_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        /// One-to-many relationship with solution items
        #[sea_orm(has_many = "super::Entity")]
        Solutions,
    }

    impl Related<super::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Solutions.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}
