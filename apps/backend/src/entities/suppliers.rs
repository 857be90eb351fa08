use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "suppliers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub address: Option<String>,
    #[sea_orm(column_name = "contact_info")]
    pub contact_info: Option<String>,
    #[sea_orm(column_name = "risk_rating")]
    pub risk_rating: i32,
    #[sea_orm(column_name = "occupation_rate")]
    pub occupation_rate: f64,
    #[sea_orm(column_name = "facing_blocks")]
    pub facing_blocks: bool,
    pub checkpoint: i32,
    #[sea_orm(column_name = "project_id")]
    pub project_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::projects::Entity",
        from = "Column::ProjectId",
        to = "super::projects::Column::Id"
    )]
    Project,
    // Relation only; the schema carries no FK so risk rows may dangle after
    // a supplier is deleted.
    #[sea_orm(has_many = "super::geopolitical_risks::Entity")]
    GeopoliticalRisks,
}

impl Related<super::projects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Project.def()
    }
}

impl Related<super::geopolitical_risks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GeopoliticalRisks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
