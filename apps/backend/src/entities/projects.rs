use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(column_name = "manufacturer_id")]
    pub manufacturer_id: i64,
    #[sea_orm(column_name = "scope1_emission")]
    pub scope1_emission: f64,
    #[sea_orm(column_name = "scope2_emission")]
    pub scope2_emission: f64,
    #[sea_orm(column_name = "scope3_emission")]
    pub scope3_emission: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::manufacturers::Entity",
        from = "Column::ManufacturerId",
        to = "super::manufacturers::Column::Id"
    )]
    Manufacturer,
    #[sea_orm(has_many = "super::suppliers::Entity")]
    Suppliers,
}

impl Related<super::manufacturers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Manufacturer.def()
    }
}

impl Related<super::suppliers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Suppliers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
