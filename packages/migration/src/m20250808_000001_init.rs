use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Manufacturers {
    Table,
    Id,
    Name,
}

#[derive(Iden)]
enum Projects {
    Table,
    Id,
    Name,
    ManufacturerId,
    Scope1Emission,
    Scope2Emission,
    Scope3Emission,
}

#[derive(Iden)]
enum Suppliers {
    Table,
    Id,
    Name,
    Address,
    ContactInfo,
    RiskRating,
    OccupationRate,
    FacingBlocks,
    Checkpoint,
    ProjectId,
}

#[derive(Iden)]
enum GeopoliticalRisks {
    Table,
    Id,
    Description,
    SupplierId,
    Timestamp,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // manufacturers table
        manager
            .create_table(
                Table::create()
                    .table(Manufacturers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Manufacturers::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(Manufacturers::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        // projects table
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Projects::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Projects::Name).string().not_null())
                    .col(
                        ColumnDef::new(Projects::ManufacturerId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Projects::Scope1Emission)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(Projects::Scope2Emission)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(Projects::Scope3Emission)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_projects_manufacturer_id")
                            .from(Projects::Table, Projects::ManufacturerId)
                            .to(Manufacturers::Table, Manufacturers::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        // suppliers table
        manager
            .create_table(
                Table::create()
                    .table(Suppliers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Suppliers::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Suppliers::Name).string().not_null())
                    .col(ColumnDef::new(Suppliers::Address).string().null())
                    .col(ColumnDef::new(Suppliers::ContactInfo).string().null())
                    .col(ColumnDef::new(Suppliers::RiskRating).integer().not_null())
                    .col(
                        ColumnDef::new(Suppliers::OccupationRate)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(Suppliers::FacingBlocks)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Suppliers::Checkpoint)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Suppliers::ProjectId).big_integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_suppliers_project_id")
                            .from(Suppliers::Table, Suppliers::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        // index for the project detail page (suppliers by project)
        manager
            .create_index(
                Index::create()
                    .name("ix_suppliers_project_id")
                    .table(Suppliers::Table)
                    .col(Suppliers::ProjectId)
                    .to_owned(),
            )
            .await?;

        // geopolitical_risks table
        //
        // supplier_id is intentionally NOT a foreign key: supplier deletion
        // removes only the supplier row and leaves its risk notes behind.
        manager
            .create_table(
                Table::create()
                    .table(GeopoliticalRisks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GeopoliticalRisks::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(GeopoliticalRisks::Description)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GeopoliticalRisks::SupplierId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GeopoliticalRisks::Timestamp)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_geopolitical_risks_supplier_id")
                    .table(GeopoliticalRisks::Table)
                    .col(GeopoliticalRisks::SupplierId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GeopoliticalRisks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Suppliers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Manufacturers::Table).to_owned())
            .await?;
        Ok(())
    }
}
