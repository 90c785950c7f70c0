use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Volunteers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Volunteers::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Volunteers::Name).string().not_null())
                    .col(ColumnDef::new(Volunteers::LastName).string().not_null())
                    .col(
                        ColumnDef::new(Volunteers::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Volunteers::Cpf).string().not_null())
                    .col(ColumnDef::new(Volunteers::BirthDate).string().not_null())
                    .col(ColumnDef::new(Volunteers::PhoneNumber).string().not_null())
                    .col(ColumnDef::new(Volunteers::VolunteerType).string().not_null())
                    .col(ColumnDef::new(Volunteers::Crm).string().not_null())
                    .col(ColumnDef::new(Volunteers::Area).string().not_null())
                    .col(ColumnDef::new(Volunteers::State).string().not_null())
                    .col(ColumnDef::new(Volunteers::Availability).string().not_null())
                    .col(ColumnDef::new(Volunteers::Notes).text().null())
                    .col(ColumnDef::new(Volunteers::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Volunteers::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Volunteers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Volunteers {
    Table,
    Id,
    Name,
    LastName,
    Email,
    Cpf,
    BirthDate,
    PhoneNumber,
    VolunteerType,
    Crm,
    Area,
    State,
    Availability,
    Notes,
    CreatedAt,
    UpdatedAt,
}
