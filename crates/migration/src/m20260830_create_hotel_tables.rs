use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create rooms table. Identifiers are caller-assigned, so the
        // primary key is a plain integer, not auto-increment.
        manager
            .create_table(
                Table::create()
                    .table(Rooms::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Rooms::RoomId)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Rooms::RoomNumber).integer().not_null())
                    .col(ColumnDef::new(Rooms::Description).text().not_null())
                    .col(ColumnDef::new(Rooms::SeatCount).integer().not_null())
                    .col(ColumnDef::new(Rooms::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Rooms::UpdatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        // Create guests table. `room_number` relates to rooms by value,
        // deliberately without a SQL foreign key: deleting a room leaves
        // its guests in place with a dangling reference.
        manager
            .create_table(
                Table::create()
                    .table(Guests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Guests::GuestId)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Guests::FullName).text().not_null())
                    .col(ColumnDef::new(Guests::Birthday).text().not_null())
                    .col(ColumnDef::new(Guests::RoomNumber).integer().not_null())
                    .col(ColumnDef::new(Guests::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Guests::UpdatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Guests::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Rooms::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Rooms {
    Table,
    RoomId,
    RoomNumber,
    Description,
    SeatCount,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Guests {
    Table,
    GuestId,
    FullName,
    Birthday,
    RoomNumber,
    CreatedAt,
    UpdatedAt,
}
