use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Room numbers must name exactly one room for the guest-to-room
        // relation to be coherent.
        manager
            .create_index(
                Index::create()
                    .name("idx_rooms_room_number")
                    .table(Rooms::Table)
                    .col(Rooms::RoomNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Index on guests.room_number for occupant lookups and the
        // capacity count.
        manager
            .create_index(
                Index::create()
                    .name("idx_guests_room_number")
                    .table(Guests::Table)
                    .col(Guests::RoomNumber)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_guests_room_number")
                    .table(Guests::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_rooms_room_number")
                    .table(Rooms::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Rooms {
    Table,
    RoomNumber,
}

#[derive(Iden)]
enum Guests {
    Table,
    RoomNumber,
}
