use sea_orm_migration::prelude::*;

/// Creates the `games` table. Each game belongs to exactly one user and is
/// removed together with its owner.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Games {
    Table,
    Id,
    UserId,
    Name,
    Image,
    Description,
    Platform,
    Rating,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Games::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Games::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Games::UserId).integer().not_null())
                    .col(ColumnDef::new(Games::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Games::Image).text().not_null())
                    .col(ColumnDef::new(Games::Description).text().not_null())
                    .col(ColumnDef::new(Games::Platform).string_len(255).not_null())
                    .col(ColumnDef::new(Games::Rating).double().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_games_user_id")
                            .from(Games::Table, Games::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Listing a user's library filters on the owner column
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_games_user_id")
                    .table(Games::Table)
                    .col(Games::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Games::Table).to_owned())
            .await
    }
}
