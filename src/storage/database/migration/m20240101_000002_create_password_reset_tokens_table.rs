use sea_orm_migration::prelude::*;

/// One reset token row per user, removed with the user
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let table = Table::create()
            .table(ResetTokens::Table)
            .if_not_exists()
            .col(
                ColumnDef::new(ResetTokens::UserId)
                    .string_len(36)
                    .not_null()
                    .primary_key(),
            )
            .col(ColumnDef::new(ResetTokens::TokenHash).char_len(64).not_null())
            .col(
                ColumnDef::new(ResetTokens::ExpiresAt)
                    .timestamp_with_time_zone()
                    .not_null(),
            )
            .col(
                ColumnDef::new(ResetTokens::CreatedAt)
                    .timestamp_with_time_zone()
                    .not_null(),
            )
            .col(ColumnDef::new(ResetTokens::UsedAt).timestamp_with_time_zone().null())
            .foreign_key(
                ForeignKey::create()
                    .name("fk_password_reset_tokens_user")
                    .from(ResetTokens::Table, ResetTokens::UserId)
                    .to(Users::Table, Users::Id)
                    .on_delete(ForeignKeyAction::Cascade),
            )
            .to_owned();

        manager.create_table(table).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ResetTokens::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ResetTokens {
    #[sea_orm(iden = "password_reset_tokens")]
    Table,
    UserId,
    TokenHash,
    ExpiresAt,
    CreatedAt,
    UsedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
