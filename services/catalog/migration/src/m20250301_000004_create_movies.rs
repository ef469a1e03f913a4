use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Movies::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Movies::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Movies::ImdbId)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Movies::Title).string_len(500).not_null())
                    .col(ColumnDef::new(Movies::PosterPath).string().not_null())
                    .col(ColumnDef::new(Movies::YoutubeId).string().not_null())
                    .col(
                        ColumnDef::new(Movies::AdminReview)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Movies::RankingName).string().not_null())
                    .col(ColumnDef::new(Movies::RankingValue).integer().not_null())
                    .col(
                        ColumnDef::new(Movies::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Movies::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Movies::Table)
                    .col(Movies::RankingValue)
                    .name("idx_movies_ranking_value")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Movies::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Movies {
    Table,
    Id,
    ImdbId,
    Title,
    PosterPath,
    YoutubeId,
    AdminReview,
    RankingName,
    RankingValue,
    CreatedAt,
    UpdatedAt,
}
