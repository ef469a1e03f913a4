use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::ConnectionTrait;

const RANKINGS: &[(&str, i32)] = &[
    ("Excellent", 1),
    ("Good", 2),
    ("Okay", 3),
    ("Bad", 4),
    ("Terrible", 5),
    ("Not_Ranked", 999),
];

const GENRES: &[(i32, &str)] = &[
    (1, "Comedy"),
    (2, "Drama"),
    (3, "Western"),
    (4, "Fantasy"),
    (5, "Thriller"),
    (6, "Sci-Fi"),
    (7, "Action"),
    (8, "Mystery"),
    (9, "Crime"),
    (10, "Horror"),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        let backend = db.get_database_backend();

        let mut rankings = Query::insert()
            .into_table(Rankings::Table)
            .columns([Rankings::RankingName, Rankings::RankingValue])
            .on_conflict(OnConflict::column(Rankings::RankingName).do_nothing().to_owned())
            .to_owned();
        for (name, value) in RANKINGS {
            rankings.values_panic([(*name).into(), (*value).into()]);
        }
        db.execute(backend.build(&rankings)).await?;

        let mut genres = Query::insert()
            .into_table(Genres::Table)
            .columns([Genres::GenreId, Genres::GenreName])
            .on_conflict(OnConflict::column(Genres::GenreId).do_nothing().to_owned())
            .to_owned();
        for (id, name) in GENRES {
            genres.values_panic([(*id).into(), (*name).into()]);
        }
        db.execute(backend.build(&genres)).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        let backend = db.get_database_backend();

        let rankings = Query::delete()
            .from_table(Rankings::Table)
            .and_where(
                Expr::col(Rankings::RankingName).is_in(RANKINGS.iter().map(|(name, _)| *name)),
            )
            .to_owned();
        db.execute(backend.build(&rankings)).await?;

        let genres = Query::delete()
            .from_table(Genres::Table)
            .and_where(Expr::col(Genres::GenreId).is_in(GENRES.iter().map(|(id, _)| *id)))
            .to_owned();
        db.execute(backend.build(&genres)).await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Rankings {
    Table,
    RankingName,
    RankingValue,
}

#[derive(Iden)]
enum Genres {
    Table,
    GenreId,
    GenreName,
}
