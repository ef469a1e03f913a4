use sea_orm_migration::prelude::*;

mod m20250301_000001_create_users;
mod m20250301_000002_create_genres;
mod m20250301_000003_create_rankings;
mod m20250301_000004_create_movies;
mod m20250301_000005_create_movie_genres;
mod m20250301_000006_seed_reference_data;
mod m20250315_000007_add_user_password_hash;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_users::Migration),
            Box::new(m20250301_000002_create_genres::Migration),
            Box::new(m20250301_000003_create_rankings::Migration),
            Box::new(m20250301_000004_create_movies::Migration),
            Box::new(m20250301_000005_create_movie_genres::Migration),
            Box::new(m20250301_000006_seed_reference_data::Migration),
            Box::new(m20250315_000007_add_user_password_hash::Migration),
        ]
    }
}
