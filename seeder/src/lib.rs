pub use sea_orm_migration::prelude::*;

mod m20240102_000001_seed_bakeries;

/// Schema migrations followed by sample data.
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        let mut migrations = migration::Migrator::migrations();
        migrations.push(Box::new(m20240102_000001_seed_bakeries::Migration));
        migrations
    }
}
