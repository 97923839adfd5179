use entity::{baked_good, bakery};
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

const BAKERIES: &[(&str, &[(&str, f64)])] = &[
    (
        "Delightful donuts",
        &[("Chocolate dipped donut", 2.75), ("Apple-spice filled donut", 3.5)],
    ),
    (
        "Incredible crullers",
        &[("Glazed honey cruller", 3.25), ("Chocolate cruller", 100.0)],
    ),
    ("Bread & Co", &[]),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        for (name, baked_goods) in BAKERIES {
            let bakery = bakery::ActiveModel {
                name: Set((*name).to_owned()),
                ..Default::default()
            }
            .insert(db)
            .await?;

            for (name, price) in *baked_goods {
                baked_good::ActiveModel {
                    name: Set((*name).to_owned()),
                    price: Set(*price),
                    bakery_id: Set(bakery.id),
                    ..Default::default()
                }
                .insert(db)
                .await?;
            }
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        let names: Vec<&str> = BAKERIES.iter().map(|(name, _)| *name).collect();
        let seeded: Vec<i32> = bakery::Entity::find()
            .filter(bakery::Column::Name.is_in(names))
            .all(db)
            .await?
            .into_iter()
            .map(|bakery| bakery.id)
            .collect();

        baked_good::Entity::delete_many()
            .filter(baked_good::Column::BakeryId.is_in(seeded.clone()))
            .exec(db)
            .await?;
        bakery::Entity::delete_many()
            .filter(bakery::Column::Id.is_in(seeded))
            .exec(db)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use bakery_service::Query;
    use sea_orm_migration::sea_orm::Database;

    use crate::{Migrator, MigratorTrait};

    #[tokio::test]
    async fn seeds_and_unseeds() -> Result<(), sea_orm_migration::prelude::DbErr> {
        let db = Database::connect("sqlite::memory:").await?;

        Migrator::up(&db, None).await?;
        let bakeries = Query::find_bakeries(&db).await?;
        let counts: Vec<(&str, usize)> = bakeries
            .iter()
            .map(|(bakery, goods)| (bakery.name.as_str(), goods.len()))
            .collect();
        assert_eq!(
            counts,
            vec![
                ("Delightful donuts", 2),
                ("Incredible crullers", 2),
                ("Bread & Co", 0)
            ]
        );

        Migrator::down(&db, Some(1)).await?;
        assert!(Query::find_bakeries(&db).await?.is_empty());
        assert!(Query::find_baked_goods(&db).await?.is_empty());

        Ok(())
    }
}
