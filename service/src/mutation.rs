use ::entity::{baked_good, baked_good::Entity as BakedGood, bakery, bakery::Entity as Bakery};
use sea_orm::*;
use tracing::instrument;

use crate::{BakeryChanges, BakeryWithBakedGoods, NewBakedGood, Query};

// Each mutation runs in its own transaction. Returning early drops the
// transaction, which rolls it back.
pub struct Mutation;

impl Mutation {
    /// Inserts a bakery. Not reachable over HTTP; used for seeding.
    #[instrument(skip(db))]
    pub async fn create_bakery(db: &DbConn, name: &str) -> Result<bakery::Model, DbErr> {
        bakery::ActiveModel {
            name: Set(name.to_owned()),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    /// Applies `changes` to the bakery with `id`, returning it with its baked
    /// goods, or `None` when no such bakery exists.
    #[instrument(skip(db))]
    pub async fn update_bakery_by_id(
        db: &DbConn,
        id: i32,
        changes: BakeryChanges,
    ) -> Result<Option<BakeryWithBakedGoods>, DbErr> {
        let txn = db.begin().await?;

        let Some(bakery) = Bakery::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        if let Some(name) = changes.name {
            let mut bakery: bakery::ActiveModel = bakery.into();
            bakery.name = Set(name);
            bakery.update(&txn).await?;
        }

        let updated = Query::find_bakery_by_id(&txn, id).await?;
        txn.commit().await?;

        Ok(updated)
    }

    #[instrument(skip(db))]
    pub async fn create_baked_good(
        db: &DbConn,
        form_data: NewBakedGood,
    ) -> Result<baked_good::Model, DbErr> {
        let txn = db.begin().await?;

        let baked_good = baked_good::ActiveModel {
            name: Set(form_data.name),
            price: Set(form_data.price),
            bakery_id: Set(form_data.bakery_id),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        tracing::debug!(id = baked_good.id, "baked good created");

        Ok(baked_good)
    }

    /// Deletes the baked good with `id`; `None` when there was nothing to delete.
    #[instrument(skip(db))]
    pub async fn delete_baked_good(db: &DbConn, id: i32) -> Result<Option<DeleteResult>, DbErr> {
        let txn = db.begin().await?;

        let Some(baked_good) = BakedGood::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };
        let result = baked_good.delete(&txn).await?;

        txn.commit().await?;

        Ok(Some(result))
    }
}
