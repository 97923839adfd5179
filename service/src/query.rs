use ::entity::{baked_good, baked_good::Entity as BakedGood, bakery, bakery::Entity as Bakery};
use sea_orm::*;

/// A bakery together with the baked goods it owns
pub type BakeryWithBakedGoods = (bakery::Model, Vec<baked_good::Model>);

pub struct Query;

impl Query {
    /// Every bakery in ascending id order, each with its baked goods.
    /// Bakeries without any baked good come back with an empty list.
    pub async fn find_bakeries(db: &DbConn) -> Result<Vec<BakeryWithBakedGoods>, DbErr> {
        Bakery::find()
            .find_with_related(BakedGood)
            .order_by_asc(bakery::Column::Id)
            .order_by_asc(baked_good::Column::Id)
            .all(db)
            .await
    }

    pub async fn find_bakery_by_id<C>(db: &C, id: i32) -> Result<Option<BakeryWithBakedGoods>, DbErr>
    where
        C: ConnectionTrait,
    {
        let Some(bakery) = Bakery::find_by_id(id).one(db).await? else {
            return Ok(None);
        };
        let baked_goods = bakery
            .find_related(BakedGood)
            .order_by_asc(baked_good::Column::Id)
            .all(db)
            .await?;

        Ok(Some((bakery, baked_goods)))
    }

    pub async fn find_baked_goods(db: &DbConn) -> Result<Vec<baked_good::Model>, DbErr> {
        BakedGood::find()
            .order_by_asc(baked_good::Column::Id)
            .all(db)
            .await
    }

    pub async fn find_baked_good_by_id(
        db: &DbConn,
        id: i32,
    ) -> Result<Option<baked_good::Model>, DbErr> {
        BakedGood::find_by_id(id).one(db).await
    }
}
