use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

// `bakery_id` is indexed but carries no FOREIGN KEY constraint; orphan ids are
// stored as sent.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BakedGoods::Table)
                    .if_not_exists()
                    .col(pk_auto(BakedGoods::Id))
                    .col(string(BakedGoods::Name))
                    .col(double(BakedGoods::Price))
                    .col(integer(BakedGoods::BakeryId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx-baked_goods-bakery_id")
                    .table(BakedGoods::Table)
                    .col(BakedGoods::BakeryId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BakedGoods::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum BakedGoods {
    Table,
    Id,
    Name,
    Price,
    BakeryId,
}
