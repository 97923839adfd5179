use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "bakeries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::baked_good::Entity")]
    BakedGood,
}

impl Related<super::baked_good::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BakedGood.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
