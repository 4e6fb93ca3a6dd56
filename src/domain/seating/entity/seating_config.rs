use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 設定レコードの固定ID
pub const CONFIG_ID: i32 = 1;

/// 座席表の現在設定（単一行レコード、id は常に [`CONFIG_ID`]）
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "seating_config")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub rows: i32,
    pub columns: i32,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
