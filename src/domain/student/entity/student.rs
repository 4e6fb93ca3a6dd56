use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 生徒エンティティ
///
/// `seat_row` / `seat_column` は1始まりの座席座標。未着席の場合は両方NULL。
/// 同一座席に複数の生徒が座らないことは登録時の重複チェックと
/// シャッフル時の座席表構築で保証する。
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub gender: String,
    #[sea_orm(unique)]
    pub student_code: String,
    pub seat_row: Option<i32>,
    pub seat_column: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
