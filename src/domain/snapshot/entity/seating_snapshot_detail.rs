use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// スナップショットの座席明細（占有座席1件につき1レコード）
///
/// 生徒情報は保存時点の非正規化コピーを保持する。復元は `student_id` で
/// 現在の生徒と再リンクし、生徒が削除済みでもスナップショット自体は
/// 意味を保つ（意図的なデータ重複であり外部キー参照に「修正」しない）。
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "seating_snapshot_details")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub snapshot_id: i64,
    pub seat_row: i32,
    pub seat_column: i32,
    pub student_id: i64,
    pub student_name: String,
    pub student_gender: String,
    pub student_code: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::seating_snapshot::Entity",
        from = "Column::SnapshotId",
        to = "super::seating_snapshot::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    SeatingSnapshot,
}

impl Related<super::seating_snapshot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SeatingSnapshot.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
