use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 座席配置スナップショットのヘッダー
///
/// `created_at` は作成時に一度だけ設定し、以後変更しない。
/// `updated_at` はヘッダーに変更があった場合のみ更新する。
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "seating_snapshots")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub snapshot_name: String,
    pub rows: i32,
    pub columns: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::seating_snapshot_detail::Entity")]
    SeatingSnapshotDetail,
}

impl Related<super::seating_snapshot_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SeatingSnapshotDetail.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
