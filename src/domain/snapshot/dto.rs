use chrono::Duration;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::snapshot::entity::{seating_snapshot, seating_snapshot_detail};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveSnapshotRequest {
    #[validate(range(min = 1, max = 20, message = "行数は1以上20以下で入力してください"))]
    pub rows: i32,

    #[validate(range(min = 1, max = 20, message = "列数は1以上20以下で入力してください"))]
    pub columns: i32,

    /// スナップショット名（省略時はタイムスタンプから自動生成）
    #[validate(length(max = 100, message = "スナップショット名は100文字以内で入力してください"))]
    pub snapshot_name: Option<String>,

    /// 説明文
    pub description: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotResponse {
    pub id: i64,
    pub snapshot_name: String,
    pub rows: i32,
    pub columns: i32,
    pub description: Option<String>,
    /// 保存日時（日本時間表示）
    pub created_at: String,
    /// 更新日時（日本時間表示）
    pub updated_at: String,
}

impl From<seating_snapshot::Model> for SnapshotResponse {
    fn from(model: seating_snapshot::Model) -> Self {
        // 格納はUTC、表示のみJSTに変換する
        let jst = Duration::hours(9);
        Self {
            id: model.id,
            snapshot_name: model.snapshot_name,
            rows: model.rows,
            columns: model.columns,
            description: model.description,
            created_at: (model.created_at + jst).format("%Y-%m-%d %H:%M:%S").to_string(),
            updated_at: (model.updated_at + jst).format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotDetailResponse {
    pub seat_row: i32,
    pub seat_column: i32,
    pub student_id: i64,
    pub student_name: String,
    pub student_gender: String,
    pub student_code: String,
}

impl From<seating_snapshot_detail::Model> for SnapshotDetailResponse {
    fn from(model: seating_snapshot_detail::Model) -> Self {
        Self {
            seat_row: model.seat_row,
            seat_column: model.seat_column,
            student_id: model.student_id,
            student_name: model.student_name,
            student_gender: model.student_gender,
            student_code: model.student_code,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotWithDetailsResponse {
    #[serde(flatten)]
    pub snapshot: SnapshotResponse,
    pub details: Vec<SnapshotDetailResponse>,
}
