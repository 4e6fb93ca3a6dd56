use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::seating::chart::SeatingChart;
use crate::domain::student::dto::StudentResponse;

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ChartQueryParams {
    /// 行数（省略時は現在の設定値）
    #[validate(range(min = 1, max = 20, message = "行数は1以上20以下で入力してください"))]
    pub rows: Option<i32>,

    /// 列数（省略時は現在の設定値）
    #[validate(range(min = 1, max = 20, message = "列数は1以上20以下で入力してください"))]
    pub columns: Option<i32>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShuffleRequest {
    #[validate(range(min = 1, max = 20, message = "行数は1以上20以下で入力してください"))]
    pub rows: i32,

    #[validate(range(min = 1, max = 20, message = "列数は1以上20以下で入力してください"))]
    pub columns: i32,

    /// 同性同士を隣接させない制約（市松模様の交互配置）
    pub prevent_same_gender: Option<bool>,

    /// 列ごとに性別を交互配置する制約（両方指定時はこちらを優先）
    pub alternate_columns: Option<bool>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeatingChartResponse {
    pub rows: i32,
    pub columns: i32,
    /// 行優先の座席表。空席はnull。
    pub chart: Vec<Vec<Option<StudentResponse>>>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShuffleResponse {
    pub rows: i32,
    pub columns: i32,
    pub chart: Vec<Vec<Option<StudentResponse>>>,
    /// 性別ラベルが不明で配置対象から外れた生徒数
    pub skipped_students: usize,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSeatingConfigRequest {
    #[validate(range(min = 1, max = 20, message = "行数は1以上20以下で入力してください"))]
    pub rows: i32,

    #[validate(range(min = 1, max = 20, message = "列数は1以上20以下で入力してください"))]
    pub columns: i32,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeatingConfigResponse {
    pub rows: i32,
    pub columns: i32,
    pub total_seats: i32,
}

impl SeatingConfigResponse {
    pub fn new(rows: i32, columns: i32) -> Self {
        Self {
            rows,
            columns,
            total_seats: rows * columns,
        }
    }
}

/// 座席表をレスポンス用に変換する
pub fn chart_to_response(seating_chart: SeatingChart) -> Vec<Vec<Option<StudentResponse>>> {
    seating_chart
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|cell| cell.map(StudentResponse::from))
                .collect()
        })
        .collect()
}
