use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::student::entity::student;

/// 学籍番号の形式（半角の自然数、先頭0は不可）
static STUDENT_CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[1-9][0-9]*$").unwrap());

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentRequest {
    #[validate(length(min = 1, message = "名前を入力してください"))]
    pub name: String,

    #[validate(length(min = 1, message = "性別を選択してください"))]
    pub gender: String,

    #[validate(regex(
        path = *STUDENT_CODE_PATTERN,
        message = "学籍番号は半角の自然数を入力してください"
    ))]
    pub student_code: String,

    /// 座席の行（1始まり）。列とあわせて指定するか、両方省略する。
    #[validate(range(min = 1, max = 20, message = "座席（行）は1以上20以下にしてください"))]
    pub seat_row: Option<i32>,

    /// 座席の列（1始まり）。行とあわせて指定するか、両方省略する。
    #[validate(range(min = 1, max = 20, message = "座席（列）は1以上20以下にしてください"))]
    pub seat_column: Option<i32>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSeatRequest {
    #[validate(range(min = 1, max = 20, message = "座席（行）は1以上20以下にしてください"))]
    pub seat_row: i32,

    #[validate(range(min = 1, max = 20, message = "座席（列）は1以上20以下にしてください"))]
    pub seat_column: i32,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct StudentListParams {
    /// 指定した性別の生徒のみを返す
    pub gender: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct StudentSearchParams {
    /// 氏名の部分一致キーワード
    pub keyword: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentResponse {
    pub id: i64,
    pub name: String,
    pub gender: String,
    pub student_code: String,
    pub seat_row: Option<i32>,
    pub seat_column: Option<i32>,
}

impl From<student::Model> for StudentResponse {
    fn from(model: student::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            gender: model.gender,
            student_code: model.student_code,
            seat_row: model.seat_row,
            seat_column: model.seat_column,
        }
    }
}
