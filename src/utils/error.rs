use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use super::response::ErrorResponse;

/// アプリケーション全域のエラー型
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    ValidationError(String),
    JsonParseFailed(String),
    /// 指定IDの生徒が存在しない
    StudentNotFound(String),
    /// 学籍番号が登録済み
    StudentCodeDuplicate(String),
    /// 指定座席に別の生徒が登録済み
    SeatOccupied(String),
    /// 指定IDのスナップショットが存在しない
    SnapshotNotFound(String),
    InternalError(String),
}

impl AppError {
    /// エラーメッセージを返す
    pub fn message(&self) -> String {
        match self {
            AppError::BadRequest(msg) => msg.clone(),
            AppError::ValidationError(msg) => msg.clone(),
            AppError::JsonParseFailed(msg) => format!("リクエスト形式が不正です: {}", msg),
            AppError::StudentNotFound(msg) => msg.clone(),
            AppError::StudentCodeDuplicate(msg) => msg.clone(),
            AppError::SeatOccupied(msg) => msg.clone(),
            AppError::SnapshotNotFound(msg) => msg.clone(),
            AppError::InternalError(msg) => msg.clone(),
        }
    }

    /// エラーコードを返す
    pub fn error_code(&self) -> String {
        match self {
            AppError::BadRequest(_) => "COMMON400",
            AppError::ValidationError(_) => "COMMON400",
            AppError::JsonParseFailed(_) => "COMMON400",
            AppError::StudentNotFound(_) => "STUDENT4041",
            AppError::StudentCodeDuplicate(_) => "STUDENT4092",
            AppError::SeatOccupied(_) => "SEAT4091",
            AppError::SnapshotNotFound(_) => "SNAPSHOT4041",
            AppError::InternalError(_) => "COMMON500",
        }
        .to_string()
    }

    /// HTTPステータスコードを返す
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::JsonParseFailed(_) => StatusCode::BAD_REQUEST,
            AppError::StudentNotFound(_) => StatusCode::NOT_FOUND,
            AppError::StudentCodeDuplicate(_) => StatusCode::CONFLICT,
            AppError::SeatOccupied(_) => StatusCode::CONFLICT,
            AppError::SnapshotNotFound(_) => StatusCode::NOT_FOUND,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code();
        let message = self.message();

        // エラーロギング
        match &self {
            AppError::InternalError(_) => {
                error!("Internal Server Error: {}", message);
            }
            _ => {
                error!("Error [{}]: {}", error_code, message);
            }
        }

        let error_response = ErrorResponse::new(error_code, message);

        (status, Json(error_response)).into_response()
    }
}

/// JsonRejectionをAppErrorに変換
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::JsonParseFailed(rejection.to_string())
    }
}

/// validatorの検証エラーをAppErrorに変換
///
/// 最初のフィールドエラーのメッセージをそのまま利用者向けに返す。
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|field_errors| field_errors.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "入力値が不正です。".to_string());
        AppError::ValidationError(message)
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        AppError::InternalError(err.to_string())
    }
}

/// 便利関数
impl AppError {
    #[allow(dead_code)]
    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    #[allow(dead_code)]
    pub fn internal_error(msg: impl Into<String>) -> Self {
        AppError::InternalError(msg.into())
    }

    #[allow(dead_code)]
    pub fn validation_error(msg: impl Into<String>) -> Self {
        AppError::ValidationError(msg.into())
    }
}
