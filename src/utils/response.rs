use serde::Serialize;
use utoipa::ToSchema;

/// API共通の基本レスポンス構造体
///
/// 形式:
/// ```json
/// {
///   "isSuccess": true,
///   "code": "COMMON200",
///   "message": "成功しました。",
///   "result": { ... }
/// }
/// ```
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseResponse<T: Serialize> {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: Option<T>,
}

impl<T: Serialize> BaseResponse<T> {
    /// 成功レスポンスを生成
    pub fn success(result: T) -> Self {
        Self {
            is_success: true,
            code: "COMMON200".to_string(),
            message: "成功しました。".to_string(),
            result: Some(result),
        }
    }

    /// メッセージ付きの成功レスポンスを生成
    pub fn success_with_message(message: impl Into<String>, result: T) -> Self {
        Self {
            is_success: true,
            code: "COMMON200".to_string(),
            message: message.into(),
            result: Some(result),
        }
    }
}

/// エラーレスポンス構造体
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: Option<()>,
}

impl ErrorResponse {
    /// エラーレスポンスを生成
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            is_success: false,
            code: code.into(),
            message: message.into(),
            result: None,
        }
    }
}
