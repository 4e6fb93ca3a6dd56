use axum::{
    extract::{rejection::JsonRejection, Query, State},
    Json,
};
use validator::Validate;

use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::ErrorResponse;
use crate::utils::BaseResponse;

use super::dto::{
    chart_to_response, ChartQueryParams, SeatingChartResponse, SeatingConfigResponse,
    ShuffleRequest, ShuffleResponse, UpdateSeatingConfigRequest,
};
use super::service::SeatingService;

/// 座席表表示API
///
/// 現在の座席表を返します。行数・列数を省略した場合は現在の設定値を
/// 使用します。
#[utoipa::path(
    get,
    path = "/api/v1/seating/chart",
    params(ChartQueryParams),
    responses(
        (status = 200, description = "正常に座席表情報を取得しました。", body = SeatingChartResponse),
        (status = 400, description = "行列の形式が不正です。１以上の整数値を指定してください。", body = ErrorResponse),
    ),
    tag = "Seating"
)]
pub async fn get_seating_chart(
    State(state): State<AppState>,
    Query(params): Query<ChartQueryParams>,
) -> Result<Json<BaseResponse<SeatingChartResponse>>, AppError> {
    params.validate()?;

    // 省略時は現在の設定値を使用
    let (current_rows, current_columns) = SeatingService::get_current_config(&state).await?;
    let rows = params.rows.unwrap_or(current_rows);
    let columns = params.columns.unwrap_or(current_columns);

    let seating_chart = SeatingService::get_seating_chart(&state, rows, columns).await?;

    Ok(Json(BaseResponse::success(SeatingChartResponse {
        rows,
        columns,
        chart: chart_to_response(seating_chart),
    })))
}

/// 座席シャッフルAPI
///
/// 現在の座席表をシャッフルして保存します。制約条件として市松模様の
/// 交互配置（preventSameGender）と列ごとの交互配置（alternateColumns）を
/// 指定できます。
#[utoipa::path(
    post,
    path = "/api/v1/seating/shuffle",
    request_body = ShuffleRequest,
    responses(
        (status = 200, description = "正常に座席表情報を入れ替えました。", body = ShuffleResponse),
        (status = 400, description = "行列の形式が不正です。１以上の整数値を指定してください。", body = ErrorResponse),
    ),
    tag = "Seating"
)]
pub async fn shuffle_seating_chart(
    State(state): State<AppState>,
    payload: Result<Json<ShuffleRequest>, JsonRejection>,
) -> Result<Json<BaseResponse<ShuffleResponse>>, AppError> {
    let Json(req) = payload?;
    req.validate()?;

    let prevent_same_gender = req.prevent_same_gender.unwrap_or(false);
    let alternate_columns = req.alternate_columns.unwrap_or(false);

    let result = SeatingService::shuffle_seating_chart(
        &state,
        req.rows,
        req.columns,
        prevent_same_gender,
        alternate_columns,
    )
    .await?;

    Ok(Json(BaseResponse::success(ShuffleResponse {
        rows: req.rows,
        columns: req.columns,
        chart: chart_to_response(result.chart),
        skipped_students: result.skipped_students,
    })))
}

/// 座席表設定取得API
///
/// 現在の座席表の行数・列数を返します。未設定の場合は既定の6行5列です。
#[utoipa::path(
    get,
    path = "/api/v1/seating/config",
    responses(
        (status = 200, description = "正常に座席表設定を取得しました。", body = SeatingConfigResponse),
    ),
    tag = "Seating"
)]
pub async fn get_seating_config(
    State(state): State<AppState>,
) -> Result<Json<BaseResponse<SeatingConfigResponse>>, AppError> {
    let (rows, columns) = SeatingService::get_current_config(&state).await?;
    Ok(Json(BaseResponse::success(SeatingConfigResponse::new(
        rows, columns,
    ))))
}

/// 座席表設定保存API
///
/// 座席表の行数・列数を保存します。
#[utoipa::path(
    put,
    path = "/api/v1/seating/config",
    request_body = UpdateSeatingConfigRequest,
    responses(
        (status = 200, description = "正常に座席表設定を保存しました。", body = SeatingConfigResponse),
        (status = 400, description = "行列の形式が不正です。１以上の整数値を指定してください。", body = ErrorResponse),
    ),
    tag = "Seating"
)]
pub async fn update_seating_config(
    State(state): State<AppState>,
    payload: Result<Json<UpdateSeatingConfigRequest>, JsonRejection>,
) -> Result<Json<BaseResponse<SeatingConfigResponse>>, AppError> {
    let Json(req) = payload?;
    req.validate()?;

    SeatingService::save_seating_config(&state, req.rows, req.columns).await?;
    Ok(Json(BaseResponse::success(SeatingConfigResponse::new(
        req.rows,
        req.columns,
    ))))
}
