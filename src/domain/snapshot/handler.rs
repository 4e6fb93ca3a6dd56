use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use validator::Validate;

use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::ErrorResponse;
use crate::utils::BaseResponse;

use super::dto::{
    SaveSnapshotRequest, SnapshotDetailResponse, SnapshotResponse, SnapshotWithDetailsResponse,
};
use super::service::SnapshotService;

/// 座席表保存API
///
/// 現在の座席配置をスナップショットとして保存します。名前を省略した
/// 場合はタイムスタンプから自動生成します。
#[utoipa::path(
    post,
    path = "/api/v1/seating/snapshots",
    request_body = SaveSnapshotRequest,
    responses(
        (status = 200, description = "正常に座席表情報を保存しました。", body = SnapshotResponse),
        (status = 400, description = "入力値が不正です。", body = ErrorResponse),
    ),
    tag = "Snapshot"
)]
pub async fn save_snapshot(
    State(state): State<AppState>,
    payload: Result<Json<SaveSnapshotRequest>, JsonRejection>,
) -> Result<Json<BaseResponse<SnapshotResponse>>, AppError> {
    let Json(req) = payload?;
    req.validate()?;

    let snapshot = SnapshotService::save_current_snapshot(
        &state,
        req.rows,
        req.columns,
        req.snapshot_name,
        req.description,
    )
    .await?;

    let message = format!("座席配置「{}」を保存しました。", snapshot.snapshot_name);
    Ok(Json(BaseResponse::success_with_message(
        message,
        snapshot.into(),
    )))
}

/// スナップショット一覧API
///
/// 保存済みスナップショットを作成日時の降順で返します。
#[utoipa::path(
    get,
    path = "/api/v1/seating/snapshots",
    responses(
        (status = 200, description = "正常にスナップショット一覧を取得しました。", body = [SnapshotResponse]),
    ),
    tag = "Snapshot"
)]
pub async fn list_snapshots(
    State(state): State<AppState>,
) -> Result<Json<BaseResponse<Vec<SnapshotResponse>>>, AppError> {
    let snapshots = SnapshotService::get_all_snapshots(&state).await?;
    let result: Vec<SnapshotResponse> = snapshots.into_iter().map(|s| s.into()).collect();
    Ok(Json(BaseResponse::success(result)))
}

/// スナップショット詳細API
///
/// 指定IDのスナップショットのヘッダーと座席明細を返します。
#[utoipa::path(
    get,
    path = "/api/v1/seating/snapshots/{id}",
    params(
        ("id" = i64, Path, description = "保存済み座席表のID（自動採番）")
    ),
    responses(
        (status = 200, description = "正常にスナップショット詳細を取得しました。", body = SnapshotWithDetailsResponse),
        (status = 404, description = "指定されたスナップショットは存在しません。", body = ErrorResponse),
    ),
    tag = "Snapshot"
)]
pub async fn get_snapshot(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<BaseResponse<SnapshotWithDetailsResponse>>, AppError> {
    let snapshot = SnapshotService::get_snapshot_by_id(&state, id).await?;
    let details = SnapshotService::get_snapshot_details(&state, id).await?;

    Ok(Json(BaseResponse::success(SnapshotWithDetailsResponse {
        snapshot: snapshot.into(),
        details: details
            .into_iter()
            .map(SnapshotDetailResponse::from)
            .collect(),
    })))
}

/// 座席表復元API
///
/// 保存したスナップショットを現在の座席配置へ復元します。スナップ
/// ショットに含まれる生徒が削除済みの場合、その座席は読み飛ばされます。
#[utoipa::path(
    post,
    path = "/api/v1/seating/snapshots/{id}/restore",
    params(
        ("id" = i64, Path, description = "保存済み座席表のID（自動採番）")
    ),
    responses(
        (status = 200, description = "正常に座席表情報を復元しました。"),
        (status = 404, description = "指定されたスナップショットは存在しません。", body = ErrorResponse),
    ),
    tag = "Snapshot"
)]
pub async fn restore_snapshot(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<BaseResponse<()>>, AppError> {
    let restored = SnapshotService::restore_snapshot(&state, id).await?;
    if !restored {
        return Err(AppError::SnapshotNotFound(
            "指定されたスナップショットは存在しませんでした。".to_string(),
        ));
    }

    Ok(Json(BaseResponse::success_with_message(
        "座席配置を復元しました。",
        (),
    )))
}

/// スナップショット削除API
///
/// 保存中の座席表を明細ごと削除します。
#[utoipa::path(
    delete,
    path = "/api/v1/seating/snapshots/{id}",
    params(
        ("id" = i64, Path, description = "保存済み座席表のID（自動採番）")
    ),
    responses(
        (status = 200, description = "正常に座席表情報を削除しました。"),
        (status = 404, description = "指定されたスナップショットは存在しません。", body = ErrorResponse),
        (status = 500, description = "座席配置の削除に失敗しました。", body = ErrorResponse),
    ),
    tag = "Snapshot"
)]
pub async fn delete_snapshot(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<BaseResponse<()>>, AppError> {
    // 存在確認を先に行い、未登録IDは404で返す
    SnapshotService::get_snapshot_by_id(&state, id).await?;

    let deleted = SnapshotService::delete_snapshot(&state, id).await;
    if !deleted {
        return Err(AppError::InternalError(
            "座席配置の削除に失敗しました。".to_string(),
        ));
    }

    Ok(Json(BaseResponse::success_with_message(
        "座席配置を削除しました。",
        (),
    )))
}
