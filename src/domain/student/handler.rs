use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    Json,
};
use validator::Validate;

use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::ErrorResponse;
use crate::utils::BaseResponse;

use super::dto::{
    CreateStudentRequest, StudentListParams, StudentResponse, StudentSearchParams,
    UpdateSeatRequest,
};
use super::service::StudentService;

/// 生徒一覧取得API
///
/// 登録済みの生徒一覧を返します。`gender` を指定すると性別で絞り込みます。
#[utoipa::path(
    get,
    path = "/api/v1/students",
    params(StudentListParams),
    responses(
        (status = 200, description = "正常に生徒一覧情報を取得しました。", body = [StudentResponse]),
    ),
    tag = "Student"
)]
pub async fn get_students(
    State(state): State<AppState>,
    Query(params): Query<StudentListParams>,
) -> Result<Json<BaseResponse<Vec<StudentResponse>>>, AppError> {
    let students = match params.gender {
        Some(ref gender) => StudentService::get_by_gender(&state, gender).await?,
        None => StudentService::get_all_students(&state).await?,
    };

    let result: Vec<StudentResponse> = students.into_iter().map(|s| s.into()).collect();
    Ok(Json(BaseResponse::success(result)))
}

/// 生徒検索API
///
/// 氏名の部分一致で生徒を検索します。
#[utoipa::path(
    get,
    path = "/api/v1/students/search",
    params(StudentSearchParams),
    responses(
        (status = 200, description = "正常に検索結果を取得しました。", body = [StudentResponse]),
    ),
    tag = "Student"
)]
pub async fn search_students(
    State(state): State<AppState>,
    Query(params): Query<StudentSearchParams>,
) -> Result<Json<BaseResponse<Vec<StudentResponse>>>, AppError> {
    let students = StudentService::search_by_name(&state, &params.keyword).await?;
    let result: Vec<StudentResponse> = students.into_iter().map(|s| s.into()).collect();
    Ok(Json(BaseResponse::success(result)))
}

/// 生徒登録API
///
/// 新規で生徒の登録を行います。学籍番号の重複、座席の重複がある場合は
/// 409を返し、登録は行われません。
#[utoipa::path(
    post,
    path = "/api/v1/students",
    request_body = CreateStudentRequest,
    responses(
        (status = 200, description = "正常に生徒情報を新規登録しました。", body = StudentResponse),
        (status = 400, description = "入力値が不正です。", body = ErrorResponse),
        (status = 409, description = "学籍番号または座席が重複しています。", body = ErrorResponse),
    ),
    tag = "Student"
)]
pub async fn register_student(
    State(state): State<AppState>,
    payload: Result<Json<CreateStudentRequest>, JsonRejection>,
) -> Result<Json<BaseResponse<StudentResponse>>, AppError> {
    let Json(req) = payload?;
    req.validate()?;

    let student = StudentService::register_student(&state, req).await?;
    Ok(Json(BaseResponse::success(student.into())))
}

/// 生徒単一検索API
///
/// 指定IDの生徒を返します。
#[utoipa::path(
    get,
    path = "/api/v1/students/{id}",
    params(
        ("id" = i64, Path, description = "生徒ID（自動採番）")
    ),
    responses(
        (status = 200, description = "正常に生徒情報の取得に成功しました。", body = StudentResponse),
        (status = 404, description = "指定されたIDの生徒情報は存在しません。", body = ErrorResponse),
    ),
    tag = "Student"
)]
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<BaseResponse<StudentResponse>>, AppError> {
    let student = StudentService::get_student_by_id(&state, id).await?;
    Ok(Json(BaseResponse::success(student.into())))
}

/// 生徒座席更新API
///
/// 指定IDの生徒を指定座席へ移動します。
#[utoipa::path(
    put,
    path = "/api/v1/students/{id}/seat",
    params(
        ("id" = i64, Path, description = "生徒ID（自動採番）")
    ),
    request_body = UpdateSeatRequest,
    responses(
        (status = 200, description = "正常に座席を更新しました。", body = StudentResponse),
        (status = 400, description = "座席が座席表の範囲外です。", body = ErrorResponse),
        (status = 404, description = "指定されたIDの生徒情報は存在しません。", body = ErrorResponse),
        (status = 409, description = "座席に別の生徒が登録済みです。", body = ErrorResponse),
    ),
    tag = "Student"
)]
pub async fn update_seat(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<UpdateSeatRequest>, JsonRejection>,
) -> Result<Json<BaseResponse<StudentResponse>>, AppError> {
    let Json(req) = payload?;
    req.validate()?;

    let student = StudentService::update_seat(&state, id, req.seat_row, req.seat_column).await?;
    Ok(Json(BaseResponse::success(student.into())))
}

/// 生徒削除API
///
/// 指定IDの生徒を削除します。座席も同時に空きます。
#[utoipa::path(
    delete,
    path = "/api/v1/students/{id}",
    params(
        ("id" = i64, Path, description = "生徒ID（自動採番）")
    ),
    responses(
        (status = 200, description = "正常に生徒情報を削除しました。"),
        (status = 404, description = "指定されたIDの生徒情報は存在しません。", body = ErrorResponse),
    ),
    tag = "Student"
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<BaseResponse<()>>, AppError> {
    StudentService::delete_student(&state, id).await?;
    Ok(Json(BaseResponse::success_with_message(
        "生徒を削除しました。",
        (),
    )))
}
