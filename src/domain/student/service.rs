use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set};
use tracing::info;

use crate::domain::seating::service::SeatingService;
use crate::domain::student::entity::student;
use crate::state::AppState;
use crate::utils::error::AppError;

use super::dto::CreateStudentRequest;

pub struct StudentService;

impl StudentService {
    /// 全ての生徒を取得する（ID昇順）
    pub async fn get_all_students(state: &AppState) -> Result<Vec<student::Model>, AppError> {
        let students = student::Entity::find()
            .order_by_asc(student::Column::Id)
            .all(&state.db)
            .await?;
        Ok(students)
    }

    /// 性別で検索
    pub async fn get_by_gender(
        state: &AppState,
        gender: &str,
    ) -> Result<Vec<student::Model>, AppError> {
        let students = student::Entity::find()
            .filter(student::Column::Gender.eq(gender))
            .order_by_asc(student::Column::Id)
            .all(&state.db)
            .await?;
        Ok(students)
    }

    /// 名前で検索（部分一致）
    pub async fn search_by_name(
        state: &AppState,
        keyword: &str,
    ) -> Result<Vec<student::Model>, AppError> {
        let students = student::Entity::find()
            .filter(student::Column::Name.contains(keyword))
            .order_by_asc(student::Column::Id)
            .all(&state.db)
            .await?;
        Ok(students)
    }

    /// 指定IDの生徒を取得する
    pub async fn get_student_by_id(
        state: &AppState,
        id: i64,
    ) -> Result<student::Model, AppError> {
        student::Entity::find_by_id(id)
            .one(&state.db)
            .await?
            .ok_or_else(|| {
                AppError::StudentNotFound("指定された生徒情報は存在しませんでした。".to_string())
            })
    }

    /// 指定座席にいる生徒を取得
    pub async fn get_student_by_seat(
        state: &AppState,
        seat_row: i32,
        seat_column: i32,
    ) -> Result<Option<student::Model>, AppError> {
        let student = student::Entity::find()
            .filter(student::Column::SeatRow.eq(seat_row))
            .filter(student::Column::SeatColumn.eq(seat_column))
            .one(&state.db)
            .await?;
        Ok(student)
    }

    /// 生徒を新規登録する
    ///
    /// 学籍番号の重複と座席の重複は登録前に確認し、どちらかに該当する
    /// 場合は登録自体を行わない。
    pub async fn register_student(
        state: &AppState,
        req: CreateStudentRequest,
    ) -> Result<student::Model, AppError> {
        // 1. 座席は行・列の両方指定か両方省略のみ許可
        let seat = match (req.seat_row, req.seat_column) {
            (Some(row), Some(column)) => Some((row, column)),
            (None, None) => None,
            _ => {
                return Err(AppError::ValidationError(
                    "座席は行と列の両方を指定してください。".to_string(),
                ));
            }
        };

        // 2. 座席指定がある場合は現在の座席表の範囲内か確認
        if let Some((row, column)) = seat {
            let (current_rows, current_columns) = SeatingService::get_current_config(state).await?;
            if row > current_rows || column > current_columns {
                return Err(AppError::BadRequest(
                    "指定された座席は現在の座席表の範囲外です。".to_string(),
                ));
            }
        }

        // 3. 学籍番号の重複チェック
        let duplicate = student::Entity::find()
            .filter(student::Column::StudentCode.eq(req.student_code.as_str()))
            .one(&state.db)
            .await?;
        if duplicate.is_some() {
            return Err(AppError::StudentCodeDuplicate(
                "その学籍番号はすでに登録されています。".to_string(),
            ));
        }

        // 4. 同じ座席の生徒がいるかチェック
        if let Some((row, column)) = seat {
            let occupied = Self::get_student_by_seat(state, row, column).await?;
            if occupied.is_some() {
                return Err(AppError::SeatOccupied(
                    "指定された座席にはすでに他の生徒が登録されています。".to_string(),
                ));
            }
        }

        // 5. 登録
        let model = student::ActiveModel {
            name: Set(req.name),
            gender: Set(req.gender),
            student_code: Set(req.student_code),
            seat_row: Set(seat.map(|(row, _)| row)),
            seat_column: Set(seat.map(|(_, column)| column)),
            ..Default::default()
        };
        let inserted = model.insert(&state.db).await.map_err(|e| {
            // ユニーク制約違反（登録競合時）は409にマッピング
            let error_msg = e.to_string().to_lowercase();
            if error_msg.contains("duplicate") || error_msg.contains("unique") {
                AppError::StudentCodeDuplicate(
                    "その学籍番号はすでに登録されています。".to_string(),
                )
            } else {
                AppError::InternalError(e.to_string())
            }
        })?;

        info!(
            student_id = inserted.id,
            student_code = %inserted.student_code,
            "生徒を登録しました"
        );

        Ok(inserted)
    }

    /// 生徒の座席を更新する
    pub async fn update_seat(
        state: &AppState,
        student_id: i64,
        seat_row: i32,
        seat_column: i32,
    ) -> Result<student::Model, AppError> {
        // 1. 生徒の存在確認
        let student_model = Self::get_student_by_id(state, student_id).await?;

        // 2. 現在の座席表の範囲内か確認
        let (current_rows, current_columns) = SeatingService::get_current_config(state).await?;
        if seat_row > current_rows || seat_column > current_columns {
            return Err(AppError::BadRequest(
                "指定された座席は現在の座席表の範囲外です。".to_string(),
            ));
        }

        // 3. 移動先に別の生徒がいないか確認
        if let Some(occupied) = Self::get_student_by_seat(state, seat_row, seat_column).await? {
            if occupied.id != student_id {
                return Err(AppError::SeatOccupied(
                    "指定された座席にはすでに他の生徒が登録されています。".to_string(),
                ));
            }
        }

        // 4. 更新
        let mut active: student::ActiveModel = student_model.into();
        active.seat_row = Set(Some(seat_row));
        active.seat_column = Set(Some(seat_column));
        let updated = active.update(&state.db).await?;

        info!(
            student_id = updated.id,
            seat_row = seat_row,
            seat_column = seat_column,
            "生徒の座席を更新しました"
        );

        Ok(updated)
    }

    /// 生徒情報の削除（座席も同時に空く）
    pub async fn delete_student(state: &AppState, student_id: i64) -> Result<(), AppError> {
        let student_model = Self::get_student_by_id(state, student_id).await?;
        student_model.delete(&state.db).await?;

        info!(student_id = student_id, "生徒を削除しました");
        Ok(())
    }
}
