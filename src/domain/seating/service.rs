use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set, TransactionTrait};
use tracing::{info, warn};

use crate::domain::seating::chart::{
    self, PlacementPolicy, PlacementResult, SeatingChart,
};
use crate::domain::seating::entity::seating_config;
use crate::domain::student::entity::student;
use crate::state::AppState;
use crate::utils::error::AppError;

/// 座席表の既定の行数
pub const DEFAULT_ROWS: i32 = 6;
/// 座席表の既定の列数
pub const DEFAULT_COLUMNS: i32 = 5;

pub struct SeatingService;

impl SeatingService {
    /// 現在の座席表を取得する
    ///
    /// 名簿に保存された座席位置から座席表を導出する。シャッフルは行わない。
    pub async fn get_seating_chart(
        state: &AppState,
        rows: i32,
        columns: i32,
    ) -> Result<SeatingChart, AppError> {
        let students = student::Entity::find()
            .order_by_asc(student::Column::Id)
            .all(&state.db)
            .await?;
        Ok(chart::chart_from_roster(
            &students,
            rows as usize,
            columns as usize,
        ))
    }

    /// 座席をシャッフルして名簿に書き戻す
    pub async fn shuffle_seating_chart(
        state: &AppState,
        rows: i32,
        columns: i32,
        prevent_same_gender: bool,
        alternate_columns: bool,
    ) -> Result<PlacementResult, AppError> {
        // 1. 全生徒を取得
        let students = student::Entity::find().all(&state.db).await?;

        // 2. 制約条件からポリシーを決めて座席表を構築
        let policy = PlacementPolicy::from_flags(prevent_same_gender, alternate_columns);
        let result = chart::build_chart(
            students,
            rows as usize,
            columns as usize,
            policy,
            &mut rand::thread_rng(),
        );

        if result.skipped_students > 0 {
            warn!(
                skipped_students = result.skipped_students,
                policy = ?policy,
                "性別ラベルが男女いずれにも一致しない生徒を配置対象から外しました"
            );
        }

        // 3. 新しい配置を名簿に書き戻す
        Self::apply_seating_chart(state, &result.chart).await?;

        info!(
            rows = rows,
            columns = columns,
            policy = ?policy,
            placed_students = chart::seat_assignments(&result.chart).len(),
            "座席表をシャッフルしました"
        );

        Ok(result)
    }

    /// 座席表を名簿へ反映する（Seat Assignment Writer）
    ///
    /// 全生徒の座席をクリアしてから占有マスの座標を設定し、1トランザクション
    /// で保存する。配置から漏れた生徒の座席は必ずNULLになる。
    pub async fn apply_seating_chart(
        state: &AppState,
        seating_chart: &SeatingChart,
    ) -> Result<(), AppError> {
        let assignments = chart::seat_assignments(seating_chart);
        let students = student::Entity::find().all(&state.db).await?;
        let reconciled = chart::reconcile_seats(students, &assignments);

        let txn = state.db.begin().await?;
        for student_model in reconciled {
            let seat_row = student_model.seat_row;
            let seat_column = student_model.seat_column;
            let mut active: student::ActiveModel = student_model.into();
            active.seat_row = Set(seat_row);
            active.seat_column = Set(seat_column);
            active.update(&txn).await?;
        }
        txn.commit().await?;

        Ok(())
    }

    /// 現在の座席表設定（行数・列数）を取得
    ///
    /// 設定レコードが未作成の場合は既定の6行5列を返す。
    pub async fn get_current_config(state: &AppState) -> Result<(i32, i32), AppError> {
        let config = seating_config::Entity::find_by_id(seating_config::CONFIG_ID)
            .one(&state.db)
            .await?;
        Ok(config
            .map(|c| (c.rows, c.columns))
            .unwrap_or((DEFAULT_ROWS, DEFAULT_COLUMNS)))
    }

    /// 座席表設定を保存（単一行レコードのupsert）
    pub async fn save_seating_config(
        state: &AppState,
        rows: i32,
        columns: i32,
    ) -> Result<(), AppError> {
        let now = Utc::now().naive_utc();

        match seating_config::Entity::find_by_id(seating_config::CONFIG_ID)
            .one(&state.db)
            .await?
        {
            Some(existing) => {
                let mut active: seating_config::ActiveModel = existing.into();
                active.rows = Set(rows);
                active.columns = Set(columns);
                active.updated_at = Set(now);
                active.update(&state.db).await?;
            }
            None => {
                let model = seating_config::ActiveModel {
                    id: Set(seating_config::CONFIG_ID),
                    rows: Set(rows),
                    columns: Set(columns),
                    updated_at: Set(now),
                };
                model.insert(&state.db).await?;
            }
        }

        info!(rows = rows, columns = columns, "座席表設定を保存しました");
        Ok(())
    }
}
