use std::collections::{HashMap, HashSet};

use chrono::{Duration, NaiveDateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::{error, info, warn};

use crate::domain::seating::chart;
use crate::domain::snapshot::entity::{seating_snapshot, seating_snapshot_detail};
use crate::domain::student::entity::student;
use crate::state::AppState;
use crate::utils::error::AppError;

pub struct SnapshotService;

impl SnapshotService {
    /// スナップショット名を決定する
    ///
    /// 未指定または空白のみの場合は日本時間のタイムスタンプから自動生成する。
    pub fn resolve_snapshot_name(snapshot_name: Option<&str>, now_jst: NaiveDateTime) -> String {
        match snapshot_name.map(str::trim) {
            Some(trimmed) if !trimmed.is_empty() => trimmed.to_string(),
            _ => format!("座席配置_{}", now_jst.format("%Y-%m-%d_%H-%M-%S")),
        }
    }

    /// 明細リストから「生徒ID → 1始まり座標」の対応を取り出す
    pub fn assignments_from_details(
        details: &[seating_snapshot_detail::Model],
    ) -> HashMap<i64, (i32, i32)> {
        details
            .iter()
            .map(|d| (d.student_id, (d.seat_row, d.seat_column)))
            .collect()
    }

    /// 現在の座席配置をスナップショットとして保存する
    ///
    /// 座席表は名簿に保存済みの座席位置から導出する（保存時に再シャッフル
    /// しない）。ヘッダーと明細は1トランザクションで書き込み、途中で失敗
    /// した場合はどちらも残らない。
    pub async fn save_current_snapshot(
        state: &AppState,
        rows: i32,
        columns: i32,
        snapshot_name: Option<String>,
        description: Option<String>,
    ) -> Result<seating_snapshot::Model, AppError> {
        // 1. スナップショット名が指定されていない場合は自動生成
        let now = Utc::now().naive_utc();
        let name = Self::resolve_snapshot_name(snapshot_name.as_deref(), now + Duration::hours(9));

        // 2. 現在の座席配置を取得
        let students = student::Entity::find().all(&state.db).await?;
        let seating_chart =
            chart::chart_from_roster(&students, rows as usize, columns as usize);

        // 3. ヘッダーと明細をトランザクションで保存
        let txn = state.db.begin().await?;

        let header = seating_snapshot::ActiveModel {
            snapshot_name: Set(name),
            rows: Set(rows),
            columns: Set(columns),
            description: Set(description),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        let header = header.insert(&txn).await?;

        let mut details = Vec::new();
        for (r, row) in seating_chart.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if let Some(student_model) = cell {
                    details.push(seating_snapshot_detail::ActiveModel {
                        snapshot_id: Set(header.id),
                        seat_row: Set(r as i32 + 1),
                        seat_column: Set(c as i32 + 1),
                        student_id: Set(student_model.id),
                        student_name: Set(student_model.name.clone()),
                        student_gender: Set(student_model.gender.clone()),
                        student_code: Set(student_model.student_code.clone()),
                        ..Default::default()
                    });
                }
            }
        }

        let detail_count = details.len();
        if !details.is_empty() {
            seating_snapshot_detail::Entity::insert_many(details)
                .exec(&txn)
                .await?;
        }

        txn.commit().await?;

        info!(
            snapshot_id = header.id,
            snapshot_name = %header.snapshot_name,
            detail_count = detail_count,
            "座席配置を保存しました"
        );

        Ok(header)
    }

    /// 保存されたスナップショットを復元する
    ///
    /// スナップショットが存在しない場合は副作用なしで `false` を返す。
    /// 明細が参照する生徒が名簿から削除済みの場合、その明細は読み飛ばす。
    pub async fn restore_snapshot(
        state: &AppState,
        snapshot_id: i64,
    ) -> Result<bool, AppError> {
        // 1. スナップショットを取得
        let snapshot = seating_snapshot::Entity::find_by_id(snapshot_id)
            .one(&state.db)
            .await?;
        let Some(snapshot) = snapshot else {
            return Ok(false);
        };

        // 2. 明細データを取得
        let details = seating_snapshot_detail::Entity::find()
            .filter(seating_snapshot_detail::Column::SnapshotId.eq(snapshot_id))
            .all(&state.db)
            .await?;

        // 3. 全生徒の座席をクリアし、明細の座標を再設定
        let students = student::Entity::find().all(&state.db).await?;

        let live_ids: HashSet<i64> = students.iter().map(|s| s.id).collect();
        for detail in &details {
            if !live_ids.contains(&detail.student_id) {
                warn!(
                    snapshot_id = snapshot_id,
                    student_id = detail.student_id,
                    student_name = %detail.student_name,
                    "名簿に存在しない生徒の座席明細を読み飛ばします"
                );
            }
        }

        let assignments = Self::assignments_from_details(&details);
        let reconciled = chart::reconcile_seats(students, &assignments);

        // 4. トランザクションで保存
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

        info!(
            snapshot_id = snapshot_id,
            snapshot_name = %snapshot.snapshot_name,
            "座席配置を復元しました"
        );

        Ok(true)
    }

    /// スナップショットを削除する
    ///
    /// 明細を先に消してからヘッダーを消す。途中のエラーはすべて捕捉して
    /// `false` として報告し、中途半端な状態を成功として見せない。
    pub async fn delete_snapshot(state: &AppState, snapshot_id: i64) -> bool {
        match Self::try_delete_snapshot(state, snapshot_id).await {
            Ok(deleted) => deleted,
            Err(e) => {
                error!(
                    snapshot_id = snapshot_id,
                    error = %e.message(),
                    "スナップショットの削除に失敗しました"
                );
                false
            }
        }
    }

    async fn try_delete_snapshot(state: &AppState, snapshot_id: i64) -> Result<bool, AppError> {
        let txn = state.db.begin().await?;

        // 1. 明細データを削除
        seating_snapshot_detail::Entity::delete_many()
            .filter(seating_snapshot_detail::Column::SnapshotId.eq(snapshot_id))
            .exec(&txn)
            .await?;

        // 2. ヘッダーを削除（対象が存在しなければ失敗扱い）
        let deleted = seating_snapshot::Entity::delete_by_id(snapshot_id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        if deleted.rows_affected == 0 {
            return Ok(false);
        }

        info!(snapshot_id = snapshot_id, "スナップショットを削除しました");
        Ok(true)
    }

    /// 全てのスナップショットを取得（作成日時の降順）
    pub async fn get_all_snapshots(
        state: &AppState,
    ) -> Result<Vec<seating_snapshot::Model>, AppError> {
        let snapshots = seating_snapshot::Entity::find()
            .order_by_desc(seating_snapshot::Column::CreatedAt)
            .order_by_desc(seating_snapshot::Column::Id)
            .all(&state.db)
            .await?;
        Ok(snapshots)
    }

    /// 指定IDのスナップショットヘッダーを取得
    pub async fn get_snapshot_by_id(
        state: &AppState,
        snapshot_id: i64,
    ) -> Result<seating_snapshot::Model, AppError> {
        seating_snapshot::Entity::find_by_id(snapshot_id)
            .one(&state.db)
            .await?
            .ok_or_else(|| {
                AppError::SnapshotNotFound(
                    "指定されたスナップショットは存在しませんでした。".to_string(),
                )
            })
    }

    /// 特定のスナップショットの明細を取得（座標順）
    pub async fn get_snapshot_details(
        state: &AppState,
        snapshot_id: i64,
    ) -> Result<Vec<seating_snapshot_detail::Model>, AppError> {
        let details = seating_snapshot_detail::Entity::find()
            .filter(seating_snapshot_detail::Column::SnapshotId.eq(snapshot_id))
            .order_by_asc(seating_snapshot_detail::Column::SeatRow)
            .order_by_asc(seating_snapshot_detail::Column::SeatColumn)
            .all(&state.db)
            .await?;
        Ok(details)
    }
}
