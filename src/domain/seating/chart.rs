//! 座席表の構築ロジック
//!
//! ここは純粋関数のみで構成する。DBアクセスは行わず、乱数は呼び出し側が
//! `rand::Rng` として注入する（本番は `thread_rng`、テストはシード固定）。

use std::collections::{HashMap, VecDeque};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::student::entity::student;

/// R×C の座席表。各マスは生徒1人または空席。
pub type SeatingChart = Vec<Vec<Option<student::Model>>>;

/// 男子を表す性別ラベル
const MALE_LABELS: [&str; 2] = ["男子", "男性"];
/// 女子を表す性別ラベル
const FEMALE_LABELS: [&str; 2] = ["女子", "女性"];

pub fn is_male(gender: &str) -> bool {
    MALE_LABELS.contains(&gender)
}

pub fn is_female(gender: &str) -> bool {
    FEMALE_LABELS.contains(&gender)
}

/// 配置ポリシー
///
/// `alternate_columns` と `prevent_same_gender` の両方が指定された場合は
/// 列交互配置を優先する。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementPolicy {
    /// 全生徒を一様ランダムに並べて行優先で詰める
    Random,
    /// (行 + 列) の偶奇で男女を市松模様に配置する
    Checkerboard,
    /// 偶数列を男子、奇数列を女子で上から詰める
    AlternateColumns,
}

impl PlacementPolicy {
    pub fn from_flags(prevent_same_gender: bool, alternate_columns: bool) -> Self {
        if alternate_columns {
            PlacementPolicy::AlternateColumns
        } else if prevent_same_gender {
            PlacementPolicy::Checkerboard
        } else {
            PlacementPolicy::Random
        }
    }
}

/// 座席表構築の結果
///
/// `skipped_students` は性別ラベルが男女いずれにも一致せず、
/// 交互配置モードで配置対象から外れた生徒数。ランダム配置では常に0。
#[derive(Debug)]
pub struct PlacementResult {
    pub chart: SeatingChart,
    pub skipped_students: usize,
}

/// 指定ポリシーで生徒を座席表に配置する
///
/// 座席数より生徒が多い場合は余った生徒が未配置になり、
/// 生徒より座席が多い場合は残りの座席が空席になる。どちらもエラーではない。
pub fn build_chart<R: Rng>(
    students: Vec<student::Model>,
    rows: usize,
    columns: usize,
    policy: PlacementPolicy,
    rng: &mut R,
) -> PlacementResult {
    match policy {
        PlacementPolicy::Random => place_random(students, rows, columns, rng),
        PlacementPolicy::Checkerboard => place_checkerboard(students, rows, columns, rng),
        PlacementPolicy::AlternateColumns => place_alternate_columns(students, rows, columns, rng),
    }
}

/// 全生徒をシャッフルして行優先で詰める
fn place_random<R: Rng>(
    mut students: Vec<student::Model>,
    rows: usize,
    columns: usize,
    rng: &mut R,
) -> PlacementResult {
    students.shuffle(rng);

    let mut queue: VecDeque<student::Model> = students.into();
    let mut chart: SeatingChart = vec![vec![None; columns]; rows];
    for row in chart.iter_mut() {
        for cell in row.iter_mut() {
            *cell = queue.pop_front();
        }
    }

    PlacementResult {
        chart,
        skipped_students: 0,
    }
}

/// 男女2つのキューに分け、それぞれ独立にシャッフルする
///
/// どちらのラベルにも一致しない生徒は配置対象から外し、件数を返す。
fn partition_by_gender<R: Rng>(
    students: Vec<student::Model>,
    rng: &mut R,
) -> (VecDeque<student::Model>, VecDeque<student::Model>, usize) {
    let total = students.len();
    let mut males = Vec::new();
    let mut females = Vec::new();
    for student in students {
        if is_male(&student.gender) {
            males.push(student);
        } else if is_female(&student.gender) {
            females.push(student);
        }
    }
    let skipped = total - males.len() - females.len();

    males.shuffle(rng);
    females.shuffle(rng);
    (males.into(), females.into(), skipped)
}

/// 市松模様の交互配置
///
/// 各マスの期待性別は (行 + 列) の偶奇で決める（偶数マスは男子を優先）。
/// 期待側のキューが尽きたらもう一方から補充し、両方尽きたら空席にする。
fn place_checkerboard<R: Rng>(
    students: Vec<student::Model>,
    rows: usize,
    columns: usize,
    rng: &mut R,
) -> PlacementResult {
    let (mut males, mut females, skipped) = partition_by_gender(students, rng);

    let mut chart: SeatingChart = vec![vec![None; columns]; rows];
    for (r, row) in chart.iter_mut().enumerate() {
        for (c, cell) in row.iter_mut().enumerate() {
            let (expected, other) = if (r + c) % 2 == 0 {
                (&mut males, &mut females)
            } else {
                (&mut females, &mut males)
            };
            *cell = expected.pop_front().or_else(|| other.pop_front());
        }
    }

    PlacementResult {
        chart,
        skipped_students: skipped,
    }
}

/// 列ごとの性別交互配置
///
/// 0始まりで偶数列は男子、奇数列は女子のキューから上から順に詰める。
/// 列の途中で優先キューが尽きたら、その列の残りはもう一方から補充する。
fn place_alternate_columns<R: Rng>(
    students: Vec<student::Model>,
    rows: usize,
    columns: usize,
    rng: &mut R,
) -> PlacementResult {
    let (mut males, mut females, skipped) = partition_by_gender(students, rng);

    let mut chart: SeatingChart = vec![vec![None; columns]; rows];
    for c in 0..columns {
        for r in 0..rows {
            let (preferred, other) = if c % 2 == 0 {
                (&mut males, &mut females)
            } else {
                (&mut females, &mut males)
            };
            chart[r][c] = preferred.pop_front().or_else(|| other.pop_front());
        }
    }

    PlacementResult {
        chart,
        skipped_students: skipped,
    }
}

/// 保存済みの座席位置から現在の座席表を組み立てる
///
/// 1始まりの座標を0始まりに変換し、範囲外の座標や片方だけNULLの生徒は
/// 無視する。シャッフルは行わない。
pub fn chart_from_roster(
    students: &[student::Model],
    rows: usize,
    columns: usize,
) -> SeatingChart {
    let mut chart: SeatingChart = vec![vec![None; columns]; rows];

    for student in students {
        if let (Some(seat_row), Some(seat_column)) = (student.seat_row, student.seat_column) {
            if seat_row < 1 || seat_column < 1 {
                continue;
            }
            let row = (seat_row - 1) as usize;
            let col = (seat_column - 1) as usize;
            if row < rows && col < columns {
                chart[row][col] = Some(student.clone());
            }
        }
    }

    chart
}

/// 座席表から「生徒ID → 1始まり座標」の対応を取り出す
pub fn seat_assignments(chart: &SeatingChart) -> HashMap<i64, (i32, i32)> {
    let mut assignments = HashMap::new();
    for (r, row) in chart.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            if let Some(student) = cell {
                assignments.insert(student.id, (r as i32 + 1, c as i32 + 1));
            }
        }
    }
    assignments
}

/// 座席割り当てを名簿へ反映する（クリアしてから設定）
///
/// 割り当てに含まれない生徒の座席は必ずNULLになるため、配置から漏れた
/// 生徒に古い座席が残ることはない。同じ割り当てで2回実行しても結果は
/// 変わらない。
pub fn reconcile_seats(
    mut students: Vec<student::Model>,
    assignments: &HashMap<i64, (i32, i32)>,
) -> Vec<student::Model> {
    for student in students.iter_mut() {
        match assignments.get(&student.id) {
            Some(&(row, column)) => {
                student.seat_row = Some(row);
                student.seat_column = Some(column);
            }
            None => {
                student.seat_row = None;
                student.seat_column = None;
            }
        }
    }
    students
}
