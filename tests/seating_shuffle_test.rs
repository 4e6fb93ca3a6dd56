//! 座席シャッフル（配置エンジン）のテスト
//!
//! テスト対象:
//! - PlacementPolicy::from_flags（制約フラグからのポリシー決定）
//! - build_chart（ランダム配置・市松模様配置・列交互配置）
//!
//! 乱数はシード固定の StdRng を注入し、構造的な不変条件を検証する。

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;

use sekigae_server::domain::seating::chart::{
    build_chart, is_female, is_male, PlacementPolicy, SeatingChart,
};
use sekigae_server::domain::student::entity::student;

fn student(id: i64, gender: &str) -> student::Model {
    student::Model {
        id,
        name: format!("生徒{}", id),
        gender: gender.to_string(),
        student_code: id.to_string(),
        seat_row: None,
        seat_column: None,
    }
}

fn roster(males: usize, females: usize) -> Vec<student::Model> {
    let mut students = Vec::new();
    for i in 0..males {
        students.push(student(i as i64 + 1, "男子"));
    }
    for i in 0..females {
        students.push(student((males + i) as i64 + 1, "女子"));
    }
    students
}

fn placed_ids(chart: &SeatingChart) -> Vec<i64> {
    chart
        .iter()
        .flatten()
        .filter_map(|cell| cell.as_ref().map(|s| s.id))
        .collect()
}

// ============== ポリシー決定 ==============

#[test]
fn should_select_policy_from_flags() {
    assert_eq!(PlacementPolicy::from_flags(false, false), PlacementPolicy::Random);
    assert_eq!(
        PlacementPolicy::from_flags(true, false),
        PlacementPolicy::Checkerboard
    );
    assert_eq!(
        PlacementPolicy::from_flags(false, true),
        PlacementPolicy::AlternateColumns
    );
}

#[test]
fn should_prefer_alternate_columns_when_both_flags_are_set() {
    // 両方指定された場合は列交互配置を優先する
    assert_eq!(
        PlacementPolicy::from_flags(true, true),
        PlacementPolicy::AlternateColumns
    );
}

// ============== ランダム配置 ==============

#[test]
fn should_place_each_student_at_most_once() {
    // Arrange
    let mut rng = StdRng::seed_from_u64(42);
    let students = roster(5, 5);

    // Act
    let result = build_chart(students, 4, 3, PlacementPolicy::Random, &mut rng);

    // Assert: 同じ生徒が複数マスに現れない
    let ids = placed_ids(&result.chart);
    let unique: HashSet<i64> = ids.iter().copied().collect();
    assert_eq!(ids.len(), unique.len());
}

#[test]
fn should_fill_exactly_min_of_roster_and_seats() {
    let mut rng = StdRng::seed_from_u64(7);

    // 生徒が座席より多い場合: 座席数ぶんだけ配置
    let result = build_chart(roster(6, 6), 3, 3, PlacementPolicy::Random, &mut rng);
    assert_eq!(placed_ids(&result.chart).len(), 9);

    // 座席が生徒より多い場合: 生徒数ぶんだけ配置
    let result = build_chart(roster(2, 2), 3, 3, PlacementPolicy::Random, &mut rng);
    assert_eq!(placed_ids(&result.chart).len(), 4);
}

#[test]
fn should_place_unknown_gender_students_in_random_mode() {
    // Arrange: ランダム配置では性別ラベルを見ない
    let mut rng = StdRng::seed_from_u64(1);
    let students = vec![student(1, "男子"), student(2, "女子"), student(3, "回答なし")];

    // Act
    let result = build_chart(students, 2, 2, PlacementPolicy::Random, &mut rng);

    // Assert
    assert_eq!(placed_ids(&result.chart).len(), 3);
    assert_eq!(result.skipped_students, 0);
}

#[test]
fn should_return_empty_chart_for_zero_dimensions() {
    let mut rng = StdRng::seed_from_u64(1);
    let result = build_chart(roster(2, 2), 0, 0, PlacementPolicy::Random, &mut rng);
    assert!(result.chart.is_empty());
}

// ============== 市松模様配置 ==============

#[test]
fn should_alternate_genders_in_checkerboard_pattern() {
    // Arrange: 男女2人ずつで2x2を埋める
    let mut rng = StdRng::seed_from_u64(42);
    let students = roster(2, 2);

    // Act
    let result = build_chart(students, 2, 2, PlacementPolicy::Checkerboard, &mut rng);

    // Assert: 全席埋まり、対角のマスが同性・もう一方の対角が異性になる
    let chart = &result.chart;
    assert_eq!(placed_ids(chart).len(), 4);
    assert!(is_male(&chart[0][0].as_ref().unwrap().gender));
    assert!(is_male(&chart[1][1].as_ref().unwrap().gender));
    assert!(is_female(&chart[0][1].as_ref().unwrap().gender));
    assert!(is_female(&chart[1][0].as_ref().unwrap().gender));
}

#[test]
fn should_match_expected_gender_while_both_queues_last() {
    // Arrange: 偶奇マス数と同数の男女
    let mut rng = StdRng::seed_from_u64(3);
    let students = roster(8, 7);

    // Act
    let result = build_chart(students, 3, 5, PlacementPolicy::Checkerboard, &mut rng);

    // Assert: (行+列) が偶数のマスは男子、奇数のマスは女子
    for (r, row) in result.chart.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            let student = cell.as_ref().expect("全席が埋まること");
            if (r + c) % 2 == 0 {
                assert!(is_male(&student.gender), "({}, {}) は男子のはず", r, c);
            } else {
                assert!(is_female(&student.gender), "({}, {}) は女子のはず", r, c);
            }
        }
    }
}

#[test]
fn should_fall_back_to_other_gender_when_queue_is_exhausted() {
    // Arrange: 女子がいないので期待性別に関係なく男子で埋める
    let mut rng = StdRng::seed_from_u64(5);
    let students = roster(4, 0);

    // Act
    let result = build_chart(students, 2, 2, PlacementPolicy::Checkerboard, &mut rng);

    // Assert
    assert_eq!(placed_ids(&result.chart).len(), 4);
}

#[test]
fn should_skip_students_with_unknown_gender_in_checkerboard() {
    // Arrange
    let mut rng = StdRng::seed_from_u64(9);
    let students = vec![student(1, "男子"), student(2, "女子"), student(3, "未回答")];

    // Act
    let result = build_chart(students, 2, 2, PlacementPolicy::Checkerboard, &mut rng);

    // Assert: 不明ラベルの生徒は配置されず、件数が報告される
    let ids = placed_ids(&result.chart);
    assert_eq!(ids.len(), 2);
    assert!(!ids.contains(&3));
    assert_eq!(result.skipped_students, 1);
}

#[test]
fn should_recognize_both_label_variants() {
    // Arrange: 「男性」「女性」表記も男女として扱う
    let mut rng = StdRng::seed_from_u64(11);
    let students = vec![student(1, "男性"), student(2, "女性")];

    // Act
    let result = build_chart(students, 1, 2, PlacementPolicy::Checkerboard, &mut rng);

    // Assert
    assert_eq!(placed_ids(&result.chart).len(), 2);
    assert_eq!(result.skipped_students, 0);
    assert!(is_male(&result.chart[0][0].as_ref().unwrap().gender));
    assert!(is_female(&result.chart[0][1].as_ref().unwrap().gender));
}

// ============== 列交互配置 ==============

#[test]
fn should_segregate_genders_by_column() {
    // Arrange: 男女3人ずつで3x2を埋める
    let mut rng = StdRng::seed_from_u64(42);
    let students = roster(3, 3);

    // Act
    let result = build_chart(students, 3, 2, PlacementPolicy::AlternateColumns, &mut rng);

    // Assert: 偶数列（0始まり）は男子、奇数列は女子
    for row in &result.chart {
        assert!(is_male(&row[0].as_ref().unwrap().gender));
        assert!(is_female(&row[1].as_ref().unwrap().gender));
    }
}

#[test]
fn should_fill_column_remainder_from_other_queue() {
    // Arrange: 男子1人、女子3人。列0の2席目からは女子で補充される
    let mut rng = StdRng::seed_from_u64(8);
    let students = roster(1, 3);

    // Act
    let result = build_chart(students, 2, 2, PlacementPolicy::AlternateColumns, &mut rng);

    // Assert
    let chart = &result.chart;
    assert_eq!(placed_ids(chart).len(), 4);
    assert!(is_male(&chart[0][0].as_ref().unwrap().gender));
    assert!(is_female(&chart[1][0].as_ref().unwrap().gender));
    assert!(is_female(&chart[0][1].as_ref().unwrap().gender));
    assert!(is_female(&chart[1][1].as_ref().unwrap().gender));
}

#[test]
fn should_take_precedence_over_checkerboard_and_keep_injectivity() {
    // Arrange
    let mut rng = StdRng::seed_from_u64(21);
    let students = roster(5, 4);
    let policy = PlacementPolicy::from_flags(true, true);

    // Act
    let result = build_chart(students, 3, 3, policy, &mut rng);

    // Assert
    let ids = placed_ids(&result.chart);
    let unique: HashSet<i64> = ids.iter().copied().collect();
    assert_eq!(ids.len(), 9);
    assert_eq!(ids.len(), unique.len());
}
