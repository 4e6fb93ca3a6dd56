//! 座席表導出のテスト
//!
//! テスト対象:
//! - chart_from_roster（保存済み座席位置からの座席表組み立て）

use sekigae_server::domain::seating::chart::chart_from_roster;
use sekigae_server::domain::student::entity::student;

fn seated_student(
    id: i64,
    name: &str,
    seat_row: Option<i32>,
    seat_column: Option<i32>,
) -> student::Model {
    student::Model {
        id,
        name: name.to_string(),
        gender: "男子".to_string(),
        student_code: id.to_string(),
        seat_row,
        seat_column,
    }
}

#[test]
fn should_place_students_at_their_stored_seats() {
    // Arrange: (1,1) (1,2) (2,1) に3人
    let roster = vec![
        seated_student(1, "田中　太郎", Some(1), Some(1)),
        seated_student(2, "佐藤　花子", Some(1), Some(2)),
        seated_student(3, "鈴木　次郎", Some(2), Some(1)),
    ];

    // Act
    let chart = chart_from_roster(&roster, 3, 3);

    // Assert: 0始まりの [0][0] [0][1] [1][0] に配置され、残り6マスは空席
    assert_eq!(chart[0][0].as_ref().map(|s| s.name.as_str()), Some("田中　太郎"));
    assert_eq!(chart[0][1].as_ref().map(|s| s.name.as_str()), Some("佐藤　花子"));
    assert_eq!(chart[1][0].as_ref().map(|s| s.name.as_str()), Some("鈴木　次郎"));

    let empty_count = chart
        .iter()
        .flatten()
        .filter(|cell| cell.is_none())
        .count();
    assert_eq!(empty_count, 6);
}

#[test]
fn should_ignore_students_outside_the_grid() {
    // Arrange: 2x2 の座席表に対して範囲外の座席を持つ生徒
    let roster = vec![
        seated_student(1, "範囲内", Some(2), Some(2)),
        seated_student(2, "行が範囲外", Some(3), Some(1)),
        seated_student(3, "列が範囲外", Some(1), Some(5)),
    ];

    // Act
    let chart = chart_from_roster(&roster, 2, 2);

    // Assert
    let placed: Vec<i64> = chart
        .iter()
        .flatten()
        .filter_map(|cell| cell.as_ref().map(|s| s.id))
        .collect();
    assert_eq!(placed, vec![1]);
}

#[test]
fn should_ignore_students_with_partial_seat() {
    // Arrange: 行だけ、列だけが設定された生徒は未着席扱い
    let roster = vec![
        seated_student(1, "行のみ", Some(1), None),
        seated_student(2, "列のみ", None, Some(1)),
        seated_student(3, "未着席", None, None),
    ];

    // Act
    let chart = chart_from_roster(&roster, 2, 2);

    // Assert
    assert!(chart.iter().flatten().all(|cell| cell.is_none()));
}

#[test]
fn should_return_empty_chart_for_empty_roster() {
    // Act
    let chart = chart_from_roster(&[], 6, 5);

    // Assert
    assert_eq!(chart.len(), 6);
    assert!(chart.iter().all(|row| row.len() == 5));
    assert!(chart.iter().flatten().all(|cell| cell.is_none()));
}

#[test]
fn should_handle_zero_sized_grid() {
    // Arrange
    let roster = vec![seated_student(1, "田中　太郎", Some(1), Some(1))];

    // Act
    let chart = chart_from_roster(&roster, 0, 0);

    // Assert: 空の座席表が返り、エラーにならない
    assert!(chart.is_empty());
}
