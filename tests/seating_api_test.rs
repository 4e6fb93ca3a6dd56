//! 座席表・スナップショットAPIの入出力契約テスト
//!
//! テスト対象:
//! - ShuffleRequest / UpdateSeatingConfigRequest / SaveSnapshotRequest の入力検証
//! - リクエストのcamelCase受け取りとBaseResponseの直列化

use serde_json::{json, Value};
use validator::Validate;

use sekigae_server::domain::seating::dto::{ShuffleRequest, UpdateSeatingConfigRequest};
use sekigae_server::domain::snapshot::dto::SaveSnapshotRequest;
use sekigae_server::utils::BaseResponse;

// ============== 入力検証 ==============

#[test]
fn should_validate_shuffle_request_success() {
    // Arrange
    let req = ShuffleRequest {
        rows: 6,
        columns: 5,
        prevent_same_gender: Some(true),
        alternate_columns: None,
    };

    // Act & Assert
    assert!(req.validate().is_ok());
}

#[test]
fn should_fail_validation_when_dimensions_are_out_of_range() {
    // Arrange
    let zero_rows = ShuffleRequest {
        rows: 0,
        columns: 5,
        prevent_same_gender: None,
        alternate_columns: None,
    };
    let too_many_columns = ShuffleRequest {
        rows: 6,
        columns: 21,
        prevent_same_gender: None,
        alternate_columns: None,
    };

    // Act & Assert
    assert!(zero_rows.validate().is_err());
    assert!(too_many_columns.validate().is_err());
}

#[test]
fn should_allow_boundary_dimensions() {
    // Arrange: 1と20は範囲内
    let smallest = UpdateSeatingConfigRequest { rows: 1, columns: 1 };
    let largest = UpdateSeatingConfigRequest {
        rows: 20,
        columns: 20,
    };

    // Act & Assert
    assert!(smallest.validate().is_ok());
    assert!(largest.validate().is_ok());
}

#[test]
fn should_fail_validation_when_snapshot_name_is_too_long() {
    // Arrange
    let req = SaveSnapshotRequest {
        rows: 6,
        columns: 5,
        snapshot_name: Some("あ".repeat(101)),
        description: None,
    };

    // Act
    let result = req.validate();

    // Assert
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .field_errors()
        .contains_key("snapshot_name"));
}

#[test]
fn should_allow_missing_snapshot_name() {
    // Arrange
    let req = SaveSnapshotRequest {
        rows: 6,
        columns: 5,
        snapshot_name: None,
        description: Some("期末テスト用の座席".to_string()),
    };

    // Act & Assert
    assert!(req.validate().is_ok());
}

// ============== リクエストの受け取り ==============

#[test]
fn should_deserialize_shuffle_request_from_camel_case() {
    // Arrange
    let body = json!({
        "rows": 2,
        "columns": 2,
        "preventSameGender": true,
        "alternateColumns": false
    });

    // Act
    let req: ShuffleRequest = serde_json::from_value(body).unwrap();

    // Assert
    assert_eq!(req.rows, 2);
    assert_eq!(req.columns, 2);
    assert_eq!(req.prevent_same_gender, Some(true));
    assert_eq!(req.alternate_columns, Some(false));
}

#[test]
fn should_default_constraint_flags_to_none_when_omitted() {
    // Arrange
    let body = json!({ "rows": 6, "columns": 5 });

    // Act
    let req: ShuffleRequest = serde_json::from_value(body).unwrap();

    // Assert
    assert_eq!(req.prevent_same_gender, None);
    assert_eq!(req.alternate_columns, None);
}

// ============== レスポンスの直列化 ==============

#[test]
fn should_serialize_base_response_in_camel_case() {
    // Arrange
    let response = BaseResponse::success(vec![1, 2, 3]);

    // Act
    let json: Value = serde_json::to_value(&response).unwrap();

    // Assert
    assert_eq!(json["isSuccess"], true);
    assert_eq!(json["code"], "COMMON200");
    assert_eq!(json["message"], "成功しました。");
    assert_eq!(json["result"], json!([1, 2, 3]));
}

#[test]
fn should_serialize_success_message_for_snapshot_save() {
    // Arrange
    let response =
        BaseResponse::success_with_message("座席配置「期末テスト用」を保存しました。", ());

    // Act
    let json: Value = serde_json::to_value(&response).unwrap();

    // Assert
    assert_eq!(json["isSuccess"], true);
    assert_eq!(json["message"], "座席配置「期末テスト用」を保存しました。");
}
