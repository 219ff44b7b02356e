//! Tests for KhiRobotCmdResponse encoding and decoding, plus service metadata

use khi_robot_msgs::srv::khi_robot_cmd::{decode_response, encode_response, RESPONSE_FIXED_LEN};
use khi_robot_msgs::{
    CodecConfig, KhiRobotCmd, KhiRobotCmdRequest, KhiRobotCmdResponse, KhiRobotCmdResponseInit,
    RosMessage, RosService,
};

// =============================================================================
// Layout Tests
// =============================================================================

#[test]
fn test_encode_layout() {
    let response = KhiRobotCmdResponse::new(1, -1, "ok");
    let encoded = encode_response(&response).unwrap();

    let mut expected = Vec::new();
    expected.extend_from_slice(&[0x01, 0x00, 0x00, 0x00]);
    expected.extend_from_slice(&[0xFF, 0xFF, 0xFF, 0xFF]);
    expected.extend_from_slice(&[0x02, 0x00, 0x00, 0x00]);
    expected.extend_from_slice(b"ok");

    assert_eq!(encoded, expected);
}

#[test]
fn test_size_law() {
    for text in ["", "0", "ZPOW ON\r\nDone", "ロボット"] {
        let response = KhiRobotCmdResponse::new(0, 0, text);
        let encoded = response.encode().unwrap();
        assert_eq!(encoded.len(), 12 + text.len());
        assert_eq!(encoded.len(), response.encoded_len());
    }
}

#[test]
fn test_fixed_len_matches_layout() {
    assert_eq!(RESPONSE_FIXED_LEN, 12);
    assert_eq!(KhiRobotCmdResponse::default().encoded_len(), RESPONSE_FIXED_LEN);
}

// =============================================================================
// Round-Trip Tests
// =============================================================================

#[test]
fn test_encode_decode_roundtrip() {
    let response = KhiRobotCmdResponse::new(0, 0, "restart completed");
    let encoded = response.encode().unwrap();
    let (decoded, end) = decode_response(&encoded, 0).unwrap();

    assert_eq!(decoded, response);
    assert_eq!(end, encoded.len());
}

#[test]
fn test_encode_decode_extreme_ints() {
    let response = KhiRobotCmdResponse::new(i32::MIN, i32::MAX, "");
    let encoded = response.encode().unwrap();
    let (decoded, _) = KhiRobotCmdResponse::decode(&encoded, 0).unwrap();

    assert_eq!(decoded.driver_ret, i32::MIN);
    assert_eq!(decoded.as_ret, i32::MAX);
    assert!(decoded.cmd_ret.is_empty());
}

#[test]
fn test_decode_at_offset() {
    let response = KhiRobotCmdResponse::new(-2, 7, "err");
    let mut buffer = vec![0u8; 5];
    buffer.extend_from_slice(&response.encode().unwrap());

    let (decoded, end) = KhiRobotCmdResponse::decode(&buffer, 5).unwrap();
    assert_eq!(decoded, response);
    assert_eq!(end, buffer.len());
}

// =============================================================================
// Default-Fill Tests
// =============================================================================

#[test]
fn test_resolve_empty_partial() {
    let response = KhiRobotCmdResponse::resolve(KhiRobotCmdResponseInit::default());
    assert_eq!(response.driver_ret, 0);
    assert_eq!(response.as_ret, 0);
    assert_eq!(response.cmd_ret, "");
}

#[test]
fn test_resolve_partial_keeps_set_fields() {
    let response: KhiRobotCmdResponse = KhiRobotCmdResponseInit {
        as_ret: Some(-1),
        ..Default::default()
    }
    .into();

    assert_eq!(response, KhiRobotCmdResponse::new(0, -1, ""));
}

// =============================================================================
// Error Tests
// =============================================================================

#[test]
fn test_decode_truncated() {
    let encoded = KhiRobotCmdResponse::new(3, 4, "abc").encode().unwrap();

    for cut in 0..encoded.len() {
        let err = KhiRobotCmdResponse::decode(&encoded[..cut], 0).unwrap_err();
        assert!(err.is_decoding(), "cut at {} gave {:?}", cut, err);
    }
}

#[test]
fn test_decode_length_prefix_over_limit() {
    let config = CodecConfig::builder().max_field_len(8).build();
    let encoded = KhiRobotCmdResponse::new(0, 0, "longer than eight")
        .encode()
        .unwrap();

    let err = KhiRobotCmdResponse::decode_with(&encoded, 0, &config).unwrap_err();
    assert!(err.is_decoding());
}

// =============================================================================
// Metadata Tests
// =============================================================================

#[test]
fn test_metadata() {
    assert_eq!(KhiRobotCmdResponse::DATATYPE, "khi_robot_msgs/KhiRobotCmdResponse");
    assert_eq!(KhiRobotCmdResponse::MD5SUM, "baff9913c1b46a5cd1d4da599ea7743d");
    assert_eq!(
        KhiRobotCmdResponse::DEFINITION.lines().collect::<Vec<_>>(),
        vec!["int32 driver_ret", "int32 as_ret", "string cmd_ret"]
    );
}

#[test]
fn test_service_metadata() {
    assert_eq!(<KhiRobotCmd as RosService>::DATATYPE, "khi_robot_msgs/KhiRobotCmd");
    assert_eq!(<KhiRobotCmd as RosService>::MD5SUM, "f15db04cfafadd1969de9fd7a8329ca4");
    assert_eq!(
        <<KhiRobotCmd as RosService>::Request as RosMessage>::DATATYPE,
        KhiRobotCmdRequest::DATATYPE
    );
    assert!(KhiRobotCmd::is_compatible("f15db04cfafadd1969de9fd7a8329ca4"));
    assert!(KhiRobotCmd::is_compatible("*"));
    assert!(!KhiRobotCmd::is_compatible("5d68f1ab31d25490e0af3d08f063b65d"));
}

#[test]
fn test_json_missing_fields_use_defaults() {
    let response: KhiRobotCmdResponse = serde_json::from_str(r#"{"as_ret": 3}"#).unwrap();
    assert_eq!(response, KhiRobotCmdResponse::new(0, 3, ""));

    let text = serde_json::to_string(&response).unwrap();
    assert!(text.contains("\"driver_ret\":0"));
}
