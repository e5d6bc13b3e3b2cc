//! Encode/Decode der Test-Messages: feste Ausgaben und Round-Trips.

use pbjson::{decode, encode, json_message, Message};

include!("common/messages.rs");

// ============================================================================
// Encode: erwartete Ausgaben
// ============================================================================

#[test]
fn encode_repeated_int() {
    let mut msg = SubMessage1::default();
    msg.array[..2].copy_from_slice(&[12, 14]);
    msg.array_count = 2;
    assert_eq!(encode_to_string(&msg), r#"{"array":[12,14]}"#);
}

#[test]
fn encode_float_and_int() {
    let msg = SubMessage2 { x: 1.23, y: -12 };
    assert_eq!(encode_to_string(&msg), r#"{"x":1.230000,"y":-12}"#);
}

#[test]
fn encode_nested_optional() {
    assert_eq!(
        encode_to_string(&sub_message3_hello()),
        r#"{"x":"Hello","msg":{"x":1.270000,"y":-25},"opt":2}"#
    );
}

#[test]
fn encode_absent_optional_message() {
    let msg = SubMessage3 {
        x: fixed_str("AH-sd"),
        opt: TEST_ENUM_OPT1,
        ..Default::default()
    };
    assert_eq!(encode_to_string(&msg), r#"{"x":"AH-sd","opt":1}"#);
}

#[test]
fn encode_all_kinds_zeroed() {
    assert_eq!(
        encode_to_string(&SubMessage4::default()),
        r#"{"b":false,"i":0,"l":0,"u":0,"ul":0,"f":0.000000,"d":0.000000,"e":0,"ue":0,"s":""}"#
    );
}

#[test]
fn encode_repeated_strings() {
    let mut msg = SubMessage5::default();
    msg.s[0] = fixed_str("msg1");
    msg.s[1] = fixed_str("msg2");
    msg.s[2] = fixed_str("msg3");
    msg.s_count = 3;
    assert_eq!(encode_to_string(&msg), r#"{"s":["msg1","msg2","msg3"]}"#);
}

#[test]
fn encode_repeated_messages() {
    let msg = SubMessage6 {
        x: [Point { x: 1, y: 2 }, Point { x: 14, y: 21 }, Point { x: 17, y: 29 }],
        x_count: 3,
    };
    assert_eq!(
        encode_to_string(&msg),
        r#"{"x":[{"x":1,"y":2},{"x":14,"y":21},{"x":17,"y":29}]}"#
    );
}

#[test]
fn encode_two_optional_messages() {
    assert_eq!(
        encode_to_string(&sub_message7_full()),
        r#"{"x":{"x":1.230000,"y":-12},"y":{"x":"Hello","msg":{"x":1.270000,"y":-25},"opt":2}}"#
    );
}

/// Alle Felder optional und abwesend: `{}`.
#[test]
fn encode_all_optionals_absent() {
    assert_eq!(encode_to_string(&SubMessage7::default()), "{}");
}

#[test]
fn encoder_output_parses_as_json() {
    let json = encode_to_string(&sub_message7_full());
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["y"]["msg"]["y"], -25);
    assert_eq!(value["y"]["x"], "Hello");
}

// ============================================================================
// Round-Trips
// ============================================================================

fn roundtrip<M: Message + Default + PartialEq + std::fmt::Debug>(original: &M) {
    let mut buf = [0u8; 1024];
    let len = encode(&mut buf, original).unwrap();
    let mut decoded = M::default();
    decode(&buf[..len], &mut decoded).unwrap();
    assert_eq!(&decoded, original);
}

#[test]
fn roundtrip_sub_message2() {
    roundtrip(&SubMessage2 { x: 1.23, y: -12 });
}

#[test]
fn roundtrip_sub_message7() {
    roundtrip(&sub_message7_full());
}

#[test]
fn roundtrip_sub_message6() {
    roundtrip(&SubMessage6 {
        x: [Point { x: 1, y: 2 }, Point { x: 14, y: 21 }, Point { x: 17, y: 29 }],
        x_count: 3,
    });
}

#[test]
fn roundtrip_sub_message1() {
    let mut msg = SubMessage1::default();
    msg.array = [1, -2, 3, i32::MIN, i32::MAX, 0, 7, 8];
    msg.array_count = 8;
    roundtrip(&msg);
}

#[test]
fn roundtrip_sub_message5() {
    let mut msg = SubMessage5::default();
    msg.s[0] = fixed_str("msg1");
    msg.s[1] = fixed_str("");
    msg.s[2] = fixed_str("fifteen chars!!");
    msg.s_count = 3;
    roundtrip(&msg);
}

#[test]
fn roundtrip_all_kinds() {
    roundtrip(&SubMessage4 {
        b: true,
        i: -123_456,
        l: i64::MAX,
        u: u32::MAX,
        ul: 1 << 40,
        f: -0.5,
        d: 2.25,
        e: -300,
        ue: 255,
        s: fixed_str("seven c"),
    });
}

// ============================================================================
// Decode: Texte von Hand
// ============================================================================

#[test]
fn decode_empty_array_with_spaces() {
    let mut msg = SubMessage1 {
        array_count: 5,
        ..Default::default()
    };
    decode(b"{  \"array\"  : [] } ", &mut msg).unwrap();
    assert_eq!(msg.array_count, 0);
}

#[test]
fn decode_empty_and_nested_optionals() {
    let mut msg = SubMessage7::default();
    let text = br#"{"x" : {} , "y":{"x":"Hello","msg":{"x":1.270000,"y":-25},"opt":2}}"#;
    decode(text, &mut msg).unwrap();
    assert!(!msg.has_x);
    assert!(msg.has_y);
    assert_eq!(msg.y, sub_message3_hello());
}

#[test]
fn decode_skips_unknown_keys_at_every_level() {
    let mut msg = SubMessage7::default();
    let text = br#"{"v":1,"y":{"w":{"a":[1,2]},"opt":2,"msg":{"q":"x,y","y":3}},"z":[[],{}]}"#;
    decode(text, &mut msg).unwrap();
    assert!(msg.has_y);
    assert_eq!(msg.y.opt, TEST_ENUM_OPT2);
    assert!(msg.y.has_msg);
    assert_eq!(msg.y.msg.y, 3);
}

#[test]
fn decode_too_many_repeated_messages() {
    let mut msg = SubMessage6::default();
    let text = br#"{"x":[{"x":1},{"x":2},{"x":3},{"x":4}]}"#;
    assert_eq!(
        decode(text, &mut msg).unwrap_err(),
        pbjson::Error::ArrayCapacityExceeded { field: "x", capacity: 3 }
    );
}

/// Array-Elemente vom Typ Message duerfen nicht leer sein.
#[test]
fn decode_empty_repeated_message_element() {
    let mut msg = SubMessage6::default();
    assert!(matches!(
        decode(br#"{"x":[{"x":1},{}]}"#, &mut msg),
        Err(pbjson::Error::EmptyMessage { .. })
    ));
}
