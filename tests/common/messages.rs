// Gemeinsame Test-Messages fuer die Integrationstests.
//
// Wird per `include!` eingebunden. Benötigte Imports:
//   use pbjson::{json_message, Message};

#[derive(Debug, Clone, Default, PartialEq)]
struct SubMessage1 {
    array: [i32; 8],
    array_count: u32,
}

json_message!(SubMessage1 {
    repeated array: Int32 [array_count],
});

#[derive(Debug, Clone, Default, PartialEq)]
struct SubMessage2 {
    x: f32,
    y: i32,
}

json_message!(SubMessage2 {
    singular x: Float,
    singular y: Int32,
});

/// Werte von `opt`.
const TEST_ENUM_OPT1: i32 = 1;
const TEST_ENUM_OPT2: i32 = 2;

#[derive(Debug, Clone, Default, PartialEq)]
struct SubMessage3 {
    x: [u8; 16],
    msg: SubMessage2,
    has_msg: bool,
    opt: i32,
}

json_message!(SubMessage3 {
    singular x: String,
    optional msg: Message [has_msg],
    singular opt: Enum,
});

/// Ein Feld pro skalarem Kind.
#[derive(Debug, Clone, Default, PartialEq)]
struct SubMessage4 {
    b: bool,
    i: i32,
    l: i64,
    u: u32,
    ul: u64,
    f: f32,
    d: f64,
    e: i16,
    ue: u8,
    s: [u8; 8],
}

json_message!(SubMessage4 {
    singular b: Bool,
    singular i: Int32,
    singular l: Int64,
    singular u: UInt32,
    singular ul: UInt64,
    singular f: Float,
    singular d: Double,
    singular e: Enum,
    singular ue: UEnum,
    singular s: String,
});

#[derive(Debug, Clone, Default, PartialEq)]
struct SubMessage5 {
    s: [[u8; 16]; 4],
    s_count: u32,
}

json_message!(SubMessage5 {
    repeated s: String [s_count],
});

#[derive(Debug, Clone, Default, PartialEq)]
struct Point {
    x: i32,
    y: i32,
}

json_message!(Point {
    singular x: Int32,
    singular y: Int32,
});

#[derive(Debug, Clone, Default, PartialEq)]
struct SubMessage6 {
    x: [Point; 3],
    x_count: u32,
}

json_message!(SubMessage6 {
    repeated x: Message [x_count],
});

#[derive(Debug, Clone, Default, PartialEq)]
struct SubMessage7 {
    x: SubMessage2,
    has_x: bool,
    y: SubMessage3,
    has_y: bool,
}

json_message!(SubMessage7 {
    optional x: Message [has_x],
    optional y: Message [has_y],
});

/// Kopiert `text` in einen NUL-terminierten String-Buffer.
fn fixed_str<const N: usize>(text: &str) -> [u8; N] {
    let mut buf = [0u8; N];
    buf[..text.len()].copy_from_slice(text.as_bytes());
    buf
}

fn encode_to_string<M: Message>(msg: &M) -> String {
    let mut buf = [0u8; 1024];
    let len = pbjson::encode(&mut buf, msg).unwrap();
    String::from_utf8(buf[..len].to_vec()).unwrap()
}

fn sub_message3_hello() -> SubMessage3 {
    SubMessage3 {
        x: fixed_str("Hello"),
        msg: SubMessage2 { x: 1.27, y: -25 },
        has_msg: true,
        opt: TEST_ENUM_OPT2,
    }
}

fn sub_message7_full() -> SubMessage7 {
    SubMessage7 {
        x: SubMessage2 { x: 1.23, y: -12 },
        has_x: true,
        y: sub_message3_hello(),
        has_y: true,
    }
}
