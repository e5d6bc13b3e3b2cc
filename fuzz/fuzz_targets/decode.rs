#![no_main]
use libfuzzer_sys::fuzz_target;
use pbjson::json_message;

#[derive(Default)]
struct Inner {
    x: f32,
    y: i32,
}

json_message!(Inner {
    singular x: Float,
    singular y: Int32,
});

#[derive(Default)]
struct Target {
    name: [u8; 8],
    inner: Inner,
    has_inner: bool,
    values: [u16; 4],
    values_count: u32,
    items: [Inner; 2],
    items_count: u32,
    level: i8,
    flag: bool,
}

json_message!(Target {
    singular name: String,
    optional inner: Message [has_inner],
    repeated values: UInt32 [values_count],
    repeated items: Message [items_count],
    singular level: Enum,
    singular flag: Bool,
});

fuzz_target!(|data: &[u8]| {
    let mut msg = Target::default();
    if pbjson::decode(data, &mut msg).is_ok() {
        assert!(msg.values_count as usize <= msg.values.len());
        assert!(msg.items_count as usize <= msg.items.len());
    }
});
