#![no_main]
use libfuzzer_sys::fuzz_target;
use pbjson::json_message;

#[derive(Debug, Default, Clone, PartialEq)]
struct Sample {
    id: u64,
    delta: i64,
    label: [u8; 12],
    has_label: bool,
    values: [i32; 6],
    values_count: u32,
}

json_message!(Sample {
    singular id: UInt64,
    singular delta: Int64,
    optional label: String [has_label],
    repeated values: Int32 [values_count],
});

// Baut eine Message aus den Fuzz-Bytes, kodiert und dekodiert sie wieder.
fuzz_target!(|data: &[u8]| {
    if data.len() < 17 {
        return;
    }
    let mut msg = Sample::default();
    msg.id = u64::from_le_bytes(data[0..8].try_into().unwrap());
    msg.delta = i64::from_le_bytes(data[8..16].try_into().unwrap());
    msg.values_count = u32::from(data[16] % 7);
    let count = msg.values_count as usize;
    for (slot, chunk) in msg.values[..count].iter_mut().zip(data[17..].chunks(4)) {
        let mut word = [0u8; 4];
        word[..chunk.len()].copy_from_slice(chunk);
        *slot = i32::from_le_bytes(word);
    }
    // Label: druckbare Zeichen ohne Quote, hoechstens 11 (sonst kein Round-Trip).
    let label: Vec<u8> = data[17..]
        .iter()
        .copied()
        .filter(|b| b.is_ascii_graphic() && *b != b'"')
        .take(11)
        .collect();
    msg.label[..label.len()].copy_from_slice(&label);
    msg.has_label = !label.is_empty();

    let mut buf = [0u8; 512];
    let len = pbjson::encode(&mut buf, &msg).unwrap();
    let mut decoded = Sample::default();
    pbjson::decode(&buf[..len], &mut decoded).unwrap();
    assert_eq!(decoded, msg);
});
