use bytes::Bytes;
use strdecode::{
    ByteRegion, ByteSource, Charset, StorageKind, StringDecoder,
    buffer::{CompositeBuffer, DirectBuffer, HeapBuffer},
};

// ── helpers ──────────────────────────────────────────────────────────────────

/// The same payload behind every storage kind: off-heap, heap at array
/// offset 1 (the payload is padded on both sides), and 3-byte chunks.
fn all_storages(payload: &[u8]) -> (DirectBuffer, HeapBuffer, CompositeBuffer) {
    let direct = DirectBuffer::copy_from_slice(payload).expect("allocate");

    let mut padded = Vec::with_capacity(payload.len() + 2);
    padded.push(0xEE);
    padded.extend_from_slice(payload);
    padded.push(0xEE);
    let heap = HeapBuffer::wrap(padded, 1, payload.len()).expect("wrap");

    let composite = CompositeBuffer::from_slice_chunked(payload, 3);
    (direct, heap, composite)
}

fn decode_full<S: ByteSource>(decoder: &StringDecoder, source: &S, charset: Charset) -> String {
    let region = ByteRegion::new(source, 0, source.capacity()).expect("in bounds");
    decoder.decode(region, charset).expect("decode")
}

fn mixed_payload() -> Vec<u8> {
    let mut payload: Vec<u8> = b"plain ascii, then ".to_vec();
    // surrogate pair on an even offset, then high and control bytes
    payload.extend([0xD8, 0x3D, 0xDE, 0x00, 0xC0, 0xFF, 0x7F, 0x80, 0x00, 0x41]);
    payload.extend(std::iter::repeat_n(b'a', 64));
    payload
}

// ── tests ────────────────────────────────────────────────────────────────────

#[test]
fn storage_kinds_are_reported() {
    let (direct, heap, composite) = all_storages(b"abcdef");
    assert_eq!(direct.storage_kind(), StorageKind::Direct);
    assert_eq!(heap.storage_kind(), StorageKind::Heap);
    assert_eq!(composite.storage_kind(), StorageKind::Composite);
}

#[test]
fn in_place_and_copied_paths_agree_for_every_charset() {
    let payload = mixed_payload();
    assert_eq!(payload.len() % 2, 0);
    let (direct, heap, composite) = all_storages(&payload);
    let decoder = StringDecoder::new();

    for charset in Charset::ALL {
        let from_direct = decode_full(&decoder, &direct, charset);
        let from_heap = decode_full(&decoder, &heap, charset);
        let from_composite = decode_full(&decoder, &composite, charset);
        assert_eq!(from_direct, from_heap, "{charset}");
        assert_eq!(from_direct, from_composite, "{charset}");
    }
}

#[test]
fn heap_offset_padding_never_leaks_into_text() {
    let (_, heap, _) = all_storages(&[b'a'; 64]);
    let text = decode_full(&StringDecoder::new(), &heap, Charset::Iso8859_1);
    assert_eq!(text, "a".repeat(64));
}

#[test]
fn copied_path_above_scratch_limit_agrees() {
    let payload = mixed_payload();
    let (direct, _, composite) = all_storages(&payload);
    let small_scratch = StringDecoder::builder().scratch_limit(4).build();
    let no_scratch = StringDecoder::builder().scratch_limit(0).build();

    for charset in Charset::ALL {
        let expected = decode_full(&StringDecoder::new(), &direct, charset);
        assert_eq!(decode_full(&small_scratch, &composite, charset), expected);
        assert_eq!(decode_full(&no_scratch, &composite, charset), expected);
    }
}

#[test]
fn scratch_reuse_does_not_leak_previous_contents() {
    let decoder = StringDecoder::new();
    let long = CompositeBuffer::from_slice_chunked(b"zzzzzzzzzzzzzzzz", 5);
    let short = CompositeBuffer::from_slice_chunked(b"abc", 2);

    assert_eq!(decode_full(&decoder, &long, Charset::UsAscii), "z".repeat(16));
    assert_eq!(decode_full(&decoder, &short, Charset::UsAscii), "abc");
}

#[test]
fn region_inside_one_composite_chunk() {
    let composite = CompositeBuffer::new([Bytes::from_static(b"abcd"), Bytes::from_static(b"efgh")]);
    let region = ByteRegion::new(&composite, 4, 4).expect("in bounds");
    assert!(region.as_contiguous().is_some());
    assert_eq!(
        StringDecoder::new().decode(region, Charset::UsAscii),
        Ok("efgh".to_string())
    );
}

#[test]
fn utf16_odd_length_fails_on_every_storage() {
    let (direct, heap, composite) = all_storages(&[0x61; 7]);
    let decoder = StringDecoder::new();
    for source in [&direct as &dyn ByteSource, &heap, &composite] {
        let region = ByteRegion::new(source, 0, 7).expect("in bounds");
        assert!(decoder.decode(region, Charset::Utf16).is_err());
    }
}
