use strdecode::{
    ByteRegion, Charset, StringDecoder,
    buffer::{CompositeBuffer, DirectBuffer, HeapBuffer},
};
use tracing_test::traced_test;

#[test]
#[traced_test]
fn in_place_decode_takes_no_copy() {
    let buffer = HeapBuffer::wrap(vec![0x61; 66], 1, 64).expect("wrap");
    let region = ByteRegion::new(&buffer, 0, 64).expect("in bounds");
    StringDecoder::new()
        .decode(region, Charset::UsAscii)
        .expect("decode");
    assert!(!logs_contain("region has no contiguous view"));
}

#[test]
#[traced_test]
fn split_region_goes_through_scratch() {
    let buffer = CompositeBuffer::from_slice_chunked(&[0x61; 64], 8);
    let region = ByteRegion::new(&buffer, 0, 64).expect("in bounds");
    StringDecoder::new()
        .decode(region, Charset::UsAscii)
        .expect("decode");
    assert!(logs_contain("region has no contiguous view"));
    assert!(logs_contain("copied region into thread-local scratch"));
}

#[test]
#[traced_test]
fn large_split_region_gets_fresh_array() {
    let buffer = CompositeBuffer::from_slice_chunked(&[0x61; 64], 8);
    let region = ByteRegion::new(&buffer, 0, 64).expect("in bounds");
    StringDecoder::builder()
        .scratch_limit(32)
        .build()
        .decode(region, Charset::Iso8859_1)
        .expect("decode");
    assert!(logs_contain("copied region into fresh array"));
}

#[test]
#[traced_test]
fn failures_are_logged() {
    let buffer = DirectBuffer::copy_from_slice(&[0x61; 3]).expect("allocate");
    let region = ByteRegion::new(&buffer, 0, 3).expect("in bounds");
    assert!(StringDecoder::new().decode(region, Charset::Utf16).is_err());
    assert!(logs_contain("decode failed"));
    buffer.release();
    assert!(logs_contain("released direct buffer"));
}
