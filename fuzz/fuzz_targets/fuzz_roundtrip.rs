#![no_main]
use bmpfilter::*;
use libfuzzer_sys::fuzz_target;

const HEADERS_LEN: usize = 54;

fuzz_target!(|data: &[u8]| {
    let limits = Limits {
        max_pixels: Some(1 << 22),
        ..Default::default()
    };
    let Ok(decoded) = DecodeRequest::new(data)
        .with_limits(&limits)
        .decode(enough::Unstoppable)
    else {
        return;
    };

    // Headers and pixel bytes come back unchanged; padding is always
    // rewritten as zero, and trailing bytes are dropped.
    let encoded = encode_bmp(&decoded, enough::Unstoppable).expect("re-encode failed");
    assert_eq!(&encoded[..HEADERS_LEN], &data[..HEADERS_LEN], "headers changed");

    let row_bytes = decoded.width() * 3;
    let stride = row_stride(decoded.width());
    for row in 0..decoded.height() {
        let start = HEADERS_LEN + row * stride;
        let pixels = start..start + row_bytes;
        assert_eq!(&encoded[pixels.clone()], &data[pixels], "row {row} pixels changed");
        assert!(
            encoded[start + row_bytes..start + stride].iter().all(|&b| b == 0),
            "row {row} padding not zero"
        );
    }
    assert_eq!(encoded.len(), HEADERS_LEN + stride * decoded.height());

    let again = decode_bmp(&encoded, enough::Unstoppable).expect("re-encoded data failed to decode");
    assert_eq!(again, decoded);
});
