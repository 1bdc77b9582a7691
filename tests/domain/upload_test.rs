use verbatim::domain::{AudioUpload, MAX_UPLOAD_BYTES};

fn upload_of_size(bytes: usize) -> AudioUpload {
    AudioUpload::new(
        "clip.wav".to_string(),
        "audio/wav".to_string(),
        vec![0u8; bytes],
    )
}

#[test]
fn given_small_file_when_checking_limit_then_within_bounds() {
    let upload = upload_of_size(1024);

    assert_eq!(upload.size_bytes(), 1024);
    assert!(!upload.exceeds_size_limit());
}

#[test]
fn given_file_at_exact_limit_when_checking_then_within_bounds() {
    let upload = upload_of_size(MAX_UPLOAD_BYTES as usize);

    assert!(!upload.exceeds_size_limit());
}

#[test]
fn given_file_one_byte_over_limit_when_checking_then_exceeds() {
    let upload = upload_of_size(MAX_UPLOAD_BYTES as usize + 1);

    assert!(upload.exceeds_size_limit());
}

#[test]
fn given_limit_constant_when_read_then_is_twenty_five_mebibytes() {
    assert_eq!(MAX_UPLOAD_BYTES, 25 * 1024 * 1024);
}
