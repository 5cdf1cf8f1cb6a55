use super::*;
use crate::block::testutil::{OneWayCipher, RotorCipher};
use crate::error::Error;

fn keyed_ctr(encryption: bool, iv: &[u8]) -> Ctr<RotorCipher> {
    let mut mode = Ctr::new(RotorCipher::new());
    mode.initialize(encryption, &[0x42u8; 16], iv).unwrap();
    mode
}

#[test]
fn test_ctr_round_trip_with_vector_reset() {
    let iv: [u8; 16] = core::array::from_fn(|i| i as u8);
    let plaintext: [u8; 32] = core::array::from_fn(|i| (i * 7 + 3) as u8);
    let mut mode = keyed_ctr(true, &iv);

    let mut ciphertext = [0u8; 32];
    mode.transform(&plaintext[..16], &mut ciphertext[..16])
        .unwrap();
    mode.transform(&plaintext[16..], &mut ciphertext[16..])
        .unwrap();
    assert_ne!(&ciphertext[..], &plaintext[..]);

    // Rewind the register on the same keyed instance and run the
    // ciphertext back through.
    mode.set_vector(&iv).unwrap();
    let mut recovered = [0u8; 32];
    mode.transform(&ciphertext[..16], &mut recovered[..16])
        .unwrap();
    mode.transform(&ciphertext[16..], &mut recovered[16..])
        .unwrap();
    assert_eq!(&recovered[..], &plaintext[..]);
}

#[test]
fn test_ctr_both_directions_produce_identical_output() {
    let iv = [0xA5u8; 16];
    let input: [u8; 16] = core::array::from_fn(|i| (i * 13) as u8);

    let mut enc = keyed_ctr(true, &iv);
    let mut dec = keyed_ctr(false, &iv);
    assert_eq!(enc.is_encryption(), Some(true));
    assert_eq!(dec.is_encryption(), Some(false));

    let mut out_enc = [0u8; 16];
    let mut out_dec = [0u8; 16];
    enc.transform(&input, &mut out_enc).unwrap();
    dec.transform(&input, &mut out_dec).unwrap();
    assert_eq!(out_enc, out_dec);
}

#[test]
fn test_ctr_keystream_advances_between_blocks() {
    let mut mode = keyed_ctr(true, &[0u8; 16]);
    let zero = [0u8; 16];
    let mut first = [0u8; 16];
    let mut second = [0u8; 16];
    mode.transform(&zero, &mut first).unwrap();
    mode.transform(&zero, &mut second).unwrap();
    assert_ne!(first, second);
}

#[test]
fn test_ctr_vector_increments_big_endian() {
    let mut iv = [0u8; 16];
    iv[14] = 0x00;
    iv[15] = 0xFF;
    let mut mode = keyed_ctr(true, &iv);
    assert_eq!(mode.vector(), &iv[..]);

    let mut out = [0u8; 16];
    mode.transform(&[0u8; 16], &mut out).unwrap();

    // The carry out of the low byte must propagate.
    let mut expected = [0u8; 16];
    expected[14] = 0x01;
    expected[15] = 0x00;
    assert_eq!(mode.vector(), &expected[..]);
}

#[test]
fn test_ctr_vector_wraps_to_zero() {
    let mut mode = keyed_ctr(true, &[0xFFu8; 16]);
    let mut out = [0u8; 16];
    mode.transform(&[0u8; 16], &mut out).unwrap();
    assert_eq!(mode.vector(), &[0u8; 16][..]);

    // The stream keeps running from the wrapped register.
    mode.transform(&[0u8; 16], &mut out).unwrap();
    let mut expected = [0u8; 16];
    expected[15] = 0x01;
    assert_eq!(mode.vector(), &expected[..]);
}

#[test]
fn test_ctr_transform_before_initialize() {
    let mut mode = Ctr::new(RotorCipher::new());
    assert_eq!(mode.is_encryption(), None);
    assert!(mode.vector().is_empty());

    let input = [0u8; 16];
    let mut output = [0u8; 16];
    let err = mode.transform(&input, &mut output).unwrap_err();
    assert!(matches!(err, Error::State { .. }));
}

#[test]
fn test_ctr_initialize_rejects_bad_parameters() {
    let mut mode = Ctr::new(RotorCipher::new());

    let err = mode.initialize(true, &[0x42u8; 16], &[0u8; 15]).unwrap_err();
    assert!(matches!(err, Error::Parameter { .. }));

    let err = mode.initialize(true, &[0x42u8; 8], &[0u8; 16]).unwrap_err();
    assert!(matches!(err, Error::Parameter { .. }));

    // A failed initialization leaves the mode unusable.
    let mut output = [0u8; 16];
    let err = mode.transform(&[0u8; 16], &mut output).unwrap_err();
    assert!(matches!(err, Error::State { .. }));
}

#[test]
fn test_ctr_set_vector_rejects_bad_length() {
    let mut mode = keyed_ctr(true, &[0u8; 16]);
    assert!(matches!(
        mode.set_vector(&[0u8; 15]),
        Err(Error::Parameter { .. })
    ));
    assert!(matches!(
        mode.set_vector(&[0u8; 17]),
        Err(Error::Parameter { .. })
    ));
    // The register keeps its previous value after a rejected install.
    assert_eq!(mode.vector(), &[0u8; 16][..]);
}

#[test]
fn test_ctr_transform_rejects_partial_blocks() {
    let mut mode = keyed_ctr(true, &[0u8; 16]);
    let vector_before = mode.vector().to_vec();

    let mut output = [0u8; 16];
    let err = mode.transform(&[0u8; 15], &mut output).unwrap_err();
    assert!(matches!(err, Error::Length { .. }));

    let mut short_output = [0u8; 15];
    let err = mode.transform(&[0u8; 16], &mut short_output).unwrap_err();
    assert!(matches!(err, Error::Length { .. }));

    // Rejected calls must not advance the register.
    assert_eq!(mode.vector(), &vector_before[..]);
}

#[test]
fn test_ctr_transform_at_offsets() {
    let iv = [0x11u8; 16];
    let input: [u8; 40] = core::array::from_fn(|i| i as u8);
    let mut reference = keyed_ctr(true, &iv);
    let mut expected = [0u8; 16];
    reference.transform(&input[3..19], &mut expected).unwrap();

    let mut mode = keyed_ctr(true, &iv);
    let mut output = [0xEEu8; 40];
    let written = mode.transform_at(&input, 3, &mut output, 5).unwrap();
    assert_eq!(written, 16);
    assert_eq!(&output[5..21], &expected[..]);
    // Bytes outside the window stay untouched.
    assert!(output[..5].iter().all(|&b| b == 0xEE));
    assert!(output[21..].iter().all(|&b| b == 0xEE));
}

#[test]
fn test_ctr_transform_at_rejects_short_windows() {
    let mut mode = keyed_ctr(true, &[0u8; 16]);
    let input = [0u8; 40];
    let mut output = [0u8; 40];

    let err = mode.transform_at(&input, 30, &mut output, 0).unwrap_err();
    assert!(matches!(err, Error::Length { .. }));

    let err = mode.transform_at(&input, 0, &mut output, 25).unwrap_err();
    assert!(matches!(err, Error::Length { .. }));
}

#[test]
fn test_ctr_reporting() {
    let mode = Ctr::new(RotorCipher::new());
    assert_eq!(mode.block_size(), 16);
    assert_eq!(mode.name(), "ROTOR-128/CTR");
}

#[test]
fn test_ctr_runs_encrypt_only_cipher() {
    // Both directions only ever call encrypt_block, so a cipher without
    // block decryption still works under this mode.
    let iv = [0x3Cu8; 16];
    let plaintext: [u8; 16] = core::array::from_fn(|i| (i * 5 + 1) as u8);

    let mut enc = Ctr::new(OneWayCipher::new());
    enc.initialize(true, &[0x42u8; 16], &iv).unwrap();
    let mut ciphertext = [0u8; 16];
    enc.transform(&plaintext, &mut ciphertext).unwrap();

    let mut dec = Ctr::new(OneWayCipher::new());
    dec.initialize(false, &[0x42u8; 16], &iv).unwrap();
    let mut recovered = [0u8; 16];
    dec.transform(&ciphertext, &mut recovered).unwrap();
    assert_eq!(recovered, plaintext);
}
