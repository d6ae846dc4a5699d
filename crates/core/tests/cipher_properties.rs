//! Property tests for the cipher primitives.

use crack_sim_core::alphabet::ALPHABET;
use crack_sim_core::cipher::{
    shift_decrypt, shift_encrypt, substitution_decrypt, substitution_encrypt, vigenere_decrypt,
    vigenere_encrypt,
};
use proptest::prelude::*;

fn text() -> impl Strategy<Value = String> {
    "[a-z]{0,100}"
}

fn permutation() -> impl Strategy<Value = String> {
    Just(ALPHABET.chars().collect::<Vec<_>>())
        .prop_shuffle()
        .prop_map(|letters| letters.into_iter().collect())
}

proptest! {
    #[test]
    fn shift_round_trip(key in any::<i64>(), plaintext in text()) {
        let ciphertext = shift_encrypt(key, &plaintext).unwrap();
        prop_assert_eq!(ciphertext.len(), plaintext.len());
        prop_assert_eq!(shift_decrypt(key, &ciphertext).unwrap(), plaintext);
    }

    #[test]
    fn shift_key_is_periodic(key in any::<i64>(), plaintext in text()) {
        prop_assert_eq!(
            shift_encrypt(key, &plaintext).unwrap(),
            shift_encrypt(key.rem_euclid(26), &plaintext).unwrap()
        );
    }

    #[test]
    fn substitution_round_trip(key in permutation(), plaintext in text()) {
        let ciphertext = substitution_encrypt(&key, &plaintext).unwrap();
        prop_assert_eq!(substitution_decrypt(&key, &ciphertext).unwrap(), plaintext);
    }

    #[test]
    fn substitution_rejects_wrong_length(key in "[a-z]{0,25}", plaintext in text()) {
        prop_assert!(substitution_encrypt(&key, &plaintext).unwrap_err().is_invalid_key());
    }

    #[test]
    fn vigenere_round_trip(key in "[a-z]{1,100}", plaintext in text()) {
        let ciphertext = vigenere_encrypt(&key, &plaintext).unwrap();
        prop_assert_eq!(ciphertext.len(), plaintext.len());
        prop_assert_eq!(vigenere_decrypt(&key, &ciphertext).unwrap(), plaintext);
    }
}
