use proptest::prelude::*;
use rs_decipher_core::RotationCipher;

proptest! {
	#[test]
	fn rotations_compose(text in "[a-zA-Z ,.!]{0,40}", a in 0usize..60, b in 0usize..60) {
		let cipher = RotationCipher::default();
		let twice = cipher.encode(&cipher.encode(&text, a), b);
		prop_assert_eq!(twice, cipher.encode(&text, (a + b) % 26));
	}

	#[test]
	fn zero_shift_lowercases(text in "\\PC{0,40}") {
		let cipher = RotationCipher::default();
		prop_assert_eq!(cipher.encode(&text, 0), text.to_lowercase());
		prop_assert_eq!(cipher.encode(&text, 26), cipher.encode(&text, 0));
	}

	#[test]
	fn decode_inverts_encode(text in "[a-z ]{0,40}", shift in 0usize..100) {
		let cipher = RotationCipher::default();
		prop_assert_eq!(cipher.decode(&cipher.encode(&text, shift), shift), text);
	}

	#[test]
	fn non_letters_pass_through(text in "[0-9 ,.!?]{0,20}", shift in 0usize..26) {
		let cipher = RotationCipher::default();
		prop_assert_eq!(cipher.encode(&text, shift), text);
	}
}
