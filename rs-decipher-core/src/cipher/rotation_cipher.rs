use super::alphabet::Alphabet;

/// Rotates characters by a fixed offset over an `Alphabet`.
///
/// Characters outside the alphabet (spaces, punctuation) pass through
/// unchanged. Shifts are taken modulo the alphabet length, so rotations form
/// a group: `encode(encode(t, a), b) == encode(t, a + b)`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RotationCipher {
	alphabet: Alphabet,
}

impl RotationCipher {
	pub fn new(alphabet: Alphabet) -> Self {
		Self { alphabet }
	}

	pub fn alphabet(&self) -> &Alphabet {
		&self.alphabet
	}

	/// Maps `c` to the symbol `shift` positions further in the alphabet.
	pub fn rotate_char(&self, c: char, shift: usize) -> char {
		match self.alphabet.index_of(c) {
			Some(index) => {
				let len = self.alphabet.len();
				self.alphabet.symbols()[(index + shift % len) % len]
			}
			None => c,
		}
	}

	/// Lower-cases `text` and rotates every character by `shift`.
	pub fn encode(&self, text: &str, shift: usize) -> String {
		text.to_lowercase().chars().map(|c| self.rotate_char(c, shift)).collect()
	}

	/// Inverse of `encode` for the same shift.
	pub fn decode(&self, text: &str, shift: usize) -> String {
		let len = self.alphabet.len();
		self.encode(text, len - shift % len)
	}

	/// Every rotation of `text`, indexed by shift (`0..alphabet.len()`).
	pub fn rotations(&self, text: &str) -> Vec<String> {
		(0..self.alphabet.len()).map(|shift| self.encode(text, shift)).collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn rotate_char() {
		let cipher = RotationCipher::default();
		assert_eq!(cipher.rotate_char('a', 0), 'a');
		assert_eq!(cipher.rotate_char('a', 1), 'b');
		assert_eq!(cipher.rotate_char('a', 5), 'f');
		assert_eq!(cipher.rotate_char('a', 25), 'z');
		assert_eq!(cipher.rotate_char('a', 26), 'a');
		assert_eq!(cipher.rotate_char('z', 1), 'a');
		assert_eq!(cipher.rotate_char('!', 3), '!');
	}

	#[test]
	fn encode() {
		let cipher = RotationCipher::default();
		assert_eq!(cipher.encode("abcd", 0), "abcd");
		assert_eq!(cipher.encode("abcd", 1), "bcde");
		assert_eq!(cipher.encode("abcd", 5), "fghi");
		assert_eq!(cipher.encode("abcd", 25), "zabc");
		assert_eq!(cipher.encode("abcd", 26), "abcd");
	}

	#[test]
	fn encode_special_chars() {
		let cipher = RotationCipher::default();
		assert_eq!(cipher.encode("ab cd", 1), "bc de");
		assert_eq!(cipher.encode("ab cd!", 1), "bc de!");
		assert_eq!(cipher.encode("Ab Cd", 1), "bc de");
	}

	#[test]
	fn decode_inverts_encode() {
		let cipher = RotationCipher::default();
		let encoded = cipher.encode("the quick brown fox", 11);
		assert_eq!(cipher.decode(&encoded, 11), "the quick brown fox");
		assert_eq!(cipher.decode("abc", 0), "abc");
	}

	#[test]
	fn rotations_are_indexed_by_shift() {
		let cipher = RotationCipher::default();
		let rotations = cipher.rotations("az");
		assert_eq!(rotations.len(), 26);
		assert_eq!(rotations[0], "az");
		assert_eq!(rotations[1], "ba");
		assert_eq!(rotations[25], "zy");
	}

	#[test]
	fn custom_alphabet() {
		let cipher = RotationCipher::new(Alphabet::new("xyz".chars()).unwrap());
		assert_eq!(cipher.encode("xyza", 1), "yzxa");
		assert_eq!(cipher.rotations("x").len(), 3);
	}
}
