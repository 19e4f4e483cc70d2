//! Rotation cipher and its statistical decoder.

/// Ordered symbol set a rotation operates on.
pub mod alphabet;

/// Character rotation over an `Alphabet`.
pub mod rotation_cipher;

/// Ranks every rotation of a ciphertext with a letter-bigram model.
pub mod decoder;
