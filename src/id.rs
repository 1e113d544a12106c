//! Short random identifiers for new records.

use rand::Rng;

/// Length of generated ids.
pub const ID_LENGTH: usize = 8;

/// URL-safe alphabet (64 symbols), so every character carries 6 bits.
const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Generate a fresh [`ID_LENGTH`]-character id.
///
/// Collisions with existing ids are not checked; with 48 bits of entropy
/// they are negligible for the collection sizes this service handles.
pub fn generate_id() -> String {
    generate_id_with_len(ID_LENGTH)
}

/// Generate an id of arbitrary length from the same alphabet.
pub fn generate_id_with_len(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}
