//! Game id generation.
//!
//! Game ids are short Crockford Base32 strings players can read aloud and
//! type; length comes from `EngineConfig::game_id_len`.

use rand::Rng;

const CROCKFORD: &[u8] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ"; // no I, L, O, U

/// Generate a game id of `len` characters from `rng`.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use domino_backend::utils::join_code::generate_join_code;
///
/// let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(1);
/// let code = generate_join_code(&mut rng, 6);
/// assert_eq!(code.len(), 6);
/// ```
pub fn generate_join_code<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| CROCKFORD[rng.random_range(0..CROCKFORD.len())] as char)
        .collect()
}

/// Fresh player id. ULIDs sort by creation time, which keeps log lines for
/// one table easy to follow.
pub fn generate_player_id() -> String {
    ulid::Ulid::new().to_string()
}
