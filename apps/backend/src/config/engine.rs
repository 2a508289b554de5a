use std::env;

use crate::error::AppError;

pub const DEFAULT_GAME_ID_LEN: usize = 6;
pub const MIN_GAME_ID_LEN: usize = 4;
pub const MAX_GAME_ID_LEN: usize = 16;

/// Runtime knobs for the game service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Fixed seed for the dealing RNG; None draws one from OS entropy.
    pub rng_seed: Option<u64>,
    /// Length of generated game ids.
    pub game_id_len: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rng_seed: None,
            game_id_len: DEFAULT_GAME_ID_LEN,
        }
    }
}

impl EngineConfig {
    /// Read `DOMINO_RNG_SEED` and `DOMINO_GAME_ID_LEN`, falling back to defaults.
    pub fn from_env() -> Result<Self, AppError> {
        let rng_seed = optional_var("DOMINO_RNG_SEED")?
            .map(|raw| {
                raw.parse::<u64>().map_err(|_| {
                    AppError::config(format!("DOMINO_RNG_SEED must be an unsigned integer, got '{raw}'"))
                })
            })
            .transpose()?;

        let game_id_len = match optional_var("DOMINO_GAME_ID_LEN")? {
            None => DEFAULT_GAME_ID_LEN,
            Some(raw) => raw.parse::<usize>().map_err(|_| {
                AppError::config(format!("DOMINO_GAME_ID_LEN must be an integer, got '{raw}'"))
            })?,
        };

        Self::default()
            .with_game_id_len(game_id_len)
            .map(|cfg| cfg.with_rng_seed(rng_seed))
    }

    pub fn with_rng_seed(mut self, seed: Option<u64>) -> Self {
        self.rng_seed = seed;
        self
    }

    pub fn with_game_id_len(mut self, len: usize) -> Result<Self, AppError> {
        if !(MIN_GAME_ID_LEN..=MAX_GAME_ID_LEN).contains(&len) {
            return Err(AppError::config(format!(
                "Game id length must be within {MIN_GAME_ID_LEN}..={MAX_GAME_ID_LEN}, got {len}"
            )));
        }
        self.game_id_len = len;
        Ok(self)
    }
}

/// Unset or empty is None; a non-unicode value is an error.
fn optional_var(name: &str) -> Result<Option<String>, AppError> {
    match env::var(name) {
        Ok(v) if v.trim().is_empty() => Ok(None),
        Ok(v) => Ok(Some(v.trim().to_string())),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(AppError::config(format!("Environment variable '{name}': {e}"))),
    }
}
