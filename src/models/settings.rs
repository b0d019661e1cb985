use serde::{Deserialize, Serialize};

use crate::utils::constants::DEFAULT_API_BASE;

/// Ajustes editables por el usuario. Solo hay uno: la URL base de la API.
/// El nombre de campo en JSON ("apiBase") viene del deploy original.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Settings {
    #[serde(rename = "apiBase", default)]
    pub api_base: String,
}

impl Settings {
    /// Base efectiva: valor guardado o el default, sin slash final
    pub fn effective_api_base(&self) -> String {
        let base = if self.api_base.trim().is_empty() {
            DEFAULT_API_BASE
        } else {
            self.api_base.trim()
        };
        base.trim_end_matches('/').to_string()
    }

    /// Normalizar el value del input de settings antes de persistir:
    /// trim, y si queda vacío se guarda el default (nunca un string vacío).
    pub fn normalized(input: &str) -> Self {
        let trimmed = input.trim();
        let api_base = if trimmed.is_empty() {
            DEFAULT_API_BASE.to_string()
        } else {
            trimmed.to_string()
        };
        Self { api_base }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_persists_the_default() {
        let s = Settings::normalized("   ");
        assert_eq!(s.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn trailing_slash_is_stripped_from_effective_base() {
        let s = Settings {
            api_base: "https://api.uparking.example/".to_string(),
        };
        assert_eq!(s.effective_api_base(), "https://api.uparking.example");
    }

    #[test]
    fn absent_value_falls_back_to_default() {
        let s = Settings::default();
        assert_eq!(s.effective_api_base(), DEFAULT_API_BASE);
    }
}
