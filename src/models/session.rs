use serde::{Deserialize, Serialize};

// ============================================================================
// SESIÓN - Sesión de usuario autenticado
// ============================================================================

/// Sesión persistida en localStorage. Su ausencia = no autenticado.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    /// Token bearer para la API (en modo demo: "demo-token")
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub email: String,
    pub name: String,
}

impl Session {
    /// Sesión de modo demo: sin backend, token fijo.
    /// El nombre por defecto es la parte local del email.
    pub fn demo(email: &str, name: Option<&str>) -> Self {
        let name = match name {
            Some(n) => n.to_string(),
            None => email.split('@').next().unwrap_or(email).to_string(),
        };
        Self {
            token: "demo-token".to_string(),
            user: User {
                email: email.to_string(),
                name,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_session_derives_name_from_email() {
        let s = Session::demo("student@tamiu.edu", None);
        assert_eq!(s.token, "demo-token");
        assert_eq!(s.user.name, "student");
        assert_eq!(s.user.email, "student@tamiu.edu");
    }

    #[test]
    fn demo_session_keeps_explicit_name() {
        let s = Session::demo("ana@example.com", Some("Ana García"));
        assert_eq!(s.user.name, "Ana García");
    }
}
