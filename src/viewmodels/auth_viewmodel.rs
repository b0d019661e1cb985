// ============================================================================
// AUTH VIEWMODEL - Validación de login/registro
// ============================================================================
// Validación local, sin backend: se muestra la primera violación por campo.
// En modo demo cualquier par de credenciales no vacías es válido (esto es un
// stand-in del endpoint real, no una política de seguridad).
// ============================================================================

/// Errores por campo del formulario de login
#[derive(Debug, Default, PartialEq, Eq)]
pub struct LoginValidation {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl LoginValidation {
    pub fn ok(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

/// Validar login: email y password no vacíos (el email llega ya trimmed)
pub fn validate_login(email: &str, password: &str) -> LoginValidation {
    LoginValidation {
        email: if email.is_empty() {
            Some("Email required.")
        } else {
            None
        },
        password: if password.is_empty() {
            Some("Password required.")
        } else {
            None
        },
    }
}

/// Errores por campo del formulario de registro
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RegisterValidation {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl RegisterValidation {
    pub fn ok(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.password.is_none()
    }
}

/// Validar registro: nombre y email no vacíos, password de 8+ caracteres
pub fn validate_register(name: &str, email: &str, password: &str) -> RegisterValidation {
    RegisterValidation {
        name: if name.is_empty() {
            Some("Name required.")
        } else {
            None
        },
        email: if email.is_empty() {
            Some("Email required.")
        } else {
            None
        },
        password: if password.len() >= 8 {
            None
        } else {
            Some("Password must be 8+ chars.")
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_requires_both_fields() {
        let v = validate_login("", "");
        assert_eq!(v.email, Some("Email required."));
        assert_eq!(v.password, Some("Password required."));
        assert!(!v.ok());
    }

    #[test]
    fn any_non_empty_pair_passes_login() {
        assert!(validate_login("x@y.z", "1").ok());
        assert!(validate_login("whatever", "pw").ok());
    }

    #[test]
    fn register_enforces_password_length() {
        let v = validate_register("Ana", "ana@example.com", "short");
        assert!(v.name.is_none());
        assert!(v.email.is_none());
        assert_eq!(v.password, Some("Password must be 8+ chars."));

        assert!(validate_register("Ana", "ana@example.com", "12345678").ok());
    }
}
