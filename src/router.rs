// ============================================================================
// ROUTER - Hash-router (#/ruta)
// ============================================================================
// Máquina de estados sobre un conjunto finito de rutas nombradas más un
// estado implícito "not found". El trigger es el cambio del fragment
// (hashchange o carga inicial). El guard de autenticación se evalúa en CADA
// transición, nunca se cachea. No hay history stack propio: back/forward
// son los del propio fragment.
// ============================================================================

/// Rutas de la consola. NotFound lleva el nombre no reconocido para mostrarlo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Dashboard,
    Lot,
    Reservations,
    Rover,
    Alerts,
    Settings,
    NotFound(String),
}

/// Resultado del guard de autenticación
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    /// Renderizar la ruta pedida
    Render(Route),
    /// Redirigir (la ruta pedida queda descartada)
    Redirect(Route),
}

impl Route {
    /// Parsear un fragment a ruta: quita el marcador "#/" inicial y el
    /// query-string final. Fragment vacío = dashboard.
    pub fn parse(hash: &str) -> Route {
        let hash = if hash.is_empty() { "#/dashboard" } else { hash };
        let name = hash.trim_start_matches("#/");
        let name = name.split('?').next().unwrap_or("");

        match name {
            "" | "dashboard" => Route::Dashboard,
            "login" => Route::Login,
            "register" => Route::Register,
            "lot" => Route::Lot,
            "reservations" => Route::Reservations,
            "rover" => Route::Rover,
            "alerts" => Route::Alerts,
            "settings" => Route::Settings,
            other => Route::NotFound(other.to_string()),
        }
    }

    /// Nombre de la ruta tal como aparece en el fragment
    pub fn name(&self) -> &str {
        match self {
            Route::Login => "login",
            Route::Register => "register",
            Route::Dashboard => "dashboard",
            Route::Lot => "lot",
            Route::Reservations => "reservations",
            Route::Rover => "rover",
            Route::Alerts => "alerts",
            Route::Settings => "settings",
            Route::NotFound(name) => name,
        }
    }

    /// Fragment completo ("#/lot")
    pub fn hash(&self) -> String {
        format!("#/{}", self.name())
    }

    /// Rutas accesibles sin sesión
    pub fn is_public(&self) -> bool {
        matches!(self, Route::Login | Route::Register)
    }
}

/// Guard de autenticación: toda ruta no pública sin sesión válida fuerza
/// redirect a login, pisando la ruta pedida.
pub fn resolve(route: Route, authenticated: bool) -> Resolved {
    if !route.is_public() && !authenticated {
        Resolved::Redirect(Route::Login)
    } else {
        Resolved::Render(route)
    }
}

/// Fragment crudo de location.hash (string vacío fuera del navegador)
pub fn raw_hash() -> String {
    web_sys::window()
        .map(|w| w.location())
        .and_then(|loc| loc.hash().ok())
        .unwrap_or_default()
}

/// Ruta actual según location.hash
pub fn current_route() -> Route {
    Route::parse(&raw_hash())
}

/// Navegar: setter simple del fragment, el hashchange dispara el render
pub fn go(route: &Route) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_hash(&route.hash()) {
            log::error!("❌ [ROUTER] Error navegando a {}: {:?}", route.name(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_marker_and_query_are_stripped() {
        assert_eq!(Route::parse("#/lot"), Route::Lot);
        assert_eq!(Route::parse("#/alerts?level=warn"), Route::Alerts);
        assert_eq!(Route::parse("#/login"), Route::Login);
    }

    #[test]
    fn empty_fragment_goes_to_dashboard() {
        assert_eq!(Route::parse(""), Route::Dashboard);
        assert_eq!(Route::parse("#/"), Route::Dashboard);
    }

    #[test]
    fn unknown_route_carries_its_exact_name() {
        match Route::parse("#/garage?x=1") {
            Route::NotFound(name) => assert_eq!(name, "garage"),
            other => panic!("esperaba NotFound, llegó {:?}", other),
        }
    }

    #[test]
    fn unauthenticated_private_routes_redirect_to_login() {
        for route in [
            Route::Dashboard,
            Route::Lot,
            Route::Reservations,
            Route::Rover,
            Route::Alerts,
            Route::Settings,
            Route::NotFound("garage".to_string()),
        ] {
            assert_eq!(resolve(route, false), Resolved::Redirect(Route::Login));
        }
    }

    #[test]
    fn public_routes_never_redirect() {
        assert_eq!(
            resolve(Route::Login, false),
            Resolved::Render(Route::Login)
        );
        assert_eq!(
            resolve(Route::Register, false),
            Resolved::Render(Route::Register)
        );
    }

    #[test]
    fn authenticated_routes_render_as_requested() {
        assert_eq!(resolve(Route::Lot, true), Resolved::Render(Route::Lot));
        let nf = Route::NotFound("garage".to_string());
        assert_eq!(resolve(nf.clone(), true), Resolved::Render(nf));
    }
}
