// ============================================================================
// APP - Aplicación principal
// ============================================================================
// Cada navegación es un render completo: se resuelve la ruta (guard de auth
// incluido), se limpia el root y se monta shell + vista. Los controllers no
// conservan estado entre navegaciones.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, set_inner_html};
use crate::router::{self, Resolved, Route};
use crate::state::AppState;
use crate::views;

/// Aplicación principal
pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    /// Crear nueva aplicación montada sobre el elemento #app
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        Ok(Self {
            state: AppState::new(),
            root,
        })
    }

    /// Renderizar la ruta actual. El guard se evalúa en cada transición:
    /// ruta privada sin sesión => redirect a login (el hashchange del
    /// redirect dispara el siguiente render).
    pub fn render(&mut self) -> Result<(), JsValue> {
        // Fragment vacío: redirect explícito a dashboard, el hashchange
        // resultante dispara el render de verdad
        if router::raw_hash().is_empty() {
            router::go(&Route::Dashboard);
            return Ok(());
        }

        let requested = router::current_route();

        let route = match router::resolve(requested, self.state.store.is_authenticated()) {
            Resolved::Render(route) => route,
            Resolved::Redirect(target) => {
                log::info!("🔒 [APP] Sin sesión, redirigiendo a {}", target.name());
                router::go(&target);
                return Ok(());
            }
        };

        log::info!("🎬 [APP] Render de ruta: {}", route.name());

        // Limpiar contenido anterior y montar el shell
        set_inner_html(&self.root, "");
        let shell = views::render_shell(&self.state, &route)?;

        let view = match &route {
            Route::Login => views::render_login(&self.state)?,
            Route::Register => views::render_register(&self.state)?,
            Route::Dashboard => views::render_dashboard(&self.state)?,
            Route::Lot => views::render_lot(&self.state)?,
            Route::Reservations => views::render_reservations(&self.state)?,
            Route::Rover => views::render_rover()?,
            Route::Alerts => views::render_alerts(&self.state)?,
            Route::Settings => views::render_settings(&self.state)?,
            Route::NotFound(name) => views::render_not_found(name)?,
        };
        append_child(&shell.content, &view)?;
        append_child(&self.root, &shell.root)?;

        Ok(())
    }

    /// Obtener referencia al estado
    pub fn state(&self) -> &AppState {
        &self.state
    }
}
