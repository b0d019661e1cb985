// ============================================================================
// U-PARKING CONSOLE - FRONTEND MVVM (RUST PURO)
// ============================================================================
// Arquitectura:
// - Views: funciones que renderizan DOM (sin lógica)
// - ViewModels: lógica de vista pura (testeable sin navegador)
// - Services: persistencia (localStorage) + comunicación API
// - Router: hash-router (#/ruta) con guard de autenticación
// - Models: estructuras serde compartidas con el storage / backend
// ============================================================================

pub mod app;
pub mod dom;
pub mod models;
pub mod router;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;
pub mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::app::App;
use crate::services::demo_data::seed_demo_data;

// Instancia global de App (un solo hilo de UI)
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Panic hook para mejor debugging
    console_error_panic_hook::set_once();

    // Logging
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🚀 U-Parking Console - Rust Puro + MVVM");

    let mut app = App::new()?;

    // Sembrar datos demo (idempotente) antes del primer render
    seed_demo_data(&app.state().store);

    // Render inicial (equivale al listener de load del original)
    app.render()?;

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    // Listener global de hashchange: cada cambio de fragment re-renderiza.
    // Solo se registra UNA VEZ aquí, por lo que forget() es seguro.
    if let Some(win) = web_sys::window() {
        let closure = Closure::wrap(Box::new(move |_e: web_sys::Event| {
            rerender_app();
        }) as Box<dyn FnMut(web_sys::Event)>);

        win.add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}

/// Re-renderizar la app (render completo de la ruta actual)
pub fn rerender_app() {
    APP.with(|cell| {
        if let Some(ref mut app) = *cell.borrow_mut() {
            if let Err(e) = app.render() {
                log::error!("❌ [APP] Error re-renderizando: {:?}", e);
            }
        } else {
            log::warn!("⚠️ [APP] App no está inicializada");
        }
    });
}
