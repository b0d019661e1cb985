// ============================================================================
// SETTINGS VIEW - URL base de la API + limpieza de datos demo
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{
    append_child, input_value, on_click, set_class_name, set_input_value, set_text_content,
    ElementBuilder,
};
use crate::models::Settings;
use crate::state::AppState;
use crate::utils::constants::{DEFAULT_API_BASE, LS_ALERTS, LS_LOT, LS_RESERVATIONS};

/// Renderizar la vista de settings
pub fn render_settings(state: &AppState) -> Result<Element, JsValue> {
    log::info!("🎬 [SETTINGS] render_settings()");

    let root = ElementBuilder::new("div")?.class("card").build();

    let title = ElementBuilder::new("h2")?.text("Settings").build();
    append_child(&root, &title)?;

    let msg = ElementBuilder::new("div")?
        .id("settingsMsg")?
        .class("alert hidden")
        .build();
    append_child(&root, &msg)?;

    // API base
    let group = ElementBuilder::new("div")?.class("form-group").build();
    let label = ElementBuilder::new("label")?
        .attr("for", "apiBase")?
        .text("API base URL")
        .build();
    append_child(&group, &label)?;
    let input = ElementBuilder::new("input")?
        .id("apiBase")?
        .class("form-input")
        .attr("type", "url")?
        .build();
    let stored = state.store.settings();
    let prefill = if stored.api_base.trim().is_empty() {
        DEFAULT_API_BASE.to_string()
    } else {
        stored.api_base
    };
    set_input_value(&input, &prefill);
    append_child(&group, &input)?;
    append_child(&root, &group)?;

    let save = ElementBuilder::new("button")?
        .id("saveSettings")?
        .class("btn btn-primary")
        .text("Save")
        .build();
    {
        let state = state.clone();
        let input = input.clone();
        let msg = msg.clone();
        on_click(&save, move |_| {
            // trim; vacío => se persiste el default, nunca un string vacío
            let settings = Settings::normalized(&input_value(&input));
            set_input_value(&input, &settings.api_base);
            state.store.set_settings(&settings);
            log::info!("💾 [SETTINGS] API base guardada: {}", settings.api_base);

            set_class_name(&msg, "alert success");
            set_text_content(&msg, "Saved.");
            let msg = msg.clone();
            Timeout::new(1200, move || {
                set_class_name(&msg, "alert hidden");
                set_text_content(&msg, "");
            })
            .forget();
        })?;
    }
    append_child(&root, &save)?;

    // Zona destructiva: limpiar datos demo
    let danger = ElementBuilder::new("div")?.class("card danger-zone").build();
    let danger_title = ElementBuilder::new("h3")?.text("Demo data").build();
    append_child(&danger, &danger_title)?;
    let clear = ElementBuilder::new("button")?
        .id("clearData")?
        .class("btn btn-outline")
        .text("Clear all local demo data")
        .build();
    {
        let state = state.clone();
        let msg = msg.clone();
        on_click(&clear, move |_| {
            state.store.clear(LS_ALERTS);
            state.store.clear(LS_LOT);
            state.store.clear(LS_RESERVATIONS);
            log::info!("🗑️ [SETTINGS] Datos demo eliminados");
            set_class_name(&msg, "alert");
            set_text_content(&msg, "Cleared demo data. It will re-seed on next start.");
        })?;
    }
    append_child(&danger, &clear)?;
    append_child(&root, &danger)?;

    Ok(root)
}
