// ============================================================================
// DASHBOARD VIEW - Resumen del lot, sistema y alertas recientes
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::state::AppState;
use crate::utils::time;
use crate::viewmodels::dashboard_viewmodel;

/// Renderizar el dashboard
pub fn render_dashboard(state: &AppState) -> Result<Element, JsValue> {
    log::info!("🎬 [DASHBOARD] render_dashboard()");

    let root = ElementBuilder::new("div")?.class("dashboard").build();

    // Saludo con el usuario de la sesión
    let user = state.store.session().map(|s| s.user);
    let display_name = user
        .as_ref()
        .map(|u| {
            if u.name.is_empty() {
                u.email.clone()
            } else {
                u.name.clone()
            }
        })
        .unwrap_or_default();

    let welcome = ElementBuilder::new("div")?.class("card").build();
    let welcome_title = ElementBuilder::new("h2")?
        .text(&format!("Welcome, {}", display_name))
        .build();
    append_child(&welcome, &welcome_title)?;

    // "Last update" en hora local del navegador
    let now_local = String::from(
        js_sys::Date::new_0().to_locale_string("en-US", &JsValue::UNDEFINED),
    );
    let updated = ElementBuilder::new("p")?
        .id("lastUpdated")?
        .class("helper")
        .text(&format!("Last update: {}", now_local))
        .build();
    append_child(&welcome, &updated)?;
    append_child(&root, &welcome)?;

    // Contadores free/occupied del lot actual
    let summary = dashboard_viewmodel::lot_summary(&state.store.lot());
    let stats = ElementBuilder::new("div")?.class("grid stat-grid").build();
    append_child(&stats, &stat_card("statFree", "Free spots", summary.free)?)?;
    append_child(&stats, &stat_card("statOcc", "Occupied", summary.occupied)?)?;
    append_child(&root, &stats)?;

    // Cards de sistema y rover (resumen demo)
    let info_grid = ElementBuilder::new("div")?.class("grid info-grid").build();
    append_child(
        &info_grid,
        &info_card(
            "System",
            "OK",
            &format!("API base: {}", state.store.api_base()),
        )?,
    )?;
    append_child(
        &info_grid,
        &info_card("Rover", "Connected", "Heartbeat < 5s")?,
    )?;
    append_child(&root, &info_grid)?;

    // Las 6 alertas más recientes
    let alerts_card = ElementBuilder::new("div")?.class("card").build();
    let alerts_title = ElementBuilder::new("h3")?.text("Recent alerts").build();
    append_child(&alerts_card, &alerts_title)?;

    let list = ElementBuilder::new("ul")?
        .id("alertList")?
        .class("alert-list")
        .build();
    for alert in dashboard_viewmodel::recent_alerts(&state.store.alerts(), 6) {
        let item = ElementBuilder::new("li")?.build();

        let badge = ElementBuilder::new("span")?
            .class("badge")
            .text(&alert.level.to_uppercase())
            .build();
        append_child(&item, &badge)?;

        item.append_with_str_1(&format!(" {} ", alert.message))?;

        let when = ElementBuilder::new("span")?
            .class("helper")
            .text(&format!("({})", time::format_dt(&alert.time)))
            .build();
        append_child(&item, &when)?;

        append_child(&list, &item)?;
    }
    append_child(&alerts_card, &list)?;
    append_child(&root, &alerts_card)?;

    Ok(root)
}

fn stat_card(id: &str, label: &str, value: usize) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?.class("card stat").build();
    let title = ElementBuilder::new("h3")?.text(label).build();
    append_child(&card, &title)?;
    let value_el = ElementBuilder::new("div")?
        .id(id)?
        .class("stat-value")
        .text(&value.to_string())
        .build();
    append_child(&card, &value_el)?;
    Ok(card)
}

fn info_card(title: &str, status: &str, meta: &str) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?.class("card").build();
    let title_el = ElementBuilder::new("h3")?.text(title).build();
    append_child(&card, &title_el)?;
    let status_el = ElementBuilder::new("div")?
        .class("stat-value")
        .text(status)
        .build();
    append_child(&card, &status_el)?;
    let meta_el = ElementBuilder::new("p")?.class("helper").text(meta).build();
    append_child(&card, &meta_el)?;
    Ok(card)
}
