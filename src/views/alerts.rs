// ============================================================================
// ALERTS VIEW - Búsqueda, filtro por level y orden temporal
// ============================================================================
// El resultado se recalcula en cada cambio de input, sin debounce.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{
    append_child, input_value, on_change, on_click, on_input, select_value, set_inner_html,
    ElementBuilder,
};
use crate::state::AppState;
use crate::utils::time;
use crate::viewmodels::alerts_viewmodel::{self, AlertQuery, SortOrder};

/// Renderizar la vista de alertas
pub fn render_alerts(state: &AppState) -> Result<Element, JsValue> {
    log::info!("🎬 [ALERTS] render_alerts()");

    let root = ElementBuilder::new("div")?.class("card").build();

    let header = ElementBuilder::new("div")?.class("card-header").build();
    let title = ElementBuilder::new("h2")?.text("Alerts").build();
    append_child(&header, &title)?;
    let refresh = ElementBuilder::new("button")?
        .id("refreshAlerts")?
        .class("btn btn-outline")
        .text("Refresh")
        .build();
    append_child(&header, &refresh)?;
    append_child(&root, &header)?;

    // Controles
    let controls = ElementBuilder::new("div")?.class("controls").build();

    let search = ElementBuilder::new("input")?
        .id("alertSearch")?
        .class("form-input")
        .attr("type", "search")?
        .attr("placeholder", "Search messages…")?
        .build();
    append_child(&controls, &search)?;

    let level = ElementBuilder::new("select")?
        .id("alertLevel")?
        .class("form-input")
        .build();
    for (value, label) in [("all", "All levels"), ("info", "Info"), ("warn", "Warn")] {
        let option = ElementBuilder::new("option")?
            .attr("value", value)?
            .text(label)
            .build();
        append_child(&level, &option)?;
    }
    append_child(&controls, &level)?;

    let sort = ElementBuilder::new("select")?
        .id("alertSort")?
        .class("form-input")
        .build();
    for (value, label) in [("newest", "Newest first"), ("oldest", "Oldest first")] {
        let option = ElementBuilder::new("option")?
            .attr("value", value)?
            .text(label)
            .build();
        append_child(&sort, &option)?;
    }
    append_child(&controls, &sort)?;
    append_child(&root, &controls)?;

    let msg = ElementBuilder::new("div")?
        .id("alertsMsg")?
        .class("alert hidden")
        .build();
    append_child(&root, &msg)?;

    // Tabla
    let table = ElementBuilder::new("table")?.class("table").build();
    let thead = ElementBuilder::new("thead")?.build();
    let head_row = ElementBuilder::new("tr")?.build();
    for col in ["Time", "Level", "Message"] {
        let th = ElementBuilder::new("th")?.text(col).build();
        append_child(&head_row, &th)?;
    }
    append_child(&thead, &head_row)?;
    append_child(&table, &thead)?;
    let tbody = ElementBuilder::new("tbody")?.id("alertsBody")?.build();
    append_child(&table, &tbody)?;
    append_child(&root, &table)?;

    draw_rows(state, &tbody, &search, &level, &sort)?;

    // Recomputar en cada cambio
    {
        let state = state.clone();
        let tbody = tbody.clone();
        let search_clone = search.clone();
        let level = level.clone();
        let sort = sort.clone();
        on_input(&search, move |_| {
            let _ = draw_rows(&state, &tbody, &search_clone, &level, &sort);
        })?;
    }
    for select in [level.clone(), sort.clone()] {
        let state = state.clone();
        let tbody = tbody.clone();
        let search = search.clone();
        let level = level.clone();
        let sort = sort.clone();
        on_change(&select, move |_| {
            let _ = draw_rows(&state, &tbody, &search, &level, &sort);
        })?;
    }
    {
        let state = state.clone();
        let tbody = tbody.clone();
        let search = search.clone();
        let level = level.clone();
        let sort = sort.clone();
        on_click(&refresh, move |_| {
            let _ = draw_rows(&state, &tbody, &search, &level, &sort);
        })?;
    }

    Ok(root)
}

/// Redibujar el tbody aplicando la query actual
fn draw_rows(
    state: &AppState,
    tbody: &Element,
    search: &Element,
    level: &Element,
    sort: &Element,
) -> Result<(), JsValue> {
    set_inner_html(tbody, "");

    let query = AlertQuery {
        search: input_value(search),
        level: select_value(level),
        sort: SortOrder::parse(&select_value(sort)),
    };

    for alert in alerts_viewmodel::filter_alerts(&state.store.alerts(), &query) {
        let tr = ElementBuilder::new("tr")?.build();

        let time_td = ElementBuilder::new("td")?
            .text(&time::format_dt(&alert.time))
            .build();
        append_child(&tr, &time_td)?;

        let level_td = ElementBuilder::new("td")?.build();
        let badge = ElementBuilder::new("span")?
            .class("badge")
            .text(&alert.level)
            .build();
        append_child(&level_td, &badge)?;
        append_child(&tr, &level_td)?;

        let message_td = ElementBuilder::new("td")?.text(&alert.message).build();
        append_child(&tr, &message_td)?;

        append_child(tbody, &tr)?;
    }

    Ok(())
}
