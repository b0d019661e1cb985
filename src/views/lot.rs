// ============================================================================
// LOT VIEW - Mapa de plazas con filtro y toggle de estado
// ============================================================================
// El click sobre una plaza cicla su estado y escribe al store en el acto
// (optimista, síncrono, sin round-trip de confirmación), y se redibuja
// solo el grid.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{
    append_child, on_change, on_click, select_value, set_inner_html, ElementBuilder,
};
use crate::state::AppState;
use crate::viewmodels::lot_viewmodel::{self, LotFilter};

/// Renderizar el mapa del lot
pub fn render_lot(state: &AppState) -> Result<Element, JsValue> {
    log::info!("🎬 [LOT] render_lot()");

    let root = ElementBuilder::new("div")?.class("card").build();

    let title = ElementBuilder::new("h2")?.text("Lot map").build();
    append_child(&root, &title)?;

    // Controles: filtro por estado + refresh
    let controls = ElementBuilder::new("div")?.class("controls").build();

    let filter = ElementBuilder::new("select")?
        .id("lotFilter")?
        .class("form-input")
        .build();
    for (value, label) in [
        ("all", "All"),
        ("free", "Free"),
        ("occupied", "Occupied"),
        ("reserved", "Reserved"),
    ] {
        let option = ElementBuilder::new("option")?
            .attr("value", value)?
            .text(label)
            .build();
        append_child(&filter, &option)?;
    }
    append_child(&controls, &filter)?;

    let refresh = ElementBuilder::new("button")?
        .id("refreshLot")?
        .class("btn btn-outline")
        .text("Refresh")
        .build();
    append_child(&controls, &refresh)?;
    append_child(&root, &controls)?;

    let msg = ElementBuilder::new("div")?
        .id("lotMsg")?
        .class("alert hidden")
        .build();
    append_child(&root, &msg)?;

    let grid = ElementBuilder::new("div")?
        .id("lotGrid")?
        .class("lot-grid")
        .build();
    append_child(&root, &grid)?;

    // Primer draw + handlers de controles
    draw_grid(state, &grid, &filter)?;
    {
        let state = state.clone();
        let grid = grid.clone();
        let filter_clone = filter.clone();
        on_change(&filter, move |_| {
            let _ = draw_grid(&state, &grid, &filter_clone);
        })?;
    }
    {
        let state = state.clone();
        let grid = grid.clone();
        let filter = filter.clone();
        on_click(&refresh, move |_| {
            let _ = draw_grid(&state, &grid, &filter);
        })?;
    }

    Ok(root)
}

/// Redibujar el grid desde el store aplicando el filtro actual
fn draw_grid(state: &AppState, grid: &Element, filter: &Element) -> Result<(), JsValue> {
    set_inner_html(grid, "");

    let current = LotFilter::parse(&select_value(filter));
    let shown = lot_viewmodel::filter_spots(&state.store.lot(), current);

    for spot in shown {
        let cell = ElementBuilder::new("div")?
            .class(&format!("spot {}", spot.status))
            .build();

        let label = ElementBuilder::new("strong")?.text(&spot.label).build();
        append_child(&cell, &label)?;
        let status = ElementBuilder::new("small")?
            .text(spot.status.as_str())
            .build();
        append_child(&cell, &status)?;

        // Toggle optimista: mutar el store y redibujar
        {
            let state = state.clone();
            let grid = grid.clone();
            let filter = filter.clone();
            let id = spot.id.clone();
            on_click(&cell, move |_| {
                let mut spots = state.store.lot();
                if let Some(next) = lot_viewmodel::cycle_spot(&mut spots, &id) {
                    state.store.set_lot(&spots);
                    log::info!("🔄 [LOT] {} -> {}", id, next);
                }
                let _ = draw_grid(&state, &grid, &filter);
            })?;
        }

        append_child(grid, &cell)?;
    }

    Ok(())
}
