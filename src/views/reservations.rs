// ============================================================================
// RESERVATIONS VIEW - Tabla de reservas con alta (modal) y baja
// ============================================================================
// El estado del modal (abierto/cerrado) es local a esta activación del
// controller: al navegar fuera y volver, el modal arranca cerrado.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{
    append_child, input_value, on_click, on_submit, set_class_name, set_inner_html,
    set_text_content, ElementBuilder,
};
use crate::state::AppState;
use crate::utils::time;
use crate::viewmodels::reservations_viewmodel;

/// Renderizar la vista de reservas
pub fn render_reservations(state: &AppState) -> Result<Element, JsValue> {
    log::info!("🎬 [RESERVATIONS] render_reservations()");

    let root = ElementBuilder::new("div")?.class("card").build();

    // Cabecera con el botón de alta
    let header = ElementBuilder::new("div")?.class("card-header").build();
    let title = ElementBuilder::new("h2")?.text("Reservations").build();
    append_child(&header, &title)?;
    let new_btn = ElementBuilder::new("button")?
        .id("newResBtn")?
        .class("btn btn-primary")
        .text("New reservation")
        .build();
    append_child(&header, &new_btn)?;
    append_child(&root, &header)?;

    let msg = ElementBuilder::new("div")?
        .id("resMsg")?
        .class("alert hidden")
        .build();
    append_child(&root, &msg)?;

    // Tabla
    let table = ElementBuilder::new("table")?.class("table").build();
    let thead = ElementBuilder::new("thead")?.build();
    let head_row = ElementBuilder::new("tr")?.build();
    for col in ["ID", "User", "Spot", "Start", "End", "Status", ""] {
        let th = ElementBuilder::new("th")?.text(col).build();
        append_child(&head_row, &th)?;
    }
    append_child(&thead, &head_row)?;
    append_child(&table, &thead)?;

    let tbody = ElementBuilder::new("tbody")?.id("resBody")?.build();
    append_child(&table, &tbody)?;
    append_child(&root, &table)?;

    draw_rows(state, &tbody)?;

    // Modal de alta
    let modal = build_modal(state, &tbody)?;
    append_child(&root, &modal)?;

    {
        let modal = modal.clone();
        on_click(&new_btn, move |_| {
            open_modal(&modal);
        })?;
    }

    Ok(root)
}

/// Redibujar el tbody desde el store
fn draw_rows(state: &AppState, tbody: &Element) -> Result<(), JsValue> {
    set_inner_html(tbody, "");

    for row in state.store.reservations() {
        let tr = ElementBuilder::new("tr")?.build();

        for cell in [
            row.id.to_string(),
            row.user.clone(),
            row.spot.clone(),
            time::format_dt(&row.start),
            time::format_dt(&row.end),
        ] {
            let td = ElementBuilder::new("td")?.text(&cell).build();
            append_child(&tr, &td)?;
        }

        let status_td = ElementBuilder::new("td")?.build();
        let badge = ElementBuilder::new("span")?
            .class("badge")
            .text(&row.status)
            .build();
        append_child(&status_td, &badge)?;
        append_child(&tr, &status_td)?;

        // Borrado optimista por id
        let actions_td = ElementBuilder::new("td")?.build();
        let delete_btn = ElementBuilder::new("button")?
            .class("btn btn-outline")
            .attr("data-del", &row.id.to_string())?
            .text("Delete")
            .build();
        {
            let state = state.clone();
            let tbody = tbody.clone();
            let id = row.id;
            on_click(&delete_btn, move |_| {
                let mut rows = state.store.reservations();
                if reservations_viewmodel::delete_by_id(&mut rows, id) {
                    state.store.set_reservations(&rows);
                    log::info!("🗑️ [RESERVATIONS] Reserva {} eliminada", id);
                }
                let _ = draw_rows(&state, &tbody);
            })?;
        }
        append_child(&actions_td, &delete_btn)?;
        append_child(&tr, &actions_td)?;

        append_child(tbody, &tr)?;
    }

    Ok(())
}

/// Modal de alta con su formulario
fn build_modal(state: &AppState, tbody: &Element) -> Result<Element, JsValue> {
    let backdrop = ElementBuilder::new("div")?
        .id("modalBackdrop")?
        .class("modal-backdrop hidden")
        .build();

    let modal = ElementBuilder::new("div")?.class("modal card").build();

    let header = ElementBuilder::new("div")?.class("card-header").build();
    let title = ElementBuilder::new("h3")?.text("New reservation").build();
    append_child(&header, &title)?;
    let close_btn = ElementBuilder::new("button")?
        .id("closeModal")?
        .class("btn btn-ghost")
        .text("✕")
        .build();
    append_child(&header, &close_btn)?;
    append_child(&modal, &header)?;

    let form = ElementBuilder::new("form")?.id("resForm")?.build();

    let user_input = modal_input(&form, "resUser", "User", "email", "who@example.com")?;
    let spot_input = modal_input(&form, "resSpot", "Spot", "text", "A03")?;
    let start_input = modal_input(&form, "resStart", "Start", "datetime-local", "")?;
    let end_input = modal_input(&form, "resEnd", "End", "datetime-local", "")?;

    let form_msg = ElementBuilder::new("div")?
        .id("resFormMsg")?
        .class("alert hidden")
        .build();
    append_child(&form, &form_msg)?;

    let actions = ElementBuilder::new("div")?.class("controls").build();
    let submit = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn btn-primary")
        .text("Create")
        .build();
    append_child(&actions, &submit)?;
    let cancel = ElementBuilder::new("button")?
        .id("cancelModal")?
        .attr("type", "button")?
        .class("btn btn-outline")
        .text("Cancel")
        .build();
    append_child(&actions, &cancel)?;
    append_child(&form, &actions)?;

    append_child(&modal, &form)?;
    append_child(&backdrop, &modal)?;

    // Cerrar: botón ✕, cancel y click en el backdrop (no en el contenido)
    for btn in [close_btn.clone(), cancel.clone()] {
        let backdrop = backdrop.clone();
        on_click(&btn, move |_| close_modal(&backdrop))?;
    }
    {
        let backdrop_clone = backdrop.clone();
        on_click(&backdrop, move |_| close_modal(&backdrop_clone))?;
    }
    on_click(&modal, |e| e.stop_propagation())?;

    // Alta: validación de requeridos, id = max + 1, insert newest-first
    {
        let state = state.clone();
        let tbody = tbody.clone();
        let backdrop = backdrop.clone();
        let form_msg = form_msg.clone();
        on_submit(&form, move |_| {
            let mut rows = state.store.reservations();
            let result = reservations_viewmodel::insert_new(
                &mut rows,
                &input_value(&user_input),
                &input_value(&spot_input),
                &input_value(&start_input),
                &input_value(&end_input),
            );

            match result {
                Ok(id) => {
                    state.store.set_reservations(&rows);
                    log::info!("✅ [RESERVATIONS] Reserva {} creada", id);
                    let _ = draw_rows(&state, &tbody);
                    close_modal(&backdrop);
                }
                Err(e) => {
                    set_class_name(&form_msg, "alert error");
                    set_text_content(&form_msg, e);
                }
            }
        })?;
    }

    Ok(backdrop)
}

fn modal_input(
    form: &Element,
    id: &str,
    label_text: &str,
    input_type: &str,
    placeholder: &str,
) -> Result<Element, JsValue> {
    let group = ElementBuilder::new("div")?.class("form-group").build();
    let label = ElementBuilder::new("label")?
        .attr("for", id)?
        .text(label_text)
        .build();
    append_child(&group, &label)?;
    let input = ElementBuilder::new("input")?
        .id(id)?
        .class("form-input")
        .attr("type", input_type)?
        .attr("placeholder", placeholder)?
        .build();
    append_child(&group, &input)?;
    append_child(form, &group)?;
    Ok(input)
}

fn open_modal(backdrop: &Element) {
    set_class_name(backdrop, "modal-backdrop");
    // limpiar el error de un intento anterior
    if let Some(form_msg) = backdrop.query_selector("#resFormMsg").ok().flatten() {
        set_class_name(&form_msg, "alert hidden");
        set_text_content(&form_msg, "");
    }
}

fn close_modal(backdrop: &Element) {
    set_class_name(backdrop, "modal-backdrop hidden");
}
