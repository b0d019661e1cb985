use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};

/// Estado "not found": card con el nombre de ruta no reconocido
pub fn render_not_found(route_name: &str) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?.class("card").build();

    let title = ElementBuilder::new("h2")?.text("Not found").build();
    append_child(&card, &title)?;

    let helper = ElementBuilder::new("p")?.class("helper").build();
    helper.append_with_str_1("Route ")?;
    let code = ElementBuilder::new("code")?.text(route_name).build();
    append_child(&helper, &code)?;
    helper.append_with_str_1(" does not exist.")?;
    append_child(&card, &helper)?;

    Ok(card)
}
