// ============================================================================
// LOGIN VIEW - Inicio de sesión (modo demo)
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement};

use crate::dom::{append_child, on_input, on_submit, set_text_content, ElementBuilder};
use crate::models::Session;
use crate::router::{self, Route};
use crate::state::AppState;
use crate::viewmodels::auth_viewmodel;

/// Renderizar vista de login
pub fn render_login(state: &AppState) -> Result<Element, JsValue> {
    log::info!("🎬 [LOGIN] render_login()");

    // Estado local del formulario (vive en los closures)
    let email = Rc::new(RefCell::new(String::new()));
    let password = Rc::new(RefCell::new(String::new()));

    let card = ElementBuilder::new("div")?.class("card auth-card").build();

    let title = ElementBuilder::new("h2")?.text("Sign in").build();
    append_child(&card, &title)?;

    let form = ElementBuilder::new("form")?.id("loginForm")?.build();

    let (email_group, email_err) =
        form_field("loginEmail", "Email", "email", "you@example.com", email.clone())?;
    let (password_group, password_err) =
        form_field("loginPassword", "Password", "password", "", password.clone())?;
    append_child(&form, &email_group)?;
    append_child(&form, &password_group)?;

    let submit = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn btn-primary")
        .text("Sign in")
        .build();
    append_child(&form, &submit)?;

    // Submit: validación local, sin backend. Cualquier par no vacío entra.
    {
        let email = email.clone();
        let password = password.clone();
        let state = state.clone();
        on_submit(&form, move |_| {
            let email_val = email.borrow().trim().to_string();
            let password_val = password.borrow().clone();

            let validation = auth_viewmodel::validate_login(&email_val, &password_val);
            set_text_content(&email_err, validation.email.unwrap_or(""));
            set_text_content(&password_err, validation.password.unwrap_or(""));
            if !validation.ok() {
                return;
            }

            // Modo demo: token fijo, nombre = parte local del email
            state.store.set_session(&Session::demo(&email_val, None));
            log::info!("✅ [LOGIN] Sesión demo creada para {}", email_val);
            router::go(&Route::Dashboard);
        })?;
    }

    append_child(&card, &form)?;

    let helper = ElementBuilder::new("p")?.class("helper").build();
    helper.append_with_str_1("No account? ")?;
    let register_link = ElementBuilder::new("a")?
        .attr("href", "#/register")?
        .text("Register")
        .build();
    append_child(&helper, &register_link)?;
    append_child(&card, &helper)?;

    let demo_note = ElementBuilder::new("p")?
        .class("helper")
        .text("Demo mode: any non-empty credentials work.")
        .build();
    append_child(&card, &demo_note)?;

    Ok(card)
}

/// form-group con label, input y span de error. Devuelve (grupo, span de
/// error) y mantiene `value` sincronizado con cada input.
pub(super) fn form_field(
    id: &str,
    label_text: &str,
    input_type: &str,
    placeholder: &str,
    value: Rc<RefCell<String>>,
) -> Result<(Element, Element), JsValue> {
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
        .attr("name", id)?
        .attr("placeholder", placeholder)?
        .build();
    {
        let value = value.clone();
        on_input(&input, move |e| {
            if let Some(target) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                *value.borrow_mut() = target.value();
            }
        })?;
    }
    append_child(&group, &input)?;

    let err = ElementBuilder::new("span")?
        .id(&format!("{}Err", id))?
        .class("field-error")
        .build();
    append_child(&group, &err)?;

    Ok((group, err))
}
