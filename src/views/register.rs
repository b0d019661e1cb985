// ============================================================================
// REGISTER VIEW - Registro (modo demo: auto-login)
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_submit, set_text_content, ElementBuilder};
use crate::models::Session;
use crate::router::{self, Route};
use crate::state::AppState;
use crate::viewmodels::auth_viewmodel;
use crate::views::login::form_field;

/// Renderizar vista de registro
pub fn render_register(state: &AppState) -> Result<Element, JsValue> {
    log::info!("🎬 [REGISTER] render_register()");

    let name = Rc::new(RefCell::new(String::new()));
    let email = Rc::new(RefCell::new(String::new()));
    let password = Rc::new(RefCell::new(String::new()));

    let card = ElementBuilder::new("div")?.class("card auth-card").build();

    let title = ElementBuilder::new("h2")?.text("Create account").build();
    append_child(&card, &title)?;

    let form = ElementBuilder::new("form")?.id("regForm")?.build();

    let (name_group, name_err) = form_field("regName", "Name", "text", "Your name", name.clone())?;
    let (email_group, email_err) =
        form_field("regEmail", "Email", "email", "you@example.com", email.clone())?;
    let (password_group, password_err) =
        form_field("regPassword", "Password", "password", "8+ characters", password.clone())?;
    append_child(&form, &name_group)?;
    append_child(&form, &email_group)?;
    append_child(&form, &password_group)?;

    let submit = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn btn-primary")
        .text("Register")
        .build();
    append_child(&form, &submit)?;

    {
        let name = name.clone();
        let email = email.clone();
        let password = password.clone();
        let state = state.clone();
        on_submit(&form, move |_| {
            let name_val = name.borrow().trim().to_string();
            let email_val = email.borrow().trim().to_string();
            let password_val = password.borrow().clone();

            let validation =
                auth_viewmodel::validate_register(&name_val, &email_val, &password_val);
            set_text_content(&name_err, validation.name.unwrap_or(""));
            set_text_content(&email_err, validation.email.unwrap_or(""));
            set_text_content(&password_err, validation.password.unwrap_or(""));
            if !validation.ok() {
                return;
            }

            // Demo: auto-login con el nombre dado
            state
                .store
                .set_session(&Session::demo(&email_val, Some(&name_val)));
            log::info!("✅ [REGISTER] Registro demo, sesión creada para {}", email_val);
            router::go(&Route::Dashboard);
        })?;
    }

    append_child(&card, &form)?;

    let helper = ElementBuilder::new("p")?.class("helper").build();
    helper.append_with_str_1("Already registered? ")?;
    let login_link = ElementBuilder::new("a")?
        .attr("href", "#/login")?
        .text("Sign in")
        .build();
    append_child(&helper, &login_link)?;
    append_child(&card, &helper)?;

    Ok(card)
}
