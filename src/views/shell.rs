// ============================================================================
// SHELL - Topbar + sidebar comunes a todas las vistas
// ============================================================================
// El shell se reconstruye en cada navegación: el pill de sesión y los
// botones del topbar reflejan el estado de auth, y el link activo del
// sidebar se sincroniza con la ruta resuelta en cada transición.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, remove_class, toggle_class, ElementBuilder};
use crate::router::{self, Route};
use crate::state::AppState;

/// Shell montado: root para colgar del DOM y content donde va la vista
pub struct Shell {
    pub root: Element,
    pub content: Element,
}

const SIDEBAR_LINKS: [(&str, Route); 6] = [
    ("Dashboard", Route::Dashboard),
    ("Lot map", Route::Lot),
    ("Reservations", Route::Reservations),
    ("Rover", Route::Rover),
    ("Alerts", Route::Alerts),
    ("Settings", Route::Settings),
];

/// Construir el shell para la ruta resuelta
pub fn render_shell(state: &AppState, route: &Route) -> Result<Shell, JsValue> {
    let logged_in = state.store.is_authenticated();

    let root = ElementBuilder::new("div")?.class("shell").build();
    let topbar = render_topbar(state, logged_in)?;
    append_child(&root, &topbar)?;

    let layout = ElementBuilder::new("div")?.class("layout").build();

    let sidebar = render_sidebar(route)?;
    append_child(&layout, &sidebar)?;

    // Toggle móvil del sidebar
    if let Some(toggle) = topbar.query_selector("#menuToggle")? {
        let sidebar_clone = sidebar.clone();
        let toggle_clone = toggle.clone();
        on_click(&toggle, move |_| {
            let open = toggle_class(&sidebar_clone, "open");
            let _ = toggle_clone.set_attribute("aria-expanded", if open { "true" } else { "false" });
        })?;
    }

    let content = ElementBuilder::new("main")?
        .class("content")
        .id("view")?
        .build();
    append_child(&layout, &content)?;
    append_child(&root, &layout)?;

    Ok(Shell { root, content })
}

/// Topbar: brand + pill de sesión + accesos de settings/logout.
/// Con sesión se muestran los tres; sin sesión quedan ocultos.
fn render_topbar(state: &AppState, logged_in: bool) -> Result<Element, JsValue> {
    let topbar = ElementBuilder::new("header")?.class("topbar").build();

    let menu_toggle = ElementBuilder::new("button")?
        .id("menuToggle")?
        .class("menu-toggle")
        .attr("aria-expanded", "false")?
        .text("☰")
        .build();
    append_child(&topbar, &menu_toggle)?;

    let brand = ElementBuilder::new("div")?
        .class("brand")
        .text("U-Parking Console")
        .build();
    append_child(&topbar, &brand)?;

    let hidden = |base: &str| {
        if logged_in {
            base.to_string()
        } else {
            format!("{} hidden", base)
        }
    };

    let pill = ElementBuilder::new("span")?
        .id("sessionPill")?
        .class(&hidden("pill pill-online"))
        .text("Online")
        .build();
    append_child(&topbar, &pill)?;

    let settings_btn = ElementBuilder::new("button")?
        .id("settingsBtn")?
        .class(&hidden("btn btn-ghost"))
        .attr("title", "Settings")?
        .text("⚙")
        .build();
    on_click(&settings_btn, move |_| {
        router::go(&Route::Settings);
    })?;
    append_child(&topbar, &settings_btn)?;

    let logout_btn = ElementBuilder::new("button")?
        .id("logoutBtn")?
        .class(&hidden("btn btn-outline"))
        .text("Logout")
        .build();
    {
        let state = state.clone();
        on_click(&logout_btn, move |_| {
            log::info!("👋 [SHELL] Logout");
            state.store.clear_session();
            router::go(&Route::Login);
        })?;
    }
    append_child(&topbar, &logout_btn)?;

    Ok(topbar)
}

/// Sidebar con el link activo según la ruta resuelta
fn render_sidebar(route: &Route) -> Result<Element, JsValue> {
    let sidebar = ElementBuilder::new("aside")?
        .id("sidebar")?
        .class("sidebar")
        .build();

    for (label, link_route) in SIDEBAR_LINKS {
        let class = if link_route.name() == route.name() {
            "sidebar-link active"
        } else {
            "sidebar-link"
        };
        let link = ElementBuilder::new("a")?
            .class(class)
            .attr("href", &link_route.hash())?
            .text(label)
            .build();

        // cerrar el sidebar al navegar (móvil)
        let sidebar_clone = sidebar.clone();
        on_click(&link, move |_| {
            remove_class(&sidebar_clone, "open");
        })?;

        append_child(&sidebar, &link)?;
    }

    Ok(sidebar)
}
