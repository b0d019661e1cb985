// ============================================================================
// ROVER VIEW - Telemetría del rover (read-only)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, set_text_content, ElementBuilder};
use crate::services::demo_data;
use crate::utils::time;

/// Renderizar la vista del rover. En modo live esto vendría de
/// GET /api/rover/status; en demo es un snapshot sintético.
pub fn render_rover() -> Result<Element, JsValue> {
    log::info!("🎬 [ROVER] render_rover()");

    let root = ElementBuilder::new("div")?.class("card").build();

    let header = ElementBuilder::new("div")?.class("card-header").build();
    let title = ElementBuilder::new("h2")?.text("Rover").build();
    append_child(&header, &title)?;
    let refresh = ElementBuilder::new("button")?
        .id("refreshRover")?
        .class("btn btn-outline")
        .text("Refresh")
        .build();
    append_child(&header, &refresh)?;
    append_child(&root, &header)?;

    let msg = ElementBuilder::new("div")?
        .id("roverMsg")?
        .class("alert hidden")
        .build();
    append_child(&root, &msg)?;

    let grid = ElementBuilder::new("div")?.class("grid info-grid").build();
    let battery = field(&grid, "rvBattery", "Battery")?;
    let location = field(&grid, "rvLocation", "Location")?;
    let heartbeat = field(&grid, "rvHeartbeat", "Heartbeat")?;
    let mode = field(&grid, "rvMode", "Mode")?;
    let last_task = field(&grid, "rvLastTask", "Last task")?;
    append_child(&root, &grid)?;

    let telemetry = ElementBuilder::new("pre")?
        .id("rvTelemetry")?
        .class("telemetry")
        .build();
    append_child(&root, &telemetry)?;

    let draw = {
        let battery = battery.clone();
        let location = location.clone();
        let heartbeat = heartbeat.clone();
        let mode = mode.clone();
        let last_task = last_task.clone();
        let telemetry = telemetry.clone();
        move || {
            let data = demo_data::demo_rover_status(time::now());
            set_text_content(&battery, &format!("{}%", data.battery_percent));
            set_text_content(
                &location,
                &format!("({}, {})", data.location.x, data.location.y),
            );
            set_text_content(&heartbeat, &time::format_dt(&data.heartbeat_iso));
            set_text_content(&mode, &data.mode);
            set_text_content(&last_task, &data.last_task);

            let dump = serde_json::to_string_pretty(&data)
                .unwrap_or_else(|_| String::from("{}"));
            set_text_content(&telemetry, &dump);
        }
    };

    draw();
    on_click(&refresh, move |_| draw())?;

    Ok(root)
}

fn field(grid: &Element, id: &str, label: &str) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?.class("card stat").build();
    let label_el = ElementBuilder::new("h3")?.text(label).build();
    append_child(&card, &label_el)?;
    let value = ElementBuilder::new("div")?
        .id(id)?
        .class("stat-value")
        .build();
    append_child(&card, &value)?;
    append_child(grid, &card)?;
    Ok(value)
}
