#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod constants;
pub mod core;
mod dom;
pub mod events;
pub mod frame;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("orion-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;
    let _menu = events::NavMenu::mount(&document);
    let _effect = events::HeroEffect::mount(&document);
    Ok(())
}
