/// WebSnap - Firefox extension background script
/// Built with Rust + WASM

pub mod browser;
pub mod config;
pub mod error;
pub mod handler;
pub mod host;
pub mod tab_data;

use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::browser::{BrowserActionClicked, BrowserConsole, BrowserTabs};
use crate::config::Config;
use crate::handler::{ActionHandler, register};

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
}

// Wire the toolbar button to the tab lister. Called once by background.js.
#[wasm_bindgen]
pub fn start_background(config: JsValue) {
    let (config, problem) = match Config::from_js(config) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    wasm_logger::init(wasm_logger::Config::new(config.log_level.into()));
    if let Some(e) = problem {
        log::error!("{}; falling back to defaults", e);
    }

    let handler = Rc::new(ActionHandler::new(BrowserTabs, BrowserConsole, &config));
    register(&BrowserActionClicked, handler);
    log::info!("Listening for toolbar action clicks");
}
