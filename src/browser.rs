/// Bindings to the WebExtension APIs used by the background script

use futures::FutureExt;
use futures::future::LocalBoxFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::console;

use crate::error::TabQueryFailure;
use crate::host::{ActionEvent, Console, Listener, TabHost};
use crate::tab_data::{TabInfo, TabQuery};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["browser", "tabs"], js_name = query)]
    fn tabs_query(query_info: &JsValue) -> Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(js_namespace = ["browser", "browserAction", "onClicked"], js_name = addListener)]
    fn on_clicked_add_listener(callback: &js_sys::Function);

    // Same conversion as `${value}` in a template literal
    #[wasm_bindgen(js_name = String)]
    fn js_string(value: &JsValue) -> String;
}

/// `browser.tabs`
pub struct BrowserTabs;

impl TabHost for BrowserTabs {
    fn query_tabs(
        &self,
        query: TabQuery,
    ) -> LocalBoxFuture<'_, Result<Vec<TabInfo>, TabQueryFailure>> {
        async move {
            let options = encode_query(&query)?;
            let promise = tabs_query(&options).map_err(|e| js_failure(&e))?;
            settle_tabs(promise).await
        }
        .boxed_local()
    }
}

fn encode_query(query: &TabQuery) -> Result<JsValue, TabQueryFailure> {
    serde_wasm_bindgen::to_value(query)
        .map_err(|e| TabQueryFailure::new(format!("Failed to encode query: {}", e)))
}

/// Await a `tabs.query` promise and decode its tab array
async fn settle_tabs(promise: js_sys::Promise) -> Result<Vec<TabInfo>, TabQueryFailure> {
    let tabs_js = JsFuture::from(promise).await.map_err(|e| js_failure(&e))?;

    serde_wasm_bindgen::from_value(tabs_js)
        .map_err(|e| TabQueryFailure::new(format!("Failed to parse tabs: {}", e)))
}

fn js_failure(value: &JsValue) -> TabQueryFailure {
    TabQueryFailure::new(js_string(value))
}

/// The background page's developer console
pub struct BrowserConsole;

impl Console for BrowserConsole {
    fn log(&self, line: &str) {
        console::log_1(&JsValue::from_str(line));
    }
}

/// `browser.browserAction.onClicked`
pub struct BrowserActionClicked;

impl ActionEvent for BrowserActionClicked {
    fn add_listener(&self, listener: Listener) {
        let callback = Closure::<dyn Fn()>::new(move || spawn_local(listener()));
        on_clicked_add_listener(callback.as_ref().unchecked_ref());
        // Subscription lasts as long as the background page
        callback.forget();
    }
}
