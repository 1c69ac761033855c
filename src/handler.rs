/// Toolbar action handler: list the URLs of the current window's tabs

use std::rc::Rc;

use futures::FutureExt;
use log::{debug, warn};

use crate::config::Config;
use crate::error::TabQueryFailure;
use crate::host::{ActionEvent, Console, TabHost};
use crate::tab_data::{TabInfo, TabQuery};

/// Printed in place of a URL the host did not report
pub const MISSING_URL: &str = "undefined";

pub struct ActionHandler<H, C> {
    host: H,
    console: C,
    banner: String,
}

impl<H: TabHost, C: Console> ActionHandler<H, C> {
    pub fn new(host: H, console: C, config: &Config) -> Self {
        ActionHandler {
            host,
            console,
            banner: config.banner.clone(),
        }
    }

    /// Handle one click. Failures are reported on the console and never
    /// returned to the caller.
    pub async fn on_action_clicked(&self) {
        self.console.log(&self.banner);

        debug!("Querying tabs in current window");
        match self.host.query_tabs(TabQuery::current_window()).await {
            Ok(tabs) => self.log_tabs(&tabs),
            Err(e) => self.log_failure(&e),
        }
    }

    fn log_tabs(&self, tabs: &[TabInfo]) {
        debug!("Received {} tabs", tabs.len());
        for tab in tabs {
            match &tab.url {
                Some(url) => self.console.log(url),
                None => {
                    warn!(
                        "Tab {:?} has no URL; is the `tabs` permission granted?",
                        tab.id
                    );
                    self.console.log(MISSING_URL);
                }
            }
        }
    }

    fn log_failure(&self, error: &TabQueryFailure) {
        self.console
            .log(&format!("Error(: {}) while getting list of all tabs.", error));
    }
}

/// Subscribe `handler` to `event`; every firing runs one independent
/// `on_action_clicked`.
pub fn register<E, H, C>(event: &E, handler: Rc<ActionHandler<H, C>>)
where
    E: ActionEvent,
    H: TabHost + 'static,
    C: Console + 'static,
{
    event.add_listener(Box::new(move || {
        let handler = Rc::clone(&handler);
        async move { handler.on_action_clicked().await }.boxed_local()
    }));
}
