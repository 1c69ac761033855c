/// Seams between the background logic and the extension runtime
///
/// The browser implementations live in `browser`; tests supply their own.
use std::rc::Rc;

use futures::future::LocalBoxFuture;

use crate::error::TabQueryFailure;
use crate::tab_data::{TabInfo, TabQuery};

/// Tab enumeration capability (`tabs.query`)
pub trait TabHost {
    fn query_tabs(
        &self,
        query: TabQuery,
    ) -> LocalBoxFuture<'_, Result<Vec<TabInfo>, TabQueryFailure>>;
}

/// Line-oriented output channel (the extension's console)
pub trait Console {
    fn log(&self, line: &str);
}

/// Callback invoked on every event firing. The returned future is driven by
/// the event source.
pub type Listener = Box<dyn Fn() -> LocalBoxFuture<'static, ()>>;

/// Subscribable "toolbar action clicked" event
pub trait ActionEvent {
    fn add_listener(&self, listener: Listener);
}

impl<T: TabHost + ?Sized> TabHost for Rc<T> {
    fn query_tabs(
        &self,
        query: TabQuery,
    ) -> LocalBoxFuture<'_, Result<Vec<TabInfo>, TabQueryFailure>> {
        (**self).query_tabs(query)
    }
}

impl<T: Console + ?Sized> Console for Rc<T> {
    fn log(&self, line: &str) {
        (**self).log(line)
    }
}
