// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::command::Command;
use crate::config::Config;
use crate::dom::{self, Elements, TextContent};
use crate::event::{Handler, Listener};
use crate::widget::Widget;
use crate::Error;

type Shared = Rc<RefCell<Widget<TextContent>>>;

/// A widget wired into the page.
///
/// Dropping this handle detaches the widget's listeners, leaving the controls
/// inert. Use [`forget`](Mounted::forget) to keep it alive for the rest of
/// the page's lifetime.
pub struct Mounted {
    widget: Shared,
    listeners: [Listener; 3],
}

impl Mounted {
    /// Current value of the counter.
    pub fn count(&self) -> i64 {
        self.widget.borrow().count()
    }

    /// Issue a command as if its control had been activated.
    pub fn dispatch(&self, cmd: Command) -> i64 {
        self.widget.borrow_mut().dispatch(cmd)
    }

    pub fn listeners(&self) -> &[Listener] {
        &self.listeners
    }

    /// Keep the listeners attached until the page is unloaded.
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

/// Mount a widget onto the elements named by `config` in the global document.
pub fn mount(config: &Config) -> Result<Mounted, Error> {
    mount_in(&dom::document()?, config)
}

/// Mount a widget onto the elements named by `config` in `document`.
///
/// Every element is resolved before the initial render, so a missing element
/// leaves the page untouched.
pub fn mount_in(document: &Document, config: &Config) -> Result<Mounted, Error> {
    mount_with(document, config, Listener::bind)
}

/// Same as [`mount_in`], but attaches each control's handler through `bind`.
///
/// Controls are bound in the order of [`Command::ALL`]. If `bind` fails, the
/// remaining controls are left alone and the listeners bound so far are
/// detached again.
pub fn mount_with<B>(document: &Document, config: &Config, mut bind: B) -> Result<Mounted, Error>
where
    B: FnMut(Element, Command, Handler) -> Result<Listener, Error>,
{
    let Elements { controls, display } = Elements::resolve(document, config)?;

    let widget: Shared = Rc::new(RefCell::new(Widget::new(TextContent::new(display))));

    let mut attach = |(cmd, control): (Command, Element)| {
        let widget = widget.clone();

        bind(control, cmd, Box::new(move |cmd: Command| dispatch(&widget, cmd)))
    };

    let [decrease, reset, increase] = controls;
    let listeners = [attach(decrease)?, attach(reset)?, attach(increase)?];

    Ok(Mounted { widget, listeners })
}

fn dispatch(widget: &Shared, cmd: Command) {
    debug_assert!(widget.try_borrow_mut().is_ok(), "Cyclical update detected");

    if let Ok(mut widget) = widget.try_borrow_mut() {
        widget.dispatch(cmd);
    }
}

/// Mount a widget for the lifetime of the page.
///
/// Configuration errors are logged to the console and returned, so that when
/// used as a `#[wasm_bindgen(start)]` function they surface as an exception.
pub fn start(config: Config) -> Result<(), JsValue> {
    init_panic_hook();

    match mount(&config) {
        Ok(mounted) => {
            gloo_console::debug!(format!(
                "tally: mounted on #{} with count {}",
                config.display,
                mounted.count()
            ));

            mounted.forget();

            Ok(())
        }
        Err(err) => {
            gloo_console::error!(format!("tally: {err}"));

            Err(err.into())
        }
    }
}

fn init_panic_hook() {
    // Only enable console hook on debug builds
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();
}
