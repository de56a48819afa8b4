// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Utilities for handling DOM events

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

use crate::command::Command;
use crate::Error;

/// Name of the event that activates a control.
pub const ACTIVATE: &str = "click";

/// Callback receiving the command of an activated control.
pub type Handler = Box<dyn FnMut(Command)>;

/// A [`Command`] bound to the activation of a control.
///
/// The listener stays attached for as long as this value is alive and is
/// removed from the control when it is dropped.
pub struct Listener {
    target: Element,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    /// Attach `handler` to `target`, calling it with `cmd` on every activation.
    pub fn bind<F>(target: Element, cmd: Command, mut handler: F) -> Result<Self, Error>
    where
        F: FnMut(Command) + 'static,
    {
        let closure = Closure::<dyn FnMut(Event)>::new(move |_: Event| handler(cmd));

        target
            .add_event_listener_with_callback(ACTIVATE, closure.as_ref().unchecked_ref())
            .map_err(|err| Error::listener(&target.id(), err))?;

        Ok(Listener { target, closure })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        drop(
            self.target
                .remove_event_listener_with_callback(ACTIVATE, self.closure.as_ref().unchecked_ref()),
        );
    }
}
