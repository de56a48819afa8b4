// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::command::Command;
use crate::render::{self, Surface};
use crate::state::Counter;

/// A counter together with the surface displaying it.
///
/// The widget is host agnostic: anything implementing [`Surface`] can be used
/// as the display, which makes it usable without a browser.
///
/// ```
/// use tally::{Command, Widget};
///
/// let mut widget = Widget::new(String::new());
///
/// assert_eq!(widget.surface(), "0");
///
/// widget.dispatch(Command::Decrease);
///
/// assert_eq!(widget.surface(), "-1");
/// ```
pub struct Widget<S> {
    counter: Counter,
    display: S,
}

impl<S> Widget<S>
where
    S: Surface,
{
    /// Create a widget at `0`, rendering the initial value right away.
    pub fn new(mut display: S) -> Self {
        let counter = Counter::new();

        render::render(&mut display, counter.get());

        Widget { counter, display }
    }

    /// Apply `cmd` and bring the display up to date, returning the new count.
    ///
    /// The surface is only written to when the count actually changed.
    pub fn dispatch(&mut self, cmd: Command) -> i64 {
        if self.counter.dispatch(cmd).should_render() {
            render::render(&mut self.display, self.counter.get());
        }

        self.counter.get()
    }

    pub fn count(&self) -> i64 {
        self.counter.get()
    }

    pub fn surface(&self) -> &S {
        &self.display
    }

    pub fn into_surface(self) -> S {
        self.display
    }
}
