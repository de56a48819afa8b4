// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Counter state
//!
//! The state of a widget is a single signed integer owned by that widget.
//! There is no global counter: every [`Counter`] is independent, and the only
//! way to change it is to [`dispatch`](Counter::dispatch) a [`Command`].

use crate::command::Command;

/// Describes whether or not the display should be rendered after a state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Then {
    /// The state did not change, the display is already up to date.
    Stop,
    /// Render the display after this update.
    Render,
}

impl Then {
    pub fn should_render(self) -> bool {
        match self {
            Then::Stop => false,
            Then::Render => true,
        }
    }
}

/// Integer state of a counter widget, starting at `0`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    count: i64,
}

impl Counter {
    pub const fn new() -> Self {
        Counter { count: 0 }
    }

    /// Current value of the counter.
    pub const fn get(&self) -> i64 {
        self.count
    }

    /// Apply `cmd` to the counter.
    ///
    /// ```
    /// use tally::{Command, Counter, Then};
    ///
    /// let mut counter = Counter::new();
    ///
    /// assert_eq!(counter.dispatch(Command::Increase), Then::Render);
    /// assert_eq!(counter.get(), 1);
    ///
    /// counter.dispatch(Command::Reset);
    ///
    /// // Resetting a counter that is already at zero changes nothing
    /// assert_eq!(counter.dispatch(Command::Reset), Then::Stop);
    /// ```
    pub fn dispatch(&mut self, cmd: Command) -> Then {
        let next = cmd.apply(self.count);

        if next == self.count {
            return Then::Stop;
        }

        self.count = next;

        Then::Render
    }
}
