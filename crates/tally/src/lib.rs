// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Tally
//!
//! _A counter widget for a page you already have._
//!
//! **Tally** wires three buttons and a label into a counter: one button
//! increases the count, one decreases it, one resets it to zero. The label
//! always shows the current count as decimal text.
//!
//! ### Example
//!
//! Given a page with the following markup:
//!
//! ```html
//! <button id="decreaseBtn">decrease</button>
//! <button id="resetBtn">reset</button>
//! <button id="increaseBtn">increase</button>
//! <label id="countLabel">0</label>
//! ```
//!
//! The whole app is one line:
//!
//! ```no_run
//! tally::start!();
//! # fn main() {}
//! ```
//!
//! Different element ids can be passed in with a [`Config`]:
//!
//! ```no_run
//! use tally::Config;
//!
//! tally::start!(Config::default().with_display("total"));
//! # fn main() {}
//! ```
//!
//! ### Without a browser
//!
//! The counter logic does not depend on the DOM. A [`Widget`] renders onto
//! any [`Surface`](render::Surface), a [`String`] for instance:
//!
//! ```
//! use tally::{Command, Widget};
//!
//! let mut widget = Widget::new(String::new());
//!
//! widget.dispatch(Command::Increase);
//! widget.dispatch(Command::Increase);
//!
//! assert_eq!(widget.surface(), "2");
//! ```
//!
//! Several widgets can live on the same page, each mounted with its own
//! [`Config`] through [`runtime::mount`]. They do not share any state.
//!
//! ## Running the demo
//!
//! To run **Tally** you'll need to install [`trunk`](https://trunkrs.dev/):
//! ```sh
//! cargo install --locked trunk
//! ```
//!
//! You might also need to add the Wasm target to Rust:
//! ```sh
//! rustup target add wasm32-unknown-unknown
//! ```
//!
//! Then:
//! ```sh
//! cd demos/counter
//! trunk serve
//! ```

#[cfg(all(
    target_arch = "wasm32",
    feature = "rlsf",
    not(target_feature = "atomics")
))]
#[global_allocator]
static A: rlsf::SmallGlobalTlsf = rlsf::SmallGlobalTlsf::new();

pub mod command;
pub mod config;
pub mod dom;
pub mod event;
pub mod render;
pub mod runtime;
pub mod state;
pub mod widget;

mod error;

pub use command::Command;
pub use config::Config;
pub use error::Error;
pub use state::{Counter, Then};
pub use widget::Widget;

/// Crate re-exports for the [`start!`] macro internals
pub mod reexport {
    pub use wasm_bindgen;
}

/// Mount a widget when the Wasm module is instantiated.
///
/// Takes an optional [`Config`] expression, defaulting to [`Config::default`].
/// A configuration error is thrown as a JavaScript exception.
#[macro_export]
macro_rules! start {
    () => {
        $crate::start!($crate::Config::default());
    };

    ($config:expr) => {
        use wasm_bindgen::prelude::wasm_bindgen;
        use $crate::reexport::wasm_bindgen;

        #[wasm_bindgen(start)]
        fn tally_main() -> Result<(), wasm_bindgen::JsValue> {
            $crate::runtime::start($config)
        }
    };
}
