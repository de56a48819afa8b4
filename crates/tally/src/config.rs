// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Element ids the widget is wired to.

/// Ids of the three controls and the display surface.
///
/// The defaults match the markup of the bundled demo page:
///
/// ```html
/// <button id="decreaseBtn">decrease</button>
/// <button id="resetBtn">reset</button>
/// <button id="increaseBtn">increase</button>
/// <label id="countLabel">0</label>
/// ```
///
/// With the `serde` feature enabled the config can be deserialized, any
/// missing key falls back to its default.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    pub decrease: String,
    pub reset: String,
    pub increase: String,
    pub display: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            decrease: "decreaseBtn".into(),
            reset: "resetBtn".into(),
            increase: "increaseBtn".into(),
            display: "countLabel".into(),
        }
    }
}

impl Config {
    pub fn with_decrease(mut self, id: impl Into<String>) -> Self {
        self.decrease = id.into();
        self
    }

    pub fn with_reset(mut self, id: impl Into<String>) -> Self {
        self.reset = id.into();
        self
    }

    pub fn with_increase(mut self, id: impl Into<String>) -> Self {
        self.increase = id.into();
        self
    }

    pub fn with_display(mut self, id: impl Into<String>) -> Self {
        self.display = id.into();
        self
    }
}
