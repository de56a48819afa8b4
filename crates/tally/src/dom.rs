// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Resolving the widget's elements in the DOM.

use web_sys::{Document, Element};

use crate::command::Command;
use crate::config::Config;
use crate::render::Surface;
use crate::Error;

/// The `document` of the global `window`.
pub fn document() -> Result<Document, Error> {
    web_sys::window()
        .ok_or(Error::NoWindow)?
        .document()
        .ok_or(Error::NoDocument)
}

fn element(document: &Document, role: &'static str, id: &str) -> Result<Element, Error> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| Error::missing(role, id))
}

/// A DOM element used as a [`Surface`], writes go to its `textContent`.
pub struct TextContent(Element);

impl TextContent {
    pub fn new(element: Element) -> Self {
        TextContent(element)
    }
}

impl Surface for TextContent {
    fn set_text(&mut self, text: &str) {
        self.0.set_text_content(Some(text));
    }
}

/// Every element a widget needs, resolved up front.
pub struct Elements {
    /// Controls in the order of [`Command::ALL`].
    pub controls: [(Command, Element); 3],
    pub display: Element,
}

impl Elements {
    /// Look up all configured ids, failing on the first one that is absent.
    pub fn resolve(document: &Document, config: &Config) -> Result<Self, Error> {
        let [decrease, reset, increase] = Command::ALL;

        let controls = [
            (decrease, element(document, decrease.role(), decrease.control_id(config))?),
            (reset, element(document, reset.role(), reset.control_id(config))?),
            (increase, element(document, increase.role(), increase.control_id(config))?),
        ];
        let display = element(document, "display", &config.display)?;

        Ok(Elements { controls, display })
    }
}
