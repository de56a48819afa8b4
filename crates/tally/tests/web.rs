// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#![cfg(target_arch = "wasm32")]

use tally::event::Listener;
use tally::runtime::{mount, mount_with};
use tally::{Command, Config, Error};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

/// Page fragment with the widget markup, ids prefixed to keep tests apart.
struct Page {
    config: Config,
    elements: Vec<Element>,
}

impl Page {
    fn new(prefix: &str) -> Self {
        Self::without(prefix, None)
    }

    fn without(prefix: &str, skip: Option<&str>) -> Self {
        let document = tally::dom::document().unwrap();
        let body = document.body().unwrap();

        let config = Config::default()
            .with_decrease(format!("{prefix}-decrease"))
            .with_reset(format!("{prefix}-reset"))
            .with_increase(format!("{prefix}-increase"))
            .with_display(format!("{prefix}-count"));

        let mut elements = Vec::new();

        for (tag, id) in [
            ("button", &config.decrease),
            ("button", &config.reset),
            ("button", &config.increase),
            ("label", &config.display),
        ] {
            if Some(id.as_str()) == skip {
                continue;
            }

            let el = document.create_element(tag).unwrap();

            el.set_id(id);
            body.append_child(&el).unwrap();
            elements.push(el);
        }

        Page { config, elements }
    }

    fn click(&self, cmd: Command) {
        let document = tally::dom::document().unwrap();

        document
            .get_element_by_id(cmd.control_id(&self.config))
            .unwrap()
            .unchecked_into::<HtmlElement>()
            .click();
    }

    fn text(&self) -> String {
        let document = tally::dom::document().unwrap();

        document
            .get_element_by_id(&self.config.display)
            .unwrap()
            .text_content()
            .unwrap_or_default()
    }
}

impl Drop for Page {
    fn drop(&mut self) {
        for el in &self.elements {
            el.remove();
        }
    }
}

#[wasm_bindgen_test]
fn clicks_update_label() {
    let page = Page::new("clicks");
    let mounted = mount(&page.config).unwrap();

    assert_eq!(page.text(), "0");

    page.click(Command::Increase);
    page.click(Command::Increase);
    assert_eq!(page.text(), "2");

    page.click(Command::Decrease);
    assert_eq!(page.text(), "1");

    page.click(Command::Reset);
    assert_eq!(page.text(), "0");

    page.click(Command::Decrease);
    assert_eq!(page.text(), "-1");
    assert_eq!(mounted.count(), -1);
}

#[wasm_bindgen_test]
fn missing_control_fails_fast() {
    let page = Page::without("missing", Some("missing-reset"));

    let err = mount(&page.config).err().unwrap();

    assert_eq!(
        err,
        Error::MissingElement {
            role: "reset",
            id: "missing-reset".into()
        }
    );

    // Nothing was rendered
    assert_eq!(page.text(), "");
}

#[wasm_bindgen_test]
fn missing_display_fails_fast() {
    let page = Page::without("nodisplay", Some("nodisplay-count"));

    let err = mount(&page.config).err().unwrap();

    assert!(matches!(err, Error::MissingElement { role: "display", .. }));
}

#[wasm_bindgen_test]
fn widgets_are_independent() {
    let left = Page::new("left");
    let right = Page::new("right");

    let _left = mount(&left.config).unwrap();
    let _right = mount(&right.config).unwrap();

    left.click(Command::Increase);
    right.click(Command::Decrease);
    right.click(Command::Decrease);

    assert_eq!(left.text(), "1");
    assert_eq!(right.text(), "-2");
}

#[wasm_bindgen_test]
fn dropping_detaches_listeners() {
    let page = Page::new("dropped");
    let mounted = mount(&page.config).unwrap();

    page.click(Command::Increase);
    assert_eq!(page.text(), "1");

    drop(mounted);

    page.click(Command::Increase);
    assert_eq!(page.text(), "1");
}

#[wasm_bindgen_test]
fn programmatic_dispatch_renders() {
    let page = Page::new("dispatch");
    let mounted = mount(&page.config).unwrap();

    assert_eq!(mounted.dispatch(Command::Decrease), -1);
    assert_eq!(page.text(), "-1");
    assert_eq!(mounted.listeners().len(), 3);
}

#[wasm_bindgen_test]
fn failed_bind_detaches_earlier_listeners() {
    let page = Page::new("refused");
    let document = tally::dom::document().unwrap();

    let mut attempts = Vec::new();

    let err = mount_with(&document, &page.config, |control, cmd, handler| {
        attempts.push(cmd);

        if cmd == Command::Reset {
            return Err(Error::Listener {
                id: control.id(),
                message: "refused".into(),
            });
        }

        Listener::bind(control, cmd, handler)
    })
    .err()
    .unwrap();

    assert_eq!(
        err,
        Error::Listener {
            id: "refused-reset".into(),
            message: "refused".into()
        }
    );

    // Binding stops at the first failure
    assert_eq!(attempts, [Command::Decrease, Command::Reset]);

    // The decrease listener was bound, then detached again
    page.click(Command::Decrease);
    page.click(Command::Increase);
    assert_eq!(page.text(), "0");
}
