// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Rendering the counter onto a display surface.
//!
//! The count is written as plain decimal text: no thousands separators, no
//! sign for zero and a leading `-` for negative values. Formatting goes through
//! an [`itoa::Buffer`] on the stack, so rendering never allocates.

/// Anything that can show a line of text, such as a DOM element.
pub trait Surface {
    /// Replace the visible text of this surface.
    fn set_text(&mut self, text: &str);
}

impl Surface for String {
    fn set_text(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}

impl<S> Surface for &mut S
where
    S: Surface + ?Sized,
{
    fn set_text(&mut self, text: &str) {
        (**self).set_text(text)
    }
}

/// Write `count` to `surface` as decimal text.
pub fn render<S>(surface: &mut S, count: i64)
where
    S: Surface + ?Sized,
{
    let mut buf = itoa::Buffer::new();

    surface.set_text(buf.format(count));
}
