// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::error;
use std::fmt;

use wasm_bindgen::JsValue;

/// Failure to wire a widget into the page.
///
/// Commands themselves never fail, only [`mount`](crate::runtime::mount) can.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// There is no global `window` object.
    NoWindow,
    /// The `window` has no `document`.
    NoDocument,
    /// No element with `id` exists for the given role.
    MissingElement { role: &'static str, id: String },
    /// The host refused to attach a listener to the control with `id`.
    Listener { id: String, message: String },
}

impl Error {
    pub(crate) fn missing(role: &'static str, id: &str) -> Self {
        Error::MissingElement {
            role,
            id: id.to_owned(),
        }
    }

    pub(crate) fn listener(id: &str, err: JsValue) -> Self {
        Error::Listener {
            id: id.to_owned(),
            message: err.as_string().unwrap_or_else(|| format!("{err:?}")),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NoWindow => f.write_str("no global `window` exists"),
            Error::NoDocument => f.write_str("`window` has no document"),
            Error::MissingElement { role, id } => {
                write!(f, "missing {role} element: no element with id `{id}`")
            }
            Error::Listener { id, message } => {
                write!(f, "could not bind a listener to `{id}`: {message}")
            }
        }
    }
}

impl error::Error for Error {}

impl From<Error> for JsValue {
    fn from(err: Error) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}
