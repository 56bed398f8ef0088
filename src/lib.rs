//! `qlockweb` is the Rust crate implementing the client side of the
//! QlockThree word clock web interface.
//!
//! # Structure
//!
//! * [api]: thin HTTP wrapper issuing GET and form-encoded POST requests
//! * [color], [format]: pure formatting helpers
//! * [dom]: element tree helpers working on an injected [dom::Document]
//! * [device], [panel]: typed access to the clock's endpoints and rendering of
//!   its status page
//!
//! # License
//!
//! This source code is released under the [MIT-License](https://opensource.org/licenses/MIT)

#[macro_use]
extern crate tracing;
#[macro_use]
extern crate serde_derive;

pub mod api;
pub mod color;
pub mod config;
pub mod device;
pub mod dom;
pub mod format;
pub mod models;
pub mod panel;
