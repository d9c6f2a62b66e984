// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors raised while rendering.

use failure::Fail;

/// Ways a render pass can fail.  Neither happens with a sized buffer
/// and well-behaved workers.
#[derive(Debug, Fail, PartialEq)]
pub enum RenderError {
    /// The buffer has no pixels, so there is no plane to map onto.
    #[fail(display = "cannot render into an empty {}x{} buffer", _0, _1)]
    EmptyBuffer(usize, usize),

    /// A worker thread panicked before finishing its columns.
    #[fail(display = "a render worker panicked")]
    WorkerPanicked,
}
