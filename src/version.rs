// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Build metadata.

/// The package version recorded at build time, or `"unknown"` when the
/// build did not record one.
pub fn version() -> &'static str {
    option_env!("CARGO_PKG_VERSION")
        .filter(|v| !v.is_empty())
        .unwrap_or("unknown")
}
