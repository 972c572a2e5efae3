// SPDX-License-Identifier: PMPL-1.0-or-later

//! exitcode-gen: Go and Python exit-code constants from one table.
//!
//! The bundled table lists conventional process exit statuses (BSD
//! `sysexits.h`, C `EXIT_*`, shell conventions). Each run goes through
//! the same linear pipeline:
//!
//! 1. **Table**: decode the tab-separated rows.
//! 2. **Naming**: strip `EX_`/`EXIT_` and derive per-language identifiers.
//! 3. **Builder**: one record per row, in table order.
//! 4. **Render**: run each requested target's template over the records
//!    and write the result.

pub mod assets;
pub mod builder;
pub mod error;
pub mod generate;
pub mod naming;
pub mod render;
pub mod table;
pub mod types;

pub use assets::Assets;
pub use error::GenError;
pub use generate::{run, GenerateOptions, GenerateSummary};
