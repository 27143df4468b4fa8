//! Border checkpoint workflows: bulletin-driven rule tables, entrant inspection, and the
//! per-shift service that hosts one inspector per booth.

pub mod inspection;
pub mod shifts;

pub use inspection::{InspectionConfig, Inspector, ParseError, Verdict};
