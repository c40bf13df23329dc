//! # Hex Grid Demo
//!
//! A terrain material highlights one hex of a 13 x 7 mask texture. The panel
//! maps a slider position to that hex's UV offset and forwards six
//! destination visibility toggles. Rendering the material is left to the
//! host; this module owns the values it is fed.

pub mod offsets;
pub mod panel;

pub use offsets::HexOffsetTable;
pub use panel::{HexGridPanel, HexMaterialParams, DESTINATION_COUNT};
