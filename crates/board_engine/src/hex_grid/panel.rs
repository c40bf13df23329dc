//! Control panel state and the material parameters it drives

use crate::config::HexGridConfig;
use crate::foundation::math::Vec2;

use super::offsets::HexOffsetTable;

/// Number of destination hexes with a visibility toggle
pub const DESTINATION_COUNT: usize = 6;

/// Values the terrain material reads
#[derive(Debug, Clone, PartialEq)]
pub struct HexMaterialParams {
    /// `active_hex_offset`: UV offset of the highlighted hex
    pub active_hex_offset: Vec2,
    /// `dest1_visible` .. `dest6_visible`
    pub dest_visible: [bool; DESTINATION_COUNT],
    /// U scale of the mask texture
    pub mask_u_scale: f32,
}

/// Slider, header and checkboxes of the hex grid demo
#[derive(Debug, Clone)]
pub struct HexGridPanel {
    table: HexOffsetTable,
    active: usize,
    header: String,
    params: HexMaterialParams,
}

impl HexGridPanel {
    /// Panel at hex 0 with every destination visible
    pub fn new(config: &HexGridConfig) -> Self {
        let table = HexOffsetTable::build(config);
        Self {
            active: 0,
            header: header_text(0),
            params: HexMaterialParams {
                active_hex_offset: config.origin,
                dest_visible: [true; DESTINATION_COUNT],
                mask_u_scale: config.mask_u_scale,
            },
            table,
        }
    }

    /// Offset table backing the slider
    pub fn table(&self) -> &HexOffsetTable {
        &self.table
    }

    /// Slider range, inclusive
    pub fn slider_range(&self) -> (f32, f32) {
        (0.0, self.table.max_index() as f32)
    }

    /// Index of the active hex
    pub fn active_hex(&self) -> usize {
        self.active
    }

    /// Header line above the slider
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Current material parameters
    pub fn params(&self) -> &HexMaterialParams {
        &self.params
    }

    /// Slider moved to `value`
    ///
    /// The value is floored to a hex index and clamped into the table, so any
    /// input (including NaN, treated as 0) picks a valid hex. Returns the new
    /// header text.
    pub fn set_slider(&mut self, value: f32) -> &str {
        let max = self.table.max_index();
        let in_range = value >= 0.0 && value.floor() <= max as f32;
        let index = if value.is_nan() || value < 0.0 {
            0
        } else {
            (value.floor() as usize).min(max)
        };
        if !in_range {
            log::warn!("Slider value {} clamped to hex {}", value, index);
        }

        self.active = index;
        if let Some(offset) = self.table.get(index) {
            self.params.active_hex_offset = offset;
        }
        self.header = header_text(index);
        &self.header
    }

    /// Checkbox for destination `dest` (1-based) toggled
    ///
    /// Returns `false` for a destination that does not exist.
    pub fn set_destination_visible(&mut self, dest: usize, visible: bool) -> bool {
        let Some(slot) = dest.checked_sub(1).and_then(|i| self.params.dest_visible.get_mut(i)) else {
            log::warn!("No destination {} to toggle", dest);
            return false;
        };
        *slot = visible;
        log::debug!("dest{}_visible = {}", dest, visible);
        true
    }
}

fn header_text(index: usize) -> String {
    format!("Active Hex: {}", index)
}
