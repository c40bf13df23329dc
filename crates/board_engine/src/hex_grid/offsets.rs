//! UV offsets of every hex in the mask texture

use crate::config::HexGridConfig;
use crate::foundation::math::Vec2;

/// Row-major table of hex mask offsets
///
/// Entry `x + columns * y` is
/// `(origin.x + column_step * x, origin.y - row_step * y + stagger?)`, where
/// the stagger is applied to every other hex counted across the whole table,
/// starting unstaggered at index 0.
#[derive(Debug, Clone, PartialEq)]
pub struct HexOffsetTable {
    offsets: Vec<Vec2>,
    columns: usize,
}

impl HexOffsetTable {
    /// Compute the table for `config`
    pub fn build(config: &HexGridConfig) -> Self {
        let mut offsets = Vec::with_capacity(config.columns * config.rows);
        let mut even = true;
        for y in 0..config.rows {
            let row_v = config.origin.y - config.row_step * y as f32;
            for x in 0..config.columns {
                let u = config.origin.x + config.column_step * x as f32;
                let stagger = if even { 0.0 } else { config.stagger };
                offsets.push(Vec2::new(u, row_v + stagger));
                even = !even;
            }
        }
        log::debug!("Built {} hex offsets", offsets.len());
        Self { offsets, columns: config.columns }
    }

    /// Offset at row-major `index`
    pub fn get(&self, index: usize) -> Option<Vec2> {
        self.offsets.get(index).copied()
    }

    /// Offset of the hex at column `x`, row `y`
    pub fn at(&self, x: usize, y: usize) -> Option<Vec2> {
        if x >= self.columns {
            return None;
        }
        self.get(x + self.columns * y)
    }

    /// Highest valid index
    pub fn max_index(&self) -> usize {
        self.offsets.len().saturating_sub(1)
    }

    /// Number of hexes
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_table() {
        let table = HexOffsetTable::build(&HexGridConfig::default());
        assert_eq!(table.len(), 91);
        assert_eq!(table.max_index(), 90);

        assert_relative_eq!(table.get(0).unwrap(), Vec2::new(-0.07, 0.04), epsilon = 1e-6);
        assert_relative_eq!(table.get(1).unwrap(), Vec2::new(-0.0002, 0.08), epsilon = 1e-6);
        assert!(table.get(91).is_none());
    }

    #[test]
    fn test_stagger_runs_across_rows() {
        let table = HexOffsetTable::build(&HexGridConfig::default());
        // 13 columns: index 12 is even and unstaggered, so row 1 starts staggered
        assert_relative_eq!(table.at(12, 0).unwrap().y, 0.04, epsilon = 1e-6);
        let first_of_row_1 = table.at(0, 1).unwrap();
        assert_relative_eq!(first_of_row_1.x, -0.07, epsilon = 1e-6);
        assert_relative_eq!(first_of_row_1.y, 0.04 - 0.1208 + 0.04, epsilon = 1e-6);
        assert_relative_eq!(table.at(1, 1).unwrap().y, 0.04 - 0.1208, epsilon = 1e-6);
    }

    #[test]
    fn test_out_of_range_column() {
        let table = HexOffsetTable::build(&HexGridConfig::default());
        assert!(table.at(13, 0).is_none());
        assert!(table.at(0, 7).is_none());
    }
}
