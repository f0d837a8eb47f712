use crate::foundation::core::DeviceProfile;

/// Fixed pixel geometry of one device profile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProfileLayout {
    /// Hero logo width bound.
    pub hero_max_width: u32,
    /// Hero logo top edge when the schedule grid is shown.
    pub hero_top: u32,
    /// Hero logo outline thickness.
    pub hero_outline: u32,
    /// Grid columns.
    pub grid_cols: u32,
    /// Grid rows.
    pub grid_rows: u32,
    /// Top edge of the first grid row.
    pub grid_top: u32,
    /// Vertical distance between row tops.
    pub row_spacing: u32,
    /// Horizontal distance between column centers.
    pub col_spacing: u32,
    /// Opponent thumbnail bound.
    pub thumb_size: u32,
    /// Opponent thumbnail outline thickness.
    pub thumb_outline: u32,
    /// Date label font size in pixels.
    pub date_font_px: f32,
    /// Date label center, measured down from the bottom of the thumbnail box.
    pub date_offset: u32,
    /// Date label stroke width.
    pub date_stroke: u32,
}

const MOBILE: ProfileLayout = ProfileLayout {
    hero_max_width: 1800,
    hero_top: 300,
    hero_outline: 14,
    grid_cols: 3,
    grid_rows: 4,
    grid_top: 1050,
    row_spacing: 230,
    col_spacing: 300,
    thumb_size: 150,
    thumb_outline: 3,
    date_font_px: 40.0,
    date_offset: 34,
    date_stroke: 2,
};

const PC: ProfileLayout = ProfileLayout {
    hero_max_width: 760,
    hero_top: 100,
    hero_outline: 10,
    grid_cols: 6,
    grid_rows: 2,
    grid_top: 940,
    row_spacing: 230,
    col_spacing: 330,
    thumb_size: 130,
    thumb_outline: 3,
    date_font_px: 36.0,
    date_offset: 30,
    date_stroke: 2,
};

impl ProfileLayout {
    /// Geometry for `profile`.
    pub fn for_profile(profile: DeviceProfile) -> Self {
        match profile {
            DeviceProfile::Pc => PC,
            DeviceProfile::Mobile => MOBILE,
        }
    }

    /// Number of grid cells.
    pub fn capacity(&self) -> usize {
        (self.grid_cols * self.grid_rows) as usize
    }

    /// Center x and top y of cell `index` (row-major) on a canvas `canvas_width` wide.
    ///
    /// `None` past the last cell.
    pub fn cell_origin(&self, index: usize, canvas_width: u32) -> Option<(i64, i64)> {
        if index >= self.capacity() {
            return None;
        }
        let cols = self.grid_cols as usize;
        let (row, col) = ((index / cols) as i64, (index % cols) as i64);
        let span = i64::from(self.col_spacing) * (i64::from(self.grid_cols) - 1);
        let left = i64::from(canvas_width) / 2 - span / 2;
        Some((
            left + col * i64::from(self.col_spacing),
            i64::from(self.grid_top) + row * i64::from(self.row_spacing),
        ))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/layout.rs"]
mod tests;
