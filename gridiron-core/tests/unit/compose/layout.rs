use super::*;

#[test]
fn mobile_grid_matches_fixed_constants() {
    let l = ProfileLayout::for_profile(DeviceProfile::Mobile);
    assert_eq!((l.grid_rows, l.grid_cols), (4, 3));
    assert_eq!(l.capacity(), 12);
    // 1284 / 2 - (2 * 300) / 2
    assert_eq!(l.cell_origin(0, 1284), Some((342, 1050)));
    assert_eq!(l.cell_origin(2, 1284), Some((942, 1050)));
    assert_eq!(l.cell_origin(3, 1284), Some((342, 1280)));
    assert_eq!(l.cell_origin(11, 1284), Some((942, 1740)));
    assert_eq!(l.cell_origin(12, 1284), None);
}

#[test]
fn pc_grid_fits_canvas() {
    let l = ProfileLayout::for_profile(DeviceProfile::Pc);
    let size = DeviceProfile::Pc.size();
    assert_eq!(l.capacity(), 12);
    for i in 0..l.capacity() {
        let (cx, top) = l.cell_origin(i, size.width).unwrap();
        let half = i64::from(l.thumb_size / 2 + l.thumb_outline);
        assert!(cx - half >= 0 && cx + half <= i64::from(size.width));
        let label_bottom = top + i64::from(l.thumb_size + l.date_offset) + l.date_font_px as i64;
        assert!(label_bottom <= i64::from(size.height), "cell {i} overflows");
    }
}

#[test]
fn profiles_have_distinct_layouts() {
    let pc = ProfileLayout::for_profile(DeviceProfile::Pc);
    assert_eq!(pc, ProfileLayout::for_profile(DeviceProfile::Pc));
    assert_ne!(pc, ProfileLayout::for_profile(DeviceProfile::Mobile));
    assert_eq!(pc.date_font_px, 36.0);
}
