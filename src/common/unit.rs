//! Unit conversion utilities.
//!
//! Slide geometry is authored in percentages of the slide bounds, while
//! DrawingML positions shapes in English Metric Units (EMU). Font sizes are
//! authored in points and written in hundredths of a point.

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_PT: i64 = 12_700;

/// Slide width shared by both supported aspect ratios (10 inches).
pub const SLIDE_WIDTH_EMU: i64 = 10 * EMUS_PER_INCH;
/// Slide height for 16:9 (5.625 inches).
pub const SLIDE_HEIGHT_16X9_EMU: i64 = 5_143_500;
/// Slide height for 4:3 (7.5 inches).
pub const SLIDE_HEIGHT_4X3_EMU: i64 = 6_858_000;

/// Convert a percentage of `total_emu` to EMU.
///
/// Values outside `0..=100` are converted as-is; out-of-bounds placement is
/// allowed and simply overflows the slide.
#[inline]
pub fn percent_to_emu(percent: f64, total_emu: i64) -> i64 {
    (percent / 100.0 * total_emu as f64).round() as i64
}

#[inline]
pub fn pt_to_emu_f64(pt: f64) -> i64 {
    (pt * EMUS_PER_PT as f64) as i64
}

/// Font size in points to the DrawingML `sz` attribute (hundredths of a point).
#[inline]
pub fn pt_to_centipoints(pt: f64) -> u32 {
    (pt * 100.0).round().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_to_emu() {
        assert_eq!(percent_to_emu(0.0, SLIDE_WIDTH_EMU), 0);
        assert_eq!(percent_to_emu(100.0, SLIDE_WIDTH_EMU), 9_144_000);
        assert_eq!(percent_to_emu(50.0, SLIDE_HEIGHT_16X9_EMU), 2_571_750);
        assert_eq!(percent_to_emu(10.0, SLIDE_WIDTH_EMU), 914_400);
    }

    #[test]
    fn test_percent_out_of_bounds_is_kept() {
        assert_eq!(percent_to_emu(120.0, SLIDE_WIDTH_EMU), 10_972_800);
        assert_eq!(percent_to_emu(-10.0, SLIDE_WIDTH_EMU), -914_400);
    }

    #[test]
    fn test_points() {
        assert_eq!(pt_to_centipoints(18.0), 1800);
        assert_eq!(pt_to_centipoints(10.5), 1050);
        assert_eq!(pt_to_emu_f64(1.0), 12_700);
    }
}
