//! Tick spacing and tick label formatting for axis rails.

use super::BoundingBoxConfig;
use crate::math::Vector3;
use crate::objects::TickMarks;

/// Tick placement derived once from a box's edge lengths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickParams {
    /// Longest edge length.
    pub line_max: f32,
    /// Edge length the spacing is fitted to.
    pub line_min: f32,
    /// Distance between consecutive ticks.
    pub tick_distance: f32,
    /// Half-length of each tick stroke.
    pub tick_size: f32,
}

impl TickParams {
    /// Derive tick parameters from a box size.
    ///
    /// A box that is flat on some axis, or far thinner on one axis than the
    /// longest edge, fits its spacing to the longest edge instead.
    pub fn from_size(size: Vector3, config: &BoundingBoxConfig) -> Self {
        let line_max = size.x.max(size.y).max(size.z);
        let mut line_min = size.x.min(size.y).min(size.z);
        if line_min <= 0.0 || line_min.is_nan() || line_max / line_min > config.max_aspect_ratio {
            log::debug!(
                "shortest edge {} unusable for tick spacing, using longest edge {}",
                line_min,
                line_max
            );
            line_min = line_max;
        }

        let tick_distance = match nice_tick_distance(line_min) {
            Some(distance) => distance,
            None if line_max == 0.0 => 1.0,
            None => {
                log::warn!("no tick spacing fits edge length {}, using 1", line_min);
                1.0
            }
        };

        Self {
            line_max,
            line_min,
            tick_distance,
            tick_size: line_max / config.tick_size_divisor,
        }
    }

    /// Distance from `origin` to the first tick along its axis.
    ///
    /// Uses the truncated remainder, so a negative origin puts the first tick
    /// one spacing further out.
    #[inline]
    pub fn first_offset(&self, origin: f32) -> f32 {
        self.tick_distance - origin % self.tick_distance
    }

    /// Tick marks for a rail whose first tick sits `first` from its start.
    #[inline]
    pub fn tick_marks(&self, first: f32) -> TickMarks {
        TickMarks {
            spacing: self.tick_distance,
            first,
            half_length: self.tick_size,
        }
    }
}

/// A spacing that fits between two and five ticks into `line_min`.
///
/// Starts from the smallest power of ten leaving at most five ticks, halved
/// when that leaves fewer than two. Where that still misses the range
/// (leading digits from 5 up to 10), the densest spacing of the form 1, 2 or
/// 5 times a power of ten is used instead.
///
/// Returns `None` for input that is not finite and positive.
pub fn nice_tick_distance(line_min: f32) -> Option<f32> {
    if !line_min.is_finite() || line_min <= 0.0 {
        return None;
    }
    let fits = |tick: f32| (2.0..5.0).contains(&(line_min / tick));

    // log10 may land one decade off, the loops settle it.
    let mut unit = 10f32.powi(line_min.log10().floor() as i32);
    while line_min / unit > 5.0 {
        unit *= 10.0;
    }
    while line_min / unit <= 0.5 {
        unit /= 10.0;
    }
    if line_min / unit < 2.0 {
        unit /= 2.0;
    }
    if fits(unit) {
        return Some(unit);
    }

    let decade = 10f32.powi(line_min.log10().floor() as i32);
    [decade * 0.1, decade, decade * 10.0]
        .into_iter()
        .flat_map(|unit| [unit * 0.5, unit, unit * 2.0])
        .find(|&tick| fits(tick))
}

/// Format a tick value with at most two decimals.
///
/// Trailing zeros and a bare decimal point are dropped, and values that round
/// to zero never print a sign.
pub fn format_tick_value(value: f32) -> String {
    let fixed = format!("{value:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_string(),
        s => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nice_distance_ratio_in_range() {
        let samples = [
            0.000_37, 0.003, 0.03, 0.1, 0.25, 0.3, 0.5, 0.99, 1.0, 1.5, 2.0, 3.0, 4.99, 5.0,
            7.3, 9.99, 10.0, 42.0, 99.0, 150.0, 512.0, 1234.5, 98_765.0,
        ];
        for line_min in samples {
            let tick = nice_tick_distance(line_min).unwrap();
            let ratio = line_min / tick;
            assert!(
                (2.0..5.0).contains(&ratio),
                "line_min {line_min} tick {tick} ratio {ratio}"
            );
        }
    }

    #[test]
    fn test_nice_distance_values() {
        assert_eq!(nice_tick_distance(10.0), Some(5.0));
        assert_eq!(nice_tick_distance(7.3), Some(2.0));
        assert_eq!(nice_tick_distance(3.0), Some(1.0));
        assert_eq!(nice_tick_distance(1.0), Some(0.5));
        assert_eq!(nice_tick_distance(5.0), Some(2.0));
        assert!((nice_tick_distance(0.3).unwrap() - 0.1).abs() < 1e-6);
        assert_eq!(nice_tick_distance(0.0), None);
        assert_eq!(nice_tick_distance(-1.0), None);
        assert_eq!(nice_tick_distance(f32::INFINITY), None);
    }

    #[test]
    fn test_nice_distance_keeps_power_of_ten_when_it_fits() {
        assert_eq!(nice_tick_distance(2.2), Some(1.0));
        assert_eq!(nice_tick_distance(22.0), Some(10.0));
        assert_eq!(nice_tick_distance(2.0), Some(1.0));
        let tick = nice_tick_distance(0.22).unwrap();
        assert!((tick - 0.1).abs() < 1e-6, "{tick}");
    }

    #[test]
    fn test_non_finite_extent_falls_back_to_unit_spacing() {
        let config = BoundingBoxConfig::default();
        let params = TickParams::from_size(Vector3::new(f32::INFINITY, 1.0, 1.0), &config);
        assert_eq!(params.tick_distance, 1.0);

        let empty = TickParams::from_size(Vector3::ZERO, &config);
        assert_eq!(empty.tick_distance, 1.0);
    }

    #[test]
    fn test_from_size() {
        let params = TickParams::from_size(Vector3::new(1.0, 2.0, 3.0), &BoundingBoxConfig::default());
        assert_eq!(params.line_max, 3.0);
        assert_eq!(params.line_min, 1.0);
        assert_eq!(params.tick_distance, 0.5);
        assert!((params.tick_size - 0.06).abs() < 1e-6);
    }

    #[test]
    fn test_flat_box_fits_longest_edge() {
        let config = BoundingBoxConfig::default();

        let flat = TickParams::from_size(Vector3::new(4.0, 2.0, 0.0), &config);
        assert_eq!(flat.line_min, 4.0);
        assert_eq!(flat.tick_distance, 1.0);

        let thin = TickParams::from_size(Vector3::new(100.0, 0.5, 100.0), &config);
        assert_eq!(thin.line_min, 100.0);
        assert_eq!(thin.tick_distance, 50.0);

        // exactly at the limit still uses the short edge
        let limit = TickParams::from_size(Vector3::new(100.0, 1.0, 100.0), &config);
        assert_eq!(limit.line_min, 1.0);
    }

    #[test]
    fn test_first_offset() {
        let params = TickParams {
            line_max: 3.0,
            line_min: 3.0,
            tick_distance: 1.0,
            tick_size: 0.06,
        };
        assert!((params.first_offset(0.3) - 0.7).abs() < 1e-6);
        assert_eq!(params.first_offset(0.0), 1.0);
        assert!((params.first_offset(-0.3) - 1.3).abs() < 1e-6);

        let marks = params.tick_marks(0.7);
        assert_eq!(marks.spacing, 1.0);
        assert_eq!(marks.first, 0.7);
        assert_eq!(marks.half_length, 0.06);
    }

    #[test]
    fn test_format_tick_value() {
        assert_eq!(format_tick_value(1.0), "1");
        assert_eq!(format_tick_value(1.000_000_1), "1");
        assert_eq!(format_tick_value(0.5), "0.5");
        assert_eq!(format_tick_value(2.1), "2.1");
        assert_eq!(format_tick_value(1.256), "1.26");
        assert_eq!(format_tick_value(-3.5), "-3.5");
        assert_eq!(format_tick_value(120.0), "120");
        assert_eq!(format_tick_value(-0.001), "0");
        assert_eq!(format_tick_value(0.0), "0");
    }
}
