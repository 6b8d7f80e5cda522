// Common constants for all element kinds
pub const GRID_SIZE: u32 = 20;
pub const MIN_ELEMENT_WIDTH: u32 = 50;
pub const MIN_ELEMENT_HEIGHT: u32 = 30;

/// Clamp a signed coordinate into the non-negative range
pub fn clamp_coordinate(value: i64) -> u32 {
    value.clamp(0, i64::from(u32::MAX)) as u32
}

/// Round a value to the nearest multiple of `grid`; halves round up.
///
/// A grid of zero disables snapping.
pub fn snap_to_grid(value: u32, grid: u32) -> u32 {
    if grid == 0 {
        return value;
    }
    let snapped = (u64::from(value) + u64::from(grid / 2)) / u64::from(grid) * u64::from(grid);
    snapped.min(u64::from(u32::MAX / grid * grid)) as u32
}

/// Clamp a requested size against a floor, then optionally snap it.
///
/// Snapping happens after the clamp and never goes below the floor.
pub(crate) fn constrain_dimension(value: i64, floor: u32, grid: Option<u32>) -> u32 {
    let clamped = clamp_coordinate(value).max(floor);
    match grid {
        Some(grid) => {
            let snapped = snap_to_grid(clamped, grid);
            if snapped < floor { snapped + grid } else { snapped }
        }
        None => clamped,
    }
}

/// Clamp a requested position to the page, then optionally snap it.
pub(crate) fn constrain_position(value: i64, grid: Option<u32>) -> u32 {
    let clamped = clamp_coordinate(value);
    match grid {
        Some(grid) => snap_to_grid(clamped, grid),
        None => clamped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snap_rounds_halves_up() {
        assert_eq!(snap_to_grid(5, 20), 0);
        assert_eq!(snap_to_grid(10, 20), 20);
        assert_eq!(snap_to_grid(25, 20), 20);
        assert_eq!(snap_to_grid(31, 20), 40);
        assert_eq!(snap_to_grid(7, 0), 7);
    }

    #[test]
    fn dimensions_never_drop_below_floor() {
        assert_eq!(constrain_dimension(-400, MIN_ELEMENT_WIDTH, None), 50);
        assert_eq!(constrain_dimension(10, MIN_ELEMENT_WIDTH, Some(GRID_SIZE)), 60);
        assert_eq!(constrain_dimension(10, MIN_ELEMENT_HEIGHT, Some(GRID_SIZE)), 40);
        // A coarse grid cannot round a size back under its floor.
        assert_eq!(constrain_dimension(50, 50, Some(200)), 200);
    }

    #[test]
    fn positions_are_clamped_before_snapping() {
        assert_eq!(constrain_position(-35, Some(GRID_SIZE)), 0);
        assert_eq!(constrain_position(-35, None), 0);
        assert_eq!(constrain_position(i64::MAX, None), u32::MAX);
    }
}
