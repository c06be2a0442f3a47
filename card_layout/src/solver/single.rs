use tracing::trace;

use crate::geometry::{div_ceil, ContainerSize, ZoneLayout};
use crate::solver::{stack_height, width_for_height};
use crate::{Tuning, ZoneConfig};

/// Packs the cards of one zone into a rectangle, searching over the number of rows.
///
/// Every row count from 1 to `count` is tried. A row count is rejected if the
/// columns cannot fit side by side at the minimum card width. If the rows are
/// too tall at the width-limited card size, the card width is derived from the
/// height instead. Each remaining candidate is scored by its card width,
/// multiplied by [`Tuning::row_penalty`] once for each row after the first, and
/// the best candidate wins. Ties go to fewer rows.
///
/// An empty zone gets a [placeholder](ZoneLayout::placeholder) layout, and if no
/// row count works the zone gets a single overflowing row of minimum-width cards.
pub fn solve_zone(zone: &ZoneConfig, space: ContainerSize, tuning: &Tuning) -> ZoneLayout {
    if zone.count == 0 {
        return ZoneLayout::placeholder(zone.max_card_width);
    }

    let mut best: Option<(f64, ZoneLayout)> = None;
    for rows in 1..=zone.count {
        let Some(layout) = height_limited_candidate(zone, space, rows) else {
            continue;
        };
        let score = layout.width as f64 * tuning.row_penalty.powi(rows as i32 - 1);
        trace!(rows, width = layout.width, score, "Zone candidate");
        if best.map_or(true, |(best_score, _)| score > best_score) {
            best = Some((score, layout));
        }
    }

    match best {
        Some((_, layout)) => layout,
        None => ZoneLayout::fallback(zone.min_card_width, zone.count),
    }
}

/// The simple variant of [`solve_zone()`]: returns the first row count, in
/// ascending order, whose cards fit at their width-limited size.
///
/// This never enlarges the number of rows to get bigger cards, so it tends to
/// pick long rows of small cards in tall containers.
pub fn solve_zone_first_fit(zone: &ZoneConfig, space: ContainerSize) -> ZoneLayout {
    if zone.count == 0 {
        return ZoneLayout::placeholder(zone.max_card_width);
    }

    for rows in 1..=zone.count {
        let Some(layout) = width_limited_candidate(zone, space, rows) else {
            continue;
        };
        if stack_height(layout.width, rows, zone.gap) <= space.height {
            return layout;
        }
    }
    ZoneLayout::fallback(zone.min_card_width, zone.count)
}

/// The largest card that fits `rows` rows horizontally, ignoring the height.
fn width_limited_candidate(zone: &ZoneConfig, space: ContainerSize, rows: u32) -> Option<ZoneLayout> {
    let columns = div_ceil(zone.count, rows);
    let natural_width =
        (space.width - zone.gap * (columns - 1) as f64) / columns as f64;
    if natural_width < zone.min_card_width as f64 {
        return None;
    }
    let width = natural_width.min(zone.max_card_width as f64).floor() as u32;
    if width < min_width(zone) {
        return None;
    }
    Some(ZoneLayout::from_grid(width, rows, columns))
}

/// Like [`width_limited_candidate()`], but shrinks the cards until the rows fit vertically.
fn height_limited_candidate(zone: &ZoneConfig, space: ContainerSize, rows: u32) -> Option<ZoneLayout> {
    let layout = width_limited_candidate(zone, space, rows)?;
    if stack_height(layout.width, rows, zone.gap) <= space.height {
        return Some(layout);
    }

    let from_height = width_for_height(space.height, rows, zone.gap);
    if from_height < min_width(zone) as f64 {
        return None;
    }
    let mut width = (from_height.floor() as u32).min(layout.width);
    // Rounding the height can still overshoot by a pixel
    while width >= min_width(zone) && stack_height(width, rows, zone.gap) > space.height {
        width -= 1;
    }
    if width < min_width(zone) {
        return None;
    }
    Some(ZoneLayout::from_grid(width, rows, layout.columns))
}

/// Cards must be at least one pixel wide to count as a fit.
fn min_width(zone: &ZoneConfig) -> u32 {
    zone.min_card_width.max(1)
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::ZoneInput;
    use crate::geometry::card_height;

    fn zone(count: u32) -> ZoneConfig {
        ZoneConfig {
            count,
            gap: 8.0,
            max_card_width: 160,
            min_card_width: 40,
        }
    }

    fn is_fallback(input: &ZoneInput, layout: &ZoneLayout) -> bool {
        *layout == ZoneLayout::fallback(input.zone.min_card_width, input.zone.count)
    }

    quickcheck! {
        fn aspect_ratio_holds(input: ZoneInput) -> bool {
            let layout = solve_zone(&input.zone, input.space, &input.tuning);
            layout.height == card_height(layout.width)
        }

        fn chosen_rows_fit(input: ZoneInput) -> bool {
            let layout = solve_zone(&input.zone, input.space, &input.tuning);
            input.zone.count == 0
                || is_fallback(&input, &layout)
                || layout.total_height(input.zone.gap) <= input.space.height
        }

        fn width_respects_bounds(input: ZoneInput) -> bool {
            let layout = solve_zone(&input.zone, input.space, &input.tuning);
            input.zone.count == 0
                || (layout.width >= input.zone.min_card_width
                    && layout.width <= input.zone.max_card_width)
        }

        fn grid_holds_every_card(input: ZoneInput) -> bool {
            let layout = solve_zone(&input.zone, input.space, &input.tuning);
            layout.rows * layout.columns >= input.zone.count
        }

        fn first_fit_rows_fit(input: ZoneInput) -> bool {
            let layout = solve_zone_first_fit(&input.zone, input.space);
            layout.height == card_height(layout.width)
                && (input.zone.count == 0
                    || is_fallback(&input, &layout)
                    || layout.total_height(input.zone.gap) <= input.space.height)
        }

        fn solving_is_idempotent(input: ZoneInput) -> bool {
            solve_zone(&input.zone, input.space, &input.tuning)
                == solve_zone(&input.zone, input.space, &input.tuning)
        }
    }

    #[test]
    fn empty_zone_is_placeholder() {
        for space in [
            ContainerSize::new(0.0, 0.0),
            ContainerSize::new(1000.0, 800.0),
            ContainerSize::new(-5.0, 20.0),
        ] {
            assert_eq!(
                solve_zone(&zone(0), space, &Tuning::default()),
                ZoneLayout {
                    width: 160,
                    height: 224,
                    rows: 1,
                    columns: 1
                }
            );
        }
    }

    #[test]
    fn single_card_gets_max_width() {
        let layout = solve_zone(&zone(1), ContainerSize::new(1000.0, 800.0), &Tuning::default());
        assert_eq!(layout, ZoneLayout::from_grid(160, 1, 1));
    }

    #[test]
    fn scored_search_prefers_second_row_for_bigger_cards() {
        let space = ContainerSize::new(1000.0, 400.0);
        // One row of ten: (1000 - 72) / 10 = 92.8
        assert_eq!(solve_zone_first_fit(&zone(10), space), ZoneLayout::from_grid(92, 1, 10));
        // Two rows of five are limited by the height: (400 - 8) / 2.8 = 140
        assert_eq!(
            solve_zone(&zone(10), space, &Tuning::default()),
            ZoneLayout::from_grid(140, 2, 5)
        );
    }

    #[test]
    fn strong_row_penalty_keeps_one_row() {
        let tuning = Tuning {
            row_penalty: 0.5,
            ..Tuning::default()
        };
        let layout = solve_zone(&zone(10), ContainerSize::new(1000.0, 400.0), &tuning);
        assert_eq!(layout.rows, 1);
        assert_eq!(layout.width, 92);
    }

    #[test]
    fn nothing_fits_falls_back_to_min_width() {
        let layout = solve_zone(&zone(10), ContainerSize::new(100.0, 100.0), &Tuning::default());
        assert_eq!(layout, ZoneLayout::fallback(40, 10));
        assert_eq!(layout.height, 56);
        let layout = solve_zone_first_fit(&zone(10), ContainerSize::new(100.0, 100.0));
        assert_eq!(layout, ZoneLayout::fallback(40, 10));
    }

    #[test]
    fn height_rounding_never_overflows() {
        // 3 rows in 200px: (200 - 16) / 4.2 = 43.8, and 43 * 1.4 = 60.2
        let config = ZoneConfig {
            count: 9,
            gap: 8.0,
            max_card_width: 160,
            min_card_width: 10,
        };
        let space = ContainerSize::new(1000.0, 200.0);
        let layout = solve_zone(&config, space, &Tuning::default());
        assert!(layout.total_height(config.gap) <= space.height);
    }
}
