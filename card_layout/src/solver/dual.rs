use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::geometry::{card_height, div_ceil, ContainerSize, ZoneLayout};
use crate::solver::{solve_zone, stack_height, width_for_height};
use crate::{DualZoneConfig, Tuning, ZoneConfig};

/// Layouts of two zones stacked on top of each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DualLayout {
    pub top: ZoneLayout,
    pub bottom: ZoneLayout,
}

/// How [`solve_dual_with()`] divides the height between the two zones.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DualStrategy {
    /// Try every pair of row counts and pick the pair with the best joint score.
    #[default]
    Exhaustive,
    /// Try a few fixed height splits, solve each zone on its own, and pick the
    /// split with the largest total card area.
    SplitSweep,
}

/// Lays out two zones that compete for the height of one container.
///
/// Same as [`solve_dual_with()`] with [`DualStrategy::Exhaustive`].
pub fn solve_dual(config: &DualZoneConfig, space: ContainerSize, tuning: &Tuning) -> DualLayout {
    solve_dual_with(config, space, tuning, DualStrategy::Exhaustive)
}

pub fn solve_dual_with(
    config: &DualZoneConfig,
    space: ContainerSize,
    tuning: &Tuning,
    strategy: DualStrategy,
) -> DualLayout {
    let DualZoneConfig { top, bottom, .. } = config;
    let avail = space.shrink(0.0, config.fixed_height);

    match (top.count, bottom.count) {
        (0, 0) => DualLayout {
            top: ZoneLayout::placeholder(top.max_card_width),
            bottom: ZoneLayout::placeholder(bottom.max_card_width),
        },
        (0, _) => DualLayout {
            top: ZoneLayout::placeholder(top.max_card_width),
            bottom: solve_zone(bottom, avail, tuning),
        },
        (_, 0) => DualLayout {
            top: solve_zone(top, avail, tuning),
            bottom: ZoneLayout::placeholder(bottom.max_card_width),
        },
        _ => {
            let best = match strategy {
                DualStrategy::Exhaustive => best_row_pair(top, bottom, avail),
                DualStrategy::SplitSweep => best_split(top, bottom, avail, tuning),
            };
            best.unwrap_or_else(|| DualLayout {
                top: ZoneLayout::fallback(top.min_card_width, top.count),
                bottom: ZoneLayout::fallback(bottom.min_card_width, bottom.count),
            })
        }
    }
}

/// The widest card that fits `rows` rows of the zone side by side, capped at the maximum width.
fn width_cap(zone: &ZoneConfig, rows: u32, avail_width: f64) -> f64 {
    let columns = div_ceil(zone.count, rows);
    let natural = (avail_width - zone.gap * (columns - 1) as f64) / columns as f64;
    natural.min(zone.max_card_width as f64)
}

fn best_row_pair(top: &ZoneConfig, bottom: &ZoneConfig, avail: ContainerSize) -> Option<DualLayout> {
    if avail.is_empty() {
        return None;
    }

    let mut best: Option<(f64, DualLayout)> = None;
    for top_rows in 1..=top.count {
        let top_cap = width_cap(top, top_rows, avail.width);
        if top_cap < top.min_card_width as f64 {
            continue;
        }
        for bottom_rows in 1..=bottom.count {
            let bottom_cap = width_cap(bottom, bottom_rows, avail.width);
            if bottom_cap < bottom.min_card_width as f64 {
                continue;
            }
            let Some((top_width, bottom_width)) =
                widths_for_rows(top, top_rows, top_cap, bottom, bottom_rows, bottom_cap, avail.height)
            else {
                continue;
            };

            let consumed = stack_height(top_width, top_rows, top.gap)
                + stack_height(bottom_width, bottom_rows, bottom.gap);
            let fill_ratio = (consumed / avail.height).min(1.0);
            let score = top_width.min(bottom_width) as f64 * fill_ratio;
            trace!(top_rows, bottom_rows, top_width, bottom_width, score, "Dual candidate");

            if best.map_or(true, |(best_score, _)| score > best_score) {
                let layout = DualLayout {
                    top: ZoneLayout::from_grid(top_width, top_rows, div_ceil(top.count, top_rows)),
                    bottom: ZoneLayout::from_grid(
                        bottom_width,
                        bottom_rows,
                        div_ceil(bottom.count, bottom_rows),
                    ),
                };
                best = Some((score, layout));
            }
        }
    }
    best.map(|(_, layout)| layout)
}

/// Card widths for the two zones at a fixed pair of row counts.
///
/// Both zones start from a shared width that would fill the height exactly.
/// A zone whose cap is below that width keeps its cap, and the other zone is
/// sized from the height that is left over.
fn widths_for_rows(
    top: &ZoneConfig,
    top_rows: u32,
    top_cap: f64,
    bottom: &ZoneConfig,
    bottom_rows: u32,
    bottom_cap: f64,
    height: f64,
) -> Option<(u32, u32)> {
    let total_gaps = top.gap * (top_rows - 1) as f64 + bottom.gap * (bottom_rows - 1) as f64;
    let ideal = (height - total_gaps) / (crate::ASPECT_RATIO * (top_rows + bottom_rows) as f64);

    let (top_width, bottom_width) = if top_cap < ideal {
        let top_width = top_cap.floor();
        let remaining = height - stack_height(top_width as u32, top_rows, top.gap);
        (top_width, width_for_height(remaining, bottom_rows, bottom.gap).min(bottom_cap))
    } else if bottom_cap < ideal {
        let bottom_width = bottom_cap.floor();
        let remaining = height - stack_height(bottom_width as u32, bottom_rows, bottom.gap);
        (width_for_height(remaining, top_rows, top.gap).min(top_cap), bottom_width)
    } else {
        (ideal, ideal)
    };
    if top_width < 1.0 || bottom_width < 1.0 {
        return None;
    }
    let (mut top_width, mut bottom_width) = (top_width.floor() as u32, bottom_width.floor() as u32);

    // Rounding the heights can overshoot by a pixel or two; take it from the wider zone
    while stack_height(top_width, top_rows, top.gap) + stack_height(bottom_width, bottom_rows, bottom.gap)
        > height
    {
        if top_width >= bottom_width && top_width > 0 {
            top_width -= 1;
        } else if bottom_width > 0 {
            bottom_width -= 1;
        } else {
            return None;
        }
    }

    if top_width < top.min_card_width.max(1) || bottom_width < bottom.min_card_width.max(1) {
        return None;
    }
    Some((top_width, bottom_width))
}

/// Share of the height given to the top zone, in percent.
const TOP_SHARES: [u32; 7] = [30, 35, 40, 45, 50, 55, 60];

fn best_split(
    top: &ZoneConfig,
    bottom: &ZoneConfig,
    avail: ContainerSize,
    tuning: &Tuning,
) -> Option<DualLayout> {
    if avail.is_empty() {
        return None;
    }

    let mut best: Option<(f64, DualLayout)> = None;
    for share in TOP_SHARES {
        let top_height = avail.height * share as f64 / 100.0;
        let mut top_layout = solve_zone(top, ContainerSize::new(avail.width, top_height), tuning);
        let mut bottom_layout = solve_zone(
            bottom,
            ContainerSize::new(avail.width, avail.height - top_height),
            tuning,
        );
        if top_layout == ZoneLayout::fallback(top.min_card_width, top.count)
            || bottom_layout == ZoneLayout::fallback(bottom.min_card_width, bottom.count)
        {
            continue;
        }

        // Both zones show their cards at the same size
        let width = top_layout.width.min(bottom_layout.width);
        if width < top.min_card_width.max(bottom.min_card_width) {
            continue;
        }
        for layout in [&mut top_layout, &mut bottom_layout] {
            layout.width = width;
            layout.height = card_height(width);
        }

        let area = (top.count + bottom.count) as f64 * width as f64 * card_height(width) as f64;
        if best.map_or(true, |(best_area, _)| area > best_area) {
            best = Some((
                area,
                DualLayout {
                    top: top_layout,
                    bottom: bottom_layout,
                },
            ));
        }
    }
    best.map(|(_, layout)| layout)
}
