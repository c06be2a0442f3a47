use card_layout::{
    card_height, solve_battle, solve_dual, solve_zone, BattleCounts, ContainerSize, ZoneLayout,
};
use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, warn};

use crate::LayoutFile;

/// How many random layouts broke each of the layout properties.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub runs: usize,
    pub layouts_checked: usize,
    /// `height != round(width * 7/5)`
    pub aspect_violations: usize,
    /// The rows of a zone are taller than the space they were given.
    pub fit_violations: usize,
    /// A card is narrower than the zone's minimum width.
    pub width_floor_violations: usize,
    /// Solving twice gave different results.
    pub idempotence_violations: usize,
}

impl SweepReport {
    pub fn violations(&self) -> usize {
        self.aspect_violations
            + self.fit_violations
            + self.width_floor_violations
            + self.idempotence_violations
    }

    fn check_zone(&mut self, layout: &ZoneLayout, gap: f64, height: f64, min_width: u32, fallback: bool) {
        self.layouts_checked += 1;
        if layout.height != card_height(layout.width) {
            self.aspect_violations += 1;
        }
        if !fallback && layout.total_height(gap) > height {
            self.fit_violations += 1;
        }
        if !fallback && layout.width < min_width {
            self.width_floor_violations += 1;
        }
    }
}

/// Solves the zones of `file` with random counts at random container sizes,
/// and checks every result.
pub fn run_sweep(rng: &mut StdRng, runs: usize, file: &LayoutFile) -> SweepReport {
    let mut report = SweepReport {
        runs,
        ..SweepReport::default()
    };
    let tuning = &file.tuning;

    for run in 0..runs {
        let space = ContainerSize::new(rng.gen_range(0..2000) as f64, rng.gen_range(0..1400) as f64);
        debug!(run, ?space);

        let zone = file.zone.with_count(rng.gen_range(0..40));
        let layout = solve_zone(&zone, space, tuning);
        if zone.count > 0 {
            let fallback = layout == ZoneLayout::fallback(zone.min_card_width, zone.count);
            report.check_zone(&layout, zone.gap, space.height, zone.min_card_width, fallback);
        }
        if layout != solve_zone(&zone, space, tuning) {
            report.idempotence_violations += 1;
        }

        let mut dual = file.dual;
        dual.top.count = rng.gen_range(1..30);
        dual.bottom.count = rng.gen_range(1..30);
        let layout = solve_dual(&dual, space, tuning);
        let fallback = layout.top == ZoneLayout::fallback(dual.top.min_card_width, dual.top.count);
        let avail_height = space.height - dual.fixed_height;
        report.check_zone(&layout.top, 0.0, f64::INFINITY, dual.top.min_card_width, fallback);
        report.check_zone(&layout.bottom, 0.0, f64::INFINITY, dual.bottom.min_card_width, fallback);
        let consumed = layout.top.total_height(dual.top.gap) + layout.bottom.total_height(dual.bottom.gap);
        if !fallback && consumed > avail_height {
            report.fit_violations += 1;
        }
        if layout != solve_dual(&dual, space, tuning) {
            report.idempotence_violations += 1;
        }

        let battle = file.battle.with_counts(BattleCounts {
            player_hand: rng.gen_range(0..15),
            opponent_hand: rng.gen_range(0..15),
            player_lands: rng.gen_range(0..15),
            player_nonlands: rng.gen_range(0..15),
            opponent_lands: rng.gen_range(0..15),
            opponent_nonlands: rng.gen_range(0..15),
        });
        let layout = solve_battle(&battle, space, tuning);
        for (name, zone) in layout.zones() {
            report.layouts_checked += 1;
            if zone.height != card_height(zone.width) {
                report.aspect_violations += 1;
            }
            if layout.row_height > 0 && zone.height > layout.row_height {
                warn!(run, zone = name, ?space, "Battle zone is taller than its row");
                report.fit_violations += 1;
            }
        }
        if layout != solve_battle(&battle, space, tuning) {
            report.idempotence_violations += 1;
        }
    }
    report
}
