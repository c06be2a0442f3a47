use serde::{Deserialize, Serialize};

/// Height of a card divided by its width.
///
/// Every card tile is drawn at 7:5, whatever size the solvers pick.
pub const ASPECT_RATIO: f64 = 7.0 / 5.0;

/// The height of a card tile that is `width` pixels wide.
pub fn card_height(width: u32) -> u32 {
    (width as f64 * ASPECT_RATIO).round() as u32
}

/// The content box of the element that cards are laid out in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContainerSize {
    pub width: f64,
    pub height: f64,
}

impl ContainerSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether there is any room at all to put a card in.
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Shrinks the box by a fixed amount in each direction, without going negative.
    pub fn shrink(&self, width: f64, height: f64) -> Self {
        Self {
            width: (self.width - width).max(0.0),
            height: (self.height - height).max(0.0),
        }
    }
}

/// The pixel size of a single card tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    /// The dimensions of a card with the given width, at the card aspect ratio.
    pub fn from_width(width: u32) -> Self {
        Self {
            width,
            height: card_height(width),
        }
    }
}

/// The size and grid arrangement of the cards in one zone.
///
/// `rows * columns` is always at least the number of cards in the zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneLayout {
    pub width: u32,
    pub height: u32,
    pub rows: u32,
    pub columns: u32,
}

impl ZoneLayout {
    /// A grid of `rows` x `columns` cards that are `width` pixels wide.
    pub fn from_grid(width: u32, rows: u32, columns: u32) -> Self {
        Self {
            width,
            height: card_height(width),
            rows,
            columns,
        }
    }

    /// The layout of an empty zone.
    ///
    /// Empty zones keep a card-sized footprint so they don't collapse.
    pub fn placeholder(max_width: u32) -> Self {
        Self {
            width: max_width,
            height: card_height(max_width),
            rows: 1,
            columns: 1,
        }
    }

    /// The layout used when no arrangement fits: a single row of minimum-size
    /// cards that is allowed to overflow horizontally.
    pub fn fallback(min_width: u32, count: u32) -> Self {
        Self {
            width: min_width,
            height: card_height(min_width),
            rows: 1,
            columns: count.max(1),
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.width,
            height: self.height,
        }
    }

    /// Width of one full row of cards, including the gaps between them.
    pub fn total_width(&self, gap: f64) -> f64 {
        self.columns as f64 * self.width as f64 + gap * self.columns.saturating_sub(1) as f64
    }

    /// Height of all rows of cards, including the gaps between them.
    pub fn total_height(&self, gap: f64) -> f64 {
        self.rows as f64 * self.height as f64 + gap * self.rows.saturating_sub(1) as f64
    }
}

/// Ceiling division for row/column counts.
pub(crate) fn div_ceil(a: u32, b: u32) -> u32 {
    a.div_ceil(b)
}
