use std::io::{self, stdout};
use std::rc::Rc;

use card_layout::driver::{attach, LayoutHandle, ManualResizeSource};
use card_layout::{
    solve_battle, BattleCounts, BattleLayout, BattleZoneConfig, ContainerSize, HandConfig, Tuning,
    ZoneLayout,
};
use ratatui::{
    crossterm::{
        event::{self, Event, KeyCode},
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
        ExecutableCommand,
    },
    prelude::*,
    widgets::*,
};

/// Pixels per terminal cell, horizontally and vertically.
const CELL_WIDTH: u32 = 8;
const CELL_HEIGHT: u32 = 16;

/// Terminal lines above and below the board.
const CHROME_LINES: u16 = 2;
const RAIL_WIDTH: u16 = 22;

fn board_config(counts: BattleCounts) -> BattleZoneConfig {
    BattleZoneConfig {
        counts,
        fixed_height: (CHROME_LINES as u32 * CELL_HEIGHT) as f64,
        zone_column_width: (RAIL_WIDTH as u32 * CELL_WIDTH) as f64,
        gap: CELL_WIDTH as f64,
        battlefield_max_width: 12 * CELL_WIDTH,
        battlefield_min_width: 3 * CELL_WIDTH,
        hand: HandConfig {
            gap: CELL_WIDTH as i32,
            max_card_width: 12 * CELL_WIDTH,
            padding: 2 * CELL_WIDTH,
        },
        fallback_width: 3 * CELL_WIDTH,
    }
}

fn terminal_size(width: u16, height: u16) -> ContainerSize {
    ContainerSize::new(
        (width as u32 * CELL_WIDTH) as f64,
        (height as u32 * CELL_HEIGHT) as f64,
    )
}

fn main() -> io::Result<()> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let area = terminal.size()?;
    let source = Rc::new(ManualResizeSource::new(terminal_size(area.width, area.height)));
    let mut board = Board::new(source.clone());

    let mut should_quit = false;
    while !should_quit {
        terminal.draw(|frame| board.ui(frame))?;
        should_quit = board.handle_events(&source)?;
    }

    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

struct Board {
    counts: BattleCounts,
    layout: LayoutHandle<BattleLayout>,
}

impl Board {
    fn new(source: Rc<ManualResizeSource>) -> Self {
        let counts = BattleCounts {
            player_hand: 7,
            opponent_hand: 5,
            player_lands: 4,
            player_nonlands: 3,
            opponent_lands: 3,
            opponent_nonlands: 2,
        };
        let config = board_config(counts);
        let layout = attach(source, move |size| solve_battle(&config, size, &Tuning::default()));
        Self { counts, layout }
    }

    fn set_counts(&mut self, counts: BattleCounts) {
        self.counts = counts;
        let config = board_config(counts);
        self.layout
            .set_solver(move |size| solve_battle(&config, size, &Tuning::default()));
    }

    /// Returns whether to quit.
    fn handle_events(&mut self, source: &ManualResizeSource) -> io::Result<bool> {
        if !event::poll(std::time::Duration::from_millis(16))? {
            return Ok(false);
        }
        match event::read()? {
            Event::Resize(width, height) => source.resize(terminal_size(width, height)),
            Event::Key(key) if key.kind == event::KeyEventKind::Press => {
                let mut counts = self.counts;
                let count = match key.code {
                    KeyCode::Char('q') => return Ok(true),
                    KeyCode::Char('h' | 'H') => &mut counts.player_hand,
                    KeyCode::Char('o' | 'O') => &mut counts.opponent_hand,
                    KeyCode::Char('l' | 'L') => &mut counts.player_lands,
                    KeyCode::Char('n' | 'N') => &mut counts.player_nonlands,
                    KeyCode::Char('k' | 'K') => &mut counts.opponent_lands,
                    KeyCode::Char('m' | 'M') => &mut counts.opponent_nonlands,
                    _ => return Ok(false),
                };
                // Lower case adds a card, upper case removes one
                match key.code {
                    KeyCode::Char(c) if c.is_ascii_uppercase() => *count = count.saturating_sub(1),
                    _ => *count += 1,
                }
                self.set_counts(counts);
            }
            _ => {}
        }
        Ok(false)
    }

    fn ui(&self, frame: &mut Frame) {
        let layout = self.layout.current_layout();
        let [title, main, status] = Layout::new(
            Direction::Vertical,
            [Constraint::Length(1), Constraint::Min(0), Constraint::Length(1)],
        )
        .areas(frame.size());
        let [board, rail] = Layout::new(
            Direction::Horizontal,
            [Constraint::Min(0), Constraint::Length(RAIL_WIDTH)],
        )
        .areas(main);

        frame.render_widget(
            Paragraph::new("Battle board  (q quits, h/o/l/n/k/m add a card, shift removes one)"),
            title,
        );

        let rows = Layout::new(Direction::Vertical, [Constraint::Ratio(1, 6); 6]).split(board);
        let counts = [
            self.counts.opponent_hand,
            self.counts.opponent_lands,
            self.counts.opponent_nonlands,
            self.counts.player_nonlands,
            self.counts.player_lands,
            self.counts.player_hand,
        ];
        let mut rail_lines = Vec::new();
        for (idx, (name, zone)) in layout.zones().into_iter().enumerate() {
            let gap = match name {
                "player_hand" => layout.player_hand_gap,
                "opponent_hand" => layout.opponent_hand_gap,
                _ => CELL_WIDTH as i32,
            };
            frame.render_widget(ZoneWidget { zone, count: counts[idx], gap }, rows[idx]);
            rail_lines.push(Line::from(format!("{:<17}{:>3}", name, counts[idx])));
            rail_lines.push(Line::from(format!("  {}x{} px", zone.width, zone.height)).dim());
        }
        frame.render_widget(
            Paragraph::new(rail_lines).block(Block::new().borders(Borders::LEFT)),
            rail,
        );

        let size = self.layout.container_size();
        frame.render_widget(
            Paragraph::new(format!(
                "{}x{} px, row height {} px",
                size.width, size.height, layout.row_height
            ))
            .dim(),
            status,
        );
    }
}

/// Draws the cards of one zone, converting pixel sizes into terminal cells.
struct ZoneWidget {
    zone: ZoneLayout,
    count: u32,
    /// May be negative for overlapping hands.
    gap: i32,
}

impl Widget for ZoneWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let card_width = ((self.zone.width / CELL_WIDTH) as i32).max(3);
        let card_height = ((self.zone.height / CELL_HEIGHT) as i32).max(2);
        let step_x = (card_width + self.gap / CELL_WIDTH as i32).max(1);
        let step_y = card_height;

        for idx in 0..self.count {
            let row = idx / self.zone.columns.max(1);
            let col = idx % self.zone.columns.max(1);
            let Some((x, y)) = card_origin(area, row, col, step_x, step_y) else {
                continue;
            };
            let card = Rect {
                x,
                y,
                width: card_width as u16,
                height: card_height as u16,
            };
            let visible = card.intersection(area);
            if visible.is_empty() {
                continue;
            }
            Block::new()
                .border_type(BorderType::Rounded)
                .borders(Borders::all())
                .render(visible, buf);
        }
    }
}

/// Top left corner of the card in grid cell `(row, col)`, or `None` if it lies
/// beyond what a terminal can address.
fn card_origin(area: Rect, row: u32, col: u32, step_x: i32, step_y: i32) -> Option<(u16, u16)> {
    let x = u16::try_from(area.x as i64 + col as i64 * step_x as i64).ok()?;
    let y = u16::try_from(area.y as i64 + row as i64 * step_y as i64).ok()?;
    Some((x, y))
}
