use crate::ZoneLayout;

/// Draws the cards of a zone as boxes, one character per `scale` pixels
/// horizontally and per `2 * scale` pixels vertically.
///
/// Cards are filled in row by row, so the last row may be shorter. An empty
/// zone is drawn as a single dotted placeholder.
pub fn visualize_zone(layout: &ZoneLayout, count: u32, scale: u32) -> String {
    let scale = scale.max(1);
    let card_cols = (layout.width / scale).max(3) as usize;
    let card_lines = (layout.height / (2 * scale)).max(2) as usize;
    let (top, side, bottom) = if count == 0 {
        (('┌', '┐'), '┊', ('└', '┘'))
    } else {
        (('╭', '╮'), '│', ('╰', '╯'))
    };
    let horizontal = if count == 0 { "╌" } else { "─" };
    let inner = card_cols - 2;

    let mut result = String::new();
    let mut remaining = count.max(1);
    for row in 0..layout.rows {
        if remaining == 0 {
            break;
        }
        let cards_in_row = remaining.min(layout.columns) as usize;
        remaining -= cards_in_row as u32;
        if row > 0 {
            result += "\n";
        }
        for line in 0..card_lines {
            let mut text = String::new();
            for card in 0..cards_in_row {
                if card > 0 {
                    text.push(' ');
                }
                if line == 0 {
                    text.push(top.0);
                    text += &horizontal.repeat(inner);
                    text.push(top.1);
                } else if line == card_lines - 1 {
                    text.push(bottom.0);
                    text += &horizontal.repeat(inner);
                    text.push(bottom.1);
                } else {
                    text.push(side);
                    text += &" ".repeat(inner);
                    text.push(side);
                }
            }
            result += text.trim_end();
            if line + 1 < card_lines {
                result += "\n";
            }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_rows_of_cards() {
        let layout = ZoneLayout::from_grid(50, 2, 2);
        let drawing = visualize_zone(&layout, 3, 10);
        // 5 characters wide, 70 / 20 = 3 lines tall
        let expected = "╭───╮ ╭───╮\n│   │ │   │\n╰───╯ ╰───╯\n╭───╮\n│   │\n╰───╯";
        assert_eq!(drawing, expected);
    }

    #[test]
    fn draws_placeholder() {
        // 30 x 42 pixels at scale 5 is 6 characters wide and 4 lines tall
        let layout = ZoneLayout::placeholder(30);
        let drawing = visualize_zone(&layout, 0, 5);
        assert_eq!(drawing, "┌╌╌╌╌┐\n┊    ┊\n┊    ┊\n└╌╌╌╌┘");
    }
}
