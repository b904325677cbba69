//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position as ScreenPosition, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::app::{App, Focus};
use crate::games::tictactoe::{Player, Position, Square};
use crate::view::GameView;
use strum::IntoEnumIterator;

const CELL_WIDTH: u16 = 11;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Screen regions of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    /// Title bar.
    pub title: Rect,
    /// Bordered board pane.
    pub board: Rect,
    /// Bordered move list pane.
    pub moves: Rect,
    /// Status line.
    pub status: Rect,
    /// Key help line.
    pub help: Rect,
}

/// Splits the frame into its panes.
pub fn regions(area: Rect) -> Regions {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                // Title
            Constraint::Min(BOARD_HEIGHT + 2),    // Board and moves
            Constraint::Length(3),                // Status
            Constraint::Length(3),                // Help
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(BOARD_WIDTH + 4), Constraint::Min(24)])
        .split(rows[1]);

    Regions {
        title: rows[0],
        board: body[0],
        moves: body[1],
        status: rows[2],
        help: rows[3],
    }
}

/// Rectangles of the nine cells, row-major, inside the board pane.
pub fn cell_rects(board_pane: Rect) -> [Rect; 9] {
    let inner = Block::default().borders(Borders::ALL).inner(board_pane);
    let grid = center_rect(inner, BOARD_WIDTH, BOARD_HEIGHT);

    std::array::from_fn(|index| {
        let col = (index % 3) as u16;
        let row = (index / 3) as u16;
        Rect::new(
            grid.x + col * (CELL_WIDTH + 1),
            grid.y + row * (CELL_HEIGHT + 1),
            CELL_WIDTH,
            CELL_HEIGHT,
        )
        .intersection(grid)
    })
}

/// Board cell under a screen coordinate, if any.
pub fn cell_at(area: Rect, column: u16, row: u16) -> Option<usize> {
    let point = ScreenPosition::new(column, row);
    cell_rects(regions(area).board)
        .iter()
        .position(|rect| rect.contains(point))
}

/// Draws the main UI.
pub fn draw(frame: &mut Frame, app: &App) {
    let view = app.view();
    let regions = regions(frame.area());

    let title = Paragraph::new("Tic Tac Toe - Time Travel")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, regions.title);

    draw_board(frame, regions.board, app, &view);
    draw_moves(frame, regions.moves, app, &view);

    let status = Paragraph::new(view.status.as_str())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, regions.status);

    let help = Paragraph::new(
        "Arrows/Enter or 1-9: play | Tab: moves | S: sort | R: restart | Q: quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, regions.help);
}

fn pane_block(title: String, focused: bool) -> Block<'static> {
    let border = if focused { Color::Cyan } else { Color::DarkGray };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(title)
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, view: &GameView) {
    frame.render_widget(pane_block("Board".to_string(), app.focus() == Focus::Board), area);

    let rects = cell_rects(area);
    for pos in Position::iter() {
        let is_cursor = app.focus() == Focus::Board && pos == app.cursor();
        draw_cell(frame, rects[pos.to_index()], view, pos, is_cursor);
    }

    let inner = Block::default().borders(Borders::ALL).inner(area);
    let grid = center_rect(inner, BOARD_WIDTH, BOARD_HEIGHT);
    for row in 1..3u16 {
        let y = grid.y + row * (CELL_HEIGHT + 1) - 1;
        let sep = Paragraph::new("─".repeat(BOARD_WIDTH as usize))
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(sep, Rect::new(grid.x, y, BOARD_WIDTH, 1).intersection(grid));
    }
    for col in 1..3u16 {
        let x = grid.x + col * (CELL_WIDTH + 1) - 1;
        let sep = Paragraph::new(vec![Line::from("│"); BOARD_HEIGHT as usize])
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(sep, Rect::new(x, grid.y, 1, BOARD_HEIGHT).intersection(grid));
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, view: &GameView, pos: Position, is_cursor: bool) {
    let (symbol, base_style) = match view.cells[pos.to_index()] {
        Square::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if view.is_winning_cell(pos) {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if is_cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(format!(" {symbol} "), style)),
    ];
    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_moves(frame: &mut Frame, area: Rect, app: &App, view: &GameView) {
    let items: Vec<ListItem> = view
        .moves
        .iter()
        .map(|entry| {
            let mut style = Style::default();
            if entry.highlighted {
                style = style.add_modifier(Modifier::BOLD).fg(Color::Yellow);
            }
            ListItem::new(entry.description.as_str()).style(style)
        })
        .collect();

    let focused = app.focus() == Focus::Moves;
    let list = List::new(items)
        .block(pane_block(format!("Moves - {} (S)", view.sort_label), focused))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let selected = focused
        .then(|| view.moves.iter().position(|e| e.step == app.selected_step()))
        .flatten();
    let mut state = ListState::default().with_selected(selected);
    frame.render_stateful_widget(list, area, &mut state);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
