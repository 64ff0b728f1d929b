use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::App;
use crate::game::{ControlMode, Pong, FIELD_HEIGHT, FIELD_WIDTH};

/// Background stripe colors, left to right across the field.
const GRADIENT: [Color; 5] = [
    Color::Rgb(255, 70, 70),
    Color::Rgb(255, 255, 70),
    Color::Rgb(70, 255, 140),
    Color::Rgb(70, 140, 255),
    Color::Rgb(255, 70, 200),
];

pub fn render(frame: &mut Frame, app: &mut App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(80, 140, 220)))
        .title(" 🏓 Pong ")
        .title_style(
            Style::default()
                .fg(Color::Rgb(120, 180, 255))
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(frame.area());
    frame.render_widget(block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .split(inner);

    render_status(frame, chunks[0], app);

    // Remember where the field landed so mouse rows can be mapped back.
    app.field_area = chunks[1];
    let lines = render_field(
        &app.game,
        chunks[1].width as usize,
        chunks[1].height as usize,
    );
    frame.render_widget(Paragraph::new(lines), chunks[1]);

    render_help(frame, chunks[2], app);
}

fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let mode_text = match app.game.mode {
        ControlMode::Pointer => "Mouse",
        ControlMode::Keys => "Arrow Keys",
    };
    let status = Line::from(vec![
        Span::styled(" 🏓 ", Style::default()),
        Span::styled(
            format!("Player: {} ", app.game.player_score),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("AI: {} ", app.game.ai_score),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("Mode: {} ", mode_text),
            Style::default().fg(Color::Green),
        ),
    ]);
    frame.render_widget(Paragraph::new(status), area);
}

/// Draw the 800x400 field scaled into a w x h cell grid: gradient stripes,
/// center line, white paddles and ball.
fn render_field(game: &Pong, w: usize, h: usize) -> Vec<Line<'static>> {
    if w == 0 || h == 0 {
        return Vec::new();
    }

    let mut grid: Vec<Vec<(char, Style)>> = (0..h)
        .map(|_| {
            (0..w)
                .map(|x| {
                    let stripe = GRADIENT[x * GRADIENT.len() / w];
                    (' ', Style::default().bg(stripe))
                })
                .collect()
        })
        .collect();

    // Center line
    let cx = w / 2;
    for row in grid.iter_mut() {
        let style = row[cx].1;
        row[cx] = ('┊', style.fg(Color::White));
    }

    // Paddles
    for paddle in [&game.left_paddle, &game.right_paddle] {
        let (x0, x1) = span(paddle.rect.x, paddle.rect.right(), FIELD_WIDTH, w);
        let (y0, y1) = span(paddle.rect.y, paddle.rect.bottom(), FIELD_HEIGHT, h);
        for row in grid.iter_mut().take(y1).skip(y0) {
            for cell in row.iter_mut().take(x1).skip(x0) {
                let style = cell.1;
                cell.0 = '█';
                cell.1 = style.fg(Color::White).add_modifier(Modifier::BOLD);
            }
        }
    }

    // Ball (may overhang the top/bottom edge for a frame; clamped to view)
    let (bx0, bx1) = span(game.ball.rect.x, game.ball.rect.right(), FIELD_WIDTH, w);
    let (by0, by1) = span(game.ball.rect.y, game.ball.rect.bottom(), FIELD_HEIGHT, h);
    for row in grid.iter_mut().take(by1).skip(by0) {
        for cell in row.iter_mut().take(bx1).skip(bx0) {
            let style = cell.1;
            cell.0 = '●';
            cell.1 = style.fg(Color::White).add_modifier(Modifier::BOLD);
        }
    }

    grid.into_iter()
        .map(|row| {
            let spans: Vec<Span<'static>> = row
                .into_iter()
                .map(|(ch, style)| Span::styled(String::from(ch), style))
                .collect();
            Line::from(spans)
        })
        .collect()
}

/// Map a field-unit extent onto cell indices, clamped to the grid. Any
/// in-field extent covers at least one cell.
fn span(start: i32, end: i32, field: i32, cells: usize) -> (usize, usize) {
    let scale = cells as f64 / field as f64;
    let a = (start as f64 * scale).floor().clamp(0.0, cells as f64) as usize;
    let b = (end as f64 * scale).ceil().clamp(0.0, cells as f64) as usize;
    (a, b)
}

fn render_help(frame: &mut Frame, area: Rect, app: &App) {
    if app.paused {
        let msg = Paragraph::new(Line::from(vec![Span::styled(
            " ⏸ PAUSED - Press P to resume ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )]));
        frame.render_widget(msg, area);
        return;
    }

    let move_hint = match app.game.mode {
        ControlMode::Pointer => " Mouse Move Paddle ",
        ControlMode::Keys => " ↑↓ Move Paddle ",
    };
    let help = Paragraph::new(Line::from(vec![
        Span::styled(move_hint, Style::default().fg(Color::DarkGray)),
        Span::styled("│ ", Style::default().fg(Color::Rgb(60, 60, 60))),
        Span::styled(
            "R Toggle Mode ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("│ ", Style::default().fg(Color::Rgb(60, 60, 60))),
        Span::styled("P Pause ", Style::default().fg(Color::DarkGray)),
        Span::styled("│ ", Style::default().fg(Color::Rgb(60, 60, 60))),
        Span::styled("Q Quit", Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(help, area);
}
