use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::config::DisplayConfig;
use crate::game::{GameState, Paddle};

use super::braille::BrailleCanvas;
use super::viewport::Viewport;

// Center line dash pattern in Braille pixels
const DASH_LEN: usize = 4;
const DASH_GAP: usize = 8;

/// Display colors resolved from config once at startup
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub paddle: Color,
    pub ball: Color,
    pub center_line: Color,
    pub text: Color,
    pub background: Color,
    pub flash: Color,
}

impl Theme {
    pub fn new(display: &DisplayConfig) -> Self {
        Self {
            paddle: rgb(display.paddle_color),
            ball: rgb(display.ball_color),
            center_line: rgb(display.center_line_color),
            text: rgb(display.text_color),
            background: rgb(display.background_color),
            flash: rgb(display.flash_color),
        }
    }
}

fn rgb(c: [u8; 3]) -> Color {
    Color::Rgb(c[0], c[1], c[2])
}

/// Redraw the whole scene from the current state. Presentation only:
/// never mutates the simulation.
pub fn render(frame: &mut Frame, state: &GameState, viewport: &Viewport, theme: &Theme) {
    let area = frame.area();

    // The win flash is a global background change, toggled by the blink
    // effect while game over
    let background = if state.blink.is_on() {
        theme.flash
    } else {
        theme.background
    };
    frame.render_widget(Block::default().style(Style::default().bg(background)), area);

    // Separate canvases per color; the blit picks the topmost non-empty one
    let cols = area.width as usize;
    let rows = area.height as usize;
    let mut line_canvas = BrailleCanvas::new(cols, rows);
    let mut paddle_canvas = BrailleCanvas::new(cols, rows);
    let mut ball_canvas = BrailleCanvas::new(cols, rows);

    draw_center_line(&mut line_canvas, viewport);
    draw_paddle(&mut paddle_canvas, &state.player, viewport);
    draw_paddle(&mut paddle_canvas, &state.computer, viewport);
    draw_ball(&mut ball_canvas, state, viewport);

    blit(
        frame,
        area,
        &[
            (&ball_canvas, theme.ball),
            (&paddle_canvas, theme.paddle),
            (&line_canvas, theme.center_line),
        ],
    );

    draw_labels(frame, area, viewport, theme);
    draw_scores(frame, state, area, viewport, theme);

    if state.game_over {
        draw_win_banner(frame, state, area, theme);
    }
}

fn draw_center_line(canvas: &mut BrailleCanvas, viewport: &Viewport) {
    let (field_w, _) = viewport.field_size();
    let (center_x, _) = viewport.to_pixel(field_w / 2.0, 0.0);
    let (y0, y1) = viewport.pixel_y_range();
    canvas.draw_dashed_vline(center_x, y0, y1, DASH_LEN, DASH_GAP);
}

fn draw_paddle(canvas: &mut BrailleCanvas, paddle: &Paddle, viewport: &Viewport) {
    let (px, py) = viewport.to_pixel(paddle.x, paddle.y);
    let w = ((paddle.width * viewport.scale_x()) as usize).max(1);
    let h = ((paddle.height * viewport.scale_y()) as usize).max(1);
    canvas.fill_rect(px, py, w, h);
}

fn draw_ball(canvas: &mut BrailleCanvas, state: &GameState, viewport: &Viewport) {
    let (px, py) = viewport.to_pixel(state.ball.x, state.ball.y);
    let w = ((state.ball.size * viewport.scale_x()) as usize).max(1);
    let h = ((state.ball.size * viewport.scale_y()) as usize).max(1);
    canvas.fill_rect(px, py, w, h);
}

/// Compose the canvases into styled lines, one span per cell, keeping the
/// background untouched so the win flash shows through
fn blit(frame: &mut Frame, area: Rect, layers: &[(&BrailleCanvas, Color)]) {
    let mut lines: Vec<Line> = Vec::with_capacity(area.height as usize);
    for y in 0..area.height as usize {
        let mut spans: Vec<Span> = Vec::with_capacity(area.width as usize);
        for x in 0..area.width as usize {
            let mut span = Span::raw(" ");
            for (canvas, color) in layers {
                if !canvas.is_empty(x, y) {
                    span = Span::styled(
                        canvas.to_char(x, y).to_string(),
                        Style::default().fg(*color),
                    );
                    break;
                }
            }
            spans.push(span);
        }
        lines.push(Line::from(spans));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_labels(frame: &mut Frame, area: Rect, viewport: &Viewport, theme: &Theme) {
    let row = (viewport.top_row() + 1).min(area.height.saturating_sub(1));
    let half = area.width / 2;
    let style = Style::default().fg(theme.text);

    let left = Rect { x: area.x, y: area.y + row, width: half, height: 1 };
    frame.render_widget(
        Paragraph::new("PLAYER").style(style).alignment(Alignment::Center),
        left,
    );

    let right = Rect { x: area.x + half, y: area.y + row, width: area.width - half, height: 1 };
    frame.render_widget(
        Paragraph::new("COMPUTER").style(style).alignment(Alignment::Center),
        right,
    );
}

fn draw_scores(frame: &mut Frame, state: &GameState, area: Rect, viewport: &Viewport, theme: &Theme) {
    let row = (viewport.top_row() + 2).min(area.height.saturating_sub(1));
    let half = area.width / 2;
    let style = Style::default().fg(theme.text);

    let left = Rect { x: area.x, y: area.y + row, width: half, height: 1 };
    frame.render_widget(
        Paragraph::new(state.player_score.to_string())
            .style(style)
            .alignment(Alignment::Center),
        left,
    );

    let right = Rect { x: area.x + half, y: area.y + row, width: area.width - half, height: 1 };
    frame.render_widget(
        Paragraph::new(state.ai_score.to_string())
            .style(style)
            .alignment(Alignment::Center),
        right,
    );
}

fn draw_win_banner(frame: &mut Frame, state: &GameState, area: Rect, theme: &Theme) {
    let winner = match state.winner {
        Some(side) => side.label(),
        None => return,
    };

    // Banner color follows the blink phase, same as the original
    let banner_color = if state.blink.is_on() {
        theme.flash
    } else {
        theme.text
    };

    let mid = area.height / 2;
    let banner = Rect { x: area.x, y: area.y + mid, width: area.width, height: 1 };
    frame.render_widget(
        Paragraph::new(format!("{} WINS!", winner))
            .style(Style::default().fg(banner_color))
            .alignment(Alignment::Center),
        banner,
    );

    if mid + 2 < area.height {
        let hint = Rect { x: area.x, y: area.y + mid + 2, width: area.width, height: 1 };
        frame.render_widget(
            Paragraph::new("Click to restart")
                .style(Style::default().fg(theme.text))
                .alignment(Alignment::Center),
            hint,
        );
    }
}
