use macroquad::prelude::*;

use crate::application::{Control, FrameSink, Snapshot, TraceBuffer};
use crate::domain::Grid;
use crate::ui::{self, Button, PANEL_PADDING, PANEL_WIDTH, TRACE_HEIGHT, TRACE_TOP};

/// Draws each pushed snapshot into the macroquad window.
///
/// Built fresh every frame so it carries the current buttons and mouse position.
pub struct WindowSink<'a> {
    buttons: &'a [Button],
    mouse_pos: (f32, f32),
}

impl<'a> WindowSink<'a> {
    pub fn new(buttons: &'a [Button], mouse_pos: (f32, f32)) -> Self {
        Self { buttons, mouse_pos }
    }
}

impl FrameSink for WindowSink<'_> {
    fn present(&mut self, snapshot: Snapshot<'_>) {
        clear_background(BLACK);
        draw_grid(snapshot.grid);
        draw_panel(&snapshot, self.buttons, self.mouse_pos);
    }
}

/// Draw the cellular automaton grid scaled to fit the grid area
pub fn draw_grid(grid: &Grid) {
    let cell_size = ui::cell_size(grid.size());
    let alive_color = Color::from_rgba(0, 255, 150, 255); // Bright green
    let border_color = Color::from_rgba(60, 60, 60, 255);

    for (row, col, cell) in grid.iter_cells() {
        if cell.is_alive() {
            draw_rectangle(
                col as f32 * cell_size,
                row as f32 * cell_size,
                cell_size,
                cell_size,
                alive_color,
            );
        }
    }

    // Outline of the dead border ring
    let extent = grid.size() as f32 * cell_size;
    draw_rectangle_lines(0.0, 0.0, extent, extent, cell_size.min(4.0), border_color);
}

/// Line plot of the trace window, oldest sample on the left
fn draw_trace(trace: &TraceBuffer, x: f32, y: f32, width: f32, height: f32) {
    draw_rectangle(x, y, width, height, Color::from_rgba(15, 15, 15, 255));
    draw_rectangle_lines(x, y, width, height, 1.0, GRAY);

    let Some((lo, hi)) = trace.range() else {
        return;
    };
    let span = if hi > lo { hi - lo } else { 1.0 };
    let step = if trace.len() > 1 {
        width / (trace.len() - 1) as f32
    } else {
        0.0
    };
    let to_screen = |i: usize, v: f64| {
        let t = ((v - lo) / span) as f32;
        (x + i as f32 * step, y + height - t * height)
    };

    let color = Color::from_rgba(100, 200, 255, 255);
    let points: Vec<(f32, f32)> = trace.iter().enumerate().map(|(i, v)| to_screen(i, v)).collect();
    points.windows(2).for_each(|pair| {
        draw_line(pair[0].0, pair[0].1, pair[1].0, pair[1].1, 1.5, color);
    });

    draw_text(&format!("{hi:.2}"), x + 4.0, y + 14.0, 12.0, GRAY);
    draw_text(&format!("{lo:.2}"), x + 4.0, y + height - 4.0, 12.0, GRAY);
}

/// Draw control panel: trace plot, buttons and status labels
fn draw_panel(snapshot: &Snapshot<'_>, buttons: &[Button], mouse_pos: (f32, f32)) {
    let px = ui::panel_x();
    draw_rectangle(px, 0.0, PANEL_WIDTH, screen_height(), Color::from_rgba(30, 30, 30, 255));

    let inner_x = px + PANEL_PADDING;
    let inner_width = PANEL_WIDTH - 2.0 * PANEL_PADDING;

    if snapshot.trace.capacity() > 0 {
        draw_text("Trace", inner_x, TRACE_TOP - 8.0, 16.0, WHITE);
        draw_trace(snapshot.trace, inner_x, TRACE_TOP, inner_width, TRACE_HEIGHT);
    }

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let info_top = buttons.last().map_or(TRACE_TOP + TRACE_HEIGHT, Button::bottom) + 30.0;

    let size = snapshot.grid.size();
    let labels = [
        ("Grid:".to_owned(), 16.0, WHITE),
        (format!("{size}x{size}"), 14.0, Color::from_rgba(180, 180, 180, 255)),
        ("Frame:".to_owned(), 16.0, WHITE),
        (format!("{}", snapshot.frame), 20.0, Color::from_rgba(0, 255, 150, 255)),
        ("Generations:".to_owned(), 16.0, WHITE),
        (format!("{}", snapshot.generations), 14.0, Color::from_rgba(180, 180, 180, 255)),
        ("Population:".to_owned(), 16.0, WHITE),
        (format!("{}", snapshot.grid.population()), 14.0, Color::from_rgba(180, 180, 180, 255)),
        ("Status:".to_owned(), 16.0, WHITE),
        (
            (if snapshot.running { "Running" } else { "Stopped" }).to_owned(),
            16.0,
            if snapshot.running {
                Color::from_rgba(0, 255, 0, 255)
            } else {
                Color::from_rgba(255, 165, 0, 255)
            },
        ),
    ];

    labels.iter().enumerate().for_each(|(i, (text, font_size, color))| {
        draw_text(text, inner_x, info_top + i as f32 * 20.0, *font_size, *color);
    });

    draw_text(&key_hint(), inner_x, screen_height() - 12.0, 12.0, GRAY);
}

/// Footer listing the keyboard bindings
fn key_hint() -> String {
    format!("Space: {}  R: {}", Control::Toggle.label(), Control::Reset.label())
}
