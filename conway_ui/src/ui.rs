// ui.rs - egui side of the loop: raw events in, filled rectangles out

use std::collections::VecDeque;
use std::time::Instant;

use conway::{CellRect, Input, Mode, Renderer, draw, run_tick};
use eframe::egui;
use egui::{Color32, Event, Key, Painter, PointerButton, Pos2, Rect, Vec2};

use crate::LifeApp;

/// Height of the status line under the board.
pub const STATUS_HEIGHT: f32 = 24.0;

/// Paints cells onto the board area of the window.
struct PainterRenderer<'a> {
    painter: &'a Painter,
    board:   Rect,
    live:    Color32,
    dead:    Color32,
}

impl Renderer for PainterRenderer<'_> {
    fn clear(&mut self) {
        self.painter.rect_filled(self.board, 0.0, self.dead);
    }

    fn fill_cell(&mut self, cell: CellRect) {
        let min = self.board.min + Vec2::new(cell.x as f32, cell.y as f32);
        let rect = Rect::from_min_size(min, Vec2::splat(cell.size as f32));
        self.painter.rect_filled(rect, 0.0, self.live);
    }
}

/// Board-relative pixel of a pointer position, if it is not above or left of the board.
fn board_pixel(pos: Pos2, origin: Pos2) -> Option<(u32, u32)> {
    let offset = pos - origin;
    (offset.x >= 0.0 && offset.y >= 0.0).then(|| (offset.x as u32, offset.y as u32))
}

/// Queues this frame's presses and key strokes as simulation input.
fn collect_inputs(ctx: &egui::Context, origin: Pos2, pending: &mut VecDeque<Input>) {
    ctx.input(|input| {
        for event in &input.events {
            let translated = match event {
                Event::PointerButton { pos, button, pressed: true, .. } => {
                    let Some((x, y)) = board_pixel(*pos, origin) else { continue };
                    match button {
                        PointerButton::Primary   => Input::PrimaryPress { x, y },
                        PointerButton::Secondary => Input::SecondaryPress { x, y },
                        _ => continue,
                    }
                }
                Event::Key { key, pressed: true, repeat: false, .. } => match key {
                    Key::Space  => Input::StartStop,
                    Key::C      => Input::Clear,
                    Key::Escape => Input::Quit,
                    _ => continue,
                },
                _ => continue,
            };
            pending.push_back(translated);
        }
    });
}

impl LifeApp {
    fn status_line(&self) -> String {
        let cells = self.sim.grid().rows() * self.sim.grid().cols();
        let live = self.sim.population();
        let keys = match self.sim.mode() {
            Mode::Editing => "left click: draw   right click: erase   C: clear   Space: start",
            Mode::Running => "Space: stop",
        };
        format!(
            "{:?}   generation {}   {} alive ({:.1}%){}   |   {}   Esc: quit",
            self.sim.mode(),
            self.sim.generation(),
            live,
            live as f32 / cells as f32 * 100.0,
            if self.sim.is_repeating() { "   repeating" } else { "" },
            keys,
        )
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("status")
            .exact_height(STATUS_HEIGHT)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| ui.label(self.status_line()));
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(self.dead_color))
            .show(ctx, |ui| {
                let (response, painter) = ui.allocate_painter(self.surface, egui::Sense::click());
                collect_inputs(ctx, response.rect.min, &mut self.pending);

                let mut renderer = PainterRenderer {
                    painter: &painter,
                    board:   response.rect,
                    live:    self.live_color,
                    dead:    self.dead_color,
                };

                // Events wait in the queue until the next tick is due
                if self.last_tick.elapsed() >= self.tick {
                    self.last_tick = Instant::now();
                    let tick = run_tick(&mut self.sim, &mut self.pending, &mut renderer);
                    if tick.quit {
                        log::info!("quit requested");
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                } else {
                    draw(self.sim.grid(), self.sim.cell_size(), &mut renderer);
                }
            });

        ctx.request_repaint_after(self.tick.saturating_sub(self.last_tick.elapsed()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_positions_are_relative_to_the_board() {
        let origin = Pos2::new(8.0, 8.0);
        assert_eq!(board_pixel(Pos2::new(8.0, 8.0), origin), Some((0, 0)));
        assert_eq!(board_pixel(Pos2::new(41.7, 20.2), origin), Some((33, 12)));
    }

    #[test]
    fn pointer_above_or_left_of_the_board_is_dropped() {
        let origin = Pos2::new(8.0, 8.0);
        assert_eq!(board_pixel(Pos2::new(7.9, 30.0), origin), None);
        assert_eq!(board_pixel(Pos2::new(30.0, 0.0), origin), None);
    }
}
