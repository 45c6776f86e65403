use std::sync::{Arc, Mutex};

use egui::{Sense, Ui};

use crate::core::input::{self, PointerTracker};
use crate::rendering::gl_canvas::{GlCanvasParams, GlCanvasState, make_canvas_callback};
use crate::rendering::viewport::ViewState;

/// 整窗画布：先把本帧输入事件送进指针状态机，再提交 GL 绘制回调。
pub fn show_canvas(
    ui: &mut Ui,
    canvas: &Arc<Mutex<GlCanvasState>>,
    view: &mut ViewState,
    tracker: &mut PointerTracker,
) {
    let available = ui.available_size();
    let (rect, _response) = ui.allocate_exact_size(available, Sense::click_and_drag());

    // ── input → viewport ─────────────────────────────────────
    let events = ui.ctx().input(|i| i.events.clone());
    for event in &events {
        match event {
            egui::Event::PointerButton {
                button: egui::PointerButton::Primary,
                pressed,
                ..
            } => {
                tracker.on_primary_button(*pressed);
            }
            egui::Event::PointerMoved(pos) => {
                tracker.on_pointer_move(
                    [pos.x, pos.y],
                    [rect.width(), rect.height()],
                    view,
                );
            }
            egui::Event::PointerGone => {
                tracker.on_pointer_gone();
            }
            egui::Event::MouseWheel { unit, delta, .. } => {
                let ticks = match unit {
                    egui::MouseWheelUnit::Line => [delta.x, delta.y],
                    egui::MouseWheelUnit::Point => [
                        input::points_to_ticks(delta.x),
                        input::points_to_ticks(delta.y),
                    ],
                    egui::MouseWheelUnit::Page => [
                        input::pages_to_ticks(delta.x),
                        input::pages_to_ticks(delta.y),
                    ],
                };
                tracker.on_scroll(ticks, view);
            }
            // 键盘 / 文本 / 其余事件一律忽略
            _ => {}
        }
    }

    // ── paint callback ───────────────────────────────────────
    ui.painter().add(make_canvas_callback(
        canvas.clone(),
        GlCanvasParams {
            canvas_rect: rect,
            view: view.clone(),
        },
    ));
}
