//! # 指针输入映射
//!
//! 把指针事件映射为视口操作：主键按住期间的移动量做平移，
//! 垂直滚轮做缩放（与按键状态无关），其余事件一律忽略。
//!
//! 事件层给出的是绝对坐标，这里自行记录上一次位置来还原增量；
//! 指针离开窗口后锚点清空，回来后的第一次移动不产生平移。

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::rendering::viewport::ViewState;

/// 滚轮单位换算：1 tick = 1 行
pub const POINTS_PER_LINE: f32 = 50.0;
pub const LINES_PER_PAGE: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Released,
    Pressed,
}

/// 主键状态机 + 位置锚点。
#[derive(Debug)]
pub struct PointerTracker {
    button: ButtonState,
    last_pos: Option<[f32; 2]>,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self {
            button: ButtonState::Released,
            last_pos: None,
        }
    }
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// 主键按下 / 抬起
    pub fn on_primary_button(&mut self, pressed: bool) {
        self.button = if pressed {
            ButtonState::Pressed
        } else {
            ButtonState::Released
        };
    }

    /// 指针移动。按住主键时把增量换算为平移；任何状态下都更新锚点。
    pub fn on_pointer_move(&mut self, pos: [f32; 2], viewport: [f32; 2], view: &mut ViewState) {
        if let Some(last) = self.last_pos {
            if self.button == ButtonState::Pressed {
                let dx = pos[0] - last[0];
                let dy = pos[1] - last[1];
                view.apply_pan(dx, dy, viewport[0], viewport[1]);
            }
        }
        self.last_pos = Some(pos);
    }

    /// 指针离开窗口，清空锚点
    pub fn on_pointer_gone(&mut self) {
        self.last_pos = None;
    }

    /// 滚轮。只取垂直分量，水平滚动忽略。
    pub fn on_scroll(&mut self, ticks: [f32; 2], view: &mut ViewState) {
        view.apply_zoom(ticks[1]);
    }
}

/// 以 point 为单位的滚轮增量 → tick
pub fn points_to_ticks(points: f32) -> f32 {
    points / POINTS_PER_LINE
}

/// 以页为单位的滚轮增量 → tick
pub fn pages_to_ticks(pages: f32) -> f32 {
    pages * LINES_PER_PAGE
}
