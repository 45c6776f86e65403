#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

pub const SCALE_MIN: f32 = 0.1;
pub const SCALE_MAX: f32 = 4.0;
pub const ZOOM_STEP: f32 = 0.05;

/// 视口状态：贴图左上角的 NDC 位置 + 缩放 + 贴图像素尺寸。
///
/// `texture_size` 在解码成功前为 `None`；解码失败则一直保持 `None`，
/// 渲染路径据此跳过绘制（只清屏）。
#[derive(Debug, Clone)]
pub struct ViewState {
    /// 贴图左上角（NDC，y 轴向上，原点居中），不做范围限制
    pub position: [f32; 2],
    /// 缩放因子，始终处于 [SCALE_MIN, SCALE_MAX]
    pub scale: f32,
    /// 已加载贴图的像素尺寸，加载后不再变化
    pub texture_size: Option<[u32; 2]>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            position: [-1.0, 1.0],
            scale: 1.0,
            texture_size: None,
        }
    }
}

impl ViewState {
    pub fn set_texture_size(&mut self, width: u32, height: u32) {
        self.texture_size = Some([width, height]);
    }

    /// 滚轮缩放：每 tick 改变 0.05，调用即钳制。
    pub fn apply_zoom(&mut self, scroll_delta: f32) {
        self.scale = (self.scale + scroll_delta * ZOOM_STEP).clamp(SCALE_MIN, SCALE_MAX);
    }

    /// 像素增量 → NDC 增量。屏幕 y 向下、NDC y 向上，故 dy 取反。
    pub fn apply_pan(&mut self, dx_px: f32, dy_px: f32, viewport_w: f32, viewport_h: f32) {
        self.position[0] += dx_px / viewport_w * 2.0;
        self.position[1] += -(dy_px / viewport_h * 2.0);
    }

    /// 当前缩放下贴图矩形的 NDC 宽高；未加载贴图时为 `None`。
    pub fn quad_size(&self, viewport_px: [f32; 2], dpi_scale: f32) -> Option<[f32; 2]> {
        let [tw, th] = self.texture_size?;
        let w = tw as f32 * unit_per_pixel(viewport_px[0], dpi_scale) * self.scale;
        let h = th as f32 * unit_per_pixel(viewport_px[1], dpi_scale) * self.scale;
        Some([w, h])
    }
}

/// 一个物理像素对应的 NDC 长度（NDC 跨度 [-1,1] 共 2）
pub fn unit_per_pixel(viewport_px: f32, dpi_scale: f32) -> f32 {
    2.0 / viewport_px * dpi_scale
}
