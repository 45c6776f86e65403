use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use eframe::egui;

use crate::config::viewer::ViewerConfig;
use crate::core::input::PointerTracker;
use crate::rendering::gl_canvas::GlCanvasState;
use crate::rendering::texture::load_image_rgba;
use crate::rendering::viewport::ViewState;
use crate::storage::runtime;
use crate::ui::canvas_view::show_canvas;

pub struct TexMapApp {
    canvas: Arc<Mutex<GlCanvasState>>,
    view: ViewState,
    tracker: PointerTracker,
}

impl TexMapApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, cfg: ViewerConfig) -> Self {
        let canvas = Arc::new(Mutex::new(GlCanvasState::new()));
        let mut view = ViewState::default();

        if let Some(path) = resolve_image_path(&cfg) {
            if let Some(img) = load_image_rgba(&path) {
                view.set_texture_size(img.width, img.height);
                canvas
                    .lock()
                    .unwrap()
                    .set_image_pixels(img.rgba, img.width, img.height);
                let _ = runtime::merge_field(
                    "last_image",
                    serde_json::Value::String(path.display().to_string()),
                );
                eprintln!(
                    "[texture] 已加载 {} ({}x{})",
                    path.display(),
                    img.width,
                    img.height
                );
            }
            // 解码失败：保持无贴图哨兵，窗口只显示清屏底色
        }

        Self {
            canvas,
            view,
            tracker: PointerTracker::new(),
        }
    }
}

/// 贴图来源，按优先级：配置固定路径 → 上次打开记录 → 文件对话框。
/// 全部落空则不加载任何贴图。
fn resolve_image_path(cfg: &ViewerConfig) -> Option<PathBuf> {
    if let Some(pinned) = &cfg.image.default_path {
        return Some(PathBuf::from(pinned));
    }

    if let Some(serde_json::Value::String(last)) = runtime::load_field("last_image") {
        let last = PathBuf::from(last);
        if last.exists() {
            return Some(last);
        }
    }

    rfd::FileDialog::new()
        .set_title("选择贴图")
        .add_filter("图像", &["png", "jpg", "jpeg", "bmp", "gif", "webp"])
        .pick_file()
}

impl eframe::App for TexMapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                show_canvas(ui, &self.canvas, &mut self.view, &mut self.tracker);
            });
    }

    fn on_exit(&mut self, gl: Option<&glow::Context>) {
        if let Some(gl) = gl {
            self.canvas.lock().unwrap().destroy(gl);
        }
    }
}
