mod config;
mod core;
mod rendering;
mod storage;
mod ui;

use config::viewer::load_viewer_config;
use ui::app::TexMapApp;

fn main() {
    let viewer_cfg = load_viewer_config().expect("viewer.json 加载失败");

    let title = viewer_cfg.window.title.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&title)
            .with_inner_size([viewer_cfg.window.width, viewer_cfg.window.height])
            .with_app_id("texmap"),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Box::new(TexMapApp::new(cc, viewer_cfg))),
    )
    .expect("窗口启动失败");
}
