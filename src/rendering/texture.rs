//! # 贴图解码
//!
//! 用 `image` crate 把文件解码为 RGBA8 像素。解码失败不视为致命错误：
//! 返回 `None`，上层保持"无贴图"哨兵状态，渲染路径只清屏不崩溃。

#[cfg(test)]
#[path = "texture_test.rs"]
mod texture_test;

use std::path::Path;

pub struct DecodedImage {
    pub rgba: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// 打开并解码图像文件为 RGBA8。
pub fn load_image_rgba(path: &Path) -> Option<DecodedImage> {
    match image::open(path) {
        Ok(img) => {
            let rgba = img.to_rgba8();
            let (width, height) = rgba.dimensions();
            Some(DecodedImage {
                rgba: rgba.into_raw(),
                width,
                height,
            })
        }
        Err(err) => {
            eprintln!("[texture] 贴图解码失败: {} ({err})", path.display());
            None
        }
    }
}
