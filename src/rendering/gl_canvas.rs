//! GPU canvas renderer using glow (OpenGL).
//!
//! Renders the loaded texture as one indexed quad inside a single
//! [`egui::PaintCallback`], bypassing egui's tessellation pipeline.
//!
//! The vertex buffer is dynamic and sized for exactly one quad
//! (20 floats); every frame overwrites it with the rectangle computed
//! from the current view state and viewport size.

use std::sync::{Arc, Mutex};

use glow::HasContext as _;

use crate::core::geometry::{QUAD_FLOATS, QUAD_INDICES, vertex_rect};
use crate::rendering::viewport::ViewState;

// ─── Shader sources ─────────────────────────────────────────────────────

const VERT_SRC: &str = r#"#version 140

in vec3 a_pos;
in vec2 a_uv;
out vec2 v_uv;

void main() {
    v_uv = a_uv;
    gl_Position = vec4(a_pos, 1.0);
}
"#;

const FRAG_SRC: &str = r#"#version 140

in vec2 v_uv;
out vec4 frag_color;

uniform sampler2D u_tex;

void main() {
    frag_color = texture(u_tex, v_uv);
}
"#;

// ─── GL resource bundle ─────────────────────────────────────────────────

struct GlResources {
    program: glow::Program,
    vao: glow::VertexArray,
    vbo: glow::Buffer,
    ebo: glow::Buffer,
    tex: glow::Texture,
    loc_tex: Option<glow::UniformLocation>,
}

struct PendingPixels {
    rgba: Vec<u8>,
    width: u32,
    height: u32,
}

// ─── Public shared state ────────────────────────────────────────────────

/// Shared state for the GPU canvas renderer.
///
/// Wrap in `Arc<Mutex<GlCanvasState>>` and share between the app logic
/// (which pushes decoded pixel data) and the [`egui::PaintCallback`]
/// (which renders).
pub struct GlCanvasState {
    resources: Option<GlResources>,
    pending: Option<PendingPixels>,
    dirty: bool,
    has_texture: bool,
}

impl GlCanvasState {
    pub fn new() -> Self {
        Self {
            resources: None,
            pending: None,
            dirty: false,
            has_texture: false,
        }
    }

    /// Store decoded RGBA `u8` pixel data for upload on the next frame.
    ///
    /// Never called when decoding fails; `has_texture` then stays false
    /// and the render path draws nothing after the clear.
    pub fn set_image_pixels(&mut self, rgba: Vec<u8>, width: u32, height: u32) {
        self.pending = Some(PendingPixels { rgba, width, height });
        self.dirty = true;
        self.has_texture = true;
    }

    /// Release GL resources.  Must be called with a current GL context.
    pub fn destroy(&mut self, gl: &glow::Context) {
        if let Some(res) = self.resources.take() {
            unsafe {
                gl.delete_program(res.program);
                gl.delete_vertex_array(res.vao);
                gl.delete_buffer(res.vbo);
                gl.delete_buffer(res.ebo);
                gl.delete_texture(res.tex);
            }
        }
    }
}

// ─── GL helpers ─────────────────────────────────────────────────────────

fn compile_shader(gl: &glow::Context, kind: u32, source: &str) -> glow::Shader {
    unsafe {
        let shader = gl.create_shader(kind).expect("GL: 创建着色器失败");
        gl.shader_source(shader, source);
        gl.compile_shader(shader);
        if !gl.get_shader_compile_status(shader) {
            let log = gl.get_shader_info_log(shader);
            panic!("GL: 着色器编译失败:\n{log}");
        }
        shader
    }
}

fn init_resources(gl: &glow::Context) -> GlResources {
    unsafe {
        // ── compile & link ──
        let vert = compile_shader(gl, glow::VERTEX_SHADER, VERT_SRC);
        let frag = compile_shader(gl, glow::FRAGMENT_SHADER, FRAG_SRC);

        let program = gl.create_program().expect("GL: 创建程序失败");
        gl.attach_shader(program, vert);
        gl.attach_shader(program, frag);
        gl.link_program(program);
        if !gl.get_program_link_status(program) {
            let log = gl.get_program_info_log(program);
            panic!("GL: 着色器链接失败:\n{log}");
        }
        gl.detach_shader(program, vert);
        gl.detach_shader(program, frag);
        gl.delete_shader(vert);
        gl.delete_shader(frag);

        // ── dynamic vertex buffer, one quad's worth ──
        let vbo = gl.create_buffer().expect("GL: 创建 VBO 失败");
        gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
        gl.buffer_data_size(
            glow::ARRAY_BUFFER,
            (QUAD_FLOATS * std::mem::size_of::<f32>()) as i32,
            glow::DYNAMIC_DRAW,
        );

        // ── vertex layout: pos3 + uv2 interleaved, stride 20 bytes ──
        let vao = gl.create_vertex_array().expect("GL: 创建 VAO 失败");
        gl.bind_vertex_array(Some(vao));

        let stride = (5 * std::mem::size_of::<f32>()) as i32;
        let a_pos = gl
            .get_attrib_location(program, "a_pos")
            .expect("GL: 找不到 a_pos 属性");
        gl.enable_vertex_attrib_array(a_pos);
        gl.vertex_attrib_pointer_f32(a_pos, 3, glow::FLOAT, false, stride, 0);

        let a_uv = gl
            .get_attrib_location(program, "a_uv")
            .expect("GL: 找不到 a_uv 属性");
        gl.enable_vertex_attrib_array(a_uv);
        gl.vertex_attrib_pointer_f32(
            a_uv,
            2,
            glow::FLOAT,
            false,
            stride,
            (3 * std::mem::size_of::<f32>()) as i32,
        );

        // ── static index buffer: two triangles, captured by the VAO ──
        let ebo = gl.create_buffer().expect("GL: 创建 EBO 失败");
        gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(ebo));
        let index_bytes: &[u8] = std::slice::from_raw_parts(
            QUAD_INDICES.as_ptr() as *const u8,
            std::mem::size_of_val(&QUAD_INDICES),
        );
        gl.buffer_data_u8_slice(glow::ELEMENT_ARRAY_BUFFER, index_bytes, glow::STATIC_DRAW);

        gl.bind_vertex_array(None);
        gl.bind_buffer(glow::ARRAY_BUFFER, None);
        gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, None);

        // ── placeholder texture ──
        let tex = create_empty_texture(gl);

        GlResources {
            program,
            vao,
            vbo,
            ebo,
            tex,
            loc_tex: gl.get_uniform_location(program, "u_tex"),
        }
    }
}

fn create_empty_texture(gl: &glow::Context) -> glow::Texture {
    unsafe {
        let tex = gl.create_texture().expect("GL: 创建纹理失败");
        gl.bind_texture(glow::TEXTURE_2D, Some(tex));
        gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MIN_FILTER, glow::NEAREST as i32);
        gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MAG_FILTER, glow::NEAREST as i32);
        gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_S, glow::CLAMP_TO_EDGE as i32);
        gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_T, glow::CLAMP_TO_EDGE as i32);
        gl.tex_image_2d(
            glow::TEXTURE_2D,
            0,
            glow::RGBA as i32,
            1,
            1,
            0,
            glow::RGBA,
            glow::UNSIGNED_BYTE,
            Some(&[0u8; 4]),
        );
        gl.bind_texture(glow::TEXTURE_2D, None);
        tex
    }
}

fn upload_texture(gl: &glow::Context, tex: glow::Texture, data: &PendingPixels) {
    unsafe {
        gl.bind_texture(glow::TEXTURE_2D, Some(tex));
        gl.tex_image_2d(
            glow::TEXTURE_2D,
            0,
            glow::RGBA as i32,
            data.width as i32,
            data.height as i32,
            0,
            glow::RGBA,
            glow::UNSIGNED_BYTE,
            Some(&data.rgba),
        );
        gl.bind_texture(glow::TEXTURE_2D, None);
    }
}

// ─── Public API ─────────────────────────────────────────────────────────

/// Per-frame parameters for the canvas paint callback.
pub struct GlCanvasParams {
    /// The egui rect allocated for the whole canvas area.
    pub canvas_rect: egui::Rect,
    /// Snapshot of the view state this frame renders from.
    pub view: ViewState,
}

/// Build the [`egui::PaintCallback`] that renders the canvas via raw OpenGL.
///
/// Frame order: clear to opaque black → compute the quad from the view
/// state and viewport pixel size → overwrite the vertex buffer → one
/// 6-index alpha-blended draw. When no texture is loaded the frame stops
/// after the clear.
pub fn make_canvas_callback(
    state: Arc<Mutex<GlCanvasState>>,
    params: GlCanvasParams,
) -> egui::PaintCallback {
    let view = params.view;

    let cb = egui_glow::CallbackFn::new(move |info, painter| {
        let gl = painter.gl();
        let mut st = state.lock().unwrap();

        // ── lazy init ──
        if st.resources.is_none() {
            st.resources = Some(init_resources(gl));
        }
        // Copy GL handles out so we can release the immutable borrow before mutating.
        let res = st.resources.as_ref().unwrap();
        let program = res.program;
        let vao = res.vao;
        let vbo = res.vbo;
        let tex = res.tex;
        let loc_tex = res.loc_tex.clone();
        let _ = res;

        // ── upload dirty texture ──
        if st.dirty {
            if let Some(data) = &st.pending {
                upload_texture(gl, tex, data);
            }
            st.dirty = false;
        }

        // ── clear to opaque black ──
        unsafe {
            gl.disable(glow::SCISSOR_TEST);
            gl.clear_color(0.0, 0.0, 0.0, 1.0);
            gl.clear(glow::COLOR_BUFFER_BIT);
        }

        // ── quad from view state + viewport ──
        let vp = info.viewport_in_pixels();
        let quad = if st.has_texture {
            view.quad_size(
                [vp.width_px as f32, vp.height_px as f32],
                info.pixels_per_point,
            )
        } else {
            None
        };
        // 无贴图（解码失败哨兵）：只保留清屏
        let Some([w, h]) = quad else { return };

        let verts = vertex_rect(view.position[0], view.position[1], w, h);

        // ── draw ──
        unsafe {
            gl.enable(glow::BLEND);
            gl.blend_func(glow::SRC_ALPHA, glow::ONE_MINUS_SRC_ALPHA);

            gl.use_program(Some(program));

            // full overwrite of the one-quad vertex buffer
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            let vertex_bytes: &[u8] = std::slice::from_raw_parts(
                verts.as_ptr() as *const u8,
                std::mem::size_of_val(&verts),
            );
            gl.buffer_sub_data_u8_slice(glow::ARRAY_BUFFER, 0, vertex_bytes);

            gl.active_texture(glow::TEXTURE0);
            gl.bind_texture(glow::TEXTURE_2D, Some(tex));
            gl.uniform_1_i32(loc_tex.as_ref(), 0);

            gl.bind_vertex_array(Some(vao));
            gl.draw_elements(
                glow::TRIANGLES,
                QUAD_INDICES.len() as i32,
                glow::UNSIGNED_SHORT,
                0,
            );
            gl.bind_vertex_array(None);

            // unbind
            gl.bind_buffer(glow::ARRAY_BUFFER, None);
            gl.bind_texture(glow::TEXTURE_2D, None);
            gl.use_program(None);
            gl.disable(glow::BLEND);
        }
    });

    egui::PaintCallback {
        rect: params.canvas_rect,
        callback: Arc::new(cb),
    }
}
