//! Shared plumbing for the `quad` and `circle` programs.
//!
//! Both programs load a tagged shader file, build one mesh, and redraw it
//! every frame while animating a single uniform. They differ only in the
//! [`DemoConfig`] they start from.

pub mod animation;

use std::path::PathBuf;

use anyhow::{Context, Result};
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::WindowId;

use halo_engine::core::{App, AppControl, FrameCtx};
use halo_engine::device::GpuInit;
use halo_engine::logging::{init_logging, LoggingConfig};
use halo_engine::mesh::Mesh;
use halo_engine::render::MeshRenderer;
use halo_engine::shader::load_shader_file;
use halo_engine::window::{Runtime, RuntimeConfig};

pub use animation::{Animation, ColorPulse};

/// Directory holding the shipped shader resources.
pub fn shader_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("res").join("shaders")
}

/// Geometry a program draws.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MeshKind {
    Quad,
    /// Triangle-fan circle with the given angular step in degrees.
    Fan { angle_increment: f32 },
}

impl MeshKind {
    pub fn build(self) -> Result<Mesh> {
        match self {
            MeshKind::Quad => Ok(Mesh::quad()),
            MeshKind::Fan { angle_increment } => Mesh::fan(angle_increment)
                .with_context(|| format!("cannot build circle with a {angle_increment}° step")),
        }
    }
}

/// Program configuration.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub title: String,
    pub size: LogicalSize<f64>,
    pub shader_path: PathBuf,
    pub mesh: MeshKind,
    pub animation: Animation,
    pub clear_color: wgpu::Color,
}

impl DemoConfig {
    /// White quad whose red channel pulses.
    pub fn quad() -> Self {
        Self {
            title: "Hello World".to_string(),
            size: LogicalSize::new(640.0, 640.0),
            shader_path: shader_dir().join("basic.shader"),
            mesh: MeshKind::Quad,
            animation: Animation::RedPulse(ColorPulse::default()),
            clear_color: wgpu::Color::BLACK,
        }
    }

    /// Circle (10° fan) whose fragment color follows elapsed time.
    pub fn circle() -> Self {
        Self {
            title: "Hello Circle".to_string(),
            shader_path: shader_dir().join("circle.shader"),
            mesh: MeshKind::Fan { angle_increment: 10.0 },
            animation: Animation::ElapsedTime,
            ..Self::quad()
        }
    }

    /// Replaces the shader path with the first command-line argument, if any.
    pub fn with_args(mut self, mut args: impl Iterator<Item = String>) -> Self {
        if let Some(path) = args.next() {
            self.shader_path = PathBuf::from(path);
        }
        self
    }
}

/// `core::App` driving one [`MeshRenderer`].
pub struct DemoApp {
    renderer: MeshRenderer,
    animation: Animation,
    clear_color: wgpu::Color,
}

impl DemoApp {
    /// Loads the shader and builds the mesh; nothing touches the GPU yet.
    pub fn new(config: &DemoConfig) -> Result<Self> {
        let source = load_shader_file(&config.shader_path);
        let mesh = config.mesh.build()?;
        log::info!(
            "{}: {} vertices, {} indices, shader {}",
            config.title,
            mesh.vertex_count(),
            mesh.index_count(),
            config.shader_path.display()
        );

        Ok(Self {
            renderer: MeshRenderer::new(config.title.clone(), mesh, source),
            animation: config.animation,
            clear_color: config.clear_color,
        })
    }

    pub fn renderer(&self) -> &MeshRenderer {
        &self.renderer
    }
}

impl App for DemoApp {
    fn on_window_event(&mut self, _window_id: WindowId, event: &WindowEvent) -> AppControl {
        match event {
            WindowEvent::KeyboardInput { event, .. }
                if event.state == ElementState::Pressed
                    && event.physical_key == PhysicalKey::Code(KeyCode::Escape) =>
            {
                AppControl::Exit
            }
            _ => AppControl::Continue,
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let uniforms = self.animation.apply(&ctx.time, self.renderer.uniforms());
        self.renderer.set_uniforms(uniforms);

        let renderer = &mut self.renderer;
        ctx.render(self.clear_color, |rctx, target| renderer.render(rctx, target))
    }
}

/// Initializes logging, builds the app and runs the event loop.
pub fn run(config: DemoConfig) -> Result<()> {
    init_logging(LoggingConfig::default());

    let app = DemoApp::new(&config)?;
    let runtime = RuntimeConfig {
        title: config.title.clone(),
        initial_size: config.size,
    };

    Runtime::run(runtime, GpuInit::default(), app)
}
