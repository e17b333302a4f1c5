use anyhow::{Context, Result};
use wgpu::SurfaceError;
use winit::dpi::PhysicalSize;
use winit::window::Window;

use super::surface;
use super::{GpuFrame, GpuInit, SurfaceErrorAction};

/// The wgpu objects behind the single halo window.
///
/// The surface borrows the window for `'w`, which is why the runtime keeps
/// both in one self-referencing entry.
pub struct Gpu<'w> {
    surface: wgpu::Surface<'w>,
    surface_config: wgpu::SurfaceConfiguration,
    adapter: wgpu::Adapter,
    device: wgpu::Device,
    queue: wgpu::Queue,
    /// Physical pixels; may be 0x0 while minimized.
    drawable: PhysicalSize<u32>,
}

impl<'w> Gpu<'w> {
    /// Opens the adapter and device for `window` and configures its surface.
    pub async fn new(window: &'w Window, init: GpuInit) -> Result<Self> {
        let drawable = window.inner_size();
        anyhow::ensure!(
            drawable.width > 0 && drawable.height > 0,
            "cannot open a surface on a {}x{} window",
            drawable.width,
            drawable.height
        );

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance
            .create_surface(window)
            .context("creating the window surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("no adapter can present to this window")?;

        let (device, queue) = open_device(&adapter, &init).await?;
        let surface_config = surface_config_for(&surface, &adapter, &init, drawable)?;
        surface.configure(&device, &surface_config);

        let gpu = Self {
            surface,
            surface_config,
            adapter,
            device,
            queue,
            drawable,
        };
        gpu.log_startup();
        Ok(gpu)
    }

    fn log_startup(&self) {
        let info = self.adapter_info();
        log::info!(
            "adapter: {} ({:?}, driver {} {})",
            info.name,
            info.backend,
            info.driver,
            info.driver_info
        );
        log::debug!(
            "surface: {:?} {}x{} {:?}",
            self.surface_config.format,
            self.drawable.width,
            self.drawable.height,
            self.surface_config.present_mode
        );
    }

    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.surface_config.format
    }

    /// Drawable size in physical pixels.
    pub fn size(&self) -> PhysicalSize<u32> {
        self.drawable
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    /// Name, backend and driver of the adapter in use.
    pub fn adapter_info(&self) -> wgpu::AdapterInfo {
        self.adapter.get_info()
    }

    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        surface::apply_resize(
            &self.surface,
            &self.device,
            &mut self.surface_config,
            &mut self.drawable,
            new_size,
        );
    }

    /// Acquires the next swapchain image and an encoder to record into.
    pub fn begin_frame(&self) -> std::result::Result<GpuFrame, SurfaceError> {
        let surface_texture = self.surface.get_current_texture()?;
        let view = surface_texture.texture.create_view(&Default::default());
        let encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("halo frame encoder"),
            });

        Ok(GpuFrame {
            surface_texture,
            view,
            encoder,
        })
    }

    /// Submits the frame's commands, then presents its image.
    pub fn submit(&self, frame: GpuFrame) {
        let GpuFrame {
            surface_texture,
            view,
            encoder,
        } = frame;
        self.queue.submit([encoder.finish()]);
        drop(view);
        surface_texture.present();
    }

    /// Logs a failed acquire and reconfigures the surface when that helps.
    pub fn recover(&mut self, err: SurfaceError) -> SurfaceErrorAction {
        log::debug!("acquire failed: {err:?}");
        surface::recover_from_error(
            &self.surface,
            &self.device,
            &self.surface_config,
            self.drawable,
            &err,
        )
    }
}

async fn open_device(adapter: &wgpu::Adapter, init: &GpuInit) -> Result<(wgpu::Device, wgpu::Queue)> {
    adapter
        .request_device(&wgpu::DeviceDescriptor {
            label: Some("halo device"),
            required_features: init.required_features,
            required_limits: init.required_limits.clone().using_resolution(adapter.limits()),
            experimental_features: wgpu::ExperimentalFeatures::disabled(),
            memory_hints: wgpu::MemoryHints::Performance,
            trace: wgpu::Trace::Off,
        })
        .await
        .context("opening the GPU device")
}

fn surface_config_for(
    surface: &wgpu::Surface,
    adapter: &wgpu::Adapter,
    init: &GpuInit,
    drawable: PhysicalSize<u32>,
) -> Result<wgpu::SurfaceConfiguration> {
    let caps = surface.get_capabilities(adapter);
    let format = surface::choose_surface_format(&caps, init.prefer_srgb)
        .context("surface reports no texture formats")?;

    Ok(wgpu::SurfaceConfiguration {
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        format,
        width: drawable.width.max(1),
        height: drawable.height.max(1),
        present_mode: surface::choose_present_mode(&caps, init.present_mode),
        alpha_mode: surface::choose_alpha_mode(&caps, init.alpha_mode),
        view_formats: Vec::new(),
        desired_maximum_frame_latency: init.desired_maximum_frame_latency,
    })
}
