//! wgpu device and surface setup.
//!
//! [`GpuContext`] owns the handful of wgpu objects the example needs:
//! the window surface, the logical device, the command queue, and the
//! surface configuration. It is created once when the window appears
//! and passed by reference everywhere else.
//!
//! Initialization failures here are fatal; there is nothing sensible to
//! do without a GPU, so this module panics rather than returning errors.

use std::sync::Arc;
use winit::window::Window;

/// Core GPU state shared by the scene and the render loop.
pub struct GpuContext {
    /// Surface presenting rendered frames to the window.
    pub surface: wgpu::Surface<'static>,
    /// Logical device for creating buffers and pipelines.
    pub device: wgpu::Device,
    /// Queue for submitting command buffers and buffer writes.
    pub queue: wgpu::Queue,
    /// Current surface configuration (format, size, present mode).
    pub config: wgpu::SurfaceConfiguration,
}

impl GpuContext {
    /// Initializes wgpu against a winit window.
    ///
    /// Picks the first suitable adapter, creates a device and queue with
    /// default limits, and configures the surface with an sRGB format
    /// and Fifo (vsync) presentation.
    ///
    /// # Panics
    ///
    /// Panics if no adapter is found or device creation fails.
    pub fn new(window: Arc<Window>) -> Self {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance.create_surface(window).unwrap();

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .expect("No suitable GPU adapter found");

        log::info!("using adapter: {}", adapter.get_info().name);

        let (device, queue) = pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor {
            label: Some("Orbitquad Device"),
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            memory_hints: Default::default(),
            trace: Default::default(),
            experimental_features: Default::default(),
        }))
        .expect("Failed to create device");

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width,
            height: size.height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        Self {
            surface,
            device,
            queue,
            config,
        }
    }

    /// Reconfigures the surface after a window resize.
    ///
    /// Zero-sized dimensions are ignored; they show up transiently when
    /// the window is minimized and would fail wgpu validation.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }
}
