use std::sync::Arc;
use std::time::{Duration, Instant};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::config::{FPS, TILE_SIZE, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::error::{AppError, AppResult};
use crate::gpu::{GpuContext, GridBuffers, GridRenderer};
use crate::session::{Command, Session};

/// Window, renderer, and the session they display
pub struct App {
    window: Option<Arc<Window>>,
    gpu: Option<GpuContext>,
    grid_buffers: Option<GridBuffers>,
    renderer: Option<GridRenderer>,
    session: Session,
    cursor: Option<PhysicalPosition<f64>>,
    frame_clock: FrameClock,
    caption: String,
    error: Option<AppError>,
}

impl App {
    pub fn new(session: Session) -> Self {
        Self {
            window: None,
            gpu: None,
            grid_buffers: None,
            renderer: None,
            session,
            cursor: None,
            frame_clock: FrameClock::new(FPS, Instant::now()),
            caption: String::new(),
            error: None,
        }
    }

    /// Start-up error that stopped the event loop, if any
    pub fn finish(self) -> AppResult<()> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> AppResult<()> {
        log::info!("Initializing Game of Life...");
        let config = self.session.engine().config();
        log::info!("Grid size: {}x{}", config.grid_width, config.grid_height);

        let window_attrs = Window::default_attributes()
            .with_title(self.session.caption())
            .with_inner_size(winit::dpi::PhysicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
            .with_resizable(false);
        let window = Arc::new(event_loop.create_window(window_attrs)?);

        log::info!("Creating GPU context...");
        let gpu = pollster::block_on(GpuContext::new(window.clone()))?;

        let grid_buffers = GridBuffers::new(
            &gpu.device,
            config.grid_width.max(0) as u32,
            config.grid_height.max(0) as u32,
        );
        grid_buffers.update_render_params(&gpu.queue, TILE_SIZE, gpu.format().is_srgb());

        let renderer = GridRenderer::new(&gpu.device, gpu.format(), &grid_buffers);

        log::info!("Initialization complete!");
        log::info!("Controls:");
        log::info!("  Click: Toggle cell");
        log::info!("  Space: Play/pause");
        log::info!("  C: Clear");
        log::info!("  X: Random population");
        log::info!("  Escape: Quit");

        self.window = Some(window);
        self.gpu = Some(gpu);
        self.grid_buffers = Some(grid_buffers);
        self.renderer = Some(renderer);
        Ok(())
    }

    fn render(&mut self) {
        let (Some(gpu), Some(buffers), Some(renderer)) = (
            self.gpu.as_ref(),
            self.grid_buffers.as_mut(),
            self.renderer.as_ref(),
        ) else {
            return;
        };

        buffers.upload_cells(&gpu.queue, self.session.state());

        let output = match gpu.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                gpu.reconfigure();
                return;
            }
            Err(e) => {
                log::error!("Surface error: {:?}", e);
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frame-encoder"),
            });

        renderer.draw(&mut encoder, &view);

        gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        self.update_caption();
    }

    fn update_caption(&mut self) {
        let caption = self.session.caption();
        if caption != self.caption {
            if let Some(window) = &self.window {
                window.set_title(&caption);
            }
            self.caption = caption;
        }
    }

    fn handle_key(&mut self, key_code: KeyCode) {
        let command = match key_code {
            KeyCode::Space => Command::TogglePlay,
            KeyCode::KeyC => Command::Clear,
            KeyCode::KeyX => Command::Randomize,
            _ => return,
        };
        self.session.apply(command);
    }

    /// Any button press toggles the cell under the cursor
    fn handle_mouse(&mut self, state: ElementState) {
        if !state.is_pressed() {
            return;
        }
        if let Some(position) = self.cursor {
            self.session.toggle_at_pixel(position.x, position.y, TILE_SIZE);
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(err) = self.init(event_loop) {
            log::error!("{}", err);
            self.error = Some(err);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting...");
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state.is_pressed() && !event.repeat {
                    if let PhysicalKey::Code(key_code) = event.physical_key {
                        if key_code == KeyCode::Escape {
                            log::info!("Escape pressed, exiting...");
                            event_loop.exit();
                        } else {
                            self.handle_key(key_code);
                        }
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Some(position);
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
            }
            WindowEvent::MouseInput { state, .. } => {
                self.handle_mouse(state);
            }
            WindowEvent::Resized(new_size) => {
                if let Some(gpu) = &mut self.gpu {
                    log::info!("Window resized to {}x{}", new_size.width, new_size.height);
                    gpu.resize(new_size);
                }
            }
            WindowEvent::RedrawRequested => {
                self.render();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        if self.frame_clock.poll(now) {
            self.session.tick();
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.frame_clock.next_frame()));
    }
}

/// Fixed-cadence frame scheduler
struct FrameClock {
    interval: Duration,
    next_frame: Instant,
}

impl FrameClock {
    fn new(fps: u32, now: Instant) -> Self {
        Self {
            interval: Duration::from_secs(1) / fps.max(1),
            next_frame: now,
        }
    }

    fn next_frame(&self) -> Instant {
        self.next_frame
    }

    /// Returns true once per interval. A late frame does not cause a
    /// burst of catch-up frames.
    fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_frame {
            return false;
        }
        self.next_frame += self.interval;
        if self.next_frame <= now {
            self.next_frame = now + self.interval;
        }
        true
    }
}
