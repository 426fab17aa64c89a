use wgpu::{Buffer, BufferUsages, Device, Queue};

use crate::config::{DEAD_COLOR, LINE_COLOR, LIVE_COLOR};
use crate::simulation::GridState;

/// Storage buffer of per-tile occupancy plus the render uniform
pub struct GridBuffers {
    /// One `u32` per visible tile, row-major, non-zero when live
    pub cells_buffer: Buffer,
    /// Uniform buffer for render parameters
    pub render_params_buffer: Buffer,
    /// CPU-side staging copy of the occupancy
    occupancy: Vec<u32>,
    /// Grid dimensions in tiles
    pub width: u32,
    pub height: u32,
}

/// Render parameters passed to the render shader (64 bytes, aligned to 16)
#[repr(C)]
#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct RenderParams {
    // Grid info (16 bytes)
    pub grid_width: u32,
    pub grid_height: u32,
    pub tile_size: u32,
    pub _padding: u32,

    // Colours (48 bytes)
    pub live_color: [f32; 4],
    pub dead_color: [f32; 4],
    pub line_color: [f32; 4],
}

impl GridBuffers {
    /// Create buffers for a `width x height` tile field
    pub fn new(device: &Device, width: u32, height: u32) -> Self {
        let tile_count = (width * height).max(1) as usize;
        let buffer_size = (tile_count * std::mem::size_of::<u32>()) as u64;

        let cells_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("cells-buffer"),
            size: buffer_size,
            usage: BufferUsages::STORAGE | BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let render_params_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("render-params-buffer"),
            size: std::mem::size_of::<RenderParams>() as u64,
            usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            cells_buffer,
            render_params_buffer,
            occupancy: vec![0; tile_count],
            width,
            height,
        }
    }

    /// Upload the live cells that fall inside the visible field
    pub fn upload_cells(&mut self, queue: &Queue, state: &GridState) {
        fill_occupancy(&mut self.occupancy, state, self.width, self.height);
        queue.write_buffer(&self.cells_buffer, 0, bytemuck::cast_slice(&self.occupancy));
    }

    /// Update render parameters
    pub fn update_render_params(&self, queue: &Queue, tile_size: u32, srgb_surface: bool) {
        let color = |c: [f32; 4]| {
            if srgb_surface {
                srgb_to_linear(c)
            } else {
                c
            }
        };
        let params = RenderParams {
            grid_width: self.width,
            grid_height: self.height,
            tile_size,
            _padding: 0,
            live_color: color(LIVE_COLOR),
            dead_color: color(DEAD_COLOR),
            line_color: color(LINE_COLOR),
        };
        queue.write_buffer(&self.render_params_buffer, 0, bytemuck::bytes_of(&params));
    }
}

/// Row-major occupancy of a `width x height` field; cells outside it are
/// skipped
fn fill_occupancy(occupancy: &mut [u32], state: &GridState, width: u32, height: u32) {
    occupancy.fill(0);
    for cell in state {
        let (Ok(column), Ok(row)) = (u32::try_from(cell.column), u32::try_from(cell.row)) else {
            continue;
        };
        if column < width && row < height {
            occupancy[(row * width + column) as usize] = 1;
        }
    }
}

fn srgb_to_linear([r, g, b, a]: [f32; 4]) -> [f32; 4] {
    let channel = |c: f32| {
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    [channel(r), channel(g), channel(b), a]
}
