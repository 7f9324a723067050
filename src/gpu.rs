//! src/gpu.rs
//! ----------
//! The duotone kernel as a WGSL compute shader, plus the pieces a wgpu host
//! needs to bind it. Device setup and dispatch stay with the caller.

use crate::tonemap::ToneConfig;
use bytemuck::{Pod, Zeroable};
use image::Rgba;

pub const SHADER_SOURCE: &str = include_str!("duotone.wgsl");
pub const ENTRY_POINT: &str = "main";
pub const WORKGROUP_SIZE: u32 = 64;

pub const PARAMS_BINDING: u32 = 0;
pub const INPUT_BINDING: u32 = 1;
pub const OUTPUT_BINDING: u32 = 2;

/// Uniform block matching `ToneParams` in the shader (48 bytes).
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ToneUniform {
    pub dark_color: [f32; 4],
    pub light_color: [f32; 4],
    pub strength: f32,
    pub pixel_count: u32,
    pub _pad: [u32; 2],
}

impl ToneUniform {
    pub fn new(config: &ToneConfig, pixel_count: u32) -> Self {
        Self {
            dark_color: config.dark_color.into(),
            light_color: config.light_color.into(),
            strength: config.strength,
            pixel_count,
            _pad: [0; 2],
        }
    }
}

/// Workgroups to dispatch along x for `pixel_count` pixels.
pub fn workgroup_count(pixel_count: u32) -> u32 {
    pixel_count.div_ceil(WORKGROUP_SIZE)
}

#[inline]
pub fn pack_pixel(p: Rgba<u8>) -> u32 { u32::from_le_bytes(p.0) }

#[inline]
pub fn unpack_pixel(v: u32) -> Rgba<u8> { Rgba(v.to_le_bytes()) }

pub fn shader_module_descriptor() -> wgpu::ShaderModuleDescriptor<'static> {
    log::trace!("duotone shader: {} bytes of WGSL", SHADER_SOURCE.len());
    wgpu::ShaderModuleDescriptor {
        label: Some("Duotone"),
        source: wgpu::ShaderSource::Wgsl(SHADER_SOURCE.into()),
    }
}

pub fn bind_group_layout_entries() -> [wgpu::BindGroupLayoutEntry; 3] {
    let buffer = |binding, ty| wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::COMPUTE,
        ty: wgpu::BindingType::Buffer { ty, has_dynamic_offset: false, min_binding_size: None },
        count: None,
    };
    [
        buffer(PARAMS_BINDING, wgpu::BufferBindingType::Uniform),
        buffer(INPUT_BINDING, wgpu::BufferBindingType::Storage { read_only: true }),
        buffer(OUTPUT_BINDING, wgpu::BufferBindingType::Storage { read_only: false }),
    ]
}
