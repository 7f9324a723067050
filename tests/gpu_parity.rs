//! Runs the WGSL kernel and compares against the CPU path.
//! Needs a usable wgpu adapter, so it only runs with `cargo test -- --ignored`.

use duotone::gpu::{self, ToneUniform};
use duotone::{apply, Color4, ToneConfig};
use image::Rgba;
use wgpu::util::DeviceExt;

async fn run_on_gpu(config: &ToneConfig, pixels: &[Rgba<u8>]) -> Option<Vec<Rgba<u8>>> {
    let instance = wgpu::Instance::default();
    let adapter = instance.request_adapter(&wgpu::RequestAdapterOptions {
        power_preference: wgpu::PowerPreference::default(),
        compatible_surface: None,
        force_fallback_adapter: false,
    }).await?;
    let (device, queue) = adapter.request_device(
        &wgpu::DeviceDescriptor {
            label: Some("duotone test device"),
            features: wgpu::Features::empty(),
            limits: wgpu::Limits::downlevel_defaults(),
        },
        None,
    ).await.ok()?;

    let count = pixels.len() as u32;
    let uniform = ToneUniform::new(config, count);
    let packed: Vec<u32> = pixels.iter().map(|p| gpu::pack_pixel(*p)).collect();

    let params_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor { label: Some("Params"), contents: bytemuck::bytes_of(&uniform), usage: wgpu::BufferUsages::UNIFORM });
    let input_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor { label: Some("Input"), contents: bytemuck::cast_slice(&packed), usage: wgpu::BufferUsages::STORAGE });
    let size = (packed.len() * 4) as wgpu::BufferAddress;
    let output_buffer = device.create_buffer(&wgpu::BufferDescriptor { label: Some("Output"), size, usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_SRC, mapped_at_creation: false });
    let staging_buffer = device.create_buffer(&wgpu::BufferDescriptor { label: Some("Staging"), size, usage: wgpu::BufferUsages::MAP_READ | wgpu::BufferUsages::COPY_DST, mapped_at_creation: false });

    let shader = device.create_shader_module(gpu::shader_module_descriptor());
    let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("duotone layout"),
        entries: &gpu::bind_group_layout_entries(),
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("duotone bind group"),
        layout: &bind_group_layout,
        entries: &[
            wgpu::BindGroupEntry { binding: gpu::PARAMS_BINDING, resource: params_buffer.as_entire_binding() },
            wgpu::BindGroupEntry { binding: gpu::INPUT_BINDING, resource: input_buffer.as_entire_binding() },
            wgpu::BindGroupEntry { binding: gpu::OUTPUT_BINDING, resource: output_buffer.as_entire_binding() },
        ],
    });
    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor { label: Some("duotone pipeline layout"), bind_group_layouts: &[&bind_group_layout], push_constant_ranges: &[] });
    let pipeline = device.create_compute_pipeline(&wgpu::ComputePipelineDescriptor { label: Some("duotone"), layout: Some(&pipeline_layout), module: &shader, entry_point: gpu::ENTRY_POINT });

    let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor { label: Some("encoder") });
    {
        let mut cpass = encoder.begin_compute_pass(&wgpu::ComputePassDescriptor { label: Some("duotone pass") });
        cpass.set_pipeline(&pipeline);
        cpass.set_bind_group(0, &bind_group, &[]);
        cpass.dispatch_workgroups(gpu::workgroup_count(count), 1, 1);
    }
    encoder.copy_buffer_to_buffer(&output_buffer, 0, &staging_buffer, 0, size);
    queue.submit(Some(encoder.finish()));

    let buffer_slice = staging_buffer.slice(..);
    let (tx, rx) = futures_intrusive::channel::shared::oneshot_channel();
    buffer_slice.map_async(wgpu::MapMode::Read, move |v| { let _ = tx.send(v); });
    device.poll(wgpu::Maintain::Wait);
    rx.receive().await?.ok()?;

    let data = buffer_slice.get_mapped_range();
    let out = bytemuck::cast_slice::<u8, u32>(&data).iter().map(|v| gpu::unpack_pixel(*v)).collect();
    drop(data);
    staging_buffer.unmap();
    Some(out)
}

#[test]
#[ignore = "needs a wgpu adapter; run with --ignored"]
fn shader_matches_cpu_kernel() {
    let configs = [
        ToneConfig::default(),
        ToneConfig::new(Color4(0.0, 0.0, 0.0, 255.0), Color4(255.0, 255.0, 255.0, 255.0), 1.0),
        ToneConfig::from_hues(250.0, 10.0, 3.0),
        ToneConfig::from_hues(120.0, 300.0, -1.5),
    ];
    // every byte value in every channel at least once
    let pixels: Vec<Rgba<u8>> = (0..1024u32)
        .map(|i| Rgba([(i % 256) as u8, (i * 37 % 256) as u8, (i * 101 % 256) as u8, (255 - i % 256) as u8]))
        .collect();

    for cfg in &configs {
        let gpu_out = pollster::block_on(run_on_gpu(cfg, &pixels))
            .expect("no usable wgpu adapter or device");
        for (px, g) in pixels.iter().zip(&gpu_out) {
            let c = apply(*px, cfg);
            let close = c.0.iter().zip(g.0.iter()).all(|(a, b)| a.abs_diff(*b) <= 1);
            assert!(close, "{px:?}: cpu {c:?} gpu {g:?} for {cfg:?}");
        }
    }
}
