use super::helpers;
use crate::constants::QUAD_CORNERS;
use starfield_core::{FrameUniforms, LayerUniforms, ParticleLayer, PARTICLES_WGSL};
use wgpu::util::DeviceExt;

/// GPU side of one particle layer. Positions are uploaded once; only the
/// uniforms (rotation, size, alpha) are rewritten each frame.
pub(crate) struct LayerResources {
    pub(crate) instance_vb: wgpu::Buffer,
    pub(crate) instance_count: u32,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
}

pub(crate) struct ParticleResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) quad_vb: wgpu::Buffer,
    pub(crate) frame_buffer: wgpu::Buffer,
    pub(crate) frame_bind_group: wgpu::BindGroup,
    pub(crate) layers: Vec<LayerResources>,
}

pub(crate) fn create_particle_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
    layers: &[ParticleLayer],
) -> ParticleResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("particles_shader"),
        source: wgpu::ShaderSource::Wgsl(PARTICLES_WGSL.into()),
    });
    let frame_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("frame_bgl"),
        entries: &[helpers::uniform_layout_entry(
            wgpu::ShaderStages::VERTEX_FRAGMENT,
        )],
    });
    let layer_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("layer_bgl"),
        entries: &[helpers::uniform_layout_entry(
            wgpu::ShaderStages::VERTEX_FRAGMENT,
        )],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("particles_pl"),
        bind_group_layouts: &[&frame_bgl, &layer_bgl],
        push_constant_ranges: &[],
    });

    let vertex_buffers = [
        // slot 0: sprite corners
        wgpu::VertexBufferLayout {
            array_stride: (std::mem::size_of::<f32>() * 2) as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x2,
                offset: 0,
                shader_location: 0,
            }],
        },
        // slot 1: particle positions
        wgpu::VertexBufferLayout {
            array_stride: (std::mem::size_of::<f32>() * 3) as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 1,
            }],
        },
    ];
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("particles_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &vertex_buffers,
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState::default(),
        // No depth: layers never occlude one another.
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend: Some(helpers::additive_blend()),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });

    let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("quad_vb"),
        contents: bytemuck::cast_slice(&QUAD_CORNERS),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let frame_buffer = helpers::create_uniform_buffer(
        device,
        "frame_uniforms",
        std::mem::size_of::<FrameUniforms>(),
    );
    let frame_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("frame_bg"),
        layout: &frame_bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: frame_buffer.as_entire_binding(),
        }],
    });

    let layers = layers
        .iter()
        .enumerate()
        .map(|(i, layer)| {
            let positions: Vec<[f32; 3]> =
                layer.positions().iter().map(|p| p.to_array()).collect();
            let instance_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("layer{}_instances", i)),
                contents: bytemuck::cast_slice(&positions),
                usage: wgpu::BufferUsages::VERTEX,
            });
            let uniform_buffer = helpers::create_uniform_buffer(
                device,
                &format!("layer{}_uniforms", i),
                std::mem::size_of::<LayerUniforms>(),
            );
            let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some(&format!("layer{}_bg", i)),
                layout: &layer_bgl,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                }],
            });
            LayerResources {
                instance_vb,
                instance_count: positions.len() as u32,
                uniform_buffer,
                bind_group,
            }
        })
        .collect();

    ParticleResources {
        pipeline,
        quad_vb,
        frame_buffer,
        frame_bind_group,
        layers,
    }
}
