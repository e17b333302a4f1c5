use wgpu::util::DeviceExt;

use crate::mesh::Mesh;
use crate::render::{RenderCtx, RenderTarget, SceneUniform};
use crate::shader::{ShaderModules, ShaderSource, FRAGMENT_ENTRY, VERTEX_ENTRY};

/// Draws one static [`Mesh`] with one tagged shader and a [`SceneUniform`].
///
/// GPU resources are created on the first `render` call; the pipeline is
/// rebuilt if the surface format changes. When the shader cannot be
/// compiled the renderer logs once and draws nothing from then on.
pub struct MeshRenderer {
    label: String,
    mesh: Mesh,
    source: ShaderSource,
    uniforms: SceneUniform,

    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,
    shader_failed: bool,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    uniform_ubo: Option<wgpu::Buffer>,

    vbo: Option<wgpu::Buffer>,
    ibo: Option<wgpu::Buffer>,
}

impl MeshRenderer {
    pub fn new(label: impl Into<String>, mesh: Mesh, source: ShaderSource) -> Self {
        Self {
            label: label.into(),
            mesh,
            source,
            uniforms: SceneUniform::default(),
            pipeline_format: None,
            pipeline: None,
            shader_failed: false,
            bind_group_layout: None,
            bind_group: None,
            uniform_ubo: None,
            vbo: None,
            ibo: None,
        }
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn uniforms(&self) -> SceneUniform {
        self.uniforms
    }

    /// Sets the uniform values uploaded on the next `render`.
    ///
    /// `aspect` is overwritten from the drawable size at render time.
    pub fn set_uniforms(&mut self, uniforms: SceneUniform) {
        self.uniforms = uniforms;
    }

    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) {
        if self.mesh.index_count() == 0 {
            return;
        }

        self.ensure_pipeline(ctx);
        if self.shader_failed {
            return;
        }
        self.ensure_bindings(ctx);
        self.ensure_static_buffers(ctx);
        self.write_uniforms(ctx);

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };
        let Some(vbo) = self.vbo.as_ref() else { return };
        let Some(ibo) = self.ibo.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some(self.label.as_str()),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, vbo.slice(..));
        rpass.set_index_buffer(ibo.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..self.mesh.index_count() as u32, 0, 0..1);
    }

    // ── private helpers ────────────────────────────────────────────────────

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.shader_failed {
            return;
        }
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let modules = match ShaderModules::compile(ctx.device, &self.source, &self.label) {
            Ok(m) => m,
            Err(e) => {
                log::error!("{}: {e}", self.label);
                self.shader_failed = true;
                return;
            }
        };

        let bind_group_layout =
            ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("halo scene bgl"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: wgpu::BufferSize::new(SceneUniform::SIZE),
                    },
                    count: None,
                }],
            });

        let pipeline_layout =
            ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("halo mesh pipeline layout"),
                bind_group_layouts: &[&bind_group_layout],
                immediate_size: 0,
            });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(self.label.as_str()),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &modules.vertex,
                entry_point: Some(VERTEX_ENTRY),
                compilation_options: Default::default(),
                buffers: &[position_layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &modules.fragment,
                entry_point: Some(FRAGMENT_ENTRY),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // The quad mixes windings.
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        log::debug!("{}: pipeline built for {:?}", self.label, ctx.surface_format);

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);
        self.bind_group = None;
        self.uniform_ubo = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.uniform_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let uniform_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("halo scene ubo"),
            size: SceneUniform::SIZE,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("halo scene bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_ubo.as_entire_binding(),
            }],
        });

        self.uniform_ubo = Some(uniform_ubo);
        self.bind_group = Some(bind_group);
    }

    fn ensure_static_buffers(&mut self, ctx: &RenderCtx<'_>) {
        if self.vbo.is_some() && self.ibo.is_some() {
            return;
        }

        self.vbo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("halo mesh vbo"),
            contents: bytemuck::cast_slice(self.mesh.positions()),
            usage: wgpu::BufferUsages::VERTEX,
        }));
        self.ibo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("halo mesh ibo"),
            contents: bytemuck::cast_slice(self.mesh.indices()),
            usage: wgpu::BufferUsages::INDEX,
        }));
    }

    fn write_uniforms(&mut self, ctx: &RenderCtx<'_>) {
        self.uniforms.aspect = ctx.aspect();
        let Some(ubo) = self.uniform_ubo.as_ref() else { return };
        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&self.uniforms));
    }
}

const POSITION_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

fn position_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<[f32; 2]>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &POSITION_ATTRS,
    }
}
