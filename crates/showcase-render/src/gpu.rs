use glam::Vec3;
use showcase_core::{
    light_direction, FrameSnapshot, Material, SceneLayout, LIGHT_INTENSITY, PARTICLES_WGSL,
    SCENE_WGSL, TONE_MAPPING_EXPOSURE,
};
use wgpu::util::DeviceExt;

use crate::helpers::{self, PipelineDesc};
use crate::targets::DepthTarget;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
    view: [[f32; 4]; 4],
    camera_pos: [f32; 4],
    light_dir: [f32; 4],
    particle_color: [f32; 4],
    camera_right: [f32; 4],
    camera_up: [f32; 4],
    tone: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct ObjectUniforms {
    model: [[f32; 4]; 4],
    color: [f32; 4],
    params: [f32; 4],
}

struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    material: Material,
}

/// Static scene content uploaded once at start-up.
pub struct RenderSetup<'s> {
    pub layout: &'s SceneLayout,
    pub particles: &'s [Vec3],
    pub particle_color: [f32; 3],
    pub particle_size: f32,
    pub clear_color: wgpu::Color,
}

pub struct GpuState<'w> {
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    view_format: wgpu::TextureFormat,
    depth: DepthTarget,

    scene_uniform_buffer: wgpu::Buffer,
    scene_bind_group: wgpu::BindGroup,

    mesh_pipeline: wgpu::RenderPipeline,
    meshes: Vec<GpuMesh>,

    particle_pipeline: wgpu::RenderPipeline,
    quad_vb: wgpu::Buffer,
    particle_vb: wgpu::Buffer,
    particle_count: u32,
    particle_color: [f32; 3],
    /// Attenuated point size; converted to a world-space width per frame.
    particle_size: f32,

    clear_color: wgpu::Color,
    width: u32,
    height: u32,
}

impl<'w> GpuState<'w> {
    pub async fn new(
        target: impl Into<wgpu::SurfaceTarget<'w>>,
        width: u32,
        height: u32,
        setup: RenderSetup<'_>,
    ) -> anyhow::Result<Self> {
        let width = width.max(1);
        let height = height.max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(target)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let (view_format, view_formats) = helpers::srgb_view_formats(format);
        // Prefer a blending alpha mode so a transparent clear shows the page behind.
        let alpha_mode = caps
            .alpha_modes
            .iter()
            .copied()
            .find(|m| *m == wgpu::CompositeAlphaMode::PreMultiplied)
            .or_else(|| caps.alpha_modes.first().copied())
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats,
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!(
            "[gpu] surface {width}x{height} format={format:?} view={view_format:?} alpha={alpha_mode:?}"
        );

        let depth = DepthTarget::new(&device, width, height);

        // Shared scene uniforms (group 0)
        let scene_uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let scene_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
            entries: &[helpers::uniform_layout_entry(0)],
        });
        let scene_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &scene_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: scene_uniform_buffer.as_entire_binding(),
            }],
        });

        // Section object meshes (group 1 per object)
        let object_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("object_bgl"),
            entries: &[helpers::uniform_layout_entry(0)],
        });
        let meshes = setup
            .layout
            .objects
            .iter()
            .map(|obj| {
                let mesh = obj.kind.build_mesh();
                let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("mesh_vb"),
                    contents: bytemuck::cast_slice(&mesh.vertices),
                    usage: wgpu::BufferUsages::VERTEX,
                });
                let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("mesh_ib"),
                    contents: bytemuck::cast_slice(&mesh.indices),
                    usage: wgpu::BufferUsages::INDEX,
                });
                let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
                    label: Some("object_uniforms"),
                    size: std::mem::size_of::<ObjectUniforms>() as u64,
                    usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                    mapped_at_creation: false,
                });
                let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some("object_bg"),
                    layout: &object_bgl,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: uniform_buffer.as_entire_binding(),
                    }],
                });
                let (min, max) = mesh.bounds();
                log::info!(
                    "[gpu] {:?}: {} vertices, {} triangles, extent {:?}",
                    obj.kind,
                    mesh.vertices.len(),
                    mesh.triangle_count(),
                    (max - min) * obj.scale
                );
                GpuMesh {
                    vertex_buffer,
                    index_buffer,
                    index_count: mesh.indices.len() as u32,
                    uniform_buffer,
                    bind_group,
                    material: obj.material,
                }
            })
            .collect::<Vec<_>>();

        let scene_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(SCENE_WGSL.into()),
        });
        let mesh_pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("mesh_pl"),
            bind_group_layouts: &[&scene_bgl, &object_bgl],
            push_constant_ranges: &[],
        });
        let mesh_buffers = [wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<showcase_core::geometry::Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 0,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 12,
                    shader_location: 1,
                },
            ],
        }];
        let mesh_pipeline = helpers::make_pipeline(
            &device,
            PipelineDesc {
                label: "mesh_pipeline",
                layout: &mesh_pl,
                shader: &scene_shader,
                buffers: &mesh_buffers,
                color_format: view_format,
                blend: Some(wgpu::BlendState::REPLACE),
                depth_write: true,
            },
        );

        // Particles: instanced camera-facing quads
        let particles_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("particles_shader"),
            source: wgpu::ShaderSource::Wgsl(PARTICLES_WGSL.into()),
        });
        let particle_pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("particle_pl"),
            bind_group_layouts: &[&scene_bgl],
            push_constant_ranges: &[],
        });
        let particle_buffers = [
            // slot 0: quad corners
            wgpu::VertexBufferLayout {
                array_stride: (std::mem::size_of::<f32>() * 2) as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &[wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 0,
                    shader_location: 0,
                }],
            },
            // slot 1: particle centers
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
        let particle_pipeline = helpers::make_pipeline(
            &device,
            PipelineDesc {
                label: "particle_pipeline",
                layout: &particle_pl,
                shader: &particles_shader,
                buffers: &particle_buffers,
                color_format: view_format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                depth_write: false,
            },
        );
        let quad_vertices: [f32; 12] = [
            -0.5, -0.5, 0.5, -0.5, 0.5, 0.5, -0.5, -0.5, 0.5, 0.5, -0.5, 0.5,
        ];
        let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad_vb"),
            contents: bytemuck::cast_slice(&quad_vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let centers: Vec<[f32; 3]> = setup.particles.iter().map(|p| p.to_array()).collect();
        // wgpu rejects zero-sized vertex buffers; keep one slot even when empty.
        let particle_bytes: &[u8] = if centers.is_empty() {
            &[0u8; 12]
        } else {
            bytemuck::cast_slice(&centers)
        };
        let particle_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("particle_vb"),
            contents: particle_bytes,
            usage: wgpu::BufferUsages::VERTEX,
        });

        Ok(Self {
            surface,
            device,
            queue,
            config,
            view_format,
            depth,
            scene_uniform_buffer,
            scene_bind_group,
            mesh_pipeline,
            meshes,
            particle_pipeline,
            quad_vb,
            particle_vb,
            particle_count: centers.len() as u32,
            particle_color: setup.particle_color,
            particle_size: setup.particle_size,
            clear_color: setup.clear_color,
            width,
            height,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.depth.recreate(&self.device, width, height);
        }
    }

    /// Reconfigure with the current size, e.g. after `SurfaceError::Lost`.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn set_particle_color(&mut self, rgb: [f32; 3]) {
        self.particle_color = rgb;
    }

    pub fn render(&mut self, frame: &FrameSnapshot) -> Result<(), wgpu::SurfaceError> {
        let surface_tex = self.surface.get_current_texture()?;
        let view = surface_tex
            .texture
            .create_view(&wgpu::TextureViewDescriptor {
                format: Some(self.view_format),
                ..Default::default()
            });

        let camera = &frame.camera;
        let view_m = camera.view_matrix();
        let inv_view = view_m.inverse();
        let light = light_direction();
        let pc = self.particle_color;
        let scene = SceneUniforms {
            view_proj: (camera.projection_matrix() * view_m).to_cols_array_2d(),
            view: view_m.to_cols_array_2d(),
            camera_pos: camera.eye.extend(1.0).to_array(),
            light_dir: [light.x, light.y, light.z, LIGHT_INTENSITY],
            particle_color: [pc[0], pc[1], pc[2], camera.point_world_size(self.particle_size)],
            camera_right: inv_view.x_axis.truncate().extend(0.0).to_array(),
            camera_up: inv_view.y_axis.truncate().extend(0.0).to_array(),
            tone: [TONE_MAPPING_EXPOSURE, 0.0, 0.0, 0.0],
        };
        self.queue
            .write_buffer(&self.scene_uniform_buffer, 0, bytemuck::bytes_of(&scene));

        for (mesh, transform) in self.meshes.iter().zip(frame.objects.iter()) {
            let (color, params) = match mesh.material {
                Material::Reflective {
                    color,
                    metalness,
                    roughness,
                } => (
                    [color[0], color[1], color[2], 1.0],
                    [mesh.material.shader_mode(), metalness, roughness, 0.0],
                ),
                Material::Normal => ([1.0; 4], [mesh.material.shader_mode(), 0.0, 0.0, 0.0]),
            };
            let uniforms = ObjectUniforms {
                model: transform.model_matrix().to_cols_array_2d(),
                color,
                params,
            };
            self.queue
                .write_buffer(&mesh.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
        }

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.mesh_pipeline);
            rpass.set_bind_group(0, &self.scene_bind_group, &[]);
            for mesh in self.meshes.iter().take(frame.objects.len()) {
                rpass.set_bind_group(1, &mesh.bind_group, &[]);
                rpass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                rpass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..mesh.index_count, 0, 0..1);
            }

            if self.particle_count > 0 {
                rpass.set_pipeline(&self.particle_pipeline);
                rpass.set_bind_group(0, &self.scene_bind_group, &[]);
                rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
                rpass.set_vertex_buffer(1, self.particle_vb.slice(..));
                rpass.draw(0..6, 0..self.particle_count);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        surface_tex.present();
        Ok(())
    }
}
