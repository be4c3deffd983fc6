use cgmath::{Matrix, Matrix4, SquareMatrix};
use wgpu::util::DeviceExt;

use crate::{
    gfx::{camera::camera_utils::convert_matrix4_to_array, geometry::GeometryData},
    wgpu_utils::uniform_buffer::UniformBuffer,
};

use super::vertex::Vertex3D;

/// Per-object shader data. MUST match `Object` in `shader.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectUniform {
    model: [[f32; 4]; 4],
    /// Inverse-transpose of `model`, for normals under non-uniform scale
    normal: [[f32; 4]; 4],
    color: [f32; 4],
}

impl ObjectUniform {
    pub fn new(transform: Matrix4<f32>, color: [f32; 3]) -> Self {
        let normal = transform
            .invert()
            .map(|inverse| inverse.transpose())
            .unwrap_or_else(Matrix4::identity);
        Self {
            model: convert_matrix4_to_array(transform),
            normal: convert_matrix4_to_array(normal),
            color: [color[0], color[1], color[2], 1.0],
        }
    }
}

pub struct MeshBuffers {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
}

pub struct Mesh {
    vertices: Vec<Vertex3D>,
    indices: Vec<u32>,
    buffers: Option<MeshBuffers>,
}

impl Mesh {
    pub fn from_geometry(geometry: &GeometryData) -> Self {
        Self {
            vertices: geometry.to_vertices(),
            indices: geometry.indices.clone(),
            buffers: None,
        }
    }

    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    pub fn upload(&mut self, device: &wgpu::Device, label: &str) {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} Vertex Buffer")),
            contents: bytemuck::cast_slice(&self.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} Index Buffer")),
            contents: bytemuck::cast_slice(&self.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        self.buffers = Some(MeshBuffers {
            vertex_buffer,
            index_buffer,
        });
    }
}

// GPU resources for one object's uniform data
pub struct ObjectGpuResources {
    pub transform_buffer: UniformBuffer<ObjectUniform>,
    pub transform_bind_group: wgpu::BindGroup,
}

/// A mesh placed in the world with a flat color.
pub struct Object {
    pub name: String,
    pub mesh: Mesh,
    pub transform: Matrix4<f32>,
    pub color: [f32; 3],
    pub gpu_resources: Option<ObjectGpuResources>, // None until init_gpu_resources called
}

impl Object {
    /// Create a new Object with identity transformation
    pub fn new(name: &str, geometry: &GeometryData, color: [f32; 3]) -> Self {
        Self {
            name: name.to_string(),
            mesh: Mesh::from_geometry(geometry),
            transform: Matrix4::identity(),
            color,
            gpu_resources: None,
        }
    }

    pub fn with_transform(mut self, transform: Matrix4<f32>) -> Self {
        self.transform = transform;
        self
    }

    pub fn uniform(&self) -> ObjectUniform {
        ObjectUniform::new(self.transform, self.color)
    }

    /// Uploads mesh data and creates the per-object uniform and bind group.
    pub fn init_gpu_resources(&mut self, device: &wgpu::Device, layout: &wgpu::BindGroupLayout) {
        self.mesh.upload(device, &self.name);

        let transform_buffer = UniformBuffer::new_with_data(device, &self.uniform());
        let transform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("{} Transform Bind Group", self.name)),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: transform_buffer.binding_resource(),
            }],
        });

        self.gpu_resources = Some(ObjectGpuResources {
            transform_buffer,
            transform_bind_group,
        });
    }

    /// Pushes the current transform and color to the GPU if they changed.
    pub fn sync_gpu(&mut self, queue: &wgpu::Queue) {
        let uniform = self.uniform();
        if let Some(resources) = self.gpu_resources.as_mut() {
            resources.transform_buffer.update_content(queue, uniform);
        }
    }
}

pub trait DrawObject {
    fn draw_object(&mut self, object: &Object);
}

impl DrawObject for wgpu::RenderPass<'_> {
    /// Draws `object` with its own bind group in slot 1. Objects that were never
    /// uploaded are skipped.
    fn draw_object(&mut self, object: &Object) {
        let (Some(resources), Some(buffers)) = (&object.gpu_resources, &object.mesh.buffers) else {
            return;
        };
        self.set_bind_group(1, &resources.transform_bind_group, &[]);
        self.set_vertex_buffer(0, buffers.vertex_buffer.slice(..));
        self.set_index_buffer(buffers.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        self.draw_indexed(0..object.mesh.index_count(), 0, 0..1);
    }
}
