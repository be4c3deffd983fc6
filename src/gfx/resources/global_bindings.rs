//! Global uniform bindings for camera and lighting data
//!
//! Per-frame state shared by every object in the scene lives in bind group 0:
//! binding 0 holds the active camera, binding 1 the lights.

use crate::{
    gfx::{camera::camera_utils::CameraUniform, lighting::LightingUniform},
    wgpu_utils::{binding_types, uniform_buffer::UniformBuffer},
};

pub type CameraUBO = UniformBuffer<CameraUniform>;
pub type LightingUBO = UniformBuffer<LightingUniform>;

/// Bind group layout, buffers and bind group for the frame-global uniforms
pub struct GlobalBindings {
    layout: wgpu::BindGroupLayout,
    bind_group: wgpu::BindGroup,
    camera: CameraUBO,
    lighting: LightingUBO,
}

impl GlobalBindings {
    pub fn new(device: &wgpu::Device) -> Self {
        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Globals Bind Group Layout"),
            entries: &[binding_types::uniform_entry(0), binding_types::uniform_entry(1)],
        });

        let camera = CameraUBO::new_with_data(device, &CameraUniform::default());
        let lighting = LightingUBO::new(device);

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Global Bind Group"),
            layout: &layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: camera.binding_resource(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: lighting.binding_resource(),
                },
            ],
        });

        GlobalBindings {
            layout,
            bind_group,
            camera,
            lighting,
        }
    }

    /// Writes this frame's camera and lighting state
    pub fn update(&mut self, queue: &wgpu::Queue, camera: CameraUniform, lighting: LightingUniform) {
        self.camera.update_content(queue, camera);
        self.lighting.update_content(queue, lighting);
    }

    pub fn layout(&self) -> &wgpu::BindGroupLayout {
        &self.layout
    }

    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }
}

/// Layout for the per-object uniform in bind group 1
pub fn object_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("Object Bind Group Layout"),
        entries: &[binding_types::uniform_entry(0)],
    })
}
