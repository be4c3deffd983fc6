use std::marker::PhantomData;

use wgpu::util::DeviceExt;

/// Typed wrapper around a uniform buffer holding a single `Content` value
///
/// Remembers the last bytes written so unchanged frames cost no upload.
pub struct UniformBuffer<Content> {
    buffer: wgpu::Buffer,
    content_type: PhantomData<Content>,
    last_written: Vec<u8>,
}

impl<Content: bytemuck::Pod> UniformBuffer<Content> {
    fn label() -> String {
        let type_name = std::any::type_name::<Content>();
        let short = type_name.rsplit("::").next().unwrap_or(type_name);
        format!("{short} Uniform Buffer")
    }

    /// Zero-filled buffer; the first [`update_content`](Self::update_content) always uploads
    pub fn new(device: &wgpu::Device) -> Self {
        let mut buffer = Self::new_with_data(device, &Content::zeroed());
        buffer.last_written.clear();
        buffer
    }

    pub fn new_with_data(device: &wgpu::Device, initial_content: &Content) -> Self {
        let bytes = bytemuck::bytes_of(initial_content);
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&Self::label()),
            contents: bytes,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        UniformBuffer {
            buffer,
            content_type: PhantomData,
            last_written: bytes.to_vec(),
        }
    }

    /// Writes `content` unless it matches what the buffer already holds
    pub fn update_content(&mut self, queue: &wgpu::Queue, content: Content) {
        let bytes = bytemuck::bytes_of(&content);
        if self.last_written == bytes {
            return;
        }
        queue.write_buffer(&self.buffer, 0, bytes);
        self.last_written = bytes.to_vec();
    }

    pub fn binding_resource(&self) -> wgpu::BindingResource<'_> {
        self.buffer.as_entire_binding()
    }
}
