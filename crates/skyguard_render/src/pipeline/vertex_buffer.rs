//! Growable per-frame vertex buffer

use std::marker::PhantomData;

use bytemuck::Pod;

const MIN_CAPACITY: usize = 256;

/// Vertex buffer rewritten every frame, reallocated only when it must grow
pub struct DynamicVertexBuffer<T> {
    label: &'static str,
    buffer: Option<wgpu::Buffer>,
    capacity: usize,
    len: u32,
    _vertex: PhantomData<T>,
}

impl<T: Pod> DynamicVertexBuffer<T> {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            buffer: None,
            capacity: 0,
            len: 0,
            _vertex: PhantomData,
        }
    }

    /// Copy `vertices` to the GPU
    pub fn upload(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, vertices: &[T]) {
        self.len = vertices.len() as u32;
        if vertices.is_empty() {
            return;
        }

        if self.buffer.is_none() || vertices.len() > self.capacity {
            self.capacity = grown_capacity(self.capacity, vertices.len());
            self.buffer = Some(device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(self.label),
                size: (self.capacity * std::mem::size_of::<T>()) as wgpu::BufferAddress,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            log::debug!("{}: reallocated for {} vertices", self.label, self.capacity);
        }

        if let Some(buffer) = &self.buffer {
            queue.write_buffer(buffer, 0, bytemuck::cast_slice(vertices));
        }
    }

    /// The buffer, if the last upload was non-empty
    pub fn buffer(&self) -> Option<&wgpu::Buffer> {
        if self.len == 0 {
            None
        } else {
            self.buffer.as_ref()
        }
    }

    /// Vertices in the last upload
    pub fn len(&self) -> u32 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Smallest power-of-two capacity (at least [`MIN_CAPACITY`]) holding `needed`
fn grown_capacity(current: usize, needed: usize) -> usize {
    if needed <= current {
        return current;
    }
    needed.max(MIN_CAPACITY).next_power_of_two()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grown_capacity() {
        assert_eq!(grown_capacity(0, 1), 256);
        assert_eq!(grown_capacity(0, 300), 512);
        assert_eq!(grown_capacity(512, 300), 512);
        assert_eq!(grown_capacity(512, 513), 1024);
    }
}
