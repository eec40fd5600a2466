use ice_core::{box_mesh, plane, uv_sphere, Mesh, MeshKind};
use ice_core::{CUBE_GLOW_SIZE, CUBE_SIZE, DROP_HEIGHT_SEGMENTS, DROP_RADIUS, DROP_WIDTH_SEGMENTS};
use wgpu::util::DeviceExt;

pub(crate) struct GpuMesh {
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) index_buffer: wgpu::Buffer,
    pub(crate) index_count: u32,
}

impl GpuMesh {
    fn upload(device: &wgpu::Device, label: &str, mesh: &Mesh) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        // index buffers must be 4-byte sized; pad odd u16 counts
        let mut indices = mesh.indices.clone();
        if indices.len() % 2 == 1 {
            indices.push(0);
        }
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            vertex_buffer,
            index_buffer,
            index_count: mesh.index_count(),
        }
    }
}

/// The fixed set of meshes the scene draws.
pub(crate) struct MeshSet {
    cube: GpuMesh,
    glow: GpuMesh,
    drop: GpuMesh,
    shadow: GpuMesh,
}

impl MeshSet {
    pub(crate) fn new(device: &wgpu::Device) -> Self {
        Self {
            cube: GpuMesh::upload(device, "cube_mesh", &box_mesh(CUBE_SIZE, CUBE_SIZE, CUBE_SIZE)),
            glow: GpuMesh::upload(
                device,
                "glow_mesh",
                &box_mesh(CUBE_GLOW_SIZE, CUBE_GLOW_SIZE, CUBE_GLOW_SIZE),
            ),
            drop: GpuMesh::upload(
                device,
                "drop_mesh",
                &uv_sphere(DROP_RADIUS, DROP_WIDTH_SEGMENTS, DROP_HEIGHT_SEGMENTS),
            ),
            shadow: GpuMesh::upload(device, "shadow_mesh", &plane(1.0)),
        }
    }

    pub(crate) fn get(&self, kind: MeshKind) -> &GpuMesh {
        match kind {
            MeshKind::Cube => &self.cube,
            MeshKind::Glow => &self.glow,
            MeshKind::Drop => &self.drop,
            MeshKind::ShadowPlane => &self.shadow,
        }
    }
}
