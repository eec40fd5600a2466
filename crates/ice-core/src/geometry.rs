use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
}

impl Mesh {
    #[inline]
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}

/// Axis-aligned box centred on the origin with per-face normals
/// (four vertices per face so edges stay sharp).
pub fn box_mesh(width: f32, height: f32, depth: f32) -> Mesh {
    let (hx, hy, hz) = (width * 0.5, height * 0.5, depth * 0.5);
    // (normal, u axis, v axis); corners are normal*h ± u ± v, wound CCW from outside
    let faces: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
        ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
        ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
        ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
        ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
        ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ];
    let half = [hx, hy, hz];
    let mut mesh = Mesh::default();
    for (n, u, v) in faces {
        let base = mesh.vertices.len() as u16;
        for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            let mut p = [0.0f32; 3];
            for axis in 0..3 {
                p[axis] = (n[axis] + su * u[axis] + sv * v[axis]) * half[axis];
            }
            mesh.vertices.push(Vertex {
                position: p,
                normal: n,
            });
        }
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    mesh
}

/// Segment cap per axis so every vertex stays addressable by a `u16` index.
pub const MAX_SPHERE_SEGMENTS: u32 = 255;

/// Latitude/longitude sphere with `(width_segments + 1) * (height_segments + 1)`
/// vertices, seams duplicated. Segment counts are clamped to
/// `[3, MAX_SPHERE_SEGMENTS]` and `[2, MAX_SPHERE_SEGMENTS]`.
pub fn uv_sphere(radius: f32, width_segments: u32, height_segments: u32) -> Mesh {
    let ws = width_segments.clamp(3, MAX_SPHERE_SEGMENTS);
    let hs = height_segments.clamp(2, MAX_SPHERE_SEGMENTS);
    let mut mesh = Mesh::default();
    for iy in 0..=hs {
        let v = iy as f32 / hs as f32;
        let theta = v * PI;
        for ix in 0..=ws {
            let u = ix as f32 / ws as f32;
            let phi = u * TAU;
            let n = [
                -phi.cos() * theta.sin(),
                theta.cos(),
                phi.sin() * theta.sin(),
            ];
            mesh.vertices.push(Vertex {
                position: [n[0] * radius, n[1] * radius, n[2] * radius],
                normal: n,
            });
        }
    }
    debug_assert!(mesh.vertices.len() <= u16::MAX as usize + 1);
    let row = ws + 1;
    for iy in 0..hs {
        for ix in 0..ws {
            let a = (iy * row + ix + 1) as u16;
            let b = (iy * row + ix) as u16;
            let c = ((iy + 1) * row + ix) as u16;
            let d = ((iy + 1) * row + ix + 1) as u16;
            if iy != 0 {
                mesh.indices.extend_from_slice(&[a, b, d]);
            }
            if iy != hs - 1 {
                mesh.indices.extend_from_slice(&[b, c, d]);
            }
        }
    }
    mesh
}

/// Horizontal square of side `size` centred on the origin, facing +Y.
pub fn plane(size: f32) -> Mesh {
    let h = size * 0.5;
    let n = [0.0, 1.0, 0.0];
    let corner = |x: f32, z: f32| Vertex {
        position: [x, 0.0, z],
        normal: n,
    };
    Mesh {
        vertices: vec![corner(-h, h), corner(h, h), corner(h, -h), corner(-h, -h)],
        indices: vec![0, 1, 2, 0, 2, 3],
    }
}
