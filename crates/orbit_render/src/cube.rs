//! Unit cube used as the light marker

use wgpu::util::DeviceExt;

use crate::pipeline::CubeVertex;

/// Vertices in the cube (6 faces, 2 triangles each)
pub const CUBE_VERTEX_COUNT: u32 = 36;

/// Counter-clockwise triangles of a cube spanning [-0.5, 0.5] on every axis
pub fn cube_vertices() -> Vec<CubeVertex> {
    const FACES: [[[f32; 3]; 4]; 6] = [
        // -Z
        [[0.5, -0.5, -0.5], [-0.5, -0.5, -0.5], [-0.5, 0.5, -0.5], [0.5, 0.5, -0.5]],
        // +Z
        [[-0.5, -0.5, 0.5], [0.5, -0.5, 0.5], [0.5, 0.5, 0.5], [-0.5, 0.5, 0.5]],
        // -X
        [[-0.5, -0.5, -0.5], [-0.5, -0.5, 0.5], [-0.5, 0.5, 0.5], [-0.5, 0.5, -0.5]],
        // +X
        [[0.5, -0.5, 0.5], [0.5, -0.5, -0.5], [0.5, 0.5, -0.5], [0.5, 0.5, 0.5]],
        // -Y
        [[-0.5, -0.5, -0.5], [0.5, -0.5, -0.5], [0.5, -0.5, 0.5], [-0.5, -0.5, 0.5]],
        // +Y
        [[-0.5, 0.5, 0.5], [0.5, 0.5, 0.5], [0.5, 0.5, -0.5], [-0.5, 0.5, -0.5]],
    ];

    FACES
        .iter()
        .flat_map(|[a, b, c, d]| [a, b, c, a, c, d])
        .map(|&position| CubeVertex { position })
        .collect()
}

/// Upload the cube as a vertex buffer
pub fn create_cube_buffer(device: &wgpu::Device) -> wgpu::Buffer {
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("Light Cube Vertex Buffer"),
        contents: bytemuck::cast_slice(&cube_vertices()),
        usage: wgpu::BufferUsages::VERTEX,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbit_math::Vec3;

    #[test]
    fn test_vertex_count() {
        assert_eq!(cube_vertices().len(), CUBE_VERTEX_COUNT as usize);
    }

    #[test]
    fn test_bounds() {
        for v in cube_vertices() {
            for c in v.position {
                assert_eq!(c.abs(), 0.5);
            }
        }
    }

    #[test]
    fn test_triangles_wind_outward() {
        let vertices = cube_vertices();
        for tri in vertices.chunks(3) {
            let [a, b, c] = [0, 1, 2].map(|i| Vec3::from_array(tri[i].position));
            let normal = (b - a).cross(c - a);
            let centroid = (a + b + c) / 3.0;
            assert!(normal.dot(centroid) > 0.0, "inward triangle {:?}", tri);
        }
    }
}
