//! Textured OBJ models
//!
//! Loading happens in two steps. [`ModelData`] parses the OBJ (and its MTL
//! libraries) into CPU-side meshes with no GPU involvement, which keeps it
//! testable. [`Model::upload`] then turns that into vertex/index buffers,
//! textures and material bind groups.

use std::collections::HashMap;
use std::io::Read;
use std::path::{Path, PathBuf};

use obj::{Group, IndexTuple, Obj, ObjData, ObjError, ObjMaterial};
use orbit_core::AssetError;
use orbit_math::Vec3;
use wgpu::util::DeviceExt;

use crate::pipeline::{ModelVertex, DEFAULT_SHININESS};
use crate::texture::{create_sampler, Texture};

/// Texture maps and shininess of one mesh
#[derive(Clone, Debug, PartialEq)]
pub struct MaterialData {
    pub name: String,
    /// Diffuse map, resolved against the OBJ directory
    pub diffuse_map: Option<PathBuf>,
    /// Specular map, resolved against the OBJ directory
    pub specular_map: Option<PathBuf>,
    pub shininess: f32,
}

impl Default for MaterialData {
    fn default() -> Self {
        Self {
            name: String::new(),
            diffuse_map: None,
            specular_map: None,
            shininess: DEFAULT_SHININESS,
        }
    }
}

/// Triangle mesh ready for upload
#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub name: String,
    pub vertices: Vec<ModelVertex>,
    pub indices: Vec<u32>,
    pub material: MaterialData,
}

impl MeshData {
    /// Number of triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// CPU-side model: one mesh per OBJ group
#[derive(Clone, Debug, Default)]
pub struct ModelData {
    pub meshes: Vec<MeshData>,
}

impl ModelData {
    /// Load an OBJ file together with its material libraries
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(AssetError::NotFound(path.display().to_string()));
        }

        let mut obj = Obj::load(path).map_err(|e| obj_error(e, &path.display().to_string()))?;
        if let Err(e) = obj.load_mtls() {
            // Missing materials only cost us textures
            log::warn!("Failed to load materials for {}: {:?}", path.display(), e);
        }

        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
        let model = Self::from_obj_data(&obj.data, Some(base_dir))?;
        log::info!(
            "Loaded model {}: {} meshes, {} vertices, {} triangles",
            path.display(),
            model.meshes.len(),
            model.vertex_count(),
            model.triangle_count()
        );
        Ok(model)
    }

    /// Parse OBJ text without resolving materials
    pub fn from_reader(reader: impl Read) -> Result<Self, AssetError> {
        let data = ObjData::load_buf(reader).map_err(|e| obj_error(e, "<reader>"))?;
        Self::from_obj_data(&data, None)
    }

    fn from_obj_data(data: &ObjData, base_dir: Option<&Path>) -> Result<Self, AssetError> {
        let mut meshes = Vec::new();
        for object in &data.objects {
            for group in &object.groups {
                let mut mesh = build_mesh(data, group)?;
                if mesh.indices.is_empty() {
                    continue;
                }
                mesh.name = if group.name.is_empty() || group.name == "default" || group.name == object.name {
                    object.name.clone()
                } else {
                    format!("{}/{}", object.name, group.name)
                };
                mesh.material = material_data(group.material.as_ref(), base_dir);
                meshes.push(mesh);
            }
        }

        if meshes.is_empty() {
            return Err(AssetError::Parse("model contains no faces".to_string()));
        }
        Ok(Self { meshes })
    }

    /// Total vertices across meshes
    pub fn vertex_count(&self) -> usize {
        self.meshes.iter().map(|m| m.vertices.len()).sum()
    }

    /// Total triangles across meshes
    pub fn triangle_count(&self) -> usize {
        self.meshes.iter().map(MeshData::triangle_count).sum()
    }
}

/// Read failures stay I/O errors; everything else is malformed OBJ text
fn obj_error(err: ObjError, source: &str) -> AssetError {
    match err {
        ObjError::Io(err) => err.into(),
        other => AssetError::Parse(format!("{}: {}", source, other)),
    }
}

/// Build one mesh from an OBJ group
///
/// Identical (position, uv, normal) index tuples share a vertex. Polygons are
/// fan-triangulated. Corners without a normal get the area-weighted average
/// of the faces that use them.
fn build_mesh(data: &ObjData, group: &Group) -> Result<MeshData, AssetError> {
    let mut vertices: Vec<ModelVertex> = Vec::new();
    let mut indices: Vec<u32> = Vec::new();
    let mut lookup: HashMap<(usize, Option<usize>, Option<usize>), u32> = HashMap::new();
    let mut generated: Vec<u32> = Vec::new();
    let mut accumulated: HashMap<u32, Vec3> = HashMap::new();

    for polygon in &group.polys {
        if polygon.0.len() < 3 {
            continue;
        }

        let mut corners = Vec::with_capacity(polygon.0.len());
        for &IndexTuple(p, t, n) in &polygon.0 {
            let index = match lookup.get(&(p, t, n)) {
                Some(&i) => i,
                None => {
                    let position = *data
                        .position
                        .get(p)
                        .ok_or_else(|| AssetError::Parse(format!("position index {} out of range", p)))?;
                    let tex_coords = match t {
                        Some(t) => *data
                            .texture
                            .get(t)
                            .ok_or_else(|| AssetError::Parse(format!("uv index {} out of range", t)))?,
                        None => [0.0, 0.0],
                    };
                    let normal = match n {
                        Some(n) => *data
                            .normal
                            .get(n)
                            .ok_or_else(|| AssetError::Parse(format!("normal index {} out of range", n)))?,
                        None => [0.0; 3],
                    };

                    let i = vertices.len() as u32;
                    vertices.push(ModelVertex::new(position, normal, tex_coords));
                    lookup.insert((p, t, n), i);
                    if n.is_none() {
                        generated.push(i);
                    }
                    i
                }
            };
            corners.push(index);
        }

        for k in 1..corners.len() - 1 {
            let tri = [corners[0], corners[k], corners[k + 1]];
            indices.extend_from_slice(&tri);

            let [a, b, c] = tri.map(|i| Vec3::from_array(vertices[i as usize].position));
            // Cross product length is twice the area, so this is area-weighted
            let face_normal = (b - a).cross(c - a);
            for i in tri {
                *accumulated.entry(i).or_insert(Vec3::ZERO) += face_normal;
            }
        }
    }

    for i in generated {
        let sum = accumulated.get(&i).copied().unwrap_or(Vec3::ZERO);
        vertices[i as usize].normal = sum.try_normalize().unwrap_or(Vec3::Y).to_array();
    }

    Ok(MeshData {
        name: String::new(),
        vertices,
        indices,
        material: MaterialData::default(),
    })
}

fn material_data(material: Option<&ObjMaterial>, base_dir: Option<&Path>) -> MaterialData {
    let resolve = |map: &Option<String>| -> Option<PathBuf> {
        let map = map.as_ref()?;
        Some(match base_dir {
            Some(dir) => dir.join(map),
            None => PathBuf::from(map),
        })
    };

    match material {
        Some(ObjMaterial::Mtl(mtl)) => MaterialData {
            name: mtl.name.clone(),
            diffuse_map: resolve(&mtl.map_kd),
            specular_map: resolve(&mtl.map_ks),
            shininess: DEFAULT_SHININESS,
        },
        Some(ObjMaterial::Ref(name)) => MaterialData {
            name: name.clone(),
            ..MaterialData::default()
        },
        None => MaterialData::default(),
    }
}

/// One uploaded mesh
pub struct GpuMesh {
    pub name: String,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    material: usize,
}

/// Uploaded material: the two maps bound with a sampler
pub struct GpuMaterial {
    pub name: String,
    pub shininess: f32,
    bind_group: wgpu::BindGroup,
}

/// A model on the GPU, drawable any number of times per frame
pub struct Model {
    pub meshes: Vec<GpuMesh>,
    pub materials: Vec<GpuMaterial>,
    // Kept alive alongside the bind groups that sample them
    _textures: Vec<Texture>,
}

impl Model {
    /// Create buffers, textures and material bind groups
    ///
    /// `material_layout` must be the lit pipeline's material layout
    /// (diffuse texture, specular texture, sampler). Maps that fail to load
    /// are replaced by a white 1x1 texture and logged.
    pub fn upload(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        data: &ModelData,
        material_layout: &wgpu::BindGroupLayout,
    ) -> Self {
        let sampler = create_sampler(device);
        let mut textures: Vec<Texture> = vec![Texture::solid(device, queue, [255; 4], "White Texture")];
        let mut texture_index: HashMap<(PathBuf, bool), usize> = HashMap::new();

        let mut texture_for = |path: Option<&PathBuf>, srgb: bool, textures: &mut Vec<Texture>| -> usize {
            let Some(path) = path else {
                return 0;
            };
            if let Some(&i) = texture_index.get(&(path.clone(), srgb)) {
                return i;
            }
            let i = match Texture::from_path(device, queue, path, srgb) {
                Ok(texture) => {
                    textures.push(texture);
                    textures.len() - 1
                }
                Err(e) => {
                    log::warn!("Using white fallback texture: {}", e);
                    0
                }
            };
            texture_index.insert((path.clone(), srgb), i);
            i
        };

        let mut materials = Vec::new();
        let mut material_index: HashMap<String, usize> = HashMap::new();
        let mut meshes = Vec::with_capacity(data.meshes.len());

        for mesh in &data.meshes {
            let material = match material_index.get(&mesh.material.name) {
                Some(&i) => i,
                None => {
                    let diffuse = texture_for(mesh.material.diffuse_map.as_ref(), true, &mut textures);
                    let specular = texture_for(mesh.material.specular_map.as_ref(), false, &mut textures);

                    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                        label: Some(&format!("Material {}", mesh.material.name)),
                        layout: material_layout,
                        entries: &[
                            wgpu::BindGroupEntry {
                                binding: 0,
                                resource: wgpu::BindingResource::TextureView(&textures[diffuse].view),
                            },
                            wgpu::BindGroupEntry {
                                binding: 1,
                                resource: wgpu::BindingResource::TextureView(&textures[specular].view),
                            },
                            wgpu::BindGroupEntry {
                                binding: 2,
                                resource: wgpu::BindingResource::Sampler(&sampler),
                            },
                        ],
                    });

                    materials.push(GpuMaterial {
                        name: mesh.material.name.clone(),
                        shininess: mesh.material.shininess,
                        bind_group,
                    });
                    material_index.insert(mesh.material.name.clone(), materials.len() - 1);
                    materials.len() - 1
                }
            };

            let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{} Vertex Buffer", mesh.name)),
                contents: bytemuck::cast_slice(&mesh.vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });
            let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{} Index Buffer", mesh.name)),
                contents: bytemuck::cast_slice(&mesh.indices),
                usage: wgpu::BufferUsages::INDEX,
            });

            meshes.push(GpuMesh {
                name: mesh.name.clone(),
                vertex_buffer,
                index_buffer,
                index_count: mesh.indices.len() as u32,
                material,
            });
        }

        log::info!(
            "Uploaded {} meshes, {} materials, {} textures",
            meshes.len(),
            materials.len(),
            textures.len()
        );

        Self {
            meshes,
            materials,
            _textures: textures,
        }
    }

    /// Issue indexed draws for every mesh
    ///
    /// The caller binds the pipeline plus frame (group 0) and object (group 1)
    /// bind groups; this binds each mesh's material at group 2.
    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        for mesh in &self.meshes {
            pass.set_bind_group(2, &self.materials[mesh.material].bind_group, &[]);
            pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
            pass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            pass.draw_indexed(0..mesh.index_count, 0, 0..1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIANGLE: &str = "\
v 0 0 0
v 1 0 0
v 0 1 0
vt 0 0
vt 1 0
vt 0 1
vn 0 0 1
f 1/1/1 2/2/1 3/3/1
";

    const QUAD_NO_NORMALS: &str = "\
o quad
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
f 1 2 3 4
";

    #[test]
    fn test_single_triangle() {
        let model = ModelData::from_reader(TRIANGLE.as_bytes()).unwrap();
        assert_eq!(model.meshes.len(), 1);

        let mesh = &model.meshes[0];
        assert_eq!(mesh.vertices.len(), 3);
        assert_eq!(mesh.indices, vec![0, 1, 2]);
        assert_eq!(mesh.vertices[1].tex_coords, [1.0, 0.0]);
        assert_eq!(mesh.vertices[2].normal, [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_quad_fan_triangulated() {
        let model = ModelData::from_reader(QUAD_NO_NORMALS.as_bytes()).unwrap();
        let mesh = &model.meshes[0];

        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.indices, vec![0, 1, 2, 0, 2, 3]);
        assert_eq!(model.triangle_count(), 2);
        assert_eq!(mesh.name, "quad");
    }

    #[test]
    fn test_generated_normals_face_out() {
        let model = ModelData::from_reader(QUAD_NO_NORMALS.as_bytes()).unwrap();
        for v in &model.meshes[0].vertices {
            let n = Vec3::from_array(v.normal);
            assert!((n - Vec3::Z).length() < 1e-5, "normal {:?}", n);
        }
    }

    #[test]
    fn test_missing_uvs_default_to_zero() {
        let model = ModelData::from_reader(QUAD_NO_NORMALS.as_bytes()).unwrap();
        assert!(model.meshes[0].vertices.iter().all(|v| v.tex_coords == [0.0, 0.0]));
    }

    #[test]
    fn test_shared_corners_deduplicated() {
        let src = "\
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
vn 0 0 1
f 1//1 2//1 3//1
f 1//1 3//1 4//1
";
        let model = ModelData::from_reader(src.as_bytes()).unwrap();
        let mesh = &model.meshes[0];
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.indices.len(), 6);
    }

    #[test]
    fn test_same_position_different_uv_not_merged() {
        let src = "\
v 0 0 0
v 1 0 0
v 0 1 0
vt 0 0
vt 0.5 0.5
f 1/1 2/1 3/1
f 1/2 3/1 2/1
";
        let model = ModelData::from_reader(src.as_bytes()).unwrap();
        assert_eq!(model.meshes[0].vertices.len(), 4);
    }

    #[test]
    fn test_groups_become_meshes() {
        let src = "\
o thing
v 0 0 0
v 1 0 0
v 0 1 0
v 0 0 1
g top
f 1 2 3
g side
f 1 3 4
";
        let model = ModelData::from_reader(src.as_bytes()).unwrap();
        assert_eq!(model.meshes.len(), 2);
        assert_eq!(model.vertex_count(), 6);
        assert!(model.meshes.iter().all(|m| m.material.diffuse_map.is_none()));
    }

    #[test]
    fn test_empty_model_is_error() {
        let result = ModelData::from_reader("v 0 0 0\n".as_bytes());
        assert!(matches!(result, Err(AssetError::Parse(_))));
    }

    struct BrokenReader;

    impl Read for BrokenReader {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk unplugged"))
        }
    }

    #[test]
    fn test_read_failure_is_io_error() {
        let result = ModelData::from_reader(BrokenReader);
        match result {
            Err(AssetError::Io(e)) => assert!(e.to_string().contains("disk unplugged")),
            other => panic!("Expected Io variant, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_index_is_parse_error() {
        let result = ModelData::from_reader("v 0 0 0\nf 1 2 3\n".as_bytes());
        assert!(matches!(result, Err(AssetError::Parse(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = ModelData::load("no/such/model.obj");
        assert!(matches!(result, Err(AssetError::NotFound(_))));
    }

    #[test]
    fn test_load_resolves_maps_against_obj_dir() {
        let dir = std::env::temp_dir().join("orbit_render_model_test");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join("box.mtl"),
            "newmtl skin\nmap_Kd diffuse.png\nmap_Ks specular.png\n",
        )
        .unwrap();
        std::fs::write(
            dir.join("box.obj"),
            format!("mtllib box.mtl\n{}usemtl skin\nf 1 2 3\n", "v 0 0 0\nv 1 0 0\nv 0 1 0\n"),
        )
        .unwrap();

        let model = ModelData::load(dir.join("box.obj")).unwrap();
        let material = &model.meshes[0].material;
        assert_eq!(material.name, "skin");
        assert_eq!(material.diffuse_map, Some(dir.join("diffuse.png")));
        assert_eq!(material.specular_map, Some(dir.join("specular.png")));
        assert_eq!(material.shininess, DEFAULT_SHININESS);
    }
}
