use std::fs::File;
use std::io::{BufRead, BufReader};

use custom_error::custom_error;

use crate::geometry::vector3::Vector3;
use crate::io::traits::{MeshSettings, ModelLoader, SoftrayIOError};
use crate::objects::triangle::Triangle;

custom_error! {pub ObjFileError
    ReadError {description: String} = "Failed to read line: {description}",
    ParseError {description: String} = "Failed to parse line: {description}",
    VertexError {description: String} = "Failed to parse vertex: {description}",
}

pub struct ObjFileLoader {
}

impl ObjFileLoader {

    pub fn new() -> Self {
        Self {}
    }

    fn parse<R: BufRead>(reader: R, settings: &MeshSettings) -> Result<Vec<Triangle>, ObjFileError> {
        let mut vertices: Vec<Vector3> = Vec::new();
        let mut triangles: Vec<Triangle> = Vec::new();

        for line in reader.lines() {
            let line_data = line.map_err(|err| ObjFileError::ReadError {
                description: format!("{}", err),
            })?;
            let line_data = line_data.trim();

            if line_data.is_empty() || line_data.starts_with('#') {
                continue;
            }

            let tokens: Vec<&str> = line_data.split_whitespace().collect();
            match tokens[0] {
                "v" => vertices.push(Self::parse_vertex(&tokens, settings)?),
                "f" => if let Some(triangle) = Self::parse_face(&tokens, &vertices, settings) {
                    triangles.push(triangle);
                },
                // Normals, texture coordinates, groups and materials are
                // not part of the shading model, skip them.
                "vn" | "vt" | "g" | "o" | "s" | "usemtl" | "mtllib" => {
                    log::trace!("ignoring obj record: {}", line_data);
                },
                _ => return Err(ObjFileError::ParseError {
                    description: line_data.to_string(),
                }),
            }
        }

        Ok(triangles)
    }

    fn parse_vertex(tokens: &[&str], settings: &MeshSettings) -> Result<Vector3, ObjFileError> {
        if tokens.len() < 4 {
            return Err(ObjFileError::VertexError {
                description: format!("expected three coordinates: {}", tokens.join(" ")),
            });
        }

        let mut coordinates = [0.0; 3];
        for (i, token) in tokens[1..4].iter().enumerate() {
            coordinates[i] = token.parse::<f64>().map_err(|err| ObjFileError::VertexError {
                description: format!("unable to parse coordinate {}: {:?}", token, err),
            })?;
        }

        let vertex = Vector3::new(coordinates[0], coordinates[1], coordinates[2]);
        Ok(vertex * settings.scale() + *settings.offset())
    }

    /// Faces are triangles of 1-based vertex indices; tokens may carry
    /// `/texture/normal` suffixes which are dropped. A malformed or
    /// out-of-range face is skipped so that a damaged file still yields
    /// a partial mesh.
    fn parse_face(tokens: &[&str], vertices: &[Vector3], settings: &MeshSettings) -> Option<Triangle> {
        if tokens.len() < 4 {
            log::warn!("skipping face with less than three vertices: {}", tokens.join(" "));
            return None;
        }

        let mut face = [Vector3::zero(); 3];
        for (i, token) in tokens[1..4].iter().enumerate() {
            let index = match token.split('/').next().unwrap_or("").parse::<usize>() {
                Ok(v) => v,
                Err(err) => {
                    log::warn!("skipping face with bad vertex index {}: {:?}", token, err);
                    return None;
                },
            };

            if index == 0 || index > vertices.len() {
                log::warn!("skipping face with out of range vertex index: {}", index);
                return None;
            }

            face[i] = vertices[index - 1];
        }

        Some(Triangle::new(face[0], face[1], face[2], *settings.color(), settings.double_sided()))
    }
}

impl ModelLoader for ObjFileLoader {

    fn load(&self, path: &str, settings: &MeshSettings) -> Result<Vec<Triangle>, SoftrayIOError> {
        let file = File::open(path).map_err(|err| SoftrayIOError::FailedToLoad {
            description: format!("failed to open {}: {}", path, err),
        })?;

        let triangles = Self::parse(BufReader::new(file), settings).map_err(|err| SoftrayIOError::FailedToLoad {
            description: format!("obj file error: {}", err),
        })?;

        log::info!("loaded {} triangles from {}", triangles.len(), path);
        Ok(triangles)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    const SIMPLE_OBJ: &[u8] = b"# a single face\nv 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";

    #[test]
    fn test_single_face() {
        let triangles = ObjFileLoader::parse(SIMPLE_OBJ, &MeshSettings::default()).unwrap();

        assert_eq!(triangles.len(), 1);
        assert_eq!(*triangles[0].vertices()[1], Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(*triangles[0].color(), Vector3::one());
        assert!(!triangles[0].double_sided());
    }

    #[test]
    fn test_scale_offset_color_and_sidedness_are_applied() {
        let settings = MeshSettings::default()
            .with_color(Vector3::new(0.8, 0.5, 0.2))
            .with_scale(2.0)
            .with_offset(Vector3::new(0.0, 0.0, -2.0))
            .with_double_sided(true);

        let triangles = ObjFileLoader::parse(SIMPLE_OBJ, &settings).unwrap();

        assert_eq!(*triangles[0].vertices()[1], Vector3::new(2.0, 0.0, -2.0));
        assert_eq!(*triangles[0].color(), Vector3::new(0.8, 0.5, 0.2));
        assert!(triangles[0].double_sided());
    }

    #[test]
    fn test_face_with_slash_suffixes() {
        let data: &[u8] = b"v 0 0 0\nv 1 0 0\nv 0 1 0\nvn 0 0 1\nf 1/1/1 2/2/1 3/3/1\n";
        let triangles = ObjFileLoader::parse(data, &MeshSettings::default()).unwrap();

        assert_eq!(triangles.len(), 1);
        assert_eq!(*triangles[0].vertices()[2], Vector3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_malformed_and_out_of_range_faces_are_skipped() {
        let data: &[u8] = b"v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 nope\nf 1 2 7\nf 1 2 3\n";
        let triangles = ObjFileLoader::parse(data, &MeshSettings::default()).unwrap();

        assert_eq!(triangles.len(), 1);
    }

    #[test]
    fn test_bad_vertex_is_an_error() {
        let data: &[u8] = b"v 2.292fw449 -0.871852 -0.882400\n";
        assert!(ObjFileLoader::parse(data, &MeshSettings::default()).is_err());
    }

    #[test]
    fn test_unknown_keyword_is_an_error() {
        let data: &[u8] = b"frobnicate 1 2 3\n";
        assert!(ObjFileLoader::parse(data, &MeshSettings::default()).is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = ObjFileLoader::new().load("./assets/does-not-exist.obj", &MeshSettings::default());
        assert!(result.is_err());
    }
}
