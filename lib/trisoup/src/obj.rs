//! Utilities for reading Wavefront OBJ documents as [TriangleSoups](TriangleSoup).
//!
//! # Notes
//!
//! * Polygons are fan-triangulated; the winding of each triangle follows the winding of its face.
//! * Point and line elements are ignored.
//! * Every object and group in a document is concatenated, in document order, into one soup.
//! * Material libraries aren't loaded; `mtllib` and `usemtl` statements have no effect.
//!
//! # See Also
//!
//! * [OBJ format reference](https://paulbourke.net/dataformats/obj/)

use std::{
    io::{self, BufRead, Read},
    path::Path,
};

use nalgebra::{Point2, Point3, Vector3};
use vertex_indexer_common::TriangleSoup;

use crate::{AttributeUsage, Error, ModelFile};

/// Options for reading OBJ documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Store `1 - v` instead of `v` for each texture coordinate, for images whose first row is the
    /// top row.
    pub flip_v: bool,
}

impl LoadOptions {
    fn tobj(&self) -> tobj::LoadOptions {
        tobj::LoadOptions {
            single_index: false,
            triangulate: true,
            ignore_points: true,
            ignore_lines: true,
            ..Default::default()
        }
    }
}

/// Read the OBJ file at `path`.
#[tracing::instrument(skip_all, fields(path = ?path.as_ref()))]
pub fn load(path: impl AsRef<Path>, options: &LoadOptions) -> Result<TriangleSoup, Error> {
    let file = ModelFile::open(path.as_ref())?;
    let doc = std::str::from_utf8(&file)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    parse(doc, options)
}

/// Read an OBJ document from `reader`.
pub fn read(mut reader: impl BufRead, options: &LoadOptions) -> Result<TriangleSoup, Error> {
    let mut doc = String::new();
    reader.read_to_string(&mut doc)?;
    parse(&doc, options)
}

fn parse(doc: &str, options: &LoadOptions) -> Result<TriangleSoup, Error> {
    // tobj fills an absent `vt`/`vn` reference with a neighbouring one, so coverage has to be
    // checked on the text itself
    check_face_attributes(doc)?;
    let (models, _) = tobj::load_obj_buf(&mut doc.as_bytes(), &options.tobj(), |_| {
        Err(tobj::LoadError::OpenFileFailed)
    })?;
    tracing::debug!(models = models.len(), "parsed OBJ document");
    soup_from_models(&models, options)
}

/// Ensure every vertex reference of every face names a texture coordinate and a normal.
fn check_face_attributes(doc: &str) -> Result<(), Error> {
    let mut model = "unnamed_object";
    for line in doc.lines() {
        let line = line.split('#').next().unwrap_or_default();
        let mut words = line.split_whitespace();
        match words.next() {
            Some("o" | "g") => {
                if let Some(name) = words.next() {
                    model = name;
                }
            }
            Some("f") => {
                for reference in words {
                    let mut parts = reference.split('/').skip(1);
                    let missing = if parts.next().map_or(true, str::is_empty) {
                        Some(AttributeUsage::Texcoord)
                    } else if parts.next().map_or(true, str::is_empty) {
                        Some(AttributeUsage::Normal)
                    } else {
                        None
                    };
                    if let Some(attribute) = missing {
                        return Err(Error::MissingAttribute {
                            model: model.to_owned(),
                            attribute,
                        });
                    }
                }
            }
            _ => {}
        }
    }
    Ok(())
}

/// Concatenate the triangles of every model in `models`.
pub fn soup_from_models(
    models: &[tobj::Model],
    options: &LoadOptions,
) -> Result<TriangleSoup, Error> {
    let corners = models.iter().map(|m| m.mesh.indices.len()).sum();
    let mut soup = TriangleSoup::with_capacity(corners);
    for model in models {
        append_model(&mut soup, model, options)?;
    }
    Ok(soup)
}

fn append_model(
    soup: &mut TriangleSoup,
    model: &tobj::Model,
    options: &LoadOptions,
) -> Result<(), Error> {
    let mesh = &model.mesh;
    tracing::trace!(
        name = model.name.as_str(),
        positions = mesh.positions.len() / 3,
        texcoords = mesh.texcoords.len() / 2,
        normals = mesh.normals.len() / 3,
        corners = mesh.indices.len(),
        "reading OBJ model"
    );

    let corners = mesh.indices.len();
    let missing = |attribute| Error::MissingAttribute {
        model: model.name.clone(),
        attribute,
    };
    if mesh.texcoord_indices.len() != corners {
        return Err(missing(AttributeUsage::Texcoord));
    }
    if mesh.normal_indices.len() != corners {
        return Err(missing(AttributeUsage::Normal));
    }

    let mut part = TriangleSoup::with_capacity(corners);
    for corner in 0..corners {
        let position = Point3::from(fetch::<3>(
            model,
            AttributeUsage::Position,
            &mesh.positions,
            mesh.indices[corner],
        )?);
        let [u, v] = fetch::<2>(
            model,
            AttributeUsage::Texcoord,
            &mesh.texcoords,
            mesh.texcoord_indices[corner],
        )?;
        let texcoord = Point2::new(u, if options.flip_v { 1.0 - v } else { v });
        let normal = Vector3::from(fetch::<3>(
            model,
            AttributeUsage::Normal,
            &mesh.normals,
            mesh.normal_indices[corner],
        )?);
        part.push_corner(position, texcoord, normal);
    }
    soup.append(&mut part);
    Ok(())
}

/// Element `index` of a flat array of `N`-component attributes.
fn fetch<const N: usize>(
    model: &tobj::Model,
    attribute: AttributeUsage,
    data: &[f32],
    index: u32,
) -> Result<[f32; N], Error> {
    let start = index as usize * N;
    data.get(start..start + N)
        .and_then(|slice| <[f32; N]>::try_from(slice).ok())
        .ok_or_else(|| Error::AttributeOutOfRange {
            model: model.name.clone(),
            attribute,
            index,
            len: data.len() / N,
        })
}
