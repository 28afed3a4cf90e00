mod colour;
mod mesh;

pub use crate::colour::{ Colour, ColourSource, FixedColour, RandomColour };
pub use crate::mesh::{ circle, create_circle, create_circle_random, ring, create_ring, MeshBuffer, MeshError, VERTEX_SIZE };
