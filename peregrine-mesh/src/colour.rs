use std::fmt;
use css_color_parser::Color as CssColor;
use rand::Rng;
use rand::rngs::ThreadRng;
use crate::mesh::MeshError;

/// Vertex colour as uploaded: rgb in 0..255, alpha in 0..1.
#[derive(Clone,Copy,Debug,PartialEq)]
pub struct Colour {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32
}

impl Colour {
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Colour { Colour { r, g, b, a } }

    pub fn red() -> Colour { Colour::new(255.,0.,0.,1.) }

    pub fn from_css(value: &str) -> Result<Colour,MeshError> {
        let css = value.parse::<CssColor>().map_err(|e| MeshError::BadColour(format!("'{}': {:?}",value,e)))?;
        Ok(Colour::new(css.r as f32,css.g as f32,css.b as f32,css.a))
    }

    pub(crate) fn push_to(&self, out: &mut Vec<f32>) {
        out.extend_from_slice(&[self.r,self.g,self.b,self.a]);
    }
}

impl Default for Colour {
    fn default() -> Colour { Colour::red() }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,"rgba({},{},{},{})",self.r,self.g,self.b,self.a)
    }
}

/// Where generators get vertex colours from. Called once per colour the shape needs.
pub trait ColourSource {
    fn next_colour(&mut self) -> Colour;
}

pub struct FixedColour(pub Colour);

impl ColourSource for FixedColour {
    fn next_colour(&mut self) -> Colour { self.0 }
}

pub struct RandomColour<R: Rng>(R);

impl<R: Rng> RandomColour<R> {
    pub fn new(rng: R) -> RandomColour<R> { RandomColour(rng) }
}

impl RandomColour<ThreadRng> {
    pub fn thread() -> RandomColour<ThreadRng> { RandomColour(rand::rng()) }
}

impl<R: Rng> ColourSource for RandomColour<R> {
    fn next_colour(&mut self) -> Colour {
        let rng = &mut self.0;
        Colour::new(rng.random::<f32>()*255.,rng.random::<f32>()*255.,rng.random::<f32>()*255.,rng.random::<f32>())
    }
}
