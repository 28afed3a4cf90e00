use std::collections::HashMap;
use enum_iterator::{ all, Sequence };
use lazy_static::lazy_static;
use web_sys::WebGlRenderingContext as GL;
use crate::util::message::Message;

#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub enum GLArity {
    Scalar,
    Vec2,
    Vec3,
    Vec4
}

impl GLArity {
    pub fn to_num(&self) -> usize {
        match self {
            GLArity::Scalar => 1,
            GLArity::Vec2 => 2,
            GLArity::Vec3 => 3,
            GLArity::Vec4 => 4
        }
    }
}

#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub enum GLMatrix {
    Mat2,
    Mat3,
    Mat4
}

impl GLMatrix {
    pub fn to_num(&self) -> usize {
        match self {
            GLMatrix::Mat2 => 4,
            GLMatrix::Mat3 => 9,
            GLMatrix::Mat4 => 16
        }
    }
}

/// How a value reaches the GPU for a given uniform type.
#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub enum Marshal {
    Int,
    Float,
    IntVector(GLArity),
    FloatVector(GLArity),
    Matrix(GLMatrix),
    Sampler(u32)
}

#[derive(Clone,Copy,Debug,PartialEq,Eq,Hash,Sequence)]
pub enum GlType {
    Float,
    FloatVec2,
    FloatVec3,
    FloatVec4,
    Int,
    IntVec2,
    IntVec3,
    IntVec4,
    Bool,
    BoolVec2,
    BoolVec3,
    BoolVec4,
    FloatMat2,
    FloatMat3,
    FloatMat4,
    Sampler2D,
    SamplerCube
}

lazy_static! {
    static ref CODE_TO_TYPE : HashMap<u32,GlType> = all::<GlType>().map(|t| (t.code(),t)).collect();
}

impl GlType {
    pub fn code(&self) -> u32 {
        match self {
            GlType::Float => GL::FLOAT,
            GlType::FloatVec2 => GL::FLOAT_VEC2,
            GlType::FloatVec3 => GL::FLOAT_VEC3,
            GlType::FloatVec4 => GL::FLOAT_VEC4,
            GlType::Int => GL::INT,
            GlType::IntVec2 => GL::INT_VEC2,
            GlType::IntVec3 => GL::INT_VEC3,
            GlType::IntVec4 => GL::INT_VEC4,
            GlType::Bool => GL::BOOL,
            GlType::BoolVec2 => GL::BOOL_VEC2,
            GlType::BoolVec3 => GL::BOOL_VEC3,
            GlType::BoolVec4 => GL::BOOL_VEC4,
            GlType::FloatMat2 => GL::FLOAT_MAT2,
            GlType::FloatMat3 => GL::FLOAT_MAT3,
            GlType::FloatMat4 => GL::FLOAT_MAT4,
            GlType::Sampler2D => GL::SAMPLER_2D,
            GlType::SamplerCube => GL::SAMPLER_CUBE
        }
    }

    pub fn from_code(code: u32) -> Result<GlType,Message> {
        CODE_TO_TYPE.get(&code).cloned().ok_or(Message::UnknownType(code))
    }

    pub fn marshal(&self) -> Marshal {
        match self {
            GlType::Float => Marshal::Float,
            GlType::Int => Marshal::Int,
            GlType::FloatVec2 => Marshal::FloatVector(GLArity::Vec2),
            GlType::FloatVec3 => Marshal::FloatVector(GLArity::Vec3),
            GlType::FloatVec4 => Marshal::FloatVector(GLArity::Vec4),
            GlType::Bool => Marshal::IntVector(GLArity::Scalar),
            GlType::IntVec2 | GlType::BoolVec2 => Marshal::IntVector(GLArity::Vec2),
            GlType::IntVec3 | GlType::BoolVec3 => Marshal::IntVector(GLArity::Vec3),
            GlType::IntVec4 | GlType::BoolVec4 => Marshal::IntVector(GLArity::Vec4),
            GlType::FloatMat2 => Marshal::Matrix(GLMatrix::Mat2),
            GlType::FloatMat3 => Marshal::Matrix(GLMatrix::Mat3),
            GlType::FloatMat4 => Marshal::Matrix(GLMatrix::Mat4),
            GlType::Sampler2D => Marshal::Sampler(GL::TEXTURE_2D),
            GlType::SamplerCube => Marshal::Sampler(GL::TEXTURE_CUBE_MAP)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        assert_eq!(17,CODE_TO_TYPE.len());
        for t in all::<GlType>() {
            assert_eq!(Ok(t),GlType::from_code(t.code()));
        }
    }

    #[test]
    fn test_known_codes() {
        assert_eq!(Ok(GlType::FloatVec2),GlType::from_code(0x8b50));
        assert_eq!(Ok(GlType::FloatMat4),GlType::from_code(0x8b5c));
        assert_eq!(Ok(GlType::Sampler2D),GlType::from_code(0x8b5e));
        assert_eq!(Ok(GlType::SamplerCube),GlType::from_code(0x8b60));
        assert_eq!(Ok(GlType::Int),GlType::from_code(0x1404));
        assert_eq!(Ok(GlType::Float),GlType::from_code(0x1406));
    }

    #[test]
    fn test_unknown_code() {
        /* SAMPLER_3D exists in WebGL2 but has no setter */
        assert_eq!(Err(Message::UnknownType(0x8b5f)),GlType::from_code(0x8b5f));
    }

    #[test]
    fn test_marshal() {
        assert_eq!(Marshal::IntVector(GLArity::Scalar),GlType::Bool.marshal());
        assert_eq!(Marshal::IntVector(GLArity::Vec3),GlType::BoolVec3.marshal());
        assert_eq!(Marshal::Sampler(GL::TEXTURE_CUBE_MAP),GlType::SamplerCube.marshal());
        assert_eq!(16,match GlType::FloatMat4.marshal() { Marshal::Matrix(m) => m.to_num(), _ => 0 });
    }
}
