use std::f64::consts::PI;
use std::fmt;
use crate::colour::{ Colour, ColourSource, FixedColour, RandomColour };

/* x, y, r, g, b, a */
pub const VERTEX_SIZE : usize = 6;

#[derive(Clone,Debug,PartialEq)]
pub enum MeshError {
    ZeroGranularity,
    IndexOverflow(u32),
    BadColour(String)
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeshError::ZeroGranularity => write!(f,"granularity must be at least 1"),
            MeshError::IndexOverflow(v) => write!(f,"index {} does not fit in 16 bits",v),
            MeshError::BadColour(s) => write!(f,"bad colour: {}",s)
        }
    }
}

impl std::error::Error for MeshError {}

/// Interleaved vertex data ready for upload. Fans have no indices, rings do.
#[derive(Clone,Debug,PartialEq)]
pub struct MeshBuffer {
    pub positions: Vec<f32>,
    pub indices: Option<Vec<u32>>
}

impl MeshBuffer {
    pub fn vertex_count(&self) -> usize { self.positions.len() / VERTEX_SIZE }

    pub fn vertex(&self, index: usize) -> Option<&[f32]> {
        self.positions.get(index*VERTEX_SIZE..(index+1)*VERTEX_SIZE)
    }

    pub fn position(&self, index: usize) -> Option<(f32,f32)> {
        self.vertex(index).map(|v| (v[0],v[1]))
    }

    /* WebGL1 element arrays without OES_element_index_uint */
    pub fn indices_u16(&self) -> Result<Option<Vec<u16>>,MeshError> {
        match &self.indices {
            None => Ok(None),
            Some(indices) => {
                let mut out = Vec::with_capacity(indices.len());
                for index in indices {
                    if *index > u16::MAX as u32 { return Err(MeshError::IndexOverflow(*index)); }
                    out.push(*index as u16);
                }
                Ok(Some(out))
            }
        }
    }
}

fn point(out: &mut Vec<f32>, x: f32, y: f32, radius: f32, angle: f64, colour: &Colour) {
    out.push(x + radius * angle.sin() as f32);
    out.push(y + radius * angle.cos() as f32);
    colour.push_to(out);
}

fn angle(i: u32, granularity: u32) -> f64 {
    (i as f64) * PI * 2. / (granularity as f64)
}

/// Triangle fan: the centre, then `granularity+1` perimeter points with the last on top of
/// the first. Every vertex takes its own colour from `source`, the centre first.
pub fn circle<S: ColourSource + ?Sized>(x: f32, y: f32, radius: f32, granularity: u32, source: &mut S) -> Result<MeshBuffer,MeshError> {
    if granularity == 0 { return Err(MeshError::ZeroGranularity); }
    let mut positions = Vec::with_capacity((granularity as usize+2)*VERTEX_SIZE);
    positions.extend_from_slice(&[x,y]);
    source.next_colour().push_to(&mut positions);
    for i in 0..=granularity {
        point(&mut positions,x,y,radius,angle(i,granularity),&source.next_colour());
    }
    Ok(MeshBuffer { positions, indices: None })
}

pub fn create_circle(x: f32, y: f32, radius: f32, granularity: u32, colour: Option<Colour>) -> Result<MeshBuffer,MeshError> {
    circle(x,y,radius,granularity,&mut FixedColour(colour.unwrap_or_default()))
}

pub fn create_circle_random(x: f32, y: f32, radius: f32, granularity: u32) -> Result<MeshBuffer,MeshError> {
    circle(x,y,radius,granularity,&mut RandomColour::thread())
}

fn ring_indices(granularity: u32) -> Vec<u32> {
    let mut indices = Vec::with_capacity(granularity as usize*6);
    for i in 0..granularity {
        let (p0,p1) = (i*2,i*2+1);
        /* the last segment stitches back to the first pair */
        let (p2,p3) = if i == granularity-1 { (1,0) } else { ((i+1)*2+1,(i+1)*2) };
        indices.extend_from_slice(&[p0,p1,p2,p2,p3,p0]);
    }
    indices
}

/// Annulus as inner/outer vertex pairs, one pair per angle step. A pair shares a colour,
/// and a new colour is drawn on every even step.
pub fn ring<S: ColourSource + ?Sized>(x: f32, y: f32, inner: f32, outer: f32, granularity: u32, source: &mut S) -> Result<MeshBuffer,MeshError> {
    if granularity == 0 { return Err(MeshError::ZeroGranularity); }
    let mut positions = Vec::with_capacity((granularity as usize+1)*2*VERTEX_SIZE);
    let mut colour = source.next_colour();
    for i in 0..=granularity {
        if i > 0 && i % 2 == 0 {
            colour = source.next_colour();
        }
        let angle = angle(i,granularity);
        point(&mut positions,x,y,inner,angle,&colour);
        point(&mut positions,x,y,outer,angle,&colour);
    }
    Ok(MeshBuffer { positions, indices: Some(ring_indices(granularity)) })
}

pub fn create_ring(x: f32, y: f32, inner: f32, outer: f32, granularity: u32) -> Result<MeshBuffer,MeshError> {
    ring(x,y,inner,outer,granularity,&mut RandomColour::thread())
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    struct CountingColour(u32);

    impl ColourSource for CountingColour {
        fn next_colour(&mut self) -> Colour {
            self.0 += 1;
            Colour::new(self.0 as f32,0.,0.,1.)
        }
    }

    fn close(a: (f32,f32), b: (f32,f32)) -> bool {
        (a.0-b.0).abs() < 1e-5 && (a.1-b.1).abs() < 1e-5
    }

    #[test]
    fn test_circle_closes_fan() {
        let mesh = create_circle(0.,0.,1.,4,None).ok().unwrap();
        assert_eq!(6,mesh.vertex_count());
        assert_eq!(6*VERTEX_SIZE,mesh.positions.len());
        assert_eq!(Some((0.,0.)),mesh.position(0));
        assert!(close(mesh.position(1).unwrap(),mesh.position(5).unwrap()));
        assert!(close((0.,1.),mesh.position(1).unwrap()));
        assert!(close((1.,0.),mesh.position(2).unwrap()));
        assert_eq!(None,mesh.indices);
    }

    #[test]
    fn test_circle_colour() {
        let mesh = create_circle(0.,0.,1.,4,None).ok().unwrap();
        for i in 0..mesh.vertex_count() {
            assert_eq!(&[255.,0.,0.,1.],&mesh.vertex(i).unwrap()[2..]);
        }
        let blue = Colour::new(0.,0.,255.,0.5);
        let mesh = create_circle(2.,3.,1.,8,Some(blue)).ok().unwrap();
        assert_eq!(&[2.,3.,0.,0.,255.,0.5],mesh.vertex(0).unwrap());
    }

    #[test]
    fn test_random_circle_colour_per_vertex() {
        let mut source = CountingColour(0);
        let mesh = circle(0.,0.,1.,4,&mut source).ok().unwrap();
        assert_eq!(6,source.0);
        let reds = (0..6).map(|i| mesh.vertex(i).unwrap()[2]).collect::<Vec<_>>();
        assert_eq!(vec![1.,2.,3.,4.,5.,6.],reds);
        let random = create_circle_random(0.,0.,1.,4).ok().unwrap();
        assert_eq!(6,random.vertex_count());
    }

    #[test]
    fn test_ring_counts() {
        let mesh = create_ring(0.,0.,1.,2.,8).ok().unwrap();
        assert_eq!(18,mesh.vertex_count());
        let indices = mesh.indices.clone().unwrap();
        assert_eq!(48,indices.len());
        assert!(indices.iter().all(|i| (*i as usize) < mesh.vertex_count()));
    }

    #[test]
    fn test_ring_wraps_last_segment() {
        let mesh = ring(0.,0.,1.,2.,8,&mut CountingColour(0)).ok().unwrap();
        let indices = mesh.indices.unwrap();
        assert_eq!(&[14,15,1,1,0,14],&indices[42..]);
        assert_eq!(&[0,1,3,3,2,0],&indices[..6]);
        /* the extra pair at 2π is emitted but never indexed */
        assert!(!indices.contains(&16) && !indices.contains(&17));
    }

    #[test]
    fn test_ring_geometry() {
        let mesh = ring(1.,1.,1.,2.,4,&mut FixedColour(Colour::red())).ok().unwrap();
        assert!(close((1.,2.),mesh.position(0).unwrap()));
        assert!(close((1.,3.),mesh.position(1).unwrap()));
        assert!(close((2.,1.),mesh.position(2).unwrap()));
        assert!(close(mesh.position(0).unwrap(),mesh.position(8).unwrap()));
    }

    #[test]
    fn test_ring_colour_rerolled_on_even_steps() {
        let mut source = CountingColour(0);
        let mesh = ring(0.,0.,1.,2.,5,&mut source).ok().unwrap();
        /* steps 0..=5 draw on 0, 2, 4 */
        assert_eq!(3,source.0);
        let reds = (0..mesh.vertex_count()).map(|i| mesh.vertex(i).unwrap()[2]).collect::<Vec<_>>();
        assert_eq!(vec![1.,1.,1.,1.,2.,2.,2.,2.,3.,3.,3.,3.],reds);
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(create_circle(1.5,-2.,3.,17,None),create_circle(1.5,-2.,3.,17,None));
        let a = ring(0.5,0.5,1.,2.,12,&mut RandomColour::new(StdRng::seed_from_u64(1))).ok().unwrap();
        let b = ring(0.5,0.5,1.,2.,12,&mut FixedColour(Colour::red())).ok().unwrap();
        let xy = |m: &MeshBuffer| (0..m.vertex_count()).map(|i| m.position(i).unwrap()).collect::<Vec<_>>();
        assert_eq!(xy(&a),xy(&b));
        assert_eq!(a.indices,b.indices);
        assert_eq!(xy(&create_circle_random(0.,0.,1.,9).ok().unwrap()),xy(&create_circle(0.,0.,1.,9,None).ok().unwrap()));
    }

    #[test]
    fn test_zero_granularity() {
        assert_eq!(Err(MeshError::ZeroGranularity),create_circle(0.,0.,1.,0,None));
        assert_eq!(Err(MeshError::ZeroGranularity),create_ring(0.,0.,1.,2.,0));
    }

    #[test]
    fn test_u16_indices() {
        let mesh = create_ring(0.,0.,1.,2.,8).ok().unwrap();
        assert_eq!(48,mesh.indices_u16().ok().unwrap().unwrap().len());
        assert_eq!(None,create_circle(0.,0.,1.,8,None).ok().unwrap().indices_u16().ok().unwrap());
        let big = ring(0.,0.,1.,2.,40000,&mut FixedColour(Colour::red())).ok().unwrap();
        assert!(match big.indices_u16() { Err(MeshError::IndexOverflow(_)) => true, _ => false });
    }
}
