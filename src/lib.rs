pub mod basis;
mod const_table;
pub mod error;
pub mod import;
pub mod names;
pub mod read;
mod write;

pub use error::{Error, NameError, Result};
pub use import::{BoneSink, Importer, MorphSink};
pub use names::{LoadError, NameTable, NameTables};

/// Signature every motion file's magic field must start with.
pub const MAGIC: &str = "Vocaloid Motion Data";

/// A fixed-width, null-terminated Shift-JIS name field.
///
/// All `N` bytes are kept as read, including whatever follows the terminator,
/// so a motion can be written back out unchanged.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedStr<const N: usize>(pub [u8; N]);

impl<const N: usize> FixedStr<N> {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0[..]
    }

    pub fn decode(&self) -> std::result::Result<String, NameError> {
        read::utilities::decode_fixed(&self.0)
    }

    pub fn encode(text: &str) -> std::result::Result<Self, NameError> {
        let mut buf = [0u8; N];
        read::utilities::encode_fixed(text, &mut buf)?;
        Ok(Self(buf))
    }
}

impl<const N: usize> Default for FixedStr<N> {
    fn default() -> Self {
        Self([0; N])
    }
}

impl<const N: usize> std::fmt::Debug for FixedStr<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.decode() {
            Ok(s) => write!(f, "{:?}", s),
            Err(_) => write!(f, "{:?}", &self.0[..]),
        }
    }
}

#[derive(Debug, Default, PartialEq, Clone)]
pub struct Header {
    pub magic: FixedStr<30>,
    pub model_name: FixedStr<20>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct BoneKeyframe {
    pub name: FixedStr<15>,
    pub frame: u32,
    /// File axis order.
    pub translation: [f32; 3],
    /// File space `(x, y, z, w)`.
    pub rotation: [f32; 4],
    /// Bezier control points, carried through untouched.
    pub interpolation: [u8; 64],
}

impl Default for BoneKeyframe {
    fn default() -> Self {
        Self {
            name: FixedStr::default(),
            frame: 0,
            translation: [0.; 3],
            rotation: [0., 0., 0., 1.],
            interpolation: [0; 64],
        }
    }
}

#[derive(Debug, Default, PartialEq, Clone)]
pub struct MorphKeyframe {
    pub name: FixedStr<15>,
    pub frame: u32,
    pub weight: f32,
}

/// A whole motion file held in memory.
///
/// Importing never builds one of these; it is for tooling that wants every
/// record at once, or wants to write a file back out.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct Motion {
    pub header: Header,
    pub bones: Vec<BoneKeyframe>,
    pub morphs: Vec<MorphKeyframe>,
}
