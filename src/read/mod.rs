use log::*;
use nom::combinator::map;
use nom::number::complete::*;
use nom::sequence::tuple;
use nom::IResult;

use std::io::{self, Read};

use super::*;

pub mod utilities;

use utilities::array;

/// A fixed-size little-endian record.
pub trait Record: Sized {
    /// Exact number of bytes `parse` consumes.
    const SIZE: usize;
    /// Used in truncation errors.
    const NAME: &'static str;

    fn parse(i: &[u8]) -> IResult<&[u8], Self>;
}

impl<const N: usize> FixedStr<N> {
    pub(crate) fn parse(i: &[u8]) -> IResult<&[u8], Self> {
        map(array::<N>, FixedStr)(i)
    }
}

impl Record for u32 {
    const SIZE: usize = 4;
    const NAME: &'static str = "record count";

    fn parse(i: &[u8]) -> IResult<&[u8], Self> {
        le_u32(i)
    }
}

impl Record for Header {
    const SIZE: usize = 30 + 20;
    const NAME: &'static str = "header";

    fn parse(i: &[u8]) -> IResult<&[u8], Self> {
        let (i, magic) = FixedStr::parse(i)?;
        let (i, model_name) = FixedStr::parse(i)?;
        Ok((i, Header { magic, model_name }))
    }
}

impl Record for BoneKeyframe {
    const SIZE: usize = 15 + 4 + 3 * 4 + 4 * 4 + 64;
    const NAME: &'static str = "bone keyframe";

    fn parse(i: &[u8]) -> IResult<&[u8], Self> {
        let (i, name) = FixedStr::parse(i)?;
        let (i, frame) = le_u32(i)?;
        let (i, (tx, ty, tz)) = tuple((le_f32, le_f32, le_f32))(i)?;
        let (i, (rx, ry, rz, rw)) = tuple((le_f32, le_f32, le_f32, le_f32))(i)?;
        let (i, interpolation) = array::<64>(i)?;
        Ok((
            i,
            BoneKeyframe {
                name,
                frame,
                translation: [tx, ty, tz],
                rotation: [rx, ry, rz, rw],
                interpolation,
            },
        ))
    }
}

impl Record for MorphKeyframe {
    const SIZE: usize = 15 + 4 + 4;
    const NAME: &'static str = "morph keyframe";

    fn parse(i: &[u8]) -> IResult<&[u8], Self> {
        let (i, name) = FixedStr::parse(i)?;
        let (i, frame) = le_u32(i)?;
        let (i, weight) = le_f32(i)?;
        Ok((i, MorphKeyframe { name, frame, weight }))
    }
}

/// Forward-only reader of fixed-size records.
pub struct MotionReader<R> {
    inner: R,
    buf: Vec<u8>,
}

impl<R: Read> MotionReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: vec![],
        }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    pub fn read<T: Record>(&mut self) -> Result<T> {
        self.buf.resize(T::SIZE, 0);
        self.inner
            .read_exact(&mut self.buf)
            .map_err(|e| truncated(e, T::NAME))?;
        // the buffer is exactly SIZE bytes so the parser cannot run short
        T::parse(&self.buf)
            .map(|(_, v)| v)
            .map_err(|_| Error::Truncated { what: T::NAME })
    }

    /// Advances `count` bytes without decoding them.
    pub fn skip(&mut self, count: u64) -> Result<()> {
        let skipped = io::copy(&mut (&mut self.inner).take(count), &mut io::sink())?;
        if skipped < count {
            return Err(Error::Truncated {
                what: "skipped section",
            });
        }
        Ok(())
    }

    /// Reads and checks the header.
    ///
    /// The magic is decoded like any other name field, but a field that
    /// fails to decode is reported as a bad header rather than a bad name.
    pub fn read_header(&mut self) -> Result<Header> {
        let header: Header = self.read()?;
        let magic = header
            .magic
            .decode()
            .map_err(|_| Error::InvalidHeader(format!("{:?}", header.magic)))?;
        if !magic.starts_with(MAGIC) {
            return Err(Error::InvalidHeader(magic));
        }
        debug!("motion header {:?} for {:?}", magic, header.model_name);
        Ok(header)
    }

    /// Reads a section's record count then every record in it.
    pub fn read_section<T: Record>(&mut self) -> Result<Vec<T>> {
        let count: u32 = self.read()?;
        trace!("reading {} {}(s)", count, T::NAME);
        (0..count).map(|_| self.read()).collect()
    }

    /// Reads a section's record count then skips its records.
    pub fn skip_section<T: Record>(&mut self) -> Result<()> {
        let count: u32 = self.read()?;
        debug!("skipping {} {}(s)", count, T::NAME);
        self.skip(u64::from(count) * T::SIZE as u64)
    }
}

fn truncated(e: io::Error, what: &'static str) -> Error {
    match e.kind() {
        io::ErrorKind::UnexpectedEof => Error::Truncated { what },
        _ => Error::Io(e),
    }
}

impl Motion {
    pub fn read<R: Read>(reader: R) -> Result<Self> {
        let mut reader = MotionReader::new(reader);
        let header = reader.read_header()?;
        let bones = reader.read_section()?;
        let morphs = reader.read_section()?;
        Ok(Motion {
            header,
            bones,
            morphs,
        })
    }
}
