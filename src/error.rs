use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("stream ended while reading {what}")]
    Truncated { what: &'static str },

    #[error("not a motion file, magic was {0:?}")]
    InvalidHeader(String),

    #[error("frame {frame} with offset {offset} is past the end of the timeline")]
    FrameOverflow { frame: u32, offset: i64 },

    #[error("bad name field: {0}")]
    Name(#[from] NameError),

    #[error("failed to encode motion: {0:?}")]
    Encode(cookie_factory::GenError),
}

/// Failures decoding or encoding a fixed-width name field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    #[error("no terminator within {width} bytes")]
    Unterminated { width: usize },

    #[error("invalid Shift-JIS sequence in {0:?}")]
    InvalidEncoding(Vec<u8>),

    #[error("{0:?} has no Shift-JIS representation")]
    Unencodable(String),

    #[error("{name:?} needs {len} bytes, field holds {width} including terminator")]
    TooLong {
        name: String,
        len: usize,
        width: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
