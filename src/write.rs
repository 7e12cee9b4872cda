use cookie_factory::bytes::{le_f32, le_u32};
use cookie_factory::combinator::slice;
use cookie_factory::multi::all;
use cookie_factory::sequence::tuple;
use cookie_factory::{gen_simple, SerializeFn};

use super::*;

use std::io;

impl Header {
    pub fn write<'a, W: io::Write + 'a>(&'a self) -> impl SerializeFn<W> + 'a {
        tuple((slice(self.magic.as_bytes()), slice(self.model_name.as_bytes())))
    }
}

impl BoneKeyframe {
    pub fn write<'a, W: io::Write + 'a>(&'a self) -> impl SerializeFn<W> + 'a {
        let [tx, ty, tz] = self.translation;
        let [rx, ry, rz, rw] = self.rotation;
        tuple((
            slice(self.name.as_bytes()),
            le_u32(self.frame),
            le_f32(tx),
            le_f32(ty),
            le_f32(tz),
            le_f32(rx),
            le_f32(ry),
            le_f32(rz),
            le_f32(rw),
            slice(&self.interpolation[..]),
        ))
    }
}

impl MorphKeyframe {
    pub fn write<'a, W: io::Write + 'a>(&'a self) -> impl SerializeFn<W> + 'a {
        tuple((
            slice(self.name.as_bytes()),
            le_u32(self.frame),
            le_f32(self.weight),
        ))
    }
}

impl Motion {
    pub fn write<'a, W: io::Write + 'a>(&'a self) -> impl SerializeFn<W> + 'a {
        let bones = self.bones.iter().map(|x| x.write::<W>());
        let morphs = self.morphs.iter().map(|x| x.write::<W>());
        tuple((
            self.header.write::<W>(),
            le_u32(self.bones.len() as u32),
            all(bones),
            le_u32(self.morphs.len() as u32),
            all(morphs),
        ))
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        gen_simple(self.write(), vec![]).map_err(Error::Encode)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn sample() -> Motion {
        let mut magic = FixedStr::encode("Vocaloid Motion Data 0002").unwrap();
        // bytes past the terminator survive a read and write
        magic.0[28] = 0xFD;
        let mut interpolation = [0u8; 64];
        for (i, b) in interpolation.iter_mut().enumerate() {
            *b = i as u8;
        }
        Motion {
            header: Header {
                magic,
                model_name: FixedStr::encode("初音ミク").unwrap(),
            },
            bones: vec![
                BoneKeyframe {
                    name: FixedStr::encode("センター").unwrap(),
                    frame: 0,
                    translation: [0.5, 10., -2.25],
                    rotation: [0., 0.7071068, 0., 0.7071068],
                    interpolation,
                },
                BoneKeyframe {
                    name: FixedStr::encode("左ひじ").unwrap(),
                    frame: 42,
                    ..Default::default()
                },
            ],
            morphs: vec![MorphKeyframe {
                name: FixedStr::encode("まばたき").unwrap(),
                frame: 7,
                weight: 1.,
            }],
        }
    }

    #[test]
    fn layout() {
        let motion = sample();
        let bytes = motion.to_bytes().unwrap();
        assert_eq!(bytes.len(), 50 + 4 + 2 * 111 + 4 + 23);
        assert!(bytes.starts_with(b"Vocaloid Motion Data 0002\0"));
        assert_eq!(&bytes[50..54], &2u32.to_le_bytes());
        // frame of the first bone follows its 15 byte name
        assert_eq!(&bytes[54 + 15..54 + 19], &0u32.to_le_bytes());
        assert_eq!(&bytes[54 + 19..54 + 23], &0.5f32.to_le_bytes());
    }

    #[test]
    fn reencode_reproduces_input() {
        let bytes = sample().to_bytes().unwrap();
        let motion = Motion::read(&bytes[..]).unwrap();
        assert_eq!(motion, sample());
        assert_eq!(motion.to_bytes().unwrap(), bytes);
    }
}
