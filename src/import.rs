use cgmath::{Quaternion, Vector3};
use log::*;

use std::io::Read;

use super::*;
use crate::read::MotionReader;

/// A target that receives bone keyframes.
pub trait BoneSink {
    fn has_bone(&self, name: &str) -> bool;

    /// Rest orientation of `name` relative to its parent.
    fn rest_rotation(&self, _name: &str) -> Quaternion<f32> {
        basis::identity()
    }

    fn set_bone_keyframe(
        &mut self,
        name: &str,
        frame: i64,
        location: Vector3<f32>,
        rotation: Quaternion<f32>,
    );
}

/// A target that receives morph weight keyframes.
pub trait MorphSink {
    fn has_morph(&self, name: &str) -> bool;

    fn set_morph_keyframe(&mut self, name: &str, frame: i64, weight: f32);
}

/// Streams a motion file into bone and morph sinks.
///
/// Holds no state between imports.
#[derive(Debug, Clone, Copy)]
pub struct Importer<'a> {
    pub names: &'a NameTables,
    pub frame_offset: i64,
}

impl<'a> Importer<'a> {
    pub fn new(names: &'a NameTables, frame_offset: i64) -> Self {
        Self {
            names,
            frame_offset,
        }
    }

    /// Imports one motion and returns the last frame it reaches on the
    /// target timeline, never less than the frame offset.
    ///
    /// Sections without a sink are skipped. Keys already written are kept if
    /// a later record fails to decode.
    pub fn import<R: Read>(
        &self,
        reader: R,
        bones: Option<&mut dyn BoneSink>,
        morphs: Option<&mut dyn MorphSink>,
    ) -> Result<i64> {
        let mut reader = MotionReader::new(reader);
        reader.read_header()?;

        let bone_end = match bones {
            Some(sink) => self.import_bones(&mut reader, sink)?,
            None => {
                reader.skip_section::<BoneKeyframe>()?;
                self.frame_offset
            }
        };
        let morph_end = match morphs {
            Some(sink) => self.import_morphs(&mut reader, sink)?,
            None => {
                reader.skip_section::<MorphKeyframe>()?;
                self.frame_offset
            }
        };

        let end = bone_end.max(morph_end).max(self.frame_offset);
        debug!("motion ends at frame {}", end);
        Ok(end)
    }

    fn timeline_frame(&self, frame: u32) -> Result<i64> {
        i64::from(frame)
            .checked_add(self.frame_offset)
            .ok_or(Error::FrameOverflow {
                frame,
                offset: self.frame_offset,
            })
    }

    pub fn import_bones<R: Read>(
        &self,
        reader: &mut MotionReader<R>,
        sink: &mut dyn BoneSink,
    ) -> Result<i64> {
        let count: u32 = reader.read()?;
        debug!("importing {} bone keyframe(s)", count);
        let mut end = self.frame_offset;
        let mut unmatched = 0;
        for _ in 0..count {
            let key: BoneKeyframe = reader.read()?;
            let name = self.names.bones.resolve(key.name.as_bytes())?;
            let frame = self.timeline_frame(key.frame)?;
            end = end.max(frame);

            if !sink.has_bone(&name) {
                trace!("no bone `{}`, skipping frame {}", name, frame);
                unmatched += 1;
                continue;
            }
            let rest = sink.rest_rotation(&name);
            let location = basis::location_to_target(key.translation);
            let rotation = basis::rotation_to_target(rest, key.rotation);
            trace!("bone `{}` @{}: {:?} {:?}", name, frame, location, rotation);
            sink.set_bone_keyframe(&name, frame, location, rotation);
        }
        if unmatched > 0 {
            debug!("{} bone keyframe(s) had no matching bone", unmatched);
        }
        Ok(end)
    }

    pub fn import_morphs<R: Read>(
        &self,
        reader: &mut MotionReader<R>,
        sink: &mut dyn MorphSink,
    ) -> Result<i64> {
        let count: u32 = reader.read()?;
        debug!("importing {} morph keyframe(s)", count);
        let mut end = self.frame_offset;
        for _ in 0..count {
            let key: MorphKeyframe = reader.read()?;
            let name = self.names.morphs.resolve(key.name.as_bytes())?;
            let frame = self.timeline_frame(key.frame)?;
            end = end.max(frame);

            if sink.has_morph(&name) {
                sink.set_morph_keyframe(&name, frame, key.weight);
            } else {
                trace!("no morph `{}`, skipping frame {}", name, frame);
            }
        }
        Ok(end)
    }
}
