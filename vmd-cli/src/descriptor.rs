use anyhow::{bail, Result};
use cgmath::{InnerSpace, Quaternion, Vector3};
use serde::{Deserialize, Serialize};
use vmd::{BoneSink, MorphSink};

use std::collections::HashMap;
use std::path::PathBuf;

/// The rig motions are imported onto, as described by `rig.toml`.
#[derive(Default, Serialize, Deserialize, Debug)]
#[serde(default)]
pub struct Config {
    pub frame_end: i64,
    pub names_path: Option<PathBuf>,
    pub morphs: Vec<String>,
    // tables serialize after plain values
    pub bones: HashMap<String, BoneDescriptor>,
}

#[derive(Default, Serialize, Deserialize, Debug, Clone, Copy)]
#[serde(default)]
pub struct BoneDescriptor {
    /// `[w, x, y, z]`, identity when absent.
    pub rest: Option<[f32; 4]>,
}

impl Config {
    /// Rejects rest orientations that cannot be inverted.
    pub fn validate(&self) -> Result<()> {
        for (name, bone) in &self.bones {
            if let Some([w, x, y, z]) = bone.rest {
                let q = Quaternion::new(w, x, y, z);
                if !q.magnitude2().is_normal() {
                    bail!("bone `{}` has a degenerate rest rotation {:?}", name, [w, x, y, z]);
                }
            }
        }
        Ok(())
    }
}

impl BoneDescriptor {
    fn rest(&self) -> Quaternion<f32> {
        match self.rest {
            Some([w, x, y, z]) => Quaternion::new(w, x, y, z).normalize(),
            None => Quaternion::new(1., 0., 0., 0.),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoneKey {
    pub name: String,
    pub frame: i64,
    pub location: Vector3<f32>,
    pub rotation: Quaternion<f32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MorphKey {
    pub name: String,
    pub frame: i64,
    pub weight: f32,
}

/// Collects bone keys for the bones a rig declares.
pub struct Armature<'a> {
    pub bones: &'a HashMap<String, BoneDescriptor>,
    pub keys: Vec<BoneKey>,
}

impl BoneSink for Armature<'_> {
    fn has_bone(&self, name: &str) -> bool {
        self.bones.contains_key(name)
    }

    fn rest_rotation(&self, name: &str) -> Quaternion<f32> {
        self.bones
            .get(name)
            .map(BoneDescriptor::rest)
            .unwrap_or_else(vmd::basis::identity)
    }

    fn set_bone_keyframe(
        &mut self,
        name: &str,
        frame: i64,
        location: Vector3<f32>,
        rotation: Quaternion<f32>,
    ) {
        self.keys.push(BoneKey {
            name: name.to_owned(),
            frame,
            location,
            rotation,
        });
    }
}

/// Collects morph keys for the morphs a rig declares.
pub struct ShapeKeys<'a> {
    pub morphs: &'a [String],
    pub keys: Vec<MorphKey>,
}

impl MorphSink for ShapeKeys<'_> {
    fn has_morph(&self, name: &str) -> bool {
        self.morphs.iter().any(|x| x == name)
    }

    fn set_morph_keyframe(&mut self, name: &str, frame: i64, weight: f32) {
        self.keys.push(MorphKey {
            name: name.to_owned(),
            frame,
            weight,
        });
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_rig() {
        let config: Config = toml::from_str(
            r#"
            morphs = ["blink"]
            frame_end = 250

            [bones.center]
            [bones.arm_L]
            rest = [0.7071068, 0.0, 0.0, 0.7071068]
            "#,
        )
        .unwrap();
        assert_eq!(config.frame_end, 250);
        assert_eq!(config.morphs, ["blink"]);
        assert!(config.names_path.is_none());

        let armature = Armature {
            bones: &config.bones,
            keys: vec![],
        };
        assert!(armature.has_bone("center"));
        assert!(!armature.has_bone("arm_R"));
        assert_eq!(armature.rest_rotation("center"), vmd::basis::identity());
        let rest = armature.rest_rotation("arm_L");
        assert!((rest - Quaternion::new(0.7071068, 0., 0., 0.7071068)).magnitude() < 1e-6);
    }

    #[test]
    fn degenerate_rest_is_rejected() {
        let config: Config = toml::from_str(
            r#"
            [bones.center]
            [bones.arm_L]
            rest = [0.0, 0.0, 0.0, 0.0]
            "#,
        )
        .unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("arm_L"));

        let config: Config = toml::from_str("[bones.center]\nrest = [2.0, 0.0, 0.0, 0.0]").unwrap();
        config.validate().unwrap();
        let armature = Armature {
            bones: &config.bones,
            keys: vec![],
        };
        // rest rotations are scaled to unit length
        assert_eq!(armature.rest_rotation("center"), vmd::basis::identity());
    }

    #[test]
    fn rig_survives_rewrite() {
        let mut config: Config = toml::from_str(
            r#"
            morphs = ["blink", "a"]

            [bones.center]
            [bones.arm_L]
            rest = [0.5, 0.5, 0.5, 0.5]
            "#,
        )
        .unwrap();
        config.frame_end = 300;

        let text = toml::to_string(&config).unwrap();
        let config: Config = toml::from_str(&text).unwrap();
        assert_eq!(config.frame_end, 300);
        assert_eq!(config.morphs, ["blink", "a"]);
        assert_eq!(config.bones.len(), 2);
        assert_eq!(config.bones["arm_L"].rest, Some([0.5; 4]));
    }
}
