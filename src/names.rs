use log::*;
use serde::Deserialize;
use thiserror::Error;

use std::collections::HashMap;
use std::path::Path;
use std::{fs, io};

use crate::error::NameError;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read name table: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse name table: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Maps names as stored in motion files onto the names a target uses.
///
/// Names with no entry pass through unchanged.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct NameTable {
    map: HashMap<String, String>,
}

impl NameTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, source: impl Into<String>, target: impl Into<String>) {
        self.map.insert(source.into(), target.into());
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn lookup<'a>(&'a self, name: &'a str) -> &'a str {
        self.map.get(name).map(String::as_str).unwrap_or(name)
    }

    /// Decodes a raw name field and maps it.
    pub fn resolve(&self, raw: &[u8]) -> Result<String, NameError> {
        let name = crate::read::utilities::decode_fixed(raw)?;
        match self.map.get(&name) {
            Some(target) => Ok(target.clone()),
            None => Ok(name),
        }
    }
}

impl<S: Into<String>, T: Into<String>> std::iter::FromIterator<(S, T)> for NameTable {
    fn from_iter<I: IntoIterator<Item = (S, T)>>(iter: I) -> Self {
        let map = iter
            .into_iter()
            .map(|(s, t)| (s.into(), t.into()))
            .collect();
        Self { map }
    }
}

/// Separate tables for bone and morph names.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NameTables {
    pub bones: NameTable,
    pub morphs: NameTable,
}

impl NameTables {
    /// Loads a TOML file with optional `[bones]` and `[morphs]` tables of
    /// `"source" = "target"` pairs.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let data = fs::read_to_string(path.as_ref())?;
        let tables: Self = toml::from_str(&data)?;
        info!(
            "loaded {} bone and {} morph name(s) from {}",
            tables.bones.len(),
            tables.morphs.len(),
            path.as_ref().display()
        );
        Ok(tables)
    }

    /// The common MMD rig names mapped to English.
    pub fn standard() -> &'static Self {
        &crate::const_table::STANDARD_NAMES
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use std::io::Write;

    fn field(s: &str) -> [u8; 15] {
        let mut buf = [0u8; 15];
        crate::read::utilities::encode_fixed(s, &mut buf).unwrap();
        buf
    }

    #[test]
    fn resolve_maps_or_passes_through() {
        let table: NameTable = vec![("センター", "center")].into_iter().collect();
        assert_eq!(table.resolve(&field("センター")).unwrap(), "center");
        assert_eq!(table.resolve(&field("右目")).unwrap(), "右目");
        assert_eq!(NameTable::new().resolve(&field("頭")).unwrap(), "頭");
    }

    #[test]
    fn resolve_is_deterministic() {
        let table = &NameTables::standard().bones;
        for name in &["センター", "上半身", "unknown"] {
            let first = table.resolve(&field(name)).unwrap();
            let second = table.resolve(&field(name)).unwrap();
            assert_eq!(first, second);
            // mapping an already mapped name changes nothing
            assert_eq!(table.lookup(&first), first);
        }
        assert_eq!(table.resolve(&field("unknown")).unwrap(), "unknown");
    }

    #[test]
    fn resolve_rejects_bad_fields() {
        let table = NameTable::new();
        assert!(table.resolve(b"no terminator!!").is_err());
    }

    #[test]
    fn standard_tables() {
        let tables = NameTables::standard();
        assert_eq!(tables.bones.lookup("センター"), "center");
        assert_eq!(tables.bones.lookup("左ひざ"), "knee_L");
        assert_eq!(tables.morphs.lookup("まばたき"), "blink");
    }

    #[test]
    fn load_tables() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[bones]\n\"センター\" = \"root\"\n\n[morphs]\n\"あ\" = \"mouth_a\""
        )
        .unwrap();
        let tables = NameTables::load(file.path()).unwrap();
        assert_eq!(tables.bones.lookup("センター"), "root");
        assert_eq!(tables.morphs.lookup("あ"), "mouth_a");

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[morphs]\n\"い\" = \"mouth_i\"").unwrap();
        let tables = NameTables::load(file.path()).unwrap();
        assert!(tables.bones.is_empty());
    }

    #[test]
    fn load_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            NameTables::load(dir.path().join("missing.toml")),
            Err(LoadError::Io(_))
        ));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[bones]\n\"a\" = 3").unwrap();
        assert!(matches!(
            NameTables::load(file.path()),
            Err(LoadError::Parse(_))
        ));
    }
}
