use anyhow::{Context, Result};
use log::*;
use structopt::StructOpt;
use vmd::{BoneSink, Importer, MorphSink, NameTables};

use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

mod descriptor;

use descriptor::*;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "vmd",
    about = "imports Vocaloid motion data onto a rig description"
)]
struct Opt {
    /// Motion file
    #[structopt(parse(from_os_str))]
    input: PathBuf,

    /// Rig description
    #[structopt(short, long, parse(from_os_str), default_value = "./rig.toml")]
    rig: PathBuf,

    /// Name mapping, overrides the rig's `names_path`
    #[structopt(short, long, parse(from_os_str))]
    names: Option<PathBuf>,

    /// Map the common MMD bone and morph names to English
    #[structopt(long)]
    standard_names: bool,

    #[structopt(short, long, default_value = "1", allow_hyphen_values = true)]
    frame_offset: i64,

    #[structopt(long)]
    no_bones: bool,

    #[structopt(long)]
    no_morphs: bool,

    /// Write the extended `frame_end` back into the rig file
    #[structopt(long)]
    update_rig: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let opt = Opt::from_args();

    let data = fs::read_to_string(&opt.rig).context("failed to open rig")?;
    let mut config: Config = toml::from_str(&data).context("failed to parse rig")?;
    config.validate().context("invalid rig")?;
    debug!("{:?}", config);

    let names = load_names(&opt, &config);

    let mut armature = Armature {
        bones: &config.bones,
        keys: vec![],
    };
    let mut shape_keys = ShapeKeys {
        morphs: &config.morphs,
        keys: vec![],
    };
    let bones: Option<&mut dyn BoneSink> = if opt.no_bones || config.bones.is_empty() {
        None
    } else {
        Some(&mut armature)
    };
    let morphs: Option<&mut dyn MorphSink> = if opt.no_morphs || config.morphs.is_empty() {
        None
    } else {
        Some(&mut shape_keys)
    };

    let file = File::open(&opt.input).context("failed to open motion")?;
    let end = Importer::new(&names, opt.frame_offset)
        .import(BufReader::new(file), bones, morphs)
        .with_context(|| format!("failed to import {}", opt.input.display()))?;

    for key in &armature.keys {
        let (l, r) = (key.location, key.rotation);
        println!(
            "bone\t{}\t{}\t{} {} {}\t{} {} {} {}",
            key.name, key.frame, l.x, l.y, l.z, r.s, r.v.x, r.v.y, r.v.z
        );
    }
    for key in &shape_keys.keys {
        println!("morph\t{}\t{}\t{}", key.name, key.frame, key.weight);
    }
    info!(
        "imported {} bone and {} morph key(s)",
        armature.keys.len(),
        shape_keys.keys.len()
    );

    // playback range only ever grows
    if end > config.frame_end {
        info!("extending frame_end {} -> {}", config.frame_end, end);
        config.frame_end = end;
        if opt.update_rig {
            let data = toml::to_string(&config).context("failed to serialize rig")?;
            fs::write(&opt.rig, data).context("failed to write rig")?;
        }
    }
    println!("frame_end\t{}", config.frame_end);

    Ok(())
}

/// A missing or broken mapping file is not fatal, names just pass through.
fn load_names(opt: &Opt, config: &Config) -> NameTables {
    if opt.standard_names {
        return NameTables::standard().clone();
    }
    let path = match opt.names.as_deref().or_else(|| config.names_path.as_deref()) {
        Some(path) => path,
        None => return NameTables::default(),
    };
    load_names_from(path)
}

fn load_names_from(path: &Path) -> NameTables {
    match NameTables::load(path) {
        Ok(names) => names,
        Err(e) => {
            warn!("{}, names will not be mapped", e);
            NameTables::default()
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use std::io::Write;

    #[test]
    fn missing_names_pass_through() {
        let dir = tempfile::tempdir().unwrap();
        let names = load_names_from(&dir.path().join("englishmap.toml"));
        assert!(names.bones.is_empty());
        assert!(names.morphs.is_empty());
    }

    #[test]
    fn names_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[bones]\n\"頭\" = \"head\"").unwrap();
        let names = load_names_from(file.path());
        assert_eq!(names.bones.lookup("頭"), "head");
    }
}
