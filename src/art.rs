use crate::errors::DataError;
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Which side of a creature to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    /// Opponents are drawn facing the player.
    Front,
    Back,
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Facing::Front => write!(f, "front"),
            Facing::Back => write!(f, "back"),
        }
    }
}

pub trait ArtProvider {
    fn art(&self, species_name: &str, facing: Facing) -> Result<String, DataError>;

    /// The art, or the bare species name when none is available.
    fn art_or_name(&self, species_name: &str, facing: Facing) -> String {
        match self.art(species_name, facing) {
            Ok(art) => art,
            Err(err) => {
                log::debug!("no art for {}: {}", species_name, err);
                species_name.to_string()
            }
        }
    }
}

/// ASCII art read from `<root>/<lowercase name>/<facing>.txt`.
#[derive(Debug, Clone)]
pub struct FileArt {
    root: PathBuf,
}

impl FileArt {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ArtProvider for FileArt {
    fn art(&self, species_name: &str, facing: Facing) -> Result<String, DataError> {
        let path = self
            .root
            .join(species_name.to_lowercase())
            .join(format!("{}.txt", facing));
        let raw = fs::read_to_string(&path).map_err(|source| DataError::Io { path, source })?;
        Ok(render_art(&raw))
    }
}

/// Art files store the escape character as the literal text `\u001B`, and
/// slashes are swapped for a lookalike so terminals do not mangle them.
pub fn render_art(raw: &str) -> String {
    raw.replace('/', "\u{2215}").replace("\\u001B", "\u{1b}")
}
