//! The library that holds every glyph the plotter knows how to draw.

use std::collections::HashMap;
use std::fs;
use std::iter::FromIterator;
use std::path::{Path, PathBuf};

use crate::glyphs::Glyph;
use crate::parser;
use crate::units::Mm;
use crate::{Error, Result};

/// This struct associates characters with their glyph.
///
/// It is built once and is read only afterwards, so it can be shared between threads.
#[derive(Debug, Clone)]
pub struct Library {
    /// The hashmap that associates characters with glyphs.
    glyphs: HashMap<char, Glyph>,
}

impl Library {
    /// Creates a library that only contains the built in glyphs, the space and the line break.
    pub fn builtins() -> Library {
        let mut glyphs = HashMap::new();
        glyphs.insert(' ', Glyph::space());
        glyphs.insert('\n', Glyph::newline());
        Library { glyphs }
    }

    /// Loads every glyph definition file found in a directory and its subdirectories.
    ///
    /// Files are read in path order, so if two files define the same character, the last one
    /// wins. Hidden files are ignored.
    pub fn load<P: AsRef<Path>>(directory: P) -> Result<Library> {
        let directory = directory.as_ref();

        if !directory.is_dir() {
            return Err(Error::GlyphDirectoryNotFound(PathBuf::from(directory)));
        }

        let mut files = vec![];
        collect_files(directory, &mut files)?;
        files.sort();

        let mut library = Library::builtins();

        for path in files {
            let definition = parser::parse(&path)?;
            debug!("loaded glyph {:?} from {}", definition.character, path.display());

            let replaced = library.insert(definition.character, definition.glyph);
            if replaced && definition.character != ' ' {
                warn!(
                    "glyph {:?} is defined more than once, using {}",
                    definition.character,
                    path.display()
                );
            }
        }

        info!("loaded {} glyphs from {}", library.len(), directory.display());

        Ok(library)
    }

    /// Adds a glyph to the library, returning true if it replaced another one.
    fn insert(&mut self, character: char, glyph: Glyph) -> bool {
        self.glyphs.insert(character, glyph).is_some()
    }

    /// Returns the glyph of a character if it is present in the library.
    pub fn lookup(&self, character: char) -> Option<&Glyph> {
        self.glyphs.get(&character)
    }

    /// Returns the width of a space, unscaled.
    pub fn space_width(&self) -> Mm {
        self.lookup(' ')
            .map(Glyph::width)
            .unwrap_or_else(|| Glyph::space().width())
    }

    /// Returns the number of glyphs in the library, built in glyphs included.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Returns true if the library has no glyph at all.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

impl FromIterator<(char, Glyph)> for Library {
    fn from_iter<I: IntoIterator<Item = (char, Glyph)>>(iter: I) -> Library {
        let mut library = Library::builtins();
        for (character, glyph) in iter {
            library.insert(character, glyph);
        }
        library
    }
}

/// Recursively pushes the paths of all the non hidden files of a directory.
fn collect_files(directory: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(directory)? {
        let path = entry?.path();

        let hidden = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(|name| name.starts_with('.'))
            .unwrap_or(false);

        if hidden {
            continue;
        }

        if path.is_dir() {
            collect_files(&path, files)?;
        } else {
            files.push(path);
        }
    }

    Ok(())
}
