use std::{collections::HashMap, path::PathBuf, sync::Arc};

use crate::dataset::{FontDescriptor, FontFamily};

/// Font database used to resolve [`FontDescriptor`]s for measurement.
///
/// Faces are registered with `fontdb` up front but only parsed by `fontdue`
/// the first time a descriptor resolves to them.
pub struct FontStorage {
    font_db: fontdb::Database,
    /// Parsed faces. Not every face in `font_db` is necessarily here.
    loaded_font: HashMap<fontdb::ID, Arc<fontdue::Font>, fxhash::FxBuildHasher>,
}

impl Default for FontStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl FontStorage {
    /// Creates an empty storage.
    pub fn new() -> Self {
        Self {
            font_db: fontdb::Database::new(),
            loaded_font: HashMap::with_hasher(fxhash::FxBuildHasher::default()),
        }
    }
}

/// Registering faces.
impl FontStorage {
    /// Loads the fonts installed on this system.
    pub fn load_system_fonts(&mut self) {
        self.font_db.load_system_fonts();
    }

    /// Loads a font from binary data.
    pub fn load_font_binary(&mut self, data: impl Into<Vec<u8>>) {
        self.font_db.load_font_data(data.into());
    }

    /// Loads a font from a file path.
    pub fn load_font_file(&mut self, path: PathBuf) -> Result<(), std::io::Error> {
        self.font_db.load_font_file(path)
    }

    /// Loads all fonts from a directory.
    pub fn load_fonts_dir(&mut self, dir: PathBuf) {
        self.font_db.load_fonts_dir(dir)
    }

    /// Chooses which installed family a generic family resolves to.
    ///
    /// Named families are already concrete, so they are left untouched.
    pub fn set_generic_family(&mut self, generic: &FontFamily, name: impl Into<String>) {
        match generic {
            FontFamily::SansSerif => self.font_db.set_sans_serif_family(name),
            FontFamily::Serif => self.font_db.set_serif_family(name),
            FontFamily::Monospace => self.font_db.set_monospace_family(name),
            FontFamily::Cursive => self.font_db.set_cursive_family(name),
            FontFamily::Fantasy => self.font_db.set_fantasy_family(name),
            FontFamily::Named(family) => {
                log::warn!("Ignoring generic family mapping for named family {family:?}.");
            }
        }
    }

    /// Checks if no faces are registered.
    pub fn is_empty(&self) -> bool {
        self.font_db.is_empty()
    }

    /// Returns the number of registered faces.
    pub fn len(&self) -> usize {
        self.font_db.len()
    }
}

/// Resolving faces.
impl FontStorage {
    /// Finds and loads the best face for `descriptor`.
    ///
    /// The requested family is tried first, then sans-serif, then any
    /// registered face that parses. A generic family only resolves when the
    /// font it maps to is installed, so the last step keeps text measurable
    /// on systems without the usual default families.
    pub fn resolve(&mut self, descriptor: &FontDescriptor) -> Option<Arc<fontdue::Font>> {
        let weight = fontdb::Weight(descriptor.weight);
        let requested = match &descriptor.family {
            FontFamily::SansSerif => fontdb::Family::SansSerif,
            FontFamily::Serif => fontdb::Family::Serif,
            FontFamily::Monospace => fontdb::Family::Monospace,
            FontFamily::Cursive => fontdb::Family::Cursive,
            FontFamily::Fantasy => fontdb::Family::Fantasy,
            FontFamily::Named(name) => fontdb::Family::Name(name.as_str()),
        };

        if let Some(font) = self.query_family(requested, weight) {
            return Some(font);
        }

        if !matches!(descriptor.family, FontFamily::SansSerif)
            && let Some(font) = self.query_family(fontdb::Family::SansSerif, weight)
        {
            log::warn!(
                "Font family {:?} not found; using sans-serif.",
                descriptor.family
            );
            return Some(font);
        }

        let ids: Vec<fontdb::ID> = self.font_db.faces().map(|face| face.id).collect();
        let font = ids.into_iter().find_map(|id| self.font(id))?;
        log::warn!(
            "Font family {:?} not found; using the first usable face.",
            descriptor.family
        );
        Some(font)
    }

    /// Returns the number of faces parsed so far.
    pub fn loaded_len(&self) -> usize {
        self.loaded_font.len()
    }

    fn query_family(
        &mut self,
        family: fontdb::Family<'_>,
        weight: fontdb::Weight,
    ) -> Option<Arc<fontdue::Font>> {
        let families = [family];
        let query = fontdb::Query {
            families: &families,
            weight,
            stretch: fontdb::Stretch::Normal,
            style: fontdb::Style::Normal,
        };

        let id = self.font_db.query(&query)?;
        self.font(id)
    }

    fn font(&mut self, id: fontdb::ID) -> Option<Arc<fontdue::Font>> {
        use std::collections::hash_map::Entry;

        match self.loaded_font.entry(id) {
            Entry::Occupied(entry) => Some(Arc::clone(entry.get())),
            Entry::Vacant(entry) => {
                let parsed = self.font_db.with_face_data(id, |data, index| {
                    fontdue::Font::from_bytes(
                        data,
                        fontdue::FontSettings {
                            collection_index: index,
                            ..Default::default()
                        },
                    )
                })?;

                match parsed {
                    Ok(font) => Some(Arc::clone(entry.insert(Arc::new(font)))),
                    Err(e) => {
                        log::error!("Failed to load font (id: {:?}): {}", id, e);
                        None
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_storage_resolves_nothing() {
        let mut storage = FontStorage::new();
        assert!(storage.is_empty());
        assert_eq!(storage.len(), 0);
        assert!(storage.resolve(&FontDescriptor::default()).is_none());
        assert!(
            storage
                .resolve(&FontDescriptor::new(FontFamily::Named("Nope".into()), 12.0))
                .is_none()
        );
        assert_eq!(storage.loaded_len(), 0);
    }

    #[test]
    fn default_descriptor_resolves_on_any_system_with_fonts() {
        let mut storage = FontStorage::new();
        storage.load_system_fonts();
        if storage.is_empty() {
            return;
        }

        assert!(storage.resolve(&FontDescriptor::default()).is_some());
        let missing = FontDescriptor::new(FontFamily::Named("No Such Family 0xF00".into()), 16.0);
        assert!(storage.resolve(&missing).is_some());
    }

    #[test]
    fn repeated_resolve_reuses_the_parsed_face() {
        let mut storage = FontStorage::new();
        storage.load_system_fonts();
        if storage.is_empty() {
            return;
        }

        let (Some(first), Some(second)) = (
            storage.resolve(&FontDescriptor::default()),
            storage.resolve(&FontDescriptor::default()),
        ) else {
            panic!("a registered face should resolve");
        };
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(storage.loaded_len(), 1);
    }
}
