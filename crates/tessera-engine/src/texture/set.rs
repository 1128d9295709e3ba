use super::Texture;

/// Opaque handle to a texture registered in a [`TextureSet`].
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct TextureId(pub usize);

/// Owns the textures a frame's draw commands may reference.
///
/// Textures are immutable after insertion. The set is owned by the host and
/// passed to [`Target::render`](crate::render::Target::render) each frame.
#[derive(Debug, Default)]
pub struct TextureSet {
    textures: Vec<Texture>,
}

impl TextureSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `texture` and returns the id draw commands use to reference it.
    pub fn insert(&mut self, texture: Texture) -> TextureId {
        let id = TextureId(self.textures.len());
        self.textures.push(texture);
        id
    }

    /// Returns the texture for `id`, if it was registered.
    pub fn get(&self, id: TextureId) -> Option<&Texture> {
        self.textures.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}
