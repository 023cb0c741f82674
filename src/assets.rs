//! Opaque asset handles
//!
//! The core never loads bytes; an external loader resolves every id in
//! [`IMAGE_MANIFEST`] before the first frame and hands sprites back to the
//! renderer keyed by [`AssetId`].

/// Image resources the game references
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetId {
    TitleBackground,
    GameBackground,
    Pirate,
    Ghost,
    Coin,
}

impl AssetId {
    /// Resource name the loader should resolve
    pub fn file_name(self) -> &'static str {
        match self {
            AssetId::TitleBackground => "title_bg.png",
            AssetId::GameBackground => "game_bg.png",
            AssetId::Pirate => "pirate.png",
            AssetId::Ghost => "ghost_10.png",
            AssetId::Coin => "coin.png",
        }
    }
}

/// Everything to preload before the first frame
pub const IMAGE_MANIFEST: [AssetId; 5] = [
    AssetId::TitleBackground,
    AssetId::GameBackground,
    AssetId::Pirate,
    AssetId::Ghost,
    AssetId::Coin,
];
