//! Sprite image readiness
//!
//! Images decode asynchronously in the browser. The store only records which
//! roles are ready and the native size of each decoded image; the game loop
//! does nothing until all three are ready.

/// Logical role of an image asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetRole {
    Background,
    Player,
    Target,
}

impl AssetRole {
    pub const ALL: [AssetRole; 3] = [AssetRole::Background, AssetRole::Player, AssetRole::Target];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssetRole::Background => "background",
            AssetRole::Player => "player",
            AssetRole::Target => "target",
        }
    }
}

/// Readiness and native size of one image
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AssetSlot {
    pub ready: bool,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Default)]
pub struct AssetStore {
    background: AssetSlot,
    player: AssetSlot,
    target: AssetSlot,
}

impl AssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slot(&self, role: AssetRole) -> &AssetSlot {
        match role {
            AssetRole::Background => &self.background,
            AssetRole::Player => &self.player,
            AssetRole::Target => &self.target,
        }
    }

    fn slot_mut(&mut self, role: AssetRole) -> &mut AssetSlot {
        match role {
            AssetRole::Background => &mut self.background,
            AssetRole::Player => &mut self.player,
            AssetRole::Target => &mut self.target,
        }
    }

    /// Record that an image finished decoding
    pub fn mark_ready(&mut self, role: AssetRole, width: f32, height: f32) {
        let slot = self.slot_mut(role);
        slot.ready = true;
        slot.width = width;
        slot.height = height;
        log::info!("Asset ready: {} ({}x{})", role.as_str(), width, height);
    }

    pub fn is_ready(&self, role: AssetRole) -> bool {
        self.slot(role).ready
    }

    /// True once every role has decoded
    pub fn all_ready(&self) -> bool {
        AssetRole::ALL.iter().all(|role| self.is_ready(*role))
    }

    /// Native (width, height) of the background image
    pub fn background_size(&self) -> (f32, f32) {
        (self.background.width, self.background.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_ready_until_all_loaded() {
        let mut store = AssetStore::new();
        assert!(!store.all_ready());

        store.mark_ready(AssetRole::Background, 1000.0, 510.0);
        store.mark_ready(AssetRole::Target, 60.0, 60.0);
        assert!(!store.all_ready());
        assert!(!store.is_ready(AssetRole::Player));

        store.mark_ready(AssetRole::Player, 180.0, 280.0);
        assert!(store.all_ready());
    }

    #[test]
    fn test_background_size_recorded() {
        let mut store = AssetStore::new();
        store.mark_ready(AssetRole::Background, 1200.0, 510.0);
        assert_eq!(store.background_size(), (1200.0, 510.0));
    }
}
