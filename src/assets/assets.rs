use std::borrow::Cow;

use anyhow::anyhow;
use gpui::{AssetSource, Result, SharedString};
use indexmap::IndexSet;

/// A bundle of files GPUI can load by path.
pub trait AssetProvider: Send + Sync {
    fn get(&self, path: &str) -> Option<Cow<'static, [u8]>>;
    fn list(&self, path: &str) -> Result<Vec<SharedString>>;
}

/// Layers several providers into one asset source. Earlier providers
/// shadow later ones, so host assets go first and [`crate::DialogAssets`]
/// last.
#[derive(Default)]
pub struct Assets {
    providers: Vec<Box<dyn AssetProvider>>,
}

impl Assets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, provider: impl AssetProvider + 'static) -> Self {
        self.providers.push(Box::new(provider));
        self
    }
}

/// `assets![HostAssets, DialogAssets]` builds an [`Assets`] in lookup order.
#[macro_export]
macro_rules! assets {
    ( $( $provider:expr ),* $(,)? ) => {
        $crate::Assets::new() $( .with($provider) )*
    };
}

impl AssetSource for Assets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }

        self.providers
            .iter()
            .find_map(|provider| provider.get(path))
            .map(Some)
            .ok_or_else(|| anyhow!("could not find asset at path \"{path}\""))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        let mut paths = IndexSet::new();

        for provider in &self.providers {
            paths.extend(provider.list(path)?);
        }

        Ok(paths.into_iter().collect())
    }
}
