//! Bundled translations and bundle loading.
//!
//! The library ships one JSON bundle per supported locale, embedded at compile
//! time. [`default_registry`] turns them into a [`MessageRegistry`] with
//! `en-US` as the fallback. [`load_dir`] reads the same format from disk for
//! hosts that ship their own bundles.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::locale::{LocaleCode, LocaleError, MessageBundle, MessageRegistry};

/// Locale used as the fallback of every registry built here when present.
pub const DEFAULT_FALLBACK: &str = "en-US";

/// Embedded bundles, fallback first.
const BUNDLED: &[(&str, &str)] = &[
    ("en-US", include_str!("../translations/en-US.json")),
    ("de-DE", include_str!("../translations/de-DE.json")),
    ("es-ES", include_str!("../translations/es-ES.json")),
    ("fr-FR", include_str!("../translations/fr-FR.json")),
    ("it-IT", include_str!("../translations/it-IT.json")),
    ("ja-JP", include_str!("../translations/ja-JP.json")),
    ("ko-KR", include_str!("../translations/ko-KR.json")),
    ("nl-NL", include_str!("../translations/nl-NL.json")),
    ("zh-CN", include_str!("../translations/zh-CN.json")),
    ("zh-HK", include_str!("../translations/zh-HK.json")),
    ("cs-CZ", include_str!("../translations/cs-CZ.json")),
    ("da-DK", include_str!("../translations/da-DK.json")),
    ("el-GR", include_str!("../translations/el-GR.json")),
    ("fi-FI", include_str!("../translations/fi-FI.json")),
    ("hr-HR", include_str!("../translations/hr-HR.json")),
    ("hu-HU", include_str!("../translations/hu-HU.json")),
    ("in-ID", include_str!("../translations/in-ID.json")),
    ("no-NO", include_str!("../translations/no-NO.json")),
    ("pl-PL", include_str!("../translations/pl-PL.json")),
    ("pt-PT", include_str!("../translations/pt-PT.json")),
    ("ru-RU", include_str!("../translations/ru-RU.json")),
    ("sv-SE", include_str!("../translations/sv-SE.json")),
    ("th-TH", include_str!("../translations/th-TH.json")),
    ("tr-TR", include_str!("../translations/tr-TR.json")),
    ("ar-SA", include_str!("../translations/ar-SA.json")),
    ("iw-IL", include_str!("../translations/iw-IL.json")),
];

/// Errors that occur while parsing or loading bundles.
#[derive(Debug, Error)]
pub enum TranslationError {
    /// File I/O error when reading a bundle or its directory.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The bundle is not a flat JSON object of strings.
    #[error("invalid bundle for '{locale}': {source}")]
    Parse {
        locale: LocaleCode,
        #[source]
        source: serde_json::Error,
    },

    /// The bundles were parsed but rejected by the registry.
    #[error(transparent)]
    Locale(#[from] LocaleError),
}

/// Locale codes of the embedded bundles, fallback first.
pub fn supported_locales() -> Vec<LocaleCode> {
    BUNDLED.iter().map(|(code, _)| LocaleCode::from(*code)).collect()
}

/// Parse one flat JSON bundle.
pub fn parse_bundle(
    locale: impl Into<LocaleCode>,
    json: &str,
) -> Result<MessageBundle, TranslationError> {
    serde_json::from_str(json).map_err(|source| TranslationError::Parse {
        locale: locale.into(),
        source,
    })
}

/// The registry of every embedded locale, with `en-US` as fallback and
/// active locale.
pub fn default_registry() -> Result<MessageRegistry, TranslationError> {
    let bundles = BUNDLED
        .iter()
        .map(|(code, json)| Ok((*code, parse_bundle(*code, json)?)))
        .collect::<Result<Vec<_>, TranslationError>>()?;
    Ok(MessageRegistry::from_bundles(bundles)?)
}

/// Load every `<locale>.json` file in `dir` into a registry.
///
/// Files are registered in sorted order. `en-US` becomes the fallback when
/// present, otherwise the first locale in sorted order. Other files are
/// ignored.
pub fn load_dir(dir: impl AsRef<Path>) -> Result<MessageRegistry, TranslationError> {
    let dir = dir.as_ref();
    let io_error = |path: &Path| {
        let path = path.to_path_buf();
        move |source: io::Error| TranslationError::Io { path, source }
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error(dir))? {
        let path = entry.map_err(io_error(dir))?.path();
        if path.extension().is_some_and(|ext| ext == "json") {
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                files.push((LocaleCode::from(stem), path.clone()));
            }
        }
    }
    files.sort();

    let mut bundles = Vec::with_capacity(files.len());
    for (locale, path) in files {
        let json = fs::read_to_string(&path).map_err(io_error(&path))?;
        let bundle = parse_bundle(locale.clone(), &json)?;
        debug!(%locale, path = %path.display(), messages = bundle.len(), "loaded bundle");
        bundles.push((locale, bundle));
    }

    let registry = MessageRegistry::from_bundles(bundles)?;
    if registry.contains(DEFAULT_FALLBACK) {
        Ok(registry
            .with_fallback(DEFAULT_FALLBACK)?
            .with_active(DEFAULT_FALLBACK)?)
    } else {
        Ok(registry)
    }
}
