//! Script fingerprinting for run memoization.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 128-bit XXH3 digest of an assembled script's UTF-8 text.
///
/// The fingerprint is the cache key: two scripts with equal fingerprints are
/// assumed byte-identical, so the engine's cached output for one is valid
/// for the other. The hex rendering doubles as the cache entry's filename
/// stem, so it is fixed at 32 lowercase hex characters.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fingerprint(u128);

impl Fingerprint {
    /// Fingerprints an arbitrary byte slice.
    pub fn from_bytes(data: &[u8]) -> Self {
        Self(xxhash_rust::xxh3::xxh3_128(data))
    }

    /// Fingerprints an assembled script.
    pub fn of_script(script: &str) -> Self {
        Self::from_bytes(script.as_bytes())
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", self.0)
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({:08x}..)", (self.0 >> 96) as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // A miniature assembled script; the real thing is the same shape with
    // more registrations.
    const SCRIPT: &str = concat!(
        "var fs = require('fs');\n",
        "Serenity.CodeGeneration.addSourceFile(\"Modules/Widget.ts\", \"class Widget {}\");\n",
        "var types = JSON.stringify(Serenity.CodeGeneration.parseTypes());\n",
        "fs.writeFileSync('./typeList.json', types);\n",
    );

    #[test]
    fn same_script_same_fingerprint() {
        assert_eq!(
            Fingerprint::of_script(SCRIPT),
            Fingerprint::of_script(&SCRIPT.to_string())
        );
    }

    #[test]
    fn one_byte_content_change_invalidates() {
        let tweaked = SCRIPT.replace("class Widget {}", "class Widget { }");
        assert_ne!(tweaked, SCRIPT);
        assert_ne!(
            Fingerprint::of_script(SCRIPT),
            Fingerprint::of_script(&tweaked)
        );
    }

    #[test]
    fn moved_source_path_invalidates() {
        let moved = SCRIPT.replace("Modules/Widget.ts", "Imports/Widget.ts");
        assert_ne!(
            Fingerprint::of_script(SCRIPT),
            Fingerprint::of_script(&moved)
        );
    }

    #[test]
    fn hex_rendering_is_a_valid_entry_stem() {
        let stem = Fingerprint::of_script(SCRIPT).to_string();
        assert_eq!(stem.len(), 32);
        assert!(stem.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
    }

    #[test]
    fn empty_script_still_fingerprints() {
        // An empty project assembles to a non-empty script, but the hash
        // itself must not care either way.
        let stem = Fingerprint::of_script("").to_string();
        assert_eq!(stem.len(), 32);
    }

    #[test]
    fn debug_does_not_spell_out_the_digest() {
        let rendered = format!("{:?}", Fingerprint::of_script(SCRIPT));
        assert!(rendered.starts_with("Fingerprint("));
        assert!(rendered.len() < 32, "debug form stays abbreviated");
    }

    #[test]
    fn survives_serialization() {
        let fp = Fingerprint::of_script(SCRIPT);
        let json = serde_json::to_string(&fp).unwrap();
        assert_eq!(serde_json::from_str::<Fingerprint>(&json).unwrap(), fp);
    }
}
