//! `tslister clean` — empty the shared result cache.

use std::error::Error;

use crate::pipeline::{open_cache, resolve_config};
use crate::GlobalArgs;

/// Runs the `tslister clean` command.
///
/// Removes every entry from the configured cache directory. The current
/// directory's `tslister.toml`, if any, decides which cache that is.
pub fn run(global: &GlobalArgs) -> Result<i32, Box<dyn Error>> {
    let cwd = std::env::current_dir()?;
    let config = resolve_config(global, &cwd)?;
    let cache = open_cache(&config);
    let removed = cache.clear()?;
    if !global.quiet {
        eprintln!("   Removed {removed} cache entr{}", plural(removed));
    }
    Ok(0)
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        "y"
    } else {
        "ies"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plural_forms() {
        assert_eq!(plural(0), "ies");
        assert_eq!(plural(1), "y");
        assert_eq!(plural(2), "ies");
    }
}
