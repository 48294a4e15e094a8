//! `tslister list` — produce a project's external type list.
//!
//! The full pipeline:
//!
//! 1. Resolve configuration (`--config` flag or the project's `tslister.toml`)
//! 2. Open the shared result cache
//! 3. Discover, assemble, and run (or answer from cache) via `TypeLister`
//! 4. Render the type list

use std::error::Error;

use tslister_common::ExternalType;
use tslister_engine::{NodeRunner, RunnerConfig, TypeLister};
use tslister_script::ScriptAssembler;

use crate::pipeline::{open_cache, resolve_config};
use crate::{GlobalArgs, ListArgs, ReportFormat};

/// Runs the `tslister list` command.
///
/// Returns exit code 0 on success; errors bubble up to the caller.
pub fn run(args: &ListArgs, global: &GlobalArgs) -> Result<i32, Box<dyn Error>> {
    let project_dir = args.dir.clone();
    if !project_dir.is_dir() {
        return Err(format!("not a directory: {}", project_dir.display()).into());
    }

    let config = resolve_config(global, &project_dir)?;
    let cache = open_cache(&config);
    let runner = NodeRunner::new(RunnerConfig {
        program: config.engine.program.clone(),
        timeout: config.engine.timeout(),
        temp_root: None,
    });

    let mut lister = TypeLister::new(project_dir, ScriptAssembler::embedded(), cache, runner);
    if args.no_cache {
        lister = lister.skip_cache_lookup();
    }

    let types = lister.list()?;

    match args.format {
        ReportFormat::Text => {
            for t in &types {
                println!("{}", render_text(t));
            }
            if !global.quiet {
                eprintln!("   Found {} type(s)", types.len());
            }
        }
        ReportFormat::Json => {
            let json = serde_json::to_string_pretty(&types)?;
            println!("{json}");
        }
    }

    Ok(0)
}

/// One text line per type: the name, its base type when known, and the
/// member count.
fn render_text(t: &ExternalType) -> String {
    let mut line = t.name.clone();
    if let Some(base) = &t.base_type {
        line.push_str(" : ");
        line.push_str(base);
    }
    if !t.members.is_empty() {
        line.push_str(&format!("  ({} members)", t.members.len()));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> ExternalType {
        serde_json::from_str(
            r#"{"name":"Widget","baseType":"Serenity.Widget","members":[{"name":"id"},{"name":"value"}]}"#,
        )
        .unwrap()
    }

    #[test]
    fn text_line_shows_base_and_member_count() {
        assert_eq!(render_text(&widget()), "Widget : Serenity.Widget  (2 members)");
    }

    #[test]
    fn text_line_for_bare_type_is_just_the_name() {
        let t: ExternalType = serde_json::from_str(r#"{"name":"Point"}"#).unwrap();
        assert_eq!(render_text(&t), "Point");
    }
}
