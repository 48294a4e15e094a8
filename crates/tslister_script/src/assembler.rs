//! Concatenates the engine scripts and source registrations into one script.

use std::borrow::Cow;

use tslister_discover::SourceFile;

/// Filename the assembled script writes its JSON result to, relative to the
/// process working directory. The runner reads the same name back.
pub const OUTPUT_FILE: &str = "typeList.json";

/// Namespace of the driver's registration and parse entry points.
const DRIVER_NAMESPACE: &str = "Serenity.CodeGeneration";

/// The engine scripts embedded into every assembled script.
///
/// `bootstrap` loads the compiler services, `driver` defines the
/// `addSourceFile`/`parseTypes` entry points. Both default to the bundled
/// resources but are injectable so tests (or an alternative engine) can
/// substitute their own.
pub struct EngineScripts {
    /// Compiler-services bootstrap text.
    pub bootstrap: Cow<'static, str>,
    /// Analysis driver library text.
    pub driver: Cow<'static, str>,
}

impl EngineScripts {
    /// The engine scripts bundled with this crate.
    pub fn embedded() -> Self {
        Self {
            bootstrap: Cow::Borrowed(include_str!("../resources/bootstrap.js")),
            driver: Cow::Borrowed(include_str!("../resources/driver.js")),
        }
    }
}

impl Default for EngineScripts {
    fn default() -> Self {
        Self::embedded()
    }
}

/// Builds the executable script text from a set of loaded source files.
pub struct ScriptAssembler {
    scripts: EngineScripts,
}

impl ScriptAssembler {
    /// Creates an assembler around the given engine scripts.
    pub fn new(scripts: EngineScripts) -> Self {
        Self { scripts }
    }

    /// Creates an assembler around the bundled engine scripts.
    pub fn embedded() -> Self {
        Self::new(EngineScripts::embedded())
    }

    /// Assembles the full script text.
    ///
    /// Emits, in order: the file-API shim, the bootstrap, the driver, one
    /// registration statement per file (in the order given), and the trailer
    /// that parses all registered sources and writes the JSON result to
    /// [`OUTPUT_FILE`]. Paths are normalized to forward slashes; paths and
    /// contents are embedded as JSON string literals, so arbitrary file
    /// content cannot escape the literal or alter control flow.
    pub fn assemble(&self, files: &[SourceFile]) -> String {
        let mut script = String::new();
        script.push_str("var fs = require('fs');\n");
        script.push_str(&self.scripts.bootstrap);
        script.push('\n');
        script.push_str(&self.scripts.driver);
        script.push('\n');
        for file in files {
            script.push_str(DRIVER_NAMESPACE);
            script.push_str(".addSourceFile(");
            script.push_str(&string_literal(&file.script_path()));
            script.push_str(", ");
            script.push_str(&string_literal(&file.content));
            script.push_str(");\n");
        }
        script.push_str("var types = JSON.stringify(");
        script.push_str(DRIVER_NAMESPACE);
        script.push_str(".parseTypes());\n");
        script.push_str(&format!("fs.writeFileSync('./{OUTPUT_FILE}', types);\n"));
        script
    }
}

/// Renders `s` as a quoted, escaped string literal.
///
/// JSON string escaping is a strict subset of JavaScript string syntax, so
/// the result is safe to splice into the script verbatim.
fn string_literal(s: &str) -> String {
    serde_json::Value::String(s.to_owned()).to_string()
}
