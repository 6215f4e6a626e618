//! Script registry
//!
//! The scripting engine itself is external; this registry only tracks the
//! script names the Scripts menu lists and dispatches execution by name.

use crate::error::CoreError;
use crate::image::Image;

type ScriptFn = Box<dyn Fn(&mut Image) -> Result<(), String> + Send + Sync>;

struct ScriptEntry {
    name: String,
    run: ScriptFn,
}

/// Registry of named scripts
#[derive(Default)]
pub struct ScriptRegistry {
    scripts: Vec<ScriptEntry>,
}

impl ScriptRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a script; a later registration with the same name wins
    pub fn register<F>(&mut self, name: impl Into<String>, run: F)
    where
        F: Fn(&mut Image) -> Result<(), String> + Send + Sync + 'static,
    {
        let name = name.into();
        tracing::debug!(%name, "registered script");
        self.scripts.retain(|s| s.name != name);
        self.scripts.push(ScriptEntry {
            name,
            run: Box::new(run),
        });
    }

    /// Script names in sorted order, for the menu
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.scripts.iter().map(|s| s.name.clone()).collect();
        names.sort();
        names
    }

    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }

    /// Execute a script by name against the document
    pub fn execute(&self, name: &str, image: &mut Image) -> Result<(), CoreError> {
        let entry = self
            .scripts
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| CoreError::UnknownScript(name.to_string()))?;
        (entry.run)(image).map_err(|message| CoreError::Script {
            name: name.to_string(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn execute_runs_the_script() {
        let mut registry = ScriptRegistry::new();
        registry.register("add layer", |image| {
            image.add_layer("scripted");
            Ok(())
        });
        let mut image = Image::new("test");
        registry.execute("add layer", &mut image).unwrap();
        assert_eq!(image.layers.len(), 2);
    }

    #[test]
    fn unknown_script_errors() {
        let registry = ScriptRegistry::new();
        let mut image = Image::new("test");
        let err = registry.execute("missing", &mut image).unwrap_err();
        assert!(matches!(err, CoreError::UnknownScript(_)));
    }

    #[test]
    fn failures_carry_the_script_name() {
        let mut registry = ScriptRegistry::new();
        registry.register("boom", |_| Err("exploded".to_string()));
        let mut image = Image::new("test");
        let err = registry.execute("boom", &mut image).unwrap_err();
        assert!(matches!(err, CoreError::Script { .. }));
        assert!(err.to_string().contains("boom"));
    }

    #[test]
    fn names_are_sorted_and_deduplicated() {
        let mut registry = ScriptRegistry::new();
        registry.register("b", |_| Ok(()));
        registry.register("a", |_| Ok(()));
        registry.register("b", |_| Ok(()));
        assert_eq!(registry.names(), ["a", "b"]);
    }
}
