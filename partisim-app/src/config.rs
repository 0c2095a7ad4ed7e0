use anyhow::{Context, Result};
use partisim_schemas::file_formats::ModelFile;
use std::fs;
use std::path::Path;

/// Loads a model YAML document from disk.
pub fn load_model(path: &Path) -> Result<ModelFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read model file {:?}", path))?;
    let model: ModelFile = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse YAML from {:?}", path))?;
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use partisim_schemas::model_spec::SpeciesSpec;

    const SAMPLE: &str = r#"
schema_version: "1"
model_id: enzyme_demo
species:
  - name: S
    state: soln
    difc: 3.0
  - name: E
    state: front
    color: red
solution_fills:
  - species: S
    count: 1000
reactions:
  - name: r1
    reactants:
      - species: E
        state: front
      - species: S
        state: bsoln
    products: []
    rate: 0.001
"#;

    #[test]
    fn sample_model_parses() {
        let model: ModelFile = serde_yaml::from_str(SAMPLE).unwrap();
        assert_eq!(model.model_id.as_deref(), Some("enzyme_demo"));
        assert_eq!(model.species.len(), 2);
        assert_eq!(
            model.species[0],
            SpeciesSpec {
                difc: 3.0,
                ..SpeciesSpec::named("S")
            }
        );
        assert_eq!(model.species[1].state, "front");
        assert_eq!(model.solution_fills[0].count, 1000);
        assert_eq!(model.reactions[0].reactants.len(), 2);
        assert!(model.reactions[0].placement.is_none());
    }
}
