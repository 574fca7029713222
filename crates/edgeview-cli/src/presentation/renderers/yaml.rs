use std::io::Write;

use edgeview_engine::build_list;
use edgeview_types::ResourceRecord;

use super::traits::Renderer;
use crate::Result;

/// Same `v1` `List` as [`super::JsonRenderer`], in YAML.
pub struct YamlRenderer;

impl Renderer for YamlRenderer {
    fn render(&self, records: Vec<ResourceRecord>, out: &mut dyn Write) -> Result<()> {
        let list = build_list(&records)?;
        let document = serde_yaml::to_string(&list)?;

        out.write_all(document.as_bytes())?;
        Ok(())
    }
}
