mod json;
mod table;
mod traits;
mod yaml;

pub use json::JsonRenderer;
pub use table::{TableRenderer, write_table};
pub use traits::Renderer;
pub use yaml::YamlRenderer;

use crate::types::OutputFormat;

impl OutputFormat {
    pub fn renderer(&self) -> Box<dyn Renderer> {
        match self {
            OutputFormat::Table => Box::new(TableRenderer),
            OutputFormat::Json => Box::new(JsonRenderer),
            OutputFormat::Yaml => Box::new(YamlRenderer),
        }
    }
}
