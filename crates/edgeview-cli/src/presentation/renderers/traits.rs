use crate::Result;
use edgeview_types::ResourceRecord;
use std::io::Write;

pub trait Renderer {
    fn render(&self, records: Vec<ResourceRecord>, out: &mut dyn Write) -> Result<()>;
}
