use std::io::Write;

use edgeview_engine::build_list;
use edgeview_types::ResourceRecord;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use super::traits::Renderer;
use crate::Result;

/// Raw records as a tab-indented `v1` `List`.
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, records: Vec<ResourceRecord>, out: &mut dyn Write) -> Result<()> {
        let list = build_list(&records)?;

        let mut buf = Vec::new();
        let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"\t"));
        list.serialize(&mut serializer)?;
        buf.push(b'\n');

        out.write_all(&buf)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(records: Vec<ResourceRecord>) -> crate::Result<String> {
        let mut buf = Vec::new();
        JsonRenderer.render(records, &mut buf)?;
        Ok(String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_empty_list_document() {
        let output = render(Vec::new()).unwrap();
        let expected = "{\n\t\"apiVersion\": \"v1\",\n\t\"items\": [],\n\t\"kind\": \"List\",\n\t\"metadata\": {\n\t\t\"resourceVersion\": \"\",\n\t\t\"selfLink\": \"\"\n\t}\n}\n";
        assert_eq!(output, expected);
        assert!(output.ends_with("}\n"));
    }

    #[test]
    fn test_item_count_and_kinds() {
        let records = vec![
            ResourceRecord::new("default/pod/a", "pod", r#"{"metadata":{"name":"a"}}"#),
            ResourceRecord::new("default/configmap/b", "configmap", r#"{"data":{}}"#),
        ];
        let output = render(records).unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        let items = value["items"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["kind"], "pod");
        assert_eq!(items[1]["kind"], "configmap");
        assert!(items.iter().all(|item| item["apiVersion"] == "v1"));
    }

    #[test]
    fn test_decode_failure_writes_nothing() {
        let records = vec![
            ResourceRecord::new("default/pod/a", "pod", "{}"),
            ResourceRecord::new("default/pod/b", "pod", "[]"),
        ];
        let mut buf = Vec::new();
        let err = JsonRenderer.render(records, &mut buf).unwrap_err();
        assert!(matches!(err, crate::Error::Decode(_)));
        assert!(buf.is_empty());
    }
}
