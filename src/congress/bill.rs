// Bill record extracted from a Congress.gov XML document

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Fields extracted from a bill's XML record by descendant lookup.
/// Absent fields become empty; no schema validation beyond well-formedness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillRecord {
    pub title: String,
    pub text: String,
    pub sponsor: String,
    pub cosponsors: Vec<String>,
}

impl BillRecord {
    /// Parse a bill XML document and pull out title, text, sponsor and the
    /// cosponsor name list. Malformed XML propagates an error.
    pub fn from_xml(xml: &str) -> Result<Self> {
        let doc = roxmltree::Document::parse(xml).context("Failed to parse bill XML")?;

        let title = first_text(&doc, "title").trim().to_string();
        let text = first_text(&doc, "text");
        let sponsor = first_text(&doc, "sponsor");

        let cosponsors = doc
            .descendants()
            .filter(|node| node.has_tag_name("cosponsors"))
            .flat_map(|node| node.children())
            .filter(|node| node.has_tag_name("item"))
            .filter_map(|node| node.text())
            .map(|name| name.to_string())
            .collect();

        Ok(Self {
            title,
            text,
            sponsor,
            cosponsors,
        })
    }
}

/// Text of the first descendant element with the given tag, or empty
fn first_text(doc: &roxmltree::Document, tag: &str) -> String {
    doc.root()
        .descendants()
        .find(|node| node.has_tag_name(tag))
        .and_then(|node| node.text())
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BILL_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<api-root>
  <bill>
    <title>  Postal Service Reform Act of 2022  </title>
    <text>To provide stability to the Postal Service.</text>
    <sponsor>Rep. Maloney, Carolyn B.</sponsor>
    <cosponsors>
      <item>Rep. Comer, James</item>
      <item>Rep. Connolly, Gerald E.</item>
    </cosponsors>
  </bill>
</api-root>"#;

    #[test]
    fn test_extracts_all_fields() {
        let bill = BillRecord::from_xml(BILL_XML).unwrap();
        assert_eq!(bill.title, "Postal Service Reform Act of 2022");
        assert_eq!(bill.text, "To provide stability to the Postal Service.");
        assert_eq!(bill.sponsor, "Rep. Maloney, Carolyn B.");
        assert_eq!(
            bill.cosponsors,
            vec!["Rep. Comer, James", "Rep. Connolly, Gerald E."]
        );
    }

    #[test]
    fn test_missing_fields_become_empty() {
        let bill = BillRecord::from_xml("<bill><title>Short Title</title></bill>").unwrap();
        assert_eq!(bill.title, "Short Title");
        assert_eq!(bill.text, "");
        assert_eq!(bill.sponsor, "");
        assert!(bill.cosponsors.is_empty());
    }

    #[test]
    fn test_title_is_trimmed() {
        let bill = BillRecord::from_xml("<bill><title>\n  Act  \n</title></bill>").unwrap();
        assert_eq!(bill.title, "Act");
    }

    #[test]
    fn test_malformed_xml_errors() {
        assert!(BillRecord::from_xml("<bill><title>broken").is_err());
        assert!(BillRecord::from_xml("not xml at all").is_err());
    }
}
