//! Result table for a submitted record.
use std::fmt;

use serde::Serialize;

use crate::record::SubmissionRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRow {
    pub header: String,
    pub value: String,
}

/// Two-column table, one row per record entry in record order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResultTable {
    rows: Vec<ResultRow>,
}

impl ResultTable {
    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub fn render(record: &SubmissionRecord) -> ResultTable {
    ResultTable {
        rows: record
            .iter()
            .map(|(header, value)| ResultRow {
                header: header.to_string(),
                value: value.to_string(),
            })
            .collect(),
    }
}

/// HTML markup; cell text is escaped.
impl fmt::Display for ResultTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(r#"<table class="table-wrapper"><tbody>"#)?;
        for row in &self.rows {
            f.write_str("<tr><td>")?;
            write_escaped(f, &row.header)?;
            f.write_str("</td><td>")?;
            write_escaped(f, &row.value)?;
            f.write_str("</td></tr>")?;
        }
        f.write_str("</tbody></table>")
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    for ch in text.chars() {
        match ch {
            '&' => f.write_str("&amp;")?,
            '<' => f.write_str("&lt;")?,
            '>' => f.write_str("&gt;")?,
            '"' => f.write_str("&quot;")?,
            '\'' => f.write_str("&#39;")?,
            _ => write!(f, "{ch}")?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_follow_record_order() {
        let record: SubmissionRecord = [("Name", "Alice"), ("Agree", "y")].into_iter().collect();
        let table = render(&record);
        let headers: Vec<_> = table.rows().iter().map(|r| r.header.as_str()).collect();
        assert_eq!(headers, vec!["Name", "Agree"]);
    }

    #[test]
    fn markup_escapes_cells() {
        let record: SubmissionRecord = [("<b>", "a & b")].into_iter().collect();
        assert_eq!(
            render(&record).to_string(),
            r#"<table class="table-wrapper"><tbody><tr><td>&lt;b&gt;</td><td>a &amp; b</td></tr></tbody></table>"#
        );
    }

    #[test]
    fn empty_record_renders_empty_body() {
        let table = render(&SubmissionRecord::new());
        assert!(table.is_empty());
        assert_eq!(
            table.to_string(),
            r#"<table class="table-wrapper"><tbody></tbody></table>"#
        );
    }
}
