//! Describe command implementation
//!
//! Prints the documented fields of the request and outcome shapes, as a
//! table or as JSON for tooling.

use super::EXIT_SUCCESS;
use crate::domain::schema::{OUTCOME_FIELDS, REQUEST_FIELDS};
use crate::domain::FieldDoc;
use clap::Args;
use serde::Serialize;

/// Arguments for the describe command
#[derive(Args, Debug)]
pub struct DescribeArgs {
    /// Print the field documentation as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct Description {
    request: &'static [FieldDoc],
    outcome: &'static [FieldDoc],
}

impl DescribeArgs {
    /// Execute the describe command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        println!("{}", self.render()?);
        Ok(EXIT_SUCCESS)
    }

    fn render(&self) -> anyhow::Result<String> {
        if self.json {
            let description = Description {
                request: REQUEST_FIELDS,
                outcome: OUTCOME_FIELDS,
            };
            return Ok(serde_json::to_string_pretty(&description)?);
        }

        let mut out = String::new();
        render_table(&mut out, "Conversion request", REQUEST_FIELDS);
        out.push('\n');
        render_table(&mut out, "Conversion outcome", OUTCOME_FIELDS);
        Ok(out)
    }
}

fn render_table(out: &mut String, title: &str, fields: &[FieldDoc]) {
    let width = fields.iter().map(|f| f.name.len()).max().unwrap_or(0);

    out.push_str(title);
    out.push('\n');
    for field in fields {
        let marker = if field.required { "*" } else { " " };
        out.push_str(&format!(
            "  {marker} {:<width$}  {}: {}\n",
            field.name, field.label, field.description
        ));
    }
}
