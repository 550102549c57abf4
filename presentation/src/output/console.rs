//! Console output formatters for registry results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use serde::Serialize;
use serde_json::Value;
use toolforge_domain::{FieldSchema, InvocationResult, OutputFormat, ToolFailure, ToolListing, ToolSchema};

/// Formatter for the configured output format
pub fn formatter_for(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Pretty => Box::new(ConsoleFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

/// Turn off ANSI colors for the rest of the process
pub fn disable_color() {
    colored::control::set_override(false);
}

/// Formats registry output for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the tool listing, one section per category
    pub fn format_listing(listing: &ToolListing) -> String {
        let mut output = String::new();
        output.push_str(&Self::header("Registered Tools"));
        output.push('\n');

        for category in &listing.categories {
            output.push_str(&Self::section_header(&format!(
                "{} ({})",
                category.category, category.count
            )));
            for tool in &category.tools {
                output.push_str(&format!(
                    "  {} {}\n",
                    tool.tool_name.yellow().bold(),
                    format!("[{}, {} fields]", tool.model, tool.field_count).dimmed()
                ));
                if !tool.description.is_empty() {
                    output.push_str(&format!("      {}\n", tool.description));
                }
            }
        }

        output.push_str(&format!(
            "\n{} {}\n",
            "Total tools:".cyan().bold(),
            listing.total_tools
        ));
        output.push_str(&Self::footer());
        output
    }

    /// Format a tool description: documentation followed by field details
    pub fn format_schema(schema: &ToolSchema) -> String {
        let mut output = String::new();
        output.push_str(&Self::header(&schema.tool_name));
        output.push('\n');

        output.push_str(&format!("{} {}\n", "Model:".cyan().bold(), schema.model));
        output.push_str(&format!("{} {}\n", "Category:".cyan().bold(), schema.category));
        output.push_str(&format!(
            "{} {}\n",
            "Required:".cyan().bold(),
            Self::name_list(&schema.required_fields)
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Optional:".cyan().bold(),
            Self::name_list(&schema.optional_fields)
        ));

        output.push_str(&Self::section_header("Documentation"));
        output.push_str(&Self::indent(&schema.documentation, "  "));
        output.push('\n');

        if !schema.fields.is_empty() {
            output.push_str(&Self::section_header("Fields"));
            for field in &schema.fields {
                output.push_str(&Self::field_line(field));
            }
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format an invocation outcome
    pub fn format_result(result: &InvocationResult) -> String {
        match result {
            InvocationResult::Ok(value) => format!(
                "{}\n{}\n",
                "OK".green().bold(),
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            ),
            InvocationResult::Fail(failure) => Self::format_failure(failure),
        }
    }

    fn format_failure(failure: &ToolFailure) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "{} {} {}\n",
            "FAILED".red().bold(),
            format!("[{}]", failure.kind).red(),
            failure.message
        ));
        output.push_str(&format!("{} {}\n", "Tool:".cyan().bold(), failure.tool));

        if !failure.details.is_empty() {
            output.push_str(&format!("\n{}\n", "Details:".yellow().bold()));
            for detail in &failure.details {
                output.push_str(&format!("  * {}\n", detail));
            }
        }

        if let Some(model) = &failure.model {
            output.push_str(&format!("\n{} {}\n", "Model:".cyan().bold(), model));
            output.push_str(&format!(
                "{} {}\n",
                "Required:".cyan().bold(),
                Self::name_list(&failure.required_fields)
            ));
            output.push_str(&format!(
                "{} {}\n",
                "Optional:".cyan().bold(),
                Self::name_list(&failure.optional_fields)
            ));
            output.push_str(&format!(
                "{} {}\n",
                "Provided:".cyan().bold(),
                Self::name_list(&failure.provided_fields)
            ));
        }

        if !failure.field_schemas.is_empty() {
            output.push_str(&Self::section_header("Fields"));
            for field in &failure.field_schemas {
                output.push_str(&Self::field_line(field));
            }
        }

        output
    }

    /// Format exported JSON Schema documents (always JSON)
    pub fn format_json_schema(schemas: &[Value]) -> String {
        pretty_json(&schemas)
    }

    fn field_line(field: &FieldSchema) -> String {
        let marker = if field.required {
            "required".red().to_string()
        } else {
            "optional".dimmed().to_string()
        };
        let mut line = format!("  {} ({}, {})", field.name.bold(), field.type_summary, marker);
        if !field.description.is_empty() {
            line.push_str(&format!(" - {}", field.description));
        }
        if let Some(members) = &field.enum_values {
            let names: Vec<&str> = members.iter().map(|m| m.name.as_str()).collect();
            line.push_str(&format!("\n      {} {}", "values:".dimmed(), names.join(", ")));
        }
        if let Some(default) = field.default.as_ref().filter(|d| !d.is_null()) {
            line.push_str(&format!("\n      {} {}", "default:".dimmed(), default));
        }
        line.push('\n');
        line
    }

    fn name_list(names: &[String]) -> String {
        if names.is_empty() {
            "(none)".dimmed().to_string()
        } else {
            names.join(", ")
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_listing(&self, listing: &ToolListing) -> String {
        Self::format_listing(listing)
    }

    fn format_schema(&self, schema: &ToolSchema) -> String {
        Self::format_schema(schema)
    }

    fn format_result(&self, result: &InvocationResult) -> String {
        Self::format_result(result)
    }

    fn format_json_schema(&self, schemas: &[Value]) -> String {
        Self::format_json_schema(schemas)
    }
}

/// Formats registry output as pretty-printed JSON
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_listing(&self, listing: &ToolListing) -> String {
        pretty_json(listing)
    }

    fn format_schema(&self, schema: &ToolSchema) -> String {
        pretty_json(schema)
    }

    fn format_result(&self, result: &InvocationResult) -> String {
        pretty_json(result)
    }

    fn format_json_schema(&self, schemas: &[Value]) -> String {
        pretty_json(&schemas)
    }
}

fn pretty_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}
