//! The `explain` and `list-checks` use cases: catalog lookups for the terminal.

use biblint_types::{CheckDescriptor, Domain, Granularity, catalog};

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    /// Found the check.
    Found(&'static CheckDescriptor),
    /// Unknown name; includes every check name.
    NotFound {
        identifier: String,
        available: Vec<&'static str>,
    },
}

/// Look up one check by name, ignoring case.
pub fn run_explain(identifier: &str) -> ExplainOutput {
    match catalog::lookup_check(&identifier.to_ascii_lowercase()) {
        Some(descriptor) => ExplainOutput::Found(descriptor),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available: catalog::all_check_names().collect(),
        },
    }
}

fn granularity(g: Granularity) -> String {
    match g {
        Granularity::PerEntry => "per entry".to_string(),
        Granularity::Collection => "whole bibliography".to_string(),
        Granularity::Window(n) => format!("windows of {n} words"),
    }
}

/// Format one check for terminal display.
pub fn format_explanation(descriptor: &CheckDescriptor) -> String {
    let mut out = String::new();

    out.push_str(descriptor.name);
    out.push('\n');
    out.push_str(&"=".repeat(descriptor.name.len()));
    out.push_str("\n\n");
    out.push_str(descriptor.description);
    out.push_str("\n\n");
    out.push_str(&format!("Domain:      {}\n", descriptor.domain.as_str()));
    out.push_str(&format!(
        "Runs on:     {}\n",
        granularity(descriptor.granularity)
    ));
    out.push_str(&format!(
        "Default:     {}\n",
        if descriptor.default_enabled {
            "enabled"
        } else {
            "disabled"
        }
    ));
    out.push_str(&format!(
        "Suppress:    % LINT {} <reason>\n",
        descriptor.name
    ));

    out
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(identifier: &str, available: &[&'static str]) -> String {
    let mut out = String::new();

    out.push_str(&format!("Unknown check: {}\n\n", identifier));
    out.push_str("Available checks:\n");
    for name in available {
        out.push_str(&format!("  - {}\n", name));
    }

    out
}

/// The `list-checks` table: every check grouped by domain, `*` marking defaults.
pub fn list_checks() -> String {
    let width = catalog::all_check_names().map(str::len).max().unwrap_or(0);
    let mut out = String::new();

    for (domain, heading) in [
        (Domain::Bib, "Bibliography checks"),
        (Domain::Tex, "Document checks"),
    ] {
        out.push_str(heading);
        out.push_str(":\n");
        for d in catalog::checks_for_domain(domain) {
            let summary = d.description.split(". ").next().unwrap_or(d.description);
            let summary = summary.trim_end_matches('.');
            out.push_str(&format!(
                "  {} {:<width$}  {}\n",
                if d.default_enabled { "*" } else { " " },
                d.name,
                summary,
            ));
        }
        out.push('\n');
    }
    out.push_str("* enabled by DEFAULT. Groups: ALL, DEFAULT, BIB, TEX.\n");
    out.push_str("Select with --checks, e.g. --checks 'DEFAULT:-misformatted-month:+repeated-words'.\n");

    out
}
