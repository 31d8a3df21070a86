//! The `check` use case: resolve config, read inputs, run the checks and build the report.

use anyhow::Context;
use biblint_domain::LintInput;
use biblint_settings::{Overrides, ResolvedConfig};
use biblint_types::{ReportEnvelope, SCHEMA_REPORT_V1, ToolMeta, ids};
use camino::{Utf8Path, Utf8PathBuf};
use time::OffsetDateTime;

use crate::local::LocalDirProbe;

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Bibliography files, merged in this order.
    pub bib_files: &'a [Utf8PathBuf],
    /// Documents to scan for citations and text checks.
    pub tex_files: &'a [Utf8PathBuf],
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
    /// Directory holding local copies for `check-local-copies`.
    pub local_dir: Option<&'a Utf8Path>,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    /// The generated report.
    pub report: ReportEnvelope,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Resolve the config and reject flag combinations that cannot work, before any file is read.
pub fn resolve(input: &CheckInput<'_>) -> anyhow::Result<ResolvedConfig> {
    let cfg = if input.config_text.trim().is_empty() {
        biblint_settings::BiblintConfigV1::default()
    } else {
        biblint_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved = biblint_settings::resolve_config(cfg, input.overrides.clone())
        .context("resolve config")?;

    if resolved.effective.only_cited && input.tex_files.is_empty() {
        anyhow::bail!("only_cited needs at least one document (--tex) to know what is cited");
    }
    if resolved.effective.is_selected(ids::CHECK_LOCAL_COPIES) && input.local_dir.is_none() {
        anyhow::bail!(
            "check '{}' is selected but no local copy directory was given (--local-dir)",
            ids::CHECK_LOCAL_COPIES
        );
    }
    Ok(resolved)
}

/// Run the check use case.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    let resolved = resolve(&input)?;
    tracing::debug!(
        selection = %resolved.selection,
        checks = resolved.effective.selected.len(),
        "resolved check selection"
    );

    let loaded = biblint_bib::load_bibliographies(input.bib_files).context("load bibliographies")?;
    let documents = if input.tex_files.is_empty() {
        None
    } else {
        Some(biblint_bib::load_documents(input.tex_files).context("load documents")?)
    };
    let probe = input.local_dir.map(LocalDirProbe::new);

    let lint_input = LintInput {
        bibliography: &loaded.bibliography,
        citations: documents.as_ref().map(|d| &d.citations),
        documents: documents
            .as_ref()
            .map(|d| d.documents.as_slice())
            .unwrap_or_default(),
        local_copies: probe.as_ref().map(|p| p as &dyn biblint_domain::LocalCopies),
        parse_complaints: &loaded.complaints,
    };

    let domain_report = biblint_domain::evaluate(&lint_input, &resolved.effective);
    let biblint_domain::report::DomainReport {
        complaints,
        mut summary,
    } = domain_report;
    summary.bibliographies_parsed = u32::try_from(loaded.files).unwrap_or(u32::MAX);

    tracing::info!(
        entries = summary.entries_parsed,
        citations = summary.citations_found,
        checks = summary.checks_run,
        suppressed = summary.units_suppressed,
        complaints = summary.complaints_total,
        "lint run finished"
    );

    let report = ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "biblint".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        summary,
        complaints,
    };

    Ok(CheckOutput {
        report,
        resolved_config: resolved,
    })
}

/// Map a report to the process exit code: 0 = clean, 2 = complaints emitted.
pub fn report_exit_code(report: &ReportEnvelope) -> i32 {
    if report.complaints.is_empty() { 0 } else { 2 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    fn write(dir: &Utf8Path, name: &str, text: &str) -> Utf8PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, text).expect("write file");
        path
    }

    fn input<'a>(bib: &'a [Utf8PathBuf], tex: &'a [Utf8PathBuf]) -> CheckInput<'a> {
        CheckInput {
            bib_files: bib,
            tex_files: tex,
            config_text: "",
            overrides: Overrides::default(),
            local_dir: None,
        }
    }

    #[test]
    fn empty_config_uses_defaults() {
        let tmp = tempfile::tempdir().expect("create temp dir");
        let root = Utf8Path::from_path(tmp.path()).expect("utf8 path");
        let bib = vec![write(
            root,
            "refs.bib",
            "@misc{k,\n  title = {Fine},\n  month = jan,\n}\n",
        )];

        let output = run_check(input(&bib, &[])).expect("run_check");
        assert_eq!(output.resolved_config.selection, "DEFAULT");
        assert!(output.resolved_config.effective.honor_suppressions);
        assert_eq!(output.report.schema, SCHEMA_REPORT_V1);
        assert_eq!(output.report.tool.name, "biblint");
        assert_eq!(output.report.summary.bibliographies_parsed, 1);
        assert_eq!(output.report.summary.entries_parsed, 1);
        assert!(output.report.started_at <= output.report.finished_at);
    }

    #[test]
    fn suppressions_hide_complaints_until_disabled() {
        let tmp = tempfile::tempdir().expect("create temp dir");
        let root = Utf8Path::from_path(tmp.path()).expect("utf8 path");
        let bib = vec![write(
            root,
            "refs.bib",
            "% LINT check-isbn printed that way\n@book{k,\n  isbn = {978-3-16-148410-1},\n}\n",
        )];

        let mut run = input(&bib, &[]);
        run.overrides.checks = Some("check-isbn".to_string());
        let output = run_check(run.clone()).expect("run_check");
        assert!(output.report.complaints.is_empty());
        assert_eq!(report_exit_code(&output.report), 0);
        assert_eq!(output.report.summary.units_suppressed, 1);

        run.overrides.no_suppressions = true;
        let output = run_check(run).expect("run_check");
        assert!(
            output
                .report
                .complaints
                .iter()
                .any(|c| c.check() == ids::CHECK_ISBN)
        );
        assert_eq!(report_exit_code(&output.report), 2);
    }

    #[test]
    fn unknown_check_fails_before_reading_files() {
        let missing = vec![Utf8PathBuf::from("/definitely/not/here.bib")];
        let mut run = input(&missing, &[]);
        run.overrides.checks = Some("ALL:-no-such-check".to_string());
        let err = run_check(run).expect_err("unknown check");
        assert!(format!("{err:#}").contains("no-such-check"));
    }

    #[test]
    fn contradictory_flags_are_rejected() {
        let bib = vec![Utf8PathBuf::from("refs.bib")];

        let mut run = input(&bib, &[]);
        run.overrides.only_cited = true;
        let err = resolve(&run).expect_err("only_cited without documents");
        assert!(err.to_string().contains("--tex"));

        let mut run = input(&bib, &[]);
        run.overrides.checks = Some("DEFAULT:+check-local-copies".to_string());
        let err = resolve(&run).expect_err("local copies without dir");
        assert!(err.to_string().contains("--local-dir"));
    }

    #[test]
    fn documents_feed_citation_checks_and_local_copies() {
        let tmp = tempfile::tempdir().expect("create temp dir");
        let root = Utf8Path::from_path(tmp.path()).expect("utf8 path");
        let bib = vec![write(
            root,
            "refs.bib",
            "@misc{cited,\n  title = {A},\n}\n@misc{unused,\n  title = {B},\n}\n",
        )];
        let tex = vec![write(root, "paper.tex", "See \\cite{cited,ghost}.\n")];
        std::fs::write(root.join("cited.pdf"), b"%PDF").expect("write pdf");

        let mut run = input(&bib, &tex);
        run.overrides.checks =
            Some("uncited-citations:undefined-citations:check-local-copies".to_string());
        run.local_dir = Some(root);
        let output = run_check(run).expect("run_check");

        let found: Vec<(&str, Option<&str>)> = output
            .report
            .complaints
            .iter()
            .map(|c| (c.check(), c.key()))
            .collect();
        assert_eq!(output.report.summary.documents_scanned, 1);
        assert_eq!(output.report.summary.citations_found, 2);
        assert!(found.contains(&(ids::CHECK_UNCITED_CITATIONS, Some("unused"))));
        assert!(found.contains(&(ids::CHECK_UNDEFINED_CITATIONS, Some("ghost"))));
        assert!(found.contains(&(ids::CHECK_LOCAL_COPIES, Some("unused"))));
        assert!(!found.contains(&(ids::CHECK_LOCAL_COPIES, Some("cited"))));
    }

    #[test]
    fn config_file_values_apply_and_overrides_win() {
        let tmp = tempfile::tempdir().expect("create temp dir");
        let root = Utf8Path::from_path(tmp.path()).expect("utf8 path");
        let bib = vec![write(
            root,
            "refs.bib",
            "@misc{a,\n  month = {March},\n}\n@misc{b,\n  month = {April},\n}\n",
        )];

        let mut run = input(&bib, &[]);
        run.config_text = "checks = \"misformatted-month\"\nmax_complaints = 1\n";
        let output = run_check(run.clone()).expect("run_check");
        assert_eq!(output.report.complaints.len(), 1);
        assert_eq!(output.report.summary.complaints_total, 2);
        assert!(output.report.summary.truncated_reason.is_some());

        run.overrides.max_complaints = Some(10);
        let output = run_check(run).expect("run_check");
        assert_eq!(output.report.complaints.len(), 2);
    }
}
