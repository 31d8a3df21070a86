use crate::checks::{self, CheckContext, CheckImpl, LocalCopies};
use crate::error::CheckError;
use crate::model::{Bibliography, Citations, Document};
use crate::policy::EffectiveConfig;
use crate::report::DomainReport;
use biblint_types::{CATALOG, Complaint, Granularity, LintSummary, Location, ids};

/// Everything a lint run looks at. Parsing happens elsewhere.
#[derive(Clone, Copy)]
pub struct LintInput<'a> {
    pub bibliography: &'a Bibliography,
    /// `None` when no documents were given; citation checks then do nothing.
    pub citations: Option<&'a Citations>,
    pub documents: &'a [Document],
    pub local_copies: Option<&'a dyn LocalCopies>,
    /// Complaints produced while parsing, merged into the sorted output.
    pub parse_complaints: &'a [Complaint],
}

impl<'a> LintInput<'a> {
    pub fn new(bibliography: &'a Bibliography) -> Self {
        Self {
            bibliography,
            citations: None,
            documents: &[],
            local_copies: None,
            parse_complaints: &[],
        }
    }
}

#[derive(Default)]
struct RunStats {
    checks_run: u32,
    units_suppressed: u32,
}

pub fn evaluate(input: &LintInput<'_>, cfg: &EffectiveConfig) -> DomainReport {
    let ctx = CheckContext {
        bibliography: input.bibliography,
        citations: input.citations,
        local_copies: input.local_copies,
        only_cited: cfg.only_cited,
    };

    let mut complaints: Vec<Complaint> = input.parse_complaints.to_vec();
    let mut stats = RunStats::default();

    for descriptor in CATALOG.iter().filter(|d| cfg.is_selected(d.name)) {
        let Some(check) = checks::implementation(descriptor.name) else {
            tracing::warn!(check = descriptor.name, "no implementation registered");
            continue;
        };
        stats.checks_run += 1;
        let before = complaints.len();
        match check {
            CheckImpl::PerEntry(f) => {
                run_per_entry(descriptor.name, *f, &ctx, cfg, &mut stats, &mut complaints)
            }
            CheckImpl::Collection(f) => {
                run_collection(descriptor.name, *f, &ctx, cfg, &mut stats, &mut complaints)
            }
            CheckImpl::Window(make) => {
                let words = match descriptor.granularity {
                    Granularity::Window(n) => n,
                    _ => 1,
                };
                run_windows(descriptor.name, *make, words, input.documents, &mut complaints)
            }
        }
        tracing::debug!(
            check = descriptor.name,
            complaints = complaints.len() - before,
            "check finished"
        );
    }

    // Deterministic ordering before truncation.
    complaints.sort();

    let total = complaints.len() as u32;
    let mut truncated_reason = None;
    if complaints.len() > cfg.max_complaints {
        complaints.truncate(cfg.max_complaints);
        truncated_reason = Some(format!(
            "complaints truncated to max_complaints={}",
            cfg.max_complaints
        ));
    }

    let summary = LintSummary {
        entries_parsed: input.bibliography.len() as u32,
        documents_scanned: input.documents.len() as u32,
        citations_found: input.citations.map_or(0, |c| c.occurrences() as u32),
        checks_run: stats.checks_run,
        units_suppressed: stats.units_suppressed,
        complaints_total: total,
        complaints_emitted: complaints.len() as u32,
        truncated_reason,
        ..LintSummary::default()
    };

    DomainReport {
        complaints,
        summary,
    }
}

fn internal_error(check: &str, location: Location, key: Option<&str>, err: &CheckError) -> Complaint {
    let complaint = Complaint::new(
        ids::CHECK_INTERNAL_ERROR,
        location,
        format!("Check \"{check}\" failed: {err}"),
    );
    tracing::warn!(check, location = %complaint.location(), error = %err, "check failed on unit");
    match key {
        Some(key) => complaint.with_key(key),
        None => complaint,
    }
}

fn run_per_entry(
    name: &str,
    check: checks::EntryCheck,
    ctx: &CheckContext<'_>,
    cfg: &EffectiveConfig,
    stats: &mut RunStats,
    out: &mut Vec<Complaint>,
) {
    for entry in ctx.entries() {
        if cfg.honor_suppressions && entry.is_suppressed(name) {
            stats.units_suppressed += 1;
            continue;
        }
        let mut unit = Vec::new();
        match check(entry, ctx, &mut unit) {
            Ok(()) => out.append(&mut unit),
            Err(err) => out.push(internal_error(
                name,
                entry.location(),
                Some(entry.key()),
                &err,
            )),
        }
    }
}

fn run_collection(
    name: &str,
    check: checks::CollectionCheck,
    ctx: &CheckContext<'_>,
    cfg: &EffectiveConfig,
    stats: &mut RunStats,
    out: &mut Vec<Complaint>,
) {
    let mut unit = Vec::new();
    if let Err(err) = check(ctx, &mut unit) {
        let location = ctx
            .bibliography
            .entries()
            .first()
            .map(|e| e.location())
            .unwrap_or_else(|| Location::new("-", 0));
        out.push(internal_error(name, location, None, &err));
        return;
    }

    for complaint in unit {
        let suppressed = cfg.honor_suppressions
            && ctx
                .bibliography
                .entry_at(complaint.location())
                .is_some_and(|e| e.is_suppressed(name));
        if suppressed {
            stats.units_suppressed += 1;
        } else {
            out.push(complaint);
        }
    }
}

fn run_windows(
    name: &str,
    make: fn() -> Box<dyn checks::WindowCheck>,
    words: usize,
    documents: &[Document],
    out: &mut Vec<Complaint>,
) {
    let words = words.max(1);
    for document in documents {
        let mut check = make();
        for window in document.words.windows(words) {
            let mut unit = Vec::new();
            if let Err(err) = check.check_window(document, window, &mut unit) {
                let line = window.first().map_or(0, |w| w.line);
                out.push(internal_error(
                    name,
                    Location::new(document.path.clone(), line),
                    None,
                    &err,
                ));
                continue;
            }
            out.append(&mut unit);
        }
    }
}
