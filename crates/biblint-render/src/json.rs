use biblint_types::ReportEnvelope;

/// Pretty-printed JSON for the full report envelope, newline terminated.
pub fn render_json(report: &ReportEnvelope) -> Result<String, serde_json::Error> {
    let mut out = serde_json::to_string_pretty(report)?;
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use biblint_types::{Complaint, LintSummary, Location, SCHEMA_REPORT_V1, ToolMeta};
    use time::macros::datetime;

    #[test]
    fn envelope_shape_is_stable() {
        let report = ReportEnvelope {
            schema: SCHEMA_REPORT_V1.to_string(),
            tool: ToolMeta {
                name: "biblint".to_string(),
                version: "0.1.0".to_string(),
            },
            started_at: datetime!(2026-01-02 03:04:05 UTC),
            finished_at: datetime!(2026-01-02 03:04:06 UTC),
            summary: LintSummary {
                bibliographies_parsed: 1,
                entries_parsed: 2,
                checks_run: 17,
                complaints_total: 1,
                complaints_emitted: 1,
                ..LintSummary::default()
            },
            complaints: vec![
                Complaint::new("check-isbn", Location::new("refs.bib", 4), "bad checksum")
                    .with_key("k"),
            ],
        };

        let out = render_json(&report).expect("render json");
        assert!(out.ends_with("}\n"));
        insta::assert_snapshot!(out, @r#"
        {
          "schema": "biblint.report.v1",
          "tool": {
            "name": "biblint",
            "version": "0.1.0"
          },
          "started_at": "2026-01-02T03:04:05Z",
          "finished_at": "2026-01-02T03:04:06Z",
          "summary": {
            "bibliographies_parsed": 1,
            "entries_parsed": 2,
            "documents_scanned": 0,
            "citations_found": 0,
            "checks_run": 17,
            "units_suppressed": 0,
            "complaints_total": 1,
            "complaints_emitted": 1
          },
          "complaints": [
            {
              "location": {
                "path": "refs.bib",
                "line": 4
              },
              "key": "k",
              "check": "check-isbn",
              "message": "bad checksum"
            }
          ]
        }
        "#);
    }
}
