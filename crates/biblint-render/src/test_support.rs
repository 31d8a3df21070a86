use crate::{RenderableComplaint, RenderableData, RenderableReport};

pub fn sample_report() -> RenderableReport {
    RenderableReport {
        complaints: vec![
            RenderableComplaint {
                path: "refs.bib".to_string(),
                line: 3,
                key: Some("knuth84".to_string()),
                check: "misformatted-month".to_string(),
                message: "Month is not a three-letter abbreviation: {March}".to_string(),
            },
            RenderableComplaint {
                path: "refs.bib".to_string(),
                line: 12,
                key: None,
                check: "parse-error".to_string(),
                message: "Closing brace outside of any entry".to_string(),
            },
            RenderableComplaint {
                path: "paper.tex".to_string(),
                line: 7,
                key: None,
                check: "separated-words".to_string(),
                message: "two line\nmessage".to_string(),
            },
        ],
        data: RenderableData {
            complaints_emitted: 3,
            complaints_total: 3,
            truncated_reason: None,
        },
    }
}
