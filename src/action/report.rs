//! Markdown rendering of a check result

use crate::version::quarter::QuarterYear;
use crate::version::registry::{EocpRecord, ReleaseLine};
use crate::version::urgency::UrgencyTier;

/// A rendered report, ready to be posted as a comment or issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Issue title, unused for comments
    pub title: String,
    pub body: String,
}

/// Render the report for one check
///
/// The header carries the quarter the check ran in. The EOCP shown is the
/// record's raw registry value, never a re-derived one.
pub fn format_report(
    current: QuarterYear,
    record: &EocpRecord,
    tier: UrgencyTier,
    release_line: Option<&ReleaseLine>,
) -> Report {
    let title = format!(
        "SAPUI5 {}: end of cloud provisioning {}",
        record.version, record.eocp
    );

    let mut lines = vec![
        format!("## SAPUI5 EOCP check ({})", current),
        String::new(),
        format!("UI5 version used: {}", record.version),
        format!("End of cloud provisioning: {}", record.eocp),
    ];

    if let Some(support) = release_line.and_then(|line| line.support.as_deref()) {
        let lts = if release_line.is_some_and(|line| line.lts) {
            " (long-term maintenance)"
        } else {
            ""
        };
        lines.push(format!("Support: {}{}", support, lts));
    }

    lines.push(String::new());
    lines.push(format!("> {}", tier.message()));

    Report {
        title,
        body: lines.join("\n"),
    }
}
