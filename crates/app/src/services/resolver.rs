//! Area resolver — maps an area identifier to an area registry entry.
//!
//! An identifier that does not resolve is not fatal. The resolver reports a
//! single `invalid-area` issue keyed by the raw identifier and lets the
//! caller carry on with an "unknown" area.

use autoarea_domain::DOMAIN;
use autoarea_domain::area::Area;
use autoarea_domain::id::AreaId;
use autoarea_domain::issue::{ISSUE_TYPE_INVALID_AREA, Issue, IssueKey, IssueSeverity};
use tracing::{error, warn};

use crate::ports::{AreaRegistry, HostContext, IssueReporter};

/// Text standing in for an absent area identifier in issue keys and data.
pub const ABSENT_AREA_ID: &str = "None";

/// Resolve `area_id` against the host's area registry.
///
/// Returns `None` when the identifier is absent, empty, or unknown to the
/// registry, after reporting [`invalid_area_issue`] for it.
#[tracing::instrument(skip(host))]
pub fn resolve_area<H: HostContext>(host: &H, area_id: Option<&AreaId>) -> Option<Area> {
    let area = match area_id {
        Some(id) if !id.is_empty() => {
            let area = host.areas().get_area(id);
            if area.is_none() {
                error!("area is not known to the area registry");
            }
            area
        }
        _ => {
            warn!("no area identifier configured");
            None
        }
    };

    if area.is_none() {
        host.issues().create_issue(invalid_area_issue(area_id));
    }
    area
}

/// Issue describing an area identifier that does not resolve.
///
/// The same identifier always yields the same key, which is what lets the
/// issue registry deduplicate repeated reports.
#[must_use]
pub fn invalid_area_issue(area_id: Option<&AreaId>) -> Issue {
    let subject = area_id.map_or(ABSENT_AREA_ID, AreaId::as_str);

    let mut data = serde_json::Map::new();
    data.insert("area_id".to_string(), subject.into());

    Issue {
        domain: DOMAIN.to_string(),
        key: IssueKey::new(ISSUE_TYPE_INVALID_AREA, subject),
        is_fixable: true,
        severity: IssueSeverity::Error,
        translation_key: ISSUE_TYPE_INVALID_AREA.to_string(),
        data,
    }
}
