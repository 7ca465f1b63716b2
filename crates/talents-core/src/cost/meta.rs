//! # Meta-Quality Cost
//!
//! Net point cost of the selected Sources, Permissions and Intrinsics.
//!
//! ## Free Source Waiver
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  custom archetype, sources in selection order:                          │
//! │                                                                         │
//! │    unknown (-5)        ──► charged   (not positive, never waived)       │
//! │    technological (+5)  ──► WAIVED    (first strictly positive)          │
//! │    psi_source (+5)     ──► charged   (waiver already used)              │
//! │                                                                         │
//! │  Permissions and Intrinsics are always charged.                         │
//! │  Predefined archetypes never get the waiver here.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, trace, warn};

use crate::catalog::meta_qualities::{meta_quality, MetaQualityKind};
use crate::points::Points;
use crate::types::{BasicInfo, MetaQualityConfig};

/// Resolves one selected id, or `None` (logged) when the catalog lacks it.
fn selected_cost(
    kind: MetaQualityKind,
    id: &str,
    config: Option<&MetaQualityConfig>,
    info: &BasicInfo,
) -> Option<Points> {
    match meta_quality(kind, id) {
        Some(definition) => Some(definition.resolve_cost(config, info)),
        None => {
            warn!(%kind, id, "Selected meta-quality is not in the catalog, costing 0");
            None
        }
    }
}

/// Net cost of every selected meta-quality.
///
/// Sources are priced without configuration. Permissions and Intrinsics are
/// priced with the configuration stored under their own id.
///
/// ## Example
/// ```rust
/// use talents_core::cost::meta_quality_point_cost;
/// use talents_core::types::BasicInfo;
///
/// let info = BasicInfo {
///     sources: vec!["technological".into(), "psi_source".into()],
///     ..BasicInfo::default()
/// };
/// // custom archetype: the first +5 source is free
/// assert_eq!(meta_quality_point_cost(&info).value(), 5);
/// ```
pub fn meta_quality_point_cost(info: &BasicInfo) -> Points {
    let mut total = Points::zero();
    let mut waiver_available = info.is_custom_archetype();

    for id in &info.sources {
        let Some(cost) = selected_cost(MetaQualityKind::Source, id, None, info) else {
            continue;
        };

        if waiver_available && cost.is_positive() {
            waiver_available = false;
            debug!(source = %id, %cost, "First positive-cost source is free for custom archetype");
            continue;
        }

        total += cost;
    }

    for id in &info.permissions {
        let config = info.config_for(id);
        total += selected_cost(MetaQualityKind::Permission, id, config, info).unwrap_or_default();
    }

    for id in &info.intrinsics {
        let config = info.config_for(id);
        total += selected_cost(MetaQualityKind::Intrinsic, id, config, info).unwrap_or_default();
    }

    trace!(archetype = %info.archetype_id, %total, "Meta-quality cost");
    total
}
