//! # Archetype Cost

use tracing::{trace, warn};

use crate::catalog::archetypes::archetype;
use crate::cost::meta::meta_quality_point_cost;
use crate::points::Points;
use crate::types::BasicInfo;

/// Point cost of the current archetype.
///
/// A predefined archetype charges its fixed cost and ignores the selections.
/// Custom (and any id the catalog does not know) charges the meta-quality
/// total instead.
pub fn current_archetype_cost(info: &BasicInfo) -> Points {
    match archetype(&info.archetype_id) {
        Some(definition) if !definition.is_custom() => {
            trace!(archetype = definition.id, cost = definition.point_cost, "Fixed archetype cost");
            Points::from(definition.point_cost)
        }
        Some(_) => meta_quality_point_cost(info),
        None => {
            warn!(archetype = %info.archetype_id, "Unknown archetype, pricing selections instead");
            meta_quality_point_cost(info)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MetaQualityConfig, VulnerableConfig};

    #[test]
    fn test_predefined_archetype_uses_fixed_cost() {
        let info = BasicInfo {
            archetype_id: "artificial".into(),
            sources: vec!["technological".into(), "psi_source".into()],
            intrinsics: vec!["vulnerable".into()],
            ..BasicInfo::default()
        };
        assert_eq!(current_archetype_cost(&info).value(), -3);
    }

    #[test]
    fn test_predefined_archetype_ignores_configs() {
        let mut info = BasicInfo {
            archetype_id: "mutant".into(),
            ..BasicInfo::default()
        };
        let before = current_archetype_cost(&info);
        info.configs.insert(
            "vulnerable".into(),
            MetaQualityConfig::Vulnerable(VulnerableConfig {
                extra_boxes: Some(10),
            }),
        );
        assert_eq!(current_archetype_cost(&info), before);
    }

    #[test]
    fn test_custom_archetype_prices_selections() {
        let info = BasicInfo {
            sources: vec!["technological".into(), "psi_source".into()],
            permissions: vec!["super".into()],
            ..BasicInfo::default()
        };
        assert_eq!(current_archetype_cost(&info).value(), 10);
    }

    #[test]
    fn test_unknown_archetype_prices_selections_without_waiver() {
        let info = BasicInfo {
            archetype_id: "dragon".into(),
            sources: vec!["genetic".into()],
            ..BasicInfo::default()
        };
        assert_eq!(current_archetype_cost(&info).value(), 5);
    }
}
