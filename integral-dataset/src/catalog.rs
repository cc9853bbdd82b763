use crate::source::resource_name;
use integral_core::{DatasetVariant, Quadrant};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantInfo {
    pub id: DatasetVariant,
    pub label: &'static str,
    pub description: &'static str,
    pub resource: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuadrantInfo {
    pub id: Quadrant,
    pub code: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub variants: Vec<VariantInfo>,
}

impl QuadrantInfo {
    pub fn for_quadrant(quadrant: Quadrant) -> Self {
        Self {
            id: quadrant,
            code: quadrant.code(),
            title: quadrant.title(),
            description: quadrant.description(),
            variants: DatasetVariant::ALL
                .into_iter()
                .map(|variant| VariantInfo {
                    id: variant,
                    label: variant.label(),
                    description: variant.description(quadrant),
                    resource: resource_name(quadrant, variant),
                })
                .collect(),
        }
    }
}

/// Every quadrant with its selectable variants, in canonical order.
pub fn catalog() -> Vec<QuadrantInfo> {
    Quadrant::ALL.into_iter().map(QuadrantInfo::for_quadrant).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shape() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 4);
        assert!(catalog.iter().all(|q| q.variants.len() == 3));
        assert_eq!(catalog[0].code, "UL");
        assert_eq!(catalog[3].variants[2].resource, "lr_inc.csv");
    }

    #[test]
    fn test_catalog_serializes_ids() {
        let json = serde_json::to_value(QuadrantInfo::for_quadrant(Quadrant::Ll)).unwrap();
        assert_eq!(json["id"], "ll");
        assert_eq!(json["variants"][0]["id"], "neg");
        assert_eq!(json["variants"][0]["label"], "Poor");
    }
}
