use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::fetch::{EMPTY_ASSETS_MARKER, Endpoints};
use crate::tags::derive_tags;

/// One record of a per-locale manifest, narrowed to the consumed fields.
/// Ids are numeric in the published data; anything else is a shape failure
/// at deserialization time.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEmote {
    pub id: i64,
    pub name: String,
    #[serde(rename = "inventoryIcon", default)]
    pub inventory_icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedName {
    pub name: String,
}

/// Merged per-id record: locale-independent metadata set once, plus one
/// display name per locale whose manifest carried the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateEmote {
    pub id: i64,
    #[serde(rename = "inventoryIcon")]
    pub inventory_icon: String,
    pub tags: Vec<String>,
    #[serde(rename = "localizedNames")]
    pub localized_names: BTreeMap<String, LocalizedName>,
}

/// Keyed by id; the BTreeMap gives the finalizer its ascending-id order and
/// serde_json stringifies the keys on serialization.
pub type AggregateMap = BTreeMap<i64, AggregateEmote>;

/// Rewrites a raw icon path as an absolute URL under the default locale's
/// asset tree. The empty-assets marker and the empty string both normalize
/// to an empty URL.
#[must_use]
pub fn normalize_icon_url(raw_icon: &str, endpoints: &Endpoints) -> String {
    if raw_icon == EMPTY_ASSETS_MARKER || raw_icon.is_empty() {
        return String::new();
    }

    let segment = raw_icon
        .split("SummonerEmotes/")
        .last()
        .map(str::to_lowercase)
        .unwrap_or_default();

    endpoints.icon_url(&segment)
}

/// Fold step of the aggregation: upserts every raw entry of one locale's
/// manifest into the map. `id` is set once on creation; the icon URL and
/// tags are recomputed on every occurrence (last locale wins should the
/// path ever differ across locales); the locale's display name is inserted
/// into `localizedNames`, overwriting any earlier entry for that locale.
#[must_use]
pub fn merge_locale_manifest(
    mut aggregate: AggregateMap,
    entries: &[RawEmote],
    locale: &str,
    endpoints: &Endpoints,
) -> AggregateMap {
    for raw in entries {
        let entry = aggregate.entry(raw.id).or_insert_with(|| AggregateEmote {
            id: raw.id,
            inventory_icon: String::new(),
            tags: Vec::new(),
            localized_names: BTreeMap::new(),
        });

        entry.inventory_icon = normalize_icon_url(&raw.inventory_icon, endpoints);
        entry.tags = derive_tags(&raw.inventory_icon);
        entry.localized_names.insert(
            locale.to_string(),
            LocalizedName {
                name: raw.name.clone(),
            },
        );
    }

    aggregate
}

/// Serializes the aggregate as a JSON object keyed by stringified id, keys
/// in ascending id order.
pub fn finalize_document(aggregate: &AggregateMap) -> Result<String> {
    Ok(serde_json::to_string(aggregate)?)
}
