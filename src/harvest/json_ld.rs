//! Structured-data harvester over embedded JSON-LD documents.
//!
//! Walks every `script[type="application/ld+json"]` block depth-first.
//! Documents that fail to parse are skipped at that document and never
//! propagate. A node is in scope when it self-declares a product-like
//! type or was reached through its parent's variant relation; `@graph`
//! siblings keep whatever scope their parent had.
//!
//! Explicit material fields win over named additional properties, which
//! win over material phrases mined from description text.

use dom_query::{Document, Selection};
use serde_json::Value;

use crate::dom;
use crate::hits::RawHits;
use crate::options::Options;
use crate::patterns;
use crate::result::{MaterialCandidate, Provenance};
use crate::text;

/// Harvests one candidate from the page's structured product metadata.
#[must_use]
pub fn harvest(doc: &Document, options: &Options) -> Option<MaterialCandidate> {
    let mut explicit = RawHits::new(options.max_hits);
    let mut description = RawHits::new(options.max_hits);

    for script in doc.select(patterns::JSON_LD_SELECTOR).nodes() {
        let script_sel = Selection::from(*script);
        let json_text = dom::text_content(&script_sel).trim().to_string();
        if json_text.is_empty() {
            continue;
        }

        // Malformed documents are skipped, not propagated.
        let data: Value = match serde_json::from_str(&json_text) {
            Ok(value) => value,
            Err(_) => continue,
        };

        walk(&data, false, &mut explicit, &mut description, options);
    }

    if !explicit.is_empty() {
        super::finish(&explicit, Provenance::StructuredExplicit, options)
    } else {
        super::finish(&description, Provenance::StructuredDescription, options)
    }
}

/// Recursive visitor with the inherited in-scope flag threaded through.
fn walk(
    value: &Value,
    in_scope: bool,
    explicit: &mut RawHits,
    description: &mut RawHits,
    options: &Options,
) {
    match value {
        Value::Array(items) => {
            for item in items {
                walk(item, in_scope, explicit, description, options);
            }
        }
        Value::Object(map) => {
            let scoped = in_scope || is_product_type(value);
            if scoped {
                scan_node(map, explicit, description, options);
            }
            for (key, nested) in map {
                // Variants are per-SKU specializations and inherit scope
                // unconditionally; @graph is a flat sibling list that
                // keeps the current scope. Everything else starts over.
                let nested_scope = match key.as_str() {
                    "hasVariant" => true,
                    "@graph" => scoped,
                    _ => false,
                };
                walk(nested, nested_scope, explicit, description, options);
            }
        }
        _ => {}
    }
}

/// Extracts material information from one in-scope node's direct fields.
fn scan_node(
    map: &serde_json::Map<String, Value>,
    explicit: &mut RawHits,
    description: &mut RawHits,
    options: &Options,
) {
    for (key, value) in map {
        if text::is_material_field_name(key) {
            harvest_field(value, explicit, options);
        }
    }

    if !explicit.is_full() {
        if let Some(Value::Array(properties)) = map.get("additionalProperty") {
            for property in properties {
                let Some(prop) = property.as_object() else {
                    continue;
                };
                let named_material = prop
                    .get("name")
                    .and_then(Value::as_str)
                    .is_some_and(text::mentions_material_concept);
                if named_material {
                    if let Some(value) = prop.get("value") {
                        harvest_field(value, explicit, options);
                    }
                }
            }
        }
    }

    // Description text is mined only while no explicit field has hit.
    if explicit.is_empty() {
        if let Some(desc) = map.get("description").and_then(Value::as_str) {
            harvest_description(desc, description);
        }
    }
}

/// Splits a field value (string, or arrays of strings recursively
/// flattened) into entries and accumulates them. Explicit fields are
/// trusted: no candidate predicate, only the noise excluder.
fn harvest_field(value: &Value, explicit: &mut RawHits, options: &Options) {
    match value {
        Value::String(raw) => {
            for part in patterns::ENTRY_SPLIT.split(raw) {
                let entry = text::normalize(part);
                if entry.is_empty()
                    || entry.chars().count() > options.entry_max
                    || text::is_excluded(&entry)
                {
                    continue;
                }
                explicit.push(&entry);
            }
        }
        Value::Array(items) => {
            for item in items {
                harvest_field(item, explicit, options);
            }
        }
        _ => {}
    }
}

/// Keeps delimiter-separated description chunks that pass the full
/// material-candidate predicate.
fn harvest_description(desc: &str, description: &mut RawHits) {
    for part in patterns::ENTRY_SPLIT.split(desc) {
        let chunk = text::normalize(part);
        if text::is_material_candidate(&chunk) {
            description.push(&chunk);
        }
    }
}

/// True iff the node self-declares a product-like `@type` (string or
/// array form, case-insensitive).
fn is_product_type(value: &Value) -> bool {
    let Some(type_val) = value.as_object().and_then(|obj| obj.get("@type")) else {
        return false;
    };
    match type_val {
        Value::String(name) => is_product_name(name),
        Value::Array(names) => names
            .iter()
            .filter_map(Value::as_str)
            .any(is_product_name),
        _ => false,
    }
}

fn is_product_name(name: &str) -> bool {
    matches!(
        name.to_lowercase().as_str(),
        "product" | "productgroup" | "productmodel" | "individualproduct"
    )
}
