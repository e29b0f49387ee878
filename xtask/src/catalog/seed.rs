//! Seed command implementation.

use catalogstore_core::product::Item;

/// Generate a deterministic set of sample items.
///
/// Ids and categories cycle through small sets so that several items share
/// an id across categories, and values and statuses repeat so that index
/// and filtered lookups have partitions worth scanning. Pairs stay unique
/// for the first 15 items; beyond that, later items replace earlier ones.
pub fn generate_seed_items(count: u32) -> Vec<Item> {
    let ids = ["keyboard", "mouse", "monitor", "webcam", "headset"];
    let categories = ["electronics", "office", "gaming"];

    (0..count)
        .map(|i| {
            let id = ids[i as usize % ids.len()];
            let category = categories[i as usize % categories.len()];
            let value = 10 * (1 + (i as i64 % 4));
            let status = (i as i64) % 2;
            Item::new(id, category, value, status)
        })
        .collect()
}
