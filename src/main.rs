use assoc_map::{AssociativeMap, Value};
use log::{debug, info};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut map: AssociativeMap = [
        ("key1", Value::from("value1")),
        ("key2", Value::from("value2")),
    ]
    .into_iter()
    .collect();
    info!("created map with {} entries: {map}", map.size());

    let value = map.require("key1")?;
    info!("key1 => {value}");
    debug!(
        "contains 'value2': {}",
        map.contains_value(&Value::from("value2"))
    );

    map.put("count", Value::from(0));
    map.remove("key1");
    map.remove("count");
    info!("after removals: {map} (size {})", map.size());

    map.clear();
    info!("cleared, empty: {}", map.is_empty());

    Ok(())
}
