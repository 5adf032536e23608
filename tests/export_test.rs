//! JSON export tests: document shape and file output.

use rulebook_import::record::SeededStamps;
use rulebook_import::{Converter, ExportRecord, ExportShape, JsonConfig, JsonExporter};
use serde_json::Value;
use tempfile::TempDir;

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn spells() -> Vec<ExportRecord> {
    let path = format!("{}/magias.html", FIXTURES_DIR);
    let html = std::fs::read_to_string(path).unwrap();
    Converter::new()
        .with_stamps(SeededStamps::new(5, 1_700_000_000_000))
        .spells(&html)
}

fn parse(json: &str) -> Value {
    serde_json::from_str(json).expect("exported JSON should parse")
}

#[test]
fn test_many_records_become_array() {
    let records = spells();
    let json = JsonExporter::new().to_string(&records).unwrap();
    let value = parse(&json);
    let items = value.as_array().expect("array");
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["name"], "MÃOS QUE CURAM");
    assert_eq!(items[0]["type"], "spell");
    assert_eq!(items[0]["system"]["spellType"], "SPELL.SPELL");
    assert_eq!(items[0]["system"]["ingredient"], "Argila");
}

#[test]
fn test_single_record_shape() {
    let records = spells();
    let single = &records[..1];

    let auto = parse(&JsonExporter::new().to_string(single).unwrap());
    assert!(auto.is_object());
    assert_eq!(auto["name"], "MÃOS QUE CURAM");

    let list = JsonExporter::with_config(JsonConfig {
        shape: ExportShape::List,
        pretty: false,
    });
    let listed = parse(&list.to_string(single).unwrap());
    assert_eq!(listed.as_array().map(Vec::len), Some(1));
}

#[test]
fn test_field_layout() {
    let records = spells();
    let value = parse(&JsonExporter::new().to_string(&records[..1]).unwrap());

    assert!(value["folder"].is_null());
    assert_eq!(value["img"], "icons/svg/item-bag.svg");
    assert_eq!(value["effects"], Value::Array(vec![]));
    assert!(value["flags"].as_object().unwrap().is_empty());
    assert_eq!(value["ownership"]["default"], 0);

    let stats = &value["_stats"];
    assert!(stats["compendiumSource"].is_null());
    assert!(stats["duplicateSource"].is_null());
    assert_eq!(stats["coreVersion"], "13.350");
    assert_eq!(stats["systemId"], "forbidden-lands");
    assert_eq!(stats["systemVersion"], "13.0.5");
    assert_eq!(stats["createdTime"], 1_700_000_000_000_i64);
    assert_eq!(stats["modifiedTime"], 1_700_000_000_000_i64);
    assert_eq!(stats["exportSource"]["worldId"], "forbidden-lands");
    assert!(
        stats["exportSource"]["uuid"]
            .as_str()
            .unwrap()
            .starts_with("Item.")
    );
}

#[test]
fn test_talent_system_keys() {
    let records = Converter::new()
        .with_stamps(SeededStamps::new(5, 0))
        .talents("<h3>FÚRIA</h3><p>Você grita.</p>");
    let value = parse(&JsonExporter::new().to_string(&records).unwrap());
    let system = &value["system"];
    assert_eq!(system["type"], "profession");
    assert_eq!(system["category"], "general");
    assert!(system["rollModifiers"].as_object().unwrap().is_empty());
    assert_eq!(system["description"], "<p>Você grita.</p>");
}

#[test]
fn test_export_to_file() {
    let records = spells();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("magias.json");

    JsonExporter::new().export_to_file(&records, &path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, JsonExporter::new().to_string(&records).unwrap());
    assert_eq!(parse(&written).as_array().map(Vec::len), Some(3));
}

#[test]
fn test_compact_output_is_single_line() {
    let records = spells();
    let compact = JsonExporter::with_config(JsonConfig {
        shape: ExportShape::Auto,
        pretty: false,
    });
    let json = compact.to_string(&records).unwrap();
    assert!(!json.contains('\n'));
    assert_eq!(parse(&json), parse(&JsonExporter::new().to_string(&records).unwrap()));
}
