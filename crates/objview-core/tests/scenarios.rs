//! End-to-end assembly scenarios over realistic object records.

use std::sync::Arc;
use std::thread;

use assert_matches::assert_matches;
use objview_core::parse::{parse_response_bytes, parse_record_bytes};
use objview_core::prelude::*;
use serde_json::json;

fn record(v: serde_json::Value) -> RawRecord {
    RawRecord::from_value(v).unwrap()
}

#[test]
fn coin_object() {
    let r = record(json!({
        "objType": "0x2::coin::Coin<SUI>",
        "owner": "AddressOwner(k#abc123)",
        "balance": 100,
        "owned_tokens": {"vec": [{"bytes": "id1"}, {"bytes": "id2"}]},
        "display": {"url": "https://example.com/coin.png"}
    }));

    let vm = assemble(&r, "0xc0", 3u64.into());

    assert_eq!(vm.type_label.as_deref(), Some("coin::Coin<SUI>"));
    assert_eq!(vm.owner.as_ref().map(CanonicalOwner::as_str), Some("abc123"));
    assert_eq!(
        vm.properties,
        vec![ScalarProperty { name: "balance".into(), value: ScalarValue::Number(100.into()) }]
    );
    assert_eq!(
        vm.references,
        vec![ObjectReference::ReferenceVector {
            name: "owned_tokens".into(),
            target_ids: vec!["id1".into(), "id2".into()],
        }]
    );
    assert!(vm.display.is_some());
    assert!(vm.diagnostics.is_empty());
}

#[test]
fn malformed_byte_owner_degrades_to_absent() {
    let r = record(json!({
        "objType": "0x2::object::Thing",
        "owner": {"AddressOwner": [1, 2, 3, 4, 5]},
        "level": 2
    }));

    let vm = assemble(&r, "0xbad", 1u64.into());

    assert_eq!(vm.owner, None);
    assert_eq!(vm.diagnostics.len(), 1);
    assert_eq!(vm.diagnostics[0].code, "owner.invalid_payload");
    assert_eq!(vm.diagnostics[0].level, DiagnosticLevel::Warning);
    assert_eq!(vm.properties.len(), 1);
}

#[test]
fn property_order_follows_record_order() {
    let r = record(json!({"k1": 1, "k2": "two", "k3": 3.5}));
    let vm = assemble(&r, "0x1", 1u64.into());
    let names: Vec<&str> = vm.properties.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["k1", "k2", "k3"]);
}

#[test]
fn nft_with_title_and_mixed_references() {
    let r = record(json!({
        "objType": "0x2::devnet_nft::DevNetNFT",
        "owner": "SingleOwner(k#0xfeed)",
        "name": "Example NFT",
        "description": "An NFT created by the wallet",
        "url": "ipfs://bafy",
        "contract_id": {"bytes": "0xcafe"},
        "objects": [{"bytes": "o1"}, {"bytes": "o2"}],
        "flags": {"fields": {"a": true}},
        "readonly": false
    }));

    let vm = assemble(&r, "0xnft", "12".into());

    assert_eq!(vm.title.as_deref(), Some("Example NFT"));
    assert_eq!(vm.owner.as_ref().map(CanonicalOwner::as_str), Some("0xfeed"));
    assert_eq!(vm.read_only, Some(false));

    let names: Vec<&str> = vm.properties.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["description", "url"]);
    assert_eq!(vm.properties[0].label(), "description");

    assert_eq!(vm.references.len(), 2);
    assert_matches!(&vm.references[0], ObjectReference::SingleReference { target_id, .. } if target_id == "0xcafe");
    assert_eq!(vm.references[1].target_ids(), vec!["o1", "o2"]);
    assert_eq!(vm.description.contract_id.as_deref(), Some("0xcafe"));
}

#[test]
fn hex_owner_rendering_via_config() {
    let mut cfg = EngineConfig::default();
    cfg.owner.bytes_encoding = OwnerBytesEncoding::Hex;
    let r = record(json!({"owner": {"AddressOwner": vec![0u8; 20]}}));
    let vm = Assembler::try_new(cfg).unwrap().assemble(&r, "0x1", 1u64.into());
    assert_eq!(vm.owner.map(|o| o.to_string()), Some(format!("0x{}", "00".repeat(20))));
}

#[test]
fn response_envelope_end_to_end() {
    let bytes = serde_json::to_vec(&json!({
        "status": "Exists",
        "details": {
            "objectRef": {"objectId": "0x00aa", "version": "5"},
            "object": {
                "objType": "0x2::coin::Coin<0x2::sui::SUI>",
                "owner": "AddressOwner(k#bob)",
                "value": 42
            }
        }
    }))
    .unwrap();

    let resp = parse_response_bytes(&bytes, 1024).unwrap();
    let vm = Assembler::default().assemble_response(&resp);
    assert_eq!(vm.object_id, "0x00aa");
    assert_eq!(vm.version.as_str(), "5");
    assert_eq!(vm.type_label.as_deref(), Some("coin::Coin<sui::SUI>"));

    let out = serde_json::to_value(&vm).unwrap();
    assert_eq!(out["objectId"], "0x00aa");
    assert_eq!(out["owner"], "bob");
    assert_eq!(out["properties"][0], json!({"name": "value", "value": 42}));
    assert!(out.get("diagnostics").is_none());
}

#[test]
fn bare_record_bytes() {
    let r = parse_record_bytes(br#"{"b": 1, "a": 2}"#, 64).unwrap();
    let vm = assemble(&r, "0x1", 1u64.into());
    assert_eq!(vm.properties[0].name, "b");
}

#[test]
fn shared_assembler_across_threads() {
    let assembler = Arc::new(Assembler::default());
    let r = Arc::new(record(json!({
        "owner": "AddressOwner(k#abc)",
        "balance": 1,
        "owned": {"vec": [{"bytes": "x"}]}
    })));
    let expected = assembler.assemble(&r, "0x1", 1u64.into());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let a = Arc::clone(&assembler);
            let r = Arc::clone(&r);
            thread::spawn(move || a.assemble(&r, "0x1", 1u64.into()))
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
}
