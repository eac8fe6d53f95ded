//! View model assembly.
//!
//! Runs the owner decoder, the type normalizer and the field classifier over one
//! object record and collects the results into a [`ViewModel`].
//!
//! Assembly never fails. Anything that cannot be derived is left absent or empty
//! and, where useful, explained by a diagnostic on the view model. The
//! `Assembler` holds only its configuration, so one instance can be shared across
//! threads and reused for any number of records.

use serde_json::Value;

use crate::classify::{classify_field, is_name_key, DISPLAY_KEY};
use crate::config::{validate_config, EngineConfig};
use crate::diagnostics::Diagnostics;
use crate::errors::ObjviewResult;
use crate::keys;
use crate::model::{
    kind_name, ClassifiedField, DescriptionExtras, RawRecord, ScalarValue, ViewModel,
};
use crate::normalize::{is_type_string, normalize_type};
use crate::owner::decode_owner;
use crate::parse::ObjectResponse;
use crate::version::ObjectVersion;

/// Keys the assembler renders itself and keeps away from the classifier.
const WITHHELD_KEYS: &[&str] = &[keys::TYPE, keys::OWNER, keys::READ_ONLY];

#[derive(Debug, Clone, Default)]
pub struct Assembler {
    cfg: EngineConfig,
}

impl Assembler {
    pub fn new(cfg: EngineConfig) -> Self {
        Self { cfg }
    }

    /// Like [`Assembler::new`], rejecting invalid configuration.
    pub fn try_new(cfg: EngineConfig) -> ObjviewResult<Self> {
        validate_config(&cfg)?;
        Ok(Self { cfg })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.cfg
    }

    pub fn assemble(&self, record: &RawRecord, object_id: &str, version: ObjectVersion) -> ViewModel {
        let mut diags = Diagnostics::new();

        let type_label = record
            .get(keys::TYPE)
            .and_then(Value::as_str)
            .map(|t| normalize_type(t, &self.cfg.type_label.std_lib_prefix));

        let owner = record
            .get(keys::OWNER)
            .and_then(|raw| decode_owner(raw, &self.cfg.owner, &mut diags));

        let title = record
            .iter()
            .find(|(k, _)| is_name_key(k))
            .and_then(|(_, v)| v.as_str())
            .map(str::to_string);

        let read_only = read_only_flag(record.get(keys::READ_ONLY), &mut diags);

        let mut properties = Vec::new();
        let mut references = Vec::new();
        let mut unresolved = Vec::new();
        for (key, value) in record.iter() {
            if WITHHELD_KEYS.contains(&key.as_str()) {
                continue;
            }
            match classify_field(key, value, self.cfg.references) {
                ClassifiedField::Property { mut property } => {
                    if self.cfg.type_label.normalize_inline {
                        if let ScalarValue::Text(s) = &property.value {
                            if is_type_string(s) {
                                property.value = ScalarValue::Text(normalize_type(
                                    s,
                                    &self.cfg.type_label.std_lib_prefix,
                                ));
                            }
                        }
                    }
                    properties.push(property);
                }
                ClassifiedField::Reference { reference } => references.push(reference),
                ClassifiedField::Unresolved { name } => {
                    diags
                        .push_info(
                            "classify.unresolved_reference",
                            format!("field {name} looks like a reference but has no reference shape"),
                        )
                        .with_data("field", name.as_str())
                        .with_data("kind", kind_name(value));
                    unresolved.push(name);
                }
                ClassifiedField::Suppressed { .. } => {}
            }
        }

        tracing::debug!(
            object_id,
            properties = properties.len(),
            references = references.len(),
            "assembled view model"
        );

        ViewModel {
            object_id: object_id.to_string(),
            version,
            type_label,
            owner,
            title,
            read_only,
            properties,
            references,
            unresolved,
            description: description_extras(record),
            display: record.get(DISPLAY_KEY).filter(|v| !v.is_null()).cloned(),
            diagnostics: diags.into_vec(),
        }
    }

    pub fn assemble_response(&self, response: &ObjectResponse) -> ViewModel {
        self.assemble(&response.record, &response.object_id, response.version.clone())
    }
}

/// Assemble with the default configuration.
pub fn assemble(record: &RawRecord, object_id: &str, version: ObjectVersion) -> ViewModel {
    Assembler::default().assemble(record, object_id, version)
}

/// Tri-state read-only flag. Older records carry it as the string `"true"`.
fn read_only_flag(raw: Option<&Value>, diags: &mut Diagnostics) -> Option<bool> {
    match raw? {
        Value::Null => None,
        Value::Bool(b) => Some(*b),
        Value::String(s) => Some(s == "true"),
        other => {
            diags
                .push_info("record.read_only_kind", "read-only flag ignored")
                .with_data("kind", kind_name(other));
            None
        }
    }
}

fn description_extras(record: &RawRecord) -> DescriptionExtras {
    DescriptionExtras {
        contract_id: record
            .get(keys::CONTRACT_ID)
            .and_then(crate::classify::bytes_target),
        eth_address: record
            .get(keys::ETH_ADDRESS)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
        eth_token_id: record.get(keys::ETH_TOKEN_ID).and_then(|v| match v {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReferencePolicy;
    use crate::model::ObjectReference;
    use serde_json::json;

    fn record(v: Value) -> RawRecord {
        RawRecord::from_value(v).unwrap()
    }

    #[test]
    fn withheld_keys_never_become_properties() {
        let r = record(json!({
            "objType": "0x2::devnet_nft::DevNetNFT",
            "owner": "SingleOwner(k#me)",
            "readonly": "true",
            "url": "ipfs://x"
        }));
        let vm = assemble(&r, "0x1", 1u64.into());
        let names: Vec<&str> = vm.properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["url"]);
        assert_eq!(vm.type_label.as_deref(), Some("devnet_nft::DevNetNFT"));
        assert_eq!(vm.owner.as_ref().map(|o| o.as_str()), Some("me"));
        assert_eq!(vm.read_only, Some(true));
    }

    #[test]
    fn read_only_is_tri_state() {
        let mut d = Diagnostics::new();
        assert_eq!(read_only_flag(None, &mut d), None);
        assert_eq!(read_only_flag(Some(&json!(false)), &mut d), Some(false));
        assert_eq!(read_only_flag(Some(&json!("false")), &mut d), Some(false));
        assert!(d.is_empty());
        assert_eq!(read_only_flag(Some(&json!(1)), &mut d), None);
        assert_eq!(d.len(), 1);
    }

    #[test]
    fn title_takes_first_name_key_only_if_string() {
        let vm = assemble(&record(json!({"Name": "Hero", "nickname": "H"})), "0x1", 1u64.into());
        assert_eq!(vm.title.as_deref(), Some("Hero"));

        let vm = assemble(&record(json!({"name": 5, "nickname": "H"})), "0x1", 1u64.into());
        assert_eq!(vm.title, None);
    }

    #[test]
    fn inline_type_strings_are_normalized() {
        let r = record(json!({"coin_type": "0x2::sui::SUI", "memo": "see 0x2::sui::SUI"}));
        let vm = assemble(&r, "0x1", 1u64.into());
        assert_eq!(vm.properties[0].value, ScalarValue::Text("sui::SUI".into()));
        assert_eq!(vm.properties[1].value, ScalarValue::Text("see 0x2::sui::SUI".into()));

        let mut cfg = EngineConfig::default();
        cfg.type_label.normalize_inline = false;
        let vm = Assembler::new(cfg).assemble(&r, "0x1", 1u64.into());
        assert_eq!(vm.properties[0].value, ScalarValue::Text("0x2::sui::SUI".into()));
    }

    #[test]
    fn surface_policy_collects_unresolved() {
        let mut cfg = EngineConfig::default();
        cfg.references = ReferencePolicy::Surface;
        let r = record(json!({"owned_count": 3, "balance": 1}));
        let vm = Assembler::new(cfg).assemble(&r, "0x1", 1u64.into());
        assert_eq!(vm.unresolved, vec!["owned_count".to_string()]);
        assert_eq!(vm.properties.len(), 1);
        assert!(vm.references.is_empty());
        assert_eq!(vm.diagnostics[0].code, "classify.unresolved_reference");

        let vm = assemble(&r, "0x1", 1u64.into());
        assert!(vm.unresolved.is_empty());
        assert!(vm.diagnostics.is_empty());
    }

    #[test]
    fn description_extras_and_display() {
        let r = record(json!({
            "contract_id": {"bytes": "c0ffee"},
            "ethAddress": "0xdead",
            "ethTokenId": 77,
            "display": {"url": "https://img"}
        }));
        let vm = assemble(&r, "0x1", 1u64.into());
        assert_eq!(vm.description.contract_id.as_deref(), Some("c0ffee"));
        assert_eq!(vm.description.eth_address.as_deref(), Some("0xdead"));
        assert_eq!(vm.description.eth_token_id.as_deref(), Some("77"));
        assert_eq!(vm.display, Some(json!({"url": "https://img"})));
        assert!(matches!(
            &vm.references[..],
            [ObjectReference::SingleReference { name, .. }] if name == "contract_id"
        ));
    }

    #[test]
    fn empty_record_yields_empty_view_model() {
        let vm = assemble(&RawRecord::default(), "0x1", "9".into());
        assert_eq!(vm.type_label, None);
        assert_eq!(vm.owner, None);
        assert_eq!(vm.title, None);
        assert_eq!(vm.read_only, None);
        assert!(vm.properties.is_empty() && vm.references.is_empty());
        assert_eq!(vm.version.as_str(), "9");
    }

    #[test]
    fn try_new_rejects_invalid_config() {
        let mut cfg = EngineConfig::default();
        cfg.owner.address_len = 0;
        assert!(Assembler::try_new(cfg).is_err());
    }
}
