use anyhow::{anyhow, bail, Result};
use objview_core::assemble::Assembler;
use objview_core::config::{EngineConfig, OwnerBytesEncoding, ReferencePolicy};
use objview_core::model::RawRecord;
use objview_core::parse::{detect_payload, parse_json_bytes, parse_response, PayloadKind};
use objview_core::version::ObjectVersion;

use crate::io::input;
use crate::output;

#[derive(Debug, Clone)]
pub struct InspectArgs {
    pub input: String,
    pub object_id: Option<String>,
    pub version: Option<String>,
    pub config: Option<String>,
    pub hex_owner: bool,
    pub surface_unresolved: bool,
}

pub fn run(args: InspectArgs) -> Result<()> {
    let mut cfg = match &args.config {
        Some(path) => input::read_config(path)?,
        None => EngineConfig::default(),
    };
    if args.hex_owner {
        cfg.owner.bytes_encoding = OwnerBytesEncoding::Hex;
    }
    if args.surface_unresolved {
        cfg.references = ReferencePolicy::Surface;
    }
    let assembler = Assembler::try_new(cfg)?;

    let bytes = input::read_input(&args.input)?;
    let value = parse_json_bytes(&bytes, assembler.config().limits.max_record_bytes)?;

    let vm = match detect_payload(&value) {
        PayloadKind::Response => {
            let mut resp = parse_response(value)?;
            if let Some(id) = args.object_id {
                resp.object_id = id;
            }
            if let Some(v) = args.version {
                resp.version = ObjectVersion::new(v);
            }
            assembler.assemble_response(&resp)
        }
        PayloadKind::Record => {
            let object_id = args
                .object_id
                .ok_or_else(|| anyhow!("--object-id is required for a bare record"))?;
            let version = args
                .version
                .ok_or_else(|| anyhow!("--version is required for a bare record"))?;
            let record = RawRecord::from_value(value)?;
            assembler.assemble(&record, &object_id, ObjectVersion::new(version))
        }
        PayloadKind::Unknown => bail!("input must be a JSON object"),
    };

    tracing::info!(object_id = %vm.object_id, diagnostics = vm.diagnostics.len(), "inspected object");
    output::print_view_model(&vm)
}
