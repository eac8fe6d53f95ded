use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use objview_core::model::ViewModel;
use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

static JSON_MODE: AtomicBool = AtomicBool::new(false);

pub fn init(json: bool) {
    JSON_MODE.store(json, Ordering::Relaxed);
}

pub fn is_json() -> bool {
    JSON_MODE.load(Ordering::Relaxed)
}

pub fn print<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    println!("{s}");
    Ok(())
}

pub fn stdout() -> StandardStream {
    StandardStream::stdout(ColorChoice::Auto)
}

/// Print a view model: JSON in `--json` mode, sectioned text otherwise.
pub fn print_view_model(vm: &ViewModel) -> anyhow::Result<()> {
    if is_json() {
        return print(vm);
    }
    let mut out = stdout();
    render_text(&mut out, vm)?;
    Ok(())
}

fn header<W: WriteColor>(w: &mut W, title: &str) -> io::Result<()> {
    w.set_color(ColorSpec::new().set_bold(true))?;
    writeln!(w, "{title}")?;
    w.reset()
}

fn row<W: Write>(w: &mut W, label: &str, value: &str) -> io::Result<()> {
    writeln!(w, "  {label:<28}{value}")
}

pub fn render_text<W: WriteColor>(w: &mut W, vm: &ViewModel) -> io::Result<()> {
    if let Some(title) = &vm.title {
        w.set_color(ColorSpec::new().set_bold(true).set_fg(Some(Color::Cyan)))?;
        writeln!(w, "{title}")?;
        w.reset()?;
    }

    header(w, "Description")?;
    row(w, "Object ID", &vm.object_id)?;
    row(w, "Version", vm.version.as_str())?;
    if let Some(ro) = vm.read_only {
        row(w, "Read Only?", if ro { "True" } else { "False" })?;
    }
    row(w, "Type", vm.type_label.as_deref().unwrap_or("-"))?;
    row(w, "Owner", vm.owner.as_ref().map(|o| o.as_str()).unwrap_or("-"))?;
    if let Some(id) = &vm.description.contract_id {
        row(w, "Contract ID", id)?;
    }
    if let Some(addr) = &vm.description.eth_address {
        row(w, "Ethereum Contract Address", addr)?;
    }
    if let Some(token) = &vm.description.eth_token_id {
        row(w, "Ethereum Token ID", token)?;
    }

    if !vm.properties.is_empty() {
        header(w, "Properties")?;
        for p in &vm.properties {
            row(w, &p.label(), &p.value.to_string())?;
        }
    }

    if !vm.references.is_empty() {
        header(w, "Owned Objects")?;
        for r in &vm.references {
            writeln!(w, "  {}", r.label())?;
            for id in r.target_ids() {
                writeln!(w, "    {id}")?;
            }
        }
    }

    if !vm.unresolved.is_empty() {
        header(w, "Unresolved")?;
        for name in &vm.unresolved {
            writeln!(w, "  {name}")?;
        }
    }

    if !vm.diagnostics.is_empty() {
        w.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
        for d in &vm.diagnostics {
            writeln!(w, "{:?} {}: {}", d.level, d.code, d.message)?;
        }
        w.reset()?;
    }
    Ok(())
}
