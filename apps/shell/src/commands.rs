use anyhow::{Context, Result, bail};
use foundry::objects::printer::StdoutPrinter;
use foundry::{Info, Manifest, Registry};
use std::io::Write;

pub(crate) fn list(registry: &Registry, json: bool, out: &mut impl Write) -> Result<()> {
    let infos = registry.infos();
    if json {
        serde_json::to_writer_pretty(&mut *out, &infos)?;
        writeln!(out)?;
        return Ok(());
    }

    let width = registry.names().iter().map(String::len).max().unwrap_or(0);
    for factory in registry.list() {
        let info = factory.info();
        writeln!(out, "{:<width$}  {:<8}  {}", factory.name(), info.version, info.description)?;
    }
    Ok(())
}

pub(crate) fn info(registry: &Registry, name: &str, json: bool, out: &mut impl Write) -> Result<()> {
    let Some(factory) = registry.get(name) else {
        bail!("factory `{name}` does not exist, run `foundry list` to see registered names");
    };
    let info = factory.info();
    if json {
        serde_json::to_writer_pretty(&mut *out, info)?;
        writeln!(out)?;
        return Ok(());
    }

    write_info(info, out)
}

fn write_info(info: &Info, out: &mut impl Write) -> Result<()> {
    for (label, value) in [
        ("name", &info.name),
        ("description", &info.description),
        ("version", &info.version),
        ("author", &info.author),
        ("repository", &info.repository),
        ("license", &info.license),
    ] {
        if !value.is_empty() {
            writeln!(out, "{label:<12} {value}")?;
        }
    }
    Ok(())
}

pub(crate) fn create(registry: &Registry, manifest: &Manifest, out: &mut impl Write) -> Result<()> {
    let objects = manifest.build(registry).context("Manifest could not be instantiated")?;

    for (config, object) in manifest.objects.iter().zip(&objects) {
        writeln!(out, "created {} ({})", config.name, object.id())?;
    }
    for printer in objects.iter().filter_map(|object| object.downcast_ref::<StdoutPrinter>()) {
        printer.write_line(out, format_args!("{} object(s) ready", objects.len()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use foundry::ObjectConfig;

    fn registry() -> Registry {
        let registry = Registry::new();
        foundry::init(&registry).unwrap();
        registry
    }

    #[test]
    fn test_list_is_aligned_and_sorted() {
        let mut out = Vec::new();
        list(&registry(), false, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let names: Vec<_> = text.lines().filter_map(|line| line.split_whitespace().next()).collect();
        assert_eq!(names, ["file", "printer"]);
    }

    #[test]
    fn test_list_json_is_an_array_of_infos() {
        let mut out = Vec::new();
        list(&registry(), true, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["name"], "file");
        assert_eq!(value[1]["name"], "printer");
    }

    #[test]
    fn test_info_unknown_name() {
        let err = info(&registry(), "ghost", false, &mut Vec::new()).unwrap_err();
        assert!(err.to_string().contains("ghost"));
    }

    #[test]
    fn test_info_skips_empty_fields() {
        let mut out = Vec::new();
        info(&registry(), "printer", false, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("name         printer\n"));
        assert!(!text.contains("repository"));
    }

    #[test]
    fn test_create_reports_objects_and_greets_through_printers() {
        let manifest = Manifest {
            objects: vec![ObjectConfig::new("printer", foundry::options! { "prefix" => "> " })],
            ..Manifest::default()
        };
        let mut out = Vec::new();
        create(&registry(), &manifest, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "created printer (StdoutPrinter)\n> 1 object(s) ready\n"
        );
    }

    #[test]
    fn test_create_fails_on_unknown_factory() {
        let manifest =
            Manifest { objects: vec![ObjectConfig::raw("ghost", "")], ..Manifest::default() };
        let err = create(&registry(), &manifest, &mut Vec::new()).unwrap_err();
        assert!(format!("{err:#}").contains("factory `ghost` does not exist"));
    }
}
