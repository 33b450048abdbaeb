use foundry::{Options, Registry, RegistryError, objects, options};

#[test]
fn init_registers_enabled_objects() {
    let registry = Registry::new();
    foundry::init(&registry).unwrap();

    assert_eq!(registry.names(), objects::ENABLED);
    assert!(objects::is_enabled("printer"));
    assert!(!objects::is_enabled("database"));
}

#[test]
fn init_twice_reports_duplicate() {
    let registry = Registry::new();
    foundry::init(&registry).unwrap();
    assert!(matches!(foundry::init(&registry), Err(RegistryError::Duplicate { .. })));
}

#[test]
fn global_facade_creates_and_aborts() {
    foundry::init(Registry::global()).unwrap();

    let printer = foundry::create("printer", &options! { "prefix" => "# " }).unwrap();
    assert!(printer.is::<objects::printer::StdoutPrinter>());

    let err = foundry::create("missing", &Options::new()).unwrap_err();
    assert_eq!(err.name(), "missing");

    let result = std::panic::catch_unwind(|| foundry::must_create("missing", &Options::new()));
    assert!(result.is_err());
}
