pub mod fixtures;

use fixtures::*;
use foundry_registry::*;

#[test]
fn test_list_is_sorted_by_name() {
    let registry = Registry::new();
    registry.register("zeta", Info::named("zeta"), lamp).unwrap();
    registry.register("alpha", Info::named("alpha"), lamp).unwrap();
    registry.register("mid", Info::named("mid"), lamp).unwrap();

    assert_eq!(registry.names(), ["alpha", "mid", "zeta"]);
    let infos: Vec<_> = registry.infos().into_iter().map(|info| info.name).collect();
    assert_eq!(infos, ["alpha", "mid", "zeta"]);
}

#[test]
fn test_list_is_a_snapshot() {
    let registry = Registry::new();
    registry.register("one", Info::default(), lamp).unwrap();
    let snapshot = registry.list();

    registry.register("two", Info::default(), lamp).unwrap();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(registry.list().len(), 2);
}

#[test]
fn test_single_registration_round_trip() {
    let registry = Registry::new();
    registry.register("lamp", lamp_info(), lamp).unwrap();

    let list = registry.list();
    assert_eq!(list.len(), 1);
    let factory = registry.get("lamp").expect("registered");
    assert_eq!(factory.name(), "lamp");
    assert_eq!(factory.info(), &lamp_info());
    assert!(factory.has_constructor());
}

#[test]
fn test_create_passes_options_through() {
    let registry = Registry::new();
    registry.register("lamp", lamp_info(), lamp).unwrap();

    let object = registry.create("lamp", &Options::new().with("watts", 60.0)).unwrap();
    assert_eq!(object.id(), "Lamp");
    let lamp = object.downcast::<Lamp>().expect("a Lamp");
    assert_eq!(lamp.watts, 60);
}

#[test]
fn test_create_unknown_name() {
    let registry = Registry::new();
    let err = registry.create("missing", &Options::new()).unwrap_err();
    assert_eq!(err.name(), "missing");
    assert_eq!(
        err.to_string(),
        "factory `missing` does not exist, is its module registered?"
    );
}

#[test]
fn test_constructor_error_surfaces() {
    let registry = Registry::new();
    registry.register("lamp", lamp_info(), lamp).unwrap();

    let err = registry.create("lamp", &Options::new().with("watts", 0)).unwrap_err();
    assert!(matches!(err, RegistryError::Constructor { .. }));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_context_is_attached() {
    let registry = Registry::new();
    let err = registry.create("missing", &Options::new()).context("boot").unwrap_err();
    assert_eq!(
        err.to_string(),
        "factory `missing` does not exist (boot), is its module registered?"
    );
}

#[test]
fn test_create_from_config() {
    let registry = Registry::new();
    registry.register("lamp", lamp_info(), lamp).unwrap();

    let config: ObjectConfig =
        serde_json::from_str(r#"{"name":"lamp","options":{"watts":"25"}}"#).unwrap();
    let object = registry.create_from(&config).unwrap();
    assert_eq!(object.downcast_ref::<Lamp>().map(|lamp| lamp.watts), Some(25));

    let object = registry.must_create_from(&ObjectConfig::raw("lamp", "100"));
    assert_eq!(object.downcast_ref::<Lamp>().map(|lamp| lamp.watts), Some(100));
}

#[test]
fn test_hollow_factory() {
    let registry = Registry::new();
    registry.register_factory(Factory::new("hollow", Info::default(), None)).unwrap();
    assert!(matches!(
        registry.create("hollow", &Options::new()),
        Err(RegistryError::ConstructorUndefined { .. })
    ));
}

#[test]
#[should_panic(expected = "factory `lamp` is already registered")]
fn test_must_register_duplicate_panics() {
    let registry = Registry::new();
    registry.must_register("lamp", lamp_info(), lamp);
    registry.must_register("lamp", lamp_info(), lamp);
}

#[test]
#[should_panic(expected = "factory `missing` does not exist")]
fn test_must_create_unknown_panics() {
    let _ = Registry::new().must_create("missing", &Options::new());
}

#[test]
#[should_panic(expected = "failed to construct")]
fn test_must_create_constructor_error_panics() {
    let registry = Registry::new();
    registry.register("lamp", lamp_info(), lamp).unwrap();
    let _ = registry.must_create("lamp", &Options::new());
}
