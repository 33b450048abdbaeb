use foundry_registry::Object;

#[foundry_derive::foundry_object(id = "Lamp")]
pub struct Lamp {
    watts: u32,
}

#[foundry_derive::foundry_object]
#[derive(Debug, Default)]
pub struct Unnamed;

#[test]
fn explicit_id_is_used() {
    let lamp = Lamp { watts: 40 };
    assert_eq!(lamp.id(), "Lamp");
    assert_eq!(lamp.watts, 40);
    assert!(format!("{lamp:?}").contains("watts"));
}

#[test]
fn struct_name_is_the_default_id() {
    let boxed: Box<dyn Object> = Box::new(Unnamed);
    assert_eq!(boxed.id(), "Unnamed");
    assert!(boxed.is::<Unnamed>());
}
