use foundry_derive::foundry_error;
use std::borrow::Cow;

#[foundry_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn open() -> Result<String, DemoError> {
    std::fs::read_to_string("/definitely/not/here").context("Reading demo file")
}

fn main() {
    let err = open().unwrap_err();
    assert!(err.to_string().starts_with("IO error (Reading demo file)"));

    let internal: DemoError = "boom".into();
    assert_eq!(internal.to_string(), "Internal error: boom");

    let annotated: Result<(), DemoError> = Err(DemoError::from(String::from("late")));
    let annotated = annotated.context("step two").unwrap_err();
    assert_eq!(annotated.to_string(), "Internal error (step two): late");
}
