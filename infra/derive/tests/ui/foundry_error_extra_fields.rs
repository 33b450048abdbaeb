use foundry_derive::foundry_error;
use std::borrow::Cow;

#[derive(Debug, thiserror::Error)]
#[error("upstream failed")]
pub struct Upstream;

#[foundry_error]
pub enum DemoError {
    #[error("Step `{step}` failed{}: {source}", format_context(.context))]
    Step { step: String, source: Upstream, context: Option<Cow<'static, str>> },
}

fn main() {
    let err: Result<(), DemoError> =
        Err(DemoError::Step { step: "load".to_owned(), source: Upstream, context: None });
    let err = err.context("boot").unwrap_err();
    assert_eq!(err.to_string(), "Step `load` failed (boot): upstream failed");
}
