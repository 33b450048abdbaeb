use std::borrow::Cow;

#[foundry_derive::foundry_error]
pub enum FileError {
    /// Neither `filename` nor a raw payload names a file.
    #[error("No file name given{}: set `filename` or pass the path as the payload", format_context(.context))]
    MissingFilename { context: Option<Cow<'static, str>> },

    #[error("Cannot open `{path}`{}: {source}", format_context(.context))]
    Open { path: String, source: std::io::Error, context: Option<Cow<'static, str>> },
}
