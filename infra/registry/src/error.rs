use std::borrow::Cow;

/// Boxed error returned by object constructors.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised while registering factories or creating objects.
#[foundry_derive::foundry_error]
pub enum RegistryError {
    /// A factory is already registered under this name. This is a programming
    /// error; the existing entry is left untouched.
    #[error("factory `{name}` is already registered{}", format_context(.context))]
    Duplicate { name: String, context: Option<Cow<'static, str>> },

    /// No factory is registered under this name.
    #[error("factory `{name}` does not exist{}, is its module registered?", format_context(.context))]
    NotFound { name: String, context: Option<Cow<'static, str>> },

    /// The factory was built without a constructor.
    #[error("constructor is not defined in factory `{name}`{}", format_context(.context))]
    ConstructorUndefined { name: String, context: Option<Cow<'static, str>> },

    /// The constructor itself failed.
    #[error("factory `{name}` failed to construct{}: {source}", format_context(.context))]
    Constructor { name: String, source: BoxError, context: Option<Cow<'static, str>> },
}

impl RegistryError {
    /// Name of the factory the error refers to.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Duplicate { name, .. }
            | Self::NotFound { name, .. }
            | Self::ConstructorUndefined { name, .. }
            | Self::Constructor { name, .. } => name,
        }
    }
}
