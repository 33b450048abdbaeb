use std::any::Any;
use std::fmt;

/// The artifact a constructor produces.
///
/// The registry only requires an identifier; callers recover the concrete
/// type (or any capability it implements) through the downcasting helpers on
/// `dyn Object`. Use `#[foundry_derive::foundry_object]` to implement it.
pub trait Object: Any + fmt::Debug + Send + Sync {
    /// Identifier of the object kind, e.g. `"FileOpener"`.
    fn id(&self) -> &str;
}

impl dyn Object {
    /// Returns `true` if the object is a `T`.
    #[must_use]
    pub fn is<T: Object>(&self) -> bool {
        (self as &dyn Any).is::<T>()
    }

    #[must_use]
    pub fn downcast_ref<T: Object>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref()
    }

    #[must_use]
    pub fn downcast_mut<T: Object>(&mut self) -> Option<&mut T> {
        (self as &mut dyn Any).downcast_mut()
    }

    /// Converts a boxed object into its concrete type.
    ///
    /// # Errors
    /// Returns the original box when the object is not a `T`.
    pub fn downcast<T: Object>(self: Box<Self>) -> Result<Box<T>, Box<Self>> {
        if !self.is::<T>() {
            return Err(self);
        }
        let any: Box<dyn Any> = self;
        any.downcast().map_err(|_| unreachable!("type checked above"))
    }
}
