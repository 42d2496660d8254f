//! Boxed and wrapped basics
//!
//! Smart-pointer wrappers convert exactly like the type they wrap. This
//! is the portable rendition of platform-bridged boxed types: no foreign
//! object runtime is involved, so no capability marking is needed.
//!
//! Copyright (c) 2025 Remodel Team
//! Licensed under the MIT OR Apache-2.0 license

use super::Transformable;
use serde_json::Value;
use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

impl<T: Transformable> Transformable for Box<T> {
    fn from_value(value: &Value) -> Option<Self> {
        T::from_value(value).map(Box::new)
    }

    fn to_value(&self) -> Option<Value> {
        (**self).to_value()
    }
}

impl<T: Transformable> Transformable for Rc<T> {
    fn from_value(value: &Value) -> Option<Self> {
        T::from_value(value).map(Rc::new)
    }

    fn to_value(&self) -> Option<Value> {
        (**self).to_value()
    }
}

impl<T: Transformable> Transformable for Arc<T> {
    fn from_value(value: &Value) -> Option<Self> {
        T::from_value(value).map(Arc::new)
    }

    fn to_value(&self) -> Option<Value> {
        (**self).to_value()
    }
}

impl Transformable for Cow<'static, str> {
    fn from_value(value: &Value) -> Option<Self> {
        String::from_value(value).map(Cow::Owned)
    }

    fn to_value(&self) -> Option<Value> {
        Some(Value::String(self.clone().into_owned()))
    }
}
