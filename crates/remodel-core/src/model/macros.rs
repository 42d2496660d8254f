//! Declarative field registration
//!
//! Rust has no runtime field enumeration, so models register their fields
//! explicitly: [`fields!`](crate::fields) emits the [`super::Fields`]
//! implementation (one descriptor per listed field, in declaration order)
//! together with the `Transformable` implementation that lets the model
//! nest inside other models and containers. The type itself still opts
//! into mapping by implementing [`super::Mappable`], usually with an
//! empty block:
//!
//! ```
//! use remodel_core::{fields, Mappable};
//!
//! #[derive(Default, Clone)]
//! struct User {
//!     name: String,
//!     age: i64,
//! }
//!
//! fields!(User { name, age });
//! impl Mappable for User {}
//! ```
//!
//! A `..field` splice embeds another registered type's descriptors ahead
//! of the declaring type's own, projected through the named field. This
//! is the base-before-derived ordering of a model hierarchy expressed as
//! composition. Field types must implement `Transformable` and `Clone`.
//!
//! Copyright (c) 2025 Remodel Team
//! Licensed under the MIT OR Apache-2.0 license

/// Register the mapped fields of a model type.
///
/// ```
/// use remodel_core::{fields, Mappable};
///
/// #[derive(Default, Clone)]
/// struct Account {
///     id: i64,
///     email: String,
/// }
///
/// #[derive(Default, Clone)]
/// struct Admin {
///     account: Account,
///     level: u8,
/// }
///
/// fields!(Account { id, email });
/// impl Mappable for Account {}
///
/// // Account's fields map through `admin.account`, ahead of `level`.
/// fields!(Admin { ..account, level });
/// impl Mappable for Admin {}
/// ```
#[macro_export]
macro_rules! fields {
    ($ty:ty { $(..$base:ident,)* $($field:ident),* $(,)? }) => {
        impl $crate::model::Fields for $ty {
            fn fields() -> ::std::vec::Vec<$crate::model::FieldDescriptor<Self>> {
                let mut fields: ::std::vec::Vec<$crate::model::FieldDescriptor<Self>> =
                    ::std::vec::Vec::new();
                $(
                    fields.extend($crate::model::field::embed(
                        |m: &Self| &m.$base,
                        |m: &mut Self| &mut m.$base,
                    ));
                )*
                $(
                    fields.push($crate::model::FieldDescriptor::new(
                        stringify!($field),
                        |m: &mut Self, value: &$crate::Value| {
                            match $crate::convert::Transformable::from_value(value) {
                                ::std::option::Option::Some(converted) => {
                                    m.$field = converted;
                                    true
                                }
                                ::std::option::Option::None => false,
                            }
                        },
                        |m: &mut Self, converted: ::std::boxed::Box<dyn ::std::any::Any>| {
                            match converted.downcast() {
                                ::std::result::Result::Ok(converted) => {
                                    m.$field = *converted;
                                    true
                                }
                                ::std::result::Result::Err(_) => false,
                            }
                        },
                        |m: &Self| $crate::convert::Transformable::to_value(&m.$field),
                        |m: &Self| {
                            ::std::boxed::Box::new(::std::clone::Clone::clone(&m.$field))
                                as ::std::boxed::Box<dyn ::std::any::Any>
                        },
                    ));
                )*
                fields
            }
        }

        impl $crate::convert::Transformable for $ty {
            fn from_value(value: &$crate::Value) -> ::std::option::Option<Self> {
                $crate::mapping::from_value(value).ok()
            }

            fn to_value(&self) -> ::std::option::Option<$crate::Value> {
                ::std::option::Option::Some($crate::mapping::to_value(self))
            }
        }
    };
}

/// Register a raw-backed enum.
///
/// The enum converts through its raw values: the JSON value is first
/// coerced into the raw type with the full classification rules, then
/// matched against the declared cases, yielding nothing when no case
/// matches. Emits [`crate::transform::RawCoded`] plus the
/// `Transformable` routing.
///
/// ```
/// use remodel_core::raw_enum;
///
/// #[derive(Default, Clone, Copy, Debug, PartialEq)]
/// enum Status {
///     #[default]
///     Active,
///     Inactive,
/// }
///
/// raw_enum!(Status: str { Active => "active", Inactive => "inactive" });
///
/// #[derive(Default, Clone, Copy, Debug, PartialEq)]
/// enum Priority {
///     #[default]
///     Low,
///     High,
/// }
///
/// raw_enum!(Priority: i64 { Low => 1, High => 2 });
/// ```
#[macro_export]
macro_rules! raw_enum {
    ($ty:ty : str { $($variant:ident => $raw:literal),+ $(,)? }) => {
        impl $crate::transform::RawCoded for $ty {
            type Raw = ::std::string::String;

            fn from_raw(raw: &Self::Raw) -> ::std::option::Option<Self> {
                match raw.as_str() {
                    $( $raw => ::std::option::Option::Some(Self::$variant), )+
                    _ => ::std::option::Option::None,
                }
            }

            fn to_raw(&self) -> Self::Raw {
                match self {
                    $( Self::$variant => ::std::string::String::from($raw), )+
                }
            }
        }

        $crate::__raw_enum_transformable!($ty);
    };
    ($ty:ty : $raw_ty:ty { $($variant:ident => $raw:literal),+ $(,)? }) => {
        impl $crate::transform::RawCoded for $ty {
            type Raw = $raw_ty;

            fn from_raw(raw: &Self::Raw) -> ::std::option::Option<Self> {
                match *raw {
                    $( $raw => ::std::option::Option::Some(Self::$variant), )+
                    _ => ::std::option::Option::None,
                }
            }

            fn to_raw(&self) -> Self::Raw {
                match self {
                    $( Self::$variant => $raw, )+
                }
            }
        }

        $crate::__raw_enum_transformable!($ty);
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __raw_enum_transformable {
    ($ty:ty) => {
        impl $crate::convert::Transformable for $ty {
            fn from_value(value: &$crate::Value) -> ::std::option::Option<Self> {
                let raw = <<$ty as $crate::transform::RawCoded>::Raw as
                    $crate::convert::Transformable>::from_value(value)?;
                <$ty as $crate::transform::RawCoded>::from_raw(&raw)
            }

            fn to_value(&self) -> ::std::option::Option<$crate::Value> {
                $crate::convert::Transformable::to_value(
                    &<$ty as $crate::transform::RawCoded>::to_raw(self),
                )
            }
        }
    };
}
