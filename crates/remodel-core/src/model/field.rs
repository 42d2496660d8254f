//! Field descriptors and per-type field tables
//!
//! A [`FieldDescriptor`] packages everything the drivers need to move one
//! field of a model between its typed form and JSON: the stable field
//! name plus four monomorphized accessors. The accessors are emitted by
//! the [`crate::fields!`] macro, so classification dispatch is resolved
//! statically on the declared field type and no memory-layout knowledge
//! is ever involved.
//!
//! Copyright (c) 2025 Remodel Team
//! Licensed under the MIT OR Apache-2.0 license

use super::Fields;
use serde_json::Value;
use std::any::Any;

type ApplyFn<T> = Box<dyn Fn(&mut T, &Value) -> bool + Send + Sync>;
type AssignFn<T> = Box<dyn Fn(&mut T, Box<dyn Any>) -> bool + Send + Sync>;
type TakeFn<T> = Box<dyn Fn(&T) -> Option<Value> + Send + Sync>;
type TakeRawFn<T> = Box<dyn Fn(&T) -> Box<dyn Any> + Send + Sync>;

/// Introspected metadata and accessors for one field of a model.
pub struct FieldDescriptor<T> {
    name: &'static str,
    apply: ApplyFn<T>,
    assign: AssignFn<T>,
    take: TakeFn<T>,
    take_raw: TakeRawFn<T>,
}

impl<T> FieldDescriptor<T> {
    /// Build a descriptor from the field name and its four accessors.
    ///
    /// `apply` converts a JSON value with the default classification rules
    /// and assigns on success; `assign` writes an already-converted value,
    /// downcasting to the field type; `take` reads the field back out as
    /// JSON; `take_raw` clones the field value behind `Any` for custom
    /// serializers.
    pub fn new(
        name: &'static str,
        apply: impl Fn(&mut T, &Value) -> bool + Send + Sync + 'static,
        assign: impl Fn(&mut T, Box<dyn Any>) -> bool + Send + Sync + 'static,
        take: impl Fn(&T) -> Option<Value> + Send + Sync + 'static,
        take_raw: impl Fn(&T) -> Box<dyn Any> + Send + Sync + 'static,
    ) -> Self {
        FieldDescriptor {
            name,
            apply: Box::new(apply),
            assign: Box::new(assign),
            take: Box::new(take),
            take_raw: Box::new(take_raw),
        }
    }

    /// The stable field name; also the identity under which [`super::Mapper`]
    /// rules are registered.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Convert `value` with the default rules for the declared field type
    /// and assign it. Returns whether the field was assigned.
    pub fn apply(&self, instance: &mut T, value: &Value) -> bool {
        (self.apply)(instance, value)
    }

    /// Assign an already-converted value, downcasting to the field type.
    /// Returns whether the field was assigned.
    pub fn assign(&self, instance: &mut T, converted: Box<dyn Any>) -> bool {
        (self.assign)(instance, converted)
    }

    /// Read the field back out as its default JSON representation.
    pub fn take(&self, instance: &T) -> Option<Value> {
        (self.take)(instance)
    }

    /// Clone the field value behind `Any`, for custom to-JSON closures.
    pub fn take_raw(&self, instance: &T) -> Box<dyn Any> {
        (self.take_raw)(instance)
    }

    /// Re-target this descriptor through a projection into an embedding
    /// type, used by the `..base` splice of [`crate::fields!`].
    fn project<U, R, M>(self, project_ref: R, project_mut: M) -> FieldDescriptor<U>
    where
        T: 'static,
        R: Fn(&U) -> &T + Copy + Send + Sync + 'static,
        M: Fn(&mut U) -> &mut T + Copy + Send + Sync + 'static,
    {
        let FieldDescriptor { name, apply, assign, take, take_raw } = self;
        FieldDescriptor {
            name,
            apply: Box::new(move |m, v| apply(project_mut(m), v)),
            assign: Box::new(move |m, any| assign(project_mut(m), any)),
            take: Box::new(move |m| take(project_ref(m))),
            take_raw: Box::new(move |m| take_raw(project_ref(m))),
        }
    }
}

impl<T> std::fmt::Debug for FieldDescriptor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldDescriptor").field("name", &self.name).finish()
    }
}

/// Splice another `Fields` type's descriptors into an embedding type,
/// projected through the embedding field. The spliced descriptors come
/// first in the embedding type's table, so embedded (base) fields precede
/// the declaring type's own.
pub fn embed<U, T, R, M>(project_ref: R, project_mut: M) -> Vec<FieldDescriptor<U>>
where
    T: Fields + 'static,
    R: Fn(&U) -> &T + Copy + Send + Sync + 'static,
    M: Fn(&mut U) -> &mut T + Copy + Send + Sync + 'static,
{
    T::fields()
        .into_iter()
        .map(|descriptor| descriptor.project(project_ref, project_mut))
        .collect()
}

/// The ordered, name-deduplicated descriptor list for one model type.
///
/// Order equals registration order (embedded fields first), reused
/// identically by both drivers. On a name collision the later descriptor
/// replaces the earlier one in place: base-relative position is kept
/// while the overriding accessor wins.
#[derive(Debug)]
pub struct FieldTable<T> {
    fields: Vec<FieldDescriptor<T>>,
}

impl<T> FieldTable<T> {
    pub fn new(raw: Vec<FieldDescriptor<T>>) -> Self {
        let mut fields: Vec<FieldDescriptor<T>> = Vec::with_capacity(raw.len());
        for descriptor in raw {
            match fields.iter().position(|f| f.name == descriptor.name) {
                Some(i) => fields[i] = descriptor,
                None => fields.push(descriptor),
            }
        }
        FieldTable { fields }
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldDescriptor<T>> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
