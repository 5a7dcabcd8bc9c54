// Dweve PropTree - Ordered Property Trees and Text Encodings
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Structural binding between typed records and property trees.
//!
//! A type takes part by implementing [`Bind`]. Scalars read and write a
//! single leaf; `Option`, `Vec` and maps recurse into their contents; and
//! records list their fields with [`bind_record!`]:
//!
//! ```rust
//! use proptree_bind::{bind_record, from_tree, to_tree};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Endpoint {
//!     host: String,
//!     port: u16,
//!     aliases: Vec<String>,
//! }
//! bind_record!(Endpoint { host, port, aliases as "alias" });
//!
//! let endpoint = Endpoint {
//!     host: "localhost".into(),
//!     port: 8080,
//!     aliases: vec!["lo".into()],
//! };
//! let tree = to_tree(&endpoint).unwrap();
//! assert_eq!(tree.get("port").and_then(|p| p.value()), Some("8080"));
//! assert_eq!(from_tree::<Endpoint>(&tree).unwrap(), endpoint);
//! ```
//!
//! Reading goes through [`FromTree`], which reports an absent field as
//! [`TreeErrorKind::PathNotFound`] unless it is permissive. Writing goes
//! through [`ToTree`], which can be limited to one branch of the record.
//!
//! A field name is looked up as a child first and under `<xmlattr>` second,
//! so records bind the same way to element and attribute XML. The empty
//! name stands for the current node itself.
//!
//! [`TreeErrorKind::PathNotFound`]: proptree_core::TreeErrorKind::PathNotFound

mod collections;
mod from_tree;
mod scalar;
mod to_tree;

pub use from_tree::FromTree;
pub use proptree_core::{Path, Tree, TreeError, TreeResult};
pub use scalar::{Scalar, TIMESTAMP_FORMAT};
pub use to_tree::ToTree;

/// A value that can be read from and written to a tree.
///
/// `name` is the field's key relative to the binder's current path; the
/// empty name means the current node.
pub trait Bind {
    fn bind_from(&mut self, name: &str, from: &mut FromTree<'_>) -> TreeResult<()>;
    fn bind_to(&self, name: &str, to: &mut ToTree<'_>) -> TreeResult<()>;
}

/// Read a `T` from the whole tree, failing on any absent field.
pub fn from_tree<T: Bind + Default>(tree: &Tree) -> TreeResult<T> {
    let mut value = T::default();
    FromTree::new(tree).bind(&mut value)?;
    Ok(value)
}

/// Write `value` into a new tree.
pub fn to_tree<T: Bind>(value: &T) -> TreeResult<Tree> {
    let mut tree = Tree::new();
    ToTree::new(&mut tree).bind(value)?;
    Ok(tree)
}

/// Implement [`Bind`] for types that are [`Scalar`]s.
///
/// ```rust
/// use proptree_bind::{bind_scalar, Scalar};
///
/// #[derive(Debug, Default, PartialEq)]
/// enum Level { #[default] Low, High }
///
/// impl Scalar for Level {
///     fn from_text(text: &str) -> Result<Self, String> {
///         match text {
///             "low" => Ok(Level::Low),
///             "high" => Ok(Level::High),
///             other => Err(format!("unknown level {other}")),
///         }
///     }
///     fn to_text(&self) -> String {
///         match self { Level::Low => "low".into(), Level::High => "high".into() }
///     }
/// }
///
/// bind_scalar!(Level);
/// ```
#[macro_export]
macro_rules! bind_scalar {
    ($($ty:ty),+ $(,)?) => {$(
        impl $crate::Bind for $ty {
            fn bind_from(
                &mut self,
                name: &str,
                from: &mut $crate::FromTree<'_>,
            ) -> $crate::TreeResult<()> {
                from.scalar(name, self)
            }

            fn bind_to(&self, name: &str, to: &mut $crate::ToTree<'_>) -> $crate::TreeResult<()> {
                to.scalar(name, self)
            }
        }
    )+};
}

/// Implement [`Bind`] for a record by listing its fields in visiting order.
///
/// A field binds under its own name unless renamed with `as "key"`. At least
/// one field must be listed.
///
/// ```rust,compile_fail
/// use proptree_bind::bind_record;
///
/// #[derive(Default)]
/// struct Empty {}
/// bind_record!(Empty {});
/// ```
#[macro_export]
macro_rules! bind_record {
    ($ty:ty { $($field:ident $(as $key:literal)?),+ $(,)? }) => {
        impl $crate::Bind for $ty {
            fn bind_from(
                &mut self,
                name: &str,
                from: &mut $crate::FromTree<'_>,
            ) -> $crate::TreeResult<()> {
                from.descend(name, |from| {
                    $(
                        $crate::Bind::bind_from(
                            &mut self.$field,
                            $crate::__field_key!($field $(as $key)?),
                            from,
                        )?;
                    )+
                    Ok(())
                })?;
                Ok(())
            }

            fn bind_to(&self, name: &str, to: &mut $crate::ToTree<'_>) -> $crate::TreeResult<()> {
                to.descend(name, |to| {
                    to.ensure();
                    $(
                        $crate::Bind::bind_to(
                            &self.$field,
                            $crate::__field_key!($field $(as $key)?),
                            to,
                        )?;
                    )+
                    Ok(())
                })
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __field_key {
    ($field:ident as $key:literal) => {
        $key
    };
    ($field:ident) => {
        stringify!($field)
    };
}
